//! Full flow: compile, load the runtime, normalize a tree, run matchers.

use treeforge::{MatcherSpec, ParseTree, compile, load_runtime};
use treeforge_ast::tables::RESERVED_SYMBOLS;

use crate::utils::{
    FakeGrammarCompiler, NoopAuxGenerator, expr_cache_root, expr_compile_config,
    expr_runtime_config,
};

#[test]
fn compile_then_normalize_a_parse_tree() {
    let (_root, paths) = expr_cache_root();

    compile(
        paths.clone(),
        Box::new(FakeGrammarCompiler::expr()),
        Box::new(NoopAuxGenerator),
        &expr_compile_config(),
        &expr_runtime_config(),
    )
    .unwrap();

    let runtime = load_runtime(&paths, expr_runtime_config()).unwrap();

    // expr node wrapping a NUMBER token covering "42"
    let tree = ParseTree::rule(
        0,
        0,
        vec![Some(ParseTree::terminal(RESERVED_SYMBOLS, 0, Some(1)))],
    );
    let ast = runtime.build_ast(&tree, &mut |_| {}).unwrap();

    assert_eq!(ast.kind, "expr");
    assert_eq!((ast.begin, ast.end), (0, 2));
    assert_eq!(ast.children.len(), 1);
    assert_eq!(ast.children[0].kind, ".NUMBER");
}

#[test]
fn compiled_matchers_fire_on_built_asts() {
    let (_root, paths) = expr_cache_root();

    let mut cc = expr_compile_config();
    cc.tree_matcher_specs = vec![MatcherSpec::new(
        "numbers",
        vec!["expr".into(), ".NUMBER".into()],
    )];

    compile(
        paths.clone(),
        Box::new(FakeGrammarCompiler::expr()),
        Box::new(NoopAuxGenerator),
        &cc,
        &expr_runtime_config(),
    )
    .unwrap();

    let runtime = load_runtime(&paths, expr_runtime_config()).unwrap();
    let tree = ParseTree::rule(
        0,
        0,
        vec![Some(ParseTree::terminal(RESERVED_SYMBOLS, 0, Some(1)))],
    );
    let ast = runtime.build_ast(&tree, &mut |_| {}).unwrap();

    let hits = runtime.run_matchers(&ast);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].matcher, "numbers");
    assert_eq!(hits[0].kind, ".NUMBER");
    assert_eq!((hits[0].begin, hits[0].end), (0, 2));
}

#[test]
fn invalid_tokens_surface_as_faults_not_failures() {
    let (_root, paths) = expr_cache_root();

    compile(
        paths.clone(),
        Box::new(FakeGrammarCompiler::expr()),
        Box::new(NoopAuxGenerator),
        &expr_compile_config(),
        &expr_runtime_config(),
    )
    .unwrap();

    let runtime = load_runtime(&paths, expr_runtime_config()).unwrap();

    let tree = ParseTree::rule(
        0,
        0,
        vec![
            Some(ParseTree::terminal(2, 3, Some(4))),
            Some(ParseTree::terminal(RESERVED_SYMBOLS, 5, Some(6))),
        ],
    );
    let mut faults = Vec::new();
    let ast = runtime
        .build_ast(&tree, &mut |fault| faults.push(fault))
        .unwrap();

    assert_eq!(faults.len(), 1);
    assert_eq!((faults[0].begin, faults[0].end), (3, 5));
    assert_eq!(ast.children.len(), 2);
}
