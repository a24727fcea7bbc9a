//! Compilation pipeline, end to end against a temporary cache root.

use treeforge::{RuntimeModifier, SchemaError, compile};

use crate::utils::{
    FakeGrammarCompiler, NoopAuxGenerator, expr_cache_root, expr_compile_config,
    expr_runtime_config,
};

#[test]
fn compiles_expr_grammar_into_cache() {
    let (_root, paths) = expr_cache_root();

    let outcome = compile(
        paths.clone(),
        Box::new(FakeGrammarCompiler::expr()),
        Box::new(NoopAuxGenerator),
        &expr_compile_config(),
        &expr_runtime_config(),
    )
    .unwrap();

    assert!(!outcome.cache_hit);
    assert_eq!(outcome.cache_dir, paths.language_dir("Expr"));
    assert!(paths.grammar_copy_path("Expr", "g4").exists());

    let modifier = RuntimeModifier::load(&paths.modifier_path("Expr")).unwrap();
    assert_eq!(modifier.rule_name_map, vec!["expr".to_owned()]);
    assert_eq!(modifier.symbol_name_map[3], Some(".NUMBER".to_owned()));
}

#[test]
fn recompile_hits_the_cache() {
    let (_root, paths) = expr_cache_root();
    let cc = expr_compile_config();
    let rc = expr_runtime_config();

    let first = compile(
        paths.clone(),
        Box::new(FakeGrammarCompiler::expr()),
        Box::new(NoopAuxGenerator),
        &cc,
        &rc,
    )
    .unwrap();
    assert!(!first.cache_hit);

    let second = compile(
        paths,
        Box::new(FakeGrammarCompiler::expr()),
        Box::new(NoopAuxGenerator),
        &cc,
        &rc,
    )
    .unwrap();
    assert!(second.cache_hit);
}

#[test]
fn undeclared_terminal_fails_compilation() {
    let (_root, paths) = expr_cache_root();
    let mut rc = expr_runtime_config();
    rc.rules.remove(".NUMBER");

    let err = compile(
        paths.clone(),
        Box::new(FakeGrammarCompiler::expr()),
        Box::new(NoopAuxGenerator),
        &expr_compile_config(),
        &rc,
    )
    .unwrap_err();

    assert_eq!(
        err.downcast_ref::<SchemaError>(),
        Some(&SchemaError::MissingRules {
            rules: vec![".NUMBER".to_owned()]
        })
    );
    assert!(!paths.modifier_path("Expr").exists());
}

#[test]
fn extra_declared_rule_fails_compilation() {
    let (_root, paths) = expr_cache_root();
    let mut rc = expr_runtime_config();
    rc.declare("phantom");

    let err = compile(
        paths,
        Box::new(FakeGrammarCompiler::expr()),
        Box::new(NoopAuxGenerator),
        &expr_compile_config(),
        &rc,
    )
    .unwrap_err();

    assert_eq!(
        err.downcast_ref::<SchemaError>(),
        Some(&SchemaError::ExtraRules {
            rules: vec!["phantom".to_owned()]
        })
    );
}
