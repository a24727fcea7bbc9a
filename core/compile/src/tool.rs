//! External tool invocation.
//!
//! The pipeline drives two external tools: the grammar compiler that turns
//! a grammar source into generated parser artifacts, and an optional
//! auxiliary data generator. Both sit behind traits so tests substitute
//! fakes and never spawn real processes.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{Context, Result};

use crate::errors::ToolError;

/// Everything a grammar compiler invocation needs to know.
#[derive(Debug)]
pub struct CompileJob<'a> {
    /// Cache directory the tool runs in; generated artifacts land here.
    pub cache_dir: &'a Path,
    /// Grammar file name, relative to `cache_dir`.
    pub grammar_file: &'a str,
    pub language: &'a str,
    pub generate_listener: bool,
    pub generate_visitor: bool,
}

/// Compiles a grammar source into generated parser artifacts.
pub trait GrammarCompiler {
    /// Runs the compiler for `job`, blocking until it finishes.
    ///
    /// # Errors
    ///
    /// Returns an error if the tool cannot be spawned or exits
    /// unsuccessfully.
    fn compile_grammar(&self, job: &CompileJob<'_>) -> Result<()>;
}

/// Generates the auxiliary data artifact for a language.
pub trait AuxDataGenerator {
    /// Writes auxiliary data to `out_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the generator cannot be spawned or exits
    /// unsuccessfully.
    fn generate(&self, out_path: &Path) -> Result<()>;
}

/// Invokes the ANTLR tool through a JVM subprocess.
///
/// The child runs with the cache directory as its working directory, its
/// stdin closed, and stdout/stderr inherited so tool diagnostics reach the
/// user directly.
#[derive(Debug, Clone)]
pub struct SubprocessGrammarCompiler {
    program: String,
    memory_cap: String,
    classpath: PathBuf,
    tool_class: String,
    /// Code generation target passed as `-Dlanguage=`.
    target: String,
}

impl SubprocessGrammarCompiler {
    #[must_use]
    pub fn new(classpath: PathBuf, target: impl Into<String>) -> Self {
        Self {
            program: "java".to_owned(),
            memory_cap: "-Xmx500M".to_owned(),
            classpath,
            tool_class: "org.antlr.v4.Tool".to_owned(),
            target: target.into(),
        }
    }
}

impl GrammarCompiler for SubprocessGrammarCompiler {
    fn compile_grammar(&self, job: &CompileJob<'_>) -> Result<()> {
        let mut command = Command::new(&self.program);
        command
            .arg(&self.memory_cap)
            .arg("-cp")
            .arg(&self.classpath)
            .arg(&self.tool_class)
            .arg("-long-messages")
            .arg(if job.generate_listener {
                "-listener"
            } else {
                "-no-listener"
            })
            .arg(if job.generate_visitor {
                "-visitor"
            } else {
                "-no-visitor"
            })
            .arg(format!("-Dlanguage={}", self.target))
            .arg(job.grammar_file)
            .current_dir(job.cache_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let status = command
            .status()
            .map_err(|source| ToolError::spawn(&self.program, source))?;
        if !status.success() {
            return Err(ToolError::exit_status(&self.program, status.code()).into());
        }
        Ok(())
    }
}

/// Runs an arbitrary command and redirects its stdout into the auxiliary
/// data file.
#[derive(Debug, Clone)]
pub struct SubprocessAuxGenerator {
    program: String,
    args: Vec<String>,
}

impl SubprocessAuxGenerator {
    #[must_use]
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl AuxDataGenerator for SubprocessAuxGenerator {
    fn generate(&self, out_path: &Path) -> Result<()> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ToolError::spawn(&self.program, source))?;
        if !output.status.success() {
            return Err(ToolError::exit_status(&self.program, output.status.code()).into());
        }
        std::fs::write(out_path, &output.stdout)
            .with_context(|| format!("Failed to write aux data to {}", out_path.display()))?;
        Ok(())
    }
}
