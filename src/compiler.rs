// Compilation pipeline for the minilang CLI.
// Loads a source file, tokenizes it, runs the analyzer, and reports either the
// symbol table and generated 3-address code or the first fatal diagnostic.

use crate::analyzer::{analyze, Analysis, Diagnostic};
use crate::diagnostics::print_diagnostic;
use crate::lexar::lexer::tokenize;
use crate::lexar::token::Token;
use anyhow::{bail, Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// File looked up when the input path is a directory.
pub const DEFAULT_ENTRY: &str = "main.minilang";

/// Options for controlling the compilation process.
/// These are set by the CLI.
pub struct CompileOptions {
    /// Path to a source file or a directory containing main.minilang
    pub input_path: PathBuf,
    /// Write the 3-address code listing to this file on success
    pub output_path: Option<PathBuf>,
    /// Enable developer mode (prints extra debug info)
    pub dev_mode: bool,
    /// Print the token stream before analysis
    pub print_tokens: bool,
    /// Print the symbol table and 3-address code on success
    pub print_report: bool,
    /// Use ANSI colors in diagnostics
    pub color: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("."),
            output_path: None,
            dev_mode: cfg!(debug_assertions),
            print_tokens: false,
            print_report: true,
            color: true,
        }
    }
}

/// Result of a compilation. At most one diagnostic is ever produced.
pub struct CompileResult {
    pub success: bool,
    pub error_count: usize,
    pub analysis: Option<Analysis>,
    pub diagnostic: Option<Diagnostic>,
}

/// Tokenize and analyze a source string.
pub fn check_source(source: &str) -> Result<Analysis, Diagnostic> {
    let tokens = tokenize(source);
    analyze(&tokens)
}

/// Finds the file to compile: the path itself, or `main.minilang` inside a directory.
pub fn resolve_input(input_path: &Path) -> Result<PathBuf> {
    if input_path.is_file() {
        return Ok(input_path.to_path_buf());
    }
    let main_file = input_path.join(DEFAULT_ENTRY);
    if !main_file.exists() {
        bail!("{} not found in {}", DEFAULT_ENTRY, input_path.display());
    }
    Ok(main_file)
}

/// One `(KIND, lexeme)` per line, headed like the report.
pub fn render_tokens(tokens: &[Token<'_>]) -> String {
    let mut out = String::from("Lexical Tokens:\n");
    for tok in tokens {
        let _ = writeln!(out, "{}", tok);
    }
    out
}

/// The success report: pass line, 3AC listing (if any), then the symbol table.
pub fn render_analysis(analysis: &Analysis) -> String {
    let mut out = String::from("Syntax Analysis: Passed.\n");
    if !analysis.code.is_empty() {
        out.push_str("Generated 3-Address Code:\n");
        out.push_str(&render_code(analysis));
    }
    out.push_str("Declared Variables (Symbol Table):\n");
    for name in analysis.symbols() {
        let _ = writeln!(out, "- {}", name);
    }
    out
}

/// Bare 3AC listing, one instruction per line.
pub fn render_code(analysis: &Analysis) -> String {
    let mut out = String::new();
    for instr in &analysis.code {
        let _ = writeln!(out, "{}", instr);
    }
    out
}

/// The main entry point for compiling a user project:
/// 1. Resolves and reads the source file
/// 2. Tokenizes it
/// 3. Runs syntax/semantic analysis with 3AC emission
/// 4. Prints the report or the diagnostic, and optionally writes the 3AC listing
///
/// I/O problems are returned as `Err`; a diagnostic is a normal, unsuccessful result.
pub fn compile_project(opts: CompileOptions) -> Result<CompileResult> {
    let input_path = resolve_input(&opts.input_path)?;
    if opts.dev_mode {
        eprintln!("DEBUG: input_path = {:?}", input_path);
    }

    let source = fs::read_to_string(&input_path)
        .with_context(|| format!("Failed to read {}", input_path.display()))?;

    let tokens = tokenize(&source);
    if opts.dev_mode {
        eprintln!("DEBUG: {} tokens", tokens.len());
    }
    if opts.print_tokens {
        print!("{}", render_tokens(&tokens));
    }

    match analyze(&tokens) {
        Ok(analysis) => {
            if opts.dev_mode {
                eprintln!(
                    "DEBUG: {} declared, {} instructions",
                    analysis.declared.len(),
                    analysis.code.len()
                );
            }
            if opts.print_report {
                print!("{}", render_analysis(&analysis));
            }
            if let Some(out_path) = &opts.output_path {
                fs::write(out_path, render_code(&analysis))
                    .with_context(|| format!("Failed to write {}", out_path.display()))?;
                if opts.dev_mode {
                    eprintln!("DEBUG: wrote 3AC to {:?}", out_path);
                }
            }
            Ok(CompileResult {
                success: true,
                error_count: 0,
                analysis: Some(analysis),
                diagnostic: None,
            })
        }
        Err(diag) => {
            print_diagnostic(
                &diag,
                &source,
                &input_path.display().to_string(),
                opts.color,
            );
            Ok(CompileResult {
                success: false,
                error_count: 1,
                analysis: None,
                diagnostic: Some(diag),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_analysis_report() {
        let analysis = check_source("int b; int a; a = 1 + b;").unwrap();
        assert_eq!(
            render_analysis(&analysis),
            "Syntax Analysis: Passed.\n\
             Generated 3-Address Code:\n\
             t0 = 1 + b\n\
             a = t0\n\
             Declared Variables (Symbol Table):\n\
             - a\n\
             - b\n"
        );
    }

    #[test]
    fn test_render_analysis_without_code() {
        let analysis = check_source("int x;").unwrap();
        let report = render_analysis(&analysis);
        assert!(!report.contains("Generated 3-Address Code:"));
        assert!(report.ends_with("- x\n"));
    }

    #[test]
    fn test_render_tokens() {
        let tokens = tokenize("x = 1;");
        assert_eq!(
            render_tokens(&tokens),
            "Lexical Tokens:\n(IDENTIFIER, x)\n(ASSIGN_OP, =)\n(NUMBER, 1)\n(SEMICOLON, ;)\n"
        );
    }
}
