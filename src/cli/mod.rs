use crate::compiler::{compile_project, CompileOptions};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI definition for the minilang front end.
#[derive(Parser)]
#[command(name = "minilang")]
#[command(about = "MiniLang tokenizer, checker and 3-address code generator")]
#[command(version)]
pub struct Cli {
    /// Disable ANSI colors in diagnostics
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print developer debug info to stderr
    #[arg(long, global = true)]
    pub dev: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Supported subcommands for the minilang CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Check a program and print its symbol table and 3-address code
    Check {
        /// Path to a .minilang file or a directory containing main.minilang
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Print the token stream (diagnostics are still reported)
    Tokens {
        /// Path to a .minilang file or a directory containing main.minilang
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Print tokens and the full report, optionally writing the 3-address code to a file
    Emit {
        /// Path to a .minilang file or a directory containing main.minilang
        #[arg(default_value = ".")]
        path: PathBuf,

        /// File to write the 3-address code listing to
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Entrypoint for CLI logic.
/// Returns exit code (0 for success, 1 for a diagnostic or I/O failure).
pub fn run_cli(cli: Cli) -> i32 {
    let base = CompileOptions {
        dev_mode: cli.dev,
        color: !cli.no_color,
        ..Default::default()
    };

    let opts = match cli.command {
        None => {
            println!("minilang - MiniLang front end");
            println!("Type `minilang --help` for usage");
            return 0;
        }
        Some(Commands::Check { path }) => CompileOptions {
            input_path: path,
            ..base
        },
        Some(Commands::Tokens { path }) => CompileOptions {
            input_path: path,
            print_tokens: true,
            print_report: false,
            ..base
        },
        Some(Commands::Emit { path, output }) => CompileOptions {
            input_path: path,
            output_path: output,
            print_tokens: true,
            ..base
        },
    };

    match compile_project(opts) {
        Ok(result) if result.success => 0,
        Ok(_) => 1,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    }
}
