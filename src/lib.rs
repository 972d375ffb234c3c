// MiniLang front end library
// Exports the tokenizer, analyzer and 3AC model for testing and external use

pub mod analyzer;
pub mod cli;
pub mod compiler;
pub mod diagnostics;
pub mod lexar;
pub mod tac;

// Re-export commonly used types
pub use analyzer::{analyze, Analysis, Analyzer, Diagnostic, DiagnosticKind, Found};
pub use compiler::check_source;
pub use lexar::lexer::tokenize;
pub use lexar::token::{Token, TokenKind};
pub use tac::{BinOp, TacInstr};
