pub mod analyzer;
pub mod declarations;
pub mod expressions;
pub mod statements;
pub mod types;

pub use analyzer::{analyze, Analyzer};
pub use types::{Analysis, AnalyzeResult, Diagnostic, DiagnosticKind, Found};
