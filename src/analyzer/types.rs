use crate::lexar::token::{Token, TokenKind};
use crate::tac::TacInstr;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    SyntaxError,
    Redeclaration,
    UndeclaredVariable,
}

impl DiagnosticKind {
    pub fn code(self) -> &'static str {
        match self {
            DiagnosticKind::SyntaxError => "E1001",
            DiagnosticKind::Redeclaration => "E1002",
            DiagnosticKind::UndeclaredVariable => "E1003",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::SyntaxError => write!(f, "Syntax Error"),
            DiagnosticKind::Redeclaration => write!(f, "Redeclaration Error"),
            DiagnosticKind::UndeclaredVariable => write!(f, "Semantic Error"),
        }
    }
}

/// Where analysis stopped: an owned copy of the offending token, or the end of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Found {
    Token {
        value: String,
        kind: TokenKind,
        line: usize,
        col: usize,
    },
    EndOfInput,
}

impl Found {
    pub fn location(&self) -> Option<(usize, usize)> {
        match self {
            Found::Token { line, col, .. } => Some((*line, *col)),
            Found::EndOfInput => None,
        }
    }
}

impl From<&Token<'_>> for Found {
    fn from(tok: &Token<'_>) -> Self {
        Found::Token {
            value: tok.value.to_string(),
            kind: tok.kind,
            line: tok.line,
            col: tok.col,
        }
    }
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Token { value, kind, .. } => write!(f, "({}, {})", kind, value),
            Found::EndOfInput => write!(f, "EOF"),
        }
    }
}

/// The single fatal error an analysis run can end with.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {message} at token: {found}")]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    pub found: Found,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>, found: Found) -> Self {
        Self {
            kind,
            message: message.into(),
            found,
        }
    }
}

pub type AnalyzeResult<T> = Result<T, Diagnostic>;

/// Successful outcome of a run: every declared name and the 3AC log in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub declared: HashSet<String>,
    pub code: Vec<TacInstr>,
}

impl Analysis {
    pub fn code_lines(&self) -> Vec<String> {
        self.code.iter().map(|instr| instr.to_string()).collect()
    }

    /// Declared names sorted, for stable display.
    pub fn symbols(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.declared.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
