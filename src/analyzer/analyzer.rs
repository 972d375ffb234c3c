use crate::analyzer::types::{Analysis, AnalyzeResult, Diagnostic, DiagnosticKind, Found};
use crate::lexar::token::{Token, TokenKind};
use crate::tac::TacBuilder;
use std::collections::HashSet;

/// Single-pass parser, symbol table and 3AC emitter.
///
/// The cursor only moves forward; `previous` is the one allowed lookback.
/// All state lives here and is dropped with the analyzer, so every run starts
/// with an empty symbol table and temporaries counting from `t0`.
pub struct Analyzer<'a> {
    pub(crate) tokens: &'a [Token<'a>],
    pub(crate) current: usize,
    pub(crate) declared: HashSet<String>, // flat global scope
    pub(crate) tac: TacBuilder,
}

/// Analyze a whole token sequence in one go.
pub fn analyze<'a>(tokens: &'a [Token<'a>]) -> AnalyzeResult<Analysis> {
    Analyzer::new(tokens).analyze()
}

impl<'a> Analyzer<'a> {
    pub fn new(tokens: &'a [Token<'a>]) -> Self {
        Self {
            tokens,
            current: 0,
            declared: HashSet::new(),
            tac: TacBuilder::new(),
        }
    }

    /// Consume every statement until the end of input.
    /// Stops at the first diagnostic; nothing partial is returned.
    pub fn analyze(mut self) -> AnalyzeResult<Analysis> {
        while !self.is_at_end() {
            self.parse_statement()?;
        }
        Ok(Analysis {
            declared: self.declared,
            code: self.tac.finish(),
        })
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.declared.contains(name)
    }

    // ========== CURSOR ==========

    pub(crate) fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    pub(crate) fn peek(&self) -> Option<&'a Token<'a>> {
        self.tokens.get(self.current)
    }

    pub(crate) fn previous(&self) -> Option<&'a Token<'a>> {
        self.current
            .checked_sub(1)
            .and_then(|idx| self.tokens.get(idx))
    }

    pub(crate) fn advance(&mut self) -> Option<&'a Token<'a>> {
        let tok = self.tokens.get(self.current);
        if tok.is_some() {
            self.current += 1;
        }
        tok
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        matches!(self.peek(), Some(tok) if tok.kind == kind)
    }

    /// Advance past the next token if it has the given kind.
    pub(crate) fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Advance past the next token if it is the given keyword.
    pub(crate) fn match_keyword(&mut self, keyword: &str) -> bool {
        match self.peek() {
            Some(tok) if tok.kind == TokenKind::Keyword && tok.value == keyword => {
                self.advance();
                true
            }
            _ => false,
        }
    }

    pub(crate) fn consume(&mut self, kind: TokenKind, msg: &str) -> AnalyzeResult<&'a Token<'a>> {
        match self.peek() {
            Some(tok) if tok.kind == kind => {
                self.advance();
                Ok(tok)
            }
            _ => Err(self.syntax_error(msg)),
        }
    }

    pub(crate) fn consume_identifier(&mut self, msg: &str) -> AnalyzeResult<&'a Token<'a>> {
        self.consume(TokenKind::Identifier, msg)
    }

    // ========== DIAGNOSTICS ==========

    /// Token under the cursor, or end of input.
    pub(crate) fn found(&self) -> Found {
        self.peek().map(Found::from).unwrap_or(Found::EndOfInput)
    }

    pub(crate) fn syntax_error(&self, msg: &str) -> Diagnostic {
        Diagnostic::new(DiagnosticKind::SyntaxError, msg, self.found())
    }

    pub(crate) fn undeclared(&self, tok: &Token<'_>) -> Diagnostic {
        Diagnostic::new(
            DiagnosticKind::UndeclaredVariable,
            format!("Variable '{}' not declared.", tok.value),
            Found::from(tok),
        )
    }
}
