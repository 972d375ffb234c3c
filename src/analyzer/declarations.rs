use crate::analyzer::types::{AnalyzeResult, Diagnostic, DiagnosticKind, Found};
use crate::analyzer::Analyzer;
use crate::lexar::token::TokenKind;

impl<'a> Analyzer<'a> {
    /// `int IDENT ;`. The leading `int` is already consumed.
    pub(crate) fn parse_declaration(&mut self) -> AnalyzeResult<()> {
        let name_tok = self.consume_identifier("Expected variable name after 'int'.")?;

        if self.is_declared(name_tok.value) {
            return Err(Diagnostic::new(
                DiagnosticKind::Redeclaration,
                format!("Variable '{}' already declared.", name_tok.value),
                Found::from(name_tok),
            ));
        }
        self.declared.insert(name_tok.value.to_string());

        self.consume(TokenKind::Semicolon, "Expected ';' after declaration.")?;
        Ok(())
    }

    /// `IDENT = exprCode ;`
    ///
    /// The target must be declared before the right-hand side is looked at.
    /// On success the right-hand side's instructions are followed by `name = result`.
    pub(crate) fn parse_assignment(&mut self) -> AnalyzeResult<()> {
        let name_tok = self.consume_identifier("Expected variable name.")?;
        if !self.is_declared(name_tok.value) {
            return Err(self.undeclared(name_tok));
        }

        self.consume(TokenKind::AssignOp, "Expected '=' in assignment.")?;
        let result = self.emit_expression()?;
        self.tac.emit_copy(name_tok.value, result);

        self.consume(TokenKind::Semicolon, "Expected ';' after assignment.")?;
        Ok(())
    }
}
