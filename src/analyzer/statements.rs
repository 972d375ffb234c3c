use crate::analyzer::types::AnalyzeResult;
use crate::analyzer::Analyzer;
use crate::lexar::token::TokenKind;

impl<'a> Analyzer<'a> {
    pub(crate) fn parse_statement(&mut self) -> AnalyzeResult<()> {
        if self.match_keyword("int") {
            self.parse_declaration()
        } else if self.check(TokenKind::Identifier) {
            self.parse_assignment()
        } else if self.match_keyword("if") {
            self.parse_if_statement()
        } else if self.match_keyword("while") {
            self.parse_while_statement()
        } else if self.match_keyword("print") {
            self.parse_print_statement()
        } else {
            Err(self.syntax_error("Expected a valid statement."))
        }
    }

    // Conditions are only syntax checked and never lowered to 3AC.
    fn parse_if_statement(&mut self) -> AnalyzeResult<()> {
        self.consume(TokenKind::LeftParen, "Expected '(' after 'if'.")?;
        self.check_expression()?;
        self.consume(TokenKind::RightParen, "Expected ')' after condition.")?;
        self.parse_block()?;

        if self.match_keyword("else") {
            self.parse_block()?;
        }
        Ok(())
    }

    fn parse_while_statement(&mut self) -> AnalyzeResult<()> {
        self.consume(TokenKind::LeftParen, "Expected '(' after 'while'.")?;
        self.check_expression()?;
        self.consume(TokenKind::RightParen, "Expected ')' after condition.")?;
        self.parse_block()
    }

    /// `print ( expr ) ;`
    ///
    /// Only a leading identifier is looked up in the symbol table. Identifiers
    /// further into the expression are syntax checked but not resolved.
    fn parse_print_statement(&mut self) -> AnalyzeResult<()> {
        self.consume(TokenKind::LeftParen, "Expected '(' after 'print'.")?;

        if let Some(tok) = self.peek() {
            if tok.kind == TokenKind::Identifier && !self.is_declared(tok.value) {
                return Err(self.undeclared(tok));
            }
        }

        self.check_expression()?;
        self.consume(TokenKind::RightParen, "Expected ')' after expression.")?;
        self.consume(TokenKind::Semicolon, "Expected ';' after print statement.")?;
        Ok(())
    }

    fn parse_block(&mut self) -> AnalyzeResult<()> {
        self.consume(TokenKind::LeftBrace, "Expected '{' to start block.")?;
        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            self.parse_statement()?;
        }
        self.consume(TokenKind::RightBrace, "Expected '}' to close block.")?;
        Ok(())
    }
}
