use crate::analyzer::types::AnalyzeResult;
use crate::analyzer::Analyzer;
use crate::lexar::token::TokenKind;
use crate::tac::BinOp;

// Two expression families share one grammar shape:
//   check_*  validates conditions and print arguments, never touches the 3AC log
//   emit_*   handles assignment right-hand sides and returns the operand name
//            holding each subresult

const BAD_FACTOR: &str = "Expected number, variable, or expression.";

impl<'a> Analyzer<'a> {
    /// Advance past an operator token accepted by `accept` and return it.
    fn match_operator(&mut self, accept: fn(BinOp) -> bool) -> Option<BinOp> {
        let tok = self.peek()?;
        if tok.kind != TokenKind::Operator {
            return None;
        }
        let op = BinOp::from_symbol(tok.value).filter(|op| accept(*op))?;
        self.advance();
        Some(op)
    }

    fn match_additive(&mut self) -> Option<BinOp> {
        self.match_operator(|op| !op.is_multiplicative())
    }

    fn match_multiplicative(&mut self) -> Option<BinOp> {
        self.match_operator(BinOp::is_multiplicative)
    }

    // ========== CHECKED ==========

    /// `arith ( COMPARATOR arith )?`
    pub(crate) fn check_expression(&mut self) -> AnalyzeResult<()> {
        self.check_arithmetic()?;
        if self.match_kind(TokenKind::Comparator) {
            self.check_arithmetic()?;
        }
        Ok(())
    }

    fn check_arithmetic(&mut self) -> AnalyzeResult<()> {
        self.check_term()?;
        while self.match_additive().is_some() {
            self.check_term()?;
        }
        Ok(())
    }

    fn check_term(&mut self) -> AnalyzeResult<()> {
        self.check_factor()?;
        while self.match_multiplicative().is_some() {
            self.check_factor()?;
        }
        Ok(())
    }

    fn check_factor(&mut self) -> AnalyzeResult<()> {
        if self.match_kind(TokenKind::Identifier) || self.match_kind(TokenKind::Number) {
            Ok(())
        } else if self.match_kind(TokenKind::LeftParen) {
            self.check_expression()?;
            self.consume(TokenKind::RightParen, "Expected ')' after expression.")?;
            Ok(())
        } else {
            Err(self.syntax_error(BAD_FACTOR))
        }
    }

    // ========== EMITTING ==========

    /// `termCode ( ('+'|'-') termCode )*`, left associative.
    pub(crate) fn emit_expression(&mut self) -> AnalyzeResult<String> {
        let mut left = self.emit_term()?;
        while let Some(op) = self.match_additive() {
            let right = self.emit_term()?;
            left = self.tac.emit_binary(left, op, right);
        }
        Ok(left)
    }

    fn emit_term(&mut self) -> AnalyzeResult<String> {
        let mut left = self.emit_factor()?;
        while let Some(op) = self.match_multiplicative() {
            let right = self.emit_factor()?;
            left = self.tac.emit_binary(left, op, right);
        }
        Ok(left)
    }

    /// A leaf yields its own lexeme; parentheses yield the inner result.
    /// Neither emits an instruction.
    fn emit_factor(&mut self) -> AnalyzeResult<String> {
        if self.match_kind(TokenKind::Number) || self.match_kind(TokenKind::Identifier) {
            let tok = self.previous().ok_or_else(|| self.syntax_error(BAD_FACTOR))?;
            Ok(tok.value.to_string())
        } else if self.match_kind(TokenKind::LeftParen) {
            let inner = self.emit_expression()?;
            self.consume(TokenKind::RightParen, "Expected ')' after expression.")?;
            Ok(inner)
        } else {
            Err(self.syntax_error(BAD_FACTOR))
        }
    }
}
