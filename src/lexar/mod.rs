pub mod lexer;
pub mod token;

pub use lexer::tokenize;
pub use token::{is_reserved, Token, TokenKind, RESERVED_WORDS};

#[cfg(test)]
mod tests;
