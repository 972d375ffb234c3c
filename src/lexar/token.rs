use std::fmt;

/// Words the tokenizer always classifies as `Keyword`.
pub const RESERVED_WORDS: [&str; 5] = ["int", "if", "else", "while", "print"];

pub fn is_reserved(word: &str) -> bool {
    RESERVED_WORDS.contains(&word)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,    // int, if, else, while, print
    Identifier, // variable names
    Number,     // integer literals

    // --- Operators ---
    AssignOp,   // =
    Operator,   // + - * /
    Comparator, // < >

    // --- Delimiters & Punctuation ---
    Semicolon,  // ;
    LeftParen,  // (
    RightParen, // )
    LeftBrace,  // {
    RightBrace, // }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::AssignOp => "ASSIGN_OP",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Comparator => "COMPARATOR",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
        };
        f.write_str(name)
    }
}

/// A classified lexeme borrowed from the source text.
/// `line` and `col` are 1-based and point at the first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub value: &'a str,
    pub line: usize,
    pub col: usize,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.kind, self.value)
    }
}
