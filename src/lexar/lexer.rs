use crate::lexar::token::{is_reserved, Token, TokenKind, RESERVED_WORDS};
use regex::Regex;
use std::sync::OnceLock;

/// Recognition patterns in priority order.
/// When several patterns could match at the same position the earliest one wins,
/// which is what keeps reserved words out of `Identifier`.
fn patterns() -> Vec<(TokenKind, String)> {
    vec![
        (
            TokenKind::Keyword,
            format!(r"\b(?:{})\b", RESERVED_WORDS.join("|")),
        ),
        (TokenKind::Identifier, r"\b[A-Za-z_][A-Za-z0-9_]*\b".into()),
        (TokenKind::Number, r"\b[0-9]+\b".into()),
        (TokenKind::AssignOp, "=".into()),
        (TokenKind::Semicolon, ";".into()),
        (TokenKind::Operator, r"[+\-*/]".into()),
        (TokenKind::Comparator, "[<>]".into()),
        (TokenKind::LeftParen, r"\(".into()),
        (TokenKind::RightParen, r"\)".into()),
        (TokenKind::LeftBrace, r"\{".into()),
        (TokenKind::RightBrace, r"\}".into()),
    ]
}

struct Scanner {
    regex: Regex,
    // Capture group `i + 1` belongs to `kinds[i]`
    kinds: Vec<TokenKind>,
}

fn scanner() -> &'static Scanner {
    static SCANNER: OnceLock<Scanner> = OnceLock::new();
    SCANNER.get_or_init(|| {
        let table = patterns();
        let alternation = table
            .iter()
            .map(|(_, pattern)| format!("({})", pattern))
            .collect::<Vec<_>>()
            .join("|");
        Scanner {
            regex: Regex::new(&alternation).unwrap(),
            kinds: table.into_iter().map(|(kind, _)| kind).collect(),
        }
    })
}

/// Splits `input` into tokens.
///
/// Never fails: characters that no pattern recognizes (whitespace, `#`, `!`, ...)
/// are skipped without producing a token. Word boundaries are checked against
/// the surrounding text, so `123abc` yields nothing at all.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let scanner = scanner();
    let mut tokens = Vec::new();

    let mut line: usize = 1;
    let mut col: usize = 1;
    let mut last = 0;

    for caps in scanner.regex.captures_iter(input) {
        let Some((group, m)) = (1..caps.len()).find_map(|i| caps.get(i).map(|m| (i, m))) else {
            continue;
        };

        // Walk the skipped span to keep line/col in sync
        for c in input[last..m.start()].chars() {
            if c == '\n' {
                line += 1;
                col = 1;
            } else {
                col += 1;
            }
        }

        let mut kind = scanner.kinds[group - 1];
        if kind == TokenKind::Identifier && is_reserved(m.as_str()) {
            kind = TokenKind::Keyword;
        }

        tokens.push(Token {
            kind,
            value: m.as_str(),
            line,
            col,
        });

        col += m.as_str().chars().count();
        last = m.end();
    }

    tokens
}
