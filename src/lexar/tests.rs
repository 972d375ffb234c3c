#[cfg(test)]
mod lexer_tests {
    use crate::lexar::lexer::tokenize;
    use crate::lexar::token::TokenKind;

    fn kinds_and_values(input: &str) -> Vec<(TokenKind, &str)> {
        tokenize(input)
            .into_iter()
            .map(|t| (t.kind, t.value))
            .collect()
    }

    #[test]
    fn test_declaration_and_assignment() {
        let tokens = kinds_and_values("int x; x = 1;");
        assert_eq!(
            tokens,
            vec![
                (TokenKind::Keyword, "int"),
                (TokenKind::Identifier, "x"),
                (TokenKind::Semicolon, ";"),
                (TokenKind::Identifier, "x"),
                (TokenKind::AssignOp, "="),
                (TokenKind::Number, "1"),
                (TokenKind::Semicolon, ";"),
            ]
        );
    }

    #[test]
    fn test_keywords() {
        let tokens = tokenize("int if else while print");
        assert_eq!(tokens.len(), 5);
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Keyword));
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        let tokens = kinds_and_values("integer iffy printer whiles");
        assert!(tokens.iter().all(|(k, _)| *k == TokenKind::Identifier));
        assert_eq!(tokens[0].1, "integer");
    }

    #[test]
    fn test_operators_and_delimiters() {
        let tokens = kinds_and_values("+ - * / < > = ; ( ) { }");
        let kinds: Vec<TokenKind> = tokens.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Operator,
                TokenKind::Operator,
                TokenKind::Operator,
                TokenKind::Operator,
                TokenKind::Comparator,
                TokenKind::Comparator,
                TokenKind::AssignOp,
                TokenKind::Semicolon,
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
            ]
        );
    }

    #[test]
    fn test_no_whitespace_needed() {
        let tokens = kinds_and_values("a=(b+12)*c;");
        assert_eq!(tokens.len(), 10);
        assert_eq!(tokens[5], (TokenKind::Number, "12"));
        assert_eq!(tokens[7], (TokenKind::Operator, "*"));
    }

    #[test]
    fn test_underscore_identifiers() {
        let tokens = kinds_and_values("_tmp my_var x2");
        assert_eq!(
            tokens,
            vec![
                (TokenKind::Identifier, "_tmp"),
                (TokenKind::Identifier, "my_var"),
                (TokenKind::Identifier, "x2"),
            ]
        );
    }

    #[test]
    fn test_unknown_characters_are_dropped() {
        let tokens = kinds_and_values("int x; x = 1 # 2;");
        assert!(tokens.iter().all(|(_, v)| *v != "#"));
        assert_eq!(tokens[5], (TokenKind::Number, "1"));
        assert_eq!(tokens[6], (TokenKind::Number, "2"));
    }

    #[test]
    fn test_comparison_operators_only_single_char() {
        // `==` and `<=` are not part of the language; they split into single tokens
        let tokens = kinds_and_values("a <= b");
        assert_eq!(
            tokens,
            vec![
                (TokenKind::Identifier, "a"),
                (TokenKind::Comparator, "<"),
                (TokenKind::AssignOp, "="),
                (TokenKind::Identifier, "b"),
            ]
        );
    }

    #[test]
    fn test_digits_glued_to_letters_produce_nothing() {
        assert!(tokenize("123abc").is_empty());
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t  \n").is_empty());
    }

    #[test]
    fn test_line_and_column_tracking() {
        let tokens = tokenize("int x;\n  x = 10;");
        assert_eq!((tokens[0].line, tokens[0].col), (1, 1));
        assert_eq!((tokens[1].line, tokens[1].col), (1, 5));
        assert_eq!((tokens[3].line, tokens[3].col), (2, 3));
        assert_eq!((tokens[5].line, tokens[5].col), (2, 7));
        assert_eq!((tokens[6].line, tokens[6].col), (2, 9));
    }

    #[test]
    fn test_token_display() {
        let tokens = tokenize("print(x);");
        assert_eq!(tokens[0].to_string(), "(KEYWORD, print)");
        assert_eq!(tokens[1].to_string(), "(LEFT_PAREN, ()");
        assert_eq!(tokens[2].to_string(), "(IDENTIFIER, x)");
    }
}
