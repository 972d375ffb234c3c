#[cfg(test)]
mod tac_tests {
    use crate::tac::{BinOp, TacBuilder, TacInstr};

    #[test]
    fn test_temporaries_count_from_zero() {
        let mut builder = TacBuilder::new();
        assert_eq!(builder.next_tmp(), "t0");
        assert_eq!(builder.next_tmp(), "t1");
        assert_eq!(builder.next_tmp(), "t2");
    }

    #[test]
    fn test_emit_binary_returns_destination() {
        let mut builder = TacBuilder::new();
        let t0 = builder.emit_binary("2".into(), BinOp::Mul, "3".into());
        let t1 = builder.emit_binary("1".into(), BinOp::Add, t0.clone());
        builder.emit_copy("x", t1.clone());

        assert_eq!(t0, "t0");
        assert_eq!(t1, "t1");
        let lines: Vec<String> = builder.finish().iter().map(|i| i.to_string()).collect();
        assert_eq!(lines, vec!["t0 = 2 * 3", "t1 = 1 + t0", "x = t1"]);
    }

    #[test]
    fn test_copy_does_not_consume_a_temporary() {
        let mut builder = TacBuilder::new();
        builder.emit_copy("a", "b".into());
        assert_eq!(builder.next_tmp(), "t0");
        assert_eq!(builder.instrs[0].dest(), "a");
    }

    #[test]
    fn test_binop_symbols() {
        for symbol in ["+", "-", "*", "/"] {
            let op = BinOp::from_symbol(symbol).unwrap();
            assert_eq!(op.to_string(), symbol);
        }
        assert!(BinOp::from_symbol("<").is_none());
        assert!(BinOp::Mul.is_multiplicative());
        assert!(!BinOp::Sub.is_multiplicative());
    }

    #[test]
    fn test_instr_display() {
        let instr = TacInstr::Binary {
            dest: "t4".into(),
            lhs: "a".into(),
            op: BinOp::Div,
            rhs: "t3".into(),
        };
        assert_eq!(instr.to_string(), "t4 = a / t3");
    }
}
