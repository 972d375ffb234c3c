use std::fmt;

// Three-address code emitted for assignment right-hand sides.
// Operands are plain names: a variable, a number literal, or a temporary `tN`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(BinOp::Add),
            "-" => Some(BinOp::Sub),
            "*" => Some(BinOp::Mul),
            "/" => Some(BinOp::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }

    /// `*` and `/` bind tighter than `+` and `-`.
    pub fn is_multiplicative(self) -> bool {
        matches!(self, BinOp::Mul | BinOp::Div)
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TacInstr {
    // dest = lhs op rhs
    Binary {
        dest: String,
        lhs: String,
        op: BinOp,
        rhs: String,
    },
    // dest = src
    Copy { dest: String, src: String },
}

impl TacInstr {
    pub fn dest(&self) -> &str {
        match self {
            TacInstr::Binary { dest, .. } | TacInstr::Copy { dest, .. } => dest,
        }
    }
}

impl fmt::Display for TacInstr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TacInstr::Binary { dest, lhs, op, rhs } => {
                write!(f, "{} = {} {} {}", dest, lhs, op, rhs)
            }
            TacInstr::Copy { dest, src } => write!(f, "{} = {}", dest, src),
        }
    }
}
