use crate::tac::{BinOp, TacInstr};

/// Append-only log of 3AC instructions plus the temporary-name counter.
/// One builder lives for exactly one analysis run, so temporaries restart at `t0`.
#[derive(Debug, Default)]
pub struct TacBuilder {
    pub instrs: Vec<TacInstr>,
    pub tmp_counter: usize,
}

impl TacBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate the next temporary name (`t0`, `t1`, ...).
    pub fn next_tmp(&mut self) -> String {
        let tmp = format!("t{}", self.tmp_counter);
        self.tmp_counter += 1;
        tmp
    }

    /// Emit `tN = lhs op rhs` into a fresh temporary and return its name.
    pub fn emit_binary(&mut self, lhs: String, op: BinOp, rhs: String) -> String {
        let dest = self.next_tmp();
        self.instrs.push(TacInstr::Binary {
            dest: dest.clone(),
            lhs,
            op,
            rhs,
        });
        dest
    }

    pub fn emit_copy(&mut self, dest: &str, src: String) {
        self.instrs.push(TacInstr::Copy {
            dest: dest.to_string(),
            src,
        });
    }

    pub fn finish(self) -> Vec<TacInstr> {
        self.instrs
    }
}
