pub mod builder;
pub mod tac;

pub use builder::TacBuilder;
pub use tac::{BinOp, TacInstr};

#[cfg(test)]
mod tests;
