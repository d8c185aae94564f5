//! Summary assembly
//!
//! Turns ranked sentences into the final extractive summary.

pub mod assembler;

pub use assembler::{Summary, SummaryAssembler};
