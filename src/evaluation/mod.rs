//! Route assembly and validation.

mod assembler;

pub use assembler::PathAssembler;
