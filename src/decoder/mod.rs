//! MIPS32 instruction decoder
//!
//! Splits a raw instruction word into its fixed bit fields and tags it with
//! its R/I/J shape.

pub mod bits;
pub mod instruction;
pub mod opcode;

pub use bits::bits_at;
pub use instruction::{decode, InstType, Instruction};
