//! # decant-core
//!
//! Core types for the decant x86 decoder. This crate defines the decoded
//! [`Instruction`] record together with the enumerations it is made of:
//! instruction codes, registers, memory access sizes, operand kinds and
//! processor modes.

pub mod bitness;
pub mod code;
pub mod error;
pub mod instruction;
pub mod memory_size;
pub mod operand;
pub mod register;

pub use bitness::Bitness;
pub use code::Code;
pub use error::Error;
pub use instruction::{Instruction, MAX_OP_COUNT};
pub use memory_size::MemorySize;
pub use operand::{EncodingKind, MemoryOperand, OpKind, RoundingControl};
pub use register::Register;
