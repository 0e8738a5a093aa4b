//! x86 decoding pipeline.
//!
//! Bytes flow through the prefix scanner, the VEX/EVEX field extractor and
//! the opcode map dispatcher; the selected template drives ModRM/SIB,
//! immediate and operand-size decoding, and the assembler writes the final
//! [`Instruction`](decant_core::Instruction).

mod assembler;
mod cursor;
mod decoder;
mod dispatch;
mod immediate;
mod modrm;
mod operand_size;
mod prefix;
mod vex;

pub mod opcodes;
mod opcodes_0f;
mod opcodes_0f38;
mod opcodes_0f3a;
mod opcodes_evex;
mod opcodes_vec;
mod opcodes_vex;
mod x87;

pub use cursor::{ByteCursor, MAX_INSTRUCTION_LEN};
pub use decoder::Decoder;
pub use opcodes::OpcodeMap;
