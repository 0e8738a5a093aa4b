//! # decant-disasm
//!
//! Table-driven x86 instruction decoder for 16-, 32- and 64-bit code.
//!
//! The decoder handles legacy, REX, VEX and EVEX encodings and produces
//! [`decant_core::Instruction`] records:
//!
//! ```
//! use decant_core::{Bitness, Code, Register};
//! use decant_disasm::Decoder;
//!
//! let bytes = [0x48, 0x89, 0xC8];
//! let mut decoder = Decoder::new(Bitness::Bits64, &bytes, 0x1000);
//! let instr = decoder.decode();
//! assert_eq!(instr.code(), Code::Mov_Eq_Gq);
//! assert_eq!(instr.op_register(0), Register::RAX);
//! assert_eq!(instr.op_register(1), Register::RCX);
//! assert_eq!(instr.len(), 3);
//! ```

pub mod error;
pub mod x86;

pub use error::DecodeError;
pub use x86::{Decoder, OpcodeMap, MAX_INSTRUCTION_LEN};

pub use decant_core::{
    Bitness, Code, EncodingKind, Instruction, MemoryOperand, MemorySize, OpKind, Register, RoundingControl,
};
