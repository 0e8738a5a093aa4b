//! Decoding error types.

use thiserror::Error;

use crate::x86::opcodes::OpcodeMap;

/// Error type for instruction decoding.
///
/// [`Decoder::decode`](crate::Decoder::decode) collapses every error into an
/// instruction with [`Code::INVALID`](decant_core::Code::INVALID);
/// [`Decoder::try_decode`](crate::Decoder::try_decode) reports it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The buffer ended in the middle of an instruction.
    #[error("truncated instruction: need {needed} more byte(s) after {consumed}")]
    OutOfData { needed: usize, consumed: usize },

    /// The instruction would exceed 15 bytes.
    #[error("instruction longer than 15 bytes")]
    TooLong,

    /// No template matches the opcode.
    #[error("invalid opcode {opcode:#04x} in the {map} map")]
    InvalidOpcode { opcode: u8, map: OpcodeMap },

    /// Prefixes, mode or EVEX fields are not allowed for this instruction.
    #[error("invalid encoding: {reason}")]
    InvalidModeCombination { reason: &'static str },
}

impl DecodeError {
    /// Creates a new OutOfData error.
    pub fn out_of_data(needed: usize, consumed: usize) -> Self {
        Self::OutOfData { needed, consumed }
    }

    /// Creates a new InvalidOpcode error.
    pub fn invalid_opcode(opcode: u8, map: OpcodeMap) -> Self {
        Self::InvalidOpcode { opcode, map }
    }

    /// Creates a new InvalidModeCombination error.
    pub fn invalid(reason: &'static str) -> Self {
        Self::InvalidModeCombination { reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            DecodeError::out_of_data(2, 3).to_string(),
            "truncated instruction: need 2 more byte(s) after 3"
        );
        assert_eq!(
            DecodeError::invalid_opcode(0x0B, OpcodeMap::M0F38).to_string(),
            "invalid opcode 0x0b in the 0F38 map"
        );
        assert_eq!(DecodeError::invalid("LOCK prefix").to_string(), "invalid encoding: LOCK prefix");
    }
}
