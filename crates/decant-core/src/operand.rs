//! Operand kinds and the shared memory operand descriptor.

use crate::{MemorySize, Register};

/// What an operand slot of an [`Instruction`](crate::Instruction) holds.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OpKind {
    /// Unused slot
    #[default]
    None,
    /// See [`Instruction::op_register`](crate::Instruction::op_register)
    Register,
    NearBranch16,
    NearBranch32,
    NearBranch64,
    FarBranch16,
    FarBranch32,
    Immediate8,
    /// Second 8-bit immediate (`ENTER`)
    Immediate8_2nd,
    Immediate16,
    Immediate32,
    Immediate64,
    /// 8-bit immediate sign-extended to 16 bits
    Immediate8to16,
    /// 8-bit immediate sign-extended to 32 bits
    Immediate8to32,
    /// 8-bit immediate sign-extended to 64 bits
    Immediate8to64,
    /// 32-bit immediate sign-extended to 64 bits
    Immediate32to64,
    /// `seg:[SI]`
    MemorySegSI,
    /// `seg:[ESI]`
    MemorySegESI,
    /// `seg:[RSI]`
    MemorySegRSI,
    /// `ES:[DI]`
    MemoryESDI,
    /// `ES:[EDI]`
    MemoryESEDI,
    /// `ES:[RDI]`
    MemoryESRDI,
    /// 64-bit absolute address (`MOV` moffs64)
    Memory64,
    /// See [`MemoryOperand`]
    Memory,
}

impl OpKind {
    /// Returns true for kinds that access memory.
    pub const fn is_memory(self) -> bool {
        matches!(
            self,
            Self::Memory
                | Self::Memory64
                | Self::MemorySegSI
                | Self::MemorySegESI
                | Self::MemorySegRSI
                | Self::MemoryESDI
                | Self::MemoryESEDI
                | Self::MemoryESRDI
        )
    }

    /// Returns true for immediate kinds.
    pub const fn is_immediate(self) -> bool {
        matches!(
            self,
            Self::Immediate8
                | Self::Immediate8_2nd
                | Self::Immediate16
                | Self::Immediate32
                | Self::Immediate64
                | Self::Immediate8to16
                | Self::Immediate8to32
                | Self::Immediate8to64
                | Self::Immediate32to64
        )
    }

    /// Returns true for near and far branch targets.
    pub const fn is_branch(self) -> bool {
        matches!(
            self,
            Self::NearBranch16
                | Self::NearBranch32
                | Self::NearBranch64
                | Self::FarBranch16
                | Self::FarBranch32
        )
    }
}

/// EVEX static rounding mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundingControl {
    #[default]
    None,
    RoundToNearest,
    RoundDown,
    RoundUp,
    RoundTowardZero,
}

impl RoundingControl {
    /// Maps the EVEX `L'L` field of a register-form `er` instruction.
    pub const fn from_evex_ll(ll: u8) -> Self {
        match ll & 3 {
            0 => Self::RoundToNearest,
            1 => Self::RoundDown,
            2 => Self::RoundUp,
            _ => Self::RoundTowardZero,
        }
    }
}

/// Encoding family of a decoded instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncodingKind {
    /// Legacy and REX encodings, including x87 and MMX
    #[default]
    Legacy,
    /// 2- and 3-byte VEX
    Vex,
    /// 4-byte EVEX
    Evex,
}

/// Memory operand descriptor.
///
/// An instruction has at most one explicit memory operand; all `Memory`
/// slots share this descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemoryOperand {
    /// Effective segment (prefix override or the default for the base)
    pub segment: Register,
    pub base: Register,
    pub index: Register,
    /// 1, 2, 4 or 8
    pub scale: u32,
    /// Displacement truncated to the address size (sign-extended for 64-bit
    /// addressing).
    pub displacement: u64,
    /// Number of displacement bytes encoded (0, 1, 2, 4 or 8)
    pub displ_size: u32,
    pub size: MemorySize,
}

impl MemoryOperand {
    /// Returns true if the address is relative to `RIP` or `EIP`.
    pub fn is_ip_relative(&self) -> bool {
        matches!(self.base, Register::RIP | Register::EIP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classes() {
        assert!(OpKind::Memory.is_memory());
        assert!(OpKind::MemoryESRDI.is_memory());
        assert!(!OpKind::Register.is_memory());
        assert!(OpKind::Immediate8to64.is_immediate());
        assert!(OpKind::FarBranch32.is_branch());
        assert!(!OpKind::Immediate16.is_branch());
    }

    #[test]
    fn test_rounding_from_ll() {
        assert_eq!(RoundingControl::from_evex_ll(0), RoundingControl::RoundToNearest);
        assert_eq!(RoundingControl::from_evex_ll(1), RoundingControl::RoundDown);
        assert_eq!(RoundingControl::from_evex_ll(2), RoundingControl::RoundUp);
        assert_eq!(RoundingControl::from_evex_ll(3), RoundingControl::RoundTowardZero);
    }

    #[test]
    fn test_default_memory_operand() {
        let mem = MemoryOperand::default();
        assert_eq!(mem.base, Register::None);
        assert_eq!(mem.size, MemorySize::Unknown);
        assert!(!mem.is_ip_relative());
    }
}
