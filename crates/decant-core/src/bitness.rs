//! Processor operating modes.

use crate::Error;

/// Processor bitness (16-, 32- or 64-bit code).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bitness {
    /// Real mode / 16-bit protected mode
    Bits16,
    /// 32-bit protected mode
    Bits32,
    /// Long mode
    Bits64,
}

impl Bitness {
    /// Returns the width of this mode in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Bits16 => 16,
            Self::Bits32 => 32,
            Self::Bits64 => 64,
        }
    }

    /// Returns whether this is 64-bit mode.
    pub const fn is_64bit(self) -> bool {
        matches!(self, Self::Bits64)
    }

    /// Mask applied to instruction pointers in this mode.
    pub const fn ip_mask(self) -> u64 {
        match self {
            Self::Bits16 => 0xFFFF,
            Self::Bits32 => 0xFFFF_FFFF,
            Self::Bits64 => u64::MAX,
        }
    }
}

impl TryFrom<u32> for Bitness {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            16 => Ok(Self::Bits16),
            32 => Ok(Self::Bits32),
            64 => Ok(Self::Bits64),
            other => Err(Error::InvalidBitness(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from() {
        assert_eq!(Bitness::try_from(16).unwrap(), Bitness::Bits16);
        assert_eq!(Bitness::try_from(32).unwrap(), Bitness::Bits32);
        assert_eq!(Bitness::try_from(64).unwrap(), Bitness::Bits64);
        assert!(matches!(
            Bitness::try_from(8),
            Err(Error::InvalidBitness(8))
        ));
    }

    #[test]
    fn test_ip_mask() {
        assert_eq!(Bitness::Bits16.ip_mask(), 0xFFFF);
        assert_eq!(Bitness::Bits64.bits(), 64);
        assert!(!Bitness::Bits32.is_64bit());
    }
}
