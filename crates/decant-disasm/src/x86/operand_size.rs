//! Operand size, address size and register width resolution.

use decant_core::{Bitness, MemorySize, Register};

use super::opcodes::{MemSel, Op, Template, W_D_Q};
use super::prefix::Prefixes;

/// An effective operand or address size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum OpSize {
    W16,
    W32,
    W64,
}

impl OpSize {
    /// Index into a `[16, 32, 64]` table.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Mask that truncates a value to this width.
    pub fn mask(self) -> u64 {
        match self {
            Self::W16 => 0xFFFF,
            Self::W32 => 0xFFFF_FFFF,
            Self::W64 => u64::MAX,
        }
    }

    /// First general purpose register of this width.
    fn first_gpr(self) -> Register {
        match self {
            Self::W16 => Register::AX,
            Self::W32 => Register::EAX,
            Self::W64 => Register::RAX,
        }
    }

    /// `y` width: 64 bits only for 64-bit operands, 32 otherwise.
    pub fn at_least_32(self) -> Self {
        self.max(Self::W32)
    }

    /// `z` width: 16 bits for 16-bit operands, 32 otherwise.
    pub fn at_most_32(self) -> Self {
        self.min(Self::W32)
    }
}

/// Effective operand size of a legacy-encoded template.
///
/// `operand_size_prefix` is false when a `66` prefix was seen but consumed
/// as a mandatory prefix.
pub fn operand_size(bitness: Bitness, prefixes: &Prefixes, operand_size_prefix: bool, template: &Template) -> OpSize {
    match bitness {
        Bitness::Bits16 if operand_size_prefix => OpSize::W32,
        Bitness::Bits16 => OpSize::W16,
        Bitness::Bits32 if operand_size_prefix => OpSize::W16,
        Bitness::Bits32 => OpSize::W32,
        Bitness::Bits64 => {
            if prefixes.rex_w() || template.force_64 {
                OpSize::W64
            } else if operand_size_prefix {
                OpSize::W16
            } else if template.default_64 {
                OpSize::W64
            } else {
                OpSize::W32
            }
        }
    }
}

/// Operand size of a VEX/EVEX template: `W` selects 64-bit general purpose
/// operands, but only in 64-bit mode.
pub fn vector_operand_size(bitness: Bitness, w: bool) -> OpSize {
    if w && bitness.is_64bit() {
        OpSize::W64
    } else {
        OpSize::W32
    }
}

/// Effective address size; `67` toggles it.
pub fn address_size(bitness: Bitness, prefixes: &Prefixes) -> OpSize {
    match (bitness, prefixes.address_size) {
        (Bitness::Bits16, false) | (Bitness::Bits32, true) => OpSize::W16,
        (Bitness::Bits16, true) | (Bitness::Bits32, false) | (Bitness::Bits64, true) => OpSize::W32,
        (Bitness::Bits64, false) => OpSize::W64,
    }
}

/// General purpose register `n` (0..=15) of the given width.
pub fn gpr(size: OpSize, n: u8) -> Register {
    size.first_gpr().offset(u32::from(n)).unwrap_or(Register::None)
}

/// 8-bit register `n`. Without REX, 4..=7 are `AH`..`BH`; with any REX
/// prefix they are `SPL`..`DIL`.
pub fn gpr8(n: u8, rex: bool) -> Register {
    let (first, n) = match n {
        4..=7 if rex => (Register::SPL, n - 4),
        8..=15 => (Register::R8L, n - 8),
        _ => (Register::AL, n),
    };
    first.offset(u32::from(n)).unwrap_or(Register::None)
}

/// Register `n` of a class starting at `first`.
pub fn nth(first: Register, n: u8) -> Register {
    first.offset(u32::from(n)).unwrap_or(Register::None)
}

/// Memory size of `template` when its ModRM.rm operand is memory.
pub fn memory_size(template: &Template, size: OpSize) -> MemorySize {
    match template.mem {
        MemSel::Fixed(mem) => mem,
        MemSel::Sized(sizes) => sizes[size.index()],
        MemSel::Auto => template
            .ops
            .iter()
            .find_map(|op| match op {
                Op::Eb => Some(MemorySize::UInt8),
                Op::Ew => Some(MemorySize::UInt16),
                Op::Ev => Some(W_D_Q[size.index()]),
                Op::Ey => Some(W_D_Q[size.at_least_32().index()]),
                Op::Ez => Some(W_D_Q[size.at_most_32().index()]),
                _ => None,
            })
            .unwrap_or(MemorySize::Unknown),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::x86::prefix::Rex;
    use decant_core::Code;

    const PLAIN: Template = Template::new(Code::Add_Ed_Gd, &[Op::Ev, Op::Gv]);
    const PUSH: Template = Template::new(Code::Push_Ed, &[Op::Ev]).with_default_64();
    const JMP: Template = Template::new(Code::Jmp_Jd64, &[Op::Jz]).with_force_64();

    fn prefixes(rex_w: bool) -> Prefixes {
        Prefixes {
            rex: rex_w.then_some(Rex { w: true, ..Rex::default() }),
            ..Prefixes::default()
        }
    }

    #[test]
    fn test_legacy_modes() {
        let p = prefixes(false);
        assert_eq!(operand_size(Bitness::Bits16, &p, false, &PLAIN), OpSize::W16);
        assert_eq!(operand_size(Bitness::Bits16, &p, true, &PLAIN), OpSize::W32);
        assert_eq!(operand_size(Bitness::Bits32, &p, false, &PLAIN), OpSize::W32);
        assert_eq!(operand_size(Bitness::Bits32, &p, true, &PLAIN), OpSize::W16);
    }

    #[test]
    fn test_long_mode() {
        let p = prefixes(false);
        let w = prefixes(true);
        assert_eq!(operand_size(Bitness::Bits64, &p, false, &PLAIN), OpSize::W32);
        assert_eq!(operand_size(Bitness::Bits64, &p, true, &PLAIN), OpSize::W16);
        assert_eq!(operand_size(Bitness::Bits64, &w, true, &PLAIN), OpSize::W64);
        assert_eq!(operand_size(Bitness::Bits64, &p, false, &PUSH), OpSize::W64);
        assert_eq!(operand_size(Bitness::Bits64, &p, true, &PUSH), OpSize::W16);
        assert_eq!(operand_size(Bitness::Bits64, &p, true, &JMP), OpSize::W64);
        // default_64 and force_64 do nothing outside 64-bit mode
        assert_eq!(operand_size(Bitness::Bits32, &p, false, &PUSH), OpSize::W32);
    }

    #[test]
    fn test_vector_operand_size() {
        assert_eq!(vector_operand_size(Bitness::Bits64, true), OpSize::W64);
        assert_eq!(vector_operand_size(Bitness::Bits32, true), OpSize::W32);
        assert_eq!(vector_operand_size(Bitness::Bits64, false), OpSize::W32);
    }

    #[test]
    fn test_address_size() {
        let mut p = Prefixes::default();
        assert_eq!(address_size(Bitness::Bits16, &p), OpSize::W16);
        assert_eq!(address_size(Bitness::Bits64, &p), OpSize::W64);
        p.address_size = true;
        assert_eq!(address_size(Bitness::Bits16, &p), OpSize::W32);
        assert_eq!(address_size(Bitness::Bits32, &p), OpSize::W16);
        assert_eq!(address_size(Bitness::Bits64, &p), OpSize::W32);
    }

    #[test]
    fn test_registers() {
        assert_eq!(gpr(OpSize::W16, 3), Register::BX);
        assert_eq!(gpr(OpSize::W64, 15), Register::R15);
        assert_eq!(gpr8(4, false), Register::AH);
        assert_eq!(gpr8(4, true), Register::SPL);
        assert_eq!(gpr8(7, true), Register::DIL);
        assert_eq!(gpr8(9, true), Register::R9L);
        assert_eq!(nth(Register::XMM0, 31), Register::XMM31);
        assert_eq!(nth(Register::K0, 7), Register::K7);
    }

    #[test]
    fn test_auto_memory_size() {
        assert_eq!(memory_size(&PLAIN, OpSize::W64), MemorySize::UInt64);
        let ey = Template::new(Code::Movd_VX_Ed, &[Op::VX, Op::Ey]);
        assert_eq!(memory_size(&ey, OpSize::W16), MemorySize::UInt32);
        let ez = Template::new(Code::Movsxd_Gd_Ed, &[Op::Gv, Op::Ez]);
        assert_eq!(memory_size(&ez, OpSize::W64), MemorySize::UInt32);
        let lea = Template::new(Code::Lea_Gd_M, &[Op::Gv, Op::M]);
        assert_eq!(memory_size(&lea, OpSize::W32), MemorySize::Unknown);
    }
}
