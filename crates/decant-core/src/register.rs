//! x86 architectural registers.
//!
//! Registers of one class are laid out contiguously so the decoder can index
//! them as `base + n`.

use strum::{EnumCount, EnumIter, FromRepr, IntoStaticStr};

/// An x86 register.
#[allow(non_camel_case_types)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, EnumCount, EnumIter, FromRepr, IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum Register {
    /// No register
    #[default]
    None,

    // 8-bit general purpose
    AL,
    CL,
    DL,
    BL,
    AH,
    CH,
    DH,
    BH,
    SPL,
    BPL,
    SIL,
    DIL,
    R8L,
    R9L,
    R10L,
    R11L,
    R12L,
    R13L,
    R14L,
    R15L,

    // 16-bit general purpose
    AX,
    CX,
    DX,
    BX,
    SP,
    BP,
    SI,
    DI,
    R8W,
    R9W,
    R10W,
    R11W,
    R12W,
    R13W,
    R14W,
    R15W,

    // 32-bit general purpose
    EAX,
    ECX,
    EDX,
    EBX,
    ESP,
    EBP,
    ESI,
    EDI,
    R8D,
    R9D,
    R10D,
    R11D,
    R12D,
    R13D,
    R14D,
    R15D,

    // 64-bit general purpose
    RAX,
    RCX,
    RDX,
    RBX,
    RSP,
    RBP,
    RSI,
    RDI,
    R8,
    R9,
    R10,
    R11,
    R12,
    R13,
    R14,
    R15,

    // Instruction pointers
    EIP,
    RIP,

    // Segment registers
    ES,
    CS,
    SS,
    DS,
    FS,
    GS,

    // SSE
    XMM0,
    XMM1,
    XMM2,
    XMM3,
    XMM4,
    XMM5,
    XMM6,
    XMM7,
    XMM8,
    XMM9,
    XMM10,
    XMM11,
    XMM12,
    XMM13,
    XMM14,
    XMM15,
    XMM16,
    XMM17,
    XMM18,
    XMM19,
    XMM20,
    XMM21,
    XMM22,
    XMM23,
    XMM24,
    XMM25,
    XMM26,
    XMM27,
    XMM28,
    XMM29,
    XMM30,
    XMM31,

    // AVX
    YMM0,
    YMM1,
    YMM2,
    YMM3,
    YMM4,
    YMM5,
    YMM6,
    YMM7,
    YMM8,
    YMM9,
    YMM10,
    YMM11,
    YMM12,
    YMM13,
    YMM14,
    YMM15,
    YMM16,
    YMM17,
    YMM18,
    YMM19,
    YMM20,
    YMM21,
    YMM22,
    YMM23,
    YMM24,
    YMM25,
    YMM26,
    YMM27,
    YMM28,
    YMM29,
    YMM30,
    YMM31,

    // AVX-512
    ZMM0,
    ZMM1,
    ZMM2,
    ZMM3,
    ZMM4,
    ZMM5,
    ZMM6,
    ZMM7,
    ZMM8,
    ZMM9,
    ZMM10,
    ZMM11,
    ZMM12,
    ZMM13,
    ZMM14,
    ZMM15,
    ZMM16,
    ZMM17,
    ZMM18,
    ZMM19,
    ZMM20,
    ZMM21,
    ZMM22,
    ZMM23,
    ZMM24,
    ZMM25,
    ZMM26,
    ZMM27,
    ZMM28,
    ZMM29,
    ZMM30,
    ZMM31,

    // Opmask
    K0,
    K1,
    K2,
    K3,
    K4,
    K5,
    K6,
    K7,

    // MMX
    MM0,
    MM1,
    MM2,
    MM3,
    MM4,
    MM5,
    MM6,
    MM7,

    // x87 stack
    ST0,
    ST1,
    ST2,
    ST3,
    ST4,
    ST5,
    ST6,
    ST7,
}

impl Register {
    /// Returns the register `n` places after `self`, if it exists.
    pub fn offset(self, n: u32) -> Option<Self> {
        u8::try_from(self as u32 + n).ok().and_then(Self::from_repr)
    }

    /// 8-bit register (`AL`..`R15L`, `SPL`..`DIL`).
    pub fn is_gpr8(self) -> bool {
        (Self::AL..=Self::R15L).contains(&self)
    }

    /// 16-bit general purpose register.
    pub fn is_gpr16(self) -> bool {
        (Self::AX..=Self::R15W).contains(&self)
    }

    /// 32-bit general purpose register.
    pub fn is_gpr32(self) -> bool {
        (Self::EAX..=Self::R15D).contains(&self)
    }

    /// 64-bit general purpose register.
    pub fn is_gpr64(self) -> bool {
        (Self::RAX..=Self::R15).contains(&self)
    }

    /// Any general purpose register.
    pub fn is_gpr(self) -> bool {
        (Self::AL..=Self::R15).contains(&self)
    }

    pub fn is_segment(self) -> bool {
        (Self::ES..=Self::GS).contains(&self)
    }

    pub fn is_xmm(self) -> bool {
        (Self::XMM0..=Self::XMM31).contains(&self)
    }

    pub fn is_ymm(self) -> bool {
        (Self::YMM0..=Self::YMM31).contains(&self)
    }

    pub fn is_zmm(self) -> bool {
        (Self::ZMM0..=Self::ZMM31).contains(&self)
    }

    /// Opmask register `K0`..`K7`.
    pub fn is_k(self) -> bool {
        (Self::K0..=Self::K7).contains(&self)
    }

    pub fn is_mm(self) -> bool {
        (Self::MM0..=Self::MM7).contains(&self)
    }

    pub fn is_st(self) -> bool {
        (Self::ST0..=Self::ST7).contains(&self)
    }

    /// First register of this register's class.
    fn class_base(self) -> Self {
        match self {
            Self::None => Self::None,
            r if r.is_gpr8() => Self::AL,
            r if r.is_gpr16() => Self::AX,
            r if r.is_gpr32() => Self::EAX,
            r if r.is_gpr64() => Self::RAX,
            Self::EIP | Self::RIP => self,
            r if r.is_segment() => Self::ES,
            r if r.is_xmm() => Self::XMM0,
            r if r.is_ymm() => Self::YMM0,
            r if r.is_zmm() => Self::ZMM0,
            r if r.is_k() => Self::K0,
            r if r.is_mm() => Self::MM0,
            _ => Self::ST0,
        }
    }

    /// Register number within its class.
    ///
    /// 8-bit registers follow the REX encoding: `SPL`..`DIL` are 4..7 and
    /// `AH`..`BH` also report 4..7.
    pub fn number(self) -> u32 {
        match self {
            r if (Self::AH..=Self::BH).contains(&r) => r as u32 - Self::AL as u32,
            r if (Self::SPL..=Self::DIL).contains(&r) => r as u32 - Self::SPL as u32 + 4,
            r if (Self::R8L..=Self::R15L).contains(&r) => r as u32 - Self::R8L as u32 + 8,
            r => r as u32 - r.class_base() as u32,
        }
    }

    /// Size of the register in bytes (0 for `None`).
    pub fn size(self) -> usize {
        match self.class_base() {
            Self::None => 0,
            Self::AL => 1,
            Self::AX | Self::ES => 2,
            Self::EAX | Self::EIP => 4,
            Self::RAX | Self::RIP | Self::K0 | Self::MM0 => 8,
            Self::XMM0 => 16,
            Self::YMM0 => 32,
            Self::ZMM0 => 64,
            _ => 10,
        }
    }

    /// Lower-case register name.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        assert_eq!(Register::XMM0.offset(17), Some(Register::XMM17));
        assert_eq!(Register::K0.offset(3), Some(Register::K3));
        assert_eq!(Register::ST0.offset(8), None);
    }

    #[test]
    fn test_number_and_size() {
        assert_eq!(Register::R9D.number(), 9);
        assert_eq!(Register::SIL.number(), 6);
        assert_eq!(Register::BH.number(), 7);
        assert_eq!(Register::ZMM31.number(), 31);
        assert_eq!(Register::RSP.size(), 8);
        assert_eq!(Register::YMM3.size(), 32);
        assert_eq!(Register::DS.size(), 2);
        assert_eq!(Register::None.size(), 0);
    }

    #[test]
    fn test_classes() {
        assert!(Register::R15L.is_gpr8());
        assert!(Register::R8W.is_gpr16());
        assert!(!Register::RIP.is_gpr64());
        assert!(Register::K7.is_k());
        assert!(Register::XMM31.is_xmm() && !Register::XMM31.is_ymm());
    }

    #[test]
    fn test_name() {
        assert_eq!(Register::XMM5.name(), "xmm5");
        assert_eq!(Register::R12L.name(), "r12l");
        assert_eq!(Register::None.name(), "none");
    }
}
