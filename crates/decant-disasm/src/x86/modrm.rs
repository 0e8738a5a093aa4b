//! ModR/M and SIB byte decoding.

use decant_core::{MemoryOperand, MemorySize, Register};

use super::cursor::ByteCursor;
use super::operand_size::OpSize;
use crate::DecodeError;

/// Decoded ModR/M byte. Fields are the raw three-bit values; register
/// extensions are applied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModRm {
    /// Mod field (2 bits)
    pub mod_: u8,
    /// Reg field (3 bits)
    pub reg: u8,
    /// R/M field (3 bits)
    pub rm: u8,
}

impl ModRm {
    pub fn from_byte(byte: u8) -> Self {
        Self {
            mod_: (byte >> 6) & 0x3,
            reg: (byte >> 3) & 0x7,
            rm: byte & 0x7,
        }
    }

    /// Returns true if this ModR/M encodes a register operand (mod=11).
    pub fn is_register(&self) -> bool {
        self.mod_ == 0b11
    }

    /// `reg` and `rm` combined, the index of a register-form sub-table.
    pub fn low6(&self) -> usize {
        usize::from((self.reg << 3) | self.rm)
    }
}

/// Everything besides ModR/M itself that shapes an effective address.
#[derive(Debug, Clone, Copy)]
pub struct AddressContext {
    pub address_size: OpSize,
    /// True in 64-bit mode, where `mod=00 rm=101` is IP-relative
    pub long_mode: bool,
    /// Segment override prefix, or `Register::None`
    pub segment_override: Register,
    /// Added to the SIB index (REX.X / VEX.X / EVEX.X)
    pub index_ext: u8,
    /// Added to the base register (REX.B / VEX.B / EVEX.B)
    pub base_ext: u8,
    /// Multiplier for an 8-bit displacement (EVEX compressed disp8)
    pub disp8_scale: u32,
    pub size: MemorySize,
    /// First register of the vector index class for VSIB addressing
    pub vsib: Option<Register>,
}

/// Reads the SIB byte and displacement that follow `modrm` and builds the
/// memory operand. `modrm` must be a memory form.
pub fn decode_memory(
    cursor: &mut ByteCursor<'_>,
    modrm: ModRm,
    ctx: &AddressContext,
) -> Result<MemoryOperand, DecodeError> {
    let mut mem = match ctx.address_size {
        OpSize::W16 => decode_16(cursor, modrm, ctx)?,
        _ => decode_32_64(cursor, modrm, ctx)?,
    };
    mem.size = ctx.size;
    mem.segment = match ctx.segment_override {
        Register::None if uses_stack_segment(mem.base) => Register::SS,
        Register::None => Register::DS,
        seg => seg,
    };
    Ok(mem)
}

fn uses_stack_segment(base: Register) -> bool {
    matches!(
        base,
        Register::BP | Register::SP | Register::EBP | Register::ESP | Register::RBP | Register::RSP
    )
}

const BASE_INDEX_16: [(Register, Register); 8] = [
    (Register::BX, Register::SI),
    (Register::BX, Register::DI),
    (Register::BP, Register::SI),
    (Register::BP, Register::DI),
    (Register::SI, Register::None),
    (Register::DI, Register::None),
    (Register::BP, Register::None),
    (Register::BX, Register::None),
];

fn decode_16(cursor: &mut ByteCursor<'_>, modrm: ModRm, ctx: &AddressContext) -> Result<MemoryOperand, DecodeError> {
    if ctx.vsib.is_some() {
        return Err(DecodeError::invalid("VSIB needs 32- or 64-bit addressing"));
    }
    let mut mem = MemoryOperand {
        scale: 1,
        ..MemoryOperand::default()
    };
    if modrm.mod_ == 0 && modrm.rm == 6 {
        mem.displacement = u64::from(cursor.read_u16()?);
        mem.displ_size = 2;
        return Ok(mem);
    }
    let (base, index) = BASE_INDEX_16[usize::from(modrm.rm)];
    mem.base = base;
    mem.index = index;
    match modrm.mod_ {
        1 => {
            let disp = scaled_disp8(cursor.read_u8()?, ctx.disp8_scale);
            mem.displacement = u64::from(disp as u16);
            mem.displ_size = 1;
        }
        2 => {
            mem.displacement = u64::from(cursor.read_u16()?);
            mem.displ_size = 2;
        }
        _ => {}
    }
    Ok(mem)
}

fn decode_32_64(cursor: &mut ByteCursor<'_>, modrm: ModRm, ctx: &AddressContext) -> Result<MemoryOperand, DecodeError> {
    let is64 = ctx.address_size == OpSize::W64;
    let gpr = |n: u8| {
        let first = if is64 { Register::RAX } else { Register::EAX };
        first.offset(u32::from(n)).unwrap_or(Register::None)
    };
    let mut mem = MemoryOperand {
        scale: 1,
        ..MemoryOperand::default()
    };
    let mut disp32 = modrm.mod_ == 2;
    if ctx.vsib.is_some() && modrm.rm != 4 {
        return Err(DecodeError::invalid("VSIB needs a SIB byte"));
    }

    if modrm.rm == 4 {
        let sib = cursor.read_u8()?;
        mem.scale = 1 << (sib >> 6);
        let index = ((sib >> 3) & 7) | ctx.index_ext;
        // A vector index has no "none" encoding
        match ctx.vsib {
            Some(first) => mem.index = first.offset(u32::from(index)).unwrap_or(Register::None),
            None if index != 4 => mem.index = gpr(index),
            None => {}
        }
        if sib & 7 == 5 && modrm.mod_ == 0 {
            disp32 = true;
        } else {
            mem.base = gpr((sib & 7) | ctx.base_ext);
        }
    } else if modrm.rm == 5 && modrm.mod_ == 0 {
        disp32 = true;
        if ctx.long_mode {
            mem.base = if is64 { Register::RIP } else { Register::EIP };
        }
    } else {
        mem.base = gpr(modrm.rm | ctx.base_ext);
    }

    let disp: i64 = if modrm.mod_ == 1 {
        mem.displ_size = 1;
        scaled_disp8(cursor.read_u8()?, ctx.disp8_scale)
    } else if disp32 {
        mem.displ_size = 4;
        i64::from(cursor.read_u32()? as i32)
    } else {
        0
    };
    mem.displacement = if is64 { disp as u64 } else { u64::from(disp as u32) };
    Ok(mem)
}

fn scaled_disp8(byte: u8, scale: u32) -> i64 {
    i64::from(byte as i8) * i64::from(scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(address_size: OpSize) -> AddressContext {
        AddressContext {
            address_size,
            long_mode: address_size != OpSize::W16,
            segment_override: Register::None,
            index_ext: 0,
            base_ext: 0,
            disp8_scale: 1,
            size: MemorySize::UInt32,
            vsib: None,
        }
    }

    fn decode(modrm: u8, rest: &[u8], ctx: &AddressContext) -> (MemoryOperand, usize) {
        let mut cursor = ByteCursor::new(rest, 0);
        let mem = decode_memory(&mut cursor, ModRm::from_byte(modrm), ctx).unwrap();
        (mem, cursor.consumed_len())
    }

    #[test]
    fn test_modrm_fields() {
        let m = ModRm::from_byte(0xD1);
        assert_eq!((m.mod_, m.reg, m.rm), (3, 2, 1));
        assert!(m.is_register());
        assert_eq!(m.low6(), 0x11);
    }

    #[test]
    fn test_16bit_forms() {
        let c = ctx(OpSize::W16);
        let (mem, len) = decode(0x00, &[], &c);
        assert_eq!((mem.base, mem.index, mem.segment), (Register::BX, Register::SI, Register::DS));
        assert_eq!(len, 0);

        let (mem, len) = decode(0x46, &[0xFE], &c);
        assert_eq!((mem.base, mem.index, mem.segment), (Register::BP, Register::None, Register::SS));
        assert_eq!(mem.displacement, 0xFFFE);
        assert_eq!((mem.displ_size, len), (1, 1));

        let (mem, len) = decode(0x06, &[0x34, 0x12], &c);
        assert_eq!(mem.base, Register::None);
        assert_eq!(mem.displacement, 0x1234);
        assert_eq!((mem.displ_size, len), (2, 2));
    }

    #[test]
    fn test_sib_forms() {
        let c = ctx(OpSize::W64);
        // [rax+rcx*4+0x10]
        let (mem, len) = decode(0x44, &[0x88, 0x10], &c);
        assert_eq!((mem.base, mem.index, mem.scale), (Register::RAX, Register::RCX, 4));
        assert_eq!(mem.displacement, 0x10);
        assert_eq!(len, 2);

        // [rsp]: index 100 means none
        let (mem, _) = decode(0x04, &[0x24], &c);
        assert_eq!((mem.base, mem.index, mem.segment), (Register::RSP, Register::None, Register::SS));

        // [disp32 + rbx*2] without base
        let (mem, len) = decode(0x04, &[0x5D, 0xF0, 0xFF, 0xFF, 0xFF], &c);
        assert_eq!((mem.base, mem.index, mem.scale), (Register::None, Register::RBX, 2));
        assert_eq!(mem.displacement, 0xFFFF_FFFF_FFFF_FFF0);
        assert_eq!(len, 5);
    }

    #[test]
    fn test_rex_extensions() {
        let mut c = ctx(OpSize::W64);
        c.index_ext = 8;
        c.base_ext = 8;
        let (mem, _) = decode(0x44, &[0x25, 0x00], &c);
        // index 100 with REX.X is R12
        assert_eq!((mem.base, mem.index), (Register::R13, Register::R12));
        assert_eq!(mem.segment, Register::DS);
    }

    #[test]
    fn test_ip_relative() {
        let (mem, _) = decode(0x05, &[0x00, 0x01, 0x00, 0x00], &ctx(OpSize::W64));
        assert_eq!(mem.base, Register::RIP);
        assert_eq!(mem.displacement, 0x100);

        let (mem, _) = decode(0x05, &[0x00, 0x01, 0x00, 0x00], &ctx(OpSize::W32));
        assert_eq!(mem.base, Register::EIP);

        let mut legacy = ctx(OpSize::W32);
        legacy.long_mode = false;
        let (mem, _) = decode(0x05, &[0x00, 0x01, 0x00, 0x00], &legacy);
        assert_eq!(mem.base, Register::None);
    }

    #[test]
    fn test_compressed_disp8() {
        let mut c = ctx(OpSize::W32);
        c.disp8_scale = 64;
        let (mem, _) = decode(0x40, &[0xFF], &c);
        assert_eq!(mem.displacement, 0xFFFF_FFC0);
        assert_eq!(mem.displ_size, 1);
    }

    #[test]
    fn test_segment_override_wins() {
        let mut c = ctx(OpSize::W32);
        c.segment_override = Register::FS;
        let (mem, _) = decode(0x45, &[0x08], &c);
        assert_eq!((mem.base, mem.segment), (Register::EBP, Register::FS));
    }

    #[test]
    fn test_vsib_index() {
        let mut c = ctx(OpSize::W64);
        c.vsib = Some(Register::YMM0);
        // [rax+ymm1*4]
        let (mem, len) = decode(0x04, &[0x88], &c);
        assert_eq!((mem.base, mem.index, mem.scale), (Register::RAX, Register::YMM1, 4));
        assert_eq!(len, 1);

        // index 100 is a register, not "no index"
        let (mem, _) = decode(0x04, &[0x20], &c);
        assert_eq!(mem.index, Register::YMM4);

        // X and EVEX.V' reach the upper registers
        c.vsib = Some(Register::ZMM0);
        c.index_ext = 8 | 16;
        let (mem, _) = decode(0x04, &[0x38], &c);
        assert_eq!(mem.index, Register::ZMM31);
    }

    #[test]
    fn test_vsib_needs_sib() {
        let mut c = ctx(OpSize::W32);
        c.vsib = Some(Register::XMM0);
        let mut cursor = ByteCursor::new(&[], 0);
        assert_eq!(
            decode_memory(&mut cursor, ModRm::from_byte(0x00), &c).unwrap_err(),
            DecodeError::invalid("VSIB needs a SIB byte")
        );
        let (mem, _) = decode(0x04, &[0x08], &c);
        assert_eq!((mem.base, mem.index), (Register::EAX, Register::XMM1));

        let mut c = ctx(OpSize::W16);
        c.vsib = Some(Register::XMM0);
        let mut cursor = ByteCursor::new(&[0x08], 0);
        assert_eq!(
            decode_memory(&mut cursor, ModRm::from_byte(0x04), &c).unwrap_err(),
            DecodeError::invalid("VSIB needs 32- or 64-bit addressing")
        );
    }

    #[test]
    fn test_truncated_displacement() {
        let mut cursor = ByteCursor::new(&[0x00, 0x01], 0);
        let err = decode_memory(&mut cursor, ModRm::from_byte(0x80), &ctx(OpSize::W32)).unwrap_err();
        assert_eq!(err, DecodeError::out_of_data(2, 2));
    }
}
