//! Immediates, relative branch targets, far pointers and moffs.

use decant_core::OpKind;

use super::cursor::ByteCursor;
use super::opcodes::Op;
use super::operand_size::OpSize;
use crate::DecodeError;

/// A decoded immediate operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Immediate {
    pub kind: OpKind,
    /// Raw value as encoded (not sign-extended)
    pub value: u64,
}

/// Reads the immediate described by `op`. Returns `None` if `op` is not an
/// immediate shape.
pub fn read_immediate(cursor: &mut ByteCursor<'_>, op: Op, size: OpSize) -> Result<Option<Immediate>, DecodeError> {
    let (kind, value) = match op {
        Op::Ib => (OpKind::Immediate8, u64::from(cursor.read_u8()?)),
        Op::Ib2 => (OpKind::Immediate8_2nd, u64::from(cursor.read_u8()?)),
        Op::One => (OpKind::Immediate8, 1),
        Op::Iw => (OpKind::Immediate16, u64::from(cursor.read_u16()?)),
        Op::Ibs => {
            let kind = match size {
                OpSize::W16 => OpKind::Immediate8to16,
                OpSize::W32 => OpKind::Immediate8to32,
                OpSize::W64 => OpKind::Immediate8to64,
            };
            (kind, u64::from(cursor.read_u8()?))
        }
        Op::Iz => match size {
            OpSize::W16 => (OpKind::Immediate16, u64::from(cursor.read_u16()?)),
            OpSize::W32 => (OpKind::Immediate32, u64::from(cursor.read_u32()?)),
            OpSize::W64 => (OpKind::Immediate32to64, u64::from(cursor.read_u32()?)),
        },
        Op::Iv => match size {
            OpSize::W16 => (OpKind::Immediate16, u64::from(cursor.read_u16()?)),
            OpSize::W32 => (OpKind::Immediate32, u64::from(cursor.read_u32()?)),
            OpSize::W64 => (OpKind::Immediate64, cursor.read_u64()?),
        },
        _ => return Ok(None),
    };
    Ok(Some(Immediate { kind, value }))
}

/// Reads a `Jb`/`Jz` displacement and returns the branch kind and target.
///
/// The displacement is the last field of the instruction, so the target is
/// relative to the cursor position after the read. The target is truncated
/// to the operand size.
pub fn read_branch(cursor: &mut ByteCursor<'_>, op: Op, size: OpSize, ip: u64) -> Result<(OpKind, u64), DecodeError> {
    let disp = match (op, size) {
        (Op::Jb, _) => i64::from(cursor.read_u8()? as i8),
        (_, OpSize::W16) => i64::from(cursor.read_u16()? as i16),
        _ => i64::from(cursor.read_u32()? as i32),
    };
    let next_ip = ip.wrapping_add(cursor.consumed_len() as u64);
    let target = next_ip.wrapping_add(disp as u64) & size.mask();
    let kind = match size {
        OpSize::W16 => OpKind::NearBranch16,
        OpSize::W32 => OpKind::NearBranch32,
        OpSize::W64 => OpKind::NearBranch64,
    };
    Ok((kind, target))
}

/// Reads an `Ap` far pointer: offset (16 or 32 bits) then selector.
pub fn read_far_pointer(cursor: &mut ByteCursor<'_>, size: OpSize) -> Result<(OpKind, u32, u16), DecodeError> {
    let (kind, offset) = match size {
        OpSize::W16 => (OpKind::FarBranch16, u32::from(cursor.read_u16()?)),
        _ => (OpKind::FarBranch32, cursor.read_u32()?),
    };
    let selector = cursor.read_u16()?;
    Ok((kind, offset, selector))
}

/// Reads a `MOV` moffs of the address size.
pub fn read_moffs(cursor: &mut ByteCursor<'_>, address_size: OpSize) -> Result<u64, DecodeError> {
    match address_size {
        OpSize::W16 => cursor.read_u16().map(u64::from),
        OpSize::W32 => cursor.read_u32().map(u64::from),
        OpSize::W64 => cursor.read_u64(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn imm(bytes: &[u8], op: Op, size: OpSize) -> Immediate {
        let mut cursor = ByteCursor::new(bytes, 0);
        read_immediate(&mut cursor, op, size).unwrap().unwrap()
    }

    #[test]
    fn test_sized_immediates() {
        let bytes = [0xF0, 0xFF, 0xFF, 0xFF, 0x01, 0x02, 0x03, 0x04];
        assert_eq!(imm(&bytes, Op::Iz, OpSize::W16).value, 0xFFF0);
        assert_eq!(imm(&bytes, Op::Iz, OpSize::W64).kind, OpKind::Immediate32to64);
        assert_eq!(imm(&bytes, Op::Iz, OpSize::W64).value, 0xFFFF_FFF0);
        let iq = imm(&bytes, Op::Iv, OpSize::W64);
        assert_eq!(iq.kind, OpKind::Immediate64);
        assert_eq!(iq.value, 0x0403_0201_FFFF_FFF0);
        assert_eq!(imm(&bytes, Op::Ibs, OpSize::W32).kind, OpKind::Immediate8to32);
    }

    #[test]
    fn test_implicit_one() {
        let mut cursor = ByteCursor::new(&[], 0);
        let one = read_immediate(&mut cursor, Op::One, OpSize::W32).unwrap().unwrap();
        assert_eq!(one, Immediate { kind: OpKind::Immediate8, value: 1 });
        assert_eq!(cursor.consumed_len(), 0);
    }

    #[test]
    fn test_not_an_immediate() {
        let mut cursor = ByteCursor::new(&[0x00], 0);
        assert_eq!(read_immediate(&mut cursor, Op::Ev, OpSize::W32), Ok(None));
    }

    #[test]
    fn test_branch_targets() {
        // EB FE at 0x1000: jump to self
        let bytes = [0xEB, 0xFE];
        let mut cursor = ByteCursor::new(&bytes, 0);
        cursor.read_u8().unwrap();
        assert_eq!(
            read_branch(&mut cursor, Op::Jb, OpSize::W64, 0x1000),
            Ok((OpKind::NearBranch64, 0x1000))
        );

        // 16-bit targets wrap
        let bytes = [0xE9, 0x00, 0x10];
        let mut cursor = ByteCursor::new(&bytes, 0);
        cursor.read_u8().unwrap();
        assert_eq!(
            read_branch(&mut cursor, Op::Jz, OpSize::W16, 0xF000),
            Ok((OpKind::NearBranch16, 0x0003))
        );
    }

    #[test]
    fn test_far_pointer() {
        let bytes = [0x78, 0x56, 0x34, 0x12, 0xCD, 0xAB];
        let mut cursor = ByteCursor::new(&bytes, 0);
        assert_eq!(
            read_far_pointer(&mut cursor, OpSize::W32),
            Ok((OpKind::FarBranch32, 0x1234_5678, 0xABCD))
        );
        let mut cursor = ByteCursor::new(&bytes, 0);
        assert_eq!(
            read_far_pointer(&mut cursor, OpSize::W16),
            Ok((OpKind::FarBranch16, 0x5678, 0x1234))
        );
    }

    #[test]
    fn test_moffs() {
        let bytes = [1, 2, 3, 4, 5, 6, 7, 8];
        let mut cursor = ByteCursor::new(&bytes, 0);
        assert_eq!(read_moffs(&mut cursor, OpSize::W64), Ok(0x0807_0605_0403_0201));
        let mut cursor = ByteCursor::new(&bytes, 0);
        assert_eq!(read_moffs(&mut cursor, OpSize::W16), Ok(0x0201));
    }
}
