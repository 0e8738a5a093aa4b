//! Legacy and REX prefix scanning.

use decant_core::{Bitness, Register};

use super::cursor::ByteCursor;
use crate::DecodeError;

/// REX prefix fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rex {
    /// REX.W - 64-bit operand size
    pub w: bool,
    /// REX.R - extends ModR/M reg field
    pub r: bool,
    /// REX.X - extends SIB index field
    pub x: bool,
    /// REX.B - extends ModR/M r/m, SIB base, or opcode reg
    pub b: bool,
}

impl Rex {
    /// Parse a REX byte.
    pub fn from_byte(byte: u8) -> Self {
        Self {
            w: byte & 0x08 != 0,
            r: byte & 0x04 != 0,
            x: byte & 0x02 != 0,
            b: byte & 0x01 != 0,
        }
    }
}

/// Mandatory prefix class, in `pp` order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MandatoryPrefix {
    #[default]
    None,
    P66,
    PF3,
    PF2,
}

impl MandatoryPrefix {
    /// Index into a `none / 66 / F3 / F2` table; equal to the VEX `pp` field.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Prefixes seen before the opcode.
#[derive(Debug, Clone, Copy, Default)]
pub struct Prefixes {
    /// Operand size override (0x66)
    pub operand_size: bool,
    /// Address size override (0x67)
    pub address_size: bool,
    /// LOCK prefix (0xF0)
    pub lock: bool,
    /// REP/REPE prefix (0xF3) seen
    pub repe: bool,
    /// REPNE prefix (0xF2) seen
    pub repne: bool,
    /// Last of F2/F3
    pub last_rep: MandatoryPrefix,
    /// Segment override, or `Register::None`
    pub segment: Register,
    /// REX prefix directly preceding the opcode (64-bit mode only)
    pub rex: Option<Rex>,
    /// Number of prefix bytes
    pub count: usize,
}

impl Prefixes {
    /// Consumes prefixes and returns them with the first opcode byte.
    pub fn scan(cursor: &mut ByteCursor<'_>, bitness: Bitness) -> Result<(Self, u8), DecodeError> {
        let mut prefixes = Self::default();
        let mut fs_gs_seen = false;
        loop {
            let byte = cursor.read_u8()?;
            let segment = match byte {
                0x26 => Some(Register::ES),
                0x2E => Some(Register::CS),
                0x36 => Some(Register::SS),
                0x3E => Some(Register::DS),
                0x64 => Some(Register::FS),
                0x65 => Some(Register::GS),
                _ => None,
            };
            match (byte, segment) {
                (_, Some(seg)) => {
                    let is_fs_gs = matches!(seg, Register::FS | Register::GS);
                    // ES/CS/SS/DS do not override FS/GS in 64-bit mode
                    if is_fs_gs || !(bitness.is_64bit() && fs_gs_seen) {
                        prefixes.segment = seg;
                    }
                    fs_gs_seen |= is_fs_gs;
                }
                (0x66, _) => prefixes.operand_size = true,
                (0x67, _) => prefixes.address_size = true,
                (0xF0, _) => prefixes.lock = true,
                (0xF2, _) => {
                    prefixes.repne = true;
                    prefixes.last_rep = MandatoryPrefix::PF2;
                }
                (0xF3, _) => {
                    prefixes.repe = true;
                    prefixes.last_rep = MandatoryPrefix::PF3;
                }
                (0x40..=0x4F, _) if bitness.is_64bit() => {
                    prefixes.count += 1;
                    prefixes.rex = Some(Rex::from_byte(byte));
                    continue;
                }
                _ => return Ok((prefixes, byte)),
            }
            // A legacy prefix after REX cancels it
            prefixes.rex = None;
            prefixes.count += 1;
        }
    }

    /// The prefix a `Prefixed` table would consume: the last of F2/F3, else
    /// `66`.
    pub fn mandatory(&self) -> MandatoryPrefix {
        match self.last_rep {
            MandatoryPrefix::None if self.operand_size => MandatoryPrefix::P66,
            rep => rep,
        }
    }

    /// Returns true if a `66`, `F2` or `F3` prefix was seen.
    pub fn has_simd_prefix(&self) -> bool {
        self.operand_size || self.repe || self.repne
    }

    pub fn rex_w(&self) -> bool {
        self.rex.is_some_and(|r| r.w)
    }

    pub fn rex_b(&self) -> bool {
        self.rex.is_some_and(|r| r.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(bytes: &[u8], bitness: Bitness) -> (Prefixes, u8) {
        let mut cursor = ByteCursor::new(bytes, 0);
        Prefixes::scan(&mut cursor, bitness).unwrap()
    }

    #[test]
    fn test_no_prefixes() {
        let (p, op) = scan(&[0x90], Bitness::Bits64);
        assert_eq!(op, 0x90);
        assert_eq!(p.count, 0);
        assert_eq!(p.mandatory(), MandatoryPrefix::None);
    }

    #[test]
    fn test_rex_must_be_last() {
        let (p, op) = scan(&[0x48, 0x89, 0xC8], Bitness::Bits64);
        assert_eq!(op, 0x89);
        assert!(p.rex_w());

        let (p, op) = scan(&[0x48, 0x66, 0x89, 0xC8], Bitness::Bits64);
        assert_eq!(op, 0x89);
        assert!(p.rex.is_none());
        assert!(p.operand_size);
        assert_eq!(p.count, 2);
    }

    #[test]
    fn test_rex_is_inc_outside_long_mode() {
        let (p, op) = scan(&[0x48, 0x89], Bitness::Bits32);
        assert_eq!(op, 0x48);
        assert!(p.rex.is_none());
    }

    #[test]
    fn test_last_rep_wins() {
        let (p, _) = scan(&[0xF3, 0xF2, 0x0F], Bitness::Bits32);
        assert!(p.repe && p.repne);
        assert_eq!(p.mandatory(), MandatoryPrefix::PF2);

        let (p, _) = scan(&[0xF2, 0x66, 0xF3, 0x0F], Bitness::Bits32);
        assert_eq!(p.mandatory(), MandatoryPrefix::PF3);
    }

    #[test]
    fn test_66_is_mandatory_without_rep() {
        let (p, _) = scan(&[0x66, 0x66, 0x0F], Bitness::Bits16);
        assert_eq!(p.mandatory(), MandatoryPrefix::P66);
        assert_eq!(p.mandatory().index(), 1);
    }

    #[test]
    fn test_segment_last_wins() {
        let (p, _) = scan(&[0x2E, 0x36, 0x8B], Bitness::Bits32);
        assert_eq!(p.segment, Register::SS);
        let (p, _) = scan(&[0x64, 0x2E, 0x8B], Bitness::Bits32);
        assert_eq!(p.segment, Register::CS);
    }

    #[test]
    fn test_fs_gs_sticky_in_long_mode() {
        let (p, _) = scan(&[0x64, 0x2E, 0x8B], Bitness::Bits64);
        assert_eq!(p.segment, Register::FS);
        let (p, _) = scan(&[0x64, 0x2E, 0x65, 0x8B], Bitness::Bits64);
        assert_eq!(p.segment, Register::GS);
    }

    #[test]
    fn test_prefixes_only() {
        let mut cursor = ByteCursor::new(&[0x66, 0xF3], 0);
        let err = Prefixes::scan(&mut cursor, Bitness::Bits64).unwrap_err();
        assert_eq!(err, DecodeError::out_of_data(1, 2));
    }
}
