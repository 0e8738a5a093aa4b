//! VEX and EVEX prefix fields.
//!
//! Decoding is split in two phases. The prefix bytes are captured right
//! after the `C4`/`C5`/`62` byte; the meaning of EVEX.b (rounding, SAE or
//! broadcast) is only known once ModRM has told register and memory forms
//! apart and a template has been chosen, so [`VexFields::resolve_evex`]
//! runs after template selection.

use decant_core::{Bitness, Register, RoundingControl};

use super::cursor::ByteCursor;
use super::opcodes::OpcodeMap;
use super::opcodes_vec::{MaskRule, Rounding, VecTemplate};
use crate::DecodeError;

/// Encoding family of a vector prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VexKind {
    Vex2,
    Vex3,
    Evex,
}

/// Raw VEX/EVEX fields, already inverted where the encoding stores them
/// inverted. Register extensions are stored as the value they add to a
/// register number (0, 8 or 16).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VexFields {
    pub kind: VexKind,
    pub map: OpcodeMap,
    /// Implied mandatory prefix: none, `66`, `F3`, `F2`
    pub pp: u8,
    /// VEX.L or EVEX.L'L
    pub l: u8,
    pub w: bool,
    /// Second source register number, 0..=31
    pub vvvv: u8,
    /// Added to ModRM.reg
    pub r: u8,
    /// Added to the SIB index
    pub x: u8,
    /// Added to ModRM.rm and the SIB base
    pub b: u8,
    /// Added to ModRM.reg for vector registers (EVEX.R')
    pub r_hi: u8,
    /// Added to ModRM.rm for vector registers (EVEX.X)
    pub rm_hi: u8,
    /// Opmask register number
    pub aaa: u8,
    pub z: bool,
    /// EVEX.b
    pub bcst: bool,
}

/// EVEX attributes that depend on the selected template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvexAttributes {
    pub op_mask: Register,
    pub zeroing: bool,
    pub rounding: RoundingControl,
    pub sae: bool,
    pub broadcast: bool,
}

impl VexFields {
    fn new(kind: VexKind, map: OpcodeMap) -> Self {
        Self {
            kind,
            map,
            pp: 0,
            l: 0,
            w: false,
            vvvv: 0,
            r: 0,
            x: 0,
            b: 0,
            r_hi: 0,
            rm_hi: 0,
            aaa: 0,
            z: false,
            bcst: false,
        }
    }

    /// Reads the payload of a 2-byte VEX prefix (`C5 RvvvvLpp`).
    pub fn read_vex2(cursor: &mut ByteCursor<'_>, bitness: Bitness) -> Result<Self, DecodeError> {
        let b1 = cursor.read_u8()?;
        let mut fields = Self::new(VexKind::Vex2, OpcodeMap::M0F);
        fields.pp = b1 & 3;
        fields.l = (b1 >> 2) & 1;
        if bitness.is_64bit() {
            fields.r = (!b1 >> 4) & 8;
            fields.vvvv = (!b1 >> 3) & 0x0F;
        } else {
            fields.vvvv = (!b1 >> 3) & 0x07;
        }
        Ok(fields)
    }

    /// Reads the payload of a 3-byte VEX prefix (`C4 RXBmmmmm WvvvvLpp`).
    pub fn read_vex3(cursor: &mut ByteCursor<'_>, bitness: Bitness) -> Result<Self, DecodeError> {
        let b1 = cursor.read_u8()?;
        let b2 = cursor.read_u8()?;
        let map = OpcodeMap::from_vex(b1 & 0x1F).ok_or(DecodeError::invalid("reserved VEX map"))?;
        let mut fields = Self::new(VexKind::Vex3, map);
        fields.pp = b2 & 3;
        fields.l = (b2 >> 2) & 1;
        fields.w = b2 & 0x80 != 0;
        if bitness.is_64bit() {
            fields.r = (!b1 >> 4) & 8;
            fields.x = (!b1 >> 3) & 8;
            fields.b = (!b1 >> 2) & 8;
            fields.vvvv = (!b2 >> 3) & 0x0F;
        } else {
            fields.vvvv = (!b2 >> 3) & 0x07;
        }
        Ok(fields)
    }

    /// Reads the payload of an EVEX prefix (`62 P0 P1 P2`).
    pub fn read_evex(cursor: &mut ByteCursor<'_>, bitness: Bitness) -> Result<Self, DecodeError> {
        let p0 = cursor.read_u8()?;
        let p1 = cursor.read_u8()?;
        let p2 = cursor.read_u8()?;
        if p0 & 0x0C != 0 {
            return Err(DecodeError::invalid("EVEX.P0 reserved bits set"));
        }
        if p1 & 0x04 == 0 {
            return Err(DecodeError::invalid("EVEX.P1 fixed bit clear"));
        }
        let map = OpcodeMap::from_vex(p0 & 3).ok_or(DecodeError::invalid("reserved EVEX map"))?;
        let mut fields = Self::new(VexKind::Evex, map);
        fields.pp = p1 & 3;
        fields.w = p1 & 0x80 != 0;
        fields.aaa = p2 & 7;
        fields.bcst = p2 & 0x10 != 0;
        fields.l = (p2 >> 5) & 3;
        fields.z = p2 & 0x80 != 0;
        if bitness.is_64bit() {
            fields.r = (!p0 >> 4) & 8;
            fields.x = (!p0 >> 3) & 8;
            fields.b = (!p0 >> 2) & 8;
            fields.r_hi = !p0 & 0x10;
            fields.rm_hi = (!p0 >> 2) & 0x10;
            fields.vvvv = ((!p1 >> 3) & 0x0F) | ((!p2 & 8) << 1);
        } else {
            fields.vvvv = (!p1 >> 3) & 0x07;
        }
        Ok(fields)
    }

    pub fn is_evex(&self) -> bool {
        self.kind == VexKind::Evex
    }

    /// Vector length used to pick a template. EVEX.b on a register form
    /// turns `L'L` into a rounding mode and implies 512-bit vectors.
    pub fn selection_length(&self, reg_form: bool) -> u8 {
        if self.is_evex() && reg_form && self.bcst {
            2
        } else {
            self.l
        }
    }

    /// Rejects a non-zero `vvvv` on templates that do not read it.
    ///
    /// EVEX.V' extends a VSIB index instead, so it is not checked here.
    pub fn check_vvvv(&self, template: &VecTemplate) -> Result<(), DecodeError> {
        let vvvv = if template.template.vsib_index().is_some() {
            self.vvvv & 0x0F
        } else {
            self.vvvv
        };
        if vvvv != 0 && !template.uses_vvvv() {
            return Err(DecodeError::invalid("vvvv must be 1111b"));
        }
        Ok(())
    }

    /// Interprets EVEX.b, `L'L`, `aaa` and `z` for the selected template.
    pub fn resolve_evex(&self, template: &VecTemplate, reg_form: bool) -> Result<EvexAttributes, DecodeError> {
        let mut attrs = EvexAttributes::default();

        if self.bcst && reg_form {
            match template.rounding {
                Rounding::Er => attrs.rounding = RoundingControl::from_evex_ll(self.l),
                Rounding::Sae => attrs.sae = true,
                Rounding::None => return Err(DecodeError::invalid("EVEX.b on a register operand")),
            }
        } else {
            if self.l == 3 {
                return Err(DecodeError::invalid("reserved EVEX vector length"));
            }
            if self.bcst {
                if template.broadcast.is_none() {
                    return Err(DecodeError::invalid("broadcast not supported"));
                }
                attrs.broadcast = true;
            }
        }

        if self.z && self.aaa == 0 {
            return Err(DecodeError::invalid("zeroing-masking without an opmask"));
        }
        let memory_dest = !reg_form && template.template.ops.first().is_some_and(|op| op.is_rm());
        match template.mask {
            MaskRule::None if self.aaa != 0 || self.z => {
                return Err(DecodeError::invalid("opmask not allowed"));
            }
            MaskRule::K1 | MaskRule::K1Required if self.z => {
                return Err(DecodeError::invalid("zeroing-masking not allowed"));
            }
            MaskRule::K1Required if self.aaa == 0 => return Err(DecodeError::invalid("opmask required")),
            MaskRule::K1z if self.z && memory_dest => {
                return Err(DecodeError::invalid("zeroing-masking on a memory destination"));
            }
            _ => {}
        }
        if self.aaa != 0 {
            attrs.op_mask = Register::K0.offset(u32::from(self.aaa)).unwrap_or(Register::None);
        }
        attrs.zeroing = self.z;
        Ok(attrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::x86::opcodes_evex::EVEX_TABLE;
    use crate::x86::opcodes_vec::{candidates, select, P66};

    fn read(kind: VexKind, bytes: &[u8], bitness: Bitness) -> Result<VexFields, DecodeError> {
        let mut cursor = ByteCursor::new(bytes, 0);
        match kind {
            VexKind::Vex2 => VexFields::read_vex2(&mut cursor, bitness),
            VexKind::Vex3 => VexFields::read_vex3(&mut cursor, bitness),
            VexKind::Evex => VexFields::read_evex(&mut cursor, bitness),
        }
    }

    #[test]
    fn test_vex2_fields() {
        // R=0, vvvv=2, L=1, pp=0
        let f = read(VexKind::Vex2, &[0x6C], Bitness::Bits64).unwrap();
        assert_eq!(f.r, 8);
        assert_eq!(f.vvvv, 2);
        assert_eq!(f.l, 1);
        assert_eq!(f.pp, 0);
        assert_eq!(f.map, OpcodeMap::M0F);
    }

    #[test]
    fn test_vex2_outside_long_mode() {
        // top bit of vvvv and R are ignored
        let f = read(VexKind::Vex2, &[0xC5], Bitness::Bits32).unwrap();
        assert_eq!(f.r, 0);
        assert_eq!(f.vvvv, 7);
        assert_eq!(f.pp, 1);
    }

    #[test]
    fn test_vex3_fields() {
        let f = read(VexKind::Vex3, &[0x42, 0xFD], Bitness::Bits64).unwrap();
        assert_eq!(f.map, OpcodeMap::M0F38);
        assert_eq!((f.r, f.x, f.b), (8, 0, 8));
        assert!(f.w);
        assert_eq!(f.vvvv, 0);
        assert_eq!(f.l, 1);
        assert_eq!(f.pp, 1);
    }

    #[test]
    fn test_vex3_reserved_map() {
        let err = read(VexKind::Vex3, &[0xE4, 0x7D], Bitness::Bits64).unwrap_err();
        assert_eq!(err, DecodeError::invalid("reserved VEX map"));
    }

    #[test]
    fn test_evex_fields() {
        let f = read(VexKind::Evex, &[0xF2, 0x7D, 0x8B], Bitness::Bits16).unwrap();
        assert_eq!(f.map, OpcodeMap::M0F38);
        assert_eq!(f.pp, 1);
        assert!(!f.w);
        assert_eq!(f.vvvv, 0);
        assert_eq!(f.aaa, 3);
        assert!(f.z);
        assert!(!f.bcst);
        assert_eq!(f.l, 0);
    }

    #[test]
    fn test_evex_high_registers() {
        // R'=0, X=0, V'=0 in 64-bit mode
        let f = read(VexKind::Evex, &[0xA1, 0x7C, 0x40], Bitness::Bits64).unwrap();
        assert_eq!(f.r_hi, 16);
        assert_eq!(f.rm_hi, 16);
        assert_eq!(f.x, 8);
        assert_eq!(f.vvvv, 16);
        assert_eq!(f.l, 2);
    }

    #[test]
    fn test_evex_fixed_bits() {
        assert!(read(VexKind::Evex, &[0xF5, 0x7C, 0x08], Bitness::Bits64).is_err());
        assert!(read(VexKind::Evex, &[0xF1, 0x78, 0x08], Bitness::Bits64).is_err());
        assert!(read(VexKind::Evex, &[0xF0, 0x7C, 0x08], Bitness::Bits64).is_err());
    }

    fn pmovsxbw(l: u8) -> &'static VecTemplate {
        let c = candidates(EVEX_TABLE, OpcodeMap::M0F38, 0x20, P66);
        select(c, l, false, false).expect("vpmovsxbw")
    }

    #[test]
    fn test_resolve_mask_and_zeroing() {
        let f = read(VexKind::Evex, &[0xF2, 0x7D, 0x8B], Bitness::Bits16).unwrap();
        let attrs = f.resolve_evex(pmovsxbw(0), false).unwrap();
        assert_eq!(attrs.op_mask, Register::K3);
        assert!(attrs.zeroing);
        assert!(!attrs.broadcast);
        assert_eq!(attrs.rounding, RoundingControl::None);
    }

    #[test]
    fn test_resolve_zeroing_needs_opmask() {
        // z=1, aaa=000
        let f = read(VexKind::Evex, &[0xF2, 0x7D, 0x88], Bitness::Bits64).unwrap();
        assert_eq!(
            f.resolve_evex(pmovsxbw(0), true),
            Err(DecodeError::invalid("zeroing-masking without an opmask"))
        );
        let f = read(VexKind::Evex, &[0xF2, 0x7D, 0x89], Bitness::Bits64).unwrap();
        assert!(f.resolve_evex(pmovsxbw(0), true).unwrap().zeroing);
    }

    #[test]
    fn test_resolve_rejects_broadcast_without_bcst_size() {
        let f = read(VexKind::Evex, &[0xF2, 0x7D, 0x18], Bitness::Bits64).unwrap();
        assert_eq!(
            f.resolve_evex(pmovsxbw(0), false),
            Err(DecodeError::invalid("broadcast not supported"))
        );
    }

    #[test]
    fn test_resolve_rounding() {
        // vaddps zmm, zmm, zmm {ru-sae}: L'L=10, b=1
        let f = read(VexKind::Evex, &[0xF1, 0x7C, 0x58], Bitness::Bits64).unwrap();
        let c = candidates(EVEX_TABLE, OpcodeMap::M0F, 0x58, 0);
        let t = select(c, f.selection_length(true), f.w, true).unwrap();
        let attrs = f.resolve_evex(t, true).unwrap();
        assert_eq!(attrs.rounding, RoundingControl::RoundUp);
        assert_eq!(attrs.op_mask, Register::None);
    }

    #[test]
    fn test_resolve_reserved_length() {
        let f = read(VexKind::Evex, &[0xF1, 0x7C, 0x68], Bitness::Bits64).unwrap();
        let c = candidates(EVEX_TABLE, OpcodeMap::M0F, 0x58, 0);
        let t = select(c, 2, false, false).unwrap();
        assert_eq!(f.resolve_evex(t, false), Err(DecodeError::invalid("reserved EVEX vector length")));
    }
}
