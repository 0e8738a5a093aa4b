//! Opcode map dispatch.
//!
//! Walks the handler tree of the legacy maps, or looks up the VEX/EVEX
//! tables, until a single template is left. ModRM is read as soon as a
//! handler needs it and handed on to the assembler.

use std::ptr;

use decant_core::Bitness;

use super::cursor::ByteCursor;
use super::modrm::ModRm;
use super::opcodes::{Handler, OpcodeMap, Template, ONE_BYTE};
use super::opcodes_0f::TWO_BYTE;
use super::opcodes_0f38::MAP_0F38;
use super::opcodes_0f3a::MAP_0F3A;
use super::opcodes_evex::EVEX_TABLE;
use super::opcodes_vec::{candidates, select, VecTemplate};
use super::opcodes_vex::VEX_TABLE;
use super::prefix::{MandatoryPrefix, Prefixes};
use super::vex::{VexFields, VexKind};
use crate::DecodeError;

/// Result of dispatch: the template and everything read on the way.
#[derive(Debug, Clone, Copy)]
pub struct Selected {
    pub template: &'static Template,
    /// Set for VEX/EVEX encodings
    pub vector: Option<(&'static VecTemplate, VexFields)>,
    pub modrm: Option<ModRm>,
    pub opcode: u8,
    /// False if a `66` prefix was consumed as a mandatory prefix
    pub operand_size_prefix: bool,
}

impl Selected {
    /// True if there is no ModRM memory operand.
    pub fn is_register_form(&self) -> bool {
        self.modrm.is_none_or(|m| m.is_register())
    }
}

fn legacy_table(map: OpcodeMap) -> &'static [Handler; 256] {
    match map {
        OpcodeMap::Primary => &ONE_BYTE,
        OpcodeMap::M0F => &TWO_BYTE,
        OpcodeMap::M0F38 => &MAP_0F38,
        OpcodeMap::M0F3A => &MAP_0F3A,
    }
}

fn read_modrm(cursor: &mut ByteCursor<'_>, modrm: &mut Option<ModRm>) -> Result<ModRm, DecodeError> {
    match *modrm {
        Some(m) => Ok(m),
        None => {
            let m = ModRm::from_byte(cursor.read_u8()?);
            *modrm = Some(m);
            Ok(m)
        }
    }
}

/// Selects the template for the instruction whose first non-prefix byte is
/// `first`. Mandatory prefixes consumed on the way are removed from
/// `prefixes`.
pub fn dispatch(
    cursor: &mut ByteCursor<'_>,
    bitness: Bitness,
    prefixes: &mut Prefixes,
    first: u8,
) -> Result<Selected, DecodeError> {
    let mut map = OpcodeMap::Primary;
    let mut opcode = first;
    let mut handler: &'static Handler = &ONE_BYTE[usize::from(first)];
    let mut modrm = None;
    let mut operand_size_prefix = prefixes.operand_size;

    loop {
        handler = match handler {
            Handler::Invalid => return Err(DecodeError::invalid_opcode(opcode, map)),
            Handler::Op(template) => {
                if template.needs_modrm() {
                    read_modrm(cursor, &mut modrm)?;
                }
                return Ok(Selected {
                    template,
                    vector: None,
                    modrm,
                    opcode,
                    operand_size_prefix,
                });
            }
            Handler::Group(table) => {
                let m = read_modrm(cursor, &mut modrm)?;
                &table[usize::from(m.reg)]
            }
            Handler::RmGroup(by_reg, by_rm) => {
                let m = read_modrm(cursor, &mut modrm)?;
                match &by_rm[m.low6()] {
                    h if m.is_register() && !matches!(h, Handler::Invalid) => h,
                    _ => &by_reg[usize::from(m.reg)],
                }
            }
            Handler::RegMem { reg, mem } => {
                let m = read_modrm(cursor, &mut modrm)?;
                if m.is_register() {
                    *reg
                } else {
                    *mem
                }
            }
            Handler::Prefixed(table) => {
                let mandatory = prefixes.mandatory();
                match mandatory {
                    MandatoryPrefix::P66 => operand_size_prefix = false,
                    MandatoryPrefix::PF3 => prefixes.repe = false,
                    MandatoryPrefix::PF2 => prefixes.repne = false,
                    MandatoryPrefix::None => {}
                }
                &table[mandatory.index()]
            }
            Handler::RepPrefixed { normal, f3, f2 } => {
                let chosen: &'static Handler = match prefixes.last_rep {
                    MandatoryPrefix::PF3 => *f3,
                    MandatoryPrefix::PF2 => *f2,
                    _ => *normal,
                };
                // A prefix that selects the plain form stays a REP prefix
                if !ptr::eq(chosen, *normal) {
                    match prefixes.last_rep {
                        MandatoryPrefix::PF3 => prefixes.repe = false,
                        MandatoryPrefix::PF2 => prefixes.repne = false,
                        _ => {}
                    }
                }
                chosen
            }
            Handler::RexB { plain, rex_b } => {
                if prefixes.rex_b() {
                    *rex_b
                } else {
                    *plain
                }
            }
            Handler::Bitness { legacy, long } => {
                if bitness.is_64bit() {
                    *long
                } else {
                    *legacy
                }
            }
            Handler::Escape(next) => {
                map = *next;
                opcode = cursor.read_u8()?;
                &legacy_table(map)[usize::from(opcode)]
            }
            Handler::Vex2(fallback) | Handler::Vex3(fallback) | Handler::Evex(fallback) => {
                // Outside 64-bit mode C4/C5/62 are LES/LDS/BOUND unless the
                // next byte is a register-form ModRM
                if !bitness.is_64bit() && cursor.peek().is_some_and(|b| b < 0xC0) {
                    *fallback
                } else {
                    let kind = match handler {
                        Handler::Vex2(_) => VexKind::Vex2,
                        Handler::Vex3(_) => VexKind::Vex3,
                        _ => VexKind::Evex,
                    };
                    return dispatch_vector(cursor, bitness, prefixes, kind);
                }
            }
        };
    }
}

fn dispatch_vector(
    cursor: &mut ByteCursor<'_>,
    bitness: Bitness,
    prefixes: &Prefixes,
    kind: VexKind,
) -> Result<Selected, DecodeError> {
    if prefixes.rex.is_some() {
        return Err(DecodeError::invalid("REX prefix before VEX/EVEX"));
    }
    if prefixes.has_simd_prefix() {
        return Err(DecodeError::invalid("66/F2/F3 prefix before VEX/EVEX"));
    }

    let (fields, table) = match kind {
        VexKind::Vex2 => (VexFields::read_vex2(cursor, bitness)?, VEX_TABLE),
        VexKind::Vex3 => (VexFields::read_vex3(cursor, bitness)?, VEX_TABLE),
        VexKind::Evex => (VexFields::read_evex(cursor, bitness)?, EVEX_TABLE),
    };
    let opcode = cursor.read_u8()?;
    let forms = candidates(table, fields.map, opcode, fields.pp);
    if forms.is_empty() {
        return Err(DecodeError::invalid_opcode(opcode, fields.map));
    }

    let modrm = if forms.iter().any(|t| t.template.needs_modrm()) {
        Some(ModRm::from_byte(cursor.read_u8()?))
    } else {
        None
    };
    let reg_form = modrm.is_none_or(|m| m.is_register());
    let chosen = select(forms, fields.selection_length(reg_form), fields.w, reg_form)
        .ok_or(DecodeError::invalid_opcode(opcode, fields.map))?;

    Ok(Selected {
        template: &chosen.template,
        vector: Some((chosen, fields)),
        modrm,
        opcode,
        operand_size_prefix: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::x86::opcodes::CodeSel;
    use decant_core::Code;

    fn run(bytes: &[u8], bitness: Bitness) -> Result<(Selected, Prefixes), DecodeError> {
        let mut cursor = ByteCursor::new(bytes, 0);
        let (mut prefixes, first) = Prefixes::scan(&mut cursor, bitness)?;
        let selected = dispatch(&mut cursor, bitness, &mut prefixes, first)?;
        Ok((selected, prefixes))
    }

    fn code(bytes: &[u8], bitness: Bitness) -> CodeSel {
        run(bytes, bitness).unwrap().0.template.code
    }

    #[test]
    fn test_group_by_reg() {
        // 80 /7 is CMP
        assert_eq!(code(&[0x80, 0xF8, 0x01], Bitness::Bits32), CodeSel::Fixed(Code::Cmp_Eb_Ib));
    }

    #[test]
    fn test_rm_group_fallback() {
        // C7 F8 is XBEGIN, C7 C0 falls back to MOV
        assert!(matches!(code(&[0xC7, 0xF8, 0, 0, 0, 0], Bitness::Bits64), CodeSel::Sized(_)));
        let (sel, _) = run(&[0xC7, 0xC0, 0, 0, 0, 0], Bitness::Bits64).unwrap();
        assert_eq!(sel.template.code, CodeSel::Sized([Code::Mov_Ew_Iw, Code::Mov_Ed_Id, Code::Mov_Eq_Id64]));
        // 0F 01 D0 is XGETBV; memory forms use the ModRM.reg table
        assert_eq!(code(&[0x0F, 0x01, 0xD0], Bitness::Bits64), CodeSel::Fixed(Code::Xgetbv));
        assert_eq!(code(&[0x0F, 0x01, 0x38], Bitness::Bits64), CodeSel::Fixed(Code::Invlpg_M));
    }

    #[test]
    fn test_mandatory_prefix_consumed() {
        let (sel, prefixes) = run(&[0x66, 0x0F, 0x38, 0x20, 0x08], Bitness::Bits16).unwrap();
        assert_eq!(sel.template.code, CodeSel::Fixed(Code::Pmovsxbw_VX_WX));
        assert!(!sel.operand_size_prefix);
        assert!(sel.modrm.is_some());
        assert!(!prefixes.repe);

        let (sel, prefixes) = run(&[0xF3, 0x0F, 0x10, 0xC1], Bitness::Bits64).unwrap();
        assert_eq!(sel.template.code, CodeSel::Fixed(Code::Movss_VX_WX));
        assert!(!prefixes.repe);
    }

    #[test]
    fn test_rep_prefixed() {
        let (sel, prefixes) = run(&[0xF3, 0x90], Bitness::Bits32).unwrap();
        assert_eq!(sel.template.code, CodeSel::Fixed(Code::Pause));
        assert!(!prefixes.repe);

        // F2 90 stays a NOP with a REPNE prefix
        let (sel, prefixes) = run(&[0xF2, 0x90], Bitness::Bits32).unwrap();
        assert!(matches!(sel.template.code, CodeSel::Sized([Code::Nopw, ..])));
        assert!(prefixes.repne);

        // 66 keeps acting as the operand size prefix for POPCNT
        let (sel, _) = run(&[0x66, 0xF3, 0x0F, 0xB8, 0xC1], Bitness::Bits64).unwrap();
        assert!(sel.operand_size_prefix);
    }

    #[test]
    fn test_mode_selection() {
        assert_eq!(code(&[0x63, 0xC1], Bitness::Bits32), CodeSel::Fixed(Code::Arpl_Ew_Gw));
        assert!(matches!(code(&[0x63, 0xC1], Bitness::Bits64), CodeSel::Sized([Code::Movsxd_Gw_Ew, ..])));
        assert!(matches!(
            run(&[0x82, 0xC0, 0x01], Bitness::Bits64),
            Err(DecodeError::InvalidOpcode { opcode: 0x82, map: OpcodeMap::Primary })
        ));
    }

    #[test]
    fn test_les_versus_vex() {
        // C4 with a memory ModRM is LES in 32-bit mode
        let (sel, _) = run(&[0xC4, 0x00], Bitness::Bits32).unwrap();
        assert!(sel.vector.is_none());
        assert!(matches!(sel.template.code, CodeSel::Sized([Code::Les_Gw_Mp, ..])));

        let (sel, _) = run(&[0xC5, 0xF8, 0x10, 0xC1], Bitness::Bits32).unwrap();
        assert_eq!(sel.template.code, CodeSel::Fixed(Code::VEX_Vmovups_VX_WX));
        assert!(sel.vector.is_some());
    }

    #[test]
    fn test_vex_after_prefix() {
        assert_eq!(
            run(&[0x66, 0xC5, 0xF8, 0x10, 0xC1], Bitness::Bits64).unwrap_err(),
            DecodeError::invalid("66/F2/F3 prefix before VEX/EVEX")
        );
        assert_eq!(
            run(&[0x40, 0xC5, 0xF8, 0x10, 0xC1], Bitness::Bits64).unwrap_err(),
            DecodeError::invalid("REX prefix before VEX/EVEX")
        );
    }

    #[test]
    fn test_vector_without_modrm() {
        let (sel, _) = run(&[0xC5, 0xFC, 0x77], Bitness::Bits64).unwrap();
        assert_eq!(sel.template.code, CodeSel::Fixed(Code::VEX_Vzeroall));
        assert!(sel.modrm.is_none());
    }

    #[test]
    fn test_unknown_opcodes() {
        assert_eq!(
            run(&[0x0F, 0x38, 0xFF, 0xC0], Bitness::Bits64).unwrap_err(),
            DecodeError::invalid_opcode(0xFF, OpcodeMap::M0F38)
        );
        assert_eq!(
            run(&[0xC5, 0xF8, 0x00, 0xC0], Bitness::Bits64).unwrap_err(),
            DecodeError::invalid_opcode(0x00, OpcodeMap::M0F)
        );
    }
}
