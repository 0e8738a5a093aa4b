//! VEX and EVEX template tables.
//!
//! Unlike the legacy maps, vector instructions are stored as flat sorted
//! slices keyed by `(map, opcode, pp)`. Several templates can share a key;
//! they are told apart by the vector length, `W` and whether ModRM selects a
//! register or memory operand.

use decant_core::MemorySize;

use super::opcodes::{OpcodeMap, Template};

/// Vector length a template accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VecLen {
    L128,
    L256,
    L512,
    /// Length ignored
    Lig,
}

impl VecLen {
    fn accepts(self, l: u8) -> bool {
        match self {
            Self::L128 => l == 0,
            Self::L256 => l == 1,
            Self::L512 => l == 2,
            Self::Lig => true,
        }
    }
}

/// `W` bit a template accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WRule {
    W0,
    W1,
    /// `W` ignored
    Wig,
}

impl WRule {
    fn accepts(self, w: bool) -> bool {
        match self {
            Self::W0 => !w,
            Self::W1 => w,
            Self::Wig => true,
        }
    }
}

/// What EVEX.b means on a register form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    None,
    /// Static rounding taken from `L'L`
    Er,
    /// Suppress all exceptions
    Sae,
}

/// Opmask support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskRule {
    /// `aaa` and `z` must be zero
    None,
    /// Merge masking only
    K1,
    /// Merge or zeroing masking
    K1z,
    /// Merge masking with a non-zero opmask
    K1Required,
}

/// Mandatory prefix field values (`pp`).
pub const NP: u8 = 0;
pub const P66: u8 = 1;
pub const PF3: u8 = 2;
pub const PF2: u8 = 3;

/// One VEX or EVEX instruction form.
#[derive(Debug, Clone, Copy)]
pub struct VecTemplate {
    pub map: OpcodeMap,
    pub opcode: u8,
    pub pp: u8,
    pub l: VecLen,
    pub w: WRule,
    pub template: Template,
    /// Memory size used when EVEX.b is set on a memory operand
    pub broadcast: Option<MemorySize>,
    pub rounding: Rounding,
    pub mask: MaskRule,
}

pub const fn vex(map: OpcodeMap, opcode: u8, pp: u8, l: VecLen, w: WRule, template: Template) -> VecTemplate {
    VecTemplate {
        map,
        opcode,
        pp,
        l,
        w,
        template,
        broadcast: None,
        rounding: Rounding::None,
        mask: MaskRule::None,
    }
}

pub const fn evex(map: OpcodeMap, opcode: u8, pp: u8, l: VecLen, w: WRule, template: Template) -> VecTemplate {
    vex(map, opcode, pp, l, w, template)
}

impl VecTemplate {
    pub const fn bcst(mut self, size: MemorySize) -> Self {
        self.broadcast = Some(size);
        self
    }

    pub const fn er(mut self) -> Self {
        self.rounding = Rounding::Er;
        self
    }

    pub const fn sae(mut self) -> Self {
        self.rounding = Rounding::Sae;
        self
    }

    pub const fn k1(mut self) -> Self {
        self.mask = MaskRule::K1;
        self
    }

    pub const fn k1z(mut self) -> Self {
        self.mask = MaskRule::K1z;
        self
    }

    pub const fn k1_required(mut self) -> Self {
        self.mask = MaskRule::K1Required;
        self
    }

    /// Returns true if the template reads `vvvv`.
    pub fn uses_vvvv(&self) -> bool {
        self.template.ops.iter().any(|op| op.uses_vvvv())
    }

    fn accepts(&self, l: u8, w: bool, reg_form: bool) -> bool {
        self.l.accepts(l)
            && self.w.accepts(w)
            && !(reg_form && self.template.mem_only)
            && !(!reg_form && self.template.reg_only)
    }
}

/// All templates of `table` registered under `(map, opcode, pp)`.
pub fn candidates(table: &'static [VecTemplate], map: OpcodeMap, opcode: u8, pp: u8) -> &'static [VecTemplate] {
    let key = (map, opcode, pp);
    let start = table.partition_point(|t| (t.map, t.opcode, t.pp) < key);
    let len = table[start..].partition_point(|t| (t.map, t.opcode, t.pp) == key);
    &table[start..start + len]
}

/// Picks the first candidate accepting the given length, `W` and operand
/// form.
pub fn select(candidates: &'static [VecTemplate], l: u8, w: bool, reg_form: bool) -> Option<&'static VecTemplate> {
    candidates.iter().find(|t| t.accepts(l, w, reg_form))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::x86::opcodes_evex::EVEX_TABLE;
    use crate::x86::opcodes_vex::VEX_TABLE;
    use decant_core::Code;

    fn is_sorted(table: &[VecTemplate]) -> bool {
        table
            .windows(2)
            .all(|w| (w[0].map, w[0].opcode, w[0].pp) <= (w[1].map, w[1].opcode, w[1].pp))
    }

    fn code_of(t: &VecTemplate) -> Option<Code> {
        match t.template.code {
            super::super::opcodes::CodeSel::Fixed(code) => Some(code),
            _ => None,
        }
    }

    #[test]
    fn test_tables_sorted() {
        assert!(is_sorted(VEX_TABLE));
        assert!(is_sorted(EVEX_TABLE));
    }

    #[test]
    fn test_select_by_length() {
        let c = candidates(VEX_TABLE, OpcodeMap::M0F, 0x10, NP);
        assert_eq!(c.len(), 2);
        assert_eq!(select(c, 0, false, true).and_then(code_of), Some(Code::VEX_Vmovups_VX_WX));
        assert_eq!(select(c, 1, true, false).and_then(code_of), Some(Code::VEX_Vmovups_VY_WY));
    }

    #[test]
    fn test_select_by_form() {
        let c = candidates(VEX_TABLE, OpcodeMap::M0F, 0x10, PF3);
        assert_eq!(select(c, 0, false, true).and_then(code_of), Some(Code::VEX_Vmovss_VX_HX_RX));
        assert_eq!(select(c, 1, false, false).and_then(code_of), Some(Code::VEX_Vmovss_VX_M));
    }

    #[test]
    fn test_select_by_w() {
        let c = candidates(EVEX_TABLE, OpcodeMap::M0F, 0x6F, P66);
        assert_eq!(select(c, 2, false, true).and_then(code_of), Some(Code::EVEX_Vmovdqa32_VZ_k1z_WZ));
        assert_eq!(select(c, 2, true, true).and_then(code_of), Some(Code::EVEX_Vmovdqa64_VZ_k1z_WZ));
        assert!(select(c, 3, true, true).is_none());
    }

    #[test]
    fn test_missing_key() {
        assert!(candidates(VEX_TABLE, OpcodeMap::M0F, 0x00, NP).is_empty());
        assert!(candidates(EVEX_TABLE, OpcodeMap::M0F3A, 0xFF, PF2).is_empty());
    }

    #[test]
    fn test_evex_attributes() {
        let c = candidates(EVEX_TABLE, OpcodeMap::M0F, 0x58, NP);
        let zmm = select(c, 2, false, true).expect("vaddps zmm");
        assert_eq!(zmm.rounding, Rounding::Er);
        assert_eq!(zmm.mask, MaskRule::K1z);
        assert_eq!(zmm.broadcast, Some(MemorySize::Broadcast512_Float32));
        let xmm = select(c, 0, false, false).expect("vaddps xmm");
        assert_eq!(xmm.rounding, Rounding::None);
    }

    #[test]
    fn test_gather_templates() {
        let c = candidates(EVEX_TABLE, OpcodeMap::M0F38, 0x90, P66);
        let dq = select(c, 2, true, false).expect("vpgatherdq zmm");
        assert_eq!(code_of(dq), Some(Code::EVEX_Vpgatherdq_VZ_k1_Vm32y));
        assert_eq!(dq.mask, MaskRule::K1Required);
        assert_eq!(dq.template.vsib_index(), Some(decant_core::Register::YMM0));
        assert!(dq.template.mem_only);
        assert!(select(c, 2, true, true).is_none());

        let c = candidates(VEX_TABLE, OpcodeMap::M0F38, 0x91, P66);
        let qd = select(c, 1, false, false).expect("vpgatherqd ymm index");
        assert_eq!(code_of(qd), Some(Code::VEX_Vpgatherqd_VX_Vm64y_HX));
        assert_eq!(qd.template.vsib_index(), Some(decant_core::Register::YMM0));
    }
}
