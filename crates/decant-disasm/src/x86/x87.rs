//! x87 escape opcodes (`D8`-`DF`).
//!
//! Memory forms are selected by ModRM.reg (`*_MEM`), register forms by the
//! low six ModRM bits (`*_REG`).

use decant_core::{Code, MemorySize, Register};

use super::opcodes::{Handler, Op, Template};

const ST_STI: &[Op] = &[Op::St0, Op::Sti];
const STI_ST: &[Op] = &[Op::Sti, Op::St0];

const fn mem(code: Code, size: MemorySize) -> Handler {
    Template::new(code, &[Op::M]).with_mem(size).handler()
}

const fn st_sti(code: Code) -> Handler {
    Template::new(code, ST_STI).handler()
}

const fn sti_st(code: Code) -> Handler {
    Template::new(code, STI_ST).handler()
}

const fn sti(code: Code) -> Handler {
    Template::new(code, &[Op::Sti]).handler()
}

const fn bare(code: Code) -> Handler {
    Template::new(code, &[]).handler()
}

const NONE: Handler = Handler::Invalid;

/// Expands eight `+i` rows into a 64-entry register table, then applies the
/// single-byte forms.
const fn reg_table(rows: [Handler; 8], singles: &[(usize, Handler)]) -> [Handler; 64] {
    let mut t = [Handler::Invalid; 64];
    let mut i = 0;
    while i < 64 {
        t[i] = rows[i / 8];
        i += 1;
    }
    let mut j = 0;
    while j < singles.len() {
        t[singles[j].0] = singles[j].1;
        j += 1;
    }
    t
}

// ---- D8 ----

pub static D8_MEM: [Handler; 8] = [
    mem(Code::Fadd_Mf32, MemorySize::Float32),
    mem(Code::Fmul_Mf32, MemorySize::Float32),
    mem(Code::Fcom_Mf32, MemorySize::Float32),
    mem(Code::Fcomp_Mf32, MemorySize::Float32),
    mem(Code::Fsub_Mf32, MemorySize::Float32),
    mem(Code::Fsubr_Mf32, MemorySize::Float32),
    mem(Code::Fdiv_Mf32, MemorySize::Float32),
    mem(Code::Fdivr_Mf32, MemorySize::Float32),
];

pub static D8_REG: [Handler; 64] = reg_table(
    [
        st_sti(Code::Fadd_ST_STi),
        st_sti(Code::Fmul_ST_STi),
        st_sti(Code::Fcom_ST_STi),
        st_sti(Code::Fcomp_ST_STi),
        st_sti(Code::Fsub_ST_STi),
        st_sti(Code::Fsubr_ST_STi),
        st_sti(Code::Fdiv_ST_STi),
        st_sti(Code::Fdivr_ST_STi),
    ],
    &[],
);

// ---- D9 ----

pub static D9_MEM: [Handler; 8] = [
    mem(Code::Fld_Mf32, MemorySize::Float32),
    NONE,
    mem(Code::Fst_Mf32, MemorySize::Float32),
    mem(Code::Fstp_Mf32, MemorySize::Float32),
    Template::sized([Code::Fldenv_M14, Code::Fldenv_M28, Code::Fldenv_M28], &[Op::M])
        .with_mem_sized([MemorySize::FpuEnv14, MemorySize::FpuEnv28, MemorySize::FpuEnv28])
        .handler(),
    mem(Code::Fldcw_Mw, MemorySize::UInt16),
    Template::sized([Code::Fnstenv_M14, Code::Fnstenv_M28, Code::Fnstenv_M28], &[Op::M])
        .with_mem_sized([MemorySize::FpuEnv14, MemorySize::FpuEnv28, MemorySize::FpuEnv28])
        .handler(),
    mem(Code::Fnstcw_Mw, MemorySize::UInt16),
];

pub static D9_REG: [Handler; 64] = reg_table(
    [st_sti(Code::Fld_ST_STi), st_sti(Code::Fxch_ST_STi), NONE, NONE, NONE, NONE, NONE, NONE],
    &[
        (0x10, bare(Code::Fnop)),
        (0x20, bare(Code::Fchs)),
        (0x21, bare(Code::Fabs)),
        (0x24, bare(Code::Ftst)),
        (0x25, bare(Code::Fxam)),
        (0x28, bare(Code::Fld1)),
        (0x29, bare(Code::Fldl2t)),
        (0x2A, bare(Code::Fldl2e)),
        (0x2B, bare(Code::Fldpi)),
        (0x2C, bare(Code::Fldlg2)),
        (0x2D, bare(Code::Fldln2)),
        (0x2E, bare(Code::Fldz)),
        (0x30, bare(Code::F2xm1)),
        (0x31, bare(Code::Fyl2x)),
        (0x32, bare(Code::Fptan)),
        (0x33, bare(Code::Fpatan)),
        (0x34, bare(Code::Fxtract)),
        (0x35, bare(Code::Fprem1)),
        (0x36, bare(Code::Fdecstp)),
        (0x37, bare(Code::Fincstp)),
        (0x38, bare(Code::Fprem)),
        (0x39, bare(Code::Fyl2xp1)),
        (0x3A, bare(Code::Fsqrt)),
        (0x3B, bare(Code::Fsincos)),
        (0x3C, bare(Code::Frndint)),
        (0x3D, bare(Code::Fscale)),
        (0x3E, bare(Code::Fsin)),
        (0x3F, bare(Code::Fcos)),
    ],
);

// ---- DA ----

pub static DA_MEM: [Handler; 8] = [
    mem(Code::Fiadd_Mfi32, MemorySize::Int32),
    mem(Code::Fimul_Mfi32, MemorySize::Int32),
    mem(Code::Ficom_Mfi32, MemorySize::Int32),
    mem(Code::Ficomp_Mfi32, MemorySize::Int32),
    mem(Code::Fisub_Mfi32, MemorySize::Int32),
    mem(Code::Fisubr_Mfi32, MemorySize::Int32),
    mem(Code::Fidiv_Mfi32, MemorySize::Int32),
    mem(Code::Fidivr_Mfi32, MemorySize::Int32),
];

pub static DA_REG: [Handler; 64] = reg_table(
    [
        st_sti(Code::Fcmovb_ST_STi),
        st_sti(Code::Fcmove_ST_STi),
        st_sti(Code::Fcmovbe_ST_STi),
        st_sti(Code::Fcmovu_ST_STi),
        NONE,
        NONE,
        NONE,
        NONE,
    ],
    &[(0x29, bare(Code::Fucompp))],
);

// ---- DB ----

pub static DB_MEM: [Handler; 8] = [
    mem(Code::Fild_Mfi32, MemorySize::Int32),
    mem(Code::Fisttp_Mfi32, MemorySize::Int32),
    mem(Code::Fist_Mfi32, MemorySize::Int32),
    mem(Code::Fistp_Mfi32, MemorySize::Int32),
    NONE,
    mem(Code::Fld_Mf80, MemorySize::Float80),
    NONE,
    mem(Code::Fstp_Mf80, MemorySize::Float80),
];

pub static DB_REG: [Handler; 64] = reg_table(
    [
        st_sti(Code::Fcmovnb_ST_STi),
        st_sti(Code::Fcmovne_ST_STi),
        st_sti(Code::Fcmovnbe_ST_STi),
        st_sti(Code::Fcmovnu_ST_STi),
        NONE,
        st_sti(Code::Fucomi_ST_STi),
        st_sti(Code::Fcomi_ST_STi),
        NONE,
    ],
    &[(0x22, bare(Code::Fnclex)), (0x23, bare(Code::Fninit))],
);

// ---- DC ----

pub static DC_MEM: [Handler; 8] = [
    mem(Code::Fadd_Mf64, MemorySize::Float64),
    mem(Code::Fmul_Mf64, MemorySize::Float64),
    mem(Code::Fcom_Mf64, MemorySize::Float64),
    mem(Code::Fcomp_Mf64, MemorySize::Float64),
    mem(Code::Fsub_Mf64, MemorySize::Float64),
    mem(Code::Fsubr_Mf64, MemorySize::Float64),
    mem(Code::Fdiv_Mf64, MemorySize::Float64),
    mem(Code::Fdivr_Mf64, MemorySize::Float64),
];

pub static DC_REG: [Handler; 64] = reg_table(
    [
        sti_st(Code::Fadd_STi_ST),
        sti_st(Code::Fmul_STi_ST),
        NONE,
        NONE,
        sti_st(Code::Fsubr_STi_ST),
        sti_st(Code::Fsub_STi_ST),
        sti_st(Code::Fdivr_STi_ST),
        sti_st(Code::Fdiv_STi_ST),
    ],
    &[],
);

// ---- DD ----

pub static DD_MEM: [Handler; 8] = [
    mem(Code::Fld_Mf64, MemorySize::Float64),
    mem(Code::Fisttp_Mf64, MemorySize::Int64),
    mem(Code::Fst_Mf64, MemorySize::Float64),
    mem(Code::Fstp_Mf64, MemorySize::Float64),
    Template::sized([Code::Frstor_M98, Code::Frstor_M108, Code::Frstor_M108], &[Op::M])
        .with_mem_sized([MemorySize::FpuState94, MemorySize::FpuState108, MemorySize::FpuState108])
        .handler(),
    NONE,
    Template::sized([Code::Fnsave_M98, Code::Fnsave_M108, Code::Fnsave_M108], &[Op::M])
        .with_mem_sized([MemorySize::FpuState94, MemorySize::FpuState108, MemorySize::FpuState108])
        .handler(),
    mem(Code::Fnstsw_Mw, MemorySize::UInt16),
];

pub static DD_REG: [Handler; 64] = reg_table(
    [
        sti(Code::Ffree_STi),
        NONE,
        sti(Code::Fst_STi),
        sti(Code::Fstp_STi),
        st_sti(Code::Fucom_ST_STi),
        st_sti(Code::Fucomp_ST_STi),
        NONE,
        NONE,
    ],
    &[],
);

// ---- DE ----

pub static DE_MEM: [Handler; 8] = [
    mem(Code::Fiadd_Mfi16, MemorySize::Int16),
    mem(Code::Fimul_Mfi16, MemorySize::Int16),
    mem(Code::Ficom_Mfi16, MemorySize::Int16),
    mem(Code::Ficomp_Mfi16, MemorySize::Int16),
    mem(Code::Fisub_Mfi16, MemorySize::Int16),
    mem(Code::Fisubr_Mfi16, MemorySize::Int16),
    mem(Code::Fidiv_Mfi16, MemorySize::Int16),
    mem(Code::Fidivr_Mfi16, MemorySize::Int16),
];

pub static DE_REG: [Handler; 64] = reg_table(
    [
        sti_st(Code::Faddp_STi_ST),
        sti_st(Code::Fmulp_STi_ST),
        NONE,
        NONE,
        sti_st(Code::Fsubrp_STi_ST),
        sti_st(Code::Fsubp_STi_ST),
        sti_st(Code::Fdivrp_STi_ST),
        sti_st(Code::Fdivp_STi_ST),
    ],
    &[(0x19, bare(Code::Fcompp))],
);

// ---- DF ----

pub static DF_MEM: [Handler; 8] = [
    mem(Code::Fild_Mfi16, MemorySize::Int16),
    mem(Code::Fisttp_Mfi16, MemorySize::Int16),
    mem(Code::Fist_Mfi16, MemorySize::Int16),
    mem(Code::Fistp_Mfi16, MemorySize::Int16),
    mem(Code::Fbld_Mfbcd, MemorySize::Bcd),
    mem(Code::Fild_Mfi64, MemorySize::Int64),
    mem(Code::Fbstp_Mfbcd, MemorySize::Bcd),
    mem(Code::Fistp_Mfi64, MemorySize::Int64),
];

pub static DF_REG: [Handler; 64] = reg_table(
    [
        NONE,
        NONE,
        NONE,
        NONE,
        NONE,
        st_sti(Code::Fucomip_ST_STi),
        st_sti(Code::Fcomip_ST_STi),
        NONE,
    ],
    &[(0x20, Template::new(Code::Fnstsw_AX, &[Op::Reg(Register::AX)]).handler())],
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::x86::opcodes::CodeSel;

    fn code_of(handler: &Handler) -> Option<Code> {
        match handler {
            Handler::Op(Template {
                code: CodeSel::Fixed(code),
                ..
            }) => Some(*code),
            _ => None,
        }
    }

    #[test]
    fn test_row_expansion() {
        for i in 0..8 {
            assert_eq!(code_of(&D8_REG[i]), Some(Code::Fadd_ST_STi));
            assert_eq!(code_of(&DE_REG[0x38 + i]), Some(Code::Fdivp_STi_ST));
        }
    }

    #[test]
    fn test_single_byte_forms() {
        assert_eq!(code_of(&D9_REG[0x10]), Some(Code::Fnop));
        assert_eq!(code_of(&D9_REG[0x11]), None);
        assert_eq!(code_of(&D9_REG[0x3F]), Some(Code::Fcos));
        assert_eq!(code_of(&DB_REG[0x22]), Some(Code::Fnclex));
        assert_eq!(code_of(&DB_REG[0x24]), None);
        assert_eq!(code_of(&DF_REG[0x20]), Some(Code::Fnstsw_AX));
    }

    #[test]
    fn test_memory_forms_are_memory_only() {
        let Handler::Op(fld) = D9_MEM[0] else {
            panic!("D9 /0 is FLD m32fp");
        };
        assert!(fld.mem_only);
    }
}
