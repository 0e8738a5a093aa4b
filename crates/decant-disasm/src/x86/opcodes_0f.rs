//! Two-byte opcode map (`0F xx`).

use decant_core::{Code, MemorySize, Register};

use super::opcodes::{CodeSel, Handler, Op, OpcodeMap, Template};

const G_E: &[Op] = &[Op::Gv, Op::Ev];
const E_G: &[Op] = &[Op::Ev, Op::Gv];
const V_W: &[Op] = &[Op::VX, Op::WX];
const W_V: &[Op] = &[Op::WX, Op::VX];
const P_Q: &[Op] = &[Op::P, Op::Q];

/// Builds a `none / 66 / F3 / F2` SSE handler table.
const fn sse(
    ps: Option<(Code, MemorySize)>,
    pd: Option<(Code, MemorySize)>,
    ss: Option<(Code, MemorySize)>,
    sd: Option<(Code, MemorySize)>,
    ops: &'static [Op],
) -> [Handler; 4] {
    [entry(ps, ops), entry(pd, ops), entry(ss, ops), entry(sd, ops)]
}

const fn entry(form: Option<(Code, MemorySize)>, ops: &'static [Op]) -> Handler {
    match form {
        Some((code, mem)) => Template::new(code, ops).with_mem(mem).handler(),
        None => Handler::Invalid,
    }
}

/// Builds a `none / 66` table for an integer op with MMX and SSE2 forms.
const fn mmx_sse(mmx: Option<(Code, MemorySize)>, xmm: (Code, MemorySize)) -> [Handler; 4] {
    [entry(mmx, P_Q), entry(Some(xmm), V_W), Handler::Invalid, Handler::Invalid]
}

const PS: MemorySize = MemorySize::Packed128_Float32;
const PD: MemorySize = MemorySize::Packed128_Float64;
const SS: MemorySize = MemorySize::Float32;
const SD: MemorySize = MemorySize::Float64;

// ---- groups ----

static GROUP_0F00: [Handler; 8] = [
    Template::sized([Code::Sldtw_Ew, Code::Sldtd_Ew, Code::Sldtq_Ew], &[Op::Ev]).with_mem(MemorySize::UInt16).handler(),
    Template::sized([Code::Strw_Ew, Code::Strd_Ew, Code::Strq_Ew], &[Op::Ev]).with_mem(MemorySize::UInt16).handler(),
    Template::sized([Code::Lldtw_Ew, Code::Lldtd_Ew, Code::Lldtq_Ew], &[Op::Ew]).handler(),
    Template::sized([Code::Ltrw_Ew, Code::Ltrd_Ew, Code::Ltrq_Ew], &[Op::Ew]).handler(),
    Template::sized([Code::Verrw_Ew, Code::Verrd_Ew, Code::Verrq_Ew], &[Op::Ew]).handler(),
    Template::sized([Code::Verww_Ew, Code::Verwd_Ew, Code::Verwq_Ew], &[Op::Ew]).handler(),
    Handler::Invalid,
    Handler::Invalid,
];

const DESCRIPTOR: [MemorySize; 3] = [MemorySize::Fword6, MemorySize::Fword6, MemorySize::Fword10];

static GROUP_0F01: [Handler; 8] = [
    Template::sized([Code::Sgdtw_Ms, Code::Sgdtd_Ms, Code::Sgdtq_Ms], &[Op::M]).with_mem_sized(DESCRIPTOR).with_force_64().handler(),
    Template::sized([Code::Sidtw_Ms, Code::Sidtd_Ms, Code::Sidtq_Ms], &[Op::M]).with_mem_sized(DESCRIPTOR).with_force_64().handler(),
    Template::sized([Code::Lgdtw_Ms, Code::Lgdtd_Ms, Code::Lgdtq_Ms], &[Op::M]).with_mem_sized(DESCRIPTOR).with_force_64().handler(),
    Template::sized([Code::Lidtw_Ms, Code::Lidtd_Ms, Code::Lidtq_Ms], &[Op::M]).with_mem_sized(DESCRIPTOR).with_force_64().handler(),
    Template::sized([Code::Smsww_Ew, Code::Smswd_Ew, Code::Smswq_Ew], &[Op::Ev]).with_mem(MemorySize::UInt16).handler(),
    Handler::Invalid,
    Template::sized([Code::Lmsww_Ew, Code::Lmswd_Ew, Code::Lmswq_Ew], &[Op::Ew]).handler(),
    Template::new(Code::Invlpg_M, &[Op::M]).with_mem(MemorySize::Unknown).handler(),
];

// Register forms of 0F01 that are selected by the whole ModRM byte. Entries
// left `Invalid` fall back to the ModRM.reg table (SMSW/LMSW registers).
static GROUP_0F01_RM: [Handler; 64] = {
    let mut t = [Handler::Invalid; 64];
    t[0x00] = Template::new(Code::Enclv, &[]).handler();
    t[0x01] = Template::new(Code::Vmcall, &[]).handler();
    t[0x02] = Template::new(Code::Vmlaunch, &[]).handler();
    t[0x03] = Template::new(Code::Vmresume, &[]).handler();
    t[0x04] = Template::new(Code::Vmxoff, &[]).handler();
    t[0x08] = Template::with_code(CodeSel::ByAddr([Code::Monitorw, Code::Monitord, Code::Monitorq]), &[]).handler();
    t[0x09] = Template::new(Code::Mwait, &[]).handler();
    t[0x0A] = Template::new(Code::Clac, &[]).handler();
    t[0x0B] = Template::new(Code::Stac, &[]).handler();
    t[0x0F] = Template::new(Code::Encls, &[]).handler();
    t[0x10] = Template::new(Code::Xgetbv, &[]).handler();
    t[0x11] = Template::new(Code::Xsetbv, &[]).handler();
    t[0x14] = Template::new(Code::Vmfunc, &[]).handler();
    t[0x15] = Template::new(Code::Xend, &[]).handler();
    t[0x16] = Template::new(Code::Xtest, &[]).handler();
    t[0x17] = Template::new(Code::Enclu, &[]).handler();
    t[0x2E] = Template::new(Code::Rdpkru, &[]).handler();
    t[0x2F] = Template::new(Code::Wrpkru, &[]).handler();
    t[0x38] = Template::new(Code::Swapgs, &[]).with_only_64().handler();
    t[0x39] = Template::new(Code::Rdtscp, &[]).handler();
    t
};

static GROUP_0F0D: [Handler; 8] = [
    Handler::Invalid,
    Template::new(Code::Prefetchw_Mb, &[Op::M]).with_mem(MemorySize::UInt8).handler(),
    Template::new(Code::Prefetchwt1_Mb, &[Op::M]).with_mem(MemorySize::UInt8).handler(),
    Handler::Invalid,
    Handler::Invalid,
    Handler::Invalid,
    Handler::Invalid,
    Handler::Invalid,
];

static GROUP_0F18: [Handler; 8] = [
    Template::new(Code::Prefetchnta_Mb, &[Op::M]).with_mem(MemorySize::UInt8).handler(),
    Template::new(Code::Prefetcht0_Mb, &[Op::M]).with_mem(MemorySize::UInt8).handler(),
    Template::new(Code::Prefetcht1_Mb, &[Op::M]).with_mem(MemorySize::UInt8).handler(),
    Template::new(Code::Prefetcht2_Mb, &[Op::M]).with_mem(MemorySize::UInt8).handler(),
    Handler::Invalid,
    Handler::Invalid,
    Handler::Invalid,
    Handler::Invalid,
];

// F3 0F1E: RDSSP in /1 register forms, ENDBR by full ModRM
static GROUP_F3_0F1E: [Handler; 8] = [
    Handler::Invalid,
    Template::sized([Code::Rdsspd_Rd, Code::Rdsspd_Rd, Code::Rdsspq_Rq], &[Op::Ey]).with_reg_only().handler(),
    Handler::Invalid,
    Handler::Invalid,
    Handler::Invalid,
    Handler::Invalid,
    Handler::Invalid,
    Handler::Invalid,
];

static GROUP_F3_0F1E_RM: [Handler; 64] = {
    let mut t = [Handler::Invalid; 64];
    t[0x3A] = Template::new(Code::Endbr64, &[]).handler();
    t[0x3B] = Template::new(Code::Endbr32, &[]).handler();
    t
};

static GROUP_0F1F: [Handler; 8] = [
    Template::sized([Code::Nop_Ew, Code::Nop_Ed, Code::Nop_Eq], &[Op::Ev]).handler(),
    Handler::Invalid,
    Handler::Invalid,
    Handler::Invalid,
    Handler::Invalid,
    Handler::Invalid,
    Handler::Invalid,
    Handler::Invalid,
];

static GROUP_0FBA: [Handler; 8] = [
    Handler::Invalid,
    Handler::Invalid,
    Handler::Invalid,
    Handler::Invalid,
    Template::sized([Code::Bt_Ew_Ib, Code::Bt_Ed_Ib, Code::Bt_Eq_Ib], &[Op::Ev, Op::Ib]).handler(),
    Template::sized([Code::Bts_Ew_Ib, Code::Bts_Ed_Ib, Code::Bts_Eq_Ib], &[Op::Ev, Op::Ib]).with_lock().handler(),
    Template::sized([Code::Btr_Ew_Ib, Code::Btr_Ed_Ib, Code::Btr_Eq_Ib], &[Op::Ev, Op::Ib]).with_lock().handler(),
    Template::sized([Code::Btc_Ew_Ib, Code::Btc_Ed_Ib, Code::Btc_Eq_Ib], &[Op::Ev, Op::Ib]).with_lock().handler(),
];

const FXSAVE: MemorySize = MemorySize::Fxsave512;
const XSAVE: MemorySize = MemorySize::Xsave;

static GROUP_0FAE: [Handler; 8] = [
    Template::sized([Code::Fxsave_M, Code::Fxsave_M, Code::Fxsave64_M], &[Op::M]).with_mem(FXSAVE).handler(),
    Template::sized([Code::Fxrstor_M, Code::Fxrstor_M, Code::Fxrstor64_M], &[Op::M]).with_mem(FXSAVE).handler(),
    Template::new(Code::Ldmxcsr_Md, &[Op::M]).with_mem(MemorySize::UInt32).handler(),
    Template::new(Code::Stmxcsr_Md, &[Op::M]).with_mem(MemorySize::UInt32).handler(),
    Template::sized([Code::Xsave_M, Code::Xsave_M, Code::Xsave64_M], &[Op::M]).with_mem(XSAVE).handler(),
    Template::sized([Code::Xrstor_M, Code::Xrstor_M, Code::Xrstor64_M], &[Op::M]).with_mem(XSAVE).handler(),
    Handler::Invalid,
    Template::new(Code::Clflush_Mb, &[Op::M]).with_mem(MemorySize::UInt8).handler(),
];

// The fences ignore ModRM.rm
static GROUP_0FAE_RM: [Handler; 64] = {
    let mut t = [Handler::Invalid; 64];
    let mut rm = 0;
    while rm < 8 {
        t[0x28 + rm] = Template::new(Code::Lfence, &[]).handler();
        t[0x30 + rm] = Template::new(Code::Mfence, &[]).handler();
        t[0x38 + rm] = Template::new(Code::Sfence, &[]).handler();
        rm += 1;
    }
    t
};

static GROUP_0FC7: [Handler; 8] = [
    Handler::Invalid,
    Template::sized([Code::Cmpxchg8b_Mq, Code::Cmpxchg8b_Mq, Code::Cmpxchg16b_Mo], &[Op::M])
        .with_mem_sized([MemorySize::UInt64, MemorySize::UInt64, MemorySize::UInt128])
        .with_lock()
        .handler(),
    Handler::Invalid,
    Handler::Invalid,
    Handler::Invalid,
    Handler::Invalid,
    Template::sized([Code::Rdrand_Rw, Code::Rdrand_Rd, Code::Rdrand_Rq], &[Op::Ev]).with_reg_only().handler(),
    Template::sized([Code::Rdseed_Rw, Code::Rdseed_Rd, Code::Rdseed_Rq], &[Op::Ev]).with_reg_only().handler(),
];

// ---- prefix tables ----

static P_0F10: [Handler; 4] = sse(
    Some((Code::Movups_VX_WX, PS)),
    Some((Code::Movupd_VX_WX, PD)),
    Some((Code::Movss_VX_WX, SS)),
    Some((Code::Movsd_VX_WX, SD)),
    V_W,
);
static P_0F11: [Handler; 4] = sse(
    Some((Code::Movups_WX_VX, PS)),
    Some((Code::Movupd_WX_VX, PD)),
    Some((Code::Movss_WX_VX, SS)),
    Some((Code::Movsd_WX_VX, SD)),
    W_V,
);
static P_0F14: [Handler; 4] = sse(Some((Code::Unpcklps_VX_WX, PS)), Some((Code::Unpcklpd_VX_WX, PD)), None, None, V_W);

static MOVLPS: Handler = Template::new(Code::Movlps_VX_M, &[Op::VX, Op::M]).with_mem(MemorySize::Packed64_Float32).handler();
static MOVHLPS: Handler = Template::new(Code::Movhlps_VX_RX, &[Op::VX, Op::RX]).handler();

static P_0F12: [Handler; 4] = [
    Handler::RegMem {
        reg: &MOVHLPS,
        mem: &MOVLPS,
    },
    Template::new(Code::Movlpd_VX_M, &[Op::VX, Op::M]).with_mem(SD).handler(),
    Template::new(Code::Movsldup_VX_WX, V_W).with_mem(PS).handler(),
    Template::new(Code::Movddup_VX_WX, V_W).with_mem(SD).handler(),
];
static P_0F13: [Handler; 4] = [
    Template::new(Code::Movlps_M_VX, &[Op::M, Op::VX]).with_mem(MemorySize::Packed64_Float32).handler(),
    Template::new(Code::Movlpd_M_VX, &[Op::M, Op::VX]).with_mem(SD).handler(),
    Handler::Invalid,
    Handler::Invalid,
];
static P_0F28: [Handler; 4] = sse(Some((Code::Movaps_VX_WX, PS)), Some((Code::Movapd_VX_WX, PD)), None, None, V_W);
static P_0F29: [Handler; 4] = sse(Some((Code::Movaps_WX_VX, PS)), Some((Code::Movapd_WX_VX, PD)), None, None, W_V);

const SI_MEM: [MemorySize; 3] = [MemorySize::Int32, MemorySize::Int32, MemorySize::Int64];

static P_0F2A: [Handler; 4] = [
    Template::new(Code::Cvtpi2ps_VX_Q, &[Op::VX, Op::Q]).with_mem(MemorySize::Packed64_Int32).handler(),
    Template::new(Code::Cvtpi2pd_VX_Q, &[Op::VX, Op::Q]).with_mem(MemorySize::Packed64_Int32).handler(),
    Template::sized([Code::Cvtsi2ss_VX_Ed, Code::Cvtsi2ss_VX_Ed, Code::Cvtsi2ss_VX_Eq], &[Op::VX, Op::Ey]).with_mem_sized(SI_MEM).handler(),
    Template::sized([Code::Cvtsi2sd_VX_Ed, Code::Cvtsi2sd_VX_Ed, Code::Cvtsi2sd_VX_Eq], &[Op::VX, Op::Ey]).with_mem_sized(SI_MEM).handler(),
];

static P_0F2C: [Handler; 4] = [
    Template::new(Code::Cvttps2pi_P_WX, &[Op::P, Op::WX]).with_mem(MemorySize::Packed64_Float32).handler(),
    Template::new(Code::Cvttpd2pi_P_WX, &[Op::P, Op::WX]).with_mem(MemorySize::Packed128_Float64).handler(),
    Template::sized([Code::Cvttss2si_Gd_WX, Code::Cvttss2si_Gd_WX, Code::Cvttss2si_Gq_WX], &[Op::Gy, Op::WX]).with_mem(SS).handler(),
    Template::sized([Code::Cvttsd2si_Gd_WX, Code::Cvttsd2si_Gd_WX, Code::Cvttsd2si_Gq_WX], &[Op::Gy, Op::WX]).with_mem(SD).handler(),
];

static P_0F2D: [Handler; 4] = [
    Template::new(Code::Cvtps2pi_P_WX, &[Op::P, Op::WX]).with_mem(MemorySize::Packed64_Float32).handler(),
    Template::new(Code::Cvtpd2pi_P_WX, &[Op::P, Op::WX]).with_mem(MemorySize::Packed128_Float64).handler(),
    Template::sized([Code::Cvtss2si_Gd_WX, Code::Cvtss2si_Gd_WX, Code::Cvtss2si_Gq_WX], &[Op::Gy, Op::WX]).with_mem(SS).handler(),
    Template::sized([Code::Cvtsd2si_Gd_WX, Code::Cvtsd2si_Gd_WX, Code::Cvtsd2si_Gq_WX], &[Op::Gy, Op::WX]).with_mem(SD).handler(),
];

static P_0F2E: [Handler; 4] = sse(Some((Code::Ucomiss_VX_WX, SS)), Some((Code::Ucomisd_VX_WX, SD)), None, None, V_W);
static P_0F2F: [Handler; 4] = sse(Some((Code::Comiss_VX_WX, SS)), Some((Code::Comisd_VX_WX, SD)), None, None, V_W);

static P_0F51: [Handler; 4] = sse(
    Some((Code::Sqrtps_VX_WX, PS)),
    Some((Code::Sqrtpd_VX_WX, PD)),
    Some((Code::Sqrtss_VX_WX, SS)),
    Some((Code::Sqrtsd_VX_WX, SD)),
    V_W,
);
static P_0F54: [Handler; 4] = sse(Some((Code::Andps_VX_WX, PS)), Some((Code::Andpd_VX_WX, PD)), None, None, V_W);
static P_0F55: [Handler; 4] = sse(Some((Code::Andnps_VX_WX, PS)), Some((Code::Andnpd_VX_WX, PD)), None, None, V_W);
static P_0F56: [Handler; 4] = sse(Some((Code::Orps_VX_WX, PS)), Some((Code::Orpd_VX_WX, PD)), None, None, V_W);
static P_0F57: [Handler; 4] = sse(Some((Code::Xorps_VX_WX, PS)), Some((Code::Xorpd_VX_WX, PD)), None, None, V_W);
static P_0F58: [Handler; 4] = sse(
    Some((Code::Addps_VX_WX, PS)),
    Some((Code::Addpd_VX_WX, PD)),
    Some((Code::Addss_VX_WX, SS)),
    Some((Code::Addsd_VX_WX, SD)),
    V_W,
);
static P_0F59: [Handler; 4] = sse(
    Some((Code::Mulps_VX_WX, PS)),
    Some((Code::Mulpd_VX_WX, PD)),
    Some((Code::Mulss_VX_WX, SS)),
    Some((Code::Mulsd_VX_WX, SD)),
    V_W,
);
static P_0F5C: [Handler; 4] = sse(
    Some((Code::Subps_VX_WX, PS)),
    Some((Code::Subpd_VX_WX, PD)),
    Some((Code::Subss_VX_WX, SS)),
    Some((Code::Subsd_VX_WX, SD)),
    V_W,
);
static P_0F5D: [Handler; 4] = sse(
    Some((Code::Minps_VX_WX, PS)),
    Some((Code::Minpd_VX_WX, PD)),
    Some((Code::Minss_VX_WX, SS)),
    Some((Code::Minsd_VX_WX, SD)),
    V_W,
);
static P_0F5E: [Handler; 4] = sse(
    Some((Code::Divps_VX_WX, PS)),
    Some((Code::Divpd_VX_WX, PD)),
    Some((Code::Divss_VX_WX, SS)),
    Some((Code::Divsd_VX_WX, SD)),
    V_W,
);
static P_0F5F: [Handler; 4] = sse(
    Some((Code::Maxps_VX_WX, PS)),
    Some((Code::Maxpd_VX_WX, PD)),
    Some((Code::Maxss_VX_WX, SS)),
    Some((Code::Maxsd_VX_WX, SD)),
    V_W,
);

// MMX and SSE2 integer forms
static P_0F60: [Handler; 4] = mmx_sse(Some((Code::Punpcklbw_P_Q, MemorySize::Packed32_UInt8)), (Code::Punpcklbw_VX_WX, MemorySize::Packed128_UInt8));
static P_0F61: [Handler; 4] = mmx_sse(
    Some((Code::Punpcklwd_P_Q, MemorySize::Packed32_UInt16)),
    (Code::Punpcklwd_VX_WX, MemorySize::Packed128_UInt16),
);
static P_0F62: [Handler; 4] = mmx_sse(Some((Code::Punpckldq_P_Q, MemorySize::UInt32)), (Code::Punpckldq_VX_WX, MemorySize::Packed128_UInt32));
static P_0F63: [Handler; 4] = mmx_sse(Some((Code::Packsswb_P_Q, MemorySize::Packed64_Int16)), (Code::Packsswb_VX_WX, MemorySize::Packed128_Int16));
static P_0F64: [Handler; 4] = mmx_sse(Some((Code::Pcmpgtb_P_Q, MemorySize::Packed64_Int8)), (Code::Pcmpgtb_VX_WX, MemorySize::Packed128_Int8));
static P_0F65: [Handler; 4] = mmx_sse(Some((Code::Pcmpgtw_P_Q, MemorySize::Packed64_Int16)), (Code::Pcmpgtw_VX_WX, MemorySize::Packed128_Int16));
static P_0F66: [Handler; 4] = mmx_sse(Some((Code::Pcmpgtd_P_Q, MemorySize::Packed64_Int32)), (Code::Pcmpgtd_VX_WX, MemorySize::Packed128_Int32));
static P_0F67: [Handler; 4] = mmx_sse(Some((Code::Packuswb_P_Q, MemorySize::Packed64_Int16)), (Code::Packuswb_VX_WX, MemorySize::Packed128_Int16));
static P_0F68: [Handler; 4] = mmx_sse(Some((Code::Punpckhbw_P_Q, MemorySize::Packed64_UInt8)), (Code::Punpckhbw_VX_WX, MemorySize::Packed128_UInt8));
static P_0F69: [Handler; 4] = mmx_sse(
    Some((Code::Punpckhwd_P_Q, MemorySize::Packed64_UInt16)),
    (Code::Punpckhwd_VX_WX, MemorySize::Packed128_UInt16),
);
static P_0F6A: [Handler; 4] = mmx_sse(
    Some((Code::Punpckhdq_P_Q, MemorySize::Packed64_UInt32)),
    (Code::Punpckhdq_VX_WX, MemorySize::Packed128_UInt32),
);
static P_0F6B: [Handler; 4] = mmx_sse(Some((Code::Packssdw_P_Q, MemorySize::Packed64_Int32)), (Code::Packssdw_VX_WX, MemorySize::Packed128_Int32));
static P_0F6C: [Handler; 4] = mmx_sse(None, (Code::Punpcklqdq_VX_WX, MemorySize::Packed128_UInt64));
static P_0F6D: [Handler; 4] = mmx_sse(None, (Code::Punpckhqdq_VX_WX, MemorySize::Packed128_UInt64));

static P_0F6E: [Handler; 4] = [
    Template::sized([Code::Movd_P_Ed, Code::Movd_P_Ed, Code::Movq_P_Eq], &[Op::P, Op::Ey]).handler(),
    Template::sized([Code::Movd_VX_Ed, Code::Movd_VX_Ed, Code::Movq_VX_Eq], &[Op::VX, Op::Ey]).handler(),
    Handler::Invalid,
    Handler::Invalid,
];

static P_0F6F: [Handler; 4] = [
    Template::new(Code::Movq_P_Q, &[Op::P, Op::Q]).with_mem(MemorySize::Packed64_Int32).handler(),
    Template::new(Code::Movdqa_VX_WX, V_W).with_mem(MemorySize::Packed128_Int32).handler(),
    Template::new(Code::Movdqu_VX_WX, V_W).with_mem(MemorySize::Packed128_Int32).handler(),
    Handler::Invalid,
];

static P_0F70: [Handler; 4] = [
    Template::new(Code::Pshufw_P_Q_Ib, &[Op::P, Op::Q, Op::Ib]).with_mem(MemorySize::Packed64_UInt16).handler(),
    Template::new(Code::Pshufd_VX_WX_Ib, &[Op::VX, Op::WX, Op::Ib]).with_mem(MemorySize::Packed128_UInt32).handler(),
    Template::new(Code::Pshufhw_VX_WX_Ib, &[Op::VX, Op::WX, Op::Ib]).with_mem(MemorySize::Packed128_UInt16).handler(),
    Template::new(Code::Pshuflw_VX_WX_Ib, &[Op::VX, Op::WX, Op::Ib]).with_mem(MemorySize::Packed128_UInt16).handler(),
];

static P_0F74: [Handler; 4] = mmx_sse(Some((Code::Pcmpeqb_P_Q, MemorySize::Packed64_Int8)), (Code::Pcmpeqb_VX_WX, MemorySize::Packed128_Int8));
static P_0F75: [Handler; 4] = mmx_sse(Some((Code::Pcmpeqw_P_Q, MemorySize::Packed64_Int16)), (Code::Pcmpeqw_VX_WX, MemorySize::Packed128_Int16));
static P_0F76: [Handler; 4] = mmx_sse(Some((Code::Pcmpeqd_P_Q, MemorySize::Packed64_Int32)), (Code::Pcmpeqd_VX_WX, MemorySize::Packed128_Int32));

static P_0F7E: [Handler; 4] = [
    Template::sized([Code::Movd_Ed_P, Code::Movd_Ed_P, Code::Movq_Eq_P], &[Op::Ey, Op::P]).handler(),
    Template::sized([Code::Movd_Ed_VX, Code::Movd_Ed_VX, Code::Movq_Eq_VX], &[Op::Ey, Op::VX]).handler(),
    Template::new(Code::Movq_VX_WX, V_W).with_mem(MemorySize::UInt64).handler(),
    Handler::Invalid,
];

static P_0F7F: [Handler; 4] = [
    Template::new(Code::Movq_Q_P, &[Op::Q, Op::P]).with_mem(MemorySize::Packed64_Int32).handler(),
    Template::new(Code::Movdqa_WX_VX, W_V).with_mem(MemorySize::Packed128_Int32).handler(),
    Template::new(Code::Movdqu_WX_VX, W_V).with_mem(MemorySize::Packed128_Int32).handler(),
    Handler::Invalid,
];

static P_0FC2: [Handler; 4] = sse(
    Some((Code::Cmpps_VX_WX_Ib, PS)),
    Some((Code::Cmppd_VX_WX_Ib, PD)),
    Some((Code::Cmpss_VX_WX_Ib, SS)),
    Some((Code::Cmpsd_VX_WX_Ib, SD)),
    &[Op::VX, Op::WX, Op::Ib],
);
static P_0FC6: [Handler; 4] = sse(Some((Code::Shufps_VX_WX_Ib, PS)), Some((Code::Shufpd_VX_WX_Ib, PD)), None, None, &[Op::VX, Op::WX, Op::Ib]);

static P_0FD4: [Handler; 4] = [
    Template::new(Code::Paddq_P_Q, &[Op::P, Op::Q]).with_mem(MemorySize::UInt64).handler(),
    Template::new(Code::Paddq_VX_WX, V_W).with_mem(MemorySize::Packed128_UInt64).handler(),
    Handler::Invalid,
    Handler::Invalid,
];

static P_0FD6: [Handler; 4] = [
    Handler::Invalid,
    Template::new(Code::Movq_WX_VX, W_V).with_mem(MemorySize::UInt64).handler(),
    Template::new(Code::Movq2dq_VX_N, &[Op::VX, Op::N]).handler(),
    Template::new(Code::Movdq2q_P_RX, &[Op::P, Op::RX]).handler(),
];

static P_0FD7: [Handler; 4] = [
    Template::sized([Code::Pmovmskb_Gd_N, Code::Pmovmskb_Gd_N, Code::Pmovmskb_Gq_N], &[Op::Gy, Op::N]).handler(),
    Template::sized([Code::Pmovmskb_Gd_RX, Code::Pmovmskb_Gd_RX, Code::Pmovmskb_Gq_RX], &[Op::Gy, Op::RX]).handler(),
    Handler::Invalid,
    Handler::Invalid,
];

static P_0FDB: [Handler; 4] = mmx_sse(Some((Code::Pand_P_Q, MemorySize::UInt64)), (Code::Pand_VX_WX, MemorySize::Packed128_UInt64));
static P_0FDF: [Handler; 4] = mmx_sse(Some((Code::Pandn_P_Q, MemorySize::UInt64)), (Code::Pandn_VX_WX, MemorySize::Packed128_UInt64));

static P_0FEF: [Handler; 4] = [
    Template::new(Code::Pxor_P_Q, &[Op::P, Op::Q]).with_mem(MemorySize::UInt64).handler(),
    Template::new(Code::Pxor_VX_WX, V_W).with_mem(MemorySize::Packed128_UInt64).handler(),
    Handler::Invalid,
    Handler::Invalid,
];

static P_0FFE: [Handler; 4] = [
    Template::new(Code::Paddd_P_Q, &[Op::P, Op::Q]).with_mem(MemorySize::Packed64_Int32).handler(),
    Template::new(Code::Paddd_VX_WX, V_W).with_mem(MemorySize::Packed128_Int32).handler(),
    Handler::Invalid,
    Handler::Invalid,
];

// ---- F3-selected integer forms ----

static INVALID: Handler = Handler::Invalid;

static POPCNT: Handler = Template::sized([Code::Popcnt_Gw_Ew, Code::Popcnt_Gd_Ed, Code::Popcnt_Gq_Eq], G_E).handler();
static BSF: Handler = Template::sized([Code::Bsf_Gw_Ew, Code::Bsf_Gd_Ed, Code::Bsf_Gq_Eq], G_E).handler();
static TZCNT: Handler = Template::sized([Code::Tzcnt_Gw_Ew, Code::Tzcnt_Gd_Ed, Code::Tzcnt_Gq_Eq], G_E).handler();
static BSR: Handler = Template::sized([Code::Bsr_Gw_Ew, Code::Bsr_Gd_Ed, Code::Bsr_Gq_Eq], G_E).handler();
static LZCNT: Handler = Template::sized([Code::Lzcnt_Gw_Ew, Code::Lzcnt_Gd_Ed, Code::Lzcnt_Gq_Eq], G_E).handler();
static CET_0F1E: Handler = Handler::RmGroup(&GROUP_F3_0F1E, &GROUP_F3_0F1E_RM);

/// `0F xx` opcode map.
pub static TWO_BYTE: [Handler; 256] = {
    let mut t = [Handler::Invalid; 256];

    t[0x00] = Handler::Group(&GROUP_0F00);
    t[0x01] = Handler::RmGroup(&GROUP_0F01, &GROUP_0F01_RM);
    t[0x02] = Template::sized([Code::Lar_Gw_Ew, Code::Lar_Gd_Ed, Code::Lar_Gq_Eq], G_E).with_mem(MemorySize::UInt16).handler();
    t[0x03] = Template::sized([Code::Lsl_Gw_Ew, Code::Lsl_Gd_Ed, Code::Lsl_Gq_Eq], G_E).with_mem(MemorySize::UInt16).handler();
    t[0x05] = Template::new(Code::Syscall, &[]).handler();
    t[0x06] = Template::new(Code::Clts, &[]).handler();
    t[0x07] = Template::sized([Code::Sysretd, Code::Sysretd, Code::Sysretq], &[]).handler();
    t[0x08] = Template::new(Code::Invd, &[]).handler();
    t[0x09] = Template::new(Code::Wbinvd, &[]).handler();
    t[0x0B] = Template::new(Code::Ud2, &[]).handler();
    t[0x0D] = Handler::Group(&GROUP_0F0D);

    t[0x10] = Handler::Prefixed(&P_0F10);
    t[0x11] = Handler::Prefixed(&P_0F11);
    t[0x12] = Handler::Prefixed(&P_0F12);
    t[0x13] = Handler::Prefixed(&P_0F13);
    t[0x14] = Handler::Prefixed(&P_0F14);
    t[0x18] = Handler::Group(&GROUP_0F18);
    t[0x1E] = Handler::RepPrefixed {
        normal: &INVALID,
        f3: &CET_0F1E,
        f2: &INVALID,
    };
    t[0x1F] = Handler::Group(&GROUP_0F1F);

    t[0x28] = Handler::Prefixed(&P_0F28);
    t[0x29] = Handler::Prefixed(&P_0F29);
    t[0x2A] = Handler::Prefixed(&P_0F2A);
    t[0x2C] = Handler::Prefixed(&P_0F2C);
    t[0x2D] = Handler::Prefixed(&P_0F2D);
    t[0x2E] = Handler::Prefixed(&P_0F2E);
    t[0x2F] = Handler::Prefixed(&P_0F2F);

    t[0x31] = Template::new(Code::Rdtsc, &[]).handler();
    t[0x38] = Handler::Escape(OpcodeMap::M0F38);
    t[0x3A] = Handler::Escape(OpcodeMap::M0F3A);

    // CMOVcc
    t[0x40] = Template::sized([Code::Cmovo_Gw_Ew, Code::Cmovo_Gd_Ed, Code::Cmovo_Gq_Eq], G_E).handler();
    t[0x41] = Template::sized([Code::Cmovno_Gw_Ew, Code::Cmovno_Gd_Ed, Code::Cmovno_Gq_Eq], G_E).handler();
    t[0x42] = Template::sized([Code::Cmovb_Gw_Ew, Code::Cmovb_Gd_Ed, Code::Cmovb_Gq_Eq], G_E).handler();
    t[0x43] = Template::sized([Code::Cmovae_Gw_Ew, Code::Cmovae_Gd_Ed, Code::Cmovae_Gq_Eq], G_E).handler();
    t[0x44] = Template::sized([Code::Cmove_Gw_Ew, Code::Cmove_Gd_Ed, Code::Cmove_Gq_Eq], G_E).handler();
    t[0x45] = Template::sized([Code::Cmovne_Gw_Ew, Code::Cmovne_Gd_Ed, Code::Cmovne_Gq_Eq], G_E).handler();
    t[0x46] = Template::sized([Code::Cmovbe_Gw_Ew, Code::Cmovbe_Gd_Ed, Code::Cmovbe_Gq_Eq], G_E).handler();
    t[0x47] = Template::sized([Code::Cmova_Gw_Ew, Code::Cmova_Gd_Ed, Code::Cmova_Gq_Eq], G_E).handler();
    t[0x48] = Template::sized([Code::Cmovs_Gw_Ew, Code::Cmovs_Gd_Ed, Code::Cmovs_Gq_Eq], G_E).handler();
    t[0x49] = Template::sized([Code::Cmovns_Gw_Ew, Code::Cmovns_Gd_Ed, Code::Cmovns_Gq_Eq], G_E).handler();
    t[0x4A] = Template::sized([Code::Cmovp_Gw_Ew, Code::Cmovp_Gd_Ed, Code::Cmovp_Gq_Eq], G_E).handler();
    t[0x4B] = Template::sized([Code::Cmovnp_Gw_Ew, Code::Cmovnp_Gd_Ed, Code::Cmovnp_Gq_Eq], G_E).handler();
    t[0x4C] = Template::sized([Code::Cmovl_Gw_Ew, Code::Cmovl_Gd_Ed, Code::Cmovl_Gq_Eq], G_E).handler();
    t[0x4D] = Template::sized([Code::Cmovge_Gw_Ew, Code::Cmovge_Gd_Ed, Code::Cmovge_Gq_Eq], G_E).handler();
    t[0x4E] = Template::sized([Code::Cmovle_Gw_Ew, Code::Cmovle_Gd_Ed, Code::Cmovle_Gq_Eq], G_E).handler();
    t[0x4F] = Template::sized([Code::Cmovg_Gw_Ew, Code::Cmovg_Gd_Ed, Code::Cmovg_Gq_Eq], G_E).handler();

    t[0x51] = Handler::Prefixed(&P_0F51);
    t[0x54] = Handler::Prefixed(&P_0F54);
    t[0x55] = Handler::Prefixed(&P_0F55);
    t[0x56] = Handler::Prefixed(&P_0F56);
    t[0x57] = Handler::Prefixed(&P_0F57);
    t[0x58] = Handler::Prefixed(&P_0F58);
    t[0x59] = Handler::Prefixed(&P_0F59);
    t[0x5C] = Handler::Prefixed(&P_0F5C);
    t[0x5D] = Handler::Prefixed(&P_0F5D);
    t[0x5E] = Handler::Prefixed(&P_0F5E);
    t[0x5F] = Handler::Prefixed(&P_0F5F);

    t[0x60] = Handler::Prefixed(&P_0F60);
    t[0x61] = Handler::Prefixed(&P_0F61);
    t[0x62] = Handler::Prefixed(&P_0F62);
    t[0x63] = Handler::Prefixed(&P_0F63);
    t[0x64] = Handler::Prefixed(&P_0F64);
    t[0x65] = Handler::Prefixed(&P_0F65);
    t[0x66] = Handler::Prefixed(&P_0F66);
    t[0x67] = Handler::Prefixed(&P_0F67);
    t[0x68] = Handler::Prefixed(&P_0F68);
    t[0x69] = Handler::Prefixed(&P_0F69);
    t[0x6A] = Handler::Prefixed(&P_0F6A);
    t[0x6B] = Handler::Prefixed(&P_0F6B);
    t[0x6C] = Handler::Prefixed(&P_0F6C);
    t[0x6D] = Handler::Prefixed(&P_0F6D);
    t[0x6E] = Handler::Prefixed(&P_0F6E);
    t[0x6F] = Handler::Prefixed(&P_0F6F);
    t[0x70] = Handler::Prefixed(&P_0F70);
    t[0x74] = Handler::Prefixed(&P_0F74);
    t[0x75] = Handler::Prefixed(&P_0F75);
    t[0x76] = Handler::Prefixed(&P_0F76);
    t[0x77] = Template::new(Code::Emms, &[]).handler();
    t[0x7E] = Handler::Prefixed(&P_0F7E);
    t[0x7F] = Handler::Prefixed(&P_0F7F);

    // Jcc rel16/32
    t[0x80] = Template::sized([Code::Jo_Jw16, Code::Jo_Jd32, Code::Jo_Jd64], &[Op::Jz]).with_force_64().handler();
    t[0x81] = Template::sized([Code::Jno_Jw16, Code::Jno_Jd32, Code::Jno_Jd64], &[Op::Jz]).with_force_64().handler();
    t[0x82] = Template::sized([Code::Jb_Jw16, Code::Jb_Jd32, Code::Jb_Jd64], &[Op::Jz]).with_force_64().handler();
    t[0x83] = Template::sized([Code::Jae_Jw16, Code::Jae_Jd32, Code::Jae_Jd64], &[Op::Jz]).with_force_64().handler();
    t[0x84] = Template::sized([Code::Je_Jw16, Code::Je_Jd32, Code::Je_Jd64], &[Op::Jz]).with_force_64().handler();
    t[0x85] = Template::sized([Code::Jne_Jw16, Code::Jne_Jd32, Code::Jne_Jd64], &[Op::Jz]).with_force_64().handler();
    t[0x86] = Template::sized([Code::Jbe_Jw16, Code::Jbe_Jd32, Code::Jbe_Jd64], &[Op::Jz]).with_force_64().handler();
    t[0x87] = Template::sized([Code::Ja_Jw16, Code::Ja_Jd32, Code::Ja_Jd64], &[Op::Jz]).with_force_64().handler();
    t[0x88] = Template::sized([Code::Js_Jw16, Code::Js_Jd32, Code::Js_Jd64], &[Op::Jz]).with_force_64().handler();
    t[0x89] = Template::sized([Code::Jns_Jw16, Code::Jns_Jd32, Code::Jns_Jd64], &[Op::Jz]).with_force_64().handler();
    t[0x8A] = Template::sized([Code::Jp_Jw16, Code::Jp_Jd32, Code::Jp_Jd64], &[Op::Jz]).with_force_64().handler();
    t[0x8B] = Template::sized([Code::Jnp_Jw16, Code::Jnp_Jd32, Code::Jnp_Jd64], &[Op::Jz]).with_force_64().handler();
    t[0x8C] = Template::sized([Code::Jl_Jw16, Code::Jl_Jd32, Code::Jl_Jd64], &[Op::Jz]).with_force_64().handler();
    t[0x8D] = Template::sized([Code::Jge_Jw16, Code::Jge_Jd32, Code::Jge_Jd64], &[Op::Jz]).with_force_64().handler();
    t[0x8E] = Template::sized([Code::Jle_Jw16, Code::Jle_Jd32, Code::Jle_Jd64], &[Op::Jz]).with_force_64().handler();
    t[0x8F] = Template::sized([Code::Jg_Jw16, Code::Jg_Jd32, Code::Jg_Jd64], &[Op::Jz]).with_force_64().handler();

    // SETcc
    t[0x90] = Template::new(Code::Seto_Eb, &[Op::Eb]).handler();
    t[0x91] = Template::new(Code::Setno_Eb, &[Op::Eb]).handler();
    t[0x92] = Template::new(Code::Setb_Eb, &[Op::Eb]).handler();
    t[0x93] = Template::new(Code::Setae_Eb, &[Op::Eb]).handler();
    t[0x94] = Template::new(Code::Sete_Eb, &[Op::Eb]).handler();
    t[0x95] = Template::new(Code::Setne_Eb, &[Op::Eb]).handler();
    t[0x96] = Template::new(Code::Setbe_Eb, &[Op::Eb]).handler();
    t[0x97] = Template::new(Code::Seta_Eb, &[Op::Eb]).handler();
    t[0x98] = Template::new(Code::Sets_Eb, &[Op::Eb]).handler();
    t[0x99] = Template::new(Code::Setns_Eb, &[Op::Eb]).handler();
    t[0x9A] = Template::new(Code::Setp_Eb, &[Op::Eb]).handler();
    t[0x9B] = Template::new(Code::Setnp_Eb, &[Op::Eb]).handler();
    t[0x9C] = Template::new(Code::Setl_Eb, &[Op::Eb]).handler();
    t[0x9D] = Template::new(Code::Setge_Eb, &[Op::Eb]).handler();
    t[0x9E] = Template::new(Code::Setle_Eb, &[Op::Eb]).handler();
    t[0x9F] = Template::new(Code::Setg_Eb, &[Op::Eb]).handler();

    t[0xA0] = Template::sized([Code::Pushw_FS, Code::Pushd_FS, Code::Pushq_FS], &[Op::Reg(Register::FS)]).with_default_64().handler();
    t[0xA1] = Template::sized([Code::Popw_FS, Code::Popd_FS, Code::Popq_FS], &[Op::Reg(Register::FS)]).with_default_64().handler();
    t[0xA2] = Template::new(Code::Cpuid, &[]).handler();
    t[0xA3] = Template::sized([Code::Bt_Ew_Gw, Code::Bt_Ed_Gd, Code::Bt_Eq_Gq], E_G).handler();
    t[0xA4] = Template::sized([Code::Shld_Ew_Gw_Ib, Code::Shld_Ed_Gd_Ib, Code::Shld_Eq_Gq_Ib], &[Op::Ev, Op::Gv, Op::Ib]).handler();
    t[0xA5] = Template::sized([Code::Shld_Ew_Gw_CL, Code::Shld_Ed_Gd_CL, Code::Shld_Eq_Gq_CL], &[Op::Ev, Op::Gv, Op::Reg(Register::CL)]).handler();
    t[0xA8] = Template::sized([Code::Pushw_GS, Code::Pushd_GS, Code::Pushq_GS], &[Op::Reg(Register::GS)]).with_default_64().handler();
    t[0xA9] = Template::sized([Code::Popw_GS, Code::Popd_GS, Code::Popq_GS], &[Op::Reg(Register::GS)]).with_default_64().handler();
    t[0xAB] = Template::sized([Code::Bts_Ew_Gw, Code::Bts_Ed_Gd, Code::Bts_Eq_Gq], E_G).with_lock().handler();
    t[0xAC] = Template::sized([Code::Shrd_Ew_Gw_Ib, Code::Shrd_Ed_Gd_Ib, Code::Shrd_Eq_Gq_Ib], &[Op::Ev, Op::Gv, Op::Ib]).handler();
    t[0xAD] = Template::sized([Code::Shrd_Ew_Gw_CL, Code::Shrd_Ed_Gd_CL, Code::Shrd_Eq_Gq_CL], &[Op::Ev, Op::Gv, Op::Reg(Register::CL)]).handler();
    t[0xAE] = Handler::RmGroup(&GROUP_0FAE, &GROUP_0FAE_RM);
    t[0xAF] = Template::sized([Code::Imul_Gw_Ew, Code::Imul_Gd_Ed, Code::Imul_Gq_Eq], G_E).with_mem_sized([MemorySize::Int16, MemorySize::Int32, MemorySize::Int64]).handler();

    t[0xB0] = Template::new(Code::Cmpxchg_Eb_Gb, &[Op::Eb, Op::Gb]).with_lock().handler();
    t[0xB1] = Template::sized([Code::Cmpxchg_Ew_Gw, Code::Cmpxchg_Ed_Gd, Code::Cmpxchg_Eq_Gq], E_G).with_lock().handler();
    t[0xB3] = Template::sized([Code::Btr_Ew_Gw, Code::Btr_Ed_Gd, Code::Btr_Eq_Gq], E_G).with_lock().handler();
    t[0xB6] = Template::sized([Code::Movzx_Gw_Eb, Code::Movzx_Gd_Eb, Code::Movzx_Gq_Eb], &[Op::Gv, Op::Eb]).handler();
    t[0xB7] = Template::sized([Code::Movzx_Gw_Ew, Code::Movzx_Gd_Ew, Code::Movzx_Gq_Ew], &[Op::Gv, Op::Ew]).handler();
    t[0xB8] = Handler::RepPrefixed {
        normal: &INVALID,
        f3: &POPCNT,
        f2: &INVALID,
    };
    t[0xBA] = Handler::Group(&GROUP_0FBA);
    t[0xBB] = Template::sized([Code::Btc_Ew_Gw, Code::Btc_Ed_Gd, Code::Btc_Eq_Gq], E_G).with_lock().handler();
    t[0xBC] = Handler::RepPrefixed {
        normal: &BSF,
        f3: &TZCNT,
        f2: &BSF,
    };
    t[0xBD] = Handler::RepPrefixed {
        normal: &BSR,
        f3: &LZCNT,
        f2: &BSR,
    };
    t[0xBE] = Template::sized([Code::Movsx_Gw_Eb, Code::Movsx_Gd_Eb, Code::Movsx_Gq_Eb], &[Op::Gv, Op::Eb]).with_mem(MemorySize::Int8).handler();
    t[0xBF] = Template::sized([Code::Movsx_Gw_Ew, Code::Movsx_Gd_Ew, Code::Movsx_Gq_Ew], &[Op::Gv, Op::Ew]).with_mem(MemorySize::Int16).handler();

    t[0xC0] = Template::new(Code::Xadd_Eb_Gb, &[Op::Eb, Op::Gb]).with_lock().handler();
    t[0xC1] = Template::sized([Code::Xadd_Ew_Gw, Code::Xadd_Ed_Gd, Code::Xadd_Eq_Gq], E_G).with_lock().handler();
    t[0xC2] = Handler::Prefixed(&P_0FC2);
    t[0xC6] = Handler::Prefixed(&P_0FC6);
    t[0xC7] = Handler::Group(&GROUP_0FC7);

    // BSWAP r
    t[0xC8] = Template::with_code(CodeSel::SizedRexB([Code::Bswap_AX, Code::Bswap_R8W, Code::Bswap_EAX, Code::Bswap_R8D, Code::Bswap_RAX, Code::Bswap_R8]), &[Op::Zv]).handler();
    t[0xC9] = Template::with_code(CodeSel::SizedRexB([Code::Bswap_CX, Code::Bswap_R9W, Code::Bswap_ECX, Code::Bswap_R9D, Code::Bswap_RCX, Code::Bswap_R9]), &[Op::Zv]).handler();
    t[0xCA] = Template::with_code(CodeSel::SizedRexB([Code::Bswap_DX, Code::Bswap_R10W, Code::Bswap_EDX, Code::Bswap_R10D, Code::Bswap_RDX, Code::Bswap_R10]), &[Op::Zv]).handler();
    t[0xCB] = Template::with_code(CodeSel::SizedRexB([Code::Bswap_BX, Code::Bswap_R11W, Code::Bswap_EBX, Code::Bswap_R11D, Code::Bswap_RBX, Code::Bswap_R11]), &[Op::Zv]).handler();
    t[0xCC] = Template::with_code(CodeSel::SizedRexB([Code::Bswap_SP, Code::Bswap_R12W, Code::Bswap_ESP, Code::Bswap_R12D, Code::Bswap_RSP, Code::Bswap_R12]), &[Op::Zv]).handler();
    t[0xCD] = Template::with_code(CodeSel::SizedRexB([Code::Bswap_BP, Code::Bswap_R13W, Code::Bswap_EBP, Code::Bswap_R13D, Code::Bswap_RBP, Code::Bswap_R13]), &[Op::Zv]).handler();
    t[0xCE] = Template::with_code(CodeSel::SizedRexB([Code::Bswap_SI, Code::Bswap_R14W, Code::Bswap_ESI, Code::Bswap_R14D, Code::Bswap_RSI, Code::Bswap_R14]), &[Op::Zv]).handler();
    t[0xCF] = Template::with_code(CodeSel::SizedRexB([Code::Bswap_DI, Code::Bswap_R15W, Code::Bswap_EDI, Code::Bswap_R15D, Code::Bswap_RDI, Code::Bswap_R15]), &[Op::Zv]).handler();

    t[0xD4] = Handler::Prefixed(&P_0FD4);
    t[0xD6] = Handler::Prefixed(&P_0FD6);
    t[0xD7] = Handler::Prefixed(&P_0FD7);
    t[0xDB] = Handler::Prefixed(&P_0FDB);
    t[0xDF] = Handler::Prefixed(&P_0FDF);
    t[0xEF] = Handler::Prefixed(&P_0FEF);
    t[0xFE] = Handler::Prefixed(&P_0FFE);

    t
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sse_prefix_table() {
        let Handler::Prefixed(table) = TWO_BYTE[0x58] else {
            panic!("0F58 selects by prefix");
        };
        let Handler::Op(addsd) = table[3] else {
            panic!("F2 0F58 is ADDSD");
        };
        assert_eq!(addsd.code, CodeSel::Fixed(Code::Addsd_VX_WX));
        assert_eq!(addsd.mem, super::super::opcodes::MemSel::Fixed(MemorySize::Float64));
    }

    #[test]
    fn test_popcnt_requires_f3() {
        let Handler::RepPrefixed { normal, f3, .. } = TWO_BYTE[0xB8] else {
            panic!("0FB8 selects by F3");
        };
        assert!(matches!(normal, Handler::Invalid));
        assert!(matches!(f3, Handler::Op(_)));
    }

    #[test]
    fn test_register_only_forms() {
        let Handler::Prefixed(table) = TWO_BYTE[0xD6] else {
            panic!("0FD6 selects by prefix");
        };
        let Handler::Op(movq2dq) = table[2] else {
            panic!("F3 0FD6 is MOVQ2DQ");
        };
        assert!(movq2dq.reg_only);
        assert!(!movq2dq.mem_only);
    }

    #[test]
    fn test_movlps_splits_on_mod() {
        let Handler::Prefixed(table) = TWO_BYTE[0x12] else {
            panic!("0F12 selects by prefix");
        };
        let Handler::RegMem { reg, mem } = table[0] else {
            panic!("0F12 selects by ModRM.mod");
        };
        let (Handler::Op(movhlps), Handler::Op(movlps)) = (reg, mem) else {
            panic!("both forms are templates");
        };
        assert_eq!(movhlps.code, CodeSel::Fixed(Code::Movhlps_VX_RX));
        assert!(movhlps.reg_only);
        assert_eq!(movlps.code, CodeSel::Fixed(Code::Movlps_VX_M));
        assert!(movlps.mem_only);
    }

    #[test]
    fn test_fences_cover_every_rm() {
        let Handler::RmGroup(by_reg, by_rm) = TWO_BYTE[0xAE] else {
            panic!("0FAE selects by the whole ModRM");
        };
        for rm in 0..8 {
            assert!(matches!(by_rm[0x28 + rm], Handler::Op(t) if t.code == CodeSel::Fixed(Code::Lfence)));
            assert!(matches!(by_rm[0x30 + rm], Handler::Op(t) if t.code == CodeSel::Fixed(Code::Mfence)));
            assert!(matches!(by_rm[0x38 + rm], Handler::Op(t) if t.code == CodeSel::Fixed(Code::Sfence)));
        }
        assert!(matches!(by_rm[0x00], Handler::Invalid));
        assert!(matches!(by_reg[6], Handler::Invalid));
    }

    #[test]
    fn test_integer_ops_without_mmx_form() {
        for opcode in [0x6C, 0x6D] {
            let Handler::Prefixed(table) = TWO_BYTE[opcode] else {
                panic!("0F{opcode:02X} selects by prefix");
            };
            assert!(matches!(table[0], Handler::Invalid));
            assert!(matches!(table[1], Handler::Op(_)));
        }
    }
}
