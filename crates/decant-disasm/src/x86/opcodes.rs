//! Opcode handler types and the one-byte opcode map.
//!
//! Every map is a `static` array of [`Handler`]s indexed by the opcode byte.
//! A handler either names a [`Template`] directly or narrows the choice down
//! further (ModRM.reg group, mandatory prefix, REX.B, processor mode) until a
//! template is reached.

#![allow(non_camel_case_types)]

use std::fmt;

use decant_core::{Code, MemorySize, Register};

/// Opcode map an opcode byte was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OpcodeMap {
    /// One-byte map
    Primary,
    /// `0F xx`
    M0F,
    /// `0F 38 xx`
    M0F38,
    /// `0F 3A xx`
    M0F3A,
}

impl OpcodeMap {
    /// Maps the VEX `mmmmm` / EVEX `mm` field.
    pub const fn from_vex(map: u8) -> Option<Self> {
        match map {
            1 => Some(Self::M0F),
            2 => Some(Self::M0F38),
            3 => Some(Self::M0F3A),
            _ => None,
        }
    }
}

impl fmt::Display for OpcodeMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Primary => "primary",
            Self::M0F => "0F",
            Self::M0F38 => "0F38",
            Self::M0F3A => "0F3A",
        };
        f.write_str(name)
    }
}

/// Operand shape, in Intel operand order.
///
/// Letters follow the usual opcode-map notation: `E` = ModRM.rm register or
/// memory, `G` = ModRM.reg, `R` = ModRM.rm register only, `H` = VEX/EVEX
/// `vvvv`, `Z` = low three opcode bits. Suffixes give the width; `v` is the
/// operand size, `y` is 32 or 64 bits (64 only with W in 64-bit mode), `z`
/// is 16 or 32 bits.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Eb,
    Ew,
    Ev,
    Ey,
    Ez,
    /// 32-bit register in ModRM.rm
    Rd,
    Gb,
    Gw,
    Gd,
    Gv,
    Gy,
    Hy,
    Zb,
    Zv,
    /// Memory only; the size comes from the template
    M,
    /// Segment register in ModRM.reg
    Sw,
    /// Fixed register
    Reg(Register),
    /// `AX`/`EAX`/`RAX` by operand size
    AccV,
    /// `AX` or `EAX`; never `RAX`
    AccZ,
    Ib,
    /// 8-bit immediate sign-extended to the operand size
    Ibs,
    Iw,
    /// 16 or 32 bits; sign-extended to 64 for 64-bit operands
    Iz,
    /// Full operand size, including 64-bit
    Iv,
    /// Second immediate of `ENTER`
    Ib2,
    /// Implicit shift count of 1
    One,
    Jb,
    Jz,
    /// Far pointer `offset:selector`
    Ap,
    /// moffs of the address size
    O,
    /// `seg:[rSI]`
    Xs,
    /// `ES:[rDI]`
    Ys,
    /// `seg:[rBX+AL]`
    Xlat,
    St0,
    Sti,
    /// MMX register in ModRM.reg
    P,
    /// MMX register or memory in ModRM.rm
    Q,
    /// MMX register in ModRM.rm
    N,
    VX,
    VY,
    VZ,
    HX,
    HY,
    HZ,
    WX,
    WY,
    WZ,
    RX,
    /// Opmask register in ModRM.reg
    VK,
    /// Opmask register in `vvvv`
    HK,
    /// Opmask register in ModRM.rm
    RK,
    /// Opmask register or memory in ModRM.rm
    WK,
    /// VSIB memory with an XMM index
    VsibX,
    /// VSIB memory with a YMM index
    VsibY,
    /// VSIB memory with a ZMM index
    VsibZ,
}

impl Op {
    /// Returns true if the operand is encoded in a ModRM byte.
    pub const fn needs_modrm(self) -> bool {
        !matches!(
            self,
            Self::Hy
                | Self::Zb
                | Self::Zv
                | Self::Reg(_)
                | Self::AccV
                | Self::AccZ
                | Self::Ib
                | Self::Ibs
                | Self::Iw
                | Self::Iz
                | Self::Iv
                | Self::Ib2
                | Self::One
                | Self::Jb
                | Self::Jz
                | Self::Ap
                | Self::O
                | Self::Xs
                | Self::Ys
                | Self::Xlat
                | Self::St0
                | Self::Sti
                | Self::HX
                | Self::HY
                | Self::HZ
                | Self::HK
        )
    }

    /// Register-only ModRM.rm operand.
    pub const fn is_reg_only(self) -> bool {
        matches!(self, Self::Rd | Self::N | Self::RX | Self::RK)
    }

    /// Operand encoded in ModRM.rm (register or memory).
    pub const fn is_rm(self) -> bool {
        matches!(
            self,
            Self::Eb
                | Self::Ew
                | Self::Ev
                | Self::Ey
                | Self::Ez
                | Self::Rd
                | Self::M
                | Self::Q
                | Self::N
                | Self::WX
                | Self::WY
                | Self::WZ
                | Self::RX
                | Self::RK
                | Self::WK
                | Self::VsibX
                | Self::VsibY
                | Self::VsibZ
        )
    }

    /// First register of the index class of a VSIB operand.
    pub const fn vsib_index(self) -> Option<Register> {
        match self {
            Self::VsibX => Some(Register::XMM0),
            Self::VsibY => Some(Register::YMM0),
            Self::VsibZ => Some(Register::ZMM0),
            _ => None,
        }
    }

    /// Operand read from the VEX/EVEX `vvvv` field.
    pub const fn uses_vvvv(self) -> bool {
        matches!(self, Self::Hy | Self::HX | Self::HY | Self::HZ | Self::HK)
    }
}

/// How a template picks its [`Code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeSel {
    Fixed(Code),
    /// Indexed by operand size: 16, 32, 64
    Sized([Code; 3]),
    /// Indexed by operand size and REX.B: `[w, w+B, d, d+B, q, q+B]`
    SizedRexB([Code; 6]),
    /// `B0..B7`: `[no REX, REX, REX.B]`
    Byte([Code; 3]),
    /// Indexed by address size: 16, 32, 64
    ByAddr([Code; 3]),
    /// `LOOPcc`/`JrCXZ`: `[a16o16, a16o32, a32o16, a32o32, a32o64, a64o64]`
    ByAddrOp([Code; 6]),
}

/// Where a template's memory size comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemSel {
    /// Derived from the memory operand's shape
    Auto,
    Fixed(MemorySize),
    /// Indexed by operand size: 16, 32, 64
    Sized([MemorySize; 3]),
}

/// A fully selected instruction form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub code: CodeSel,
    pub ops: &'static [Op],
    pub mem: MemSel,
    /// Operand size defaults to 64 in 64-bit mode (`66` still selects 16)
    pub default_64: bool,
    /// Operand size is always 64 in 64-bit mode
    pub force_64: bool,
    /// Invalid in 64-bit mode
    pub not_64: bool,
    /// Only valid in 64-bit mode
    pub only_64: bool,
    /// Accepts a LOCK prefix on its memory form
    pub lock: bool,
    pub mem_only: bool,
    pub reg_only: bool,
}

impl Template {
    pub const fn new(code: Code, ops: &'static [Op]) -> Self {
        Self::with_code(CodeSel::Fixed(code), ops)
    }

    pub const fn sized(codes: [Code; 3], ops: &'static [Op]) -> Self {
        Self::with_code(CodeSel::Sized(codes), ops)
    }

    pub const fn with_code(code: CodeSel, ops: &'static [Op]) -> Self {
        let mut mem_only = false;
        let mut reg_only = false;
        let mut i = 0;
        while i < ops.len() {
            match ops[i] {
                Op::M | Op::VsibX | Op::VsibY | Op::VsibZ => mem_only = true,
                op if op.is_reg_only() => reg_only = true,
                _ => {}
            }
            i += 1;
        }
        Self {
            code,
            ops,
            mem: MemSel::Auto,
            default_64: false,
            force_64: false,
            not_64: false,
            only_64: false,
            lock: false,
            mem_only,
            reg_only,
        }
    }

    pub const fn with_mem(mut self, size: MemorySize) -> Self {
        self.mem = MemSel::Fixed(size);
        self
    }

    pub const fn with_mem_sized(mut self, sizes: [MemorySize; 3]) -> Self {
        self.mem = MemSel::Sized(sizes);
        self
    }

    pub const fn with_default_64(mut self) -> Self {
        self.default_64 = true;
        self
    }

    pub const fn with_force_64(mut self) -> Self {
        self.force_64 = true;
        self
    }

    pub const fn with_not_64(mut self) -> Self {
        self.not_64 = true;
        self
    }

    pub const fn with_only_64(mut self) -> Self {
        self.only_64 = true;
        self
    }

    pub const fn with_lock(mut self) -> Self {
        self.lock = true;
        self
    }

    pub const fn with_mem_only(mut self) -> Self {
        self.mem_only = true;
        self
    }

    pub const fn with_reg_only(mut self) -> Self {
        self.reg_only = true;
        self
    }

    /// Wraps the template in a handler.
    pub const fn handler(self) -> Handler {
        Handler::Op(self)
    }

    /// Returns true if decoding needs a ModRM byte.
    pub const fn needs_modrm(&self) -> bool {
        let mut i = 0;
        while i < self.ops.len() {
            if self.ops[i].needs_modrm() {
                return true;
            }
            i += 1;
        }
        false
    }

    /// Index register class of the VSIB operand, if the form has one.
    pub const fn vsib_index(&self) -> Option<Register> {
        let mut i = 0;
        while i < self.ops.len() {
            if let Some(index) = self.ops[i].vsib_index() {
                return Some(index);
            }
            i += 1;
        }
        None
    }
}

/// One node of a legacy opcode map.
#[derive(Debug, Clone, Copy)]
pub enum Handler {
    Invalid,
    Op(Template),
    /// Selected by ModRM.reg
    Group(&'static [Handler; 8]),
    /// ModRM.reg for memory forms; `modrm & 0x3F` for register forms, where
    /// an `Invalid` entry falls back to the ModRM.reg table
    RmGroup(&'static [Handler; 8], &'static [Handler; 64]),
    /// Selected by ModRM.mod: register form or memory form
    RegMem {
        reg: &'static Handler,
        mem: &'static Handler,
    },
    /// Selected by the mandatory prefix: none, `66`, `F3`, `F2`. The chosen
    /// prefix is consumed and no longer acts as a size or repeat prefix.
    Prefixed(&'static [Handler; 4]),
    /// Selected by `F3`/`F2` only; `66` keeps acting as operand size
    RepPrefixed {
        normal: &'static Handler,
        f3: &'static Handler,
        f2: &'static Handler,
    },
    /// Selected by REX.B
    RexB {
        plain: &'static Handler,
        rex_b: &'static Handler,
    },
    /// Selected by 16/32-bit versus 64-bit mode
    Bitness {
        legacy: &'static Handler,
        long: &'static Handler,
    },
    /// Escape byte into another map
    Escape(OpcodeMap),
    /// `C5`; the handler is used in 16/32-bit mode when the next byte is
    /// not `11xxxxxx`
    Vex2(&'static Handler),
    /// `C4`
    Vex3(&'static Handler),
    /// `62`
    Evex(&'static Handler),
}

/// Shorthand for the fixed memory sizes used in the tables.
pub(crate) const W_D_Q: [MemorySize; 3] = [MemorySize::UInt16, MemorySize::UInt32, MemorySize::UInt64];

static INVALID: Handler = Handler::Invalid;

// ---- groups ----

static GROUP_80: [Handler; 8] = [
    Template::new(Code::Add_Eb_Ib, &[Op::Eb, Op::Ib]).with_lock().handler(),
    Template::new(Code::Or_Eb_Ib, &[Op::Eb, Op::Ib]).with_lock().handler(),
    Template::new(Code::Adc_Eb_Ib, &[Op::Eb, Op::Ib]).with_lock().handler(),
    Template::new(Code::Sbb_Eb_Ib, &[Op::Eb, Op::Ib]).with_lock().handler(),
    Template::new(Code::And_Eb_Ib, &[Op::Eb, Op::Ib]).with_lock().handler(),
    Template::new(Code::Sub_Eb_Ib, &[Op::Eb, Op::Ib]).with_lock().handler(),
    Template::new(Code::Xor_Eb_Ib, &[Op::Eb, Op::Ib]).with_lock().handler(),
    Template::new(Code::Cmp_Eb_Ib, &[Op::Eb, Op::Ib]).handler(),
];

// 82 is an alias of 80 outside 64-bit mode
static GROUP_82: Handler = Handler::Bitness {
    legacy: &Handler::Group(&GROUP_80),
    long: &INVALID,
};

static GROUP_81: [Handler; 8] = [
    Template::sized([Code::Add_Ew_Iw, Code::Add_Ed_Id, Code::Add_Eq_Id64], &[Op::Ev, Op::Iz]).with_lock().handler(),
    Template::sized([Code::Or_Ew_Iw, Code::Or_Ed_Id, Code::Or_Eq_Id64], &[Op::Ev, Op::Iz]).with_lock().handler(),
    Template::sized([Code::Adc_Ew_Iw, Code::Adc_Ed_Id, Code::Adc_Eq_Id64], &[Op::Ev, Op::Iz]).with_lock().handler(),
    Template::sized([Code::Sbb_Ew_Iw, Code::Sbb_Ed_Id, Code::Sbb_Eq_Id64], &[Op::Ev, Op::Iz]).with_lock().handler(),
    Template::sized([Code::And_Ew_Iw, Code::And_Ed_Id, Code::And_Eq_Id64], &[Op::Ev, Op::Iz]).with_lock().handler(),
    Template::sized([Code::Sub_Ew_Iw, Code::Sub_Ed_Id, Code::Sub_Eq_Id64], &[Op::Ev, Op::Iz]).with_lock().handler(),
    Template::sized([Code::Xor_Ew_Iw, Code::Xor_Ed_Id, Code::Xor_Eq_Id64], &[Op::Ev, Op::Iz]).with_lock().handler(),
    Template::sized([Code::Cmp_Ew_Iw, Code::Cmp_Ed_Id, Code::Cmp_Eq_Id64], &[Op::Ev, Op::Iz]).handler(),
];

static GROUP_83: [Handler; 8] = [
    Template::sized([Code::Add_Ew_Ib16, Code::Add_Ed_Ib32, Code::Add_Eq_Ib64], &[Op::Ev, Op::Ibs]).with_lock().handler(),
    Template::sized([Code::Or_Ew_Ib16, Code::Or_Ed_Ib32, Code::Or_Eq_Ib64], &[Op::Ev, Op::Ibs]).with_lock().handler(),
    Template::sized([Code::Adc_Ew_Ib16, Code::Adc_Ed_Ib32, Code::Adc_Eq_Ib64], &[Op::Ev, Op::Ibs]).with_lock().handler(),
    Template::sized([Code::Sbb_Ew_Ib16, Code::Sbb_Ed_Ib32, Code::Sbb_Eq_Ib64], &[Op::Ev, Op::Ibs]).with_lock().handler(),
    Template::sized([Code::And_Ew_Ib16, Code::And_Ed_Ib32, Code::And_Eq_Ib64], &[Op::Ev, Op::Ibs]).with_lock().handler(),
    Template::sized([Code::Sub_Ew_Ib16, Code::Sub_Ed_Ib32, Code::Sub_Eq_Ib64], &[Op::Ev, Op::Ibs]).with_lock().handler(),
    Template::sized([Code::Xor_Ew_Ib16, Code::Xor_Ed_Ib32, Code::Xor_Eq_Ib64], &[Op::Ev, Op::Ibs]).with_lock().handler(),
    Template::sized([Code::Cmp_Ew_Ib16, Code::Cmp_Ed_Ib32, Code::Cmp_Eq_Ib64], &[Op::Ev, Op::Ibs]).handler(),
];

static GROUP_8F: [Handler; 8] = [
    Template::sized([Code::Pop_Ew, Code::Pop_Ed, Code::Pop_Eq], &[Op::Ev]).with_default_64().handler(),
    Handler::Invalid,
    Handler::Invalid,
    Handler::Invalid,
    Handler::Invalid,
    Handler::Invalid,
    Handler::Invalid,
    Handler::Invalid,
];

// Shift groups: /6 decodes as SHL
static GROUP_C0: [Handler; 8] = [
    Template::new(Code::Rol_Eb_Ib, &[Op::Eb, Op::Ib]).handler(),
    Template::new(Code::Ror_Eb_Ib, &[Op::Eb, Op::Ib]).handler(),
    Template::new(Code::Rcl_Eb_Ib, &[Op::Eb, Op::Ib]).handler(),
    Template::new(Code::Rcr_Eb_Ib, &[Op::Eb, Op::Ib]).handler(),
    Template::new(Code::Shl_Eb_Ib, &[Op::Eb, Op::Ib]).handler(),
    Template::new(Code::Shr_Eb_Ib, &[Op::Eb, Op::Ib]).handler(),
    Template::new(Code::Shl_Eb_Ib, &[Op::Eb, Op::Ib]).handler(),
    Template::new(Code::Sar_Eb_Ib, &[Op::Eb, Op::Ib]).with_mem(MemorySize::Int8).handler(),
];

const I_W_D_Q: [MemorySize; 3] = [MemorySize::Int16, MemorySize::Int32, MemorySize::Int64];

static GROUP_C1: [Handler; 8] = [
    Template::sized([Code::Rol_Ew_Ib, Code::Rol_Ed_Ib, Code::Rol_Eq_Ib], &[Op::Ev, Op::Ib]).handler(),
    Template::sized([Code::Ror_Ew_Ib, Code::Ror_Ed_Ib, Code::Ror_Eq_Ib], &[Op::Ev, Op::Ib]).handler(),
    Template::sized([Code::Rcl_Ew_Ib, Code::Rcl_Ed_Ib, Code::Rcl_Eq_Ib], &[Op::Ev, Op::Ib]).handler(),
    Template::sized([Code::Rcr_Ew_Ib, Code::Rcr_Ed_Ib, Code::Rcr_Eq_Ib], &[Op::Ev, Op::Ib]).handler(),
    Template::sized([Code::Shl_Ew_Ib, Code::Shl_Ed_Ib, Code::Shl_Eq_Ib], &[Op::Ev, Op::Ib]).handler(),
    Template::sized([Code::Shr_Ew_Ib, Code::Shr_Ed_Ib, Code::Shr_Eq_Ib], &[Op::Ev, Op::Ib]).handler(),
    Template::sized([Code::Shl_Ew_Ib, Code::Shl_Ed_Ib, Code::Shl_Eq_Ib], &[Op::Ev, Op::Ib]).handler(),
    Template::sized([Code::Sar_Ew_Ib, Code::Sar_Ed_Ib, Code::Sar_Eq_Ib], &[Op::Ev, Op::Ib])
        .with_mem_sized(I_W_D_Q)
        .handler(),
];

static GROUP_D0: [Handler; 8] = [
    Template::new(Code::Rol_Eb_1, &[Op::Eb, Op::One]).handler(),
    Template::new(Code::Ror_Eb_1, &[Op::Eb, Op::One]).handler(),
    Template::new(Code::Rcl_Eb_1, &[Op::Eb, Op::One]).handler(),
    Template::new(Code::Rcr_Eb_1, &[Op::Eb, Op::One]).handler(),
    Template::new(Code::Shl_Eb_1, &[Op::Eb, Op::One]).handler(),
    Template::new(Code::Shr_Eb_1, &[Op::Eb, Op::One]).handler(),
    Template::new(Code::Shl_Eb_1, &[Op::Eb, Op::One]).handler(),
    Template::new(Code::Sar_Eb_1, &[Op::Eb, Op::One]).with_mem(MemorySize::Int8).handler(),
];

static GROUP_D1: [Handler; 8] = [
    Template::sized([Code::Rol_Ew_1, Code::Rol_Ed_1, Code::Rol_Eq_1], &[Op::Ev, Op::One]).handler(),
    Template::sized([Code::Ror_Ew_1, Code::Ror_Ed_1, Code::Ror_Eq_1], &[Op::Ev, Op::One]).handler(),
    Template::sized([Code::Rcl_Ew_1, Code::Rcl_Ed_1, Code::Rcl_Eq_1], &[Op::Ev, Op::One]).handler(),
    Template::sized([Code::Rcr_Ew_1, Code::Rcr_Ed_1, Code::Rcr_Eq_1], &[Op::Ev, Op::One]).handler(),
    Template::sized([Code::Shl_Ew_1, Code::Shl_Ed_1, Code::Shl_Eq_1], &[Op::Ev, Op::One]).handler(),
    Template::sized([Code::Shr_Ew_1, Code::Shr_Ed_1, Code::Shr_Eq_1], &[Op::Ev, Op::One]).handler(),
    Template::sized([Code::Shl_Ew_1, Code::Shl_Ed_1, Code::Shl_Eq_1], &[Op::Ev, Op::One]).handler(),
    Template::sized([Code::Sar_Ew_1, Code::Sar_Ed_1, Code::Sar_Eq_1], &[Op::Ev, Op::One])
        .with_mem_sized(I_W_D_Q)
        .handler(),
];

static GROUP_D2: [Handler; 8] = [
    Template::new(Code::Rol_Eb_CL, &[Op::Eb, Op::Reg(Register::CL)]).handler(),
    Template::new(Code::Ror_Eb_CL, &[Op::Eb, Op::Reg(Register::CL)]).handler(),
    Template::new(Code::Rcl_Eb_CL, &[Op::Eb, Op::Reg(Register::CL)]).handler(),
    Template::new(Code::Rcr_Eb_CL, &[Op::Eb, Op::Reg(Register::CL)]).handler(),
    Template::new(Code::Shl_Eb_CL, &[Op::Eb, Op::Reg(Register::CL)]).handler(),
    Template::new(Code::Shr_Eb_CL, &[Op::Eb, Op::Reg(Register::CL)]).handler(),
    Template::new(Code::Shl_Eb_CL, &[Op::Eb, Op::Reg(Register::CL)]).handler(),
    Template::new(Code::Sar_Eb_CL, &[Op::Eb, Op::Reg(Register::CL)]).with_mem(MemorySize::Int8).handler(),
];

static GROUP_D3: [Handler; 8] = [
    Template::sized([Code::Rol_Ew_CL, Code::Rol_Ed_CL, Code::Rol_Eq_CL], &[Op::Ev, Op::Reg(Register::CL)]).handler(),
    Template::sized([Code::Ror_Ew_CL, Code::Ror_Ed_CL, Code::Ror_Eq_CL], &[Op::Ev, Op::Reg(Register::CL)]).handler(),
    Template::sized([Code::Rcl_Ew_CL, Code::Rcl_Ed_CL, Code::Rcl_Eq_CL], &[Op::Ev, Op::Reg(Register::CL)]).handler(),
    Template::sized([Code::Rcr_Ew_CL, Code::Rcr_Ed_CL, Code::Rcr_Eq_CL], &[Op::Ev, Op::Reg(Register::CL)]).handler(),
    Template::sized([Code::Shl_Ew_CL, Code::Shl_Ed_CL, Code::Shl_Eq_CL], &[Op::Ev, Op::Reg(Register::CL)]).handler(),
    Template::sized([Code::Shr_Ew_CL, Code::Shr_Ed_CL, Code::Shr_Eq_CL], &[Op::Ev, Op::Reg(Register::CL)]).handler(),
    Template::sized([Code::Shl_Ew_CL, Code::Shl_Ed_CL, Code::Shl_Eq_CL], &[Op::Ev, Op::Reg(Register::CL)]).handler(),
    Template::sized([Code::Sar_Ew_CL, Code::Sar_Ed_CL, Code::Sar_Eq_CL], &[Op::Ev, Op::Reg(Register::CL)])
        .with_mem_sized(I_W_D_Q)
        .handler(),
];

// /1 decodes as TEST
static GROUP_F6: [Handler; 8] = [
    Template::new(Code::Test_Eb_Ib, &[Op::Eb, Op::Ib]).handler(),
    Template::new(Code::Test_Eb_Ib, &[Op::Eb, Op::Ib]).handler(),
    Template::new(Code::Not_Eb, &[Op::Eb]).with_lock().handler(),
    Template::new(Code::Neg_Eb, &[Op::Eb]).with_mem(MemorySize::Int8).with_lock().handler(),
    Template::new(Code::Mul_Eb, &[Op::Eb]).handler(),
    Template::new(Code::Imul_Eb, &[Op::Eb]).with_mem(MemorySize::Int8).handler(),
    Template::new(Code::Div_Eb, &[Op::Eb]).handler(),
    Template::new(Code::Idiv_Eb, &[Op::Eb]).with_mem(MemorySize::Int8).handler(),
];

static GROUP_F7: [Handler; 8] = [
    Template::sized([Code::Test_Ew_Iw, Code::Test_Ed_Id, Code::Test_Eq_Id64], &[Op::Ev, Op::Iz]).handler(),
    Template::sized([Code::Test_Ew_Iw, Code::Test_Ed_Id, Code::Test_Eq_Id64], &[Op::Ev, Op::Iz]).handler(),
    Template::sized([Code::Not_Ew, Code::Not_Ed, Code::Not_Eq], &[Op::Ev]).with_lock().handler(),
    Template::sized([Code::Neg_Ew, Code::Neg_Ed, Code::Neg_Eq], &[Op::Ev])
        .with_mem_sized(I_W_D_Q)
        .with_lock()
        .handler(),
    Template::sized([Code::Mul_Ew, Code::Mul_Ed, Code::Mul_Eq], &[Op::Ev]).handler(),
    Template::sized([Code::Imul_Ew, Code::Imul_Ed, Code::Imul_Eq], &[Op::Ev])
        .with_mem_sized(I_W_D_Q)
        .handler(),
    Template::sized([Code::Div_Ew, Code::Div_Ed, Code::Div_Eq], &[Op::Ev]).handler(),
    Template::sized([Code::Idiv_Ew, Code::Idiv_Ed, Code::Idiv_Eq], &[Op::Ev])
        .with_mem_sized(I_W_D_Q)
        .handler(),
];

static GROUP_FE: [Handler; 8] = [
    Template::new(Code::Inc_Eb, &[Op::Eb]).with_lock().handler(),
    Template::new(Code::Dec_Eb, &[Op::Eb]).with_lock().handler(),
    Handler::Invalid,
    Handler::Invalid,
    Handler::Invalid,
    Handler::Invalid,
    Handler::Invalid,
    Handler::Invalid,
];

static GROUP_FF: [Handler; 8] = [
    Template::sized([Code::Inc_Ew, Code::Inc_Ed, Code::Inc_Eq], &[Op::Ev]).with_lock().handler(),
    Template::sized([Code::Dec_Ew, Code::Dec_Ed, Code::Dec_Eq], &[Op::Ev]).with_lock().handler(),
    Template::sized([Code::Call_Ew, Code::Call_Ed, Code::Call_Eq], &[Op::Ev])
        .with_mem_sized([MemorySize::WordOffset, MemorySize::DwordOffset, MemorySize::QwordOffset])
        .with_force_64()
        .handler(),
    Template::sized([Code::Call_Eww, Code::Call_Edw, Code::Call_Eqw], &[Op::M])
        .with_mem_sized([MemorySize::SegPtr16, MemorySize::SegPtr32, MemorySize::SegPtr64])
        .handler(),
    Template::sized([Code::Jmp_Ew, Code::Jmp_Ed, Code::Jmp_Eq], &[Op::Ev])
        .with_mem_sized([MemorySize::WordOffset, MemorySize::DwordOffset, MemorySize::QwordOffset])
        .with_force_64()
        .handler(),
    Template::sized([Code::Jmp_Eww, Code::Jmp_Edw, Code::Jmp_Eqw], &[Op::M])
        .with_mem_sized([MemorySize::SegPtr16, MemorySize::SegPtr32, MemorySize::SegPtr64])
        .handler(),
    Template::sized([Code::Push_Ew, Code::Push_Ed, Code::Push_Eq], &[Op::Ev]).with_default_64().handler(),
    Handler::Invalid,
];

// C6/C7: /0 is MOV, `F8` is the TSX form
static GROUP_C6: [Handler; 8] = [
    Template::new(Code::Mov_Eb_Ib, &[Op::Eb, Op::Ib]).handler(),
    Handler::Invalid,
    Handler::Invalid,
    Handler::Invalid,
    Handler::Invalid,
    Handler::Invalid,
    Handler::Invalid,
    Handler::Invalid,
];

static GROUP_C6_RM: [Handler; 64] = {
    let mut t = [Handler::Invalid; 64];
    t[0x38] = Template::new(Code::Xabort_Ib, &[Op::Ib]).handler();
    t
};

static GROUP_C7: [Handler; 8] = [
    Template::sized([Code::Mov_Ew_Iw, Code::Mov_Ed_Id, Code::Mov_Eq_Id64], &[Op::Ev, Op::Iz]).handler(),
    Handler::Invalid,
    Handler::Invalid,
    Handler::Invalid,
    Handler::Invalid,
    Handler::Invalid,
    Handler::Invalid,
    Handler::Invalid,
];

static GROUP_C7_RM: [Handler; 64] = {
    let mut t = [Handler::Invalid; 64];
    t[0x38] = Template::sized([Code::Xbegin_Jw16, Code::Xbegin_Jd32, Code::Xbegin_Jd64], &[Op::Jz]).with_default_64().handler();
    t
};

// ---- prefix-sensitive and mode-sensitive forms ----

static LES: Handler = Template::sized([Code::Les_Gw_Mp, Code::Les_Gd_Mp, Code::Les_Gd_Mp], &[Op::Gv, Op::M])
    .with_mem_sized([MemorySize::SegPtr16, MemorySize::SegPtr32, MemorySize::SegPtr32])
    .handler();

static LDS: Handler = Template::sized([Code::Lds_Gw_Mp, Code::Lds_Gd_Mp, Code::Lds_Gd_Mp], &[Op::Gv, Op::M])
    .with_mem_sized([MemorySize::SegPtr16, MemorySize::SegPtr32, MemorySize::SegPtr32])
    .handler();

static BOUND: Handler = Template::sized([Code::Bound_Gw_Mw2, Code::Bound_Gd_Md2, Code::Bound_Gd_Md2], &[Op::Gv, Op::M])
    .with_mem_sized([
        MemorySize::Bound16_WordWord,
        MemorySize::Bound32_DwordDword,
        MemorySize::Bound32_DwordDword,
    ])
    .handler();

static ARPL: Handler = Template::new(Code::Arpl_Ew_Gw, &[Op::Ew, Op::Gw]).handler();

static MOVSXD: Handler = Template::sized([Code::Movsxd_Gw_Ew, Code::Movsxd_Gd_Ed, Code::Movsxd_Gq_Ed], &[Op::Gv, Op::Ez])
    .with_mem_sized([MemorySize::Int16, MemorySize::Int32, MemorySize::Int32])
    .handler();

static NOP: Handler = Template::sized([Code::Nopw, Code::Nopd, Code::Nopq], &[]).handler();

static XCHG_R8_ACC: Handler =
    Template::sized([Code::Xchg_R8W_AX, Code::Xchg_R8D_EAX, Code::Xchg_R8_RAX], &[Op::Zv, Op::AccV]).handler();

static NOP_OR_XCHG: Handler = Handler::RexB {
    plain: &NOP,
    rex_b: &XCHG_R8_ACC,
};

static PAUSE: Handler = Template::new(Code::Pause, &[]).handler();

// ---- one-byte map ----

/// One-byte opcode map.
pub static ONE_BYTE: [Handler; 256] = {
    let mut t = [Handler::Invalid; 256];

    // ADD
    t[0x00] = Template::new(Code::Add_Eb_Gb, &[Op::Eb, Op::Gb]).with_lock().handler();
    t[0x01] = Template::sized([Code::Add_Ew_Gw, Code::Add_Ed_Gd, Code::Add_Eq_Gq], &[Op::Ev, Op::Gv]).with_lock().handler();
    t[0x02] = Template::new(Code::Add_Gb_Eb, &[Op::Gb, Op::Eb]).handler();
    t[0x03] = Template::sized([Code::Add_Gw_Ew, Code::Add_Gd_Ed, Code::Add_Gq_Eq], &[Op::Gv, Op::Ev]).handler();
    t[0x04] = Template::new(Code::Add_AL_Ib, &[Op::Reg(Register::AL), Op::Ib]).handler();
    t[0x05] = Template::sized([Code::Add_AX_Iw, Code::Add_EAX_Id, Code::Add_RAX_Id64], &[Op::AccV, Op::Iz]).handler();
    t[0x06] = Template::sized([Code::Pushw_ES, Code::Pushd_ES, Code::Pushd_ES], &[Op::Reg(Register::ES)]).with_not_64().handler();
    t[0x07] = Template::sized([Code::Popw_ES, Code::Popd_ES, Code::Popd_ES], &[Op::Reg(Register::ES)]).with_not_64().handler();

    // OR
    t[0x08] = Template::new(Code::Or_Eb_Gb, &[Op::Eb, Op::Gb]).with_lock().handler();
    t[0x09] = Template::sized([Code::Or_Ew_Gw, Code::Or_Ed_Gd, Code::Or_Eq_Gq], &[Op::Ev, Op::Gv]).with_lock().handler();
    t[0x0A] = Template::new(Code::Or_Gb_Eb, &[Op::Gb, Op::Eb]).handler();
    t[0x0B] = Template::sized([Code::Or_Gw_Ew, Code::Or_Gd_Ed, Code::Or_Gq_Eq], &[Op::Gv, Op::Ev]).handler();
    t[0x0C] = Template::new(Code::Or_AL_Ib, &[Op::Reg(Register::AL), Op::Ib]).handler();
    t[0x0D] = Template::sized([Code::Or_AX_Iw, Code::Or_EAX_Id, Code::Or_RAX_Id64], &[Op::AccV, Op::Iz]).handler();
    t[0x0E] = Template::sized([Code::Pushw_CS, Code::Pushd_CS, Code::Pushd_CS], &[Op::Reg(Register::CS)]).with_not_64().handler();
    t[0x0F] = Handler::Escape(OpcodeMap::M0F);

    // ADC
    t[0x10] = Template::new(Code::Adc_Eb_Gb, &[Op::Eb, Op::Gb]).with_lock().handler();
    t[0x11] = Template::sized([Code::Adc_Ew_Gw, Code::Adc_Ed_Gd, Code::Adc_Eq_Gq], &[Op::Ev, Op::Gv]).with_lock().handler();
    t[0x12] = Template::new(Code::Adc_Gb_Eb, &[Op::Gb, Op::Eb]).handler();
    t[0x13] = Template::sized([Code::Adc_Gw_Ew, Code::Adc_Gd_Ed, Code::Adc_Gq_Eq], &[Op::Gv, Op::Ev]).handler();
    t[0x14] = Template::new(Code::Adc_AL_Ib, &[Op::Reg(Register::AL), Op::Ib]).handler();
    t[0x15] = Template::sized([Code::Adc_AX_Iw, Code::Adc_EAX_Id, Code::Adc_RAX_Id64], &[Op::AccV, Op::Iz]).handler();
    t[0x16] = Template::sized([Code::Pushw_SS, Code::Pushd_SS, Code::Pushd_SS], &[Op::Reg(Register::SS)]).with_not_64().handler();
    t[0x17] = Template::sized([Code::Popw_SS, Code::Popd_SS, Code::Popd_SS], &[Op::Reg(Register::SS)]).with_not_64().handler();

    // SBB
    t[0x18] = Template::new(Code::Sbb_Eb_Gb, &[Op::Eb, Op::Gb]).with_lock().handler();
    t[0x19] = Template::sized([Code::Sbb_Ew_Gw, Code::Sbb_Ed_Gd, Code::Sbb_Eq_Gq], &[Op::Ev, Op::Gv]).with_lock().handler();
    t[0x1A] = Template::new(Code::Sbb_Gb_Eb, &[Op::Gb, Op::Eb]).handler();
    t[0x1B] = Template::sized([Code::Sbb_Gw_Ew, Code::Sbb_Gd_Ed, Code::Sbb_Gq_Eq], &[Op::Gv, Op::Ev]).handler();
    t[0x1C] = Template::new(Code::Sbb_AL_Ib, &[Op::Reg(Register::AL), Op::Ib]).handler();
    t[0x1D] = Template::sized([Code::Sbb_AX_Iw, Code::Sbb_EAX_Id, Code::Sbb_RAX_Id64], &[Op::AccV, Op::Iz]).handler();
    t[0x1E] = Template::sized([Code::Pushw_DS, Code::Pushd_DS, Code::Pushd_DS], &[Op::Reg(Register::DS)]).with_not_64().handler();
    t[0x1F] = Template::sized([Code::Popw_DS, Code::Popd_DS, Code::Popd_DS], &[Op::Reg(Register::DS)]).with_not_64().handler();

    // AND
    t[0x20] = Template::new(Code::And_Eb_Gb, &[Op::Eb, Op::Gb]).with_lock().handler();
    t[0x21] = Template::sized([Code::And_Ew_Gw, Code::And_Ed_Gd, Code::And_Eq_Gq], &[Op::Ev, Op::Gv]).with_lock().handler();
    t[0x22] = Template::new(Code::And_Gb_Eb, &[Op::Gb, Op::Eb]).handler();
    t[0x23] = Template::sized([Code::And_Gw_Ew, Code::And_Gd_Ed, Code::And_Gq_Eq], &[Op::Gv, Op::Ev]).handler();
    t[0x24] = Template::new(Code::And_AL_Ib, &[Op::Reg(Register::AL), Op::Ib]).handler();
    t[0x25] = Template::sized([Code::And_AX_Iw, Code::And_EAX_Id, Code::And_RAX_Id64], &[Op::AccV, Op::Iz]).handler();
    t[0x27] = Template::new(Code::Daa, &[]).with_not_64().handler();

    // SUB
    t[0x28] = Template::new(Code::Sub_Eb_Gb, &[Op::Eb, Op::Gb]).with_lock().handler();
    t[0x29] = Template::sized([Code::Sub_Ew_Gw, Code::Sub_Ed_Gd, Code::Sub_Eq_Gq], &[Op::Ev, Op::Gv]).with_lock().handler();
    t[0x2A] = Template::new(Code::Sub_Gb_Eb, &[Op::Gb, Op::Eb]).handler();
    t[0x2B] = Template::sized([Code::Sub_Gw_Ew, Code::Sub_Gd_Ed, Code::Sub_Gq_Eq], &[Op::Gv, Op::Ev]).handler();
    t[0x2C] = Template::new(Code::Sub_AL_Ib, &[Op::Reg(Register::AL), Op::Ib]).handler();
    t[0x2D] = Template::sized([Code::Sub_AX_Iw, Code::Sub_EAX_Id, Code::Sub_RAX_Id64], &[Op::AccV, Op::Iz]).handler();
    t[0x2F] = Template::new(Code::Das, &[]).with_not_64().handler();

    // XOR
    t[0x30] = Template::new(Code::Xor_Eb_Gb, &[Op::Eb, Op::Gb]).with_lock().handler();
    t[0x31] = Template::sized([Code::Xor_Ew_Gw, Code::Xor_Ed_Gd, Code::Xor_Eq_Gq], &[Op::Ev, Op::Gv]).with_lock().handler();
    t[0x32] = Template::new(Code::Xor_Gb_Eb, &[Op::Gb, Op::Eb]).handler();
    t[0x33] = Template::sized([Code::Xor_Gw_Ew, Code::Xor_Gd_Ed, Code::Xor_Gq_Eq], &[Op::Gv, Op::Ev]).handler();
    t[0x34] = Template::new(Code::Xor_AL_Ib, &[Op::Reg(Register::AL), Op::Ib]).handler();
    t[0x35] = Template::sized([Code::Xor_AX_Iw, Code::Xor_EAX_Id, Code::Xor_RAX_Id64], &[Op::AccV, Op::Iz]).handler();
    t[0x37] = Template::new(Code::Aaa, &[]).with_not_64().handler();

    // CMP
    t[0x38] = Template::new(Code::Cmp_Eb_Gb, &[Op::Eb, Op::Gb]).handler();
    t[0x39] = Template::sized([Code::Cmp_Ew_Gw, Code::Cmp_Ed_Gd, Code::Cmp_Eq_Gq], &[Op::Ev, Op::Gv]).handler();
    t[0x3A] = Template::new(Code::Cmp_Gb_Eb, &[Op::Gb, Op::Eb]).handler();
    t[0x3B] = Template::sized([Code::Cmp_Gw_Ew, Code::Cmp_Gd_Ed, Code::Cmp_Gq_Eq], &[Op::Gv, Op::Ev]).handler();
    t[0x3C] = Template::new(Code::Cmp_AL_Ib, &[Op::Reg(Register::AL), Op::Ib]).handler();
    t[0x3D] = Template::sized([Code::Cmp_AX_Iw, Code::Cmp_EAX_Id, Code::Cmp_RAX_Id64], &[Op::AccV, Op::Iz]).handler();
    t[0x3F] = Template::new(Code::Aas, &[]).with_not_64().handler();

    // INC/DEC r16/r32 (REX in 64-bit mode)
    t[0x40] = Template::sized([Code::Inc_AX, Code::Inc_EAX, Code::Inc_EAX], &[Op::Zv]).with_not_64().handler();
    t[0x41] = Template::sized([Code::Inc_CX, Code::Inc_ECX, Code::Inc_ECX], &[Op::Zv]).with_not_64().handler();
    t[0x42] = Template::sized([Code::Inc_DX, Code::Inc_EDX, Code::Inc_EDX], &[Op::Zv]).with_not_64().handler();
    t[0x43] = Template::sized([Code::Inc_BX, Code::Inc_EBX, Code::Inc_EBX], &[Op::Zv]).with_not_64().handler();
    t[0x44] = Template::sized([Code::Inc_SP, Code::Inc_ESP, Code::Inc_ESP], &[Op::Zv]).with_not_64().handler();
    t[0x45] = Template::sized([Code::Inc_BP, Code::Inc_EBP, Code::Inc_EBP], &[Op::Zv]).with_not_64().handler();
    t[0x46] = Template::sized([Code::Inc_SI, Code::Inc_ESI, Code::Inc_ESI], &[Op::Zv]).with_not_64().handler();
    t[0x47] = Template::sized([Code::Inc_DI, Code::Inc_EDI, Code::Inc_EDI], &[Op::Zv]).with_not_64().handler();
    t[0x48] = Template::sized([Code::Dec_AX, Code::Dec_EAX, Code::Dec_EAX], &[Op::Zv]).with_not_64().handler();
    t[0x49] = Template::sized([Code::Dec_CX, Code::Dec_ECX, Code::Dec_ECX], &[Op::Zv]).with_not_64().handler();
    t[0x4A] = Template::sized([Code::Dec_DX, Code::Dec_EDX, Code::Dec_EDX], &[Op::Zv]).with_not_64().handler();
    t[0x4B] = Template::sized([Code::Dec_BX, Code::Dec_EBX, Code::Dec_EBX], &[Op::Zv]).with_not_64().handler();
    t[0x4C] = Template::sized([Code::Dec_SP, Code::Dec_ESP, Code::Dec_ESP], &[Op::Zv]).with_not_64().handler();
    t[0x4D] = Template::sized([Code::Dec_BP, Code::Dec_EBP, Code::Dec_EBP], &[Op::Zv]).with_not_64().handler();
    t[0x4E] = Template::sized([Code::Dec_SI, Code::Dec_ESI, Code::Dec_ESI], &[Op::Zv]).with_not_64().handler();
    t[0x4F] = Template::sized([Code::Dec_DI, Code::Dec_EDI, Code::Dec_EDI], &[Op::Zv]).with_not_64().handler();

    // PUSH/POP r
    t[0x50] = Template::with_code(CodeSel::SizedRexB([Code::Push_AX, Code::Push_R8W, Code::Push_EAX, Code::Push_EAX, Code::Push_RAX, Code::Push_R8]), &[Op::Zv]).with_default_64().handler();
    t[0x51] = Template::with_code(CodeSel::SizedRexB([Code::Push_CX, Code::Push_R9W, Code::Push_ECX, Code::Push_ECX, Code::Push_RCX, Code::Push_R9]), &[Op::Zv]).with_default_64().handler();
    t[0x52] = Template::with_code(CodeSel::SizedRexB([Code::Push_DX, Code::Push_R10W, Code::Push_EDX, Code::Push_EDX, Code::Push_RDX, Code::Push_R10]), &[Op::Zv]).with_default_64().handler();
    t[0x53] = Template::with_code(CodeSel::SizedRexB([Code::Push_BX, Code::Push_R11W, Code::Push_EBX, Code::Push_EBX, Code::Push_RBX, Code::Push_R11]), &[Op::Zv]).with_default_64().handler();
    t[0x54] = Template::with_code(CodeSel::SizedRexB([Code::Push_SP, Code::Push_R12W, Code::Push_ESP, Code::Push_ESP, Code::Push_RSP, Code::Push_R12]), &[Op::Zv]).with_default_64().handler();
    t[0x55] = Template::with_code(CodeSel::SizedRexB([Code::Push_BP, Code::Push_R13W, Code::Push_EBP, Code::Push_EBP, Code::Push_RBP, Code::Push_R13]), &[Op::Zv]).with_default_64().handler();
    t[0x56] = Template::with_code(CodeSel::SizedRexB([Code::Push_SI, Code::Push_R14W, Code::Push_ESI, Code::Push_ESI, Code::Push_RSI, Code::Push_R14]), &[Op::Zv]).with_default_64().handler();
    t[0x57] = Template::with_code(CodeSel::SizedRexB([Code::Push_DI, Code::Push_R15W, Code::Push_EDI, Code::Push_EDI, Code::Push_RDI, Code::Push_R15]), &[Op::Zv]).with_default_64().handler();
    t[0x58] = Template::with_code(CodeSel::SizedRexB([Code::Pop_AX, Code::Pop_R8W, Code::Pop_EAX, Code::Pop_EAX, Code::Pop_RAX, Code::Pop_R8]), &[Op::Zv]).with_default_64().handler();
    t[0x59] = Template::with_code(CodeSel::SizedRexB([Code::Pop_CX, Code::Pop_R9W, Code::Pop_ECX, Code::Pop_ECX, Code::Pop_RCX, Code::Pop_R9]), &[Op::Zv]).with_default_64().handler();
    t[0x5A] = Template::with_code(CodeSel::SizedRexB([Code::Pop_DX, Code::Pop_R10W, Code::Pop_EDX, Code::Pop_EDX, Code::Pop_RDX, Code::Pop_R10]), &[Op::Zv]).with_default_64().handler();
    t[0x5B] = Template::with_code(CodeSel::SizedRexB([Code::Pop_BX, Code::Pop_R11W, Code::Pop_EBX, Code::Pop_EBX, Code::Pop_RBX, Code::Pop_R11]), &[Op::Zv]).with_default_64().handler();
    t[0x5C] = Template::with_code(CodeSel::SizedRexB([Code::Pop_SP, Code::Pop_R12W, Code::Pop_ESP, Code::Pop_ESP, Code::Pop_RSP, Code::Pop_R12]), &[Op::Zv]).with_default_64().handler();
    t[0x5D] = Template::with_code(CodeSel::SizedRexB([Code::Pop_BP, Code::Pop_R13W, Code::Pop_EBP, Code::Pop_EBP, Code::Pop_RBP, Code::Pop_R13]), &[Op::Zv]).with_default_64().handler();
    t[0x5E] = Template::with_code(CodeSel::SizedRexB([Code::Pop_SI, Code::Pop_R14W, Code::Pop_ESI, Code::Pop_ESI, Code::Pop_RSI, Code::Pop_R14]), &[Op::Zv]).with_default_64().handler();
    t[0x5F] = Template::with_code(CodeSel::SizedRexB([Code::Pop_DI, Code::Pop_R15W, Code::Pop_EDI, Code::Pop_EDI, Code::Pop_RDI, Code::Pop_R15]), &[Op::Zv]).with_default_64().handler();

    t[0x60] = Template::sized([Code::Pushaw, Code::Pushad, Code::Pushad], &[]).with_not_64().handler();
    t[0x61] = Template::sized([Code::Popaw, Code::Popad, Code::Popad], &[]).with_not_64().handler();
    t[0x62] = Handler::Evex(&BOUND);
    t[0x63] = Handler::Bitness {
        legacy: &ARPL,
        long: &MOVSXD,
    };
    t[0x68] = Template::sized([Code::Push_Iw, Code::Push_Id, Code::Push_Id64], &[Op::Iz]).with_default_64().handler();
    t[0x69] = Template::sized([Code::Imul_Gw_Ew_Iw, Code::Imul_Gd_Ed_Id, Code::Imul_Gq_Eq_Id64], &[Op::Gv, Op::Ev, Op::Iz]).handler();
    t[0x6A] = Template::sized([Code::Push_Ib16, Code::Push_Ib32, Code::Push_Ib64], &[Op::Ibs]).with_default_64().handler();
    t[0x6B] = Template::sized([Code::Imul_Gw_Ew_Ib16, Code::Imul_Gd_Ed_Ib32, Code::Imul_Gq_Eq_Ib64], &[Op::Gv, Op::Ev, Op::Ibs]).handler();
    t[0x6C] = Template::new(Code::Insb_Yb_DX, &[Op::Ys, Op::Reg(Register::DX)]).with_mem(MemorySize::UInt8).handler();
    t[0x6D] = Template::sized([Code::Insw_Yw_DX, Code::Insd_Yd_DX, Code::Insd_Yd_DX], &[Op::Ys, Op::Reg(Register::DX)])
        .with_mem_sized([MemorySize::UInt16, MemorySize::UInt32, MemorySize::UInt32])
        .handler();
    t[0x6E] = Template::new(Code::Outsb_DX_Xb, &[Op::Reg(Register::DX), Op::Xs]).with_mem(MemorySize::UInt8).handler();
    t[0x6F] = Template::sized([Code::Outsw_DX_Xw, Code::Outsd_DX_Xd, Code::Outsd_DX_Xd], &[Op::Reg(Register::DX), Op::Xs])
        .with_mem_sized([MemorySize::UInt16, MemorySize::UInt32, MemorySize::UInt32])
        .handler();

    // Jcc rel8
    t[0x70] = Template::sized([Code::Jo_Jb16, Code::Jo_Jb32, Code::Jo_Jb64], &[Op::Jb]).with_force_64().handler();
    t[0x71] = Template::sized([Code::Jno_Jb16, Code::Jno_Jb32, Code::Jno_Jb64], &[Op::Jb]).with_force_64().handler();
    t[0x72] = Template::sized([Code::Jb_Jb16, Code::Jb_Jb32, Code::Jb_Jb64], &[Op::Jb]).with_force_64().handler();
    t[0x73] = Template::sized([Code::Jae_Jb16, Code::Jae_Jb32, Code::Jae_Jb64], &[Op::Jb]).with_force_64().handler();
    t[0x74] = Template::sized([Code::Je_Jb16, Code::Je_Jb32, Code::Je_Jb64], &[Op::Jb]).with_force_64().handler();
    t[0x75] = Template::sized([Code::Jne_Jb16, Code::Jne_Jb32, Code::Jne_Jb64], &[Op::Jb]).with_force_64().handler();
    t[0x76] = Template::sized([Code::Jbe_Jb16, Code::Jbe_Jb32, Code::Jbe_Jb64], &[Op::Jb]).with_force_64().handler();
    t[0x77] = Template::sized([Code::Ja_Jb16, Code::Ja_Jb32, Code::Ja_Jb64], &[Op::Jb]).with_force_64().handler();
    t[0x78] = Template::sized([Code::Js_Jb16, Code::Js_Jb32, Code::Js_Jb64], &[Op::Jb]).with_force_64().handler();
    t[0x79] = Template::sized([Code::Jns_Jb16, Code::Jns_Jb32, Code::Jns_Jb64], &[Op::Jb]).with_force_64().handler();
    t[0x7A] = Template::sized([Code::Jp_Jb16, Code::Jp_Jb32, Code::Jp_Jb64], &[Op::Jb]).with_force_64().handler();
    t[0x7B] = Template::sized([Code::Jnp_Jb16, Code::Jnp_Jb32, Code::Jnp_Jb64], &[Op::Jb]).with_force_64().handler();
    t[0x7C] = Template::sized([Code::Jl_Jb16, Code::Jl_Jb32, Code::Jl_Jb64], &[Op::Jb]).with_force_64().handler();
    t[0x7D] = Template::sized([Code::Jge_Jb16, Code::Jge_Jb32, Code::Jge_Jb64], &[Op::Jb]).with_force_64().handler();
    t[0x7E] = Template::sized([Code::Jle_Jb16, Code::Jle_Jb32, Code::Jle_Jb64], &[Op::Jb]).with_force_64().handler();
    t[0x7F] = Template::sized([Code::Jg_Jb16, Code::Jg_Jb32, Code::Jg_Jb64], &[Op::Jb]).with_force_64().handler();

    t[0x80] = Handler::Group(&GROUP_80);
    t[0x81] = Handler::Group(&GROUP_81);
    t[0x82] = GROUP_82;
    t[0x83] = Handler::Group(&GROUP_83);
    t[0x84] = Template::new(Code::Test_Eb_Gb, &[Op::Eb, Op::Gb]).handler();
    t[0x85] = Template::sized([Code::Test_Ew_Gw, Code::Test_Ed_Gd, Code::Test_Eq_Gq], &[Op::Ev, Op::Gv]).handler();
    t[0x86] = Template::new(Code::Xchg_Eb_Gb, &[Op::Eb, Op::Gb]).with_lock().handler();
    t[0x87] = Template::sized([Code::Xchg_Ew_Gw, Code::Xchg_Ed_Gd, Code::Xchg_Eq_Gq], &[Op::Ev, Op::Gv]).with_lock().handler();

    // MOV
    t[0x88] = Template::new(Code::Mov_Eb_Gb, &[Op::Eb, Op::Gb]).handler();
    t[0x89] = Template::sized([Code::Mov_Ew_Gw, Code::Mov_Ed_Gd, Code::Mov_Eq_Gq], &[Op::Ev, Op::Gv]).handler();
    t[0x8A] = Template::new(Code::Mov_Gb_Eb, &[Op::Gb, Op::Eb]).handler();
    t[0x8B] = Template::sized([Code::Mov_Gw_Ew, Code::Mov_Gd_Ed, Code::Mov_Gq_Eq], &[Op::Gv, Op::Ev]).handler();
    t[0x8C] = Template::sized([Code::Mov_Ew_Sw, Code::Mov_Ed_Sw, Code::Mov_Eq_Sw], &[Op::Ev, Op::Sw]).with_mem(MemorySize::UInt16).handler();
    t[0x8D] = Template::sized([Code::Lea_Gw_M, Code::Lea_Gd_M, Code::Lea_Gq_M], &[Op::Gv, Op::M]).handler();
    t[0x8E] = Template::sized([Code::Mov_Sw_Ew, Code::Mov_Sw_Ed, Code::Mov_Sw_Eq], &[Op::Sw, Op::Ev]).with_mem(MemorySize::UInt16).handler();
    t[0x8F] = Handler::Group(&GROUP_8F);

    // NOP/PAUSE and XCHG r, rAX
    t[0x90] = Handler::RepPrefixed {
        normal: &NOP_OR_XCHG,
        f3: &PAUSE,
        f2: &NOP_OR_XCHG,
    };
    t[0x91] = Template::with_code(CodeSel::SizedRexB([Code::Xchg_CX_AX, Code::Xchg_R9W_AX, Code::Xchg_ECX_EAX, Code::Xchg_R9D_EAX, Code::Xchg_RCX_RAX, Code::Xchg_R9_RAX]), &[Op::Zv, Op::AccV]).handler();
    t[0x92] = Template::with_code(CodeSel::SizedRexB([Code::Xchg_DX_AX, Code::Xchg_R10W_AX, Code::Xchg_EDX_EAX, Code::Xchg_R10D_EAX, Code::Xchg_RDX_RAX, Code::Xchg_R10_RAX]), &[Op::Zv, Op::AccV]).handler();
    t[0x93] = Template::with_code(CodeSel::SizedRexB([Code::Xchg_BX_AX, Code::Xchg_R11W_AX, Code::Xchg_EBX_EAX, Code::Xchg_R11D_EAX, Code::Xchg_RBX_RAX, Code::Xchg_R11_RAX]), &[Op::Zv, Op::AccV]).handler();
    t[0x94] = Template::with_code(CodeSel::SizedRexB([Code::Xchg_SP_AX, Code::Xchg_R12W_AX, Code::Xchg_ESP_EAX, Code::Xchg_R12D_EAX, Code::Xchg_RSP_RAX, Code::Xchg_R12_RAX]), &[Op::Zv, Op::AccV]).handler();
    t[0x95] = Template::with_code(CodeSel::SizedRexB([Code::Xchg_BP_AX, Code::Xchg_R13W_AX, Code::Xchg_EBP_EAX, Code::Xchg_R13D_EAX, Code::Xchg_RBP_RAX, Code::Xchg_R13_RAX]), &[Op::Zv, Op::AccV]).handler();
    t[0x96] = Template::with_code(CodeSel::SizedRexB([Code::Xchg_SI_AX, Code::Xchg_R14W_AX, Code::Xchg_ESI_EAX, Code::Xchg_R14D_EAX, Code::Xchg_RSI_RAX, Code::Xchg_R14_RAX]), &[Op::Zv, Op::AccV]).handler();
    t[0x97] = Template::with_code(CodeSel::SizedRexB([Code::Xchg_DI_AX, Code::Xchg_R15W_AX, Code::Xchg_EDI_EAX, Code::Xchg_R15D_EAX, Code::Xchg_RDI_RAX, Code::Xchg_R15_RAX]), &[Op::Zv, Op::AccV]).handler();

    t[0x98] = Template::sized([Code::Cbw, Code::Cwde, Code::Cdqe], &[]).handler();
    t[0x99] = Template::sized([Code::Cwd, Code::Cdq, Code::Cqo], &[]).handler();
    t[0x9A] = Template::sized([Code::Call_Aww, Code::Call_Adw, Code::Call_Adw], &[Op::Ap]).with_not_64().handler();
    t[0x9B] = Template::new(Code::Wait, &[]).handler();
    t[0x9C] = Template::sized([Code::Pushfw, Code::Pushfd, Code::Pushfq], &[]).with_default_64().handler();
    t[0x9D] = Template::sized([Code::Popfw, Code::Popfd, Code::Popfq], &[]).with_default_64().handler();
    t[0x9E] = Template::new(Code::Sahf, &[]).handler();
    t[0x9F] = Template::new(Code::Lahf, &[]).handler();

    // MOV moffs
    t[0xA0] = Template::new(Code::Mov_AL_Ob, &[Op::Reg(Register::AL), Op::O]).with_mem(MemorySize::UInt8).handler();
    t[0xA1] = Template::sized([Code::Mov_AX_Ow, Code::Mov_EAX_Od, Code::Mov_RAX_Oq], &[Op::AccV, Op::O]).with_mem_sized(W_D_Q).handler();
    t[0xA2] = Template::new(Code::Mov_Ob_AL, &[Op::O, Op::Reg(Register::AL)]).with_mem(MemorySize::UInt8).handler();
    t[0xA3] = Template::sized([Code::Mov_Ow_AX, Code::Mov_Od_EAX, Code::Mov_Oq_RAX], &[Op::O, Op::AccV]).with_mem_sized(W_D_Q).handler();

    // string operations
    t[0xA4] = Template::new(Code::Movsb_Yb_Xb, &[Op::Ys, Op::Xs]).with_mem(MemorySize::UInt8).handler();
    t[0xA5] = Template::sized([Code::Movsw_Yw_Xw, Code::Movsd_Yd_Xd, Code::Movsq_Yq_Xq], &[Op::Ys, Op::Xs]).with_mem_sized(W_D_Q).handler();
    t[0xA6] = Template::new(Code::Cmpsb_Xb_Yb, &[Op::Xs, Op::Ys]).with_mem(MemorySize::UInt8).handler();
    t[0xA7] = Template::sized([Code::Cmpsw_Xw_Yw, Code::Cmpsd_Xd_Yd, Code::Cmpsq_Xq_Yq], &[Op::Xs, Op::Ys]).with_mem_sized(W_D_Q).handler();
    t[0xA8] = Template::new(Code::Test_AL_Ib, &[Op::Reg(Register::AL), Op::Ib]).handler();
    t[0xA9] = Template::sized([Code::Test_AX_Iw, Code::Test_EAX_Id, Code::Test_RAX_Id64], &[Op::AccV, Op::Iz]).handler();
    t[0xAA] = Template::new(Code::Stosb_Yb_AL, &[Op::Ys, Op::Reg(Register::AL)]).with_mem(MemorySize::UInt8).handler();
    t[0xAB] = Template::sized([Code::Stosw_Yw_AX, Code::Stosd_Yd_EAX, Code::Stosq_Yq_RAX], &[Op::Ys, Op::AccV]).with_mem_sized(W_D_Q).handler();
    t[0xAC] = Template::new(Code::Lodsb_AL_Xb, &[Op::Reg(Register::AL), Op::Xs]).with_mem(MemorySize::UInt8).handler();
    t[0xAD] = Template::sized([Code::Lodsw_AX_Xw, Code::Lodsd_EAX_Xd, Code::Lodsq_RAX_Xq], &[Op::AccV, Op::Xs]).with_mem_sized(W_D_Q).handler();
    t[0xAE] = Template::new(Code::Scasb_AL_Yb, &[Op::Reg(Register::AL), Op::Ys]).with_mem(MemorySize::UInt8).handler();
    t[0xAF] = Template::sized([Code::Scasw_AX_Yw, Code::Scasd_EAX_Yd, Code::Scasq_RAX_Yq], &[Op::AccV, Op::Ys]).with_mem_sized(W_D_Q).handler();

    // MOV r8, imm8
    t[0xB0] = Template::with_code(CodeSel::Byte([Code::Mov_AL_Ib, Code::Mov_AL_Ib, Code::Mov_R8L_Ib]), &[Op::Zb, Op::Ib]).handler();
    t[0xB1] = Template::with_code(CodeSel::Byte([Code::Mov_CL_Ib, Code::Mov_CL_Ib, Code::Mov_R9L_Ib]), &[Op::Zb, Op::Ib]).handler();
    t[0xB2] = Template::with_code(CodeSel::Byte([Code::Mov_DL_Ib, Code::Mov_DL_Ib, Code::Mov_R10L_Ib]), &[Op::Zb, Op::Ib]).handler();
    t[0xB3] = Template::with_code(CodeSel::Byte([Code::Mov_BL_Ib, Code::Mov_BL_Ib, Code::Mov_R11L_Ib]), &[Op::Zb, Op::Ib]).handler();
    t[0xB4] = Template::with_code(CodeSel::Byte([Code::Mov_AH_Ib, Code::Mov_SPL_Ib, Code::Mov_R12L_Ib]), &[Op::Zb, Op::Ib]).handler();
    t[0xB5] = Template::with_code(CodeSel::Byte([Code::Mov_CH_Ib, Code::Mov_BPL_Ib, Code::Mov_R13L_Ib]), &[Op::Zb, Op::Ib]).handler();
    t[0xB6] = Template::with_code(CodeSel::Byte([Code::Mov_DH_Ib, Code::Mov_SIL_Ib, Code::Mov_R14L_Ib]), &[Op::Zb, Op::Ib]).handler();
    t[0xB7] = Template::with_code(CodeSel::Byte([Code::Mov_BH_Ib, Code::Mov_DIL_Ib, Code::Mov_R15L_Ib]), &[Op::Zb, Op::Ib]).handler();

    // MOV r, imm
    t[0xB8] = Template::with_code(CodeSel::SizedRexB([Code::Mov_AX_Iw, Code::Mov_R8W_Iw, Code::Mov_EAX_Id, Code::Mov_R8D_Id, Code::Mov_RAX_Iq, Code::Mov_R8_Iq]), &[Op::Zv, Op::Iv]).handler();
    t[0xB9] = Template::with_code(CodeSel::SizedRexB([Code::Mov_CX_Iw, Code::Mov_R9W_Iw, Code::Mov_ECX_Id, Code::Mov_R9D_Id, Code::Mov_RCX_Iq, Code::Mov_R9_Iq]), &[Op::Zv, Op::Iv]).handler();
    t[0xBA] = Template::with_code(CodeSel::SizedRexB([Code::Mov_DX_Iw, Code::Mov_R10W_Iw, Code::Mov_EDX_Id, Code::Mov_R10D_Id, Code::Mov_RDX_Iq, Code::Mov_R10_Iq]), &[Op::Zv, Op::Iv]).handler();
    t[0xBB] = Template::with_code(CodeSel::SizedRexB([Code::Mov_BX_Iw, Code::Mov_R11W_Iw, Code::Mov_EBX_Id, Code::Mov_R11D_Id, Code::Mov_RBX_Iq, Code::Mov_R11_Iq]), &[Op::Zv, Op::Iv]).handler();
    t[0xBC] = Template::with_code(CodeSel::SizedRexB([Code::Mov_SP_Iw, Code::Mov_R12W_Iw, Code::Mov_ESP_Id, Code::Mov_R12D_Id, Code::Mov_RSP_Iq, Code::Mov_R12_Iq]), &[Op::Zv, Op::Iv]).handler();
    t[0xBD] = Template::with_code(CodeSel::SizedRexB([Code::Mov_BP_Iw, Code::Mov_R13W_Iw, Code::Mov_EBP_Id, Code::Mov_R13D_Id, Code::Mov_RBP_Iq, Code::Mov_R13_Iq]), &[Op::Zv, Op::Iv]).handler();
    t[0xBE] = Template::with_code(CodeSel::SizedRexB([Code::Mov_SI_Iw, Code::Mov_R14W_Iw, Code::Mov_ESI_Id, Code::Mov_R14D_Id, Code::Mov_RSI_Iq, Code::Mov_R14_Iq]), &[Op::Zv, Op::Iv]).handler();
    t[0xBF] = Template::with_code(CodeSel::SizedRexB([Code::Mov_DI_Iw, Code::Mov_R15W_Iw, Code::Mov_EDI_Id, Code::Mov_R15D_Id, Code::Mov_RDI_Iq, Code::Mov_R15_Iq]), &[Op::Zv, Op::Iv]).handler();

    t[0xC0] = Handler::Group(&GROUP_C0);
    t[0xC1] = Handler::Group(&GROUP_C1);
    t[0xC2] = Template::sized([Code::Retnw_Iw, Code::Retnd_Iw, Code::Retnq_Iw], &[Op::Iw]).with_force_64().handler();
    t[0xC3] = Template::sized([Code::Retnw, Code::Retnd, Code::Retnq], &[]).with_force_64().handler();
    t[0xC4] = Handler::Vex3(&LES);
    t[0xC5] = Handler::Vex2(&LDS);
    t[0xC6] = Handler::RmGroup(&GROUP_C6, &GROUP_C6_RM);
    t[0xC7] = Handler::RmGroup(&GROUP_C7, &GROUP_C7_RM);
    t[0xC8] = Template::sized([Code::Enterw_Iw_Ib, Code::Enterd_Iw_Ib, Code::Enterq_Iw_Ib], &[Op::Iw, Op::Ib2]).with_default_64().handler();
    t[0xC9] = Template::sized([Code::Leavew, Code::Leaved, Code::Leaveq], &[]).with_default_64().handler();
    t[0xCA] = Template::sized([Code::Retfw_Iw, Code::Retfd_Iw, Code::Retfq_Iw], &[Op::Iw]).handler();
    t[0xCB] = Template::sized([Code::Retfw, Code::Retfd, Code::Retfq], &[]).handler();
    t[0xCC] = Template::new(Code::Int3, &[]).handler();
    t[0xCD] = Template::new(Code::Int_Ib, &[Op::Ib]).handler();
    t[0xCE] = Template::new(Code::Into, &[]).with_not_64().handler();
    t[0xCF] = Template::sized([Code::Iretw, Code::Iretd, Code::Iretq], &[]).handler();

    t[0xD0] = Handler::Group(&GROUP_D0);
    t[0xD1] = Handler::Group(&GROUP_D1);
    t[0xD2] = Handler::Group(&GROUP_D2);
    t[0xD3] = Handler::Group(&GROUP_D3);
    t[0xD4] = Template::new(Code::Aam_Ib, &[Op::Ib]).with_not_64().handler();
    t[0xD5] = Template::new(Code::Aad_Ib, &[Op::Ib]).with_not_64().handler();
    t[0xD6] = Template::new(Code::Salc, &[]).with_not_64().handler();
    t[0xD7] = Template::new(Code::Xlatb, &[Op::Xlat]).with_mem(MemorySize::UInt8).handler();

    // x87 escapes
    t[0xD8] = Handler::RmGroup(&super::x87::D8_MEM, &super::x87::D8_REG);
    t[0xD9] = Handler::RmGroup(&super::x87::D9_MEM, &super::x87::D9_REG);
    t[0xDA] = Handler::RmGroup(&super::x87::DA_MEM, &super::x87::DA_REG);
    t[0xDB] = Handler::RmGroup(&super::x87::DB_MEM, &super::x87::DB_REG);
    t[0xDC] = Handler::RmGroup(&super::x87::DC_MEM, &super::x87::DC_REG);
    t[0xDD] = Handler::RmGroup(&super::x87::DD_MEM, &super::x87::DD_REG);
    t[0xDE] = Handler::RmGroup(&super::x87::DE_MEM, &super::x87::DE_REG);
    t[0xDF] = Handler::RmGroup(&super::x87::DF_MEM, &super::x87::DF_REG);

    // LOOPcc / JrCXZ
    t[0xE0] = Template::with_code(CodeSel::ByAddrOp([Code::Loopne_Jb16_CX, Code::Loopne_Jb32_CX, Code::Loopne_Jb16_ECX, Code::Loopne_Jb32_ECX, Code::Loopne_Jb64_ECX, Code::Loopne_Jb64_RCX]), &[Op::Jb]).with_force_64().handler();
    t[0xE1] = Template::with_code(CodeSel::ByAddrOp([Code::Loope_Jb16_CX, Code::Loope_Jb32_CX, Code::Loope_Jb16_ECX, Code::Loope_Jb32_ECX, Code::Loope_Jb64_ECX, Code::Loope_Jb64_RCX]), &[Op::Jb]).with_force_64().handler();
    t[0xE2] = Template::with_code(CodeSel::ByAddrOp([Code::Loop_Jb16_CX, Code::Loop_Jb32_CX, Code::Loop_Jb16_ECX, Code::Loop_Jb32_ECX, Code::Loop_Jb64_ECX, Code::Loop_Jb64_RCX]), &[Op::Jb]).with_force_64().handler();
    t[0xE3] = Template::with_code(CodeSel::ByAddrOp([Code::Jcxz_Jb16, Code::Jcxz_Jb32, Code::Jecxz_Jb16, Code::Jecxz_Jb32, Code::Jecxz_Jb64, Code::Jrcxz_Jb64]), &[Op::Jb]).with_force_64().handler();

    // port I/O
    t[0xE4] = Template::new(Code::In_AL_Ib, &[Op::Reg(Register::AL), Op::Ib]).handler();
    t[0xE5] = Template::sized([Code::In_AX_Ib, Code::In_EAX_Ib, Code::In_EAX_Ib], &[Op::AccZ, Op::Ib]).handler();
    t[0xE6] = Template::new(Code::Out_Ib_AL, &[Op::Ib, Op::Reg(Register::AL)]).handler();
    t[0xE7] = Template::sized([Code::Out_Ib_AX, Code::Out_Ib_EAX, Code::Out_Ib_EAX], &[Op::Ib, Op::AccZ]).handler();

    t[0xE8] = Template::sized([Code::Call_Jw16, Code::Call_Jd32, Code::Call_Jd64], &[Op::Jz]).with_force_64().handler();
    t[0xE9] = Template::sized([Code::Jmp_Jw16, Code::Jmp_Jd32, Code::Jmp_Jd64], &[Op::Jz]).with_force_64().handler();
    t[0xEA] = Template::sized([Code::Jmp_Aww, Code::Jmp_Adw, Code::Jmp_Adw], &[Op::Ap]).with_not_64().handler();
    t[0xEB] = Template::sized([Code::Jmp_Jb16, Code::Jmp_Jb32, Code::Jmp_Jb64], &[Op::Jb]).with_force_64().handler();
    t[0xEC] = Template::new(Code::In_AL_DX, &[Op::Reg(Register::AL), Op::Reg(Register::DX)]).handler();
    t[0xED] = Template::sized([Code::In_AX_DX, Code::In_EAX_DX, Code::In_EAX_DX], &[Op::AccZ, Op::Reg(Register::DX)]).handler();
    t[0xEE] = Template::new(Code::Out_DX_AL, &[Op::Reg(Register::DX), Op::Reg(Register::AL)]).handler();
    t[0xEF] = Template::sized([Code::Out_DX_AX, Code::Out_DX_EAX, Code::Out_DX_EAX], &[Op::Reg(Register::DX), Op::AccZ]).handler();

    t[0xF1] = Template::new(Code::Int1, &[]).handler();
    t[0xF4] = Template::new(Code::Hlt, &[]).handler();
    t[0xF5] = Template::new(Code::Cmc, &[]).handler();
    t[0xF6] = Handler::Group(&GROUP_F6);
    t[0xF7] = Handler::Group(&GROUP_F7);
    t[0xF8] = Template::new(Code::Clc, &[]).handler();
    t[0xF9] = Template::new(Code::Stc, &[]).handler();
    t[0xFA] = Template::new(Code::Cli, &[]).handler();
    t[0xFB] = Template::new(Code::Sti, &[]).handler();
    t[0xFC] = Template::new(Code::Cld, &[]).handler();
    t[0xFD] = Template::new(Code::Std, &[]).handler();
    t[0xFE] = Handler::Group(&GROUP_FE);
    t[0xFF] = Handler::Group(&GROUP_FF);

    t
};

#[cfg(test)]
mod tests {
    use super::*;

    fn template(handler: &Handler) -> &Template {
        match handler {
            Handler::Op(t) => t,
            other => panic!("expected a template, got {other:?}"),
        }
    }

    #[test]
    fn test_derived_flags() {
        let lea = template(&ONE_BYTE[0x8D]);
        assert!(lea.mem_only);
        assert!(!lea.reg_only);
        assert!(lea.needs_modrm());

        let push_imm = template(&ONE_BYTE[0x68]);
        assert!(push_imm.default_64);
        assert!(!push_imm.needs_modrm());
    }

    #[test]
    fn test_prefix_bytes_are_not_opcodes() {
        for byte in [0x26, 0x2E, 0x36, 0x3E, 0x64, 0x65, 0x66, 0x67, 0xF0, 0xF2, 0xF3] {
            assert!(matches!(ONE_BYTE[byte], Handler::Invalid), "{byte:#04x}");
        }
    }

    #[test]
    fn test_escapes() {
        assert!(matches!(ONE_BYTE[0x0F], Handler::Escape(OpcodeMap::M0F)));
        assert!(matches!(ONE_BYTE[0xC4], Handler::Vex3(_)));
        assert!(matches!(ONE_BYTE[0xC5], Handler::Vex2(_)));
        assert!(matches!(ONE_BYTE[0x62], Handler::Evex(_)));
    }

    #[test]
    fn test_group_aliases() {
        let Handler::Group(c0) = ONE_BYTE[0xC0] else {
            panic!("C0 is a group");
        };
        assert_eq!(template(&c0[6]).code, CodeSel::Fixed(Code::Shl_Eb_Ib));
        let Handler::Group(f6) = ONE_BYTE[0xF6] else {
            panic!("F6 is a group");
        };
        assert_eq!(template(&f6[1]).code, CodeSel::Fixed(Code::Test_Eb_Ib));
    }

    #[test]
    fn test_map_display() {
        assert_eq!(OpcodeMap::M0F38.to_string(), "0F38");
        assert_eq!(OpcodeMap::from_vex(3), Some(OpcodeMap::M0F3A));
        assert_eq!(OpcodeMap::from_vex(0), None);
    }
}
