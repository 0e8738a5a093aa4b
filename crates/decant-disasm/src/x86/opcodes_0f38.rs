//! Three-byte opcode map `0F 38 xx` (legacy encodings).

use decant_core::{Code, MemorySize};

use super::opcodes::{Handler, Op, Template, W_D_Q};

/// `66`-only SSE4.1 form.
const fn sse66(code: Code, size: MemorySize) -> [Handler; 4] {
    [
        Handler::Invalid,
        Template::new(code, &[Op::VX, Op::WX]).with_mem(size).handler(),
        Handler::Invalid,
        Handler::Invalid,
    ]
}

static P_00: [Handler; 4] = [
    Template::new(Code::Pshufb_P_Q, &[Op::P, Op::Q]).with_mem(MemorySize::Packed64_UInt8).handler(),
    Template::new(Code::Pshufb_VX_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed128_UInt8).handler(),
    Handler::Invalid,
    Handler::Invalid,
];

static P_17: [Handler; 4] = sse66(Code::Ptest_VX_WX, MemorySize::UInt128);

static P_20: [Handler; 4] = sse66(Code::Pmovsxbw_VX_WX, MemorySize::Packed64_Int8);
static P_21: [Handler; 4] = sse66(Code::Pmovsxbd_VX_WX, MemorySize::Packed32_Int8);
static P_22: [Handler; 4] = sse66(Code::Pmovsxbq_VX_WX, MemorySize::Packed16_Int8);
static P_23: [Handler; 4] = sse66(Code::Pmovsxwd_VX_WX, MemorySize::Packed64_Int16);
static P_24: [Handler; 4] = sse66(Code::Pmovsxwq_VX_WX, MemorySize::Packed32_Int16);
static P_25: [Handler; 4] = sse66(Code::Pmovsxdq_VX_WX, MemorySize::Packed64_Int32);
static P_28: [Handler; 4] = sse66(Code::Pmuldq_VX_WX, MemorySize::Packed128_Int32);
static P_30: [Handler; 4] = sse66(Code::Pmovzxbw_VX_WX, MemorySize::Packed64_UInt8);
static P_31: [Handler; 4] = sse66(Code::Pmovzxbd_VX_WX, MemorySize::Packed32_UInt8);
static P_32: [Handler; 4] = sse66(Code::Pmovzxbq_VX_WX, MemorySize::Packed16_UInt8);
static P_33: [Handler; 4] = sse66(Code::Pmovzxwd_VX_WX, MemorySize::Packed64_UInt16);
static P_34: [Handler; 4] = sse66(Code::Pmovzxwq_VX_WX, MemorySize::Packed32_UInt16);
static P_35: [Handler; 4] = sse66(Code::Pmovzxdq_VX_WX, MemorySize::Packed64_UInt32);

static INVALID: Handler = Handler::Invalid;

static MOVBE_LOAD: Handler = Template::sized([Code::Movbe_Gw_Mw, Code::Movbe_Gd_Md, Code::Movbe_Gq_Mq], &[Op::Gv, Op::M])
    .with_mem_sized(W_D_Q)
    .handler();
static MOVBE_STORE: Handler = Template::sized([Code::Movbe_Mw_Gw, Code::Movbe_Md_Gd, Code::Movbe_Mq_Gq], &[Op::M, Op::Gv])
    .with_mem_sized(W_D_Q)
    .handler();
// CRC32 keeps `66` as the source operand size
static CRC32_EB: Handler = Template::sized([Code::Crc32_Gd_Eb, Code::Crc32_Gd_Eb, Code::Crc32_Gq_Eb], &[Op::Gy, Op::Eb]).handler();
static CRC32_EV: Handler = Template::sized([Code::Crc32_Gd_Ew, Code::Crc32_Gd_Ed, Code::Crc32_Gq_Eq], &[Op::Gy, Op::Ev]).handler();

/// `0F 38 xx` opcode map.
pub static MAP_0F38: [Handler; 256] = {
    let mut t = [Handler::Invalid; 256];
    t[0x00] = Handler::Prefixed(&P_00);
    t[0x17] = Handler::Prefixed(&P_17);
    t[0x20] = Handler::Prefixed(&P_20);
    t[0x21] = Handler::Prefixed(&P_21);
    t[0x22] = Handler::Prefixed(&P_22);
    t[0x23] = Handler::Prefixed(&P_23);
    t[0x24] = Handler::Prefixed(&P_24);
    t[0x25] = Handler::Prefixed(&P_25);
    t[0x28] = Handler::Prefixed(&P_28);
    t[0x30] = Handler::Prefixed(&P_30);
    t[0x31] = Handler::Prefixed(&P_31);
    t[0x32] = Handler::Prefixed(&P_32);
    t[0x33] = Handler::Prefixed(&P_33);
    t[0x34] = Handler::Prefixed(&P_34);
    t[0x35] = Handler::Prefixed(&P_35);
    t[0xF0] = Handler::RepPrefixed {
        normal: &MOVBE_LOAD,
        f3: &INVALID,
        f2: &CRC32_EB,
    };
    t[0xF1] = Handler::RepPrefixed {
        normal: &MOVBE_STORE,
        f3: &INVALID,
        f2: &CRC32_EV,
    };
    t
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::x86::opcodes::{CodeSel, MemSel};

    #[test]
    fn test_pmovsx_needs_66() {
        let Handler::Prefixed(table) = MAP_0F38[0x20] else {
            panic!("0F3820 selects by prefix");
        };
        assert!(matches!(table[0], Handler::Invalid));
        let Handler::Op(pmovsxbw) = table[1] else {
            panic!("66 0F3820 is PMOVSXBW");
        };
        assert_eq!(pmovsxbw.code, CodeSel::Fixed(Code::Pmovsxbw_VX_WX));
        assert_eq!(pmovsxbw.mem, MemSel::Fixed(MemorySize::Packed64_Int8));
    }

    #[test]
    fn test_unassigned_opcodes() {
        assert!(matches!(MAP_0F38[0x26], Handler::Invalid));
        assert!(matches!(MAP_0F38[0xFF], Handler::Invalid));
    }

    #[test]
    fn test_movbe_and_crc32_share_f0() {
        let Handler::RepPrefixed { normal, f3, f2 } = MAP_0F38[0xF0] else {
            panic!("0F38F0 selects by F2");
        };
        let Handler::Op(movbe) = normal else {
            panic!("0F38F0 is MOVBE");
        };
        assert!(movbe.mem_only);
        assert_eq!(movbe.mem, MemSel::Sized(W_D_Q));
        assert!(matches!(f3, Handler::Invalid));
        let Handler::Op(crc32) = f2 else {
            panic!("F2 0F38F0 is CRC32");
        };
        assert_eq!(crc32.code, CodeSel::Sized([Code::Crc32_Gd_Eb, Code::Crc32_Gd_Eb, Code::Crc32_Gq_Eb]));
    }
}
