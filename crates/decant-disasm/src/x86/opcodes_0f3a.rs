//! Three-byte opcode map `0F 3A xx` (legacy encodings).

use decant_core::{Code, MemorySize};

use super::opcodes::{Handler, Op, Template};

static P_0F: [Handler; 4] = [
    Template::new(Code::Palignr_P_Q_Ib, &[Op::P, Op::Q, Op::Ib]).with_mem(MemorySize::Packed64_Int8).handler(),
    Template::new(Code::Palignr_VX_WX_Ib, &[Op::VX, Op::WX, Op::Ib]).with_mem(MemorySize::Packed128_Int8).handler(),
    Handler::Invalid,
    Handler::Invalid,
];

// REX.W selects the 64-bit GPR form
static P_16: [Handler; 4] = [
    Handler::Invalid,
    Template::sized([Code::Pextrd_Ed_VX_Ib, Code::Pextrd_Ed_VX_Ib, Code::Pextrq_Eq_VX_Ib], &[Op::Ey, Op::VX, Op::Ib]).handler(),
    Handler::Invalid,
    Handler::Invalid,
];

static P_20: [Handler; 4] = [
    Handler::Invalid,
    Template::sized([Code::Pinsrb_VX_RdMb_Ib, Code::Pinsrb_VX_RdMb_Ib, Code::Pinsrb_VX_RqMb_Ib], &[Op::VX, Op::Ey, Op::Ib])
        .with_mem(MemorySize::UInt8)
        .handler(),
    Handler::Invalid,
    Handler::Invalid,
];

/// `0F 3A xx` opcode map.
pub static MAP_0F3A: [Handler; 256] = {
    let mut t = [Handler::Invalid; 256];
    t[0x0F] = Handler::Prefixed(&P_0F);
    t[0x16] = Handler::Prefixed(&P_16);
    t[0x20] = Handler::Prefixed(&P_20);
    t
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapped_opcodes() {
        assert!(matches!(MAP_0F3A[0x0F], Handler::Prefixed(_)));
        assert!(matches!(MAP_0F3A[0x16], Handler::Prefixed(_)));
        assert!(matches!(MAP_0F3A[0x17], Handler::Invalid));
    }
}
