//! VEX opcode table, sorted by `(map, opcode, pp)`.

use decant_core::{Code, MemorySize};

use super::opcodes::{Op, OpcodeMap::*, Template, W_D_Q};
use super::opcodes_vec::{vex, VecLen::*, VecTemplate, WRule::*, NP, P66, PF2, PF3};

/// Every VEX-encoded instruction form.
pub static VEX_TABLE: &[VecTemplate] = &[
    // ---- 0F ----
    vex(M0F, 0x10, NP, L128, Wig, Template::new(Code::VEX_Vmovups_VX_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed128_Float32)),
    vex(M0F, 0x10, NP, L256, Wig, Template::new(Code::VEX_Vmovups_VY_WY, &[Op::VY, Op::WY]).with_mem(MemorySize::Packed256_Float32)),
    vex(M0F, 0x10, P66, L128, Wig, Template::new(Code::VEX_Vmovupd_VX_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed128_Float64)),
    vex(M0F, 0x10, P66, L256, Wig, Template::new(Code::VEX_Vmovupd_VY_WY, &[Op::VY, Op::WY]).with_mem(MemorySize::Packed256_Float64)),
    vex(M0F, 0x10, PF3, Lig, Wig, Template::new(Code::VEX_Vmovss_VX_HX_RX, &[Op::VX, Op::HX, Op::RX])),
    vex(M0F, 0x10, PF3, Lig, Wig, Template::new(Code::VEX_Vmovss_VX_M, &[Op::VX, Op::M]).with_mem(MemorySize::Float32)),
    vex(M0F, 0x10, PF2, Lig, Wig, Template::new(Code::VEX_Vmovsd_VX_HX_RX, &[Op::VX, Op::HX, Op::RX])),
    vex(M0F, 0x10, PF2, Lig, Wig, Template::new(Code::VEX_Vmovsd_VX_M, &[Op::VX, Op::M]).with_mem(MemorySize::Float64)),
    vex(M0F, 0x11, NP, L128, Wig, Template::new(Code::VEX_Vmovups_WX_VX, &[Op::WX, Op::VX]).with_mem(MemorySize::Packed128_Float32)),
    vex(M0F, 0x11, NP, L256, Wig, Template::new(Code::VEX_Vmovups_WY_VY, &[Op::WY, Op::VY]).with_mem(MemorySize::Packed256_Float32)),
    vex(M0F, 0x11, P66, L128, Wig, Template::new(Code::VEX_Vmovupd_WX_VX, &[Op::WX, Op::VX]).with_mem(MemorySize::Packed128_Float64)),
    vex(M0F, 0x11, P66, L256, Wig, Template::new(Code::VEX_Vmovupd_WY_VY, &[Op::WY, Op::VY]).with_mem(MemorySize::Packed256_Float64)),
    vex(M0F, 0x11, PF3, Lig, Wig, Template::new(Code::VEX_Vmovss_RX_HX_VX, &[Op::RX, Op::HX, Op::VX])),
    vex(M0F, 0x11, PF3, Lig, Wig, Template::new(Code::VEX_Vmovss_M_VX, &[Op::M, Op::VX]).with_mem(MemorySize::Float32)),
    vex(M0F, 0x11, PF2, Lig, Wig, Template::new(Code::VEX_Vmovsd_RX_HX_VX, &[Op::RX, Op::HX, Op::VX])),
    vex(M0F, 0x11, PF2, Lig, Wig, Template::new(Code::VEX_Vmovsd_M_VX, &[Op::M, Op::VX]).with_mem(MemorySize::Float64)),
    vex(M0F, 0x12, NP, L128, Wig, Template::new(Code::VEX_Vmovlps_VX_HX_M, &[Op::VX, Op::HX, Op::M]).with_mem(MemorySize::Packed64_Float32)),
    vex(M0F, 0x12, NP, L128, Wig, Template::new(Code::VEX_Vmovhlps_VX_HX_RX, &[Op::VX, Op::HX, Op::RX])),
    vex(M0F, 0x12, P66, L128, Wig, Template::new(Code::VEX_Vmovlpd_VX_HX_M, &[Op::VX, Op::HX, Op::M]).with_mem(MemorySize::Float64)),
    vex(M0F, 0x12, PF3, L128, Wig, Template::new(Code::VEX_Vmovsldup_VX_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed128_Float32)),
    vex(M0F, 0x12, PF3, L256, Wig, Template::new(Code::VEX_Vmovsldup_VY_WY, &[Op::VY, Op::WY]).with_mem(MemorySize::Packed256_Float32)),
    vex(M0F, 0x12, PF2, L128, Wig, Template::new(Code::VEX_Vmovddup_VX_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Float64)),
    vex(M0F, 0x12, PF2, L256, Wig, Template::new(Code::VEX_Vmovddup_VY_WY, &[Op::VY, Op::WY]).with_mem(MemorySize::Packed256_Float64)),
    vex(M0F, 0x13, NP, L128, Wig, Template::new(Code::VEX_Vmovlps_M_VX, &[Op::M, Op::VX]).with_mem(MemorySize::Packed64_Float32)),
    vex(M0F, 0x13, P66, L128, Wig, Template::new(Code::VEX_Vmovlpd_M_VX, &[Op::M, Op::VX]).with_mem(MemorySize::Float64)),
    vex(M0F, 0x14, NP, L128, Wig, Template::new(Code::VEX_Vunpcklps_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float32)),
    vex(M0F, 0x14, NP, L256, Wig, Template::new(Code::VEX_Vunpcklps_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float32)),
    vex(M0F, 0x14, P66, L128, Wig, Template::new(Code::VEX_Vunpcklpd_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float64)),
    vex(M0F, 0x14, P66, L256, Wig, Template::new(Code::VEX_Vunpcklpd_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float64)),
    vex(M0F, 0x28, NP, L128, Wig, Template::new(Code::VEX_Vmovaps_VX_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed128_Float32)),
    vex(M0F, 0x28, NP, L256, Wig, Template::new(Code::VEX_Vmovaps_VY_WY, &[Op::VY, Op::WY]).with_mem(MemorySize::Packed256_Float32)),
    vex(M0F, 0x28, P66, L128, Wig, Template::new(Code::VEX_Vmovapd_VX_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed128_Float64)),
    vex(M0F, 0x28, P66, L256, Wig, Template::new(Code::VEX_Vmovapd_VY_WY, &[Op::VY, Op::WY]).with_mem(MemorySize::Packed256_Float64)),
    vex(M0F, 0x29, NP, L128, Wig, Template::new(Code::VEX_Vmovaps_WX_VX, &[Op::WX, Op::VX]).with_mem(MemorySize::Packed128_Float32)),
    vex(M0F, 0x29, NP, L256, Wig, Template::new(Code::VEX_Vmovaps_WY_VY, &[Op::WY, Op::VY]).with_mem(MemorySize::Packed256_Float32)),
    vex(M0F, 0x29, P66, L128, Wig, Template::new(Code::VEX_Vmovapd_WX_VX, &[Op::WX, Op::VX]).with_mem(MemorySize::Packed128_Float64)),
    vex(M0F, 0x29, P66, L256, Wig, Template::new(Code::VEX_Vmovapd_WY_VY, &[Op::WY, Op::VY]).with_mem(MemorySize::Packed256_Float64)),
    vex(M0F, 0x2A, PF3, Lig, Wig, Template::sized([Code::VEX_Vcvtsi2ss_VX_HX_Ed, Code::VEX_Vcvtsi2ss_VX_HX_Ed, Code::VEX_Vcvtsi2ss_VX_HX_Eq], &[Op::VX, Op::HX, Op::Ey]).with_mem_sized([MemorySize::Int32, MemorySize::Int32, MemorySize::Int64])),
    vex(M0F, 0x2A, PF2, Lig, Wig, Template::sized([Code::VEX_Vcvtsi2sd_VX_HX_Ed, Code::VEX_Vcvtsi2sd_VX_HX_Ed, Code::VEX_Vcvtsi2sd_VX_HX_Eq], &[Op::VX, Op::HX, Op::Ey]).with_mem_sized([MemorySize::Int32, MemorySize::Int32, MemorySize::Int64])),
    vex(M0F, 0x2C, PF3, Lig, Wig, Template::sized([Code::VEX_Vcvttss2si_Gd_WX, Code::VEX_Vcvttss2si_Gd_WX, Code::VEX_Vcvttss2si_Gq_WX], &[Op::Gy, Op::WX]).with_mem(MemorySize::Float32)),
    vex(M0F, 0x2C, PF2, Lig, Wig, Template::sized([Code::VEX_Vcvttsd2si_Gd_WX, Code::VEX_Vcvttsd2si_Gd_WX, Code::VEX_Vcvttsd2si_Gq_WX], &[Op::Gy, Op::WX]).with_mem(MemorySize::Float64)),
    vex(M0F, 0x2D, PF3, Lig, Wig, Template::sized([Code::VEX_Vcvtss2si_Gd_WX, Code::VEX_Vcvtss2si_Gd_WX, Code::VEX_Vcvtss2si_Gq_WX], &[Op::Gy, Op::WX]).with_mem(MemorySize::Float32)),
    vex(M0F, 0x2D, PF2, Lig, Wig, Template::sized([Code::VEX_Vcvtsd2si_Gd_WX, Code::VEX_Vcvtsd2si_Gd_WX, Code::VEX_Vcvtsd2si_Gq_WX], &[Op::Gy, Op::WX]).with_mem(MemorySize::Float64)),
    vex(M0F, 0x2E, NP, Lig, Wig, Template::new(Code::VEX_Vucomiss_VX_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Float32)),
    vex(M0F, 0x2E, P66, Lig, Wig, Template::new(Code::VEX_Vucomisd_VX_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Float64)),
    vex(M0F, 0x2F, NP, Lig, Wig, Template::new(Code::VEX_Vcomiss_VX_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Float32)),
    vex(M0F, 0x2F, P66, Lig, Wig, Template::new(Code::VEX_Vcomisd_VX_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Float64)),
    vex(M0F, 0x41, NP, L256, W0, Template::new(Code::VEX_Kandw_VK_HK_RK, &[Op::VK, Op::HK, Op::RK])),
    vex(M0F, 0x41, NP, L256, W1, Template::new(Code::VEX_Kandq_VK_HK_RK, &[Op::VK, Op::HK, Op::RK])),
    vex(M0F, 0x41, P66, L256, W0, Template::new(Code::VEX_Kandb_VK_HK_RK, &[Op::VK, Op::HK, Op::RK])),
    vex(M0F, 0x41, P66, L256, W1, Template::new(Code::VEX_Kandd_VK_HK_RK, &[Op::VK, Op::HK, Op::RK])),
    vex(M0F, 0x42, NP, L256, W0, Template::new(Code::VEX_Kandnw_VK_HK_RK, &[Op::VK, Op::HK, Op::RK])),
    vex(M0F, 0x42, NP, L256, W1, Template::new(Code::VEX_Kandnq_VK_HK_RK, &[Op::VK, Op::HK, Op::RK])),
    vex(M0F, 0x42, P66, L256, W0, Template::new(Code::VEX_Kandnb_VK_HK_RK, &[Op::VK, Op::HK, Op::RK])),
    vex(M0F, 0x42, P66, L256, W1, Template::new(Code::VEX_Kandnd_VK_HK_RK, &[Op::VK, Op::HK, Op::RK])),
    vex(M0F, 0x44, NP, L128, W0, Template::new(Code::VEX_Knotw_VK_RK, &[Op::VK, Op::RK])),
    vex(M0F, 0x44, NP, L128, W1, Template::new(Code::VEX_Knotq_VK_RK, &[Op::VK, Op::RK])),
    vex(M0F, 0x44, P66, L128, W0, Template::new(Code::VEX_Knotb_VK_RK, &[Op::VK, Op::RK])),
    vex(M0F, 0x44, P66, L128, W1, Template::new(Code::VEX_Knotd_VK_RK, &[Op::VK, Op::RK])),
    vex(M0F, 0x45, NP, L256, W0, Template::new(Code::VEX_Korw_VK_HK_RK, &[Op::VK, Op::HK, Op::RK])),
    vex(M0F, 0x45, NP, L256, W1, Template::new(Code::VEX_Korq_VK_HK_RK, &[Op::VK, Op::HK, Op::RK])),
    vex(M0F, 0x45, P66, L256, W0, Template::new(Code::VEX_Korb_VK_HK_RK, &[Op::VK, Op::HK, Op::RK])),
    vex(M0F, 0x45, P66, L256, W1, Template::new(Code::VEX_Kord_VK_HK_RK, &[Op::VK, Op::HK, Op::RK])),
    vex(M0F, 0x46, NP, L256, W0, Template::new(Code::VEX_Kxnorw_VK_HK_RK, &[Op::VK, Op::HK, Op::RK])),
    vex(M0F, 0x46, NP, L256, W1, Template::new(Code::VEX_Kxnorq_VK_HK_RK, &[Op::VK, Op::HK, Op::RK])),
    vex(M0F, 0x46, P66, L256, W0, Template::new(Code::VEX_Kxnorb_VK_HK_RK, &[Op::VK, Op::HK, Op::RK])),
    vex(M0F, 0x46, P66, L256, W1, Template::new(Code::VEX_Kxnord_VK_HK_RK, &[Op::VK, Op::HK, Op::RK])),
    vex(M0F, 0x47, NP, L256, W0, Template::new(Code::VEX_Kxorw_VK_HK_RK, &[Op::VK, Op::HK, Op::RK])),
    vex(M0F, 0x47, NP, L256, W1, Template::new(Code::VEX_Kxorq_VK_HK_RK, &[Op::VK, Op::HK, Op::RK])),
    vex(M0F, 0x47, P66, L256, W0, Template::new(Code::VEX_Kxorb_VK_HK_RK, &[Op::VK, Op::HK, Op::RK])),
    vex(M0F, 0x47, P66, L256, W1, Template::new(Code::VEX_Kxord_VK_HK_RK, &[Op::VK, Op::HK, Op::RK])),
    vex(M0F, 0x4A, NP, L256, W0, Template::new(Code::VEX_Kaddw_VK_HK_RK, &[Op::VK, Op::HK, Op::RK])),
    vex(M0F, 0x4A, NP, L256, W1, Template::new(Code::VEX_Kaddq_VK_HK_RK, &[Op::VK, Op::HK, Op::RK])),
    vex(M0F, 0x4A, P66, L256, W0, Template::new(Code::VEX_Kaddb_VK_HK_RK, &[Op::VK, Op::HK, Op::RK])),
    vex(M0F, 0x4A, P66, L256, W1, Template::new(Code::VEX_Kaddd_VK_HK_RK, &[Op::VK, Op::HK, Op::RK])),
    vex(M0F, 0x4B, NP, L256, W0, Template::new(Code::VEX_Kunpckwd_VK_HK_RK, &[Op::VK, Op::HK, Op::RK])),
    vex(M0F, 0x4B, NP, L256, W1, Template::new(Code::VEX_Kunpckdq_VK_HK_RK, &[Op::VK, Op::HK, Op::RK])),
    vex(M0F, 0x4B, P66, L256, W0, Template::new(Code::VEX_Kunpckbw_VK_HK_RK, &[Op::VK, Op::HK, Op::RK])),
    vex(M0F, 0x51, NP, L128, Wig, Template::new(Code::VEX_Vsqrtps_VX_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed128_Float32)),
    vex(M0F, 0x51, NP, L256, Wig, Template::new(Code::VEX_Vsqrtps_VY_WY, &[Op::VY, Op::WY]).with_mem(MemorySize::Packed256_Float32)),
    vex(M0F, 0x51, P66, L128, Wig, Template::new(Code::VEX_Vsqrtpd_VX_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed128_Float64)),
    vex(M0F, 0x51, P66, L256, Wig, Template::new(Code::VEX_Vsqrtpd_VY_WY, &[Op::VY, Op::WY]).with_mem(MemorySize::Packed256_Float64)),
    vex(M0F, 0x51, PF3, Lig, Wig, Template::new(Code::VEX_Vsqrtss_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Float32)),
    vex(M0F, 0x51, PF2, Lig, Wig, Template::new(Code::VEX_Vsqrtsd_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Float64)),
    vex(M0F, 0x54, NP, L128, Wig, Template::new(Code::VEX_Vandps_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float32)),
    vex(M0F, 0x54, NP, L256, Wig, Template::new(Code::VEX_Vandps_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float32)),
    vex(M0F, 0x54, P66, L128, Wig, Template::new(Code::VEX_Vandpd_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float64)),
    vex(M0F, 0x54, P66, L256, Wig, Template::new(Code::VEX_Vandpd_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float64)),
    vex(M0F, 0x55, NP, L128, Wig, Template::new(Code::VEX_Vandnps_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float32)),
    vex(M0F, 0x55, NP, L256, Wig, Template::new(Code::VEX_Vandnps_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float32)),
    vex(M0F, 0x55, P66, L128, Wig, Template::new(Code::VEX_Vandnpd_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float64)),
    vex(M0F, 0x55, P66, L256, Wig, Template::new(Code::VEX_Vandnpd_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float64)),
    vex(M0F, 0x56, NP, L128, Wig, Template::new(Code::VEX_Vorps_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float32)),
    vex(M0F, 0x56, NP, L256, Wig, Template::new(Code::VEX_Vorps_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float32)),
    vex(M0F, 0x56, P66, L128, Wig, Template::new(Code::VEX_Vorpd_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float64)),
    vex(M0F, 0x56, P66, L256, Wig, Template::new(Code::VEX_Vorpd_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float64)),
    vex(M0F, 0x57, NP, L128, Wig, Template::new(Code::VEX_Vxorps_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float32)),
    vex(M0F, 0x57, NP, L256, Wig, Template::new(Code::VEX_Vxorps_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float32)),
    vex(M0F, 0x57, P66, L128, Wig, Template::new(Code::VEX_Vxorpd_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float64)),
    vex(M0F, 0x57, P66, L256, Wig, Template::new(Code::VEX_Vxorpd_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float64)),
    vex(M0F, 0x58, NP, L128, Wig, Template::new(Code::VEX_Vaddps_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float32)),
    vex(M0F, 0x58, NP, L256, Wig, Template::new(Code::VEX_Vaddps_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float32)),
    vex(M0F, 0x58, P66, L128, Wig, Template::new(Code::VEX_Vaddpd_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float64)),
    vex(M0F, 0x58, P66, L256, Wig, Template::new(Code::VEX_Vaddpd_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float64)),
    vex(M0F, 0x58, PF3, Lig, Wig, Template::new(Code::VEX_Vaddss_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Float32)),
    vex(M0F, 0x58, PF2, Lig, Wig, Template::new(Code::VEX_Vaddsd_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Float64)),
    vex(M0F, 0x59, NP, L128, Wig, Template::new(Code::VEX_Vmulps_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float32)),
    vex(M0F, 0x59, NP, L256, Wig, Template::new(Code::VEX_Vmulps_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float32)),
    vex(M0F, 0x59, P66, L128, Wig, Template::new(Code::VEX_Vmulpd_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float64)),
    vex(M0F, 0x59, P66, L256, Wig, Template::new(Code::VEX_Vmulpd_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float64)),
    vex(M0F, 0x59, PF3, Lig, Wig, Template::new(Code::VEX_Vmulss_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Float32)),
    vex(M0F, 0x59, PF2, Lig, Wig, Template::new(Code::VEX_Vmulsd_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Float64)),
    vex(M0F, 0x5C, NP, L128, Wig, Template::new(Code::VEX_Vsubps_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float32)),
    vex(M0F, 0x5C, NP, L256, Wig, Template::new(Code::VEX_Vsubps_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float32)),
    vex(M0F, 0x5C, P66, L128, Wig, Template::new(Code::VEX_Vsubpd_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float64)),
    vex(M0F, 0x5C, P66, L256, Wig, Template::new(Code::VEX_Vsubpd_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float64)),
    vex(M0F, 0x5C, PF3, Lig, Wig, Template::new(Code::VEX_Vsubss_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Float32)),
    vex(M0F, 0x5C, PF2, Lig, Wig, Template::new(Code::VEX_Vsubsd_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Float64)),
    vex(M0F, 0x5D, NP, L128, Wig, Template::new(Code::VEX_Vminps_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float32)),
    vex(M0F, 0x5D, NP, L256, Wig, Template::new(Code::VEX_Vminps_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float32)),
    vex(M0F, 0x5D, P66, L128, Wig, Template::new(Code::VEX_Vminpd_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float64)),
    vex(M0F, 0x5D, P66, L256, Wig, Template::new(Code::VEX_Vminpd_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float64)),
    vex(M0F, 0x5D, PF3, Lig, Wig, Template::new(Code::VEX_Vminss_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Float32)),
    vex(M0F, 0x5D, PF2, Lig, Wig, Template::new(Code::VEX_Vminsd_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Float64)),
    vex(M0F, 0x5E, NP, L128, Wig, Template::new(Code::VEX_Vdivps_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float32)),
    vex(M0F, 0x5E, NP, L256, Wig, Template::new(Code::VEX_Vdivps_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float32)),
    vex(M0F, 0x5E, P66, L128, Wig, Template::new(Code::VEX_Vdivpd_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float64)),
    vex(M0F, 0x5E, P66, L256, Wig, Template::new(Code::VEX_Vdivpd_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float64)),
    vex(M0F, 0x5E, PF3, Lig, Wig, Template::new(Code::VEX_Vdivss_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Float32)),
    vex(M0F, 0x5E, PF2, Lig, Wig, Template::new(Code::VEX_Vdivsd_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Float64)),
    vex(M0F, 0x5F, NP, L128, Wig, Template::new(Code::VEX_Vmaxps_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float32)),
    vex(M0F, 0x5F, NP, L256, Wig, Template::new(Code::VEX_Vmaxps_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float32)),
    vex(M0F, 0x5F, P66, L128, Wig, Template::new(Code::VEX_Vmaxpd_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float64)),
    vex(M0F, 0x5F, P66, L256, Wig, Template::new(Code::VEX_Vmaxpd_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float64)),
    vex(M0F, 0x5F, PF3, Lig, Wig, Template::new(Code::VEX_Vmaxss_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Float32)),
    vex(M0F, 0x5F, PF2, Lig, Wig, Template::new(Code::VEX_Vmaxsd_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Float64)),
    vex(M0F, 0x60, P66, L128, Wig, Template::new(Code::VEX_Vpunpcklbw_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_UInt8)),
    vex(M0F, 0x60, P66, L256, Wig, Template::new(Code::VEX_Vpunpcklbw_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_UInt8)),
    vex(M0F, 0x61, P66, L128, Wig, Template::new(Code::VEX_Vpunpcklwd_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_UInt16)),
    vex(M0F, 0x61, P66, L256, Wig, Template::new(Code::VEX_Vpunpcklwd_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_UInt16)),
    vex(M0F, 0x62, P66, L128, Wig, Template::new(Code::VEX_Vpunpckldq_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_UInt32)),
    vex(M0F, 0x62, P66, L256, Wig, Template::new(Code::VEX_Vpunpckldq_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_UInt32)),
    vex(M0F, 0x63, P66, L128, Wig, Template::new(Code::VEX_Vpacksswb_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Int16)),
    vex(M0F, 0x63, P66, L256, Wig, Template::new(Code::VEX_Vpacksswb_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Int16)),
    vex(M0F, 0x64, P66, L128, Wig, Template::new(Code::VEX_Vpcmpgtb_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Int8)),
    vex(M0F, 0x64, P66, L256, Wig, Template::new(Code::VEX_Vpcmpgtb_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Int8)),
    vex(M0F, 0x65, P66, L128, Wig, Template::new(Code::VEX_Vpcmpgtw_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Int16)),
    vex(M0F, 0x65, P66, L256, Wig, Template::new(Code::VEX_Vpcmpgtw_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Int16)),
    vex(M0F, 0x66, P66, L128, Wig, Template::new(Code::VEX_Vpcmpgtd_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Int32)),
    vex(M0F, 0x66, P66, L256, Wig, Template::new(Code::VEX_Vpcmpgtd_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Int32)),
    vex(M0F, 0x67, P66, L128, Wig, Template::new(Code::VEX_Vpackuswb_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Int16)),
    vex(M0F, 0x67, P66, L256, Wig, Template::new(Code::VEX_Vpackuswb_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Int16)),
    vex(M0F, 0x68, P66, L128, Wig, Template::new(Code::VEX_Vpunpckhbw_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_UInt8)),
    vex(M0F, 0x68, P66, L256, Wig, Template::new(Code::VEX_Vpunpckhbw_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_UInt8)),
    vex(M0F, 0x69, P66, L128, Wig, Template::new(Code::VEX_Vpunpckhwd_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_UInt16)),
    vex(M0F, 0x69, P66, L256, Wig, Template::new(Code::VEX_Vpunpckhwd_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_UInt16)),
    vex(M0F, 0x6A, P66, L128, Wig, Template::new(Code::VEX_Vpunpckhdq_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_UInt32)),
    vex(M0F, 0x6A, P66, L256, Wig, Template::new(Code::VEX_Vpunpckhdq_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_UInt32)),
    vex(M0F, 0x6B, P66, L128, Wig, Template::new(Code::VEX_Vpackssdw_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Int32)),
    vex(M0F, 0x6B, P66, L256, Wig, Template::new(Code::VEX_Vpackssdw_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Int32)),
    vex(M0F, 0x6C, P66, L128, Wig, Template::new(Code::VEX_Vpunpcklqdq_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_UInt64)),
    vex(M0F, 0x6C, P66, L256, Wig, Template::new(Code::VEX_Vpunpcklqdq_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_UInt64)),
    vex(M0F, 0x6D, P66, L128, Wig, Template::new(Code::VEX_Vpunpckhqdq_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_UInt64)),
    vex(M0F, 0x6D, P66, L256, Wig, Template::new(Code::VEX_Vpunpckhqdq_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_UInt64)),
    vex(M0F, 0x6E, P66, L128, Wig, Template::sized([Code::VEX_Vmovd_VX_Ed, Code::VEX_Vmovd_VX_Ed, Code::VEX_Vmovq_VX_Eq], &[Op::VX, Op::Ey]).with_mem_sized(W_D_Q)),
    vex(M0F, 0x6F, P66, L128, Wig, Template::new(Code::VEX_Vmovdqa_VX_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed128_Int32)),
    vex(M0F, 0x6F, P66, L256, Wig, Template::new(Code::VEX_Vmovdqa_VY_WY, &[Op::VY, Op::WY]).with_mem(MemorySize::Packed256_Int32)),
    vex(M0F, 0x6F, PF3, L128, Wig, Template::new(Code::VEX_Vmovdqu_VX_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed128_Int32)),
    vex(M0F, 0x6F, PF3, L256, Wig, Template::new(Code::VEX_Vmovdqu_VY_WY, &[Op::VY, Op::WY]).with_mem(MemorySize::Packed256_Int32)),
    vex(M0F, 0x70, P66, L128, Wig, Template::new(Code::VEX_Vpshufd_VX_WX_Ib, &[Op::VX, Op::WX, Op::Ib]).with_mem(MemorySize::Packed128_UInt32)),
    vex(M0F, 0x70, P66, L256, Wig, Template::new(Code::VEX_Vpshufd_VY_WY_Ib, &[Op::VY, Op::WY, Op::Ib]).with_mem(MemorySize::Packed256_UInt32)),
    vex(M0F, 0x70, PF3, L128, Wig, Template::new(Code::VEX_Vpshufhw_VX_WX_Ib, &[Op::VX, Op::WX, Op::Ib]).with_mem(MemorySize::Packed128_UInt16)),
    vex(M0F, 0x70, PF3, L256, Wig, Template::new(Code::VEX_Vpshufhw_VY_WY_Ib, &[Op::VY, Op::WY, Op::Ib]).with_mem(MemorySize::Packed256_UInt16)),
    vex(M0F, 0x70, PF2, L128, Wig, Template::new(Code::VEX_Vpshuflw_VX_WX_Ib, &[Op::VX, Op::WX, Op::Ib]).with_mem(MemorySize::Packed128_UInt16)),
    vex(M0F, 0x70, PF2, L256, Wig, Template::new(Code::VEX_Vpshuflw_VY_WY_Ib, &[Op::VY, Op::WY, Op::Ib]).with_mem(MemorySize::Packed256_UInt16)),
    vex(M0F, 0x74, P66, L128, Wig, Template::new(Code::VEX_Vpcmpeqb_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Int8)),
    vex(M0F, 0x74, P66, L256, Wig, Template::new(Code::VEX_Vpcmpeqb_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Int8)),
    vex(M0F, 0x75, P66, L128, Wig, Template::new(Code::VEX_Vpcmpeqw_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Int16)),
    vex(M0F, 0x75, P66, L256, Wig, Template::new(Code::VEX_Vpcmpeqw_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Int16)),
    vex(M0F, 0x76, P66, L128, Wig, Template::new(Code::VEX_Vpcmpeqd_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Int32)),
    vex(M0F, 0x76, P66, L256, Wig, Template::new(Code::VEX_Vpcmpeqd_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Int32)),
    vex(M0F, 0x77, NP, L128, Wig, Template::new(Code::VEX_Vzeroupper, &[])),
    vex(M0F, 0x77, NP, L256, Wig, Template::new(Code::VEX_Vzeroall, &[])),
    vex(M0F, 0x7E, P66, L128, Wig, Template::sized([Code::VEX_Vmovd_Ed_VX, Code::VEX_Vmovd_Ed_VX, Code::VEX_Vmovq_Eq_VX], &[Op::Ey, Op::VX]).with_mem_sized(W_D_Q)),
    vex(M0F, 0x7E, PF3, L128, Wig, Template::new(Code::VEX_Vmovq_VX_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::UInt64)),
    vex(M0F, 0x7F, P66, L128, Wig, Template::new(Code::VEX_Vmovdqa_WX_VX, &[Op::WX, Op::VX]).with_mem(MemorySize::Packed128_Int32)),
    vex(M0F, 0x7F, P66, L256, Wig, Template::new(Code::VEX_Vmovdqa_WY_VY, &[Op::WY, Op::VY]).with_mem(MemorySize::Packed256_Int32)),
    vex(M0F, 0x7F, PF3, L128, Wig, Template::new(Code::VEX_Vmovdqu_WX_VX, &[Op::WX, Op::VX]).with_mem(MemorySize::Packed128_Int32)),
    vex(M0F, 0x7F, PF3, L256, Wig, Template::new(Code::VEX_Vmovdqu_WY_VY, &[Op::WY, Op::VY]).with_mem(MemorySize::Packed256_Int32)),
    vex(M0F, 0x90, NP, L128, W0, Template::new(Code::VEX_Kmovw_VK_WK, &[Op::VK, Op::WK]).with_mem(MemorySize::UInt16)),
    vex(M0F, 0x90, NP, L128, W1, Template::new(Code::VEX_Kmovq_VK_WK, &[Op::VK, Op::WK]).with_mem(MemorySize::UInt64)),
    vex(M0F, 0x90, P66, L128, W0, Template::new(Code::VEX_Kmovb_VK_WK, &[Op::VK, Op::WK]).with_mem(MemorySize::UInt8)),
    vex(M0F, 0x90, P66, L128, W1, Template::new(Code::VEX_Kmovd_VK_WK, &[Op::VK, Op::WK]).with_mem(MemorySize::UInt32)),
    vex(M0F, 0x91, NP, L128, W0, Template::new(Code::VEX_Kmovw_MK_VK, &[Op::M, Op::VK]).with_mem(MemorySize::UInt16)),
    vex(M0F, 0x91, NP, L128, W1, Template::new(Code::VEX_Kmovq_MK_VK, &[Op::M, Op::VK]).with_mem(MemorySize::UInt64)),
    vex(M0F, 0x91, P66, L128, W0, Template::new(Code::VEX_Kmovb_MK_VK, &[Op::M, Op::VK]).with_mem(MemorySize::UInt8)),
    vex(M0F, 0x91, P66, L128, W1, Template::new(Code::VEX_Kmovd_MK_VK, &[Op::M, Op::VK]).with_mem(MemorySize::UInt32)),
    vex(M0F, 0x92, NP, L128, W0, Template::new(Code::VEX_Kmovw_VK_Rd, &[Op::VK, Op::Rd])),
    vex(M0F, 0x92, P66, L128, W0, Template::new(Code::VEX_Kmovb_VK_Rd, &[Op::VK, Op::Rd])),
    vex(M0F, 0x92, PF2, L128, Wig, Template::sized([Code::VEX_Kmovd_VK_Rd, Code::VEX_Kmovd_VK_Rd, Code::VEX_Kmovq_VK_Rq], &[Op::VK, Op::Ey]).with_reg_only()),
    vex(M0F, 0x93, NP, L128, W0, Template::new(Code::VEX_Kmovw_Gd_RK, &[Op::Gd, Op::RK])),
    vex(M0F, 0x93, P66, L128, W0, Template::new(Code::VEX_Kmovb_Gd_RK, &[Op::Gd, Op::RK])),
    vex(M0F, 0x93, PF2, L128, Wig, Template::sized([Code::VEX_Kmovd_Gd_RK, Code::VEX_Kmovd_Gd_RK, Code::VEX_Kmovq_Gq_RK], &[Op::Gy, Op::RK])),
    vex(M0F, 0x98, NP, L128, W0, Template::new(Code::VEX_Kortestw_VK_RK, &[Op::VK, Op::RK])),
    vex(M0F, 0x98, NP, L128, W1, Template::new(Code::VEX_Kortestq_VK_RK, &[Op::VK, Op::RK])),
    vex(M0F, 0x98, P66, L128, W0, Template::new(Code::VEX_Kortestb_VK_RK, &[Op::VK, Op::RK])),
    vex(M0F, 0x98, P66, L128, W1, Template::new(Code::VEX_Kortestd_VK_RK, &[Op::VK, Op::RK])),
    vex(M0F, 0x99, NP, L128, W0, Template::new(Code::VEX_Ktestw_VK_RK, &[Op::VK, Op::RK])),
    vex(M0F, 0x99, NP, L128, W1, Template::new(Code::VEX_Ktestq_VK_RK, &[Op::VK, Op::RK])),
    vex(M0F, 0x99, P66, L128, W0, Template::new(Code::VEX_Ktestb_VK_RK, &[Op::VK, Op::RK])),
    vex(M0F, 0x99, P66, L128, W1, Template::new(Code::VEX_Ktestd_VK_RK, &[Op::VK, Op::RK])),
    vex(M0F, 0xC2, NP, L128, Wig, Template::new(Code::VEX_Vcmpps_VX_HX_WX_Ib, &[Op::VX, Op::HX, Op::WX, Op::Ib]).with_mem(MemorySize::Packed128_Float32)),
    vex(M0F, 0xC2, NP, L256, Wig, Template::new(Code::VEX_Vcmpps_VY_HY_WY_Ib, &[Op::VY, Op::HY, Op::WY, Op::Ib]).with_mem(MemorySize::Packed256_Float32)),
    vex(M0F, 0xC2, P66, L128, Wig, Template::new(Code::VEX_Vcmppd_VX_HX_WX_Ib, &[Op::VX, Op::HX, Op::WX, Op::Ib]).with_mem(MemorySize::Packed128_Float64)),
    vex(M0F, 0xC2, P66, L256, Wig, Template::new(Code::VEX_Vcmppd_VY_HY_WY_Ib, &[Op::VY, Op::HY, Op::WY, Op::Ib]).with_mem(MemorySize::Packed256_Float64)),
    vex(M0F, 0xC2, PF3, Lig, Wig, Template::new(Code::VEX_Vcmpss_VX_HX_WX_Ib, &[Op::VX, Op::HX, Op::WX, Op::Ib]).with_mem(MemorySize::Float32)),
    vex(M0F, 0xC2, PF2, Lig, Wig, Template::new(Code::VEX_Vcmpsd_VX_HX_WX_Ib, &[Op::VX, Op::HX, Op::WX, Op::Ib]).with_mem(MemorySize::Float64)),
    vex(M0F, 0xC6, NP, L128, Wig, Template::new(Code::VEX_Vshufps_VX_HX_WX_Ib, &[Op::VX, Op::HX, Op::WX, Op::Ib]).with_mem(MemorySize::Packed128_Float32)),
    vex(M0F, 0xC6, NP, L256, Wig, Template::new(Code::VEX_Vshufps_VY_HY_WY_Ib, &[Op::VY, Op::HY, Op::WY, Op::Ib]).with_mem(MemorySize::Packed256_Float32)),
    vex(M0F, 0xC6, P66, L128, Wig, Template::new(Code::VEX_Vshufpd_VX_HX_WX_Ib, &[Op::VX, Op::HX, Op::WX, Op::Ib]).with_mem(MemorySize::Packed128_Float64)),
    vex(M0F, 0xC6, P66, L256, Wig, Template::new(Code::VEX_Vshufpd_VY_HY_WY_Ib, &[Op::VY, Op::HY, Op::WY, Op::Ib]).with_mem(MemorySize::Packed256_Float64)),
    vex(M0F, 0xD4, P66, L128, Wig, Template::new(Code::VEX_Vpaddq_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_UInt64)),
    vex(M0F, 0xD4, P66, L256, Wig, Template::new(Code::VEX_Vpaddq_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_UInt64)),
    vex(M0F, 0xD6, P66, L128, Wig, Template::new(Code::VEX_Vmovq_WX_VX, &[Op::WX, Op::VX]).with_mem(MemorySize::UInt64)),
    vex(M0F, 0xD7, P66, L128, Wig, Template::sized([Code::VEX_Vpmovmskb_Gd_RX, Code::VEX_Vpmovmskb_Gd_RX, Code::VEX_Vpmovmskb_Gq_RX], &[Op::Gy, Op::RX])),
    vex(M0F, 0xD7, P66, L256, Wig, Template::sized([Code::VEX_Vpmovmskb_Gd_RY, Code::VEX_Vpmovmskb_Gd_RY, Code::VEX_Vpmovmskb_Gq_RY], &[Op::Gy, Op::WY]).with_reg_only()),
    vex(M0F, 0xDB, P66, L128, Wig, Template::new(Code::VEX_Vpand_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_UInt64)),
    vex(M0F, 0xDB, P66, L256, Wig, Template::new(Code::VEX_Vpand_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_UInt64)),
    vex(M0F, 0xDF, P66, L128, Wig, Template::new(Code::VEX_Vpandn_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_UInt64)),
    vex(M0F, 0xDF, P66, L256, Wig, Template::new(Code::VEX_Vpandn_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_UInt64)),
    vex(M0F, 0xEF, P66, L128, Wig, Template::new(Code::VEX_Vpxor_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_UInt64)),
    vex(M0F, 0xEF, P66, L256, Wig, Template::new(Code::VEX_Vpxor_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_UInt64)),
    vex(M0F, 0xFE, P66, L128, Wig, Template::new(Code::VEX_Vpaddd_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Int32)),
    vex(M0F, 0xFE, P66, L256, Wig, Template::new(Code::VEX_Vpaddd_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Int32)),

    // ---- 0F38 ----
    vex(M0F38, 0x00, P66, L128, Wig, Template::new(Code::VEX_Vpshufb_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_UInt8)),
    vex(M0F38, 0x00, P66, L256, Wig, Template::new(Code::VEX_Vpshufb_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_UInt8)),
    vex(M0F38, 0x17, P66, L128, Wig, Template::new(Code::VEX_Vptest_VX_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::UInt128)),
    vex(M0F38, 0x17, P66, L256, Wig, Template::new(Code::VEX_Vptest_VY_WY, &[Op::VY, Op::WY]).with_mem(MemorySize::UInt256)),
    vex(M0F38, 0x18, P66, L128, W0, Template::new(Code::VEX_Vbroadcastss_VX_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Float32)),
    vex(M0F38, 0x18, P66, L256, W0, Template::new(Code::VEX_Vbroadcastss_VY_WX, &[Op::VY, Op::WX]).with_mem(MemorySize::Float32)),
    vex(M0F38, 0x20, P66, L128, Wig, Template::new(Code::VEX_Vpmovsxbw_VX_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed64_Int8)),
    vex(M0F38, 0x20, P66, L256, Wig, Template::new(Code::VEX_Vpmovsxbw_VY_WX, &[Op::VY, Op::WX]).with_mem(MemorySize::Packed128_Int8)),
    vex(M0F38, 0x21, P66, L128, Wig, Template::new(Code::VEX_Vpmovsxbd_VX_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed32_Int8)),
    vex(M0F38, 0x21, P66, L256, Wig, Template::new(Code::VEX_Vpmovsxbd_VY_WX, &[Op::VY, Op::WX]).with_mem(MemorySize::Packed64_Int8)),
    vex(M0F38, 0x22, P66, L128, Wig, Template::new(Code::VEX_Vpmovsxbq_VX_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed16_Int8)),
    vex(M0F38, 0x22, P66, L256, Wig, Template::new(Code::VEX_Vpmovsxbq_VY_WX, &[Op::VY, Op::WX]).with_mem(MemorySize::Packed32_Int8)),
    vex(M0F38, 0x23, P66, L128, Wig, Template::new(Code::VEX_Vpmovsxwd_VX_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed64_Int16)),
    vex(M0F38, 0x23, P66, L256, Wig, Template::new(Code::VEX_Vpmovsxwd_VY_WX, &[Op::VY, Op::WX]).with_mem(MemorySize::Packed128_Int16)),
    vex(M0F38, 0x24, P66, L128, Wig, Template::new(Code::VEX_Vpmovsxwq_VX_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed32_Int16)),
    vex(M0F38, 0x24, P66, L256, Wig, Template::new(Code::VEX_Vpmovsxwq_VY_WX, &[Op::VY, Op::WX]).with_mem(MemorySize::Packed64_Int16)),
    vex(M0F38, 0x25, P66, L128, Wig, Template::new(Code::VEX_Vpmovsxdq_VX_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed64_Int32)),
    vex(M0F38, 0x25, P66, L256, Wig, Template::new(Code::VEX_Vpmovsxdq_VY_WX, &[Op::VY, Op::WX]).with_mem(MemorySize::Packed128_Int32)),
    vex(M0F38, 0x28, P66, L128, Wig, Template::new(Code::VEX_Vpmuldq_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Int32)),
    vex(M0F38, 0x28, P66, L256, Wig, Template::new(Code::VEX_Vpmuldq_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Int32)),
    vex(M0F38, 0x30, P66, L128, Wig, Template::new(Code::VEX_Vpmovzxbw_VX_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed64_UInt8)),
    vex(M0F38, 0x30, P66, L256, Wig, Template::new(Code::VEX_Vpmovzxbw_VY_WX, &[Op::VY, Op::WX]).with_mem(MemorySize::Packed128_UInt8)),
    vex(M0F38, 0x31, P66, L128, Wig, Template::new(Code::VEX_Vpmovzxbd_VX_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed32_UInt8)),
    vex(M0F38, 0x31, P66, L256, Wig, Template::new(Code::VEX_Vpmovzxbd_VY_WX, &[Op::VY, Op::WX]).with_mem(MemorySize::Packed64_UInt8)),
    vex(M0F38, 0x32, P66, L128, Wig, Template::new(Code::VEX_Vpmovzxbq_VX_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed16_UInt8)),
    vex(M0F38, 0x32, P66, L256, Wig, Template::new(Code::VEX_Vpmovzxbq_VY_WX, &[Op::VY, Op::WX]).with_mem(MemorySize::Packed32_UInt8)),
    vex(M0F38, 0x33, P66, L128, Wig, Template::new(Code::VEX_Vpmovzxwd_VX_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed64_UInt16)),
    vex(M0F38, 0x33, P66, L256, Wig, Template::new(Code::VEX_Vpmovzxwd_VY_WX, &[Op::VY, Op::WX]).with_mem(MemorySize::Packed128_UInt16)),
    vex(M0F38, 0x34, P66, L128, Wig, Template::new(Code::VEX_Vpmovzxwq_VX_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed32_UInt16)),
    vex(M0F38, 0x34, P66, L256, Wig, Template::new(Code::VEX_Vpmovzxwq_VY_WX, &[Op::VY, Op::WX]).with_mem(MemorySize::Packed64_UInt16)),
    vex(M0F38, 0x35, P66, L128, Wig, Template::new(Code::VEX_Vpmovzxdq_VX_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed64_UInt32)),
    vex(M0F38, 0x35, P66, L256, Wig, Template::new(Code::VEX_Vpmovzxdq_VY_WX, &[Op::VY, Op::WX]).with_mem(MemorySize::Packed128_UInt32)),
    vex(M0F38, 0x36, P66, L256, W0, Template::new(Code::VEX_Vpermd_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Int32)),
    vex(M0F38, 0x58, P66, L128, W0, Template::new(Code::VEX_Vpbroadcastd_VX_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::UInt32)),
    vex(M0F38, 0x58, P66, L256, W0, Template::new(Code::VEX_Vpbroadcastd_VY_WX, &[Op::VY, Op::WX]).with_mem(MemorySize::UInt32)),
    vex(M0F38, 0x59, P66, L128, W0, Template::new(Code::VEX_Vpbroadcastq_VX_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::UInt64)),
    vex(M0F38, 0x59, P66, L256, W0, Template::new(Code::VEX_Vpbroadcastq_VY_WX, &[Op::VY, Op::WX]).with_mem(MemorySize::UInt64)),
    vex(M0F38, 0x78, P66, L128, W0, Template::new(Code::VEX_Vpbroadcastb_VX_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::UInt8)),
    vex(M0F38, 0x78, P66, L256, W0, Template::new(Code::VEX_Vpbroadcastb_VY_WX, &[Op::VY, Op::WX]).with_mem(MemorySize::UInt8)),
    vex(M0F38, 0x79, P66, L128, W0, Template::new(Code::VEX_Vpbroadcastw_VX_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::UInt16)),
    vex(M0F38, 0x79, P66, L256, W0, Template::new(Code::VEX_Vpbroadcastw_VY_WX, &[Op::VY, Op::WX]).with_mem(MemorySize::UInt16)),
    vex(M0F38, 0x90, P66, L128, W0, Template::new(Code::VEX_Vpgatherdd_VX_Vm32x_HX, &[Op::VX, Op::VsibX, Op::HX]).with_mem(MemorySize::Int32)),
    vex(M0F38, 0x90, P66, L256, W0, Template::new(Code::VEX_Vpgatherdd_VY_Vm32y_HY, &[Op::VY, Op::VsibY, Op::HY]).with_mem(MemorySize::Int32)),
    vex(M0F38, 0x90, P66, L128, W1, Template::new(Code::VEX_Vpgatherdq_VX_Vm32x_HX, &[Op::VX, Op::VsibX, Op::HX]).with_mem(MemorySize::Int64)),
    vex(M0F38, 0x90, P66, L256, W1, Template::new(Code::VEX_Vpgatherdq_VY_Vm32x_HY, &[Op::VY, Op::VsibX, Op::HY]).with_mem(MemorySize::Int64)),
    vex(M0F38, 0x91, P66, L128, W0, Template::new(Code::VEX_Vpgatherqd_VX_Vm64x_HX, &[Op::VX, Op::VsibX, Op::HX]).with_mem(MemorySize::Int32)),
    vex(M0F38, 0x91, P66, L256, W0, Template::new(Code::VEX_Vpgatherqd_VX_Vm64y_HX, &[Op::VX, Op::VsibY, Op::HX]).with_mem(MemorySize::Int32)),
    vex(M0F38, 0x91, P66, L128, W1, Template::new(Code::VEX_Vpgatherqq_VX_Vm64x_HX, &[Op::VX, Op::VsibX, Op::HX]).with_mem(MemorySize::Int64)),
    vex(M0F38, 0x91, P66, L256, W1, Template::new(Code::VEX_Vpgatherqq_VY_Vm64y_HY, &[Op::VY, Op::VsibY, Op::HY]).with_mem(MemorySize::Int64)),
    vex(M0F38, 0x92, P66, L128, W0, Template::new(Code::VEX_Vgatherdps_VX_Vm32x_HX, &[Op::VX, Op::VsibX, Op::HX]).with_mem(MemorySize::Float32)),
    vex(M0F38, 0x92, P66, L256, W0, Template::new(Code::VEX_Vgatherdps_VY_Vm32y_HY, &[Op::VY, Op::VsibY, Op::HY]).with_mem(MemorySize::Float32)),
    vex(M0F38, 0x92, P66, L128, W1, Template::new(Code::VEX_Vgatherdpd_VX_Vm32x_HX, &[Op::VX, Op::VsibX, Op::HX]).with_mem(MemorySize::Float64)),
    vex(M0F38, 0x92, P66, L256, W1, Template::new(Code::VEX_Vgatherdpd_VY_Vm32x_HY, &[Op::VY, Op::VsibX, Op::HY]).with_mem(MemorySize::Float64)),
    vex(M0F38, 0x93, P66, L128, W0, Template::new(Code::VEX_Vgatherqps_VX_Vm64x_HX, &[Op::VX, Op::VsibX, Op::HX]).with_mem(MemorySize::Float32)),
    vex(M0F38, 0x93, P66, L256, W0, Template::new(Code::VEX_Vgatherqps_VX_Vm64y_HX, &[Op::VX, Op::VsibY, Op::HX]).with_mem(MemorySize::Float32)),
    vex(M0F38, 0x93, P66, L128, W1, Template::new(Code::VEX_Vgatherqpd_VX_Vm64x_HX, &[Op::VX, Op::VsibX, Op::HX]).with_mem(MemorySize::Float64)),
    vex(M0F38, 0x93, P66, L256, W1, Template::new(Code::VEX_Vgatherqpd_VY_Vm64y_HY, &[Op::VY, Op::VsibY, Op::HY]).with_mem(MemorySize::Float64)),
    vex(M0F38, 0x98, P66, L128, W0, Template::new(Code::VEX_Vfmadd132ps_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float32)),
    vex(M0F38, 0x98, P66, L256, W0, Template::new(Code::VEX_Vfmadd132ps_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float32)),
    vex(M0F38, 0x98, P66, L128, W1, Template::new(Code::VEX_Vfmadd132pd_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float64)),
    vex(M0F38, 0x98, P66, L256, W1, Template::new(Code::VEX_Vfmadd132pd_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float64)),
    vex(M0F38, 0x99, P66, Lig, W0, Template::new(Code::VEX_Vfmadd132ss_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Float32)),
    vex(M0F38, 0x99, P66, Lig, W1, Template::new(Code::VEX_Vfmadd132sd_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Float64)),
    vex(M0F38, 0xA8, P66, L128, W0, Template::new(Code::VEX_Vfmadd213ps_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float32)),
    vex(M0F38, 0xA8, P66, L256, W0, Template::new(Code::VEX_Vfmadd213ps_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float32)),
    vex(M0F38, 0xA8, P66, L128, W1, Template::new(Code::VEX_Vfmadd213pd_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float64)),
    vex(M0F38, 0xA8, P66, L256, W1, Template::new(Code::VEX_Vfmadd213pd_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float64)),
    vex(M0F38, 0xA9, P66, Lig, W0, Template::new(Code::VEX_Vfmadd213ss_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Float32)),
    vex(M0F38, 0xA9, P66, Lig, W1, Template::new(Code::VEX_Vfmadd213sd_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Float64)),
    vex(M0F38, 0xB8, P66, L128, W0, Template::new(Code::VEX_Vfmadd231ps_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float32)),
    vex(M0F38, 0xB8, P66, L256, W0, Template::new(Code::VEX_Vfmadd231ps_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float32)),
    vex(M0F38, 0xB8, P66, L128, W1, Template::new(Code::VEX_Vfmadd231pd_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float64)),
    vex(M0F38, 0xB8, P66, L256, W1, Template::new(Code::VEX_Vfmadd231pd_VY_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float64)),
    vex(M0F38, 0xB9, P66, Lig, W0, Template::new(Code::VEX_Vfmadd231ss_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Float32)),
    vex(M0F38, 0xB9, P66, Lig, W1, Template::new(Code::VEX_Vfmadd231sd_VX_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Float64)),
    vex(M0F38, 0xF2, NP, L128, Wig, Template::sized([Code::VEX_Andn_Gd_Hd_Ed, Code::VEX_Andn_Gd_Hd_Ed, Code::VEX_Andn_Gq_Hq_Eq], &[Op::Gy, Op::Hy, Op::Ey]).with_mem_sized(W_D_Q)),
    vex(M0F38, 0xF7, NP, L128, Wig, Template::sized([Code::VEX_Bextr_Gd_Ed_Hd, Code::VEX_Bextr_Gd_Ed_Hd, Code::VEX_Bextr_Gq_Eq_Hq], &[Op::Gy, Op::Ey, Op::Hy]).with_mem_sized(W_D_Q)),
    vex(M0F38, 0xF7, P66, L128, Wig, Template::sized([Code::VEX_Shlx_Gd_Ed_Hd, Code::VEX_Shlx_Gd_Ed_Hd, Code::VEX_Shlx_Gq_Eq_Hq], &[Op::Gy, Op::Ey, Op::Hy]).with_mem_sized(W_D_Q)),
    vex(M0F38, 0xF7, PF3, L128, Wig, Template::sized([Code::VEX_Sarx_Gd_Ed_Hd, Code::VEX_Sarx_Gd_Ed_Hd, Code::VEX_Sarx_Gq_Eq_Hq], &[Op::Gy, Op::Ey, Op::Hy])
            .with_mem_sized([MemorySize::Int32, MemorySize::Int32, MemorySize::Int64])),
    vex(M0F38, 0xF7, PF2, L128, Wig, Template::sized([Code::VEX_Shrx_Gd_Ed_Hd, Code::VEX_Shrx_Gd_Ed_Hd, Code::VEX_Shrx_Gq_Eq_Hq], &[Op::Gy, Op::Ey, Op::Hy]).with_mem_sized(W_D_Q)),

    // ---- 0F3A ----
    vex(M0F3A, 0x00, P66, L256, W1, Template::new(Code::VEX_Vpermq_VY_WY_Ib, &[Op::VY, Op::WY, Op::Ib]).with_mem(MemorySize::Packed256_Int64)),
    vex(M0F3A, 0x0F, P66, L128, Wig, Template::new(Code::VEX_Vpalignr_VX_HX_WX_Ib, &[Op::VX, Op::HX, Op::WX, Op::Ib]).with_mem(MemorySize::Packed128_Int8)),
    vex(M0F3A, 0x0F, P66, L256, Wig, Template::new(Code::VEX_Vpalignr_VY_HY_WY_Ib, &[Op::VY, Op::HY, Op::WY, Op::Ib]).with_mem(MemorySize::Packed256_Int8)),
    vex(M0F3A, 0x16, P66, L128, Wig, Template::sized([Code::VEX_Vpextrd_Ed_VX_Ib, Code::VEX_Vpextrd_Ed_VX_Ib, Code::VEX_Vpextrq_Eq_VX_Ib], &[Op::Ey, Op::VX, Op::Ib])
            .with_mem_sized([MemorySize::UInt32, MemorySize::UInt32, MemorySize::UInt64])),
    vex(M0F3A, 0x18, P66, L256, W0, Template::new(Code::VEX_Vinsertf128_VY_HY_WX_Ib, &[Op::VY, Op::HY, Op::WX, Op::Ib]).with_mem(MemorySize::Float128)),
    vex(M0F3A, 0x19, P66, L256, W0, Template::new(Code::VEX_Vextractf128_WX_VY_Ib, &[Op::WX, Op::VY, Op::Ib]).with_mem(MemorySize::Float128)),
    vex(M0F3A, 0x20, P66, L128, Wig, Template::sized([Code::VEX_Vpinsrb_VX_HX_RdMb_Ib, Code::VEX_Vpinsrb_VX_HX_RdMb_Ib, Code::VEX_Vpinsrb_VX_HX_RqMb_Ib], &[Op::VX, Op::HX, Op::Ey, Op::Ib]).with_mem(MemorySize::UInt8)),
];
