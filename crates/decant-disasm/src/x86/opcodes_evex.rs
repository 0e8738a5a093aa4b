//! EVEX opcode table, sorted by `(map, opcode, pp)`.

use decant_core::{Code, MemorySize};

use super::opcodes::{Op, OpcodeMap::*, Template, W_D_Q};
use super::opcodes_vec::{evex, VecLen::*, VecTemplate, WRule::*, NP, P66, PF2, PF3};

/// Every EVEX-encoded instruction form.
pub static EVEX_TABLE: &[VecTemplate] = &[
    // ---- 0F ----
    evex(M0F, 0x10, NP, L128, W0, Template::new(Code::EVEX_Vmovups_VX_k1z_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed128_Float32)).k1z(),
    evex(M0F, 0x10, NP, L256, W0, Template::new(Code::EVEX_Vmovups_VY_k1z_WY, &[Op::VY, Op::WY]).with_mem(MemorySize::Packed256_Float32)).k1z(),
    evex(M0F, 0x10, NP, L512, W0, Template::new(Code::EVEX_Vmovups_VZ_k1z_WZ, &[Op::VZ, Op::WZ]).with_mem(MemorySize::Packed512_Float32)).k1z(),
    evex(M0F, 0x10, P66, L128, W1, Template::new(Code::EVEX_Vmovupd_VX_k1z_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed128_Float64)).k1z(),
    evex(M0F, 0x10, P66, L256, W1, Template::new(Code::EVEX_Vmovupd_VY_k1z_WY, &[Op::VY, Op::WY]).with_mem(MemorySize::Packed256_Float64)).k1z(),
    evex(M0F, 0x10, P66, L512, W1, Template::new(Code::EVEX_Vmovupd_VZ_k1z_WZ, &[Op::VZ, Op::WZ]).with_mem(MemorySize::Packed512_Float64)).k1z(),
    evex(M0F, 0x10, PF3, Lig, W0, Template::new(Code::EVEX_Vmovss_VX_k1z_HX_RX, &[Op::VX, Op::HX, Op::RX])).k1z(),
    evex(M0F, 0x10, PF3, Lig, W0, Template::new(Code::EVEX_Vmovss_VX_k1z_M, &[Op::VX, Op::M]).with_mem(MemorySize::Float32)).k1z(),
    evex(M0F, 0x10, PF2, Lig, W1, Template::new(Code::EVEX_Vmovsd_VX_k1z_HX_RX, &[Op::VX, Op::HX, Op::RX])).k1z(),
    evex(M0F, 0x10, PF2, Lig, W1, Template::new(Code::EVEX_Vmovsd_VX_k1z_M, &[Op::VX, Op::M]).with_mem(MemorySize::Float64)).k1z(),
    evex(M0F, 0x11, NP, L128, W0, Template::new(Code::EVEX_Vmovups_WX_k1z_VX, &[Op::WX, Op::VX]).with_mem(MemorySize::Packed128_Float32)).k1z(),
    evex(M0F, 0x11, NP, L256, W0, Template::new(Code::EVEX_Vmovups_WY_k1z_VY, &[Op::WY, Op::VY]).with_mem(MemorySize::Packed256_Float32)).k1z(),
    evex(M0F, 0x11, NP, L512, W0, Template::new(Code::EVEX_Vmovups_WZ_k1z_VZ, &[Op::WZ, Op::VZ]).with_mem(MemorySize::Packed512_Float32)).k1z(),
    evex(M0F, 0x11, P66, L128, W1, Template::new(Code::EVEX_Vmovupd_WX_k1z_VX, &[Op::WX, Op::VX]).with_mem(MemorySize::Packed128_Float64)).k1z(),
    evex(M0F, 0x11, P66, L256, W1, Template::new(Code::EVEX_Vmovupd_WY_k1z_VY, &[Op::WY, Op::VY]).with_mem(MemorySize::Packed256_Float64)).k1z(),
    evex(M0F, 0x11, P66, L512, W1, Template::new(Code::EVEX_Vmovupd_WZ_k1z_VZ, &[Op::WZ, Op::VZ]).with_mem(MemorySize::Packed512_Float64)).k1z(),
    evex(M0F, 0x11, PF3, Lig, W0, Template::new(Code::EVEX_Vmovss_RX_k1z_HX_VX, &[Op::RX, Op::HX, Op::VX])).k1z(),
    evex(M0F, 0x11, PF3, Lig, W0, Template::new(Code::EVEX_Vmovss_M_k1_VX, &[Op::M, Op::VX]).with_mem(MemorySize::Float32)).k1(),
    evex(M0F, 0x11, PF2, Lig, W1, Template::new(Code::EVEX_Vmovsd_RX_k1z_HX_VX, &[Op::RX, Op::HX, Op::VX])).k1z(),
    evex(M0F, 0x11, PF2, Lig, W1, Template::new(Code::EVEX_Vmovsd_M_k1_VX, &[Op::M, Op::VX]).with_mem(MemorySize::Float64)).k1(),
    evex(M0F, 0x14, NP, L128, W0, Template::new(Code::EVEX_Vunpcklps_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float32))
        .bcst(MemorySize::Broadcast128_Float32).k1z(),
    evex(M0F, 0x14, NP, L256, W0, Template::new(Code::EVEX_Vunpcklps_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float32))
        .bcst(MemorySize::Broadcast256_Float32).k1z(),
    evex(M0F, 0x14, NP, L512, W0, Template::new(Code::EVEX_Vunpcklps_VZ_k1z_HZ_WZ_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Float32))
        .bcst(MemorySize::Broadcast512_Float32).k1z(),
    evex(M0F, 0x14, P66, L128, W1, Template::new(Code::EVEX_Vunpcklpd_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float64))
        .bcst(MemorySize::Broadcast128_Float64).k1z(),
    evex(M0F, 0x14, P66, L256, W1, Template::new(Code::EVEX_Vunpcklpd_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float64))
        .bcst(MemorySize::Broadcast256_Float64).k1z(),
    evex(M0F, 0x14, P66, L512, W1, Template::new(Code::EVEX_Vunpcklpd_VZ_k1z_HZ_WZ_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Float64))
        .bcst(MemorySize::Broadcast512_Float64).k1z(),
    evex(M0F, 0x28, NP, L128, W0, Template::new(Code::EVEX_Vmovaps_VX_k1z_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed128_Float32)).k1z(),
    evex(M0F, 0x28, NP, L256, W0, Template::new(Code::EVEX_Vmovaps_VY_k1z_WY, &[Op::VY, Op::WY]).with_mem(MemorySize::Packed256_Float32)).k1z(),
    evex(M0F, 0x28, NP, L512, W0, Template::new(Code::EVEX_Vmovaps_VZ_k1z_WZ, &[Op::VZ, Op::WZ]).with_mem(MemorySize::Packed512_Float32)).k1z(),
    evex(M0F, 0x28, P66, L128, W1, Template::new(Code::EVEX_Vmovapd_VX_k1z_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed128_Float64)).k1z(),
    evex(M0F, 0x28, P66, L256, W1, Template::new(Code::EVEX_Vmovapd_VY_k1z_WY, &[Op::VY, Op::WY]).with_mem(MemorySize::Packed256_Float64)).k1z(),
    evex(M0F, 0x28, P66, L512, W1, Template::new(Code::EVEX_Vmovapd_VZ_k1z_WZ, &[Op::VZ, Op::WZ]).with_mem(MemorySize::Packed512_Float64)).k1z(),
    evex(M0F, 0x29, NP, L128, W0, Template::new(Code::EVEX_Vmovaps_WX_k1z_VX, &[Op::WX, Op::VX]).with_mem(MemorySize::Packed128_Float32)).k1z(),
    evex(M0F, 0x29, NP, L256, W0, Template::new(Code::EVEX_Vmovaps_WY_k1z_VY, &[Op::WY, Op::VY]).with_mem(MemorySize::Packed256_Float32)).k1z(),
    evex(M0F, 0x29, NP, L512, W0, Template::new(Code::EVEX_Vmovaps_WZ_k1z_VZ, &[Op::WZ, Op::VZ]).with_mem(MemorySize::Packed512_Float32)).k1z(),
    evex(M0F, 0x29, P66, L128, W1, Template::new(Code::EVEX_Vmovapd_WX_k1z_VX, &[Op::WX, Op::VX]).with_mem(MemorySize::Packed128_Float64)).k1z(),
    evex(M0F, 0x29, P66, L256, W1, Template::new(Code::EVEX_Vmovapd_WY_k1z_VY, &[Op::WY, Op::VY]).with_mem(MemorySize::Packed256_Float64)).k1z(),
    evex(M0F, 0x29, P66, L512, W1, Template::new(Code::EVEX_Vmovapd_WZ_k1z_VZ, &[Op::WZ, Op::VZ]).with_mem(MemorySize::Packed512_Float64)).k1z(),
    evex(M0F, 0x2A, PF3, Lig, Wig, Template::sized([Code::EVEX_Vcvtsi2ss_VX_HX_Ed_er, Code::EVEX_Vcvtsi2ss_VX_HX_Ed_er, Code::EVEX_Vcvtsi2ss_VX_HX_Eq_er], &[Op::VX, Op::HX, Op::Ey]).with_mem_sized([MemorySize::Int32, MemorySize::Int32, MemorySize::Int64])).er(),
    evex(M0F, 0x2A, PF2, Lig, W0, Template::new(Code::EVEX_Vcvtsi2sd_VX_HX_Ed, &[Op::VX, Op::HX, Op::Ey]).with_mem(MemorySize::Int32)),
    evex(M0F, 0x2A, PF2, Lig, W1, Template::sized([Code::EVEX_Vcvtsi2sd_VX_HX_Ed, Code::EVEX_Vcvtsi2sd_VX_HX_Ed, Code::EVEX_Vcvtsi2sd_VX_HX_Eq_er], &[Op::VX, Op::HX, Op::Ey]).with_mem_sized([MemorySize::Int32, MemorySize::Int32, MemorySize::Int64])).er(),
    evex(M0F, 0x2C, PF3, Lig, Wig, Template::sized([Code::EVEX_Vcvttss2si_Gd_WX_sae, Code::EVEX_Vcvttss2si_Gd_WX_sae, Code::EVEX_Vcvttss2si_Gq_WX_sae], &[Op::Gy, Op::WX]).with_mem(MemorySize::Float32)).sae(),
    evex(M0F, 0x2C, PF2, Lig, Wig, Template::sized([Code::EVEX_Vcvttsd2si_Gd_WX_sae, Code::EVEX_Vcvttsd2si_Gd_WX_sae, Code::EVEX_Vcvttsd2si_Gq_WX_sae], &[Op::Gy, Op::WX]).with_mem(MemorySize::Float64)).sae(),
    evex(M0F, 0x2D, PF3, Lig, Wig, Template::sized([Code::EVEX_Vcvtss2si_Gd_WX_er, Code::EVEX_Vcvtss2si_Gd_WX_er, Code::EVEX_Vcvtss2si_Gq_WX_er], &[Op::Gy, Op::WX]).with_mem(MemorySize::Float32)).er(),
    evex(M0F, 0x2D, PF2, Lig, Wig, Template::sized([Code::EVEX_Vcvtsd2si_Gd_WX_er, Code::EVEX_Vcvtsd2si_Gd_WX_er, Code::EVEX_Vcvtsd2si_Gq_WX_er], &[Op::Gy, Op::WX]).with_mem(MemorySize::Float64)).er(),
    evex(M0F, 0x2E, NP, Lig, W0, Template::new(Code::EVEX_Vucomiss_VX_WX_sae, &[Op::VX, Op::WX]).with_mem(MemorySize::Float32)).sae(),
    evex(M0F, 0x2E, P66, Lig, W1, Template::new(Code::EVEX_Vucomisd_VX_WX_sae, &[Op::VX, Op::WX]).with_mem(MemorySize::Float64)).sae(),
    evex(M0F, 0x2F, NP, Lig, W0, Template::new(Code::EVEX_Vcomiss_VX_WX_sae, &[Op::VX, Op::WX]).with_mem(MemorySize::Float32)).sae(),
    evex(M0F, 0x2F, P66, Lig, W1, Template::new(Code::EVEX_Vcomisd_VX_WX_sae, &[Op::VX, Op::WX]).with_mem(MemorySize::Float64)).sae(),
    evex(M0F, 0x51, NP, L128, W0, Template::new(Code::EVEX_Vsqrtps_VX_k1z_WX_b, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed128_Float32))
        .bcst(MemorySize::Broadcast128_Float32).k1z(),
    evex(M0F, 0x51, NP, L256, W0, Template::new(Code::EVEX_Vsqrtps_VY_k1z_WY_b, &[Op::VY, Op::WY]).with_mem(MemorySize::Packed256_Float32))
        .bcst(MemorySize::Broadcast256_Float32).k1z(),
    evex(M0F, 0x51, NP, L512, W0, Template::new(Code::EVEX_Vsqrtps_VZ_k1z_WZ_er_b, &[Op::VZ, Op::WZ]).with_mem(MemorySize::Packed512_Float32))
        .bcst(MemorySize::Broadcast512_Float32).er().k1z(),
    evex(M0F, 0x51, P66, L128, W1, Template::new(Code::EVEX_Vsqrtpd_VX_k1z_WX_b, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed128_Float64))
        .bcst(MemorySize::Broadcast128_Float64).k1z(),
    evex(M0F, 0x51, P66, L256, W1, Template::new(Code::EVEX_Vsqrtpd_VY_k1z_WY_b, &[Op::VY, Op::WY]).with_mem(MemorySize::Packed256_Float64))
        .bcst(MemorySize::Broadcast256_Float64).k1z(),
    evex(M0F, 0x51, P66, L512, W1, Template::new(Code::EVEX_Vsqrtpd_VZ_k1z_WZ_er_b, &[Op::VZ, Op::WZ]).with_mem(MemorySize::Packed512_Float64))
        .bcst(MemorySize::Broadcast512_Float64).er().k1z(),
    evex(M0F, 0x51, PF3, Lig, W0, Template::new(Code::EVEX_Vsqrtss_VX_k1z_HX_WX_er, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Float32)).er().k1z(),
    evex(M0F, 0x51, PF2, Lig, W1, Template::new(Code::EVEX_Vsqrtsd_VX_k1z_HX_WX_er, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Float64)).er().k1z(),
    evex(M0F, 0x54, NP, L128, W0, Template::new(Code::EVEX_Vandps_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float32))
        .bcst(MemorySize::Broadcast128_Float32).k1z(),
    evex(M0F, 0x54, NP, L256, W0, Template::new(Code::EVEX_Vandps_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float32))
        .bcst(MemorySize::Broadcast256_Float32).k1z(),
    evex(M0F, 0x54, NP, L512, W0, Template::new(Code::EVEX_Vandps_VZ_k1z_HZ_WZ_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Float32))
        .bcst(MemorySize::Broadcast512_Float32).k1z(),
    evex(M0F, 0x54, P66, L128, W1, Template::new(Code::EVEX_Vandpd_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float64))
        .bcst(MemorySize::Broadcast128_Float64).k1z(),
    evex(M0F, 0x54, P66, L256, W1, Template::new(Code::EVEX_Vandpd_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float64))
        .bcst(MemorySize::Broadcast256_Float64).k1z(),
    evex(M0F, 0x54, P66, L512, W1, Template::new(Code::EVEX_Vandpd_VZ_k1z_HZ_WZ_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Float64))
        .bcst(MemorySize::Broadcast512_Float64).k1z(),
    evex(M0F, 0x55, NP, L128, W0, Template::new(Code::EVEX_Vandnps_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float32))
        .bcst(MemorySize::Broadcast128_Float32).k1z(),
    evex(M0F, 0x55, NP, L256, W0, Template::new(Code::EVEX_Vandnps_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float32))
        .bcst(MemorySize::Broadcast256_Float32).k1z(),
    evex(M0F, 0x55, NP, L512, W0, Template::new(Code::EVEX_Vandnps_VZ_k1z_HZ_WZ_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Float32))
        .bcst(MemorySize::Broadcast512_Float32).k1z(),
    evex(M0F, 0x55, P66, L128, W1, Template::new(Code::EVEX_Vandnpd_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float64))
        .bcst(MemorySize::Broadcast128_Float64).k1z(),
    evex(M0F, 0x55, P66, L256, W1, Template::new(Code::EVEX_Vandnpd_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float64))
        .bcst(MemorySize::Broadcast256_Float64).k1z(),
    evex(M0F, 0x55, P66, L512, W1, Template::new(Code::EVEX_Vandnpd_VZ_k1z_HZ_WZ_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Float64))
        .bcst(MemorySize::Broadcast512_Float64).k1z(),
    evex(M0F, 0x56, NP, L128, W0, Template::new(Code::EVEX_Vorps_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float32))
        .bcst(MemorySize::Broadcast128_Float32).k1z(),
    evex(M0F, 0x56, NP, L256, W0, Template::new(Code::EVEX_Vorps_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float32))
        .bcst(MemorySize::Broadcast256_Float32).k1z(),
    evex(M0F, 0x56, NP, L512, W0, Template::new(Code::EVEX_Vorps_VZ_k1z_HZ_WZ_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Float32))
        .bcst(MemorySize::Broadcast512_Float32).k1z(),
    evex(M0F, 0x56, P66, L128, W1, Template::new(Code::EVEX_Vorpd_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float64))
        .bcst(MemorySize::Broadcast128_Float64).k1z(),
    evex(M0F, 0x56, P66, L256, W1, Template::new(Code::EVEX_Vorpd_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float64))
        .bcst(MemorySize::Broadcast256_Float64).k1z(),
    evex(M0F, 0x56, P66, L512, W1, Template::new(Code::EVEX_Vorpd_VZ_k1z_HZ_WZ_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Float64))
        .bcst(MemorySize::Broadcast512_Float64).k1z(),
    evex(M0F, 0x57, NP, L128, W0, Template::new(Code::EVEX_Vxorps_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float32))
        .bcst(MemorySize::Broadcast128_Float32).k1z(),
    evex(M0F, 0x57, NP, L256, W0, Template::new(Code::EVEX_Vxorps_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float32))
        .bcst(MemorySize::Broadcast256_Float32).k1z(),
    evex(M0F, 0x57, NP, L512, W0, Template::new(Code::EVEX_Vxorps_VZ_k1z_HZ_WZ_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Float32))
        .bcst(MemorySize::Broadcast512_Float32).k1z(),
    evex(M0F, 0x57, P66, L128, W1, Template::new(Code::EVEX_Vxorpd_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float64))
        .bcst(MemorySize::Broadcast128_Float64).k1z(),
    evex(M0F, 0x57, P66, L256, W1, Template::new(Code::EVEX_Vxorpd_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float64))
        .bcst(MemorySize::Broadcast256_Float64).k1z(),
    evex(M0F, 0x57, P66, L512, W1, Template::new(Code::EVEX_Vxorpd_VZ_k1z_HZ_WZ_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Float64))
        .bcst(MemorySize::Broadcast512_Float64).k1z(),
    evex(M0F, 0x58, NP, L128, W0, Template::new(Code::EVEX_Vaddps_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float32))
        .bcst(MemorySize::Broadcast128_Float32).k1z(),
    evex(M0F, 0x58, NP, L256, W0, Template::new(Code::EVEX_Vaddps_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float32))
        .bcst(MemorySize::Broadcast256_Float32).k1z(),
    evex(M0F, 0x58, NP, L512, W0, Template::new(Code::EVEX_Vaddps_VZ_k1z_HZ_WZ_er_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Float32))
        .bcst(MemorySize::Broadcast512_Float32).er().k1z(),
    evex(M0F, 0x58, P66, L128, W1, Template::new(Code::EVEX_Vaddpd_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float64))
        .bcst(MemorySize::Broadcast128_Float64).k1z(),
    evex(M0F, 0x58, P66, L256, W1, Template::new(Code::EVEX_Vaddpd_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float64))
        .bcst(MemorySize::Broadcast256_Float64).k1z(),
    evex(M0F, 0x58, P66, L512, W1, Template::new(Code::EVEX_Vaddpd_VZ_k1z_HZ_WZ_er_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Float64))
        .bcst(MemorySize::Broadcast512_Float64).er().k1z(),
    evex(M0F, 0x58, PF3, Lig, W0, Template::new(Code::EVEX_Vaddss_VX_k1z_HX_WX_er, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Float32)).er().k1z(),
    evex(M0F, 0x58, PF2, Lig, W1, Template::new(Code::EVEX_Vaddsd_VX_k1z_HX_WX_er, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Float64)).er().k1z(),
    evex(M0F, 0x59, NP, L128, W0, Template::new(Code::EVEX_Vmulps_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float32))
        .bcst(MemorySize::Broadcast128_Float32).k1z(),
    evex(M0F, 0x59, NP, L256, W0, Template::new(Code::EVEX_Vmulps_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float32))
        .bcst(MemorySize::Broadcast256_Float32).k1z(),
    evex(M0F, 0x59, NP, L512, W0, Template::new(Code::EVEX_Vmulps_VZ_k1z_HZ_WZ_er_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Float32))
        .bcst(MemorySize::Broadcast512_Float32).er().k1z(),
    evex(M0F, 0x59, P66, L128, W1, Template::new(Code::EVEX_Vmulpd_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float64))
        .bcst(MemorySize::Broadcast128_Float64).k1z(),
    evex(M0F, 0x59, P66, L256, W1, Template::new(Code::EVEX_Vmulpd_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float64))
        .bcst(MemorySize::Broadcast256_Float64).k1z(),
    evex(M0F, 0x59, P66, L512, W1, Template::new(Code::EVEX_Vmulpd_VZ_k1z_HZ_WZ_er_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Float64))
        .bcst(MemorySize::Broadcast512_Float64).er().k1z(),
    evex(M0F, 0x59, PF3, Lig, W0, Template::new(Code::EVEX_Vmulss_VX_k1z_HX_WX_er, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Float32)).er().k1z(),
    evex(M0F, 0x59, PF2, Lig, W1, Template::new(Code::EVEX_Vmulsd_VX_k1z_HX_WX_er, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Float64)).er().k1z(),
    evex(M0F, 0x5C, NP, L128, W0, Template::new(Code::EVEX_Vsubps_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float32))
        .bcst(MemorySize::Broadcast128_Float32).k1z(),
    evex(M0F, 0x5C, NP, L256, W0, Template::new(Code::EVEX_Vsubps_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float32))
        .bcst(MemorySize::Broadcast256_Float32).k1z(),
    evex(M0F, 0x5C, NP, L512, W0, Template::new(Code::EVEX_Vsubps_VZ_k1z_HZ_WZ_er_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Float32))
        .bcst(MemorySize::Broadcast512_Float32).er().k1z(),
    evex(M0F, 0x5C, P66, L128, W1, Template::new(Code::EVEX_Vsubpd_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float64))
        .bcst(MemorySize::Broadcast128_Float64).k1z(),
    evex(M0F, 0x5C, P66, L256, W1, Template::new(Code::EVEX_Vsubpd_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float64))
        .bcst(MemorySize::Broadcast256_Float64).k1z(),
    evex(M0F, 0x5C, P66, L512, W1, Template::new(Code::EVEX_Vsubpd_VZ_k1z_HZ_WZ_er_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Float64))
        .bcst(MemorySize::Broadcast512_Float64).er().k1z(),
    evex(M0F, 0x5C, PF3, Lig, W0, Template::new(Code::EVEX_Vsubss_VX_k1z_HX_WX_er, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Float32)).er().k1z(),
    evex(M0F, 0x5C, PF2, Lig, W1, Template::new(Code::EVEX_Vsubsd_VX_k1z_HX_WX_er, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Float64)).er().k1z(),
    evex(M0F, 0x5D, NP, L128, W0, Template::new(Code::EVEX_Vminps_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float32))
        .bcst(MemorySize::Broadcast128_Float32).k1z(),
    evex(M0F, 0x5D, NP, L256, W0, Template::new(Code::EVEX_Vminps_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float32))
        .bcst(MemorySize::Broadcast256_Float32).k1z(),
    evex(M0F, 0x5D, NP, L512, W0, Template::new(Code::EVEX_Vminps_VZ_k1z_HZ_WZ_sae_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Float32))
        .bcst(MemorySize::Broadcast512_Float32).sae().k1z(),
    evex(M0F, 0x5D, P66, L128, W1, Template::new(Code::EVEX_Vminpd_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float64))
        .bcst(MemorySize::Broadcast128_Float64).k1z(),
    evex(M0F, 0x5D, P66, L256, W1, Template::new(Code::EVEX_Vminpd_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float64))
        .bcst(MemorySize::Broadcast256_Float64).k1z(),
    evex(M0F, 0x5D, P66, L512, W1, Template::new(Code::EVEX_Vminpd_VZ_k1z_HZ_WZ_sae_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Float64))
        .bcst(MemorySize::Broadcast512_Float64).sae().k1z(),
    evex(M0F, 0x5D, PF3, Lig, W0, Template::new(Code::EVEX_Vminss_VX_k1z_HX_WX_sae, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Float32)).sae().k1z(),
    evex(M0F, 0x5D, PF2, Lig, W1, Template::new(Code::EVEX_Vminsd_VX_k1z_HX_WX_sae, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Float64)).sae().k1z(),
    evex(M0F, 0x5E, NP, L128, W0, Template::new(Code::EVEX_Vdivps_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float32))
        .bcst(MemorySize::Broadcast128_Float32).k1z(),
    evex(M0F, 0x5E, NP, L256, W0, Template::new(Code::EVEX_Vdivps_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float32))
        .bcst(MemorySize::Broadcast256_Float32).k1z(),
    evex(M0F, 0x5E, NP, L512, W0, Template::new(Code::EVEX_Vdivps_VZ_k1z_HZ_WZ_er_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Float32))
        .bcst(MemorySize::Broadcast512_Float32).er().k1z(),
    evex(M0F, 0x5E, P66, L128, W1, Template::new(Code::EVEX_Vdivpd_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float64))
        .bcst(MemorySize::Broadcast128_Float64).k1z(),
    evex(M0F, 0x5E, P66, L256, W1, Template::new(Code::EVEX_Vdivpd_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float64))
        .bcst(MemorySize::Broadcast256_Float64).k1z(),
    evex(M0F, 0x5E, P66, L512, W1, Template::new(Code::EVEX_Vdivpd_VZ_k1z_HZ_WZ_er_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Float64))
        .bcst(MemorySize::Broadcast512_Float64).er().k1z(),
    evex(M0F, 0x5E, PF3, Lig, W0, Template::new(Code::EVEX_Vdivss_VX_k1z_HX_WX_er, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Float32)).er().k1z(),
    evex(M0F, 0x5E, PF2, Lig, W1, Template::new(Code::EVEX_Vdivsd_VX_k1z_HX_WX_er, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Float64)).er().k1z(),
    evex(M0F, 0x5F, NP, L128, W0, Template::new(Code::EVEX_Vmaxps_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float32))
        .bcst(MemorySize::Broadcast128_Float32).k1z(),
    evex(M0F, 0x5F, NP, L256, W0, Template::new(Code::EVEX_Vmaxps_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float32))
        .bcst(MemorySize::Broadcast256_Float32).k1z(),
    evex(M0F, 0x5F, NP, L512, W0, Template::new(Code::EVEX_Vmaxps_VZ_k1z_HZ_WZ_sae_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Float32))
        .bcst(MemorySize::Broadcast512_Float32).sae().k1z(),
    evex(M0F, 0x5F, P66, L128, W1, Template::new(Code::EVEX_Vmaxpd_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float64))
        .bcst(MemorySize::Broadcast128_Float64).k1z(),
    evex(M0F, 0x5F, P66, L256, W1, Template::new(Code::EVEX_Vmaxpd_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float64))
        .bcst(MemorySize::Broadcast256_Float64).k1z(),
    evex(M0F, 0x5F, P66, L512, W1, Template::new(Code::EVEX_Vmaxpd_VZ_k1z_HZ_WZ_sae_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Float64))
        .bcst(MemorySize::Broadcast512_Float64).sae().k1z(),
    evex(M0F, 0x5F, PF3, Lig, W0, Template::new(Code::EVEX_Vmaxss_VX_k1z_HX_WX_sae, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Float32)).sae().k1z(),
    evex(M0F, 0x5F, PF2, Lig, W1, Template::new(Code::EVEX_Vmaxsd_VX_k1z_HX_WX_sae, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Float64)).sae().k1z(),
    evex(M0F, 0x60, P66, L128, Wig, Template::new(Code::EVEX_Vpunpcklbw_VX_k1z_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_UInt8)).k1z(),
    evex(M0F, 0x60, P66, L256, Wig, Template::new(Code::EVEX_Vpunpcklbw_VY_k1z_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_UInt8)).k1z(),
    evex(M0F, 0x60, P66, L512, Wig, Template::new(Code::EVEX_Vpunpcklbw_VZ_k1z_HZ_WZ, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_UInt8)).k1z(),
    evex(M0F, 0x61, P66, L128, Wig, Template::new(Code::EVEX_Vpunpcklwd_VX_k1z_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_UInt16)).k1z(),
    evex(M0F, 0x61, P66, L256, Wig, Template::new(Code::EVEX_Vpunpcklwd_VY_k1z_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_UInt16)).k1z(),
    evex(M0F, 0x61, P66, L512, Wig, Template::new(Code::EVEX_Vpunpcklwd_VZ_k1z_HZ_WZ, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_UInt16)).k1z(),
    evex(M0F, 0x62, P66, L128, W0, Template::new(Code::EVEX_Vpunpckldq_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_UInt32))
        .bcst(MemorySize::Broadcast128_UInt32).k1z(),
    evex(M0F, 0x62, P66, L256, W0, Template::new(Code::EVEX_Vpunpckldq_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_UInt32))
        .bcst(MemorySize::Broadcast256_UInt32).k1z(),
    evex(M0F, 0x62, P66, L512, W0, Template::new(Code::EVEX_Vpunpckldq_VZ_k1z_HZ_WZ_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_UInt32))
        .bcst(MemorySize::Broadcast512_UInt32).k1z(),
    evex(M0F, 0x63, P66, L128, Wig, Template::new(Code::EVEX_Vpacksswb_VX_k1z_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Int16)).k1z(),
    evex(M0F, 0x63, P66, L256, Wig, Template::new(Code::EVEX_Vpacksswb_VY_k1z_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Int16)).k1z(),
    evex(M0F, 0x63, P66, L512, Wig, Template::new(Code::EVEX_Vpacksswb_VZ_k1z_HZ_WZ, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Int16)).k1z(),
    evex(M0F, 0x64, P66, L128, Wig, Template::new(Code::EVEX_Vpcmpgtb_VK_k1_HX_WX, &[Op::VK, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Int8)).k1(),
    evex(M0F, 0x64, P66, L256, Wig, Template::new(Code::EVEX_Vpcmpgtb_VK_k1_HY_WY, &[Op::VK, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Int8)).k1(),
    evex(M0F, 0x64, P66, L512, Wig, Template::new(Code::EVEX_Vpcmpgtb_VK_k1_HZ_WZ, &[Op::VK, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Int8)).k1(),
    evex(M0F, 0x65, P66, L128, Wig, Template::new(Code::EVEX_Vpcmpgtw_VK_k1_HX_WX, &[Op::VK, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Int16)).k1(),
    evex(M0F, 0x65, P66, L256, Wig, Template::new(Code::EVEX_Vpcmpgtw_VK_k1_HY_WY, &[Op::VK, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Int16)).k1(),
    evex(M0F, 0x65, P66, L512, Wig, Template::new(Code::EVEX_Vpcmpgtw_VK_k1_HZ_WZ, &[Op::VK, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Int16)).k1(),
    evex(M0F, 0x66, P66, L128, W0, Template::new(Code::EVEX_Vpcmpgtd_VK_k1_HX_WX_b, &[Op::VK, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Int32))
        .bcst(MemorySize::Broadcast128_Int32).k1(),
    evex(M0F, 0x66, P66, L256, W0, Template::new(Code::EVEX_Vpcmpgtd_VK_k1_HY_WY_b, &[Op::VK, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Int32))
        .bcst(MemorySize::Broadcast256_Int32).k1(),
    evex(M0F, 0x66, P66, L512, W0, Template::new(Code::EVEX_Vpcmpgtd_VK_k1_HZ_WZ_b, &[Op::VK, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Int32))
        .bcst(MemorySize::Broadcast512_Int32).k1(),
    evex(M0F, 0x67, P66, L128, Wig, Template::new(Code::EVEX_Vpackuswb_VX_k1z_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Int16)).k1z(),
    evex(M0F, 0x67, P66, L256, Wig, Template::new(Code::EVEX_Vpackuswb_VY_k1z_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Int16)).k1z(),
    evex(M0F, 0x67, P66, L512, Wig, Template::new(Code::EVEX_Vpackuswb_VZ_k1z_HZ_WZ, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Int16)).k1z(),
    evex(M0F, 0x68, P66, L128, Wig, Template::new(Code::EVEX_Vpunpckhbw_VX_k1z_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_UInt8)).k1z(),
    evex(M0F, 0x68, P66, L256, Wig, Template::new(Code::EVEX_Vpunpckhbw_VY_k1z_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_UInt8)).k1z(),
    evex(M0F, 0x68, P66, L512, Wig, Template::new(Code::EVEX_Vpunpckhbw_VZ_k1z_HZ_WZ, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_UInt8)).k1z(),
    evex(M0F, 0x69, P66, L128, Wig, Template::new(Code::EVEX_Vpunpckhwd_VX_k1z_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_UInt16)).k1z(),
    evex(M0F, 0x69, P66, L256, Wig, Template::new(Code::EVEX_Vpunpckhwd_VY_k1z_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_UInt16)).k1z(),
    evex(M0F, 0x69, P66, L512, Wig, Template::new(Code::EVEX_Vpunpckhwd_VZ_k1z_HZ_WZ, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_UInt16)).k1z(),
    evex(M0F, 0x6A, P66, L128, W0, Template::new(Code::EVEX_Vpunpckhdq_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_UInt32))
        .bcst(MemorySize::Broadcast128_UInt32).k1z(),
    evex(M0F, 0x6A, P66, L256, W0, Template::new(Code::EVEX_Vpunpckhdq_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_UInt32))
        .bcst(MemorySize::Broadcast256_UInt32).k1z(),
    evex(M0F, 0x6A, P66, L512, W0, Template::new(Code::EVEX_Vpunpckhdq_VZ_k1z_HZ_WZ_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_UInt32))
        .bcst(MemorySize::Broadcast512_UInt32).k1z(),
    evex(M0F, 0x6B, P66, L128, W0, Template::new(Code::EVEX_Vpackssdw_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Int32))
        .bcst(MemorySize::Broadcast128_Int32).k1z(),
    evex(M0F, 0x6B, P66, L256, W0, Template::new(Code::EVEX_Vpackssdw_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Int32))
        .bcst(MemorySize::Broadcast256_Int32).k1z(),
    evex(M0F, 0x6B, P66, L512, W0, Template::new(Code::EVEX_Vpackssdw_VZ_k1z_HZ_WZ_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Int32))
        .bcst(MemorySize::Broadcast512_Int32).k1z(),
    evex(M0F, 0x6C, P66, L128, W1, Template::new(Code::EVEX_Vpunpcklqdq_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_UInt64))
        .bcst(MemorySize::Broadcast128_UInt64).k1z(),
    evex(M0F, 0x6C, P66, L256, W1, Template::new(Code::EVEX_Vpunpcklqdq_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_UInt64))
        .bcst(MemorySize::Broadcast256_UInt64).k1z(),
    evex(M0F, 0x6C, P66, L512, W1, Template::new(Code::EVEX_Vpunpcklqdq_VZ_k1z_HZ_WZ_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_UInt64))
        .bcst(MemorySize::Broadcast512_UInt64).k1z(),
    evex(M0F, 0x6D, P66, L128, W1, Template::new(Code::EVEX_Vpunpckhqdq_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_UInt64))
        .bcst(MemorySize::Broadcast128_UInt64).k1z(),
    evex(M0F, 0x6D, P66, L256, W1, Template::new(Code::EVEX_Vpunpckhqdq_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_UInt64))
        .bcst(MemorySize::Broadcast256_UInt64).k1z(),
    evex(M0F, 0x6D, P66, L512, W1, Template::new(Code::EVEX_Vpunpckhqdq_VZ_k1z_HZ_WZ_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_UInt64))
        .bcst(MemorySize::Broadcast512_UInt64).k1z(),
    evex(M0F, 0x6E, P66, L128, Wig, Template::sized([Code::EVEX_Vmovd_VX_Ed, Code::EVEX_Vmovd_VX_Ed, Code::EVEX_Vmovq_VX_Eq], &[Op::VX, Op::Ey]).with_mem_sized(W_D_Q)),
    evex(M0F, 0x6F, P66, L128, W0, Template::new(Code::EVEX_Vmovdqa32_VX_k1z_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed128_Int32)).k1z(),
    evex(M0F, 0x6F, P66, L256, W0, Template::new(Code::EVEX_Vmovdqa32_VY_k1z_WY, &[Op::VY, Op::WY]).with_mem(MemorySize::Packed256_Int32)).k1z(),
    evex(M0F, 0x6F, P66, L512, W0, Template::new(Code::EVEX_Vmovdqa32_VZ_k1z_WZ, &[Op::VZ, Op::WZ]).with_mem(MemorySize::Packed512_Int32)).k1z(),
    evex(M0F, 0x6F, P66, L128, W1, Template::new(Code::EVEX_Vmovdqa64_VX_k1z_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed128_Int64)).k1z(),
    evex(M0F, 0x6F, P66, L256, W1, Template::new(Code::EVEX_Vmovdqa64_VY_k1z_WY, &[Op::VY, Op::WY]).with_mem(MemorySize::Packed256_Int64)).k1z(),
    evex(M0F, 0x6F, P66, L512, W1, Template::new(Code::EVEX_Vmovdqa64_VZ_k1z_WZ, &[Op::VZ, Op::WZ]).with_mem(MemorySize::Packed512_Int64)).k1z(),
    evex(M0F, 0x6F, PF3, L128, W0, Template::new(Code::EVEX_Vmovdqu32_VX_k1z_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed128_Int32)).k1z(),
    evex(M0F, 0x6F, PF3, L256, W0, Template::new(Code::EVEX_Vmovdqu32_VY_k1z_WY, &[Op::VY, Op::WY]).with_mem(MemorySize::Packed256_Int32)).k1z(),
    evex(M0F, 0x6F, PF3, L512, W0, Template::new(Code::EVEX_Vmovdqu32_VZ_k1z_WZ, &[Op::VZ, Op::WZ]).with_mem(MemorySize::Packed512_Int32)).k1z(),
    evex(M0F, 0x6F, PF3, L128, W1, Template::new(Code::EVEX_Vmovdqu64_VX_k1z_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed128_Int64)).k1z(),
    evex(M0F, 0x6F, PF3, L256, W1, Template::new(Code::EVEX_Vmovdqu64_VY_k1z_WY, &[Op::VY, Op::WY]).with_mem(MemorySize::Packed256_Int64)).k1z(),
    evex(M0F, 0x6F, PF3, L512, W1, Template::new(Code::EVEX_Vmovdqu64_VZ_k1z_WZ, &[Op::VZ, Op::WZ]).with_mem(MemorySize::Packed512_Int64)).k1z(),
    evex(M0F, 0x6F, PF2, L128, W0, Template::new(Code::EVEX_Vmovdqu8_VX_k1z_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed128_Int8)).k1z(),
    evex(M0F, 0x6F, PF2, L256, W0, Template::new(Code::EVEX_Vmovdqu8_VY_k1z_WY, &[Op::VY, Op::WY]).with_mem(MemorySize::Packed256_Int8)).k1z(),
    evex(M0F, 0x6F, PF2, L512, W0, Template::new(Code::EVEX_Vmovdqu8_VZ_k1z_WZ, &[Op::VZ, Op::WZ]).with_mem(MemorySize::Packed512_Int8)).k1z(),
    evex(M0F, 0x6F, PF2, L128, W1, Template::new(Code::EVEX_Vmovdqu16_VX_k1z_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed128_Int16)).k1z(),
    evex(M0F, 0x6F, PF2, L256, W1, Template::new(Code::EVEX_Vmovdqu16_VY_k1z_WY, &[Op::VY, Op::WY]).with_mem(MemorySize::Packed256_Int16)).k1z(),
    evex(M0F, 0x6F, PF2, L512, W1, Template::new(Code::EVEX_Vmovdqu16_VZ_k1z_WZ, &[Op::VZ, Op::WZ]).with_mem(MemorySize::Packed512_Int16)).k1z(),
    evex(M0F, 0x70, P66, L128, W0, Template::new(Code::EVEX_Vpshufd_VX_k1z_WX_Ib_b, &[Op::VX, Op::WX, Op::Ib]).with_mem(MemorySize::Packed128_UInt32))
        .bcst(MemorySize::Broadcast128_UInt32).k1z(),
    evex(M0F, 0x70, P66, L256, W0, Template::new(Code::EVEX_Vpshufd_VY_k1z_WY_Ib_b, &[Op::VY, Op::WY, Op::Ib]).with_mem(MemorySize::Packed256_UInt32))
        .bcst(MemorySize::Broadcast256_UInt32).k1z(),
    evex(M0F, 0x70, P66, L512, W0, Template::new(Code::EVEX_Vpshufd_VZ_k1z_WZ_Ib_b, &[Op::VZ, Op::WZ, Op::Ib]).with_mem(MemorySize::Packed512_UInt32))
        .bcst(MemorySize::Broadcast512_UInt32).k1z(),
    evex(M0F, 0x70, PF3, L128, Wig, Template::new(Code::EVEX_Vpshufhw_VX_k1z_WX_Ib, &[Op::VX, Op::WX, Op::Ib]).with_mem(MemorySize::Packed128_UInt16)).k1z(),
    evex(M0F, 0x70, PF3, L256, Wig, Template::new(Code::EVEX_Vpshufhw_VY_k1z_WY_Ib, &[Op::VY, Op::WY, Op::Ib]).with_mem(MemorySize::Packed256_UInt16)).k1z(),
    evex(M0F, 0x70, PF3, L512, Wig, Template::new(Code::EVEX_Vpshufhw_VZ_k1z_WZ_Ib, &[Op::VZ, Op::WZ, Op::Ib]).with_mem(MemorySize::Packed512_UInt16)).k1z(),
    evex(M0F, 0x70, PF2, L128, Wig, Template::new(Code::EVEX_Vpshuflw_VX_k1z_WX_Ib, &[Op::VX, Op::WX, Op::Ib]).with_mem(MemorySize::Packed128_UInt16)).k1z(),
    evex(M0F, 0x70, PF2, L256, Wig, Template::new(Code::EVEX_Vpshuflw_VY_k1z_WY_Ib, &[Op::VY, Op::WY, Op::Ib]).with_mem(MemorySize::Packed256_UInt16)).k1z(),
    evex(M0F, 0x70, PF2, L512, Wig, Template::new(Code::EVEX_Vpshuflw_VZ_k1z_WZ_Ib, &[Op::VZ, Op::WZ, Op::Ib]).with_mem(MemorySize::Packed512_UInt16)).k1z(),
    evex(M0F, 0x74, P66, L128, Wig, Template::new(Code::EVEX_Vpcmpeqb_VK_k1_HX_WX, &[Op::VK, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Int8)).k1(),
    evex(M0F, 0x74, P66, L256, Wig, Template::new(Code::EVEX_Vpcmpeqb_VK_k1_HY_WY, &[Op::VK, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Int8)).k1(),
    evex(M0F, 0x74, P66, L512, Wig, Template::new(Code::EVEX_Vpcmpeqb_VK_k1_HZ_WZ, &[Op::VK, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Int8)).k1(),
    evex(M0F, 0x75, P66, L128, Wig, Template::new(Code::EVEX_Vpcmpeqw_VK_k1_HX_WX, &[Op::VK, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Int16)).k1(),
    evex(M0F, 0x75, P66, L256, Wig, Template::new(Code::EVEX_Vpcmpeqw_VK_k1_HY_WY, &[Op::VK, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Int16)).k1(),
    evex(M0F, 0x75, P66, L512, Wig, Template::new(Code::EVEX_Vpcmpeqw_VK_k1_HZ_WZ, &[Op::VK, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Int16)).k1(),
    evex(M0F, 0x76, P66, L128, W0, Template::new(Code::EVEX_Vpcmpeqd_VK_k1_HX_WX_b, &[Op::VK, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Int32))
        .bcst(MemorySize::Broadcast128_Int32).k1(),
    evex(M0F, 0x76, P66, L256, W0, Template::new(Code::EVEX_Vpcmpeqd_VK_k1_HY_WY_b, &[Op::VK, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Int32))
        .bcst(MemorySize::Broadcast256_Int32).k1(),
    evex(M0F, 0x76, P66, L512, W0, Template::new(Code::EVEX_Vpcmpeqd_VK_k1_HZ_WZ_b, &[Op::VK, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Int32))
        .bcst(MemorySize::Broadcast512_Int32).k1(),
    evex(M0F, 0x7E, P66, L128, Wig, Template::sized([Code::EVEX_Vmovd_Ed_VX, Code::EVEX_Vmovd_Ed_VX, Code::EVEX_Vmovq_Eq_VX], &[Op::Ey, Op::VX]).with_mem_sized(W_D_Q)),
    evex(M0F, 0x7E, PF3, L128, W1, Template::new(Code::EVEX_Vmovq_VX_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::UInt64)),
    evex(M0F, 0x7F, P66, L128, W0, Template::new(Code::EVEX_Vmovdqa32_WX_k1z_VX, &[Op::WX, Op::VX]).with_mem(MemorySize::Packed128_Int32)).k1z(),
    evex(M0F, 0x7F, P66, L256, W0, Template::new(Code::EVEX_Vmovdqa32_WY_k1z_VY, &[Op::WY, Op::VY]).with_mem(MemorySize::Packed256_Int32)).k1z(),
    evex(M0F, 0x7F, P66, L512, W0, Template::new(Code::EVEX_Vmovdqa32_WZ_k1z_VZ, &[Op::WZ, Op::VZ]).with_mem(MemorySize::Packed512_Int32)).k1z(),
    evex(M0F, 0x7F, P66, L128, W1, Template::new(Code::EVEX_Vmovdqa64_WX_k1z_VX, &[Op::WX, Op::VX]).with_mem(MemorySize::Packed128_Int64)).k1z(),
    evex(M0F, 0x7F, P66, L256, W1, Template::new(Code::EVEX_Vmovdqa64_WY_k1z_VY, &[Op::WY, Op::VY]).with_mem(MemorySize::Packed256_Int64)).k1z(),
    evex(M0F, 0x7F, P66, L512, W1, Template::new(Code::EVEX_Vmovdqa64_WZ_k1z_VZ, &[Op::WZ, Op::VZ]).with_mem(MemorySize::Packed512_Int64)).k1z(),
    evex(M0F, 0x7F, PF3, L128, W0, Template::new(Code::EVEX_Vmovdqu32_WX_k1z_VX, &[Op::WX, Op::VX]).with_mem(MemorySize::Packed128_Int32)).k1z(),
    evex(M0F, 0x7F, PF3, L256, W0, Template::new(Code::EVEX_Vmovdqu32_WY_k1z_VY, &[Op::WY, Op::VY]).with_mem(MemorySize::Packed256_Int32)).k1z(),
    evex(M0F, 0x7F, PF3, L512, W0, Template::new(Code::EVEX_Vmovdqu32_WZ_k1z_VZ, &[Op::WZ, Op::VZ]).with_mem(MemorySize::Packed512_Int32)).k1z(),
    evex(M0F, 0x7F, PF3, L128, W1, Template::new(Code::EVEX_Vmovdqu64_WX_k1z_VX, &[Op::WX, Op::VX]).with_mem(MemorySize::Packed128_Int64)).k1z(),
    evex(M0F, 0x7F, PF3, L256, W1, Template::new(Code::EVEX_Vmovdqu64_WY_k1z_VY, &[Op::WY, Op::VY]).with_mem(MemorySize::Packed256_Int64)).k1z(),
    evex(M0F, 0x7F, PF3, L512, W1, Template::new(Code::EVEX_Vmovdqu64_WZ_k1z_VZ, &[Op::WZ, Op::VZ]).with_mem(MemorySize::Packed512_Int64)).k1z(),
    evex(M0F, 0x7F, PF2, L128, W0, Template::new(Code::EVEX_Vmovdqu8_WX_k1z_VX, &[Op::WX, Op::VX]).with_mem(MemorySize::Packed128_Int8)).k1z(),
    evex(M0F, 0x7F, PF2, L256, W0, Template::new(Code::EVEX_Vmovdqu8_WY_k1z_VY, &[Op::WY, Op::VY]).with_mem(MemorySize::Packed256_Int8)).k1z(),
    evex(M0F, 0x7F, PF2, L512, W0, Template::new(Code::EVEX_Vmovdqu8_WZ_k1z_VZ, &[Op::WZ, Op::VZ]).with_mem(MemorySize::Packed512_Int8)).k1z(),
    evex(M0F, 0x7F, PF2, L128, W1, Template::new(Code::EVEX_Vmovdqu16_WX_k1z_VX, &[Op::WX, Op::VX]).with_mem(MemorySize::Packed128_Int16)).k1z(),
    evex(M0F, 0x7F, PF2, L256, W1, Template::new(Code::EVEX_Vmovdqu16_WY_k1z_VY, &[Op::WY, Op::VY]).with_mem(MemorySize::Packed256_Int16)).k1z(),
    evex(M0F, 0x7F, PF2, L512, W1, Template::new(Code::EVEX_Vmovdqu16_WZ_k1z_VZ, &[Op::WZ, Op::VZ]).with_mem(MemorySize::Packed512_Int16)).k1z(),
    evex(M0F, 0xC2, NP, L128, W0, Template::new(Code::EVEX_Vcmpps_VK_k1_HX_WX_Ib_b, &[Op::VK, Op::HX, Op::WX, Op::Ib]).with_mem(MemorySize::Packed128_Float32))
        .bcst(MemorySize::Broadcast128_Float32).k1(),
    evex(M0F, 0xC2, NP, L256, W0, Template::new(Code::EVEX_Vcmpps_VK_k1_HY_WY_Ib_b, &[Op::VK, Op::HY, Op::WY, Op::Ib]).with_mem(MemorySize::Packed256_Float32))
        .bcst(MemorySize::Broadcast256_Float32).k1(),
    evex(M0F, 0xC2, NP, L512, W0, Template::new(Code::EVEX_Vcmpps_VK_k1_HZ_WZ_Ib_sae_b, &[Op::VK, Op::HZ, Op::WZ, Op::Ib]).with_mem(MemorySize::Packed512_Float32))
        .bcst(MemorySize::Broadcast512_Float32).sae().k1(),
    evex(M0F, 0xC2, P66, L128, W1, Template::new(Code::EVEX_Vcmppd_VK_k1_HX_WX_Ib_b, &[Op::VK, Op::HX, Op::WX, Op::Ib]).with_mem(MemorySize::Packed128_Float64))
        .bcst(MemorySize::Broadcast128_Float64).k1(),
    evex(M0F, 0xC2, P66, L256, W1, Template::new(Code::EVEX_Vcmppd_VK_k1_HY_WY_Ib_b, &[Op::VK, Op::HY, Op::WY, Op::Ib]).with_mem(MemorySize::Packed256_Float64))
        .bcst(MemorySize::Broadcast256_Float64).k1(),
    evex(M0F, 0xC2, P66, L512, W1, Template::new(Code::EVEX_Vcmppd_VK_k1_HZ_WZ_Ib_sae_b, &[Op::VK, Op::HZ, Op::WZ, Op::Ib]).with_mem(MemorySize::Packed512_Float64))
        .bcst(MemorySize::Broadcast512_Float64).sae().k1(),
    evex(M0F, 0xC2, PF3, Lig, W0, Template::new(Code::EVEX_Vcmpss_VK_k1_HX_WX_Ib_sae, &[Op::VK, Op::HX, Op::WX, Op::Ib]).with_mem(MemorySize::Float32)).sae().k1(),
    evex(M0F, 0xC2, PF2, Lig, W1, Template::new(Code::EVEX_Vcmpsd_VK_k1_HX_WX_Ib_sae, &[Op::VK, Op::HX, Op::WX, Op::Ib]).with_mem(MemorySize::Float64)).sae().k1(),
    evex(M0F, 0xC6, NP, L128, W0, Template::new(Code::EVEX_Vshufps_VX_k1z_HX_WX_Ib_b, &[Op::VX, Op::HX, Op::WX, Op::Ib]).with_mem(MemorySize::Packed128_Float32))
        .bcst(MemorySize::Broadcast128_Float32).k1z(),
    evex(M0F, 0xC6, NP, L256, W0, Template::new(Code::EVEX_Vshufps_VY_k1z_HY_WY_Ib_b, &[Op::VY, Op::HY, Op::WY, Op::Ib]).with_mem(MemorySize::Packed256_Float32))
        .bcst(MemorySize::Broadcast256_Float32).k1z(),
    evex(M0F, 0xC6, NP, L512, W0, Template::new(Code::EVEX_Vshufps_VZ_k1z_HZ_WZ_Ib_b, &[Op::VZ, Op::HZ, Op::WZ, Op::Ib]).with_mem(MemorySize::Packed512_Float32))
        .bcst(MemorySize::Broadcast512_Float32).k1z(),
    evex(M0F, 0xC6, P66, L128, W1, Template::new(Code::EVEX_Vshufpd_VX_k1z_HX_WX_Ib_b, &[Op::VX, Op::HX, Op::WX, Op::Ib]).with_mem(MemorySize::Packed128_Float64))
        .bcst(MemorySize::Broadcast128_Float64).k1z(),
    evex(M0F, 0xC6, P66, L256, W1, Template::new(Code::EVEX_Vshufpd_VY_k1z_HY_WY_Ib_b, &[Op::VY, Op::HY, Op::WY, Op::Ib]).with_mem(MemorySize::Packed256_Float64))
        .bcst(MemorySize::Broadcast256_Float64).k1z(),
    evex(M0F, 0xC6, P66, L512, W1, Template::new(Code::EVEX_Vshufpd_VZ_k1z_HZ_WZ_Ib_b, &[Op::VZ, Op::HZ, Op::WZ, Op::Ib]).with_mem(MemorySize::Packed512_Float64))
        .bcst(MemorySize::Broadcast512_Float64).k1z(),
    evex(M0F, 0xD4, P66, L128, W1, Template::new(Code::EVEX_Vpaddq_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_UInt64))
        .bcst(MemorySize::Broadcast128_UInt64).k1z(),
    evex(M0F, 0xD4, P66, L256, W1, Template::new(Code::EVEX_Vpaddq_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_UInt64))
        .bcst(MemorySize::Broadcast256_UInt64).k1z(),
    evex(M0F, 0xD4, P66, L512, W1, Template::new(Code::EVEX_Vpaddq_VZ_k1z_HZ_WZ_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_UInt64))
        .bcst(MemorySize::Broadcast512_UInt64).k1z(),
    evex(M0F, 0xD6, P66, L128, W1, Template::new(Code::EVEX_Vmovq_WX_VX, &[Op::WX, Op::VX]).with_mem(MemorySize::UInt64)),
    evex(M0F, 0xDB, P66, L128, W0, Template::new(Code::EVEX_Vpandd_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Int32))
        .bcst(MemorySize::Broadcast128_Int32).k1z(),
    evex(M0F, 0xDB, P66, L256, W0, Template::new(Code::EVEX_Vpandd_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Int32))
        .bcst(MemorySize::Broadcast256_Int32).k1z(),
    evex(M0F, 0xDB, P66, L512, W0, Template::new(Code::EVEX_Vpandd_VZ_k1z_HZ_WZ_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Int32))
        .bcst(MemorySize::Broadcast512_Int32).k1z(),
    evex(M0F, 0xDB, P66, L128, W1, Template::new(Code::EVEX_Vpandq_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Int64))
        .bcst(MemorySize::Broadcast128_Int64).k1z(),
    evex(M0F, 0xDB, P66, L256, W1, Template::new(Code::EVEX_Vpandq_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Int64))
        .bcst(MemorySize::Broadcast256_Int64).k1z(),
    evex(M0F, 0xDB, P66, L512, W1, Template::new(Code::EVEX_Vpandq_VZ_k1z_HZ_WZ_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Int64))
        .bcst(MemorySize::Broadcast512_Int64).k1z(),
    evex(M0F, 0xDF, P66, L128, W0, Template::new(Code::EVEX_Vpandnd_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Int32))
        .bcst(MemorySize::Broadcast128_Int32).k1z(),
    evex(M0F, 0xDF, P66, L256, W0, Template::new(Code::EVEX_Vpandnd_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Int32))
        .bcst(MemorySize::Broadcast256_Int32).k1z(),
    evex(M0F, 0xDF, P66, L512, W0, Template::new(Code::EVEX_Vpandnd_VZ_k1z_HZ_WZ_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Int32))
        .bcst(MemorySize::Broadcast512_Int32).k1z(),
    evex(M0F, 0xDF, P66, L128, W1, Template::new(Code::EVEX_Vpandnq_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Int64))
        .bcst(MemorySize::Broadcast128_Int64).k1z(),
    evex(M0F, 0xDF, P66, L256, W1, Template::new(Code::EVEX_Vpandnq_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Int64))
        .bcst(MemorySize::Broadcast256_Int64).k1z(),
    evex(M0F, 0xDF, P66, L512, W1, Template::new(Code::EVEX_Vpandnq_VZ_k1z_HZ_WZ_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Int64))
        .bcst(MemorySize::Broadcast512_Int64).k1z(),
    evex(M0F, 0xEF, P66, L128, W0, Template::new(Code::EVEX_Vpxord_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_UInt32))
        .bcst(MemorySize::Broadcast128_UInt32).k1z(),
    evex(M0F, 0xEF, P66, L256, W0, Template::new(Code::EVEX_Vpxord_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_UInt32))
        .bcst(MemorySize::Broadcast256_UInt32).k1z(),
    evex(M0F, 0xEF, P66, L512, W0, Template::new(Code::EVEX_Vpxord_VZ_k1z_HZ_WZ_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_UInt32))
        .bcst(MemorySize::Broadcast512_UInt32).k1z(),
    evex(M0F, 0xEF, P66, L128, W1, Template::new(Code::EVEX_Vpxorq_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_UInt64))
        .bcst(MemorySize::Broadcast128_UInt64).k1z(),
    evex(M0F, 0xEF, P66, L256, W1, Template::new(Code::EVEX_Vpxorq_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_UInt64))
        .bcst(MemorySize::Broadcast256_UInt64).k1z(),
    evex(M0F, 0xEF, P66, L512, W1, Template::new(Code::EVEX_Vpxorq_VZ_k1z_HZ_WZ_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_UInt64))
        .bcst(MemorySize::Broadcast512_UInt64).k1z(),
    evex(M0F, 0xFE, P66, L128, W0, Template::new(Code::EVEX_Vpaddd_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Int32))
        .bcst(MemorySize::Broadcast128_Int32).k1z(),
    evex(M0F, 0xFE, P66, L256, W0, Template::new(Code::EVEX_Vpaddd_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Int32))
        .bcst(MemorySize::Broadcast256_Int32).k1z(),
    evex(M0F, 0xFE, P66, L512, W0, Template::new(Code::EVEX_Vpaddd_VZ_k1z_HZ_WZ_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Int32))
        .bcst(MemorySize::Broadcast512_Int32).k1z(),

    // ---- 0F38 ----
    evex(M0F38, 0x00, P66, L128, Wig, Template::new(Code::EVEX_Vpshufb_VX_k1z_HX_WX, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_UInt8)).k1z(),
    evex(M0F38, 0x00, P66, L256, Wig, Template::new(Code::EVEX_Vpshufb_VY_k1z_HY_WY, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_UInt8)).k1z(),
    evex(M0F38, 0x00, P66, L512, Wig, Template::new(Code::EVEX_Vpshufb_VZ_k1z_HZ_WZ, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_UInt8)).k1z(),
    evex(M0F38, 0x18, P66, L128, W0, Template::new(Code::EVEX_Vbroadcastss_VX_k1z_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Float32)).k1z(),
    evex(M0F38, 0x18, P66, L256, W0, Template::new(Code::EVEX_Vbroadcastss_VY_k1z_WX, &[Op::VY, Op::WX]).with_mem(MemorySize::Float32)).k1z(),
    evex(M0F38, 0x18, P66, L512, W0, Template::new(Code::EVEX_Vbroadcastss_VZ_k1z_WX, &[Op::VZ, Op::WX]).with_mem(MemorySize::Float32)).k1z(),
    evex(M0F38, 0x20, P66, L128, Wig, Template::new(Code::EVEX_Vpmovsxbw_VX_k1z_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed64_Int8)).k1z(),
    evex(M0F38, 0x20, P66, L256, Wig, Template::new(Code::EVEX_Vpmovsxbw_VY_k1z_WX, &[Op::VY, Op::WX]).with_mem(MemorySize::Packed128_Int8)).k1z(),
    evex(M0F38, 0x20, P66, L512, Wig, Template::new(Code::EVEX_Vpmovsxbw_VZ_k1z_WY, &[Op::VZ, Op::WY]).with_mem(MemorySize::Packed256_Int8)).k1z(),
    evex(M0F38, 0x20, PF3, L128, W0, Template::new(Code::EVEX_Vpmovswb_WX_k1z_VX, &[Op::WX, Op::VX]).with_mem(MemorySize::Packed64_Int8)).k1z(),
    evex(M0F38, 0x20, PF3, L256, W0, Template::new(Code::EVEX_Vpmovswb_WX_k1z_VY, &[Op::WX, Op::VY]).with_mem(MemorySize::Packed128_Int8)).k1z(),
    evex(M0F38, 0x20, PF3, L512, W0, Template::new(Code::EVEX_Vpmovswb_WY_k1z_VZ, &[Op::WY, Op::VZ]).with_mem(MemorySize::Packed256_Int8)).k1z(),
    evex(M0F38, 0x21, P66, L128, Wig, Template::new(Code::EVEX_Vpmovsxbd_VX_k1z_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed32_Int8)).k1z(),
    evex(M0F38, 0x21, P66, L256, Wig, Template::new(Code::EVEX_Vpmovsxbd_VY_k1z_WX, &[Op::VY, Op::WX]).with_mem(MemorySize::Packed64_Int8)).k1z(),
    evex(M0F38, 0x21, P66, L512, Wig, Template::new(Code::EVEX_Vpmovsxbd_VZ_k1z_WX, &[Op::VZ, Op::WX]).with_mem(MemorySize::Packed128_Int8)).k1z(),
    evex(M0F38, 0x21, PF3, L128, W0, Template::new(Code::EVEX_Vpmovsdb_WX_k1z_VX, &[Op::WX, Op::VX]).with_mem(MemorySize::Packed32_Int8)).k1z(),
    evex(M0F38, 0x21, PF3, L256, W0, Template::new(Code::EVEX_Vpmovsdb_WX_k1z_VY, &[Op::WX, Op::VY]).with_mem(MemorySize::Packed64_Int8)).k1z(),
    evex(M0F38, 0x21, PF3, L512, W0, Template::new(Code::EVEX_Vpmovsdb_WX_k1z_VZ, &[Op::WX, Op::VZ]).with_mem(MemorySize::Packed128_Int8)).k1z(),
    evex(M0F38, 0x22, P66, L128, Wig, Template::new(Code::EVEX_Vpmovsxbq_VX_k1z_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed16_Int8)).k1z(),
    evex(M0F38, 0x22, P66, L256, Wig, Template::new(Code::EVEX_Vpmovsxbq_VY_k1z_WX, &[Op::VY, Op::WX]).with_mem(MemorySize::Packed32_Int8)).k1z(),
    evex(M0F38, 0x22, P66, L512, Wig, Template::new(Code::EVEX_Vpmovsxbq_VZ_k1z_WX, &[Op::VZ, Op::WX]).with_mem(MemorySize::Packed64_Int8)).k1z(),
    evex(M0F38, 0x22, PF3, L128, W0, Template::new(Code::EVEX_Vpmovsqb_WX_k1z_VX, &[Op::WX, Op::VX]).with_mem(MemorySize::Packed16_Int8)).k1z(),
    evex(M0F38, 0x22, PF3, L256, W0, Template::new(Code::EVEX_Vpmovsqb_WX_k1z_VY, &[Op::WX, Op::VY]).with_mem(MemorySize::Packed32_Int8)).k1z(),
    evex(M0F38, 0x22, PF3, L512, W0, Template::new(Code::EVEX_Vpmovsqb_WX_k1z_VZ, &[Op::WX, Op::VZ]).with_mem(MemorySize::Packed64_Int8)).k1z(),
    evex(M0F38, 0x23, P66, L128, Wig, Template::new(Code::EVEX_Vpmovsxwd_VX_k1z_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed64_Int16)).k1z(),
    evex(M0F38, 0x23, P66, L256, Wig, Template::new(Code::EVEX_Vpmovsxwd_VY_k1z_WX, &[Op::VY, Op::WX]).with_mem(MemorySize::Packed128_Int16)).k1z(),
    evex(M0F38, 0x23, P66, L512, Wig, Template::new(Code::EVEX_Vpmovsxwd_VZ_k1z_WY, &[Op::VZ, Op::WY]).with_mem(MemorySize::Packed256_Int16)).k1z(),
    evex(M0F38, 0x23, PF3, L128, W0, Template::new(Code::EVEX_Vpmovsdw_WX_k1z_VX, &[Op::WX, Op::VX]).with_mem(MemorySize::Packed64_Int16)).k1z(),
    evex(M0F38, 0x23, PF3, L256, W0, Template::new(Code::EVEX_Vpmovsdw_WX_k1z_VY, &[Op::WX, Op::VY]).with_mem(MemorySize::Packed128_Int16)).k1z(),
    evex(M0F38, 0x23, PF3, L512, W0, Template::new(Code::EVEX_Vpmovsdw_WY_k1z_VZ, &[Op::WY, Op::VZ]).with_mem(MemorySize::Packed256_Int16)).k1z(),
    evex(M0F38, 0x24, P66, L128, Wig, Template::new(Code::EVEX_Vpmovsxwq_VX_k1z_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed32_Int16)).k1z(),
    evex(M0F38, 0x24, P66, L256, Wig, Template::new(Code::EVEX_Vpmovsxwq_VY_k1z_WX, &[Op::VY, Op::WX]).with_mem(MemorySize::Packed64_Int16)).k1z(),
    evex(M0F38, 0x24, P66, L512, Wig, Template::new(Code::EVEX_Vpmovsxwq_VZ_k1z_WX, &[Op::VZ, Op::WX]).with_mem(MemorySize::Packed128_Int16)).k1z(),
    evex(M0F38, 0x24, PF3, L128, W0, Template::new(Code::EVEX_Vpmovsqw_WX_k1z_VX, &[Op::WX, Op::VX]).with_mem(MemorySize::Packed32_Int16)).k1z(),
    evex(M0F38, 0x24, PF3, L256, W0, Template::new(Code::EVEX_Vpmovsqw_WX_k1z_VY, &[Op::WX, Op::VY]).with_mem(MemorySize::Packed64_Int16)).k1z(),
    evex(M0F38, 0x24, PF3, L512, W0, Template::new(Code::EVEX_Vpmovsqw_WX_k1z_VZ, &[Op::WX, Op::VZ]).with_mem(MemorySize::Packed128_Int16)).k1z(),
    evex(M0F38, 0x25, P66, L128, W0, Template::new(Code::EVEX_Vpmovsxdq_VX_k1z_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed64_Int32)).k1z(),
    evex(M0F38, 0x25, P66, L256, W0, Template::new(Code::EVEX_Vpmovsxdq_VY_k1z_WX, &[Op::VY, Op::WX]).with_mem(MemorySize::Packed128_Int32)).k1z(),
    evex(M0F38, 0x25, P66, L512, W0, Template::new(Code::EVEX_Vpmovsxdq_VZ_k1z_WY, &[Op::VZ, Op::WY]).with_mem(MemorySize::Packed256_Int32)).k1z(),
    evex(M0F38, 0x25, PF3, L128, W0, Template::new(Code::EVEX_Vpmovsqd_WX_k1z_VX, &[Op::WX, Op::VX]).with_mem(MemorySize::Packed64_Int32)).k1z(),
    evex(M0F38, 0x25, PF3, L256, W0, Template::new(Code::EVEX_Vpmovsqd_WX_k1z_VY, &[Op::WX, Op::VY]).with_mem(MemorySize::Packed128_Int32)).k1z(),
    evex(M0F38, 0x25, PF3, L512, W0, Template::new(Code::EVEX_Vpmovsqd_WY_k1z_VZ, &[Op::WY, Op::VZ]).with_mem(MemorySize::Packed256_Int32)).k1z(),
    evex(M0F38, 0x28, P66, L128, W1, Template::new(Code::EVEX_Vpmuldq_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Int32))
        .bcst(MemorySize::Broadcast128_Int64).k1z(),
    evex(M0F38, 0x28, P66, L256, W1, Template::new(Code::EVEX_Vpmuldq_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Int32))
        .bcst(MemorySize::Broadcast256_Int64).k1z(),
    evex(M0F38, 0x28, P66, L512, W1, Template::new(Code::EVEX_Vpmuldq_VZ_k1z_HZ_WZ_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Int32))
        .bcst(MemorySize::Broadcast512_Int64).k1z(),
    evex(M0F38, 0x28, PF3, L128, W0, Template::new(Code::EVEX_Vpmovm2b_VX_RK, &[Op::VX, Op::RK])),
    evex(M0F38, 0x28, PF3, L256, W0, Template::new(Code::EVEX_Vpmovm2b_VY_RK, &[Op::VY, Op::RK])),
    evex(M0F38, 0x28, PF3, L512, W0, Template::new(Code::EVEX_Vpmovm2b_VZ_RK, &[Op::VZ, Op::RK])),
    evex(M0F38, 0x28, PF3, L128, W1, Template::new(Code::EVEX_Vpmovm2w_VX_RK, &[Op::VX, Op::RK])),
    evex(M0F38, 0x28, PF3, L256, W1, Template::new(Code::EVEX_Vpmovm2w_VY_RK, &[Op::VY, Op::RK])),
    evex(M0F38, 0x28, PF3, L512, W1, Template::new(Code::EVEX_Vpmovm2w_VZ_RK, &[Op::VZ, Op::RK])),
    evex(M0F38, 0x30, P66, L128, Wig, Template::new(Code::EVEX_Vpmovzxbw_VX_k1z_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed64_UInt8)).k1z(),
    evex(M0F38, 0x30, P66, L256, Wig, Template::new(Code::EVEX_Vpmovzxbw_VY_k1z_WX, &[Op::VY, Op::WX]).with_mem(MemorySize::Packed128_UInt8)).k1z(),
    evex(M0F38, 0x30, P66, L512, Wig, Template::new(Code::EVEX_Vpmovzxbw_VZ_k1z_WY, &[Op::VZ, Op::WY]).with_mem(MemorySize::Packed256_UInt8)).k1z(),
    evex(M0F38, 0x30, PF3, L128, W0, Template::new(Code::EVEX_Vpmovwb_WX_k1z_VX, &[Op::WX, Op::VX]).with_mem(MemorySize::Packed64_Int8)).k1z(),
    evex(M0F38, 0x30, PF3, L256, W0, Template::new(Code::EVEX_Vpmovwb_WX_k1z_VY, &[Op::WX, Op::VY]).with_mem(MemorySize::Packed128_Int8)).k1z(),
    evex(M0F38, 0x30, PF3, L512, W0, Template::new(Code::EVEX_Vpmovwb_WY_k1z_VZ, &[Op::WY, Op::VZ]).with_mem(MemorySize::Packed256_Int8)).k1z(),
    evex(M0F38, 0x31, P66, L128, Wig, Template::new(Code::EVEX_Vpmovzxbd_VX_k1z_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed32_UInt8)).k1z(),
    evex(M0F38, 0x31, P66, L256, Wig, Template::new(Code::EVEX_Vpmovzxbd_VY_k1z_WX, &[Op::VY, Op::WX]).with_mem(MemorySize::Packed64_UInt8)).k1z(),
    evex(M0F38, 0x31, P66, L512, Wig, Template::new(Code::EVEX_Vpmovzxbd_VZ_k1z_WX, &[Op::VZ, Op::WX]).with_mem(MemorySize::Packed128_UInt8)).k1z(),
    evex(M0F38, 0x31, PF3, L128, W0, Template::new(Code::EVEX_Vpmovdb_WX_k1z_VX, &[Op::WX, Op::VX]).with_mem(MemorySize::Packed32_Int8)).k1z(),
    evex(M0F38, 0x31, PF3, L256, W0, Template::new(Code::EVEX_Vpmovdb_WX_k1z_VY, &[Op::WX, Op::VY]).with_mem(MemorySize::Packed64_Int8)).k1z(),
    evex(M0F38, 0x31, PF3, L512, W0, Template::new(Code::EVEX_Vpmovdb_WX_k1z_VZ, &[Op::WX, Op::VZ]).with_mem(MemorySize::Packed128_Int8)).k1z(),
    evex(M0F38, 0x32, P66, L128, Wig, Template::new(Code::EVEX_Vpmovzxbq_VX_k1z_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed16_UInt8)).k1z(),
    evex(M0F38, 0x32, P66, L256, Wig, Template::new(Code::EVEX_Vpmovzxbq_VY_k1z_WX, &[Op::VY, Op::WX]).with_mem(MemorySize::Packed32_UInt8)).k1z(),
    evex(M0F38, 0x32, P66, L512, Wig, Template::new(Code::EVEX_Vpmovzxbq_VZ_k1z_WX, &[Op::VZ, Op::WX]).with_mem(MemorySize::Packed64_UInt8)).k1z(),
    evex(M0F38, 0x32, PF3, L128, W0, Template::new(Code::EVEX_Vpmovqb_WX_k1z_VX, &[Op::WX, Op::VX]).with_mem(MemorySize::Packed16_Int8)).k1z(),
    evex(M0F38, 0x32, PF3, L256, W0, Template::new(Code::EVEX_Vpmovqb_WX_k1z_VY, &[Op::WX, Op::VY]).with_mem(MemorySize::Packed32_Int8)).k1z(),
    evex(M0F38, 0x32, PF3, L512, W0, Template::new(Code::EVEX_Vpmovqb_WX_k1z_VZ, &[Op::WX, Op::VZ]).with_mem(MemorySize::Packed64_Int8)).k1z(),
    evex(M0F38, 0x33, P66, L128, Wig, Template::new(Code::EVEX_Vpmovzxwd_VX_k1z_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed64_UInt16)).k1z(),
    evex(M0F38, 0x33, P66, L256, Wig, Template::new(Code::EVEX_Vpmovzxwd_VY_k1z_WX, &[Op::VY, Op::WX]).with_mem(MemorySize::Packed128_UInt16)).k1z(),
    evex(M0F38, 0x33, P66, L512, Wig, Template::new(Code::EVEX_Vpmovzxwd_VZ_k1z_WY, &[Op::VZ, Op::WY]).with_mem(MemorySize::Packed256_UInt16)).k1z(),
    evex(M0F38, 0x33, PF3, L128, W0, Template::new(Code::EVEX_Vpmovdw_WX_k1z_VX, &[Op::WX, Op::VX]).with_mem(MemorySize::Packed64_Int16)).k1z(),
    evex(M0F38, 0x33, PF3, L256, W0, Template::new(Code::EVEX_Vpmovdw_WX_k1z_VY, &[Op::WX, Op::VY]).with_mem(MemorySize::Packed128_Int16)).k1z(),
    evex(M0F38, 0x33, PF3, L512, W0, Template::new(Code::EVEX_Vpmovdw_WY_k1z_VZ, &[Op::WY, Op::VZ]).with_mem(MemorySize::Packed256_Int16)).k1z(),
    evex(M0F38, 0x34, P66, L128, Wig, Template::new(Code::EVEX_Vpmovzxwq_VX_k1z_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed32_UInt16)).k1z(),
    evex(M0F38, 0x34, P66, L256, Wig, Template::new(Code::EVEX_Vpmovzxwq_VY_k1z_WX, &[Op::VY, Op::WX]).with_mem(MemorySize::Packed64_UInt16)).k1z(),
    evex(M0F38, 0x34, P66, L512, Wig, Template::new(Code::EVEX_Vpmovzxwq_VZ_k1z_WX, &[Op::VZ, Op::WX]).with_mem(MemorySize::Packed128_UInt16)).k1z(),
    evex(M0F38, 0x34, PF3, L128, W0, Template::new(Code::EVEX_Vpmovqw_WX_k1z_VX, &[Op::WX, Op::VX]).with_mem(MemorySize::Packed32_Int16)).k1z(),
    evex(M0F38, 0x34, PF3, L256, W0, Template::new(Code::EVEX_Vpmovqw_WX_k1z_VY, &[Op::WX, Op::VY]).with_mem(MemorySize::Packed64_Int16)).k1z(),
    evex(M0F38, 0x34, PF3, L512, W0, Template::new(Code::EVEX_Vpmovqw_WX_k1z_VZ, &[Op::WX, Op::VZ]).with_mem(MemorySize::Packed128_Int16)).k1z(),
    evex(M0F38, 0x35, P66, L128, W0, Template::new(Code::EVEX_Vpmovzxdq_VX_k1z_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::Packed64_UInt32)).k1z(),
    evex(M0F38, 0x35, P66, L256, W0, Template::new(Code::EVEX_Vpmovzxdq_VY_k1z_WX, &[Op::VY, Op::WX]).with_mem(MemorySize::Packed128_UInt32)).k1z(),
    evex(M0F38, 0x35, P66, L512, W0, Template::new(Code::EVEX_Vpmovzxdq_VZ_k1z_WY, &[Op::VZ, Op::WY]).with_mem(MemorySize::Packed256_UInt32)).k1z(),
    evex(M0F38, 0x35, PF3, L128, W0, Template::new(Code::EVEX_Vpmovqd_WX_k1z_VX, &[Op::WX, Op::VX]).with_mem(MemorySize::Packed64_Int32)).k1z(),
    evex(M0F38, 0x35, PF3, L256, W0, Template::new(Code::EVEX_Vpmovqd_WX_k1z_VY, &[Op::WX, Op::VY]).with_mem(MemorySize::Packed128_Int32)).k1z(),
    evex(M0F38, 0x35, PF3, L512, W0, Template::new(Code::EVEX_Vpmovqd_WY_k1z_VZ, &[Op::WY, Op::VZ]).with_mem(MemorySize::Packed256_Int32)).k1z(),
    evex(M0F38, 0x36, P66, L256, W0, Template::new(Code::EVEX_Vpermd_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Int32))
        .bcst(MemorySize::Broadcast256_Int32).k1z(),
    evex(M0F38, 0x36, P66, L512, W0, Template::new(Code::EVEX_Vpermd_VZ_k1z_HZ_WZ_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Int32))
        .bcst(MemorySize::Broadcast512_Int32).k1z(),
    evex(M0F38, 0x36, P66, L256, W1, Template::new(Code::EVEX_Vpermq_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Int64))
        .bcst(MemorySize::Broadcast256_Int64).k1z(),
    evex(M0F38, 0x36, P66, L512, W1, Template::new(Code::EVEX_Vpermq_VZ_k1z_HZ_WZ_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Int64))
        .bcst(MemorySize::Broadcast512_Int64).k1z(),
    evex(M0F38, 0x58, P66, L128, W0, Template::new(Code::EVEX_Vpbroadcastd_VX_k1z_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::UInt32)).k1z(),
    evex(M0F38, 0x58, P66, L256, W0, Template::new(Code::EVEX_Vpbroadcastd_VY_k1z_WX, &[Op::VY, Op::WX]).with_mem(MemorySize::UInt32)).k1z(),
    evex(M0F38, 0x58, P66, L512, W0, Template::new(Code::EVEX_Vpbroadcastd_VZ_k1z_WX, &[Op::VZ, Op::WX]).with_mem(MemorySize::UInt32)).k1z(),
    evex(M0F38, 0x59, P66, L128, W1, Template::new(Code::EVEX_Vpbroadcastq_VX_k1z_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::UInt64)).k1z(),
    evex(M0F38, 0x59, P66, L256, W1, Template::new(Code::EVEX_Vpbroadcastq_VY_k1z_WX, &[Op::VY, Op::WX]).with_mem(MemorySize::UInt64)).k1z(),
    evex(M0F38, 0x59, P66, L512, W1, Template::new(Code::EVEX_Vpbroadcastq_VZ_k1z_WX, &[Op::VZ, Op::WX]).with_mem(MemorySize::UInt64)).k1z(),
    evex(M0F38, 0x78, P66, L128, W0, Template::new(Code::EVEX_Vpbroadcastb_VX_k1z_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::UInt8)).k1z(),
    evex(M0F38, 0x78, P66, L256, W0, Template::new(Code::EVEX_Vpbroadcastb_VY_k1z_WX, &[Op::VY, Op::WX]).with_mem(MemorySize::UInt8)).k1z(),
    evex(M0F38, 0x78, P66, L512, W0, Template::new(Code::EVEX_Vpbroadcastb_VZ_k1z_WX, &[Op::VZ, Op::WX]).with_mem(MemorySize::UInt8)).k1z(),
    evex(M0F38, 0x79, P66, L128, W0, Template::new(Code::EVEX_Vpbroadcastw_VX_k1z_WX, &[Op::VX, Op::WX]).with_mem(MemorySize::UInt16)).k1z(),
    evex(M0F38, 0x79, P66, L256, W0, Template::new(Code::EVEX_Vpbroadcastw_VY_k1z_WX, &[Op::VY, Op::WX]).with_mem(MemorySize::UInt16)).k1z(),
    evex(M0F38, 0x79, P66, L512, W0, Template::new(Code::EVEX_Vpbroadcastw_VZ_k1z_WX, &[Op::VZ, Op::WX]).with_mem(MemorySize::UInt16)).k1z(),
    evex(M0F38, 0x90, P66, L128, W0, Template::new(Code::EVEX_Vpgatherdd_VX_k1_Vm32x, &[Op::VX, Op::VsibX]).with_mem(MemorySize::Int32)).k1_required(),
    evex(M0F38, 0x90, P66, L256, W0, Template::new(Code::EVEX_Vpgatherdd_VY_k1_Vm32y, &[Op::VY, Op::VsibY]).with_mem(MemorySize::Int32)).k1_required(),
    evex(M0F38, 0x90, P66, L512, W0, Template::new(Code::EVEX_Vpgatherdd_VZ_k1_Vm32z, &[Op::VZ, Op::VsibZ]).with_mem(MemorySize::Int32)).k1_required(),
    evex(M0F38, 0x90, P66, L128, W1, Template::new(Code::EVEX_Vpgatherdq_VX_k1_Vm32x, &[Op::VX, Op::VsibX]).with_mem(MemorySize::Int64)).k1_required(),
    evex(M0F38, 0x90, P66, L256, W1, Template::new(Code::EVEX_Vpgatherdq_VY_k1_Vm32x, &[Op::VY, Op::VsibX]).with_mem(MemorySize::Int64)).k1_required(),
    evex(M0F38, 0x90, P66, L512, W1, Template::new(Code::EVEX_Vpgatherdq_VZ_k1_Vm32y, &[Op::VZ, Op::VsibY]).with_mem(MemorySize::Int64)).k1_required(),
    evex(M0F38, 0x91, P66, L128, W0, Template::new(Code::EVEX_Vpgatherqd_VX_k1_Vm64x, &[Op::VX, Op::VsibX]).with_mem(MemorySize::Int32)).k1_required(),
    evex(M0F38, 0x91, P66, L256, W0, Template::new(Code::EVEX_Vpgatherqd_VX_k1_Vm64y, &[Op::VX, Op::VsibY]).with_mem(MemorySize::Int32)).k1_required(),
    evex(M0F38, 0x91, P66, L512, W0, Template::new(Code::EVEX_Vpgatherqd_VY_k1_Vm64z, &[Op::VY, Op::VsibZ]).with_mem(MemorySize::Int32)).k1_required(),
    evex(M0F38, 0x91, P66, L128, W1, Template::new(Code::EVEX_Vpgatherqq_VX_k1_Vm64x, &[Op::VX, Op::VsibX]).with_mem(MemorySize::Int64)).k1_required(),
    evex(M0F38, 0x91, P66, L256, W1, Template::new(Code::EVEX_Vpgatherqq_VY_k1_Vm64y, &[Op::VY, Op::VsibY]).with_mem(MemorySize::Int64)).k1_required(),
    evex(M0F38, 0x91, P66, L512, W1, Template::new(Code::EVEX_Vpgatherqq_VZ_k1_Vm64z, &[Op::VZ, Op::VsibZ]).with_mem(MemorySize::Int64)).k1_required(),
    evex(M0F38, 0x98, P66, L128, W0, Template::new(Code::EVEX_Vfmadd132ps_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float32))
        .bcst(MemorySize::Broadcast128_Float32).k1z(),
    evex(M0F38, 0x98, P66, L256, W0, Template::new(Code::EVEX_Vfmadd132ps_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float32))
        .bcst(MemorySize::Broadcast256_Float32).k1z(),
    evex(M0F38, 0x98, P66, L512, W0, Template::new(Code::EVEX_Vfmadd132ps_VZ_k1z_HZ_WZ_er_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Float32))
        .bcst(MemorySize::Broadcast512_Float32).er().k1z(),
    evex(M0F38, 0x98, P66, L128, W1, Template::new(Code::EVEX_Vfmadd132pd_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float64))
        .bcst(MemorySize::Broadcast128_Float64).k1z(),
    evex(M0F38, 0x98, P66, L256, W1, Template::new(Code::EVEX_Vfmadd132pd_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float64))
        .bcst(MemorySize::Broadcast256_Float64).k1z(),
    evex(M0F38, 0x98, P66, L512, W1, Template::new(Code::EVEX_Vfmadd132pd_VZ_k1z_HZ_WZ_er_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Float64))
        .bcst(MemorySize::Broadcast512_Float64).er().k1z(),
    evex(M0F38, 0x99, P66, Lig, W0, Template::new(Code::EVEX_Vfmadd132ss_VX_k1z_HX_WX_er, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Float32)).er().k1z(),
    evex(M0F38, 0x99, P66, Lig, W1, Template::new(Code::EVEX_Vfmadd132sd_VX_k1z_HX_WX_er, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Float64)).er().k1z(),
    evex(M0F38, 0xA0, P66, L128, W0, Template::new(Code::EVEX_Vpscatterdd_Vm32x_k1_VX, &[Op::VsibX, Op::VX]).with_mem(MemorySize::Int32)).k1_required(),
    evex(M0F38, 0xA0, P66, L256, W0, Template::new(Code::EVEX_Vpscatterdd_Vm32y_k1_VY, &[Op::VsibY, Op::VY]).with_mem(MemorySize::Int32)).k1_required(),
    evex(M0F38, 0xA0, P66, L512, W0, Template::new(Code::EVEX_Vpscatterdd_Vm32z_k1_VZ, &[Op::VsibZ, Op::VZ]).with_mem(MemorySize::Int32)).k1_required(),
    evex(M0F38, 0xA0, P66, L128, W1, Template::new(Code::EVEX_Vpscatterdq_Vm32x_k1_VX, &[Op::VsibX, Op::VX]).with_mem(MemorySize::Int64)).k1_required(),
    evex(M0F38, 0xA0, P66, L256, W1, Template::new(Code::EVEX_Vpscatterdq_Vm32x_k1_VY, &[Op::VsibX, Op::VY]).with_mem(MemorySize::Int64)).k1_required(),
    evex(M0F38, 0xA0, P66, L512, W1, Template::new(Code::EVEX_Vpscatterdq_Vm32y_k1_VZ, &[Op::VsibY, Op::VZ]).with_mem(MemorySize::Int64)).k1_required(),
    evex(M0F38, 0xA1, P66, L128, W0, Template::new(Code::EVEX_Vpscatterqd_Vm64x_k1_VX, &[Op::VsibX, Op::VX]).with_mem(MemorySize::Int32)).k1_required(),
    evex(M0F38, 0xA1, P66, L256, W0, Template::new(Code::EVEX_Vpscatterqd_Vm64y_k1_VX, &[Op::VsibY, Op::VX]).with_mem(MemorySize::Int32)).k1_required(),
    evex(M0F38, 0xA1, P66, L512, W0, Template::new(Code::EVEX_Vpscatterqd_Vm64z_k1_VY, &[Op::VsibZ, Op::VY]).with_mem(MemorySize::Int32)).k1_required(),
    evex(M0F38, 0xA1, P66, L128, W1, Template::new(Code::EVEX_Vpscatterqq_Vm64x_k1_VX, &[Op::VsibX, Op::VX]).with_mem(MemorySize::Int64)).k1_required(),
    evex(M0F38, 0xA1, P66, L256, W1, Template::new(Code::EVEX_Vpscatterqq_Vm64y_k1_VY, &[Op::VsibY, Op::VY]).with_mem(MemorySize::Int64)).k1_required(),
    evex(M0F38, 0xA1, P66, L512, W1, Template::new(Code::EVEX_Vpscatterqq_Vm64z_k1_VZ, &[Op::VsibZ, Op::VZ]).with_mem(MemorySize::Int64)).k1_required(),
    evex(M0F38, 0xA8, P66, L128, W0, Template::new(Code::EVEX_Vfmadd213ps_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float32))
        .bcst(MemorySize::Broadcast128_Float32).k1z(),
    evex(M0F38, 0xA8, P66, L256, W0, Template::new(Code::EVEX_Vfmadd213ps_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float32))
        .bcst(MemorySize::Broadcast256_Float32).k1z(),
    evex(M0F38, 0xA8, P66, L512, W0, Template::new(Code::EVEX_Vfmadd213ps_VZ_k1z_HZ_WZ_er_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Float32))
        .bcst(MemorySize::Broadcast512_Float32).er().k1z(),
    evex(M0F38, 0xA8, P66, L128, W1, Template::new(Code::EVEX_Vfmadd213pd_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float64))
        .bcst(MemorySize::Broadcast128_Float64).k1z(),
    evex(M0F38, 0xA8, P66, L256, W1, Template::new(Code::EVEX_Vfmadd213pd_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float64))
        .bcst(MemorySize::Broadcast256_Float64).k1z(),
    evex(M0F38, 0xA8, P66, L512, W1, Template::new(Code::EVEX_Vfmadd213pd_VZ_k1z_HZ_WZ_er_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Float64))
        .bcst(MemorySize::Broadcast512_Float64).er().k1z(),
    evex(M0F38, 0xA9, P66, Lig, W0, Template::new(Code::EVEX_Vfmadd213ss_VX_k1z_HX_WX_er, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Float32)).er().k1z(),
    evex(M0F38, 0xA9, P66, Lig, W1, Template::new(Code::EVEX_Vfmadd213sd_VX_k1z_HX_WX_er, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Float64)).er().k1z(),
    evex(M0F38, 0xB8, P66, L128, W0, Template::new(Code::EVEX_Vfmadd231ps_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float32))
        .bcst(MemorySize::Broadcast128_Float32).k1z(),
    evex(M0F38, 0xB8, P66, L256, W0, Template::new(Code::EVEX_Vfmadd231ps_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float32))
        .bcst(MemorySize::Broadcast256_Float32).k1z(),
    evex(M0F38, 0xB8, P66, L512, W0, Template::new(Code::EVEX_Vfmadd231ps_VZ_k1z_HZ_WZ_er_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Float32))
        .bcst(MemorySize::Broadcast512_Float32).er().k1z(),
    evex(M0F38, 0xB8, P66, L128, W1, Template::new(Code::EVEX_Vfmadd231pd_VX_k1z_HX_WX_b, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Packed128_Float64))
        .bcst(MemorySize::Broadcast128_Float64).k1z(),
    evex(M0F38, 0xB8, P66, L256, W1, Template::new(Code::EVEX_Vfmadd231pd_VY_k1z_HY_WY_b, &[Op::VY, Op::HY, Op::WY]).with_mem(MemorySize::Packed256_Float64))
        .bcst(MemorySize::Broadcast256_Float64).k1z(),
    evex(M0F38, 0xB8, P66, L512, W1, Template::new(Code::EVEX_Vfmadd231pd_VZ_k1z_HZ_WZ_er_b, &[Op::VZ, Op::HZ, Op::WZ]).with_mem(MemorySize::Packed512_Float64))
        .bcst(MemorySize::Broadcast512_Float64).er().k1z(),
    evex(M0F38, 0xB9, P66, Lig, W0, Template::new(Code::EVEX_Vfmadd231ss_VX_k1z_HX_WX_er, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Float32)).er().k1z(),
    evex(M0F38, 0xB9, P66, Lig, W1, Template::new(Code::EVEX_Vfmadd231sd_VX_k1z_HX_WX_er, &[Op::VX, Op::HX, Op::WX]).with_mem(MemorySize::Float64)).er().k1z(),

    // ---- 0F3A ----
    evex(M0F3A, 0x00, P66, L256, W1, Template::new(Code::EVEX_Vpermq_VY_k1z_WY_Ib_b, &[Op::VY, Op::WY, Op::Ib]).with_mem(MemorySize::Packed256_Int64))
        .bcst(MemorySize::Broadcast256_Int64).k1z(),
    evex(M0F3A, 0x00, P66, L512, W1, Template::new(Code::EVEX_Vpermq_VZ_k1z_WZ_Ib_b, &[Op::VZ, Op::WZ, Op::Ib]).with_mem(MemorySize::Packed512_Int64))
        .bcst(MemorySize::Broadcast512_Int64).k1z(),
    evex(M0F3A, 0x03, P66, L128, W0, Template::new(Code::EVEX_Valignd_VX_k1z_HX_WX_Ib_b, &[Op::VX, Op::HX, Op::WX, Op::Ib]).with_mem(MemorySize::Packed128_Int32))
        .bcst(MemorySize::Broadcast128_Int32).k1z(),
    evex(M0F3A, 0x03, P66, L256, W0, Template::new(Code::EVEX_Valignd_VY_k1z_HY_WY_Ib_b, &[Op::VY, Op::HY, Op::WY, Op::Ib]).with_mem(MemorySize::Packed256_Int32))
        .bcst(MemorySize::Broadcast256_Int32).k1z(),
    evex(M0F3A, 0x03, P66, L512, W0, Template::new(Code::EVEX_Valignd_VZ_k1z_HZ_WZ_Ib_b, &[Op::VZ, Op::HZ, Op::WZ, Op::Ib]).with_mem(MemorySize::Packed512_Int32))
        .bcst(MemorySize::Broadcast512_Int32).k1z(),
    evex(M0F3A, 0x03, P66, L128, W1, Template::new(Code::EVEX_Valignq_VX_k1z_HX_WX_Ib_b, &[Op::VX, Op::HX, Op::WX, Op::Ib]).with_mem(MemorySize::Packed128_Int64))
        .bcst(MemorySize::Broadcast128_Int64).k1z(),
    evex(M0F3A, 0x03, P66, L256, W1, Template::new(Code::EVEX_Valignq_VY_k1z_HY_WY_Ib_b, &[Op::VY, Op::HY, Op::WY, Op::Ib]).with_mem(MemorySize::Packed256_Int64))
        .bcst(MemorySize::Broadcast256_Int64).k1z(),
    evex(M0F3A, 0x03, P66, L512, W1, Template::new(Code::EVEX_Valignq_VZ_k1z_HZ_WZ_Ib_b, &[Op::VZ, Op::HZ, Op::WZ, Op::Ib]).with_mem(MemorySize::Packed512_Int64))
        .bcst(MemorySize::Broadcast512_Int64).k1z(),
    evex(M0F3A, 0x0F, P66, L128, Wig, Template::new(Code::EVEX_Vpalignr_VX_k1z_HX_WX_Ib, &[Op::VX, Op::HX, Op::WX, Op::Ib]).with_mem(MemorySize::Packed128_Int8)).k1z(),
    evex(M0F3A, 0x0F, P66, L256, Wig, Template::new(Code::EVEX_Vpalignr_VY_k1z_HY_WY_Ib, &[Op::VY, Op::HY, Op::WY, Op::Ib]).with_mem(MemorySize::Packed256_Int8)).k1z(),
    evex(M0F3A, 0x0F, P66, L512, Wig, Template::new(Code::EVEX_Vpalignr_VZ_k1z_HZ_WZ_Ib, &[Op::VZ, Op::HZ, Op::WZ, Op::Ib]).with_mem(MemorySize::Packed512_Int8)).k1z(),
    evex(M0F3A, 0x16, P66, L128, Wig, Template::sized([Code::EVEX_Vpextrd_Ed_VX_Ib, Code::EVEX_Vpextrd_Ed_VX_Ib, Code::EVEX_Vpextrq_Eq_VX_Ib], &[Op::Ey, Op::VX, Op::Ib])
            .with_mem_sized([MemorySize::UInt32, MemorySize::UInt32, MemorySize::UInt64])),
    evex(M0F3A, 0x18, P66, L256, W0, Template::new(Code::EVEX_Vinsertf32x4_VY_k1z_HY_WX_Ib, &[Op::VY, Op::HY, Op::WX, Op::Ib]).with_mem(MemorySize::Packed128_Float32)).k1z(),
    evex(M0F3A, 0x18, P66, L512, W0, Template::new(Code::EVEX_Vinsertf32x4_VZ_k1z_HZ_WX_Ib, &[Op::VZ, Op::HZ, Op::WX, Op::Ib]).with_mem(MemorySize::Packed128_Float32)).k1z(),
    evex(M0F3A, 0x18, P66, L256, W1, Template::new(Code::EVEX_Vinsertf64x2_VY_k1z_HY_WX_Ib, &[Op::VY, Op::HY, Op::WX, Op::Ib]).with_mem(MemorySize::Packed128_Float64)).k1z(),
    evex(M0F3A, 0x18, P66, L512, W1, Template::new(Code::EVEX_Vinsertf64x2_VZ_k1z_HZ_WX_Ib, &[Op::VZ, Op::HZ, Op::WX, Op::Ib]).with_mem(MemorySize::Packed128_Float64)).k1z(),
    evex(M0F3A, 0x19, P66, L256, W0, Template::new(Code::EVEX_Vextractf32x4_WX_k1z_VY_Ib, &[Op::WX, Op::VY, Op::Ib]).with_mem(MemorySize::Packed128_Float32)).k1z(),
    evex(M0F3A, 0x19, P66, L512, W0, Template::new(Code::EVEX_Vextractf32x4_WX_k1z_VZ_Ib, &[Op::WX, Op::VZ, Op::Ib]).with_mem(MemorySize::Packed128_Float32)).k1z(),
    evex(M0F3A, 0x19, P66, L256, W1, Template::new(Code::EVEX_Vextractf64x2_WX_k1z_VY_Ib, &[Op::WX, Op::VY, Op::Ib]).with_mem(MemorySize::Packed128_Float64)).k1z(),
    evex(M0F3A, 0x19, P66, L512, W1, Template::new(Code::EVEX_Vextractf64x2_WX_k1z_VZ_Ib, &[Op::WX, Op::VZ, Op::Ib]).with_mem(MemorySize::Packed128_Float64)).k1z(),
    evex(M0F3A, 0x20, P66, L128, Wig, Template::sized([Code::EVEX_Vpinsrb_VX_HX_RdMb_Ib, Code::EVEX_Vpinsrb_VX_HX_RdMb_Ib, Code::EVEX_Vpinsrb_VX_HX_RqMb_Ib], &[Op::VX, Op::HX, Op::Ey, Op::Ib]).with_mem(MemorySize::UInt8)),
    evex(M0F3A, 0x25, P66, L128, W0, Template::new(Code::EVEX_Vpternlogd_VX_k1z_HX_WX_Ib_b, &[Op::VX, Op::HX, Op::WX, Op::Ib]).with_mem(MemorySize::Packed128_Int32))
        .bcst(MemorySize::Broadcast128_Int32).k1z(),
    evex(M0F3A, 0x25, P66, L256, W0, Template::new(Code::EVEX_Vpternlogd_VY_k1z_HY_WY_Ib_b, &[Op::VY, Op::HY, Op::WY, Op::Ib]).with_mem(MemorySize::Packed256_Int32))
        .bcst(MemorySize::Broadcast256_Int32).k1z(),
    evex(M0F3A, 0x25, P66, L512, W0, Template::new(Code::EVEX_Vpternlogd_VZ_k1z_HZ_WZ_Ib_b, &[Op::VZ, Op::HZ, Op::WZ, Op::Ib]).with_mem(MemorySize::Packed512_Int32))
        .bcst(MemorySize::Broadcast512_Int32).k1z(),
    evex(M0F3A, 0x25, P66, L128, W1, Template::new(Code::EVEX_Vpternlogq_VX_k1z_HX_WX_Ib_b, &[Op::VX, Op::HX, Op::WX, Op::Ib]).with_mem(MemorySize::Packed128_Int64))
        .bcst(MemorySize::Broadcast128_Int64).k1z(),
    evex(M0F3A, 0x25, P66, L256, W1, Template::new(Code::EVEX_Vpternlogq_VY_k1z_HY_WY_Ib_b, &[Op::VY, Op::HY, Op::WY, Op::Ib]).with_mem(MemorySize::Packed256_Int64))
        .bcst(MemorySize::Broadcast256_Int64).k1z(),
    evex(M0F3A, 0x25, P66, L512, W1, Template::new(Code::EVEX_Vpternlogq_VZ_k1z_HZ_WZ_Ib_b, &[Op::VZ, Op::HZ, Op::WZ, Op::Ib]).with_mem(MemorySize::Packed512_Int64))
        .bcst(MemorySize::Broadcast512_Int64).k1z(),
];
