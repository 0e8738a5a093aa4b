//! Decoding tests for VEX and EVEX encoded instructions.

use decant_disasm::{
    Bitness, Code, DecodeError, Decoder, EncodingKind, Instruction, MemorySize, OpKind, Register, RoundingControl,
};

fn decode(bitness: Bitness, bytes: &[u8]) -> Instruction {
    Decoder::new(bitness, bytes, 0).decode()
}

fn try_decode(bitness: Bitness, bytes: &[u8]) -> Result<Instruction, DecodeError> {
    Decoder::new(bitness, bytes, 0).try_decode()
}

fn registers(instr: &Instruction) -> Vec<Register> {
    (0..instr.op_count()).map(|n| instr.op_register(n)).collect()
}

// =============================================================================
// VEX
// =============================================================================

#[test]
fn test_vex2_vaddps() {
    for bitness in [Bitness::Bits32, Bitness::Bits64] {
        let instr = decode(bitness, &[0xC5, 0xF8, 0x58, 0xC2]);
        assert_eq!(instr.code(), Code::VEX_Vaddps_VX_HX_WX);
        assert_eq!(instr.encoding(), EncodingKind::Vex);
        assert_eq!(instr.len(), 4);
        assert_eq!(registers(&instr), [Register::XMM0, Register::XMM0, Register::XMM2]);
    }

    // L=1 and vvvv=1 (inverted 1110)
    let instr = decode(Bitness::Bits64, &[0xC5, 0xF4, 0x58, 0xC2]);
    assert_eq!(instr.code(), Code::VEX_Vaddps_VY_HY_WY);
    assert_eq!(registers(&instr), [Register::YMM0, Register::YMM1, Register::YMM2]);
}

#[test]
fn test_vex_memory_operand() {
    // vaddps ymm0, ymm0, [rax+0x20]
    let instr = decode(Bitness::Bits64, &[0xC5, 0xFC, 0x58, 0x40, 0x20]);
    assert_eq!(instr.code(), Code::VEX_Vaddps_VY_HY_WY);
    assert_eq!(instr.op_kind(2), OpKind::Memory);
    assert_eq!(instr.memory_base(), Register::RAX);
    assert_eq!(instr.memory_size(), MemorySize::Packed256_Float32);
    // VEX never scales disp8
    assert_eq!(instr.memory_displacement64(), 0x20);
}

#[test]
fn test_vex3_w_and_map() {
    // vpermq ymm0, ymm1, 0x1b
    let instr = decode(Bitness::Bits64, &[0xC4, 0xE3, 0xFD, 0x00, 0xC1, 0x1B]);
    assert_eq!(instr.code(), Code::VEX_Vpermq_VY_WY_Ib);
    assert_eq!(instr.len(), 6);
    assert_eq!(instr.op_register(0), Register::YMM0);
    assert_eq!(instr.op_register(1), Register::YMM1);
    assert_eq!(instr.immediate8(), 0x1B);

    // W=0 has no form
    assert!(decode(Bitness::Bits64, &[0xC4, 0xE3, 0x7D, 0x00, 0xC1, 0x1B]).is_invalid());
}

#[test]
fn test_vex3_extension_bits() {
    // vaddps xmm8, xmm0, xmm9: R and B cleared in the inverted byte
    let instr = decode(Bitness::Bits64, &[0xC4, 0x41, 0x78, 0x58, 0xC1]);
    assert_eq!(registers(&instr), [Register::XMM8, Register::XMM0, Register::XMM9]);
}

#[test]
fn test_vex_general_purpose_forms() {
    // andn rax, rcx, rbx
    let instr = decode(Bitness::Bits64, &[0xC4, 0xE2, 0xF0, 0xF2, 0xC3]);
    assert_eq!(instr.code(), Code::VEX_Andn_Gq_Hq_Eq);
    assert_eq!(registers(&instr), [Register::RAX, Register::RCX, Register::RBX]);

    // W is ignored outside 64-bit mode
    let instr = decode(Bitness::Bits32, &[0xC4, 0xE2, 0xF0, 0xF2, 0xC3]);
    assert_eq!(instr.code(), Code::VEX_Andn_Gd_Hd_Ed);
    assert_eq!(registers(&instr), [Register::EAX, Register::ECX, Register::EBX]);
}

#[test]
fn test_vex_opmask_forms() {
    // kmovw k1, eax
    let instr = decode(Bitness::Bits64, &[0xC5, 0xF8, 0x92, 0xC8]);
    assert_eq!(instr.code(), Code::VEX_Kmovw_VK_Rd);
    assert_eq!(registers(&instr), [Register::K1, Register::EAX]);
}

#[test]
fn test_vex_without_modrm() {
    assert_eq!(decode(Bitness::Bits64, &[0xC5, 0xF8, 0x77]).code(), Code::VEX_Vzeroupper);
    assert_eq!(decode(Bitness::Bits64, &[0xC5, 0xFC, 0x77]).code(), Code::VEX_Vzeroall);
    // A template that does not read vvvv rejects a non-zero one
    assert_eq!(
        try_decode(Bitness::Bits64, &[0xC5, 0xF0, 0x77]),
        Err(DecodeError::invalid("vvvv must be 1111b"))
    );
}

// =============================================================================
// EVEX
// =============================================================================

#[test]
fn test_evex_vpmovsxbw_in_16bit_mode() {
    let instr = decode(Bitness::Bits16, &[0x62, 0xF2, 0x7D, 0x8B, 0x20, 0x50, 0x01]);
    assert_eq!(instr.code(), Code::EVEX_Vpmovsxbw_VX_k1z_WX);
    assert_eq!(instr.encoding(), EncodingKind::Evex);
    assert_eq!(instr.len(), 7);
    assert_eq!(instr.op_count(), 2);
    assert_eq!(instr.op_register(0), Register::XMM2);
    assert_eq!(instr.op_kind(1), OpKind::Memory);
    assert_eq!(instr.memory_segment(), Register::DS);
    assert_eq!(instr.memory_base(), Register::BX);
    assert_eq!(instr.memory_index(), Register::SI);
    assert_eq!(instr.memory_size(), MemorySize::Packed64_Int8);
    // disp8 of 1 scaled by the 8-byte memory operand
    assert_eq!(instr.memory_displacement(), 8);
    assert_eq!(instr.memory_displ_size(), 1);
    assert_eq!(instr.op_mask(), Register::K3);
    assert!(instr.zeroing_masking());
    assert!(!instr.is_broadcast());
}

#[test]
fn test_evex_vector_lengths() {
    let cases: [(u8, Code, Register); 3] = [
        (0x08, Code::EVEX_Vaddps_VX_k1z_HX_WX_b, Register::XMM2),
        (0x28, Code::EVEX_Vaddps_VY_k1z_HY_WY_b, Register::YMM2),
        (0x48, Code::EVEX_Vaddps_VZ_k1z_HZ_WZ_er_b, Register::ZMM2),
    ];
    for (p2, code, rm) in cases {
        let instr = decode(Bitness::Bits64, &[0x62, 0xF1, 0x7C, p2, 0x58, 0xC2]);
        assert_eq!(instr.code(), code);
        assert_eq!(instr.op_register(2), rm);
        assert_eq!(instr.rounding_control(), RoundingControl::None);
        assert_eq!(instr.op_mask(), Register::None);
    }
}

#[test]
fn test_evex_high_registers() {
    // R and R' select xmm24 for ModRM.reg
    let instr = decode(Bitness::Bits64, &[0x62, 0x61, 0x7C, 0x08, 0x58, 0xC2]);
    assert_eq!(registers(&instr), [Register::XMM24, Register::XMM0, Register::XMM2]);

    // V' selects xmm16 for vvvv
    let instr = decode(Bitness::Bits64, &[0x62, 0xF1, 0x7C, 0x00, 0x58, 0xC2]);
    assert_eq!(registers(&instr), [Register::XMM0, Register::XMM16, Register::XMM2]);

    // X selects xmm18 for a register ModRM.rm
    let instr = decode(Bitness::Bits64, &[0x62, 0xB1, 0x7C, 0x08, 0x58, 0xC2]);
    assert_eq!(registers(&instr), [Register::XMM0, Register::XMM0, Register::XMM18]);
}

#[test]
fn test_evex_b_on_register_is_rounding() {
    let modes = [
        (0x18, RoundingControl::RoundToNearest),
        (0x38, RoundingControl::RoundDown),
        (0x58, RoundingControl::RoundUp),
        (0x78, RoundingControl::RoundTowardZero),
    ];
    for (p2, rc) in modes {
        let instr = decode(Bitness::Bits64, &[0x62, 0xF1, 0x7C, p2, 0x58, 0xC2]);
        // L'L is the rounding mode, so the form is the 512-bit one
        assert_eq!(instr.code(), Code::EVEX_Vaddps_VZ_k1z_HZ_WZ_er_b);
        assert_eq!(instr.rounding_control(), rc);
        assert!(!instr.is_broadcast());
        assert_eq!(instr.op_register(0), Register::ZMM0);
    }
}

#[test]
fn test_evex_b_on_memory_is_broadcast() {
    // vaddps zmm0, zmm0, dword bcst [rax+4]
    let instr = decode(Bitness::Bits64, &[0x62, 0xF1, 0x7C, 0x58, 0x58, 0x40, 0x01]);
    assert_eq!(instr.code(), Code::EVEX_Vaddps_VZ_k1z_HZ_WZ_er_b);
    assert!(instr.is_broadcast());
    assert_eq!(instr.rounding_control(), RoundingControl::None);
    assert_eq!(instr.memory_size(), MemorySize::Broadcast512_Float32);
    // disp8 scales by the element size
    assert_eq!(instr.memory_displacement64(), 4);
}

#[test]
fn test_evex_full_vector_disp8() {
    // vaddps zmm0, zmm0, [rax+0x40]
    let instr = decode(Bitness::Bits64, &[0x62, 0xF1, 0x7C, 0x48, 0x58, 0x40, 0x01]);
    assert!(!instr.is_broadcast());
    assert_eq!(instr.memory_size(), MemorySize::Packed512_Float32);
    assert_eq!(instr.memory_displacement64(), 0x40);

    // Negative disp8 stays negative after scaling
    let instr = decode(Bitness::Bits64, &[0x62, 0xF1, 0x7C, 0x48, 0x58, 0x40, 0xFF]);
    assert_eq!(instr.memory_displacement64(), (-64i64) as u64);

    // disp32 is never scaled
    let instr = decode(Bitness::Bits64, &[0x62, 0xF1, 0x7C, 0x48, 0x58, 0x80, 0x01, 0x00, 0x00, 0x00]);
    assert_eq!(instr.memory_displacement64(), 1);
    assert_eq!(instr.memory_displ_size(), 4);
}

#[test]
fn test_evex_sae() {
    // vucomiss xmm0, xmm1, {sae}
    let instr = decode(Bitness::Bits64, &[0x62, 0xF1, 0x7C, 0x18, 0x2E, 0xC1]);
    assert_eq!(instr.code(), Code::EVEX_Vucomiss_VX_WX_sae);
    assert!(instr.suppress_all_exceptions());
    assert_eq!(instr.rounding_control(), RoundingControl::None);
}

#[test]
fn test_evex_merging_mask() {
    let instr = decode(Bitness::Bits64, &[0x62, 0xF1, 0x7C, 0x4F, 0x10, 0xC1]);
    assert_eq!(instr.code(), Code::EVEX_Vmovups_VZ_k1z_WZ);
    assert_eq!(instr.op_mask(), Register::K7);
    assert!(instr.merging_masking());
    assert!(!instr.zeroing_masking());
}

#[test]
fn test_evex_rejections() {
    let cases: [(&[u8], &str); 6] = [
        // z=1 with k0
        (&[0x62, 0xF1, 0x7C, 0x88, 0x58, 0xC2], "zeroing-masking without an opmask"),
        // zeroing on a store
        (&[0x62, 0xF1, 0x7C, 0x89, 0x11, 0x00], "zeroing-masking on a memory destination"),
        // b on a memory form without a broadcast size
        (&[0x62, 0xF1, 0x7C, 0x18, 0x10, 0x00], "broadcast not supported"),
        // b on a register form without rounding or sae
        (&[0x62, 0xF2, 0x7D, 0x18, 0x20, 0xC1], "EVEX.b on a register operand"),
        // P0 bits 2..3 must be zero
        (&[0x62, 0xFD, 0x7C, 0x08, 0x58, 0xC2], "EVEX.P0 reserved bits set"),
        // P1 bit 2 must be one
        (&[0x62, 0xF1, 0x78, 0x08, 0x58, 0xC2], "EVEX.P1 fixed bit clear"),
    ];
    for (bytes, reason) in cases {
        assert_eq!(try_decode(Bitness::Bits64, bytes), Err(DecodeError::invalid(reason)), "{bytes:02X?}");
    }
}

#[test]
fn test_prefix_before_vector_encoding() {
    assert_eq!(
        try_decode(Bitness::Bits64, &[0x66, 0x62, 0xF1, 0x7C, 0x08, 0x58, 0xC2]),
        Err(DecodeError::invalid("66/F2/F3 prefix before VEX/EVEX"))
    );
    assert_eq!(
        try_decode(Bitness::Bits64, &[0x40, 0xC5, 0xF8, 0x58, 0xC2]),
        Err(DecodeError::invalid("REX prefix before VEX/EVEX"))
    );
    // A segment override is fine
    let instr = decode(Bitness::Bits64, &[0x2E, 0xC5, 0xF8, 0x58, 0x00]);
    assert_eq!(instr.code(), Code::VEX_Vaddps_VX_HX_WX);
}

#[test]
fn test_evex_outside_long_mode() {
    // 62 with a register-looking second byte is EVEX even in 32-bit mode
    let instr = decode(Bitness::Bits32, &[0x62, 0xF1, 0x7C, 0x08, 0x58, 0xC2]);
    assert_eq!(instr.code(), Code::EVEX_Vaddps_VX_k1z_HX_WX_b);
    assert_eq!(registers(&instr), [Register::XMM0, Register::XMM0, Register::XMM2]);
}

#[test]
fn test_memory_forms_agree_across_bitness() {
    let forms: [&[u8]; 2] = [&[0x66, 0x0F, 0x38, 0x20, 0x08], &[0x62, 0xF2, 0x7D, 0x8B, 0x20, 0x50, 0x01]];
    let addressing = [
        (Bitness::Bits16, Register::BX, Register::SI),
        (Bitness::Bits32, Register::EAX, Register::None),
        (Bitness::Bits64, Register::RAX, Register::None),
    ];
    for bytes in forms {
        let reference = decode(Bitness::Bits16, bytes);
        assert!(!reference.is_invalid(), "{bytes:02X?}");
        for (bitness, base, index) in addressing {
            let instr = decode(bitness, bytes);
            assert_eq!(instr.code(), reference.code(), "{bitness:?} {bytes:02X?}");
            assert_eq!(instr.len(), bytes.len());
            assert_eq!(instr.op_count(), reference.op_count());
            assert_eq!(instr.op_kinds(), reference.op_kinds());
            assert_eq!(instr.memory_size(), reference.memory_size());
            assert_eq!(instr.memory_displacement(), reference.memory_displacement());
            assert_eq!(instr.memory_base(), base);
            assert_eq!(instr.memory_index(), index);
        }
    }
}

// =============================================================================
// Integer, broadcast, FMA and ternary-logic forms
// =============================================================================

#[test]
fn test_vex_integer_compare() {
    for bitness in [Bitness::Bits32, Bitness::Bits64] {
        let instr = decode(bitness, &[0xC5, 0xF9, 0x74, 0xC1]);
        assert_eq!(instr.code(), Code::VEX_Vpcmpeqb_VX_HX_WX);
        assert_eq!(registers(&instr), [Register::XMM0, Register::XMM0, Register::XMM1]);
    }
    let instr = decode(Bitness::Bits64, &[0xC5, 0xFD, 0x66, 0x00]);
    assert_eq!(instr.code(), Code::VEX_Vpcmpgtd_VY_HY_WY);
    assert_eq!(instr.memory_size(), MemorySize::Packed256_Int32);
}

#[test]
fn test_broadcast_from_element() {
    let instr = decode(Bitness::Bits64, &[0xC4, 0xE2, 0x79, 0x58, 0x00]);
    assert_eq!(instr.code(), Code::VEX_Vpbroadcastd_VX_WX);
    assert_eq!(instr.memory_size(), MemorySize::UInt32);

    let instr = decode(Bitness::Bits64, &[0xC4, 0xE2, 0x7D, 0x58, 0xC1]);
    assert_eq!(instr.code(), Code::VEX_Vpbroadcastd_VY_WX);
    assert_eq!(registers(&instr), [Register::YMM0, Register::XMM1]);

    let instr = decode(Bitness::Bits64, &[0x62, 0xF2, 0x7D, 0x48, 0x58, 0xC1]);
    assert_eq!(instr.code(), Code::EVEX_Vpbroadcastd_VZ_k1z_WX);
    assert_eq!(registers(&instr), [Register::ZMM0, Register::XMM1]);
}

#[test]
fn test_fused_multiply_add() {
    let instr = decode(Bitness::Bits64, &[0xC4, 0xE2, 0x71, 0xB8, 0xC2]);
    assert_eq!(instr.code(), Code::VEX_Vfmadd231ps_VX_HX_WX);
    assert_eq!(registers(&instr), [Register::XMM0, Register::XMM1, Register::XMM2]);

    // W selects the double-precision form
    let instr = decode(Bitness::Bits64, &[0xC4, 0xE2, 0xF1, 0xB8, 0xC2]);
    assert_eq!(instr.code(), Code::VEX_Vfmadd231pd_VX_HX_WX);

    // Scalar form with static rounding
    let instr = decode(Bitness::Bits64, &[0x62, 0xF2, 0x75, 0x38, 0xB9, 0xC2]);
    assert_eq!(instr.code(), Code::EVEX_Vfmadd231ss_VX_k1z_HX_WX_er);
    assert_eq!(instr.rounding_control(), RoundingControl::RoundDown);
}

#[test]
fn test_evex_ternary_logic_and_compare_into_mask() {
    let instr = decode(Bitness::Bits64, &[0x62, 0xF3, 0x7D, 0x08, 0x25, 0xC1, 0xFF]);
    assert_eq!(instr.code(), Code::EVEX_Vpternlogd_VX_k1z_HX_WX_Ib_b);
    assert_eq!(registers(&instr)[..3], [Register::XMM0, Register::XMM0, Register::XMM1]);
    assert_eq!(instr.immediate8(), 0xFF);
    assert_eq!(instr.len(), 7);

    let instr = decode(Bitness::Bits64, &[0x62, 0xF3, 0xFD, 0x48, 0x25, 0xC1, 0x96]);
    assert_eq!(instr.code(), Code::EVEX_Vpternlogq_VZ_k1z_HZ_WZ_Ib_b);

    let instr = decode(Bitness::Bits64, &[0x62, 0xF1, 0x7D, 0x08, 0x76, 0xC9]);
    assert_eq!(instr.code(), Code::EVEX_Vpcmpeqd_VK_k1_HX_WX_b);
    assert_eq!(registers(&instr), [Register::K1, Register::XMM0, Register::XMM1]);
}

#[test]
fn test_evex_qword_moves_use_qword_elements() {
    let instr = decode(Bitness::Bits64, &[0x62, 0xF1, 0xFD, 0x48, 0x6F, 0x00]);
    assert_eq!(instr.code(), Code::EVEX_Vmovdqa64_VZ_k1z_WZ);
    assert_eq!(instr.memory_size(), MemorySize::Packed512_Int64);
}

// =============================================================================
// VSIB gathers and scatters
// =============================================================================

#[test]
fn test_vex_gather() {
    // vpgatherdd xmm0, [rax+xmm1*4], xmm2
    let instr = decode(Bitness::Bits64, &[0xC4, 0xE2, 0x69, 0x90, 0x04, 0x88]);
    assert_eq!(instr.code(), Code::VEX_Vpgatherdd_VX_Vm32x_HX);
    assert_eq!(instr.op_kinds()[..3], [OpKind::Register, OpKind::Memory, OpKind::Register]);
    assert_eq!(instr.op_register(0), Register::XMM0);
    assert_eq!(instr.op_register(2), Register::XMM2);
    assert_eq!(instr.memory_base(), Register::RAX);
    assert_eq!(instr.memory_index(), Register::XMM1);
    assert_eq!(instr.memory_index_scale(), 4);
    assert_eq!(instr.memory_size(), MemorySize::Int32);

    // L=1 widens the index with the destination
    let instr = decode(Bitness::Bits64, &[0xC4, 0xE2, 0x6D, 0x90, 0x04, 0x88]);
    assert_eq!(instr.code(), Code::VEX_Vpgatherdd_VY_Vm32y_HY);
    assert_eq!(instr.memory_index(), Register::YMM1);

    // qword indices with dword elements keep an xmm destination
    let instr = decode(Bitness::Bits64, &[0xC4, 0xE2, 0x6D, 0x91, 0x04, 0x88]);
    assert_eq!(instr.code(), Code::VEX_Vpgatherqd_VX_Vm64y_HX);
    assert_eq!(instr.op_register(0), Register::XMM0);
    assert_eq!(instr.memory_index(), Register::YMM1);

    // The SIB index field has no "none" value: index 4 is xmm4
    let instr = decode(Bitness::Bits64, &[0xC4, 0xE2, 0x69, 0x92, 0x04, 0x20]);
    assert_eq!(instr.code(), Code::VEX_Vgatherdps_VX_Vm32x_HX);
    assert_eq!(instr.memory_index(), Register::XMM4);
    assert_eq!(instr.memory_index_scale(), 1);
}

#[test]
fn test_vex_gather_rejections() {
    let cases: [(&[u8], &str); 3] = [
        // index xmm0 is also the destination
        (&[0xC4, 0xE2, 0x69, 0x90, 0x04, 0x80], "VSIB gather registers overlap"),
        // mask xmm0 is also the destination
        (&[0xC4, 0xE2, 0x79, 0x90, 0x04, 0x88], "VSIB gather registers overlap"),
        (&[0xC4, 0xE2, 0x69, 0x90, 0x00], "VSIB needs a SIB byte"),
    ];
    for (bytes, reason) in cases {
        assert_eq!(try_decode(Bitness::Bits64, bytes), Err(DecodeError::invalid(reason)), "{bytes:02X?}");
    }
    // No register form
    assert!(decode(Bitness::Bits64, &[0xC4, 0xE2, 0x69, 0x90, 0xC1]).is_invalid());
}

#[test]
fn test_gather_address_size() {
    let bytes = [0xC4, 0xE2, 0x69, 0x90, 0x04, 0x88];
    assert_eq!(
        try_decode(Bitness::Bits16, &bytes),
        Err(DecodeError::invalid("VSIB needs 32- or 64-bit addressing"))
    );
    // 67 switches 16-bit code to 32-bit addressing
    let instr = decode(Bitness::Bits16, &[0x67, 0xC4, 0xE2, 0x69, 0x90, 0x04, 0x88]);
    assert_eq!(instr.code(), Code::VEX_Vpgatherdd_VX_Vm32x_HX);
    assert_eq!(instr.memory_base(), Register::EAX);
    assert_eq!(instr.memory_index(), Register::XMM1);

    let instr = decode(Bitness::Bits32, &bytes);
    assert_eq!(instr.memory_base(), Register::EAX);
    assert_eq!(instr.memory_index(), Register::XMM1);
}

#[test]
fn test_evex_gather() {
    // vpgatherdd xmm0{k1}, [rax+xmm1*4]
    let instr = decode(Bitness::Bits64, &[0x62, 0xF2, 0x7D, 0x09, 0x90, 0x04, 0x88]);
    assert_eq!(instr.code(), Code::EVEX_Vpgatherdd_VX_k1_Vm32x);
    assert_eq!(instr.op_count(), 2);
    assert_eq!(instr.op_mask(), Register::K1);
    assert_eq!(instr.memory_index(), Register::XMM1);
    assert_eq!(instr.memory_size(), MemorySize::Int32);

    // V' is the fifth index bit
    let instr = decode(Bitness::Bits64, &[0x62, 0xF2, 0x7D, 0x01, 0x90, 0x04, 0x88]);
    assert_eq!(instr.memory_index(), Register::XMM17);

    // disp8 scales by the element size
    let instr = decode(Bitness::Bits64, &[0x62, 0xF2, 0x7D, 0x09, 0x90, 0x44, 0x88, 0x01]);
    assert_eq!(instr.memory_displacement64(), 4);

    // dword indices, qword elements: zmm destination with a ymm index
    let instr = decode(Bitness::Bits64, &[0x62, 0xF2, 0xFD, 0x49, 0x90, 0x04, 0x88]);
    assert_eq!(instr.code(), Code::EVEX_Vpgatherdq_VZ_k1_Vm32y);
    assert_eq!(instr.op_register(0), Register::ZMM0);
    assert_eq!(instr.memory_index(), Register::YMM1);
}

#[test]
fn test_evex_scatter() {
    // vpscatterdd [rax+xmm1*4]{k1}, xmm0
    let instr = decode(Bitness::Bits64, &[0x62, 0xF2, 0x7D, 0x09, 0xA0, 0x04, 0x88]);
    assert_eq!(instr.code(), Code::EVEX_Vpscatterdd_Vm32x_k1_VX);
    assert_eq!(instr.op_kind(0), OpKind::Memory);
    assert_eq!(instr.op_register(1), Register::XMM0);
    // A scatter may store the index register itself
    let instr = decode(Bitness::Bits64, &[0x62, 0xF2, 0x7D, 0x09, 0xA0, 0x04, 0x80]);
    assert_eq!(instr.code(), Code::EVEX_Vpscatterdd_Vm32x_k1_VX);
}

#[test]
fn test_evex_gather_rejections() {
    let cases: [(&[u8], &str); 3] = [
        // k0 cannot be the gather mask
        (&[0x62, 0xF2, 0x7D, 0x08, 0x90, 0x04, 0x88], "opmask required"),
        (&[0x62, 0xF2, 0x7D, 0x89, 0x90, 0x04, 0x88], "zeroing-masking not allowed"),
        (&[0x62, 0xF2, 0x7D, 0x09, 0x90, 0x04, 0x80], "VSIB gather registers overlap"),
    ];
    for (bytes, reason) in cases {
        assert_eq!(try_decode(Bitness::Bits64, bytes), Err(DecodeError::invalid(reason)), "{bytes:02X?}");
    }
}
