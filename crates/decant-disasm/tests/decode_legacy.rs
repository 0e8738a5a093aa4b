//! Decoding tests for legacy and REX encoded instructions.

use decant_disasm::{Bitness, Code, Decoder, EncodingKind, Instruction, MemorySize, OpKind, Register};

fn decode(bitness: Bitness, bytes: &[u8]) -> Instruction {
    Decoder::new(bitness, bytes, 0x1000).decode()
}

fn decode_all(bitness: Bitness, bytes: &[u8]) -> Vec<Code> {
    Decoder::new(bitness, bytes, 0).map(|i| i.code()).collect()
}

// =============================================================================
// Mandatory prefixes
// =============================================================================

#[test]
fn test_pmovsxbw_in_16bit_mode() {
    let instr = decode(Bitness::Bits16, &[0x66, 0x0F, 0x38, 0x20, 0x08]);
    assert_eq!(instr.code(), Code::Pmovsxbw_VX_WX);
    assert_eq!(instr.encoding(), EncodingKind::Legacy);
    assert_eq!(instr.len(), 5);
    assert_eq!(instr.op_count(), 2);
    assert_eq!(instr.op_kind(0), OpKind::Register);
    assert_eq!(instr.op_register(0), Register::XMM1);
    assert_eq!(instr.op_kind(1), OpKind::Memory);
    assert_eq!(instr.memory_segment(), Register::DS);
    assert_eq!(instr.memory_base(), Register::BX);
    assert_eq!(instr.memory_index(), Register::SI);
    assert_eq!(instr.memory_size(), MemorySize::Packed64_Int8);
    assert_eq!(instr.memory_displacement(), 0);
    assert_eq!(instr.memory_displ_size(), 0);
    // The 66 was consumed as the mandatory prefix
    assert_eq!(instr.segment_prefix(), Register::None);
}

#[test]
fn test_mandatory_prefix_variants() {
    assert_eq!(decode(Bitness::Bits64, &[0x0F, 0xFE, 0xC1]).code(), Code::Paddd_P_Q);
    let sse = decode(Bitness::Bits64, &[0x66, 0x0F, 0xFE, 0xC1]);
    assert_eq!(sse.code(), Code::Paddd_VX_WX);
    assert_eq!(sse.op_register(0), Register::XMM0);
    assert_eq!(sse.op_register(1), Register::XMM1);

    let mmx = decode(Bitness::Bits64, &[0x0F, 0xFE, 0xC1]);
    assert_eq!(mmx.op_register(0), Register::MM0);
    assert_eq!(mmx.op_register(1), Register::MM1);

    // REX.R and REX.B reach xmm8..xmm15
    let high = decode(Bitness::Bits64, &[0x66, 0x45, 0x0F, 0x6F, 0xC1]);
    assert_eq!(high.code(), Code::Movdqa_VX_WX);
    assert_eq!(high.op_register(0), Register::XMM8);
    assert_eq!(high.op_register(1), Register::XMM9);
}

#[test]
fn test_f3_selects_alternate_form() {
    assert_eq!(decode(Bitness::Bits32, &[0x0F, 0xBC, 0xC1]).code(), Code::Bsf_Gd_Ed);
    let tzcnt = decode(Bitness::Bits32, &[0xF3, 0x0F, 0xBC, 0xC1]);
    assert_eq!(tzcnt.code(), Code::Tzcnt_Gd_Ed);
    assert!(!tzcnt.has_repe_prefix());
    assert_eq!(decode(Bitness::Bits32, &[0xF3, 0x0F, 0xB8, 0xC1]).code(), Code::Popcnt_Gd_Ed);
}

#[test]
fn test_three_byte_map_with_immediate() {
    // palignr xmm1, [rax+0x10], 4
    let instr = decode(Bitness::Bits64, &[0x66, 0x0F, 0x3A, 0x0F, 0x48, 0x10, 0x04]);
    assert_eq!(instr.code(), Code::Palignr_VX_WX_Ib);
    assert_eq!(instr.len(), 7);
    assert_eq!(instr.op_count(), 3);
    assert_eq!(instr.memory_base(), Register::RAX);
    assert_eq!(instr.memory_displacement64(), 0x10);
    assert_eq!(instr.op_kind(2), OpKind::Immediate8);
    assert_eq!(instr.immediate8(), 4);
}

// =============================================================================
// General purpose instructions
// =============================================================================

#[test]
fn test_function_prologue() {
    // push rbp; mov rbp, rsp; sub rsp, 0x20; leave; ret
    let bytes = [0x55, 0x48, 0x89, 0xE5, 0x48, 0x83, 0xEC, 0x20, 0xC9, 0xC3];
    let mut decoder = Decoder::new(Bitness::Bits64, &bytes, 0x40_1000);

    let push = decoder.decode();
    assert_eq!(push.code(), Code::Push_RBP);
    assert_eq!(push.op_register(0), Register::RBP);

    let mov = decoder.decode();
    assert_eq!(mov.code(), Code::Mov_Eq_Gq);
    assert_eq!(mov.op_register(0), Register::RBP);
    assert_eq!(mov.op_register(1), Register::RSP);

    let sub = decoder.decode();
    assert_eq!(sub.code(), Code::Sub_Eq_Ib64);
    assert_eq!(sub.ip(), 0x40_1004);
    assert_eq!(sub.op_kind(1), OpKind::Immediate8to64);
    assert_eq!(sub.immediate8to64(), 0x20);

    assert_eq!(decoder.decode().code(), Code::Leaveq);
    assert_eq!(decoder.decode().code(), Code::Retnq);
    assert!(!decoder.can_decode());
}

#[test]
fn test_operand_size_by_mode() {
    let bytes = [0x8B, 0x01];
    assert_eq!(decode(Bitness::Bits16, &bytes).code(), Code::Mov_Gw_Ew);
    assert_eq!(decode(Bitness::Bits32, &bytes).code(), Code::Mov_Gd_Ed);
    assert_eq!(decode(Bitness::Bits64, &bytes).code(), Code::Mov_Gd_Ed);
    assert_eq!(decode(Bitness::Bits16, &[0x66, 0x8B, 0x01]).code(), Code::Mov_Gd_Ed);
    assert_eq!(decode(Bitness::Bits32, &[0x66, 0x8B, 0x01]).code(), Code::Mov_Gw_Ew);
    assert_eq!(decode(Bitness::Bits64, &[0x48, 0x8B, 0x01]).code(), Code::Mov_Gq_Eq);
    // REX.W wins over 66
    assert_eq!(decode(Bitness::Bits64, &[0x66, 0x48, 0x8B, 0x01]).code(), Code::Mov_Gq_Eq);
}

#[test]
fn test_memory_operand_sizes() {
    let instr = decode(Bitness::Bits64, &[0x48, 0x8B, 0x01]);
    assert_eq!(instr.memory_size(), MemorySize::UInt64);
    let instr = decode(Bitness::Bits32, &[0x0F, 0xB6, 0x01]);
    assert_eq!(instr.code(), Code::Movzx_Gd_Eb);
    assert_eq!(instr.memory_size(), MemorySize::UInt8);
    let lea = decode(Bitness::Bits32, &[0x8D, 0x04, 0x88]);
    assert_eq!(lea.code(), Code::Lea_Gd_M);
    assert_eq!(lea.memory_size(), MemorySize::Unknown);
    assert_eq!(lea.memory_base(), Register::EAX);
    assert_eq!(lea.memory_index(), Register::ECX);
    assert_eq!(lea.memory_index_scale(), 4);
}

#[test]
fn test_sib_and_displacements() {
    // mov eax, [esp]
    let instr = decode(Bitness::Bits32, &[0x8B, 0x04, 0x24]);
    assert_eq!(instr.memory_base(), Register::ESP);
    assert_eq!(instr.memory_index(), Register::None);
    assert_eq!(instr.memory_segment(), Register::SS);

    // mov eax, [ebp-8]
    let instr = decode(Bitness::Bits32, &[0x8B, 0x45, 0xF8]);
    assert_eq!(instr.memory_base(), Register::EBP);
    assert_eq!(instr.memory_displacement(), 0xFFFF_FFF8);
    assert_eq!(instr.memory_displ_size(), 1);
    assert_eq!(instr.memory_segment(), Register::SS);

    // mov rax, [r12+r13*8+0x12345678]
    let instr = decode(Bitness::Bits64, &[0x4B, 0x8B, 0x84, 0xEC, 0x78, 0x56, 0x34, 0x12]);
    assert_eq!(instr.len(), 8);
    assert_eq!(instr.memory_base(), Register::R12);
    assert_eq!(instr.memory_index(), Register::R13);
    assert_eq!(instr.memory_index_scale(), 8);
    assert_eq!(instr.memory_displacement64(), 0x1234_5678);

    // mov eax, [disp32] without a base
    let instr = decode(Bitness::Bits32, &[0x8B, 0x04, 0x25, 0x00, 0x20, 0x00, 0x00]);
    assert_eq!(instr.memory_base(), Register::None);
    assert_eq!(instr.memory_index(), Register::None);
    assert_eq!(instr.memory_displacement(), 0x2000);

    // 16-bit [bp+si+disp16]
    let instr = decode(Bitness::Bits16, &[0x8B, 0x82, 0x34, 0x12]);
    assert_eq!(instr.memory_base(), Register::BP);
    assert_eq!(instr.memory_index(), Register::SI);
    assert_eq!(instr.memory_segment(), Register::SS);
    assert_eq!(instr.memory_displacement(), 0x1234);
}

#[test]
fn test_rip_relative() {
    // lea rax, [rip+0x10]
    let instr = decode(Bitness::Bits64, &[0x48, 0x8D, 0x05, 0x10, 0x00, 0x00, 0x00]);
    assert_eq!(instr.code(), Code::Lea_Gq_M);
    assert_eq!(instr.memory_base(), Register::RIP);
    assert!(instr.memory_operand().is_ip_relative());
    assert_eq!(instr.ip_rel_memory_address(), 0x1000 + 7 + 0x10);

    // The same ModRM is a plain disp32 outside 64-bit mode
    let instr = decode(Bitness::Bits32, &[0x8D, 0x05, 0x10, 0x00, 0x00, 0x00]);
    assert_eq!(instr.memory_base(), Register::None);
    assert!(!instr.memory_operand().is_ip_relative());

    // 67 selects EIP
    let instr = decode(Bitness::Bits64, &[0x67, 0x8D, 0x05, 0x10, 0x00, 0x00, 0x00]);
    assert_eq!(instr.memory_base(), Register::EIP);
}

#[test]
fn test_segment_override() {
    let instr = decode(Bitness::Bits64, &[0x64, 0x48, 0x8B, 0x04, 0x25, 0x28, 0x00, 0x00, 0x00]);
    assert_eq!(instr.code(), Code::Mov_Gq_Eq);
    assert_eq!(instr.segment_prefix(), Register::FS);
    assert_eq!(instr.memory_segment(), Register::FS);
    assert_eq!(instr.memory_displacement64(), 0x28);
}

#[test]
fn test_immediates() {
    let imm64 = decode(Bitness::Bits64, &[0x48, 0xB8, 1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(imm64.code(), Code::Mov_RAX_Iq);
    assert_eq!(imm64.len(), 10);
    assert_eq!(imm64.op_kind(1), OpKind::Immediate64);
    assert_eq!(imm64.immediate64(), 0x0807_0605_0403_0201);

    // Without REX.W the immediate is 32 bits
    let imm32 = decode(Bitness::Bits64, &[0x41, 0xB8, 1, 2, 3, 4]);
    assert_eq!(imm32.code(), Code::Mov_R8D_Id);
    assert_eq!(imm32.op_register(0), Register::R8D);
    assert_eq!(imm32.immediate32(), 0x0403_0201);

    let imul = decode(Bitness::Bits32, &[0x6B, 0xC1, 0xFF]);
    assert_eq!(imul.code(), Code::Imul_Gd_Ed_Ib32);
    assert_eq!(imul.op_count(), 3);
    assert_eq!(imul.immediate8to32(), -1);

    let imul = decode(Bitness::Bits32, &[0x69, 0xC1, 0x00, 0x01, 0x00, 0x00]);
    assert_eq!(imul.code(), Code::Imul_Gd_Ed_Id);
    assert_eq!(imul.immediate32(), 0x100);

    let int = decode(Bitness::Bits32, &[0xCD, 0x80]);
    assert_eq!(int.code(), Code::Int_Ib);
    assert_eq!(int.immediate8(), 0x80);
}

#[test]
fn test_shift_groups() {
    assert_eq!(decode(Bitness::Bits32, &[0xD1, 0xE0]).code(), Code::Shl_Ed_1);
    assert_eq!(decode(Bitness::Bits32, &[0xD3, 0xE0]).code(), Code::Shl_Ed_CL);
    let shl = decode(Bitness::Bits32, &[0xC1, 0xE0, 0x04]);
    assert_eq!(shl.code(), Code::Shl_Ed_Ib);
    assert_eq!(shl.op_register(0), Register::EAX);
    assert_eq!(shl.immediate8(), 4);
}

#[test]
fn test_branches() {
    // jne -2 in each mode
    let mut decoder = Decoder::new(Bitness::Bits64, &[0x75, 0xFE], 0x7000);
    let jne = decoder.decode();
    assert_eq!(jne.code(), Code::Jne_Jb64);
    assert_eq!(jne.op_kind(0), OpKind::NearBranch64);
    assert_eq!(jne.near_branch_target(), Some(0x7000));

    let jne = decode(Bitness::Bits32, &[0x0F, 0x85, 0x00, 0x01, 0x00, 0x00]);
    assert_eq!(jne.code(), Code::Jne_Jd32);
    assert_eq!(jne.near_branch32(), 0x1000 + 6 + 0x100);

    let jne = decode(Bitness::Bits16, &[0x0F, 0x85, 0x00, 0x01]);
    assert_eq!(jne.code(), Code::Jne_Jw16);
    assert_eq!(jne.near_branch16(), 0x1000 + 4 + 0x100);

    // 66 is ignored by 64-bit branches
    let jmp = decode(Bitness::Bits64, &[0x66, 0xE9, 0x00, 0x00, 0x00, 0x00]);
    assert_eq!(jmp.code(), Code::Jmp_Jd64);
    assert_eq!(jmp.len(), 6);
}

#[test]
fn test_conditional_move_and_exchange() {
    let cmov = decode(Bitness::Bits64, &[0x0F, 0x45, 0xC1]);
    assert_eq!(cmov.code(), Code::Cmovne_Gd_Ed);
    assert_eq!(cmov.op_register(0), Register::EAX);
    assert_eq!(cmov.op_register(1), Register::ECX);

    let xadd = decode(Bitness::Bits32, &[0xF0, 0x0F, 0xC1, 0x08]);
    assert_eq!(xadd.code(), Code::Xadd_Ed_Gd);
    assert!(xadd.has_lock_prefix());
}

#[test]
fn test_opcode_register_forms() {
    let bswap = decode(Bitness::Bits32, &[0x0F, 0xC8]);
    assert_eq!(bswap.code(), Code::Bswap_EAX);
    assert_eq!(bswap.op_register(0), Register::EAX);

    let bswap = decode(Bitness::Bits64, &[0x49, 0x0F, 0xC8]);
    assert_eq!(bswap.code(), Code::Bswap_R8);
    assert_eq!(bswap.op_register(0), Register::R8);
}

#[test]
fn test_system_instructions() {
    assert_eq!(
        decode_all(Bitness::Bits64, &[0x0F, 0x05, 0x0F, 0xA2, 0x0F, 0x31, 0xF4, 0xCC]),
        [Code::Syscall, Code::Cpuid, Code::Rdtsc, Code::Hlt, Code::Int3]
    );
}

#[test]
fn test_x87() {
    let fld = decode(Bitness::Bits32, &[0xD9, 0x00]);
    assert_eq!(fld.code(), Code::Fld_Mf32);
    assert_eq!(fld.memory_size(), MemorySize::Float32);

    let fld = decode(Bitness::Bits32, &[0xD9, 0xC1]);
    assert_eq!(fld.code(), Code::Fld_ST_STi);
    assert_eq!(fld.op_register(0), Register::ST0);
    assert_eq!(fld.op_register(1), Register::ST1);

    let fldz = decode(Bitness::Bits32, &[0xD9, 0xEE]);
    assert_eq!(fldz.code(), Code::Fldz);
    assert_eq!(fldz.op_count(), 0);
}

#[test]
fn test_mode_dependent_opcodes() {
    assert_eq!(decode(Bitness::Bits32, &[0x63, 0xC8]).code(), Code::Arpl_Ew_Gw);
    assert_eq!(decode(Bitness::Bits64, &[0x48, 0x63, 0xC8]).code(), Code::Movsxd_Gq_Ed);
    // inc/dec in 32-bit mode, REX prefixes in 64-bit mode
    assert_eq!(decode(Bitness::Bits32, &[0x40]).code(), Code::Inc_EAX);
    assert_eq!(decode(Bitness::Bits64, &[0x40, 0x90]).len(), 2);
    // BOUND outside 64-bit mode when ModRM is memory
    assert_eq!(decode(Bitness::Bits32, &[0x62, 0x00]).code(), Code::Bound_Gd_Md2);
    assert_eq!(decode(Bitness::Bits32, &[0xC4, 0x00]).code(), Code::Les_Gd_Mp);
}

#[test]
fn test_nop_and_pause() {
    assert_eq!(decode(Bitness::Bits64, &[0x90]).code(), Code::Nopd);
    assert_eq!(decode(Bitness::Bits64, &[0x66, 0x90]).code(), Code::Nopw);
    assert_eq!(decode(Bitness::Bits64, &[0xF3, 0x90]).code(), Code::Pause);
    // xchg r8, rax is not a nop
    assert_eq!(decode(Bitness::Bits64, &[0x49, 0x90]).code(), Code::Xchg_R8_RAX);
}

#[test]
fn test_string_instructions() {
    let movs = decode(Bitness::Bits32, &[0xF3, 0xA5]);
    assert_eq!(movs.code(), Code::Movsd_Yd_Xd);
    assert!(movs.has_repe_prefix());
    assert_eq!(movs.op_kind(0), OpKind::MemoryESEDI);
    assert_eq!(movs.op_kind(1), OpKind::MemorySegESI);

    let movs = decode(Bitness::Bits16, &[0xA4]);
    assert_eq!(movs.code(), Code::Movsb_Yb_Xb);
    assert_eq!(movs.op_kind(0), OpKind::MemoryESDI);
    assert_eq!(movs.op_kind(1), OpKind::MemorySegSI);
}

#[test]
fn test_len_never_exceeds_fifteen() {
    // 14 prefixes plus a one-byte opcode is exactly at the limit
    let mut bytes = vec![0x66; 14];
    bytes.push(0x90);
    let instr = decode(Bitness::Bits32, &bytes);
    assert_eq!(instr.code(), Code::Nopw);
    assert_eq!(instr.len(), 15);
}

// =============================================================================
// SSE integer, state save and CET forms
// =============================================================================

#[test]
fn test_endbr_and_shadow_stack() {
    let endbr = decode(Bitness::Bits64, &[0xF3, 0x0F, 0x1E, 0xFA]);
    assert_eq!(endbr.code(), Code::Endbr64);
    assert_eq!(endbr.len(), 4);
    assert_eq!(endbr.op_count(), 0);
    assert!(!endbr.has_repe_prefix());
    assert_eq!(decode(Bitness::Bits32, &[0xF3, 0x0F, 0x1E, 0xFB]).code(), Code::Endbr32);

    // rdsspq rax
    let rdssp = decode(Bitness::Bits64, &[0xF3, 0x48, 0x0F, 0x1E, 0xC8]);
    assert_eq!(rdssp.code(), Code::Rdsspq_Rq);
    assert_eq!(rdssp.op_register(0), Register::RAX);

    // Without F3 there is no form
    assert!(decode(Bitness::Bits64, &[0x0F, 0x1E, 0xFA]).is_invalid());
}

#[test]
fn test_state_save_and_fences() {
    let fxsave = decode(Bitness::Bits64, &[0x0F, 0xAE, 0x00]);
    assert_eq!(fxsave.code(), Code::Fxsave_M);
    assert_eq!(fxsave.memory_size(), MemorySize::Fxsave512);
    assert_eq!(decode(Bitness::Bits64, &[0x48, 0x0F, 0xAE, 0x00]).code(), Code::Fxsave64_M);
    assert_eq!(decode(Bitness::Bits64, &[0x0F, 0xAE, 0x20]).memory_size(), MemorySize::Xsave);

    let ldmxcsr = decode(Bitness::Bits32, &[0x0F, 0xAE, 0x10]);
    assert_eq!(ldmxcsr.code(), Code::Ldmxcsr_Md);
    assert_eq!(ldmxcsr.memory_size(), MemorySize::UInt32);
    assert_eq!(decode(Bitness::Bits32, &[0x0F, 0xAE, 0x38]).code(), Code::Clflush_Mb);

    // Fences take the register encodings and ignore ModRM.rm
    assert_eq!(
        decode_all(Bitness::Bits64, &[0x0F, 0xAE, 0xE8, 0x0F, 0xAE, 0xEF, 0x0F, 0xAE, 0xF0, 0x0F, 0xAE, 0xF8]),
        [Code::Lfence, Code::Lfence, Code::Mfence, Code::Sfence]
    );
    // FXSAVE has no register form
    assert!(decode(Bitness::Bits64, &[0x0F, 0xAE, 0xC0]).is_invalid());
}

#[test]
fn test_cmpxchg8b_group() {
    let cx16 = decode(Bitness::Bits64, &[0xF0, 0x48, 0x0F, 0xC7, 0x0E]);
    assert_eq!(cx16.code(), Code::Cmpxchg16b_Mo);
    assert!(cx16.has_lock_prefix());
    assert_eq!(cx16.memory_base(), Register::RSI);
    assert_eq!(cx16.memory_size(), MemorySize::UInt128);

    let cx8 = decode(Bitness::Bits32, &[0x0F, 0xC7, 0x0E]);
    assert_eq!(cx8.code(), Code::Cmpxchg8b_Mq);
    assert_eq!(cx8.memory_size(), MemorySize::UInt64);

    let rdrand = decode(Bitness::Bits32, &[0x0F, 0xC7, 0xF0]);
    assert_eq!(rdrand.code(), Code::Rdrand_Rd);
    assert_eq!(rdrand.op_register(0), Register::EAX);
    assert_eq!(decode(Bitness::Bits64, &[0x66, 0x0F, 0xC7, 0xF1]).code(), Code::Rdrand_Rw);
    assert_eq!(decode(Bitness::Bits64, &[0x48, 0x0F, 0xC7, 0xF8]).code(), Code::Rdseed_Rq);
    // RDRAND has no memory form
    assert!(decode(Bitness::Bits32, &[0x0F, 0xC7, 0x30]).is_invalid());
}

#[test]
fn test_movbe_and_crc32() {
    let movbe = decode(Bitness::Bits32, &[0x0F, 0x38, 0xF0, 0x06]);
    assert_eq!(movbe.code(), Code::Movbe_Gd_Md);
    assert_eq!(movbe.op_register(0), Register::EAX);
    assert_eq!(movbe.memory_base(), Register::ESI);
    assert_eq!(movbe.memory_size(), MemorySize::UInt32);
    assert_eq!(decode(Bitness::Bits32, &[0x66, 0x0F, 0x38, 0xF1, 0x06]).code(), Code::Movbe_Mw_Gw);
    assert!(decode(Bitness::Bits32, &[0x0F, 0x38, 0xF0, 0xC0]).is_invalid());

    let crc = decode(Bitness::Bits32, &[0xF2, 0x0F, 0x38, 0xF1, 0xC1]);
    assert_eq!(crc.code(), Code::Crc32_Gd_Ed);
    assert_eq!(crc.op_register(1), Register::ECX);
    assert!(!crc.has_repne_prefix());

    // 66 still sizes the source
    let crc = decode(Bitness::Bits32, &[0x66, 0xF2, 0x0F, 0x38, 0xF1, 0xC1]);
    assert_eq!(crc.code(), Code::Crc32_Gd_Ew);
    assert_eq!(crc.op_register(0), Register::EAX);
    assert_eq!(crc.op_register(1), Register::CX);

    let crc = decode(Bitness::Bits64, &[0xF2, 0x48, 0x0F, 0x38, 0xF0, 0xC1]);
    assert_eq!(crc.code(), Code::Crc32_Gq_Eb);
    assert_eq!(crc.op_register(0), Register::RAX);
    assert_eq!(crc.op_register(1), Register::CL);
}

#[test]
fn test_ptest_and_shuffles() {
    let ptest = decode(Bitness::Bits64, &[0x66, 0x0F, 0x38, 0x17, 0x00]);
    assert_eq!(ptest.code(), Code::Ptest_VX_WX);
    assert_eq!(ptest.memory_size(), MemorySize::UInt128);

    let pshufd = decode(Bitness::Bits64, &[0x66, 0x0F, 0x70, 0xC1, 0x1B]);
    assert_eq!(pshufd.code(), Code::Pshufd_VX_WX_Ib);
    assert_eq!(pshufd.len(), 5);
    assert_eq!(pshufd.op_register(1), Register::XMM1);
    assert_eq!(pshufd.immediate8(), 0x1B);
    assert_eq!(
        decode_all(
            Bitness::Bits64,
            &[0x0F, 0x70, 0xC1, 0x00, 0xF3, 0x0F, 0x70, 0xC1, 0x00, 0xF2, 0x0F, 0x70, 0xC1, 0x00]
        ),
        [Code::Pshufw_P_Q_Ib, Code::Pshufhw_VX_WX_Ib, Code::Pshuflw_VX_WX_Ib]
    );

    let shufps = decode(Bitness::Bits32, &[0x0F, 0xC6, 0xC1, 0x44]);
    assert_eq!(shufps.code(), Code::Shufps_VX_WX_Ib);
    assert_eq!(shufps.immediate8(), 0x44);
}

#[test]
fn test_integer_compare_and_unpack() {
    let pcmpeqb = decode(Bitness::Bits64, &[0x66, 0x0F, 0x74, 0xC1]);
    assert_eq!(pcmpeqb.code(), Code::Pcmpeqb_VX_WX);
    assert_eq!(pcmpeqb.op_register(0), Register::XMM0);
    let mmx = decode(Bitness::Bits64, &[0x0F, 0x74, 0xC1]);
    assert_eq!(mmx.code(), Code::Pcmpeqb_P_Q);
    assert_eq!(mmx.op_register(1), Register::MM1);

    let punpck = decode(Bitness::Bits32, &[0x0F, 0x60, 0x00]);
    assert_eq!(punpck.code(), Code::Punpcklbw_P_Q);
    assert_eq!(punpck.memory_size(), MemorySize::Packed32_UInt8);
    assert_eq!(decode(Bitness::Bits32, &[0x66, 0x0F, 0x6C, 0xC1]).code(), Code::Punpcklqdq_VX_WX);
    // The qword unpacks have no MMX form
    assert!(decode(Bitness::Bits32, &[0x0F, 0x6C, 0xC1]).is_invalid());

    assert_eq!(decode(Bitness::Bits64, &[0x66, 0x0F, 0xDB, 0xC1]).code(), Code::Pand_VX_WX);
    assert_eq!(decode(Bitness::Bits64, &[0x0F, 0xDF, 0xC1]).code(), Code::Pandn_P_Q);
}

#[test]
fn test_register_or_memory_selects_form() {
    let movhlps = decode(Bitness::Bits64, &[0x0F, 0x12, 0xC1]);
    assert_eq!(movhlps.code(), Code::Movhlps_VX_RX);
    assert_eq!(movhlps.op_register(1), Register::XMM1);

    let movlps = decode(Bitness::Bits64, &[0x0F, 0x12, 0x00]);
    assert_eq!(movlps.code(), Code::Movlps_VX_M);
    assert_eq!(movlps.memory_size(), MemorySize::Packed64_Float32);
    assert_eq!(decode(Bitness::Bits64, &[0xF2, 0x0F, 0x12, 0xC1]).code(), Code::Movddup_VX_WX);

    let pmovmskb = decode(Bitness::Bits64, &[0x66, 0x0F, 0xD7, 0xC1]);
    assert_eq!(pmovmskb.code(), Code::Pmovmskb_Gd_RX);
    assert_eq!(pmovmskb.op_register(0), Register::EAX);
    assert!(decode(Bitness::Bits64, &[0x66, 0x0F, 0xD7, 0x00]).is_invalid());
}

#[test]
fn test_scalar_integer_conversions() {
    let cvt = decode(Bitness::Bits64, &[0xF2, 0x48, 0x0F, 0x2A, 0xC0]);
    assert_eq!(cvt.code(), Code::Cvtsi2sd_VX_Eq);
    assert_eq!(cvt.op_register(1), Register::RAX);

    let cvt = decode(Bitness::Bits32, &[0xF3, 0x0F, 0x2A, 0x00]);
    assert_eq!(cvt.code(), Code::Cvtsi2ss_VX_Ed);
    assert_eq!(cvt.memory_size(), MemorySize::Int32);

    let cvtt = decode(Bitness::Bits64, &[0xF2, 0x0F, 0x2C, 0xC1]);
    assert_eq!(cvtt.code(), Code::Cvttsd2si_Gd_WX);
    assert_eq!(cvtt.op_register(0), Register::EAX);
    assert_eq!(decode(Bitness::Bits64, &[0x0F, 0x18, 0x08]).code(), Code::Prefetcht0_Mb);
}
