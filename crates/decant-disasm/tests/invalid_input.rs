//! Invalid, truncated and over-long input.

use decant_disasm::{Bitness, Code, DecodeError, Decoder, OpcodeMap};

fn try_decode(bitness: Bitness, bytes: &[u8]) -> Result<decant_disasm::Instruction, DecodeError> {
    Decoder::new(bitness, bytes, 0).try_decode()
}

/// Decodes one instruction and returns its length and the position after it.
fn invalid_len(bitness: Bitness, bytes: &[u8]) -> (usize, usize) {
    let mut decoder = Decoder::new(bitness, bytes, 0);
    let instr = decoder.decode();
    assert!(instr.is_invalid(), "{bytes:02X?} decoded as {:?}", instr.code());
    assert_eq!(instr.op_count(), 0);
    (instr.len(), decoder.position())
}

#[test]
fn test_unknown_opcodes() {
    assert_eq!(
        try_decode(Bitness::Bits64, &[0x0F, 0x04]),
        Err(DecodeError::invalid_opcode(0x04, OpcodeMap::M0F))
    );
    assert_eq!(invalid_len(Bitness::Bits64, &[0x0F, 0x04, 0x90]), (2, 2));
    assert_eq!(invalid_len(Bitness::Bits32, &[0xF0, 0x0F, 0xFF, 0x90]), (3, 3));
}

#[test]
fn test_too_long() {
    // 15 prefixes leave no room for the opcode
    let mut bytes = vec![0x66; 15];
    bytes.push(0x90);
    assert_eq!(try_decode(Bitness::Bits32, &bytes), Err(DecodeError::TooLong));
    assert_eq!(invalid_len(Bitness::Bits32, &bytes), (15, 15));

    // An immediate that runs past byte 15
    let mut bytes = vec![0x2E; 10];
    bytes.extend_from_slice(&[0x48, 0x81, 0xC0, 0x01, 0x02, 0x03, 0x04]);
    assert_eq!(try_decode(Bitness::Bits64, &bytes), Err(DecodeError::TooLong));

    // The decoder continues with the byte after the cut
    let mut bytes = vec![0x66; 16];
    bytes.push(0xC3);
    let codes: Vec<Code> = Decoder::new(Bitness::Bits32, &bytes, 0).map(|i| i.code()).collect();
    assert_eq!(codes, [Code::INVALID, Code::Retnw]);
}

#[test]
fn test_truncated() {
    assert_eq!(try_decode(Bitness::Bits64, &[0x0F]), Err(DecodeError::out_of_data(1, 1)));
    assert_eq!(try_decode(Bitness::Bits64, &[0x66]), Err(DecodeError::out_of_data(1, 1)));
    assert_eq!(try_decode(Bitness::Bits64, &[0x8B]), Err(DecodeError::out_of_data(1, 1)));
    // SIB present, disp32 cut short
    assert_eq!(
        try_decode(Bitness::Bits64, &[0x8B, 0x84, 0x24, 0x00, 0x01]),
        Err(DecodeError::out_of_data(2, 5))
    );
    // A truncated instruction consumes everything that is left
    assert_eq!(invalid_len(Bitness::Bits64, &[0xE8, 0x00, 0x00]), (3, 3));
    assert_eq!(invalid_len(Bitness::Bits64, &[0x62, 0xF1, 0x7C]), (3, 3));
}

#[test]
fn test_lock_rules() {
    assert_eq!(
        try_decode(Bitness::Bits64, &[0xF0, 0x90]),
        Err(DecodeError::invalid("LOCK prefix not allowed"))
    );
    assert_eq!(
        try_decode(Bitness::Bits64, &[0xF0, 0x01, 0xC8]),
        Err(DecodeError::invalid("LOCK prefix not allowed"))
    );
    assert_eq!(invalid_len(Bitness::Bits64, &[0xF0, 0x01, 0xC8]), (3, 3));
    assert!(try_decode(Bitness::Bits64, &[0xF0, 0x01, 0x08]).is_ok());
}

#[test]
fn test_mode_restrictions() {
    // PUSHA, AAA and far JMP ptr16:32 do not exist in 64-bit mode
    for bytes in [&[0x60][..], &[0x37], &[0xEA, 0, 0, 0, 0, 0, 0]] {
        assert_eq!(
            try_decode(Bitness::Bits64, bytes),
            Err(DecodeError::invalid("instruction not valid in 64-bit mode")),
            "{bytes:02X?}"
        );
    }
    // SWAPGS is 64-bit only
    assert_eq!(
        try_decode(Bitness::Bits32, &[0x0F, 0x01, 0xF8]),
        Err(DecodeError::invalid("instruction only valid in 64-bit mode"))
    );
}

#[test]
fn test_operand_form_restrictions() {
    // LEA needs memory
    assert_eq!(
        try_decode(Bitness::Bits32, &[0x8D, 0xC0]),
        Err(DecodeError::invalid("register operand on a memory-only form"))
    );
    // MOV to CS
    assert_eq!(
        try_decode(Bitness::Bits32, &[0x8E, 0xC8]),
        Err(DecodeError::invalid("CS is not a valid destination"))
    );
    // Segment register 6 does not exist
    assert_eq!(
        try_decode(Bitness::Bits32, &[0x8C, 0xF0]),
        Err(DecodeError::invalid("reserved segment register"))
    );
}

#[test]
fn test_invalid_keeps_ip_and_bitness() {
    let mut decoder = Decoder::new(Bitness::Bits16, &[0x90, 0x0F, 0xFF], 0x7C00);
    decoder.decode();
    let bad = decoder.decode();
    assert!(bad.is_invalid());
    assert_eq!(bad.ip(), 0x7C01);
    assert_eq!(bad.bitness(), Bitness::Bits16);
    assert_eq!(bad.next_ip(), 0x7C03);
    assert_eq!(decoder.ip(), 0x7C03);
}
