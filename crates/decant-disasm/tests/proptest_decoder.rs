//! Property-based tests for the x86 decoder.
//!
//! These tests verify invariants that should hold for all input:
//! - Decoding never panics on arbitrary bytes
//! - Decoded length is within 1..=15 and within the buffer
//! - Decoding is deterministic
//! - Walking a buffer covers every byte exactly once

use proptest::prelude::*;

use decant_disasm::{Bitness, Code, Decoder, MAX_INSTRUCTION_LEN};

fn bitness() -> impl Strategy<Value = Bitness> {
    prop_oneof![Just(Bitness::Bits16), Just(Bitness::Bits32), Just(Bitness::Bits64)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10000))]

    /// Decoding arbitrary bytes should never panic.
    #[test]
    fn decode_never_panics(bitness in bitness(), bytes in prop::collection::vec(any::<u8>(), 0..32)) {
        let mut decoder = Decoder::new(bitness, &bytes, 0x1000);
        let _ = decoder.try_decode();
        let _ = decoder.decode();
    }

    /// Every decode of a non-empty buffer covers 1..=15 bytes.
    #[test]
    fn decoded_len_is_valid(bitness in bitness(), bytes in prop::collection::vec(any::<u8>(), 1..32)) {
        let instr = Decoder::new(bitness, &bytes, 0x1000).decode();
        prop_assert!(instr.len() >= 1, "length must be at least 1");
        prop_assert!(instr.len() <= MAX_INSTRUCTION_LEN, "length must be at most 15");
        prop_assert!(instr.len() <= bytes.len(), "length cannot exceed the input");
        prop_assert!(instr.op_count() <= 4);
    }

    /// Same input, same output.
    #[test]
    fn decode_is_deterministic(bitness in bitness(), bytes in prop::collection::vec(any::<u8>(), 1..32)) {
        let first = Decoder::new(bitness, &bytes, 0x1000).try_decode();
        let second = Decoder::new(bitness, &bytes, 0x1000).try_decode();
        prop_assert_eq!(first, second);
    }

    /// `decode` and `try_decode` agree on the instruction and its length.
    #[test]
    fn decode_matches_try_decode(bitness in bitness(), bytes in prop::collection::vec(any::<u8>(), 1..32)) {
        let mut a = Decoder::new(bitness, &bytes, 0x1000);
        let mut b = Decoder::new(bitness, &bytes, 0x1000);
        let instr = a.decode();
        match b.try_decode() {
            Ok(ok) => prop_assert_eq!(instr, ok),
            Err(_) => prop_assert!(instr.is_invalid()),
        }
        prop_assert_eq!(a.position(), b.position());
        prop_assert_eq!(a.ip(), b.ip());
    }

    /// Iterating covers the buffer exactly, with contiguous addresses.
    #[test]
    fn iteration_covers_buffer(
        bitness in bitness(),
        bytes in prop::collection::vec(any::<u8>(), 0..256),
        ip in 0u64..0xF000,
    ) {
        let mut next_ip = ip;
        let mut covered = 0;
        for instr in Decoder::new(bitness, &bytes, ip) {
            prop_assert_eq!(instr.ip(), next_ip);
            next_ip = instr.next_ip();
            covered += instr.len();
        }
        prop_assert_eq!(covered, bytes.len());
    }

    /// Successfully decoded instructions keep the requested address.
    #[test]
    fn decoded_address_matches(
        bytes in prop::collection::vec(any::<u8>(), 1..32),
        addr in 0x1000u64..0xFFFF_FFFF_FFFF_0000u64,
    ) {
        let instr = Decoder::new(Bitness::Bits64, &bytes, addr).decode();
        prop_assert_eq!(instr.ip(), addr);
        prop_assert_eq!(instr.bitness(), Bitness::Bits64);
    }

    /// Register-form ALU instructions decode the same in 32- and 64-bit mode.
    #[test]
    fn alu_register_forms_agree(family in 0u8..8, dir in 0u8..4, modrm in 0xC0u8..=0xFF) {
        let bytes = [(family << 3) | dir, modrm];
        let legacy = Decoder::new(Bitness::Bits32, &bytes, 0).decode();
        let long = Decoder::new(Bitness::Bits64, &bytes, 0).decode();
        prop_assert_ne!(legacy.code(), Code::INVALID);
        prop_assert_eq!(legacy.code(), long.code());
        prop_assert_eq!(legacy.len(), 2);
        prop_assert_eq!(legacy.op_kinds(), long.op_kinds());
    }
}
