//! Every instruction code is reachable from some encoding.
//!
//! Sweeps opcodes across modes, prefixes, REX bytes, VEX/EVEX fields and a
//! set of ModRM bytes, and checks that the decoded codes cover the whole
//! `Code` enum. VEX and EVEX are swept in every mode as well.

use std::collections::HashSet;

use decant_disasm::{Bitness, Code, Decoder};
use strum::IntoEnumIterator;

const LEGACY_PREFIXES: [&[u8]; 8] = [
    &[],
    &[0x66],
    &[0x67],
    &[0x66, 0x67],
    &[0xF3],
    &[0xF2],
    &[0x66, 0xF3],
    &[0x66, 0xF2],
];

const REX_PREFIXES: [&[u8]; 5] = [&[], &[0x41], &[0x44], &[0x48], &[0x49]];

const OPCODE_ESCAPES: [&[u8]; 4] = [&[], &[0x0F], &[0x0F, 0x38], &[0x0F, 0x3A]];

const BITNESSES: [Bitness; 3] = [Bitness::Bits16, Bitness::Bits32, Bitness::Bits64];

/// Bytes after the ModRM byte. The first one doubles as a SIB byte with
/// index 1, so a VSIB index never equals a gather destination in reg 2..7.
const PADDING: [u8; 10] = [0x08, 0, 0, 0, 0, 0, 0, 0, 0, 0];

/// EVEX `aaa` and `b`: no mask, `k1`, broadcast/rounding.
const EVEX_AAA_B: [(u8, u8); 3] = [(0, 0), (1, 0), (0, 1)];

/// One memory ModRM per reg field plus every register ModRM.
fn modrm_bytes() -> impl Iterator<Item = u8> {
    (0..8u8).map(|reg| reg << 3).chain(0xC0..=0xFF)
}

/// `modrm_bytes` plus one SIB-addressed ModRM per reg field.
fn vector_modrm_bytes() -> impl Iterator<Item = u8> {
    modrm_bytes().chain((0..8u8).map(|reg| (reg << 3) | 4))
}

fn record(seen: &mut HashSet<Code>, bitness: Bitness, bytes: &[u8]) {
    let instr = Decoder::new(bitness, bytes, 0).decode();
    assert!(instr.len() <= 15);
    seen.insert(instr.code());
}

fn sweep_legacy(seen: &mut HashSet<Code>) {
    let mut bytes = Vec::with_capacity(32);
    for bitness in BITNESSES {
        let rexes: &[&[u8]] = if bitness.is_64bit() { &REX_PREFIXES } else { &REX_PREFIXES[..1] };
        for prefixes in LEGACY_PREFIXES {
            for rex in rexes {
                for escape in OPCODE_ESCAPES {
                    for opcode in 0..=0xFFu8 {
                        for modrm in modrm_bytes() {
                            bytes.clear();
                            bytes.extend_from_slice(prefixes);
                            bytes.extend_from_slice(rex);
                            bytes.extend_from_slice(escape);
                            bytes.extend_from_slice(&[opcode, modrm]);
                            bytes.extend_from_slice(&PADDING);
                            record(seen, bitness, &bytes);
                        }
                    }
                }
            }
        }
    }
}

fn sweep_vex(seen: &mut HashSet<Code>) {
    let mut bytes = Vec::with_capacity(32);
    for bitness in BITNESSES {
        for map in 1..=3u8 {
            for w in 0..2u8 {
                for l in 0..2u8 {
                    for pp in 0..4u8 {
                        for opcode in 0..=0xFFu8 {
                            for modrm in vector_modrm_bytes() {
                                bytes.clear();
                                bytes.extend_from_slice(&[0xC4, 0xE0 | map, (w << 7) | 0x78 | (l << 2) | pp, opcode, modrm]);
                                bytes.extend_from_slice(&PADDING);
                                record(seen, bitness, &bytes);
                            }
                        }
                    }
                }
            }
        }
    }
}

fn sweep_evex(seen: &mut HashSet<Code>) {
    let mut bytes = Vec::with_capacity(32);
    for bitness in BITNESSES {
        for map in 1..=3u8 {
            for w in 0..2u8 {
                for ll in 0..4u8 {
                    for (aaa, b) in EVEX_AAA_B {
                        for pp in 0..4u8 {
                            for opcode in 0..=0xFFu8 {
                                for modrm in vector_modrm_bytes() {
                                    bytes.clear();
                                    bytes.extend_from_slice(&[
                                        0x62,
                                        0xF0 | map,
                                        (w << 7) | 0x7C | pp,
                                        0x08 | (ll << 5) | (b << 4) | aaa,
                                        opcode,
                                        modrm,
                                    ]);
                                    bytes.extend_from_slice(&PADDING);
                                    record(seen, bitness, &bytes);
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_every_code_is_decodable() {
    let mut seen = HashSet::new();
    sweep_legacy(&mut seen);
    sweep_vex(&mut seen);
    sweep_evex(&mut seen);

    let missing: Vec<&'static str> = Code::iter()
        .filter(|code| *code != Code::INVALID && !seen.contains(code))
        .map(<&'static str>::from)
        .collect();
    assert!(missing.is_empty(), "{} codes never decoded: {missing:?}", missing.len());
}
