#![no_main]

use decant_core::{Bitness, Instruction};
use decant_disasm::Decoder;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    for bitness in [Bitness::Bits16, Bitness::Bits32, Bitness::Bits64] {
        // Single instruction through the fallible API
        let mut decoder = Decoder::new(bitness, data, 0x1000);
        let _ = decoder.try_decode();

        // Whole buffer: every byte is covered exactly once
        let mut decoder = Decoder::new(bitness, data, 0x1000);
        let mut instr = Instruction::default();
        let mut covered = 0;
        while decoder.can_decode() {
            decoder.decode_out(&mut instr);
            assert!(instr.len() >= 1 && instr.len() <= 15);
            assert!(instr.op_count() <= 4);
            covered += instr.len();
            assert_eq!(decoder.position(), covered);
        }
        assert_eq!(covered, data.len());
    }
});
