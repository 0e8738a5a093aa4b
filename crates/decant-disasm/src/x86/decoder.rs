//! The x86 decoder front end.

use decant_core::{Bitness, Instruction};

use super::assembler::assemble;
use super::cursor::ByteCursor;
use super::dispatch::dispatch;
use super::prefix::Prefixes;
use crate::DecodeError;

/// Decodes x86 instructions from a borrowed byte slice.
///
/// Each call decodes one instruction at [`position`](Self::position), then
/// advances the position and the instruction pointer by its length. Bytes
/// that do not form a valid instruction come back as an instruction with
/// [`Code::INVALID`](decant_core::Code::INVALID) covering the bytes that were
/// consumed, so a caller can always make progress.
///
/// # Example
///
/// ```
/// use decant_disasm::{Bitness, Code, Decoder};
///
/// let bytes = [0x55, 0x48, 0x89, 0xE5, 0xC3];
/// let codes: Vec<Code> = Decoder::new(Bitness::Bits64, &bytes, 0x40_0000)
///     .map(|instr| instr.code())
///     .collect();
/// assert_eq!(codes, [Code::Push_RBP, Code::Mov_Eq_Gq, Code::Retnq]);
/// ```
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    bitness: Bitness,
    data: &'a [u8],
    position: usize,
    ip: u64,
}

impl<'a> Decoder<'a> {
    /// Creates a decoder starting at the first byte of `data`, whose address
    /// is `ip`.
    pub fn new(bitness: Bitness, data: &'a [u8], ip: u64) -> Self {
        Self::with_position(bitness, data, 0, ip)
    }

    /// Creates a decoder starting at `position` within `data`. A position past
    /// the end is clamped to the end.
    pub fn with_position(bitness: Bitness, data: &'a [u8], position: usize, ip: u64) -> Self {
        log::debug!(
            "x86 decoder: {}-bit, {} bytes, position {}, ip {:#x}",
            bitness.bits(),
            data.len(),
            position,
            ip
        );
        Self {
            bitness,
            data,
            position: position.min(data.len()),
            ip: ip & bitness.ip_mask(),
        }
    }

    pub fn bitness(&self) -> Bitness {
        self.bitness
    }

    /// Offset of the next byte to decode.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves to `position`, clamped to the end of the data. The instruction
    /// pointer is not changed.
    pub fn set_position(&mut self, position: usize) {
        self.position = position.min(self.data.len());
    }

    /// Address of the next instruction.
    pub fn ip(&self) -> u64 {
        self.ip
    }

    pub fn set_ip(&mut self, ip: u64) {
        self.ip = ip & self.bitness.ip_mask();
    }

    /// Returns true if at least one byte is left to decode.
    pub fn can_decode(&self) -> bool {
        self.position < self.data.len()
    }

    /// Decodes the next instruction. Never fails: invalid or truncated bytes
    /// produce an invalid instruction.
    pub fn decode(&mut self) -> Instruction {
        let mut instr = Instruction::default();
        self.decode_out(&mut instr);
        instr
    }

    /// Decodes the next instruction into `instr`, overwriting it.
    pub fn decode_out(&mut self, instr: &mut Instruction) {
        let (result, len) = self.decode_at_position();
        *instr = match result {
            Ok(decoded) => decoded,
            Err(err) => {
                log::trace!("invalid instruction at position {} (ip {:#x}): {}", self.position, self.ip, err);
                Instruction::invalid(self.bitness, self.ip, len)
            }
        };
        self.advance(len);
    }

    /// Decodes the next instruction and reports why it is invalid, if it is.
    ///
    /// The position advances past the bytes that were consumed either way.
    pub fn try_decode(&mut self) -> Result<Instruction, DecodeError> {
        let (result, len) = self.decode_at_position();
        if let Err(err) = &result {
            log::trace!("invalid instruction at position {} (ip {:#x}): {}", self.position, self.ip, err);
        }
        self.advance(len);
        result
    }

    /// Decodes at the current position without moving. Returns the result and
    /// the number of bytes to advance by.
    fn decode_at_position(&self) -> (Result<Instruction, DecodeError>, usize) {
        let mut cursor = ByteCursor::new(self.data, self.position);
        let result = decode_one(&mut cursor, self.bitness, self.ip);
        let consumed = cursor.consumed_len();
        let len = match result {
            Ok(_) => consumed,
            // Always make progress when there was a byte to look at
            Err(_) if self.can_decode() => consumed.max(1),
            Err(_) => 0,
        };
        (result, len)
    }

    fn advance(&mut self, len: usize) {
        self.position = (self.position + len).min(self.data.len());
        self.ip = self.ip.wrapping_add(len as u64) & self.bitness.ip_mask();
    }
}

impl Iterator for Decoder<'_> {
    type Item = Instruction;

    fn next(&mut self) -> Option<Instruction> {
        self.can_decode().then(|| self.decode())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.data.len() - self.position;
        (remaining.div_ceil(super::MAX_INSTRUCTION_LEN), Some(remaining))
    }
}

impl std::iter::FusedIterator for Decoder<'_> {}

fn decode_one(cursor: &mut ByteCursor<'_>, bitness: Bitness, ip: u64) -> Result<Instruction, DecodeError> {
    let (mut prefixes, first) = Prefixes::scan(cursor, bitness)?;
    let selected = dispatch(cursor, bitness, &mut prefixes, first)?;
    assemble(cursor, bitness, ip, &prefixes, &selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use decant_core::{Code, OpKind, Register};

    #[test]
    fn test_decoder_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Decoder<'static>>();
    }

    #[test]
    fn test_advance_and_ip() {
        let bytes = [0x90, 0x48, 0x89, 0xC8];
        let mut decoder = Decoder::new(Bitness::Bits64, &bytes, 0x1000);
        let nop = decoder.decode();
        assert_eq!(nop.code(), Code::Nopd);
        assert_eq!(nop.ip(), 0x1000);
        assert_eq!(decoder.position(), 1);
        assert_eq!(decoder.ip(), 0x1001);

        let mov = decoder.decode();
        assert_eq!(mov.code(), Code::Mov_Eq_Gq);
        assert_eq!(mov.len(), 3);
        assert_eq!(mov.op_register(0), Register::RAX);
        assert!(!decoder.can_decode());
    }

    #[test]
    fn test_ip_wraps_in_16bit_mode() {
        let mut decoder = Decoder::new(Bitness::Bits16, &[0x90, 0x90], 0xFFFF);
        decoder.decode();
        assert_eq!(decoder.ip(), 0);
    }

    #[test]
    fn test_invalid_advances() {
        let bytes = [0x0F, 0x0B, 0x0F, 0xFF, 0x90];
        let mut decoder = Decoder::new(Bitness::Bits32, &bytes, 0);
        assert_eq!(decoder.decode().code(), Code::Ud2);
        let bad = decoder.decode();
        assert!(bad.is_invalid());
        assert_eq!(bad.len(), 2);
        assert_eq!(bad.ip(), 2);
        assert_eq!(decoder.position(), 4);
        assert_eq!(decoder.decode().code(), Code::Nopd);
    }

    #[test]
    fn test_truncated_consumes_rest() {
        let mut decoder = Decoder::new(Bitness::Bits32, &[0xB8, 0x01, 0x02], 0);
        let err = decoder.try_decode().unwrap_err();
        assert_eq!(err, DecodeError::out_of_data(2, 3));
        assert_eq!(decoder.position(), 3);
        assert!(!decoder.can_decode());
    }

    #[test]
    fn test_empty_input() {
        let mut decoder = Decoder::new(Bitness::Bits64, &[], 0);
        assert!(!decoder.can_decode());
        let instr = decoder.decode();
        assert!(instr.is_invalid());
        assert_eq!(instr.len(), 0);
        assert_eq!(decoder.next(), None);
    }

    #[test]
    fn test_positioning() {
        let bytes = [0xCC, 0xCC, 0xC3];
        let mut decoder = Decoder::with_position(Bitness::Bits64, &bytes, 2, 0x2002);
        assert_eq!(decoder.decode().code(), Code::Retnq);
        decoder.set_position(0);
        decoder.set_ip(0x2000);
        assert_eq!(decoder.decode().code(), Code::Int3);
        decoder.set_position(100);
        assert_eq!(decoder.position(), 3);
    }

    #[test]
    fn test_decode_out_overwrites() {
        let mut instr = Instruction::default();
        let mut decoder = Decoder::new(Bitness::Bits32, &[0x6A, 0x05, 0xFF], 0);
        decoder.decode_out(&mut instr);
        assert_eq!(instr.code(), Code::Push_Ib32);
        assert_eq!(instr.op_kind(0), OpKind::Immediate8to32);
        decoder.decode_out(&mut instr);
        assert!(instr.is_invalid());
        assert_eq!(instr.op_count(), 0);
    }

    #[test]
    fn test_iterator_covers_buffer() {
        let bytes = [0x55, 0x0F, 0xFF, 0xC3];
        let total: usize = Decoder::new(Bitness::Bits64, &bytes, 0).map(|i| i.len()).sum();
        assert_eq!(total, bytes.len());
    }
}
