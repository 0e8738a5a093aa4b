//! Bounded reader over the caller's byte slice.

use crate::DecodeError;

/// Architectural limit on the length of one instruction.
pub const MAX_INSTRUCTION_LEN: usize = 15;

/// Little-endian reader for one instruction.
///
/// The cursor starts at some offset of a caller-owned slice and counts the
/// bytes it hands out. Reading past the end of the slice fails with
/// [`DecodeError::OutOfData`]; reading a 16th byte of the same instruction
/// fails with [`DecodeError::TooLong`].
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    start: usize,
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Creates a cursor at `start`. A start past the end behaves like an
    /// empty buffer.
    pub fn new(data: &'a [u8], start: usize) -> Self {
        let start = start.min(data.len());
        Self { data, start, pos: start }
    }

    /// Number of bytes read for the current instruction.
    pub fn consumed_len(&self) -> usize {
        self.pos - self.start
    }

    /// Absolute offset of the next byte.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left in the buffer.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns the next byte without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        let [b] = self.take::<1>()?;
        Ok(b)
    }

    pub fn read_u16(&mut self) -> Result<u16, DecodeError> {
        self.take().map(u16::from_le_bytes)
    }

    pub fn read_u32(&mut self) -> Result<u32, DecodeError> {
        self.take().map(u32::from_le_bytes)
    }

    pub fn read_u64(&mut self) -> Result<u64, DecodeError> {
        self.take().map(u64::from_le_bytes)
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        if self.consumed_len() + N > MAX_INSTRUCTION_LEN {
            // Consume up to the limit so the caller can report the length
            self.pos = (self.start + MAX_INSTRUCTION_LEN).min(self.data.len());
            return Err(DecodeError::TooLong);
        }
        let end = self.pos + N;
        let bytes = match self.data.get(self.pos..end) {
            Some(bytes) => bytes,
            None => {
                let needed = end - self.data.len();
                self.pos = self.data.len();
                return Err(DecodeError::out_of_data(needed, self.consumed_len()));
            }
        };
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        self.pos = end;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_little_endian_reads() {
        let data = [0x01, 0x34, 0x12, 0x78, 0x56, 0x34, 0x12];
        let mut cursor = ByteCursor::new(&data, 0);
        assert_eq!(cursor.peek(), Some(0x01));
        assert_eq!(cursor.read_u8(), Ok(0x01));
        assert_eq!(cursor.read_u16(), Ok(0x1234));
        assert_eq!(cursor.read_u32(), Ok(0x1234_5678));
        assert_eq!(cursor.consumed_len(), 7);
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_read_u64() {
        let data = [0xEF, 0xCD, 0xAB, 0x89, 0x67, 0x45, 0x23, 0x01];
        let mut cursor = ByteCursor::new(&data, 0);
        assert_eq!(cursor.read_u64(), Ok(0x0123_4567_89AB_CDEF));
    }

    #[test]
    fn test_out_of_data() {
        let data = [0x90, 0x12];
        let mut cursor = ByteCursor::new(&data, 1);
        assert_eq!(cursor.read_u32(), Err(DecodeError::out_of_data(3, 1)));
        // The partial bytes count as consumed
        assert_eq!(cursor.consumed_len(), 1);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn test_start_past_end() {
        let data = [0x90];
        let mut cursor = ByteCursor::new(&data, 5);
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.read_u8(), Err(DecodeError::out_of_data(1, 0)));
    }

    #[test]
    fn test_too_long() {
        let data = [0x66; 20];
        let mut cursor = ByteCursor::new(&data, 2);
        for _ in 0..MAX_INSTRUCTION_LEN {
            assert!(cursor.read_u8().is_ok());
        }
        assert_eq!(cursor.read_u8(), Err(DecodeError::TooLong));
        assert_eq!(cursor.consumed_len(), MAX_INSTRUCTION_LEN);
    }

    #[test]
    fn test_too_long_multi_byte() {
        let data = [0u8; 20];
        let mut cursor = ByteCursor::new(&data, 0);
        for _ in 0..12 {
            cursor.read_u8().unwrap();
        }
        assert_eq!(cursor.read_u32(), Err(DecodeError::TooLong));
        assert_eq!(cursor.consumed_len(), MAX_INSTRUCTION_LEN);
    }
}
