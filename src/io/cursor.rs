/// Bounds-checked forward cursor over a byte slice

use crate::error::{HdCopyError, Result};

/// Forward-only reader over a borrowed buffer
///
/// Every read is checked against the end of the buffer and fails with
/// [`HdCopyError::Truncated`] instead of panicking. Reported offsets are
/// relative to the start of the caller's original buffer (`base` + position).
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
    base: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor over `data`, which starts at `base` in the original buffer
    pub fn new(data: &'a [u8], base: usize) -> Self {
        Self { data, pos: 0, base }
    }

    /// Absolute offset of the next read
    pub fn offset(&self) -> usize {
        self.base + self.pos
    }

    /// Bytes left to read
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Whether the cursor has consumed the whole buffer
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Borrow the next `len` bytes and advance past them
    pub fn take(&mut self, len: usize, what: &'static str) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(HdCopyError::truncated(what, self.offset(), len, self.remaining()));
        }
        let slice = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    /// Read a single byte
    pub fn read_u8(&mut self, what: &'static str) -> Result<u8> {
        Ok(self.take(1, what)?[0])
    }

    /// Read a little-endian 16-bit value
    pub fn read_u16_le(&mut self, what: &'static str) -> Result<u16> {
        let bytes = self.take(2, what)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }
}
