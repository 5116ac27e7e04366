/// Compressed block framing and run-length expansion

/// Run-length expansion of block bodies
pub mod rle;

pub use rle::expand_block;

use crate::error::Result;
use crate::format::constants::BLOCK_LENGTH_SIZE;
use crate::io::ByteCursor;

/// Length-prefixed compressed data for one head-surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressedBlock<'a> {
    /// Absolute offset of the body in the input buffer
    pub offset: usize,
    /// Compressed body, escape byte first
    pub body: &'a [u8],
}

impl<'a> CompressedBlock<'a> {
    /// Read the length prefix and borrow the body that follows it
    pub fn read(cursor: &mut ByteCursor<'a>) -> Result<Self> {
        let length = cursor.read_u16_le("block length")? as usize;
        let offset = cursor.offset();
        let body = cursor.take(length, "block body")?;
        Ok(Self { offset, body })
    }

    /// Size of the compressed body in bytes
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Whether the block has no body at all
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Escape value of the block
    pub fn escape(&self) -> Option<u8> {
        self.body.first().copied()
    }

    /// Total bytes the block occupies in the container, including its prefix
    pub fn stored_len(&self) -> usize {
        BLOCK_LENGTH_SIZE + self.body.len()
    }

    /// Expand the block, appending to `out`; returns the number of bytes written
    pub fn expand_into(&self, out: &mut Vec<u8>) -> Result<usize> {
        expand_block(self.body, self.offset, out)
    }
}
