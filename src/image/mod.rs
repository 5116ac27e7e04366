/// HD-COPY image data structures

/// Layout block and head presence table
pub mod header;
/// Decoded linear image
pub mod linear;

pub use header::ImageHeader;
pub use linear::LinearImage;

use crate::codec::CompressedBlock;
use crate::error::Result;
use crate::format::constants::{HEADS_PER_TRACK, LAYOUT_BLOCK_SIZE};
use crate::format::{locate_payload, ContainerFormat};
use crate::io::ByteCursor;

/// Where a head-surface's data lives in the container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEntry {
    /// No data stored; decodes to zeros
    Blank,
    /// Compressed block stored at `offset` with `length` body bytes
    Stored {
        /// Absolute offset of the block body
        offset: usize,
        /// Compressed body length
        length: usize,
    },
}

/// Summary of a container, gathered without expanding any block
#[derive(Debug, Clone)]
pub struct ContainerInfo {
    /// Container variant
    pub format: ContainerFormat,
    /// Layout block
    pub header: ImageHeader,
    /// One entry per head-surface, in track-major, head-minor order
    pub surfaces: Vec<SurfaceEntry>,
    /// Bytes taken by the block chain, length prefixes included
    pub stored_len: usize,
    /// Total size of the container in bytes
    pub container_len: usize,
}

impl ContainerInfo {
    /// Sum of compressed body lengths
    pub fn compressed_len(&self) -> usize {
        self.surfaces
            .iter()
            .map(|s| match s {
                SurfaceEntry::Blank => 0,
                SurfaceEntry::Stored { length, .. } => *length,
            })
            .sum()
    }

    /// Bytes after the last block that the decoder ignores
    pub fn trailing_len(&self) -> usize {
        let used = self.format.payload_offset() + LAYOUT_BLOCK_SIZE + self.stored_len;
        self.container_len.saturating_sub(used)
    }

    /// Entry for one head-surface
    pub fn surface(&self, track: u8, head: u8) -> Option<&SurfaceEntry> {
        if head as usize >= HEADS_PER_TRACK {
            return None;
        }
        self.surfaces
            .get(track as usize * HEADS_PER_TRACK + head as usize)
    }
}

/// Walk the container's block chain without decoding block contents
pub fn inspect(raw: &[u8]) -> Result<ContainerInfo> {
    let payload = locate_payload(raw)?;
    let mut cursor = ByteCursor::new(payload.data, payload.base);
    let header = ImageHeader::parse(&mut cursor)?;

    let mut surfaces = Vec::with_capacity(header.track_count() as usize * HEADS_PER_TRACK);
    let mut stored_len = 0;
    for track in 0..=header.max_track_index {
        for head in 0..HEADS_PER_TRACK as u8 {
            if !header.is_present(track, head) {
                surfaces.push(SurfaceEntry::Blank);
                continue;
            }
            let block = CompressedBlock::read(&mut cursor)?;
            stored_len += block.stored_len();
            surfaces.push(SurfaceEntry::Stored {
                offset: block.offset,
                length: block.len(),
            });
        }
    }

    Ok(ContainerInfo {
        format: payload.format,
        header,
        surfaces,
        stored_len,
        container_len: raw.len(),
    })
}
