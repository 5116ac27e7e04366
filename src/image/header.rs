/// Layout block: track count, sectors per track and head presence table

use crate::error::{HdCopyError, Result};
use crate::format::constants::*;
use crate::format::Geometry;
use crate::io::ByteCursor;

/// Decoded layout block of an HD-COPY container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHeader {
    /// Highest track index stored in the image (0-based)
    pub max_track_index: u8,
    /// Sectors per track
    pub sectors_per_track: u8,
    /// One flag per head-surface, `track * 2 + head`
    presence: [bool; PRESENCE_TABLE_SIZE],
}

impl ImageHeader {
    /// Create a header with every head-surface marked absent
    pub fn new(max_track_index: u8, sectors_per_track: u8) -> Self {
        Self {
            max_track_index,
            sectors_per_track,
            presence: [false; PRESENCE_TABLE_SIZE],
        }
    }

    /// Parse the 170-byte layout block at the cursor
    pub fn parse(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        let start = cursor.offset();
        let block = cursor.take(LAYOUT_BLOCK_SIZE, "layout block")?;

        let max_track_index = block[LAYOUT_MAX_TRACK_OFFSET];
        let sectors_per_track = block[LAYOUT_SECTORS_OFFSET];

        if max_track_index > MAX_TRACK_INDEX {
            return Err(HdCopyError::invalid_format(format!(
                "Highest track index {} at offset {} exceeds presence table (max: {})",
                max_track_index, start, MAX_TRACK_INDEX
            )));
        }

        let mut presence = [false; PRESENCE_TABLE_SIZE];
        for (flag, &byte) in presence
            .iter_mut()
            .zip(&block[LAYOUT_PRESENCE_OFFSET..LAYOUT_BLOCK_SIZE])
        {
            *flag = byte != 0;
        }

        let header = Self {
            max_track_index,
            sectors_per_track,
            presence,
        };

        log::debug!(
            "Layout: {} tracks, {} sectors/track, {} of {} head-surfaces stored",
            header.track_count(),
            sectors_per_track,
            header.present_count(),
            header.track_count() as usize * HEADS_PER_TRACK
        );

        Ok(header)
    }

    /// Number of tracks in the image
    pub fn track_count(&self) -> u8 {
        self.max_track_index.saturating_add(1)
    }

    /// Geometry of the decoded image
    pub fn geometry(&self) -> Geometry {
        Geometry::new(self.track_count(), self.sectors_per_track)
    }

    /// Raw presence table
    pub fn presence(&self) -> &[bool; PRESENCE_TABLE_SIZE] {
        &self.presence
    }

    /// Whether compressed data is stored for this head-surface
    pub fn is_present(&self, track: u8, head: u8) -> bool {
        if head as usize >= HEADS_PER_TRACK {
            return false;
        }
        self.presence
            .get(track as usize * HEADS_PER_TRACK + head as usize)
            .copied()
            .unwrap_or(false)
    }

    /// Mark a head-surface as stored or blank
    pub fn set_present(&mut self, track: u8, head: u8, present: bool) -> Result<()> {
        let index = track as usize * HEADS_PER_TRACK + head as usize;
        if head as usize >= HEADS_PER_TRACK || index >= PRESENCE_TABLE_SIZE {
            return Err(HdCopyError::InvalidTrack {
                track,
                head,
                max: MAX_TRACK_INDEX,
            });
        }
        self.presence[index] = present;
        Ok(())
    }

    /// Number of stored head-surfaces among the tracks in the image
    pub fn present_count(&self) -> usize {
        let used = self.track_count() as usize * HEADS_PER_TRACK;
        self.presence.iter().take(used).filter(|&&p| p).count()
    }

    /// Bytes occupied by one head-surface in the decoded image
    pub fn track_size(&self) -> usize {
        self.sectors_per_track as usize * SECTOR_SIZE
    }

    /// Size of the decoded image for well-formed input
    pub fn expected_output_len(&self) -> usize {
        self.track_count() as usize * HEADS_PER_TRACK * self.track_size()
    }
}
