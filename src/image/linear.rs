/// Decoded, sector-linear disk image

use crate::error::{HdCopyError, Result};
use crate::format::constants::{HEADS_PER_TRACK, SECTOR_SIZE};
use crate::format::{ContainerFormat, Geometry};
use crate::image::ImageHeader;
use std::ops::Range;

/// Uncompressed image in track-major, head-minor sector order
#[derive(Debug, Clone)]
pub struct LinearImage {
    /// Container variant the image was decoded from
    pub(crate) format: ContainerFormat,
    /// Layout block of the source container
    pub(crate) header: ImageHeader,
    /// Decoded bytes
    pub(crate) data: Vec<u8>,
    /// Byte range of each head-surface in `data`, track-major, head-minor
    pub(crate) surfaces: Vec<Range<usize>>,
}

impl LinearImage {
    /// Container variant the image was decoded from
    pub fn format(&self) -> ContainerFormat {
        self.format
    }

    /// Layout block of the source container
    pub fn header(&self) -> &ImageHeader {
        &self.header
    }

    /// Geometry described by the header
    pub fn geometry(&self) -> Geometry {
        self.header.geometry()
    }

    /// Decoded bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the image, returning the decoded bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Length of the decoded image in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the image holds no data
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether every head-surface decoded to exactly one track of data
    pub fn is_complete(&self) -> bool {
        let track_size = self.header.track_size();
        self.surfaces.len() == self.header.track_count() as usize * HEADS_PER_TRACK
            && self.surfaces.iter().all(|r| r.len() == track_size)
    }

    /// Raw data of one head-surface of a track
    pub fn track_data(&self, track: u8, head: u8) -> Result<&[u8]> {
        if track > self.header.max_track_index || head as usize >= HEADS_PER_TRACK {
            return Err(HdCopyError::InvalidTrack {
                track,
                head,
                max: self.header.max_track_index,
            });
        }

        let expected = self.header.track_size();
        let range = self
            .surfaces
            .get(track as usize * HEADS_PER_TRACK + head as usize)
            .cloned()
            .unwrap_or(0..0);

        // A short or long surface cannot be addressed by sector
        if range.len() != expected {
            return Err(HdCopyError::TrackSizeMismatch {
                track,
                head,
                expected,
                actual: range.len(),
            });
        }

        Ok(&self.data[range])
    }

    /// Read sector data (sector numbers are 1-based)
    pub fn read_sector(&self, track: u8, head: u8, sector: u8) -> Result<&[u8]> {
        let max = self.header.sectors_per_track;
        if sector == 0 || sector > max {
            return Err(HdCopyError::InvalidSector {
                track,
                head,
                sector,
                max,
            });
        }

        let data = self.track_data(track, head)?;
        let start = (sector as usize - 1) * SECTOR_SIZE;
        Ok(&data[start..start + SECTOR_SIZE])
    }
}
