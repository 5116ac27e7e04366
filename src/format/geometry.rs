/// Disk geometry and well-known PC floppy formats

use super::constants::{HEADS_PER_TRACK, SECTOR_SIZE};

/// Physical layout of a decoded image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Number of tracks (cylinders)
    pub tracks: u8,
    /// Number of heads per track
    pub heads: u8,
    /// Sectors per track
    pub sectors_per_track: u8,
    /// Sector size in bytes
    pub sector_size: u16,
}

/// Well-known IBM PC floppy formats as (tracks, sectors per track, name)
const KNOWN_FORMATS: [(u8, u8, &str); 5] = [
    (40, 9, "360K 5.25\" DD"),
    (80, 9, "720K 3.5\" DD"),
    (80, 15, "1.2M 5.25\" HD"),
    (80, 18, "1.44M 3.5\" HD"),
    (80, 36, "2.88M 3.5\" ED"),
];

impl Geometry {
    /// Create a double-sided geometry with 512-byte sectors
    pub fn new(tracks: u8, sectors_per_track: u8) -> Self {
        Self {
            tracks,
            heads: HEADS_PER_TRACK as u8,
            sectors_per_track,
            sector_size: SECTOR_SIZE as u16,
        }
    }

    /// IBM PC 360K format (40 tracks, 9 sectors, 512 bytes, 2 sides)
    pub fn ibm_pc_360k() -> Self {
        Self::new(40, 9)
    }

    /// IBM PC 720K format (80 tracks, 9 sectors, 512 bytes, 2 sides)
    pub fn ibm_pc_720k() -> Self {
        Self::new(80, 9)
    }

    /// IBM PC 1.2M format (80 tracks, 15 sectors, 512 bytes, 2 sides)
    pub fn ibm_pc_1_2m() -> Self {
        Self::new(80, 15)
    }

    /// IBM PC 1.44M 2HD format (80 tracks, 18 sectors, 512 bytes, 2 sides)
    pub fn ibm_pc_1_44m() -> Self {
        Self::new(80, 18)
    }

    /// Bytes occupied by one head-surface of one track
    pub fn track_size(&self) -> usize {
        self.sectors_per_track as usize * self.sector_size as usize
    }

    /// Calculate total disk capacity in bytes
    pub fn total_size(&self) -> usize {
        self.tracks as usize * self.heads as usize * self.track_size()
    }

    /// Total disk capacity in kilobytes
    pub fn capacity_kb(&self) -> usize {
        self.total_size() / 1024
    }

    /// Name of the standard PC format with this shape, if any
    pub fn known_name(&self) -> Option<&'static str> {
        if self.heads as usize != HEADS_PER_TRACK || self.sector_size as usize != SECTOR_SIZE {
            return None;
        }

        KNOWN_FORMATS
            .iter()
            .find(|(tracks, spt, _)| *tracks == self.tracks && *spt == self.sectors_per_track)
            .map(|(_, _, name)| *name)
    }
}

impl std::fmt::Display for Geometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} tracks, {} heads, {} sectors/track, {} bytes/sector",
            self.tracks, self.heads, self.sectors_per_track, self.sector_size
        )?;
        if let Some(name) = self.known_name() {
            write!(f, " ({})", name)?;
        }
        Ok(())
    }
}
