/// HD-COPY container constants

/// Signature of the preamble written by releases before 2.0
pub const PREAMBLE_SIGNATURE: &[u8] = &[0xFF, 0x18];

/// Size of the pre-2.0 preamble, discarded before the layout block
pub const PREAMBLE_SIZE: usize = 0x0E;

/// Bytes sampled by format detection
pub const SIGNATURE_SIZE: usize = 2;

/// Bytes per sector in the decoded image
pub const SECTOR_SIZE: usize = 512;

/// Heads (surfaces) per track
pub const HEADS_PER_TRACK: usize = 2;

/// Maximum number of tracks the presence table can describe
pub const MAX_TRACKS: usize = 84;

/// Highest track index that can be addressed in the presence table
pub const MAX_TRACK_INDEX: u8 = (MAX_TRACKS - 1) as u8;

/// Number of entries in the head presence table
pub const PRESENCE_TABLE_SIZE: usize = MAX_TRACKS * HEADS_PER_TRACK;

/// Offset of the highest track index in the layout block
pub const LAYOUT_MAX_TRACK_OFFSET: usize = 0x00;

/// Offset of the sectors per track field in the layout block
pub const LAYOUT_SECTORS_OFFSET: usize = 0x01;

/// Offset of the presence table in the layout block
pub const LAYOUT_PRESENCE_OFFSET: usize = 0x02;

/// Size of the layout block (first compressed block follows at 0xAA)
pub const LAYOUT_BLOCK_SIZE: usize = LAYOUT_PRESENCE_OFFSET + PRESENCE_TABLE_SIZE;

/// Size of the little-endian length prefix of a compressed block
pub const BLOCK_LENGTH_SIZE: usize = 2;

/// Size of an escape sequence: marker, value, count
pub const RUN_SEQUENCE_SIZE: usize = 3;
