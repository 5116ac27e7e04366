use thiserror::Error;

/// Result type alias for HD-COPY operations
pub type Result<T> = std::result::Result<T, HdCopyError>;

/// Errors that can occur when decoding HD-COPY images
#[derive(Debug, Error)]
pub enum HdCopyError {
    /// I/O error occurred while reading or writing
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended before a field could be read in full
    #[error("Unexpected end of data reading {what} at offset {offset}: needed {needed} bytes, {available} available")]
    Truncated {
        /// Field being read
        what: &'static str,
        /// Absolute offset of the read in the input buffer
        offset: usize,
        /// Bytes required by the read
        needed: usize,
        /// Bytes left in the input
        available: usize,
    },

    /// Invalid or unrecognized container contents
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Invalid track or head specified
    #[error("Invalid track {track} on head {head} (max: {max})")]
    InvalidTrack {
        /// Track number
        track: u8,
        /// Head number
        head: u8,
        /// Maximum allowed track number
        max: u8,
    },

    /// Invalid sector number specified
    #[error("Invalid sector {sector} on track {track}, head {head} (max: {max})")]
    InvalidSector {
        /// Track number
        track: u8,
        /// Head number
        head: u8,
        /// Sector number (1-based)
        sector: u8,
        /// Highest sector number on the track
        max: u8,
    },

    /// A compressed block expanded to a size other than one full track
    #[error("Track {track} head {head} expanded to {actual} bytes (expected {expected})")]
    TrackSizeMismatch {
        /// Track number
        track: u8,
        /// Head number
        head: u8,
        /// Track size implied by the header
        expected: usize,
        /// Bytes produced by the block
        actual: usize,
    },

    /// Decoding was cancelled by the caller
    #[error("Decoding cancelled before track {track}")]
    Cancelled {
        /// Track that was about to be decoded
        track: u8,
    },
}

/// Broad classification of an [`HdCopyError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The container is malformed or truncated
    Format,
    /// Underlying reader or writer failed
    Io,
    /// A track, head or sector address is out of range
    Addressing,
    /// The caller cancelled the operation
    Cancelled,
}

impl HdCopyError {
    /// Create a truncation error for a read of `needed` bytes at `offset`
    pub fn truncated(what: &'static str, offset: usize, needed: usize, available: usize) -> Self {
        HdCopyError::Truncated {
            what,
            offset,
            needed,
            available,
        }
    }

    /// Create an invalid format error
    pub fn invalid_format<S: Into<String>>(message: S) -> Self {
        HdCopyError::InvalidFormat(message.into())
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            HdCopyError::Io(_) => ErrorKind::Io,
            HdCopyError::Truncated { .. }
            | HdCopyError::InvalidFormat(_)
            | HdCopyError::TrackSizeMismatch { .. } => ErrorKind::Format,
            HdCopyError::InvalidTrack { .. } | HdCopyError::InvalidSector { .. } => {
                ErrorKind::Addressing
            }
            HdCopyError::Cancelled { .. } => ErrorKind::Cancelled,
        }
    }

    /// Whether this error was caused by malformed input
    pub fn is_format_error(&self) -> bool {
        self.kind() == ErrorKind::Format
    }
}
