/// HD-COPY container variants, constants and geometry

/// Format constants
pub mod constants;
/// Disk geometry and well-known PC floppy formats
pub mod geometry;

pub use constants::*;
pub use geometry::Geometry;

use crate::error::{HdCopyError, Result};

/// HD-COPY container variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerFormat {
    /// Pre-2.0 container with a 14-byte preamble before the layout block
    Prefixed,
    /// Container starting directly with the layout block
    Bare,
}

impl ContainerFormat {
    /// Get the signature bytes for this variant
    pub fn magic_bytes(&self) -> &'static [u8] {
        match self {
            ContainerFormat::Prefixed => PREAMBLE_SIGNATURE,
            ContainerFormat::Bare => &[], // Bare containers have no signature
        }
    }

    /// Get a human-readable name for this variant
    pub fn name(&self) -> &'static str {
        match self {
            ContainerFormat::Prefixed => "HD-COPY (pre-2.0 preamble)",
            ContainerFormat::Bare => "HD-COPY",
        }
    }

    /// Offset of the layout block from the start of the container
    pub fn payload_offset(&self) -> usize {
        match self {
            ContainerFormat::Prefixed => PREAMBLE_SIZE,
            ContainerFormat::Bare => 0,
        }
    }
}

/// Detect the container variant from its first bytes
///
/// Returns `None` when fewer than two bytes are available.
pub fn detect_format(magic: &[u8]) -> Option<ContainerFormat> {
    if magic.len() < SIGNATURE_SIZE {
        return None;
    }

    if magic.starts_with(ContainerFormat::Prefixed.magic_bytes()) {
        Some(ContainerFormat::Prefixed)
    } else {
        Some(ContainerFormat::Bare)
    }
}

/// View of the container payload, starting at the layout block
#[derive(Debug, Clone, Copy)]
pub struct Payload<'a> {
    /// Detected container variant
    pub format: ContainerFormat,
    /// Offset of `data` within the original buffer
    pub base: usize,
    /// Payload bytes
    pub data: &'a [u8],
}

/// Locate the payload within a raw container, skipping any preamble
pub fn locate_payload(raw: &[u8]) -> Result<Payload<'_>> {
    let format = detect_format(raw)
        .ok_or_else(|| HdCopyError::truncated("signature", 0, SIGNATURE_SIZE, raw.len()))?;

    let base = format.payload_offset();
    if raw.len() < base {
        return Err(HdCopyError::truncated("preamble", 0, base, raw.len()));
    }

    log::debug!("Detected {} container, payload at {:#04X}", format.name(), base);

    Ok(Payload {
        format,
        base,
        data: &raw[base..],
    })
}
