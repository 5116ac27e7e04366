/// HD-COPY to linear image decoder

use crate::codec::CompressedBlock;
use crate::error::{HdCopyError, Result};
use crate::format::constants::HEADS_PER_TRACK;
use crate::format::locate_payload;
use crate::image::{ImageHeader, LinearImage};
use crate::io::ByteCursor;
use std::sync::atomic::{AtomicBool, Ordering};

/// Decode an HD-COPY container into a linear sector image
///
/// Shorthand for `Decoder::new().decode(raw)`.
pub fn decode(raw: &[u8]) -> Result<Vec<u8>> {
    Decoder::new().decode(raw)
}

/// Configurable decoder
///
/// The decoder is synchronous and holds no state between calls, so it can be
/// used from any thread. A caller running it on a worker can pass a
/// cancellation flag, which is checked before each track, and a progress
/// callback, which is called after each track.
#[derive(Clone, Copy, Default)]
pub struct Decoder<'c> {
    strict: bool,
    cancel: Option<&'c AtomicBool>,
    progress: Option<&'c dyn Fn(f64)>,
}

impl std::fmt::Debug for Decoder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Decoder")
            .field("strict", &self.strict)
            .field("cancel", &self.cancel)
            .field("progress", &self.progress.is_some())
            .finish()
    }
}

impl<'c> Decoder<'c> {
    /// Create a decoder with default (lenient) settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Require every stored block to expand to exactly one track
    ///
    /// When disabled, blocks of any expanded size are concatenated and a
    /// warning is logged.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Abort with [`HdCopyError::Cancelled`] once `flag` is set
    pub fn cancel_flag(mut self, flag: &'c AtomicBool) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Report the fraction of tracks decoded (0.0 to 1.0) after each track
    pub fn progress_callback(mut self, callback: &'c dyn Fn(f64)) -> Self {
        self.progress = Some(callback);
        self
    }

    /// Decode a container, returning only the image bytes
    pub fn decode(&self, raw: &[u8]) -> Result<Vec<u8>> {
        self.decode_image(raw).map(LinearImage::into_bytes)
    }

    /// Decode a container into a [`LinearImage`]
    pub fn decode_image(&self, raw: &[u8]) -> Result<LinearImage> {
        let payload = locate_payload(raw)?;
        let mut cursor = ByteCursor::new(payload.data, payload.base);
        let header = ImageHeader::parse(&mut cursor)?;

        let track_size = header.track_size();
        let track_count = header.track_count() as usize;
        let mut data = Vec::with_capacity(header.expected_output_len());
        let mut surfaces = Vec::with_capacity(track_count * HEADS_PER_TRACK);

        for track in 0..=header.max_track_index {
            if self.is_cancelled() {
                return Err(HdCopyError::Cancelled { track });
            }

            for head in 0..HEADS_PER_TRACK as u8 {
                let start = data.len();
                if !header.is_present(track, head) {
                    data.resize(start + track_size, 0);
                    surfaces.push(start..data.len());
                    continue;
                }

                let block = CompressedBlock::read(&mut cursor)?;
                let written = block.expand_into(&mut data)?;
                surfaces.push(start..data.len());

                log::trace!(
                    "Track {} head {}: {} bytes at {:#X} expanded to {}",
                    track,
                    head,
                    block.len(),
                    block.offset,
                    written
                );

                if written != track_size {
                    if self.strict {
                        return Err(HdCopyError::TrackSizeMismatch {
                            track,
                            head,
                            expected: track_size,
                            actual: written,
                        });
                    }
                    log::warn!(
                        "Track {} head {} expanded to {} bytes, expected {}",
                        track,
                        head,
                        written,
                        track_size
                    );
                }
            }

            if let Some(callback) = self.progress {
                callback((track as usize + 1) as f64 / track_count as f64);
            }
        }

        if !cursor.is_empty() {
            log::debug!(
                "{} trailing bytes after last block at offset {}",
                cursor.remaining(),
                cursor.offset()
            );
        }

        Ok(LinearImage {
            format: payload.format,
            header,
            data,
            surfaces,
        })
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .map(|flag| flag.load(Ordering::Relaxed))
            .unwrap_or(false)
    }
}
