/*!
# hdcopy

A Rust library for decoding HD-COPY floppy disk images (`*.IMG`) into plain,
sector-linear disk images (`*.VFD` / `*.IMA`) usable by virtual floppy tools.

## Features

- Detects both container variants (with or without the pre-2.0 preamble)
- Bounds-checked decoding: truncated or corrupt containers produce errors, never panics
- Header and block-chain inspection without decompressing
- Sector addressing on the decoded image
- Synchronous and stateless, with optional cooperative cancellation

## Quick Start

```rust,no_run
use hdcopy::{decode, Decoder, inspect};

let raw = std::fs::read("disk.img")?;

// Decode straight to bytes
let vfd = decode(&raw)?;
std::fs::write("disk.vfd", &vfd)?;

// Inspect the container
let info = inspect(&raw)?;
println!("{}: {}", info.format.name(), info.header.geometry());

// Decode strictly and read the boot sector
let image = Decoder::new().strict(true).decode_image(&raw)?;
let boot = image.read_sector(0, 0, 1)?;
# Ok::<(), Box<dyn std::error::Error>>(())
```

## Container Layout

- Optional 14-byte preamble starting `FF 18` (written by releases before 2.0)
- Highest track index, sectors per track
- 168-byte presence table, one entry per head-surface (84 tracks × 2 heads)
- For each stored head-surface in track-major, head-minor order: a
  little-endian 16-bit length followed by a run-length encoded block

## Modules

- `format`: container variants, constants and geometry
- `image`: layout header, decoded image and container inspection
- `codec`: compressed block framing and run-length expansion
- `decoder`: the track/head decoding loop
- `io`: byte cursor and `Read`/`Write` adapters
- `map`: head presence map rendering
- `error`: Error types and Result alias
*/

#![warn(missing_docs)]

/// Compressed block framing and run-length expansion
pub mod codec;
/// Track/head decoding loop
pub mod decoder;
/// Error types and Result alias
pub mod error;
/// Container variants, constants and geometry
pub mod format;
/// Layout header, decoded image and container inspection
pub mod image;
/// Byte cursor and I/O adapters
pub mod io;
/// Head presence map visualization
pub mod map;

// Re-export common types
pub use codec::{expand_block, CompressedBlock};
pub use decoder::{decode, Decoder};
pub use error::{ErrorKind, HdCopyError, Result};
pub use format::{detect_format, locate_payload, ContainerFormat, Geometry, Payload};
pub use image::{inspect, ContainerInfo, ImageHeader, LinearImage, SurfaceEntry};
pub use io::{read_container, write_linear, ByteCursor};
pub use map::render_presence_map;
