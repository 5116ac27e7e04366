/// Head presence map visualization

use crate::format::constants::HEADS_PER_TRACK;
use crate::image::ImageHeader;

const BLOCK_BLANK: char = '\u{2591}'; // ░ - Light shade (no data stored)
const BLOCK_STORED: char = '\u{2593}'; // ▓ - Dark shade (compressed data stored)

/// Render a text map of stored and blank head-surfaces
///
/// One row per head, one column per track, followed by a track axis with a
/// label every five tracks.
pub fn render_presence_map(header: &ImageHeader) -> String {
    let num_tracks = header.track_count() as usize;
    let mut out = String::new();

    // Head 1 on top, head 0 at the bottom next to the axis
    for head in (0..HEADS_PER_TRACK as u8).rev() {
        out.push_str(&format!("H{} ", head));
        for track in 0..num_tracks {
            out.push(if header.is_present(track as u8, head) {
                BLOCK_STORED
            } else {
                BLOCK_BLANK
            });
        }
        out.push('\n');
    }

    out.push_str("   ");
    let mut col = 0;
    while col < num_tracks {
        if col % 5 == 0 {
            // Labels may run past the next column; skip the columns they cover
            let label = col.to_string();
            let visible = label.len().min(num_tracks - col);
            out.push_str(&label[..visible]);
            col += visible;
        } else {
            out.push(' ');
            col += 1;
        }
    }
    out.push('\n');

    out
}
