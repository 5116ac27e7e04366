/// Single-sentinel run-length expansion
///
/// The first byte of a block is its escape value and is never emitted. After
/// that, an escape byte introduces a three-byte sequence `escape, value, count`
/// that expands to `count` copies of `value`; any other byte is copied as-is.

use crate::error::{HdCopyError, Result};
use crate::format::constants::RUN_SEQUENCE_SIZE;

/// Expand a compressed block body, appending the output to `out`
///
/// `offset` is the absolute position of `body` in the input buffer and is
/// only used for error reporting. Returns the number of bytes appended.
pub fn expand_block(body: &[u8], offset: usize, out: &mut Vec<u8>) -> Result<usize> {
    let escape = match body.first() {
        Some(&escape) => escape,
        None => return Ok(0),
    };

    let start = out.len();
    let mut pos = 1;

    while pos < body.len() {
        let byte = body[pos];
        if byte != escape {
            out.push(byte);
            pos += 1;
            continue;
        }

        if pos + RUN_SEQUENCE_SIZE > body.len() {
            return Err(HdCopyError::truncated(
                "escape sequence",
                offset + pos,
                RUN_SEQUENCE_SIZE,
                body.len() - pos,
            ));
        }

        let value = body[pos + 1];
        let count = body[pos + 2] as usize;
        out.resize(out.len() + count, value);
        pos += RUN_SEQUENCE_SIZE;
    }

    Ok(out.len() - start)
}
