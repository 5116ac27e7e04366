/// HD-COPY container reader

use crate::decoder::Decoder;
use crate::error::Result;
use crate::image::LinearImage;
use std::io::Read;

/// Read a whole container from `reader` and decode it with default settings
pub fn read_container<R: Read>(reader: R) -> Result<LinearImage> {
    read_container_with(reader, &Decoder::new())
}

/// Read a whole container from `reader` and decode it with `decoder`
pub fn read_container_with<R: Read>(mut reader: R, decoder: &Decoder<'_>) -> Result<LinearImage> {
    let mut raw = Vec::new();
    reader.read_to_end(&mut raw)?;
    log::debug!("Read {} byte container", raw.len());
    decoder.decode_image(&raw)
}
