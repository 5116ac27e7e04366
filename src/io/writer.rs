/// Linear image writer

use crate::error::Result;
use crate::image::LinearImage;
use std::io::Write;

/// Write the decoded sectors of `image` to `writer`
pub fn write_linear<W: Write>(image: &LinearImage, mut writer: W) -> Result<()> {
    writer.write_all(image.data())?;
    writer.flush()?;
    Ok(())
}
