//! PNG normalization.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat};

use crate::filter::SourceEncoding;

#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("unsupported source encoding '{0}'")]
    Unsupported(String),

    #[error("failed to decode {encoding:?} image: {source}")]
    Decode {
        encoding: SourceEncoding,
        source: image::ImageError,
    },

    #[error("failed to encode png: {source}")]
    Encode { source: image::ImageError },
}

/// Normalizes raw entry bytes to PNG, picking the decoder from `source_extension`.
pub fn normalize(raw: Vec<u8>, source_extension: &str) -> Result<Vec<u8>, NormalizeError> {
    let encoding = SourceEncoding::from_extension(source_extension)
        .ok_or_else(|| NormalizeError::Unsupported(source_extension.to_string()))?;
    normalize_encoding(raw, encoding)
}

/// PNG input is returned untouched. Anything else is decoded, widened to
/// RGBA8 and re-encoded as PNG.
pub fn normalize_encoding(
    raw: Vec<u8>,
    encoding: SourceEncoding,
) -> Result<Vec<u8>, NormalizeError> {
    if !encoding.needs_conversion() {
        return Ok(raw);
    }

    let image = decode(&raw, encoding)?;
    encode_png(DynamicImage::ImageRgba8(image.into_rgba8()))
}

pub fn decode(raw: &[u8], encoding: SourceEncoding) -> Result<DynamicImage, NormalizeError> {
    image::load_from_memory_with_format(raw, encoding.image_format())
        .map_err(|source| NormalizeError::Decode { encoding, source })
}

fn encode_png(image: DynamicImage) -> Result<Vec<u8>, NormalizeError> {
    let mut out = Cursor::new(Vec::new());
    image
        .write_to(&mut out, ImageFormat::Png)
        .map_err(|source| NormalizeError::Encode { source })?;
    Ok(out.into_inner())
}
