// SPDX-License-Identifier: MPL-2.0
//! Conversion between image files and the `src` strings carried on the wire.
//!
//! Hosts usually inline images as JPEG thumbnails in `data:` URIs so the
//! widget never needs filesystem access. [`encode_file`] builds such a
//! descriptor; [`decode_src`] turns a `src` back into something displayable.

use super::protocol::ImageDescriptor;
use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image_rs::{DynamicImage, ImageFormat};
use std::io::Cursor;
use std::path::{Path, PathBuf};

const DATA_URI_PREFIX: &str = "data:";
const JPEG_MIME: &str = "image/jpeg";

/// Where the bytes of an image come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Inline bytes decoded from a `data:` URI.
    Bytes(Vec<u8>),
    /// Anything else is treated as a filesystem path.
    Path(PathBuf),
}

/// Opens `path`, shrinks it to fit `max_side` × `max_side` and inlines it as
/// a JPEG `data:` URI. The descriptor is named after the file.
pub fn encode_file(path: &Path, max_side: u32) -> Result<ImageDescriptor> {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| Error::InvalidInput(format!("{} has no file name", path.display())))?
        .to_string();

    let image = image_rs::open(path)?;
    let max_side = max_side.max(1);
    let thumbnail = if image.width() <= max_side && image.height() <= max_side {
        image
    } else {
        image.thumbnail(max_side, max_side)
    };

    // JPEG has no alpha channel.
    let rgb = DynamicImage::ImageRgb8(thumbnail.to_rgb8());
    let mut bytes = Vec::new();
    rgb.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Jpeg)?;

    let src = format!(
        "{DATA_URI_PREFIX}{JPEG_MIME};base64,{}",
        STANDARD.encode(&bytes)
    );
    tracing::debug!(%name, bytes = bytes.len(), "encoded image");

    Ok(ImageDescriptor { src, name })
}

/// Encodes every path with [`encode_file`], stopping at the first failure.
pub fn encode_files<P: AsRef<Path>>(paths: &[P], max_side: u32) -> Result<Vec<ImageDescriptor>> {
    paths
        .iter()
        .map(|path| encode_file(path.as_ref(), max_side))
        .collect()
}

/// Resolves a wire `src` into displayable bytes or a path.
///
/// Undecodable `data:` URIs yield empty bytes, which the grid shows as a
/// name-only placeholder.
#[must_use]
pub fn decode_src(src: &str) -> ImageSource {
    let Some(rest) = src.strip_prefix(DATA_URI_PREFIX) else {
        return ImageSource::Path(PathBuf::from(src));
    };

    let Some((header, payload)) = rest.split_once(',') else {
        tracing::warn!("data URI without payload");
        return ImageSource::Bytes(Vec::new());
    };

    if !header.ends_with(";base64") {
        return ImageSource::Bytes(payload.as_bytes().to_vec());
    }

    // Some hosts put whitespace after the comma.
    let payload: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    match STANDARD.decode(payload) {
        Ok(bytes) => ImageSource::Bytes(bytes),
        Err(err) => {
            tracing::warn!(%err, "invalid base64 in data URI");
            ImageSource::Bytes(Vec::new())
        }
    }
}
