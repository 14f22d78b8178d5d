// Copyright 2026 the Diorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Building masks from encoded images (feature `decode`).

use core::fmt;

use image::DynamicImage;

use crate::mask::AlphaMask;

/// Why an encoded image could not become a mask.
#[derive(Debug)]
pub enum DecodeError {
    /// The bytes did not decode as a supported image format.
    Image(image::ImageError),
    /// The image decoded but has a zero dimension.
    EmptyImage,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image(e) => write!(f, "image decode failed: {e}"),
            Self::EmptyImage => write!(f, "image has a zero dimension"),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Image(e) => Some(e),
            Self::EmptyImage => None,
        }
    }
}

impl From<image::ImageError> for DecodeError {
    fn from(e: image::ImageError) -> Self {
        Self::Image(e)
    }
}

impl AlphaMask {
    /// Extract the alpha channel of a decoded image at its natural size.
    ///
    /// Returns `None` for images with a zero dimension.
    pub fn from_image(img: &DynamicImage) -> Option<Self> {
        let rgba = img.to_rgba8();
        Self::from_rgba(rgba.width(), rgba.height(), rgba.as_raw())
    }
}

/// Decode `bytes` (any format the `image` crate recognizes) and extract its
/// alpha channel.
pub fn decode_mask(bytes: &[u8]) -> Result<AlphaMask, DecodeError> {
    let img = image::load_from_memory(bytes)?;
    AlphaMask::from_image(&img).ok_or(DecodeError::EmptyImage)
}
