// Copyright 2026 the Diorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screen↔image coordinate mapping for `cover` layout.
//!
//! Cover layout scales an image by the *larger* of the two axis ratios so it
//! fills its frame, cropping whatever overflows, and centers it along both
//! axes. These functions are pure: frames change between calls (scroll,
//! resize, reflow), so callers pass the current frame every time and nothing
//! is cached.
//!
//! Precondition: `natural` has non-zero width and height. Callers that
//! cannot guarantee this (an image that never loaded) should skip the item
//! instead of mapping through it.

use kurbo::{Point, Rect, Size};

/// The uniform scale factor cover layout applies to an image of size
/// `natural` displayed in a frame of size `frame`.
pub fn cover_scale(frame: Size, natural: Size) -> f64 {
    f64::max(frame.width / natural.width, frame.height / natural.height)
}

/// Map a screen point into the image's own pixel space.
///
/// Inverts the cover transform: the image is drawn at `cover_scale` and
/// centered in `frame`, so the drawn origin sits at
/// `frame_origin + (frame_size − scale·natural) / 2` per axis. Points over
/// a cropped region map outside `[0, natural)`.
pub fn to_image_space(frame: Rect, natural: Size, screen: Point) -> Point {
    let scale = cover_scale(frame.size(), natural);
    let drawn = Size::new(natural.width * scale, natural.height * scale);
    let offset_x = frame.x0 + (frame.width() - drawn.width) / 2.0;
    let offset_y = frame.y0 + (frame.height() - drawn.height) / 2.0;
    Point::new((screen.x - offset_x) / scale, (screen.y - offset_y) / scale)
}

/// Map an image-space point back onto the screen. Inverse of
/// [`to_image_space`].
pub fn from_image_space(frame: Rect, natural: Size, image: Point) -> Point {
    let scale = cover_scale(frame.size(), natural);
    let drawn = Size::new(natural.width * scale, natural.height * scale);
    let offset_x = frame.x0 + (frame.width() - drawn.width) / 2.0;
    let offset_y = frame.y0 + (frame.height() - drawn.height) / 2.0;
    Point::new(image.x * scale + offset_x, image.y * scale + offset_y)
}
