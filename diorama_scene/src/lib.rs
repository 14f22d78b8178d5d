// Copyright 2026 the Diorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diorama Scene: a Kurbo-native registry of staged sprites with
//! pixel-accurate hit testing.
//!
//! A scene is a flat list of interactive items — irregular sprites laid out
//! by a host (a browser page, a native canvas) with `cover` semantics: each
//! sprite fills its screen frame, cropping the overflowing axis, never
//! letterboxing. The scene answers one question: *which item, if any, is
//! under this screen point?*
//!
//! - [`SceneItem`]: slug, natural pixel size, current screen frame, flags.
//!   Registration order is paint order; later items paint on top.
//! - [`cover`]: the pure screen↔image coordinate mapping for cover layout.
//! - [`Scene::hit_test`]: walks items topmost-first and asks each item's
//!   [`AlphaMask`](diorama_mask::AlphaMask) whether opaque content lies
//!   within a tolerance radius of the mapped point.
//!
//! ## Degraded preconditions
//!
//! Nothing here errors. An item whose image has not decoded (no mask
//! attached yet), whose natural size is zero, or whose flags exclude it from
//! picking simply never hits. The host re-syncs frames whenever layout
//! changes; the mapper reads the current frame on every query and caches
//! nothing.
//!
//! ## Example
//!
//! ```
//! use diorama_mask::AlphaMask;
//! use diorama_scene::{HitParams, Scene, SceneItem};
//! use kurbo::{Point, Rect, Size};
//!
//! let mut scene = Scene::new();
//! let robot = scene.insert(SceneItem::new("b2emo", Size::new(4.0, 4.0)));
//! scene.set_frame(robot, Rect::new(0.0, 0.0, 4.0, 4.0));
//!
//! // No mask yet: the image is still "loading", so nothing hits.
//! let params = HitParams::default();
//! assert_eq!(scene.hit_test(Point::new(2.0, 2.0), &params), None);
//!
//! // One opaque pixel at (2, 2).
//! let mut rgba = [0_u8; 4 * 4 * 4];
//! rgba[(2 * 4 + 2) * 4 + 3] = 255;
//! scene.attach_mask(robot, AlphaMask::from_rgba(4, 4, &rgba).unwrap());
//! assert_eq!(scene.hit_test(Point::new(2.0, 2.0), &params), Some(robot));
//! assert_eq!(scene.slug(robot), Some("b2emo"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use bitflags::bitflags;
use kurbo::{Rect, Size};

pub mod cover;
mod scene;

pub use scene::Scene;

/// Identifier for an item in a [`Scene`].
///
/// Items are registered once and never removed, so a plain index is stable
/// for the life of the scene.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ItemId(u32);

impl ItemId {
    pub(crate) fn new(idx: usize) -> Self {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "ItemId uses 32-bit indices by design."
        )]
        Self(idx as u32)
    }

    pub(crate) fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags! {
    /// Item flags controlling visibility and picking.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ItemFlags: u8 {
        /// Item is visible on screen.
        const VISIBLE  = 0b0000_0001;
        /// Item participates in hit testing.
        const PICKABLE = 0b0000_0010;
    }
}

impl Default for ItemFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}

/// One interactive sprite in the scene.
#[derive(Clone, Debug)]
pub struct SceneItem {
    /// Stable identifier used for routing and external lookups
    /// (for example `"precision-arm"`).
    pub slug: String,
    /// Natural (intrinsic) pixel size of the sprite's image. Masks are built
    /// at this resolution.
    pub natural: Size,
    /// Current screen frame. Mutable: the host re-syncs it on every layout
    /// change ([`Scene::set_frame`]) and queries read it fresh.
    pub frame: Rect,
    /// Visibility and picking flags.
    pub flags: ItemFlags,
}

impl SceneItem {
    /// Create an item with a zero frame and default flags. The host assigns
    /// the real frame once layout is known.
    pub fn new(slug: impl Into<String>, natural: Size) -> Self {
        Self {
            slug: slug.into(),
            natural,
            frame: Rect::ZERO,
            flags: ItemFlags::default(),
        }
    }
}

/// Tolerance parameters for opacity hit testing.
///
/// Used by [`Scene::hit_test`]. The window is a square of half-width
/// `radius` (Chebyshev distance); a pixel counts as opaque when its alpha
/// strictly exceeds `threshold`. The scan is O(radius²) per candidate per
/// query — fine at interactive rates for small radii and a handful of
/// items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HitParams {
    /// Half-width of the square tolerance window, in image pixels.
    pub radius: u32,
    /// Alpha values at or below this are treated as transparent.
    pub threshold: u8,
}

impl Default for HitParams {
    /// Radius 50, threshold 15: forgiving enough for thin silhouettes and
    /// fast pointer motion, strict enough to ignore anti-aliased edges.
    fn default() -> Self {
        Self {
            radius: 50,
            threshold: 15,
        }
    }
}
