// Copyright 2026 the Diorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diorama Mask: alpha-silhouette buffers for pixel-accurate hit testing.
//!
//! ## Overview
//!
//! Irregularly shaped sprites make bounding-box hit testing feel wrong: most
//! of the box is empty air. This crate stores a per-sprite snapshot of the
//! alpha channel at the sprite's natural resolution — an [`AlphaMask`] — and
//! answers the one question hit testing needs: *is there opaque content near
//! this pixel?*
//!
//! The query ([`AlphaMask::opaque_within`]) scans a square (Chebyshev)
//! neighborhood of configurable radius around the sampled pixel and succeeds
//! as soon as any in-bounds alpha value exceeds a threshold. The radius acts
//! as a forgiving "fat cursor" for thin silhouettes and fast pointer motion;
//! the threshold ignores nearly transparent anti-aliased edge pixels.
//!
//! ## Store
//!
//! [`MaskStore`] keys masks by an arbitrary item key. A mask is built once,
//! when the source image finishes decoding, and never mutated afterwards.
//! An item with no mask (image still loading, or decode failed) is simply
//! absent from the store; callers treat that as "never hit" rather than an
//! error.
//!
//! ## Decoding
//!
//! The core is `no_std` and consumes raw RGBA8888 buffers. Enable the
//! `decode` feature to build masks straight from encoded image bytes via the
//! `image` crate (`decode_mask`, `AlphaMask::from_image`).
//!
//! ## Example
//!
//! ```
//! use diorama_mask::{AlphaMask, MaskStore};
//!
//! // A 4×4 sprite with a single opaque pixel at (2, 1).
//! let mut rgba = [0_u8; 4 * 4 * 4];
//! rgba[(1 * 4 + 2) * 4 + 3] = 200;
//! let mask = AlphaMask::from_rgba(4, 4, &rgba).unwrap();
//!
//! assert!(mask.opaque_within(0, 0, 2, 15));
//! assert!(!mask.opaque_within(0, 0, 1, 15));
//!
//! let mut store: MaskStore<u32> = MaskStore::new();
//! store.insert(7, mask);
//! assert!(store.get(&7).is_some());
//! assert!(store.get(&8).is_none());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod mask;
mod store;

#[cfg(feature = "decode")]
mod decode;

pub use mask::AlphaMask;
pub use store::MaskStore;

#[cfg(feature = "decode")]
pub use decode::{DecodeError, decode_mask};
