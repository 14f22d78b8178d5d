// Copyright 2026 the Diorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diorama Pointer: deterministic hover and cursor state machines.
//!
//! ## Overview
//!
//! This crate debounces raw hit-test results into stable interaction state.
//! It performs no hit testing and owns no event loop: the host samples its
//! input source (real pointer events or synthetic test traces), runs
//! whatever picker it likes, and feeds the *results* in. Everything here is
//! a plain synchronous method on plain state.
//!
//! - [`hover::HoverTracker`]: turns noisy per-sample hit results into a
//!   stable "currently hovered item" signal with a miss-streak grace period
//!   (hysteresis), supports an externally forced override, and answers
//!   [`has_hover`](hover::HoverTracker::has_hover).
//! - [`cursor::CursorMachine`]: the process-wide open/mid/closed cursor
//!   visual. `Closed` latches while the primary button is down and is
//!   released only by an explicit [`ReleaseCause`](types::ReleaseCause) —
//!   several redundant causes exist so a swallowed pointer-up can never
//!   wedge the machine.
//!
//! ## Data flow
//!
//! One direction only: picker → hover tracker → cursor machine. The cursor
//! machine never reaches into hover internals; each input carries a
//! [`PointerContext`](types::PointerContext) snapshot the caller builds
//! from `has_hover()` and its own interactive-element check.
//!
//! ## Example
//!
//! ```
//! use diorama_pointer::hover::{HoverEvent, HoverTracker};
//!
//! let mut hover: HoverTracker<u32> = HoverTracker::new();
//! assert_eq!(hover.sample(Some(7)), vec![HoverEvent::Enter(7)]);
//! // A momentary miss does not drop the hover...
//! assert_eq!(hover.sample(None), vec![]);
//! assert_eq!(hover.hovered(), Some(7));
//! ```
//!
//! ## Scene adapter
//!
//! Enable the `scene_adapter` feature for glue that runs a `diorama_scene`
//! hit test and feeds this crate's tracker, including slug-based
//! forced-hover lookup.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod cursor;
pub mod hover;
pub mod types;
