// Copyright 2026 the Diorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diorama Shell: the host-facing layer of the engine.
//!
//! ## Overview
//!
//! The library crates underneath are pure machines: masks, hit tests,
//! hover/cursor state. This crate assembles them into the components a page
//! host actually talks to, and speaks a single output vocabulary —
//! [`Effect`] — that the host executes verbatim (toggle a highlight class,
//! swap the cursor marker, navigate, rewrite the location hash).
//!
//! - [`SceneController`]: the interactive hero scene. Registers items,
//!   accepts decoded images as they arrive, consumes pointer input, and
//!   exposes the forced-hover and [`has_hover`](SceneController::has_hover)
//!   contracts used by the navigation menu.
//! - [`NavMenu`]: dropdown items that preview their scene target on hover
//!   and navigate on activation.
//! - [`MobileDrawer`]: the slide-in menu's open/close state.
//! - [`AboutOverlay`]: an overlay kept in sync with the `#about` location
//!   hash (deep links, back/forward, Escape, backdrop clicks).
//! - [`session`]: the session-scoped flag that makes the boot animation
//!   play once per session.
//!
//! ## Hosting
//!
//! The host owns the real event loop, layout, rendering, and timers. It
//! forwards discrete events (pointer samples, button transitions, blur and
//! visibility changes, hash changes, image decode completions) into these
//! components and applies the returned effects. Nothing here blocks,
//! errors, or schedules; a missing precondition (no scene items, an image
//! that never decodes, an unknown slug) degrades to inert behavior.
//!
//! Diagnostics go through the [`log`] facade; hosts that want them install
//! a logger, everyone else pays nothing.

mod controller;
mod drawer;
mod effect;
mod nav;
mod overlay;
pub mod session;

pub use controller::{ControllerConfig, SceneController};
pub use drawer::MobileDrawer;
pub use effect::Effect;
pub use nav::{MenuItem, NavMenu};
pub use overlay::{ABOUT_HASH, AboutOverlay};

pub use diorama_pointer::hover::HoverParams;
pub use diorama_pointer::types::{Cursor, ReleaseCause};
pub use diorama_scene::{HitParams, ItemFlags, SceneItem};
