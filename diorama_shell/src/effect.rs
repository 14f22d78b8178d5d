// Copyright 2026 the Diorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The output vocabulary the host executes.

use diorama_pointer::types::Cursor;

/// One host-executable side effect.
///
/// Components return these instead of touching the page themselves, which
/// keeps every state machine synchronously testable with synthetic input.
/// Each effect is idempotent and self-contained; applying a sequence in
/// order always leaves the page consistent with component state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Exclusively highlight the item with this slug, or clear every
    /// highlight when `None`. At most one item is ever highlighted.
    Hover(Option<String>),
    /// Exclusively apply this cursor marker to the document root, or remove
    /// all cursor markers when `None`.
    Cursor(Option<Cursor>),
    /// Perform a full page load of this location.
    Navigate(String),
    /// Rewrite the location hash with replace semantics — no new history
    /// entry, no scroll jump. `Some("#about")` sets the fragment; `None`
    /// drops it.
    ReplaceHash(Option<String>),
    /// Show (`true`) or hide the about overlay.
    Overlay(bool),
    /// Open (`true`) or close the mobile drawer.
    Drawer(bool),
}
