// Copyright 2026 the Diorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared vocabulary: cursor visuals, release causes, and evaluation
//! context.

/// The three cursor visuals.
///
/// The active visual is reflected by the host as an exclusive marker on the
/// document root; at most one is active at a time, and "none" (the host's
/// default cursor) is represented as `Option::<Cursor>::None` by
/// [`CursorMachine`](crate::cursor::CursorMachine).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Cursor {
    /// Relaxed open hand: pointer is up and over nothing interactive.
    Open,
    /// Ready-to-grab: over a scene item or an interactive element.
    Mid,
    /// Grabbing: the primary button is held.
    Closed,
}

/// Why the held-button latch is being released.
///
/// `Up` is the ordinary path. The rest are defensive recovery triggers: a
/// pointer-up can be swallowed by the platform (released outside the
/// window, tab switched mid-drag), and any one of these must be enough to
/// unstick [`Cursor::Closed`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ReleaseCause {
    /// Primary button released normally.
    Up,
    /// Pointer sequence canceled by the platform.
    Cancel,
    /// The window lost focus.
    WindowBlur,
    /// The tab or document became hidden.
    TabHidden,
    /// The pointer left the window while the button was still down.
    WindowLeave,
}

/// Snapshot of hover context for one cursor evaluation.
///
/// Built by the caller at each input: `scene_hover` from the hover
/// tracker's [`has_hover`](crate::hover::HoverTracker::has_hover) query,
/// `interactive_target` from the host's own check of whatever sits under
/// the pointer (links, buttons, menu items). The scene signal takes
/// priority; both resolve to [`Cursor::Mid`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct PointerContext {
    /// The scene reports a (natural or forced) hover.
    pub scene_hover: bool,
    /// A generically interactive element sits under the pointer.
    pub interactive_target: bool,
}

impl PointerContext {
    /// Context with neither signal set.
    pub const EMPTY: Self = Self {
        scene_hover: false,
        interactive_target: false,
    };
}
