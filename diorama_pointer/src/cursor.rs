// Copyright 2026 the Diorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The process-wide cursor state machine.
//!
//! ## States
//!
//! `None` (no marker — the host's default cursor, after an idle timeout),
//! or one of [`Cursor::Open`], [`Cursor::Mid`], [`Cursor::Closed`].
//!
//! ## Stickiness and recovery
//!
//! [`Cursor::Closed`] is entered unconditionally on primary-button-down
//! and no move sample can override it while the button is logically down.
//! The latch is released only by an explicit [`ReleaseCause`]; beyond the
//! ordinary pointer-up there are several redundant causes (cancel, window
//! blur, tab hidden, pointer leaving the window while down) so that a
//! swallowed pointer-up can never leave the machine stuck grabbing.
//!
//! On release — and on every move while not down — the next visual is
//! re-evaluated from a [`PointerContext`]: scene hover wins, then a
//! generically interactive target, else open.

use crate::types::{Cursor, PointerContext, ReleaseCause};

/// Open/mid/closed cursor visual, with a sticky closed state.
///
/// Every input method returns the new visual wrapped in `Some` when it
/// changed, or `None` when it did not; the host applies changes as an
/// exclusive marker on the document root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CursorMachine {
    state: Option<Cursor>,
    down: bool,
}

impl CursorMachine {
    /// Create a machine with no marker active and the button up.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently active visual, if any.
    pub fn state(&self) -> Option<Cursor> {
        self.state
    }

    /// Whether the primary button is logically down.
    pub fn is_down(&self) -> bool {
        self.down
    }

    /// Primary button pressed: latch [`Cursor::Closed`].
    pub fn button_down(&mut self) -> Option<Option<Cursor>> {
        self.down = true;
        self.set(Some(Cursor::Closed))
    }

    /// A pointer-move sample. Ignored entirely while the button is down;
    /// otherwise re-evaluates against `ctx`.
    pub fn pointer_move(&mut self, ctx: PointerContext) -> Option<Option<Cursor>> {
        if self.down {
            return None;
        }
        self.set(Some(evaluate(ctx)))
    }

    /// Release the held-button latch and re-evaluate against `ctx`.
    ///
    /// `cause` records which trigger fired; every cause behaves the same.
    /// Calling this while the button is already up is harmless — it just
    /// re-evaluates, which is what a spurious blur should do anyway.
    pub fn release(&mut self, cause: ReleaseCause, ctx: PointerContext) -> Option<Option<Cursor>> {
        let _ = cause;
        self.down = false;
        self.set(Some(evaluate(ctx)))
    }

    /// The host's idle timer fired: drop the marker, unless the button is
    /// held (idle never overrides a grab).
    pub fn idle_elapsed(&mut self) -> Option<Option<Cursor>> {
        if self.down {
            return None;
        }
        self.set(None)
    }

    fn set(&mut self, next: Option<Cursor>) -> Option<Option<Cursor>> {
        if self.state == next {
            return None;
        }
        self.state = next;
        Some(next)
    }
}

/// Scene hover first, then the interactive-target check, else open.
fn evaluate(ctx: PointerContext) -> Cursor {
    if ctx.scene_hover || ctx.interactive_target {
        Cursor::Mid
    } else {
        Cursor::Open
    }
}
