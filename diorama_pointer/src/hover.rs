// Copyright 2026 the Diorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tracking with hysteresis and a forced override.
//!
//! ## Why hysteresis
//!
//! Pixel-accurate hit testing over thin silhouettes is noisy: sub-frame
//! pointer jumps and boundary pixels produce momentary misses while the
//! user is, for any human purpose, still hovering. Dropping the hover on
//! the first miss makes the highlight flicker. The tracker instead counts
//! consecutive misses and only goes idle once the streak reaches a
//! threshold; any hit resets the streak.
//!
//! ## Forced override
//!
//! An external collaborator (a navigation menu previewing its target) can
//! force a specific item hovered. While forced, natural samples are
//! ignored entirely — callers may keep hit testing, the output is simply
//! discarded — and only a new force or a clear changes the highlight.
//!
//! ## Usage
//!
//! Feed one [`sample`](HoverTracker::sample) per pointer-move with the
//! picker's result. Apply the returned [`HoverEvent`]s to your visuals:
//! the sequence always leaves at most one item highlighted.

use alloc::vec::Vec;

/// A hover highlight transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent<K> {
    /// The item gains the hover highlight.
    Enter(K),
    /// The item loses the hover highlight.
    Leave(K),
}

/// Tuning for the miss-streak grace period.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HoverParams {
    /// Consecutive no-hit samples tolerated before a hovered item is
    /// dropped.
    pub off_frames: u32,
}

impl Default for HoverParams {
    /// Eight frames: long enough to ride out boundary jitter, short enough
    /// that leaving a sprite still feels immediate.
    fn default() -> Self {
        Self { off_frames: 8 }
    }
}

/// Debounces hit-test results into a stable hovered item.
///
/// State is one of idle, hovering (with an internal miss streak), or
/// forced. See the [module docs](self) for the transition rules.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverTracker<K: Copy + Eq> {
    params: HoverParams,
    stable: Option<K>,
    miss_streak: u32,
    forced: Option<K>,
}

impl<K: Copy + Eq> HoverTracker<K> {
    /// Create a tracker with default parameters.
    pub fn new() -> Self {
        Self::with_params(HoverParams::default())
    }

    /// Create a tracker with explicit parameters.
    pub fn with_params(params: HoverParams) -> Self {
        Self {
            params,
            stable: None,
            miss_streak: 0,
            forced: None,
        }
    }

    /// The item currently carrying the hover highlight, if any.
    ///
    /// The forced item while an override is active, the stable hovered item
    /// otherwise.
    pub fn hovered(&self) -> Option<K> {
        self.forced.or(self.stable)
    }

    /// Whether an override is active.
    pub fn is_forced(&self) -> bool {
        self.forced.is_some()
    }

    /// True iff anything is hovered — forced or natural.
    ///
    /// The sole read query other components use (e.g. to decide the cursor
    /// visual without reaching into tracker internals).
    pub fn has_hover(&self) -> bool {
        self.forced.is_some() || self.stable.is_some()
    }

    /// Feed one hit-test result for a pointer-move sample.
    ///
    /// No-op while forced. Otherwise: a hit makes that item the stable
    /// hover and resets the miss streak; a miss while hovering increments
    /// the streak and drops to idle only once it reaches
    /// [`HoverParams::off_frames`]; a miss while idle stays idle.
    pub fn sample(&mut self, hit: Option<K>) -> Vec<HoverEvent<K>> {
        if self.forced.is_some() {
            return Vec::new();
        }
        match hit {
            Some(item) => {
                self.miss_streak = 0;
                let old = self.stable;
                self.stable = Some(item);
                transition(old, Some(item))
            }
            None => {
                let Some(old) = self.stable else {
                    return Vec::new();
                };
                self.miss_streak += 1;
                if self.miss_streak < self.params.off_frames {
                    // Grace period: presume the previous target is still
                    // correct despite the momentary miss.
                    return Vec::new();
                }
                self.stable = None;
                self.miss_streak = 0;
                transition(Some(old), None)
            }
        }
    }

    /// The pointer left the scene: drop any natural hover immediately,
    /// bypassing the grace period. No-op while forced.
    pub fn pointer_left(&mut self) -> Vec<HoverEvent<K>> {
        if self.forced.is_some() {
            return Vec::new();
        }
        let old = self.stable.take();
        self.miss_streak = 0;
        transition(old, None)
    }

    /// Set or clear the forced override.
    ///
    /// `Some(item)` highlights `item` exclusively and suspends natural
    /// updates. `None` exits the override, clears the highlight
    /// immediately, and resets the natural state so the next sample alone
    /// decides what is hovered. Callers that look items up by identifier
    /// pass `None` for unknown identifiers, which makes a bad reference
    /// equivalent to a clear.
    pub fn force(&mut self, target: Option<K>) -> Vec<HoverEvent<K>> {
        let old = self.hovered();
        self.forced = target;
        if target.is_none() {
            self.stable = None;
            self.miss_streak = 0;
        }
        transition(old, self.hovered())
    }
}

/// Leave-then-enter events for a highlight handoff, empty when unchanged.
fn transition<K: Copy + Eq>(old: Option<K>, new: Option<K>) -> Vec<HoverEvent<K>> {
    let mut out = Vec::new();
    if old == new {
        return out;
    }
    if let Some(o) = old {
        out.push(HoverEvent::Leave(o));
    }
    if let Some(n) = new {
        out.push(HoverEvent::Enter(n));
    }
    out
}
