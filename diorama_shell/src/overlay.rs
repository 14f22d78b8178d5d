// Copyright 2026 the Diorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The about overlay, synced to the location hash.
//!
//! The overlay and the `#about` fragment mirror each other in both
//! directions: toggling the overlay rewrites the hash (replace semantics,
//! so no history entry accumulates and nothing scrolls), and hash changes —
//! deep links, back/forward traversal, manual edits — drive the overlay
//! through [`AboutOverlay::sync_from_hash`].

use crate::effect::Effect;

/// The fragment that deep-links to the open overlay.
pub const ABOUT_HASH: &str = "#about";

/// Open/closed state of the about overlay.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AboutOverlay {
    open: bool,
}

impl AboutOverlay {
    /// Create a closed overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the overlay is shown.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The about button was pressed: toggle, keeping the hash in step.
    ///
    /// `current_hash` is the live `location.hash` (empty when absent); the
    /// hash rewrite is skipped when it already agrees, so copy-pasted links
    /// stay shareable without redundant history churn.
    pub fn toggle(&mut self, current_hash: &str) -> Vec<Effect> {
        if self.open {
            self.close(current_hash)
        } else {
            self.open = true;
            let mut effects = vec![Effect::Overlay(true)];
            if current_hash != ABOUT_HASH {
                effects.push(Effect::ReplaceHash(Some(ABOUT_HASH.into())));
            }
            effects
        }
    }

    /// Backdrop pressed or Escape: close, dropping the fragment if set.
    ///
    /// Safe to call while already closed (Escape is global on the page).
    pub fn dismiss(&mut self, current_hash: &str) -> Vec<Effect> {
        self.close(current_hash)
    }

    /// The location hash changed (load, back/forward, manual edit): make
    /// the overlay agree with it. Idempotent in both directions.
    pub fn sync_from_hash(&mut self, current_hash: &str) -> Vec<Effect> {
        let should_open = current_hash == ABOUT_HASH;
        if self.open == should_open {
            return Vec::new();
        }
        self.open = should_open;
        vec![Effect::Overlay(should_open)]
    }

    fn close(&mut self, current_hash: &str) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.open {
            self.open = false;
            effects.push(Effect::Overlay(false));
        }
        if current_hash == ABOUT_HASH {
            effects.push(Effect::ReplaceHash(None));
        }
        effects
    }
}
