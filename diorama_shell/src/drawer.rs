// Copyright 2026 the Diorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mobile drawer open/close state.

use crate::effect::Effect;

/// The slide-in mobile menu.
///
/// The menu button toggles it; the backdrop closes it; activating any link
/// inside closes it and navigates. Every transition is idempotent — a
/// second backdrop press while closed does nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MobileDrawer {
    open: bool,
}

impl MobileDrawer {
    /// Create a closed drawer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the drawer is currently open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The menu button was pressed: toggle.
    pub fn menu_button_pressed(&mut self) -> Vec<Effect> {
        self.open = !self.open;
        vec![Effect::Drawer(self.open)]
    }

    /// The backdrop was pressed: close if open.
    pub fn backdrop_pressed(&mut self) -> Vec<Effect> {
        if !self.open {
            return Vec::new();
        }
        self.open = false;
        vec![Effect::Drawer(false)]
    }

    /// A link inside the drawer was activated: close and navigate.
    pub fn link_activated(&mut self, href: &str) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.open {
            self.open = false;
            effects.push(Effect::Drawer(false));
        }
        effects.push(Effect::Navigate(href.into()));
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_toggles() {
        let mut d = MobileDrawer::new();
        assert_eq!(d.menu_button_pressed(), vec![Effect::Drawer(true)]);
        assert!(d.is_open());
        assert_eq!(d.menu_button_pressed(), vec![Effect::Drawer(false)]);
        assert!(!d.is_open());
    }

    #[test]
    fn backdrop_closes_only_when_open() {
        let mut d = MobileDrawer::new();
        assert_eq!(d.backdrop_pressed(), vec![]);
        d.menu_button_pressed();
        assert_eq!(d.backdrop_pressed(), vec![Effect::Drawer(false)]);
    }

    #[test]
    fn link_closes_and_navigates() {
        let mut d = MobileDrawer::new();
        d.menu_button_pressed();
        assert_eq!(
            d.link_activated("/gallery.html"),
            vec![
                Effect::Drawer(false),
                Effect::Navigate("/gallery.html".into()),
            ]
        );
        // Already closed (e.g. a link on the page body): just navigate.
        assert_eq!(
            d.link_activated("/gallery.html"),
            vec![Effect::Navigate("/gallery.html".into())]
        );
    }
}
