// Copyright 2026 the Diorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation dropdown wiring.
//!
//! Each dropdown item names a scene item; hovering the menu entry previews
//! it in the hero scene through the controller's forced-hover contract, so
//! the user sees which robot a link leads to before committing.

use crate::controller::SceneController;
use crate::effect::Effect;

/// One dropdown entry: the scene slug it previews and the page it opens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItem {
    /// Scene item to preview while this entry is hovered.
    pub slug: String,
    /// Navigation target on activation. Empty or `"#"` entries are inert.
    pub href: String,
}

/// The dropdown menu. With no items it is inert, matching a page where the
/// menu was never injected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    items: Vec<MenuItem>,
}

impl NavMenu {
    /// Create a menu from its entries.
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the menu has no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The pointer entered entry `index`: preview its scene item.
    pub fn item_entered(&self, index: usize, scene: &mut SceneController) -> Vec<Effect> {
        match self.items.get(index) {
            Some(item) => scene.force_hover(Some(&item.slug)),
            None => Vec::new(),
        }
    }

    /// The pointer left an entry: drop the preview.
    pub fn item_left(&self, scene: &mut SceneController) -> Vec<Effect> {
        scene.clear_forced_hover()
    }

    /// Entry `index` was activated: navigate, unless the entry is inert.
    pub fn item_activated(&self, index: usize) -> Vec<Effect> {
        let Some(item) = self.items.get(index) else {
            return Vec::new();
        };
        if item.href.is_empty() || item.href == "#" {
            return Vec::new();
        }
        vec![Effect::Navigate(item.href.clone())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::ControllerConfig;
    use diorama_scene::SceneItem;
    use diorama_pointer::types::Cursor;
    use kurbo::{Rect, Size};

    fn scene() -> SceneController {
        let mut item = SceneItem::new("controller", Size::new(4.0, 4.0));
        item.frame = Rect::new(0.0, 0.0, 4.0, 4.0);
        SceneController::init(ControllerConfig::default(), vec![item]).unwrap()
    }

    fn menu() -> NavMenu {
        NavMenu::new(vec![
            MenuItem {
                slug: "controller".into(),
                href: "/projects/controller.html".into(),
            },
            MenuItem {
                slug: "ghost".into(),
                href: "#".into(),
            },
        ])
    }

    #[test]
    fn entering_an_entry_previews_its_item() {
        let mut scene = scene();
        let effects = menu().item_entered(0, &mut scene);
        assert_eq!(
            effects,
            vec![
                Effect::Hover(Some("controller".into())),
                Effect::Cursor(Some(Cursor::Mid)),
            ]
        );
        assert!(scene.has_hover());
    }

    #[test]
    fn leaving_clears_the_preview() {
        let mut scene = scene();
        let m = menu();
        m.item_entered(0, &mut scene);
        let effects = m.item_left(&mut scene);
        assert_eq!(
            effects,
            vec![Effect::Hover(None), Effect::Cursor(Some(Cursor::Open))]
        );
        assert!(!scene.has_hover());
    }

    // An entry whose slug matches no scene item still clears cleanly.
    #[test]
    fn entry_with_unknown_slug_is_a_clear() {
        let mut scene = scene();
        let m = menu();
        m.item_entered(0, &mut scene);
        let effects = m.item_entered(1, &mut scene);
        assert_eq!(
            effects,
            vec![Effect::Hover(None), Effect::Cursor(Some(Cursor::Open))]
        );
    }

    #[test]
    fn activation_skips_placeholder_hrefs() {
        let m = menu();
        assert_eq!(
            m.item_activated(0),
            vec![Effect::Navigate("/projects/controller.html".into())]
        );
        assert_eq!(m.item_activated(1), vec![]);
        assert_eq!(m.item_activated(99), vec![]);
    }
}
