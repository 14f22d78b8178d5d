// Copyright 2026 the Diorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interactive scene controller.
//!
//! Wires the picker, the hover tracker, and the cursor machine together in
//! one direction: pointer sample → hit test → hover transition → cursor
//! evaluation → effects. The cursor machine only ever sees a
//! [`PointerContext`] snapshot; hover logic never consults cursor state, so
//! hover keeps tracking during a held button and the cursor simply stays
//! latched closed until a release input arrives.

use diorama_mask::AlphaMask;
use diorama_pointer::adapters::scene as scene_adapter;
use diorama_pointer::cursor::CursorMachine;
use diorama_pointer::hover::{HoverParams, HoverTracker};
use diorama_pointer::types::{Cursor, PointerContext, ReleaseCause};
use diorama_scene::{HitParams, ItemId, Scene, SceneItem};
use kurbo::{Point, Rect};

use crate::effect::Effect;

/// Tuning and routing configuration for a [`SceneController`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Opacity hit-test tolerances.
    pub hit: HitParams,
    /// Hover hysteresis tuning.
    pub hover: HoverParams,
    /// Base path for click navigation targets; a confirmed click on an item
    /// navigates to `<projects_base>/<slug>.html`.
    pub projects_base: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            hit: HitParams::default(),
            hover: HoverParams::default(),
            projects_base: "projects".into(),
        }
    }
}

/// The hero scene: registry, pointer wiring, and the external contracts
/// (forced hover, `has_hover`, click-to-navigate).
#[derive(Clone, Debug)]
pub struct SceneController {
    scene: Scene,
    tracker: HoverTracker<ItemId>,
    cursor: CursorMachine,
    config: ControllerConfig,
}

impl SceneController {
    /// Initialize the scene from the interactive items present on the page.
    ///
    /// Returns `None` when there are none — the page without a scene — so
    /// callers skip all wiring instead of handling errors. Registration
    /// order is paint order.
    pub fn init(config: ControllerConfig, items: Vec<SceneItem>) -> Option<Self> {
        if items.is_empty() {
            log::debug!("no interactive items; scene wiring skipped");
            return None;
        }
        let mut scene = Scene::new();
        for item in items {
            scene.insert(item);
        }
        log::debug!("scene initialized with {} items", scene.len());
        Some(Self {
            scene,
            tracker: HoverTracker::with_params(config.hover),
            cursor: CursorMachine::new(),
            config,
        })
    }

    /// The host finished decoding an item's image: build and attach its
    /// alpha mask at natural resolution.
    ///
    /// Until this is called the item never hits. Unknown slugs and
    /// malformed buffers are ignored (the item stays inert). Returns
    /// whether a mask was attached.
    pub fn attach_image(&mut self, slug: &str, width: u32, height: u32, rgba: &[u8]) -> bool {
        let Some(id) = self.scene.find_by_slug(slug) else {
            log::trace!("attach_image: unknown slug {slug:?}");
            return false;
        };
        let Some(mask) = AlphaMask::from_rgba(width, height, rgba) else {
            log::trace!("attach_image: bad buffer for {slug:?} ({width}x{height})");
            return false;
        };
        self.scene.attach_mask(id, mask);
        log::trace!("mask attached for {slug:?} ({width}x{height})");
        true
    }

    /// Layout changed: update an item's screen frame.
    pub fn set_frame(&mut self, slug: &str, frame: Rect) {
        if let Some(id) = self.scene.find_by_slug(slug) {
            self.scene.set_frame(id, frame);
        }
    }

    /// True iff the scene reports a hover, forced or natural. The sole read
    /// query other components use.
    pub fn has_hover(&self) -> bool {
        self.tracker.has_hover()
    }

    /// One pointer-move sample over the scene.
    ///
    /// `interactive_target` is the host's hint that a generically
    /// interactive element (link, button, menu item) sits under the
    /// pointer; scene hover takes priority over it.
    pub fn pointer_move(&mut self, screen: Point, interactive_target: bool) -> Vec<Effect> {
        let mut effects = Vec::new();
        // The hit test runs even while an override is forced; the tracker
        // discards its output.
        let events =
            scene_adapter::sample_scene(&self.scene, &self.config.hit, &mut self.tracker, screen);
        if !events.is_empty() {
            effects.push(self.highlight());
        }
        let ctx = self.context(interactive_target);
        if let Some(state) = self.cursor.pointer_move(ctx) {
            effects.push(Effect::Cursor(state));
        }
        effects
    }

    /// The pointer left the scene: drop any natural hover immediately.
    pub fn pointer_leave(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        let events = self.tracker.pointer_left();
        if !events.is_empty() {
            effects.push(self.highlight());
        }
        let ctx = self.context(false);
        if let Some(state) = self.cursor.pointer_move(ctx) {
            effects.push(Effect::Cursor(state));
        }
        effects
    }

    /// Primary button pressed: latch the closed cursor.
    pub fn button_down(&mut self) -> Vec<Effect> {
        match self.cursor.button_down() {
            Some(state) => vec![Effect::Cursor(state)],
            None => Vec::new(),
        }
    }

    /// Primary button released normally.
    pub fn button_up(&mut self, interactive_target: bool) -> Vec<Effect> {
        self.recover(ReleaseCause::Up, interactive_target)
    }

    /// A release or defensive recovery trigger fired (pointer-cancel,
    /// window blur, tab hidden, pointer left the window while down).
    /// Guarantees the cursor can never stay stuck closed.
    pub fn recover(&mut self, cause: ReleaseCause, interactive_target: bool) -> Vec<Effect> {
        log::trace!("cursor release: {cause:?}");
        let ctx = self.context(interactive_target);
        match self.cursor.release(cause, ctx) {
            Some(state) => vec![Effect::Cursor(state)],
            None => Vec::new(),
        }
    }

    /// The host's idle timer fired.
    pub fn idle_elapsed(&mut self) -> Vec<Effect> {
        match self.cursor.idle_elapsed() {
            Some(state) => vec![Effect::Cursor(state)],
            None => Vec::new(),
        }
    }

    /// A click over the scene. A confirmed hit briefly shows the closed
    /// cursor and navigates to the item's page; a miss does nothing.
    ///
    /// The closed marker is transient: the page is about to unload, so the
    /// cursor machine's state is left alone.
    pub fn click(&mut self, screen: Point) -> Vec<Effect> {
        let Some(id) = self.scene.hit_test(screen, &self.config.hit) else {
            return Vec::new();
        };
        let Some(slug) = self.scene.slug(id) else {
            return Vec::new();
        };
        log::debug!("scene click on {slug:?}");
        vec![
            Effect::Cursor(Some(Cursor::Closed)),
            Effect::Navigate(format!("{}/{slug}.html", self.config.projects_base)),
        ]
    }

    /// Force the hover highlight onto the item with this slug (the
    /// navigation menu's preview contract), or clear the override with
    /// `None`. An unknown slug behaves as a clear. Applies the highlight
    /// and a cursor hint immediately, unless the button is latched.
    pub fn force_hover(&mut self, slug: Option<&str>) -> Vec<Effect> {
        let mut effects = Vec::new();
        let events = scene_adapter::force_slug(&self.scene, &mut self.tracker, slug);
        if !events.is_empty() {
            effects.push(self.highlight());
        }
        let ctx = self.context(false);
        if let Some(state) = self.cursor.pointer_move(ctx) {
            effects.push(Effect::Cursor(state));
        }
        effects
    }

    /// Clear the forced override. Equivalent to `force_hover(None)`.
    pub fn clear_forced_hover(&mut self) -> Vec<Effect> {
        self.force_hover(None)
    }

    fn context(&self, interactive_target: bool) -> PointerContext {
        PointerContext {
            scene_hover: self.tracker.has_hover(),
            interactive_target,
        }
    }

    /// The exclusive-highlight effect for the current hover state.
    fn highlight(&self) -> Effect {
        let slug = self
            .tracker
            .hovered()
            .and_then(|id| self.scene.slug(id))
            .map(String::from);
        Effect::Hover(slug)
    }
}
