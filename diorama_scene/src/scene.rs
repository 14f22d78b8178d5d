// Copyright 2026 the Diorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The item registry and the topmost-wins hit tester.

use alloc::vec::Vec;

use diorama_mask::{AlphaMask, MaskStore};
use kurbo::{Point, Rect};

use crate::cover;
use crate::{HitParams, ItemFlags, ItemId, SceneItem};

/// A registry of interactive sprites plus their alpha masks.
///
/// Items are registered once, in paint order, and never removed. Mutators
/// with an unknown id do nothing; this keeps every operation infallible.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    items: Vec<SceneItem>,
    masks: MaskStore<ItemId>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            masks: MaskStore::new(),
        }
    }

    /// Register an item. Registration order is paint order: later items
    /// paint on top and win overlapping hit tests.
    pub fn insert(&mut self, item: SceneItem) -> ItemId {
        let id = ItemId::new(self.items.len());
        self.items.push(item);
        id
    }

    /// Number of registered items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the scene has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item for `id`, if registered.
    pub fn item(&self, id: ItemId) -> Option<&SceneItem> {
        self.items.get(id.idx())
    }

    /// Item ids in registration (paint) order.
    pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        (0..self.items.len()).map(ItemId::new)
    }

    /// The slug for `id`, if registered.
    pub fn slug(&self, id: ItemId) -> Option<&str> {
        self.item(id).map(|item| item.slug.as_str())
    }

    /// Look an item up by slug.
    pub fn find_by_slug(&self, slug: &str) -> Option<ItemId> {
        self.items
            .iter()
            .position(|item| item.slug == slug)
            .map(ItemId::new)
    }

    /// Update the screen frame after a layout change.
    pub fn set_frame(&mut self, id: ItemId, frame: Rect) {
        if let Some(item) = self.items.get_mut(id.idx()) {
            item.frame = frame;
        }
    }

    /// Update flags.
    pub fn set_flags(&mut self, id: ItemId, flags: ItemFlags) {
        if let Some(item) = self.items.get_mut(id.idx()) {
            item.flags = flags;
        }
    }

    /// Attach the decoded alpha mask for `id`, replacing any previous one.
    ///
    /// Called when the item's image finishes decoding. Until then the item
    /// never hits. Unknown ids are ignored.
    pub fn attach_mask(&mut self, id: ItemId, mask: AlphaMask) {
        if self.item(id).is_some() {
            self.masks.insert(id, mask);
        }
    }

    /// Whether `id` has a mask attached.
    pub fn has_mask(&self, id: ItemId) -> bool {
        self.masks.contains(&id)
    }

    /// The topmost item with opaque content within tolerance of `screen`.
    ///
    /// Walks items in reverse registration order (topmost paint layer
    /// first) and returns the first for which [`Self::opaque_near`] holds.
    /// Deterministic for fixed masks and a fixed point.
    pub fn hit_test(&self, screen: Point, params: &HitParams) -> Option<ItemId> {
        (0..self.items.len())
            .rev()
            .map(ItemId::new)
            .find(|&id| self.opaque_near(id, screen, params))
    }

    /// Whether `id` has opaque content within tolerance of the screen point.
    ///
    /// False when the item is not both visible and pickable, has a zero
    /// natural size, or has no mask yet (image still loading or failed to
    /// decode) — the graceful-degradation path, not an error.
    pub fn opaque_near(&self, id: ItemId, screen: Point, params: &HitParams) -> bool {
        let Some(item) = self.item(id) else {
            return false;
        };
        if !item.flags.contains(ItemFlags::VISIBLE | ItemFlags::PICKABLE) {
            return false;
        }
        if item.natural.width <= 0.0 || item.natural.height <= 0.0 {
            return false;
        }
        let Some(mask) = self.masks.get(&id) else {
            return false;
        };
        let p = cover::to_image_space(item.frame, item.natural, screen);
        mask.opaque_within(
            floor_to_i64(p.x),
            floor_to_i64(p.y),
            params.radius,
            params.threshold,
        )
    }
}

// f64::floor is unavailable in core; floor-divide by hand.
#[inline]
fn floor_to_i64(v: f64) -> i64 {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Mapped image coordinates fit i64 for any on-screen point."
    )]
    let i = v as i64;
    if (i as f64) > v { i - 1 } else { i }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use kurbo::Size;

    // 16×16 mask, fully opaque.
    fn solid_mask() -> AlphaMask {
        AlphaMask::from_alpha(16, 16, vec![255; 256]).unwrap()
    }

    fn item_at(slug: &str, frame: Rect) -> SceneItem {
        let mut item = SceneItem::new(slug, Size::new(16.0, 16.0));
        item.frame = frame;
        item
    }

    // Small tolerance so overlap tests stay local.
    fn tight() -> HitParams {
        HitParams {
            radius: 0,
            threshold: 15,
        }
    }

    #[test]
    fn unloaded_item_never_hits() {
        let mut scene = Scene::new();
        let id = scene.insert(item_at("a", Rect::new(0.0, 0.0, 16.0, 16.0)));
        assert_eq!(scene.hit_test(Point::new(8.0, 8.0), &tight()), None);
        scene.attach_mask(id, solid_mask());
        assert_eq!(scene.hit_test(Point::new(8.0, 8.0), &tight()), Some(id));
    }

    #[test]
    fn topmost_wins_on_overlap() {
        let mut scene = Scene::new();
        let below = scene.insert(item_at("below", Rect::new(0.0, 0.0, 16.0, 16.0)));
        let above = scene.insert(item_at("above", Rect::new(0.0, 0.0, 16.0, 16.0)));
        scene.attach_mask(below, solid_mask());
        scene.attach_mask(above, solid_mask());
        assert_eq!(scene.hit_test(Point::new(8.0, 8.0), &tight()), Some(above));

        // Hide the top item: the lower one shows through.
        scene.set_flags(above, ItemFlags::PICKABLE);
        assert_eq!(scene.hit_test(Point::new(8.0, 8.0), &tight()), Some(below));
    }

    #[test]
    fn hit_test_is_deterministic() {
        let mut scene = Scene::new();
        let a = scene.insert(item_at("a", Rect::new(0.0, 0.0, 16.0, 16.0)));
        scene.attach_mask(a, solid_mask());
        let p = Point::new(3.0, 12.0);
        let first = scene.hit_test(p, &tight());
        for _ in 0..10 {
            assert_eq!(scene.hit_test(p, &tight()), first);
        }
    }

    #[test]
    fn frames_are_read_fresh() {
        let mut scene = Scene::new();
        let id = scene.insert(item_at("a", Rect::new(0.0, 0.0, 16.0, 16.0)));
        scene.attach_mask(id, solid_mask());
        assert_eq!(scene.hit_test(Point::new(8.0, 8.0), &tight()), Some(id));

        // Layout moved the item; the old point misses, the new one hits.
        scene.set_frame(id, Rect::new(100.0, 100.0, 116.0, 116.0));
        assert_eq!(scene.hit_test(Point::new(8.0, 8.0), &tight()), None);
        assert_eq!(scene.hit_test(Point::new(108.0, 108.0), &tight()), Some(id));
    }

    #[test]
    fn zero_natural_size_never_hits() {
        let mut scene = Scene::new();
        let mut item = SceneItem::new("broken", Size::ZERO);
        item.frame = Rect::new(0.0, 0.0, 16.0, 16.0);
        let id = scene.insert(item);
        scene.attach_mask(id, solid_mask());
        assert_eq!(scene.hit_test(Point::new(8.0, 8.0), &tight()), None);
    }

    // The radius-boundary case through the full pipeline: natural-size
    // frame at the origin (identity mapping), one opaque pixel at
    // (100, 100), radius 50.
    #[test]
    fn radius_boundary_through_cover_mapping() {
        let mut alpha = vec![0_u8; 300 * 300];
        alpha[100 * 300 + 100] = 200;
        let mask = AlphaMask::from_alpha(300, 300, alpha).unwrap();

        let mut scene = Scene::new();
        let mut item = SceneItem::new("lone", Size::new(300.0, 300.0));
        item.frame = Rect::new(0.0, 0.0, 300.0, 300.0);
        let id = scene.insert(item);
        scene.attach_mask(id, mask);

        let params = HitParams::default();
        assert_eq!(scene.hit_test(Point::new(100.0, 100.0), &params), Some(id));
        assert_eq!(scene.hit_test(Point::new(150.0, 100.0), &params), Some(id));
        assert_eq!(scene.hit_test(Point::new(151.0, 100.0), &params), None);
    }

    #[test]
    fn cover_cropped_frame_maps_hits() {
        // 16×16 image in a 32×16 frame: scale 2, vertical crop of 8 screen
        // px at top and bottom. The mask is opaque only at image row 0,
        // which sits 8 px above the frame top — unreachable on screen with
        // zero tolerance, reachable with a small radius.
        let mut alpha = vec![0_u8; 256];
        for x in 0..16 {
            alpha[x] = 255;
        }
        let mask = AlphaMask::from_alpha(16, 16, alpha).unwrap();

        let mut scene = Scene::new();
        let mut item = SceneItem::new("strip", Size::new(16.0, 16.0));
        item.frame = Rect::new(0.0, 0.0, 32.0, 16.0);
        let id = scene.insert(item);
        scene.attach_mask(id, mask);

        // Frame top edge maps to image y = 4; rows 0..=3 are cropped away.
        assert_eq!(scene.hit_test(Point::new(16.0, 0.0), &tight()), None);
        let forgiving = HitParams {
            radius: 4,
            threshold: 15,
        };
        assert_eq!(scene.hit_test(Point::new(16.0, 0.0), &forgiving), Some(id));
    }

    // Truncation would turn image x = -0.5 into 0 and hit the edge pixel;
    // flooring keeps it at -1, outside the mask.
    #[test]
    fn negative_coordinates_floor_toward_minus_infinity() {
        let mut scene = Scene::new();
        let id = scene.insert(item_at("a", Rect::new(0.0, 0.0, 16.0, 16.0)));
        scene.attach_mask(id, solid_mask());
        assert_eq!(scene.hit_test(Point::new(-0.5, 8.0), &tight()), None);
        assert_eq!(scene.hit_test(Point::new(0.5, 8.0), &tight()), Some(id));
    }

    #[test]
    fn find_by_slug_resolves_registered_items() {
        let mut scene = Scene::new();
        let a = scene.insert(item_at("precision-arm", Rect::ZERO));
        let b = scene.insert(item_at("b2emo", Rect::ZERO));
        assert_eq!(scene.find_by_slug("precision-arm"), Some(a));
        assert_eq!(scene.find_by_slug("b2emo"), Some(b));
        assert_eq!(scene.find_by_slug("harmonic-drive"), None);
    }
}
