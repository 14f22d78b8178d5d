// Copyright 2026 the Diorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A whole page session driven through the shell.
//!
//! Plays the boot gate, initializes the scene, then walks through a
//! realistic event sequence — image decode, pointer moves, a menu preview,
//! the about overlay, a click-through — printing every effect the host
//! would apply. Set `RUST_LOG=trace` to watch the shell's diagnostics.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p diorama_demos --example controller_session`

use diorama_shell::session::{self, MemoryFlags};
use diorama_shell::{
    AboutOverlay, ControllerConfig, Effect, MenuItem, NavMenu, SceneController, SceneItem,
};
use kurbo::{Point, Rect, Size};

fn apply(label: &str, effects: Vec<Effect>) {
    for effect in effects {
        println!("{label:<24} -> {effect:?}");
    }
}

fn main() {
    env_logger::init();

    let mut flags = MemoryFlags::new();
    println!("boot plays: {}", session::should_play_boot(&mut flags));
    println!("boot plays again: {}", session::should_play_boot(&mut flags));

    let mut item = SceneItem::new("precision-arm", Size::new(16.0, 16.0));
    item.frame = Rect::new(100.0, 100.0, 116.0, 116.0);
    let mut scene = SceneController::init(ControllerConfig::default(), vec![item])
        .expect("one item registered");

    // The image decodes a beat later; the first sample misses gracefully.
    apply("move (still loading)", scene.pointer_move(Point::new(108.0, 108.0), false));
    scene.attach_image("precision-arm", 16, 16, &[255; 16 * 16 * 4]);
    apply("move (decoded)", scene.pointer_move(Point::new(108.0, 108.0), false));

    // Menu preview from the dropdown.
    let menu = NavMenu::new(vec![MenuItem {
        slug: "precision-arm".into(),
        href: "/projects/precision-arm.html".into(),
    }]);
    apply("menu leave", menu.item_left(&mut scene));
    apply("menu enter", menu.item_entered(0, &mut scene));
    apply("menu leave", menu.item_left(&mut scene));

    // The about overlay, deep-linked and dismissed.
    let mut overlay = AboutOverlay::new();
    apply("hash sync #about", overlay.sync_from_hash("#about"));
    apply("escape", overlay.dismiss("#about"));

    // Click through to the project page.
    apply("press", scene.button_down());
    apply("release", scene.button_up(false));
    apply("click", scene.click(Point::new(108.0, 108.0)));
}
