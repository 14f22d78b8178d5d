// Copyright 2026 the Diorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover hysteresis on a synthetic sample trace.
//!
//! Feeds the tracker a jittery sequence — hits interleaved with short miss
//! bursts — and prints each transition, showing that only a long enough
//! miss streak drops the hover.
//!
//! Run:
//! - `cargo run -p diorama_demos --example hover_hysteresis`

use diorama_pointer::hover::{HoverEvent, HoverTracker};

fn main() {
    let mut tracker: HoverTracker<&str> = HoverTracker::new();

    // hit, 3-miss jitter burst, hit again, then a real departure.
    let trace: Vec<Option<&str>> = std::iter::empty()
        .chain([Some("b2emo")])
        .chain([None; 3])
        .chain([Some("b2emo")])
        .chain([None; 8])
        .collect();

    for (i, sample) in trace.iter().enumerate() {
        let events = tracker.sample(*sample);
        let label = match sample {
            Some(s) => *s,
            None => "-",
        };
        print!("#{i:<2} sample {label:<8} hovered: {:<8}", tracker.hovered().unwrap_or("(none)"));
        for ev in &events {
            match ev {
                HoverEvent::Enter(k) => print!("  enter {k}"),
                HoverEvent::Leave(k) => print!("  leave {k}"),
            }
        }
        println!();
    }

    // The jitter burst never dropped the hover; the final streak did.
    assert!(!tracker.has_hover());
}
