// Copyright 2026 the Diorama Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The opacity scan is O(radius²) per candidate per query, which is fine at
//! interactive rates for the default radius and a handful of sprites.
//! These benches keep an eye on how fast that stops being true as the
//! radius or the item count grows.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use diorama_mask::AlphaMask;
use diorama_scene::{HitParams, Scene, SceneItem};
use kurbo::{Point, Rect, Size};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // xorshift64*
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    fn next_u8(&mut self) -> u8 {
        (self.next_u64() & 0xFF) as u8
    }
}

/// A mask of edge noise: alpha scattered strictly below the default
/// threshold, so every scan is a worst-case full-window miss.
fn noise_mask(size: u32, seed: u64) -> AlphaMask {
    let mut rng = Rng::new(seed);
    let alpha = (0..size as usize * size as usize)
        .map(|_| rng.next_u8() % 16)
        .collect();
    AlphaMask::from_alpha(size, size, alpha).unwrap()
}

fn bench_opaque_within(c: &mut Criterion) {
    let mask = noise_mask(1024, 0x5EED);
    let mut group = c.benchmark_group("opaque_within_miss");
    for radius in [10_u32, 25, 50, 100] {
        let window = u64::from(2 * radius + 1);
        group.throughput(Throughput::Elements(window * window));
        group.bench_function(format!("radius_{radius}"), |b| {
            b.iter(|| black_box(mask.opaque_within(black_box(512), black_box(512), radius, 15)));
        });
    }
    group.finish();

    // Early exit: an opaque pixel right at the scan center.
    let mut alpha = vec![0_u8; 1024 * 1024];
    alpha[512 * 1024 + 512] = 255;
    let hit_mask = AlphaMask::from_alpha(1024, 1024, alpha).unwrap();
    c.bench_function("opaque_within_center_hit_radius_50", |b| {
        b.iter(|| black_box(hit_mask.opaque_within(black_box(512), black_box(512), 50, 15)));
    });
}

fn bench_scene_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_hit_test_miss");
    for count in [1_usize, 4, 8, 16] {
        let mut scene = Scene::new();
        for i in 0..count {
            let mut item = SceneItem::new(format!("sprite-{i}"), Size::new(512.0, 512.0));
            item.frame = Rect::new(0.0, 0.0, 512.0, 512.0);
            let id = scene.insert(item);
            scene.attach_mask(id, noise_mask(512, i as u64 + 1));
        }
        let params = HitParams::default();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("items_{count}"), |b| {
            b.iter(|| black_box(scene.hit_test(black_box(Point::new(256.0, 256.0)), &params)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_opaque_within, bench_scene_hit_test);
criterion_main!(benches);
