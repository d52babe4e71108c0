use std::f64::consts::PI;

/// Dot radius, also the inset from the ring's bounding box.
pub const DOT_RADIUS: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingLayer {
    pub size: f64,
    pub dots: usize,
    pub color: &'static str,
    pub spin_class: &'static str,
}

pub const RING_LAYERS: [RingLayer; 3] = [
    RingLayer {
        size: 230.0,
        dots: 70,
        color: "rgba(90, 232, 232, 0.678)",
        spin_class: "animate-spin-slow",
    },
    RingLayer {
        size: 250.0,
        dots: 80,
        color: "rgba(90, 232, 232, 0.4)",
        spin_class: "animate-spin-fast-reverse",
    },
    RingLayer {
        size: 280.0,
        dots: 100,
        color: "rgba(90, 232, 232, 0.3)",
        spin_class: "animate-spin-slow",
    },
];

/// Centres of `dots` evenly spaced dots around a ring of width `size`,
/// starting at 3 o'clock.
pub fn ring_points(size: f64, dots: usize) -> Vec<(f64, f64)> {
    let center = size / 2.0;
    let radius = center - DOT_RADIUS;
    (0..dots)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / dots as f64;
            (center + radius * angle.cos(), center + radius * angle.sin())
        })
        .collect()
}
