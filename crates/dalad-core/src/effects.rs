//! Geometry and timing for the purely decorative page effects.

use crate::constants::{COUNTER_DURATION, PARALLAX_DIVISOR, PARTICLE_PALETTE};
use rand::Rng;
use std::time::Duration;

/// Translation (px) for a parallax layer given the window size, the
/// pointer position and the layer's `data-speed`.
#[inline]
pub fn parallax_offset(window: [f64; 2], pointer: [f64; 2], speed: f64) -> [f64; 2] {
    [
        (window[0] - pointer[0] * speed) / PARALLAX_DIVISOR,
        (window[1] - pointer[1] * speed) / PARALLAX_DIVISOR,
    ]
}

/// Linear count-up from zero to `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    pub target: u32,
    pub duration: Duration,
}

impl CounterAnimation {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            duration: COUNTER_DURATION,
        }
    }

    /// Reads a `data-count` attribute; anything unparsable counts to zero.
    pub fn from_attr(attr: Option<&str>) -> Self {
        let target = attr.and_then(|s| s.trim().parse().ok()).unwrap_or(0);
        Self::new(target)
    }

    pub fn value_at(&self, elapsed: Duration) -> u32 {
        if self.is_finished(elapsed) {
            return self.target;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        (self.target as f64 * t).floor() as u32
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration || self.target == 0
    }
}

/// One floating dot in the hero section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub left_pct: f64,
    pub top_pct: f64,
    pub size_px: f64,
    pub color: &'static str,
    pub duration_s: f64,
    pub delay_s: f64,
    pub opacity: f64,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            left_pct: rng.gen_range(0.0..100.0),
            top_pct: rng.gen_range(0.0..100.0),
            size_px: rng.gen_range(2.0..8.0),
            color: PARTICLE_PALETTE[rng.gen_range(0..PARTICLE_PALETTE.len())],
            duration_s: rng.gen_range(8.0..18.0),
            delay_s: rng.gen_range(0.0..3.0),
            opacity: rng.gen_range(0.1..0.4),
        }
    }

    pub fn css_text(&self) -> String {
        format!(
            "position: absolute; left: {left}%; top: {top}%; width: {size}px; height: {size}px; \
background: {color}; border-radius: 50%; pointer-events: none; z-index: 1; opacity: {opacity}; \
animation: floatParticle {duration}s linear infinite {delay}s; box-shadow: 0 0 {size}px {color};",
            left = self.left_pct,
            top = self.top_pct,
            size = self.size_px,
            color = self.color,
            opacity = self.opacity,
            duration = self.duration_s,
            delay = self.delay_s,
        )
    }
}

pub fn particles<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Particle> {
    (0..count).map(|_| Particle::random(rng)).collect()
}

/// Expanding circle placed under the click point of a button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub x: f64,
    pub y: f64,
}

impl Ripple {
    /// `rect` is `[left, top, width, height]` of the clicked element.
    pub fn from_click(rect: [f64; 4], client: [f64; 2]) -> Self {
        let size = rect[2].max(rect[3]);
        Self {
            size,
            x: client[0] - rect[0] - size / 2.0,
            y: client[1] - rect[1] - size / 2.0,
        }
    }

    pub fn css_text(&self) -> String {
        format!(
            "position: absolute; border-radius: 50%; background: rgba(255, 255, 255, 0.7); \
transform: scale(0); animation: ripple 0.6s linear; width: {s}px; height: {s}px; \
top: {y}px; left: {x}px; pointer-events: none;",
            s = self.size,
            x = self.x,
            y = self.y,
        )
    }
}

/// Scroll position that puts a section right below the fixed header.
#[inline]
pub fn section_scroll_top(section_offset_top: f64, header_height: f64) -> f64 {
    section_offset_top - header_height
}
