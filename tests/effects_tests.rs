// Host-side tests for the decorative effect math.

use dalad_core::constants::{COUNTER_DURATION, PARTICLE_COUNT, PARTICLE_PALETTE};
use dalad_core::effects::{
    parallax_offset, particles, section_scroll_top, CounterAnimation, Ripple,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

#[test]
fn counter_lands_exactly_on_target() {
    let anim = CounterAnimation::new(15);
    assert_eq!(anim.value_at(Duration::ZERO), 0);
    assert_eq!(anim.value_at(COUNTER_DURATION), 15);
    assert_eq!(anim.value_at(COUNTER_DURATION * 3), 15);
    assert!(anim.is_finished(COUNTER_DURATION));
    assert!(!anim.is_finished(COUNTER_DURATION / 2));
}

#[test]
fn counter_is_monotonic_and_bounded() {
    let anim = CounterAnimation::new(1000);
    let mut prev = 0;
    for ms in (0..=1600).step_by(16) {
        let v = anim.value_at(Duration::from_millis(ms));
        assert!(v >= prev, "counter went backwards at {ms}ms");
        assert!(v <= 1000);
        prev = v;
    }
    assert_eq!(prev, 1000);
}

#[test]
fn counter_target_parsing() {
    assert_eq!(CounterAnimation::from_attr(Some(" 7 ")).target, 7);
    assert_eq!(CounterAnimation::from_attr(Some("lots")).target, 0);
    assert_eq!(CounterAnimation::from_attr(None).target, 0);
    assert!(CounterAnimation::from_attr(None).is_finished(Duration::ZERO));
}

#[test]
fn parallax_moves_against_pointer() {
    let [x, y] = parallax_offset([1000.0, 800.0], [0.0, 0.0], 2.0);
    assert_eq!([x, y], [5.0, 4.0]);
    let [x2, _] = parallax_offset([1000.0, 800.0], [500.0, 0.0], 2.0);
    assert!(x2 < x);
    assert_eq!(parallax_offset([400.0, 200.0], [10.0, 10.0], 0.0), [2.0, 1.0]);
}

#[test]
fn particles_stay_in_documented_ranges() {
    let mut rng = StdRng::seed_from_u64(42);
    let dots = particles(&mut rng, PARTICLE_COUNT);
    assert_eq!(dots.len(), 15);
    for p in &dots {
        assert!((0.0..100.0).contains(&p.left_pct));
        assert!((0.0..100.0).contains(&p.top_pct));
        assert!((2.0..8.0).contains(&p.size_px));
        assert!((8.0..18.0).contains(&p.duration_s));
        assert!((0.0..3.0).contains(&p.delay_s));
        assert!((0.1..0.4).contains(&p.opacity));
        assert!(PARTICLE_PALETTE.contains(&p.color));
        assert!(p.css_text().contains(p.color));
    }
}

#[test]
fn ripple_is_centred_on_click() {
    let r = Ripple::from_click([100.0, 50.0, 120.0, 40.0], [160.0, 70.0]);
    assert_eq!(r.size, 120.0);
    assert_eq!(r.x, 0.0);
    assert_eq!(r.y, -40.0);
    assert!(r.css_text().contains("width: 120px"));
}

#[test]
fn section_offset_subtracts_header() {
    assert_eq!(section_scroll_top(900.0, 80.0), 820.0);
}
