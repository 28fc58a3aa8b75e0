use std::time::Duration;

// Timings and limits shared by the web frontend and host tests.

// Map
pub const MAP_INITIAL_CENTER: [f64; 2] = [-1.6717, -78.6569]; // Riobamba
pub const MAP_INITIAL_ZOOM: f64 = 13.0;
pub const MAP_MAX_ZOOM: f64 = 19.0;
pub const SINGLE_STORE_ZOOM: f64 = 17.0;
pub const FIT_BOUNDS_PADDING: f64 = 0.3; // fraction of the span added on each side
pub const MAP_RESIZE_SETTLE: Duration = Duration::from_millis(350); // matches the CSS size transition

// Marker icons (px)
pub const MARKER_SIZE: u32 = 35;
pub const MARKER_SIZE_ACTIVE: u32 = 45;

// Store list
pub const SHOW_ALL_CONFIRM: Duration = Duration::from_millis(3000);

// Language switch
pub const LANGUAGE_FLASH: Duration = Duration::from_millis(300);
pub const LANGUAGE_REAPPLY: Duration = Duration::from_millis(80);

// Product modal
pub const MODAL_REVEAL_DELAY: Duration = Duration::from_millis(50);
pub const MODAL_HIDE_DELAY: Duration = Duration::from_millis(200); // exit transition length
pub const ZOOM_MIN: f64 = 0.5;
pub const ZOOM_MAX: f64 = 5.0;
pub const ZOOM_IN_STEP: f64 = 1.2;
pub const ZOOM_OUT_STEP: f64 = 0.8;
pub const WHEEL_ZOOM_IN: f64 = 1.1;
pub const WHEEL_ZOOM_OUT: f64 = 0.9;
pub const ZOOM_INDICATOR_VISIBLE: Duration = Duration::from_millis(1500);

// Decorative effects
pub const COUNTER_START_DELAY: Duration = Duration::from_millis(1000);
pub const COUNTER_DURATION: Duration = Duration::from_millis(1500);
pub const COUNTER_VISIBILITY_THRESHOLD: f64 = 0.5;
pub const SECTION_VISIBILITY_THRESHOLD: f64 = 0.1;
pub const PARALLAX_DIVISOR: f64 = 200.0;
pub const PARTICLE_COUNT: usize = 15;
pub const PARTICLE_PALETTE: [&str; 4] = ["#FF6B8B", "#FFD166", "#4ECDC4", "#06D6A0"];
pub const RIPPLE_LIFETIME: Duration = Duration::from_millis(600);
pub const PAGE_FADE_IN_DELAY: Duration = Duration::from_millis(100);
