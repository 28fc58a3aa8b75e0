// DOM hooks and map-surface configuration. Every id and selector here is
// optional on the page; the wiring code skips whatever is missing.

// Map panel
pub const MAP_CONTAINER_ID: &str = "brandsMap";
pub const MAP_TOGGLE_ID: &str = "mapToggleSize";
pub const SHOW_ALL_ID: &str = "showAllBtn";
pub const STORE_CARD_SELECTOR: &str = ".slider-item";
pub const EXPANDED_CLASS: &str = "expanded";
pub const SELECTED_CLASS: &str = "active";
pub const MAP_TOGGLE_GLYPH_EXPANDED: &str = "✖";
pub const MAP_TOGGLE_GLYPH_COLLAPSED: &str = "⤢";

// Tile provider
pub const TILE_URL_TEMPLATE: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";

// Language switch
pub const LANG_BUTTON_ID: &str = "langBtn";
pub const LANG_LABEL_ID: &str = "langLabel";
pub const LANG_CHANGING_CLASS: &str = "language-changing";
pub const I18N_ATTR: &str = "data-i18n";
pub const I18N_SELECTOR: &str = "[data-i18n]";

// Product modal
pub const MODAL_ID: &str = "productModal";
pub const MODAL_BOX_SELECTOR: &str = ".modal-box";
pub const MODAL_ACTIVE_CLASS: &str = "active";
pub const PRODUCT_TRIGGER_SELECTOR: &str = "[data-product]";
pub const PRODUCT_ATTR: &str = "data-product";
pub const MAIN_IMAGE_ID: &str = "mainProductImage";
pub const ZOOM_CONTAINER_ID: &str = "zoomContainer";
pub const ZOOM_MODAL_ID: &str = "zoomFullscreenModal";
pub const ZOOM_IMAGE_SELECTOR: &str = ".fullscreen-image";
pub const ZOOM_INDICATOR_CLASS: &str = "zoom-level-indicator";

// Decorative effects
pub const COUNTER_SELECTOR: &str = ".stat-number";
pub const COUNTER_ATTR: &str = "data-count";
pub const PARALLAX_SELECTOR: &str = ".layer";
pub const PARALLAX_ATTR: &str = "data-speed";
pub const HERO_SELECTOR: &str = ".hero";
pub const RIPPLE_SELECTOR: &str =
    ".btn-primary, .btn-secondary, .btn-cta, .btn-product, .language-btn";
pub const REVEAL_SELECTOR: &str =
    ".products-header, .products-grid, .brands-header, .brands-slider, .mission-vision";
pub const REVEAL_CLASS: &str = "visible";

// Navigation
pub const NAV_LINK_SELECTOR: &str = ".nav a";
pub const HEADER_SELECTOR: &str = ".header";
pub const SCROLL_INDICATOR_SELECTOR: &str = ".scroll-indicator";
pub const ABOUT_SECTION_ID: &str = "nosotros";

// About video
pub const VIDEO_ID: &str = "aboutVideo";
pub const VIDEO_SOUND_ID: &str = "videoSoundBtn";
pub const VIDEO_PAUSED_CLASS: &str = "paused";
pub const VIDEO_UNMUTED_CLASS: &str = "unmuted";
