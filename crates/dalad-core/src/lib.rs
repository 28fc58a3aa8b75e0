pub mod catalog;
pub mod constants;
pub mod effects;
pub mod error;
pub mod geo;
pub mod i18n;
pub mod map_view;
pub mod modal;
pub mod products;
pub mod state;
pub mod store_list;

pub use catalog::{StoreRecord, STORES};
pub use error::SiteError;
pub use geo::{LatLng, LatLngBounds};
pub use i18n::{Lang, TextKey, TranslationStore};
pub use map_view::{MapView, Marker, ViewMode, Viewport};
pub use modal::ProductModal;
pub use products::{ProductId, ProductRecord};
pub use state::{Command, SiteEvent, SiteState};
pub use store_list::StoreList;
