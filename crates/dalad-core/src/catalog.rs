//! Fixed list of partner stores shown on the locator map.

use crate::geo::LatLng;
use crate::i18n::{Lang, TextKey};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoreRecord {
    pub name: &'static str,
    pub color: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub address: &'static str,
}

impl StoreRecord {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }

    /// External route-planner link for this store.
    pub fn directions_url(&self) -> String {
        format!(
            "https://www.google.com/maps/search/?api=1&query={},{}",
            self.latitude, self.longitude
        )
    }

    /// Popup body bound to the store's marker.
    pub fn popup_html(&self, lang: Lang) -> String {
        format!(
            "<div class=\"store-popup\">\
<h3 style=\"color: {color}; margin: 0 0 10px 0;\">{name}</h3>\
<p style=\"margin: 0 0 5px 0;\"><strong>{address_label}</strong> {address}</p>\
<a href=\"{url}\" target=\"_blank\" rel=\"noopener\" \
style=\"display: inline-block; background: {color}; color: white; padding: 8px 15px; \
border-radius: 20px; text-decoration: none; font-weight: bold;\">\
<i class=\"fas fa-directions\"></i> {directions}</a>\
</div>",
            color = self.color,
            name = self.name,
            address_label = TextKey::MapAddress.text(lang),
            address = self.address,
            url = self.directions_url(),
            directions = TextKey::MapDirections.text(lang),
        )
    }
}

pub static STORES: [StoreRecord; 7] = [
    StoreRecord {
        name: "Supermercado La Iberica",
        color: "#FF6B8B",
        latitude: -1.6751025890367996,
        longitude: -78.65265327342753,
        address: "88FW+VW6, Riobamba",
    },
    StoreRecord {
        name: "Confitería Marianita",
        color: "#06D6A0",
        latitude: -1.6680388520766811,
        longitude: -78.64523750859273,
        address: "Nueva York, Riobamba",
    },
    StoreRecord {
        name: "Bode Market",
        color: "#9D4EDD",
        latitude: -1.689564,
        longitude: -78.625252,
        address: "Riobamba",
    },
    StoreRecord {
        name: "Si o Si",
        color: "#4ECDC4",
        latitude: -1.689202,
        longitude: -78.625618,
        address: "Riobamba",
    },
    StoreRecord {
        name: "Camari",
        color: "#FF9F43",
        latitude: -1.6754831333949813,
        longitude: -78.65008499880213,
        address: "Riobamba",
    },
    StoreRecord {
        name: "Comercial Paco",
        color: "#FFD166",
        latitude: -1.730729,
        longitude: -78.597229,
        address: "Chambo",
    },
    StoreRecord {
        name: "Minimarket Chambo",
        color: "#FFB86B",
        latitude: -1.733063,
        longitude: -78.595825,
        address: "Chambo",
    },
];

#[inline]
pub fn store(index: usize) -> Option<&'static StoreRecord> {
    STORES.get(index)
}

#[inline]
pub fn store_count() -> usize {
    STORES.len()
}
