//! Bindings to the subset of Leaflet (global `L`) the store map uses.
//!
//! Thin wrappers only: option objects are built here, decisions live in
//! `dalad_core::map_view`.

use dalad_core::geo::{LatLng, LatLngBounds};
use dalad_core::map_view::MarkerIcon;
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    pub type LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = map, catch)]
    fn create_map(container_id: &str) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &LeafletMap, center: &Array, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(method, js_name = fitBounds)]
    pub fn fit_bounds(this: &LeafletMap, bounds: &Array) -> LeafletMap;

    #[wasm_bindgen(method, js_name = removeLayer)]
    pub fn remove_layer(this: &LeafletMap, layer: &Marker) -> LeafletMap;

    #[wasm_bindgen(method, js_name = invalidateSize)]
    pub fn invalidate_size(this: &LeafletMap) -> LeafletMap;
}

#[wasm_bindgen]
extern "C" {
    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn create_tile_layer(url_template: &str, options: &Object) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;
}

#[wasm_bindgen]
extern "C" {
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn create_marker(latlng: &Array, options: &Object) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Marker, map: &LeafletMap) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &Marker, html: &str) -> Marker;

    #[wasm_bindgen(method, js_name = openPopup)]
    pub fn open_popup(this: &Marker) -> Marker;
}

#[wasm_bindgen]
extern "C" {
    pub type DivIcon;

    #[wasm_bindgen(js_namespace = L, js_name = divIcon)]
    fn create_div_icon(options: &Object) -> DivIcon;
}

fn set(obj: &Object, key: &str, value: &JsValue) {
    _ = Reflect::set(obj, &JsValue::from_str(key), value);
}

fn pair(a: f64, b: f64) -> Array {
    Array::of2(&JsValue::from_f64(a), &JsValue::from_f64(b))
}

#[inline]
pub fn lat_lng(p: LatLng) -> Array {
    pair(p.lat, p.lng)
}

/// `[[south, west], [north, east]]`, accepted by `fitBounds`.
pub fn bounds(b: &LatLngBounds) -> Array {
    Array::of2(&lat_lng(b.south_west), &lat_lng(b.north_east))
}

/// `L.map(id)`; fails when Leaflet is not loaded or the container is missing.
pub fn map(container_id: &str) -> anyhow::Result<LeafletMap> {
    create_map(container_id).map_err(|e| anyhow::anyhow!("L.map({container_id}): {:?}", e))
}

pub fn tile_layer(url_template: &str, attribution: &str, max_zoom: f64) -> TileLayer {
    let opts = Object::new();
    set(&opts, "attribution", &JsValue::from_str(attribution));
    set(&opts, "maxZoom", &JsValue::from_f64(max_zoom));
    create_tile_layer(url_template, &opts)
}

pub fn div_icon(icon: &MarkerIcon) -> DivIcon {
    let opts = Object::new();
    set(&opts, "html", &JsValue::from_str(&icon.html));
    set(&opts, "iconSize", &pair(icon.size as f64, icon.size as f64));
    set(
        &opts,
        "iconAnchor",
        &pair(icon.anchor[0] as f64, icon.anchor[1] as f64),
    );
    set(
        &opts,
        "popupAnchor",
        &pair(icon.popup_anchor[0] as f64, icon.popup_anchor[1] as f64),
    );
    set(&opts, "className", &JsValue::from_str(icon.class_name));
    create_div_icon(&opts)
}

pub fn marker(position: LatLng, icon: &DivIcon) -> Marker {
    let opts = Object::new();
    set(&opts, "icon", icon.as_ref());
    create_marker(&lat_lng(position), &opts)
}
