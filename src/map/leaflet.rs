//! Leaflet binding and the owned map handle.
//!
//! Leaflet is loaded by the host page as the global `L`. `LeafletMap` owns one
//! `L.Map` instance and calls `remove()` on drop, so whoever holds the handle
//! decides when the widget is torn down.

use leptos::prelude::{LocalStorage, StoredValue};

use crate::config::ClientConfig;

#[cfg(feature = "csr")]
use super::{LatLng, LatLngBounds, MapView, zoom_level_from};

#[cfg(feature = "csr")]
mod bindings {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        pub type Map;
        pub type LatLngBounds;
        pub type LatLng;
        pub type TileLayer;

        #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
        pub fn create_map(container: &web_sys::HtmlElement) -> Result<Map, JsValue>;

        #[wasm_bindgen(method, js_name = setView)]
        pub fn set_view(this: &Map, center: &js_sys::Array, zoom: f64) -> Map;

        #[wasm_bindgen(method, js_name = getBounds)]
        pub fn get_bounds(this: &Map) -> LatLngBounds;

        #[wasm_bindgen(method, js_name = getZoom)]
        pub fn get_zoom(this: &Map) -> f64;

        #[wasm_bindgen(method)]
        pub fn remove(this: &Map) -> Map;

        #[wasm_bindgen(method, js_name = getNorthWest)]
        pub fn get_north_west(this: &LatLngBounds) -> LatLng;

        #[wasm_bindgen(method, js_name = getSouthEast)]
        pub fn get_south_east(this: &LatLngBounds) -> LatLng;

        #[wasm_bindgen(method, getter)]
        pub fn lat(this: &LatLng) -> f64;

        #[wasm_bindgen(method, getter)]
        pub fn lng(this: &LatLng) -> f64;

        #[wasm_bindgen(catch, js_namespace = L, js_name = tileLayer)]
        pub fn tile_layer(url: &str, options: &js_sys::Object) -> Result<TileLayer, JsValue>;

        #[wasm_bindgen(method, js_name = addTo)]
        pub fn add_to(this: &TileLayer, map: &Map) -> TileLayer;
    }
}

/// Why the map widget could not be created.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    #[error("leaflet: {0}")]
    Leaflet(String),
}

/// Tile layer settings taken from `ClientConfig`.
#[derive(Debug, Clone, PartialEq)]
pub struct MapSetup {
    pub center: (f64, f64),
    pub zoom: u8,
    pub tile_url: String,
    pub max_zoom: u8,
    pub attribution: String,
}

impl From<&ClientConfig> for MapSetup {
    fn from(cfg: &ClientConfig) -> Self {
        Self {
            center: (cfg.center_lat, cfg.center_lng),
            zoom: cfg.initial_zoom,
            tile_url: cfg.tile_url.clone(),
            max_zoom: cfg.max_zoom,
            attribution: cfg.attribution.clone(),
        }
    }
}

/// Slot holding the page's map handle; empty until the host mounts.
pub type MapSlot = StoredValue<Option<LeafletMap>, LocalStorage>;

/// Owned Leaflet map. Dropping it removes the widget from the page.
pub struct LeafletMap {
    #[cfg(feature = "csr")]
    inner: bindings::Map,
}

#[cfg(feature = "csr")]
impl LeafletMap {
    /// Create the map inside `container`, set the initial view, add tiles.
    ///
    /// # Errors
    ///
    /// Returns `MountError` if Leaflet is missing or rejects the container.
    pub fn mount(container: &web_sys::HtmlElement, setup: &MapSetup) -> Result<Self, MountError> {
        use wasm_bindgen::JsValue;

        let js_err = |e: JsValue| MountError::Leaflet(e.as_string().unwrap_or_else(|| format!("{e:?}")));

        let inner = bindings::create_map(container).map_err(js_err)?;
        let center = js_sys::Array::of2(&JsValue::from_f64(setup.center.0), &JsValue::from_f64(setup.center.1));
        inner.set_view(&center, f64::from(setup.zoom));

        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &"maxZoom".into(), &JsValue::from_f64(f64::from(setup.max_zoom)))
            .map_err(js_err)?;
        js_sys::Reflect::set(&options, &"attribution".into(), &JsValue::from_str(&setup.attribution))
            .map_err(js_err)?;
        bindings::tile_layer(&setup.tile_url, &options)
            .map_err(js_err)?
            .add_to(&inner);

        log::debug!("map mounted at {:?} zoom {}", setup.center, setup.zoom);
        Ok(Self { inner })
    }
}

#[cfg(feature = "csr")]
impl MapView for LeafletMap {
    fn bounds(&self) -> LatLngBounds {
        let bounds = self.inner.get_bounds();
        let nw = bounds.get_north_west();
        let se = bounds.get_south_east();
        LatLngBounds { north_west: LatLng::new(nw.lat(), nw.lng()), south_east: LatLng::new(se.lat(), se.lng()) }
    }

    fn zoom(&self) -> i32 {
        zoom_level_from(self.inner.get_zoom())
    }
}

#[cfg(feature = "csr")]
impl Drop for LeafletMap {
    fn drop(&mut self) {
        self.inner.remove();
        log::debug!("map removed");
    }
}
