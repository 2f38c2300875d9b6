//! Client configuration read from the host page.
//!
//! Every key is optional; missing or invalid values keep the default.
//! In the browser, values come from `<meta name="terrain:KEY" content="...">`
//! tags so one build can target different endpoints.
//!
//! Recognized keys:
//! - `endpoint`: image-generation URL
//! - `center_lat`, `center_lng`: initial map centre in degrees
//! - `zoom`: initial zoom level
//! - `tile_url`: tile layer URL template
//! - `max_zoom`: tile layer maximum zoom

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/api/image";
pub const DEFAULT_CENTER_LAT: f64 = 45.102;
pub const DEFAULT_CENTER_LNG: f64 = 1.460;
pub const DEFAULT_ZOOM: u8 = 13;
pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const DEFAULT_MAX_ZOOM: u8 = 19;
pub const DEFAULT_ATTRIBUTION: &str = "© OpenStreetMap contributors";

#[cfg(feature = "csr")]
const META_PREFIX: &str = "terrain:";

/// A config value that was present but unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key}: expected a number, got '{value}'")]
    NotANumber { key: String, value: String },
    #[error("{key}: {value} is outside {min}..={max}")]
    OutOfRange { key: String, value: String, min: String, max: String },
    #[error("{key}: must not be empty")]
    Empty { key: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub center_lat: f64,
    pub center_lng: f64,
    pub initial_zoom: u8,
    pub tile_url: String,
    pub max_zoom: u8,
    pub attribution: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            center_lat: DEFAULT_CENTER_LAT,
            center_lng: DEFAULT_CENTER_LNG,
            initial_zoom: DEFAULT_ZOOM,
            tile_url: DEFAULT_TILE_URL.to_owned(),
            max_zoom: DEFAULT_MAX_ZOOM,
            attribution: DEFAULT_ATTRIBUTION.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Build config from a key lookup, logging and skipping bad values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        apply(&lookup, "endpoint", parse_text, &mut cfg.endpoint);
        apply(&lookup, "center_lat", |k, v| parse_degrees(k, v, 90.0), &mut cfg.center_lat);
        apply(&lookup, "center_lng", |k, v| parse_degrees(k, v, 180.0), &mut cfg.center_lng);
        apply(&lookup, "zoom", parse_zoom, &mut cfg.initial_zoom);
        apply(&lookup, "tile_url", parse_text, &mut cfg.tile_url);
        apply(&lookup, "max_zoom", parse_zoom, &mut cfg.max_zoom);

        if cfg.initial_zoom > cfg.max_zoom {
            log::warn!("config: zoom {} exceeds max_zoom {}; clamping", cfg.initial_zoom, cfg.max_zoom);
            cfg.initial_zoom = cfg.max_zoom;
        }
        cfg
    }

    /// Read overrides from `terrain:*` meta tags in the current document.
    #[cfg(feature = "csr")]
    pub fn from_document() -> Self {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Self::default();
        };
        Self::from_lookup(|key| {
            let selector = format!("meta[name=\"{META_PREFIX}{key}\"]");
            match document.query_selector(&selector) {
                Ok(Some(el)) => el.get_attribute("content"),
                _ => None,
            }
        })
    }
}

fn apply<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    parse: impl Fn(&str, &str) -> Result<T, ConfigError>,
    slot: &mut T,
) {
    let Some(raw) = lookup(key) else {
        return;
    };
    match parse(key, raw.trim()) {
        Ok(value) => *slot = value,
        Err(e) => log::warn!("config: {e}; keeping default"),
    }
}

fn parse_text(key: &str, raw: &str) -> Result<String, ConfigError> {
    if raw.is_empty() {
        return Err(ConfigError::Empty { key: key.to_owned() });
    }
    Ok(raw.to_owned())
}

fn parse_degrees(key: &str, raw: &str, limit: f64) -> Result<f64, ConfigError> {
    let value = raw
        .parse::<f64>()
        .map_err(|_| ConfigError::NotANumber { key: key.to_owned(), value: raw.to_owned() })?;
    if !value.is_finite() || value.abs() > limit {
        return Err(ConfigError::OutOfRange {
            key: key.to_owned(),
            value: raw.to_owned(),
            min: format!("-{limit}"),
            max: limit.to_string(),
        });
    }
    Ok(value)
}

/// Highest zoom any common tile provider serves.
const ZOOM_CEILING: u8 = 24;

fn parse_zoom(key: &str, raw: &str) -> Result<u8, ConfigError> {
    let value = raw
        .parse::<u8>()
        .map_err(|_| ConfigError::NotANumber { key: key.to_owned(), value: raw.to_owned() })?;
    if value > ZOOM_CEILING {
        return Err(ConfigError::OutOfRange {
            key: key.to_owned(),
            value: raw.to_owned(),
            min: "0".to_owned(),
            max: ZOOM_CEILING.to_string(),
        });
    }
    Ok(value)
}
