use super::*;

use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_match_hard_coded_values() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.endpoint, "http://127.0.0.1:8000/api/image");
    assert_eq!(cfg.center_lat, 45.102);
    assert_eq!(cfg.center_lng, 1.460);
    assert_eq!(cfg.initial_zoom, 13);
    assert_eq!(cfg.tile_url, "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png");
    assert_eq!(cfg.max_zoom, 19);
    assert_eq!(cfg.attribution, "© OpenStreetMap contributors");
}

#[test]
fn empty_lookup_yields_defaults() {
    assert_eq!(ClientConfig::from_lookup(|_| None), ClientConfig::default());
}

#[test]
fn overrides_are_applied() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[
        ("endpoint", "https://terrain.example.test/api/image"),
        ("center_lat", "-33.86"),
        ("center_lng", " 151.2 "),
        ("zoom", "9"),
        ("tile_url", "https://tiles.example.test/{z}/{x}/{y}.png"),
        ("max_zoom", "17"),
    ]));
    assert_eq!(cfg.endpoint, "https://terrain.example.test/api/image");
    assert_eq!(cfg.center_lat, -33.86);
    assert_eq!(cfg.center_lng, 151.2);
    assert_eq!(cfg.initial_zoom, 9);
    assert_eq!(cfg.tile_url, "https://tiles.example.test/{z}/{x}/{y}.png");
    assert_eq!(cfg.max_zoom, 17);
}

#[test]
fn invalid_values_keep_defaults() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[
        ("endpoint", "   "),
        ("center_lat", "north"),
        ("center_lng", "200"),
        ("zoom", "-1"),
        ("max_zoom", "99"),
    ]));
    assert_eq!(cfg, ClientConfig::default());
}

#[test]
fn initial_zoom_is_clamped_to_max_zoom() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[("zoom", "18"), ("max_zoom", "12")]));
    assert_eq!(cfg.initial_zoom, 12);
    assert_eq!(cfg.max_zoom, 12);
}

#[test]
fn parse_degrees_reports_range() {
    let err = parse_degrees("center_lat", "91", 90.0).unwrap_err();
    assert_eq!(err.to_string(), "center_lat: 91 is outside -90..=90");
}

#[test]
fn parse_degrees_rejects_non_finite() {
    assert!(parse_degrees("center_lng", "NaN", 180.0).is_err());
    assert!(parse_degrees("center_lng", "inf", 180.0).is_err());
}

#[test]
fn parse_zoom_reports_not_a_number() {
    let err = parse_zoom("zoom", "13.5").unwrap_err();
    assert_eq!(err, ConfigError::NotANumber { key: "zoom".into(), value: "13.5".into() });
}

#[test]
fn parse_text_rejects_empty() {
    assert_eq!(parse_text("endpoint", ""), Err(ConfigError::Empty { key: "endpoint".into() }));
}
