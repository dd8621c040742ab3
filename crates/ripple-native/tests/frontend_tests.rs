// Host-side tests for the pure front-end helpers.
// The front-end is a binary crate, so we include the modules directly.

#![allow(dead_code)]
mod config {
    include!("../src/config.rs");
}
mod input {
    include!("../src/input.rs");
}
mod overlay {
    include!("../src/overlay.rs");
}
mod render {
    include!("../src/render.rs");
}

use chrono::{FixedOffset, Utc};
use clap::Parser;

#[test]
fn resolution_parser_accepts_configured_range() {
    assert_eq!(config::parse_resolution("10"), Ok(10));
    assert_eq!(config::parse_resolution(" 100 "), Ok(100));
    assert!(config::parse_resolution("9").is_err());
    assert!(config::parse_resolution("101").is_err());
    assert!(config::parse_resolution("-5").is_err());
    assert!(config::parse_resolution("fine").is_err());
}

#[test]
fn args_default_to_bundled_data_and_full_resolution() {
    let args = config::Args::try_parse_from(["ripple-native"]).unwrap();
    assert_eq!(args.resolution, ripple_core::RESOLUTION_DEFAULT);
    assert!(args.data.is_none());

    let args =
        config::Args::try_parse_from(["ripple-native", "-r", "40", "--data", "x.json"]).unwrap();
    assert_eq!(args.resolution, 40);
    assert_eq!(args.data.unwrap().to_str(), Some("x.json"));

    assert!(config::Args::try_parse_from(["ripple-native", "--resolution", "5"]).is_err());
}

#[test]
fn keys_map_to_resolution_steps() {
    assert_eq!(input::resolution_delta_for_key("ArrowUp"), Some(10));
    assert_eq!(input::resolution_delta_for_key("ArrowDown"), Some(-10));
    assert_eq!(input::resolution_delta_for_key("+"), Some(1));
    assert_eq!(input::resolution_delta_for_key("-"), Some(-1));
    assert_eq!(input::resolution_delta_for_key("q"), None);
}

#[test]
fn stepped_resolution_is_clamped() {
    assert_eq!(input::stepped_resolution(50, 10), 60);
    assert_eq!(input::stepped_resolution(95, 10), 100);
    assert_eq!(input::stepped_resolution(100, 1), 100);
    assert_eq!(input::stepped_resolution(12, -10), 10);
    assert_eq!(input::stepped_resolution(10, -1), 10);
}

#[test]
fn timestamp_text_in_fixed_zones() {
    assert_eq!(overlay::format_timestamp_in(0, &Utc), "1970-01-01 00:00");
    assert_eq!(
        overlay::format_timestamp_in(1_424_131_200, &Utc),
        "2015-02-17 00:00"
    );
    let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
    assert_eq!(
        overlay::format_timestamp_in(1_424_131_200, &plus_two),
        "2015-02-17 02:00"
    );
}

#[test]
fn out_of_range_timestamp_falls_back_to_seconds() {
    assert_eq!(overlay::format_timestamp_in(i64::MAX, &Utc), format!("@{}", i64::MAX));
}

#[test]
fn labels_cover_each_side_once() {
    use overlay::LabelAnchor::*;
    let anchors: Vec<_> = overlay::QUADRANT_LABELS.iter().map(|(_, a)| *a).collect();
    assert_eq!(anchors, vec![Top, Bottom, Left, Right]);
    let text = overlay::describe_labels();
    for name in ["Humidity", "Temperature", "Noise", "Light"] {
        assert!(text.contains(name));
    }
    assert_eq!(overlay::window_title("x"), "Sensor Ripple | x");
}

#[test]
fn surface_format_prefers_srgb_and_requires_one() {
    use wgpu::TextureFormat::*;
    assert_eq!(
        render::pick_surface_format(&[Bgra8Unorm, Bgra8UnormSrgb]).unwrap(),
        Bgra8UnormSrgb
    );
    assert_eq!(render::pick_surface_format(&[Rgba16Float]).unwrap(), Rgba16Float);
    let err = render::pick_surface_format(&[]).unwrap_err();
    assert!(err.to_string().contains("no formats"));
}
