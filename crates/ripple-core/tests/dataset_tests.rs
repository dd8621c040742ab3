// Tests for dataset loading, channel ranges and normalization.

use ripple_core::*;

const TWO_RECORDS: &str = r#"[
  {"timestamp": 0, "sensors": {"temp": {"average": 10}, "hum": {"average": 50},
                              "light": {"average": 5}, "noise": {"average": 20}}},
  {"timestamp": 60, "sensors": {"temp": {"average": 30}, "hum": {"average": 70},
                               "light": {"average": 15}, "noise": {"average": 40}}}
]"#;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn two_record_scenario_ranges_and_endpoints() {
    let ds = SensorDataset::from_json_str(TWO_RECORDS).expect("valid data");
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.range(Channel::Temperature), ChannelRange::new(10.0, 30.0));
    assert_eq!(ds.range(Channel::Humidity), ChannelRange::new(50.0, 70.0));
    assert_eq!(ds.range(Channel::Light), ChannelRange::new(5.0, 15.0));
    assert_eq!(ds.range(Channel::Noise), ChannelRange::new(20.0, 40.0));

    let temp = ds.range(Channel::Temperature);
    assert!(approx(normalize(10.0, temp), -1.0));
    assert!(approx(normalize(30.0, temp), 1.0));
    assert!(approx(temp.normalize(20.0), 0.0));
}

#[test]
fn samples_keep_file_order_and_timestamps() {
    let ds = SensorDataset::from_json_str(TWO_RECORDS).unwrap();
    let ts: Vec<i64> = ds.samples().iter().map(|s| s.timestamp).collect();
    assert_eq!(ts, vec![0, 60]);
    assert_eq!(ds.sample(1).unwrap().value(Channel::Light), 15.0);
    assert!(ds.sample(2).is_none());
}

#[test]
fn every_sample_lies_within_its_channel_range() {
    let ds = SensorDataset::from_json_str(BUNDLED_DATA_JSON).expect("bundled data parses");
    assert!(ds.len() > 1);
    for sample in ds.samples() {
        for channel in Channel::ALL {
            let range = ds.range(channel);
            assert!(range.min <= range.max);
            assert!(
                range.contains(sample.value(channel)),
                "{channel} value {} outside {range}",
                sample.value(channel)
            );
        }
    }
}

#[test]
fn bounds_are_attained_by_some_sample() {
    let ds = SensorDataset::from_json_str(BUNDLED_DATA_JSON).unwrap();
    for channel in Channel::ALL {
        let range = ds.range(channel);
        assert!(ds.samples().iter().any(|s| s.value(channel) == range.min));
        assert!(ds.samples().iter().any(|s| s.value(channel) == range.max));
    }
}

#[test]
fn first_value_seeds_both_bounds() {
    let mut scan = RangeScan::default();
    assert!(scan.finish().is_none());
    scan.observe(-3.5);
    assert_eq!(scan.finish(), Some(ChannelRange::new(-3.5, -3.5)));
    scan.observe(2.0);
    scan.observe(-7.0);
    assert_eq!(scan.finish(), Some(ChannelRange::new(-7.0, 2.0)));
}

#[test]
fn normalize_maps_range_onto_unit_interval() {
    let r = ChannelRange::new(-4.0, 12.0);
    assert!(approx(r.normalize(r.min), -1.0));
    assert!(approx(r.normalize(r.max), 1.0));
    assert!(approx(r.normalize(4.0), 0.0));
    let mut prev = r.normalize(-4.0);
    for i in 1..=16 {
        let v = r.normalize(-4.0 + i as f32);
        assert!(v > prev);
        prev = v;
    }
}

#[test]
fn degenerate_range_normalizes_to_midpoint() {
    let r = ChannelRange::new(21.0, 21.0);
    assert!(r.is_degenerate());
    assert_eq!(normalize(21.0, r), 0.0);
    assert_eq!(normalize(99.0, r), 0.0);
}

#[test]
fn single_record_dataset_is_valid_but_degenerate() {
    let json = r#"[{"timestamp": 5, "sensors": {"temp": {"average": 1}, "hum": {"average": 2},
                   "light": {"average": 3}, "noise": {"average": 4}}}]"#;
    let ds = SensorDataset::from_json_str(json).unwrap();
    assert_eq!(ds.len(), 1);
    for (_, range) in ds.ranges().iter() {
        assert!(range.is_degenerate());
    }
}

#[test]
fn extra_fields_and_float_timestamps_are_accepted() {
    let json = r#"[{"timestamp": 1424131200.9, "location": "lab",
                   "sensors": {"temp": {"average": 1.5, "min": 1, "max": 2},
                               "hum": {"average": 2}, "light": {"average": 3},
                               "noise": {"average": 4}, "co2": {"average": 400}}}]"#;
    let ds = SensorDataset::from_json_str(json).unwrap();
    assert_eq!(ds.samples()[0].timestamp, 1_424_131_200);
    assert_eq!(ds.samples()[0].temperature, 1.5);
}

#[test]
fn empty_array_is_rejected() {
    let err = SensorDataset::from_json_str("[]").unwrap_err();
    assert!(matches!(err, RippleError::EmptyDataset));
}

#[test]
fn non_array_input_is_a_format_error() {
    for input in ["{}", "42", "not json", ""] {
        let err = SensorDataset::from_json_str(input).unwrap_err();
        assert!(matches!(err, RippleError::DataFormat(_)), "input {input:?}: {err}");
    }
}

#[test]
fn missing_sensors_is_a_format_error() {
    let err = SensorDataset::from_json_str(r#"[{"timestamp": 1}]"#).unwrap_err();
    match err {
        RippleError::DataFormat(msg) => assert!(msg.contains("sensors"), "{msg}"),
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn missing_or_non_numeric_average_is_a_format_error() {
    let missing = r#"[{"timestamp": 1, "sensors": {"temp": {}, "hum": {"average": 2},
                      "light": {"average": 3}, "noise": {"average": 4}}}]"#;
    let text = r#"[{"timestamp": 1, "sensors": {"temp": {"average": "warm"}, "hum": {"average": 2},
                   "light": {"average": 3}, "noise": {"average": 4}}}]"#;
    let no_channel = r#"[{"timestamp": 1, "sensors": {"temp": {"average": 1}, "hum": {"average": 2},
                         "light": {"average": 3}}}]"#;
    for input in [missing, text, no_channel] {
        assert!(matches!(
            SensorDataset::from_json_str(input),
            Err(RippleError::DataFormat(_))
        ));
    }
}

#[test]
fn from_samples_rejects_empty_input() {
    assert!(matches!(
        SensorDataset::from_samples(Vec::new()),
        Err(RippleError::EmptyDataset)
    ));
}

#[test]
fn average_beyond_f32_range_is_a_format_error() {
    let json = r#"[
      {"timestamp": 0, "sensors": {"temp": {"average": 1e39}, "hum": {"average": 50},
                                  "light": {"average": 5}, "noise": {"average": 20}}},
      {"timestamp": 60, "sensors": {"temp": {"average": 10}, "hum": {"average": 70},
                                   "light": {"average": 15}, "noise": {"average": 40}}}
    ]"#;
    match SensorDataset::from_json_str(json).unwrap_err() {
        RippleError::DataFormat(msg) => {
            assert!(msg.contains("temp"), "{msg}");
            assert!(msg.contains("record 0"), "{msg}");
        }
        other => panic!("unexpected error {other}"),
    }

    let negative = json.replace("1e39", "-1e39");
    assert!(matches!(
        SensorDataset::from_json_str(&negative),
        Err(RippleError::DataFormat(_))
    ));
}

#[test]
fn non_finite_samples_are_rejected() {
    let good = SensorSample {
        timestamp: 0,
        temperature: 10.0,
        humidity: 50.0,
        light: 5.0,
        noise: 20.0,
    };
    for bad in [f32::INFINITY, f32::NEG_INFINITY, f32::NAN] {
        let sample = SensorSample { light: bad, ..good };
        assert!(matches!(
            SensorDataset::from_samples(vec![good, sample]),
            Err(RippleError::DataFormat(_))
        ));
    }
}

#[test]
fn loaded_ranges_have_finite_width() {
    let ds = SensorDataset::from_json_str(BUNDLED_DATA_JSON).unwrap();
    for (_, range) in ds.ranges().iter() {
        assert!(range.width().is_finite());
    }
}
