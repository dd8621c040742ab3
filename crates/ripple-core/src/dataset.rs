//! Loading of the recorded sensor dataset.
//!
//! The input is a JSON array of records shaped like
//!
//! ```json
//! { "timestamp": 1424203200,
//!   "sensors": { "temp":  { "average": 21.4 },
//!                "hum":   { "average": 38.0 },
//!                "light": { "average": 310.0 },
//!                "noise": { "average": 52.5 } } }
//! ```
//!
//! Channel objects may carry further statistics; only `average` is read.

use crate::channel::{Channel, ChannelRange, ChannelRanges, RangeScan};
use crate::error::{Result, RippleError};
use serde::Deserialize;

/// One timestamped reading of all four channels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SensorSample {
    pub timestamp: i64,
    pub temperature: f32,
    pub humidity: f32,
    pub light: f32,
    pub noise: f32,
}

impl SensorSample {
    #[inline]
    pub fn value(&self, channel: Channel) -> f32 {
        match channel {
            Channel::Temperature => self.temperature,
            Channel::Humidity => self.humidity,
            Channel::Light => self.light,
            Channel::Noise => self.noise,
        }
    }
}

#[derive(Deserialize)]
struct RawRecord {
    timestamp: f64,
    sensors: RawSensors,
}

#[derive(Deserialize)]
struct RawSensors {
    temp: RawChannel,
    hum: RawChannel,
    light: RawChannel,
    noise: RawChannel,
}

#[derive(Deserialize)]
struct RawChannel {
    average: f64,
}

impl RawChannel {
    /// Narrow to `f32`, rejecting values that do not fit.
    fn value(&self, channel: Channel, record: usize) -> Result<f32> {
        let value = self.average as f32;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(RippleError::DataFormat(format!(
                "record {record}: {} average {} is out of range",
                channel.key(),
                self.average
            )))
        }
    }
}

impl RawRecord {
    fn into_sample(self, record: usize) -> Result<SensorSample> {
        let s = &self.sensors;
        Ok(SensorSample {
            timestamp: self.timestamp as i64,
            temperature: s.temp.value(Channel::Temperature, record)?,
            humidity: s.hum.value(Channel::Humidity, record)?,
            light: s.light.value(Channel::Light, record)?,
            noise: s.noise.value(Channel::Noise, record)?,
        })
    }
}

/// Immutable, non-empty playback sequence plus per-channel global ranges.
#[derive(Clone, Debug)]
pub struct SensorDataset {
    samples: Vec<SensorSample>,
    ranges: ChannelRanges,
}

impl SensorDataset {
    /// Parse raw JSON bytes and compute channel ranges in a single pass.
    pub fn load(raw: &[u8]) -> Result<Self> {
        let records: Vec<RawRecord> = serde_json::from_slice(raw)?;
        let samples = records
            .into_iter()
            .enumerate()
            .map(|(i, raw)| raw.into_sample(i))
            .collect::<Result<Vec<_>>>()?;
        let dataset = Self::from_samples(samples)?;
        log::info!(
            "loaded {} sensor samples ({})",
            dataset.len(),
            dataset
                .ranges
                .iter()
                .map(|(c, r)| format!("{}: {}", c.key(), r))
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(dataset)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Self::load(text.as_bytes())
    }

    /// Build a dataset from already decoded samples, in playback order.
    pub fn from_samples(samples: Vec<SensorSample>) -> Result<Self> {
        let mut scans = [RangeScan::default(); 4];
        for (i, sample) in samples.iter().enumerate() {
            for channel in Channel::ALL {
                let value = sample.value(channel);
                if !value.is_finite() {
                    return Err(RippleError::DataFormat(format!(
                        "record {i}: {} value {value} is not finite",
                        channel.key()
                    )));
                }
                scans[channel.index()].observe(value);
            }
        }
        let [temp, hum, light, noise] = scans.map(RangeScan::finish);
        let ranges = match (temp, hum, light, noise) {
            (Some(t), Some(h), Some(l), Some(n)) => ChannelRanges::new(t, h, l, n),
            _ => return Err(RippleError::EmptyDataset),
        };
        for (channel, range) in ranges.iter() {
            if range.is_degenerate() {
                log::warn!("{channel} never changes ({range}); it will render at the midpoint level");
            }
        }
        Ok(Self { samples, ranges })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Never true for a dataset returned by the constructors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn samples(&self) -> &[SensorSample] {
        &self.samples
    }

    #[inline]
    pub fn sample(&self, index: usize) -> Option<&SensorSample> {
        self.samples.get(index)
    }

    #[inline]
    pub fn ranges(&self) -> &ChannelRanges {
        &self.ranges
    }

    #[inline]
    pub fn range(&self, channel: Channel) -> ChannelRange {
        self.ranges.get(channel)
    }
}
