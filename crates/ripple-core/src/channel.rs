//! Sensor channels and their value ranges.
//!
//! Every channel is normalized against the minimum and maximum observed over
//! the whole dataset, never against a sliding window, so a given raw value
//! always maps to the same colour level during playback.

use std::fmt;

/// One of the four recorded measurement types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Temperature,
    Humidity,
    Light,
    Noise,
}

impl Channel {
    pub const ALL: [Channel; 4] = [
        Channel::Temperature,
        Channel::Humidity,
        Channel::Light,
        Channel::Noise,
    ];

    /// Key of the channel object inside a record's `sensors` map.
    pub fn key(self) -> &'static str {
        match self {
            Channel::Temperature => "temp",
            Channel::Humidity => "hum",
            Channel::Light => "light",
            Channel::Noise => "noise",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Channel::Temperature => "Temperature",
            Channel::Humidity => "Humidity",
            Channel::Light => "Light",
            Channel::Noise => "Noise",
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Closed interval of values observed for a channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChannelRange {
    pub min: f32,
    pub max: f32,
}

impl ChannelRange {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max - self.min
    }

    /// True when every observed value was identical.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0
    }

    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Map `value` into \[-1, 1\]; see [`normalize`].
    #[inline]
    pub fn normalize(&self, value: f32) -> f32 {
        normalize(value, *self)
    }
}

impl fmt::Display for ChannelRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.min, self.max)
    }
}

/// Map a raw channel value into \[-1, 1\] using the channel's global range.
///
/// `min` maps to -1 and `max` to 1. A zero-width range has no meaningful
/// mapping and yields 0, the midpoint, instead of a NaN or infinity.
#[inline]
pub fn normalize(value: f32, range: ChannelRange) -> f32 {
    if range.is_degenerate() {
        return 0.0;
    }
    ((value - range.min) / range.width()) * 2.0 - 1.0
}

/// Running min/max for one channel during the load scan.
///
/// Starts empty; the first observed value seeds both bounds.
#[derive(Clone, Copy, Debug, Default)]
pub struct RangeScan {
    bounds: Option<ChannelRange>,
}

impl RangeScan {
    pub fn observe(&mut self, value: f32) {
        self.bounds = Some(match self.bounds {
            None => ChannelRange::new(value, value),
            Some(mut r) => {
                if r.max < value {
                    r.max = value;
                }
                if r.min > value {
                    r.min = value;
                }
                r
            }
        });
    }

    /// Resolved range, or `None` if nothing was observed.
    pub fn finish(self) -> Option<ChannelRange> {
        self.bounds
    }
}

/// Ranges for all four channels, indexed by [`Channel`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChannelRanges([ChannelRange; 4]);

impl ChannelRanges {
    pub fn new(
        temperature: ChannelRange,
        humidity: ChannelRange,
        light: ChannelRange,
        noise: ChannelRange,
    ) -> Self {
        Self([temperature, humidity, light, noise])
    }

    #[inline]
    pub fn get(&self, channel: Channel) -> ChannelRange {
        self.0[channel.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Channel, ChannelRange)> + '_ {
        Channel::ALL.iter().map(move |&c| (c, self.get(c)))
    }
}
