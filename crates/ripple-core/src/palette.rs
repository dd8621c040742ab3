//! Quadrant colouring and edge fade.
//!
//! Each quadrant of the grid shows one channel. Quadrants share the centre
//! row and column, so points on those lines match several rules; rules are
//! applied in [`Quadrant::EVALUATION_ORDER`] and the last match wins.

use crate::channel::{Channel, ChannelRanges};
use crate::constants::{CHANNEL_LOW, LEVEL_FLOOR};
use crate::dataset::SensorSample;
use glam::{Vec3, Vec4};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quadrant {
    /// Top-left, humidity in green.
    Humidity,
    /// Bottom-right, temperature in red.
    Temperature,
    /// Bottom-left, noise in blue.
    Noise,
    /// Top-right, light as grey.
    Light,
}

impl Quadrant {
    pub const EVALUATION_ORDER: [Quadrant; 4] = [
        Quadrant::Humidity,
        Quadrant::Temperature,
        Quadrant::Noise,
        Quadrant::Light,
    ];

    #[inline]
    pub fn channel(self) -> Channel {
        match self {
            Quadrant::Humidity => Channel::Humidity,
            Quadrant::Temperature => Channel::Temperature,
            Quadrant::Noise => Channel::Noise,
            Quadrant::Light => Channel::Light,
        }
    }

    /// Inclusive membership test; `middle` is `resolution / 2`.
    #[inline]
    pub fn contains(self, row: u32, col: u32, middle: u32) -> bool {
        match self {
            Quadrant::Humidity => col <= middle && row <= middle,
            Quadrant::Temperature => col >= middle && row >= middle,
            Quadrant::Noise => col <= middle && row >= middle,
            Quadrant::Light => col >= middle && row <= middle,
        }
    }

    /// Pre-fade colour for a channel intensity `level`.
    #[inline]
    pub fn color(self, level: f32) -> Vec3 {
        match self {
            Quadrant::Humidity => Vec3::new(CHANNEL_LOW, level, CHANNEL_LOW),
            Quadrant::Temperature => Vec3::new(level, CHANNEL_LOW, CHANNEL_LOW),
            Quadrant::Noise => Vec3::new(CHANNEL_LOW, CHANNEL_LOW, level),
            Quadrant::Light => Vec3::splat(level),
        }
    }
}

/// Colour intensity for a normalized value in \[-1, 1\], floored so dim
/// readings stay visible.
#[inline]
pub fn level(normalized: f32) -> f32 {
    LEVEL_FLOOR.max((normalized + 1.0) / 2.0)
}

/// Per-frame intensity of every channel for the current sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChannelLevels([f32; 4]);

impl ChannelLevels {
    pub fn for_sample(sample: &SensorSample, ranges: &ChannelRanges) -> Self {
        Self(Channel::ALL.map(|c| level(ranges.get(c).normalize(sample.value(c)))))
    }

    #[inline]
    pub fn get(&self, channel: Channel) -> f32 {
        self.0[channel.index()]
    }
}

/// Brightness multiplier that darkens points towards the grid edge:
/// 1 at the centre cell, 0 at a corner.
#[inline]
pub fn edge_fade(row: u32, col: u32, middle: u32) -> f32 {
    let m = middle as f32;
    let col_off = (m - col as f32).abs() / m;
    let row_off = (m - row as f32).abs() / m;
    1.0 - (col_off + row_off) / 2.0
}

/// Final RGBA for the cell at `(row, col)`. White is the starting colour;
/// every cell matches at least one quadrant so it never survives. Alpha
/// carries the edge fade along with the colour channels.
pub fn shade(row: u32, col: u32, middle: u32, levels: &ChannelLevels) -> Vec4 {
    let mut rgb = Vec3::ONE;
    for quadrant in Quadrant::EVALUATION_ORDER {
        if quadrant.contains(row, col, middle) {
            rgb = quadrant.color(levels.get(quadrant.channel()));
        }
    }
    rgb.extend(1.0) * edge_fade(row, col, middle)
}
