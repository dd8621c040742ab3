//! Per-tick surface update.
//!
//! [`render_frame`] is the pure step: advance the cursor, then recompute the
//! height and colour of every point from the current sample. [`Renderer`]
//! wraps it with the grid lifecycle and hands the result to a sink.

use crate::constants::{RESOLUTION_DEFAULT, RESOLUTION_MAX, RESOLUTION_MIN};
use crate::dataset::{SensorDataset, SensorSample};
use crate::error::{Result, RippleError};
use crate::grid::Grid;
use crate::palette::{self, ChannelLevels};
use crate::particle::{Particle, ParticleSink};
use crate::wave;

/// Index of the sample being shown. Wraps to 0 after the last sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaybackCursor {
    index: usize,
}

impl PlaybackCursor {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Step to the next sample of a sequence of length `len`.
    #[inline]
    pub fn advance(&mut self, len: usize) {
        if self.index + 1 < len {
            self.index += 1;
        } else {
            self.index = 0;
        }
    }
}

/// Advance `cursor` and recompute every point of `grid` for `time` seconds.
/// Returns the sample now on display.
pub fn render_frame<'d>(
    dataset: &'d SensorDataset,
    cursor: &mut PlaybackCursor,
    grid: &mut Grid,
    time: f32,
) -> &'d SensorSample {
    cursor.advance(dataset.len());
    let sample = &dataset.samples()[cursor.index()];
    let levels = ChannelLevels::for_sample(sample, dataset.ranges());

    let n = grid.resolution() as usize;
    let middle = grid.middle();
    for (i, point) in grid.points_mut().iter_mut().enumerate() {
        let row = (i / n) as u32;
        let col = (i % n) as u32;
        let p = &mut point.position;
        p.y = wave::height(p.x, p.z, time);
        point.color = palette::shade(row, col, middle, &levels);
    }
    sample
}

/// Summary of a rendered tick for overlays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameInfo {
    pub index: usize,
    pub timestamp: i64,
    pub resolution: u32,
}

struct Surface {
    grid: Grid,
    particles: Vec<Particle>,
}

impl Surface {
    fn build(resolution: u32) -> Result<Self> {
        let grid = Grid::build(resolution)?;
        let particles = grid.points().iter().map(Particle::from).collect();
        Ok(Self { grid, particles })
    }
}

enum RenderState {
    Uninitialized,
    Running(Surface),
}

/// Owns the playback cursor and the point grid across ticks.
pub struct Renderer {
    dataset: SensorDataset,
    cursor: PlaybackCursor,
    resolution: u32,
    state: RenderState,
}

impl Renderer {
    pub fn new(dataset: SensorDataset) -> Self {
        Self {
            dataset,
            cursor: PlaybackCursor::new(),
            resolution: RESOLUTION_DEFAULT,
            state: RenderState::Uninitialized,
        }
    }

    pub fn with_resolution(dataset: SensorDataset, resolution: u32) -> Result<Self> {
        let mut renderer = Self::new(dataset);
        renderer.set_resolution(resolution)?;
        Ok(renderer)
    }

    #[inline]
    pub fn dataset(&self) -> &SensorDataset {
        &self.dataset
    }

    #[inline]
    pub fn cursor(&self) -> PlaybackCursor {
        self.cursor
    }

    #[inline]
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, RenderState::Running(_))
    }

    /// Grid as of the last tick, if one has run.
    pub fn grid(&self) -> Option<&Grid> {
        match &self.state {
            RenderState::Running(surface) => Some(&surface.grid),
            RenderState::Uninitialized => None,
        }
    }

    /// Request a new resolution; the grid is rebuilt on the next tick.
    pub fn set_resolution(&mut self, resolution: u32) -> Result<()> {
        if !(RESOLUTION_MIN..=RESOLUTION_MAX).contains(&resolution) {
            return Err(RippleError::ResolutionOutOfRange {
                requested: resolution,
                min: RESOLUTION_MIN,
                max: RESOLUTION_MAX,
            });
        }
        if resolution != self.resolution {
            log::debug!("resolution {} -> {}", self.resolution, resolution);
            self.resolution = resolution;
        }
        Ok(())
    }

    /// Run one frame at `time` seconds since start and submit the points.
    pub fn tick(&mut self, time: f32, sink: &mut impl ParticleSink) -> Result<FrameInfo> {
        let mut surface = match std::mem::replace(&mut self.state, RenderState::Uninitialized) {
            RenderState::Running(surface) if surface.grid.resolution() == self.resolution => surface,
            _ => Surface::build(self.resolution)?,
        };

        let sample = render_frame(&self.dataset, &mut self.cursor, &mut surface.grid, time);
        for (dst, src) in surface.particles.iter_mut().zip(surface.grid.points()) {
            *dst = Particle::from(src);
        }
        sink.submit(&surface.particles);

        let info = FrameInfo {
            index: self.cursor.index(),
            timestamp: sample.timestamp,
            resolution: surface.grid.resolution(),
        };
        self.state = RenderState::Running(surface);
        Ok(info)
    }
}
