//! Skeleton placeholders with a time-driven shimmer.

use vitrine_ui_graphics::{Color, Theme};
use web_time::Instant;

const SHIMMER_PERIOD_MILLIS: u64 = 1_200;

/// Placeholder layout options.
#[derive(Clone, Debug)]
pub struct SkeletonSpec {
    pub theme: Theme,
    pub rows: usize,
    pub with_image_block: bool,
}

impl Default for SkeletonSpec {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            rows: 3,
            with_image_block: true,
        }
    }
}

impl SkeletonSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_image_block(mut self, with_image_block: bool) -> Self {
        self.with_image_block = with_image_block;
        self
    }

    /// Render model at the given shimmer clock time.
    pub fn model_at(&self, elapsed_millis: u64) -> SkeletonModel {
        let colors = &self.theme.colors;
        let phase = shimmer_phase(elapsed_millis);
        let fill = colors.skeleton_base.mix(colors.skeleton_highlight, phase);

        let mut blocks = Vec::with_capacity(self.rows + usize::from(self.with_image_block));
        if self.with_image_block {
            blocks.push(SkeletonBlock {
                height_fraction: 0.55,
                width_fraction: 1.0,
            });
        }
        for row in 0..self.rows {
            // Narrow the last text line, the way real cards trail off.
            let width_fraction = if row + 1 == self.rows { 0.6 } else { 0.9 };
            blocks.push(SkeletonBlock {
                height_fraction: 0.08,
                width_fraction,
            });
        }

        SkeletonModel { blocks, fill, phase }
    }
}

/// One grey block of the placeholder, in fractions of the card size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkeletonBlock {
    pub height_fraction: f32,
    pub width_fraction: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SkeletonModel {
    pub blocks: Vec<SkeletonBlock>,
    pub fill: Color,
    /// Shimmer position in [0, 1).
    pub phase: f32,
}

/// Triangle-wave shimmer: base -> highlight -> base over one period.
fn shimmer_phase(elapsed_millis: u64) -> f32 {
    let in_period = (elapsed_millis % SHIMMER_PERIOD_MILLIS) as f32 / SHIMMER_PERIOD_MILLIS as f32;
    if in_period < 0.5 {
        in_period * 2.0
    } else {
        2.0 - in_period * 2.0
    }
}

/// Wall-clock source for the shimmer, one per loading surface.
pub struct SkeletonClock {
    started: Instant,
}

impl SkeletonClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed_millis(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }
}
