use std::time::Instant;

use crate::clamp::clamp_map;
use crate::config::{PlasmaConfig, ValueRange};
use crate::grid::Grid;
use crate::sampler::Sampler;

// Midpoint-displacement ("diamond-square") engine.
// Holds the randomness range, which decays while a run is in progress
// and is reset to `initial_range` at the start of every `generate`.
#[derive(Debug, Clone)]
pub struct DiamondSquare {
    initial_range: i32,
    range: i32,
    corner_range: ValueRange,
    output_range: ValueRange,
}

impl DiamondSquare {
    pub fn new(initial_range: i32) -> Self {
        Self {
            initial_range,
            range: initial_range,
            corner_range: ValueRange::default(),
            output_range: ValueRange::default(),
        }
    }

    pub fn from_config(config: &PlasmaConfig) -> Self {
        Self::new(config.initial_range)
            .with_corner_range(config.corner_range)
            .with_output_range(config.output_range)
    }

    pub fn with_corner_range(mut self, range: ValueRange) -> Self {
        self.corner_range = range;
        self
    }

    pub fn with_output_range(mut self, range: ValueRange) -> Self {
        self.output_range = range;
        self
    }

    // Current displacement bound
    pub fn range(&self) -> i32 {
        self.range
    }

    pub fn initial_range(&self) -> i32 {
        self.initial_range
    }

    pub fn reset(&mut self) {
        self.range = self.initial_range;
    }

    // Full pipeline: reset range, seed corners, subdivide, clamp
    pub fn generate<S: Sampler + ?Sized>(&mut self, grid: &mut Grid, sampler: &mut S) {
        let start = Instant::now();
        self.reset();
        self.init(grid, sampler);
        let levels = self.fractal(grid, sampler);
        let clamped = clamp_map(grid, self.output_range);
        tracing::info!(
            size = grid.size(),
            levels,
            clamped,
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "generated plasma fractal"
        );
    }

    // Seed the four corners with independent samples; nothing else is touched
    pub fn init<S: Sampler + ?Sized>(&self, grid: &mut Grid, sampler: &mut S) {
        for (x, y) in grid.corner_coords() {
            let v = sampler.sample(self.corner_range.min, self.corner_range.max);
            grid.set(x, y, v);
        }
    }

    // Diamond step: each lattice square's center = mean of its corners + displacement
    pub fn diamond<S: Sampler + ?Sized>(
        &self,
        grid: &mut Grid,
        sampler: &mut S,
        side_length: usize,
    ) {
        debug_assert!(side_length >= 3 && (side_length - 1).is_power_of_two());
        let edge = side_length - 1;
        let half = side_length / 2;
        let squares = grid.size() / edge;

        for ly in 0..squares {
            for lx in 0..squares {
                let (x0, x1) = (lx * edge, (lx + 1) * edge);
                let (y0, y1) = (ly * edge, (ly + 1) * edge);

                let sum = [(x0, y0), (x1, y0), (x0, y1), (x1, y1)]
                    .into_iter()
                    .map(|(x, y)| i64::from(grid.get(x, y)))
                    .sum::<i64>();
                let avg = (sum as f64 / 4.0) as i32;

                grid.set(
                    x0 + half,
                    y0 + half,
                    avg.saturating_add(sampler.sample(-self.range, self.range)),
                );
            }
        }
    }

    // Square step: top, right, bottom, left midpoints of every lattice square.
    // Edges shared by two squares are written twice; the later write wins.
    pub fn square<S: Sampler + ?Sized>(
        &self,
        grid: &mut Grid,
        sampler: &mut S,
        side_length: usize,
    ) {
        debug_assert!(side_length >= 3 && (side_length - 1).is_power_of_two());
        let edge = side_length - 1;
        let half = side_length / 2;
        let squares = grid.size() / edge;

        for ly in 0..squares {
            for lx in 0..squares {
                let (x0, y0) = (lx * edge, ly * edge);
                self.average(grid, sampler, x0 + half, y0, side_length);
                self.average(grid, sampler, x0 + edge, y0 + half, side_length);
                self.average(grid, sampler, x0 + half, y0 + edge, side_length);
                self.average(grid, sampler, x0, y0 + half, side_length);
            }
        }
    }

    // Writes the mean of the neighbors at distance side_length / 2 plus a
    // displacement into (x, y). A neighbor is skipped when (x, y) sits on the
    // matching grid edge, so edges average 3 values and corners 2.
    // Returns the number of neighbors counted.
    pub fn average<S: Sampler + ?Sized>(
        &self,
        grid: &mut Grid,
        sampler: &mut S,
        x: usize,
        y: usize,
        side_length: usize,
    ) -> usize {
        let last = grid.size() - 1;
        let half = side_length / 2;
        let mut counter = 0usize;
        let mut accumulator = 0.0f32;

        if x != 0 {
            debug_assert!(x >= half, "left neighbor of ({x}, {y}) leaves the grid");
            accumulator += grid.get(x - half, y) as f32;
            counter += 1;
        }
        if y != 0 {
            debug_assert!(y >= half, "upper neighbor of ({x}, {y}) leaves the grid");
            accumulator += grid.get(x, y - half) as f32;
            counter += 1;
        }
        if x != last {
            debug_assert!(x + half <= last, "right neighbor of ({x}, {y}) leaves the grid");
            accumulator += grid.get(x + half, y) as f32;
            counter += 1;
        }
        if y != last {
            debug_assert!(y + half <= last, "lower neighbor of ({x}, {y}) leaves the grid");
            accumulator += grid.get(x, y + half) as f32;
            counter += 1;
        }

        let displacement = sampler.sample(-self.range, self.range) as f32;
        grid.set(x, y, (accumulator / counter as f32 + displacement) as i32);
        counter
    }

    // Runs every subdivision level, halving the range after each one.
    // Returns the number of levels run (log2(size - 1)).
    pub fn fractal<S: Sampler + ?Sized>(&mut self, grid: &mut Grid, sampler: &mut S) -> usize {
        let size = grid.size();

        tracing::debug!(side_length = size, range = self.range, "subdividing");
        self.diamond(grid, sampler, size);
        self.square(grid, sampler, size);
        self.range /= 2;
        let mut levels = 1;

        let mut step = size / 2;
        while step >= 2 {
            tracing::debug!(side_length = step + 1, range = self.range, "subdividing");
            self.diamond(grid, sampler, step + 1);
            self.square(grid, sampler, step + 1);
            step /= 2;
            self.range /= 2;
            levels += 1;
        }
        levels
    }
}

impl Default for DiamondSquare {
    fn default() -> Self {
        Self::from_config(&PlasmaConfig::default())
    }
}
