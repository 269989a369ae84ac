// Copyright (c) 2026 rezky_nightky

use rand::{rngs::StdRng, Rng};

use crate::charset::random_glyph;
use crate::grid::{Grid, BLANK};

/// Chance that a top-row cell receives a fresh glyph on a given tick.
pub const SPAWN_CHANCE: f32 = 0.2;

pub struct Rain {
    rng: StdRng,
    spawn_chance: f32,
}

impl Rain {
    pub fn new(rng: StdRng) -> Self {
        Self::with_spawn_chance(rng, SPAWN_CHANCE)
    }

    pub fn with_spawn_chance(rng: StdRng, chance: f32) -> Self {
        let spawn_chance = if chance.is_finite() {
            chance.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self { rng, spawn_chance }
    }

    fn roll_spawn(&mut self) -> bool {
        // random::<f32>() is in [0, 1), so 0.0 never spawns and 1.0 always does.
        self.rng.random::<f32>() < self.spawn_chance
    }

    /// Advances the rain by one frame.
    ///
    /// Rows are visited bottom to top so a glyph moves at most one row per
    /// call. Within the top row a cell first hands its glyph down, then may be
    /// refilled by a spawn. Glyphs that reach the last row stay there.
    pub fn step(&mut self, grid: &mut Grid) {
        let rows = grid.rows() as usize;
        let cols = grid.cols() as usize;
        if rows == 0 || cols == 0 {
            return;
        }

        for row in (0..rows).rev() {
            for col in 0..cols {
                let idx = row * cols + col;
                let cells = grid.cells_mut();

                if row + 1 < rows && cells[idx] != BLANK {
                    cells[idx + cols] = cells[idx];
                    cells[idx] = BLANK;
                }

                if row == 0 && self.roll_spawn() {
                    grid.cells_mut()[idx] = random_glyph(&mut self.rng);
                }
            }
        }
    }
}
