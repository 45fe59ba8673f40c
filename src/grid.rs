use crate::cell::Cell;
use rand::Rng;
use rand::distr::{Bernoulli, BernoulliError, Distribution};
use rayon::prelude::*;
use std::fmt;

/// Relative offsets of the eight Moore-neighborhood cells
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A fixed-size toroidal grid of [`Cell`]s
///
/// The grid is stored densely in row-major order. A step never mutates the
/// grid it reads from; a new grid is allocated for each generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an all-dead grid with the given dimensions
    ///
    /// Panics if either dimension is zero; the torus needs at least one cell.
    pub fn new(height: usize, width: usize) -> Self {
        assert!(height >= 1 && width >= 1, "grid dimensions must be >= 1");
        Self {
            height,
            width,
            cells: vec![Cell::Dead; height * width],
        }
    }

    /// Creates a grid where each cell is independently alive with
    /// probability `p_alive`
    ///
    /// ## Errors
    /// Returns the distribution error if `p_alive` is outside `[0, 1]`
    pub fn random<R: Rng>(
        height: usize,
        width: usize,
        p_alive: f64,
        rng: &mut R,
    ) -> Result<Self, BernoulliError> {
        let dist = Bernoulli::new(p_alive)?;
        let mut grid = Self::new(height, width);
        for cell in &mut grid.cells {
            if dist.sample(rng) {
                *cell = Cell::Alive;
            }
        }
        Ok(grid)
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn index(&self, r: usize, c: usize) -> usize {
        r * self.width + c
    }

    #[inline]
    pub fn get(&self, r: usize, c: usize) -> Cell {
        self.cells[self.index(r, c)]
    }

    #[inline]
    pub fn set(&mut self, r: usize, c: usize, cell: Cell) {
        let idx = self.index(r, c);
        self.cells[idx] = cell;
    }

    /// Counts the live cells in the Moore neighborhood of `(r, c)`
    ///
    /// Every neighbor coordinate wraps modulo the grid dimensions, so edge
    /// cells see the opposite edge. On a one-row or one-column grid several
    /// offsets wrap onto the same cell (including the center cell itself) and
    /// each wrapped offset contributes to the count.
    ///
    /// ## Returns
    /// The number of live neighbors, in `[0, 8]`
    pub fn live_neighbors(&self, r: usize, c: usize) -> u8 {
        let h = self.height as i64;
        let w = self.width as i64;

        let mut count = 0;
        for (dr, dc) in NEIGHBOR_OFFSETS {
            let nr = (r as i64 + dr).rem_euclid(h) as usize;
            let nc = (c as i64 + dc).rem_euclid(w) as usize;
            if self.get(nr, nc).is_alive() {
                count += 1;
            }
        }
        count
    }

    /// Computes the next generation
    ///
    /// Every cell of the result is derived from this grid only, so the pass
    /// is read-only and deterministic.
    pub fn step(&self) -> Self {
        let mut cells = Vec::with_capacity(self.cells.len());
        for r in 0..self.height {
            for c in 0..self.width {
                cells.push(self.get(r, c).next(self.live_neighbors(r, c)));
            }
        }
        Self {
            height: self.height,
            width: self.width,
            cells,
        }
    }

    /// Computes the next generation with rows fanned out over the rayon
    /// thread pool
    ///
    /// Produces the same grid as [`Grid::step`]; each cell reads only the
    /// prior generation, so rows are independent.
    pub fn step_parallel(&self) -> Self {
        let cells: Vec<Cell> = (0..self.height)
            .into_par_iter()
            .flat_map_iter(|r| {
                (0..self.width).map(move |c| self.get(r, c).next(self.live_neighbors(r, c)))
            })
            .collect();
        Self {
            height: self.height,
            width: self.width,
            cells,
        }
    }

    /// The number of live cells in the grid
    #[inline]
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.height {
            for c in 0..self.width {
                f.write_str(if self.get(r, c).is_alive() { "█" } else { "·" })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
