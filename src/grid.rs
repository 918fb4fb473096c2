use crate::compute::{self, get_index, EdgePolicy, SimParams};
use crate::error::GridError;
use crate::rules::{CellState, Pattern};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A fixed-size Game of Life board and its generation counter.
///
/// Writes outside the board (`set_state` and friends, `place_pattern`) are
/// silently ignored. Neighbor queries outside the board return
/// [`GridError::InvalidCoordinate`].
#[derive(Debug, Clone)]
pub struct Grid {
    params: SimParams,
    cells: Vec<CellState>,
    // Next generation is written here, then swapped with `cells`
    scratch: Vec<CellState>,
    generation: u64,
    rng: StdRng,
}

impl Grid {
    /// Creates an all-dead grid whose random source is seeded from OS entropy.
    pub fn new(width: usize, height: usize, wrap_edges: bool) -> Self {
        Self::with_rng(width, height, wrap_edges, StdRng::from_entropy())
    }

    /// Creates an all-dead grid with a deterministic random source.
    pub fn with_seed(width: usize, height: usize, wrap_edges: bool, seed: u64) -> Self {
        Self::with_rng(width, height, wrap_edges, StdRng::seed_from_u64(seed))
    }

    fn with_rng(width: usize, height: usize, wrap_edges: bool, rng: StdRng) -> Self {
        let params = SimParams {
            width,
            height,
            edges: EdgePolicy::from_wrap(wrap_edges),
        };
        log::debug!("Creating {}x{} grid ({:?} edges)", width, height, params.edges);

        Self {
            params,
            cells: vec![CellState::Dead; params.len()],
            scratch: vec![CellState::Dead; params.len()],
            generation: 0,
            rng,
        }
    }

    pub fn width(&self) -> usize {
        self.params.width
    }

    pub fn height(&self) -> usize {
        self.params.height
    }

    pub fn wrap_edges(&self) -> bool {
        self.params.edges == EdgePolicy::Wrapped
    }

    pub fn edge_policy(&self) -> EdgePolicy {
        self.params.edges
    }

    /// Number of generations advanced since construction or the last reset
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Current generation in row-major order
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    fn position(&self, x: i64, y: i64) -> Option<(usize, usize)> {
        let x = usize::try_from(x).ok().filter(|&x| x < self.params.width)?;
        let y = usize::try_from(y).ok().filter(|&y| y < self.params.height)?;
        Some((x, y))
    }

    fn checked_position(&self, x: i64, y: i64) -> Result<(usize, usize), GridError> {
        self.position(x, y).ok_or(GridError::InvalidCoordinate {
            x,
            y,
            width: self.params.width,
            height: self.params.height,
        })
    }

    /// State at `(x, y)`, or `None` outside the grid
    pub fn state(&self, x: i64, y: i64) -> Option<CellState> {
        self.position(x, y)
            .map(|(x, y)| self.cells[get_index(x, y, self.params.width)])
    }

    pub fn is_alive(&self, x: i64, y: i64) -> bool {
        self.state(x, y).is_some_and(CellState::is_alive)
    }

    pub fn set_alive(&mut self, x: i64, y: i64) {
        self.set_state(x, y, CellState::Alive);
    }

    pub fn set_dead(&mut self, x: i64, y: i64) {
        self.set_state(x, y, CellState::Dead);
    }

    /// Sets one cell. Coordinates outside the grid are a no-op.
    pub fn set_state(&mut self, x: i64, y: i64, state: CellState) {
        match self.position(x, y) {
            Some((x, y)) => {
                let idx = get_index(x, y, self.params.width);
                self.cells[idx] = state;
            }
            None => log::trace!("Ignoring write outside grid at ({}, {})", x, y),
        }
    }

    /// Live neighbors of `(x, y)` with edge cells clipped (corners have at most 3)
    pub fn count_neighbors(&self, x: i64, y: i64) -> Result<u8, GridError> {
        let (x, y) = self.checked_position(x, y)?;
        Ok(compute::count_neighbors_bounded(&self.cells, x, y, self.params.width, self.params.height))
    }

    /// Live neighbors of `(x, y)` with coordinates wrapping around the edges
    pub fn count_neighbors_wrapped(&self, x: i64, y: i64) -> Result<u8, GridError> {
        let (x, y) = self.checked_position(x, y)?;
        Ok(compute::count_neighbors_wrapped(&self.cells, x, y, self.params.width, self.params.height))
    }

    /// Advances one generation using the grid's edge policy.
    pub fn advance(&mut self) {
        compute::apply_rules(&self.cells, &mut self.scratch, &self.params);
        std::mem::swap(&mut self.cells, &mut self.scratch);
        self.generation += 1;
        log::trace!("Advanced to generation {}", self.generation);
    }

    pub fn advance_by(&mut self, generations: u64) {
        for _ in 0..generations {
            self.advance();
        }
    }

    /// Sets every cell alive or dead with equal probability and resets the generation.
    pub fn randomize(&mut self) {
        let rng = &mut self.rng;
        for cell in self.cells.iter_mut() {
            *cell = CellState::from(rng.gen_bool(0.5));
        }
        self.generation = 0;
        log::debug!("Randomized grid, {} cells alive", self.count_alive());
    }

    /// Kills every cell and resets the generation.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Dead);
        self.generation = 0;
        log::debug!("Cleared grid");
    }

    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Coordinates of every live cell, row by row
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.params.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(move |(idx, _)| (idx % width, idx / width))
    }

    /// Stamps `pattern` with its top-left corner at `(x, y)`. Cells that land
    /// outside the grid are dropped.
    pub fn place_pattern(&mut self, pattern: &Pattern, x: i64, y: i64) {
        for &(dx, dy) in pattern.cells() {
            if let (Some(cx), Some(cy)) = (x.checked_add(dx), y.checked_add(dy)) {
                self.set_alive(cx, cy);
            }
        }
        log::debug!("Placed {} at ({}, {})", pattern, x, y);
    }

    /// Stamps `pattern` centered on the grid.
    pub fn place_pattern_centered(&mut self, pattern: &Pattern) {
        let (w, h) = pattern.size();
        let width = i64::try_from(self.params.width).unwrap_or(i64::MAX);
        let height = i64::try_from(self.params.height).unwrap_or(i64::MAX);
        let x = (width - w) / 2;
        let y = (height - h) / 2;
        self.place_pattern(pattern, x, y);
    }
}

#[cfg(test)]
mod tests;
