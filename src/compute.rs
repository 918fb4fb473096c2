use crate::rules::{next_state, CellState};

/// Neighbor-counting policy at the grid edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgePolicy {
    /// Positions outside the grid are excluded from the count
    #[default]
    Bounded,
    /// Coordinates wrap around, opposite edges are joined (torus)
    Wrapped,
}

impl EdgePolicy {
    pub fn from_wrap(wrap_edges: bool) -> Self {
        if wrap_edges {
            EdgePolicy::Wrapped
        } else {
            EdgePolicy::Bounded
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimParams {
    pub width: usize,
    pub height: usize,
    pub edges: EdgePolicy,
}

impl SimParams {
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Index in a 1D row-major array for a 2D grid position
#[inline]
pub fn get_index(x: usize, y: usize, width: usize) -> usize {
    y * width + x
}

/// Live neighbors of `(x, y)`, skipping positions outside the grid.
/// `(x, y)` must be inside the grid.
pub fn count_neighbors_bounded(cells: &[CellState], x: usize, y: usize, width: usize, height: usize) -> u8 {
    let mut count = 0;

    for dy in 0..3 {
        for dx in 0..3 {
            if dx == 1 && dy == 1 {
                continue;
            }

            // Shifted by one so the -1 offset never underflows
            let (sx, sy) = (x + dx, y + dy);
            if sx == 0 || sy == 0 || sx > width || sy > height {
                continue;
            }

            count += cells[get_index(sx - 1, sy - 1, width)].value();
        }
    }

    count
}

/// Live neighbors of `(x, y)` with wrapping boundaries.
/// `(x, y)` must be inside the grid.
pub fn count_neighbors_wrapped(cells: &[CellState], x: usize, y: usize, width: usize, height: usize) -> u8 {
    let mut count = 0;

    for dy in 0..3 {
        for dx in 0..3 {
            if dx == 1 && dy == 1 {
                continue;
            }

            let nx = (x + width + dx - 1) % width;
            let ny = (y + height + dy - 1) % height;

            count += cells[get_index(nx, ny, width)].value();
        }
    }

    count
}

pub fn count_neighbors(cells: &[CellState], x: usize, y: usize, params: &SimParams) -> u8 {
    match params.edges {
        EdgePolicy::Bounded => count_neighbors_bounded(cells, x, y, params.width, params.height),
        EdgePolicy::Wrapped => count_neighbors_wrapped(cells, x, y, params.width, params.height),
    }
}

/// Apply Game of Life rules to grid for one generation.
/// Reads only `input`, so every cell sees the same generation.
pub fn apply_rules(input: &[CellState], output: &mut [CellState], params: &SimParams) {
    let size = params.len();
    assert!(input.len() >= size);
    assert!(output.len() >= size);

    for y in 0..params.height {
        for x in 0..params.width {
            let idx = get_index(x, y, params.width);
            let neighbors = count_neighbors(input, x, y, params);
            output[idx] = next_state(input[idx], neighbors);
        }
    }
}
