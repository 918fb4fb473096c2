use proptest::prelude::*;

use super::*;
use crate::rules::CellState::{Alive, Dead};

fn grid_with(width: usize, height: usize, wrap: bool, alive: &[(i64, i64)]) -> Grid {
    let mut grid = Grid::with_seed(width, height, wrap, 0);
    for &(x, y) in alive {
        grid.set_alive(x, y);
    }
    grid
}

fn alive_set(grid: &Grid) -> Vec<(usize, usize)> {
    let mut cells: Vec<_> = grid.alive_cells().collect();
    cells.sort_unstable();
    cells
}

#[test]
fn test_new_grid_is_dead() {
    let grid = Grid::new(8, 5, false);
    assert_eq!(grid.width(), 8);
    assert_eq!(grid.height(), 5);
    assert!(!grid.wrap_edges());
    assert_eq!(grid.generation(), 0);
    assert_eq!(grid.count_alive(), 0);
    assert_eq!(grid.cells().len(), 40);
}

#[test]
fn test_set_and_read_cells() {
    let mut grid = Grid::new(4, 4, true);
    assert_eq!(grid.edge_policy(), EdgePolicy::Wrapped);
    grid.set_alive(3, 0);
    assert_eq!(grid.state(3, 0), Some(Alive));
    assert!(grid.is_alive(3, 0));
    assert_eq!(grid.count_alive(), 1);
    grid.set_state(3, 0, Dead);
    assert_eq!(grid.state(3, 0), Some(Dead));
    grid.set_alive(1, 2);
    grid.set_dead(1, 2);
    assert_eq!(grid.count_alive(), 0);
    assert_eq!(grid.state(4, 0), None);
    assert_eq!(grid.state(-1, 0), None);
    assert!(!grid.is_alive(0, 4));
}

#[test]
fn test_neighbor_query_outside_grid() {
    let grid = Grid::new(3, 3, false);
    assert_eq!(
        grid.count_neighbors(3, 1),
        Err(GridError::InvalidCoordinate { x: 3, y: 1, width: 3, height: 3 })
    );
    assert!(grid.count_neighbors_wrapped(0, -1).is_err());
    assert_eq!(grid.count_neighbors(2, 2), Ok(0));
}

#[test]
fn test_wrapped_origin_reaches_far_corners() {
    let (w, h) = (6, 5);
    let grid = grid_with(w, h, true, &[(0, 0)]);
    let (w, h) = (w as i64, h as i64);
    for (x, y) in [(w - 1, h - 1), (w - 1, 0), (0, h - 1), (1, h - 1), (w - 1, 1)] {
        assert_eq!(grid.count_neighbors_wrapped(x, y), Ok(1), "at ({}, {})", x, y);
        assert_eq!(grid.count_neighbors(x, y), Ok(0), "bounded at ({}, {})", x, y);
    }
    assert_eq!(grid.count_neighbors_wrapped(0, 0), Ok(0));
    assert_eq!(grid.count_neighbors_wrapped(2, 2), Ok(0));
}

#[test]
fn test_bounded_corner_has_three_neighbors() {
    let mut grid = Grid::new(5, 5, false);
    for y in 0..5 {
        for x in 0..5 {
            grid.set_alive(x, y);
        }
    }
    assert_eq!(grid.count_neighbors(0, 0), Ok(3));
    assert_eq!(grid.count_neighbors(4, 0), Ok(3));
    assert_eq!(grid.count_neighbors(0, 4), Ok(3));
    assert_eq!(grid.count_neighbors(4, 4), Ok(3));
    assert_eq!(grid.count_neighbors(2, 0), Ok(5));
    assert_eq!(grid.count_neighbors(2, 2), Ok(8));
    assert_eq!(grid.count_neighbors_wrapped(0, 0), Ok(8));
}

#[test]
fn test_block_is_still_life() {
    let mut grid = grid_with(4, 4, false, &[(1, 1), (2, 1), (1, 2), (2, 2)]);
    let before = alive_set(&grid);
    for generation in 1..=5 {
        grid.advance();
        assert_eq!(grid.generation(), generation);
        assert_eq!(alive_set(&grid), before);
    }
}

#[test]
fn test_blinker_oscillates() {
    let horizontal = [(1, 2), (2, 2), (3, 2)];
    let mut grid = grid_with(5, 5, false, &horizontal);
    let start = alive_set(&grid);

    grid.advance();
    assert_eq!(alive_set(&grid), vec![(2, 1), (2, 2), (2, 3)]);
    assert_eq!(grid.generation(), 1);

    grid.advance();
    assert_eq!(alive_set(&grid), start);
    assert_eq!(grid.generation(), 2);
}

#[test]
fn test_glider_wraps_around_torus() {
    let mut grid = Grid::new(6, 6, true);
    grid.place_pattern(&Pattern::Glider, 3, 3);
    let start = alive_set(&grid);

    grid.advance_by(4);
    assert_eq!(grid.generation(), 4);
    assert_eq!(grid.count_alive(), 5);
    let shifted: Vec<_> = {
        let mut cells: Vec<_> = start.iter().map(|&(x, y)| ((x + 1) % 6, (y + 1) % 6)).collect();
        cells.sort_unstable();
        cells
    };
    assert_eq!(alive_set(&grid), shifted);

    // A full lap of the torus brings it back home
    grid.advance_by(20);
    assert_eq!(alive_set(&grid), start);
}

#[test]
fn test_glider_dies_into_bounded_corner() {
    let mut grid = Grid::new(6, 6, false);
    grid.place_pattern(&Pattern::Glider, 3, 3);
    grid.advance_by(24);
    assert_eq!(alive_set(&grid), vec![(4, 4), (4, 5), (5, 4), (5, 5)]);
}

#[test]
fn test_place_pattern_clips_at_edges() {
    let mut grid = Grid::new(4, 4, false);
    grid.place_pattern(&Pattern::Block, 3, 3);
    assert_eq!(alive_set(&grid), vec![(3, 3)]);
    grid.clear();
    grid.place_pattern_centered(&Pattern::Blinker);
    assert_eq!(alive_set(&grid), vec![(0, 1), (1, 1), (2, 1)]);
}

#[test]
fn test_place_pattern_far_anchor_is_dropped() {
    let mut grid = Grid::new(4, 4, false);
    grid.place_pattern(&Pattern::Block, i64::MAX, 0);
    grid.place_pattern(&Pattern::Glider, 0, i64::MAX - 1);
    grid.place_pattern(&Pattern::Block, i64::MIN, i64::MIN);
    assert_eq!(grid.count_alive(), 0);

    // Anchors just off the top-left still land their in-grid cells
    grid.place_pattern(&Pattern::Block, -1, -1);
    assert_eq!(alive_set(&grid), vec![(0, 0)]);
}

#[test]
fn test_place_pattern_centered_larger_than_grid() {
    let mut grid = Grid::new(3, 3, false);
    grid.place_pattern_centered(&Pattern::GosperGliderGun);
    assert!(grid.count_alive() <= 9);
}

#[test]
fn test_clear_and_randomize_reset_generation() {
    let mut grid = Grid::with_seed(10, 10, true, 7);
    grid.randomize();
    grid.advance_by(3);
    assert_eq!(grid.generation(), 3);
    grid.randomize();
    assert_eq!(grid.generation(), 0);
    assert!(grid.count_alive() <= 100);

    grid.advance_by(2);
    grid.clear();
    assert_eq!(grid.generation(), 0);
    assert_eq!(grid.count_alive(), 0);
}

#[test]
fn test_seeded_randomize_is_reproducible() {
    let mut a = Grid::with_seed(16, 9, false, 42);
    let mut b = Grid::with_seed(16, 9, false, 42);
    a.randomize();
    b.randomize();
    assert_eq!(a.cells(), b.cells());
    // Some cells of each kind in a 144-cell coin flip
    assert!(a.count_alive() > 0);
    assert!(a.count_alive() < 144);
}

fn arb_grid() -> impl Strategy<Value = Grid> {
    (1..12_usize, 1..12_usize, any::<bool>(), any::<u64>()).prop_map(|(w, h, wrap, seed)| {
        let mut grid = Grid::with_seed(w, h, wrap, seed);
        grid.randomize();
        grid
    })
}

proptest! {
    /// Tests that writes outside the grid change nothing.
    #[test]
    fn test_out_of_range_write_is_noop(
        grid in arb_grid(),
        x in -20..20_i64,
        y in -20..20_i64,
        alive in any::<bool>(),
    ) {
        prop_assume!(grid.state(x, y).is_none());
        let mut grid = grid;
        let before = grid.cells().to_vec();
        grid.set_state(x, y, CellState::from(alive));
        prop_assert_eq!(grid.cells(), &before[..]);
    }

    /// Tests that setting a dead cell alive adds exactly one live cell.
    #[test]
    fn test_set_alive_adds_one(grid in arb_grid(), x in 0..12_i64, y in 0..12_i64) {
        let mut grid = grid;
        let x = x % grid.width() as i64;
        let y = y % grid.height() as i64;
        grid.set_dead(x, y);
        let before = grid.count_alive();
        grid.set_state(x, y, Alive);
        prop_assert!(grid.is_alive(x, y));
        prop_assert_eq!(grid.count_alive(), before + 1);
    }

    /// Tests neighbor count ranges for both edge policies.
    #[test]
    fn test_neighbor_counts_in_range(grid in arb_grid()) {
        let (w, h) = (grid.width() as i64, grid.height() as i64);
        for y in 0..h {
            for x in 0..w {
                let wrapped = grid.count_neighbors_wrapped(x, y).unwrap();
                let bounded = grid.count_neighbors(x, y).unwrap();
                prop_assert!(wrapped <= 8);
                prop_assert!(bounded <= 8);
                let corner = (x == 0 || x == w - 1) && (y == 0 || y == h - 1);
                if corner {
                    prop_assert!(bounded <= 3);
                }
            }
        }
    }

    /// Tests that advance matches the rule applied to a snapshot of the previous generation.
    #[test]
    fn test_advance_uses_previous_generation(grid in arb_grid()) {
        let mut grid = grid;
        let before = grid.clone();
        let generation = grid.generation();
        grid.advance();
        prop_assert_eq!(grid.generation(), generation + 1);
        for y in 0..grid.height() as i64 {
            for x in 0..grid.width() as i64 {
                let neighbors = if before.wrap_edges() {
                    before.count_neighbors_wrapped(x, y).unwrap()
                } else {
                    before.count_neighbors(x, y).unwrap()
                };
                let expected = crate::rules::next_state(before.state(x, y).unwrap(), neighbors);
                prop_assert_eq!(grid.state(x, y), Some(expected));
            }
        }
    }

    /// Tests that the live count after randomize stays within the grid size.
    #[test]
    fn test_count_alive_bounded(grid in arb_grid()) {
        prop_assert!(grid.count_alive() <= grid.width() * grid.height());
        prop_assert_eq!(grid.count_alive(), grid.alive_cells().count());
    }
}
