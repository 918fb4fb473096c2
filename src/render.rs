use crate::grid::Grid;
use crate::rules::CellState;
use std::fmt;

pub const ALIVE_GLYPH: char = '.';
pub const DEAD_GLYPH: char = '*';
pub const BORDER_GLYPH: char = '|';
pub const SEPARATOR_GLYPH: char = '-';

/// Glyphs used for the console view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderParams {
    pub alive: char,
    pub dead: char,
    pub border: char,
    pub separator: char,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            alive: ALIVE_GLYPH,
            dead: DEAD_GLYPH,
            border: BORDER_GLYPH,
            separator: SEPARATOR_GLYPH,
        }
    }
}

impl RenderParams {
    fn glyph(&self, state: CellState) -> char {
        match state {
            CellState::Alive => self.alive,
            CellState::Dead => self.dead,
        }
    }
}

fn write_grid<W: fmt::Write>(out: &mut W, grid: &Grid, params: &RenderParams) -> fmt::Result {
    let separator: String = std::iter::repeat(params.separator)
        .take(grid.width() + 2)
        .collect();

    writeln!(out, "{}", separator)?;
    for row in grid.cells().chunks(grid.width().max(1)) {
        out.write_char(params.border)?;
        for &cell in row {
            out.write_char(params.glyph(cell))?;
        }
        out.write_char(params.border)?;
        out.write_char('\n')?;
    }
    writeln!(out, "{}", separator)
}

impl Grid {
    /// Bordered text view with the default glyphs
    pub fn render(&self) -> String {
        self.render_with(&RenderParams::default())
    }

    pub fn render_with(&self, params: &RenderParams) -> String {
        Rendered { grid: self, params }.to_string()
    }
}

struct Rendered<'a> {
    grid: &'a Grid,
    params: &'a RenderParams,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, self.grid, self.params)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, self, &RenderParams::default())
    }
}
