use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Predefined patterns for initializing the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// A small stationary pattern
    Block,
    /// A small oscillator (horizontal phase)
    Blinker,
    /// A small oscillator
    Toad,
    /// Two blocks blinking at their touching corners
    Beacon,
    /// A diagonal spaceship
    Glider,
    /// A horizontal spaceship
    LightweightSpaceship,
    /// A pattern that grows indefinitely
    GosperGliderGun,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown pattern '{0}' (expected one of: block, blinker, toad, beacon, glider, lwss, gosper-glider-gun)")]
pub struct PatternParseError(pub String);

impl Pattern {
    pub const ALL: [Pattern; 7] = [
        Pattern::Block,
        Pattern::Blinker,
        Pattern::Toad,
        Pattern::Beacon,
        Pattern::Glider,
        Pattern::LightweightSpaceship,
        Pattern::GosperGliderGun,
    ];

    /// Live cells as `(dx, dy)` offsets from the top-left of the pattern's bounding box
    pub fn cells(&self) -> &'static [(i64, i64)] {
        match self {
            Pattern::Block => &[
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ],
            Pattern::Blinker => &[
                (0, 0), (1, 0), (2, 0),
            ],
            Pattern::Toad => &[
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
            Pattern::Beacon => &[
                (0, 0), (1, 0),
                (0, 1), (1, 1),
                (2, 2), (3, 2),
                (2, 3), (3, 3),
            ],
            Pattern::Glider => &[
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
            Pattern::LightweightSpaceship => &[
                (0, 1), (0, 3),
                (1, 0),
                (2, 0),
                (3, 0), (3, 3),
                (4, 0), (4, 1), (4, 2),
            ],
            Pattern::GosperGliderGun => &[
                // Left block
                (0, 4), (0, 5),
                (1, 4), (1, 5),

                // Left ship
                (10, 4), (10, 5), (10, 6),
                (11, 3), (11, 7),
                (12, 2), (12, 8),
                (13, 2), (13, 8),
                (14, 5),
                (15, 3), (15, 7),
                (16, 4), (16, 5), (16, 6),
                (17, 5),

                // Right ship
                (20, 2), (20, 3), (20, 4),
                (21, 2), (21, 3), (21, 4),
                (22, 1), (22, 5),
                (24, 0), (24, 1), (24, 5), (24, 6),

                // Right block
                (34, 2), (34, 3),
                (35, 2), (35, 3),
            ],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Block => "block",
            Pattern::Blinker => "blinker",
            Pattern::Toad => "toad",
            Pattern::Beacon => "beacon",
            Pattern::Glider => "glider",
            Pattern::LightweightSpaceship => "lwss",
            Pattern::GosperGliderGun => "gosper-glider-gun",
        }
    }

    /// `(width, height)` of the pattern's bounding box
    pub fn size(&self) -> (i64, i64) {
        self.cells().iter().fold((0, 0), |(w, h), &(dx, dy)| {
            (w.max(dx + 1), h.max(dy + 1))
        })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = PatternParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "block" => Ok(Pattern::Block),
            "blinker" => Ok(Pattern::Blinker),
            "toad" => Ok(Pattern::Toad),
            "beacon" => Ok(Pattern::Beacon),
            "glider" => Ok(Pattern::Glider),
            "lwss" | "lightweightspaceship" => Ok(Pattern::LightweightSpaceship),
            "gosperglidergun" | "glidergun" | "gun" => Ok(Pattern::GosperGliderGun),
            _ => Err(PatternParseError(s.to_string())),
        }
    }
}
