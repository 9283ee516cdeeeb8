//! Basic types for the gridworld environment
//!
//! Positions are 1-indexed `(row, col)` pairs; rows grow downwards.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::error::GridWorldError;

/// Movement action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Row - 1
    Up,
    /// Row + 1
    Down,
    /// Col - 1
    Left,
    /// Col + 1
    Right,
}

impl Action {
    /// All actions in index order
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    /// Index of this action in the discrete action space
    pub fn index(self) -> i64 {
        match self {
            Action::Up => 0,
            Action::Down => 1,
            Action::Left => 2,
            Action::Right => 3,
        }
    }

    /// Convert action to (row, col) delta
    pub fn to_delta(self) -> (i32, i32) {
        match self {
            Action::Up => (-1, 0),
            Action::Down => (1, 0),
            Action::Left => (0, -1),
            Action::Right => (0, 1),
        }
    }

    /// The three actions other than `self`
    pub fn others(self) -> [Action; 3] {
        let mut out = [self; 3];
        let mut i = 0;
        for action in Self::ALL {
            if action != self {
                out[i] = action;
                i += 1;
            }
        }
        out
    }
}

impl TryFrom<i64> for Action {
    type Error = GridWorldError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Action::Up),
            1 => Ok(Action::Down),
            2 => Ok(Action::Left),
            3 => Ok(Action::Right),
            other => Err(GridWorldError::InvalidAction(other)),
        }
    }
}

/// Position on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row, 1 at the top edge
    pub row: i32,
    /// Column, 1 at the left edge
    pub col: i32,
}

impl Position {
    /// Create new position
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Add action delta to position, without bounds checking
    pub fn offset(self, action: Action) -> Self {
        let (dr, dc) = action.to_delta();
        Self::new(self.row + dr, self.col + dc)
    }

    /// Check if position lies on a `size` x `size` grid indexed from 1
    pub fn in_bounds(self, size: i32) -> bool {
        (1..=size).contains(&self.row) && (1..=size).contains(&self.col)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Position> for (i32, i32) {
    fn from(p: Position) -> Self {
        (p.row, p.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Layout variant, selecting the goal cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Variant {
    /// Goal in the top-right corner
    #[default]
    A,
    /// Goal at (3, 10)
    B,
    /// Goal at (7, 8), no drift
    C,
}

impl Variant {
    /// Goal cell for this variant
    pub fn goal(self) -> Position {
        match self {
            Variant::A => Position::new(1, 12),
            Variant::B => Position::new(3, 10),
            Variant::C => Position::new(7, 8),
        }
    }

    /// Whether the rightward wind applies
    pub fn has_drift(self) -> bool {
        self != Variant::C
    }
}

impl FromStr for Variant {
    type Err = GridWorldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Variant::A),
            "B" => Ok(Variant::B),
            "C" => Ok(Variant::C),
            other => Err(GridWorldError::InvalidVariant(other.to_string())),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Variant::A => "A",
            Variant::B => "B",
            Variant::C => "C",
        };
        f.write_str(s)
    }
}
