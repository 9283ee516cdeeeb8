//! Static map data: grid size, start cells and puddles

use super::types::Position;

/// Side length of the square grid
pub const GRID_SIZE: i32 = 12;

/// Reward added on reaching the goal
pub const GOAL_REWARD: i32 = 10;

/// Candidate start cells, one drawn uniformly per episode
pub const START_POSITIONS: [Position; 4] =
    [Position::new(6, 1), Position::new(7, 1), Position::new(11, 1), Position::new(12, 1)];

const fn p(row: i32, col: i32) -> Position {
    Position::new(row, col)
}

/// Outer puddle ring, reward -1
pub const PUDDLE_1: [Position; 22] = [
    p(3, 4), p(4, 4), p(5, 4), p(6, 4), p(7, 4), p(8, 4), p(9, 4),
    p(3, 5), p(9, 5),
    p(3, 6), p(9, 6),
    p(3, 7), p(9, 7),
    p(3, 8), p(7, 8), p(8, 8), p(9, 8),
    p(3, 9), p(4, 9), p(5, 9), p(6, 9), p(7, 9),
];

/// Middle puddle ring, reward -2
pub const PUDDLE_2: [Position; 14] = [
    p(4, 5), p(5, 5), p(6, 5), p(7, 5), p(8, 5),
    p(4, 6), p(8, 6),
    p(4, 7), p(6, 7), p(7, 7), p(8, 7),
    p(4, 8), p(5, 8), p(6, 8),
];

/// Puddle core, reward -3
pub const PUDDLE_3: [Position; 4] = [p(5, 6), p(6, 6), p(7, 6), p(5, 7)];

/// Puddles in lookup priority order, paired with their reward
pub const PUDDLES: [(&[Position], i32); 3] = [(&PUDDLE_1, -1), (&PUDDLE_2, -2), (&PUDDLE_3, -3)];

/// Penalty for standing on `pos`
///
/// Puddles are checked in priority order and the first one containing `pos`
/// decides; cells outside every puddle score 0.
pub fn penalty_at(pos: Position) -> i32 {
    PUDDLES
        .iter()
        .find(|(cells, _)| cells.contains(&pos))
        .map_or(0, |&(_, reward)| reward)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_puddle_cell_scores_its_region() {
        for &cell in &PUDDLE_1 {
            assert_eq!(penalty_at(cell), -1, "cell {} should be in puddle 1", cell);
        }
        for &cell in &PUDDLE_2 {
            assert_eq!(penalty_at(cell), -2, "cell {} should be in puddle 2", cell);
        }
        for &cell in &PUDDLE_3 {
            assert_eq!(penalty_at(cell), -3, "cell {} should be in puddle 3", cell);
        }
    }

    #[test]
    fn test_dry_cells_score_zero() {
        assert_eq!(penalty_at(Position::new(1, 1)), 0);
        assert_eq!(penalty_at(Position::new(10, 10)), 0);
        for &start in &START_POSITIONS {
            assert_eq!(penalty_at(start), 0);
        }
    }

    #[test]
    fn test_layout_cells_in_bounds() {
        let all = START_POSITIONS
            .iter()
            .chain(PUDDLE_1.iter())
            .chain(PUDDLE_2.iter())
            .chain(PUDDLE_3.iter());
        for cell in all {
            assert!(cell.in_bounds(GRID_SIZE), "{} is off the grid", cell);
        }
    }
}
