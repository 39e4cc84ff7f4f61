use serde::{Deserialize, Serialize};

use crate::util::PseudoRandom;
use crate::{Grid, Position};

/// Uniform samples tried before falling back to an exhaustive scan.
const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Pick a uniformly random open tile (empty or previously visited,
    /// never a live body cell). Returns None only when the board has no
    /// open tile at all.
    pub fn place_randomly(grid: &Grid, rng: &mut PseudoRandom) -> Option<Position> {
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let position = Position {
                row: (rng.next_u32() % grid.rows() as u32) as i16,
                column: (rng.next_u32() % grid.columns() as u32) as i16,
            };
            if grid.is_open(position) {
                return Some(position);
            }
        }

        // Board nearly full: settle for the first open tile left, if any.
        for row in 0..grid.rows() as i16 {
            for column in 0..grid.columns() as i16 {
                let position = Position { row, column };
                if grid.is_open(position) {
                    return Some(position);
                }
            }
        }

        None
    }
}
