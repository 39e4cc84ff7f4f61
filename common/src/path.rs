use serde::{Deserialize, Serialize};

use crate::Position;

/// Append-only log of every cell the player's head has occupied since
/// round start, beginning with the spawn cell. Clones replay it by index;
/// it is never truncated until the round is reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathRecorder {
    cells: Vec<Position>,
}

impl PathRecorder {
    pub fn new(start: Position) -> Self {
        PathRecorder { cells: vec![start] }
    }

    pub fn push(&mut self, cell: Position) {
        self.cells.push(cell);
    }

    pub fn get(&self, index: usize) -> Option<Position> {
        self.cells.get(index).copied()
    }

    /// The earliest recorded cell. Always present: the recorder is seeded
    /// with the spawn cell at construction.
    pub fn first(&self) -> Position {
        self.cells[0]
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
