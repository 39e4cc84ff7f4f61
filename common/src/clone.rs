use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::{PathRecorder, Position};

/// A replay ghost. Its head is dictated by the recorded player path at a
/// private cursor instead of by direction input, so it retraces the
/// player's historical route exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnakeClone {
    pub body: VecDeque<Position>,
    path_cursor: usize,
}

impl SnakeClone {
    fn new(origin: Position, length: usize) -> Self {
        SnakeClone {
            body: std::iter::repeat(origin).take(length).collect(),
            path_cursor: 0,
        }
    }

    pub fn head(&self) -> Position {
        *self.body.front().expect("Clone body should not be empty")
    }

    pub fn contains(&self, cell: Position) -> bool {
        self.body.iter().any(|segment| *segment == cell)
    }
}

/// The live collection of clones. Order is not observable; removal uses
/// swap_remove.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CloneManager {
    clones: Vec<SnakeClone>,
}

impl CloneManager {
    pub fn new() -> Self {
        CloneManager { clones: Vec::new() }
    }

    pub fn iter(&self) -> impl Iterator<Item = &SnakeClone> {
        self.clones.iter()
    }

    pub fn len(&self) -> usize {
        self.clones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clones.is_empty()
    }

    /// Spawn a fresh clone at the start of the recorded path, matching the
    /// player's current length, with its cursor at the path's first entry.
    pub fn spawn(&mut self, length: usize, path: &PathRecorder) {
        self.clones.push(SnakeClone::new(path.first(), length));
    }

    /// Move every clone one step along the recorded path. A clone whose
    /// cursor has caught up with the log holds position this tick; that is
    /// transient and clears once the player moves again.
    pub fn advance_all(&mut self, path: &PathRecorder) {
        for clone in &mut self.clones {
            let Some(next) = path.get(clone.path_cursor) else {
                continue;
            };
            clone.body.push_front(next);
            clone.body.pop_back();
            clone.path_cursor += 1;
        }
    }

    /// Drop one tail segment from every clone and remove any that shrink to
    /// nothing. Runs on every meal, before the replacement clone spawns.
    pub fn shrink_all_and_prune(&mut self) {
        let mut index = 0;
        while index < self.clones.len() {
            self.clones[index].body.pop_back();
            if self.clones[index].body.is_empty() {
                self.clones.swap_remove(index);
            } else {
                index += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorded_path(cells: &[(i16, i16)]) -> PathRecorder {
        let mut path = PathRecorder::new(Position {
            row: cells[0].0,
            column: cells[0].1,
        });
        for (row, column) in &cells[1..] {
            path.push(Position { row: *row, column: *column });
        }
        path
    }

    #[test]
    fn clone_retraces_the_recorded_route() {
        let path = recorded_path(&[(13, 24), (13, 25), (13, 26), (12, 26), (12, 27)]);
        let mut clones = CloneManager::new();
        clones.spawn(3, &path);

        // First advance consumes the path start the clone already sits on.
        clones.advance_all(&path);
        assert_eq!(clones.iter().next().unwrap().head(), Position { row: 13, column: 24 });

        for _ in 1..path.len() {
            clones.advance_all(&path);
        }
        assert_eq!(clones.iter().next().unwrap().head(), Position { row: 12, column: 27 });
    }

    #[test]
    fn clone_holds_position_at_the_end_of_the_log() {
        let path = recorded_path(&[(5, 5), (5, 6)]);
        let mut clones = CloneManager::new();
        clones.spawn(2, &path);

        for _ in 0..10 {
            clones.advance_all(&path);
        }

        let clone = clones.iter().next().unwrap();
        assert_eq!(clone.head(), Position { row: 5, column: 6 });
        assert_eq!(clone.body.len(), 2);
    }

    #[test]
    fn shrinking_a_length_one_clone_removes_it() {
        let path = recorded_path(&[(0, 0)]);
        let mut clones = CloneManager::new();
        clones.spawn(1, &path);

        clones.shrink_all_and_prune();
        assert!(clones.is_empty());
    }

    #[test]
    fn shrinking_a_mixed_collection_prunes_only_the_exhausted() {
        let path = recorded_path(&[(0, 0)]);
        let mut clones = CloneManager::new();
        clones.spawn(1, &path);
        clones.spawn(1, &path);
        clones.spawn(2, &path);

        clones.shrink_all_and_prune();
        assert_eq!(clones.len(), 1);
        assert_eq!(clones.iter().next().unwrap().body.len(), 1);
    }
}
