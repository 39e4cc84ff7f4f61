use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// (row, column) delta for one step in this direction
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i16,
    pub column: i16,
}

impl Position {
    /// One cell over in `direction`, wrapping at the arena edges.
    pub fn stepped(&self, direction: Direction, rows: usize, columns: usize) -> Position {
        let (row_delta, column_delta) = direction.delta();
        Position {
            row: (self.row + row_delta).rem_euclid(rows as i16),
            column: (self.column + column_delta).rem_euclid(columns as i16),
        }
    }
}

/// The player snake: an ordered body (head at the front) plus a two-deep
/// direction buffer. The buffer is Aligned while no turn is pending and
/// Diverging once one is; in the Diverging state a second turn can be
/// queued behind the first so that two key presses inside one step
/// interval both take effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snake {
    pub body: VecDeque<Position>,
    pub direction: Direction,
    pub next_direction: Direction,
    queued_direction: Option<Direction>,
}

impl Snake {
    /// All segments start stacked on the spawn cell; they fan out as the
    /// snake moves.
    pub fn new(start: Position, length: usize) -> Self {
        Snake {
            body: std::iter::repeat(start).take(length).collect(),
            direction: Direction::Right,
            next_direction: Direction::Right,
            queued_direction: None,
        }
    }

    pub fn head(&self) -> Position {
        *self.body.front().expect("Snake body should not be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Buffer a direction change. A change that would reverse the heading
    /// it will apply against is dropped.
    pub fn steer(&mut self, direction: Direction) {
        if self.direction == self.next_direction {
            // Aligned: one turn may be buffered for the upcoming step
            if !direction.is_opposite(&self.direction) {
                self.next_direction = direction;
            }
        } else if !direction.is_opposite(&self.next_direction) {
            // Diverging: a turn is already queued, accept one more behind it
            self.queued_direction = Some(direction);
        }
    }

    /// Commit the buffered direction, advance one cell with wraparound and
    /// promote any queued second turn. Returns the new head cell.
    pub fn step_forward(&mut self, rows: usize, columns: usize) -> Position {
        self.direction = self.next_direction;
        let new_head = self.head().stepped(self.direction, rows, columns);
        self.follow(new_head);

        if let Some(queued) = self.queued_direction.take() {
            self.next_direction = queued;
        }

        new_head
    }

    /// Shift the body one slot toward the tail and place the head on an
    /// externally supplied cell.
    pub fn follow(&mut self, head: Position) {
        self.body.push_front(head);
        self.body.pop_back();
    }

    /// Duplicate the tail segment. The snake occupies the same visible
    /// distance until it next moves, then trails one cell longer.
    pub fn grow(&mut self) {
        let tail = *self.body.back().expect("Snake body should not be empty");
        self.body.push_back(tail);
    }
}
