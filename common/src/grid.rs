use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::{COLUMNS, Position, ROWS, TILE_PHASE_STRIDE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileState {
    Empty,
    Visited,
    Player,
    Food,
    Clone,
    CloneAndPlayer,
}

/// Per-cell record. `state` is transient and re-derived every frame;
/// `visited` is sticky for the life of the round. `timer` and `angle`
/// only feed the idle animation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tile {
    pub timer: f32,
    pub angle: f32,
    pub state: TileState,
    pub visited: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    tiles: Vec<Tile>,
    rows: usize,
    columns: usize,
}

impl Grid {
    pub fn new() -> Self {
        Self::with_dimensions(ROWS, COLUMNS)
    }

    pub fn with_dimensions(rows: usize, columns: usize) -> Self {
        let mut tiles = Vec::with_capacity(rows * columns);
        for row in 0..rows {
            for column in 0..columns {
                tiles.push(Tile {
                    timer: (row as f32 + 1.0)
                        * TILE_PHASE_STRIDE
                        * (column as f32 + 1.0)
                        * TILE_PHASE_STRIDE,
                    angle: 0.0,
                    state: TileState::Empty,
                    visited: false,
                });
            }
        }
        Grid { tiles, rows, columns }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn tile(&self, position: Position) -> &Tile {
        &self.tiles[self.index(position)]
    }

    fn tile_mut(&mut self, position: Position) -> &mut Tile {
        let index = self.index(position);
        &mut self.tiles[index]
    }

    fn index(&self, position: Position) -> usize {
        position.row as usize * self.columns + position.column as usize
    }

    /// Per-frame pass: advance the idle animation and re-derive each tile's
    /// occupancy from its sticky `visited` flag. Snakes and food are
    /// stamped back on top afterwards.
    pub fn reset_occupancy(&mut self, dt: f32) {
        for tile in &mut self.tiles {
            tile.timer += dt;
            tile.angle = tile.timer.sin() * std::f32::consts::PI;
            tile.state = if tile.visited {
                TileState::Visited
            } else {
                TileState::Empty
            };
        }
    }

    /// Stamp every segment of a snake body. A cell already carrying the
    /// other kind's stamp this frame becomes `CloneAndPlayer`.
    pub fn stamp_snake(&mut self, body: &VecDeque<Position>, kind: TileState) {
        for position in body {
            let tile = self.tile_mut(*position);
            tile.visited = true;

            let is_player_tile =
                matches!(tile.state, TileState::Player | TileState::CloneAndPlayer);
            let is_clone_tile =
                matches!(tile.state, TileState::Clone | TileState::CloneAndPlayer);

            tile.state = if (is_player_tile && kind == TileState::Clone)
                || (is_clone_tile && kind == TileState::Player)
            {
                TileState::CloneAndPlayer
            } else {
                kind
            };
        }
    }

    /// Food always overwrites. Placement never targets a live body cell,
    /// so this only ever paints over Empty or Visited in practice.
    pub fn stamp_food(&mut self, position: Position) {
        self.tile_mut(position).state = TileState::Food;
    }

    /// Whether food may be placed here this frame.
    pub fn is_open(&self, position: Position) -> bool {
        matches!(self.tile(position).state, TileState::Empty | TileState::Visited)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(cells: &[Position]) -> VecDeque<Position> {
        cells.iter().copied().collect()
    }

    #[test]
    fn visited_is_sticky_across_occupancy_resets() {
        let mut grid = Grid::with_dimensions(4, 4);
        let cell = Position { row: 1, column: 2 };

        grid.stamp_snake(&body(&[cell]), TileState::Player);
        assert_eq!(grid.tile(cell).state, TileState::Player);

        grid.reset_occupancy(0.016);
        assert_eq!(grid.tile(cell).state, TileState::Visited);
        assert!(grid.tile(cell).visited);

        grid.reset_occupancy(0.016);
        assert_eq!(grid.tile(cell).state, TileState::Visited);
    }

    #[test]
    fn cross_kind_stamps_merge_to_overlap_in_either_order() {
        let cell = Position { row: 0, column: 0 };

        let mut grid = Grid::with_dimensions(2, 2);
        grid.stamp_snake(&body(&[cell]), TileState::Player);
        grid.stamp_snake(&body(&[cell]), TileState::Clone);
        assert_eq!(grid.tile(cell).state, TileState::CloneAndPlayer);

        let mut grid = Grid::with_dimensions(2, 2);
        grid.stamp_snake(&body(&[cell]), TileState::Clone);
        grid.stamp_snake(&body(&[cell]), TileState::Player);
        assert_eq!(grid.tile(cell).state, TileState::CloneAndPlayer);
    }

    #[test]
    fn same_kind_restamp_does_not_produce_overlap() {
        let cell = Position { row: 0, column: 1 };
        let mut grid = Grid::with_dimensions(2, 2);

        grid.stamp_snake(&body(&[cell]), TileState::Clone);
        grid.stamp_snake(&body(&[cell]), TileState::Clone);
        assert_eq!(grid.tile(cell).state, TileState::Clone);
    }

    #[test]
    fn food_stamp_overwrites_and_closes_the_tile() {
        let cell = Position { row: 1, column: 1 };
        let mut grid = Grid::with_dimensions(2, 2);

        assert!(grid.is_open(cell));
        grid.stamp_food(cell);
        assert_eq!(grid.tile(cell).state, TileState::Food);
        assert!(!grid.is_open(cell));
    }

    #[test]
    fn idle_animation_advances_with_frame_time() {
        let mut grid = Grid::with_dimensions(2, 2);
        let cell = Position { row: 0, column: 0 };
        let before = grid.tile(cell).timer;

        grid.reset_occupancy(0.25);
        let tile = grid.tile(cell);
        assert!((tile.timer - (before + 0.25)).abs() < f32::EPSILON * 1000.0);
        assert!(tile.angle.abs() <= std::f32::consts::PI);
    }
}
