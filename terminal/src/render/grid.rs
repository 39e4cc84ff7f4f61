use common::{GameSession, Position, RoundStatus};
use ratatui::style::Modifier;

use super::traits::TileRenderer;
use super::types::{CharGrid, RenderConfig};

pub struct GridRenderer<R: TileRenderer> {
    renderer: R,
}

impl<R: TileRenderer> GridRenderer<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn render(&self, session: &GameSession, config: &RenderConfig) -> CharGrid {
        let grid = &session.grid;
        let mut out = CharGrid::new(grid.columns(), grid.rows(), config.chars_per_tile);

        for row in 0..grid.rows() {
            for column in 0..grid.columns() {
                let position = Position {
                    row: row as i16,
                    column: column as i16,
                };
                let tile = grid.tile(position);
                let food_aligned = position.row == session.food.position.row
                    || position.column == session.food.position.column;

                let mut pattern = self.renderer.render_tile(tile, food_aligned);
                if session.status == RoundStatus::GameOver {
                    // The whole board fades behind the game-over overlay.
                    pattern.style = pattern.style.add_modifier(Modifier::DIM);
                }

                out.set_logical_point(column, row, &pattern);
            }
        }

        out
    }
}
