use common::Tile;

use super::types::{CharDimensions, CharPattern};

pub trait TileRenderer {
    fn char_dimensions(&self) -> CharDimensions;

    /// `food_aligned` marks tiles sharing a row or column with the food;
    /// those draw slightly brighter.
    fn render_tile(&self, tile: &Tile, food_aligned: bool) -> CharPattern;
}
