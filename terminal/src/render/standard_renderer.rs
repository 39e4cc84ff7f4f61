use common::{Tile, TileState};
use ratatui::style::{Color, Style};

use super::traits::TileRenderer;
use super::types::{CharDimensions, CharPattern};

/// Idle shimmer phases for empty tiles, driven by each tile's idle angle.
const EMPTY_PHASES: [char; 4] = ['·', '∙', '·', ' '];

pub struct StandardRenderer {
    char_dims: CharDimensions,
}

impl StandardRenderer {
    pub fn new(char_dims: CharDimensions) -> Self {
        Self { char_dims }
    }

    fn tile_color(state: TileState, food_aligned: bool) -> Color {
        let (r, g, b) = match state {
            TileState::Empty => (20, 20, 20),
            TileState::Visited => (50, 50, 50),
            TileState::Player => (255, 255, 255),
            TileState::Food => (40, 255, 40),
            TileState::Clone => (255, 40, 40),
            TileState::CloneAndPlayer => (200, 20, 160),
        };
        if food_aligned {
            Color::Rgb(
                u8::saturating_add(r, 10),
                u8::saturating_add(g, 10),
                u8::saturating_add(b, 10),
            )
        } else {
            Color::Rgb(r, g, b)
        }
    }

    /// Quantize the idle angle (-PI..PI) into a shimmer phase.
    fn empty_char(angle: f32) -> char {
        let normalized = (angle / std::f32::consts::PI + 1.0) / 2.0;
        let phase = (normalized * EMPTY_PHASES.len() as f32) as usize;
        EMPTY_PHASES[phase.min(EMPTY_PHASES.len() - 1)]
    }
}

impl TileRenderer for StandardRenderer {
    fn char_dimensions(&self) -> CharDimensions {
        self.char_dims
    }

    fn render_tile(&self, tile: &Tile, food_aligned: bool) -> CharPattern {
        let style = Style::default().fg(Self::tile_color(tile.state, food_aligned));
        let ch = match tile.state {
            TileState::Empty => Self::empty_char(tile.angle),
            TileState::Visited => '░',
            TileState::Food => '●',
            TileState::Player | TileState::Clone | TileState::CloneAndPlayer => '█',
        };
        CharPattern::single(ch, style, self.char_dims)
    }
}
