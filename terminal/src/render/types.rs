use ratatui::style::Style;
use ratatui::text::{Line, Span};

#[derive(Clone, Copy, Debug)]
pub struct RenderConfig {
    pub chars_per_tile: CharDimensions,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharDimensions {
    pub horizontal: usize,
    pub vertical: usize,
}

impl CharDimensions {
    pub fn new(horizontal: usize, vertical: usize) -> Self {
        Self { horizontal, vertical }
    }
}

/// A styled block of characters covering one logical tile.
#[derive(Clone, Debug)]
pub struct CharPattern {
    pub chars: Vec<Vec<char>>,
    pub style: Style,
}

impl CharPattern {
    pub fn new(chars: Vec<Vec<char>>, style: Style) -> Self {
        Self { chars, style }
    }

    pub fn single(ch: char, style: Style, dims: CharDimensions) -> Self {
        Self::new(vec![vec![ch; dims.horizontal]; dims.vertical], style)
    }
}

pub struct CharGrid {
    chars: Vec<Vec<char>>,
    styles: Vec<Vec<Style>>,
    logical_width: usize,
    logical_height: usize,
    char_dims: CharDimensions,
}

impl CharGrid {
    pub fn new(logical_width: usize, logical_height: usize, char_dims: CharDimensions) -> Self {
        let physical_width = logical_width * char_dims.horizontal;
        let physical_height = logical_height * char_dims.vertical;
        Self {
            chars: vec![vec![' '; physical_width]; physical_height],
            styles: vec![vec![Style::default(); physical_width]; physical_height],
            logical_width,
            logical_height,
            char_dims,
        }
    }

    pub fn set_logical_point(&mut self, x: usize, y: usize, pattern: &CharPattern) {
        let start_x = x * self.char_dims.horizontal;
        let start_y = y * self.char_dims.vertical;

        for (dy, row) in pattern.chars.iter().enumerate() {
            for (dx, &ch) in row.iter().enumerate() {
                if let Some(char_row) = self.chars.get_mut(start_y + dy) {
                    if let Some(cell) = char_row.get_mut(start_x + dx) {
                        *cell = ch;
                        self.styles[start_y + dy][start_x + dx] = pattern.style;
                    }
                }
            }
        }
    }

    /// Plain characters, styles discarded. Handy for demos and assertions.
    pub fn into_lines(self) -> Vec<Vec<char>> {
        self.chars
    }

    pub fn into_styled_lines(self) -> Vec<Line<'static>> {
        self.chars
            .into_iter()
            .zip(self.styles)
            .map(|(chars, styles)| {
                let spans: Vec<Span> = chars
                    .into_iter()
                    .zip(styles)
                    .map(|(ch, style)| Span::styled(ch.to_string(), style))
                    .collect();
                Line::from(spans)
            })
            .collect()
    }

    pub fn physical_width(&self) -> usize {
        self.logical_width * self.char_dims.horizontal
    }

    pub fn physical_height(&self) -> usize {
        self.logical_height * self.char_dims.vertical
    }
}
