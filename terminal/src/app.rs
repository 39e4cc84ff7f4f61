use std::time::Duration;

use anyhow::Result;
use common::{Direction, GameSession, PseudoRandom, RoundStatus, SessionEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::effects::{ScoreEffect, ShakeEffect};
use crate::render::grid::GridRenderer;
use crate::render::standard_renderer::StandardRenderer;
use crate::render::types::{CharDimensions, RenderConfig};

#[derive(Debug)]
pub enum AppCommand {
    Quit,
    Restart,
}

pub struct App {
    pub session: GameSession,
    score_effect: ScoreEffect,
    shake_effect: ShakeEffect,
    effects_rng: PseudoRandom,
}

impl App {
    pub fn new(seed: u64) -> Self {
        App {
            session: GameSession::new(seed),
            score_effect: ScoreEffect::new(),
            shake_effect: ShakeEffect::new(1),
            // Decorrelated from the session stream so visual jitter never
            // perturbs food placement.
            effects_rng: PseudoRandom::new(seed ^ 0x9e37_79b9_7f4a_7c15),
        }
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<AppCommand> {
        // Direction keys are edge-triggered; ignore repeats and releases.
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match key.code {
            KeyCode::Up => {
                self.session.steer(Direction::Up);
                None
            }
            KeyCode::Down => {
                self.session.steer(Direction::Down);
                None
            }
            KeyCode::Left => {
                self.session.steer(Direction::Left);
                None
            }
            KeyCode::Right => {
                self.session.steer(Direction::Right);
                None
            }
            KeyCode::Enter if self.session.status == RoundStatus::GameOver => {
                Some(AppCommand::Restart)
            }
            KeyCode::Char('q') | KeyCode::Esc => Some(AppCommand::Quit),
            _ => None,
        }
    }

    pub fn handle_command(&mut self, command: AppCommand) -> Result<()> {
        match command {
            AppCommand::Restart => {
                tracing::info!(final_score = self.session.score(), "restarting round");
                self.session.restart();
                self.score_effect = ScoreEffect::new();
                self.shake_effect = ShakeEffect::new(1);
            }
            AppCommand::Quit => {
                // Handled in main loop
            }
        }
        Ok(())
    }

    pub fn update(&mut self, dt: Duration) {
        let dt = dt.as_secs_f32();

        for event in self.session.update(dt) {
            match event {
                SessionEvent::FoodEaten { .. } => {
                    tracing::debug!(score = self.session.score(), "food eaten");
                    self.score_effect.trigger();
                }
                SessionEvent::PlayerDied => {
                    tracing::info!(score = self.session.score(), "player died");
                    self.shake_effect.trigger();
                }
            }
        }

        self.score_effect.update(dt);
        self.shake_effect.update(dt);
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(10)])
            .split(frame.area());

        self.render_score(frame, chunks[0]);
        self.render_arena(frame, chunks[1]);

        if self.session.status == RoundStatus::GameOver {
            self.render_game_over(frame, chunks[1]);
        }
    }

    fn render_score(&self, frame: &mut Frame, area: Rect) {
        let style = if self.score_effect.is_active() {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let score = Paragraph::new(format!("LENGTH: {}", self.session.score()))
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(score, area);
    }

    fn render_arena(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default().title("Snake Rewind").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let char_dims = CharDimensions::new(2, 1);
        let renderer = StandardRenderer::new(char_dims);
        let grid_renderer = GridRenderer::new(renderer);
        let config = RenderConfig { chars_per_tile: char_dims };
        let char_grid = grid_renderer.render(&self.session, &config);

        let grid_width = char_grid.physical_width() as u16;
        let grid_height = char_grid.physical_height() as u16;

        let (shake_x, shake_y) = self.shake_effect.offset(&mut self.effects_rng);

        let x_offset = (inner.width.saturating_sub(grid_width) / 2).saturating_add_signed(shake_x);
        let y_offset = (inner.height.saturating_sub(grid_height) / 2).saturating_add_signed(shake_y);

        let mut lines: Vec<Line> = Vec::new();
        for _ in 0..y_offset {
            lines.push(Line::from(""));
        }

        let padding = " ".repeat(x_offset as usize);
        for line in char_grid.into_styled_lines() {
            let mut spans = vec![Span::raw(padding.clone())];
            spans.extend(line.spans);
            lines.push(Line::from(spans));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_game_over(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                "GAME OVER",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "PRESS ENTER TO RESTART",
                Style::default().fg(Color::Gray),
            )),
        ];

        let height = (lines.len() as u16).min(area.height);
        let overlay = Rect {
            x: area.x,
            y: area.y + area.height.saturating_sub(height) / 3,
            width: area.width,
            height,
        };

        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            overlay,
        );
    }
}
