use serde::{Deserialize, Serialize};

use crate::util::PseudoRandom;
use crate::{
    CloneManager, Direction, Food, Grid, INITIAL_PLAYER_LENGTH, PathRecorder, Position,
    SPAWN_COLUMN, SPAWN_ROW, STEP_INTERVAL, Snake, TileState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    Playing,
    GameOver,
}

/// Discrete things that happened during an update, for the render layer's
/// effect triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    FoodEaten { position: Position },
    PlayerDied,
}

/// One full round of the game: the grid, the player, the food, the path
/// log and the clone collection, advanced in place by a single loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    pub grid: Grid,
    pub player: Snake,
    pub food: Food,
    pub path: PathRecorder,
    pub clones: CloneManager,
    pub status: RoundStatus,
    rng: PseudoRandom,
    step_timer: f32,
    food_eaten: bool,
}

impl GameSession {
    pub fn new(seed: u64) -> Self {
        let spawn = Position { row: SPAWN_ROW, column: SPAWN_COLUMN };
        let mut session = GameSession {
            grid: Grid::new(),
            player: Snake::new(spawn, INITIAL_PLAYER_LENGTH),
            food: Food { position: spawn },
            path: PathRecorder::new(spawn),
            clones: CloneManager::new(),
            status: RoundStatus::Playing,
            rng: PseudoRandom::new(seed),
            step_timer: 0.0,
            food_eaten: false,
        };
        session.relocate_food();
        session
    }

    /// Full round reset. The RNG stream keeps advancing rather than
    /// reseeding, so a seeded run stays deterministic across restarts.
    pub fn restart(&mut self) {
        let spawn = Position { row: SPAWN_ROW, column: SPAWN_COLUMN };
        self.grid = Grid::new();
        self.player = Snake::new(spawn, INITIAL_PLAYER_LENGTH);
        self.path = PathRecorder::new(spawn);
        self.clones = CloneManager::new();
        self.status = RoundStatus::Playing;
        self.step_timer = 0.0;
        self.food_eaten = false;
        self.relocate_food();
    }

    /// Player body length doubles as the score.
    pub fn score(&self) -> usize {
        self.player.len()
    }

    pub fn steer(&mut self, direction: Direction) {
        if self.status == RoundStatus::Playing {
            self.player.steer(direction);
        }
    }

    /// Advance the session by one frame. At most one simulation step fires
    /// per call; crossing the step boundary resets the accumulator to zero,
    /// so the simulation runs at a constant rate for any frame rate above
    /// 1 / STEP_INTERVAL. Idle tile animation runs every frame regardless
    /// of round status.
    pub fn update(&mut self, dt: f32) -> Vec<SessionEvent> {
        let mut events = Vec::new();

        self.grid.reset_occupancy(dt);
        self.step_timer += dt;

        if self.step_timer >= STEP_INTERVAL {
            if self.status == RoundStatus::Playing {
                self.step(&mut events);
            }
            self.step_timer = 0.0;
        }

        // Player before clones; the overlap marker is symmetric, but the
        // order is pinned anyway.
        self.grid.stamp_snake(&self.player.body, TileState::Player);
        for clone in self.clones.iter() {
            self.grid.stamp_snake(&clone.body, TileState::Clone);
        }

        if self.food_eaten {
            self.food_eaten = false;
            self.relocate_food();
        }
        self.grid.stamp_food(self.food.position);

        events
    }

    /// One simulation tick: clones replay first, then the player moves and
    /// the meal and collision checks run against the new head.
    fn step(&mut self, events: &mut Vec<SessionEvent>) {
        self.clones.advance_all(&self.path);

        let head = self.player.step_forward(self.grid.rows(), self.grid.columns());
        self.path.push(head);

        if head == self.food.position {
            // Every standing clone loses a segment, then a full-length
            // replacement starts over from the path's origin. The spawn
            // length is taken before the player grows.
            self.clones.shrink_all_and_prune();
            self.clones.spawn(self.player.len(), &self.path);
            self.player.grow();
            self.food_eaten = true;
            events.push(SessionEvent::FoodEaten { position: head });
        }

        if self.player_collided() {
            self.status = RoundStatus::GameOver;
            events.push(SessionEvent::PlayerDied);
        }
    }

    /// Head against any other player segment, or any segment of any clone.
    fn player_collided(&self) -> bool {
        let head = self.player.head();
        if self.player.body.iter().skip(1).any(|segment| *segment == head) {
            return true;
        }
        self.clones.iter().any(|clone| clone.contains(head))
    }

    fn relocate_food(&mut self) {
        match Food::place_randomly(&self.grid, &mut self.rng) {
            Some(position) => self.food.position = position,
            None => log::warn!("no open tile left for food; keeping it in place"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::COLUMNS;

    /// Park the food where the test's scripted route never goes.
    fn park_food(session: &mut GameSession) {
        session.food.position = Position { row: 0, column: 0 };
    }

    #[test]
    fn steps_fire_only_on_the_interval_boundary() {
        let mut session = GameSession::new(3);
        park_food(&mut session);
        let start = session.player.head();

        session.update(STEP_INTERVAL * 0.5);
        assert_eq!(session.player.head(), start);
        assert_eq!(session.path.len(), 1);

        session.update(STEP_INTERVAL * 0.5);
        assert_eq!(session.player.head().column, start.column + 1);
        assert_eq!(session.path.len(), 2);
    }

    #[test]
    fn a_large_frame_delta_yields_exactly_one_step() {
        let mut session = GameSession::new(3);
        park_food(&mut session);
        let start = session.player.head();

        session.update(STEP_INTERVAL * 7.0);
        assert_eq!(session.player.head().column, start.column + 1);

        // The accumulator reset to zero, so a small follow-up frame does
        // not step again.
        session.update(STEP_INTERVAL * 0.5);
        assert_eq!(session.player.head().column, start.column + 1);
    }

    #[test]
    fn eating_spawns_a_clone_and_grows_the_player() {
        let mut session = GameSession::new(3);
        let spawn = session.player.head();
        session.food.position = Position { row: spawn.row, column: spawn.column + 1 };

        let events = session.update(STEP_INTERVAL);
        let head = session.player.head();

        assert!(events.contains(&SessionEvent::FoodEaten { position: head }));
        assert_eq!(session.score(), INITIAL_PLAYER_LENGTH + 1);
        assert_eq!(session.clones.len(), 1);

        let clone = session.clones.iter().next().unwrap();
        assert_eq!(clone.body.len(), INITIAL_PLAYER_LENGTH);
        assert!(clone.body.iter().all(|segment| *segment == spawn));

        // The food moved and was stamped at its new cell this frame.
        assert_ne!(session.food.position, head);
        assert_eq!(session.grid.tile(session.food.position).state, TileState::Food);
    }

    #[test]
    fn game_over_freezes_everything_but_the_idle_animation() {
        let mut session = GameSession::new(3);
        park_food(&mut session);
        session.update(STEP_INTERVAL);
        session.status = RoundStatus::GameOver;

        let head = session.player.head();
        let path_len = session.path.len();
        let probe = Position { row: 2, column: 2 };
        let timer_before = session.grid.tile(probe).timer;

        for _ in 0..5 {
            session.update(STEP_INTERVAL);
        }

        assert_eq!(session.player.head(), head);
        assert_eq!(session.path.len(), path_len);
        assert!(session.grid.tile(probe).timer > timer_before);
    }

    #[test]
    fn restart_reinitializes_the_round() {
        let mut session = GameSession::new(3);
        let spawn = session.player.head();
        session.food.position = Position { row: spawn.row, column: spawn.column + 1 };
        session.update(STEP_INTERVAL);
        session.status = RoundStatus::GameOver;

        session.restart();

        assert_eq!(session.status, RoundStatus::Playing);
        assert_eq!(session.player.head(), spawn);
        assert_eq!(session.score(), INITIAL_PLAYER_LENGTH);
        assert_eq!(session.path.len(), 1);
        assert!(session.clones.is_empty());
        // Fresh grid: the visited trail from the previous round is gone.
        assert!(!session.grid.tile(spawn).visited);
    }

    #[test]
    fn wraparound_carries_the_player_across_the_seam() {
        let mut session = GameSession::new(3);
        park_food(&mut session);
        let start = session.player.head();

        let to_edge = COLUMNS as i16 - start.column;
        for _ in 0..to_edge {
            session.update(STEP_INTERVAL);
        }

        assert_eq!(session.player.head(), Position { row: start.row, column: 0 });
    }
}
