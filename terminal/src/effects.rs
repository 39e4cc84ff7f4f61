use common::PseudoRandom;

/// Presentation-only tweens. They consume session events and frame time,
/// and never write core state.

pub const SCORE_ANIMATION_DURATION: f32 = 0.3;
pub const SHAKE_DURATION: f32 = 0.3;

/// Flashes the score line for a beat after every meal.
#[derive(Debug, Default)]
pub struct ScoreEffect {
    duration: f32,
}

impl ScoreEffect {
    pub fn new() -> Self {
        Self { duration: 0.0 }
    }

    pub fn trigger(&mut self) {
        self.duration = SCORE_ANIMATION_DURATION;
    }

    pub fn update(&mut self, dt: f32) {
        self.duration = (self.duration - dt).max(0.0);
    }

    pub fn is_active(&self) -> bool {
        self.duration > 0.0
    }
}

/// Jiggles the arena viewport by up to `intensity` cells after a death.
#[derive(Debug)]
pub struct ShakeEffect {
    duration: f32,
    intensity: i16,
}

impl ShakeEffect {
    pub fn new(intensity: i16) -> Self {
        Self { duration: 0.0, intensity }
    }

    pub fn trigger(&mut self) {
        self.duration = SHAKE_DURATION;
    }

    pub fn update(&mut self, dt: f32) {
        self.duration = (self.duration - dt).max(0.0);
    }

    pub fn is_active(&self) -> bool {
        self.duration > 0.0
    }

    /// A fresh random offset each frame while active, zero otherwise.
    pub fn offset(&self, rng: &mut PseudoRandom) -> (i16, i16) {
        if !self.is_active() {
            return (0, 0);
        }
        let span = 2 * self.intensity as u32 + 1;
        let dx = (rng.next_u32() % span) as i16 - self.intensity;
        let dy = (rng.next_u32() % span) as i16 - self.intensity;
        (dx, dy)
    }
}
