//! Gameplay tuning, fixed at compile time and shared as a resource.

use bevy::prelude::*;
use std::time::Duration;

use super::{
    GRID, Grid, INITIAL_SPEED, MIN_SPEED, SCORE_PER_FOOD, SPAWN_ATTEMPTS, SPEED_STEP,
};

/// Whether a new obstacle may land on the snake or the food.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObstaclePlacement {
    /// One uniform draw, no overlap check.
    #[default]
    Unchecked,
    /// Same bounded-retry rule as food, avoiding the body, the food and other obstacles.
    AvoidOccupied,
}

/// What happens after a fatal collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameOverBehavior {
    /// Stop the run and close the app.
    #[default]
    Exit,
    /// Reset everything and show the start screen again.
    ReturnToMenu,
}

/// Configuration for the game
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    pub grid: Grid,
    /// Tick interval at the start of a run
    pub initial_speed: Duration,
    /// How much faster each food makes the game
    pub speed_step: Duration,
    /// The tick interval never drops below this
    pub min_speed: Duration,
    pub score_per_food: u32,
    /// Draws per spawn before accepting an occupied cell
    pub spawn_attempts: u32,
    pub obstacle_placement: ObstaclePlacement,
    pub game_over: GameOverBehavior,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GRID,
            initial_speed: INITIAL_SPEED,
            speed_step: SPEED_STEP,
            min_speed: MIN_SPEED,
            score_per_food: SCORE_PER_FOOD,
            spawn_attempts: SPAWN_ATTEMPTS,
            obstacle_placement: ObstaclePlacement::default(),
            game_over: GameOverBehavior::default(),
        }
    }
}

impl GameConfig {
    /// The tick interval after one more food.
    pub fn faster(&self, speed: Duration) -> Duration {
        speed.saturating_sub(self.speed_step).max(self.min_speed)
    }
}
