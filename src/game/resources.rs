//! Game resources (singleton state).

use bevy::prelude::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::VecDeque;
use std::time::Duration;

use super::{
    Cell, Direction, GameConfig, GamePhase, INITIAL_DIRECTION, INITIAL_SNAKE, PhaseInput,
    PlayerCommand,
};
use crate::food::Spawner;
use crate::snake::{self, StepOutcome};

/// Everything the simulation knows about a run.
#[derive(Resource, Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    /// Head first
    pub snake: VecDeque<Cell>,
    pub direction: Direction,
    pub food: Cell,
    pub obstacles: Vec<Cell>,
    pub score: u32,
    /// Current tick interval
    pub speed: Duration,
}

impl GameState {
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Self {
        let snake: VecDeque<Cell> = INITIAL_SNAKE.into_iter().collect();
        let food = Spawner::new(config).food(rng, &snake, &[]);

        GameState {
            phase: GamePhase::Menu,
            snake,
            direction: INITIAL_DIRECTION,
            food,
            obstacles: Vec::new(),
            score: 0,
            speed: config.initial_speed,
        }
    }

    /// Applies one player command. Turns only count while playing.
    pub fn apply(&mut self, command: PlayerCommand, config: &GameConfig) {
        match command {
            PlayerCommand::Turn(requested) => {
                if self.phase == GamePhase::Playing {
                    self.direction = self.direction.turn(requested);
                }
            }
            PlayerCommand::Start => {
                self.phase = self.phase.next(PhaseInput::Start, config.game_over);
            }
            PlayerCommand::Quit => {
                self.phase = self.phase.next(PhaseInput::Quit, config.game_over);
            }
        }
    }

    /// Runs one simulation tick and applies what follows from it.
    pub fn tick<R: Rng + ?Sized>(&mut self, config: &GameConfig, rng: &mut R) -> StepOutcome {
        let outcome = snake::step(
            &mut self.snake,
            self.direction,
            self.food,
            &self.obstacles,
            config.grid,
        );

        match outcome {
            StepOutcome::Moved => {}
            StepOutcome::Ate => {
                self.score += config.score_per_food;
                self.speed = config.faster(self.speed);

                let spawner = Spawner::new(config);
                self.food = spawner.food(rng, &self.snake, &self.obstacles);
                let obstacle = spawner.obstacle(
                    rng,
                    config.obstacle_placement,
                    &self.snake,
                    self.food,
                    &self.obstacles,
                );
                debug_assert!(config.grid.contains(obstacle));
                self.obstacles.push(obstacle);
            }
            StepOutcome::Collided(_) => {
                let phase = self.phase.next(PhaseInput::Collision, config.game_over);
                if phase == GamePhase::Menu {
                    *self = GameState::new(config, rng);
                } else {
                    self.phase = phase;
                }
            }
        }

        outcome
    }
}

impl FromWorld for GameState {
    fn from_world(world: &mut World) -> Self {
        let config = world.resource::<GameConfig>().clone();
        let mut rng = world.resource_mut::<GameRng>();
        GameState::new(&config, &mut rng.0)
    }
}

/// Random source for food and obstacle placement.
#[derive(Resource)]
pub struct GameRng(pub StdRng);

impl Default for GameRng {
    fn default() -> Self {
        GameRng(StdRng::from_os_rng())
    }
}

/// Paces simulation steps; its duration follows the current speed.
#[derive(Resource)]
pub struct TickTimer(pub Timer);

impl TickTimer {
    pub fn new(speed: Duration) -> Self {
        TickTimer(Timer::new(speed, TimerMode::Repeating))
    }
}

impl FromWorld for TickTimer {
    fn from_world(world: &mut World) -> Self {
        TickTimer::new(world.resource::<GameConfig>().initial_speed)
    }
}
