//! Snake plugin - the per-tick movement rule and the system that paces it.

use bevy::prelude::*;
use std::collections::VecDeque;
use std::fmt;

use crate::game::{
    Cell, Direction, GameConfig, GamePhase, GameRng, GameSet, GameState, Grid, TickTimer,
};

/// Plugin for snake movement.
pub struct SnakePlugin;

impl Plugin for SnakePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, snake_movement.in_set(GameSet::Simulate));
    }
}

/// What ended a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// The head ran into another segment.
    SelfCollision,
    /// The head ran into an obstacle.
    Obstacle,
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collision::SelfCollision => f.write_str("ran into itself"),
            Collision::Obstacle => f.write_str("hit an obstacle"),
        }
    }
}

/// Result of a single movement step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The snake moved, length unchanged.
    Moved,
    /// The head landed on the food and the tail was kept.
    Ate,
    /// Fatal; the body was left as it was.
    Collided(Collision),
}

/// Advances `body` (head-first) one cell in `direction`, wrapping at the grid edges.
///
/// The body must hold at least the head; an empty body is left alone.
pub fn step(
    body: &mut VecDeque<Cell>,
    direction: Direction,
    food: Cell,
    obstacles: &[Cell],
    grid: Grid,
) -> StepOutcome {
    debug_assert!(!body.is_empty(), "snake body must never be empty");
    let Some(&head) = body.front() else {
        return StepOutcome::Moved;
    };
    let new_head = grid.wrap(head.offset(direction.delta()));

    if body.iter().skip(1).any(|segment| *segment == new_head) {
        return StepOutcome::Collided(Collision::SelfCollision);
    }
    if obstacles.contains(&new_head) {
        return StepOutcome::Collided(Collision::Obstacle);
    }

    body.push_front(new_head);
    if new_head == food {
        StepOutcome::Ate
    } else {
        body.pop_back();
        StepOutcome::Moved
    }
}

/// System to execute one step each time the tick timer elapses.
fn snake_movement(
    time: Res<Time>,
    config: Res<GameConfig>,
    mut timer: ResMut<TickTimer>,
    mut rng: ResMut<GameRng>,
    mut game_state: ResMut<GameState>,
) {
    if game_state.phase != GamePhase::Playing {
        return;
    }

    timer.0.tick(time.delta());
    if !timer.0.just_finished() {
        return;
    }

    let score = game_state.score;
    match game_state.tick(&config, &mut rng.0) {
        StepOutcome::Moved => {}
        StepOutcome::Ate => {
            debug!(
                "Food eaten: score {}, tick {:?}, {} obstacles",
                game_state.score,
                game_state.speed,
                game_state.obstacles.len()
            );
            timer.0.set_duration(game_state.speed);
        }
        StepOutcome::Collided(collision) => {
            info!("Game over: snake {collision}. Final score: {score}");
            *timer = TickTimer::new(game_state.speed);
        }
    }
}
