//! Direction of travel and the ECS marker components used by the adapters.

use bevy::prelude::*;

/// Direction enum for snake movement.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Unit step in grid coordinates. Up decreases y.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    /// Applies a requested turn, refusing a direct reversal.
    pub fn turn(self, requested: Direction) -> Direction {
        if requested == self.opposite() {
            self
        } else {
            requested
        }
    }
}

/// Marks every entity drawn for the play field; they are rebuilt on each redraw.
#[derive(Component)]
pub struct PlayfieldSprite;

/// Component to mark the score display UI element.
#[derive(Component)]
pub struct ScoreText;

/// Component to mark the start menu UI.
#[derive(Component)]
pub struct MenuUI;
