//! Game constants for window size, pacing, scoring, assets and rendering layers.

use bevy::prelude::*;
use std::time::Duration;

use super::{Cell, Direction, Grid};

// Window and grid
pub const SCREEN_WIDTH: u32 = 800;
pub const SCREEN_HEIGHT: u32 = 600;
pub const CELL_SIZE: u32 = 20;
pub const GRID: Grid = Grid::from_screen(SCREEN_WIDTH, SCREEN_HEIGHT, CELL_SIZE);

// Timing
pub const INITIAL_SPEED: Duration = Duration::from_millis(150);
pub const SPEED_STEP: Duration = Duration::from_millis(5);
pub const MIN_SPEED: Duration = Duration::from_millis(100);

// Scoring and spawning
pub const SCORE_PER_FOOD: u32 = 10;
pub const SPAWN_ATTEMPTS: u32 = 100;

// Initial positions
pub const INITIAL_SNAKE: [Cell; 3] = [Cell::new(10, 10), Cell::new(9, 10), Cell::new(8, 10)];
pub const INITIAL_DIRECTION: Direction = Direction::Right;

// Assets, relative to the `assets/` directory
pub const HEAD_UP_IMAGE: &str = "img/head_up.png";
pub const HEAD_DOWN_IMAGE: &str = "img/head_down.png";
pub const BODY_IMAGE: &str = "img/body_straight.png";
pub const TAIL_IMAGE: &str = "img/tail.png";
pub const BACKGROUND_IMAGE: &str = "img/back.png";
pub const FOOD_IMAGE: &str = "img/food.png";
pub const OBSTACLE_IMAGE: &str = "img/obstacle.png";
pub const FONT: &str = "img/ShinyCrystal-Yq3z4.ttf";
pub const MUSIC: &str = "img/newjeans.wav";

// Text
pub const FONT_SIZE: f32 = 24.0;
pub const TEXT_COLOR: Color = Color::WHITE;
pub const MENU_PROMPT: &str = "Press ENTER to Start";

// Colors
pub const BACKGROUND_COLOR: Color = Color::BLACK;
pub const OBSTACLE_COLOR: Color = Color::srgba(0.0, 0.0, 1.0, 1.0);

// Z-index constants for rendering layers
pub const Z_BACKGROUND: f32 = 0.0;
pub const Z_FOOD: f32 = 1.0;
pub const Z_SNAKE: f32 = 1.5;
pub const Z_OBSTACLE: f32 = 2.0;
