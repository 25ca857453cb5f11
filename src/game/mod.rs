//! Core game module containing the grid, direction, phases, configuration and shared state.

mod components;
mod config;
mod constants;
mod grid;
mod phase;
mod resources;
mod schedule;

pub use components::*;
pub use config::*;
pub use constants::*;
pub use grid::*;
pub use phase::*;
pub use resources::*;
pub use schedule::*;
