//! System sets that order one frame: input, simulation, then drawing.

use bevy::prelude::*;

/// Order of work inside one frame: poll input, step the simulation, redraw.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    Input,
    Simulate,
    Render,
}
