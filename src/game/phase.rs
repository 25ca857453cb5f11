//! Menu -> Playing -> Stopped.

use super::{Direction, GameOverBehavior};

/// Game phase enum to track which state the game is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    /// Terminal: the app exits once it sees this phase.
    Stopped,
}

/// Something that can move the game between phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseInput {
    Start,
    Quit,
    Collision,
}

/// A player command decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    Start,
    Quit,
    Turn(Direction),
}

impl GamePhase {
    pub fn next(self, input: PhaseInput, on_game_over: GameOverBehavior) -> GamePhase {
        match (self, input) {
            (GamePhase::Menu, PhaseInput::Start) => GamePhase::Playing,
            (GamePhase::Menu | GamePhase::Playing, PhaseInput::Quit) => GamePhase::Stopped,
            (GamePhase::Playing, PhaseInput::Collision) => match on_game_over {
                GameOverBehavior::Exit => GamePhase::Stopped,
                GameOverBehavior::ReturnToMenu => GamePhase::Menu,
            },
            (phase, _) => phase,
        }
    }
}
