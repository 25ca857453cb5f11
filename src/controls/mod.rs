//! Controls plugin - turns key presses into player commands and closes the app when the run stops.

use bevy::input::ButtonState;
use bevy::input::keyboard::KeyboardInput;
use bevy::prelude::*;

use crate::game::{Direction, GameConfig, GamePhase, GameSet, GameState, PlayerCommand};

/// Plugin for keyboard handling and app exit.
pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                handle_input.in_set(GameSet::Input),
                exit_when_stopped.after(GameSet::Simulate),
            ),
        );
    }
}

/// Maps a pressed key to a command for the given phase.
pub fn command_for(phase: GamePhase, key: KeyCode) -> Option<PlayerCommand> {
    match phase {
        GamePhase::Menu => match key {
            KeyCode::Enter | KeyCode::NumpadEnter | KeyCode::Space => Some(PlayerCommand::Start),
            KeyCode::Escape => Some(PlayerCommand::Quit),
            _ => None,
        },
        GamePhase::Playing => match key {
            KeyCode::ArrowUp | KeyCode::KeyW => Some(PlayerCommand::Turn(Direction::Up)),
            KeyCode::ArrowDown | KeyCode::KeyS => Some(PlayerCommand::Turn(Direction::Down)),
            KeyCode::ArrowLeft | KeyCode::KeyA => Some(PlayerCommand::Turn(Direction::Left)),
            KeyCode::ArrowRight | KeyCode::KeyD => Some(PlayerCommand::Turn(Direction::Right)),
            KeyCode::Escape => Some(PlayerCommand::Quit),
            _ => None,
        },
        GamePhase::Stopped => None,
    }
}

/// System to drain this frame's key presses, in order.
fn handle_input(
    mut keys: MessageReader<KeyboardInput>,
    config: Res<GameConfig>,
    mut game_state: ResMut<GameState>,
) {
    for key in keys.read() {
        if key.state != ButtonState::Pressed {
            continue;
        }
        let Some(command) = command_for(game_state.phase, key.key_code) else {
            continue;
        };

        let before = game_state.phase;
        game_state.apply(command, &config);
        if game_state.phase != before {
            info!("Phase changed: {:?} -> {:?}", before, game_state.phase);
        }
    }
}

/// System to close the app once the run has stopped.
fn exit_when_stopped(game_state: Res<GameState>, mut exit: MessageWriter<AppExit>) {
    if game_state.phase == GamePhase::Stopped {
        info!("Stopping with score {}", game_state.score);
        exit.write(AppExit::Success);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::input::keyboard::Key;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn menu_keys() {
        assert_eq!(
            command_for(GamePhase::Menu, KeyCode::Enter),
            Some(PlayerCommand::Start)
        );
        assert_eq!(
            command_for(GamePhase::Menu, KeyCode::Space),
            Some(PlayerCommand::Start)
        );
        assert_eq!(
            command_for(GamePhase::Menu, KeyCode::Escape),
            Some(PlayerCommand::Quit)
        );
        assert_eq!(command_for(GamePhase::Menu, KeyCode::ArrowUp), None);
    }

    #[test]
    fn playing_keys() {
        let turns = [
            (KeyCode::ArrowUp, Direction::Up),
            (KeyCode::KeyW, Direction::Up),
            (KeyCode::ArrowDown, Direction::Down),
            (KeyCode::KeyS, Direction::Down),
            (KeyCode::ArrowLeft, Direction::Left),
            (KeyCode::KeyA, Direction::Left),
            (KeyCode::ArrowRight, Direction::Right),
            (KeyCode::KeyD, Direction::Right),
        ];
        for (key, direction) in turns {
            assert_eq!(
                command_for(GamePhase::Playing, key),
                Some(PlayerCommand::Turn(direction))
            );
        }
        assert_eq!(
            command_for(GamePhase::Playing, KeyCode::Escape),
            Some(PlayerCommand::Quit)
        );
        assert_eq!(command_for(GamePhase::Playing, KeyCode::Enter), None);
    }

    #[test]
    fn stopped_ignores_everything() {
        assert_eq!(command_for(GamePhase::Stopped, KeyCode::Enter), None);
        assert_eq!(command_for(GamePhase::Stopped, KeyCode::Escape), None);
    }

    fn app_in(phase: GamePhase) -> App {
        let config = GameConfig::default();
        let mut game_state = GameState::new(&config, &mut StdRng::seed_from_u64(1));
        game_state.phase = phase;

        let mut app = App::new();
        app.add_message::<KeyboardInput>()
            .insert_resource(config)
            .insert_resource(game_state)
            .add_systems(Update, (handle_input, exit_when_stopped).chain());
        app
    }

    fn key(key_code: KeyCode, logical_key: Key, state: ButtonState) -> KeyboardInput {
        KeyboardInput {
            key_code,
            logical_key,
            state,
            text: None,
            repeat: false,
            window: Entity::PLACEHOLDER,
        }
    }

    fn send(app: &mut App, keys: impl IntoIterator<Item = KeyboardInput>) {
        for input in keys {
            app.world_mut().write_message(input);
        }
        app.update();
    }

    #[test]
    fn stopped_run_requests_exit() {
        let mut app = app_in(GamePhase::Stopped);
        app.update();
        assert_eq!(app.should_exit(), Some(AppExit::Success));
    }

    #[test]
    fn running_game_keeps_the_app_open() {
        for phase in [GamePhase::Menu, GamePhase::Playing] {
            let mut app = app_in(phase);
            app.update();
            assert_eq!(app.should_exit(), None);
        }
    }

    #[test]
    fn presses_apply_in_arrival_order() {
        let mut app = app_in(GamePhase::Menu);
        send(
            &mut app,
            [
                key(KeyCode::Enter, Key::Enter, ButtonState::Pressed),
                key(KeyCode::Enter, Key::Enter, ButtonState::Released),
                key(KeyCode::ArrowUp, Key::ArrowUp, ButtonState::Pressed),
            ],
        );

        let state = app.world().resource::<GameState>();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.direction, Direction::Up);
    }

    #[test]
    fn released_keys_are_ignored() {
        let mut app = app_in(GamePhase::Menu);
        send(&mut app, [key(KeyCode::Enter, Key::Enter, ButtonState::Released)]);
        assert_eq!(app.world().resource::<GameState>().phase, GamePhase::Menu);

        let mut app = app_in(GamePhase::Playing);
        send(&mut app, [key(KeyCode::ArrowUp, Key::ArrowUp, ButtonState::Released)]);
        assert_eq!(
            app.world().resource::<GameState>().direction,
            Direction::Right
        );
    }

    #[test]
    fn escape_closes_the_app_in_the_same_frame() {
        let mut app = app_in(GamePhase::Playing);
        send(&mut app, [key(KeyCode::Escape, Key::Escape, ButtonState::Pressed)]);

        assert_eq!(app.world().resource::<GameState>().phase, GamePhase::Stopped);
        assert_eq!(app.should_exit(), Some(AppExit::Success));
    }
}
