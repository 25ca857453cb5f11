mod audio;
mod controls;
mod food;
mod game;
mod rendering;
mod snake;
mod ui;

use bevy::{ecs::error::warn, log::LogPlugin, prelude::*, window::WindowResolution};
use bevy_vector_shapes::prelude::*;

use audio::MusicPlugin;
use controls::ControlsPlugin;
use game::{GameConfig, GameRng, GameSet, GameState, SCREEN_HEIGHT, SCREEN_WIDTH, TickTimer};
use rendering::RenderingPlugin;
use snake::SnakePlugin;
use ui::UiPlugin;

fn main() -> AppExit {
    App::new()
        .set_error_handler(warn)
        .add_plugins((
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        resolution: WindowResolution::new(SCREEN_WIDTH, SCREEN_HEIGHT),
                        title: "Snake Game".to_string(),
                        resizable: false,
                        ..Default::default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    filter: "wgpu=error,naga=warn,grid_snake=debug".to_string(),
                    ..default()
                }),
            Shape2dPlugin::default(),
        ))
        .init_resource::<GameConfig>()
        .init_resource::<GameRng>()
        .init_resource::<GameState>()
        .init_resource::<TickTimer>()
        .configure_sets(
            Update,
            (GameSet::Input, GameSet::Simulate, GameSet::Render).chain(),
        )
        .add_plugins((
            ControlsPlugin,
            SnakePlugin,
            RenderingPlugin,
            UiPlugin,
            MusicPlugin,
        ))
        .run()
}
