//! Rendering plugin - loads the textures once and redraws the play field from the game state.

use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;

use crate::game::{
    BACKGROUND_COLOR, BACKGROUND_IMAGE, BODY_IMAGE, CELL_SIZE, Cell, Direction, FONT, FOOD_IMAGE,
    GamePhase, GameSet, GameState, HEAD_DOWN_IMAGE, HEAD_UP_IMAGE, MUSIC, OBSTACLE_COLOR,
    OBSTACLE_IMAGE, PlayfieldSprite, SCREEN_HEIGHT, SCREEN_WIDTH, TAIL_IMAGE, Z_BACKGROUND,
    Z_FOOD, Z_OBSTACLE, Z_SNAKE,
};

/// Plugin for drawing the play field.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(BACKGROUND_COLOR))
            .init_resource::<GameAssets>()
            .add_systems(Startup, setup_system)
            .add_systems(
                Update,
                redraw_playfield
                    .in_set(GameSet::Render)
                    .run_if(resource_changed::<GameState>),
            );
    }
}

/// Every asset the game uses, loaded once and held for the lifetime of the app.
#[derive(Resource)]
pub struct GameAssets {
    pub head_up: Handle<Image>,
    pub head_down: Handle<Image>,
    pub body: Handle<Image>,
    pub tail: Handle<Image>,
    pub background: Handle<Image>,
    pub food: Handle<Image>,
    pub obstacle: Handle<Image>,
    pub font: Handle<Font>,
    pub music: Handle<AudioSource>,
}

impl FromWorld for GameAssets {
    fn from_world(world: &mut World) -> Self {
        let asset_server = world.resource::<AssetServer>();
        GameAssets {
            head_up: asset_server.load(HEAD_UP_IMAGE),
            head_down: asset_server.load(HEAD_DOWN_IMAGE),
            body: asset_server.load(BODY_IMAGE),
            tail: asset_server.load(TAIL_IMAGE),
            background: asset_server.load(BACKGROUND_IMAGE),
            food: asset_server.load(FOOD_IMAGE),
            obstacle: asset_server.load(OBSTACLE_IMAGE),
            font: asset_server.load(FONT),
            music: asset_server.load(MUSIC),
        }
    }
}

/// World-space centre of a cell. Grid row 0 is the top of the window.
pub fn cell_translation(cell: Cell, z: f32) -> Vec3 {
    let size = CELL_SIZE as f32;
    Vec3::new(
        (cell.x as f32 + 0.5) * size - SCREEN_WIDTH as f32 / 2.0,
        SCREEN_HEIGHT as f32 / 2.0 - (cell.y as f32 + 0.5) * size,
        z,
    )
}

/// Picks the texture for the segment at `index`.
fn segment_image(
    assets: &GameAssets,
    index: usize,
    len: usize,
    direction: Direction,
) -> Handle<Image> {
    if index == 0 {
        if direction == Direction::Up {
            assets.head_up.clone()
        } else {
            assets.head_down.clone()
        }
    } else if index == len - 1 {
        assets.tail.clone()
    } else {
        assets.body.clone()
    }
}

fn cell_sprite(
    image: Handle<Image>,
    cell: Cell,
    z: f32,
) -> (Sprite, Transform, PlayfieldSprite) {
    (
        Sprite {
            image,
            custom_size: Some(Vec2::splat(CELL_SIZE as f32)),
            ..default()
        },
        Transform::from_translation(cell_translation(cell, z)),
        PlayfieldSprite,
    )
}

/// Initial setup system - camera and background.
fn setup_system(mut commands: Commands, assets: Res<GameAssets>) {
    commands.spawn(Camera2d);

    commands.spawn((
        Sprite {
            image: assets.background.clone(),
            custom_size: Some(Vec2::new(SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, Z_BACKGROUND),
    ));
}

/// System to rebuild the food, snake and obstacle sprites.
fn redraw_playfield(
    mut commands: Commands,
    game_state: Res<GameState>,
    assets: Res<GameAssets>,
    sprites: Query<Entity, With<PlayfieldSprite>>,
) {
    for entity in sprites.iter() {
        commands.entity(entity).despawn();
    }

    if game_state.phase != GamePhase::Playing {
        return;
    }

    commands.spawn(cell_sprite(assets.food.clone(), game_state.food, Z_FOOD));

    let len = game_state.snake.len();
    for (index, cell) in game_state.snake.iter().enumerate() {
        let image = segment_image(&assets, index, len, game_state.direction);
        commands.spawn(cell_sprite(image, *cell, Z_SNAKE));
    }

    for cell in &game_state.obstacles {
        commands.spawn(cell_sprite(assets.obstacle.clone(), *cell, Z_OBSTACLE));
        commands.spawn((
            ShapeBundle::rect(&obstacle_fill(*cell), Vec2::splat(CELL_SIZE as f32)),
            PlayfieldSprite,
        ));
    }
}

/// Solid blue square painted over an obstacle's sprite.
fn obstacle_fill(cell: Cell) -> ShapeConfig {
    ShapeConfig {
        color: OBSTACLE_COLOR,
        hollow: false,
        transform: Transform::from_translation(cell_translation(cell, Z_OBSTACLE + 0.1)),
        ..ShapeConfig::default_2d()
    }
}
