//! Music plugin - loops the background track for the whole session.

use bevy::prelude::*;

use crate::rendering::GameAssets;

/// Plugin for background music.
pub struct MusicPlugin;

impl Plugin for MusicPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, play_background_music);
    }
}

fn play_background_music(mut commands: Commands, assets: Res<GameAssets>) {
    commands.spawn((AudioPlayer::new(assets.music.clone()), PlaybackSettings::LOOP));
}
