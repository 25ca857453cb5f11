//! UI plugin - the start prompt and the score display.

use bevy::prelude::*;

use crate::game::{
    FONT_SIZE, GamePhase, GameSet, GameState, MENU_PROMPT, MenuUI, ScoreText, TEXT_COLOR,
};
use crate::rendering::GameAssets;

/// Plugin for UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_system).add_systems(
            Update,
            (update_score_text, toggle_start_menu)
                .in_set(GameSet::Render)
                .run_if(resource_changed::<GameState>),
        );
    }
}

fn text_font(assets: &GameAssets) -> TextFont {
    TextFont {
        font: assets.font.clone(),
        font_size: FONT_SIZE,
        ..default()
    }
}

fn visible_in(phase: GamePhase, shown_in: GamePhase) -> Visibility {
    if phase == shown_in {
        Visibility::Visible
    } else {
        Visibility::Hidden
    }
}

/// Initial setup system - score text and start menu.
fn setup_system(mut commands: Commands, game_state: Res<GameState>, assets: Res<GameAssets>) {
    commands.spawn((
        Text::from(format!("Score: {}", game_state.score)),
        text_font(&assets),
        TextColor(TEXT_COLOR),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        visible_in(game_state.phase, GamePhase::Playing),
        ScoreText,
    ));

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                ..default()
            },
            BackgroundColor(Color::BLACK),
            visible_in(game_state.phase, GamePhase::Menu),
            MenuUI,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::from(MENU_PROMPT),
                text_font(&assets),
                TextColor(TEXT_COLOR),
            ));
        });
}

/// System to update the score display.
fn update_score_text(
    game_state: Res<GameState>,
    mut query: Query<(&mut Text, &mut Visibility), With<ScoreText>>,
) -> Result {
    let (mut text, mut visibility) = query.single_mut()?;
    *text = Text::from(format!("Score: {}", game_state.score));
    *visibility = visible_in(game_state.phase, GamePhase::Playing);
    Ok(())
}

/// System to show the start prompt only while in the menu.
fn toggle_start_menu(
    game_state: Res<GameState>,
    mut query: Query<&mut Visibility, With<MenuUI>>,
) -> Result {
    let mut visibility = query.single_mut()?;
    *visibility = visible_in(game_state.phase, GamePhase::Menu);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlays_follow_the_phase() {
        assert_eq!(
            visible_in(GamePhase::Menu, GamePhase::Menu),
            Visibility::Visible
        );
        assert_eq!(
            visible_in(GamePhase::Playing, GamePhase::Menu),
            Visibility::Hidden
        );
        assert_eq!(
            visible_in(GamePhase::Playing, GamePhase::Playing),
            Visibility::Visible
        );
        assert_eq!(
            visible_in(GamePhase::Stopped, GamePhase::Playing),
            Visibility::Hidden
        );
    }
}
