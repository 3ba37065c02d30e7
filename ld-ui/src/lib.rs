use bevy::prelude::*;

use ld_world::{combat::Health, player::Player, scene::GameScene};

pub struct UiPlugin;

#[derive(Copy, Clone, Component, Debug, Default)]
pub struct HealthText;

#[derive(Copy, Clone, Component, Debug, Default)]
pub struct GameOverScreen;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hud);
        app.add_systems(Update, update_health_text);
        app.add_systems(OnEnter(GameScene::GameOver), spawn_game_over_screen);
        app.add_systems(OnExit(GameScene::GameOver), despawn_game_over_screen);
    }
}

pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        HealthText,
        Text::new(health_label(0)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
    ));
}

pub fn update_health_text(
    players: Query<&Health, With<Player>>,
    mut texts: Query<&mut Text, With<HealthText>>,
) {
    let current = players.iter().map(Health::current).next().unwrap_or(0);
    let label = health_label(current);

    texts.iter_mut().for_each(|mut text| {
        if text.0 != label {
            text.0.clone_from(&label);
        }
    });
}

pub fn spawn_game_over_screen(mut commands: Commands) {
    commands
        .spawn((
            GameOverScreen,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn(Text::new("GAME OVER"));
            parent.spawn(Text::new("press fire to play again"));
        });
}

pub fn despawn_game_over_screen(
    mut commands: Commands,
    screens: Query<Entity, With<GameOverScreen>>,
) {
    screens.iter().for_each(|id| commands.entity(id).despawn());
}

fn health_label(current: i32) -> String {
    format!("Health: {}", current.max(0))
}
