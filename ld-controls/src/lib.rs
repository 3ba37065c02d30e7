use bevy_app::prelude::*;
use bevy_ecs::prelude::*;
use bevy_input::{InputSystems, prelude::*};
use bevy_math::prelude::*;
use bevy_state::prelude::*;

use ld_world::{
    player::{Player, PlayerInput},
    scene::{GameScene, SceneLoader},
};

pub struct ControlsPlugin;

const LEFT: [KeyCode; 2] = [KeyCode::ArrowLeft, KeyCode::KeyA];
const RIGHT: [KeyCode; 2] = [KeyCode::ArrowRight, KeyCode::KeyD];
const DOWN: [KeyCode; 2] = [KeyCode::ArrowDown, KeyCode::KeyS];
const UP: [KeyCode; 2] = [KeyCode::ArrowUp, KeyCode::KeyW];
const FIRE: [KeyCode; 2] = [KeyCode::Space, KeyCode::ControlLeft];

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            PreUpdate,
            (
                read_player_input,
                restart_on_fire.run_if(in_state(GameScene::GameOver)),
            )
                .after(InputSystems),
        );
    }
}

pub fn read_player_input(
    mut players: Query<&mut PlayerInput, With<Player>>,
    keys: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
) {
    let input = PlayerInput {
        movement: Vec2::new(axis(&keys, LEFT, RIGHT), axis(&keys, DOWN, UP)),
        fire: keys.any_pressed(FIRE) || mouse.pressed(MouseButton::Left),
    };

    players.iter_mut().for_each(|mut player_input| {
        player_input.set_if_neq(input);
    });
}

pub fn restart_on_fire(
    mut loader: ResMut<SceneLoader>,
    keys: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
) {
    if loader.pending().is_some() {
        return;
    }

    if keys.any_just_pressed(FIRE) || mouse.just_pressed(MouseButton::Left) {
        loader.load_game();
    }
}

fn axis(keys: &ButtonInput<KeyCode>, negative: [KeyCode; 2], positive: [KeyCode; 2]) -> f32 {
    let mut value = 0.0;
    if keys.any_pressed(positive) {
        value += 1.0;
    }
    if keys.any_pressed(negative) {
        value -= 1.0;
    }
    value
}

#[cfg(test)]
mod tests {
    use bevy_app::prelude::*;
    use bevy_input::prelude::*;
    use bevy_math::prelude::*;
    use bevy_state::{app::StatesPlugin, prelude::*};

    use ld_world::{
        player::{Player, PlayerInput},
        scene::{GameScene, SceneLoader},
    };

    use crate::ControlsPlugin;

    #[test]
    fn read_keyboard() {
        let mut app = make_app();
        let player = app.world_mut().spawn(Player).id();

        press(&mut app, KeyCode::ArrowRight);
        press(&mut app, KeyCode::KeyS);
        press(&mut app, KeyCode::Space);
        app.update();

        let input = app.world().get::<PlayerInput>(player).unwrap();
        assert_eq!(
            *input,
            PlayerInput {
                movement: Vec2::new(1.0, -1.0),
                fire: true,
            }
        );
    }

    #[test]
    fn opposing_keys_cancel() {
        let mut app = make_app();
        let player = app.world_mut().spawn(Player).id();

        press(&mut app, KeyCode::ArrowLeft);
        press(&mut app, KeyCode::KeyD);
        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        app.update();

        let input = app.world().get::<PlayerInput>(player).unwrap();
        assert_eq!(input.movement, Vec2::ZERO);
        assert!(input.fire);
    }

    #[test]
    fn restart_from_game_over() {
        let mut app = make_app();
        app.world_mut()
            .resource_mut::<NextState<GameScene>>()
            .set(GameScene::GameOver);
        app.update();

        press(&mut app, KeyCode::Space);
        app.update();

        assert_eq!(
            app.world().resource::<SceneLoader>().pending(),
            Some(GameScene::Game)
        );
    }

    fn press(app: &mut App, key: KeyCode) {
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
    }

    fn make_app() -> App {
        let mut app = App::new();
        app.add_plugins((TaskPoolPlugin::default(), StatesPlugin, ControlsPlugin));

        app.init_state::<GameScene>();
        app.init_resource::<SceneLoader>();
        app.init_resource::<ButtonInput<KeyCode>>();
        app.init_resource::<ButtonInput<MouseButton>>();

        app
    }
}
