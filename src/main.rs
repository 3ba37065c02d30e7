use bevy::prelude::*;

use ld_controls::ControlsPlugin as LdControlsPlugin;
use ld_physics::PhysicsPlugin as LdPhysicsPlugin;
use ld_render::RenderPlugin as LdRenderPlugin;
use ld_ui::UiPlugin as LdUiPlugin;
use ld_world::WorldPlugin as LdWorldPlugin;

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Laser Defender".to_owned(),
                    ..default()
                }),
                ..default()
            }),
            LdPhysicsPlugin,
            LdWorldPlugin,
            LdControlsPlugin,
            LdRenderPlugin,
            LdUiPlugin,
        ))
        .run();
}
