use bevy_app::prelude::*;
use bevy_camera::{Camera, Camera2d, OrthographicProjection, Projection, ScalingMode};
use bevy_ecs::prelude::*;
use bevy_log::prelude::*;
use bevy_math::prelude::*;
use bevy_transform::prelude::*;

use ld_world::player::{MovementBounds, Player, PlayerConfig};

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera);
        app.add_systems(Update, compute_movement_bounds);
    }
}

impl CameraPlugin {
    /// Visible world height, independent of the window's aspect ratio.
    pub const VIEWPORT_HEIGHT: f32 = 20.0;
}

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::FixedVertical {
                viewport_height: CameraPlugin::VIEWPORT_HEIGHT,
            },
            ..OrthographicProjection::default_2d()
        }),
    ));
}

/// Gives players their movement bounds once the camera can map its viewport
/// into the world, which is not until its projection has been computed.
pub fn compute_movement_bounds(
    mut commands: Commands,
    players: Query<Entity, (With<Player>, Without<MovementBounds>)>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera2d>>,
    config: Res<PlayerConfig>,
) {
    if players.is_empty() {
        return;
    }

    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };

    let Some(bounds) = MovementBounds::from_viewport(&config, |viewport| {
        let ndc = viewport * 2.0 - Vec2::ONE;
        camera
            .ndc_to_world(camera_transform, ndc.extend(0.0))
            .filter(|world| world.is_finite())
            .map(|world| world.xy())
    }) else {
        debug!("camera projection not ready, deferring movement bounds");
        return;
    };

    players.iter().for_each(|id| {
        info!("player {id} confined to {} .. {}", bounds.min, bounds.max);
        commands.entity(id).insert(bounds);
    });
}
