use bevy_app::prelude::*;
use bevy_ecs::prelude::*;
use bevy_math::prelude::*;
use bevy_time::prelude::*;
use bevy_transform::prelude::*;

use crate::PhysicsSystems;

pub struct KinematicsPlugin;

#[derive(Clone, Copy, Component, Default, Debug, PartialEq)]
#[require(Transform)]
pub struct Velocity {
    linear: Vec2,
}

impl Plugin for KinematicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            integrate_velocity.in_set(PhysicsSystems::Integrate),
        );
    }
}

pub fn integrate_velocity(mut query: Query<(&mut Transform, &Velocity)>, time: Res<Time>) {
    let delta_secs = time.delta_secs();

    query
        .par_iter_mut()
        .for_each(|(mut transform, velocity)| {
            if velocity.is_zero() {
                return;
            }

            transform.translation.x += velocity.linear.x * delta_secs;
            transform.translation.y += velocity.linear.y * delta_secs;
        });
}

impl Velocity {
    pub fn new(linear: Vec2) -> Self {
        Velocity { linear }
    }

    pub fn linear(&self) -> Vec2 {
        self.linear
    }

    pub fn is_zero(&self) -> bool {
        self.linear == Vec2::ZERO
    }
}
