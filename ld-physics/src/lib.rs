pub mod collision;
pub mod kinematics;
pub mod lifetime;

use bevy_app::prelude::*;
use bevy_ecs::prelude::*;

use crate::{collision::CollisionPlugin, kinematics::KinematicsPlugin, lifetime::LifetimePlugin};

pub struct PhysicsPlugin;

#[derive(Debug, PartialEq, Eq, Clone, Hash, SystemSet)]
pub enum PhysicsSystems {
    Integrate,
    Collisions,
    Lifetime,
}

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            FixedUpdate,
            (
                PhysicsSystems::Integrate,
                PhysicsSystems::Collisions,
                PhysicsSystems::Lifetime,
            )
                .chain(),
        );

        app.add_plugins((KinematicsPlugin, CollisionPlugin, LifetimePlugin));
    }
}
