pub mod combat;
pub mod player;
pub mod scene;
pub mod sound;

use bevy_app::prelude::*;
use bevy_ecs::prelude::*;

use crate::{combat::CombatPlugin, player::PlayerPlugin, scene::ScenePlugin, sound::SoundPlugin};

pub struct WorldPlugin;

#[derive(Debug, PartialEq, Eq, Clone, Hash, SystemSet)]
pub enum WorldSystems {
    MovePlayer,
    Shoot,
    ApplyHits,
}

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((CombatPlugin, PlayerPlugin, ScenePlugin, SoundPlugin));
    }
}
