pub mod assets;
pub mod camera;
pub mod damage;
pub mod effect;
pub mod playback;
pub mod prefab;

use bevy_app::prelude::*;

use crate::{
    assets::AssetsPlugin, camera::CameraPlugin, damage::DamagePlugin, effect::EffectPlugin,
    playback::PlaybackPlugin, prefab::PrefabPlugin,
};

pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            AssetsPlugin,
            CameraPlugin,
            DamagePlugin,
            EffectPlugin,
            PlaybackPlugin,
            PrefabPlugin,
        ));
    }
}
