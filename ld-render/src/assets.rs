use bevy_app::prelude::*;
use bevy_asset::{UntypedAssetId, prelude::*};
use bevy_audio::AudioSource;
use bevy_ecs::prelude::*;
use bevy_image::{Image, ImageLoaderSettings, ImageSampler};
use bevy_math::Vec2;
use bevy_sprite::prelude::*;

use ld_world::sound::SoundEffect;

pub struct AssetsPlugin;

#[derive(Debug, Resource)]
pub struct AssetHandles {
    pub player: Handle<Image>,
    pub laser: Handle<Image>,
    pub explosion: Handle<Image>,
    pub shoot: Handle<AudioSource>,
    pub death: Handle<AudioSource>,
}

impl Plugin for AssetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load);
    }
}

impl AssetHandles {
    pub const PLAYER_SIZE: Vec2 = Vec2::splat(1.5);
    pub const LASER_SIZE: Vec2 = Vec2::new(0.2, 0.8);
    pub const EXPLOSION_SIZE: Vec2 = Vec2::splat(3.0);

    pub fn asset_ids(&self) -> impl Iterator<Item = UntypedAssetId> + '_ {
        let AssetHandles {
            player,
            laser,
            explosion,
            shoot,
            death,
        } = self;

        [
            player.into(),
            laser.into(),
            explosion.into(),
            shoot.into(),
            death.into(),
        ]
        .into_iter()
    }

    pub fn player(&self) -> Sprite {
        sized_sprite(&self.player, Self::PLAYER_SIZE)
    }

    pub fn laser(&self) -> Sprite {
        sized_sprite(&self.laser, Self::LASER_SIZE)
    }

    pub fn explosion(&self) -> Sprite {
        sized_sprite(&self.explosion, Self::EXPLOSION_SIZE)
    }

    pub fn sound(&self, effect: SoundEffect) -> Handle<AudioSource> {
        match effect {
            SoundEffect::Shoot => self.shoot.clone(),
            SoundEffect::Death => self.death.clone(),
        }
    }
}

pub fn load(mut commands: Commands, assets: Res<AssetServer>) {
    commands.insert_resource(AssetHandles {
        player: assets.load_with_settings("image/player.png", set_nearest),
        laser: assets.load_with_settings("image/laser.png", set_nearest),
        explosion: assets.load_with_settings("image/explosion.png", set_nearest),
        shoot: assets.load("audio/shoot.ogg"),
        death: assets.load("audio/death.ogg"),
    });
}

fn set_nearest(settings: &mut ImageLoaderSettings) {
    settings.sampler = ImageSampler::nearest();
}

fn sized_sprite(image: &Handle<Image>, size: Vec2) -> Sprite {
    Sprite {
        custom_size: Some(size),
        ..Sprite::from_image(image.clone())
    }
}
