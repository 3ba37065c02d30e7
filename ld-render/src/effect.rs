use bevy_app::prelude::*;
use bevy_color::{Alpha, Color};
use bevy_ecs::prelude::*;
use bevy_sprite::prelude::*;

use ld_physics::lifetime::Lifetime;
use ld_world::player::Explosion;

pub struct EffectPlugin;

impl Plugin for EffectPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, fade_explosions);
    }
}

pub fn fade_explosions(mut explosions: Query<(&Lifetime, &mut Sprite), With<Explosion>>) {
    explosions.iter_mut().for_each(|(lifetime, mut sprite)| {
        sprite.color = Color::WHITE.with_alpha(1.0 - lifetime.fraction());
    });
}
