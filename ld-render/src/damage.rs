use std::time::Duration;

use bevy_app::prelude::*;
use bevy_color::{Color, Mix};
use bevy_ecs::prelude::*;
use bevy_sprite::prelude::*;
use bevy_time::{common_conditions::paused, prelude::*};
use ld_world::combat::{Damaged, Health};

pub struct DamagePlugin;

/// Tints a surviving target's sprite after a hit and fades it back to white.
///
/// Heavier hits, relative to the target's maximum health, tint more deeply.
#[derive(Copy, Clone, Component, Debug)]
pub struct HitFlash {
    intensity: f32,
    elapsed: f32,
}

impl Plugin for DamagePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (start_hit_flashes, update_hit_flashes.run_if(not(paused))).chain(),
        );
    }
}

pub fn start_hit_flashes(
    mut commands: Commands,
    mut damage_messages: MessageReader<Damaged>,
    targets: Query<(&Health, Option<&HitFlash>)>,
) {
    damage_messages.read().for_each(|damaged| {
        let Ok((health, current)) = targets.get(damaged.target) else {
            return;
        };

        if !health.is_alive() {
            return;
        }

        let intensity = HitFlash::intensity(damaged.amount, health.max())
            .max(current.map_or(0.0, |flash| flash.intensity));
        commands.entity(damaged.target).try_insert(HitFlash {
            intensity,
            elapsed: 0.0,
        });
    });
}

pub fn update_hit_flashes(
    mut commands: Commands,
    mut flashes: Query<(Entity, &mut HitFlash, &mut Sprite)>,
    time: Res<Time>,
) {
    flashes.iter_mut().for_each(|(id, mut flash, mut sprite)| {
        let fade = flash.elapsed / HitFlash::DURATION.as_secs_f32();
        if fade >= 1.0 {
            sprite.color = Color::WHITE;
            commands.entity(id).try_remove::<HitFlash>();
            return;
        }

        sprite.color = Color::WHITE.mix(&HitFlash::COLOR, flash.intensity * (1.0 - fade));
        flash.elapsed += time.delta_secs();
    });
}

impl HitFlash {
    pub const DURATION: Duration = Duration::from_millis(300);
    pub const COLOR: Color = Color::linear_rgb(1.0, 0.2, 0.2);

    /// A quarter of maximum health or more gives a full tint.
    fn intensity(amount: i32, max: i32) -> f32 {
        if max <= 0 {
            return 1.0;
        }

        (amount as f32 / max as f32 * 4.0).clamp(0.25, 1.0)
    }
}
