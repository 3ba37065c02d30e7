use std::time::Duration;

use bevy_app::prelude::*;
use bevy_ecs::prelude::*;
use bevy_log::prelude::*;
use bevy_math::prelude::*;
use bevy_state::prelude::*;
use bevy_time::prelude::*;
use bevy_transform::prelude::*;

use ld_physics::{
    PhysicsSystems,
    collision::{Collider, Collisions},
    kinematics::Velocity,
    lifetime::Lifetime,
};

use crate::{
    WorldSystems,
    combat::{DamageSources, Damaged, Died, Health, Tag},
    scene::{GameScene, SceneLoader},
    sound::{PlaySound, SoundEffect},
};

pub struct PlayerPlugin;

#[derive(Clone, Debug, Resource)]
pub struct PlayerConfig {
    pub health: i32,
    pub spawn_position: Vec2,
    pub explosion_duration: Duration,
    pub move_speed: f32,
    /// Horizontal viewport fractions the player may move between.
    pub viewport_min_x: f32,
    pub viewport_max_x: f32,
    pub padding_bottom: f32,
    pub padding_top: f32,
    pub projectile_speed: f32,
    pub shot_interval: Duration,
    pub death_volume: f32,
    pub shoot_volume: f32,
}

#[derive(Copy, Clone, Component, Debug, Default)]
#[require(
    Collider::new(Player::RADIUS),
    Transform,
    Tag = Tag::Player,
    Health::new(Player::DEFAULT_HEALTH),
    PlayerInput,
    Gun
)]
pub struct Player;

/// Control state for the current tick, with each movement axis in `[-1, 1]`.
#[derive(Copy, Clone, Component, Debug, Default, PartialEq)]
pub struct PlayerInput {
    pub movement: Vec2,
    pub fire: bool,
}

/// World-space rectangle the player is confined to.
#[derive(Copy, Clone, Component, Debug, PartialEq)]
pub struct MovementBounds {
    pub min: Vec2,
    pub max: Vec2,
}

/// Spawns lasers on a fixed cadence while the trigger is held.
///
/// The gun is idle when `task` is `None`. While firing, the task is suspended
/// until `resume_at` and polled once per tick.
#[derive(Copy, Clone, Component, Debug, Default)]
pub struct Gun {
    task: Option<ShotTask>,
}

#[derive(Copy, Clone, Debug)]
struct ShotTask {
    resume_at: Duration,
}

#[derive(Copy, Clone, Component, Debug, Default)]
#[require(
    Collider::new(PlayerLaser::RADIUS),
    Transform,
    Velocity,
    Tag = Tag::PlayerLaser,
    Lifetime::new(PlayerLaser::DURATION)
)]
pub struct PlayerLaser;

#[derive(Copy, Clone, Component, Debug, Default)]
#[require(Transform)]
pub struct Explosion;

pub fn spawn_player(mut commands: Commands, config: Res<PlayerConfig>) {
    info!("spawning player with {} health", config.health);

    commands.spawn((
        Player,
        Health::new(config.health),
        Transform::from_translation(config.spawn_position.extend(0.0)),
    ));
}

pub fn move_player(
    mut players: Query<(&mut Transform, &PlayerInput, &MovementBounds), With<Player>>,
    config: Res<PlayerConfig>,
    time: Res<Time>,
) {
    let step = config.move_speed * time.delta_secs();

    players
        .iter_mut()
        .for_each(|(mut transform, input, bounds)| {
            let movement = input.movement.clamp(Vec2::NEG_ONE, Vec2::ONE);
            let current = transform.translation.xy();
            if movement == Vec2::ZERO && bounds.contains(current) {
                return;
            }

            let position = bounds.clamp(current + movement * step);
            transform.translation.x = position.x;
            transform.translation.y = position.y;
        });
}

pub fn shoot(
    mut commands: Commands,
    mut players: Query<(&Transform, &PlayerInput, &mut Gun), With<Player>>,
    mut sounds: MessageWriter<PlaySound>,
    config: Res<PlayerConfig>,
    time: Res<Time>,
) {
    let now = time.elapsed();

    players.iter_mut().for_each(|(transform, input, mut gun)| {
        if !input.fire {
            if gun.is_firing() {
                debug!("fire released, cancelling shots");
                gun.cancel();
            }
            return;
        }

        if !gun.is_firing() {
            gun.start(now);
        }

        if gun.poll(now, config.shot_interval) {
            let direction = (transform.rotation * Vec3::Y).xy();

            commands.spawn((
                PlayerLaser,
                Transform::from_translation(transform.translation)
                    .with_rotation(transform.rotation),
                Velocity::new(direction * config.projectile_speed),
            ));
            sounds.write(PlaySound {
                effect: SoundEffect::Shoot,
                volume: config.shoot_volume,
            });
        }
    });
}

#[allow(clippy::too_many_arguments)]
pub fn apply_hits(
    mut commands: Commands,
    mut players: Query<(Entity, &Transform, &mut Health, &Collisions), With<Player>>,
    tags: Query<&Tag>,
    sources: DamageSources,
    mut loader: ResMut<SceneLoader>,
    mut damaged: MessageWriter<Damaged>,
    mut died: MessageWriter<Died>,
    mut sounds: MessageWriter<PlaySound>,
    config: Res<PlayerConfig>,
) {
    for (id, transform, mut health, collisions) in &mut players {
        for target in collisions.started() {
            if !health.is_alive() {
                break;
            }

            let Ok(&tag) = tags.get(target) else {
                continue;
            };

            if !tag.damages_player() {
                continue;
            }

            let Some(source) = sources.get(tag, target) else {
                debug!("ignoring collision with {target} tagged {tag:?}: no damage source");
                continue;
            };

            let amount = source.damage();
            health.damage(amount);
            source.hit(target, &mut commands);
            damaged.write(Damaged { target: id, amount });

            if !health.is_alive() {
                info!("player {id} died with {} health", health.current());

                commands.entity(id).despawn();
                commands.spawn((
                    Explosion,
                    *transform,
                    Lifetime::new(config.explosion_duration),
                ));
                sounds.write(PlaySound {
                    effect: SoundEffect::Death,
                    volume: config.death_volume,
                });
                loader.load_game_over();
                died.write(Died { target: id });
            }
        }
    }
}

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerConfig>();

        app.configure_sets(
            FixedUpdate,
            (
                (WorldSystems::MovePlayer, WorldSystems::Shoot)
                    .chain()
                    .before(PhysicsSystems::Integrate),
                WorldSystems::ApplyHits
                    .after(PhysicsSystems::Collisions)
                    .before(PhysicsSystems::Lifetime),
            ),
        );

        app.add_systems(OnEnter(GameScene::Game), spawn_player);
        app.add_systems(
            FixedUpdate,
            (
                move_player.in_set(WorldSystems::MovePlayer),
                shoot.in_set(WorldSystems::Shoot),
                apply_hits.in_set(WorldSystems::ApplyHits),
            ),
        );
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            health: Player::DEFAULT_HEALTH,
            spawn_position: Vec2::new(0.0, -7.0),
            explosion_duration: Duration::from_secs(1),
            move_speed: 20.0,
            viewport_min_x: 0.19,
            viewport_max_x: 0.81,
            padding_bottom: 0.75,
            padding_top: 1.0,
            projectile_speed: 50.0,
            shot_interval: Duration::from_millis(100),
            death_volume: 1.0,
            shoot_volume: 0.25,
        }
    }
}

impl Player {
    pub const RADIUS: f32 = 0.4;
    pub const DEFAULT_HEALTH: i32 = 1000;
}

impl PlayerLaser {
    pub const RADIUS: f32 = 0.1;
    pub const DURATION: Duration = Duration::from_secs(2);
}

impl MovementBounds {
    /// Computes the bounds from a mapping of normalized viewport coordinates,
    /// with the origin at the bottom left, to world space.
    pub fn from_viewport(
        config: &PlayerConfig,
        viewport_to_world: impl Fn(Vec2) -> Option<Vec2>,
    ) -> Option<Self> {
        let left = viewport_to_world(Vec2::new(config.viewport_min_x, 0.0))?;
        let right = viewport_to_world(Vec2::new(config.viewport_max_x, 0.0))?;
        let bottom = viewport_to_world(Vec2::new(0.0, 0.0))?;
        let top = viewport_to_world(Vec2::new(0.0, 1.0))?;

        Some(MovementBounds {
            min: Vec2::new(left.x, bottom.y + config.padding_bottom),
            max: Vec2::new(right.x, top.y - config.padding_top),
        })
    }

    pub fn clamp(&self, position: Vec2) -> Vec2 {
        position.max(self.min).min(self.max)
    }

    pub fn contains(&self, position: Vec2) -> bool {
        position.cmpge(self.min).all() && position.cmple(self.max).all()
    }
}

impl Gun {
    pub fn is_firing(&self) -> bool {
        self.task.is_some()
    }

    /// Begins a new firing cycle whose first shot is due immediately.
    pub fn start(&mut self, now: Duration) {
        self.task = Some(ShotTask { resume_at: now });
    }

    pub fn cancel(&mut self) {
        self.task = None;
    }

    /// Resumes the firing task if its delay has elapsed, returning whether a
    /// shot is due this tick.
    pub fn poll(&mut self, now: Duration, interval: Duration) -> bool {
        match &mut self.task {
            Some(task) if task.resume_at <= now => {
                task.resume_at = now + interval;
                true
            }
            _ => false,
        }
    }
}
