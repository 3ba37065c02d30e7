use bevy_app::prelude::*;
use bevy_ecs::{prelude::*, system::SystemParam};

use ld_physics::collision::ColliderDisabled;

pub struct CombatPlugin;

/// Collision tag used to decide how two colliders interact.
#[derive(Copy, Clone, Component, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    Player,
    PlayerLaser,
    /// A body which damages the player on contact, resolved to a [`DamageDealer`].
    Enemy,
    /// A hostile shot, resolved to a [`Projectile`].
    Projectile,
}

#[derive(Copy, Clone, Component, Debug, Default, PartialEq, Eq)]
pub struct Health {
    current: i32,
    max: i32,
}

/// Something that hurts whatever it touches.
pub trait DamageSource {
    fn damage(&self) -> i32;

    /// Called after the damage has been applied to a target.
    fn hit(&self, id: Entity, commands: &mut Commands);
}

/// Area damage applied once on contact, after which the collider is disabled.
#[derive(Copy, Clone, Component, Debug)]
pub struct DamageDealer {
    pub damage: i32,
}

/// Damage carried by a shot, which is destroyed on impact.
#[derive(Copy, Clone, Component, Debug)]
pub struct Projectile {
    pub damage: i32,
}

#[derive(SystemParam)]
pub struct DamageSources<'w, 's> {
    dealers: Query<'w, 's, &'static DamageDealer>,
    projectiles: Query<'w, 's, &'static Projectile>,
}

#[derive(Copy, Clone, Debug, Message)]
pub struct Damaged {
    pub target: Entity,
    pub amount: i32,
}

#[derive(Copy, Clone, Debug, Message)]
pub struct Died {
    pub target: Entity,
}

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<Damaged>();
        app.add_message::<Died>();
    }
}

impl Tag {
    pub fn damages_player(&self) -> bool {
        matches!(self, Tag::Enemy | Tag::Projectile)
    }
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn damage(&mut self, amount: i32) {
        self.current = self.current.saturating_sub(amount);
    }
}

impl DamageSource for DamageDealer {
    fn damage(&self) -> i32 {
        self.damage
    }

    fn hit(&self, id: Entity, commands: &mut Commands) {
        commands.entity(id).try_insert(ColliderDisabled);
    }
}

impl DamageSource for Projectile {
    fn damage(&self) -> i32 {
        self.damage
    }

    fn hit(&self, id: Entity, commands: &mut Commands) {
        commands.entity(id).try_despawn();
    }
}

impl DamageSources<'_, '_> {
    /// Resolves the damage capability matching `tag`, if the entity carries it.
    pub fn get(&self, tag: Tag, id: Entity) -> Option<&dyn DamageSource> {
        match tag {
            Tag::Enemy => self
                .dealers
                .get(id)
                .ok()
                .map(|dealer| dealer as &dyn DamageSource),
            Tag::Projectile => self
                .projectiles
                .get(id)
                .ok()
                .map(|projectile| projectile as &dyn DamageSource),
            Tag::Player | Tag::PlayerLaser => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use bevy_ecs::{prelude::*, system::RunSystemOnce};

    use ld_physics::collision::ColliderDisabled;

    use crate::combat::{DamageDealer, DamageSources, Health, Projectile, Tag};

    #[test]
    fn health_goes_negative() {
        let mut health = Health::new(1000);

        health.damage(300);
        assert_eq!(health.current(), 700);
        assert!(health.is_alive());

        health.damage(800);
        assert_eq!(health.current(), -100);
        assert!(!health.is_alive());
        assert_eq!(health.max(), 1000);
    }

    #[test]
    fn resolve_damage_sources() {
        let mut world = World::new();

        let dealer = world.spawn((Tag::Enemy, DamageDealer { damage: 5 })).id();
        let projectile = world.spawn((Tag::Projectile, Projectile { damage: 7 })).id();
        let bare = world.spawn(Tag::Enemy).id();

        let resolved = world
            .run_system_once(move |sources: DamageSources| {
                [
                    sources.get(Tag::Enemy, dealer).map(|s| s.damage()),
                    sources.get(Tag::Projectile, projectile).map(|s| s.damage()),
                    sources.get(Tag::Enemy, bare).map(|s| s.damage()),
                    sources.get(Tag::Projectile, dealer).map(|s| s.damage()),
                    sources.get(Tag::PlayerLaser, projectile).map(|s| s.damage()),
                ]
            })
            .unwrap();

        assert_eq!(resolved, [Some(5), Some(7), None, None, None]);
    }

    #[test]
    fn acknowledge_hits() {
        let mut world = World::new();

        let dealer = world.spawn((Tag::Enemy, DamageDealer { damage: 5 })).id();
        let projectile = world.spawn((Tag::Projectile, Projectile { damage: 7 })).id();

        world
            .run_system_once(move |mut commands: Commands, sources: DamageSources| {
                for (tag, id) in [(Tag::Enemy, dealer), (Tag::Projectile, projectile)] {
                    if let Some(source) = sources.get(tag, id) {
                        source.hit(id, &mut commands);
                    }
                }
            })
            .unwrap();

        assert!(world.get_entity(dealer).is_ok());
        assert!(world.get::<ColliderDisabled>(dealer).is_some());
        assert!(world.get_entity(projectile).is_err());
    }
}
