use std::time::Duration;

use bevy_app::prelude::*;
use bevy_ecs::prelude::*;
use bevy_time::prelude::*;

use crate::PhysicsSystems;

pub struct LifetimePlugin;

/// Despawns the entity once the duration has elapsed.
#[derive(Clone, Component, Debug)]
pub struct Lifetime {
    timer: Timer,
}

pub fn expire_lifetimes(
    mut commands: Commands,
    mut query: Query<(Entity, &mut Lifetime)>,
    time: Res<Time>,
) {
    query.iter_mut().for_each(|(id, mut lifetime)| {
        if lifetime.timer.tick(time.delta()).is_finished() {
            commands.entity(id).try_despawn();
        }
    });
}

impl Plugin for LifetimePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            expire_lifetimes.in_set(PhysicsSystems::Lifetime),
        );
    }
}

impl Lifetime {
    pub fn new(duration: Duration) -> Self {
        Lifetime {
            timer: Timer::new(duration, TimerMode::Once),
        }
    }

    pub fn remaining(&self) -> Duration {
        self.timer.remaining()
    }

    /// Elapsed fraction of the lifetime, from 0 at spawn to 1 at expiry.
    pub fn fraction(&self) -> f32 {
        self.timer.fraction()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bevy_app::prelude::*;
    use bevy_time::{TimePlugin, TimeUpdateStrategy, prelude::*};

    use crate::lifetime::{Lifetime, LifetimePlugin};

    #[test]
    fn despawn_after_duration() {
        let mut app = make_app();

        let entity = app
            .world_mut()
            .spawn(Lifetime::new(Duration::from_secs(2)))
            .id();

        app.update();

        let lifetime = app.world().get::<Lifetime>(entity).unwrap();
        assert_eq!(lifetime.remaining(), Duration::from_secs(1));
        assert_eq!(lifetime.fraction(), 0.5);

        app.update();

        assert!(app.world().get_entity(entity).is_err());
    }

    fn make_app() -> App {
        let mut app = App::new();
        app.add_plugins((TaskPoolPlugin::default(), TimePlugin, LifetimePlugin));

        app.insert_resource(Time::<Fixed>::from_duration(Duration::from_secs(1)));
        app.insert_resource(Time::<Virtual>::from_max_delta(Duration::MAX));
        app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs(1)));

        app.world_mut()
            .resource_mut::<Time<Real>>()
            .update_with_duration(Duration::ZERO);

        app
    }
}
