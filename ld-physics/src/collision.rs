use bevy_app::prelude::*;
use bevy_ecs::prelude::*;
use bevy_math::prelude::*;
use bevy_transform::prelude::*;
use smallvec::SmallVec;

use crate::PhysicsSystems;

pub struct CollisionPlugin;

/// Circular trigger volume. Colliders never push each other apart, they only
/// report overlaps through [`Collisions`].
#[derive(Component, Clone, Copy, Debug)]
#[require(Transform, Collisions)]
pub struct Collider {
    radius: f32,
}

#[derive(Component, Clone, Copy, Debug, Default)]
pub struct ColliderDisabled;

/// Overlapping colliders as of the last physics step, along with those from
/// the step before it so that newly started overlaps can be told apart.
#[derive(Component, Clone, Debug, Default)]
pub struct Collisions {
    active: SmallVec<[Entity; 4]>,
    previous: SmallVec<[Entity; 4]>,
}

pub fn detect_collisions(
    mut colliders: Query<(
        Entity,
        &Collider,
        &Transform,
        &mut Collisions,
        Has<ColliderDisabled>,
    )>,
    candidates: Query<(Entity, &Collider, &Transform), Without<ColliderDisabled>>,
) {
    colliders.par_iter_mut().for_each(
        |(collider_id, collider, transform, mut collisions, disabled)| {
            collisions.advance();

            if disabled {
                return;
            }

            let position = transform.translation.xy();
            for (candidate_id, candidate, candidate_transform) in &candidates {
                if candidate_id == collider_id {
                    continue;
                }

                if overlaps(
                    position,
                    candidate_transform.translation.xy(),
                    collider.radius + candidate.radius,
                ) {
                    collisions.insert(candidate_id);
                }
            }
        },
    );
}

impl Plugin for CollisionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            detect_collisions.in_set(PhysicsSystems::Collisions),
        );
    }
}

impl Collider {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Collisions {
    pub fn active(&self) -> impl ExactSizeIterator<Item = Entity> + '_ {
        self.active.iter().copied()
    }

    /// Colliders which overlap this one now but did not on the previous step.
    pub fn started(&self) -> impl Iterator<Item = Entity> + '_ {
        self.active
            .iter()
            .copied()
            .filter(|id| !self.previous.contains(id))
    }

    pub fn contains(&self, id: Entity) -> bool {
        self.active.contains(&id)
    }

    pub fn insert(&mut self, id: Entity) {
        if !self.active.contains(&id) {
            self.active.push(id);
        }
    }

    pub fn clear(&mut self) {
        self.active.clear();
        self.previous.clear();
    }

    fn advance(&mut self) {
        std::mem::swap(&mut self.active, &mut self.previous);
        self.active.clear();
    }
}

fn overlaps(a: Vec2, b: Vec2, combined_radius: f32) -> bool {
    a.distance_squared(b) < combined_radius * combined_radius
}
