use bevy_app::prelude::*;
use bevy_ecs::{lifecycle::HookContext, prelude::*, world::DeferredWorld};
use bevy_sprite::prelude::*;

use ld_world::player::{Explosion, Player, PlayerLaser};

use crate::assets::AssetHandles;

pub struct PrefabPlugin;

#[derive(Copy, Clone, Component, Debug, Default)]
#[require(Sprite)]
#[component(on_add = PlayerSprite::on_add)]
pub struct PlayerSprite;

#[derive(Copy, Clone, Component, Debug, Default)]
#[require(Sprite)]
#[component(on_add = LaserSprite::on_add)]
pub struct LaserSprite;

#[derive(Copy, Clone, Component, Debug, Default)]
#[require(Sprite)]
#[component(on_add = ExplosionSprite::on_add)]
pub struct ExplosionSprite;

impl Plugin for PrefabPlugin {
    fn build(&self, app: &mut App) {
        app.register_required_components::<Player, PlayerSprite>();
        app.register_required_components::<PlayerLaser, LaserSprite>();
        app.register_required_components::<Explosion, ExplosionSprite>();
    }
}

impl PlayerSprite {
    fn on_add(world: DeferredWorld, context: HookContext) {
        set_sprite(world, context, AssetHandles::player);
    }
}

impl LaserSprite {
    fn on_add(world: DeferredWorld, context: HookContext) {
        set_sprite(world, context, AssetHandles::laser);
    }
}

impl ExplosionSprite {
    fn on_add(world: DeferredWorld, context: HookContext) {
        set_sprite(world, context, AssetHandles::explosion);
    }
}

fn set_sprite(mut world: DeferredWorld, context: HookContext, sprite: fn(&AssetHandles) -> Sprite) {
    let sprite = sprite(world.resource::<AssetHandles>());
    *world.get_mut::<Sprite>(context.entity).unwrap() = sprite;
}

#[cfg(test)]
mod tests {
    use bevy_app::prelude::*;
    use bevy_asset::Handle;
    use bevy_sprite::prelude::*;

    use ld_world::player::{Explosion, Player};

    use crate::{assets::AssetHandles, prefab::PrefabPlugin};

    #[test]
    fn attach_sprites() {
        let mut app = App::new();
        app.add_plugins(PrefabPlugin);
        app.insert_resource(AssetHandles {
            player: Handle::default(),
            laser: Handle::default(),
            explosion: Handle::default(),
            shoot: Handle::default(),
            death: Handle::default(),
        });

        let player = app.world_mut().spawn(Player).id();
        let explosion = app.world_mut().spawn(Explosion).id();

        let sprite = app.world().get::<Sprite>(player).unwrap();
        assert_eq!(sprite.custom_size, Some(AssetHandles::PLAYER_SIZE));

        let sprite = app.world().get::<Sprite>(explosion).unwrap();
        assert_eq!(sprite.custom_size, Some(AssetHandles::EXPLOSION_SIZE));
    }
}
