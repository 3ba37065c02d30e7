use std::time::Duration;

use bevy_app::prelude::*;
use bevy_ecs::prelude::*;
use bevy_log::prelude::*;
use bevy_state::prelude::*;
use bevy_time::prelude::*;

pub struct ScenePlugin;

#[derive(States, Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum GameScene {
    #[default]
    Game,
    GameOver,
}

/// Schedules transitions between scenes.
#[derive(Debug, Default, Resource)]
pub struct SceneLoader {
    pending: Option<PendingLoad>,
}

#[derive(Debug)]
struct PendingLoad {
    scene: GameScene,
    timer: Timer,
}

pub fn tick_scene_loader(
    mut loader: ResMut<SceneLoader>,
    mut next_scene: ResMut<NextState<GameScene>>,
    time: Res<Time>,
) {
    let Some(pending) = loader.pending.as_mut() else {
        return;
    };

    if !pending.timer.tick(time.delta()).is_finished() {
        return;
    }

    let scene = pending.scene;
    loader.pending = None;

    info!("loading scene {scene:?}");
    next_scene.set(scene);
}

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameScene>();
        app.init_resource::<SceneLoader>();

        app.add_systems(Update, tick_scene_loader);
    }
}

impl SceneLoader {
    pub const GAME_OVER_DELAY: Duration = Duration::from_secs(2);

    pub fn load_game(&mut self) {
        self.schedule(GameScene::Game, Duration::ZERO);
    }

    pub fn load_game_over(&mut self) {
        self.schedule(GameScene::GameOver, Self::GAME_OVER_DELAY);
    }

    pub fn pending(&self) -> Option<GameScene> {
        self.pending.as_ref().map(|pending| pending.scene)
    }

    fn schedule(&mut self, scene: GameScene, delay: Duration) {
        debug!("scheduling load of scene {scene:?} in {delay:?}");
        self.pending = Some(PendingLoad {
            scene,
            timer: Timer::new(delay, TimerMode::Once),
        });
    }
}
