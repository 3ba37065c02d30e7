use bevy_app::prelude::*;
use bevy_audio::{AudioPlayer, PlaybackSettings, Volume};
use bevy_ecs::prelude::*;

use ld_world::sound::PlaySound;

use crate::assets::AssetHandles;

pub struct PlaybackPlugin;

impl Plugin for PlaybackPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, play_sounds);
    }
}

/// Plays requested clips without spatialization, which places them at the
/// listener on the camera.
pub fn play_sounds(
    mut commands: Commands,
    mut sounds: MessageReader<PlaySound>,
    assets: Res<AssetHandles>,
) {
    sounds.read().for_each(|sound| {
        commands.spawn((
            AudioPlayer::new(assets.sound(sound.effect)),
            PlaybackSettings::DESPAWN.with_volume(Volume::Linear(sound.volume)),
        ));
    });
}

#[cfg(test)]
mod tests {
    use bevy_app::prelude::*;
    use bevy_asset::Handle;
    use bevy_audio::{AudioPlayer, PlaybackSettings};
    use bevy_ecs::prelude::*;

    use ld_world::sound::{PlaySound, SoundEffect};

    use crate::{assets::AssetHandles, playback::PlaybackPlugin};

    #[test]
    fn spawn_audio_players() {
        let mut app = App::new();
        app.add_plugins((TaskPoolPlugin::default(), PlaybackPlugin));
        app.add_message::<PlaySound>();
        app.insert_resource(AssetHandles {
            player: Handle::default(),
            laser: Handle::default(),
            explosion: Handle::default(),
            shoot: Handle::default(),
            death: Handle::default(),
        });

        app.world_mut().write_message(PlaySound {
            effect: SoundEffect::Shoot,
            volume: 0.25,
        });
        app.world_mut().write_message(PlaySound {
            effect: SoundEffect::Death,
            volume: 1.0,
        });

        app.update();

        let count = app
            .world_mut()
            .query::<(&AudioPlayer, &PlaybackSettings)>()
            .iter(app.world())
            .count();
        assert_eq!(count, 2);
    }
}
