use bevy_app::prelude::*;
use bevy_ecs::prelude::*;

pub struct SoundPlugin;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    Shoot,
    Death,
}

/// Request to play a clip at the listener's position.
#[derive(Copy, Clone, Debug, Message)]
pub struct PlaySound {
    pub effect: SoundEffect,
    pub volume: f32,
}

impl Plugin for SoundPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PlaySound>();
    }
}
