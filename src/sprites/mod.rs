//! Sprites module: presentation of the motion controller's output.
//!
//! This module handles:
//! - Mirroring the player sprite from the controller's facing
//! - Animation playback driven by the controller's animation tag

pub mod animation;

use bevy::prelude::*;

pub use animation::*;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                attach_animation_controller,
                apply_motion_presentation,
                update_animation_frames,
            )
                .chain(),
        );
    }
}
