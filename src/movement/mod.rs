//! Movement domain: player locomotion plugin wiring and public exports.

mod bootstrap;
mod components;
mod controller;
mod dev;
mod events;
mod resources;
mod systems;


pub use components::{ContactFlags, Facing, GameLayer, Ground, Player, Wall};
pub use controller::{AnimationTag, ModeKind, MotionMode, MotionOutput, MotionState, move_toward};
pub use events::ModeChanged;
pub use resources::{MotionInput, MotionTuning};

use bevy::prelude::*;

use crate::movement::bootstrap::{respawn_fallen_player, spawn_player};
use crate::movement::dev::spawn_test_room;
use crate::movement::systems::{detect_contacts, log_mode_changes, read_input, step_motion};

/// Controller ticks per second. Per-tick steps in `MotionTuning` assume this rate.
pub const TICK_HZ: f64 = 60.0;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MotionTuning>()
            .init_resource::<MotionInput>()
            .insert_resource(Time::<Fixed>::from_hz(TICK_HZ))
            .add_message::<ModeChanged>()
            .add_systems(Startup, (spawn_test_room, spawn_player))
            .add_systems(Update, (read_input, log_mode_changes))
            // Physics resolves in FixedPostUpdate, so contacts read here are one step old
            .add_systems(
                FixedUpdate,
                (detect_contacts, step_motion, respawn_fallen_player).chain(),
            );
    }
}
