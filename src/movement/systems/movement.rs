//! Movement domain: drives the motion state machine from ECS data.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::{
    ContactFlags, ModeChanged, MotionInput, MotionOutput, MotionState, MotionTuning, Player,
};

/// One controller tick per fixed physics step. The resolved `LinearVelocity`
/// (already clipped by collisions) is carried into the tick, and the produced
/// velocity is handed back to the physics step that follows.
pub(crate) fn step_motion(
    time: Res<Time<Fixed>>,
    mut input: ResMut<MotionInput>,
    tuning: Res<MotionTuning>,
    mut query: Query<
        (
            Entity,
            &ContactFlags,
            &mut MotionState,
            &mut MotionOutput,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
    mut mode_changes: MessageWriter<ModeChanged>,
) {
    let dt = time.delta_secs();

    for (entity, contacts, mut state, mut motion_output, mut velocity) in &mut query {
        let from = state.mode_kind();
        state.velocity = velocity.0;

        let output = state.tick(&tuning, &input, *contacts, dt);
        velocity.0 = output.velocity;
        *motion_output = output;

        if output.mode != from {
            mode_changes.write(ModeChanged {
                entity,
                from,
                to: output.mode,
            });
        }
    }

    input.consume_edges();
}

pub(crate) fn log_mode_changes(mut mode_changes: MessageReader<ModeChanged>) {
    for change in mode_changes.read() {
        info!(
            "Entity {:?}: {:?} -> {:?}",
            change.entity, change.from, change.to
        );
    }
}
