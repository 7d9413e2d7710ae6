//! Movement domain: player spawn and respawn.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    ContactFlags, GameLayer, MotionOutput, MotionState, MotionTuning, Player,
};

const SPAWN_POINT: Vec3 = Vec3::new(0.0, 100.0, 0.0);

/// Falling below this height counts as a death.
const KILL_PLANE_Y: f32 = -600.0;

pub(crate) fn spawn_player(mut commands: Commands, tuning: Res<MotionTuning>) {
    info!(
        "Spawning player: max_speed={}, jump_height={:.0}, max_height={:.0}, dash_distance={:.0}",
        tuning.max_speed,
        tuning.single_jump_height(),
        tuning.max_reachable_height(),
        tuning.dash_distance()
    );

    let state = MotionState::new(&tuning);
    let output = state.output();

    commands.spawn((
        // Identity & Movement
        (Player, state, output, ContactFlags::default()),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::new(24.0, 48.0)),
            ..default()
        },
        Transform::from_translation(SPAWN_POINT),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(24.0, 48.0),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // Gravity is integrated by the motion controller
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));
}

pub(crate) fn respawn_fallen_player(
    tuning: Res<MotionTuning>,
    mut query: Query<
        (
            &mut Transform,
            &mut MotionState,
            &mut MotionOutput,
            &mut ContactFlags,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    for (mut transform, mut state, mut output, mut contacts, mut velocity) in &mut query {
        if transform.translation.y >= KILL_PLANE_Y {
            continue;
        }

        info!(
            "Player fell out at ({:.0}, {:.0}), respawning",
            transform.translation.x, transform.translation.y
        );
        transform.translation = SPAWN_POINT;
        state.reset(&tuning);
        *output = state.output();
        *contacts = ContactFlags::default();
        velocity.0 = Vec2::ZERO;
    }
}
