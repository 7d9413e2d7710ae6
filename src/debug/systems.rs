//! Debug domain: hotkeys and the motion overlay.

use bevy::prelude::*;
use std::path::Path;

use crate::content::{TUNING_PATH, load_tuning_or_default, reload_keeping_gravity};
use crate::debug::DebugState;
use crate::movement::{ContactFlags, MotionOutput, MotionState, MotionTuning, Player};

/// Marker for the overlay text node
#[derive(Component, Debug)]
pub(crate) struct DebugInfoOverlay;

/// F1 toggles the overlay, F5 reloads tuning
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut tuning: ResMut<MotionTuning>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.show_info = !debug_state.show_info;
    }

    if keyboard.just_pressed(KeyCode::F5) {
        let fresh = load_tuning_or_default(Path::new(TUNING_PATH));
        if fresh.gravity != tuning.gravity {
            warn!(
                "Debug: gravity change to {} ignored until restart",
                fresh.gravity
            );
        }
        *tuning = reload_keeping_gravity(&tuning, fresh);
        debug_state.set_message("Tuning reloaded", 2.0);
        info!("Debug: motion tuning reloaded");
    }
}

pub(crate) fn update_status_message(time: Res<Time>, mut debug_state: ResMut<DebugState>) {
    let expired = match debug_state.status_message.as_mut() {
        Some((_, remaining)) => {
            *remaining -= time.delta_secs();
            *remaining <= 0.0
        }
        None => false,
    };

    if expired {
        debug_state.status_message = None;
    }
}

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}

pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    player_query: Query<(&Transform, &MotionState, &MotionOutput, &ContactFlags), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        // Cleanup overlay if it exists
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    // Ensure overlay exists
    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Some((transform, state, output, contacts)), Ok(mut text)) =
        (player_query.iter().next(), overlay_query.single_mut())
    {
        let pos = transform.translation;
        let status = debug_state
            .status_message
            .as_ref()
            .map(|(msg, _)| msg.as_str())
            .unwrap_or("");
        **text = format!(
            "Pos: ({:.0}, {:.0})\nVel: ({:.1}, {:.1})\nMode: {:?}\nFacing: {:?}\nDouble jump: {}  Dash: {}\nFloor: {}  Wall: {}\nAnim: {:?}\n{}",
            pos.x,
            pos.y,
            state.velocity.x,
            state.velocity.y,
            state.mode,
            state.facing,
            state.double_jump_available,
            state.dash_available,
            contacts.on_floor,
            contacts.on_wall,
            output.animation,
            status
        );
    }
}
