//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::MotionInput;

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MotionInput>) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Vertical axis only matters for the "any input held" check
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    // Frames can outpace fixed ticks, so presses are latched rather than overwritten
    input.latch(MotionInput {
        axis: Vec2::new(x, y),
        jump_just_pressed: keyboard.just_pressed(KeyCode::Space)
            || keyboard.just_pressed(KeyCode::KeyK),
        dash_just_pressed: keyboard.just_pressed(KeyCode::ShiftLeft)
            || keyboard.just_pressed(KeyCode::KeyJ),
    }
    .sanitized());
}
