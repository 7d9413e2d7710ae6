//! Animation state and playback.
//!
//! Follows the [`AnimationTag`] in the tick's [`MotionOutput`] and advances
//! frames over time. There is no sprite sheet yet, so each tag tints the
//! placeholder sprite instead.

use bevy::prelude::*;

use crate::movement::{AnimationTag, Facing, MotionOutput};

/// Component for animation playback on the player sprite.
#[derive(Component, Debug)]
pub struct AnimationController {
    /// Current animation tag.
    pub tag: AnimationTag,
    /// Current frame index (0-based).
    pub current_frame: u32,
    /// Total frames in current animation.
    pub total_frames: u32,
    /// Time accumulator for frame timing.
    pub frame_timer: f32,
    /// Seconds per frame.
    pub frame_duration: f32,
    /// Whether the animation should loop.
    pub looping: bool,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self {
            tag: AnimationTag::Idle,
            current_frame: 0,
            total_frames: 4,
            frame_timer: 0.0,
            frame_duration: 0.15,
            looping: true,
        }
    }
}

impl AnimationController {
    /// Switch to `tag`, restarting playback. Returns false if already playing it.
    pub fn set_tag(&mut self, tag: AnimationTag) -> bool {
        if self.tag == tag {
            return false;
        }

        self.tag = tag;
        self.current_frame = 0;
        self.frame_timer = 0.0;
        self.looping = matches!(tag, AnimationTag::Idle | AnimationTag::Running);
        self.total_frames = match tag {
            AnimationTag::Idle => 4,
            AnimationTag::Running => 6,
            AnimationTag::Jumping | AnimationTag::DoubleJumpUsed => 2,
        };
        self.frame_duration = match tag {
            AnimationTag::Running => 0.08,
            _ => 0.15,
        };
        true
    }

    /// Advance playback by `dt` seconds. Non-looping animations hold their last frame.
    pub fn advance(&mut self, dt: f32) {
        self.frame_timer += dt;

        while self.frame_timer >= self.frame_duration {
            self.frame_timer -= self.frame_duration;

            if self.current_frame + 1 < self.total_frames {
                self.current_frame += 1;
            } else if self.looping {
                self.current_frame = 0;
            }
        }
    }
}

/// Placeholder color per tag until real frames exist.
pub fn tag_tint(tag: AnimationTag) -> Color {
    match tag {
        AnimationTag::Idle => Color::srgb(0.9, 0.9, 0.9),
        AnimationTag::Running => Color::srgb(0.95, 0.85, 0.7),
        AnimationTag::Jumping => Color::srgb(0.75, 0.85, 0.95),
        AnimationTag::DoubleJumpUsed => Color::srgb(0.6, 0.65, 0.95),
    }
}

/// Mirror the sprite and switch animation to match one tick's output.
pub fn present(output: &MotionOutput, sprite: &mut Sprite, controller: &mut AnimationController) {
    sprite.flip_x = output.facing == Facing::Left;

    if controller.set_tag(output.animation) {
        sprite.color = tag_tint(controller.tag);
        debug!("Animation -> {:?}", controller.tag);
    }
}

pub fn attach_animation_controller(
    mut commands: Commands,
    query: Query<Entity, (With<MotionOutput>, Without<AnimationController>)>,
) {
    for entity in &query {
        commands.entity(entity).insert(AnimationController::default());
    }
}

pub fn apply_motion_presentation(
    mut query: Query<(&MotionOutput, &mut Sprite, &mut AnimationController)>,
) {
    for (output, mut sprite, mut controller) in &mut query {
        present(output, &mut sprite, &mut controller);
    }
}

pub fn update_animation_frames(time: Res<Time>, mut query: Query<&mut AnimationController>) {
    for mut controller in &mut query {
        controller.advance(time.delta_secs());
    }
}
