//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MotionTuning {
    pub max_speed: f32,
    /// Per-tick step toward the input target, and grounded drag when input is neutral.
    pub decel: f32,
    /// Per-tick airborne drag when input is neutral. Gentler than `decel`.
    pub air_decel: f32,
    pub jump_velocity: f32,
    /// Fraction of `jump_velocity` applied by the mid-air jump.
    pub double_jump_factor: f32,
    pub gravity: f32,
    pub coyote_time: f32,
    pub dash_speed: f32,
    pub dash_time: f32,
    /// Seconds of full grip after latching onto a wall.
    pub cling_time: f32,
    /// Fraction of `gravity` applied once the grip runs out.
    pub cling_gravity_scale: f32,
    pub wall_jump: bool,
    pub wall_jump_horizontal: f32,
    pub wall_jump_vertical: f32,
    pub wall_jump_lock_time: f32,
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            max_speed: 450.0,
            decel: 15.0,
            air_decel: 3.3,
            jump_velocity: 460.0,
            double_jump_factor: 0.9,
            gravity: 980.0,
            coyote_time: 0.1,
            dash_speed: 1000.0,
            dash_time: 0.3,
            cling_time: 1.0,
            cling_gravity_scale: 1.0 / 3.0,
            wall_jump: false, // Clinging ignores jump unless enabled
            wall_jump_horizontal: 400.0,
            wall_jump_vertical: 460.0,
            wall_jump_lock_time: 0.15,
        }
    }
}

impl MotionTuning {
    /// Apex height of a jump from standstill: h = v² / (2g)
    pub fn single_jump_height(&self) -> f32 {
        self.jump_velocity * self.jump_velocity / (2.0 * self.gravity)
    }

    /// Ground jump plus a double jump fired at the apex.
    pub fn max_reachable_height(&self) -> f32 {
        let air_jump = self.jump_velocity * self.double_jump_factor;
        self.single_jump_height() + air_jump * air_jump / (2.0 * self.gravity)
    }

    /// Horizontal distance covered by one full dash.
    pub fn dash_distance(&self) -> f32 {
        self.dash_speed * self.dash_time
    }
}

/// Input intent for one tick, already mapped from devices.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub dash_just_pressed: bool,
}

impl MotionInput {
    /// Zeroes NaN axes and clamps each axis to [-1, 1].
    pub fn sanitized(self) -> Self {
        let clean = |v: f32| if v.is_nan() { 0.0 } else { v.clamp(-1.0, 1.0) };
        Self {
            axis: Vec2::new(clean(self.axis.x), clean(self.axis.y)),
            ..self
        }
    }

    /// Fold a per-frame sample in. The axis follows the latest sample while
    /// press edges stay set until a fixed tick consumes them.
    pub fn latch(&mut self, sample: MotionInput) {
        self.axis = sample.axis;
        self.jump_just_pressed |= sample.jump_just_pressed;
        self.dash_just_pressed |= sample.dash_just_pressed;
    }

    /// Clear press edges once a tick has seen them.
    pub fn consume_edges(&mut self) {
        self.jump_just_pressed = false;
        self.dash_just_pressed = false;
    }
}
