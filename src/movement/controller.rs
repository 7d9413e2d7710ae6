//! Movement domain: the per-tick motion state machine.
//!
//! [`MotionState::tick`] dispatches to exactly one mode routine. A routine may
//! change velocity and abilities and returns the mode for the next tick, so the
//! velocity produced on a transition tick is always computed by the mode that
//! was active when the tick started.

use bevy::prelude::*;

use crate::movement::{ContactFlags, Facing, MotionInput, MotionTuning};

/// Locomotion mode, carrying only the timer that mode needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionMode {
    /// Counts down the jump grace window once floor contact is lost.
    Grounded { coyote_timer: f32 },
    /// Counts down the post wall-jump window that ignores steering and walls.
    Airborne { wall_jump_lock: f32 },
    /// Counts down the full-grip window before the slow slide starts.
    Clinging { cling_timer: f32 },
    /// Counts down the dash burst.
    Teleporting { dash_timer: f32 },
}

impl MotionMode {
    pub fn kind(&self) -> ModeKind {
        match self {
            MotionMode::Grounded { .. } => ModeKind::Grounded,
            MotionMode::Airborne { .. } => ModeKind::Airborne,
            MotionMode::Clinging { .. } => ModeKind::Clinging,
            MotionMode::Teleporting { .. } => ModeKind::Teleporting,
        }
    }

    fn grounded(tuning: &MotionTuning) -> Self {
        MotionMode::Grounded {
            coyote_timer: tuning.coyote_time,
        }
    }

    fn airborne() -> Self {
        MotionMode::Airborne {
            wall_jump_lock: 0.0,
        }
    }

    fn clinging(tuning: &MotionTuning) -> Self {
        MotionMode::Clinging {
            cling_timer: tuning.cling_time,
        }
    }

    fn teleporting(tuning: &MotionTuning) -> Self {
        MotionMode::Teleporting {
            dash_timer: tuning.dash_time,
        }
    }
}

/// Data-free mode tag for reporting and comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeKind {
    Grounded,
    Airborne,
    Clinging,
    Teleporting,
}

/// Display hint for the presentation layer. Never read back by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationTag {
    #[default]
    Idle,
    Running,
    Jumping,
    DoubleJumpUsed,
}

/// Everything one tick hands to the resolver and the renderer.
/// Kept on the player entity as the presentation layer's only input.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct MotionOutput {
    pub velocity: Vec2,
    pub mode: ModeKind,
    pub facing: Facing,
    pub animation: AnimationTag,
}

#[derive(Component, Debug, Clone, PartialEq)]
pub struct MotionState {
    pub mode: MotionMode,
    pub velocity: Vec2,
    pub facing: Facing,
    pub double_jump_available: bool,
    pub dash_available: bool,
}

impl MotionState {
    pub fn new(tuning: &MotionTuning) -> Self {
        Self {
            mode: MotionMode::grounded(tuning),
            velocity: Vec2::ZERO,
            facing: Facing::Right,
            double_jump_available: true,
            dash_available: true,
        }
    }

    /// Restore the spawn state.
    pub fn reset(&mut self, tuning: &MotionTuning) {
        *self = Self::new(tuning);
    }

    pub fn mode_kind(&self) -> ModeKind {
        self.mode.kind()
    }

    /// Advance one simulation step.
    ///
    /// `contacts` are the previous tick's resolver results. Input is expected
    /// to be pre-sanitized (see [`MotionInput::sanitized`]).
    pub fn tick(
        &mut self,
        tuning: &MotionTuning,
        input: &MotionInput,
        contacts: ContactFlags,
        delta: f32,
    ) -> MotionOutput {
        self.mode = match self.mode {
            MotionMode::Grounded { coyote_timer } => {
                self.tick_grounded(coyote_timer, tuning, input, contacts, delta)
            }
            MotionMode::Airborne { wall_jump_lock } => {
                self.tick_airborne(wall_jump_lock, tuning, input, contacts, delta)
            }
            MotionMode::Clinging { cling_timer } => {
                self.tick_clinging(cling_timer, tuning, input, contacts, delta)
            }
            MotionMode::Teleporting { dash_timer } => {
                self.tick_teleporting(dash_timer, tuning, contacts, delta)
            }
        };

        self.output()
    }

    /// Snapshot of what the current state presents to the outside.
    pub fn output(&self) -> MotionOutput {
        MotionOutput {
            velocity: self.velocity,
            mode: self.mode.kind(),
            facing: self.facing,
            animation: self.animation_tag(),
        }
    }

    /// Animation hint for the current mode, velocity and abilities.
    pub fn animation_tag(&self) -> AnimationTag {
        match self.mode {
            MotionMode::Grounded { .. } => {
                if self.velocity.x != 0.0 {
                    AnimationTag::Running
                } else {
                    AnimationTag::Idle
                }
            }
            MotionMode::Teleporting { .. } => AnimationTag::Running,
            MotionMode::Airborne { .. } | MotionMode::Clinging { .. } => {
                if self.double_jump_available {
                    AnimationTag::Jumping
                } else {
                    AnimationTag::DoubleJumpUsed
                }
            }
        }
    }

    fn tick_grounded(
        &mut self,
        coyote_timer: f32,
        tuning: &MotionTuning,
        input: &MotionInput,
        contacts: ContactFlags,
        delta: f32,
    ) -> MotionMode {
        self.velocity.y -= tuning.gravity * delta;

        let coyote_timer = if contacts.on_floor {
            tuning.coyote_time
        } else {
            (coyote_timer - delta).max(0.0)
        };

        if coyote_timer <= 0.0 {
            self.rearm();
            debug!("Grace window expired, leaving ground");
            return MotionMode::airborne();
        }

        if input.jump_just_pressed {
            self.rearm();
            self.velocity.y = tuning.jump_velocity;
            debug!("Ground jump: vy={}", self.velocity.y);
            return MotionMode::airborne();
        }

        if input.dash_just_pressed {
            self.dash_available = false;
            self.double_jump_available = true;
            debug!("Ground dash: facing={:?}", self.facing);
            return MotionMode::teleporting(tuning);
        }

        self.steer(input, tuning, tuning.decel);
        MotionMode::Grounded { coyote_timer }
    }

    fn tick_airborne(
        &mut self,
        wall_jump_lock: f32,
        tuning: &MotionTuning,
        input: &MotionInput,
        contacts: ContactFlags,
        delta: f32,
    ) -> MotionMode {
        self.velocity.y -= tuning.gravity * delta;

        if contacts.on_floor {
            debug!("Landed");
            return self.land(tuning);
        }

        // Still pushing off the wall we just left
        let locked = wall_jump_lock > 0.0;

        if contacts.on_wall && !locked {
            self.velocity = Vec2::ZERO;
            debug!("Latched onto wall");
            return MotionMode::clinging(tuning);
        }

        if input.dash_just_pressed && self.dash_available {
            self.dash_available = false;
            debug!("Air dash: facing={:?}", self.facing);
            return MotionMode::teleporting(tuning);
        }

        if input.jump_just_pressed && self.double_jump_available {
            self.velocity.y = tuning.jump_velocity * tuning.double_jump_factor;
            self.double_jump_available = false;
            debug!("Double jump: vy={}", self.velocity.y);
        }

        if !locked {
            self.steer(input, tuning, tuning.air_decel);
        }

        MotionMode::Airborne {
            wall_jump_lock: (wall_jump_lock - delta).max(0.0),
        }
    }

    fn tick_clinging(
        &mut self,
        cling_timer: f32,
        tuning: &MotionTuning,
        input: &MotionInput,
        contacts: ContactFlags,
        delta: f32,
    ) -> MotionMode {
        if contacts.on_floor {
            debug!("Slid down to the floor");
            return self.land(tuning);
        }

        let cling_timer = if cling_timer <= 0.0 {
            self.velocity.y -= tuning.gravity * tuning.cling_gravity_scale * delta;
            cling_timer
        } else {
            cling_timer - delta
        };

        if input.jump_just_pressed && tuning.wall_jump {
            // The wall is on the side we are facing
            self.facing = self.facing.flipped();
            self.velocity = Vec2::new(
                self.facing.sign() * tuning.wall_jump_horizontal,
                tuning.wall_jump_vertical,
            );
            self.double_jump_available = true;
            debug!("Wall jump: facing={:?}", self.facing);
            return MotionMode::Airborne {
                wall_jump_lock: tuning.wall_jump_lock_time,
            };
        }

        MotionMode::Clinging { cling_timer }
    }

    fn tick_teleporting(
        &mut self,
        dash_timer: f32,
        tuning: &MotionTuning,
        contacts: ContactFlags,
        delta: f32,
    ) -> MotionMode {
        // No gravity while dashing
        self.velocity = Vec2::new(self.facing.sign() * tuning.dash_speed, 0.0);

        let dash_timer = dash_timer - delta;
        if dash_timer > 0.0 {
            return MotionMode::Teleporting { dash_timer };
        }

        self.velocity = Vec2::ZERO;
        if contacts.on_floor {
            debug!("Dash ended on floor");
            self.land(tuning)
        } else if contacts.on_wall {
            debug!("Dash ended on wall");
            MotionMode::clinging(tuning)
        } else {
            debug!("Dash ended in the air");
            MotionMode::airborne()
        }
    }

    /// Every entry into Grounded goes through here, so landing always re-arms.
    fn land(&mut self, tuning: &MotionTuning) -> MotionMode {
        self.rearm();
        MotionMode::grounded(tuning)
    }

    fn rearm(&mut self) {
        self.double_jump_available = true;
        self.dash_available = true;
    }

    /// Ease horizontal velocity toward the input target and face the input.
    fn steer(&mut self, input: &MotionInput, tuning: &MotionTuning, neutral_decel: f32) {
        if input.axis != Vec2::ZERO {
            let target = input.axis.x * tuning.max_speed;
            self.velocity.x = move_toward(self.velocity.x, target, tuning.decel);
            if input.axis.x < 0.0 {
                self.facing = Facing::Left;
            } else if input.axis.x > 0.0 {
                self.facing = Facing::Right;
            }
        } else {
            self.velocity.x = move_toward(self.velocity.x, 0.0, neutral_decel);
        }
    }
}

/// Step `current` toward `target` by at most `max_step`, never overshooting.
pub fn move_toward(current: f32, target: f32, max_step: f32) -> f32 {
    let diff = target - current;
    if diff.abs() <= max_step {
        target
    } else {
        current + diff.signum() * max_step
    }
}
