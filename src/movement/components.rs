//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// +1.0 for right, -1.0 for left.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }
}

/// Contact results of the previous tick's movement resolution.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContactFlags {
    pub on_floor: bool,
    pub on_wall: bool,
}

impl ContactFlags {
    pub const NONE: Self = Self {
        on_floor: false,
        on_wall: false,
    };
    pub const FLOOR: Self = Self {
        on_floor: true,
        on_wall: false,
    };
    pub const WALL: Self = Self {
        on_floor: false,
        on_wall: true,
    };
}
