//! Movement domain: messages about locomotion transitions.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::ModeKind;

#[derive(Debug)]
pub struct ModeChanged {
    pub entity: Entity,
    pub from: ModeKind,
    pub to: ModeKind,
}

impl Message for ModeChanged {}
