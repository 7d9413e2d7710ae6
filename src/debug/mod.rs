//! Debug mode for tuning the controller while playing.
//!
//! Features:
//! - F1 toggles an overlay with the live motion state
//! - F5 reloads motion tuning from disk. Gravity is kept at its running
//!   value and only changes on restart.

mod systems;

use bevy::prelude::*;

use crate::debug::systems::{
    handle_debug_hotkeys, update_debug_info_overlay, update_status_message,
};

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether to show the motion overlay
    pub show_info: bool,
    /// Message to display temporarily in the overlay, with seconds left
    pub status_message: Option<(String, f32)>,
}

impl DebugState {
    /// Set a status message that will fade after a duration
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        self.status_message = Some((message.into(), duration));
    }
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                handle_debug_hotkeys,
                update_status_message,
                update_debug_info_overlay,
            )
                .chain(),
        );
    }
}
