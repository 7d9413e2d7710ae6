//! Content domain: data-driven motion tuning.

mod loader;
mod validation;

pub use loader::{ContentLoadError, load_motion_tuning, parse_motion_tuning};
pub use validation::{ValidationError, validate_tuning};

use bevy::prelude::*;
use std::path::Path;

use crate::movement::MotionTuning;

/// Tuning file, relative to the working directory.
pub const TUNING_PATH: &str = "assets/data/motion_tuning.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        // Tuning must be in place before the player spawns
        app.add_systems(PreStartup, load_tuning_at_startup);
    }
}

fn load_tuning_at_startup(mut commands: Commands) {
    commands.insert_resource(load_tuning_or_default(Path::new(TUNING_PATH)));
}

/// Load and validate tuning, falling back to defaults on any problem.
pub fn load_tuning_or_default(path: &Path) -> MotionTuning {
    let tuning = match load_motion_tuning(path) {
        Ok(tuning) => tuning,
        Err(e) => {
            warn!("{}; using default motion tuning", e);
            return MotionTuning::default();
        }
    };

    let errors = validate_tuning(&tuning);
    if !errors.is_empty() {
        for e in &errors {
            error!("{}", e);
        }
        warn!(
            "{} invalid tuning value(s) in {}; using default motion tuning",
            errors.len(),
            path.display()
        );
        return MotionTuning::default();
    }

    info!(
        "Loaded motion tuning from {}: gravity={}, max_speed={}, wall_jump={}",
        path.display(),
        tuning.gravity,
        tuning.max_speed,
        tuning.wall_jump
    );
    tuning
}

/// Take freshly loaded tuning but keep the running gravity. Gravity feeds
/// the jump heights logged at spawn and the room layout assumes them, so it
/// only changes on restart.
pub fn reload_keeping_gravity(current: &MotionTuning, fresh: MotionTuning) -> MotionTuning {
    MotionTuning {
        gravity: current.gravity,
        ..fresh
    }
}
