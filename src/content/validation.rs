//! Validation for tuning values loaded from data.

use crate::movement::MotionTuning;

/// A tuning field whose value the controller cannot work with.
#[derive(Debug)]
pub struct ValidationError {
    pub field: &'static str,
    pub value: f32,
    pub reason: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MotionTuning.{} = {} is invalid: {}",
            self.field, self.value, self.reason
        )
    }
}

/// Helper macro for checking a field against a predicate
macro_rules! check_field {
    ($errors:expr, $tuning:expr, $field:ident, $ok:expr, $reason:expr) => {
        let value = $tuning.$field;
        if !(value.is_finite() && $ok(value)) {
            $errors.push(ValidationError {
                field: stringify!($field),
                value,
                reason: $reason,
            });
        }
    };
}

/// Validate every numeric tuning value.
/// Returns a list of validation errors, empty if the tuning is usable.
pub fn validate_tuning(tuning: &MotionTuning) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let positive = |v: f32| v > 0.0;
    let non_negative = |v: f32| v >= 0.0;

    check_field!(errors, tuning, max_speed, positive, "must be positive");
    check_field!(errors, tuning, decel, positive, "must be positive");
    check_field!(errors, tuning, air_decel, positive, "must be positive");
    check_field!(errors, tuning, jump_velocity, positive, "must be positive");
    check_field!(errors, tuning, gravity, positive, "must be positive");
    check_field!(errors, tuning, dash_speed, positive, "must be positive");
    // A zero window would drop the actor out of Grounded on every tick
    check_field!(errors, tuning, coyote_time, positive, "must be positive");
    check_field!(errors, tuning, dash_time, positive, "must be positive");
    check_field!(errors, tuning, cling_time, non_negative, "must not be negative");
    check_field!(
        errors,
        tuning,
        double_jump_factor,
        |v: f32| v > 0.0 && v <= 1.0,
        "must be in (0, 1]"
    );
    check_field!(
        errors,
        tuning,
        cling_gravity_scale,
        |v: f32| (0.0..=1.0).contains(&v),
        "must be in [0, 1]"
    );

    // Airborne drag has to stay gentler than ground drag
    if tuning.air_decel >= tuning.decel {
        errors.push(ValidationError {
            field: "air_decel",
            value: tuning.air_decel,
            reason: "must be smaller than decel",
        });
    }

    if tuning.wall_jump {
        check_field!(errors, tuning, wall_jump_horizontal, positive, "must be positive");
        check_field!(errors, tuning, wall_jump_vertical, non_negative, "must not be negative");
        check_field!(errors, tuning, wall_jump_lock_time, non_negative, "must not be negative");
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate_tuning(&MotionTuning::default()).is_empty());
    }

    #[test]
    fn test_reports_each_bad_field() {
        let tuning = MotionTuning {
            gravity: 0.0,
            coyote_time: -0.1,
            double_jump_factor: 1.5,
            ..Default::default()
        };

        let fields: Vec<_> = validate_tuning(&tuning).iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["gravity", "coyote_time", "double_jump_factor"]);
    }

    #[test]
    fn test_air_drag_must_stay_gentler() {
        let tuning = MotionTuning {
            air_decel: 30.0,
            ..Default::default()
        };

        let errors = validate_tuning(&tuning);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "air_decel");
        assert!(errors[0].to_string().contains("smaller than decel"));

        let equal = MotionTuning {
            air_decel: 15.0,
            decel: 15.0,
            ..Default::default()
        };
        assert_eq!(validate_tuning(&equal).len(), 1);
    }

    #[test]
    fn test_nan_is_rejected() {
        let tuning = MotionTuning {
            max_speed: f32::NAN,
            ..Default::default()
        };

        let errors = validate_tuning(&tuning);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "max_speed");
    }

    #[test]
    fn test_wall_jump_fields_only_checked_when_enabled() {
        let mut tuning = MotionTuning {
            wall_jump_horizontal: 0.0,
            ..Default::default()
        };
        assert!(validate_tuning(&tuning).is_empty());

        tuning.wall_jump = true;
        let errors = validate_tuning(&tuning);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("wall_jump_horizontal"));
    }
}
