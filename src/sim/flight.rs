//! Paper plane flight model
//!
//! Not aerodynamics, just enough to feel like gliding:
//! - pointer above the plane pulls up, with lift proportional to forward speed
//! - pointer at or below the plane dives by a fixed amount per tick
//! - below stall speed the plane tumbles and the nose stops tracking velocity

use glam::FloatExt;

use super::state::{FlightBody, PointerState};
use crate::tuning::{AttitudeMode, FlightTuning};

/// Result of one flight tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightStatus {
    Stable,
    Stalled,
}

/// Apply pointer input to vertical velocity
pub fn apply_input(body: &mut FlightBody, pointer: &PointerState, tuning: &FlightTuning) {
    if !pointer.is_pressed {
        return;
    }

    if pointer.position.y < body.position.y {
        let lift =
            (body.velocity.x / tuning.lift_velocity_divisor).max(0.0) * tuning.lift_coefficient;
        body.velocity.y -= lift;
    } else {
        body.velocity.y += tuning.sink_force;
    }
}

/// Nose angle (degrees) the plane settles toward for its vertical velocity
pub fn target_attitude(body: &FlightBody, tuning: &FlightTuning) -> f32 {
    body.velocity.y / tuning.angle_coefficient
}

/// Advance the flight model by one tick
pub fn tick(body: &mut FlightBody, pointer: &PointerState, tuning: &FlightTuning) -> FlightStatus {
    apply_input(body, pointer, tuning);

    if body.velocity.x < tuning.stall_speed {
        body.angular_rate = tuning.tumble_angular_velocity;
        return FlightStatus::Stalled;
    }

    body.angular_rate = 0.0;
    let target = target_attitude(body, tuning);
    body.attitude = match tuning.attitude_mode {
        AttitudeMode::Direct => target,
        AttitudeMode::Smoothed => body.attitude.lerp(target, tuning.attitude_smoothing),
    };
    FlightStatus::Stable
}
