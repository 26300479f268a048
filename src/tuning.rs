//! Data-driven game balance
//!
//! Every number the simulation reads lives here so a round can be rebalanced
//! from a JSON file without touching code. Missing fields fall back to the
//! shipped defaults.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

#[derive(Error, Debug)]
pub enum TuningError {
    #[error("Failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid tuning: {0}")]
    Validation(String),
}

/// How the plane's visual attitude follows its vertical velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttitudeMode {
    /// Snap to the target angle every tick
    Direct,
    /// Ease toward the target angle by `attitude_smoothing` per tick
    #[default]
    Smoothed,
}

/// Slingshot launch parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchTuning {
    /// Longest drag that still adds power (pixels)
    pub max_drag_distance: f32,
    /// Drag-to-velocity scale. Negative so the plane flies opposite the pull.
    pub velocity_multiplier: f32,
}

impl Default for LaunchTuning {
    fn default() -> Self {
        Self {
            max_drag_distance: 200.0,
            velocity_multiplier: -10.0,
        }
    }
}

/// In-flight handling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightTuning {
    pub lift_coefficient: f32,
    /// Forward speed is divided by this before the lift coefficient applies
    pub lift_velocity_divisor: f32,
    /// Added to vertical velocity per tick while diving (pixels/s)
    pub sink_force: f32,
    /// Forward speed below which the plane tumbles (pixels/s)
    pub stall_speed: f32,
    /// Spin while stalled (degrees/s)
    pub tumble_angular_velocity: f32,
    /// Vertical velocity is divided by this to get the nose angle (degrees)
    pub angle_coefficient: f32,
    pub attitude_mode: AttitudeMode,
    /// Fraction of the remaining angle covered per tick (0-1]
    pub attitude_smoothing: f32,
}

impl Default for FlightTuning {
    fn default() -> Self {
        Self {
            lift_coefficient: 0.1,
            lift_velocity_divisor: 2.0,
            sink_force: 10.0,
            stall_speed: 100.0,
            tumble_angular_velocity: 200.0,
            angle_coefficient: 10.0,
            attitude_mode: AttitudeMode::Smoothed,
            attitude_smoothing: 0.1,
        }
    }
}

/// Terminal collision response
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionTuning {
    /// Spin applied when the round ends (degrees/s)
    pub terminal_spin: f32,
}

impl Default for CollisionTuning {
    fn default() -> Self {
        Self {
            terminal_spin: 300.0,
        }
    }
}

/// Layout and arcade physics of the headless world
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldTuning {
    pub width: f32,
    pub height: f32,
    pub ground_height: f32,
    /// Horizontal center of the landing zone
    pub landing_zone_x: f32,
    pub landing_zone_width: f32,
    /// Acceleration (pixels/s²), +y is down
    pub gravity: Vec2,
    /// Linear deceleration toward rest on each axis (pixels/s²)
    pub drag: f32,
    /// Fraction of vertical speed kept after touching the ground
    pub bounce: f32,
    /// Collision half-extent of the plane
    pub plane_radius: f32,
    pub start_x: f32,
    /// Launch height measured up from the bottom of the world
    pub start_y_offset: f32,
}

impl Default for WorldTuning {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            ground_height: GROUND_HEIGHT,
            landing_zone_x: 3000.0,
            landing_zone_width: 400.0,
            gravity: Vec2::new(0.0, 300.0),
            drag: 100.0,
            bounce: 0.5,
            plane_radius: 16.0,
            start_x: 100.0,
            start_y_offset: 150.0,
        }
    }
}

impl WorldTuning {
    /// Where the plane sits before launch
    pub fn start_position(&self) -> Vec2 {
        Vec2::new(self.start_x, self.height - self.start_y_offset)
    }

    /// Y coordinate of the ground surface
    pub fn ground_top(&self) -> f32 {
        self.height - self.ground_height
    }
}

/// Complete balance sheet for one round
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub launch: LaunchTuning,
    pub flight: FlightTuning,
    pub collision: CollisionTuning,
    pub world: WorldTuning,
}

impl Tuning {
    /// Parse and validate tuning from a JSON document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Read tuning from a JSON file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("Using default tuning ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Reject values that would divide by zero or never settle
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.launch.max_drag_distance < 0.0 {
            return Err(TuningError::Validation(format!(
                "max_drag_distance must be non-negative, got {}",
                self.launch.max_drag_distance
            )));
        }
        if self.flight.lift_velocity_divisor <= 0.0 {
            return Err(TuningError::Validation(format!(
                "lift_velocity_divisor must be positive, got {}",
                self.flight.lift_velocity_divisor
            )));
        }
        if self.flight.angle_coefficient == 0.0 {
            return Err(TuningError::Validation(
                "angle_coefficient must be non-zero".to_string(),
            ));
        }
        let s = self.flight.attitude_smoothing;
        if !(s > 0.0 && s <= 1.0) {
            return Err(TuningError::Validation(format!(
                "attitude_smoothing must be in (0, 1], got {}",
                s
            )));
        }
        let w = &self.world;
        if w.width <= 0.0 || w.height <= w.ground_height {
            return Err(TuningError::Validation(format!(
                "world {}x{} has no room above a {} ground",
                w.width, w.height, w.ground_height
            )));
        }
        Ok(())
    }
}
