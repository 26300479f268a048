//! Round state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Plane parked on the slingshot, waiting for a drag gesture
    #[default]
    ReadyToLaunch,
    /// Plane airborne and responding to input
    InFlight,
    /// Plane touched terrain; waiting for a restart press
    GameOver,
}

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionOutcome {
    Success,
    Failure,
}

impl CollisionOutcome {
    /// Banner text for the end-of-round message
    pub fn message(&self) -> &'static str {
        match self {
            CollisionOutcome::Success => "Success!",
            CollisionOutcome::Failure => "Failure!",
        }
    }

    /// Banner color (CSS hex)
    pub fn color(&self) -> &'static str {
        match self {
            CollisionOutcome::Success => "#00ff00",
            CollisionOutcome::Failure => "#ff0000",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CollisionOutcome::Success)
    }
}

/// Identifies a static terrain body (ground, landing zone)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TerrainId(pub u32);

impl TerrainId {
    pub const GROUND: TerrainId = TerrainId(1);
    pub const LANDING_ZONE: TerrainId = TerrainId(2);
}

/// Pointer snapshot sampled once per tick
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerState {
    pub position: Vec2,
    pub is_pressed: bool,
}

impl PointerState {
    pub fn pressed(position: Vec2) -> Self {
        Self {
            position,
            is_pressed: true,
        }
    }

    pub fn released(position: Vec2) -> Self {
        Self {
            position,
            is_pressed: false,
        }
    }
}

/// The plane's physical state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightBody {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Visual rotation (degrees)
    pub attitude: f32,
    /// Spin rate (degrees/s), integrated into `attitude` by the physics world
    pub angular_rate: f32,
}

impl FlightBody {
    /// A body at rest at `position`
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            attitude: 0.0,
            angular_rate: 0.0,
        }
    }

    /// Tumbling bodies ignore attitude control
    pub fn is_tumbling(&self) -> bool {
        self.angular_rate != 0.0
    }
}

/// Notifications for the UI and audio collaborators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RoundEvent {
    Launched { velocity: Vec2 },
    /// Forward speed fell below stall speed
    Stalled,
    /// Forward speed recovered after a stall
    Recovered,
    Landed {
        terrain: TerrainId,
        outcome: CollisionOutcome,
    },
    /// First press after game over; the host should rebuild the round
    RestartRequested,
}
