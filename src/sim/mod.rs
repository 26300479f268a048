//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod flight;
pub mod launch;
pub mod round;
pub mod state;
pub mod tick;
pub mod world;

pub use autopilot::{Autopilot, FlightReport};
pub use collision::classify;
pub use flight::FlightStatus;
pub use launch::{LaunchController, clamp_drag, launch_velocity};
pub use round::Round;
pub use state::{CollisionOutcome, FlightBody, PointerState, RoundEvent, RoundPhase, TerrainId};
pub use tick::{TickInput, tick};
pub use world::ArcadeWorld;
