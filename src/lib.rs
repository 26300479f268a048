//! Paper Glide - A slingshot launch-and-glide arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (launch, flight model, round state machine)
//! - `tuning`: Data-driven game balance

pub mod sim;
pub mod tuning;

pub use tuning::{AttitudeMode, Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per rendered frame at 60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 3840.0;
    pub const WORLD_HEIGHT: f32 = 1080.0;
    pub const GROUND_HEIGHT: f32 = 50.0;

    /// Upper bound on a headless round (one minute of flight)
    pub const MAX_ROUND_TICKS: u64 = 60 * 60;
}
