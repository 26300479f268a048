//! Round lifecycle
//!
//! `ReadyToLaunch -> InFlight -> GameOver`, one way only. A restart rebuilds
//! the whole round rather than rewinding the phase.

use glam::Vec2;

use super::collision::classify;
use super::flight::{self, FlightStatus};
use super::launch::LaunchController;
use super::state::{CollisionOutcome, FlightBody, PointerState, RoundEvent, RoundPhase, TerrainId};
use crate::tuning::Tuning;

/// One attempt from slingshot to touchdown
#[derive(Debug, Clone)]
pub struct Round {
    /// The plane. Mutated by the flight model while in flight and by the
    /// physics world's integration step.
    pub body: FlightBody,
    phase: RoundPhase,
    outcome: Option<CollisionOutcome>,
    launcher: LaunchController,
    landing_zone: TerrainId,
    tuning: Tuning,
    /// Next press after game over requests a restart (one shot)
    restart_armed: bool,
    stalled: bool,
    /// Flight ticks since launch
    time_ticks: u64,
    events: Vec<RoundEvent>,
}

impl Round {
    /// A fresh round with the plane parked at the world's start position
    pub fn new(tuning: Tuning, landing_zone: TerrainId) -> Self {
        Self {
            body: FlightBody::new(tuning.world.start_position()),
            phase: RoundPhase::ReadyToLaunch,
            outcome: None,
            launcher: LaunchController::new(),
            landing_zone,
            tuning,
            restart_armed: false,
            stalled: false,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// How the round ended; `None` until game over
    pub fn outcome(&self) -> Option<CollisionOutcome> {
        self.outcome
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn landing_zone(&self) -> TerrainId {
        self.landing_zone
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn is_stalled(&self) -> bool {
        self.stalled
    }

    /// Clamped pull of the gesture in progress, if any
    pub fn pending_drag(&self, pointer: Vec2) -> Option<Vec2> {
        match self.phase {
            RoundPhase::ReadyToLaunch => self.launcher.pending_drag(pointer, &self.tuning.launch),
            _ => None,
        }
    }

    /// Pointer pressed
    pub fn press_start(&mut self, position: Vec2) {
        match self.phase {
            RoundPhase::ReadyToLaunch => self.launcher.press_start(position),
            RoundPhase::InFlight => {}
            RoundPhase::GameOver => {
                if self.restart_armed {
                    self.restart_armed = false;
                    log::info!("Restart requested");
                    self.events.push(RoundEvent::RestartRequested);
                }
            }
        }
    }

    /// Pointer released. Returns the launch velocity if this release launched
    /// the plane.
    pub fn press_end(&mut self, position: Vec2) -> Option<Vec2> {
        if self.phase != RoundPhase::ReadyToLaunch {
            self.launcher.cancel();
            return None;
        }

        let velocity = self.launcher.release(position, &self.tuning.launch)?;
        self.body.velocity = velocity;
        self.phase = RoundPhase::InFlight;
        log::info!("Launched at ({:.1}, {:.1})", velocity.x, velocity.y);
        self.events.push(RoundEvent::Launched { velocity });
        Some(velocity)
    }

    /// Run the flight model for one step. Does nothing outside `InFlight`.
    pub fn tick(&mut self, pointer: &PointerState) {
        if self.phase != RoundPhase::InFlight {
            return;
        }

        self.time_ticks += 1;
        let stalled = flight::tick(&mut self.body, pointer, &self.tuning.flight) == FlightStatus::Stalled;
        if stalled != self.stalled {
            self.stalled = stalled;
            if stalled {
                log::debug!("Stalled at {:.1} px/s", self.body.velocity.x);
                self.events.push(RoundEvent::Stalled);
            } else {
                log::debug!("Recovered at {:.1} px/s", self.body.velocity.x);
                self.events.push(RoundEvent::Recovered);
            }
        }
    }

    /// The plane touched terrain. Returns the outcome if this collision
    /// ended the round; collisions outside `InFlight` are ignored.
    pub fn collide(&mut self, terrain: TerrainId) -> Option<CollisionOutcome> {
        if self.phase != RoundPhase::InFlight {
            log::trace!("Ignoring collision with {:?} in {:?}", terrain, self.phase);
            return None;
        }

        let outcome = classify(terrain, self.landing_zone);
        self.phase = RoundPhase::GameOver;
        self.outcome = Some(outcome);
        self.body.angular_rate = self.tuning.collision.terminal_spin;
        self.restart_armed = true;
        log::info!(
            "Round over after {} ticks: {} ({:?})",
            self.time_ticks,
            outcome.message(),
            terrain
        );
        self.events.push(RoundEvent::Landed { terrain, outcome });
        Some(outcome)
    }

    /// Take all events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<RoundEvent> {
        std::mem::take(&mut self.events)
    }

    /// Rebuild the round from scratch with the same tuning and landing zone
    pub fn restart(&mut self) {
        *self = Round::new(self.tuning, self.landing_zone);
    }
}
