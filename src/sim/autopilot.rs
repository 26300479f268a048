//! Idle/demo mode pilot
//!
//! Plays rounds without a human: picks a slingshot pull, then works the
//! pointer to keep the plane gliding. Seeded so demo runs are reproducible.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::round::Round;
use super::state::{CollisionOutcome, FlightBody, PointerState, RoundEvent, RoundPhase, TerrainId};
use super::tick::{TickInput, tick};
use super::world::ArcadeWorld;
use crate::tuning::{LaunchTuning, Tuning};

/// How far from the plane the pilot "touches" when steering
const STEER_OFFSET: f32 = 50.0;

/// Summary of one finished (or abandoned) demo round
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightReport {
    pub outcome: Option<CollisionOutcome>,
    pub ticks: u64,
    pub launch_velocity: Vec2,
    pub final_body: FlightBody,
}

#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Pick a press/release pair anchored at `anchor` that launches up and
    /// to the right
    pub fn launch_gesture(&mut self, anchor: Vec2, tuning: &LaunchTuning) -> (Vec2, Vec2) {
        let power = self.rng.random_range(0.5f32..=1.0) * tuning.max_drag_distance;
        let elevation = self.rng.random_range(5.0f32..35.0).to_radians();
        let launch_dir = Vec2::new(elevation.cos(), -elevation.sin());
        // Pull against the multiplier's sign so the plane ends up going `launch_dir`
        let drag = launch_dir * power * tuning.velocity_multiplier.signum();
        (anchor, anchor + drag)
    }

    /// Pointer for the next tick: pull up when sinking, push down when
    /// climbing hard, otherwise let go
    pub fn steer(&mut self, body: &FlightBody) -> PointerState {
        let jitter = self.rng.random_range(-20.0f32..20.0);
        let vy = body.velocity.y;
        if vy > 40.0 + jitter {
            PointerState::pressed(body.position - Vec2::new(0.0, STEER_OFFSET))
        } else if vy < -250.0 + jitter {
            PointerState::pressed(body.position + Vec2::new(0.0, STEER_OFFSET))
        } else {
            PointerState::released(body.position)
        }
    }

    /// Input for the next tick of `round`
    pub fn input_for(&mut self, round: &Round) -> TickInput {
        match round.phase() {
            RoundPhase::ReadyToLaunch => {
                let (start, end) = self.launch_gesture(round.body.position, &round.tuning().launch);
                TickInput {
                    press_start: Some(start),
                    press_end: Some(end),
                    pointer: PointerState::released(end),
                }
            }
            RoundPhase::InFlight => TickInput {
                pointer: self.steer(&round.body),
                ..Default::default()
            },
            RoundPhase::GameOver => TickInput {
                press_start: Some(round.body.position),
                ..Default::default()
            },
        }
    }

    /// Fly one round from the slingshot until it ends or `max_ticks` pass
    pub fn fly(&mut self, tuning: Tuning, max_ticks: u64, dt: f32) -> FlightReport {
        let world = ArcadeWorld::new(tuning.world);
        let mut round = Round::new(tuning, TerrainId::LANDING_ZONE);
        let input = self.input_for(&round);
        tick(&mut round, &world, &input, dt);
        let launch_velocity = round
            .drain_events()
            .into_iter()
            .find_map(|event| match event {
                RoundEvent::Launched { velocity } => Some(velocity),
                _ => None,
            })
            .unwrap_or(Vec2::ZERO);

        while round.phase() == RoundPhase::InFlight && round.time_ticks() < max_ticks {
            let input = self.input_for(&round);
            tick(&mut round, &world, &input, dt);
        }

        FlightReport {
            outcome: round.outcome(),
            ticks: round.time_ticks(),
            launch_velocity,
            final_body: round.body,
        }
    }
}
