//! Fixed timestep simulation tick
//!
//! One call per frame: queued pointer events first, then the flight model,
//! then world integration and collision dispatch.

use glam::Vec2;

use super::round::Round;
use super::state::{CollisionOutcome, PointerState, RoundPhase};
use super::world::ArcadeWorld;

/// Input collected since the previous tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer went down at this position
    pub press_start: Option<Vec2>,
    /// Pointer came up at this position (applied after `press_start`)
    pub press_end: Option<Vec2>,
    /// Pointer state sampled for the flight model
    pub pointer: PointerState,
}

/// Advance the round by one fixed timestep
///
/// Returns the outcome if the round ended during this tick.
pub fn tick(
    round: &mut Round,
    world: &ArcadeWorld,
    input: &TickInput,
    dt: f32,
) -> Option<CollisionOutcome> {
    if let Some(pos) = input.press_start {
        round.press_start(pos);
    }
    if let Some(pos) = input.press_end {
        round.press_end(pos);
    }

    round.tick(&input.pointer);

    // The plane stays parked on the slingshot until launch
    if round.phase() == RoundPhase::ReadyToLaunch {
        return None;
    }

    let contact = world.step(&mut round.body, dt)?;
    round.collide(contact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::state::{RoundEvent, TerrainId};
    use crate::tuning::Tuning;

    fn setup() -> (Round, ArcadeWorld) {
        let tuning = Tuning::default();
        (
            Round::new(tuning, TerrainId::LANDING_ZONE),
            ArcadeWorld::new(tuning.world),
        )
    }

    #[test]
    fn test_parked_until_launch() {
        let (mut round, world) = setup();
        let start = round.body;
        for _ in 0..120 {
            tick(&mut round, &world, &TickInput::default(), SIM_DT);
        }
        assert_eq!(round.phase(), RoundPhase::ReadyToLaunch);
        assert_eq!(round.body, start);
    }

    #[test]
    fn test_gesture_in_one_frame_launches() {
        let (mut round, world) = setup();
        let anchor = round.body.position;
        let input = TickInput {
            press_start: Some(anchor),
            press_end: Some(anchor + Vec2::new(-150.0, 50.0)),
            pointer: PointerState::released(anchor),
        };
        tick(&mut round, &world, &input, SIM_DT);
        assert_eq!(round.phase(), RoundPhase::InFlight);
        // Moved by the world on the launch tick
        assert!(round.body.position.x > anchor.x);
    }

    #[test]
    fn test_weak_launch_ends_on_ground() {
        let (mut round, world) = setup();
        let anchor = round.body.position;
        tick(
            &mut round,
            &world,
            &TickInput {
                press_start: Some(anchor),
                press_end: Some(anchor + Vec2::new(-12.0, 0.0)),
                ..Default::default()
            },
            SIM_DT,
        );

        let mut outcome = None;
        for _ in 0..600 {
            if let Some(o) = tick(&mut round, &world, &TickInput::default(), SIM_DT) {
                outcome = Some(o);
                break;
            }
        }

        assert_eq!(outcome, Some(CollisionOutcome::Failure));
        assert_eq!(round.phase(), RoundPhase::GameOver);
        // 120 px/s forward decays below stall speed before touchdown
        assert!(round.drain_events().contains(&RoundEvent::Stalled));

        // Resting contacts after game over are not reported again
        for _ in 0..60 {
            assert_eq!(tick(&mut round, &world, &TickInput::default(), SIM_DT), None);
        }
    }

    #[test]
    fn test_determinism() {
        let (mut round1, world) = setup();
        let (mut round2, _) = setup();

        let anchor = round1.body.position;
        let inputs = [
            TickInput {
                press_start: Some(anchor),
                ..Default::default()
            },
            TickInput {
                press_end: Some(anchor + Vec2::new(-180.0, 60.0)),
                ..Default::default()
            },
            TickInput {
                pointer: PointerState::pressed(Vec2::ZERO),
                ..Default::default()
            },
            TickInput::default(),
        ];

        for input in &inputs {
            tick(&mut round1, &world, input, SIM_DT);
            tick(&mut round2, &world, input, SIM_DT);
        }

        assert_eq!(round1.phase(), round2.phase());
        assert_eq!(round1.body, round2.body);
    }
}
