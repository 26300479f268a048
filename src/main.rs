//! Paper Glide entry point
//!
//! Headless demo: the autopilot plays a number of rounds through the same
//! fixed-timestep loop a renderer would drive, and the outcomes are printed.
//!
//! Usage: `paper-glide [TUNING.json] [--seed N] [--rounds N]`

use paper_glide::Tuning;
use paper_glide::consts::*;
use paper_glide::sim::{
    ArcadeWorld, Autopilot, CollisionOutcome, Round, RoundEvent, RoundPhase, TerrainId, tick,
};

/// Host frame time (a 30 fps display runs two sim steps per frame)
const FRAME_DT: f32 = 1.0 / 30.0;

struct Options {
    tuning_path: Option<String>,
    seed: u64,
    rounds: u32,
}

impl Options {
    fn parse(mut args: impl Iterator<Item = String>) -> Self {
        let mut options = Options {
            tuning_path: None,
            seed: 12345,
            rounds: 5,
        };
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => match args.next().and_then(|v| v.parse().ok()) {
                    Some(seed) => options.seed = seed,
                    None => log::warn!("--seed expects a number, keeping {}", options.seed),
                },
                "--rounds" => match args.next().and_then(|v| v.parse().ok()) {
                    Some(rounds) => options.rounds = rounds,
                    None => log::warn!("--rounds expects a number, keeping {}", options.rounds),
                },
                _ => options.tuning_path = Some(arg),
            }
        }
        options
    }
}

/// Game instance holding all state
struct Game {
    round: Round,
    world: ArcadeWorld,
    pilot: Autopilot,
    accumulator: f32,
    frames: u64,
    rounds_played: u32,
    successes: u32,
}

impl Game {
    fn new(tuning: Tuning, seed: u64) -> Self {
        Self {
            round: Round::new(tuning, TerrainId::LANDING_ZONE),
            world: ArcadeWorld::new(tuning.world),
            pilot: Autopilot::new(seed),
            accumulator: 0.0,
            frames: 0,
            rounds_played: 0,
            successes: 0,
        }
    }

    /// Run simulation ticks for one host frame
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;
        self.frames += 1;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = self.pilot.input_for(&self.round);
            tick(&mut self.round, &self.world, &input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;
            self.handle_events();

            // Give up on rounds that never come down
            if self.round.phase() == RoundPhase::InFlight
                && self.round.time_ticks() >= MAX_ROUND_TICKS
            {
                log::warn!("Round abandoned after {} ticks", self.round.time_ticks());
                self.rounds_played += 1;
                println!("Round {:>3}: abandoned", self.rounds_played);
                self.round.restart();
            }
        }
    }

    fn handle_events(&mut self) {
        for event in self.round.drain_events() {
            match event {
                RoundEvent::Landed { outcome, .. } => {
                    self.rounds_played += 1;
                    if outcome == CollisionOutcome::Success {
                        self.successes += 1;
                    }
                    let body = &self.round.body;
                    println!(
                        "Round {:>3}: {:<8} x={:>7.1} after {:>4} ticks",
                        self.rounds_played,
                        outcome.message(),
                        body.position.x,
                        self.round.time_ticks()
                    );
                }
                RoundEvent::RestartRequested => self.round.restart(),
                RoundEvent::Launched { .. } | RoundEvent::Stalled | RoundEvent::Recovered => {}
            }
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Paper Glide starting...");

    let options = Options::parse(std::env::args().skip(1));
    let tuning = match &options.tuning_path {
        Some(path) => Tuning::load_or_default(path),
        None => Tuning::default(),
    };

    log::info!("Game initialized with seed: {}", options.seed);

    let mut game = Game::new(tuning, options.seed);
    while game.rounds_played < options.rounds {
        game.update(FRAME_DT);
    }

    println!(
        "\n{}/{} landings on target ({} frames)",
        game.successes, game.rounds_played, game.frames
    );
}
