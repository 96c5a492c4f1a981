use std::rc::Rc;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::ai::{
    AiController, Bot, Clock, Difficulty, ManualClock, SystemClock, TargetTracker,
    TrajectoryPredictor,
};
use crate::config::Config;
use crate::error::Result;
use crate::game::{self, GameState, Side};
use crate::{FIXED_TIMESTEP, FRAME_DURATION};

use super::common::pace_tick;

/// Final tally of a headless match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub left_score: u32,
    pub right_score: u32,
    pub left_hits: u32,
    pub right_hits: u32,
    pub ticks: u64,
    /// `None` when the tick limit ran out first
    pub winner: Option<Side>,
}

/// Independent random stream per consumer, derived from one match seed
fn stream(seed: Option<u64>, index: u64) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(index)),
        None => StdRng::from_entropy(),
    }
}

fn build_bot<C: Clock + 'static>(
    difficulty: Difficulty,
    predictor: TrajectoryPredictor,
    clock: C,
    rng: StdRng,
) -> Box<dyn Bot> {
    Box::new(AiController::with_parts(
        difficulty.display_name(),
        difficulty.profile().clone(),
        predictor,
        TargetTracker,
        clock,
        rng,
    ))
}

/// Run an AI-vs-AI match to completion or to the tick limit.
///
/// Without `realtime` the bots share a clock that advances one fixed
/// timestep per tick, so reaction delays play out exactly as they would
/// at 60 FPS and a seeded match is fully reproducible.
pub fn run_match(config: &Config) -> Result<MatchResult> {
    config.validate()?;

    let geometry = config.physics.geometry();
    let left = config.difficulty(Side::Left)?;
    let right = config.difficulty(Side::Right)?;
    let seed = config.ai.seed;
    let realtime = config.simulation.realtime;
    let predictor = TrajectoryPredictor::new(geometry).with_max_bounces(config.ai.max_bounces);

    info!(%left, %right, ?seed, realtime, "starting AI vs AI match");

    let tick_clock = Rc::new(ManualClock::new());
    let (mut left_bot, mut right_bot) = if realtime {
        let clock = SystemClock::new();
        (
            build_bot(left, predictor, clock, stream(seed, 1)),
            build_bot(right, predictor, clock, stream(seed, 2)),
        )
    } else {
        (
            build_bot(left, predictor, Rc::clone(&tick_clock), stream(seed, 1)),
            build_bot(right, predictor, Rc::clone(&tick_clock), stream(seed, 2)),
        )
    };

    let mut rng = stream(seed, 0);
    let mut state = GameState::new(geometry, config.physics.winning_score, &mut rng);
    let timestep = Duration::from_secs_f32(FIXED_TIMESTEP);
    let mut ticks = 0;

    while !state.game_over && ticks < config.simulation.max_ticks {
        let frame_start = Instant::now();

        for (side, bot) in [(Side::Left, &mut left_bot), (Side::Right, &mut right_bot)] {
            let decision = bot.get_action(&state, side);
            game::move_paddle(
                state.paddle_mut(side),
                decision.action,
                decision.speed_factor,
                geometry.window_height,
            );
        }

        let events = game::update(&mut state, &mut rng);

        // New point: bots start fresh
        if events.goal.is_some() && !state.game_over {
            left_bot.reset();
            right_bot.reset();
        }

        tick_clock.advance(timestep);
        ticks += 1;

        if realtime {
            pace_tick(frame_start, FRAME_DURATION);
        }
    }

    let result = MatchResult {
        left_score: state.score(Side::Left),
        right_score: state.score(Side::Right),
        left_hits: state.hits(Side::Left),
        right_hits: state.hits(Side::Right),
        ticks,
        winner: state.winner,
    };

    match result.winner {
        Some(winner) => info!(?winner, ticks, "match finished"),
        None => debug!(ticks, "tick limit reached without a winner"),
    }

    Ok(result)
}
