// End-to-end checks through the public API: seeded matches and the
// decision pipeline wired to a live game state.

use std::rc::Rc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use reflex_pong::ai::{
    create_bot, AiController, Bot, Difficulty, ManualClock, TargetTracker, TrajectoryPredictor,
};
use reflex_pong::config::Config;
use reflex_pong::game::{self, Ball, GameState, Geometry, PaddleAction, Side};
use reflex_pong::game_modes::run_match;

fn match_config(left: Difficulty, right: Difficulty, seed: u64) -> Config {
    let mut config = Config::default();
    config.ai.left_difficulty = left.as_str().to_string();
    config.ai.right_difficulty = right.as_str().to_string();
    config.ai.seed = Some(seed);
    config
}

#[test]
fn test_seeded_match_is_reproducible() {
    let mut config = match_config(Difficulty::Easy, Difficulty::Medium, 1234);
    config.simulation.max_ticks = 4_000;

    let first = run_match(&config).unwrap();
    let second = run_match(&config).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_hard_beats_easy() {
    let mut config = match_config(Difficulty::Easy, Difficulty::Hard, 7);
    config.physics.winning_score = 3;
    config.simulation.max_ticks = 200_000;

    let result = run_match(&config).unwrap();

    assert_eq!(result.winner, Some(Side::Right));
    assert_eq!(result.right_score, 3);
    assert!(result.left_score < 3);
    assert!(result.right_hits > 0);
}

#[test]
fn test_hard_mirror_match_keeps_rallying() {
    let mut config = match_config(Difficulty::Hard, Difficulty::Hard, 99);
    config.physics.winning_score = 1_000;
    config.simulation.max_ticks = 5_000;

    let result = run_match(&config).unwrap();

    assert_eq!(result.ticks, 5_000);
    assert_eq!(result.winner, None);
    // One crossing takes well under 200 ticks
    assert!(result.left_hits + result.right_hits > 10);
}

#[test]
fn test_invalid_difficulty_is_rejected_before_play() {
    let mut config = Config::default();
    config.ai.left_difficulty = "impossible".to_string();

    assert!(run_match(&config).is_err());
}

#[test]
fn test_reference_intercept() {
    let geometry = Geometry::default();
    let predictor = TrajectoryPredictor::new(geometry);
    let ball = Ball::with_velocity(400.0, 300.0, -4.0, 2.0, 7.0);

    let intercept = predictor.predict_y_at_x(&ball, 30.0, 3).unwrap();

    // 92.5 ticks at vy = 2 lands at 485 without touching a wall
    assert!((intercept.y - 485.0).abs() < 1e-6);
    assert_eq!(intercept.bounces, 0);
    assert!(!intercept.best_effort);
}

#[test]
fn test_controller_drives_paddle_toward_intercept() {
    let geometry = Geometry::default();
    let clock = Rc::new(ManualClock::new());
    let difficulty = Difficulty::Hard;
    let mut bot = AiController::with_parts(
        difficulty.display_name(),
        difficulty.profile().clone(),
        TrajectoryPredictor::new(geometry),
        TargetTracker,
        Rc::clone(&clock),
        StdRng::seed_from_u64(5),
    );

    let mut rng = StdRng::seed_from_u64(5);
    let mut state = GameState::new(geometry, 10, &mut rng);
    state.ball = Ball::with_velocity(400.0, 300.0, -4.0, 2.0, 7.0);

    let decision = bot.get_action(&state, Side::Left);
    assert_eq!(decision.action, PaddleAction::Down);
    assert_eq!(decision.speed_factor, 1.0);
    assert!((decision.target_y.unwrap() - 485.0).abs() < 1e-3);

    // Follow the decisions until the ball arrives
    let mut struck = false;
    for _ in 0..120 {
        let decision = bot.get_action(&state, Side::Left);
        game::move_paddle(
            state.paddle_mut(Side::Left),
            decision.action,
            decision.speed_factor,
            geometry.window_height,
        );
        if game::update(&mut state, &mut rng).struck == Some(Side::Left) {
            struck = true;
            break;
        }
        clock.advance_secs(1.0 / 60.0);
    }

    assert!(struck);
    assert_eq!(state.left_hits, 1);
}

#[test]
fn test_create_bot_for_every_difficulty() {
    let geometry = Geometry::default();
    let mut rng = StdRng::seed_from_u64(3);
    let state = GameState::new(geometry, 10, &mut rng);

    for difficulty in Difficulty::all() {
        let mut bot = create_bot(difficulty, geometry, Some(11));
        assert_eq!(bot.name(), difficulty.display_name());

        let decision = bot.get_action(&state, Side::Right);
        assert!(decision.speed_factor <= 1.0);
        bot.reset();
    }
}
