// Trajectory prediction for AI bots

use tracing::debug;

use crate::game::physics::{reflect_off_paddle, reflect_off_walls};
use crate::game::{Ball, Geometry, Paddle, PaddleAction, Side};

/// Hard cap on loop iterations in `predict_y_at_x`
pub const MAX_ITERATIONS: u32 = 1000;

/// Wall bounces simulated before settling for a best-effort answer
pub const DEFAULT_MAX_BOUNCES: u32 = 3;

/// Paddle-center distance (pixels) inside which the reference decision is "stay"
pub const ACTION_DEAD_ZONE: f32 = 10.0;

/// Where the ball crosses a vertical line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intercept {
    pub y: f32,
    /// Wall bounces simulated on the way
    pub bounces: u32,
    /// Budget ran out; `y` is the last simulated position, not the crossing
    pub best_effort: bool,
}

/// Pure ball-flight predictor over fixed field geometry.
///
/// Holds no mutable state, so one instance can serve any number of bots.
#[derive(Debug, Clone, Copy)]
pub struct TrajectoryPredictor {
    geometry: Geometry,
    max_bounces: u32,
}

impl TrajectoryPredictor {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            max_bounces: DEFAULT_MAX_BOUNCES,
        }
    }

    pub fn with_max_bounces(mut self, max_bounces: u32) -> Self {
        self.max_bounces = max_bounces;
        self
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// State of the ball after `steps` ticks.
    ///
    /// Applies the same step, wall and paddle rules as the live game, so a
    /// short-horizon preview never disagrees with what will actually happen.
    pub fn advance(&self, ball: &Ball, steps: u32, paddle: Option<(&Paddle, Side)>) -> Ball {
        let mut ball = ball.clone();
        for _ in 0..steps {
            ball.step();
            reflect_off_walls(&mut ball, self.geometry.window_height);
            if let Some((paddle, side)) = paddle {
                reflect_off_paddle(&mut ball, paddle, side, self.geometry.max_velocity);
            }
        }
        ball
    }

    /// Vertical position of the ball when its center reaches `target_x`.
    ///
    /// Walks the flight wall by wall. Returns `None` when the ball has no
    /// horizontal speed, is moving away from `target_x`, or the horizontal
    /// inputs are not finite. When more than `max_bounces` bounces or
    /// `MAX_ITERATIONS` steps would be needed, the last simulated position is
    /// returned with `best_effort` set.
    pub fn predict_y_at_x(
        &self,
        ball: &Ball,
        target_x: f32,
        max_bounces: u32,
    ) -> Option<Intercept> {
        if ball.vx == 0.0 || !ball.vx.is_finite() {
            return None;
        }
        if !target_x.is_finite() || !ball.x.is_finite() {
            return None;
        }

        let radius = ball.radius;
        let top = radius;
        let bottom = self.geometry.window_height - radius;

        let vx = ball.vx;
        let mut x = ball.x;
        let mut y = ball.y;
        let mut vy = ball.vy;
        let mut bounces = 0;
        let mut iterations = 0;

        while iterations < MAX_ITERATIONS && bounces <= max_bounces {
            iterations += 1;

            let time_to_target = (target_x - x) / vx;
            if time_to_target < 0.0 {
                return None;
            }

            let future_y = y + vy * time_to_target;
            let hits_top = future_y < top;
            if !hits_top && future_y <= bottom {
                return Some(Intercept {
                    y: future_y,
                    bounces,
                    best_effort: false,
                });
            }

            let wall_y = if hits_top { top } else { bottom };
            // vy == 0 only reaches here when starting outside the band
            let time_to_wall = if vy == 0.0 {
                0.0
            } else {
                ((wall_y - y) / vy).clamp(0.0, time_to_target)
            };
            x += vx * time_to_wall;
            y = wall_y;
            vy = if hits_top { vy.abs() } else { -vy.abs() };
            bounces += 1;
        }

        debug!(
            bounces,
            iterations, y, "prediction budget exhausted, returning best effort"
        );
        Some(Intercept {
            y,
            bounces,
            best_effort: true,
        })
    }

    /// Paddle-center position needed to meet the ball at the paddle's face.
    ///
    /// Falls back to the ball's current height when there is no answer. The
    /// result always lies in `[h/2, window_height - h/2]` for the paddle's
    /// current height `h`.
    pub fn intercept_point(&self, ball: &Ball, paddle: &Paddle, side: Side) -> f32 {
        let target_x = paddle.facing_edge(side);
        let predicted = self
            .predict_y_at_x(ball, target_x, self.max_bounces)
            .map(|intercept| intercept.y)
            .unwrap_or(ball.y);

        let half = paddle.current_height() / 2.0;
        let max_y = (self.geometry.window_height - half).max(half);
        predicted.clamp(half, max_y)
    }

    /// Noise-free reference decision for a paddle
    pub fn optimal_action(&self, ball: &Ball, paddle: &Paddle, side: Side) -> PaddleAction {
        let target_y = self.intercept_point(ball, paddle, side);
        PaddleAction::toward(target_y, paddle.center_y(), ACTION_DEAD_ZONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::physics::reflect_off_walls;
    use proptest::prelude::*;

    const RADIUS: f32 = 7.0;
    const HEIGHT: f32 = 600.0;

    fn predictor() -> TrajectoryPredictor {
        TrajectoryPredictor::new(Geometry::default())
    }

    fn left_paddle() -> Paddle {
        // Facing edge at x = 30, center at y = 250
        Paddle::new(10.0, 200.0, 20.0, 100.0, 4.0)
    }

    /// Reflect by unfolding the box: position on an infinite line, folded back
    fn unfolded_y(y0: f32, vy: f32, t: f32) -> f32 {
        let span = HEIGHT - 2.0 * RADIUS;
        let folded = (y0 - RADIUS + vy * t).rem_euclid(2.0 * span);
        if folded <= span {
            RADIUS + folded
        } else {
            RADIUS + 2.0 * span - folded
        }
    }

    #[test]
    fn test_reference_scenario() {
        let ball = Ball::with_velocity(400.0, 300.0, -4.0, 2.0, RADIUS);
        let intercept = predictor().predict_y_at_x(&ball, 30.0, 3).unwrap();

        // 92.5 ticks to travel 370 px; 185 px of drop stays clear of y = 593
        assert!((intercept.y - 485.0).abs() < 1e-6);
        assert_eq!(intercept.bounces, 0);
        assert!(!intercept.best_effort);
        assert!((intercept.y - unfolded_y(300.0, 2.0, 92.5)).abs() < 1e-6);
    }

    #[test]
    fn test_single_wall_bounce_top() {
        let ball = Ball::with_velocity(400.0, 300.0, -4.0, -4.0, RADIUS);
        let intercept = predictor().predict_y_at_x(&ball, 30.0, 3).unwrap();

        assert_eq!(intercept.bounces, 1);
        assert!((intercept.y - 84.0).abs() < 1e-3);
    }

    #[test]
    fn test_two_wall_bounces() {
        // Bottom wall at 593 first, then top wall at 7
        let ball = Ball::with_velocity(400.0, 300.0, -4.0, 10.0, RADIUS);
        let intercept = predictor().predict_y_at_x(&ball, 30.0, 3).unwrap();

        assert_eq!(intercept.bounces, 2);
        assert!((intercept.y - 53.0).abs() < 1e-3);
        assert!((intercept.y - unfolded_y(300.0, 10.0, 92.5)).abs() < 1e-3);
    }

    #[test]
    fn test_zero_horizontal_velocity_has_no_answer() {
        let ball = Ball::with_velocity(400.0, 300.0, 0.0, 3.0, RADIUS);
        for target in [0.0, 30.0, 400.0, 770.0] {
            assert!(predictor().predict_y_at_x(&ball, target, 3).is_none());
        }
    }

    #[test]
    fn test_moving_away_has_no_answer() {
        for vy in [-5.0, 0.0, 5.0] {
            let ball = Ball::with_velocity(400.0, 300.0, 4.0, vy, RADIUS);
            assert!(predictor().predict_y_at_x(&ball, 30.0, 3).is_none());
        }
    }

    #[test]
    fn test_non_finite_inputs_have_no_answer() {
        let ball = Ball::with_velocity(400.0, 300.0, -4.0, 2.0, RADIUS);
        assert!(predictor().predict_y_at_x(&ball, f32::NAN, 3).is_none());
        assert!(predictor().predict_y_at_x(&ball, f32::NEG_INFINITY, 3).is_none());

        let lost = Ball::with_velocity(f32::NAN, 300.0, -4.0, 2.0, RADIUS);
        assert!(predictor().predict_y_at_x(&lost, 30.0, 3).is_none());
        // Falls back to the ball's height instead of stalling the tick
        assert_eq!(predictor().intercept_point(&lost, &left_paddle(), Side::Left), 300.0);
    }

    #[test]
    fn test_flat_flight_is_not_a_wall_hit() {
        let ball = Ball::with_velocity(400.0, 300.0, -4.0, 0.0, RADIUS);
        let intercept = predictor().predict_y_at_x(&ball, 30.0, 3).unwrap();
        assert_eq!(intercept.y, 300.0);
        assert_eq!(intercept.bounces, 0);
    }

    #[test]
    fn test_bounce_budget_returns_best_effort() {
        // Needs two bounces; only zero are allowed
        let ball = Ball::with_velocity(400.0, 300.0, -4.0, 10.0, RADIUS);
        let intercept = predictor().predict_y_at_x(&ball, 30.0, 0).unwrap();

        assert!(intercept.best_effort);
        assert_eq!(intercept.y, HEIGHT - RADIUS);
    }

    #[test]
    fn test_iteration_budget_returns_best_effort() {
        // Crawling sideways, bouncing constantly: far more than 1000 bounces away
        let ball = Ball::with_velocity(400.0, 300.0, -0.001, 5.0, RADIUS);
        let intercept = predictor().predict_y_at_x(&ball, 30.0, u32::MAX).unwrap();

        assert!(intercept.best_effort);
        assert_eq!(intercept.bounces, MAX_ITERATIONS);
        assert!(intercept.y == RADIUS || intercept.y == HEIGHT - RADIUS);
    }

    #[test]
    fn test_prediction_matches_live_flight() {
        let ball = Ball::with_velocity(400.0, 300.0, -3.0, 4.5, RADIUS);
        let intercept = predictor().predict_y_at_x(&ball, 30.0, 10).unwrap();

        let mut live = ball.clone();
        while live.x > 30.0 {
            live.step();
            reflect_off_walls(&mut live, HEIGHT);
        }

        // Live clamping at each wall shifts the path by at most 2|vy|
        let tolerance = 2.0 * 4.5 * (intercept.bounces as f32 + 1.0);
        assert!((live.y - intercept.y).abs() <= tolerance);
    }

    #[test]
    fn test_intercept_point_clamps_to_paddle_range() {
        // Heading for the bottom corner
        let ball = Ball::with_velocity(100.0, 590.0, -4.0, 0.0, RADIUS);
        let target = predictor().intercept_point(&ball, &left_paddle(), Side::Left);
        assert_eq!(target, 550.0);
    }

    #[test]
    fn test_intercept_point_falls_back_to_ball_y() {
        let ball = Ball::with_velocity(400.0, 320.0, 4.0, 2.0, RADIUS);
        let target = predictor().intercept_point(&ball, &left_paddle(), Side::Left);
        assert_eq!(target, 320.0);

        // The fallback is clamped too
        let ball = Ball::with_velocity(400.0, 10.0, 4.0, 2.0, RADIUS);
        let target = predictor().intercept_point(&ball, &left_paddle(), Side::Left);
        assert_eq!(target, 50.0);
    }

    #[test]
    fn test_intercept_point_right_side() {
        let paddle = Paddle::new(770.0, 250.0, 20.0, 100.0, 4.0);
        let ball = Ball::with_velocity(400.0, 300.0, 4.0, 1.0, RADIUS);
        let target = predictor().intercept_point(&ball, &paddle, Side::Right);
        // 370 px to the face at 4 px/tick
        assert!((target - 392.5).abs() < 1e-4);
    }

    #[test]
    fn test_optimal_action() {
        let paddle = left_paddle();
        let ball = Ball::with_velocity(400.0, 300.0, -4.0, 2.0, RADIUS);
        assert_eq!(
            predictor().optimal_action(&ball, &paddle, Side::Left),
            PaddleAction::Down
        );

        let ball = Ball::with_velocity(400.0, 255.0, -4.0, 0.0, RADIUS);
        assert_eq!(
            predictor().optimal_action(&ball, &paddle, Side::Left),
            PaddleAction::Stay
        );
    }

    #[test]
    fn test_advance_reflects_off_wall() {
        let ball = Ball::with_velocity(400.0, 10.0, -4.0, -5.0, RADIUS);
        let after = predictor().advance(&ball, 1, None);

        assert_eq!(after.x, 396.0);
        assert_eq!(after.y, RADIUS);
        assert_eq!(after.vy, 5.0);
        // Input untouched
        assert_eq!(ball.y, 10.0);
    }

    #[test]
    fn test_advance_reflects_off_paddle() {
        let paddle = left_paddle();
        let ball = Ball::with_velocity(45.0, 230.0, -4.0, 0.0, RADIUS);
        let after = predictor().advance(&ball, 3, Some((&paddle, Side::Left)));

        // Struck on the second step at y = 230: vy = -(250 - 230) / (50 / 5)
        assert!(after.vx > 0.0);
        assert!((after.vy + 2.0).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_intercept_point_in_paddle_range(
            x in 40.0f32..760.0,
            y in 7.0f32..593.0,
            vx in -5.0f32..5.0,
            vy in -5.0f32..5.0,
        ) {
            let ball = Ball::with_velocity(x, y, vx, vy, RADIUS);
            let target = predictor().intercept_point(&ball, &left_paddle(), Side::Left);
            prop_assert!((50.0..=550.0).contains(&target));
        }

        #[test]
        fn prop_reflection_matches_unfolding(
            x in 100.0f32..760.0,
            y in 7.0f32..593.0,
            speed_x in 1.0f32..5.0,
            vy in -5.0f32..5.0,
        ) {
            let ball = Ball::with_velocity(x, y, -speed_x, vy, RADIUS);
            let intercept = predictor().predict_y_at_x(&ball, 30.0, 64).unwrap();
            let t = (x - 30.0) / speed_x;

            prop_assert!(!intercept.best_effort);
            prop_assert!((intercept.y - unfolded_y(y, vy, t)).abs() < 0.05);
        }
    }
}
