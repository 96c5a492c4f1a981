use rand::Rng;
use tracing::{debug, info};

use super::action::PaddleAction;
use super::state::{Ball, GameState, Paddle, Side};

/// What happened during one physics tick
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PhysicsEvents {
    /// Side whose paddle returned the ball this tick
    pub struck: Option<Side>,
    pub wall_collision: bool,
    /// Side that scored this tick
    pub goal: Option<Side>,
}

impl PhysicsEvents {
    pub fn any(&self) -> bool {
        self.struck.is_some() || self.wall_collision || self.goal.is_some()
    }
}

/// Bounce-angle law: vertical velocity after a paddle strike.
///
/// Linear in the distance between the paddle center and the impact point.
/// A dead-center hit returns flat; a hit at either end returns at
/// `max_velocity`. Used by both the live resolver and the predictor.
pub fn bounce_velocity(
    paddle_center_y: f32,
    ball_y: f32,
    paddle_height: f32,
    max_velocity: f32,
) -> f32 {
    let offset = paddle_center_y - ball_y;
    let reduction_factor = (paddle_height / 2.0) / max_velocity;
    -offset / reduction_factor
}

/// Clamp the ball inside the top/bottom walls and send it back into the field.
///
/// Returns true when a wall was touched.
pub fn reflect_off_walls(ball: &mut Ball, field_height: f32) -> bool {
    if ball.y - ball.radius <= 0.0 {
        ball.y = ball.radius;
        ball.vy = ball.vy.abs();
        true
    } else if ball.y + ball.radius >= field_height {
        ball.y = field_height - ball.radius;
        ball.vy = -ball.vy.abs();
        true
    } else {
        false
    }
}

/// Reflect the ball off the paddle defending `side`, if it is struck.
///
/// A strike needs the ball travelling toward the paddle, its center within
/// the paddle's vertical span, and its leading edge at the facing edge.
pub fn reflect_off_paddle(
    ball: &mut Ball,
    paddle: &Paddle,
    side: Side,
    max_velocity: f32,
) -> bool {
    if !ball.is_approaching(side) {
        return false;
    }

    let height = paddle.current_height();
    if ball.y < paddle.y || ball.y > paddle.y + height {
        return false;
    }

    let edge = paddle.facing_edge(side);
    let reached = match side {
        Side::Left => ball.x - ball.radius <= edge,
        Side::Right => ball.x + ball.radius >= edge,
    };
    if !reached {
        return false;
    }

    ball.vx = -ball.vx;
    ball.vy = bounce_velocity(paddle.center_y(), ball.y, height, max_velocity);
    // Seat the ball against the face so it cannot register twice
    ball.x = edge - side.incoming_sign() * ball.radius;
    true
}

/// Advance the game by one tick: move, collide, score.
pub fn update<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) -> PhysicsEvents {
    let mut events = PhysicsEvents::default();
    if state.game_over {
        return events;
    }

    let geometry = state.geometry;

    state.ball.step();
    events.wall_collision = reflect_off_walls(&mut state.ball, geometry.window_height);

    for side in [Side::Left, Side::Right] {
        let paddle = match side {
            Side::Left => &state.left_paddle,
            Side::Right => &state.right_paddle,
        };
        if reflect_off_paddle(&mut state.ball, paddle, side, geometry.max_velocity) {
            match side {
                Side::Left => state.left_hits += 1,
                Side::Right => state.right_hits += 1,
            }
            debug!(?side, vy = state.ball.vy, "paddle strike");
            events.struck = Some(side);
            break;
        }
    }

    // Ball is out when its center leaves the window
    let scorer = if state.ball.x < 0.0 {
        Some(Side::Right)
    } else if state.ball.x > geometry.window_width {
        Some(Side::Left)
    } else {
        None
    };

    if let Some(scorer) = scorer {
        match scorer {
            Side::Left => state.left_score += 1,
            Side::Right => state.right_score += 1,
        }
        events.goal = Some(scorer);
        info!(
            ?scorer,
            left = state.left_score,
            right = state.right_score,
            "point scored"
        );

        if state.score(scorer) >= state.winning_score {
            state.game_over = true;
            state.winner = Some(scorer);
        } else {
            state.reset_point(rng);
        }
    }

    events
}

/// Move a paddle by its current speed scaled by `speed_factor`, kept inside the window
pub fn move_paddle(
    paddle: &mut Paddle,
    action: PaddleAction,
    speed_factor: f32,
    field_height: f32,
) {
    let delta = action.direction() * paddle.current_speed() * speed_factor;
    let max_y = (field_height - paddle.current_height()).max(0.0);
    paddle.y = (paddle.y + delta).clamp(0.0, max_y);
}
