use rand::Rng;
use tracing::warn;

use crate::error::{Error, Result};

// Window coordinates: origin top-left, y grows downward.
// Velocities are in pixels per tick.

/// Multipliers above this are accepted but can desync live physics from prediction
pub const MODIFIER_WARN_LIMIT: f32 = 5.0;

/// Serve angle range in degrees (0 is excluded so every serve has some slope)
const SERVE_ANGLE_MIN_DEG: i32 = -30;
const SERVE_ANGLE_MAX_DEG: i32 = 30;

/// Which side of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Sign of horizontal velocity that carries the ball toward this side
    pub fn incoming_sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Immutable field and object dimensions, fixed at construction time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub window_width: f32,
    pub window_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_offset: f32,
    pub ball_radius: f32,
    pub max_velocity: f32,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            window_width: 800.0,
            window_height: 600.0,
            paddle_width: 20.0,
            paddle_height: 100.0,
            paddle_speed: 4.0,
            paddle_offset: 10.0,
            ball_radius: 7.0,
            max_velocity: 5.0,
        }
    }
}

impl Geometry {
    /// Reject dimensions the physics cannot work with
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_max_velocity", self.max_velocity),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidGeometry(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        if !self.paddle_offset.is_finite() || self.paddle_offset < 0.0 {
            return Err(Error::InvalidGeometry(format!(
                "paddle_offset must be non-negative, got {}",
                self.paddle_offset
            )));
        }
        if self.paddle_height >= self.window_height {
            return Err(Error::InvalidGeometry(
                "paddle_height must be smaller than window_height".to_string(),
            ));
        }
        if 2.0 * self.ball_radius >= self.window_height {
            return Err(Error::InvalidGeometry(
                "ball does not fit between the walls".to_string(),
            ));
        }
        if 2.0 * (self.paddle_offset + self.paddle_width) >= self.window_width {
            return Err(Error::InvalidGeometry(
                "paddles overlap horizontally".to_string(),
            ));
        }
        Ok(())
    }

    /// Left edge (x) of the paddle on the given side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_offset,
            Side::Right => self.window_width - self.paddle_offset - self.paddle_width,
        }
    }

    /// Top edge (y) of a vertically centered paddle
    pub fn centered_paddle_y(&self) -> f32 {
        self.window_height / 2.0 - self.paddle_height / 2.0
    }

    pub fn new_paddle(&self, side: Side) -> Paddle {
        Paddle::new(
            self.paddle_x(side),
            self.centered_paddle_y(),
            self.paddle_width,
            self.paddle_height,
            self.paddle_speed,
        )
    }

    pub fn new_ball(&self) -> Ball {
        Ball::new(
            self.window_width / 2.0,
            self.window_height / 2.0,
            self.ball_radius,
        )
    }
}

fn validate_modifier(name: &'static str, value: f32) -> Result<f32> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidModifier { name, value });
    }
    if value > MODIFIER_WARN_LIMIT {
        warn!(
            modifier = name,
            value, "modifier above {}x; prediction may drift from live physics", MODIFIER_WARN_LIMIT
        );
    }
    Ok(value)
}

/// The ball: a moving disc
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
    speed_modifier: f32,
    original_x: f32,
    original_y: f32,
}

impl Ball {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            radius,
            speed_modifier: 1.0,
            original_x: x,
            original_y: y,
        }
    }

    pub fn with_velocity(x: f32, y: f32, vx: f32, vy: f32, radius: f32) -> Self {
        Self {
            vx,
            vy,
            ..Self::new(x, y, radius)
        }
    }

    pub fn speed_modifier(&self) -> f32 {
        self.speed_modifier
    }

    /// Scale per-tick displacement (power-ups). Rejects non-positive values.
    pub fn apply_speed_modifier(&mut self, modifier: f32) -> Result<()> {
        self.speed_modifier = validate_modifier("ball speed", modifier)?;
        Ok(())
    }

    /// Advance one tick along the current velocity
    pub fn step(&mut self) {
        self.x += self.vx * self.speed_modifier;
        self.y += self.vy * self.speed_modifier;
    }

    /// Whether the ball is travelling toward the given side
    pub fn is_approaching(&self, side: Side) -> bool {
        self.vx * side.incoming_sign() > 0.0
    }

    /// Serve from the original position with a fresh random angle.
    ///
    /// The horizontal direction flips relative to the previous serve and the
    /// speed multiplier is cleared.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R, max_velocity: f32) {
        self.x = self.original_x;
        self.y = self.original_y;

        let angle = random_serve_angle(rng);
        let direction = if self.vx > 0.0 { -1.0 } else { 1.0 };
        self.vx = direction * (angle.cos() * max_velocity).abs();
        self.vy = angle.sin() * max_velocity;
        self.speed_modifier = 1.0;
    }

    /// First serve: random angle and random direction
    pub fn serve<R: Rng + ?Sized>(&mut self, rng: &mut R, max_velocity: f32) {
        let angle = random_serve_angle(rng);
        let direction = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        self.x = self.original_x;
        self.y = self.original_y;
        self.vx = direction * (angle.cos() * max_velocity).abs();
        self.vy = angle.sin() * max_velocity;
        self.speed_modifier = 1.0;
    }
}

fn random_serve_angle<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    let mut degrees = 0;
    while degrees == 0 {
        degrees = rng.gen_range(SERVE_ANGLE_MIN_DEG..SERVE_ANGLE_MAX_DEG);
    }
    (degrees as f32).to_radians()
}

/// An axis-aligned paddle. `x`/`y` is the top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    base_height: f32,
    base_speed: f32,
    height_modifier: f32,
    speed_modifier: f32,
    original_y: f32,
}

impl Paddle {
    pub fn new(x: f32, y: f32, width: f32, height: f32, speed: f32) -> Self {
        Self {
            x,
            y,
            width,
            base_height: height,
            base_speed: speed,
            height_modifier: 1.0,
            speed_modifier: 1.0,
            original_y: y,
        }
    }

    pub fn current_height(&self) -> f32 {
        self.base_height * self.height_modifier
    }

    pub fn current_speed(&self) -> f32 {
        self.base_speed * self.speed_modifier
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.current_height() / 2.0
    }

    /// x of the edge the ball strikes when this paddle defends `side`
    pub fn facing_edge(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.x + self.width,
            Side::Right => self.x,
        }
    }

    pub fn apply_height_modifier(&mut self, modifier: f32) -> Result<()> {
        self.height_modifier = validate_modifier("paddle height", modifier)?;
        Ok(())
    }

    pub fn apply_speed_modifier(&mut self, modifier: f32) -> Result<()> {
        self.speed_modifier = validate_modifier("paddle speed", modifier)?;
        Ok(())
    }

    /// Restore the starting position and clear multipliers
    pub fn reset(&mut self) {
        self.y = self.original_y;
        self.height_modifier = 1.0;
        self.speed_modifier = 1.0;
    }
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub ball: Ball,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub left_score: u32,
    pub right_score: u32,
    pub left_hits: u32,
    pub right_hits: u32,
    pub game_over: bool,
    pub winner: Option<Side>,
    pub geometry: Geometry,
    pub winning_score: u32,
}

impl GameState {
    pub fn new<R: Rng + ?Sized>(geometry: Geometry, winning_score: u32, rng: &mut R) -> Self {
        let mut ball = geometry.new_ball();
        ball.serve(rng, geometry.max_velocity);

        Self {
            ball,
            left_paddle: geometry.new_paddle(Side::Left),
            right_paddle: geometry.new_paddle(Side::Right),
            left_score: 0,
            right_score: 0,
            left_hits: 0,
            right_hits: 0,
            game_over: false,
            winner: None,
            geometry,
            winning_score,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left_paddle,
            Side::Right => &self.right_paddle,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left_paddle,
            Side::Right => &mut self.right_paddle,
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left_score,
            Side::Right => self.right_score,
        }
    }

    pub fn hits(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left_hits,
            Side::Right => self.right_hits,
        }
    }

    /// Reset ball and paddles for the next point
    pub fn reset_point<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.ball.reset(rng, self.geometry.max_velocity);
        self.left_paddle.reset();
        self.right_paddle.reset();
    }
}
