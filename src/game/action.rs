use rand::Rng;

/// Discrete paddle command produced by a bot each tick
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PaddleAction {
    #[default]
    Stay,
    Up,
    Down,
}

impl PaddleAction {
    pub const ALL: [PaddleAction; 3] = [PaddleAction::Stay, PaddleAction::Up, PaddleAction::Down];

    /// Vertical direction in window coordinates: -1 (up), 0, 1 (down)
    pub fn direction(self) -> f32 {
        match self {
            PaddleAction::Stay => 0.0,
            PaddleAction::Up => -1.0,
            PaddleAction::Down => 1.0,
        }
    }

    /// The two actions other than `self`
    pub fn alternatives(self) -> [PaddleAction; 2] {
        match self {
            PaddleAction::Stay => [PaddleAction::Up, PaddleAction::Down],
            PaddleAction::Up => [PaddleAction::Stay, PaddleAction::Down],
            PaddleAction::Down => [PaddleAction::Stay, PaddleAction::Up],
        }
    }

    /// Uniformly pick one of the two other actions
    pub fn random_alternative<R: Rng + ?Sized>(self, rng: &mut R) -> PaddleAction {
        self.alternatives()[rng.gen_range(0..2)]
    }

    /// Move toward `target_y` unless the paddle center is within `dead_zone`
    pub fn toward(target_y: f32, center_y: f32, dead_zone: f32) -> PaddleAction {
        if (target_y - center_y).abs() < dead_zone {
            PaddleAction::Stay
        } else if target_y < center_y {
            PaddleAction::Up
        } else {
            PaddleAction::Down
        }
    }

    /// Read a continuous control signal directly.
    ///
    /// Magnitudes below `decisiveness` mean stay; negative steers up,
    /// positive steers down.
    pub fn from_signal(signal: f32, decisiveness: f32) -> PaddleAction {
        if !signal.is_finite() || signal.abs() < decisiveness {
            PaddleAction::Stay
        } else if signal < 0.0 {
            PaddleAction::Up
        } else {
            PaddleAction::Down
        }
    }
}
