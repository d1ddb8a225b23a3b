use std::ops::{Mul, Neg};

/// Which way progress moves along a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn signum(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }

    pub fn reversed(self) -> Direction {
        -self
    }
}

impl Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Direction {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

impl Mul<f64> for Direction {
    type Output = f64;

    fn mul(self, rhs: f64) -> f64 {
        self.signum() * rhs
    }
}

/// Where a ball is along its path, and how long it has been running.
///
/// The host keeps the current value and replaces it with whatever `advance`
/// returns each frame. A state is discarded when its exercise is switched out;
/// progress never carries over to another exercise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    pub progress: f64,
    pub direction: Direction,
    pub cycles_completed: u32,
    pub elapsed_ms: f64,
    pub finished: bool,
}

impl AnimationState {
    pub fn new() -> AnimationState {
        AnimationState {
            progress: 0.0,
            direction: Direction::Forward,
            cycles_completed: 0,
            elapsed_ms: 0.0,
            finished: false,
        }
    }

    /// A fresh state starting part way along the path.
    pub fn starting_at(progress: f64) -> AnimationState {
        AnimationState {
            progress,
            ..AnimationState::new()
        }
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        AnimationState::new()
    }
}
