use super::consts::COLLISION_EPSILON;
use crate::utils::{self, Point};

/// A fixed marker on the drawing surface which the ball bounces off when it
/// passes (almost) exactly through the marker's center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub position: Point,
    /// Size of the ring a host draws around the obstacle. Collisions ignore it.
    pub radius: f64,
    pub epsilon: f64,
}

impl Obstacle {
    pub fn new(position: Point, radius: f64) -> Obstacle {
        Obstacle {
            position,
            radius,
            epsilon: COLLISION_EPSILON,
        }
    }

    /// Whether a ball at `point` is touching the obstacle.
    /// The test is per axis, so the contact region is a square of side 2 * epsilon.
    pub fn is_touching(&self, point: Point) -> bool {
        utils::within_box(point, self.position, self.epsilon)
    }
}
