use std::ops::Range;

use crate::error::ConfigError;
use crate::utils::{point, Point};

/// A closed-form curve on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve {
    /// center + radius * (cos t, sin t)
    Circle { center: Point, radius: f64 },
    /// center + size * (sin t, sin t * cos t), a figure eight lying on its side.
    FigureEight { center: Point, size: f64 },
    Custom(fn(t: f64) -> Point),
}

impl Curve {
    pub fn evaluate(&self, t: f64) -> Point {
        match *self {
            Curve::Circle { center, radius } => {
                center + radius * point(f64::cos(t), f64::sin(t))
            }
            Curve::FigureEight { center, size } => {
                center + size * point(f64::sin(t), f64::sin(t) * f64::cos(t))
            }
            Curve::Custom(f) => f(t),
        }
    }
}

/// Represents a curve in R2 defined by a parametric equation over a domain of t.
/// Progress along the path is measured from the start of the domain.
#[derive(Debug, Clone, PartialEq)]
pub struct Parametric {
    curve: Curve,
    domain: Range<f64>,
}

impl Parametric {
    pub fn new(curve: Curve, domain: Range<f64>) -> Result<Parametric, ConfigError> {
        let span = domain.end - domain.start;
        if !span.is_finite() || span <= 0.0 {
            return Err(ConfigError::EmptyDomain {
                start: domain.start,
                end: domain.end,
            });
        }
        Ok(Parametric { curve, domain })
    }

    /// A curve over one full turn, [0, 2pi).
    pub fn full_turn(curve: Curve) -> Parametric {
        Parametric {
            curve,
            domain: 0.0..std::f64::consts::TAU,
        }
    }

    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    pub fn domain(&self) -> &Range<f64> {
        &self.domain
    }

    pub fn span(&self) -> f64 {
        self.domain.end - self.domain.start
    }

    pub fn sample(&self, progress: f64) -> Point {
        self.curve.evaluate(self.domain.start + progress)
    }
}
