use itertools::Itertools;

use super::parametric::Parametric;
use crate::error::ConfigError;
use crate::utils::{self, Point};

/// An ordered list of waypoints joined by straight segments.
/// Segments are uniformly parameterised: each covers `span / num_segments`
/// units of progress regardless of its on-screen length.
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewiseLinear {
    waypoints: Vec<Point>,
    closed: bool,
    span: f64,
}

impl PiecewiseLinear {
    pub fn new(
        waypoints: Vec<Point>,
        closed: bool,
        span: f64,
    ) -> Result<PiecewiseLinear, ConfigError> {
        let required = if closed { 3 } else { 2 };
        if waypoints.len() < required {
            return Err(ConfigError::TooFewWaypoints {
                required,
                actual: waypoints.len(),
            });
        }
        if !span.is_finite() || span <= 0.0 {
            return Err(ConfigError::InvalidSpan(span));
        }
        Ok(PiecewiseLinear {
            waypoints,
            closed,
            span,
        })
    }

    pub fn waypoints(&self) -> &[Point] {
        &self.waypoints
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn num_segments(&self) -> usize {
        if self.closed {
            self.waypoints.len()
        } else {
            self.waypoints.len() - 1
        }
    }

    pub fn segment_length(&self) -> f64 {
        self.span / self.num_segments() as f64
    }

    pub fn sample(&self, progress: f64) -> Point {
        let segment_length = self.segment_length();
        let last_segment = self.num_segments() - 1;
        let segment = ((progress / segment_length).floor().max(0.0) as usize).min(last_segment);
        // Measured from the clamped segment so progress == span lands on the final waypoint.
        let fraction =
            ((progress - segment as f64 * segment_length) / segment_length).clamp(0.0, 1.0);

        let start = self.waypoints[segment];
        let end = self.waypoints[(segment + 1) % self.waypoints.len()];
        utils::lerp(start, end, fraction)
    }

    /// The segments as pairs of endpoints, including the closing segment of a closed path.
    pub fn segments(&self) -> Vec<(Point, Point)> {
        let mut segments = self.waypoints.iter().copied().tuple_windows().collect_vec();
        if self.closed {
            segments.push((self.waypoints[self.waypoints.len() - 1], self.waypoints[0]));
        }
        segments
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Path {
    PiecewiseLinear(PiecewiseLinear),
    Parametric(Parametric),
}

impl Path {
    /// Total progress length of the path, or the span of its parametric domain.
    pub fn span(&self) -> f64 {
        match self {
            Path::PiecewiseLinear(path) => path.span,
            Path::Parametric(path) => path.span(),
        }
    }

    /// Closed paths wrap around instead of bouncing at their ends.
    pub fn is_closed(&self) -> bool {
        match self {
            Path::PiecewiseLinear(path) => path.closed,
            Path::Parametric(_) => true,
        }
    }

    pub fn sample(&self, progress: f64) -> Point {
        match self {
            Path::PiecewiseLinear(path) => path.sample(progress),
            Path::Parametric(path) => path.sample(progress),
        }
    }

    /// Points a host can stroke to draw the path itself.
    pub fn outline(&self) -> Vec<Point> {
        match self {
            Path::PiecewiseLinear(path) => {
                let mut points = path.waypoints.clone();
                if path.closed {
                    points.push(path.waypoints[0]);
                }
                points
            }
            Path::Parametric(path) => {
                utils::sample_evenly(0.0, path.span(), 360, |progress| path.sample(progress))
            }
        }
    }
}

impl From<PiecewiseLinear> for Path {
    fn from(path: PiecewiseLinear) -> Self {
        Path::PiecewiseLinear(path)
    }
}

impl From<Parametric> for Path {
    fn from(path: Parametric) -> Self {
        Path::Parametric(path)
    }
}
