use log::debug;

use crate::error::ConfigError;
use crate::utils::Point;

/// The axis a walker moves along. Waypoint pairs differ only on this axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    fn component(self, point: Point) -> f64 {
        match self {
            Axis::Horizontal => point.x,
            Axis::Vertical => point.y,
        }
    }

    fn component_mut(self, point: &mut Point) -> &mut f64 {
        match self {
            Axis::Horizontal => &mut point.x,
            Axis::Vertical => &mut point.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leg {
    /// Heading from the origin waypoint toward its partner on the other side.
    Forward,
    /// Heading back to the origin waypoint.
    Return,
}

/// Two facing rows of waypoints. The ball shuttles from each waypoint on the
/// first side toward its partner and back, then does the same from the second side.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkerConfig {
    pub axis: Axis,
    pub first: Vec<Point>,
    pub second: Vec<Point>,
    pub forward_speed: f64,
    pub return_speed: f64,
    /// The forward leg turns around once it is this close to the target.
    pub margin: f64,
    pub max_duration_ms: Option<f64>,
}

impl WalkerConfig {
    const FORWARD_SPEED_DEFAULT: f64 = 6.0;
    const RETURN_SPEED_DEFAULT: f64 = 12.0;
    const MARGIN_DEFAULT: f64 = 20.0;

    pub fn new(axis: Axis, first: Vec<Point>, second: Vec<Point>) -> WalkerConfig {
        WalkerConfig {
            axis,
            first,
            second,
            forward_speed: Self::FORWARD_SPEED_DEFAULT,
            return_speed: Self::RETURN_SPEED_DEFAULT,
            margin: Self::MARGIN_DEFAULT,
            max_duration_ms: None,
        }
    }

    pub fn with_max_duration_ms(mut self, duration_ms: f64) -> WalkerConfig {
        self.max_duration_ms = Some(duration_ms);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.first.is_empty() || self.first.len() != self.second.len() {
            return Err(ConfigError::UnevenSides {
                first: self.first.len(),
                second: self.second.len(),
            });
        }
        for (index, (origin, target)) in self.first.iter().zip(&self.second).enumerate() {
            if self.axis.component(*origin) == self.axis.component(*target) {
                return Err(ConfigError::FlatPair { index });
            }
        }
        for speed in [self.forward_speed, self.return_speed] {
            if !speed.is_finite() || speed <= 0.0 {
                return Err(ConfigError::InvalidSpeed(speed));
            }
        }
        match self.max_duration_ms {
            Some(duration) if duration.is_nan() || duration <= 0.0 => {
                Err(ConfigError::InvalidDuration(duration))
            }
            _ => Ok(()),
        }
    }

    fn origins(&self, side: Side) -> &[Point] {
        match side {
            Side::First => &self.first,
            Side::Second => &self.second,
        }
    }

    fn targets(&self, side: Side) -> &[Point] {
        match side {
            Side::First => &self.second,
            Side::Second => &self.first,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkerState {
    pub side: Side,
    pub index: usize,
    pub leg: Leg,
    pub position: Point,
    pub elapsed_ms: f64,
    pub finished: bool,
}

impl WalkerState {
    pub fn start(config: &WalkerConfig) -> Result<WalkerState, ConfigError> {
        config.validate()?;
        Ok(WalkerState {
            side: Side::First,
            index: 0,
            leg: Leg::Forward,
            position: config.first[0],
            elapsed_ms: 0.0,
            finished: false,
        })
    }
}

pub fn advance(state: &WalkerState, config: &WalkerConfig, dt_ms: f64) -> WalkerState {
    if state.finished {
        return *state;
    }

    let mut next = *state;
    next.elapsed_ms += dt_ms;
    if let Some(max_duration_ms) = config.max_duration_ms {
        if next.elapsed_ms >= max_duration_ms {
            debug!("Walker finished after {} ms", next.elapsed_ms);
            next.finished = true;
            return next;
        }
    }

    let origins = config.origins(next.side);
    if next.index >= origins.len() {
        match next.side {
            Side::First => {
                debug!("Walker switching to the second side");
                next.side = Side::Second;
                next.index = 0;
                next.leg = Leg::Forward;
                next.position = config.second[0];
            }
            Side::Second => {
                debug!("Walker finished both sides");
                next.finished = true;
            }
        }
        return next;
    }

    let origin = config.axis.component(origins[next.index]);
    let target = config.axis.component(config.targets(next.side)[next.index]);
    let sign = (target - origin).signum();
    let along = config.axis.component_mut(&mut next.position);

    match next.leg {
        Leg::Forward => {
            *along += sign * config.forward_speed;
            if sign * (*along - target) >= -config.margin {
                next.leg = Leg::Return;
            }
        }
        Leg::Return => {
            *along -= sign * config.return_speed;
            if sign * (*along - origin) <= 0.0 {
                next.leg = Leg::Forward;
                next.index += 1;
                if let Some(&start) = origins.get(next.index) {
                    next.position = start;
                }
            }
        }
    }
    next
}
