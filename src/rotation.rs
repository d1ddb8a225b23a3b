use log::info;

use crate::error::ConfigError;
use crate::exercise::Exercise;

/// Cycles through the exercises, switching on its own every interval and on
/// request in either direction. Every switch resets the interval timer.
#[derive(Debug, Clone, PartialEq)]
pub struct Rotation {
    exercises: Vec<Exercise>,
    index: usize,
    since_switch_ms: f64,
    interval_ms: f64,
}

impl Rotation {
    pub const INTERVAL_MS_DEFAULT: f64 = 30_000.0;

    /// A rotation over `exercises`, or over every exercise if `exercises` is empty.
    pub fn new(exercises: Vec<Exercise>, interval_ms: f64) -> Result<Rotation, ConfigError> {
        if !interval_ms.is_finite() || interval_ms <= 0.0 {
            return Err(ConfigError::InvalidInterval(interval_ms));
        }
        let exercises = if exercises.is_empty() {
            Exercise::ALL.to_vec()
        } else {
            exercises
        };
        Ok(Rotation {
            exercises,
            index: 0,
            since_switch_ms: 0.0,
            interval_ms,
        })
    }

    pub fn current(&self) -> Exercise {
        self.exercises[self.index]
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn next(&mut self) -> Exercise {
        self.switch_to((self.index + 1) % self.len())
    }

    pub fn previous(&mut self) -> Exercise {
        self.switch_to((self.index + self.len() - 1) % self.len())
    }

    /// Advances the timer, switching once for every interval that elapsed.
    /// Returns the exercise it ends on if there was at least one switch.
    pub fn tick(&mut self, dt_ms: f64) -> Option<Exercise> {
        self.since_switch_ms += dt_ms;
        let mut switched = None;
        while self.since_switch_ms >= self.interval_ms {
            let carried = self.since_switch_ms - self.interval_ms;
            switched = Some(self.next());
            self.since_switch_ms = carried;
        }
        switched
    }

    /// e.g. "Exercise 3 of 8"
    pub fn label(&self) -> String {
        format!("Exercise {} of {}", self.index + 1, self.len())
    }

    fn switch_to(&mut self, index: usize) -> Exercise {
        self.index = index;
        self.since_switch_ms = 0.0;
        info!("{}: {}", self.label(), self.current().title());
        self.current()
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Rotation {
            exercises: Exercise::ALL.to_vec(),
            index: 0,
            since_switch_ms: 0.0,
            interval_ms: Self::INTERVAL_MS_DEFAULT,
        }
    }
}
