use crate::error::ConfigError;

/// What happens when progress reaches either end of the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Clamp to the end and reverse direction.
    Bounce,
    /// Keep going, wrapping progress modulo the span. Used by closed paths.
    Wrap,
}

/// Immutable per-exercise parameters for a PathAnimator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Progress units per tick. Ticks are assumed to arrive at a fixed frame rate,
    /// so speed does not scale with the elapsed time of a tick.
    pub speed: f64,
    /// Total path length, or the span of a parametric domain.
    pub span: f64,
    pub max_cycles: Option<u32>,
    pub max_duration_ms: Option<f64>,
    pub boundary: Boundary,
}

impl Config {
    pub fn new(span: f64, speed: f64, boundary: Boundary) -> Config {
        Config {
            speed,
            span,
            max_cycles: None,
            max_duration_ms: None,
            boundary,
        }
    }

    pub fn with_max_cycles(mut self, cycles: u32) -> Config {
        self.max_cycles = Some(cycles);
        self
    }

    pub fn with_max_duration_ms(mut self, duration_ms: f64) -> Config {
        self.max_duration_ms = Some(duration_ms);
        self
    }

    /// Checks the config once, up front, so ticking never has to.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(ConfigError::InvalidSpeed(self.speed));
        }
        if !self.span.is_finite() || self.span <= 0.0 {
            return Err(ConfigError::InvalidSpan(self.span));
        }
        if self.max_cycles == Some(0) {
            return Err(ConfigError::ZeroCycles);
        }
        match self.max_duration_ms {
            Some(duration) if duration.is_nan() || duration <= 0.0 => {
                Err(ConfigError::InvalidDuration(duration))
            }
            _ => Ok(()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            speed: 1.0,
            span: 100.0,
            max_cycles: None,
            max_duration_ms: None,
            boundary: Boundary::Bounce,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Boundary, Config};
    use crate::error::ConfigError;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(Ok(()), Config::default().validate());
    }

    #[test]
    fn builder_sets_limits() {
        let config = Config::new(720.0, 0.8, Boundary::Bounce)
            .with_max_cycles(3)
            .with_max_duration_ms(20_000.0);
        assert_eq!(Some(3), config.max_cycles);
        assert_eq!(Some(20_000.0), config.max_duration_ms);
        assert_eq!(Ok(()), config.validate());
    }

    #[test]
    fn rejects_malformed_configs() {
        assert_eq!(
            Err(ConfigError::InvalidSpeed(0.0)),
            Config::new(720.0, 0.0, Boundary::Bounce).validate()
        );
        assert_eq!(
            Err(ConfigError::InvalidSpeed(-1.0)),
            Config::new(720.0, -1.0, Boundary::Bounce).validate()
        );
        assert_eq!(
            Err(ConfigError::InvalidSpan(0.0)),
            Config::new(0.0, 1.0, Boundary::Wrap).validate()
        );
        assert_eq!(
            Err(ConfigError::ZeroCycles),
            Config::new(720.0, 1.0, Boundary::Bounce)
                .with_max_cycles(0)
                .validate()
        );
        assert_eq!(
            Err(ConfigError::InvalidDuration(-5.0)),
            Config::new(720.0, 1.0, Boundary::Bounce)
                .with_max_duration_ms(-5.0)
                .validate()
        );
    }
}
