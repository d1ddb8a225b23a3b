use thiserror::Error;

/// Reasons an exercise configuration is rejected at construction time.
/// Once a configuration is accepted, ticking it can never fail.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("speed must be positive and finite, got {0}")]
    InvalidSpeed(f64),

    #[error("path span must be positive and finite, got {0}")]
    InvalidSpan(f64),

    #[error("path needs at least {required} waypoints, got {actual}")]
    TooFewWaypoints { required: usize, actual: usize },

    #[error("parametric domain [{start}, {end}] is empty")]
    EmptyDomain { start: f64, end: f64 },

    #[error("config span {config} does not match path span {path}")]
    SpanMismatch { config: f64, path: f64 },

    #[error("cycle limit must be at least 1")]
    ZeroCycles,

    #[error("duration limit must be positive, got {0} ms")]
    InvalidDuration(f64),

    #[error("interval must be positive, got {0} ms")]
    InvalidInterval(f64),

    #[error("walker sides must be non-empty and the same length, got {first} and {second}")]
    UnevenSides { first: usize, second: usize },

    #[error("walker pair {index} does not differ along the walking axis")]
    FlatPair { index: usize },

    #[error("highlight needs at least one node")]
    NoNodes,

    #[error("highlight expects {expected} nodes, got {actual}")]
    NodeCountMismatch { expected: usize, actual: usize },
}
