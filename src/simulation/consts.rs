/// One display refresh at 60Hz, in milliseconds.
pub const FRAME_MS: f64 = 1000.0 / 60.0;

/// Every timed exercise stops after twenty seconds.
pub const EXERCISE_DURATION_MS: f64 = 20_000.0;

/// How close, on each axis, the ball must come to an obstacle to bounce off it.
pub const COLLISION_EPSILON: f64 = 1.0;

pub const HIGHLIGHT_INTERVAL_MS: f64 = 1000.0;
