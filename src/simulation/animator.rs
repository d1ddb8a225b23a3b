use log::debug;

use super::config::{Boundary, Config};
use super::obstacle::Obstacle;
use super::path::Path;
use super::state::AnimationState;
use crate::error::ConfigError;
use crate::utils::Point;

/// Relative to the span.
const BOUNDARY_TOLERANCE: f64 = 1e-9;

/// Advances the animation by one tick of `dt_ms` milliseconds, returning the next state.
/// A finished state is returned unchanged.
pub fn advance(state: &AnimationState, config: &Config, dt_ms: f64) -> AnimationState {
    if state.finished {
        return *state;
    }

    let mut next = *state;
    next.elapsed_ms += dt_ms;
    if let Some(max_duration_ms) = config.max_duration_ms {
        if next.elapsed_ms >= max_duration_ms {
            debug!("Finished after {} ms at progress {}", next.elapsed_ms, next.progress);
            next.finished = true;
            return next;
        }
    }

    next.progress += next.direction * config.speed;

    match config.boundary {
        Boundary::Bounce => {
            // Repeated addition of the speed drifts off exact multiples of the span,
            // so progress within the tolerance of an end counts as reaching it.
            let tolerance = BOUNDARY_TOLERANCE * config.span;
            if next.progress >= config.span - tolerance || next.progress <= tolerance {
                next.progress = if next.progress <= tolerance {
                    0.0
                } else {
                    config.span
                };
                next.direction = -next.direction;
                if next.direction.signum() < 0.0 {
                    // A forward pass just completed.
                    next.cycles_completed += 1;
                }
                debug!(
                    "Bounced at progress {}, {} cycles completed",
                    next.progress, next.cycles_completed
                );
                next.finished = reached_cycle_limit(&next, config);
            }
        }
        Boundary::Wrap => {
            if next.progress >= config.span || next.progress < 0.0 {
                next.progress = next.progress.rem_euclid(config.span);
                // rem_euclid can round up to the span itself for tiny negative inputs.
                if next.progress >= config.span {
                    next.progress = 0.0;
                }
                next.cycles_completed += 1;
                debug!("Wrapped around, {} cycles completed", next.cycles_completed);
                next.finished = reached_cycle_limit(&next, config);
            }
        }
    }

    next
}

fn reached_cycle_limit(state: &AnimationState, config: &Config) -> bool {
    match config.max_cycles {
        Some(max_cycles) if state.cycles_completed >= max_cycles => {
            debug!("Finished after {} cycles", state.cycles_completed);
            true
        }
        _ => false,
    }
}

/// Where the ball is drawn for the given state.
pub fn sample_position(state: &AnimationState, path: &Path) -> Point {
    path.sample(state.progress)
}

/// Reverses direction if the ball is currently touching the obstacle.
pub fn reverse_on_collision(
    state: &AnimationState,
    path: &Path,
    obstacle: &Obstacle,
) -> AnimationState {
    if state.finished {
        return *state;
    }
    let position = sample_position(state, path);
    if obstacle.is_touching(position) {
        debug!("Collided with obstacle at {:?}, reversing", obstacle.position);
        AnimationState {
            direction: -state.direction,
            ..*state
        }
    } else {
        *state
    }
}

/// A path, the config that drives motion along it, and an optional obstacle
/// that reverses the ball on contact. Validated once on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct PathAnimator {
    path: Path,
    config: Config,
    obstacle: Option<Obstacle>,
}

impl PathAnimator {
    pub fn new(path: Path, config: Config) -> Result<PathAnimator, ConfigError> {
        config.validate()?;
        if (config.span - path.span()).abs() > 1e-9 * config.span.max(1.0) {
            return Err(ConfigError::SpanMismatch {
                config: config.span,
                path: path.span(),
            });
        }
        Ok(PathAnimator {
            path,
            config,
            obstacle: None,
        })
    }

    pub fn with_obstacle(mut self, obstacle: Obstacle) -> PathAnimator {
        self.obstacle = Some(obstacle);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn obstacle(&self) -> Option<&Obstacle> {
        self.obstacle.as_ref()
    }

    /// One frame: advance, then apply the collision rule if there is an obstacle.
    pub fn tick(&self, state: &AnimationState, dt_ms: f64) -> AnimationState {
        let next = advance(state, &self.config, dt_ms);
        match &self.obstacle {
            Some(obstacle) => reverse_on_collision(&next, &self.path, obstacle),
            None => next,
        }
    }

    pub fn position(&self, state: &AnimationState) -> Point {
        sample_position(state, &self.path)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, TAU};

    use super::{advance, sample_position, PathAnimator};
    use crate::error::ConfigError;
    use crate::simulation::config::{Boundary, Config};
    use crate::simulation::obstacle::Obstacle;
    use crate::simulation::parametric::{Curve, Parametric};
    use crate::simulation::path::{Path, PiecewiseLinear};
    use crate::simulation::state::{AnimationState, Direction};
    use crate::utils::point;

    fn zigzag() -> Path {
        let waypoints = (0..=12)
            .map(|i| point(if i % 2 == 0 { 100.0 } else { 700.0 }, 50.0 + 50.0 * i as f64))
            .collect();
        PiecewiseLinear::new(waypoints, false, 720.0).unwrap().into()
    }

    fn circle() -> Path {
        Parametric::full_turn(Curve::Circle {
            center: point(400.0, 300.0),
            radius: 200.0,
        })
        .into()
    }

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(diff < 1e-9, "expected {expected}, got {actual}, diff {diff}");
    }

    #[test]
    fn finished_state_is_left_unchanged() {
        let config = Config::new(720.0, 0.8, Boundary::Bounce);
        let state = AnimationState {
            progress: 123.0,
            direction: Direction::Backward,
            cycles_completed: 2,
            elapsed_ms: 500.0,
            finished: true,
        };
        for dt in [0.0, 16.0, 1e9] {
            assert_eq!(state, advance(&state, &config, dt));
        }
    }

    #[test]
    fn flips_once_per_full_traversal() {
        let speed = 0.75;
        let config = Config::new(720.0, speed, Boundary::Bounce);
        let ticks_to_end = (720.0_f64 / speed).ceil() as usize;

        let mut state = AnimationState::new();
        for _ in 0..ticks_to_end - 1 {
            state = advance(&state, &config, 16.0);
            assert_eq!(Direction::Forward, state.direction);
        }
        state = advance(&state, &config, 16.0);
        assert_eq!(720.0, state.progress);
        assert_eq!(Direction::Backward, state.direction);
        assert_eq!(1, state.cycles_completed);

        // Coming back down flips again without counting a cycle.
        for _ in 0..ticks_to_end - 1 {
            state = advance(&state, &config, 16.0);
            assert_eq!(Direction::Backward, state.direction);
        }
        state = advance(&state, &config, 16.0);
        assert_eq!(0.0, state.progress);
        assert_eq!(Direction::Forward, state.direction);
        assert_eq!(1, state.cycles_completed);
    }

    #[test]
    fn flips_on_schedule_when_speed_is_not_exact_in_binary() {
        // 0.8 has no exact binary form; 900 additions land just short of 720.
        let speed = 0.8;
        let config = Config::new(720.0, speed, Boundary::Bounce);
        let ticks_per_pass = (720.0_f64 / speed).ceil() as usize;
        assert_eq!(900, ticks_per_pass);

        let mut state = AnimationState::new();
        let mut direction = state.direction;
        for pass in 1..=6 {
            for _ in 0..ticks_per_pass - 1 {
                state = advance(&state, &config, 16.0);
                assert_eq!(direction, state.direction, "early flip on pass {pass}");
            }
            state = advance(&state, &config, 16.0);
            assert_eq!(-direction, state.direction, "late flip on pass {pass}");
            let end = if pass % 2 == 1 { 720.0 } else { 0.0 };
            assert_eq!(end, state.progress);
            direction = state.direction;
        }
        assert_eq!(3, state.cycles_completed);
    }

    #[test]
    fn zigzag_finishes_exactly_at_third_cycle() {
        let path = zigzag();
        let config = Config::new(720.0, 0.8, Boundary::Bounce).with_max_cycles(3);
        let animator = PathAnimator::new(path, config).unwrap();

        let mut state = AnimationState::new();
        let mut ticks = 0;
        while !state.finished {
            let next = animator.tick(&state, 16.0);
            if !next.finished {
                assert!(next.cycles_completed < 3);
            }
            state = next;
            ticks += 1;
            assert!(ticks < 10_000, "never finished");
        }
        // Out, back, out, back, out: five passes of 900 ticks.
        assert_eq!(4500, ticks);
        assert_eq!(3, state.cycles_completed);
        assert_eq!(720.0, state.progress);
    }

    #[test]
    fn duration_cutoff_ignores_progress() {
        let config = Config::new(720.0, 0.8, Boundary::Bounce).with_max_duration_ms(20_000.0);
        let mut state = AnimationState::new();
        // 20000 / 16 = 1250 ticks.
        for _ in 0..1249 {
            state = advance(&state, &config, 16.0);
            assert!(!state.finished);
        }
        let before = state;
        state = advance(&state, &config, 16.0);
        assert!(state.finished);
        assert_eq!(20_000.0, state.elapsed_ms);
        assert_eq!(before.progress, state.progress);
    }

    #[test]
    fn wrapping_keeps_progress_in_range_and_counts_laps() {
        let config = Config::new(TAU, 0.05, Boundary::Wrap);
        let mut state = AnimationState::new();
        for _ in 0..200 {
            state = advance(&state, &config, 16.0);
            assert!(state.progress >= 0.0 && state.progress < TAU);
            assert_eq!(Direction::Forward, state.direction);
        }
        // 200 * 0.05 = 10 radians, one full lap.
        assert_eq!(1, state.cycles_completed);
        assert_close(state.progress, 10.0 - TAU);

        let backwards = AnimationState {
            progress: 0.02,
            direction: Direction::Backward,
            ..AnimationState::new()
        };
        let wrapped = advance(&backwards, &config, 16.0);
        assert_close(wrapped.progress, TAU - 0.03);
    }

    #[test]
    fn wrapping_respects_cycle_limit() {
        let config = Config::new(5.0, 1.0, Boundary::Wrap).with_max_cycles(2);
        let mut state = AnimationState::new();
        for _ in 0..9 {
            state = advance(&state, &config, 16.0);
            assert!(!state.finished);
        }
        state = advance(&state, &config, 16.0);
        assert!(state.finished);
        assert_eq!(2, state.cycles_completed);
    }

    #[test]
    fn samples_waypoints_at_the_ends() {
        let path = zigzag();
        let start = AnimationState::new();
        let end = AnimationState::starting_at(720.0);
        assert_eq!(point(100.0, 50.0), sample_position(&start, &path));
        assert_eq!(point(100.0, 650.0), sample_position(&end, &path));
    }

    #[test]
    fn reverses_at_the_top_of_the_circle() {
        let speed = 0.05;
        let config = Config::new(TAU, speed, Boundary::Wrap);
        // (cx, cy - R) on a canvas where y grows downwards is angle 3pi/2.
        let top = 3.0 * FRAC_PI_2;
        let animator = PathAnimator::new(circle(), config)
            .unwrap()
            .with_obstacle(Obstacle::new(point(400.0, 100.0), 40.0));

        let before = AnimationState::starting_at(top - speed);
        assert_eq!(Direction::Forward, before.direction);
        let at_top = animator.tick(&before, 16.0);
        assert_close(at_top.progress, top);
        assert_eq!(Direction::Backward, at_top.direction);

        let after = animator.tick(&at_top, 16.0);
        assert_close(after.progress, top - speed);
        assert_eq!(Direction::Backward, after.direction);
    }

    #[test]
    fn near_miss_does_not_reverse() {
        let config = Config::new(TAU, 0.05, Boundary::Wrap);
        let animator = PathAnimator::new(circle(), config)
            .unwrap()
            .with_obstacle(Obstacle::new(point(400.0, 100.0), 40.0));
        // Angle 4.7 is about 2.5 units away from the top of the circle.
        let state = animator.tick(&AnimationState::starting_at(4.65), 16.0);
        assert_eq!(Direction::Forward, state.direction);
    }

    #[test]
    fn rejects_mismatched_span() {
        let result = PathAnimator::new(zigzag(), Config::new(600.0, 0.8, Boundary::Bounce));
        assert_eq!(
            Err(ConfigError::SpanMismatch {
                config: 600.0,
                path: 720.0
            }),
            result
        );
        assert_eq!(
            Err(ConfigError::InvalidSpeed(0.0)),
            PathAnimator::new(zigzag(), Config::new(720.0, 0.0, Boundary::Bounce))
        );
    }
}
