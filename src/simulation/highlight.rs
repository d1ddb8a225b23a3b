use log::debug;
use rand::Rng;

use super::consts::HIGHLIGHT_INTERVAL_MS;
use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightConfig {
    pub node_count: usize,
    pub interval_ms: f64,
    pub max_duration_ms: Option<f64>,
}

impl HighlightConfig {
    pub fn new(node_count: usize) -> HighlightConfig {
        HighlightConfig {
            node_count,
            interval_ms: HIGHLIGHT_INTERVAL_MS,
            max_duration_ms: None,
        }
    }

    pub fn with_max_duration_ms(mut self, duration_ms: f64) -> HighlightConfig {
        self.max_duration_ms = Some(duration_ms);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.node_count == 0 {
            return Err(ConfigError::NoNodes);
        }
        if self.interval_ms.is_nan() || self.interval_ms <= 0.0 {
            return Err(ConfigError::InvalidInterval(self.interval_ms));
        }
        match self.max_duration_ms {
            Some(duration) if duration.is_nan() || duration <= 0.0 => {
                Err(ConfigError::InvalidDuration(duration))
            }
            _ => Ok(()),
        }
    }
}

/// One highlighted node out of a fixed set, re-drawn at every interval boundary.
///
/// `changes` counts every selection, including the first one made at t = 0.
/// Selections are uniform and may repeat the node that is already highlighted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightState {
    pub active: usize,
    pub since_change_ms: f64,
    pub elapsed_ms: f64,
    pub changes: u32,
    pub finished: bool,
}

impl HighlightState {
    pub fn start<R: Rng>(
        config: &HighlightConfig,
        rng: &mut R,
    ) -> Result<HighlightState, ConfigError> {
        config.validate()?;
        Ok(HighlightState {
            active: rng.gen_range(0..config.node_count),
            since_change_ms: 0.0,
            elapsed_ms: 0.0,
            changes: 1,
            finished: false,
        })
    }
}

/// Advances the highlight by `dt_ms`. The duration limit is checked before any
/// interval boundary, so a boundary landing exactly on the cutoff never fires.
pub fn advance<R: Rng>(
    state: &HighlightState,
    config: &HighlightConfig,
    dt_ms: f64,
    rng: &mut R,
) -> HighlightState {
    if state.finished {
        return *state;
    }

    let mut next = *state;
    next.elapsed_ms += dt_ms;
    if let Some(max_duration_ms) = config.max_duration_ms {
        if next.elapsed_ms >= max_duration_ms {
            debug!("Highlight finished after {} changes", next.changes);
            next.finished = true;
            return next;
        }
    }

    next.since_change_ms += dt_ms;
    while next.since_change_ms >= config.interval_ms {
        next.since_change_ms -= config.interval_ms;
        next.active = rng.gen_range(0..config.node_count);
        next.changes += 1;
        debug!("Highlighting node {}", next.active);
    }
    next
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::{advance, HighlightConfig, HighlightState};
    use crate::error::ConfigError;

    fn run_until_finished(config: &HighlightConfig, dt_ms: f64) -> HighlightState {
        let mut rng = StdRng::seed_from_u64(7);
        let mut state = HighlightState::start(config, &mut rng).unwrap();
        while !state.finished {
            state = advance(&state, config, dt_ms, &mut rng);
            assert!(state.active < config.node_count);
        }
        state
    }

    #[test]
    fn twenty_changes_in_twenty_seconds() {
        let config = HighlightConfig::new(12).with_max_duration_ms(20_000.0);
        for dt in [16.0, 20.0, 250.0, 1000.0] {
            let state = run_until_finished(&config, dt);
            assert_eq!(20, state.changes, "dt {dt}");
            assert_eq!(20_000.0, state.elapsed_ms);
        }
    }

    #[test]
    fn changes_only_on_interval_boundaries() {
        let config = HighlightConfig::new(12);
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = HighlightState::start(&config, &mut rng).unwrap();
        for _ in 0..62 {
            state = advance(&state, &config, 16.0, &mut rng);
        }
        // 62 * 16 = 992 ms, still inside the first interval.
        assert_eq!(1, state.changes);
        state = advance(&state, &config, 16.0, &mut rng);
        assert_eq!(2, state.changes);
        assert_eq!(8.0, state.since_change_ms);
    }

    #[test]
    fn long_tick_fires_every_boundary_it_crosses() {
        let config = HighlightConfig::new(12);
        let mut rng = StdRng::seed_from_u64(3);
        let state = HighlightState::start(&config, &mut rng).unwrap();
        let state = advance(&state, &config, 3500.0, &mut rng);
        assert_eq!(4, state.changes);
        assert_eq!(500.0, state.since_change_ms);
    }

    #[test]
    fn repeats_are_allowed() {
        let config = HighlightConfig::new(1).with_max_duration_ms(5000.0);
        let state = run_until_finished(&config, 100.0);
        assert_eq!(0, state.active);
        assert_eq!(5, state.changes);
    }

    #[test]
    fn finished_highlight_is_left_unchanged() {
        let config = HighlightConfig::new(12).with_max_duration_ms(1000.0);
        let state = run_until_finished(&config, 16.0);
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(state, advance(&state, &config, 5000.0, &mut rng));
    }

    #[test]
    fn rejects_empty_graphs_and_intervals() {
        assert_eq!(Err(ConfigError::NoNodes), HighlightConfig::new(0).validate());
        let config = HighlightConfig {
            interval_ms: 0.0,
            ..HighlightConfig::new(3)
        };
        assert_eq!(Err(ConfigError::InvalidInterval(0.0)), config.validate());
    }

    #[test]
    fn refuses_to_start_an_empty_graph() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            Err(ConfigError::NoNodes),
            HighlightState::start(&HighlightConfig::new(0), &mut rng)
        );
    }
}
