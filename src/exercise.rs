use clap::ValueEnum;
use rand::Rng;

use crate::error::ConfigError;
use crate::simulation::animator::PathAnimator;
use crate::simulation::config::{Boundary, Config};
use crate::simulation::consts::EXERCISE_DURATION_MS;
use crate::simulation::highlight::{self, HighlightConfig, HighlightState};
use crate::simulation::obstacle::Obstacle;
use crate::simulation::parametric::{Curve, Parametric};
use crate::simulation::path::{Path, PiecewiseLinear};
use crate::simulation::state::AnimationState;
use crate::simulation::walker::{self, Axis, WalkerConfig, WalkerState};
use crate::utils::{point, Point};

const CANVAS_WIDTH: f64 = 800.0;
const CANVAS_HEIGHT: f64 = 600.0;
const GRAPH_CANVAS_WIDTH: f64 = 1000.0;
const GRAPH_CANVAS_HEIGHT: f64 = 800.0;

const CIRCLE_RADIUS: f64 = 200.0;
const CIRCLE_SPEED: f64 = 0.05;
const OBSTACLE_RING_RADIUS: f64 = 40.0;

const ZIGZAG_SEGMENTS: usize = 12;
const ZIGZAG_SPAN: f64 = 720.0;
const ZIGZAG_SPEED: f64 = 0.8;
const ZIGZAG_CYCLES: u32 = 3;

const LOOP_SIZE: f64 = 250.0;
const LOOP_SPEED: f64 = 0.02;

const STAR_RADIUS: f64 = 200.0;
const STAR_POINTS: usize = 5;
const STAR_SPEED: f64 = 0.02;

/// Graph nodes before they are centered on the canvas.
const GRAPH_NODES: [(f64, f64); 12] = [
    (150.0, 150.0),
    (300.0, 150.0),
    (450.0, 150.0),
    (600.0, 150.0),
    (150.0, 300.0),
    (300.0, 300.0),
    (450.0, 300.0),
    (600.0, 300.0),
    (150.0, 450.0),
    (300.0, 450.0),
    (450.0, 450.0),
    (600.0, 450.0),
];
const GRAPH_ORIGIN: (f64, f64) = (375.0, 300.0);
const GRAPH_EDGES: [(usize, usize); 15] = [
    (0, 1),
    (1, 4),
    (4, 5),
    (5, 2),
    (2, 3),
    (3, 6),
    (6, 7),
    (8, 6),
    (7, 11),
    (11, 6),
    (6, 9),
    (9, 4),
    (4, 8),
    (8, 5),
    (10, 7),
];

/// The eye-tracking exercises, in the order the rotation shows them.
#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Exercise {
    Circular,
    ImprovementHorizontal,
    ImprovementVertical,
    ZigzagVertical,
    ZigzagHorizontal,
    InfiniteLoop,
    Star,
    Graph,
}

impl Exercise {
    pub const ALL: [Exercise; 8] = [
        Exercise::Circular,
        Exercise::ImprovementHorizontal,
        Exercise::ImprovementVertical,
        Exercise::ZigzagVertical,
        Exercise::ZigzagHorizontal,
        Exercise::InfiniteLoop,
        Exercise::Star,
        Exercise::Graph,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Exercise::Circular => "Circular Path",
            Exercise::ImprovementHorizontal => "Eye Improvement",
            Exercise::ImprovementVertical => "Eye Improvement (Vertical)",
            Exercise::ZigzagVertical => "Zigzag Path",
            Exercise::ZigzagHorizontal => "Horizontal Zigzag Path",
            Exercise::InfiniteLoop => "Infinite Loop Eye Tracking",
            Exercise::Star => "Star Eye Tracking",
            Exercise::Graph => "Eye Training Graph",
        }
    }

    /// Width and height of the drawing surface the exercise is laid out for.
    pub fn canvas_size(&self) -> (f64, f64) {
        match self {
            Exercise::Graph => (GRAPH_CANVAS_WIDTH, GRAPH_CANVAS_HEIGHT),
            _ => (CANVAS_WIDTH, CANVAS_HEIGHT),
        }
    }

    fn center(&self) -> Point {
        let (width, height) = self.canvas_size();
        point(width / 2.0, height / 2.0)
    }

    /// Builds the exercise's motion from its fixed parameters.
    pub fn motion(&self) -> Result<Motion, ConfigError> {
        let motion = match self {
            Exercise::Circular => {
                let center = self.center();
                let path: Path = Parametric::full_turn(Curve::Circle {
                    center,
                    radius: CIRCLE_RADIUS,
                })
                .into();
                let config = Config::new(path.span(), CIRCLE_SPEED, Boundary::Wrap)
                    .with_max_duration_ms(EXERCISE_DURATION_MS);
                let obstacle = Obstacle::new(
                    point(center.x, center.y - CIRCLE_RADIUS),
                    OBSTACLE_RING_RADIUS,
                );
                Motion::Path(PathAnimator::new(path, config)?.with_obstacle(obstacle))
            }
            Exercise::ImprovementHorizontal => {
                let config = WalkerConfig::new(
                    Axis::Horizontal,
                    (1..=4).map(|i| point(50.0, 100.0 * i as f64)).collect(),
                    (1..=4).map(|i| point(750.0, 100.0 * i as f64)).collect(),
                )
                .with_max_duration_ms(EXERCISE_DURATION_MS);
                config.validate()?;
                Motion::Walker(config)
            }
            Exercise::ImprovementVertical => {
                let config = WalkerConfig::new(
                    Axis::Vertical,
                    (0..4).map(|i| point(200.0 + 150.0 * i as f64, 50.0)).collect(),
                    (0..4).map(|i| point(200.0 + 150.0 * i as f64, 550.0)).collect(),
                )
                .with_max_duration_ms(EXERCISE_DURATION_MS);
                config.validate()?;
                Motion::Walker(config)
            }
            Exercise::ZigzagVertical => {
                let waypoints = (0..=ZIGZAG_SEGMENTS)
                    .map(|i| {
                        let x = if i % 2 == 0 { 100.0 } else { 700.0 };
                        point(x, 50.0 + 50.0 * i as f64)
                    })
                    .collect();
                let path: Path = PiecewiseLinear::new(waypoints, false, ZIGZAG_SPAN)?.into();
                let config = Config::new(ZIGZAG_SPAN, ZIGZAG_SPEED, Boundary::Bounce)
                    .with_max_cycles(ZIGZAG_CYCLES);
                Motion::Path(PathAnimator::new(path, config)?)
            }
            Exercise::ZigzagHorizontal => {
                let waypoints = (0..=ZIGZAG_SEGMENTS)
                    .map(|i| {
                        let y = if i % 2 == 0 { 100.0 } else { 500.0 };
                        point(50.0 + 60.0 * i as f64, y)
                    })
                    .collect();
                let path: Path = PiecewiseLinear::new(waypoints, false, ZIGZAG_SPAN)?.into();
                let config = Config::new(ZIGZAG_SPAN, ZIGZAG_SPEED, Boundary::Bounce)
                    .with_max_duration_ms(EXERCISE_DURATION_MS);
                Motion::Path(PathAnimator::new(path, config)?)
            }
            Exercise::InfiniteLoop => {
                let path: Path = Parametric::full_turn(Curve::FigureEight {
                    center: self.center(),
                    size: LOOP_SIZE,
                })
                .into();
                let config = Config::new(path.span(), LOOP_SPEED, Boundary::Wrap)
                    .with_max_duration_ms(EXERCISE_DURATION_MS);
                Motion::Path(PathAnimator::new(path, config)?)
            }
            Exercise::Star => {
                let center = self.center();
                // Every second vertex of a pentagon, which traces a pentagram.
                let vertices = (0..STAR_POINTS)
                    .map(|i| {
                        let angle = (i as f64 * 144.0).to_radians();
                        center + STAR_RADIUS * point(angle.cos(), angle.sin())
                    })
                    .collect();
                let span = STAR_POINTS as f64;
                let path: Path = PiecewiseLinear::new(vertices, true, span)?.into();
                Motion::Path(PathAnimator::new(
                    path,
                    Config::new(span, STAR_SPEED, Boundary::Wrap),
                )?)
            }
            Exercise::Graph => {
                let config = HighlightConfig::new(GRAPH_NODES.len())
                    .with_max_duration_ms(EXERCISE_DURATION_MS);
                config.validate()?;
                Motion::Highlight {
                    config,
                    nodes: self.graph_nodes(),
                }
            }
        };
        Ok(motion)
    }

    fn graph_nodes(&self) -> Vec<Point> {
        let center = self.center();
        GRAPH_NODES
            .iter()
            .map(|&(x, y)| point(center.x + x - GRAPH_ORIGIN.0, center.y + y - GRAPH_ORIGIN.1))
            .collect()
    }

    /// The static parts of the exercise a host draws behind the moving ball.
    pub fn layout(&self) -> Result<Layout, ConfigError> {
        let layout = match self.motion()? {
            Motion::Path(animator) => Layout {
                outline: animator.path().outline(),
                markers: animator
                    .obstacle()
                    .map(|obstacle| vec![obstacle.position])
                    .unwrap_or_default(),
                edges: Vec::new(),
            },
            Motion::Walker(config) => Layout {
                outline: Vec::new(),
                markers: config.first.iter().chain(&config.second).copied().collect(),
                edges: Vec::new(),
            },
            Motion::Highlight { nodes, .. } => Layout {
                outline: Vec::new(),
                markers: nodes,
                edges: GRAPH_EDGES.to_vec(),
            },
        };
        Ok(layout)
    }

    /// A fresh engine, at the start of the exercise.
    pub fn start<R: Rng>(&self, rng: &mut R) -> Result<Engine, ConfigError> {
        Engine::new(self.motion()?, rng)
    }
}

/// Static drawing data for an exercise.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Polyline of the path the ball follows, if any.
    pub outline: Vec<Point>,
    /// Fixed markers: the obstacle, the walker's waypoints, or the graph's nodes.
    pub markers: Vec<Point>,
    /// Pairs of marker indices to join with lines.
    pub edges: Vec<(usize, usize)>,
}

/// The motion rule behind an exercise.
#[derive(Debug, Clone, PartialEq)]
pub enum Motion {
    /// A ball following a path, optionally reversing off an obstacle.
    Path(PathAnimator),
    Walker(WalkerConfig),
    Highlight {
        config: HighlightConfig,
        nodes: Vec<Point>,
    },
}

/// What a host needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Where to draw the moving ball, or the highlighted node.
    pub indicator: Point,
    pub highlighted: Option<usize>,
    pub finished: bool,
}

/// An exercise's motion together with its current state.
#[derive(Debug, Clone, PartialEq)]
pub enum Engine {
    Path {
        animator: PathAnimator,
        state: AnimationState,
    },
    Walker {
        config: WalkerConfig,
        state: WalkerState,
    },
    Highlight {
        config: HighlightConfig,
        nodes: Vec<Point>,
        state: HighlightState,
    },
}

impl Engine {
    /// Starts `motion` from the beginning, rejecting a config that could not run.
    pub fn new<R: Rng>(motion: Motion, rng: &mut R) -> Result<Engine, ConfigError> {
        let engine = match motion {
            Motion::Path(animator) => Engine::Path {
                animator,
                state: AnimationState::new(),
            },
            Motion::Walker(config) => {
                let state = WalkerState::start(&config)?;
                Engine::Walker { config, state }
            }
            Motion::Highlight { config, nodes } => {
                if nodes.len() != config.node_count {
                    return Err(ConfigError::NodeCountMismatch {
                        expected: config.node_count,
                        actual: nodes.len(),
                    });
                }
                let state = HighlightState::start(&config, rng)?;
                Engine::Highlight {
                    config,
                    nodes,
                    state,
                }
            }
        };
        Ok(engine)
    }

    pub fn tick<R: Rng>(&mut self, dt_ms: f64, rng: &mut R) {
        match self {
            Engine::Path { animator, state } => *state = animator.tick(state, dt_ms),
            Engine::Walker { config, state } => *state = walker::advance(state, config, dt_ms),
            Engine::Highlight { config, state, .. } => {
                *state = highlight::advance(state, config, dt_ms, rng)
            }
        }
    }

    pub fn frame(&self) -> Frame {
        match self {
            Engine::Path { animator, state } => Frame {
                indicator: animator.position(state),
                highlighted: None,
                finished: state.finished,
            },
            Engine::Walker { state, .. } => Frame {
                indicator: state.position,
                highlighted: None,
                finished: state.finished,
            },
            Engine::Highlight { nodes, state, .. } => Frame {
                indicator: nodes[state.active],
                highlighted: Some(state.active),
                finished: state.finished,
            },
        }
    }

    pub fn is_finished(&self) -> bool {
        match self {
            Engine::Path { state, .. } => state.finished,
            Engine::Walker { state, .. } => state.finished,
            Engine::Highlight { state, .. } => state.finished,
        }
    }
}
