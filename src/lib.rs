//! Path animation for eye-tracking exercises.
//!
//! Each exercise moves an indicator around a drawing surface: along a path,
//! between two rows of targets, or from node to node of a graph. The host owns
//! the render loop and the drawing; it ticks an [`exercise::Engine`] once per
//! frame and draws the [`exercise::Frame`] it reports.

pub mod error;
pub mod exercise;
pub mod rotation;
pub mod simulation;
pub mod utils;

pub use error::ConfigError;
pub use exercise::{Engine, Exercise, Frame, Layout, Motion};
pub use rotation::Rotation;
