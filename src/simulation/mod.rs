pub mod animator;
pub mod config;
pub mod consts;
pub mod highlight;
pub mod obstacle;
pub mod parametric;
pub mod path;
pub mod state;
pub mod walker;
