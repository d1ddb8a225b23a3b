use clap::Parser;

use eyepath::simulation::consts::FRAME_MS;
use eyepath::{Exercise, Rotation};

#[derive(Parser)]
#[clap(about = "Runs eye-tracking exercises headless and logs what a renderer would draw")]
pub struct EyepathArgs {
    /// The exercise to run. Runs every exercise in rotation if omitted.
    #[clap(value_enum)]
    pub exercise: Option<Exercise>,

    /// Length of one frame, in milliseconds.
    #[clap(long, default_value_t = FRAME_MS)]
    pub frame_ms: f64,

    /// Stop after this many frames.
    #[clap(long)]
    pub frames: Option<u64>,

    /// Seed for the random number generator, for reproducible runs.
    #[clap(long)]
    pub seed: Option<u64>,

    /// Log the current frame every this many frames.
    #[clap(long, default_value_t = 60)]
    pub report_every: u64,

    /// Milliseconds before the rotation moves on to the next exercise.
    #[clap(long, default_value_t = Rotation::INTERVAL_MS_DEFAULT)]
    pub rotate_ms: f64,
}
