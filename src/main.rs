mod args;

use anyhow::{ensure, Context, Result};
use args::EyepathArgs;
use clap::Parser;
use eyepath::{Engine, Exercise, Rotation};
use log::info;
use rand::{rngs::StdRng, SeedableRng};

fn main() -> Result<()> {
    env_logger::init();
    let args = EyepathArgs::parse();
    ensure!(
        args.frame_ms > 0.0 && args.frame_ms.is_finite(),
        "frame length must be positive, got {} ms",
        args.frame_ms
    );
    ensure!(args.report_every > 0, "--report-every must be at least 1");

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match args.exercise {
        Some(exercise) => run_exercise(exercise, &args, &mut rng),
        None => run_rotation(&args, &mut rng),
    }
}

fn start(exercise: Exercise, rng: &mut StdRng) -> Result<Engine> {
    let engine = exercise
        .start(rng)
        .with_context(|| format!("Failed to set up {}", exercise.title()))?;
    let layout = exercise.layout()?;
    let (width, height) = exercise.canvas_size();
    info!(
        "{} on a {}x{} canvas: {} outline points, {} markers, {} edges",
        exercise.title(),
        width,
        height,
        layout.outline.len(),
        layout.markers.len(),
        layout.edges.len()
    );
    Ok(engine)
}

fn report(frame_number: u64, engine: &Engine) {
    let frame = engine.frame();
    match frame.highlighted {
        Some(node) => info!(
            "frame {}: node {} highlighted at ({:.1}, {:.1})",
            frame_number, node, frame.indicator.x, frame.indicator.y
        ),
        None => info!(
            "frame {}: ball at ({:.1}, {:.1})",
            frame_number, frame.indicator.x, frame.indicator.y
        ),
    }
}

/// Ticks one exercise until it finishes or the frame limit is reached.
fn run_exercise(exercise: Exercise, args: &EyepathArgs, rng: &mut StdRng) -> Result<()> {
    let mut engine = start(exercise, rng)?;
    let mut frame_number = 0;
    while !engine.is_finished() && args.frames.map_or(true, |limit| frame_number < limit) {
        engine.tick(args.frame_ms, rng);
        frame_number += 1;
        if frame_number % args.report_every == 0 {
            report(frame_number, &engine);
        }
    }

    if engine.is_finished() {
        println!(
            "{}: Game Over after {} frames ({:.1} s)",
            exercise.title(),
            frame_number,
            frame_number as f64 * args.frame_ms / 1000.0
        );
    } else {
        println!("{}: stopped after {} frames", exercise.title(), frame_number);
    }
    Ok(())
}

/// Runs the rotation, swapping in a fresh engine whenever the exercise changes.
/// Without a frame limit, stops once every exercise has had its turn.
fn run_rotation(args: &EyepathArgs, rng: &mut StdRng) -> Result<()> {
    let mut rotation = Rotation::new(Exercise::ALL.to_vec(), args.rotate_ms)
        .context("Invalid --rotate-ms")?;
    let frames = args.frames.unwrap_or_else(|| {
        (rotation.len() as f64 * args.rotate_ms / args.frame_ms).ceil() as u64
    });

    info!("{}", rotation.label());
    let mut engine = start(rotation.current(), rng)?;
    for frame_number in 1..=frames {
        if let Some(exercise) = rotation.tick(args.frame_ms) {
            engine = start(exercise, rng)?;
            continue;
        }
        if engine.is_finished() {
            continue;
        }
        engine.tick(args.frame_ms, rng);
        if engine.is_finished() {
            println!("{}: Game Over", rotation.current().title());
        } else if frame_number % args.report_every == 0 {
            report(frame_number, &engine);
        }
    }
    Ok(())
}
