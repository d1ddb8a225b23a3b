use cgmath::Vector2;
use itertools::Itertools;

/// A position on the drawing surface, x to the right and y down.
pub type Point = Vector2<f64>;

pub fn point(x: f64, y: f64) -> Point {
    Vector2::new(x, y)
}

/// Linear interpolation from `start` to `end`, where fraction 0.0 is `start`
/// and 1.0 is `end`.
pub fn lerp(start: Point, end: Point, fraction: f64) -> Point {
    start + (end - start) * fraction
}

/// True when `a` and `b` are closer than `epsilon` on both axes.
pub fn within_box(a: Point, b: Point, epsilon: f64) -> bool {
    (a.x - b.x).abs() < epsilon && (a.y - b.y).abs() < epsilon
}

/// Samples `f` at `steps + 1` evenly spaced values across `start..=end`.
/// Hosts use this to stroke the outline of a curve.
pub fn sample_evenly<F>(start: f64, end: f64, steps: usize, f: F) -> Vec<Point>
where
    F: Fn(f64) -> Point,
{
    if steps == 0 {
        return vec![f(start)];
    }
    (0..=steps)
        .map(|i| f(start + (end - start) * i as f64 / steps as f64))
        .collect_vec()
}
