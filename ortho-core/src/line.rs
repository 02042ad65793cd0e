/// Line interpolation on the integer grid
use nalgebra::Point2;

/// A cell on the 2D grid
pub type GridPoint = Point2<i64>;

/// Walk the straight segment from `from` to `to`, one cell per step along the
/// major axis.
///
/// Samples are taken at `i / steps` for `i` in `0..=steps` and rounded half to
/// even, so the result always starts at `from`, ends at `to`, and holds
/// `max(|dx|, |dy|) + 1` cells. Deltas saturate at the `i64` bounds.
pub fn interpolate(from: GridPoint, to: GridPoint) -> Vec<GridPoint> {
    let dx = to.x.saturating_sub(from.x);
    let dy = to.y.saturating_sub(from.y);
    let steps = dx.unsigned_abs().max(dy.unsigned_abs());

    if steps == 0 {
        return vec![from];
    }

    let steps_f = steps as f64;
    (0..=steps)
        .map(|i| {
            if i == 0 {
                return from;
            }
            if i == steps {
                return to;
            }
            let t = i as f64;
            let x = from.x as f64 + (dx as f64 * t) / steps_f;
            let y = from.y as f64 + (dy as f64 * t) / steps_f;
            GridPoint::new(x.round_ties_even() as i64, y.round_ties_even() as i64)
        })
        .collect()
}
