//! Per-frame transforms behind the site's decorative widgets.
//!
//! Everything here is a pure function of its inputs; callers own the clock,
//! the pointer and the scroll position.

mod cursor;
mod parallax;
mod splash;
mod tilt;
mod typewriter;

pub use cursor::*;
pub use parallax::*;
pub use splash::*;
pub use tilt::*;
pub use typewriter::*;

/// Piecewise-linear interpolation over `(input, output)` stops, clamped at both ends.
pub(crate) fn interpolate(value: f64, stops: &[(f64, f64)]) -> f64 {
    let Some(&(first_in, first_out)) = stops.first() else {
        return value;
    };
    if value <= first_in {
        return first_out;
    }

    for pair in stops.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        if value <= to.0 {
            let span = to.0 - from.0;
            if span <= f64::EPSILON {
                return to.1;
            }
            return from.1 + (value - from.0) / span * (to.1 - from.1);
        }
    }

    stops.last().map(|&(_, out)| out).unwrap_or(value)
}
