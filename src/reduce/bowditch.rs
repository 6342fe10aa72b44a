//! Bowditch (compass) rule: the linear misclosure is distributed
//! over the lines in proportion to their lengths.

use log::{debug, warn};

use crate::station::Consecutive;

use super::misclosure::Misclosure;

/// The share of the misclosure `sum` that goes to a line: `-sum * length / total`
pub fn correction(sum: f64, length: f64, total: f64) -> f64 {
    -sum * length / total
}

/// Apply the signed correction to the non-zero member of an opposing pair
/// (`positive` if it is non-zero, `negative` otherwise).
///
/// A negative result is clamped to zero and the residual is dropped.
fn apply(positive: f64, negative: f64, correction: f64, pair: &str) -> (f64, f64) {
    let (positive, negative) = if positive > 0.0 {
        (positive + correction, negative)
    } else {
        (positive, negative - correction)
    };

    (clamp(positive, pair), clamp(negative, pair))
}

fn clamp(value: f64, pair: &str) -> f64 {
    if value < 0.0 {
        warn!(
            "Bowditch correction overshoots the {} component by {:.6} m, clamped to zero",
            pair, -value
        );
        0.0
    } else {
        value
    }
}

/// Corrected projections of a single line
pub fn adjust(line: &Consecutive, length: f64, misclosure: &Misclosure) -> Consecutive {
    let corr_lat = correction(misclosure.sum_lat, length, misclosure.total_length);
    let corr_dep = correction(misclosure.sum_dep, length, misclosure.total_length);

    let (northing, southing) = apply(line.northing, line.southing, corr_lat, "north-south");
    let (easting, westing) = apply(line.easting, line.westing, corr_dep, "east-west");

    Consecutive {
        northing,
        southing,
        easting,
        westing,
    }
}

/// Corrected projections of every line (the slices are zipped)
pub fn adjust_all(lengths: &[f64], lines: &[Consecutive], misclosure: &Misclosure) -> Vec<Consecutive> {
    lengths
        .iter()
        .zip(lines)
        .enumerate()
        .map(|(i, (&length, line))| {
            debug!(
                "Line {}: proportion {:.6}, latitude correction {:+.6}, departure correction {:+.6}",
                i,
                length / misclosure.total_length,
                correction(misclosure.sum_lat, length, misclosure.total_length),
                correction(misclosure.sum_dep, length, misclosure.total_length),
            );
            adjust(line, length, misclosure)
        })
        .collect()
}
