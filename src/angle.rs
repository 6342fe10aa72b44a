//! Sexagesimal angles and survey bearings

use traverse_types::consts::FULL_TURN_DEG;

pub mod bearing;
pub mod dms;
mod parse;

/// Wrap an angle given in degrees into the whole circle range `[0, 360)`
pub fn normalize(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(FULL_TURN_DEG);
    // `rem_euclid` of a tiny negative number rounds up to the full turn
    if wrapped >= FULL_TURN_DEG {
        0.0
    } else {
        wrapped
    }
}
