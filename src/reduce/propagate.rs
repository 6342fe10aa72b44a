//! Carrying the whole circle bearing around the traverse ring

use log::debug;
use traverse_types::{
    consts::{FULL_TURN_DEG, HALF_TURN_DEG},
    TraverseDirection,
};

use crate::{
    angle::bearing::Bearing,
    utils::{ring_next, ring_prev},
};

/// The bearing of the line leaving the station from the bearing of the line
/// leaving the previous station and the interior angle at the station:
/// - clockwise: `previous + 180 - interior`;
/// - anti-clockwise: `previous + interior - 180`.
///
/// The result is in `[0, 360)` provided the inputs are within a turn.
pub fn next_bearing(previous: f64, interior: f64, direction: TraverseDirection) -> f64 {
    let bearing = match direction {
        TraverseDirection::Clockwise => previous + HALF_TURN_DEG - interior,
        TraverseDirection::AntiClockwise => previous + interior - HALF_TURN_DEG,
    };
    wrap_once(bearing)
}

fn wrap_once(mut bearing: f64) -> f64 {
    if bearing >= FULL_TURN_DEG {
        bearing -= FULL_TURN_DEG;
    }
    if bearing < 0.0 {
        bearing += FULL_TURN_DEG;
    }
    bearing
}

/// Walk the ring once, starting right after the `reference` station
/// whose bearing is known. The reference bearing itself is never overwritten.
///
/// The `reference` index should be less than the number of angles.
pub fn propagate(
    corrected_angles: &[f64],
    reference: usize,
    reference_bearing: Bearing,
    direction: TraverseDirection,
) -> Vec<Bearing> {
    let stations = corrected_angles.len();
    debug_assert!(reference < stations);

    debug!("Traverse direction: {}", direction);
    let mut bearings = vec![reference_bearing; stations];
    let mut index = reference;
    for _ in 1..stations {
        index = ring_next(index, stations);
        let previous = bearings[ring_prev(index, stations)].decimal_degrees();
        let interior = corrected_angles[index];
        let bearing = next_bearing(previous, interior, direction);

        debug!(
            "Station #{}: {:.3}° ({} {:.3}°) -> {:.3}°",
            index + 1,
            previous,
            direction,
            interior,
            bearing
        );
        bearings[index] = Bearing::whole_circle(bearing);
    }

    bearings
}
