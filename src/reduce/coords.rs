//! Independent coordinates of the stations

use crate::station::{Consecutive, Coordinate};

/// Independent coordinates of the first station
pub const ORIGIN: Coordinate = Coordinate::new(1000.0, 1000.0);

/// Chain the corrected projections into absolute coordinates.
///
/// The first station sits at the [`ORIGIN`]; every next one is
/// its predecessor shifted by the station's own corrected projections.
pub fn accumulate(lines: &[Consecutive]) -> Vec<Coordinate> {
    let mut coords = Vec::with_capacity(lines.len());
    let mut current = ORIGIN;
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            current = current.advance(line);
        }
        coords.push(current);
    }
    coords
}

/// The point reached after walking along every corrected line from the origin,
/// relative to the origin. Zero for a properly closed ring.
pub fn closing_offset(lines: &[Consecutive]) -> Coordinate {
    lines.iter().fold(Coordinate::default(), |point, line| point.advance(line))
}
