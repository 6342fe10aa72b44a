//! Resolving the traverse lines into latitudes and departures

use serde::Serialize;

use crate::{angle::bearing::Bearing, station::Consecutive};

/// Signed projections of a line onto the north and the east axes, meters
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize)]
pub struct LatDep {
    /// `length * cos(bearing)`
    pub latitude: f64,
    /// `length * sin(bearing)`
    pub departure: f64,
}

impl LatDep {
    /// Project the line of the given length and bearing
    pub fn resolve(length: f64, bearing: Bearing) -> Self {
        let (sin, cos) = bearing.to_radians().sin_cos();
        Self {
            latitude: length * cos,
            departure: length * sin,
        }
    }

    /// Unidirectional components: northing or southing, easting or westing
    pub fn consecutive(self) -> Consecutive {
        Consecutive::from_projections(self.latitude, self.departure)
    }
}

/// Project every line with its bearing (the slices are zipped)
pub fn resolve_all(lengths: &[f64], bearings: &[Bearing]) -> Vec<LatDep> {
    lengths
        .iter()
        .zip(bearings)
        .map(|(&length, &bearing)| LatDep::resolve(length, bearing))
        .collect()
}
