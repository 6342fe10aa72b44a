//! Per-station records produced by the traverse reduction

use serde::Serialize;

use crate::{angle::bearing::Bearing, utils::split_signed};

/// Unidirectional projections of a traverse line (all non-negative).
///
/// Of each opposing pair (northing/southing, easting/westing)
/// at most one is non-zero.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize)]
pub struct Consecutive {
    /// Projection to the north
    pub northing: f64,
    /// Projection to the south
    pub southing: f64,
    /// Projection to the east
    pub easting: f64,
    /// Projection to the west
    pub westing: f64,
}

impl Consecutive {
    /// Decompose the signed latitude and departure
    pub fn from_projections(latitude: f64, departure: f64) -> Self {
        let (northing, southing) = split_signed(latitude);
        let (easting, westing) = split_signed(departure);
        Self {
            northing,
            southing,
            easting,
            westing,
        }
    }

    /// The signed north-south projection
    pub fn latitude(&self) -> f64 {
        self.northing - self.southing
    }

    /// The signed east-west projection
    pub fn departure(&self) -> f64 {
        self.easting - self.westing
    }

    /// Component-wise difference `self - other`
    pub fn difference(&self, other: &Self) -> Self {
        Self {
            northing: self.northing - other.northing,
            southing: self.southing - other.southing,
            easting: self.easting - other.easting,
            westing: self.westing - other.westing,
        }
    }
}

/// Independent (absolute) planar coordinate
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize)]
pub struct Coordinate {
    /// Distance to the north from the grid origin
    pub northing: f64,
    /// Distance to the east from the grid origin
    pub easting: f64,
}

impl Coordinate {
    /// Construct a coordinate
    pub const fn new(northing: f64, easting: f64) -> Self {
        Self { northing, easting }
    }

    /// The coordinate shifted by the line
    pub fn advance(self, line: &Consecutive) -> Self {
        Self {
            northing: self.northing + line.latitude(),
            easting: self.easting + line.departure(),
        }
    }
}

/// Observed interior angle and its closure adjustment, decimal degrees
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct InteriorAngle {
    /// As measured in the field
    pub observed: f64,
    /// Share of the angular misclosure (signed)
    pub correction: f64,
    /// `observed + correction`
    pub corrected: f64,
}

/// A fully reduced traverse vertex together with the line to the next one
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    /// Station identifier
    pub name: String,
    /// Horizontal distance to the next station, meters
    pub line_length: f64,
    /// The working bearing of the line: as observed for a bearings traverse,
    /// propagated from the reference one for an interior angles traverse
    pub fore_bearing: Bearing,
    /// The bearing used for the reduction
    pub corrected_bearing: Bearing,
    /// Present only for an interior angles traverse
    pub interior_angle: Option<InteriorAngle>,
    /// Signed north-south projection of the line
    pub latitude: f64,
    /// Signed east-west projection of the line
    pub departure: f64,
    /// Raw projections
    pub consecutive: Consecutive,
    /// Projections after the Bowditch adjustment
    pub corrected: Consecutive,
    /// Independent coordinates
    pub independent: Coordinate,
}

impl Station {
    /// How much the Bowditch adjustment moved every projection
    pub fn consecutive_correction(&self) -> Consecutive {
        self.corrected.difference(&self.consecutive)
    }
}
