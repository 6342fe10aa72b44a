//! Survey bearings in the whole circle and in the quadrantal systems.
//! <https://en.wikipedia.org/wiki/Bearing_(angle)>

use std::fmt;

use serde::Serialize;
use traverse_types::{
    consts::{FULL_TURN_DEG, HALF_TURN_DEG, QUARTER_TURN_DEG},
    OutOfRange, Quadrant,
};

use super::{dms::Dms, normalize};

/// Whole circle bearing of the quadrantal one: the `angle` is measured
/// from the meridian (north or south) towards the east or west.
pub fn quadrant_to_whole(angle: f64, quadrant: Quadrant) -> f64 {
    match quadrant {
        Quadrant::NorthEast => angle,
        Quadrant::SouthEast => HALF_TURN_DEG - angle,
        Quadrant::SouthWest => HALF_TURN_DEG + angle,
        Quadrant::NorthWest => FULL_TURN_DEG - angle,
    }
}

/// Quadrantal bearing of the whole circle one (expected in `[0, 360)`)
pub fn whole_to_quadrant(whole_circle: f64) -> QuadrantBearing {
    let quadrant = Quadrant::classify(whole_circle);
    let angle = match quadrant {
        Quadrant::NorthEast => whole_circle,
        Quadrant::SouthEast => HALF_TURN_DEG - whole_circle,
        Quadrant::SouthWest => whole_circle - HALF_TURN_DEG,
        Quadrant::NorthWest => FULL_TURN_DEG - whole_circle,
    };

    QuadrantBearing {
        angle: Dms::from_decimal_degrees(angle),
        quadrant,
    }
}

/// Direction of a traverse line as the whole circle bearing.
///
/// The decimal value, its DMS split and the quadrant are always kept in sync:
/// the only way to get a bearing is to provide a single angle.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Bearing {
    decimal_degrees: f64,
    dms: Dms,
    quadrant: Quadrant,
}

impl Default for Bearing {
    fn default() -> Self {
        Self::north()
    }
}

impl Bearing {
    /// Construct a bearing from any angle in degrees, wrapping it into `[0, 360)`.
    ///
    /// A value that prints as the full turn in DMS is snapped to the north.
    pub fn whole_circle(decimal_degrees: f64) -> Self {
        let decimal_degrees = normalize(decimal_degrees);
        let dms = Dms::from_decimal_degrees(decimal_degrees);
        let (decimal_degrees, dms) = if f64::from(dms.displayed_degrees()) >= FULL_TURN_DEG {
            (0.0, Dms::default())
        } else {
            (decimal_degrees, dms)
        };

        Self {
            decimal_degrees,
            dms,
            quadrant: Quadrant::classify(decimal_degrees),
        }
    }

    /// Zero bearing
    pub fn north() -> Self {
        Self::whole_circle(0.0)
    }

    /// Construct an observed whole circle bearing.
    ///
    /// # Errors
    /// The angle should be less than a full turn.
    pub fn with_dms(angle: Dms) -> Result<Self, OutOfRange> {
        let decimal_degrees = angle.decimal_degrees();
        if decimal_degrees >= FULL_TURN_DEG {
            return Err(OutOfRange::Degrees);
        }
        Ok(Self::whole_circle(decimal_degrees))
    }

    /// Construct an observed quadrantal bearing.
    ///
    /// # Errors
    /// The angle from the meridian should not exceed the right angle.
    pub fn quadrantal(angle: Dms, quadrant: Quadrant) -> Result<Self, OutOfRange> {
        QuadrantBearing::new(angle, quadrant).map(QuadrantBearing::to_whole_circle)
    }

    /// The whole circle bearing in `[0, 360)`
    pub fn decimal_degrees(self) -> f64 {
        self.decimal_degrees
    }

    /// The whole circle bearing in `[0, 2π)`
    pub fn to_radians(self) -> f64 {
        self.decimal_degrees.to_radians()
    }

    /// The whole circle bearing as degrees, minutes and seconds
    pub fn dms(self) -> Dms {
        self.dms
    }

    /// The quadrant the bearing points into
    pub fn quadrant(self) -> Quadrant {
        self.quadrant
    }

    /// The same direction in the quadrantal system
    pub fn to_quadrantal(self) -> QuadrantBearing {
        whole_to_quadrant(self.decimal_degrees)
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{:#}", self.to_quadrantal())
        } else {
            write!(f, "{}", self.dms)
        }
    }
}

/// The angle `0..=90` measured from the north or south towards the east or west
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct QuadrantBearing {
    angle: Dms,
    quadrant: Quadrant,
}

impl QuadrantBearing {
    /// Construct a quadrantal bearing.
    ///
    /// # Errors
    /// The angle from the meridian should not exceed the right angle.
    pub fn new(angle: Dms, quadrant: Quadrant) -> Result<Self, OutOfRange> {
        if angle.decimal_degrees() > QUARTER_TURN_DEG {
            return Err(OutOfRange::ObtuseAngle);
        }
        Ok(Self { angle, quadrant })
    }

    /// The angle from the meridian
    pub fn angle(self) -> Dms {
        self.angle
    }

    /// The quadrant label
    pub fn quadrant(self) -> Quadrant {
        self.quadrant
    }

    /// The same direction in the whole circle system
    pub fn to_whole_circle(self) -> Bearing {
        Bearing::whole_circle(quadrant_to_whole(
            self.angle.decimal_degrees(),
            self.quadrant,
        ))
    }
}

impl fmt::Display for QuadrantBearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // surveyor's notation
        if f.alternate() {
            write!(
                f,
                "{}{:#}{}",
                self.quadrant.meridian(),
                self.angle,
                self.quadrant.side()
            )
        } else {
            write!(f, "{} {}", self.angle, self.quadrant)
        }
    }
}
