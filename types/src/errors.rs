use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

use crate::quadrant::ParseQuadrantError;

/// Some part of an angle does not fit its allowed range
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum OutOfRange {
    /// whole circle bearing >= 360
    #[error("Whole circle bearing should be less than 360 degrees")]
    Degrees,
    /// quadrantal angle > 90
    #[error("Only right angles or less (<=90) are allowed in a quadrantal bearing, but obtuse one provided")]
    ObtuseAngle,
    /// min >= 60
    #[error("Angle's arc minute value not in range [0..60)")]
    ArcMinutes,
    /// sec >= 60
    #[error("Angle's arc second value not in range [0..60)")]
    ArcSeconds,
    /// negative, NaN or infinite parts
    #[error("Angle should be a finite non-negative number")]
    Negative,
    /// whole degrees do not fit `u32`
    #[error("Angle is too large to be split into degrees, minutes and seconds")]
    Overflow,
}

/// The angle cannot be read from its textual notation
#[derive(Debug, Error)]
pub enum ParseAngleError {
    /// The notation is fine but the value is not
    #[error("Cannot parse angle: {0}")]
    Range(#[from] OutOfRange),
    /// Bad decimal number
    #[error("Cannot parse angle: {0}")]
    Float(#[from] ParseFloatError),
    // this variant is practically impossible due to regex digits limitations
    /// Bad integer part
    #[error("Cannot parse angle: {0}")]
    Int(#[from] ParseIntError),
    /// Neither a number nor a Degree-Minute-Second notation
    #[error("Cannot parse angle: not a Degree-Minute-Second notation")]
    DmsNotation,
    /// The quadrant letters are missing or malformed
    #[error("Cannot parse angle: {0}")]
    Quadrant(#[from] ParseQuadrantError),
}
