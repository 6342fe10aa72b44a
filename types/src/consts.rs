//! Angular constants shared by the traverse crates

/// Arc minutes in one degree
pub const MINUTES_IN_DEGREE: u8 = 60;
/// Arc seconds in one arc minute
pub const SECONDS_IN_MINUTE: u8 = 60;
/// Arc seconds in one degree
pub const SECONDS_IN_DEGREE: u32 = MINUTES_IN_DEGREE as u32 * SECONDS_IN_MINUTE as u32;

/// Degree sign used when printing angles
pub const DEGREE_SIGN: char = '°';
/// Prime sign used for arc minutes
pub const ARC_MINUTE_SIGN: char = '′';
/// Double prime sign used for arc seconds
pub const ARC_SECOND_SIGN: char = '″';

/// A complete turn in degrees
pub const FULL_TURN_DEG: f64 = 360.0;
/// A straight angle in degrees
pub const HALF_TURN_DEG: f64 = FULL_TURN_DEG / 2.0;
/// A right angle in degrees
pub const QUARTER_TURN_DEG: f64 = HALF_TURN_DEG / 2.0;
/// Three right angles in degrees (start of the north-west quadrant)
pub const THREE_QUARTER_TURN_DEG: f64 = HALF_TURN_DEG + QUARTER_TURN_DEG;
