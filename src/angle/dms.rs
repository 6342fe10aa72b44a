//! Degrees, minutes and seconds of arc.
//! <https://en.wikipedia.org/wiki/Minute_and_second_of_arc>
//!
//! The decimal to sexagesimal split is done with integer arithmetic
//! on a micro-arcsecond grid, so the floating dust of the decimal value
//! never turns 20′ into 19′59.99999″.

use std::{convert::TryFrom, fmt};

use serde::Serialize;
use traverse_types::{
    consts::{
        ARC_MINUTE_SIGN, ARC_SECOND_SIGN, DEGREE_SIGN, MINUTES_IN_DEGREE, SECONDS_IN_DEGREE,
        SECONDS_IN_MINUTE,
    },
    OutOfRange,
};

use crate::utils::div_mod;

/// Decimal degrees from the sexagesimal parts: `d + m/60 + s/3600`.
///
/// No range checks are made: the parts are expected to be non-negative
/// (or all of the same sign).
pub fn to_decimal_degrees(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    degrees + minutes / f64::from(MINUTES_IN_DEGREE) + seconds / f64::from(SECONDS_IN_DEGREE)
}

/// Non-negative angle as whole degrees, whole arc minutes and (fractional) arc seconds.
///
/// The degrees are not limited by the full turn, so that sums of interior angles
/// can be represented as well.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default, Serialize)]
pub struct Dms {
    degrees: u32,
    minutes: u8,
    seconds: f64,
}

impl Dms {
    // the number of arcseconds's decimal digits kept by the decimal split
    const SECONDS_FD: u32 = 6;
    // the number of arcseconds's decimal digits printed
    const DISPLAY_FD: u32 = 2;

    /// Degree, minute, second
    ///
    /// # Errors
    /// When minutes or seconds are not in `[0, 60)`
    /// or the seconds are negative or not finite.
    pub fn new(degrees: u32, minutes: u8, seconds: f64) -> Result<Self, OutOfRange> {
        if minutes >= MINUTES_IN_DEGREE {
            return Err(OutOfRange::ArcMinutes);
        }

        if !seconds.is_finite() || seconds < 0.0 {
            return Err(OutOfRange::Negative);
        }

        if seconds >= f64::from(SECONDS_IN_MINUTE) {
            return Err(OutOfRange::ArcSeconds);
        }

        Ok(Self {
            degrees,
            minutes,
            seconds,
        })
    }

    /// Split the decimal degrees: `d = floor(x)`, `m = floor(frac * 60)`, `s = rest * 60`.
    ///
    /// The value should be non-negative: negative (and NaN) values saturate to zero,
    /// the signs of corrections have to be carried separately.
    pub fn from_decimal_degrees(decimal: f64) -> Self {
        let scale = 10_u64.pow(Self::SECONDS_FD);
        let (degrees, minutes, seconds, fraction) = split(decimal, scale);
        Self {
            degrees,
            minutes,
            seconds: f64::from(seconds) + fraction as f64 / scale as f64,
        }
    }

    /// Same as [`from_decimal_degrees`](Self::from_decimal_degrees) but rejects
    /// the values which cannot be split.
    ///
    /// # Errors
    /// When the value is negative, infinite or NaN,
    /// or when the whole degrees do not fit the `u32`.
    pub fn try_from_decimal_degrees(decimal: f64) -> Result<Self, OutOfRange> {
        if !(decimal.is_finite() && decimal >= 0.0) {
            return Err(OutOfRange::Negative);
        }
        if decimal >= f64::from(u32::MAX) {
            return Err(OutOfRange::Overflow);
        }
        Ok(Self::from_decimal_degrees(decimal))
    }

    /// The whole number of degrees in the angle
    pub fn degrees(self) -> u32 {
        self.degrees
    }

    /// The whole number of degrees as printed, after the seconds are rounded
    pub fn displayed_degrees(self) -> u32 {
        split(self.decimal_degrees(), 10_u64.pow(Self::DISPLAY_FD)).0
    }

    /// The arc minutes component of the angle.
    pub fn minutes(self) -> u8 {
        self.minutes
    }

    /// The arc seconds component of the angle (with the fraction).
    pub fn seconds(self) -> f64 {
        self.seconds
    }

    /// The same angle in decimal degrees
    pub fn decimal_degrees(self) -> f64 {
        to_decimal_degrees(
            f64::from(self.degrees),
            f64::from(self.minutes),
            self.seconds,
        )
    }
}

/// Split the non-negative decimal degrees into whole degrees, minutes, seconds
/// and the fraction of a second measured in `1 / scale` units.
fn split(decimal: f64, scale: u64) -> (u32, u8, u8, u64) {
    let units = (decimal.max(0.0) * f64::from(SECONDS_IN_DEGREE) * scale as f64).round() as u64;

    let (total_seconds, fraction) = div_mod(units, scale);
    let (total_minutes, seconds) = div_mod(total_seconds, u64::from(SECONDS_IN_MINUTE));
    let (degrees, minutes) = div_mod(total_minutes, u64::from(MINUTES_IN_DEGREE));

    // saturate instead of wrapping around
    let degrees = u32::try_from(degrees).unwrap_or(u32::MAX);
    (degrees, minutes as u8, seconds as u8, fraction)
}

impl TryFrom<(u32, u8, f64)> for Dms {
    type Error = OutOfRange;

    fn try_from(value: (u32, u8, f64)) -> Result<Self, Self::Error> {
        let (deg, min, sec) = value;
        Self::new(deg, min, sec)
    }
}

impl TryFrom<(u32, u8)> for Dms {
    type Error = OutOfRange;

    fn try_from(value: (u32, u8)) -> Result<Self, Self::Error> {
        let (deg, min) = value;
        Self::new(deg, min, 0.0)
    }
}

impl From<u32> for Dms {
    fn from(degrees: u32) -> Self {
        Self {
            degrees,
            ..Self::default()
        }
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = 10_u64.pow(Self::DISPLAY_FD);
        let (deg, arc_min, arc_sec, fraction) = split(self.decimal_degrees(), scale);

        // compact form
        if f.alternate() {
            write!(f, "{}{}", deg, DEGREE_SIGN)?;

            if (arc_min != 0) || (arc_sec != 0) || (fraction != 0) {
                write!(f, "{}{}", arc_min, ARC_MINUTE_SIGN)?;
            }

            if (arc_sec != 0) || (fraction != 0) {
                if fraction == 0 {
                    write!(f, "{}{}", arc_sec, ARC_SECOND_SIGN)
                } else {
                    let arc_sec = f64::from(arc_sec) + fraction as f64 / scale as f64;
                    write!(f, "{}{}", arc_sec, ARC_SECOND_SIGN)
                }
            } else {
                Ok(())
            }
        } else {
            write!(
                f,
                "{}{}{:02}{}{:02}.{:0width$}{}",
                deg,
                DEGREE_SIGN,
                arc_min,
                ARC_MINUTE_SIGN,
                arc_sec,
                fraction,
                ARC_SECOND_SIGN,
                width = Self::DISPLAY_FD as usize
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_from_parts() {
        assert_eq!(to_decimal_degrees(10.0, 30.0, 0.0), 10.5);
        assert_eq!(to_decimal_degrees(0.0, 0.0, 36.0), 0.01);
        assert_eq!(to_decimal_degrees(2.0, 0.0, 0.0), 2.0);
    }

    #[test]
    fn default() {
        let zero = Dms::default();
        assert_eq!(zero.degrees(), 0);
        assert_eq!(zero.minutes(), 0);
        assert_eq!(zero.seconds(), 0.0);
        assert_eq!(zero.decimal_degrees(), 0.0);
    }

    #[test]
    fn intermediate() {
        let angle = Dms::new(66, 33, 48.0).unwrap();
        assert_eq!(angle.degrees(), 66);
        assert_eq!(angle.minutes(), 33);
        assert!((angle.decimal_degrees() - 66.563_333_333).abs() < 1e-9);
    }

    #[test]
    fn more_than_full_turn_is_valid() {
        let sum = Dms::from(540);
        assert_eq!(sum.decimal_degrees(), 540.0);
        assert_eq!(sum.to_string(), "540°00′00.00″");
    }

    #[test]
    #[should_panic(expected = "ArcMinutes")]
    fn bad_minutes() {
        let _a = Dms::new(30, 60, 0.0).unwrap();
    }

    #[test]
    #[should_panic(expected = "ArcSeconds")]
    fn bad_seconds() {
        let _a = Dms::new(30, 59, 60.0).unwrap();
    }

    #[test]
    #[should_panic(expected = "Negative")]
    fn negative_seconds() {
        let _a = Dms::new(30, 59, -0.5).unwrap();
    }

    #[test]
    #[should_panic(expected = "Negative")]
    fn nan_seconds() {
        let _a = Dms::new(30, 59, f64::NAN).unwrap();
    }

    #[test]
    fn from_decimal() {
        let angle = Dms::from_decimal_degrees(10.5);
        assert_eq!((angle.degrees(), angle.minutes()), (10, 30));
        assert_eq!(angle.seconds(), 0.0);
    }

    #[test]
    fn from_decimal_without_floating_dust() {
        // 20/60 is not representable exactly
        let angle = Dms::from_decimal_degrees(10.0 + 20.0 / 60.0);
        assert_eq!((angle.degrees(), angle.minutes()), (10, 20));
        assert_eq!(angle.seconds(), 0.0);

        let angle = Dms::from_decimal_degrees(to_decimal_degrees(120.0, 59.0, 59.0));
        assert_eq!((angle.degrees(), angle.minutes()), (120, 59));
        assert!((angle.seconds() - 59.0).abs() < 1e-9);
    }

    #[test]
    fn from_decimal_rounds_up_to_whole_degree() {
        let angle = Dms::from_decimal_degrees(35.999_999_999_9);
        assert_eq!((angle.degrees(), angle.minutes()), (36, 0));
        assert_eq!(angle.seconds(), 0.0);
    }

    #[test]
    fn from_negative_saturates() {
        assert_eq!(Dms::from_decimal_degrees(-5.0), Dms::default());
    }

    #[test]
    fn try_from_decimal() {
        assert_eq!(
            Dms::try_from_decimal_degrees(1.5).unwrap(),
            Dms::new(1, 30, 0.0).unwrap()
        );
        assert_eq!(
            Dms::try_from_decimal_degrees(-1.5),
            Err(OutOfRange::Negative)
        );
        assert_eq!(
            Dms::try_from_decimal_degrees(f64::INFINITY),
            Err(OutOfRange::Negative)
        );
        assert_eq!(
            Dms::try_from_decimal_degrees(4_294_967_341.0),
            Err(OutOfRange::Overflow)
        );
    }

    #[test]
    fn from_huge_decimal_saturates() {
        let angle = Dms::from_decimal_degrees(4_294_967_341.0);
        assert_eq!(angle.degrees(), u32::MAX);
    }

    #[test]
    fn from_tuples() {
        let angle: Dms = (117, 59, 3.5).try_into().unwrap();
        assert_eq!(angle.degrees(), 117);
        assert_eq!(angle.minutes(), 59);
        assert_eq!(angle.seconds(), 3.5);

        let angle: Dms = (40, 15).try_into().unwrap();
        assert_eq!(angle.minutes(), 15);
        assert_eq!(angle.seconds(), 0.0);
    }

    #[test]
    fn display() {
        let angle = Dms::new(45, 3, 7.25).unwrap();
        assert_eq!(format!("{}", angle), "45°03′07.25″");
        assert_eq!(format!("{:#}", angle), "45°3′7.25″");
    }

    #[test]
    fn display_compact_omits_zero_parts() {
        assert_eq!(format!("{:#}", Dms::from(90)), "90°");
        assert_eq!(format!("{:#}", Dms::new(90, 30, 0.0).unwrap()), "90°30′");
        assert_eq!(format!("{:#}", Dms::new(90, 0, 15.0).unwrap()), "90°0′15″");
    }

    #[test]
    fn display_rounds_seconds_with_carry() {
        let angle = Dms::new(10, 59, 59.999).unwrap();
        assert_eq!(angle.to_string(), "11°00′00.00″");
    }
}
