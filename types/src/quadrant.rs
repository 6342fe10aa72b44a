use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::consts::{HALF_TURN_DEG, QUARTER_TURN_DEG, THREE_QUARTER_TURN_DEG};

/// One of the four quarters of the horizon a line can point into.
/// <https://en.wikipedia.org/wiki/Bearing_(angle)>
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// `[0, 90)` whole circle degrees
    NorthEast,
    /// `[90, 180)` whole circle degrees
    SouthEast,
    /// `[180, 270)` whole circle degrees
    SouthWest,
    /// `[270, 360)` whole circle degrees
    NorthWest,
}

use self::Quadrant::{NorthEast, NorthWest, SouthEast, SouthWest};

impl Quadrant {
    /// All the quadrants in the clockwise order starting from the north
    pub const ALL: [Self; 4] = [NorthEast, SouthEast, SouthWest, NorthWest];

    /// The quadrant of the whole circle bearing.
    ///
    /// The bearing should be normalized into `[0, 360)`;
    /// anything outside the first three quadrants (including NaN) is `NorthWest`.
    pub fn classify(whole_circle: f64) -> Self {
        if (0.0..QUARTER_TURN_DEG).contains(&whole_circle) {
            NorthEast
        } else if (QUARTER_TURN_DEG..HALF_TURN_DEG).contains(&whole_circle) {
            SouthEast
        } else if (HALF_TURN_DEG..THREE_QUARTER_TURN_DEG).contains(&whole_circle) {
            SouthWest
        } else {
            NorthWest
        }
    }

    /// The reference meridian direction: 'N' or 'S'
    pub fn meridian(self) -> char {
        match self {
            NorthEast | NorthWest => 'N',
            SouthEast | SouthWest => 'S',
        }
    }

    /// The side the line deviates to from the meridian: 'E' or 'W'
    pub fn side(self) -> char {
        match self {
            NorthEast | SouthEast => 'E',
            SouthWest | NorthWest => 'W',
        }
    }

    /// Construct a quadrant from its meridian and side letters (case insensitive)
    pub fn from_letters(meridian: char, side: char) -> Option<Self> {
        match (meridian.to_ascii_uppercase(), side.to_ascii_uppercase()) {
            ('N', 'E') => Some(NorthEast),
            ('S', 'E') => Some(SouthEast),
            ('S', 'W') => Some(SouthWest),
            ('N', 'W') => Some(NorthWest),
            _ => None,
        }
    }
}

/// The string is not one of `NE`, `SE`, `SW`, `NW`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot parse Quadrant from {failed:?}")]
pub struct ParseQuadrantError {
    failed: String,
}

impl FromStr for Quadrant {
    type Err = ParseQuadrantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut letters = s.trim().chars();
        match (letters.next(), letters.next(), letters.next()) {
            (Some(meridian), Some(side), None) => Self::from_letters(meridian, side),
            _ => None,
        }
        .ok_or_else(|| ParseQuadrantError {
            failed: s.to_string(),
        })
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.meridian(), self.side())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

    use super::Quadrant;

    impl Serialize for Quadrant {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Quadrant {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(D::Error::custom)
        }
    }
}
