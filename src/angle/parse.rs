//! Reading angles from their textual notations

use std::str::FromStr;

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use traverse_types::{consts::DEGREE_SIGN, ParseAngleError, Quadrant};

use super::{bearing::QuadrantBearing, dms::Dms};

/// Construct regular expression to parse Degree-Minute-Second representation of an angle.
///
/// The `sep` goes before the minutes and the seconds.
fn parse_dms_re(deg: &str, min: &str, sec: &str, sep: &str) -> String {
    format!(
        r#"(?x)                                 # enables verbose mode (to allow these comments)
        ^                                           # match the whole line from the start
        (?P<deg>\d{{1,4}})                              # mandatory degree VALUE (sums of angles can exceed 360)
        {deg}                                           # degree sign (can be mandatory or optional)
        (?:{sep}                                        # minutes and seconds group started with the separator
            (?P<min>[0-5]?\d)                               # minutes VALUE (0..=59)
            {min}                                           # arcminute sign
            (?:{sep}                                        # seconds group started with the separator
                (?P<sec>[0-5]?\d(?:\.\d+)?)                     # seconds VALUE (0..60) with optional decimal fraction
                {sec}                                           # arcsecond sign
            )?                                              # seconds are optional
        )?                                              # minutes and seconds are optional
        $                                           # match the whole line till the end
        "#
    )
}

lazy_static! {
    static ref RE_UNICODE: Regex =
        Regex::new(&parse_dms_re("°", "′", "″", r"\x20?")).expect("Unicode regex is valid");
    static ref RE_ASCII: Regex =
        Regex::new(&parse_dms_re(r"(?:\*|d)?", "'", "\"", r"\x20?")).expect("ASCII regex is valid");
    static ref RE_SPACED: Regex =
        Regex::new(&parse_dms_re("", "", "", r"\x20")).expect("Space separated regex is valid");
}

impl Dms {
    fn parse_dms(s: &str) -> Result<Self, ParseAngleError> {
        let capture = RE_UNICODE
            .captures(s)
            .or_else(|| RE_ASCII.captures(s))
            .or_else(|| RE_SPACED.captures(s))
            .ok_or(ParseAngleError::DmsNotation)?;
        Self::from_captures(&capture)
    }

    fn from_captures(capture: &Captures<'_>) -> Result<Self, ParseAngleError> {
        let deg = capture.name("deg").ok_or(ParseAngleError::DmsNotation)?;
        let deg = deg.as_str().parse()?;

        let min = capture.name("min").map_or("0", |m| m.as_str()).parse()?;
        let sec = capture.name("sec").map_or("0", |m| m.as_str()).parse()?;

        Ok(Self::new(deg, min, sec)?)
    }
}

impl FromStr for Dms {
    type Err = ParseAngleError;

    /// Either the decimal degrees (`45.25`, `45.25°`)
    /// or DMS notation (`45°15′`, `45*15'30"`, `45 15 30.5`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let number = s.strip_suffix(DEGREE_SIGN).unwrap_or(s);
        if let Ok(decimal) = number.parse::<f64>() {
            return Ok(Self::try_from_decimal_degrees(decimal)?);
        }

        Self::parse_dms(s)
    }
}

impl FromStr for QuadrantBearing {
    type Err = ParseAngleError;

    /// The surveyor's notation `N45°30′E` (spaces around the angle are allowed)
    /// or the angle followed by the quadrant label (`45°30′ SE`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let mut chars = s.chars();
        if let (Some(meridian), Some(side)) = (chars.next(), chars.next_back()) {
            if let Some(quadrant) = Quadrant::from_letters(meridian, side) {
                let angle = chars.as_str().parse()?;
                return Ok(Self::new(angle, quadrant)?);
            }
        }

        let split = s
            .char_indices()
            .rev()
            .nth(1)
            .map_or(0, |(index, _)| index);
        let (angle, label) = s.split_at(split);
        let quadrant: Quadrant = label.parse()?;
        let angle = angle.parse()?;
        Ok(Self::new(angle, quadrant)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dms(deg: u32, min: u8, sec: f64) -> Dms {
        Dms::new(deg, min, sec).unwrap()
    }

    #[test]
    fn decimal() {
        assert_eq!("45.5".parse::<Dms>().unwrap(), dms(45, 30, 0.0));
        assert_eq!(" 45.5° ".parse::<Dms>().unwrap(), dms(45, 30, 0.0));
        assert_eq!("0".parse::<Dms>().unwrap(), Dms::default());
    }

    #[test]
    #[should_panic(expected = "Negative")]
    fn negative_decimal() {
        let _a: Dms = "-45.5".parse().unwrap();
    }

    #[test]
    fn unicode() {
        assert_eq!("45°".parse::<Dms>().unwrap(), Dms::from(45));
        assert_eq!("45°30′".parse::<Dms>().unwrap(), dms(45, 30, 0.0));
        assert_eq!("45°30′15″".parse::<Dms>().unwrap(), dms(45, 30, 15.0));
        assert_eq!("45° 30′ 15.25″".parse::<Dms>().unwrap(), dms(45, 30, 15.25));
    }

    #[test]
    fn ascii() {
        assert_eq!("45*30'15\"".parse::<Dms>().unwrap(), dms(45, 30, 15.0));
        assert_eq!("45d30'".parse::<Dms>().unwrap(), dms(45, 30, 0.0));
        assert_eq!("45 30'15.5\"".parse::<Dms>().unwrap(), dms(45, 30, 15.5));
    }

    #[test]
    fn spaced() {
        assert_eq!("123 4 5".parse::<Dms>().unwrap(), dms(123, 4, 5.0));
        assert_eq!("123 45".parse::<Dms>().unwrap(), dms(123, 45, 0.0));
        assert_eq!("123 04 05.5".parse::<Dms>().unwrap(), dms(123, 4, 5.5));
    }

    #[test]
    #[should_panic(expected = "DmsNotation")]
    fn spaced_needs_every_separator() {
        let _a: Dms = "12 345".parse().unwrap();
    }

    #[test]
    fn sum_of_angles() {
        assert_eq!("1080°00′30″".parse::<Dms>().unwrap(), dms(1080, 0, 30.0));
    }

    #[test]
    #[should_panic(expected = "DmsNotation")]
    fn minutes_out_of_range_is_not_dms() {
        let _a: Dms = "45°75′".parse().unwrap();
    }

    #[test]
    #[should_panic(expected = "DmsNotation")]
    fn garbage() {
        let _a: Dms = "forty five".parse().unwrap();
    }

    #[test]
    fn quadrantal_surveyor_notation() {
        let qb: QuadrantBearing = "N45°30′E".parse().unwrap();
        assert_eq!(qb.quadrant(), Quadrant::NorthEast);
        assert_eq!(qb.angle(), dms(45, 30, 0.0));

        let qb: QuadrantBearing = "s 12 30 w".parse().unwrap();
        assert_eq!(qb.quadrant(), Quadrant::SouthWest);
        assert_eq!(qb.angle(), dms(12, 30, 0.0));

        let qb: QuadrantBearing = "N89.5W".parse().unwrap();
        assert_eq!(qb.quadrant(), Quadrant::NorthWest);
        assert_eq!(qb.angle(), dms(89, 30, 0.0));
    }

    #[test]
    fn quadrantal_trailing_label() {
        let qb: QuadrantBearing = "45°30′ SE".parse().unwrap();
        assert_eq!(qb.quadrant(), Quadrant::SouthEast);
        assert_eq!(qb.angle(), dms(45, 30, 0.0));

        let qb: QuadrantBearing = "10NW".parse().unwrap();
        assert_eq!(qb.quadrant(), Quadrant::NorthWest);
        assert_eq!(qb.angle(), Dms::from(10));
    }

    #[test]
    #[should_panic(expected = "ObtuseAngle")]
    fn quadrantal_obtuse() {
        let _qb: QuadrantBearing = "N95°E".parse().unwrap();
    }

    #[test]
    #[should_panic(expected = "Quadrant")]
    fn quadrantal_without_label() {
        let _qb: QuadrantBearing = "45°30′".parse().unwrap();
    }
}
