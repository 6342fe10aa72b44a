//! The closed traverse: validated observations and their reduction
//! into the adjusted station records.

use std::fmt;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use traverse_types::{consts::FULL_TURN_DEG, OutOfRange, Quadrant, TraverseDirection};

use crate::{
    angle::{bearing::Bearing, dms::Dms},
    error::TraverseError,
    reduce::{
        bowditch,
        closure::AngleClosure,
        coords,
        latdep::{self, LatDep},
        misclosure::Misclosure,
        propagate::propagate,
    },
    station::{Consecutive, Coordinate, InteriorAngle, Station},
};

/// The smallest ring
pub const MIN_STATIONS: usize = 3;
/// The largest ring
pub const MAX_STATIONS: usize = 20;
/// Maximum length of a station identifier, characters
pub const MAX_NAME_LEN: usize = 9;

/// What kind of angles were observed at the stations
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Whole circle fore bearings
    #[serde(rename = "wcb", alias = "whole-circle")]
    WholeCircle,
    /// Quadrantal fore bearings
    #[serde(rename = "qbs", alias = "quadrantal")]
    Quadrantal,
    /// Interior angles with a single known bearing
    #[serde(rename = "interior", alias = "interior-angles")]
    InteriorAngles,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::WholeCircle => "whole circle bearings",
            Self::Quadrantal => "quadrantal bearings",
            Self::InteriorAngles => "interior angles",
        };
        f.write_str(name)
    }
}

/// A single station as recorded in the field book
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// Station identifier
    pub name: String,
    /// Horizontal distance to the next station, meters
    pub length: f64,
    /// Fore bearing or interior angle, depending on the traverse [`Mode`]
    pub angle: Dms,
    /// Quadrant of a quadrantal bearing
    pub quadrant: Option<Quadrant>,
}

impl Observation {
    /// Station with a whole circle bearing or an interior angle
    pub fn new(name: impl Into<String>, length: f64, angle: Dms) -> Self {
        Self {
            name: name.into(),
            length,
            angle,
            quadrant: None,
        }
    }

    /// Station with a quadrantal bearing
    pub fn with_quadrant(name: impl Into<String>, length: f64, angle: Dms, quadrant: Quadrant) -> Self {
        Self {
            quadrant: Some(quadrant),
            ..Self::new(name, length, angle)
        }
    }
}

/// The station with the known bearing to start the propagation from
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Reference {
    /// Zero-based station index
    pub station: usize,
    /// Fore bearing of the station
    pub bearing: Bearing,
    /// The way the stations are numbered around the ring
    pub direction: TraverseDirection,
}

/// Observed angles with the data required to reduce them
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Observed {
    /// Every angle is a whole circle bearing
    WholeCircle,
    /// Every angle is a quadrantal bearing
    Quadrantal,
    /// Every angle is an interior angle
    InteriorAngles(Reference),
}

impl Observed {
    /// Kind of the angles
    pub fn mode(&self) -> Mode {
        match self {
            Self::WholeCircle => Mode::WholeCircle,
            Self::Quadrantal => Mode::Quadrantal,
            Self::InteriorAngles(_) => Mode::InteriorAngles,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Orientation {
    Bearings(Vec<Bearing>),
    Interior { angles: Vec<f64>, reference: Reference },
}

#[derive(Debug, Clone, PartialEq)]
struct Line {
    name: String,
    length: f64,
}

/// Validated closed traverse ready to be reduced
#[derive(Debug, Clone, PartialEq)]
pub struct Traverse {
    mode: Mode,
    lines: Vec<Line>,
    orientation: Orientation,
}

impl Traverse {
    /// Check the observations and convert the angles.
    ///
    /// An out of range reference station is not an error:
    /// the first station is used instead.
    ///
    /// # Errors
    /// - the number of stations is not in `MIN_STATIONS..=MAX_STATIONS`;
    /// - a name is longer than `MAX_NAME_LEN`;
    /// - a line length is not a positive number;
    /// - a bearing is out of range or its quadrant is missing.
    pub fn new(observations: Vec<Observation>, observed: Observed) -> Result<Self, TraverseError> {
        let mode = observed.mode();
        let count = observations.len();
        if !(MIN_STATIONS..=MAX_STATIONS).contains(&count) {
            return Err(TraverseError::StationCount {
                count,
                min: MIN_STATIONS,
                max: MAX_STATIONS,
            });
        }

        for (i, obs) in observations.iter().enumerate() {
            if obs.name.chars().count() > MAX_NAME_LEN {
                return Err(TraverseError::NameTooLong {
                    name: obs.name.clone(),
                    max: MAX_NAME_LEN,
                });
            }
            if !(obs.length.is_finite() && obs.length > 0.0) {
                return Err(TraverseError::NonPositiveLength {
                    station: i + 1,
                    length: obs.length,
                });
            }
        }

        let orientation = match observed {
            Observed::WholeCircle => Orientation::Bearings(
                observations
                    .iter()
                    .enumerate()
                    .map(|(i, obs)| {
                        Bearing::with_dms(obs.angle)
                            .map_err(|source| TraverseError::Angle { station: i + 1, source })
                    })
                    .collect::<Result<_, _>>()?,
            ),
            Observed::Quadrantal => Orientation::Bearings(
                observations
                    .iter()
                    .enumerate()
                    .map(|(i, obs)| {
                        let quadrant = obs
                            .quadrant
                            .ok_or(TraverseError::MissingQuadrant { station: i + 1 })?;
                        Bearing::quadrantal(obs.angle, quadrant)
                            .map_err(|source| TraverseError::Angle { station: i + 1, source })
                    })
                    .collect::<Result<_, _>>()?,
            ),
            Observed::InteriorAngles(mut reference) => {
                let angles = observations
                    .iter()
                    .enumerate()
                    .map(|(i, obs)| {
                        let angle = obs.angle.decimal_degrees();
                        if angle < FULL_TURN_DEG {
                            Ok(angle)
                        } else {
                            Err(TraverseError::Angle {
                                station: i + 1,
                                source: OutOfRange::Degrees,
                            })
                        }
                    })
                    .collect::<Result<_, _>>()?;

                if reference.station >= count {
                    warn!(
                        "Reference station #{} is out of the range 1..={}, the first station is used",
                        reference.station.wrapping_add(1),
                        count
                    );
                    reference.station = 0;
                }
                Orientation::Interior { angles, reference }
            }
        };

        let lines = observations
            .into_iter()
            .map(|obs| Line {
                name: obs.name,
                length: obs.length,
            })
            .collect();

        Ok(Self {
            mode,
            lines,
            orientation,
        })
    }

    /// Number of stations
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Never true for a validated traverse
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Kind of the observed angles
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The reference station actually used (after the fallback)
    pub fn reference(&self) -> Option<Reference> {
        match self.orientation {
            Orientation::Interior { reference, .. } => Some(reference),
            Orientation::Bearings(_) => None,
        }
    }

    /// Run the whole single-pass pipeline:
    /// angle closure and bearing propagation (for interior angles),
    /// latitudes and departures, Bowditch adjustment, coordinates.
    pub fn reduce(&self) -> Reduction {
        let lengths: Vec<f64> = self.lines.iter().map(|line| line.length).collect();
        info!("Reducing a traverse of {} stations ({})", self.len(), self.mode());

        let (bearings, angle_closure) = match &self.orientation {
            Orientation::Bearings(bearings) => (bearings.clone(), None),
            Orientation::Interior { angles, reference } => {
                let closure = AngleClosure::adjust(angles);
                let bearings = propagate(
                    &closure.corrected,
                    reference.station,
                    reference.bearing,
                    reference.direction,
                );
                (bearings, Some(closure))
            }
        };

        let lines = latdep::resolve_all(&lengths, &bearings);
        let misclosure = Misclosure::new(&lengths, &lines);
        info!(
            "Misclosure: latitude {:+.4} m, departure {:+.4} m, linear {:.4} m over {:.3} m",
            misclosure.sum_lat,
            misclosure.sum_dep,
            misclosure.linear_error(),
            misclosure.total_length
        );

        let consecutive: Vec<Consecutive> = lines.iter().map(|line| line.consecutive()).collect();
        let corrected = bowditch::adjust_all(&lengths, &consecutive, &misclosure);
        let independent = coords::accumulate(&corrected);

        let stations = self
            .lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let LatDep {
                    latitude,
                    departure,
                } = lines[i];
                Station {
                    name: line.name.clone(),
                    line_length: line.length,
                    fore_bearing: bearings[i],
                    corrected_bearing: bearings[i],
                    interior_angle: match (&self.orientation, &angle_closure) {
                        (Orientation::Interior { angles, .. }, Some(closure)) => Some(InteriorAngle {
                            observed: angles[i],
                            correction: closure.correction,
                            corrected: closure.corrected[i],
                        }),
                        _ => None,
                    },
                    latitude,
                    departure,
                    consecutive: consecutive[i],
                    corrected: corrected[i],
                    independent: independent[i],
                }
            })
            .collect();

        Reduction {
            mode: self.mode,
            stations,
            angle_closure,
            misclosure,
        }
    }
}

/// The fully reduced traverse
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reduction {
    /// Kind of the observed angles
    pub mode: Mode,
    /// Station records in the ring order
    pub stations: Vec<Station>,
    /// Present only for an interior angles traverse
    pub angle_closure: Option<AngleClosure>,
    /// Linear misclosure before the adjustment
    pub misclosure: Misclosure,
}

impl Reduction {
    /// Sum of the raw latitudes
    pub fn sum_lat(&self) -> f64 {
        self.misclosure.sum_lat
    }

    /// Sum of the raw departures
    pub fn sum_dep(&self) -> f64 {
        self.misclosure.sum_dep
    }

    /// Perimeter of the traverse
    pub fn total_length(&self) -> f64 {
        self.misclosure.total_length
    }

    /// Where the corrected lines lead relative to the start.
    /// Non-zero only if some Bowditch correction was clamped.
    pub fn closing_offset(&self) -> Coordinate {
        let corrected: Vec<Consecutive> = self.stations.iter().map(|st| st.corrected).collect();
        coords::closing_offset(&corrected)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn dms(degrees: f64) -> Dms {
        Dms::from_decimal_degrees(degrees)
    }

    fn square(angles: [f64; 4]) -> Vec<Observation> {
        ["A", "B", "C", "D"]
            .iter()
            .zip(angles)
            .map(|(name, angle)| Observation::new(*name, 100.0, dms(angle)))
            .collect()
    }

    fn interior(station: usize, bearing: f64, direction: TraverseDirection) -> Observed {
        Observed::InteriorAngles(Reference {
            station,
            bearing: Bearing::whole_circle(bearing),
            direction,
        })
    }

    #[test]
    fn station_count() {
        let two = vec![
            Observation::new("A", 1.0, dms(0.0)),
            Observation::new("B", 1.0, dms(180.0)),
        ];
        assert_eq!(
            Traverse::new(two, Observed::WholeCircle).unwrap_err(),
            TraverseError::StationCount {
                count: 2,
                min: 3,
                max: 20
            }
        );

        let many = (0..21)
            .map(|i| Observation::new(i.to_string(), 1.0, dms(0.0)))
            .collect();
        assert!(matches!(
            Traverse::new(many, Observed::WholeCircle),
            Err(TraverseError::StationCount { count: 21, .. })
        ));
    }

    #[test]
    fn long_name() {
        let mut stations = square([0.0, 90.0, 180.0, 270.0]);
        stations[2].name = "Station-10".into();
        assert!(matches!(
            Traverse::new(stations, Observed::WholeCircle),
            Err(TraverseError::NameTooLong { max: 9, .. })
        ));
    }

    #[test]
    fn bad_lengths() {
        for length in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let mut stations = square([0.0, 90.0, 180.0, 270.0]);
            stations[1].length = length;
            assert!(matches!(
                Traverse::new(stations, Observed::WholeCircle),
                Err(TraverseError::NonPositiveLength { station: 2, .. })
            ));
        }
    }

    #[test]
    fn bearing_out_of_range() {
        let stations = square([0.0, 90.0, 180.0, 360.0]);
        assert_eq!(
            Traverse::new(stations, Observed::WholeCircle).unwrap_err(),
            TraverseError::Angle {
                station: 4,
                source: OutOfRange::Degrees
            }
        );
    }

    #[test]
    fn quadrant_required() {
        let stations = square([0.0, 90.0, 0.0, 90.0]);
        assert_eq!(
            Traverse::new(stations, Observed::Quadrantal).unwrap_err(),
            TraverseError::MissingQuadrant { station: 1 }
        );
    }

    #[test]
    fn obtuse_quadrantal() {
        let stations = vec![
            Observation::with_quadrant("A", 10.0, dms(0.0), Quadrant::NorthEast),
            Observation::with_quadrant("B", 10.0, dms(91.0), Quadrant::SouthEast),
            Observation::with_quadrant("C", 10.0, dms(45.0), Quadrant::SouthWest),
        ];
        assert_eq!(
            Traverse::new(stations, Observed::Quadrantal).unwrap_err(),
            TraverseError::Angle {
                station: 2,
                source: OutOfRange::ObtuseAngle
            }
        );
    }

    #[test]
    fn reference_fallback() {
        let traverse = Traverse::new(
            square([90.0; 4]),
            interior(7, 0.0, TraverseDirection::Clockwise),
        )
        .unwrap();
        assert_eq!(traverse.reference().unwrap().station, 0);
        assert_eq!(traverse.mode(), Mode::InteriorAngles);

        let traverse = Traverse::new(
            square([90.0; 4]),
            interior(usize::MAX, 0.0, TraverseDirection::Clockwise),
        )
        .unwrap();
        assert_eq!(traverse.reference().unwrap().station, 0);
    }

    #[test]
    fn closed_square() {
        let traverse = Traverse::new(square([0.0, 90.0, 180.0, 270.0]), Observed::WholeCircle).unwrap();
        assert_eq!(traverse.len(), 4);
        let reduction = traverse.reduce();

        assert_eq!(reduction.mode, Mode::WholeCircle);
        assert!(reduction.angle_closure.is_none());
        assert_abs_diff_eq!(reduction.sum_lat(), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(reduction.sum_dep(), 0.0, epsilon = 1e-9);
        assert_eq!(reduction.total_length(), 400.0);
        assert_eq!(reduction.misclosure.accuracy_ratio(), None);

        let expected = [(1000.0, 1000.0), (1000.0, 1100.0), (900.0, 1100.0), (900.0, 1000.0)];
        for (station, (northing, easting)) in reduction.stations.iter().zip(expected) {
            assert_eq!(station.fore_bearing, station.corrected_bearing);
            assert!(station.interior_angle.is_none());
            assert_abs_diff_eq!(station.independent.northing, northing, epsilon = 1e-9);
            assert_abs_diff_eq!(station.independent.easting, easting, epsilon = 1e-9);
        }
    }

    #[test]
    fn quadrantal_square_is_the_same() {
        let stations = vec![
            Observation::with_quadrant("A", 100.0, dms(0.0), Quadrant::NorthEast),
            Observation::with_quadrant("B", 100.0, dms(90.0), Quadrant::NorthEast),
            Observation::with_quadrant("C", 100.0, dms(0.0), Quadrant::SouthWest),
            Observation::with_quadrant("D", 100.0, dms(90.0), Quadrant::SouthWest),
        ];
        let from_qbs = Traverse::new(stations, Observed::Quadrantal).unwrap().reduce();
        let from_wcb = Traverse::new(square([0.0, 90.0, 180.0, 270.0]), Observed::WholeCircle)
            .unwrap()
            .reduce();

        for (qbs, wcb) in from_qbs.stations.iter().zip(&from_wcb.stations) {
            assert_abs_diff_eq!(
                qbs.corrected_bearing.decimal_degrees(),
                wcb.corrected_bearing.decimal_degrees()
            );
            assert_abs_diff_eq!(qbs.independent.northing, wcb.independent.northing, epsilon = 1e-9);
            assert_abs_diff_eq!(qbs.independent.easting, wcb.independent.easting, epsilon = 1e-9);
        }
    }

    #[test]
    fn interior_angles_with_misclosure() {
        let traverse = Traverse::new(
            square([90.01, 89.99, 90.02, 90.02]),
            interior(0, 30.0, TraverseDirection::Clockwise),
        )
        .unwrap();
        let reduction = traverse.reduce();

        let closure = reduction.angle_closure.as_ref().unwrap();
        assert_abs_diff_eq!(closure.angular_error, 0.04, epsilon = 1e-9);
        assert_abs_diff_eq!(closure.correction, -0.01, epsilon = 1e-9);

        let bearings: Vec<f64> = reduction
            .stations
            .iter()
            .map(|st| st.corrected_bearing.decimal_degrees())
            .collect();
        for (actual, expected) in bearings.iter().zip([30.0, 120.02, 210.01, 300.0]) {
            assert_abs_diff_eq!(*actual, expected, epsilon = 1e-9);
        }

        let first = &reduction.stations[0];
        assert_eq!(first.fore_bearing, Bearing::whole_circle(30.0));
        // every station carries its propagated bearing
        for station in &reduction.stations {
            assert_eq!(station.fore_bearing, station.corrected_bearing);
        }
        let angle = reduction.stations[1].interior_angle.unwrap();
        assert_abs_diff_eq!(angle.observed, 89.99, epsilon = 1e-9);
        assert_abs_diff_eq!(angle.corrected, 89.98, epsilon = 1e-9);

        // Bowditch closes the ring
        let offset = reduction.closing_offset();
        assert_abs_diff_eq!(offset.northing, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(offset.easting, 0.0, epsilon = 1e-9);
        assert!(reduction.misclosure.accuracy_ratio().unwrap() > 1000.0);
    }

    #[test]
    fn anti_clockwise_square() {
        let reduction = Traverse::new(
            square([90.0; 4]),
            interior(0, 0.0, TraverseDirection::AntiClockwise),
        )
        .unwrap()
        .reduce();

        let bearings: Vec<f64> = reduction
            .stations
            .iter()
            .map(|st| st.corrected_bearing.decimal_degrees())
            .collect();
        assert_eq!(bearings, [0.0, 270.0, 180.0, 90.0]);
        let second = reduction.stations[1].independent;
        assert_abs_diff_eq!(second.northing, 1000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(second.easting, 900.0, epsilon = 1e-9);
        let third = reduction.stations[2].independent;
        assert_abs_diff_eq!(third.northing, 900.0, epsilon = 1e-9);
        assert_abs_diff_eq!(third.easting, 900.0, epsilon = 1e-9);
    }

    #[test]
    fn mode_names() {
        assert_eq!(Mode::WholeCircle.to_string(), "whole circle bearings");
        assert_eq!(Observed::Quadrantal.mode(), Mode::Quadrantal);
    }
}
