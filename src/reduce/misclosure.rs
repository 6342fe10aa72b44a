//! The linear misclosure of the traverse ring

use serde::{ser::SerializeStruct, Serialize, Serializer};

use crate::angle::bearing::Bearing;

use super::latdep::LatDep;

/// The linear error below which the ring is considered closed, meters
pub const CLOSURE_TOLERANCE: f64 = 1e-9;

/// Sums of the raw latitudes and departures along the whole ring.
/// For a perfectly closed traverse both sums are zero.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Misclosure {
    /// Sum of the signed latitudes, meters
    pub sum_lat: f64,
    /// Sum of the signed departures, meters
    pub sum_dep: f64,
    /// Perimeter of the traverse, meters
    pub total_length: f64,
}

impl Misclosure {
    /// Sum up the lines (the slices are zipped)
    pub fn new(lengths: &[f64], lines: &[LatDep]) -> Self {
        let (sum_lat, sum_dep, total_length) = lengths.iter().zip(lines).fold(
            (0.0, 0.0, 0.0),
            |(sum_lat, sum_dep, total), (length, line)| {
                (
                    sum_lat + line.latitude,
                    sum_dep + line.departure,
                    total + length,
                )
            },
        );

        Self {
            sum_lat,
            sum_dep,
            total_length,
        }
    }

    /// The length of the closing error vector: `sqrt(ΣL² + ΣD²)`
    pub fn linear_error(&self) -> f64 {
        self.sum_lat.hypot(self.sum_dep)
    }

    /// Is the linear error negligible?
    pub fn is_closed(&self) -> bool {
        self.linear_error() < CLOSURE_TOLERANCE
    }

    /// The relative precision `1 : total_length / linear_error`.
    ///
    /// `None` for a closed traverse (the ratio goes to infinity).
    pub fn accuracy_ratio(&self) -> Option<f64> {
        if self.is_closed() {
            None
        } else {
            Some(self.total_length / self.linear_error())
        }
    }

    /// Whole circle bearing of the closing error vector: `atan2(ΣD, ΣL)`
    pub fn error_direction(&self) -> Bearing {
        Bearing::whole_circle(self.sum_dep.atan2(self.sum_lat).to_degrees())
    }
}

impl Serialize for Misclosure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Misclosure", 6)?;
        state.serialize_field("sum_lat", &self.sum_lat)?;
        state.serialize_field("sum_dep", &self.sum_dep)?;
        state.serialize_field("total_length", &self.total_length)?;
        state.serialize_field("linear_error", &self.linear_error())?;
        state.serialize_field("accuracy_ratio", &self.accuracy_ratio())?;
        state.serialize_field("error_direction", &self.error_direction())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn line(latitude: f64, departure: f64) -> LatDep {
        LatDep {
            latitude,
            departure,
        }
    }

    #[test]
    fn sums() {
        let misclosure = Misclosure::new(
            &[10.0, 20.0, 30.0],
            &[line(10.0, 0.0), line(-5.0, 15.0), line(-5.03, -15.04)],
        );
        assert_abs_diff_eq!(misclosure.sum_lat, -0.03, epsilon = 1e-12);
        assert_abs_diff_eq!(misclosure.sum_dep, -0.04, epsilon = 1e-12);
        assert_eq!(misclosure.total_length, 60.0);
    }

    #[test]
    fn derived_values() {
        let misclosure = Misclosure {
            sum_lat: -0.03,
            sum_dep: -0.04,
            total_length: 600.0,
        };
        assert_abs_diff_eq!(misclosure.linear_error(), 0.05, epsilon = 1e-12);
        assert!(!misclosure.is_closed());
        assert_abs_diff_eq!(misclosure.accuracy_ratio().unwrap(), 12_000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(
            misclosure.error_direction().decimal_degrees(),
            180.0 + 53.130_102_354_156,
            epsilon = 1e-9
        );
    }

    #[test]
    fn closed_ring_has_no_ratio() {
        let misclosure = Misclosure {
            sum_lat: 1e-14,
            sum_dep: -2e-14,
            total_length: 400.0,
        };
        assert!(misclosure.is_closed());
        assert_eq!(misclosure.accuracy_ratio(), None);
    }

    #[test]
    fn error_direction_is_normalized() {
        let misclosure = Misclosure {
            sum_lat: 0.1,
            sum_dep: -0.1,
            total_length: 100.0,
        };
        assert_abs_diff_eq!(
            misclosure.error_direction().decimal_degrees(),
            315.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn serialized_with_derived_values() {
        let misclosure = Misclosure {
            sum_lat: 0.0,
            sum_dep: 0.0,
            total_length: 100.0,
        };
        let json = serde_json::to_value(misclosure).unwrap();
        assert_eq!(json["linear_error"], 0.0);
        assert!(json["accuracy_ratio"].is_null());
        assert_eq!(json["error_direction"]["quadrant"], "NE");
    }
}
