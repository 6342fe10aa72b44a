//! Angular misclosure of the interior angles and its equal distribution

use log::debug;
use serde::Serialize;
use traverse_types::consts::QUARTER_TURN_DEG;

/// The sum of interior angles of a simple polygon with `stations` vertices: `(2n - 4) * 90`
pub fn theoretical_sum(stations: usize) -> f64 {
    (2.0 * stations as f64 - 4.0) * QUARTER_TURN_DEG
}

/// Interior angles brought to the theoretical sum, decimal degrees
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AngleClosure {
    /// Sum of the angles as measured
    pub observed_sum: f64,
    /// `(2n - 4) * 90`
    pub theoretical_sum: f64,
    /// `observed_sum - theoretical_sum`
    pub angular_error: f64,
    /// The same signed correction applied to every station
    pub correction: f64,
    /// Adjusted angles in the station order
    pub corrected: Vec<f64>,
}

impl AngleClosure {
    /// Distribute the angular error equally between all the stations.
    ///
    /// Expects at least three angles (guaranteed by [`Traverse`](crate::Traverse)).
    pub fn adjust(observed: &[f64]) -> Self {
        let stations = observed.len();
        let observed_sum: f64 = observed.iter().sum();
        let theoretical_sum = theoretical_sum(stations);
        let angular_error = observed_sum - theoretical_sum;
        let correction = -angular_error / stations as f64;

        debug!(
            "Angle closure: n={}, theoretical={:.6}°, observed={:.6}°, error={:+.6}°, correction={:+.6}° per station",
            stations, theoretical_sum, observed_sum, angular_error, correction
        );

        let corrected = observed.iter().map(|angle| angle + correction).collect();
        Self {
            observed_sum,
            theoretical_sum,
            angular_error,
            correction,
            corrected,
        }
    }

    /// Number of the adjusted angles
    pub fn stations(&self) -> usize {
        self.corrected.len()
    }
}
