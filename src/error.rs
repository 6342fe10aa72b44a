use thiserror::Error;
use traverse_types::OutOfRange;

/// The observations cannot form a closed traverse.
///
/// Stations are numbered from 1 in the error values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TraverseError {
    /// Too few or too many stations
    #[error("A closed traverse should have from {min} to {max} stations, but {count} given")]
    StationCount {
        /// Stations given
        count: usize,
        /// Minimum allowed
        min: usize,
        /// Maximum allowed
        max: usize,
    },
    /// The station identifier does not fit the report
    #[error("Station name {name:?} is longer than {max} characters")]
    NameTooLong {
        /// The offending name
        name: String,
        /// Maximum allowed characters
        max: usize,
    },
    /// Zero, negative or non-finite line length
    #[error("Line length at the station #{station} should be a positive number, but {length} given")]
    NonPositiveLength {
        /// Station number
        station: usize,
        /// The offending length
        length: f64,
    },
    /// Quadrantal bearing given without its quadrant
    #[error("Quadrant of the bearing is missing at the station #{station}")]
    MissingQuadrant {
        /// Station number
        station: usize,
    },
    /// The observed angle does not fit the traverse mode
    #[error("Bad angle at the station #{station}: {source}")]
    Angle {
        /// Station number
        station: usize,
        /// What is wrong with the angle
        source: OutOfRange,
    },
}
