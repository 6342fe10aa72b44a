//! Loading the field book from a JSON document.
//!
//! ```json
//! {
//!   "mode": "interior",
//!   "stations": [
//!     { "name": "A", "length": 120.5, "angle": "87°15′20″" },
//!     { "name": "B", "length": 98.25, "angle": 92.5 }
//!   ],
//!   "reference": { "station": 1, "bearing": "N30°E", "direction": "clockwise" }
//! }
//! ```

use std::{fs, io, path::Path, path::PathBuf};

use serde::Deserialize;
use thiserror::Error;
use traverse_types::{BearingSystem, ParseAngleError, Quadrant, TraverseDirection};

use crate::{
    angle::{
        bearing::{Bearing, QuadrantBearing},
        dms::Dms,
    },
    error::TraverseError,
    traverse::{Mode, Observation, Observed, Reference, Traverse},
};

/// The document cannot be turned into a traverse
#[derive(Debug, Error)]
pub enum InputError {
    /// The file is not readable
    #[error("Cannot read {}: {source}", .path.display())]
    Io {
        /// The file
        path: PathBuf,
        /// The cause
        source: io::Error,
    },
    /// Malformed document
    #[error("Invalid traverse document: {0}")]
    Json(#[from] serde_json::Error),
    /// Malformed station angle
    #[error("Bad angle at the station #{station}: {source}")]
    Angle {
        /// Station number (from 1)
        station: usize,
        /// The cause
        source: ParseAngleError,
    },
    /// Malformed reference bearing
    #[error("Bad reference bearing: {0}")]
    ReferenceBearing(#[source] ParseAngleError),
    /// Quadrantal reference bearing without a quadrant
    #[error("Quadrant of the reference bearing is missing")]
    ReferenceQuadrant,
    /// Interior angles given without the reference
    #[error("Interior angles traverse requires the reference station and bearing")]
    MissingReference,
    /// The observations do not form a valid traverse
    #[error(transparent)]
    Traverse(#[from] TraverseError),
}

/// The whole document
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TraverseFile {
    /// Kind of the observed angles
    pub mode: Mode,
    /// Stations in the ring order
    pub stations: Vec<StationEntry>,
    /// Required for the interior angles
    #[serde(default)]
    pub reference: Option<ReferenceEntry>,
}

/// A station record
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StationEntry {
    /// Station identifier
    pub name: String,
    /// Distance to the next station, meters
    pub length: f64,
    /// Bearing or interior angle
    pub angle: AngleRepr,
    /// Quadrant of a quadrantal bearing (if not in the `angle` notation)
    #[serde(default)]
    pub quadrant: Option<Quadrant>,
}

/// The known bearing of an interior angles traverse
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReferenceEntry {
    /// Station number (from 1)
    pub station: usize,
    /// Fore bearing of the station
    pub bearing: AngleRepr,
    /// Bearing system; guessed from the notation if missing
    #[serde(default)]
    pub system: Option<BearingSystem>,
    /// Quadrant of a quadrantal bearing (if not in the `bearing` notation)
    #[serde(default)]
    pub quadrant: Option<Quadrant>,
    /// How the stations are numbered around the ring
    pub direction: TraverseDirection,
}

/// An angle as it appears in the document
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AngleRepr {
    /// Decimal degrees
    Decimal(f64),
    /// Any textual notation: decimal, DMS or surveyor's
    Notation(String),
}

impl AngleRepr {
    fn to_dms(&self) -> Result<Dms, ParseAngleError> {
        match self {
            Self::Decimal(value) => Ok(Dms::try_from_decimal_degrees(*value)?),
            Self::Notation(text) => text.parse(),
        }
    }

    /// The angle with the quadrant if the notation carries one
    fn to_bearing_parts(&self) -> Result<(Dms, Option<Quadrant>), ParseAngleError> {
        match self {
            Self::Decimal(_) => Ok((self.to_dms()?, None)),
            Self::Notation(text) => match text.parse::<QuadrantBearing>() {
                Ok(bearing) => Ok((bearing.angle(), Some(bearing.quadrant()))),
                Err(ParseAngleError::Range(err)) => Err(err.into()),
                Err(_) => Ok((self.to_dms()?, None)),
            },
        }
    }
}

impl StationEntry {
    fn into_observation(self, mode: Mode, station: usize) -> Result<Observation, InputError> {
        let bad_angle = |source| InputError::Angle { station, source };

        let (angle, quadrant) = match mode {
            Mode::InteriorAngles => (self.angle.to_dms().map_err(bad_angle)?, None),
            Mode::Quadrantal => {
                let (angle, quadrant) = self.angle.to_bearing_parts().map_err(bad_angle)?;
                (angle, self.quadrant.or(quadrant))
            }
            Mode::WholeCircle => {
                let (angle, quadrant) = self.angle.to_bearing_parts().map_err(bad_angle)?;
                match self.quadrant.or(quadrant) {
                    Some(quadrant) => {
                        let bearing = Bearing::quadrantal(angle, quadrant)
                            .map_err(|err| bad_angle(err.into()))?;
                        (bearing.dms(), None)
                    }
                    None => (angle, None),
                }
            }
        };

        Ok(Observation {
            name: self.name,
            length: self.length,
            angle,
            quadrant,
        })
    }
}

impl ReferenceEntry {
    fn into_reference(self) -> Result<Reference, InputError> {
        let (angle, quadrant) = self
            .bearing
            .to_bearing_parts()
            .map_err(InputError::ReferenceBearing)?;
        let quadrant = self.quadrant.or(quadrant);

        let system = self.system.unwrap_or(if quadrant.is_some() {
            BearingSystem::Quadrantal
        } else {
            BearingSystem::WholeCircle
        });
        let bearing = match system {
            BearingSystem::WholeCircle => Bearing::with_dms(angle),
            BearingSystem::Quadrantal => {
                Bearing::quadrantal(angle, quadrant.ok_or(InputError::ReferenceQuadrant)?)
            }
        }
        .map_err(|err| InputError::ReferenceBearing(err.into()))?;

        Ok(Reference {
            // zero is out of range as well: fall back to the first station later
            station: self.station.checked_sub(1).unwrap_or(usize::MAX),
            bearing,
            direction: self.direction,
        })
    }
}

impl TraverseFile {
    /// Convert every notation and validate the traverse
    ///
    /// # Errors
    /// Bad angle notations, missing reference or an invalid traverse.
    pub fn into_traverse(self) -> Result<Traverse, InputError> {
        let mode = self.mode;
        let observed = match mode {
            Mode::WholeCircle => Observed::WholeCircle,
            Mode::Quadrantal => Observed::Quadrantal,
            Mode::InteriorAngles => {
                let reference = self.reference.ok_or(InputError::MissingReference)?;
                Observed::InteriorAngles(reference.into_reference()?)
            }
        };

        let observations = self
            .stations
            .into_iter()
            .enumerate()
            .map(|(i, entry)| entry.into_observation(mode, i + 1))
            .collect::<Result<_, _>>()?;

        Ok(Traverse::new(observations, observed)?)
    }
}

/// Parse and validate the traverse document
///
/// # Errors
/// See [`InputError`].
pub fn from_json(text: &str) -> Result<Traverse, InputError> {
    let file: TraverseFile = serde_json::from_str(text)?;
    file.into_traverse()
}

/// Read, parse and validate the traverse file
///
/// # Errors
/// See [`InputError`].
pub fn load(path: impl AsRef<Path>) -> Result<Traverse, InputError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_json(&text)
}
