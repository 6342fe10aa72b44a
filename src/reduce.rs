//! The stages of a closed traverse reduction.
//!
//! Every stage is a pure function over the station sequence, applied once in this order:
//! - [`closure`]: interior angles adjusted to the `(2n - 4) * 90` sum;
//! - [`propagate`]: bearings carried around the ring from the reference one;
//! - [`latdep`]: lines resolved into latitudes and departures;
//! - [`misclosure`]: the linear misclosure of the ring;
//! - [`bowditch`]: the misclosure distributed proportionally to the line lengths;
//! - [`coords`]: independent coordinates accumulated from a fixed origin.

pub mod bowditch;
pub mod closure;
pub mod coords;
pub mod latdep;
pub mod misclosure;
pub mod propagate;
