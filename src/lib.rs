//! Closed traverse reduction: angle closure, bearing propagation,
//! latitudes and departures, Bowditch adjustment and independent coordinates

// do not warn on older Rust versions
#![allow(unknown_lints)]
//
// The list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
// #![warn(unreachable_pub)]
#![warn(unstable_features)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
// recommendations
#![forbid(unsafe_code)]
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]
// the stations count is tiny, the angles are bounded
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

pub use angle::{
    bearing::{Bearing, QuadrantBearing},
    dms::Dms,
};
pub use error::TraverseError;
pub use input::InputError;
pub use report::Report;
pub use station::{Consecutive, Coordinate, InteriorAngle, Station};
pub use traverse::{Mode, Observation, Observed, Reduction, Reference, Traverse};
pub use traverse_types::{
    BearingSystem, OutOfRange, ParseAngleError, ParseQuadrantError, Quadrant, TraverseDirection,
};

pub mod angle;
mod error;
pub mod input;
pub mod reduce;
pub mod report;
pub mod station;
pub mod traverse;
mod utils;
