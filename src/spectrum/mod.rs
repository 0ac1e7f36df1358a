//! # Spectral Data Model
//!
//! A [`Spectrum`] owns an ordered list of [`SpectralPoint`]s, running
//! statistics for both axes, the axis unit names and one
//! [`crate::metadata::Metadata`] registry.
//!
//! Points with a NaN component are dropped on insertion. After every
//! insertion the list is re-sorted according to the [`SortOrder`] chosen at
//! construction, so readers never have to care about the order in which a
//! file lists its samples.

mod model;
mod point;
mod stats;
mod types;


pub use model::{Spectrum, SPACING_TOLERANCE};
pub use point::SpectralPoint;
pub use stats::RunningStats;
pub use types::{SortOrder, SpectralSpacing, SpectralType};
