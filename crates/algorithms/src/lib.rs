//! # labelmorph algorithms
//!
//! Numeric kernels for labelmap volumes.
//!
//! ## Available Algorithm Categories
//!
//! - **morphology**: 3-D dilation and erosion with box, ellipsoid and cross elements
//! - **logic**: Voxel-wise OR, AND, XOR and NOT with a configurable true value
//! - **statistics**: Observed maximum and whole-volume summaries

pub(crate) mod maybe_rayon;

pub mod logic;
pub mod morphology;
pub mod statistics;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::logic::{boolean_combine, Logic, LogicOp, LogicParams};
    pub use crate::morphology::{
        dilate, erode, Dilate, DilateParams, Erode, ErodeParams, StructuringElement,
    };
    pub use crate::statistics::{observed_maximum, volume_statistics, VolumeStatistics};
    pub use labelmorph_core::prelude::*;
}
