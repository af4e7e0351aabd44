//! Voxel-wise boolean logic on labelmaps
//!
//! Foreground is any non-zero sample. Outputs carry a caller-chosen
//! true value at foreground voxels and zero elsewhere.

mod boolean;

pub use boolean::{boolean_combine, Logic, LogicOp, LogicParams};
