//! Summary statistics for voxel grids
//!
//! - **observed_maximum**: largest sample, used as the labelmap true value
//! - **volume_statistics**: min, max, mean and foreground count

mod summary;

pub use summary::{observed_maximum, volume_statistics, VolumeStatistics};
