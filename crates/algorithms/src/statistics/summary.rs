//! Whole-volume summary statistics

use labelmorph_core::volume::{VoxelElement, VoxelGrid};

/// Basic statistics for a voxel grid
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeStatistics<T> {
    pub min: Option<T>,
    pub max: Option<T>,
    pub mean: Option<f64>,
    /// Voxels that count as foreground
    pub foreground_count: usize,
    /// Voxels that took part in min/max/mean (NaN samples are skipped)
    pub valid_count: usize,
}

/// Largest sample in the grid.
///
/// Returns `None` for an empty grid or one holding only NaN.
pub fn observed_maximum<T: VoxelElement>(grid: &VoxelGrid<T>) -> Option<T> {
    grid.data()
        .iter()
        .copied()
        .filter(|v| v.partial_cmp(v).is_some())
        .fold(None, |acc, v| match acc {
            Some(m) if m >= v => Some(m),
            _ => Some(v),
        })
}

/// Calculate min, max, mean and foreground count in one pass
pub fn volume_statistics<T: VoxelElement>(grid: &VoxelGrid<T>) -> VolumeStatistics<T> {
    let mut min: Option<T> = None;
    let mut max: Option<T> = None;
    let mut sum = 0.0;
    let mut valid_count = 0usize;
    let mut foreground_count = 0usize;

    for &value in grid.data().iter() {
        // NaN is the only value not comparable with itself
        if value.partial_cmp(&value).is_none() {
            continue;
        }
        if value.is_foreground() {
            foreground_count += 1;
        }
        min = Some(match min {
            Some(m) if m <= value => m,
            _ => value,
        });
        max = Some(match max {
            Some(m) if m >= value => m,
            _ => value,
        });
        if let Some(v) = value.to_f64() {
            sum += v;
            valid_count += 1;
        }
    }

    let mean = if valid_count > 0 {
        Some(sum / valid_count as f64)
    } else {
        None
    };

    VolumeStatistics {
        min,
        max,
        mean,
        foreground_count,
        valid_count,
    }
}
