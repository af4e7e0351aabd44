//! Grid compatibility check and kernel sizing

use labelmorph_core::volume::AXIS_NAMES;
use labelmorph_core::{Error, Result, VoxelGeometry};

/// Absolute tolerance on origin, spacing and dimensions, in grid units
pub const GEOMETRY_TOLERANCE: f64 = 0.001;

/// Check that two grids share origin, spacing and dimensions.
///
/// Boolean operations run index by index without resampling, so every
/// one of the nine values must agree within [`GEOMETRY_TOLERANCE`].
/// The error names the first attribute and axis that differ.
pub fn check_geometry_compatible(primary: &VoxelGeometry, secondary: &VoxelGeometry) -> Result<()> {
    let attributes: [(&'static str, [f64; 3], [f64; 3]); 3] = [
        ("origin", primary.origin(), secondary.origin()),
        ("spacing", primary.spacing(), secondary.spacing()),
        (
            "dimensions",
            primary.dimensions().map(|d| d as f64),
            secondary.dimensions().map(|d| d as f64),
        ),
    ];

    for (attribute, a, b) in attributes {
        for axis in 0..3 {
            if (a[axis] - b[axis]).abs() > GEOMETRY_TOLERANCE {
                return Err(Error::GeometryMismatch {
                    attribute,
                    axis: AXIS_NAMES[axis],
                    primary: a[axis],
                    secondary: b[axis],
                });
            }
        }
    }
    Ok(())
}

/// Convert a physical kernel size into voxel half-widths.
///
/// `extent[i] = floor(physical[i] / spacing[i])`, never below 1 and never
/// above `dimensions[i]`. A wider half-width reaches no further voxels.
pub fn kernel_extent(
    physical: [f64; 3],
    spacing: [f64; 3],
    dimensions: [usize; 3],
) -> Result<[usize; 3]> {
    let mut extent = [1usize; 3];
    for axis in 0..3 {
        let size = physical[axis];
        if !size.is_finite() || size < 0.0 {
            return Err(Error::InvalidParameter {
                name: "kernel_size",
                value: format!("{} = {}", AXIS_NAMES[axis], size),
                reason: "kernel size must be a finite, non-negative distance".to_string(),
            });
        }
        let voxels = (size / spacing[axis].abs()).floor().min(dimensions[axis] as f64);
        extent[axis] = (voxels as usize).max(1);
    }
    Ok(extent)
}
