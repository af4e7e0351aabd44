//! Voxel grid geometry (origin, spacing, dimensions)

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Axis names used in diagnostics, indexed like the geometry arrays.
pub const AXIS_NAMES: [&str; 3] = ["x", "y", "z"];

/// Physical placement of a regular voxel grid.
///
/// Maps voxel indices (i, j, k) to physical coordinates:
/// ```text
/// x = origin[0] + i * spacing[0]
/// y = origin[1] + j * spacing[1]
/// z = origin[2] + k * spacing[2]
/// ```
///
/// All arrays are ordered (x, y, z). Spacing is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeometry")]
pub struct VoxelGeometry {
    /// Physical coordinate of voxel (0, 0, 0)
    origin: [f64; 3],
    /// Physical distance between voxel centers along each axis
    spacing: [f64; 3],
    /// Number of voxels along each axis
    dimensions: [usize; 3],
}

/// Unchecked wire form; deserialization goes through [`VoxelGeometry::new`]
#[derive(Deserialize)]
struct RawGeometry {
    origin: [f64; 3],
    spacing: [f64; 3],
    dimensions: [usize; 3],
}

impl TryFrom<RawGeometry> for VoxelGeometry {
    type Error = Error;

    fn try_from(raw: RawGeometry) -> Result<Self> {
        Self::new(raw.origin, raw.spacing, raw.dimensions)
    }
}

impl VoxelGeometry {
    /// Create a new geometry, rejecting zero or non-finite spacing.
    pub fn new(origin: [f64; 3], spacing: [f64; 3], dimensions: [usize; 3]) -> Result<Self> {
        for (axis, &s) in spacing.iter().enumerate() {
            if s == 0.0 || !s.is_finite() {
                return Err(Error::InvalidParameter {
                    name: "spacing",
                    value: format!("{} = {}", AXIS_NAMES[axis], s),
                    reason: "voxel spacing must be finite and non-zero".to_string(),
                });
            }
        }
        for (axis, &o) in origin.iter().enumerate() {
            if !o.is_finite() {
                return Err(Error::InvalidParameter {
                    name: "origin",
                    value: format!("{} = {}", AXIS_NAMES[axis], o),
                    reason: "voxel origin must be finite".to_string(),
                });
            }
        }
        Ok(Self {
            origin,
            spacing,
            dimensions,
        })
    }

    /// Unit spacing at the origin with the given dimensions
    pub fn with_dimensions(dimensions: [usize; 3]) -> Self {
        Self {
            origin: [0.0; 3],
            spacing: [1.0; 3],
            dimensions,
        }
    }

    pub fn origin(&self) -> [f64; 3] {
        self.origin
    }

    pub fn spacing(&self) -> [f64; 3] {
        self.spacing
    }

    pub fn dimensions(&self) -> [usize; 3] {
        self.dimensions
    }

    /// Total number of voxels
    pub fn voxel_count(&self) -> usize {
        self.dimensions.iter().product()
    }

    /// Shape of the sample array, ordered (z, y, x)
    pub fn array_shape(&self) -> (usize, usize, usize) {
        (self.dimensions[2], self.dimensions[1], self.dimensions[0])
    }
}

impl Default for VoxelGeometry {
    fn default() -> Self {
        Self::with_dimensions([0, 0, 0])
    }
}
