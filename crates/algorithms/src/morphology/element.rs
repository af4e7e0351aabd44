//! Structuring element definitions for 3-D morphological operations
//!
//! A structuring element defines the voxel neighborhood used in
//! erosion and dilation. Extents are half-widths in voxels, ordered
//! (x, y, z), so `Box([1, 1, 1])` is a 3x3x3 cube.

use labelmorph_core::volume::AXIS_NAMES;
use labelmorph_core::{Error, Result};

/// Shape of a structuring element for morphological operations
#[derive(Debug, Clone, PartialEq)]
pub enum StructuringElement {
    /// Rectangular box with the given half-width per axis
    Box([usize; 3]),
    /// Ellipsoid inscribed in the box of the given half-widths
    Ellipsoid([usize; 3]),
    /// Three orthogonal arms of the given half-widths
    Cross([usize; 3]),
}

impl Default for StructuringElement {
    fn default() -> Self {
        StructuringElement::Box([1, 1, 1])
    }
}

impl StructuringElement {
    /// Validate the structuring element, returning an error for invalid configurations
    pub fn validate(&self) -> Result<()> {
        let extents = self.extents();
        for (axis, &r) in extents.iter().enumerate() {
            if r == 0 {
                return Err(Error::InvalidParameter {
                    name: "kernel_extent",
                    value: format!("{} = 0", AXIS_NAMES[axis]),
                    reason: "structuring element half-width must be at least 1".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Half-widths of the element per axis
    pub fn extents(&self) -> [usize; 3] {
        match self {
            StructuringElement::Box(r)
            | StructuringElement::Ellipsoid(r)
            | StructuringElement::Cross(r) => *r,
        }
    }

    /// Whether the element is a full box, which lets kernels run one axis at a time
    pub fn is_separable(&self) -> bool {
        matches!(self, StructuringElement::Box(_))
    }

    /// Check if a relative position (dx, dy, dz) is within this element
    pub fn contains(&self, d: [isize; 3]) -> bool {
        let r = self.extents().map(|v| v as isize);
        let inside_box = (0..3).all(|a| d[a].abs() <= r[a]);
        if !inside_box {
            return false;
        }
        match self {
            StructuringElement::Box(_) => true,
            StructuringElement::Ellipsoid(_) => {
                let sum: f64 = (0..3)
                    .map(|a| {
                        let q = d[a] as f64 / r[a] as f64;
                        q * q
                    })
                    .sum();
                sum <= 1.0 + 1e-9
            }
            StructuringElement::Cross(_) => d.iter().filter(|&&v| v != 0).count() <= 1,
        }
    }

    /// Compute (dx, dy, dz) offsets relative to center for all active voxels
    pub fn offsets(&self) -> Vec<[isize; 3]> {
        let r = self.extents().map(|v| v as isize);
        let mut offsets = Vec::new();
        for dz in -r[2]..=r[2] {
            for dy in -r[1]..=r[1] {
                for dx in -r[0]..=r[0] {
                    let d = [dx, dy, dz];
                    if self.contains(d) {
                        offsets.push(d);
                    }
                }
            }
        }
        offsets
    }
}
