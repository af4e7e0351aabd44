//! Morphological erosion (minimum filter)
//!
//! Replaces each voxel with the minimum value in its structuring element
//! neighborhood. Shrinks foreground regions of a labelmap.

use labelmorph_core::volume::{VoxelElement, VoxelGrid};
use labelmorph_core::{Algorithm, Error, Result};

use super::element::StructuringElement;
use super::rank::{rank_filter, Extremum};

/// Parameters for morphological erosion
#[derive(Debug, Clone, Default)]
pub struct ErodeParams {
    /// Structuring element shape
    pub element: StructuringElement,
}

/// Erosion algorithm
#[derive(Debug, Clone, Default)]
pub struct Erode;

impl Algorithm for Erode {
    type Input = VoxelGrid<f64>;
    type Output = VoxelGrid<f64>;
    type Params = ErodeParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Erode"
    }

    fn description(&self) -> &'static str {
        "3-D morphological erosion (minimum filter over structuring element)"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        erode(&input, &params.element)
    }
}

/// Perform 3-D morphological erosion on a voxel grid
///
/// Each output voxel is the minimum value within the structuring element
/// neighborhood. Only voxels inside the grid are considered, so a region
/// touching the boundary is not eroded from outside the grid.
///
/// # Arguments
/// * `grid` - Input grid
/// * `element` - Structuring element defining the neighborhood shape
pub fn erode<T: VoxelElement>(grid: &VoxelGrid<T>, element: &StructuringElement) -> Result<VoxelGrid<T>> {
    rank_filter(grid, element, Extremum::Min)
}
