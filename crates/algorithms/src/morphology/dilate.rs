//! Morphological dilation (maximum filter)
//!
//! Replaces each voxel with the maximum value in its structuring element
//! neighborhood. Grows foreground regions of a labelmap.

use labelmorph_core::volume::{VoxelElement, VoxelGrid};
use labelmorph_core::{Algorithm, Error, Result};

use super::element::StructuringElement;
use super::rank::{rank_filter, Extremum};

/// Parameters for morphological dilation
#[derive(Debug, Clone, Default)]
pub struct DilateParams {
    /// Structuring element shape
    pub element: StructuringElement,
}

/// Dilation algorithm
#[derive(Debug, Clone, Default)]
pub struct Dilate;

impl Algorithm for Dilate {
    type Input = VoxelGrid<f64>;
    type Output = VoxelGrid<f64>;
    type Params = DilateParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Dilate"
    }

    fn description(&self) -> &'static str {
        "3-D morphological dilation (maximum filter over structuring element)"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        dilate(&input, &params.element)
    }
}

/// Perform 3-D morphological dilation on a voxel grid
///
/// Each output voxel is the maximum value within the structuring element
/// neighborhood, clipped to the grid. The output keeps the input geometry.
///
/// # Arguments
/// * `grid` - Input grid
/// * `element` - Structuring element defining the neighborhood shape
pub fn dilate<T: VoxelElement>(grid: &VoxelGrid<T>, element: &StructuringElement) -> Result<VoxelGrid<T>> {
    rank_filter(grid, element, Extremum::Max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use labelmorph_core::VoxelGeometry;

    fn cube_grid(n: usize, lo: usize, hi: usize) -> VoxelGrid<u8> {
        let mut g = VoxelGrid::new(VoxelGeometry::with_dimensions([n, n, n]));
        g.fill_box([lo; 3], [hi; 3], 1).unwrap();
        g
    }

    #[test]
    fn test_dilate_grows_cube() {
        let grid = cube_grid(9, 3, 6);
        let result = dilate(&grid, &StructuringElement::Box([1, 1, 1])).unwrap();
        assert_eq!(result.foreground_count(), 125);
        assert_eq!(result.get(2, 2, 2).unwrap(), 1);
        assert_eq!(result.get(1, 4, 4).unwrap(), 0);
    }

    #[test]
    fn test_dilate_anisotropic() {
        let grid = cube_grid(9, 3, 6);
        let result = dilate(&grid, &StructuringElement::Box([2, 1, 1])).unwrap();
        // x grows by 2 each side, y and z by 1
        assert_eq!(result.foreground_count(), 7 * 5 * 5);
        assert_eq!(result.get(1, 4, 4).unwrap(), 1);
        assert_eq!(result.get(4, 1, 4).unwrap(), 0);
    }

    #[test]
    fn test_dilate_extent_wider_than_grid() {
        let grid = cube_grid(9, 3, 6);
        let result = dilate(&grid, &StructuringElement::Box([usize::MAX, 1, 1])).unwrap();
        // every x column the cube touches fills end to end
        assert_eq!(result.foreground_count(), 9 * 5 * 5);
        assert_eq!(result.get(0, 4, 4).unwrap(), 1);
        assert_eq!(result.get(8, 2, 6).unwrap(), 1);
    }

    #[test]
    fn test_dilate_clips_at_boundary() {
        let mut grid: VoxelGrid<u8> = VoxelGrid::new(VoxelGeometry::with_dimensions([4, 4, 4]));
        grid.set(0, 0, 0, 7).unwrap();
        let result = dilate(&grid, &StructuringElement::Box([1, 1, 1])).unwrap();
        assert_eq!(result.get(0, 0, 0).unwrap(), 7);
        assert_eq!(result.get(1, 1, 1).unwrap(), 7);
        assert_eq!(result.get(2, 2, 2).unwrap(), 0);
        assert_eq!(result.foreground_count(), 8);
    }

    #[test]
    fn test_dilate_picks_maximum() {
        let mut grid: VoxelGrid<f64> = VoxelGrid::filled(VoxelGeometry::with_dimensions([5, 5, 5]), 5.0);
        grid.set(2, 3, 2, 20.0).unwrap();
        let result = dilate(&grid, &StructuringElement::Box([1, 1, 1])).unwrap();
        assert!((result.get(2, 2, 2).unwrap() - 20.0).abs() < 1e-10);
        assert!((result.get(2, 0, 2).unwrap() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_dilate_cross_skips_diagonal() {
        let mut grid: VoxelGrid<u8> = VoxelGrid::new(VoxelGeometry::with_dimensions([5, 5, 5]));
        grid.set(1, 1, 2, 9).unwrap();
        let result = dilate(&grid, &StructuringElement::Cross([1, 1, 1])).unwrap();
        assert_eq!(result.get(2, 1, 2).unwrap(), 9);
        assert_eq!(result.get(2, 2, 2).unwrap(), 0);
    }

    #[test]
    fn test_dilate_keeps_geometry() {
        let geometry = VoxelGeometry::new([1.0, 2.0, 3.0], [0.5, 0.5, 2.0], [4, 4, 4]).unwrap();
        let grid: VoxelGrid<u8> = VoxelGrid::new(geometry);
        let result = dilate(&grid, &StructuringElement::default()).unwrap();
        assert_eq!(result.geometry(), &geometry);
    }

    #[test]
    fn test_dilate_algorithm_trait() {
        let mut grid: VoxelGrid<f64> = VoxelGrid::new(VoxelGeometry::with_dimensions([3, 3, 3]));
        grid.set(1, 1, 1, 1.0).unwrap();
        let result = Dilate.execute_default(grid).unwrap();
        assert_eq!(result.foreground_count(), 27);
        assert_eq!(Dilate.name(), "Dilate");
    }
}
