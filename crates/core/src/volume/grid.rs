//! Main voxel grid type

use crate::error::{Error, Result};
use crate::volume::{VoxelElement, VoxelGeometry};
use ndarray::Array3;

/// A regular 3-D voxel grid with physical placement.
///
/// Samples are stored in an `Array3<T>` indexed `(k, j, i)`, i.e. z-major
/// with x varying fastest. Public accessors take `(i, j, k)` in the same
/// (x, y, z) order as the geometry arrays.
///
/// # Example
///
/// ```ignore
/// use labelmorph_core::{VoxelGeometry, VoxelGrid};
///
/// let geometry = VoxelGeometry::with_dimensions([64, 64, 32]);
/// let mut mask: VoxelGrid<u8> = VoxelGrid::new(geometry);
/// mask.set(10, 20, 5, 1)?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VoxelGrid<T: VoxelElement> {
    data: Array3<T>,
    geometry: VoxelGeometry,
}

impl<T: VoxelElement> VoxelGrid<T> {
    /// Create a new grid filled with zeros
    pub fn new(geometry: VoxelGeometry) -> Self {
        Self {
            data: Array3::zeros(geometry.array_shape()),
            geometry,
        }
    }

    /// Create a new grid filled with a specific value
    pub fn filled(geometry: VoxelGeometry, value: T) -> Self {
        Self {
            data: Array3::from_elem(geometry.array_shape(), value),
            geometry,
        }
    }

    /// Create a grid from samples ordered with x varying fastest
    pub fn from_vec(geometry: VoxelGeometry, data: Vec<T>) -> Result<Self> {
        if data.len() != geometry.voxel_count() {
            let [nx, ny, nz] = geometry.dimensions();
            return Err(Error::InvalidDimensions { nx, ny, nz });
        }

        let array = Array3::from_shape_vec(geometry.array_shape(), data)
            .map_err(|e| Error::Other(e.to_string()))?;

        Ok(Self {
            data: array,
            geometry,
        })
    }

    /// Create a grid from an ndarray shaped `(nz, ny, nx)`
    pub fn from_array(geometry: VoxelGeometry, data: Array3<T>) -> Result<Self> {
        if data.dim() != geometry.array_shape() {
            let [nx, ny, nz] = geometry.dimensions();
            return Err(Error::InvalidDimensions { nx, ny, nz });
        }
        Ok(Self { data, geometry })
    }

    // Geometry

    pub fn geometry(&self) -> &VoxelGeometry {
        &self.geometry
    }

    pub fn origin(&self) -> [f64; 3] {
        self.geometry.origin()
    }

    pub fn spacing(&self) -> [f64; 3] {
        self.geometry.spacing()
    }

    /// Voxel counts ordered (x, y, z)
    pub fn dimensions(&self) -> [usize; 3] {
        self.geometry.dimensions()
    }

    /// Total number of voxels
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the grid holds no voxels
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    // Data access

    /// Get value at (i, j, k)
    pub fn get(&self, i: usize, j: usize, k: usize) -> Result<T> {
        self.data
            .get((k, j, i))
            .copied()
            .ok_or_else(|| self.out_of_bounds(i, j, k))
    }

    /// Set value at (i, j, k)
    pub fn set(&mut self, i: usize, j: usize, k: usize, value: T) -> Result<()> {
        match self.data.get_mut((k, j, i)) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(self.out_of_bounds(i, j, k)),
        }
    }

    /// Set every voxel inside the half-open index box `lo..hi` to `value`
    pub fn fill_box(&mut self, lo: [usize; 3], hi: [usize; 3], value: T) -> Result<()> {
        let dims = self.dimensions();
        for axis in 0..3 {
            if lo[axis] > hi[axis] || hi[axis] > dims[axis] {
                return Err(self.out_of_bounds(hi[0], hi[1], hi[2]));
            }
        }
        self.data
            .slice_mut(ndarray::s![lo[2]..hi[2], lo[1]..hi[1], lo[0]..hi[0]])
            .fill(value);
        Ok(())
    }

    pub fn data(&self) -> &Array3<T> {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut Array3<T> {
        &mut self.data
    }

    /// Number of voxels whose sample counts as foreground
    pub fn foreground_count(&self) -> usize {
        self.data.iter().filter(|v| v.is_foreground()).count()
    }

    fn out_of_bounds(&self, i: usize, j: usize, k: usize) -> Error {
        Error::IndexOutOfBounds {
            index: [i, j, k],
            dimensions: self.dimensions(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid: VoxelGrid<u8> = VoxelGrid::new(VoxelGeometry::with_dimensions([4, 5, 6]));
        assert_eq!(grid.dimensions(), [4, 5, 6]);
        assert_eq!(grid.data().dim(), (6, 5, 4));
        assert_eq!(grid.len(), 120);
    }

    #[test]
    fn test_grid_access() {
        let mut grid: VoxelGrid<f32> = VoxelGrid::new(VoxelGeometry::with_dimensions([3, 4, 5]));
        grid.set(2, 3, 4, 42.0).unwrap();
        assert_eq!(grid.get(2, 3, 4).unwrap(), 42.0);
        assert_eq!(grid.data()[(4, 3, 2)], 42.0);
    }

    #[test]
    fn test_out_of_bounds() {
        let grid: VoxelGrid<u8> = VoxelGrid::new(VoxelGeometry::with_dimensions([2, 2, 2]));
        assert!(matches!(
            grid.get(2, 0, 0),
            Err(Error::IndexOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_from_vec_x_fastest() {
        let geometry = VoxelGeometry::with_dimensions([2, 1, 2]);
        let grid = VoxelGrid::from_vec(geometry, vec![1u8, 2, 3, 4]).unwrap();
        assert_eq!(grid.get(1, 0, 0).unwrap(), 2);
        assert_eq!(grid.get(0, 0, 1).unwrap(), 3);
    }

    #[test]
    fn test_from_vec_wrong_len() {
        let geometry = VoxelGeometry::with_dimensions([2, 2, 2]);
        assert!(matches!(
            VoxelGrid::from_vec(geometry, vec![0u8; 7]),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_fill_box() {
        let mut grid: VoxelGrid<u8> = VoxelGrid::new(VoxelGeometry::with_dimensions([5, 5, 5]));
        grid.fill_box([1, 1, 1], [4, 4, 4], 1).unwrap();
        assert_eq!(grid.foreground_count(), 27);
        assert_eq!(grid.get(0, 0, 0).unwrap(), 0);
        assert!(grid.fill_box([0, 0, 0], [6, 1, 1], 1).is_err());
    }
}
