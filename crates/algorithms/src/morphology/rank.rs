//! Max/min neighborhood filter shared by dilation and erosion
//!
//! The kernel is clipped at the grid boundary: voxels outside the grid
//! do not take part, so edge voxels are always computed.

use ndarray::Array3;
use labelmorph_core::volume::{VoxelElement, VoxelGrid};
use labelmorph_core::{Error, Result};

use crate::maybe_rayon::*;

use super::element::StructuringElement;

/// Which extremum the filter keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Extremum {
    Max,
    Min,
}

impl Extremum {
    #[inline]
    fn pick<T: VoxelElement>(self, acc: T, v: T) -> T {
        match self {
            Extremum::Max if v > acc => v,
            Extremum::Min if v < acc => v,
            _ => acc,
        }
    }
}

pub(crate) fn rank_filter<T: VoxelElement>(
    grid: &VoxelGrid<T>,
    element: &StructuringElement,
    extremum: Extremum,
) -> Result<VoxelGrid<T>> {
    element.validate()?;

    let data = if element.is_separable() {
        // max/min over a box is the composition of 1-D passes along each axis
        let extents = element.extents();
        let mut current = line_pass(grid.data(), 0, extents[0], extremum)?;
        current = line_pass(&current, 1, extents[1], extremum)?;
        line_pass(&current, 2, extents[2], extremum)?
    } else {
        neighborhood_pass(grid.data(), &element.offsets(), extremum)?
    };

    VoxelGrid::from_array(*grid.geometry(), data)
}

/// One 1-D pass along `axis` (0 = x, 1 = y, 2 = z)
fn line_pass<T: VoxelElement>(
    src: &Array3<T>,
    axis: usize,
    radius: usize,
    extremum: Extremum,
) -> Result<Array3<T>> {
    let (nz, ny, nx) = src.dim();
    let len = [nx, ny, nz][axis];

    let data: Vec<T> = (0..nz)
        .into_par_iter()
        .flat_map(|k| {
            let mut slice_data = Vec::with_capacity(ny * nx);
            for j in 0..ny {
                for i in 0..nx {
                    let mut idx = [i, j, k];
                    let center = idx[axis];
                    let lo = center.saturating_sub(radius);
                    let hi = center.saturating_add(radius).min(len - 1);

                    let mut acc = src[(k, j, i)];
                    for p in lo..=hi {
                        idx[axis] = p;
                        acc = extremum.pick(acc, src[(idx[2], idx[1], idx[0])]);
                    }
                    slice_data.push(acc);
                }
            }
            slice_data
        })
        .collect();

    Array3::from_shape_vec((nz, ny, nx), data).map_err(|e| Error::Other(e.to_string()))
}

/// Generic pass over an arbitrary offset list
fn neighborhood_pass<T: VoxelElement>(
    src: &Array3<T>,
    offsets: &[[isize; 3]],
    extremum: Extremum,
) -> Result<Array3<T>> {
    let (nz, ny, nx) = src.dim();
    let dims = [nx as isize, ny as isize, nz as isize];

    let data: Vec<T> = (0..nz)
        .into_par_iter()
        .flat_map(|k| {
            let mut slice_data = Vec::with_capacity(ny * nx);
            for j in 0..ny {
                for i in 0..nx {
                    let mut acc = src[(k, j, i)];
                    for d in offsets {
                        let x = i as isize + d[0];
                        let y = j as isize + d[1];
                        let z = k as isize + d[2];
                        if x < 0 || y < 0 || z < 0 || x >= dims[0] || y >= dims[1] || z >= dims[2] {
                            continue;
                        }
                        acc = extremum.pick(acc, src[(z as usize, y as usize, x as usize)]);
                    }
                    slice_data.push(acc);
                }
            }
            slice_data
        })
        .collect();

    Array3::from_shape_vec((nz, ny, nx), data).map_err(|e| Error::Other(e.to_string()))
}
