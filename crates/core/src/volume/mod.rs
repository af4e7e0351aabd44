//! Voxel grid data structures

mod element;
mod geometry;
mod grid;

pub use element::VoxelElement;
pub use geometry::{VoxelGeometry, AXIS_NAMES};
pub use grid::VoxelGrid;
