//! # labelmorph contour
//!
//! Morphology on radiotherapy contours held as labelmap volumes.
//!
//! A [`MorphologyRequest`] names a primary contour, an optional secondary
//! contour and one of five operations. [`ContourMorphologyLogic`] resolves
//! both contours through a [`ContourStore`], checks that binary operands
//! share a grid, runs the kernel and registers the result as a new
//! labelmap volume with its display node in a single batch.
//!
//! ```ignore
//! use labelmorph_contour::prelude::*;
//!
//! let mut scene = Scene::with_standard_colors();
//! let ptv = scene.add_labelmap_contour("PTV", ptv_grid)?;
//!
//! let mut logic = ContourMorphologyLogic::new();
//! logic.set_request(
//!     MorphologyRequest::new(ptv, MorphologyOperation::Expand)
//!         .with_kernel_size([5.0, 5.0, 5.0])
//!         .with_output_name("PTV+5mm"),
//! );
//! let outcome = logic.morph_contour(&mut scene)?;
//! ```

pub mod geometry;
pub mod logic;
pub mod request;
pub mod scene;
pub mod store;

pub use geometry::{check_geometry_compatible, kernel_extent, GEOMETRY_TOLERANCE};
pub use logic::{morph, ContourMorphologyLogic, MorphologyOutcome};
pub use request::{MorphologyOperation, MorphologyRequest};
pub use scene::{Scene, STANDARD_LABEL_COLOR_TABLE};
pub use store::{
    ArtifactId, BatchGuard, ColorTableId, ContourId, ContourStore, DisplayNode, LabelmapVolume,
    Representation,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::logic::{morph, ContourMorphologyLogic, MorphologyOutcome};
    pub use crate::request::{MorphologyOperation, MorphologyRequest};
    pub use crate::scene::Scene;
    pub use crate::store::{ContourId, ContourStore, Representation};
    pub use labelmorph_core::prelude::*;
}
