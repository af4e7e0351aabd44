//! Mathematical morphology for labelmap volumes
//!
//! - **Erosion**: minimum filter (shrinks foreground regions)
//! - **Dilation**: maximum filter (grows foreground regions)

mod dilate;
mod element;
mod erode;
mod rank;

pub use dilate::{dilate, Dilate, DilateParams};
pub use element::StructuringElement;
pub use erode::{erode, Erode, ErodeParams};
