//! Boundary between the morphology logic and the host scene
//!
//! The orchestrator never looks nodes up by type; it asks the store for a
//! contour's representation and, when that is a labelmap, for its grid.

use std::fmt;

use labelmorph_core::{Result, VoxelElement, VoxelGrid};
use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Reference to a contour held by the store
    ContourId
);
string_id!(
    /// Id the store assigns to a registered volume or display node
    ArtifactId
);
string_id!(
    /// Reference to a color table held by the store
    ColorTableId
);

/// How a contour is currently represented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Representation {
    /// Discrete labelmap voxel grid, the only form morphology accepts
    IndexedLabelmap,
    /// Triangulated closed surface
    ClosedSurfaceModel,
    /// Planar ribbons built from the original contour points
    RibbonModel,
}

/// A labelmap volume ready to be handed to the store
#[derive(Debug, Clone, PartialEq)]
pub struct LabelmapVolume<T: VoxelElement> {
    pub name: String,
    pub grid: VoxelGrid<T>,
    /// Sample marking foreground voxels
    pub true_value: T,
    /// Discrete label data rather than continuous intensities
    pub label_map: bool,
}

/// Display metadata attached to a labelmap volume
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNode {
    pub name: String,
    pub visible: bool,
    /// Label color table; `None` leaves the host default in place
    pub color_table: Option<ColorTableId>,
}

/// Narrow view of the host scene used by contour morphology.
///
/// `begin_batch`/`end_batch` bracket a group of mutations so observers
/// only see the final state. Brackets may nest; observers fire when the
/// outermost one closes.
pub trait ContourStore {
    /// Sample type of the labelmaps in this store
    type Sample: VoxelElement;

    /// Current representation of a contour, `None` if the id is unknown
    fn representation(&self, contour: &ContourId) -> Option<Representation>;

    /// Labelmap grid backing a contour; `None` unless it is an indexed labelmap
    fn resolve_labelmap(&self, contour: &ContourId) -> Option<&VoxelGrid<Self::Sample>>;

    /// Derive a node name from `base` that no existing node uses
    fn generate_unique_name(&self, base: &str) -> String;

    /// The standard label color table, if the store has one loaded
    fn standard_label_color_table(&self) -> Option<ColorTableId>;

    fn begin_batch(&mut self);

    fn end_batch(&mut self);

    /// Take ownership of a new labelmap volume and return its id
    fn register_labelmap(&mut self, volume: LabelmapVolume<Self::Sample>) -> Result<ArtifactId>;

    /// Attach a display node to a registered volume and return the display id
    fn register_display(&mut self, volume: &ArtifactId, display: DisplayNode) -> Result<ArtifactId>;

    /// Make `volume` the active indexed-labelmap representation of `contour`
    fn set_active_labelmap(&mut self, contour: &ContourId, volume: &ArtifactId) -> Result<()>;

    /// Remove a volume or display node registered earlier in the same batch.
    /// Removing a volume also removes its display node. Unknown ids are ignored.
    fn discard_artifact(&mut self, artifact: &ArtifactId);
}

/// Keeps a store inside a batch bracket until dropped.
pub struct BatchGuard<'a, S: ContourStore + ?Sized> {
    store: &'a mut S,
}

impl<'a, S: ContourStore + ?Sized> BatchGuard<'a, S> {
    pub fn begin(store: &'a mut S) -> Self {
        store.begin_batch();
        Self { store }
    }
}

impl<S: ContourStore + ?Sized> std::ops::Deref for BatchGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.store
    }
}

impl<S: ContourStore + ?Sized> std::ops::DerefMut for BatchGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.store
    }
}

impl<S: ContourStore + ?Sized> Drop for BatchGuard<'_, S> {
    fn drop(&mut self) {
        self.store.end_batch();
    }
}
