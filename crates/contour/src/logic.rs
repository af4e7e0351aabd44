//! Contour morphology orchestration
//!
//! One synchronous call turns a [`MorphologyRequest`] into a new labelmap
//! volume in the store. Every voxel computation finishes before the store
//! is touched, and a registration that fails partway is discarded, so a
//! failed request leaves the store unchanged.

use labelmorph_algorithms::logic::{boolean_combine, LogicOp};
use labelmorph_algorithms::morphology::{dilate, erode, StructuringElement};
use labelmorph_algorithms::statistics::observed_maximum;
use labelmorph_core::{Error, Result, VoxelElement, VoxelGrid};
use tracing::{debug, error, info};

use crate::geometry::{check_geometry_compatible, kernel_extent};
use crate::request::{MorphologyOperation, MorphologyRequest};
use crate::store::{
    ArtifactId, BatchGuard, ContourId, ContourStore, DisplayNode, LabelmapVolume, Representation,
};

/// Suffix appended to the output name for the new volume
pub const LABELMAP_NAME_SUFFIX: &str = " - Labelmap";
/// Suffix appended to the volume name for its display node
pub const DISPLAY_NAME_SUFFIX: &str = "Display";

/// What a successful morphology call added to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorphologyOutcome {
    pub volume: ArtifactId,
    pub display: ArtifactId,
    pub name: String,
}

/// Holds the pending morphology request and runs it against a store.
#[derive(Debug, Default)]
pub struct ContourMorphologyLogic {
    request: Option<MorphologyRequest>,
}

impl ContourMorphologyLogic {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pending request
    pub fn set_request(&mut self, request: MorphologyRequest) {
        self.request = Some(request);
    }

    pub fn request(&self) -> Option<&MorphologyRequest> {
        self.request.as_ref()
    }

    pub fn clear_request(&mut self) {
        self.request = None;
    }

    /// Whether the pending request's primary contour is currently a labelmap
    pub fn contour_contains_labelmap<S: ContourStore>(&self, store: &S) -> bool {
        self.request
            .as_ref()
            .and_then(|r| store.representation(&r.primary))
            == Some(Representation::IndexedLabelmap)
    }

    /// Run the pending request. The request is consumed whether or not it succeeds.
    pub fn morph_contour<S: ContourStore>(&mut self, store: &mut S) -> Result<MorphologyOutcome> {
        let request = self.request.take().ok_or_else(|| {
            error!("morph_contour called without a request");
            Error::InputNotReady {
                reference: "request".to_string(),
                reason: "no morphology request set".to_string(),
            }
        })?;
        morph(store, &request)
    }
}

/// Execute one morphology request against `store`
pub fn morph<S: ContourStore>(store: &mut S, request: &MorphologyRequest) -> Result<MorphologyOutcome> {
    let operation = request.operation().inspect_err(|e| error!("{e}"))?;

    let (output_grid, true_value) = {
        let primary = resolve_labelmap(store, &request.primary)?;
        debug!(
            contour = %request.primary,
            dimensions = ?primary.dimensions(),
            spacing = ?primary.spacing(),
            "resolved primary labelmap"
        );

        let secondary = if operation.is_binary() {
            let id = request.secondary.as_ref().ok_or_else(|| {
                error!(?operation, "binary operation without a secondary contour");
                Error::InputNotReady {
                    reference: "secondary".to_string(),
                    reason: format!("{operation:?} needs a secondary contour"),
                }
            })?;
            let secondary = resolve_labelmap(store, id)?;
            check_geometry_compatible(primary.geometry(), secondary.geometry())
                .inspect_err(|e| error!("{e}"))?;
            Some(secondary)
        } else {
            None
        };

        let true_value = observed_maximum(primary).ok_or_else(|| {
            error!(contour = %request.primary, "labelmap holds no samples");
            Error::InputNotReady {
                reference: request.primary.to_string(),
                reason: "labelmap holds no samples".to_string(),
            }
        })?;

        let grid = dispatch(operation, primary, secondary, request.kernel_size, true_value)?;
        (grid, true_value)
    };

    if let Some(contour) = &request.output_contour {
        if store.representation(contour).is_none() {
            error!(%contour, "output contour not found");
            return Err(Error::InputNotReady {
                reference: contour.to_string(),
                reason: "output contour not found".to_string(),
            });
        }
    }

    assemble(store, request, output_grid, true_value)
}

fn resolve_labelmap<'s, S: ContourStore>(
    store: &'s S,
    contour: &ContourId,
) -> Result<&'s VoxelGrid<S::Sample>> {
    let not_ready = |reason: String| {
        error!(%contour, "{reason}");
        Error::InputNotReady {
            reference: contour.to_string(),
            reason,
        }
    };

    match store.representation(contour) {
        None => return Err(not_ready("contour not found".to_string())),
        Some(Representation::IndexedLabelmap) => {}
        Some(other) => {
            return Err(not_ready(format!(
                "cannot morph a contour whose representation is {other:?}, convert it to a labelmap first"
            )))
        }
    }
    store
        .resolve_labelmap(contour)
        .ok_or_else(|| not_ready("labelmap volume missing".to_string()))
}

fn dispatch<T: VoxelElement>(
    operation: MorphologyOperation,
    primary: &VoxelGrid<T>,
    secondary: Option<&VoxelGrid<T>>,
    kernel_size: [f64; 3],
    true_value: T,
) -> Result<VoxelGrid<T>> {
    match operation {
        MorphologyOperation::Expand => {
            let extent = kernel_extent(kernel_size, primary.spacing(), primary.dimensions())?;
            debug!(?extent, "dilating");
            dilate(primary, &StructuringElement::Box(extent))
        }
        MorphologyOperation::Shrink => {
            let extent = kernel_extent(kernel_size, primary.spacing(), primary.dimensions())?;
            debug!(?extent, "eroding");
            erode(primary, &StructuringElement::Box(extent))
        }
        MorphologyOperation::Union => boolean_combine(primary, secondary, LogicOp::Or, true_value),
        MorphologyOperation::Intersect => {
            boolean_combine(primary, secondary, LogicOp::And, true_value)
        }
        MorphologyOperation::Subtract => {
            let secondary = secondary.ok_or_else(|| Error::Algorithm(
                "subtract dispatched without a secondary labelmap".to_string(),
            ))?;
            let outside_secondary = boolean_combine(secondary, None, LogicOp::Not, true_value)?;
            boolean_combine(primary, Some(&outside_secondary), LogicOp::And, true_value)
        }
    }
}

fn assemble<S: ContourStore>(
    store: &mut S,
    request: &MorphologyRequest,
    grid: VoxelGrid<S::Sample>,
    true_value: S::Sample,
) -> Result<MorphologyOutcome> {
    let name = store.generate_unique_name(&format!("{}{LABELMAP_NAME_SUFFIX}", request.output_name));
    let display = DisplayNode {
        name: store.generate_unique_name(&format!("{name}{DISPLAY_NAME_SUFFIX}")),
        visible: true,
        color_table: store.standard_label_color_table(),
    };
    let volume = LabelmapVolume {
        name: name.clone(),
        grid,
        true_value,
        label_map: true,
    };

    let mut batch = BatchGuard::begin(store);
    let volume_id = batch.register_labelmap(volume).inspect_err(|e| error!("{e}"))?;
    let display_id = match batch.register_display(&volume_id, display) {
        Ok(id) => id,
        Err(e) => {
            error!(volume = %volume_id, "display registration failed, discarding result: {e}");
            batch.discard_artifact(&volume_id);
            return Err(e);
        }
    };
    if let Some(contour) = &request.output_contour {
        if let Err(e) = batch.set_active_labelmap(contour, &volume_id) {
            error!(%contour, volume = %volume_id, "cannot attach result, discarding it: {e}");
            batch.discard_artifact(&display_id);
            batch.discard_artifact(&volume_id);
            return Err(e);
        }
    }
    drop(batch);

    info!(volume = %volume_id, %name, "registered morphology result");
    Ok(MorphologyOutcome {
        volume: volume_id,
        display: display_id,
        name,
    })
}
