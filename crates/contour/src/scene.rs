//! In-memory contour store
//!
//! Stands in for the host scene in tests, demos and headless pipelines.

use std::collections::{BTreeMap, BTreeSet};

use labelmorph_algorithms::statistics::observed_maximum;
use labelmorph_core::{Error, Result, VoxelElement, VoxelGrid};
use tracing::debug;

use crate::store::{
    ArtifactId, ColorTableId, ContourId, ContourStore, DisplayNode, LabelmapVolume, Representation,
};

/// Id of the standard label color table
pub const STANDARD_LABEL_COLOR_TABLE: &str = "ColorTableLabels";

#[derive(Debug, Clone)]
struct ContourEntry {
    name: String,
    representation: Representation,
    labelmap: Option<ArtifactId>,
}

/// A scene of contours, labelmap volumes and display nodes
#[derive(Debug, Clone)]
pub struct Scene<T: VoxelElement> {
    contours: BTreeMap<ContourId, ContourEntry>,
    volumes: BTreeMap<ArtifactId, LabelmapVolume<T>>,
    displays: BTreeMap<ArtifactId, DisplayNode>,
    display_of: BTreeMap<ArtifactId, ArtifactId>,
    color_tables: BTreeSet<ColorTableId>,
    names: BTreeSet<String>,
    next_id: u64,
    batch_depth: usize,
    completed_batches: usize,
}

impl<T: VoxelElement> Default for Scene<T> {
    fn default() -> Self {
        Self {
            contours: BTreeMap::new(),
            volumes: BTreeMap::new(),
            displays: BTreeMap::new(),
            display_of: BTreeMap::new(),
            color_tables: BTreeSet::new(),
            names: BTreeSet::new(),
            next_id: 1,
            batch_depth: 0,
            completed_batches: 0,
        }
    }
}

impl<T: VoxelElement> Scene<T> {
    /// Empty scene without color tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty scene with the standard label color table loaded
    pub fn with_standard_colors() -> Self {
        let mut scene = Self::default();
        scene.add_color_table(ColorTableId::new(STANDARD_LABEL_COLOR_TABLE));
        scene
    }

    pub fn add_color_table(&mut self, id: ColorTableId) {
        self.color_tables.insert(id);
    }

    /// Add a contour backed by a labelmap volume
    pub fn add_labelmap_contour(&mut self, name: &str, grid: VoxelGrid<T>) -> Result<ContourId> {
        let true_value = observed_maximum(&grid).unwrap_or_else(T::zero);
        let volume_name = self.generate_unique_name(&format!("{name} - Labelmap"));
        let volume = self.register_labelmap(LabelmapVolume {
            name: volume_name,
            grid,
            true_value,
            label_map: true,
        })?;
        let id = self.add_contour(name, Representation::IndexedLabelmap);
        self.set_active_labelmap(&id, &volume)?;
        Ok(id)
    }

    /// Add a contour without a labelmap, in the given representation
    pub fn add_contour(&mut self, name: &str, representation: Representation) -> ContourId {
        let id = ContourId::new(self.allocate_id("Contour"));
        let name = self.generate_unique_name(name);
        self.names.insert(name.clone());
        self.contours.insert(
            id.clone(),
            ContourEntry {
                name,
                representation,
                labelmap: None,
            },
        );
        id
    }

    /// Switch a contour to another representation
    pub fn set_representation(&mut self, contour: &ContourId, representation: Representation) -> Result<()> {
        let entry = self.contour_mut(contour)?;
        entry.representation = representation;
        Ok(())
    }

    pub fn contour_name(&self, contour: &ContourId) -> Option<&str> {
        self.contours.get(contour).map(|c| c.name.as_str())
    }

    /// Labelmap volume currently backing a contour
    pub fn contour_labelmap(&self, contour: &ContourId) -> Option<&ArtifactId> {
        self.contours.get(contour).and_then(|c| c.labelmap.as_ref())
    }

    pub fn volume(&self, id: &ArtifactId) -> Option<&LabelmapVolume<T>> {
        self.volumes.get(id)
    }

    pub fn display(&self, id: &ArtifactId) -> Option<&DisplayNode> {
        self.displays.get(id)
    }

    /// Display node attached to a volume
    pub fn display_of(&self, volume: &ArtifactId) -> Option<&DisplayNode> {
        self.display_of.get(volume).and_then(|d| self.displays.get(d))
    }

    /// Number of registered volumes and display nodes
    pub fn artifact_count(&self) -> usize {
        self.volumes.len() + self.displays.len()
    }

    pub fn volume_count(&self) -> usize {
        self.volumes.len()
    }

    pub fn is_batch_processing(&self) -> bool {
        self.batch_depth > 0
    }

    /// How many outermost batches have closed, i.e. how often observers were notified
    pub fn completed_batches(&self) -> usize {
        self.completed_batches
    }

    fn allocate_id(&mut self, prefix: &str) -> String {
        let id = format!("{prefix}{}", self.next_id);
        self.next_id += 1;
        id
    }

    fn contour_mut(&mut self, contour: &ContourId) -> Result<&mut ContourEntry> {
        self.contours.get_mut(contour).ok_or_else(|| Error::InputNotReady {
            reference: contour.to_string(),
            reason: "contour not found in scene".to_string(),
        })
    }
}

impl<T: VoxelElement> ContourStore for Scene<T> {
    type Sample = T;

    fn representation(&self, contour: &ContourId) -> Option<Representation> {
        self.contours.get(contour).map(|c| c.representation)
    }

    fn resolve_labelmap(&self, contour: &ContourId) -> Option<&VoxelGrid<T>> {
        let entry = self.contours.get(contour)?;
        if entry.representation != Representation::IndexedLabelmap {
            return None;
        }
        entry
            .labelmap
            .as_ref()
            .and_then(|id| self.volumes.get(id))
            .map(|v| &v.grid)
    }

    fn generate_unique_name(&self, base: &str) -> String {
        if !self.names.contains(base) {
            return base.to_string();
        }
        (1..)
            .map(|n| format!("{base}_{n}"))
            .find(|candidate| !self.names.contains(candidate))
            .unwrap_or_else(|| base.to_string())
    }

    fn standard_label_color_table(&self) -> Option<ColorTableId> {
        let id = ColorTableId::new(STANDARD_LABEL_COLOR_TABLE);
        self.color_tables.contains(&id).then_some(id)
    }

    fn begin_batch(&mut self) {
        self.batch_depth += 1;
    }

    fn end_batch(&mut self) {
        match self.batch_depth {
            0 => debug!("end_batch without matching begin_batch"),
            1 => {
                self.batch_depth = 0;
                self.completed_batches += 1;
            }
            _ => self.batch_depth -= 1,
        }
    }

    fn register_labelmap(&mut self, volume: LabelmapVolume<T>) -> Result<ArtifactId> {
        if self.names.contains(&volume.name) {
            return Err(Error::InvalidParameter {
                name: "volume_name",
                value: volume.name,
                reason: "a node with this name already exists".to_string(),
            });
        }
        let id = ArtifactId::new(self.allocate_id("LabelmapVolume"));
        self.names.insert(volume.name.clone());
        self.volumes.insert(id.clone(), volume);
        Ok(id)
    }

    fn register_display(&mut self, volume: &ArtifactId, display: DisplayNode) -> Result<ArtifactId> {
        if !self.volumes.contains_key(volume) {
            return Err(Error::InputNotReady {
                reference: volume.to_string(),
                reason: "display target volume not registered".to_string(),
            });
        }
        if self.names.contains(&display.name) {
            return Err(Error::InvalidParameter {
                name: "display_name",
                value: display.name,
                reason: "a node with this name already exists".to_string(),
            });
        }
        let id = ArtifactId::new(self.allocate_id("LabelmapDisplay"));
        self.names.insert(display.name.clone());
        self.displays.insert(id.clone(), display);
        self.display_of.insert(volume.clone(), id.clone());
        Ok(id)
    }

    fn set_active_labelmap(&mut self, contour: &ContourId, volume: &ArtifactId) -> Result<()> {
        if !self.volumes.contains_key(volume) {
            return Err(Error::InputNotReady {
                reference: volume.to_string(),
                reason: "labelmap volume not registered".to_string(),
            });
        }
        let entry = self.contour_mut(contour)?;
        entry.labelmap = Some(volume.clone());
        entry.representation = Representation::IndexedLabelmap;
        Ok(())
    }

    fn discard_artifact(&mut self, artifact: &ArtifactId) {
        if let Some(volume) = self.volumes.remove(artifact) {
            self.names.remove(&volume.name);
            if let Some(display) = self.display_of.remove(artifact) {
                if let Some(node) = self.displays.remove(&display) {
                    self.names.remove(&node.name);
                }
            }
            for entry in self.contours.values_mut() {
                if entry.labelmap.as_ref() == Some(artifact) {
                    entry.labelmap = None;
                }
            }
            debug!(%artifact, "discarded labelmap volume");
        } else if let Some(node) = self.displays.remove(artifact) {
            self.names.remove(&node.name);
            self.display_of.retain(|_, display| display != artifact);
            debug!(%artifact, "discarded display node");
        }
    }
}
