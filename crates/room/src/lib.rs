//! # labelmorph room
//!
//! Parameter node for the treatment room's-eye view.
//!
//! [`RoomsEyeViewNode`] holds the machine and couch positions of a
//! radiotherapy treatment room plus references to the transform nodes
//! that place each room component in the fixed reference frame. The node
//! has no geometry logic of its own; it is the shared state that a room
//! model reads from.

pub mod params;
pub mod transforms;

pub use params::{RoomsEyeViewParams, DEFAULT_IMAGING_PANEL_MOVEMENT};
pub use transforms::{TransformNodeId, TransformReferences, TransformRole};

use labelmorph_core::Result;
use serde::{Deserialize, Serialize};

/// Room's-eye-view parameter node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomsEyeViewNode {
    params: RoomsEyeViewParams,
    references: TransformReferences,
}

impl RoomsEyeViewNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn params(&self) -> &RoomsEyeViewParams {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut RoomsEyeViewParams {
        &mut self.params
    }

    /// Copy parameters from `other`. Transform references stay as they are.
    pub fn copy_from(&mut self, other: &RoomsEyeViewNode) {
        self.params = other.params;
    }

    /// Serialize the parameters as flat `(attribute, value)` pairs
    pub fn write_attributes(&self) -> Vec<(&'static str, String)> {
        self.params.write_attributes()
    }

    /// Update parameters from flat `(attribute, value)` pairs
    pub fn read_attributes<'a, I>(&mut self, attributes: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        self.params.read_attributes(attributes)
    }

    pub fn set_transform_reference(&mut self, role: TransformRole, node: Option<TransformNodeId>) {
        self.references.set(role, node);
    }

    pub fn transform_reference(&self, role: TransformRole) -> Option<&TransformNodeId> {
        self.references.get(role)
    }

    pub fn transform_references(&self) -> &TransformReferences {
        &self.references
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_skips_references() {
        let mut source = RoomsEyeViewNode::new();
        source.params_mut().set_gantry_rotation_angle(90.0);
        source.set_transform_reference(
            TransformRole::GantryToFixedReference,
            Some(TransformNodeId::new("GantryToFixedReference")),
        );

        let mut target = RoomsEyeViewNode::new();
        target.set_transform_reference(
            TransformRole::CollimatorToGantry,
            Some(TransformNodeId::new("CollimatorToGantry")),
        );
        target.copy_from(&source);

        assert_eq!(target.params().gantry_rotation_angle(), 90.0);
        assert!(target
            .transform_reference(TransformRole::GantryToFixedReference)
            .is_none());
        assert_eq!(
            target
                .transform_reference(TransformRole::CollimatorToGantry)
                .map(|id| id.as_str()),
            Some("CollimatorToGantry")
        );
    }

    #[test]
    fn test_attribute_round_trip_through_node() {
        let mut node = RoomsEyeViewNode::new();
        node.params_mut().set_lateral_table_top_displacement(-12.25);
        let written = node.write_attributes();

        let mut restored = RoomsEyeViewNode::new();
        restored
            .read_attributes(written.iter().map(|(k, v)| (*k, v.as_str())))
            .unwrap();
        assert_eq!(restored.params(), node.params());
    }
}
