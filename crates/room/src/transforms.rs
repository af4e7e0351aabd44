//! Role-keyed references to the room's transform nodes

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Id of a transform node in the host scene
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TransformNodeId(String);

impl TransformNodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransformNodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Frame-to-frame transforms of the treatment room model
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TransformRole {
    GantryToFixedReference,
    CollimatorToGantry,
    LeftImagingPanelToLeftImagingPanelOrigin,
    LeftImagingPanelOriginToLeftImagingPanelRotated,
    LeftImagingPanelRotatedToGantry,
    LeftImagingPanelTranslation,
    RightImagingPanelToRightImagingPanelOrigin,
    RightImagingPanelOriginToRightImagingPanelRotated,
    RightImagingPanelRotatedToGantry,
    RightImagingPanelTranslation,
    PatientSupportToFixedReference,
    PatientSupportScaledToPatientSupport,
    PatientSupportScaledMovedToPatientSupportCompress,
    TableTopToTableTopEccentricRotation,
    TableTopEccentricToPatientSupport,
    TableTopMovedToPatientSupportMoved,
}

impl TransformRole {
    pub const ALL: [TransformRole; 16] = [
        Self::GantryToFixedReference,
        Self::CollimatorToGantry,
        Self::LeftImagingPanelToLeftImagingPanelOrigin,
        Self::LeftImagingPanelOriginToLeftImagingPanelRotated,
        Self::LeftImagingPanelRotatedToGantry,
        Self::LeftImagingPanelTranslation,
        Self::RightImagingPanelToRightImagingPanelOrigin,
        Self::RightImagingPanelOriginToRightImagingPanelRotated,
        Self::RightImagingPanelRotatedToGantry,
        Self::RightImagingPanelTranslation,
        Self::PatientSupportToFixedReference,
        Self::PatientSupportScaledToPatientSupport,
        Self::PatientSupportScaledMovedToPatientSupportCompress,
        Self::TableTopToTableTopEccentricRotation,
        Self::TableTopEccentricToPatientSupport,
        Self::TableTopMovedToPatientSupportMoved,
    ];

    /// Reference role string under which the host stores this link.
    ///
    /// These strings are persisted in saved scenes and must not change.
    pub fn role_name(self) -> &'static str {
        match self {
            Self::GantryToFixedReference => "gantryToFixedReferenceTransformRef",
            Self::CollimatorToGantry => "collimatorToGantryTransformRef",
            Self::LeftImagingPanelToLeftImagingPanelOrigin => {
                "leftImagingPanelToLeftImagingPanelTransformRef"
            }
            Self::LeftImagingPanelOriginToLeftImagingPanelRotated => {
                "leftImagingPanelOriginToLeftImagingPanelRotated"
            }
            Self::LeftImagingPanelRotatedToGantry => "leftImagingPanelRotatedToGantryTransformRef",
            Self::LeftImagingPanelTranslation => "leftImagingPanelTranslationTransformRef",
            Self::RightImagingPanelToRightImagingPanelOrigin => {
                "rightImagingPanelToRightImagingPanelTransformRef"
            }
            Self::RightImagingPanelOriginToRightImagingPanelRotated => {
                "rightImagingPanelOriginToRightImagingPanelRotated"
            }
            Self::RightImagingPanelRotatedToGantry => "rightImagingPanelRotatedToGantryTransformRef",
            Self::RightImagingPanelTranslation => "rightImagingPanelTranslationTransformRef",
            Self::PatientSupportToFixedReference => "patientSupportToFixedReferenceTransformRef",
            Self::PatientSupportScaledToPatientSupport => {
                "patientSupportScaledToPatientSupportTransformRef"
            }
            Self::PatientSupportScaledMovedToPatientSupportCompress => {
                "patientSupportScaledMovedToPatientSupportCompressTransformRef"
            }
            Self::TableTopToTableTopEccentricRotation => {
                "tableTopToTableTopEccentricRotationTransformRef"
            }
            Self::TableTopEccentricToPatientSupport => "tableTopEccentricToPatientSupportTransformRef",
            Self::TableTopMovedToPatientSupportMoved => {
                "tableTopMovedToPatientSupportMovedTransformRef"
            }
        }
    }

    /// Look a role up by its reference role string
    pub fn from_role_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.role_name() == name)
    }
}

/// At most one transform node per role
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformReferences {
    nodes: BTreeMap<TransformRole, TransformNodeId>,
}

impl TransformReferences {
    /// Point `role` at `node`, or clear it with `None`
    pub fn set(&mut self, role: TransformRole, node: Option<TransformNodeId>) {
        match node {
            Some(id) => {
                self.nodes.insert(role, id);
            }
            None => {
                self.nodes.remove(&role);
            }
        }
    }

    pub fn get(&self, role: TransformRole) -> Option<&TransformNodeId> {
        self.nodes.get(&role)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// `(role string, node id)` for every linked role
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &TransformNodeId)> {
        self.nodes.iter().map(|(role, id)| (role.role_name(), id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_role_names_unique() {
        let names: BTreeSet<_> = TransformRole::ALL.iter().map(|r| r.role_name()).collect();
        assert_eq!(names.len(), 16);
    }

    #[test]
    fn test_role_name_lookup() {
        for role in TransformRole::ALL {
            assert_eq!(TransformRole::from_role_name(role.role_name()), Some(role));
        }
        assert_eq!(
            TransformRole::GantryToFixedReference.role_name(),
            "gantryToFixedReferenceTransformRef"
        );
        assert_eq!(
            TransformRole::RightImagingPanelOriginToRightImagingPanelRotated.role_name(),
            "rightImagingPanelOriginToRightImagingPanelRotated"
        );
        assert!(TransformRole::from_role_name("beamTransformRef").is_none());
    }

    #[test]
    fn test_set_and_clear() {
        let mut refs = TransformReferences::default();
        assert!(refs.is_empty());

        refs.set(TransformRole::CollimatorToGantry, Some(TransformNodeId::new("T1")));
        refs.set(TransformRole::CollimatorToGantry, Some(TransformNodeId::new("T2")));
        assert_eq!(refs.len(), 1);
        assert_eq!(
            refs.get(TransformRole::CollimatorToGantry).map(|t| t.as_str()),
            Some("T2")
        );

        refs.set(TransformRole::CollimatorToGantry, None);
        assert!(refs.get(TransformRole::CollimatorToGantry).is_none());
        assert!(refs.is_empty());
    }

    #[test]
    fn test_iter_reports_role_strings() {
        let mut refs = TransformReferences::default();
        refs.set(TransformRole::TableTopMovedToPatientSupportMoved, Some(TransformNodeId::new("T9")));
        let pairs: Vec<_> = refs.iter().map(|(role, id)| (role, id.as_str())).collect();
        assert_eq!(pairs, vec![("tableTopMovedToPatientSupportMovedTransformRef", "T9")]);
    }
}
