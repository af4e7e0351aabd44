//! Treatment machine and couch positions

use labelmorph_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Resting offset of the imaging panels, in mm
pub const DEFAULT_IMAGING_PANEL_MOVEMENT: f64 = -68.5;

/// Kinematic parameters of the treatment room.
///
/// Angles are in degrees, displacements in mm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoomsEyeViewParams {
    gantry_rotation_angle: f64,
    collimator_rotation_angle: f64,
    imaging_panel_movement: f64,
    patient_support_rotation_angle: f64,
    vertical_table_top_displacement: f64,
    longitudinal_table_top_displacement: f64,
    lateral_table_top_displacement: f64,
}

impl Default for RoomsEyeViewParams {
    fn default() -> Self {
        Self {
            gantry_rotation_angle: 0.0,
            collimator_rotation_angle: 0.0,
            imaging_panel_movement: DEFAULT_IMAGING_PANEL_MOVEMENT,
            patient_support_rotation_angle: 0.0,
            vertical_table_top_displacement: 0.0,
            longitudinal_table_top_displacement: 0.0,
            lateral_table_top_displacement: 0.0,
        }
    }
}

macro_rules! accessors {
    ($($field:ident, $setter:ident;)*) => {
        $(
            pub fn $field(&self) -> f64 {
                self.$field
            }

            pub fn $setter(&mut self, value: f64) {
                self.$field = value;
            }
        )*
    };
}

impl RoomsEyeViewParams {
    /// Attribute names in their serialized order
    pub const ATTRIBUTE_NAMES: [&'static str; 7] = [
        "GantryRotationAngle",
        "CollimatorRotationAngle",
        "ImagingPanelMovement",
        "PatientSupportRotationAngle",
        "VerticalTableTopDisplacement",
        "LongitudinalTableTopDisplacement",
        "LateralTableTopDisplacement",
    ];

    accessors! {
        gantry_rotation_angle, set_gantry_rotation_angle;
        collimator_rotation_angle, set_collimator_rotation_angle;
        imaging_panel_movement, set_imaging_panel_movement;
        patient_support_rotation_angle, set_patient_support_rotation_angle;
        vertical_table_top_displacement, set_vertical_table_top_displacement;
        longitudinal_table_top_displacement, set_longitudinal_table_top_displacement;
        lateral_table_top_displacement, set_lateral_table_top_displacement;
    }

    fn field_mut(&mut self, attribute: &str) -> Option<&mut f64> {
        Some(match attribute {
            "GantryRotationAngle" => &mut self.gantry_rotation_angle,
            "CollimatorRotationAngle" => &mut self.collimator_rotation_angle,
            "ImagingPanelMovement" => &mut self.imaging_panel_movement,
            "PatientSupportRotationAngle" => &mut self.patient_support_rotation_angle,
            "VerticalTableTopDisplacement" => &mut self.vertical_table_top_displacement,
            "LongitudinalTableTopDisplacement" => &mut self.longitudinal_table_top_displacement,
            "LateralTableTopDisplacement" => &mut self.lateral_table_top_displacement,
            _ => return None,
        })
    }

    fn values(&self) -> [f64; 7] {
        [
            self.gantry_rotation_angle,
            self.collimator_rotation_angle,
            self.imaging_panel_movement,
            self.patient_support_rotation_angle,
            self.vertical_table_top_displacement,
            self.longitudinal_table_top_displacement,
            self.lateral_table_top_displacement,
        ]
    }

    /// Flat `(attribute, value)` pairs, one per parameter
    pub fn write_attributes(&self) -> Vec<(&'static str, String)> {
        Self::ATTRIBUTE_NAMES
            .into_iter()
            .zip(self.values())
            .map(|(name, value)| (name, value.to_string()))
            .collect()
    }

    /// Apply `(attribute, value)` pairs.
    ///
    /// Unknown attributes are skipped. A value that does not parse as a
    /// number fails the whole call, leaving earlier attributes applied.
    pub fn read_attributes<'a, I>(&mut self, attributes: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (name, raw) in attributes {
            let Some(field) = self.field_mut(name) else {
                debug!(attribute = name, "ignoring unknown attribute");
                continue;
            };
            *field = raw.trim().parse::<f64>().map_err(|e| Error::InvalidParameter {
                name: "attribute",
                value: format!("{name}=\"{raw}\""),
                reason: e.to_string(),
            })?;
        }
        Ok(())
    }
}
