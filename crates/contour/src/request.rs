//! Morphology request parameters

use labelmorph_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::store::ContourId;

/// Morphology operations on contour labelmaps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MorphologyOperation {
    /// Grow the contour by the kernel size
    Expand,
    /// Shrink the contour by the kernel size
    Shrink,
    /// Voxels in either contour
    Union,
    /// Voxels in both contours
    Intersect,
    /// Voxels in the primary contour but not the secondary
    Subtract,
}

impl MorphologyOperation {
    pub const ALL: [MorphologyOperation; 5] = [
        MorphologyOperation::Expand,
        MorphologyOperation::Shrink,
        MorphologyOperation::Union,
        MorphologyOperation::Intersect,
        MorphologyOperation::Subtract,
    ];

    /// Decode the integer code hosts store in their parameter nodes
    pub fn from_code(code: i32) -> Result<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(Error::UnsupportedOperation(code))
    }

    pub fn code(self) -> i32 {
        match self {
            MorphologyOperation::Expand => 0,
            MorphologyOperation::Shrink => 1,
            MorphologyOperation::Union => 2,
            MorphologyOperation::Intersect => 3,
            MorphologyOperation::Subtract => 4,
        }
    }

    /// Whether the operation reads a secondary contour
    pub fn is_binary(self) -> bool {
        matches!(
            self,
            MorphologyOperation::Union | MorphologyOperation::Intersect | MorphologyOperation::Subtract
        )
    }
}

/// A single morphology request.
///
/// The operation is kept as the host's integer code and decoded when the
/// request is executed, so an unknown code surfaces as
/// [`Error::UnsupportedOperation`] instead of being rejected at parse time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MorphologyRequest {
    /// Contour to operate on
    pub primary: ContourId,
    /// Second operand of Union, Intersect and Subtract
    pub secondary: Option<ContourId>,
    /// Operation code, see [`MorphologyOperation::code`]
    pub operation: i32,
    /// Expand/shrink distance per axis in physical units (mm)
    pub kernel_size: [f64; 3],
    /// Base name of the new labelmap volume
    pub output_name: String,
    /// Contour whose active representation becomes the new labelmap
    pub output_contour: Option<ContourId>,
}

impl MorphologyRequest {
    /// Request for `operation` on `primary`, with a 1 mm kernel and the
    /// primary id as output name
    pub fn new(primary: ContourId, operation: MorphologyOperation) -> Self {
        let output_name = primary.as_str().to_string();
        Self {
            primary,
            secondary: None,
            operation: operation.code(),
            kernel_size: [1.0, 1.0, 1.0],
            output_name,
            output_contour: None,
        }
    }

    pub fn with_secondary(mut self, secondary: ContourId) -> Self {
        self.secondary = Some(secondary);
        self
    }

    pub fn with_kernel_size(mut self, kernel_size: [f64; 3]) -> Self {
        self.kernel_size = kernel_size;
        self
    }

    pub fn with_output_name(mut self, name: impl Into<String>) -> Self {
        self.output_name = name.into();
        self
    }

    pub fn with_output_contour(mut self, contour: ContourId) -> Self {
        self.output_contour = Some(contour);
        self
    }

    /// Replace the operation with a raw host code
    pub fn with_operation_code(mut self, code: i32) -> Self {
        self.operation = code;
        self
    }

    /// Decoded operation
    pub fn operation(&self) -> Result<MorphologyOperation> {
        MorphologyOperation::from_code(self.operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for op in MorphologyOperation::ALL {
            assert_eq!(MorphologyOperation::from_code(op.code()).unwrap(), op);
        }
    }

    #[test]
    fn test_unknown_code() {
        assert!(matches!(
            MorphologyOperation::from_code(5),
            Err(Error::UnsupportedOperation(5))
        ));
        assert!(matches!(
            MorphologyOperation::from_code(-1),
            Err(Error::UnsupportedOperation(-1))
        ));
    }

    #[test]
    fn test_binary_operations() {
        assert!(!MorphologyOperation::Expand.is_binary());
        assert!(!MorphologyOperation::Shrink.is_binary());
        assert!(MorphologyOperation::Union.is_binary());
        assert!(MorphologyOperation::Subtract.is_binary());
    }

    #[test]
    fn test_request_builder() {
        let request = MorphologyRequest::new(ContourId::new("ptv"), MorphologyOperation::Subtract)
            .with_secondary(ContourId::new("cord"))
            .with_output_name("ptv-minus-cord");
        assert_eq!(request.operation().unwrap(), MorphologyOperation::Subtract);
        assert_eq!(request.secondary, Some(ContourId::new("cord")));
        assert_eq!(request.output_name, "ptv-minus-cord");
        assert_eq!(request.kernel_size, [1.0; 3]);
    }
}
