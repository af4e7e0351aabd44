//! Voxel element trait for generic sample values

use num_traits::{NumCast, Zero};
use std::fmt::Debug;

/// Trait for types that can be stored in a voxel.
///
/// Labelmaps are usually small unsigned integers, but intensity-derived
/// masks arrive as floats, so the kernels are written against this bound
/// rather than a concrete type.
pub trait VoxelElement:
    Copy + Clone + Debug + PartialOrd + PartialEq + NumCast + Zero + Send + Sync + 'static
{
    /// Whether this sample counts as foreground in boolean logic
    fn is_foreground(&self) -> bool;

    /// Convert self to f64
    fn to_f64(self) -> Option<f64> {
        NumCast::from(self)
    }
}

macro_rules! impl_voxel_element_int {
    ($t:ty) => {
        impl VoxelElement for $t {
            fn is_foreground(&self) -> bool {
                *self != 0
            }
        }
    };
}

macro_rules! impl_voxel_element_float {
    ($t:ty) => {
        impl VoxelElement for $t {
            fn is_foreground(&self) -> bool {
                // NaN compares unequal to zero but carries no label
                !self.is_nan() && *self != 0.0
            }
        }
    };
}

impl_voxel_element_int!(i8);
impl_voxel_element_int!(i16);
impl_voxel_element_int!(i32);
impl_voxel_element_int!(u8);
impl_voxel_element_int!(u16);
impl_voxel_element_int!(u32);
impl_voxel_element_float!(f32);
impl_voxel_element_float!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foreground_int() {
        assert!(!0u8.is_foreground());
        assert!(1u8.is_foreground());
        assert!((-3i16).is_foreground());
    }

    #[test]
    fn test_foreground_float() {
        assert!(!0.0f64.is_foreground());
        assert!(!f64::NAN.is_foreground());
        assert!(0.5f32.is_foreground());
    }
}
