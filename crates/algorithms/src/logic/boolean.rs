//! Boolean combination of one or two labelmaps

use labelmorph_core::volume::{VoxelElement, VoxelGrid};
use labelmorph_core::{Algorithm, Error, Result};
use ndarray::Zip;

/// Boolean operations on labelmaps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogicOp {
    #[default]
    Or,
    And,
    Xor,
    /// Unary: foreground where the first input is background
    Not,
}

impl LogicOp {
    /// Whether the operation needs a second input
    pub fn is_binary(self) -> bool {
        !matches!(self, LogicOp::Not)
    }

    fn apply(self, a: bool, b: bool) -> bool {
        match self {
            LogicOp::Or => a || b,
            LogicOp::And => a && b,
            LogicOp::Xor => a != b,
            LogicOp::Not => !a,
        }
    }
}

/// Combine labelmaps voxel by voxel.
///
/// Binary operations require `b` with the same dimensions as `a`.
/// `Not` reads only `a`; a second input is ignored. The output has the
/// geometry of `a`.
///
/// # Arguments
/// * `a` - First input
/// * `b` - Second input (binary operations only)
/// * `op` - Operation to apply
/// * `true_value` - Sample written at foreground voxels of the output
pub fn boolean_combine<T: VoxelElement>(
    a: &VoxelGrid<T>,
    b: Option<&VoxelGrid<T>>,
    op: LogicOp,
    true_value: T,
) -> Result<VoxelGrid<T>> {
    let mark = |fg: bool| if fg { true_value } else { T::zero() };

    let data = if op.is_binary() {
        let b = b.ok_or_else(|| Error::InvalidParameter {
            name: "second_input",
            value: "none".to_string(),
            reason: format!("{:?} needs two inputs", op),
        })?;
        if a.dimensions() != b.dimensions() {
            return Err(Error::SizeMismatch {
                expected: a.dimensions(),
                actual: b.dimensions(),
            });
        }
        Zip::from(a.data())
            .and(b.data())
            .map_collect(|x, y| mark(op.apply(x.is_foreground(), y.is_foreground())))
    } else {
        a.data().map(|x| mark(op.apply(x.is_foreground(), false)))
    };

    VoxelGrid::from_array(*a.geometry(), data)
}

/// Parameters for boolean logic
#[derive(Debug, Clone)]
pub struct LogicParams {
    pub op: LogicOp,
    pub true_value: f64,
}

impl Default for LogicParams {
    fn default() -> Self {
        Self {
            op: LogicOp::Or,
            true_value: 1.0,
        }
    }
}

/// Boolean logic algorithm over one or two grids
#[derive(Debug, Clone, Default)]
pub struct Logic;

impl Algorithm for Logic {
    type Input = (VoxelGrid<f64>, Option<VoxelGrid<f64>>);
    type Output = VoxelGrid<f64>;
    type Params = LogicParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Logic"
    }

    fn description(&self) -> &'static str {
        "Voxel-wise boolean combination of labelmaps"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        let (a, b) = input;
        boolean_combine(&a, b.as_ref(), params.op, params.true_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labelmorph_core::VoxelGeometry;

    fn grid_from(values: &[u8]) -> VoxelGrid<u8> {
        VoxelGrid::from_vec(VoxelGeometry::with_dimensions([values.len(), 1, 1]), values.to_vec())
            .unwrap()
    }

    fn samples(grid: &VoxelGrid<u8>) -> Vec<u8> {
        grid.data().iter().copied().collect()
    }

    #[test]
    fn test_or() {
        let a = grid_from(&[0, 1, 0, 3]);
        let b = grid_from(&[0, 0, 2, 1]);
        let out = boolean_combine(&a, Some(&b), LogicOp::Or, 5).unwrap();
        assert_eq!(samples(&out), vec![0, 5, 5, 5]);
    }

    #[test]
    fn test_and() {
        let a = grid_from(&[0, 1, 0, 3]);
        let b = grid_from(&[0, 0, 2, 1]);
        let out = boolean_combine(&a, Some(&b), LogicOp::And, 5).unwrap();
        assert_eq!(samples(&out), vec![0, 0, 0, 5]);
    }

    #[test]
    fn test_xor() {
        let a = grid_from(&[0, 1, 0, 3]);
        let b = grid_from(&[0, 0, 2, 1]);
        let out = boolean_combine(&a, Some(&b), LogicOp::Xor, 1).unwrap();
        assert_eq!(samples(&out), vec![0, 1, 1, 0]);
    }

    #[test]
    fn test_not_ignores_second_input() {
        let a = grid_from(&[0, 1, 0, 3]);
        let out = boolean_combine(&a, None, LogicOp::Not, 2).unwrap();
        assert_eq!(samples(&out), vec![2, 0, 2, 0]);

        let b = grid_from(&[1, 1, 1, 1]);
        let with_b = boolean_combine(&a, Some(&b), LogicOp::Not, 2).unwrap();
        assert_eq!(with_b, out);
    }

    #[test]
    fn test_binary_without_second_input() {
        let a = grid_from(&[0, 1]);
        assert!(matches!(
            boolean_combine(&a, None, LogicOp::And, 1),
            Err(Error::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_size_mismatch() {
        let a = grid_from(&[0, 1]);
        let b = grid_from(&[0, 1, 1]);
        assert!(matches!(
            boolean_combine(&a, Some(&b), LogicOp::Or, 1),
            Err(Error::SizeMismatch { .. })
        ));
    }

    #[test]
    fn test_logic_algorithm_trait() {
        let geometry = VoxelGeometry::with_dimensions([2, 1, 1]);
        let a = VoxelGrid::from_vec(geometry, vec![0.0, 4.0]).unwrap();
        let params = LogicParams {
            op: LogicOp::Not,
            true_value: 4.0,
        };
        let out = Logic.execute((a, None), params).unwrap();
        assert_eq!(out.data().iter().copied().collect::<Vec<_>>(), vec![4.0, 0.0]);
    }
}
