use Matrix;

use errors::*;

/// Entry-wise matrix norm types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Norm {
    /// L1 norm: sum of the absolute values of all entries
    L1,
    /// L2 (Frobenius) norm: square root of the sum of squares of all entries
    L2,
}

impl Matrix {
    /// Entry-wise L1 norm, summed in row-major order.
    ///
    /// Fails with `InvalidArgument` if the matrix has no storage or a zero dimension.
    pub fn l1(&self) -> Result<f64> {
        match self.values() {
            Some(values) if self.nrows() > 0 && self.ncols() > 0 => {
                Ok(values.iter().fold(0.0, |acc, f| acc + f.abs()))
            }
            _ => {
                debug!("l1: matrix {:?} has no entries", self.dims());
                Err(Error::from_kind(ErrorKind::InvalidArgument(
                    "l1 norm requires a non-empty matrix")))
            }
        }
    }

    /// Entry-wise L2 (Frobenius) norm, summed in row-major order.
    ///
    /// Unlike `l1` this never fails: a matrix without storage has norm `0.0`.
    pub fn l2(&self) -> f64 {
        self.values()
            .map_or(0.0, |values| values.iter().fold(0.0, |acc, f| acc + f * f).sqrt())
    }

    /// Computes the specified norm, keeping each norm's own handling of empty matrices.
    pub fn entrywise_norm(&self, norm_type: Norm) -> Result<f64> {
        match norm_type {
            Norm::L1 => { self.l1() }
            Norm::L2 => { Ok(self.l2()) }
        }
    }
}
