use std::fmt;

use rand::{self, Rng};

use errors::*;

/// Dense row-major matrix of `f64` values.
///
/// A matrix with a zero dimension carries no storage at all; this is the "empty" state, which
/// every accessor and kernel can detect with [`Matrix::is_empty`].
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    values: Option<Vec<f64>>,
}

impl Matrix {
    /// Creates a `nrows` x `ncols` matrix with every entry set to `0.0`.
    ///
    /// If either dimension is zero the matrix records the requested shape but holds no storage.
    pub fn new(nrows: usize, ncols: usize) -> Matrix {
        Matrix::filled(nrows, ncols, 0.0)
    }
    /// Same as [`Matrix::new`].
    pub fn zeros(nrows: usize, ncols: usize) -> Matrix {
        Matrix::new(nrows, ncols)
    }
    /// Creates a `nrows` x `ncols` matrix with every entry set to `1.0`.
    pub fn ones(nrows: usize, ncols: usize) -> Matrix {
        Matrix::filled(nrows, ncols, 1.0)
    }
    fn filled(nrows: usize, ncols: usize, value: f64) -> Matrix {
        let values = if nrows == 0 || ncols == 0 {
            None
        } else {
            Some(vec![value; nrows * ncols])
        };
        Matrix {
            rows: nrows,
            cols: ncols,
            values: values,
        }
    }

    /// Builds a matrix from row-major `data`.
    ///
    /// Fails with `InvalidArgument` if `data` does not hold exactly `nrows * ncols` values or
    /// that product overflows.
    pub fn from_vec(data: Vec<f64>, nrows: usize, ncols: usize) -> Result<Matrix> {
        let len = nrows.checked_mul(ncols)
            .ok_or_else(|| Error::from_kind(ErrorKind::InvalidArgument("dimensions overflow")))?;
        if data.len() != len {
            return Err(Error::from_kind(ErrorKind::InvalidArgument(
                "data length does not match dimensions")));
        }
        let values = if nrows == 0 || ncols == 0 { None } else { Some(data) };
        Ok(Matrix {
            rows: nrows,
            cols: ncols,
            values: values,
        })
    }
    /// Builds a matrix from a list of rows, which must all have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Matrix> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |row| row.len());
        if rows.iter().any(|row| row.len() != ncols) {
            return Err(Error::from_kind(ErrorKind::InvalidArgument("rows differ in length")));
        }
        let data = rows.into_iter().flat_map(|row| row.into_iter()).collect();
        Matrix::from_vec(data, nrows, ncols)
    }
    /// Square matrix with `vec` on the diagonal and zeros elsewhere.
    pub fn diag(vec: &[f64]) -> Matrix {
        let n = vec.len();
        let mut m = Matrix::new(n, n);
        if let Some(values) = m.values.as_mut() {
            for (i, &v) in vec.iter().enumerate() {
                values[i * n + i] = v;
            }
        }
        m
    }
    /// `n` x `n` identity matrix.
    pub fn eye(n: usize) -> Matrix {
        Matrix::diag(&vec![1.0; n])
    }
    /// Matrix of uniformly distributed values in `[0, 1)`.
    pub fn rand(nrows: usize, ncols: usize) -> Matrix {
        let mut rng = rand::thread_rng();
        let mut m = Matrix::new(nrows, ncols);
        if let Some(values) = m.values.as_mut() {
            for v in values.iter_mut() {
                *v = rng.gen();
            }
        }
        m
    }

    /// Re-initializes this matrix in place as a zeroed `nrows` x `ncols` grid, releasing any
    /// previous storage.
    pub fn init(&mut self, nrows: usize, ncols: usize) {
        *self = Matrix::new(nrows, ncols);
    }
    /// Releases the storage (if any) and resets the shape to `0 x 0`. Safe to call repeatedly.
    pub fn deinit(&mut self) {
        self.values = None;
        self.rows = 0;
        self.cols = 0;
    }

    pub fn nrows(&self) -> usize { self.rows }
    pub fn ncols(&self) -> usize { self.cols }
    pub fn dims(&self) -> (usize, usize) { (self.rows, self.cols) }
    pub fn len(&self) -> usize { self.values.as_ref().map_or(0, |v| v.len()) }
    /// `true` when the matrix holds no storage (a zero dimension, or after `deinit`).
    pub fn is_empty(&self) -> bool { self.values.is_none() }
    pub fn is_square(&self) -> bool { self.rows == self.cols }

    /// Row-major view of the entries, or `None` for an empty matrix.
    pub fn values(&self) -> Option<&[f64]> {
        self.values.as_ref().map(|v| &v[..])
    }
    pub(crate) fn values_mut(&mut self) -> Option<&mut [f64]> {
        self.values.as_mut().map(|v| &mut v[..])
    }
    pub fn row(&self, r: usize) -> Option<&[f64]> {
        if r >= self.rows {
            return None;
        }
        let cols = self.cols;
        self.values().map(|v| &v[r * cols..(r + 1) * cols])
    }

    pub fn iter(&self) -> MatrixIter {
        MatrixIter {
            mat: self,
            current_loc: (0, 0),
        }
    }

    pub fn get(&self, r: usize, c: usize) -> Result<f64> {
        let i = self.index(r, c)?;
        self.values().map(|v| v[i])
            .ok_or_else(|| Error::from_kind(ErrorKind::InvalidArgument("matrix has no storage")))
    }
    pub fn set(&mut self, r: usize, c: usize, value: f64) -> Result<()> {
        let i = self.index(r, c)?;
        match self.values_mut() {
            Some(v) => {
                v[i] = value;
                Ok(())
            }
            None => Err(Error::from_kind(ErrorKind::InvalidArgument("matrix has no storage"))),
        }
    }

    #[inline]
    fn index(&self, r: usize, c: usize) -> Result<usize> {
        if self.values.is_none() {
            trace!("access ({}, {}) on matrix without storage", r, c);
            return Err(Error::from_kind(ErrorKind::InvalidArgument("matrix has no storage")));
        }
        if r >= self.rows || c >= self.cols {
            trace!("access ({}, {}) outside {}x{} matrix", r, c, self.rows, self.cols);
            return Err(Error::from_kind(ErrorKind::InvalidArgument("index out of bounds")));
        }
        Ok(r * self.cols + c)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(values) = self.values() {
            for row in values.chunks(self.cols) {
                for v in row {
                    write!(f, "{:+1.5e} ", v)?;
                }
                write!(f, "\n")?;
            }
        }
        Ok(())
    }
}

/// Row-major iterator over the entries of a matrix. Yields nothing for an empty matrix.
pub struct MatrixIter<'a> {
    mat: &'a Matrix,
    current_loc: (usize, usize),
}
impl<'a> Iterator for MatrixIter<'a> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.current_loc.0 >= self.mat.nrows() { return None }

        let (r, c) = self.current_loc;
        let ncols = self.mat.ncols();
        let val = self.mat.values().map(|v| v[r * ncols + c]);

        self.current_loc.1 += 1;
        if self.current_loc.1 >= self.mat.ncols() {
            self.current_loc.1 = 0;
            self.current_loc.0 += 1;
        }
        val
    }
}
