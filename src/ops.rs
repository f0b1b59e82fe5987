use std::ops::{Add, Mul};

use Matrix;

/// Entry-wise sum `a + b`.
///
/// Returns `None` if either operand has no storage or the shapes differ.
pub fn add(a: &Matrix, b: &Matrix) -> Option<Matrix> {
    let (a_data, b_data) = match (a.values(), b.values()) {
        (Some(a_data), Some(b_data)) => (a_data, b_data),
        _ => {
            debug!("add: operand without storage ({:?} + {:?})", a.dims(), b.dims());
            return None;
        }
    };
    if a.dims() != b.dims() {
        debug!("add: shape mismatch ({:?} + {:?})", a.dims(), b.dims());
        return None;
    }

    let mut out = Matrix::new(a.nrows(), a.ncols());
    {
        let out_data = out.values_mut()?;
        for (o, (l, r)) in out_data.iter_mut().zip(a_data.iter().zip(b_data.iter())) {
            *o = l + r;
        }
    }
    Some(out)
}

/// Matrix product `a * b`, shaped `a.nrows() x b.ncols()`.
///
/// The operands are only accepted when `a.nrows() == b.ncols()` and `a.ncols() == b.nrows()`;
/// anything else, or an operand without storage, yields `None`.
pub fn mult(a: &Matrix, b: &Matrix) -> Option<Matrix> {
    let (a_data, b_data) = match (a.values(), b.values()) {
        (Some(a_data), Some(b_data)) => (a_data, b_data),
        _ => {
            debug!("mult: operand without storage ({:?} * {:?})", a.dims(), b.dims());
            return None;
        }
    };
    if !(a.nrows() == b.ncols() && a.ncols() == b.nrows()) {
        debug!("mult: incompatible shapes ({:?} * {:?})", a.dims(), b.dims());
        return None;
    }

    let (m, k, n) = (a.nrows(), a.ncols(), b.ncols());
    trace!("mult: {}x{} * {}x{}", m, k, k, n);
    let mut out = Matrix::new(m, n);
    {
        let out_data = out.values_mut()?;
        for i in 0..m {
            for j in 0..n {
                for p in 0..k {
                    out_data[i * n + j] += a_data[i * k + p] * b_data[p * n + j];
                }
            }
        }
    }
    Some(out)
}

macro_rules! implement_binop {
    ($trait_:ident, $name:ident, $kernel:ident, $lhs:ty, $rhs:ty) => {
        impl $trait_<$rhs> for $lhs {
            type Output = Option<Matrix>;

            fn $name(self, rhs: $rhs) -> Option<Matrix> {
                $kernel(&self, &rhs)
            }
        }
    };
    ($trait_:ident, $name:ident, $kernel:ident, $lhs:ty, $rhs:ty, $( $lifetime:tt ),* ) => {
        impl<$($lifetime),*> $trait_<$rhs> for $lhs {
            type Output = Option<Matrix>;

            fn $name(self, rhs: $rhs) -> Option<Matrix> {
                $kernel(&self, &rhs)
            }
        }
    };
}
implement_binop!(Add, add, add, Matrix, Matrix);
implement_binop!(Add, add, add, Matrix, &'a Matrix, 'a);
implement_binop!(Add, add, add, &'a Matrix, Matrix, 'a);
implement_binop!(Add, add, add, &'a Matrix, &'b Matrix, 'a, 'b);

implement_binop!(Mul, mul, mult, Matrix, Matrix);
implement_binop!(Mul, mul, mult, Matrix, &'a Matrix, 'a);
implement_binop!(Mul, mul, mult, &'a Matrix, Matrix, 'a);
implement_binop!(Mul, mul, mult, &'a Matrix, &'b Matrix, 'a, 'b);

#[cfg(test)]
mod tests {
    use super::*;

    fn init_logger() {
        let _ = ::env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_add() {
        let (m, n) = (2, 4);
        let a = Matrix::from_vec(vec![2.0, 7.0, 6.0, 2.0, 0.0, 7.0, 4.0, 2.0], m, n).unwrap();
        let b = Matrix::from_vec(
            vec![38.0, 83.0, 44.0, 98.0, 50.0, 113.0, 56.0, 128.0], m, n).unwrap();

        let out = add(&a, &b).unwrap();

        assert_eq!(out.dims(), (m, n));
        assert_eq!(out.values().unwrap(),
            &[40.0, 90.0, 50.0, 100.0, 50.0, 120.0, 60.0, 130.0][..]);
        // inputs untouched
        assert_eq!(a.get(0, 1).unwrap(), 7.0);
        assert_eq!(b.get(0, 1).unwrap(), 83.0);
    }

    #[test]
    fn test_add_commutes() {
        let a = Matrix::rand(4, 3);
        let b = Matrix::rand(4, 3);
        assert_eq!(add(&a, &b).unwrap(), add(&b, &a).unwrap());
    }

    #[test]
    fn test_add_shape_mismatch() {
        init_logger();
        let a = Matrix::ones(2, 3);
        let b = Matrix::ones(3, 2);
        assert!(add(&a, &b).is_none());
        assert!(add(&b, &a).is_none());
    }

    #[test]
    fn test_add_without_storage() {
        init_logger();
        let a = Matrix::ones(2, 2);
        let mut b = Matrix::ones(2, 2);
        b.deinit();
        assert!(add(&a, &b).is_none());
        assert!(add(&b, &a).is_none());
        assert!(add(&Matrix::new(0, 2), &Matrix::new(0, 2)).is_none());
    }

    #[test]
    fn test_matrix_add_move_ref() {
        let a = mat![2, 7; 6, 2];
        let b = mat![38, 83; 44, 98];
        let out = (a + &b).unwrap();
        assert_eq!(out, mat![40, 90; 50, 100]);
    }

    #[test]
    fn test_matrix_add_move_move() {
        let a = mat![2, 7; 6, 2];
        let b = mat![38, 83; 44, 98];
        let out = (a + b).unwrap();
        assert_eq!(out, mat![40, 90; 50, 100]);
    }

    #[test]
    fn test_matrix_add_ref_move() {
        let a = mat![2, 7; 6, 2];
        let b = mat![38, 83; 44, 98];
        let out = (&a + b).unwrap();
        assert_eq!(out, mat![40, 90; 50, 100]);
    }

    #[test]
    fn test_matrix_add_ref_ref() {
        let a = mat![2, 7; 6, 2];
        let b = mat![38, 83; 44, 98];
        let out = (&a + &b).unwrap();
        assert_eq!(out, mat![40, 90; 50, 100]);
        assert!((&a + &Matrix::ones(2, 3)).is_none());
    }

    #[test]
    fn test_mult_ones() {
        let a = Matrix::ones(2, 3);
        let b = Matrix::ones(3, 2);

        let out = mult(&a, &b).unwrap();

        assert_eq!(out.dims(), (2, 2));
        assert!(out.iter().all(|f| f == 3.0));
    }

    #[test]
    fn test_mult() {
        let a = mat![1, 2, 3; 4, 5, 6];
        let b = mat![7, 8; 9, 10; 11, 12];

        let out = mult(&a, &b).unwrap();
        assert_eq!(out, mat![58, 64; 139, 154]);

        let out = mult(&b, &a).unwrap();
        assert_eq!(out, mat![39, 54, 69; 49, 68, 87; 59, 82, 105]);
    }

    #[test]
    fn test_mult_incompatible() {
        init_logger();
        let a = Matrix::ones(2, 3);
        assert!(mult(&a, &Matrix::ones(2, 3)).is_none());

        // inner dimensions agree, but a.nrows() != b.ncols()
        assert!(mult(&Matrix::ones(3, 2), &Matrix::ones(2, 4)).is_none());
    }

    #[test]
    fn test_mult_without_storage() {
        init_logger();
        let a = Matrix::ones(2, 2);
        let mut b = Matrix::ones(2, 2);
        b.deinit();
        assert!(mult(&a, &b).is_none());
        assert!(mult(&b, &a).is_none());
    }

    #[test]
    fn test_mult_identity() {
        let n = 4;
        let a = Matrix::rand(n, n);
        let mut eye = Matrix::new(n, n);
        for i in 0..n {
            eye.set(i, i, 1.0).unwrap();
        }

        assert_fpvec_eq!(mult(&a, &eye).unwrap(), a);
        assert_fpvec_eq!(mult(&eye, &a).unwrap(), a);
        assert_eq!(eye, Matrix::eye(n));
    }

    #[test]
    fn test_matrix_mul_move_ref() {
        let a = mat![1, 2, 3; 4, 5, 6];
        let b = mat![7, 8; 9, 10; 11, 12];
        let out = (a * &b).unwrap();
        assert_eq!(out, mat![58, 64; 139, 154]);
    }

    #[test]
    fn test_matrix_mul_move_move() {
        let a = mat![1, 2, 3; 4, 5, 6];
        let b = mat![7, 8; 9, 10; 11, 12];
        let out = (a * b).unwrap();
        assert_eq!(out, mat![58, 64; 139, 154]);
    }

    #[test]
    fn test_matrix_mul_ref_move() {
        let a = mat![1, 2, 3; 4, 5, 6];
        let b = mat![7, 8; 9, 10; 11, 12];
        let out = (&a * b).unwrap();
        assert_eq!(out, mat![58, 64; 139, 154]);
    }

    #[test]
    fn test_matrix_mul_ref_ref() {
        let a = mat![1, 2, 3; 4, 5, 6];
        let b = mat![7, 8; 9, 10; 11, 12];
        let out = (&a * &b).unwrap();
        assert_eq!(out, mat![58, 64; 139, 154]);
        assert!((&a * &a).is_none());
    }
}
