// Example:
// let a = mat![1, 2, 3, 4; 5, 6, 7, 8; 9, 10, 11, 12];
// assert_eq!(a.dims(), (3, 4));
#[macro_export]
macro_rules! mat {
    [$( $( $x:expr ),* );*] => {{
        let rows: Vec<Vec<f64>> = vec![$( vec![$( $x as f64 ),*] ),*];
        $crate::Matrix::from_rows(rows).expect("mat!: every row must have the same length")
    }}
}

#[cfg(test)]
macro_rules! assert_fp_eq {
    ($left:expr, $right:expr) => { assert_fp_eq!($left, $right, 1.0e-6) };
    ($left:expr, $right:expr, $tol:expr) => {{
        let (l, r): (f64, f64) = ($left, $right);
        assert!((l - r).abs() <= $tol * r.abs().max(1.0),
            "floating point assertion failed: {} != {}", l, r);
    }}
}

#[cfg(test)]
macro_rules! assert_fpvec_eq {
    ($left:expr, $right:expr) => {{
        let (l, r) = (&$left, &$right);
        assert_eq!(l.dims(), r.dims());
        for (a, b) in l.iter().zip(r.iter()) {
            assert_fp_eq!(a, b);
        }
    }}
}
