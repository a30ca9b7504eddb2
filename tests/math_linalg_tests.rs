#![cfg(feature = "dev")]
//! Tests for the truncated-SVD least-squares solve.

use approx::assert_relative_eq;

use smap_rs::internals::math::linalg::{FloatLinalg, SINGULAR_VALUE_RTOL};

fn solve(a: &[f64], b: &[f64], rows: usize, cols: usize) -> Option<Vec<f64>> {
    f64::solve_truncated_svd(a, b, rows, cols, SINGULAR_VALUE_RTOL)
}

#[test]
fn test_solve_diagonal() {
    let x = solve(&[2.0, 0.0, 0.0, 4.0], &[2.0, 8.0], 2, 2).unwrap();
    assert_relative_eq!(x[0], 1.0, epsilon = 1e-10);
    assert_relative_eq!(x[1], 2.0, epsilon = 1e-10);
}

#[test]
fn test_solve_overdetermined_line_fit() {
    // y = 1 + 2x with columns [x, 1]
    let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
    let a: Vec<f64> = xs.iter().flat_map(|&x| [x, 1.0]).collect();
    let b: Vec<f64> = xs.iter().map(|&x| 1.0 + 2.0 * x).collect();

    let coef = solve(&a, &b, 5, 2).unwrap();
    assert_relative_eq!(coef[0], 2.0, epsilon = 1e-10);
    assert_relative_eq!(coef[1], 1.0, epsilon = 1e-10);
}

#[test]
fn test_solve_rank_deficient_minimum_norm() {
    let x = solve(&[1.0, 1.0, 1.0, 1.0], &[2.0, 2.0], 2, 2).unwrap();
    assert_relative_eq!(x[0], 1.0, epsilon = 1e-10);
    assert_relative_eq!(x[1], 1.0, epsilon = 1e-10);
}

#[test]
fn test_solve_underdetermined_minimum_norm() {
    let x = solve(&[1.0, 2.0], &[5.0], 1, 2).unwrap();
    assert_relative_eq!(x[0], 1.0, epsilon = 1e-10);
    assert_relative_eq!(x[1], 2.0, epsilon = 1e-10);
}

#[test]
fn test_solve_truncates_tiny_direction() {
    // The second singular value is far below the cutoff, so its direction
    // contributes nothing.
    let x = solve(&[1.0, 0.0, 0.0, 1e-9], &[1.0, 1.0], 2, 2).unwrap();
    assert_relative_eq!(x[0], 1.0, epsilon = 1e-10);
    assert_relative_eq!(x[1], 0.0, epsilon = 1e-10);
}

#[test]
fn test_solve_zero_matrix() {
    assert!(solve(&[0.0; 4], &[1.0, 1.0], 2, 2).is_none());
}

#[test]
fn test_solve_empty_system() {
    assert!(solve(&[], &[], 0, 2).is_none());
}

#[test]
fn test_solve_f32() {
    let x = f32::solve_truncated_svd(&[2.0, 0.0, 0.0, 4.0], &[2.0, 8.0], 2, 2, 1e-5).unwrap();
    assert_relative_eq!(x[0], 1.0, epsilon = 1e-5);
    assert_relative_eq!(x[1], 2.0, epsilon = 1e-5);
}
