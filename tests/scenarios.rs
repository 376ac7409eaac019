#[macro_use] extern crate pretty_assertions;
#[macro_use] extern crate matkit_kernel;
#[macro_use] extern crate matkit_assert_close;

use matkit::kernel::{self, elim};
use matkit::{Error, Number};

#[test]
fn reduce_with_dependent_rows() {
    let out = elim::reduce(&matrix![[4, -4], [-2, 2]]).unwrap();
    assert_eq!(out, matrix![[1, -1], [0, 0]]);
    assert!(out.row_major_data().iter().all(|x| x.is_exact()));
}

#[test]
fn reduce_brings_pivot_row_up() {
    let out = elim::reduce(&matrix![[0, 0, 0, 1], [1, 0, 1, 0]]).unwrap();
    assert_eq!(out, matrix![[1, 0, 1, 0], [0, 0, 0, 1]]);
}

#[test]
fn combine_in_place() {
    let mut a = matrix![
        [1, 2, -5, 3, 6, 14],
        [0, 0, -2, 0, 7, 12],
        [2, 4, -5, 6, -5, -1],
    ];
    elim::combine(&mut a, 1, 3, -2).unwrap();
    assert_eq!(a.row(2), &vector![0, 0, 5, 0, -17, -29][..]);
    assert_eq!(a.row(0), &vector![1, 2, -5, 3, 6, 14][..]);
}

#[test]
fn normal_equations() {
    let a = matrix![[1, -1], [2, 3], [4, 5]];
    let out = kernel::normal_equations(&a, &vector![2, -1, 5]).unwrap();
    assert_eq!(out, matrix![[21, 25, 20], [25, 35, 20]]);
}

#[test]
fn gram_schmidt() {
    let out = kernel::gram_schmidt(&[vector![3, -5], vector![1, 0]]).unwrap();
    assert_eq!(out, vec![vector![1, 0], vector![0.0, -5.0]]);
    assert_eq!(out[1][1], Number::Float(-5.0));
}

#[test]
fn repeated_product() {
    let m = matrix![[3, 1], [2, 1]];
    let squared = kernel::matmul_direct(&m, &m).unwrap();
    let cubed = kernel::matmul_direct(&squared, &m).unwrap();
    assert_eq!(cubed, matrix![[41, 15], [30, 11]]);
    assert_eq!(kernel::matmul_outer(&squared, &m).unwrap(), cubed);
}

#[test]
fn error_messages() {
    let a = matrix![[1, 2], [3, 4]];
    let b = matrix![[1, 2, 3], [4, 5, 6]];
    let err = kernel::matmul_direct(&b, &a).unwrap_err();
    assert_eq!(err.to_string(), "invalid dimensions for A: 2x3 B: 2x2");

    let mut a = a;
    match elim::swap(&mut a, 0, 1) {
        Err(e @ Error::RowIndex { .. }) => {
            assert_eq!(e.to_string(), "invalid row: 0. rows must be between 1 and 2");
        },
        other => panic!("{:?}", other),
    }
    assert_eq!(elim::scale(&mut a, 1, 0).unwrap_err(), Error::ZeroScalar);
    assert_eq!(a, matrix![[1, 2], [3, 4]]);
}

#[test]
fn normalized_basis_is_orthonormal() {
    let basis = vec![vector![1, 1, 0], vector![1, 0, 1], vector![0, 1, 1]];
    let out: Vec<_> = {
        kernel::gram_schmidt(&basis).unwrap()
            .iter().map(|v| kernel::vnormalize(v).unwrap())
            .collect()
    };
    for (i, u) in out.iter().enumerate() {
        for (j, v) in out.iter().enumerate() {
            let expected = if i == j { 1.0 } else { 0.0 };
            let dot = kernel::vdot(u, v).unwrap().to_f64();
            assert_close!(abs=1e-12, dot, expected);
        }
    }
}
