/* ************************************************************************ **
** This file is part of matkit, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */


use crate::{Matrix, Dims, Number, Vector};
use rand::Rng;

pub fn random_float_vec<R: Rng>(rng: &mut R, len: usize) -> Vector {
    (0..len).map(|_| Number::Float(1.0 - 2.0 * rng.gen::<f64>())).collect()
}

/// Small integers, so that products stay exact.
pub fn random_int_matrix<R: Rng>(rng: &mut R, dims: Dims) -> Matrix {
    let data = (0..dims.rows * dims.cols).map(|_| Number::Int(rng.gen_range(-9, 10))).collect();
    Matrix::from_row_major_data(dims, data)
}

/// A mixture of integers and floats.
pub fn random_mixed_matrix<R: Rng>(rng: &mut R, dims: Dims) -> Matrix {
    let data = (0..dims.rows * dims.cols).map(|_| match rng.gen::<bool>() {
        true => Number::Int(rng.gen_range(-9, 10)),
        false => Number::Float(10.0 * (1.0 - 2.0 * rng.gen::<f64>())),
    }).collect();
    Matrix::from_row_major_data(dims, data)
}

pub fn random_dims<R: Rng>(rng: &mut R, max: usize) -> Dims {
    Dims::new(rng.gen_range(1, max + 1), rng.gen_range(1, max + 1))
}

/// Nonsingular integer matrix `L U`, where `L` is unit lower triangular and `U` is
/// upper triangular with `+-1` on its diagonal.
pub fn random_lu_matrix<R: Rng>(rng: &mut R, n: usize) -> Matrix {
    let mut lower = Matrix::zeros(Dims::new(n, n));
    let mut upper = Matrix::zeros(Dims::new(n, n));
    for r in 0..n {
        for c in 0..n {
            if r > c {
                lower[(r, c)] = Number::Int(rng.gen_range(-3, 4));
            } else if r == c {
                lower[(r, c)] = Number::Int(1);
                upper[(r, c)] = Number::Int(if rng.gen::<bool>() { 1 } else { -1 });
            } else {
                upper[(r, c)] = Number::Int(rng.gen_range(-3, 4));
            }
        }
    }
    match crate::matmul_direct(&lower, &upper) {
        Ok(m) => m,
        Err(e) => panic!("{}", e),
    }
}
