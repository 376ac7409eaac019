/* ************************************************************************ **
** This file is part of matkit, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */


//! Matrix arithmetic.
//!
//! Every operation here allocates a fresh output and checks operand shapes
//! before computing anything.

use crate::{Matrix, Number, Result, Vector, AsRow};
use crate::dims::check_dims;
use crate::vector::vdot;

/// Multiply every entry by `c`.
pub fn mat_scale<C: Into<Number>>(a: &Matrix, c: C) -> Matrix {
    let c = c.into();
    let data = a.row_major_data().iter().map(|&x| x * c).collect();
    Matrix::from_row_major_data(a.dims(), data)
}

pub fn mat_add(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    zip_entries(a, b, |x, y| x + y)
}

pub fn mat_sub(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    zip_entries(a, b, |x, y| x - y)
}

fn zip_entries(a: &Matrix, b: &Matrix, f: impl Fn(Number, Number) -> Number) -> Result<Matrix> {
    check_dims(a, b, |ra, ca, rb, cb| ra == rb && ca == cb)?;
    let data = {
        a.row_major_data().iter()
            .zip(b.row_major_data())
            .map(|(&x, &y)| f(x, y))
            .collect()
    };
    Ok(Matrix::from_row_major_data(a.dims(), data))
}

/// `m x n -> n x m`.  The empty matrix is its own transpose.
pub fn transpose(a: &Matrix) -> Matrix { a.to_transpose() }

/// `A v`, with `v` as a column.  Requires `len(v) == cols(A)`.
pub fn mat_vec(a: &Matrix, v: &[Number]) -> Result<Vector> {
    // vectors take part in the check as a row, so compare the columns
    check_dims(a, &AsRow(v), |_, cols_a, _, len| cols_a == len)?;
    a.rows().map(|row| vdot(row, v)).collect()
}

/// `v A`, with `v` as a row.  Requires `len(v) == rows(A)`.
pub fn vec_mat(v: &[Number], a: &Matrix) -> Result<Vector> {
    check_dims(&AsRow(v), a, |_, len, rows_a, _| len == rows_a)?;
    // each column of A is a row of its transpose
    transpose(a).rows().map(|col| vdot(v, col)).collect()
}

/// Rank-1 matrix `u v^T`.
pub fn outer_product(u: &[Number], v: &[Number]) -> Matrix {
    if u.is_empty() || v.is_empty() {
        return Matrix::empty();
    }
    let data = u.iter().flat_map(|&a| v.iter().map(move |&b| a * b)).collect();
    Matrix::from_row_major_data(crate::Dims::new(u.len(), v.len()), data)
}

/// Matrix product by the textbook triple loop.
pub fn matmul_direct(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    check_dims(a, b, |_, cols_a, rows_b, _| cols_a == rows_b)?;

    let (m, n, l) = (a.num_rows(), a.num_cols(), b.num_cols());
    let mut out = Matrix::zeros(crate::Dims::new(m, l));
    for i in 0..m {
        for k in 0..l {
            for j in 0..n {
                out[(i, k)] = out[(i, k)] + a[(i, j)] * b[(j, k)];
            }
        }
    }
    Ok(out)
}

/// Matrix product as a sum of outer products.
///
/// Partitions `A` into columns `c1..cn` and `B` into rows `r1..rn`, and
/// accumulates `c1 r1 + c2 r2 + ... + cn rn`.  Each term is independent of the
/// others.  The accumulation order per entry matches [`matmul_direct`], so the
/// two agree exactly, floats included.
///
/// [`matmul_direct`]: fn.matmul_direct.html
pub fn matmul_outer(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    check_dims(a, b, |_, cols_a, rows_b, _| cols_a == rows_b)?;

    let a_t = transpose(a);
    let mut out = Matrix::zeros(crate::Dims::new(a.num_rows(), b.num_cols()));
    for (col_a, row_b) in a_t.rows().zip(b.rows()) {
        out = mat_add(&out, &outer_product(col_a, row_b))?;
    }
    Ok(out)
}

/// The inner product `<u, v> = (A u) . (A v)` induced by `A`.
pub fn mat_inner_product(a: &Matrix, u: &[Number], v: &[Number]) -> Result<Number> {
    vdot(&mat_vec(a, u)?, &mat_vec(a, v)?)
}

/// The augmented matrix `[A^T A | A^T b]` of the normal equations for `A x = b`.
///
/// Its solutions are the least-squares solutions of `A x = b`.
pub fn normal_equations(a: &Matrix, b: &[Number]) -> Result<Matrix> {
    let a_t = transpose(a);
    let square = matmul_direct(&a_t, a)?;
    let rhs = mat_vec(&a_t, b)?;
    square.augment(&rhs)
}
