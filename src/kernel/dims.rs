/* ************************************************************************ **
** This file is part of matkit, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */


//! Shape checks shared by every dimension-sensitive operation.

use crate::{Number, Result, DimensionError};
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Dims {
    pub rows: usize,
    pub cols: usize,
}

impl Dims {
    pub fn new(rows: usize, cols: usize) -> Dims { Dims { rows, cols } }

    pub fn is_empty(&self) -> bool { self.rows == 0 || self.cols == 0 }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Anything with a `rows x cols` shape.
pub trait Shaped {
    fn dims(&self) -> Dims;
}

impl<'a, S: ?Sized + Shaped> Shaped for &'a S {
    fn dims(&self) -> Dims { (**self).dims() }
}

/// Views a vector as a `1 x n` matrix.
///
/// Vectors have no orientation of their own; this is how they take part in
/// shape checks against matrices.
#[derive(Debug, Copy, Clone)]
pub struct AsRow<'a>(pub &'a [Number]);

impl<'a> Shaped for AsRow<'a> {
    fn dims(&self) -> Dims { Dims::new(1, self.0.len()) }
}

/// Fails unless both operands are nonempty and `fits(rows_a, cols_a, rows_b, cols_b)`.
///
/// ```ignore
/// // matrix multiplication
/// check_dims(&a, &b, |_, cols_a, rows_b, _| cols_a == rows_b)?;
/// ```
pub fn check_dims<A, B, F>(a: &A, b: &B, fits: F) -> Result<()>
where
    A: ?Sized + Shaped,
    B: ?Sized + Shaped,
    F: FnOnce(usize, usize, usize, usize) -> bool,
{
    let (da, db) = (a.dims(), b.dims());
    for &dims in &[da, db] {
        if dims.is_empty() {
            return Err(DimensionError::Empty(dims).into());
        }
    }
    match fits(da.rows, da.cols, db.rows, db.cols) {
        true => Ok(()),
        false => Err(DimensionError::Incompatible { a: da, b: db }.into()),
    }
}

/// Fails if a single operand is empty.
pub(crate) fn check_nonempty<A: ?Sized + Shaped>(a: &A) -> Result<()> {
    let dims = a.dims();
    match dims.is_empty() {
        true => Err(DimensionError::Empty(dims).into()),
        false => Ok(()),
    }
}

/// Vector operands must have equal lengths. (no broadcasting)
pub(crate) fn check_same_len(u: &[Number], v: &[Number]) -> Result<()> {
    match u.len() == v.len() {
        true => Ok(()),
        false => Err(DimensionError::Incompatible { a: AsRow(u).dims(), b: AsRow(v).dims() }.into()),
    }
}
