/* ************************************************************************ **
** This file is part of matkit, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */


use crate::{Number, Dims, Shaped, Result, DimensionError};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::result::Result as StdResult;
use matkit_assert_close::{CheckClose, CheckCloseError, Tolerances};

/// Owned, rectangular matrix of [`Number`]s in row-major order.
///
/// [`Number`]: enum.Number.html
// please resist the urge to make this generic over the element type
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    // row-contiguous data
    data: Vec<Number>,
    // invariant: height * width == data.len()
    // invariant: height == 0 if and only if width == 0
    height: usize,
    width: usize,
}

pub type Rows<'a> = ::std::slice::Chunks<'a, Number>;

impl Matrix {
    /// Build a matrix from its rows.
    ///
    /// No rows at all gives the empty `0x0` matrix.  Rows of unequal length, or rows
    /// that are themselves empty, are a `Dimension` error.
    pub fn from_rows<R, I, T>(rows: R) -> Result<Matrix>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
        T: Into<Number>,
    {
        let mut data = vec![];
        let mut height = 0;
        let mut width = None;
        for row in rows {
            let start = data.len();
            data.extend(row.into_iter().map(Into::into));
            let len = data.len() - start;

            let expected = *width.get_or_insert(len);
            if len == 0 || len != expected {
                return Err(DimensionError::Ragged { row: height + 1, len, expected }.into());
            }
            height += 1;
        }
        Ok(Matrix { data, height, width: width.unwrap_or(0) })
    }

    pub fn from_row_major_data(dims: Dims, data: Vec<Number>) -> Matrix {
        assert_eq!(data.len(), dims.rows * dims.cols);
        assert_eq!(dims.rows == 0, dims.cols == 0, "degenerate shape {}", dims);
        Matrix { data, height: dims.rows, width: dims.cols }
    }

    pub fn new_filled(dims: Dims, fill: Number) -> Matrix {
        Matrix::from_row_major_data(dims, vec![fill; dims.rows * dims.cols])
    }

    pub fn zeros(dims: Dims) -> Matrix { Matrix::new_filled(dims, Number::zero()) }

    pub fn empty() -> Matrix { Matrix { data: vec![], height: 0, width: 0 } }

    pub fn dims(&self) -> Dims { Dims::new(self.height, self.width) }
    pub fn num_rows(&self) -> usize { self.height }
    pub fn num_cols(&self) -> usize { self.width }
    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    pub fn row_major_data(&self) -> &[Number] { &self.data }

    // `max(1)` only matters for the empty matrix, which has no data to chunk anyways.
    pub fn rows(&self) -> Rows { self.data.chunks(self.width.max(1)) }

    /// Row `r`, 0-indexed.
    pub fn row(&self, r: usize) -> &[Number] {
        assert!(r < self.height, "row {} out of bounds for {} matrix", r, self.dims());
        &self.data[r * self.width..(r + 1) * self.width]
    }

    pub fn row_mut(&mut self, r: usize) -> &mut [Number] {
        assert!(r < self.height, "row {} out of bounds for {} matrix", r, self.dims());
        &mut self.data[r * self.width..(r + 1) * self.width]
    }

    /// Column `c`, 0-indexed, copied out.
    pub fn col(&self, c: usize) -> Vec<Number> {
        self.rows().map(|row| row[c]).collect()
    }

    pub fn to_rows(&self) -> Vec<Vec<Number>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    pub fn to_transpose(&self) -> Matrix {
        let mut data = Vec::with_capacity(self.data.len());
        for c in 0..self.width {
            for r in 0..self.height {
                data.push(self[(r, c)]);
            }
        }
        Matrix { data, height: self.width, width: self.height }
    }

    /// Exchange rows `a` and `b` (0-indexed).
    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let w = self.width;
        for c in 0..w {
            self.data.swap(a * w + c, b * w + c);
        }
    }

    /// Append a column on the right.
    pub fn augment(&self, col: &[Number]) -> Result<Matrix> {
        crate::dims::check_dims(self, &crate::AsRow(col), |rows, _, _, len| rows == len)?;
        let rows = self.rows().zip(col).map(|(row, &x)| {
            row.iter().cloned().chain(Some(x)).collect::<Vec<_>>()
        });
        Matrix::from_rows(rows)
    }
}

impl Shaped for Matrix {
    fn dims(&self) -> Dims { Matrix::dims(self) }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Number;

    #[inline(always)]
    fn index(&self, (r, c): (usize, usize)) -> &Number {
        assert!(c < self.width, "column {} out of bounds for {} matrix", c, self.dims());
        &self.data[r * self.width + c]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline(always)]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut Number {
        assert!(c < self.width, "column {} out of bounds for {} matrix", c, self.dims());
        &mut self.data[r * self.width + c]
    }
}

/// Tab-delimited rows, one per line.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            for (c, x) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, "\t")?;
                }
                write!(f, "{}", x)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl CheckClose for Matrix {
    fn check_close(&self, other: &Matrix, tol: Tolerances) -> StdResult<(), CheckCloseError> {
        assert_eq!(self.dims(), other.dims(), "shape mismatch in check_close");
        self.data.check_close(&other.data, tol)
    }
}
