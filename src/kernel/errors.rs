/* ************************************************************************ **
** This file is part of matkit, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::Dims;
use std::fmt;

pub type Result<T> = ::std::result::Result<T, Error>;

/// Every way a kernel operation can fail.
///
/// All of these are detected before anything is computed or mutated.
#[derive(Debug, Clone, PartialEq, Fail)]
pub enum Error {
    #[fail(display = "{}", _0)]
    Dimension(DimensionError),

    #[fail(display = "invalid row: {}. rows must be between 1 and {}", row, max)]
    RowIndex { row: usize, max: usize },

    #[fail(display = "cannot exchange row {} with itself", _0)]
    SelfSwap(usize),

    #[fail(display = "scalar must not equal 0")]
    ZeroScalar,

    #[fail(display = "vector must be non-zero")]
    DegenerateVector,

    #[fail(display = "basis must be nonempty")]
    EmptyBasis,
}

/// Shapes that were rejected, reported as `rows x cols`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DimensionError {
    /// Two nonempty operands whose shapes do not fit the operation.
    Incompatible { a: Dims, b: Dims },
    /// An operand with no rows or no columns.
    Empty(Dims),
    /// Rows of differing lengths were supplied where a rectangular matrix was expected.
    Ragged { row: usize, len: usize, expected: usize },
}

impl fmt::Display for DimensionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DimensionError::Incompatible { a, b } => {
                write!(f, "invalid dimensions for A: {} B: {}", a, b)
            },
            DimensionError::Empty(_) => write!(f, "both operands must be nonempty"),
            DimensionError::Ragged { row, len, expected } => {
                write!(f, "ragged matrix: row {} has {} entries, expected {}", row, len, expected)
            },
        }
    }
}

impl From<DimensionError> for Error {
    fn from(e: DimensionError) -> Error { Error::Dimension(e) }
}
