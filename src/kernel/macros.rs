/* ************************************************************************ **
** This file is part of matkit, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */


/// Builds a [`Matrix`] from nested rows of integer or float literals.
///
/// Panics if the rows are ragged.
///
/// ```ignore
/// let a = matrix![[1, 2], [0.5, -1]];
/// ```
///
/// [`Matrix`]: struct.Matrix.html
#[macro_export]
macro_rules! matrix {
    ($([$($x:expr),* $(,)*]),* $(,)*) => {{
        let rows: Vec<Vec<$crate::Number>> = vec![$(vec![$($crate::Number::from($x)),*]),*];
        match $crate::Matrix::from_rows(rows) {
            Ok(m) => m,
            Err(e) => panic!("matrix! literal: {}", e),
        }
    }};
}

/// Builds a [`Vector`] from integer or float literals.
///
/// [`Vector`]: type.Vector.html
#[macro_export]
macro_rules! vector {
    ($($x:expr),* $(,)*) => {{
        let v: $crate::Vector = vec![$($crate::Number::from($x)),*];
        v
    }};
}
