/* ************************************************************************ **
** This file is part of matkit, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */


//! Elementary row operations, and reduction to row-echelon form.
//!
//! NOTE: For the row operations, rows are indexed starting at 1.
//!
//! `swap`, `scale` and `combine` modify the matrix they are given.  They validate
//! everything before touching it, so a failed call leaves the matrix as it was.
//! `reduce` works on its own copy and leaves its input alone.

use crate::{Matrix, Number, Result, Error};
use crate::dims::check_nonempty;

fn check_row(row: usize, max: usize) -> Result<()> {
    match 1 <= row && row <= max {
        true => Ok(()),
        false => Err(Error::RowIndex { row, max }),
    }
}

fn check_scalar(c: Number) -> Result<()> {
    match c.is_zero() {
        true => Err(Error::ZeroScalar),
        false => Ok(()),
    }
}

/// Exchange rows `i` and `j`.
pub fn swap(a: &mut Matrix, i: usize, j: usize) -> Result<()> {
    if i == j {
        // not harmful, but it isn't an elementary operation either
        return Err(Error::SelfSwap(i));
    }
    let n = a.num_rows();
    check_row(i, n)?;
    check_row(j, n)?;

    trace!("R{} <-> R{}", i, j);
    a.swap_rows(i - 1, j - 1);
    Ok(())
}

/// Multiply row `i` by the nonzero scalar `c`.
pub fn scale<C: Into<Number>>(a: &mut Matrix, i: usize, c: C) -> Result<()> {
    let c = c.into();
    check_scalar(c)?;
    check_row(i, a.num_rows())?;

    trace!("R{} <- {} * R{}", i, c, i);
    for x in a.row_mut(i - 1) {
        *x = (c * *x).canonicalize();
    }
    Ok(())
}

/// Add `c` times row `i` into row `j`.  Row `i` is not modified.
pub fn combine<C: Into<Number>>(a: &mut Matrix, i: usize, j: usize, c: C) -> Result<()> {
    let c = c.into();
    check_scalar(c)?;
    let n = a.num_rows();
    check_row(i, n)?;
    check_row(j, n)?;

    trace!("R{} <- R{} + {} * R{}", j, j, c, i);
    let scaled: Vec<Number> = a.row(i - 1).iter().map(|&x| c * x).collect();
    for (dest, x) in a.row_mut(j - 1).iter_mut().zip(scaled) {
        *dest = (x + *dest).canonicalize();
    }
    Ok(())
}

/// Reduce `a` to row-echelon form.
///
/// Pivots are scaled to 1 and everything beneath them is eliminated.  Entries
/// above pivots are left alone (this is not the *reduced* echelon form).
/// Rows that end up as zero drift toward the bottom but are not sorted.
///
/// The column being processed and the row that receives the next pivot are
/// tracked separately.  The pivot search moves the pivot row into the next
/// pivot slot, while normalization and elimination operate on the row whose
/// index equals the column.  The two only differ once some column has failed
/// to produce a pivot.
///
/// Because of this, `reduce` is not idempotent for such matrices: reducing
/// `[[0,0,1],[0,2,4],[0,0,3]]` a second time rescales its last row again.
pub fn reduce(a: &Matrix) -> Result<Matrix> {
    check_nonempty(a)?;

    let mut b = a.clone();
    let (rows, cols) = (b.num_rows(), b.num_cols());

    // can't ever have more pivots than this
    let max_rank = usize::min(rows, cols);

    let mut pivot_row = 0;
    for col in 0..max_rank {
        let pivot = place_pivot(&mut b, pivot_row, col);
        if pivot.is_zero() {
            trace!("column {}: no pivot", col);
            continue;
        }
        trace!("column {}: pivot {} placed in row {}", col, pivot, pivot_row);
        pivot_row += 1;

        let recip = pivot.recip();
        for x in b.row_mut(col) {
            *x = (recip * *x).canonicalize();
        }

        for r in col + 1..rows {
            let p = b[(r, col)];
            if p.is_zero() {
                continue;
            }
            for k in col..cols {
                let entry = -p * b[(col, k)] + b[(r, k)];
                b[(r, k)] = entry.canonicalize();
            }
        }
    }
    debug!("reduced {} matrix, {} pivots placed", b.dims(), pivot_row);
    Ok(b)
}

// Search rows `col..` for a nonzero entry in `col` and swap the first one found into
// `pivot_row`.  Returns whatever is then at `(pivot_row, col)`, which is the pivot if
// it's nonzero.
fn place_pivot(b: &mut Matrix, pivot_row: usize, col: usize) -> Number {
    if let Some(r) = (col..b.num_rows()).find(|&r| !b[(r, col)].is_zero()) {
        b.swap_rows(pivot_row, r);
    }
    b[(pivot_row, col)]
}
