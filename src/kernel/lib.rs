/* ************************************************************************ **
** This file is part of matkit, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Matrix algebra kernel.
//!
//! Matrices hold [`Number`]s, which are either exact integers or floats.
//! Anything that is mathematically a whole number after a row operation
//! is stored as an integer again, so results compare exactly.
//!
//! The public row operations in [`elim`] number rows starting at 1.
//! Everything else is 0-indexed.

#[macro_use] extern crate failure;
#[macro_use] extern crate log;
#[cfg_attr(test, macro_use)] extern crate matkit_assert_close;
#[cfg(test)] extern crate rand;

#[macro_use]
mod macros;

mod errors;
pub use crate::errors::{Error, Result, DimensionError};

mod number;
pub use crate::number::{Number, ParseNumberError};

mod dims;
pub use crate::dims::{Dims, Shaped, AsRow, check_dims};

mod matrix;
pub use crate::matrix::Matrix;

mod vector;
pub use crate::vector::{Vector, vdot, vsqnorm, vnorm, vnormalize, vadd, vsub, vscale, vproject};

mod gram_schmidt;
pub use crate::gram_schmidt::gram_schmidt;

mod ops;
pub use crate::ops::{
    mat_scale, mat_add, mat_sub, transpose, mat_vec, vec_mat, outer_product,
    matmul_direct, matmul_outer, mat_inner_product, normal_equations,
};

pub mod elim;

#[cfg(test)]
mod test_util;
