/* ************************************************************************ **
** This file is part of matkit, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Umbrella crate for the `matkit` binary and the integration tests.
//!
//! The arithmetic lives in `matkit-kernel`; text formats, settings and the
//! eliminator session live in `matkit-tasks`.

pub use matkit_kernel as kernel;
pub use matkit_tasks as tasks;

pub use matkit_kernel::{Error, Matrix, Number, Vector};
