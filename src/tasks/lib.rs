/* ************************************************************************ **
** This file is part of matkit, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Everything around the kernel: text formats, config, logging, the eliminator
//! session and the binaries' entry points.

#[macro_use] extern crate failure;
#[macro_use] extern crate log;
#[macro_use] extern crate serde_derive;
#[cfg(test)] #[macro_use] extern crate pretty_assertions;
#[cfg(test)] #[macro_use] extern crate matkit_kernel;
#[cfg(test)] extern crate tempdir;

pub type FailResult<T> = Result<T, failure::Error>;

pub mod config;
pub use crate::config::{Settings, ValidatedSettings, YamlRead};

pub mod io;
pub mod session;
pub use crate::session::Session;

mod logging;
pub use crate::logging::init_global_logger;

pub mod entry_points;
