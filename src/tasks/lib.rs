/* ************************************************************************ **
** This file is part of onb, and is licensed under EITHER the MIT license   **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

#[macro_use] extern crate failure;
#[macro_use] extern crate serde_derive;
#[macro_use] extern crate log;
#[macro_use] extern crate onb_tasks_config;

pub mod entry_points;

mod cmd;
mod filetypes;
mod ui {
    pub mod logging;
}

pub use crate::cmd::compute_basis;
pub use crate::filetypes::{VectorsFile, BasisJson, QueryJson};

pub type FailResult<T> = Result<T, failure::Error>;

/// Passed in by the binary shim, which is the crate that knows its own version.
#[derive(Debug, Copy, Clone)]
pub struct VersionInfo {
    pub version: &'static str,
}
