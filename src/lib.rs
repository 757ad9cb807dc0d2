/* ************************************************************************ **
** This file is part of onb, and is licensed under EITHER the MIT license   **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Umbrella crate for the `onb` binary.  The libraries live in the workspace
//! members; this re-exports the parts most people want.

pub use onb_gram_schmidt::{
    Matrix, OrdSet, Epsilon, Error, DegenerateVectorError, ShapeMismatchError,
    orthogonalize, gram_schmidt, mk_onb, lex_order, normalize, norm, lies_in_subspace,
};
pub use onb_tolerance::{ApproxEq, DEFAULT_EPSILON};

pub mod version {
    use onb_tasks::VersionInfo;

    pub fn get() -> VersionInfo {
        VersionInfo {
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}
