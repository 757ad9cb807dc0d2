/* ************************************************************************ **
** This file is part of onb, and is licensed under EITHER the MIT license   **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Gram-Schmidt orthogonalization of column vectors.
//!
//! The pipeline is
//!
//! * [`orthogonalize`]: drop linearly dependent vectors and make the rest
//!   pairwise orthogonal, in input order;
//! * [`gram_schmidt`]: the same, scaled to unit length;
//! * [`mk_onb`]: the same, sorted by [`lex_order`] so that the result does
//!   not depend on which order equivalent inputs arrived in.
//!
//! [`lies_in_subspace`] tests membership in the span of an orthogonal set.

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
#[cfg_attr(test, macro_use)]
extern crate onb_tolerance;
#[cfg(test)]
extern crate rand;

pub use onb_matrix::{Matrix, ShapeMismatchError};
pub use onb_ordset::OrdSet;
pub use onb_tolerance::Epsilon;

pub use crate::orthogonalize::{orthogonalize, project, subtract_component, is_orthogonal};
mod orthogonalize;

pub use crate::onb::{norm, normalize, gram_schmidt, lex_order, mk_onb};
mod onb;

pub use crate::subspace::lies_in_subspace;
mod subspace;

#[cfg(test)]
mod test_util;

#[derive(Debug, Fail)]
#[fail(display = "vector is approximately zero (norm {}), cannot normalize", norm)]
pub struct DegenerateVectorError {
    pub norm: f64,
}

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "vectors of mismatched shape")]
    Shape(#[cause] ShapeMismatchError),
    #[fail(display = "could not normalize")]
    Degenerate(#[cause] DegenerateVectorError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<ShapeMismatchError> for Error {
    fn from(e: ShapeMismatchError) -> Self { Error::Shape(e) }
}

impl From<DegenerateVectorError> for Error {
    fn from(e: DegenerateVectorError) -> Self { Error::Degenerate(e) }
}
