/* ************************************************************************ **
** This file is part of onb, and is licensed under EITHER the MIT license   **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Small, dense, immutable real matrices.
//!
//! Every operation returns a new `Matrix`; nothing here mutates its inputs.
//! Operations whose operands must agree in shape return a `ShapeMismatchError`
//! instead of panicking.

#[macro_use]
extern crate failure;
extern crate itertools;
#[cfg_attr(test, macro_use)]
extern crate onb_tolerance;
#[cfg(test)]
extern crate rand;

pub use crate::matrix::{Matrix, Rows};
mod matrix;
mod ops;

use std::fmt;

/// `(codomain, domain)`, i.e. `(rows, columns)`.
pub type Dims = (usize, usize);

#[derive(Debug, Fail)]
pub struct ShapeMismatchError {
    pub op: &'static str,
    pub left: Dims,
    pub right: Dims,
}

impl fmt::Display for ShapeMismatchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let ShapeMismatchError { op, left, right } = *self;
        write!(f, "incompatible shapes for {}: {}x{} and {}x{}", op, left.0, left.1, right.0, right.1)
    }
}

#[derive(Debug, Fail)]
#[fail(display = "ragged matrix: row {} has {} entries, but row 0 has {}", row, len, expected)]
pub struct RaggedRowsError {
    pub row: usize,
    pub len: usize,
    pub expected: usize,
}
