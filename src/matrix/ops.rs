/* ************************************************************************ **
** This file is part of onb, and is licensed under EITHER the MIT license   **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{Matrix, ShapeMismatchError};

use itertools::zip_eq;
use onb_tolerance::Epsilon;

use std::ops::{Mul, Neg};

fn check_same_shape(op: &'static str, a: &Matrix, b: &Matrix) -> Result<(), ShapeMismatchError> {
    match a.dims() == b.dims() {
        true => Ok(()),
        false => Err(ShapeMismatchError { op, left: a.dims(), right: b.dims() }),
    }
}

impl Matrix {
    fn map(&self, f: impl FnMut(f64) -> f64) -> Matrix
    { Matrix::from_parts(self.dims(), self.row_major_data().iter().cloned().map(f).collect()) }

    // caller checks shapes
    fn zip_with(&self, other: &Matrix, mut f: impl FnMut(f64, f64) -> f64) -> Matrix {
        let data = zip_eq(self.row_major_data(), other.row_major_data())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Matrix::from_parts(self.dims(), data)
    }

    pub fn transpose(&self) -> Matrix
    { Matrix::from_fn((self.domain(), self.codomain()), |r, c| self[(c, r)]) }

    /// Inner product of two column vectors of equal length.
    ///
    /// (Two `0x0` matrices count as empty vectors, with a dot product of zero.)
    pub fn dot(&self, other: &Matrix) -> Result<f64, ShapeMismatchError> {
        if self.dims() != other.dims() || self.domain() > 1 {
            return Err(ShapeMismatchError { op: "dot", left: self.dims(), right: other.dims() });
        }
        Ok(zip_eq(self.row_major_data(), other.row_major_data()).map(|(a, b)| a * b).sum())
    }

    /// Matrix product `self * other`.
    ///
    /// Requires `self.domain() == other.codomain()`; the product has shape
    /// `self.codomain() x other.domain()`.
    pub fn compose(&self, other: &Matrix) -> Result<Matrix, ShapeMismatchError> {
        if self.domain() != other.codomain() {
            return Err(ShapeMismatchError { op: "compose", left: self.dims(), right: other.dims() });
        }

        // this is suboptimal.  who cares.
        let other_t = other.transpose();
        let mut data: Vec<f64> = Vec::with_capacity(self.codomain() * other.domain());
        for row in self.rows() {
            for col in other_t.rows() {
                data.push(zip_eq(row, col).map(|(a, b)| a * b).sum());
            }
        }
        Ok(Matrix::from_parts((self.codomain(), other.domain()), data))
    }

    pub fn add(&self, other: &Matrix) -> Result<Matrix, ShapeMismatchError> {
        check_same_shape("add", self, other)?;
        Ok(self.zip_with(other, |a, b| a + b))
    }

    pub fn sub(&self, other: &Matrix) -> Result<Matrix, ShapeMismatchError> {
        check_same_shape("sub", self, other)?;
        Ok(self.zip_with(other, |a, b| a - b))
    }

    pub fn negate(&self) -> Matrix
    { self.map(|x| -x) }

    /// Multiply every entry by a scalar.
    pub fn scale(&self, r: f64) -> Matrix
    { self.map(|x| r * x) }

    pub fn equals_zero(&self, eps: Epsilon) -> bool
    { self.row_major_data().iter().all(|&x| eps.is_zero(x)) }

    /// Entrywise equality within `eps`.  Matrices of different shape are never equal.
    pub fn equals(&self, other: &Matrix, eps: Epsilon) -> bool {
        match self.sub(other) {
            Ok(diff) => diff.equals_zero(eps),
            Err(_) => false,
        }
    }
}

impl<'a> Neg for &'a Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix { self.negate() }
}

impl Neg for Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix { self.negate() }
}

impl<'a> Mul<&'a Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, rhs: &'a Matrix) -> Matrix { rhs.scale(self) }
}

impl Mul<Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix { rhs.scale(self) }
}
