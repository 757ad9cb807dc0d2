/* ************************************************************************ **
** This file is part of onb, and is licensed under EITHER the MIT license   **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{Result, DegenerateVectorError, orthogonalize};

use onb_matrix::{Matrix, ShapeMismatchError};
use onb_ordset::OrdSet;
use onb_tolerance::Epsilon;

use std::cmp::Ordering;

pub fn norm(v: &Matrix) -> ::std::result::Result<f64, ShapeMismatchError>
{ Ok(v.dot(v)?.sqrt()) }

/// Scale a vector to unit length.
///
/// Fails with a [`DegenerateVectorError`] if the norm is below `eps`.
pub fn normalize(v: &Matrix, eps: Epsilon) -> Result<Matrix> {
    let norm = norm(v)?;
    if norm.abs() < eps.get() {
        return Err(DegenerateVectorError { norm }.into());
    }
    Ok(v.scale(1.0 / norm))
}

/// Orthonormal basis for the span of `vectors`, in the order that
/// [`orthogonalize`](crate::orthogonalize) kept them.
pub fn gram_schmidt(vectors: &[Matrix], eps: Epsilon) -> Result<OrdSet<Matrix>> {
    let mut out = OrdSet::new(eps);
    for v in orthogonalize(vectors, eps)? {
        out.add(normalize(&v, eps)?);
    }
    Ok(out)
}

/// Lexicographic comparison of entries, scanning rows then columns.
///
/// The first entry where the two differ by more than `eps` decides; if there
/// is none, the matrices compare `Equal` exactly when they are `equals`.
/// (matrices of different shape are compared on their overlap, then by shape)
///
/// This is only meant as a reproducible tie-break, not as any sort of magnitude.
pub fn lex_order(v: &Matrix, w: &Matrix, eps: Epsilon) -> Ordering {
    let rows = usize::min(v.codomain(), w.codomain());
    let cols = usize::min(v.domain(), w.domain());
    for i in 0..rows {
        for j in 0..cols {
            let delta = w[(i, j)] - v[(i, j)];
            if delta < -eps.get() {
                return Ordering::Greater;
            } else if delta > eps.get() {
                return Ordering::Less;
            }
        }
    }
    v.dims().cmp(&w.dims())
}

/// Orthonormal basis for the span of `vectors`, sorted by [`lex_order`].
///
/// Inputs that produce the same set of unit vectors produce them in the same
/// order, regardless of the order they were given in.
pub fn mk_onb(vectors: &[Matrix], eps: Epsilon) -> Result<OrdSet<Matrix>> {
    let mut basis = gram_schmidt(vectors, eps)?.into_vec();
    basis.sort_by(|a, b| lex_order(a, b, eps));
    Ok(OrdSet::from_iter_with(basis, eps))
}
