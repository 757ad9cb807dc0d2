/* ************************************************************************ **
** This file is part of onb, and is licensed under EITHER the MIT license   **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use onb_matrix::{Matrix, ShapeMismatchError};
use onb_tolerance::Epsilon;

/// Projection of `v` onto `w`.
///
/// Projecting onto (approximately) the zero vector gives `w` back, which
/// contributes nothing when subtracted.
pub fn project(v: &Matrix, w: &Matrix, eps: Epsilon) -> Result<Matrix, ShapeMismatchError> {
    if w.equals_zero(eps) {
        // still reject vectors of the wrong length
        v.dot(w)?;
        return Ok(w.clone());
    }
    let coeff = v.dot(w)? / w.dot(w)?;
    Ok(w.scale(coeff))
}

/// `v` minus its projection onto `w`.
pub fn subtract_component(v: &Matrix, w: &Matrix, eps: Epsilon) -> Result<Matrix, ShapeMismatchError>
{ v.sub(&project(v, w, eps)?) }

pub fn is_orthogonal(v: &Matrix, w: &Matrix, eps: Epsilon) -> Result<bool, ShapeMismatchError>
{ Ok(v.dot(w)?.abs() < eps.get()) }

// all must be column vectors of a single length
fn check_vectors(op: &'static str, vectors: &[Matrix]) -> Result<(), ShapeMismatchError> {
    let expected = match vectors.first() {
        None => return Ok(()),
        Some(first) => (first.codomain(), 1),
    };
    for v in vectors {
        if v.domain() > 1 || v.codomain() != expected.0 {
            return Err(ShapeMismatchError { op, left: expected, right: v.dims() });
        }
    }
    Ok(())
}

/// Reduce a sequence of vectors to a pairwise-orthogonal sequence with the same span.
///
/// Vectors are taken in the order given.  Each one has its components along the
/// vectors already kept subtracted off, one at a time, and is kept if anything
/// is left over.  In particular, the first nonzero vector is kept as-is, and
/// approximately-zero inputs are always dropped.
///
/// Reordering the input generally produces a different (equally valid) result;
/// see [`mk_onb`](crate::mk_onb) for an order-independent form.
pub fn orthogonalize(vectors: &[Matrix], eps: Epsilon) -> Result<Vec<Matrix>, ShapeMismatchError> {
    check_vectors("orthogonalize", vectors)?;

    let mut out: Vec<Matrix> = vec![];
    for (i, v) in vectors.iter().enumerate() {
        let mut v = v.clone();
        for w in &out {
            v = subtract_component(&v, w, eps)?;
        }

        if v.equals_zero(eps) {
            trace!("dropping vector {}: it lies in the span of the {} kept so far", i, out.len());
            continue;
        }
        out.push(v);
    }
    debug!("orthogonalized {} vectors down to {}", vectors.len(), out.len());
    Ok(out)
}
