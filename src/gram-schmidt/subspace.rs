/* ************************************************************************ **
** This file is part of onb, and is licensed under EITHER the MIT license   **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::subtract_component;

use onb_matrix::{Matrix, ShapeMismatchError};
use onb_tolerance::Epsilon;

/// Test whether `v` lies in the span of `generators`.
///
/// The generators **must** be pairwise orthogonal (e.g. the output of
/// [`orthogonalize`](crate::orthogonalize) or [`gram_schmidt`](crate::gram_schmidt)).
/// This is not checked; for a non-orthogonal set the answer depends on the
/// iteration order and is generally wrong.
pub fn lies_in_subspace<'a, I>(v: &Matrix, generators: I, eps: Epsilon) -> Result<bool, ShapeMismatchError>
where I: IntoIterator<Item = &'a Matrix>,
{
    let mut residual = v.clone();
    for e in generators {
        residual = subtract_component(&residual, e, eps)?;
    }
    Ok(residual.equals_zero(eps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gram_schmidt, mk_onb};
    use crate::test_util::{eps, vec3, random_nonzero_vecs_in_r3};

    #[test]
    fn subspace_membership() {
        let v1 = vec3(0.5, 0.5, 0.0);
        let v2 = vec3(0.0, 0.5, 1.0);
        let onb = gram_schmidt(&[v1, v2], eps()).unwrap();

        assert!(!lies_in_subspace(&vec3(1.0, 0.0, 0.0), &onb, eps()).unwrap());
        // 1000 * v1 - 24 * v2
        assert!(lies_in_subspace(&vec3(500.0, 488.0, -24.0), &onb, eps()).unwrap());
    }

    #[test]
    fn inputs_lie_in_their_own_span() {
        for _ in 0..200 {
            let vs = random_nonzero_vecs_in_r3();
            let onb = mk_onb(&vs, eps()).unwrap();
            for v in &vs {
                assert!(lies_in_subspace(v, &onb, eps()).unwrap(), "{}", v);
            }
        }
    }

    #[test]
    fn trivial_subspace() {
        let none: Vec<Matrix> = vec![];
        assert!(lies_in_subspace(&vec3(0.0, 0.0, 0.0), &none, eps()).unwrap());
        assert!(!lies_in_subspace(&vec3(0.0, 1e-3, 0.0), &none, eps()).unwrap());
    }

    #[test]
    fn accepts_orthogonal_but_unnormalized_generators() {
        let gens = vec![vec3(2.0, 0.0, 0.0), vec3(0.0, 0.0, 7.0)];
        assert!(lies_in_subspace(&vec3(-3.0, 0.0, 4.0), &gens, eps()).unwrap());
        assert!(!lies_in_subspace(&vec3(-3.0, 1.0, 4.0), &gens, eps()).unwrap());
    }

    #[test]
    fn mismatched_generator() {
        let gens = vec![Matrix::column(vec![1.0, 0.0])];
        assert!(lies_in_subspace(&vec3(1.0, 0.0, 0.0), &gens, eps()).is_err());
    }
}
