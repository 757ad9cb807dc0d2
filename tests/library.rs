/* ************************************************************************ **
** This file is part of onb, and is licensed under EITHER the MIT license   **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

#[macro_use] extern crate onb_tolerance;

use onb::{Matrix, Epsilon, ApproxEq};
use onb::{orthogonalize, gram_schmidt, mk_onb, lex_order, lies_in_subspace, norm};

use rand::Rng;
use std::cmp::Ordering;

fn random_vectors(count: usize, dim: usize) -> Vec<Matrix> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| Matrix::column((0..dim).map(|_| rng.gen_range(-5, 6) as f64).collect()))
        .collect()
}

#[test]
fn pipeline_properties() {
    let eps = Epsilon::default();
    for _ in 0..200 {
        let mut rng = rand::thread_rng();
        let dim = rng.gen_range(1, 5);
        let count = rng.gen_range(0, 7);
        let vectors = random_vectors(count, dim);

        let ortho = orthogonalize(&vectors, eps).unwrap();
        assert!(ortho.len() <= dim);
        assert!(ortho.len() <= count);

        let onb = mk_onb(&vectors, eps).unwrap();
        assert_eq!(onb.len(), ortho.len());
        for (i, a) in onb.iter().enumerate() {
            assert_close!(norm(a).unwrap(), 1.0);
            for (j, b) in onb.iter().enumerate() {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_close!(abs=1e-9, a.dot(b).unwrap(), expected);
                assert_eq!(lex_order(a, b, eps), i.cmp(&j));
            }
        }

        // every input lies in the span of the output, whichever form it takes
        for v in &vectors {
            assert!(lies_in_subspace(v, &ortho, eps).unwrap());
            assert!(lies_in_subspace(v, onb.as_slice(), eps).unwrap());
        }
    }
}

#[test]
fn gram_schmidt_agrees_with_mk_onb_up_to_order() {
    let eps = Epsilon::default();
    for _ in 0..100 {
        let vectors = random_vectors(4, 3);
        let gs = gram_schmidt(&vectors, eps).unwrap();
        let onb = mk_onb(&vectors, eps).unwrap();

        let mut sorted = gs.clone().into_vec();
        sorted.sort_by(|a, b| lex_order(a, b, eps));
        assert!(sorted.approx_eq(&onb.into_vec(), eps));
    }
}

#[test]
fn permuting_orthogonal_inputs() {
    let eps = Epsilon::default();
    let vectors = vec![
        Matrix::column(vec![0.0, 3.0, 0.0, 0.0]),
        Matrix::column(vec![1.0, 0.0, 1.0, 0.0]),
        Matrix::column(vec![0.0, 0.0, 0.0, -2.0]),
        Matrix::column(vec![1.0, 0.0, -1.0, 0.0]),
    ];
    let expected = mk_onb(&vectors, eps).unwrap().into_vec();

    let mut rng = rand::thread_rng();
    for _ in 0..20 {
        let mut shuffled = vectors.clone();
        rng.shuffle(&mut shuffled);
        let actual = mk_onb(&shuffled, eps).unwrap().into_vec();
        assert_close!(actual, expected);
    }
    assert_eq!(lex_order(&expected[0], &expected[3], eps), Ordering::Less);
}

#[test]
fn shape_errors_are_reported() {
    let eps = Epsilon::default();
    let vectors = vec![Matrix::column(vec![1.0, 0.0]), Matrix::column(vec![1.0, 0.0, 0.0])];
    assert!(orthogonalize(&vectors, eps).is_err());
    match mk_onb(&vectors, eps) {
        Err(onb::Error::Shape(e)) => assert_eq!(e.right, (3, 1)),
        other => panic!("unexpected: {:?}", other),
    }
}
