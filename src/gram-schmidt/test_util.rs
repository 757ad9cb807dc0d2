/* ************************************************************************ **
** This file is part of onb, and is licensed under EITHER the MIT license   **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use onb_matrix::Matrix;
use onb_tolerance::Epsilon;

use rand::Rng;

pub fn eps() -> Epsilon { Epsilon::default() }

pub fn vec3(x: f64, y: f64, z: f64) -> Matrix
{ Matrix::column(vec![x, y, z]) }

/// Up to five random vectors with small integer entries, none of them zero.
pub fn random_nonzero_vecs_in_r3() -> Vec<Matrix> {
    let mut rng = rand::thread_rng();
    let mut entry = || rng.gen_range(-5, 6) as f64;
    (0..5)
        .map(|_| vec3(entry(), entry(), entry()))
        .filter(|v| !v.equals_zero(eps()))
        .collect()
}
