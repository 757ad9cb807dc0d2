/* ************************************************************************ **
** This file is part of onb, and is licensed under EITHER the MIT license   **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;
use crate::filetypes::{VectorsFile, BasisJson, QueryJson};

use onb_gram_schmidt::{self as gs, Matrix};
use onb_tasks_config::{BasisOrdering, ValidatedSettings};

use failure::ResultExt;

/// Orthogonalize the input vectors according to `settings`, and test each query
/// for membership in their span.
pub fn compute_basis(input: &VectorsFile, settings: &ValidatedSettings) -> FailResult<BasisJson> {
    let ValidatedSettings { epsilon, ordering } = *settings;
    let dimension = input.dimension()?;
    let vectors = input.vector_matrices();

    info!("Orthogonalizing {} vectors of dimension {} ({:?})", vectors.len(), dimension, ordering);
    let basis: Vec<Matrix> = match ordering {
        BasisOrdering::Canonical => gs::mk_onb(&vectors, epsilon)?.into_vec(),
        BasisOrdering::Insertion => gs::gram_schmidt(&vectors, epsilon)?.into_vec(),
        BasisOrdering::Orthogonal => gs::orthogonalize(&vectors, epsilon)?,
    };
    info!("Found a basis of rank {}", basis.len());

    let mut queries = vec![];
    for (i, query) in input.query_matrices().into_iter().enumerate() {
        let in_span = {
            gs::lies_in_subspace(&query, &basis, epsilon)
                .with_context(|_| format!("while testing query {}", i))?
        };
        debug!("query {}: in span = {}", i, in_span);
        queries.push(QueryJson { vector: input.queries[i].clone(), in_span });
    }

    Ok(BasisJson {
        dimension,
        rank: basis.len(),
        basis: basis.iter().map(column_entries).collect(),
        queries,
    })
}

fn column_entries(v: &Matrix) -> Vec<f64>
{ v.row_major_data().to_vec() }
