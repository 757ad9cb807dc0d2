/* ************************************************************************ **
** This file is part of onb, and is licensed under EITHER the MIT license   **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Input and output documents of the `onb` binary.

use crate::FailResult;

use onb_matrix::Matrix;

// NOTE: read this with the YamlRead trait, so that typos get reported.
/// Input file.  JSON is accepted too, being (for our purposes) a subset of YAML.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct VectorsFile {
    pub vectors: Vec<Vec<f64>>,

    /// Vectors to test for membership in the span of `vectors`.
    #[serde(default)]
    pub queries: Vec<Vec<f64>>,
}
derive_yaml_read!{VectorsFile}

impl VectorsFile {
    /// Common length of every vector and query, or 0 if there are no vectors.
    pub fn dimension(&self) -> FailResult<usize> {
        let dim = self.vectors.first().map_or(0, |v| v.len());
        for (i, v) in self.vectors.iter().enumerate() {
            if v.len() != dim {
                bail!("vector {} has length {}, but vector 0 has length {}", i, v.len(), dim);
            }
        }
        if dim > 0 {
            for (i, q) in self.queries.iter().enumerate() {
                if q.len() != dim {
                    bail!("query {} has length {}, but the vectors have length {}", i, q.len(), dim);
                }
            }
        }
        Ok(dim)
    }

    pub fn vector_matrices(&self) -> Vec<Matrix>
    { self.vectors.iter().cloned().map(Matrix::column).collect() }

    pub fn query_matrices(&self) -> Vec<Matrix>
    { self.queries.iter().cloned().map(Matrix::column).collect() }
}

/// Output document.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
pub struct BasisJson {
    pub dimension: usize,
    pub rank: usize,
    pub basis: Vec<Vec<f64>>,
    pub queries: Vec<QueryJson>,
}

#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
pub struct QueryJson {
    pub vector: Vec<f64>,
    pub in_span: bool,
}
