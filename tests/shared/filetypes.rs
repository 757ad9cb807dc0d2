/* ************************************************************************ **
** This file is part of onb, and is licensed under EITHER the MIT license   **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use onb_integration_test::CheckFile;

// Mirrors the output of the binary.  (duplicated here, rather than imported,
// so that a change to the output format has to be made deliberately in two places)
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

impl CheckFile for BasisJson {
    fn check_against(&self, expected: &BasisJson) {
        assert_eq!(self.dimension, expected.dimension);
        assert_eq!(self.rank, expected.rank);
        assert_close!(abs=1e-9, self.basis, expected.basis);
        assert_eq!(self.queries, expected.queries);
    }
}
