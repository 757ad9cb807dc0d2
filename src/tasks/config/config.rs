/* ************************************************************************ **
** This file is part of onb, and is licensed under EITHER the MIT license   **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

// NOTE: Please make sure to use the YamlRead trait when deserializing these types!

use onb_tolerance::{Epsilon, DEFAULT_EPSILON};

/// Settings after validation.
///
/// This is what the rest of the program works with.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ValidatedSettings {
    pub epsilon: Epsilon,
    pub ordering: BasisOrdering,
}

/// Raw deserialized form of settings.
///
/// Call `validate` on this before using it.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    /// Absolute tolerance used for every floating point comparison.
    ///
    /// Must be finite and positive.
    #[serde(default = "defaults::epsilon")]
    pub epsilon: f64,

    /// See the type for documentation.
    #[serde(default)]
    pub ordering: BasisOrdering,
}
derive_yaml_read!{Settings}

/// What to do with the vectors once they have been orthogonalized.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BasisOrdering {
    /// Normalize, then sort lexicographically.  The output then depends only
    /// on the span (and the representatives found for it), not on input order.
    Canonical,
    /// Normalize, keeping the order in which vectors were accepted.
    Insertion,
    /// Do not normalize at all; just orthogonalize.
    Orthogonal,
}

impl Default for BasisOrdering {
    fn default() -> Self { BasisOrdering::Canonical }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            epsilon: defaults::epsilon(),
            ordering: Default::default(),
        }
    }
}

mod defaults {
    pub(crate) fn epsilon() -> f64 { super::DEFAULT_EPSILON }
}
