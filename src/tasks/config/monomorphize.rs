/* ************************************************************************ **
** This file is part of onb, and is licensed under EITHER the MIT license   **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

#![allow(non_snake_case)]

use failure::Error;

use std::io::Read;

/// Reads a settings file (or an `onb` input file) from YAML.
///
/// Keys that no field consumed are logged as warnings rather than rejected, so
/// a misspelled `ordering` still runs with the default ordering but says so.
/// Implement it with `derive_yaml_read!`, never by hand.
pub trait YamlRead: for<'de> serde::Deserialize<'de> {
    fn from_reader(mut r: impl Read) -> Result<Self, Error>
    { YamlRead::from_dyn_reader(&mut r) }

    fn from_dyn_reader(r: &mut dyn Read) -> Result<Self, Error> {
        let mut s = String::new();
        r.read_to_string(&mut s)?;
        Self::from_yaml_str(&s)
    }

    fn from_yaml_str(s: &str) -> Result<Self, Error> {
        let value = value_from_str(s)?;
        match Self::__serde_ignored__from_value(value) {
            Ok(out) => Ok(out),
            // deserializing through serde_ignored loses the line numbers; parse
            // again from the text so that the error says where the problem is
            Err(_) => Self::__serde_yaml__from_str(s),
        }
    }

    // generated per type by derive_yaml_read!
    #[doc(hidden)]
    fn __serde_ignored__from_value(value: serde_yaml::Value) -> Result<Self, Error>;
    #[doc(hidden)]
    fn __serde_yaml__from_str(s: &str) -> Result<Self, Error>;
}

#[macro_export]
macro_rules! derive_yaml_read {
    ($Type:ty) => {
        const _: () = {
            use std::result::Result;
            use std::convert::Into;
            use $crate::reexports::serde_yaml;
            use $crate::reexports::serde_ignored;
            use failure::Error;
            use log::warn;

            impl $crate::YamlRead for $Type {
                fn __serde_ignored__from_value(value: serde_yaml::Value) -> Result<$Type, Error> {
                    serde_ignored::deserialize(
                        value,
                        |path| warn!("Unused config item (possible typo?): {}", path),
                    ).map_err(Into::into)
                }

                fn __serde_yaml__from_str(s: &str) -> Result<$Type, Error> {
                    serde_yaml::from_str(s)
                        .map_err(Into::into)
                }
            }
        };
    };
}

// the one place a yaml document is parsed into an untyped Value
fn value_from_str(s: &str) -> Result<serde_yaml::Value, Error>
{ serde_yaml::from_str(s).map_err(Into::into) }
