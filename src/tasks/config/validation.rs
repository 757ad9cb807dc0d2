/* ************************************************************************ **
** This file is part of onb, and is licensed under EITHER the MIT license   **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! All of the post-processing that occurs after deserialization is written here.

use crate::config::*;
use crate::FailResult;

use failure::ResultExt;
use onb_tolerance::Epsilon;

impl Settings {
    pub fn validate(self) -> FailResult<ValidatedSettings> {
        let Settings { epsilon, ordering } = self;
        let epsilon = Epsilon::new(epsilon).context("invalid setting for 'epsilon'")?;
        if epsilon.get() > 1e-3 {
            warn!("epsilon = {} is unusually large; most vectors will look parallel", epsilon.get());
        }
        Ok(ValidatedSettings { epsilon, ordering })
    }
}
