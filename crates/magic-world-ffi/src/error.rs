// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error type for values built on the Rust side of the ABI

use std::ffi::NulError;
use thiserror::Error;

/// Errors raised while building values for the foreign caller
///
/// None of these cross the ABI; exported functions turn them into null.
#[derive(Error, Debug)]
pub enum ShimError {
    /// Text cannot be NUL-terminated because it already contains a NUL
    #[error("string contains an interior NUL byte at offset {position}")]
    InteriorNul { position: usize },
}

impl From<NulError> for ShimError {
    fn from(e: NulError) -> Self {
        ShimError::InteriorNul {
            position: e.nul_position(),
        }
    }
}
