// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for device-info retrieval
//!
//! The exported C functions collapse all of these into a null return. They
//! exist so the Rust side can log and test the reason.

use crate::DeviceField;
use thiserror::Error;

/// Result type alias for device-info operations
pub type Result<T> = std::result::Result<T, DeviceInfoError>;

/// Reasons a device field could not be produced
#[derive(Error, Debug)]
pub enum DeviceInfoError {
    /// Provider has no value (unsupported host, unreachable backend)
    #[error("{field} is not available from the device-info provider")]
    Unavailable { field: DeviceField },

    /// Provider answered with an empty string
    #[error("{field} is empty")]
    Empty { field: DeviceField },

    /// Value contains a NUL byte and cannot become a C string
    #[error("{field} contains an interior NUL byte at offset {position}")]
    InteriorNul { field: DeviceField, position: usize },

    /// Snapshot could not be serialized to JSON
    #[error("failed to serialize device info: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl DeviceInfoError {
    /// The field this error is about
    pub fn field(&self) -> DeviceField {
        match self {
            DeviceInfoError::Unavailable { field }
            | DeviceInfoError::Empty { field }
            | DeviceInfoError::InteriorNul { field, .. } => *field,
            DeviceInfoError::Serialize(_) => DeviceField::FullInfo,
        }
    }

    /// True when the provider simply had nothing to say
    ///
    /// Absence is an expected outcome on hosts without a backend, so callers
    /// log it at a lower level than representation failures.
    pub fn is_absent(&self) -> bool {
        matches!(
            self,
            DeviceInfoError::Unavailable { .. } | DeviceInfoError::Empty { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_classification() {
        let err = DeviceInfoError::Unavailable {
            field: DeviceField::Model,
        };
        assert!(err.is_absent());
        assert_eq!(err.field(), DeviceField::Model);

        let err = DeviceInfoError::InteriorNul {
            field: DeviceField::Name,
            position: 3,
        };
        assert!(!err.is_absent());
        assert_eq!(
            err.to_string(),
            "name contains an interior NUL byte at offset 3"
        );
    }
}
