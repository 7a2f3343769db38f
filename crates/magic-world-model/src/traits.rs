// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Capability interface for device-info backends
//!
//! The shim never talks to the host directly. A backend implements
//! [`DeviceInfoProvider`] and is injected into the bridge, which keeps the
//! core platform-agnostic and lets tests substitute fixed data.

use crate::{render_template, DeviceField, DeviceInfo, Result, DEFAULT_FORMAT};

/// Source of human-readable device strings
///
/// Every method returns `None` when the host cannot answer. Implementations
/// must be thread-safe since the bridge is callable from any thread.
///
/// # Example
///
/// ```ignore
/// use magic_world_model::DeviceInfoProvider;
///
/// struct Fixed;
///
/// impl DeviceInfoProvider for Fixed {
///     fn name(&self) -> Option<String> { Some("Test Device".into()) }
///     fn real_name(&self) -> Option<String> { None }
///     fn model(&self) -> Option<String> { Some("Simulator".into()) }
///     fn system_version(&self) -> Option<String> { None }
/// }
/// ```
pub trait DeviceInfoProvider: Send + Sync {
    /// User-assigned device name
    fn name(&self) -> Option<String>;

    /// Hardware identifier of the device
    fn real_name(&self) -> Option<String>;

    /// Model family
    fn model(&self) -> Option<String>;

    /// Operating system version
    fn system_version(&self) -> Option<String>;

    /// Read one field
    ///
    /// Every failure reads as absence here, including a JSON serialization
    /// error for [`DeviceField::FullInfo`]. Call [`full_info_json`] directly
    /// to see the error.
    ///
    /// [`full_info_json`]: DeviceInfoProvider::full_info_json
    fn field(&self, field: DeviceField) -> Option<String> {
        match field {
            DeviceField::Name => self.name(),
            DeviceField::RealName => self.real_name(),
            DeviceField::Model => self.model(),
            DeviceField::SystemVersion => self.system_version(),
            DeviceField::FullInfo => self.full_info_json().ok().flatten(),
            DeviceField::Formatted => self.formatted(None),
        }
    }

    /// Collect all scalar fields at once
    fn snapshot(&self) -> DeviceInfo {
        DeviceInfo {
            name: self.name(),
            real_name: self.real_name(),
            model: self.model(),
            system_version: self.system_version(),
        }
    }

    /// All fields as a JSON object
    ///
    /// Returns `Ok(None)` when the provider knows nothing, so hosts without
    /// a backend report absence instead of a document full of nulls.
    fn full_info_json(&self) -> Result<Option<String>> {
        let info = self.snapshot();
        if info.is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::to_string(&info)?))
    }

    /// Render a format template, or [`DEFAULT_FORMAT`] when `template` is `None`
    fn formatted(&self, template: Option<&str>) -> Option<String> {
        let info = self.snapshot();
        if info.is_empty() {
            return None;
        }
        Some(render_template(template.unwrap_or(DEFAULT_FORMAT), &info))
    }
}

/// Provider for hosts with no device-info backend
///
/// Every accessor reports absence.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnsupportedProvider;

impl DeviceInfoProvider for UnsupportedProvider {
    fn name(&self) -> Option<String> {
        None
    }

    fn real_name(&self) -> Option<String> {
        None
    }

    fn model(&self) -> Option<String> {
        None
    }

    fn system_version(&self) -> Option<String> {
        None
    }
}

/// Provider backed by a fixed snapshot
///
/// Useful for simulators, previews and tests.
#[derive(Clone, Debug, Default)]
pub struct StaticProvider {
    info: DeviceInfo,
}

impl StaticProvider {
    pub fn new(info: DeviceInfo) -> Self {
        Self { info }
    }
}

impl DeviceInfoProvider for StaticProvider {
    fn name(&self) -> Option<String> {
        self.info.name.clone()
    }

    fn real_name(&self) -> Option<String> {
        self.info.real_name.clone()
    }

    fn model(&self) -> Option<String> {
        self.info.model.clone()
    }

    fn system_version(&self) -> Option<String> {
        self.info.system_version.clone()
    }

    fn snapshot(&self) -> DeviceInfo {
        self.info.clone()
    }
}
