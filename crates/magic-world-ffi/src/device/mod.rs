// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device-info bridge
//!
//! Exposes the installed [`DeviceInfoProvider`] through C functions that
//! return caller-owned strings. Every accessor returns either null or a
//! fresh pointer that must be released with `device_free_string`, never
//! with the primitives' or system-info release functions.
//!
//! Null means "no value" whatever the reason. The reason is kept as a
//! [`DeviceInfoError`] on the Rust side and logged.

#[cfg(any(target_os = "ios", target_os = "macos"))]
mod apple;

#[cfg(any(target_os = "ios", target_os = "macos"))]
pub use apple::HostProvider;

use crate::owned::{Device, OwnedCString};
use magic_world_model::{DeviceField, DeviceInfoError, DeviceInfoProvider};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::ffi::{c_char, CStr};
use std::sync::Arc;

/// Result of one bridge call before it crosses the ABI
pub type DeviceString = Result<OwnedCString<Device>, DeviceInfoError>;

static PROVIDER: Lazy<RwLock<Arc<dyn DeviceInfoProvider>>> =
    Lazy::new(|| RwLock::new(host_provider()));

/// Provider for the current build target
pub fn host_provider() -> Arc<dyn DeviceInfoProvider> {
    #[cfg(any(target_os = "ios", target_os = "macos"))]
    {
        Arc::new(HostProvider)
    }
    #[cfg(not(any(target_os = "ios", target_os = "macos")))]
    {
        Arc::new(magic_world_model::UnsupportedProvider)
    }
}

/// Replace the provider used by the exported accessors
///
/// Returns the previous provider. Strings already handed out are not
/// affected.
pub fn install_provider(provider: Arc<dyn DeviceInfoProvider>) -> Arc<dyn DeviceInfoProvider> {
    log::trace!("installing device-info provider");
    std::mem::replace(&mut *PROVIDER.write(), provider)
}

/// Currently installed provider
pub fn provider() -> Arc<dyn DeviceInfoProvider> {
    PROVIDER.read().clone()
}

/// Read one scalar field into an owned C string
pub fn read_field(provider: &dyn DeviceInfoProvider, field: DeviceField) -> DeviceString {
    into_device_string(field, provider.field(field))
}

/// JSON snapshot of every field
pub fn full_info(provider: &dyn DeviceInfoProvider) -> DeviceString {
    let json = provider.full_info_json()?;
    into_device_string(DeviceField::FullInfo, json)
}

/// Formatted text, using the provider's default template for `None`
pub fn format_info(provider: &dyn DeviceInfoProvider, template: Option<&str>) -> DeviceString {
    into_device_string(DeviceField::Formatted, provider.formatted(template))
}

fn into_device_string(field: DeviceField, value: Option<String>) -> DeviceString {
    let value = value.ok_or(DeviceInfoError::Unavailable { field })?;
    if value.is_empty() {
        return Err(DeviceInfoError::Empty { field });
    }

    OwnedCString::new(value).map_err(|e| match e {
        crate::ShimError::InteriorNul { position } => {
            DeviceInfoError::InteriorNul { field, position }
        }
    })
}

/// Collapse a bridge result to the ABI's null-or-owned pointer
fn export(result: DeviceString) -> *mut c_char {
    match result {
        Ok(value) => value.into_raw(),
        Err(e) if e.is_absent() => {
            log::debug!("device info: {}", e);
            std::ptr::null_mut()
        }
        Err(e) => {
            log::warn!("device info: {}", e);
            std::ptr::null_mut()
        }
    }
}

fn export_field(field: DeviceField) -> *mut c_char {
    export(read_field(provider().as_ref(), field))
}

/// Get the device name
///
/// Release the result with `device_free_string`.
#[unsafe(no_mangle)]
pub extern "C" fn device_get_name() -> *mut c_char {
    export_field(DeviceField::Name)
}

/// Get the hardware device name (e.g. `iPhone15,2`)
#[unsafe(no_mangle)]
pub extern "C" fn device_get_real_name() -> *mut c_char {
    export_field(DeviceField::RealName)
}

/// Get the device model
#[unsafe(no_mangle)]
pub extern "C" fn device_get_model() -> *mut c_char {
    export_field(DeviceField::Model)
}

/// Get the operating system version
#[unsafe(no_mangle)]
pub extern "C" fn device_get_system_version() -> *mut c_char {
    export_field(DeviceField::SystemVersion)
}

/// Get all device fields as a JSON object
#[unsafe(no_mangle)]
pub extern "C" fn device_get_full_info() -> *mut c_char {
    export(full_info(provider().as_ref()))
}

/// Format device info with a `{name}`-style template
///
/// A null `format` selects the default template. Invalid UTF-8 in the
/// template is replaced with U+FFFD.
///
/// # Safety
/// - `format` must be null or point to a valid NUL-terminated string
#[unsafe(no_mangle)]
pub unsafe extern "C" fn device_format_info(format: *const c_char) -> *mut c_char {
    let template = (!format.is_null()).then(|| CStr::from_ptr(format).to_string_lossy());
    export(format_info(provider().as_ref(), template.as_deref()))
}

/// Release a string returned by any `device_*` accessor
///
/// # Safety
/// - `s` must be null or a pointer returned by a `device_*` accessor
/// - After calling this function, the pointer is invalid
#[unsafe(no_mangle)]
pub unsafe extern "C" fn device_free_string(s: *mut c_char) {
    drop(OwnedCString::<Device>::from_raw(s));
}

#[cfg(test)]
mod tests {
    use super::*;
    use magic_world_model::{DeviceInfo, StaticProvider, UnsupportedProvider};

    fn phone() -> StaticProvider {
        StaticProvider::new(DeviceInfo {
            name: Some("Test Phone".to_string()),
            real_name: Some("iPhone15,2".to_string()),
            model: Some("iPhone".to_string()),
            system_version: Some("17.0".to_string()),
        })
    }

    #[test]
    fn test_read_field() {
        let provider = phone();
        let name = read_field(&provider, DeviceField::Name).unwrap();
        assert_eq!(name.as_c_str(), c"Test Phone");

        let real = read_field(&provider, DeviceField::RealName).unwrap();
        assert_eq!(real.as_c_str(), c"iPhone15,2");
    }

    #[test]
    fn test_unavailable_and_empty() {
        let err = read_field(&UnsupportedProvider, DeviceField::Model).unwrap_err();
        assert!(matches!(
            err,
            DeviceInfoError::Unavailable {
                field: DeviceField::Model
            }
        ));

        let provider = StaticProvider::new(DeviceInfo {
            name: Some(String::new()),
            model: Some("iPhone".to_string()),
            ..Default::default()
        });
        let err = read_field(&provider, DeviceField::Name).unwrap_err();
        assert!(matches!(err, DeviceInfoError::Empty { .. }));
        assert!(export(Err(err)).is_null());
    }

    #[test]
    fn test_interior_nul_maps_to_field() {
        let provider = StaticProvider::new(DeviceInfo {
            name: Some("bad\0name".to_string()),
            ..Default::default()
        });
        let err = read_field(&provider, DeviceField::Name).unwrap_err();
        assert!(matches!(
            err,
            DeviceInfoError::InteriorNul {
                field: DeviceField::Name,
                position: 3
            }
        ));
        assert!(!err.is_absent());
    }

    #[test]
    fn test_full_info_and_format() {
        let provider = phone();

        let json = full_info(&provider).unwrap();
        let parsed: DeviceInfo =
            serde_json::from_slice(json.as_c_str().to_bytes()).unwrap();
        assert_eq!(parsed, provider.snapshot());

        let text = format_info(&provider, None).unwrap();
        assert_eq!(text.as_c_str(), c"Test Phone (iPhone) - 17.0");

        let text = format_info(&provider, Some("{model} {systemVersion}")).unwrap();
        assert_eq!(text.as_c_str(), c"iPhone 17.0");
    }

    struct BrokenJson;

    impl DeviceInfoProvider for BrokenJson {
        fn name(&self) -> Option<String> {
            Some("Broken".to_string())
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

        fn full_info_json(&self) -> magic_world_model::Result<Option<String>> {
            Err(serde_json::from_str::<u32>("not json").unwrap_err().into())
        }
    }

    #[test]
    fn test_full_info_reports_serialize_error() {
        let err = full_info(&BrokenJson).unwrap_err();
        assert!(matches!(err, DeviceInfoError::Serialize(_)));
        assert!(!err.is_absent());
        assert_eq!(err.field(), DeviceField::FullInfo);
        assert!(export(Err(err)).is_null());
    }

    #[test]
    fn test_unsupported_full_info() {
        assert!(full_info(&UnsupportedProvider).unwrap_err().is_absent());
        assert!(format_info(&UnsupportedProvider, None).is_err());
    }
}
