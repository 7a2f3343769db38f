// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device-info provider for iOS and macOS
//!
//! iOS reads `UIDevice.currentDevice`; macOS reads `NSProcessInfo`. The
//! hardware identifier comes from `sysctl` on both. Classes are looked up at
//! runtime so a missing framework yields `None` instead of a crash.

use magic_world_model::DeviceInfoProvider;
use objc::rc::autoreleasepool;
use objc::runtime::{Class, Object};
use objc::{msg_send, sel, sel_impl};
use std::ffi::{c_char, CStr};

/// Provider backed by the host's Objective-C runtime
#[derive(Clone, Copy, Debug, Default)]
pub struct HostProvider;

impl DeviceInfoProvider for HostProvider {
    fn name(&self) -> Option<String> {
        #[cfg(target_os = "ios")]
        {
            ui_device(|device| unsafe { msg_send![device, name] })
        }
        #[cfg(target_os = "macos")]
        {
            process_info(|info| unsafe { msg_send![info, hostName] })
        }
    }

    fn real_name(&self) -> Option<String> {
        #[cfg(target_os = "ios")]
        {
            sysctl_string(c"hw.machine")
        }
        #[cfg(target_os = "macos")]
        {
            sysctl_string(c"hw.model")
        }
    }

    fn model(&self) -> Option<String> {
        #[cfg(target_os = "ios")]
        {
            ui_device(|device| unsafe { msg_send![device, model] })
        }
        #[cfg(target_os = "macos")]
        {
            sysctl_string(c"hw.model")
        }
    }

    fn system_version(&self) -> Option<String> {
        #[cfg(target_os = "ios")]
        {
            ui_device(|device| unsafe { msg_send![device, systemVersion] })
        }
        #[cfg(target_os = "macos")]
        {
            process_info(|info| unsafe { msg_send![info, operatingSystemVersionString] })
        }
    }
}

/// Run `query` against `[UIDevice currentDevice]` and copy the NSString out
#[cfg(target_os = "ios")]
fn ui_device(query: impl FnOnce(*mut Object) -> *mut Object) -> Option<String> {
    shared_instance("UIDevice", |class| unsafe { msg_send![class, currentDevice] }, query)
}

/// Run `query` against `[NSProcessInfo processInfo]` and copy the NSString out
#[cfg(target_os = "macos")]
fn process_info(query: impl FnOnce(*mut Object) -> *mut Object) -> Option<String> {
    shared_instance("NSProcessInfo", |class| unsafe { msg_send![class, processInfo] }, query)
}

fn shared_instance(
    class_name: &str,
    instance: impl FnOnce(&Class) -> *mut Object,
    query: impl FnOnce(*mut Object) -> *mut Object,
) -> Option<String> {
    let class = Class::get(class_name)?;

    autoreleasepool(|| {
        let object = instance(class);
        if object.is_null() {
            return None;
        }
        // SAFETY: the returned NSString is kept alive by the pool
        unsafe { ns_string(query(object)) }
    })
}

/// Copy an NSString into a Rust string
///
/// # Safety
/// - `string` must be null or a live NSString
unsafe fn ns_string(string: *mut Object) -> Option<String> {
    if string.is_null() {
        return None;
    }

    let utf8: *const c_char = msg_send![string, UTF8String];
    if utf8.is_null() {
        return None;
    }

    Some(CStr::from_ptr(utf8).to_string_lossy().into_owned())
}

/// Read a string-valued sysctl such as `hw.machine`
fn sysctl_string(name: &CStr) -> Option<String> {
    let mut size: libc::size_t = 0;

    // First call reports the buffer size
    let rc = unsafe {
        libc::sysctlbyname(
            name.as_ptr(),
            std::ptr::null_mut(),
            &mut size,
            std::ptr::null_mut(),
            0,
        )
    };
    if rc != 0 || size == 0 {
        return None;
    }

    let mut buf = vec![0u8; size];
    let rc = unsafe {
        libc::sysctlbyname(
            name.as_ptr(),
            buf.as_mut_ptr().cast(),
            &mut size,
            std::ptr::null_mut(),
            0,
        )
    };
    if rc != 0 {
        return None;
    }

    buf.truncate(size);
    let value = CStr::from_bytes_until_nul(&buf).ok()?;
    Some(value.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sysctl_hardware_id() {
        #[cfg(target_os = "ios")]
        let id = sysctl_string(c"hw.machine");
        #[cfg(target_os = "macos")]
        let id = sysctl_string(c"hw.model");

        assert!(id.is_some_and(|id| !id.is_empty()));
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn test_mac_model_is_hardware_id() {
        let provider = HostProvider;
        let model = provider.model();
        assert!(model.as_deref().is_some_and(|m| !m.is_empty()));
        assert_eq!(model, sysctl_string(c"hw.model"));
        assert_eq!(model, provider.real_name());
    }

    #[test]
    fn test_unknown_sysctl() {
        assert!(sysctl_string(c"hw.no_such_entry").is_none());
    }

    #[test]
    fn test_missing_class() {
        let value = shared_instance(
            "MagicWorldNoSuchClass",
            |_| std::ptr::null_mut(),
            |_| std::ptr::null_mut(),
        );
        assert!(value.is_none());
    }
}
