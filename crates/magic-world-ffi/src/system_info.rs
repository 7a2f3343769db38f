// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Host system record handed to the foreign caller
//!
//! The record is laid out as `{ const char *platform; const char *version;
//! int64_t timestamp; }` so the host can overlay its own struct on it. The
//! record owns both strings, so dropping it (or passing it to
//! `native_free_system_info`) releases everything at once.

use crate::ShimError;
use std::ffi::{c_char, CStr, CString};
use std::mem::{offset_of, size_of};
use std::time::{SystemTime, UNIX_EPOCH};

/// Platform identifier reported in the record
///
/// Fixed per build target; not queried from the running host.
#[cfg(target_os = "ios")]
pub const PLATFORM: &str = "iOS";
#[cfg(target_os = "macos")]
pub const PLATFORM: &str = "macOS";
#[cfg(target_os = "android")]
pub const PLATFORM: &str = "Android";
#[cfg(not(any(target_os = "ios", target_os = "macos", target_os = "android")))]
pub const PLATFORM: &str = std::env::consts::OS;

/// Version reported in the record (placeholder)
pub const VERSION: &str = "1.0.0";

/// System info record with C layout
#[repr(C)]
#[derive(Debug)]
pub struct SystemInfo {
    platform: *const c_char,
    version: *const c_char,
    timestamp: i64,
}

// Layout is part of the binary contract
const _: () = {
    let ptr = size_of::<*const c_char>();
    assert!(offset_of!(SystemInfo, platform) == 0);
    assert!(offset_of!(SystemInfo, version) == ptr);
    assert!(offset_of!(SystemInfo, timestamp) == 2 * ptr);
    assert!(size_of::<SystemInfo>() == 2 * ptr + size_of::<i64>());
};

impl SystemInfo {
    /// Build a record, all or nothing
    ///
    /// Both strings are converted before either is handed to the record, so
    /// a failure leaves nothing allocated.
    pub fn new(platform: &str, version: &str, timestamp: i64) -> Result<Self, ShimError> {
        let platform = CString::new(platform)?;
        let version = CString::new(version)?;

        Ok(Self {
            platform: platform.into_raw(),
            version: version.into_raw(),
            timestamp,
        })
    }

    /// Record for this build at the current wall-clock time
    pub fn current() -> Result<Self, ShimError> {
        Self::new(PLATFORM, VERSION, unix_timestamp())
    }

    pub fn platform(&self) -> &CStr {
        // SAFETY: set from CString::into_raw in `new` and freed only in Drop
        unsafe { CStr::from_ptr(self.platform) }
    }

    pub fn version(&self) -> &CStr {
        // SAFETY: as above
        unsafe { CStr::from_ptr(self.version) }
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }
}

impl Drop for SystemInfo {
    fn drop(&mut self) {
        for field in [self.platform, self.version] {
            if !field.is_null() {
                // SAFETY: non-null fields always come from CString::into_raw
                drop(unsafe { CString::from_raw(field as *mut c_char) });
            }
        }
    }
}

/// Seconds since the Unix epoch, negative for clocks set before it
pub fn unix_timestamp() -> i64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX),
        Err(e) => i64::try_from(e.duration().as_secs()).map_or(i64::MIN, |s| -s),
    }
}

/// Allocate a system info record
///
/// The result must be released with `native_free_system_info`. Returns null
/// if the record cannot be built.
#[unsafe(no_mangle)]
pub extern "C" fn native_get_system_info() -> *mut SystemInfo {
    match SystemInfo::current() {
        Ok(info) => Box::into_raw(Box::new(info)),
        Err(e) => {
            log::warn!("native_get_system_info: {}", e);
            std::ptr::null_mut()
        }
    }
}

/// Release a record and both of its strings
///
/// # Safety
/// - `info` must be null or a pointer returned by `native_get_system_info`
/// - After calling this function, the pointer is invalid
#[unsafe(no_mangle)]
pub unsafe extern "C" fn native_free_system_info(info: *mut SystemInfo) {
    if info.is_null() {
        return;
    }

    let _ = Box::from_raw(info);
}
