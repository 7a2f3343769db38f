// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Owned C strings tagged with the domain that allocated them
//!
//! Each exported release function accepts pointers from exactly one domain.
//! The domain is a type parameter, so the allocating side and the releasing
//! side name the same `OwnedCString<D>` and cannot drift apart. All domains
//! currently share Rust's global allocator.

use crate::ShimError;
use std::ffi::{c_char, CStr, CString};
use std::fmt;
use std::marker::PhantomData;

/// Ownership domain of a C string handed across the ABI
pub trait Domain {
    /// Name of the release function for this domain
    const RELEASE_FN: &'static str;
}

/// Strings from the primitives module, released by `native_free_string`
pub enum Native {}

/// Strings from the device bridge, released by `device_free_string`
pub enum Device {}

impl Domain for Native {
    const RELEASE_FN: &'static str = "native_free_string";
}

impl Domain for Device {
    const RELEASE_FN: &'static str = "device_free_string";
}

/// A NUL-terminated string owned by one domain
pub struct OwnedCString<D: Domain> {
    inner: CString,
    _domain: PhantomData<D>,
}

impl<D: Domain> OwnedCString<D> {
    /// Build from raw bytes, which must not contain NUL
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, ShimError> {
        let inner = CString::new(bytes)?;
        Ok(Self {
            inner,
            _domain: PhantomData,
        })
    }

    pub fn as_c_str(&self) -> &CStr {
        &self.inner
    }

    /// Hand ownership to the foreign caller
    pub fn into_raw(self) -> *mut c_char {
        self.inner.into_raw()
    }

    /// Take ownership back from the foreign caller
    ///
    /// Returns `None` for null.
    ///
    /// # Safety
    /// - `ptr` must be null or come from `into_raw` on this same domain
    /// - `ptr` must not have been reclaimed before
    pub unsafe fn from_raw(ptr: *mut c_char) -> Option<Self> {
        if ptr.is_null() {
            return None;
        }
        Some(Self {
            inner: CString::from_raw(ptr),
            _domain: PhantomData,
        })
    }

    /// Convert an optional handle to a pointer, null for `None`
    pub fn into_raw_or_null(value: Option<Self>) -> *mut c_char {
        value.map_or(std::ptr::null_mut(), Self::into_raw)
    }
}

impl<D: Domain> fmt::Debug for OwnedCString<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnedCString")
            .field("value", &self.inner)
            .field("release", &D::RELEASE_FN)
            .finish()
    }
}
