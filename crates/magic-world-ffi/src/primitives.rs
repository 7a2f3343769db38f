// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Stateless numeric and string helpers
//!
//! The safe functions carry the logic; the `native_*` exports only translate
//! pointers. Integer arithmetic wraps on overflow in every build profile.

use crate::owned::{Native, OwnedCString};
use crate::ShimError;
use std::ffi::{c_char, CStr};

/// Name used when the caller does not supply one
pub const DEFAULT_NAME: &[u8] = b"World";

pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Byte length, saturating at `i32::MAX`
pub fn string_length(s: Option<&CStr>) -> i32 {
    s.map_or(0, |s| i32::try_from(s.to_bytes().len()).unwrap_or(i32::MAX))
}

/// Build `"Hello, {name}!"`, substituting [`DEFAULT_NAME`] for `None`
///
/// The name is copied byte for byte, so it need not be UTF-8.
pub fn greeting(name: Option<&[u8]>) -> Result<OwnedCString<Native>, ShimError> {
    let name = name.unwrap_or(DEFAULT_NAME);

    let mut text = Vec::with_capacity("Hello, ".len() + name.len() + 1);
    text.extend_from_slice(b"Hello, ");
    text.extend_from_slice(name);
    text.push(b'!');

    OwnedCString::new(text)
}

pub fn sum_array(values: &[i32]) -> i32 {
    values.iter().fold(0i32, |acc, v| acc.wrapping_add(*v))
}

/// Add two integers with wraparound
#[unsafe(no_mangle)]
pub extern "C" fn native_add(a: i32, b: i32) -> i32 {
    add(a, b)
}

/// Length in bytes of a NUL-terminated string, 0 for null
///
/// # Safety
/// - `s` must be null or point to a valid NUL-terminated string
#[unsafe(no_mangle)]
pub unsafe extern "C" fn native_string_length(s: *const c_char) -> i32 {
    let s = (!s.is_null()).then(|| CStr::from_ptr(s));
    string_length(s)
}

/// Allocate a greeting for `name` (or "World" when null)
///
/// The result must be released with `native_free_string`. Returns null only
/// if the greeting cannot be built.
///
/// # Safety
/// - `name` must be null or point to a valid NUL-terminated string
#[unsafe(no_mangle)]
pub unsafe extern "C" fn native_get_greeting(name: *const c_char) -> *mut c_char {
    let name = (!name.is_null()).then(|| CStr::from_ptr(name).to_bytes());

    match greeting(name) {
        Ok(text) => text.into_raw(),
        Err(e) => {
            log::warn!("native_get_greeting: {}", e);
            std::ptr::null_mut()
        }
    }
}

/// Sum the first `length` elements of `array`
///
/// Returns 0 for a null array or a non-positive length.
///
/// # Safety
/// - `array` must be null or point to at least `length` readable `i32`s
#[unsafe(no_mangle)]
pub unsafe extern "C" fn native_sum_array(array: *const i32, length: i32) -> i32 {
    if array.is_null() || length <= 0 {
        return 0;
    }

    let values = std::slice::from_raw_parts(array, length as usize);
    sum_array(values)
}

/// Release a string returned by `native_get_greeting`
///
/// # Safety
/// - `s` must be null or a pointer returned by `native_get_greeting`
/// - After calling this function, the pointer is invalid
#[unsafe(no_mangle)]
pub unsafe extern "C" fn native_free_string(s: *mut c_char) {
    drop(OwnedCString::<Native>::from_raw(s));
}
