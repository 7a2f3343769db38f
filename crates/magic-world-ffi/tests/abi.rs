// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Drives the primitives and system-info exports through raw pointers, the
//! way a foreign caller does.

use magic_world_ffi::*;
use std::ffi::{c_char, CStr};
use std::time::{SystemTime, UNIX_EPOCH};

fn now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64
}

/// Copy out and release a greeting
unsafe fn take_greeting(name: *const c_char) -> String {
    let ptr = native_get_greeting(name);
    assert!(!ptr.is_null());
    let text = CStr::from_ptr(ptr).to_str().unwrap().to_owned();
    native_free_string(ptr);
    text
}

#[test]
fn test_add_wraparound() {
    let cases = [
        (0, 0),
        (1, 2),
        (-5, 3),
        (i32::MAX, 1),
        (i32::MIN, -1),
        (i32::MAX, i32::MAX),
        (i32::MIN, i32::MIN),
    ];
    for (a, b) in cases {
        let expected = ((a as i64 + b as i64) as u32) as i32;
        assert_eq!(native_add(a, b), expected, "{} + {}", a, b);
    }
}

#[test]
fn test_string_length() {
    unsafe {
        assert_eq!(native_string_length(std::ptr::null()), 0);
        assert_eq!(native_string_length(c"".as_ptr()), 0);
        assert_eq!(native_string_length(c"MagicWorld".as_ptr()), 10);
        assert_eq!(native_string_length(c"你好".as_ptr()), 6);
    }
}

#[test]
fn test_greeting() {
    unsafe {
        assert_eq!(take_greeting(std::ptr::null()), "Hello, World!");
        assert_eq!(take_greeting(c"Ada".as_ptr()), "Hello, Ada!");
    }
}

#[test]
fn test_greetings_are_independent() {
    unsafe {
        let first = native_get_greeting(c"first".as_ptr());
        let second = native_get_greeting(c"second".as_ptr());
        assert_ne!(first, second);

        native_free_string(first);
        assert_eq!(CStr::from_ptr(second), c"Hello, second!");
        native_free_string(second);
    }
}

#[test]
fn test_sum_array() {
    let values = [1, 2, 3];
    let empty: [i32; 0] = [];
    unsafe {
        assert_eq!(native_sum_array(values.as_ptr(), 3), 6);
        assert_eq!(native_sum_array(values.as_ptr(), 0), 0);
        assert_eq!(native_sum_array(values.as_ptr(), -1), 0);
        assert_eq!(native_sum_array(empty.as_ptr(), 0), 0);
        for n in [-10, 0, 1, 100] {
            assert_eq!(native_sum_array(std::ptr::null(), n), 0);
        }
    }
}

#[test]
fn test_release_functions_accept_null() {
    unsafe {
        native_free_string(std::ptr::null_mut());
        native_free_system_info(std::ptr::null_mut());
        device_free_string(std::ptr::null_mut());
    }
}

#[test]
fn test_system_info() {
    let info = native_get_system_info();
    assert!(!info.is_null());

    let record = unsafe { &*info };
    assert!((record.timestamp() - now()).abs() <= 5);
    assert!(!record.platform().to_bytes().is_empty());
    assert_eq!(record.version(), c"1.0.0");

    unsafe { native_free_system_info(info) };
}

#[test]
fn test_system_info_content_is_stable() {
    let first = native_get_system_info();
    let second = native_get_system_info();
    assert!(!first.is_null() && !second.is_null());
    assert_ne!(first, second);

    unsafe {
        assert_eq!((*first).platform(), (*second).platform());
        assert_eq!((*first).version(), (*second).version());
        native_free_system_info(first);
        native_free_system_info(second);
    }
}

#[repr(C)]
struct HostOverlay {
    platform: *const c_char,
    version: *const c_char,
    timestamp: i64,
}

#[test]
fn test_system_info_overlay() {
    let info = native_get_system_info();
    assert!(!info.is_null());

    // Read through the layout the C header declares
    let overlay = unsafe { &*(info as *const HostOverlay) };
    unsafe {
        assert_eq!(CStr::from_ptr(overlay.version), c"1.0.0");
        assert_eq!(CStr::from_ptr(overlay.platform), (*info).platform());
        assert_eq!(overlay.timestamp, (*info).timestamp());
        native_free_system_info(info);
    }
}

#[test]
fn test_calls_from_many_threads() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let values: Vec<i32> = (0..=i).collect();
                let sum = unsafe { native_sum_array(values.as_ptr(), values.len() as i32) };
                assert_eq!(sum, i * (i + 1) / 2);

                let info = native_get_system_info();
                assert!(!info.is_null());
                unsafe { native_free_system_info(info) };

                let greeting = unsafe { native_get_greeting(c"thread".as_ptr()) };
                unsafe { native_free_string(greeting) };
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
