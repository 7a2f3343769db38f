// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! MagicWorld FFI - flat C ABI for the app's Dart FFI layer
//!
//! Three independent groups of exported functions, each with its own release
//! function:
//!
//! - [`primitives`] - arithmetic and string helpers, `native_free_string`
//! - [`system_info`] - the [`SystemInfo`] record, `native_free_system_info`
//! - [`device`] - device-info accessors, `device_free_string`
//!
//! Every exported function reports failure with a null or zero return.
//! Release functions accept null and must be called at most once per
//! pointer, and only with pointers from their own group.
//!
//! The C declarations live in `include/magic_world_ffi.h`.

pub mod device;
pub mod owned;
pub mod primitives;
pub mod system_info;

mod error;

pub use error::ShimError;
pub use owned::{Device, Domain, Native, OwnedCString};
pub use system_info::SystemInfo;

pub use device::{
    device_format_info, device_free_string, device_get_full_info, device_get_model,
    device_get_name, device_get_real_name, device_get_system_version, install_provider,
};
pub use primitives::{
    native_add, native_free_string, native_get_greeting, native_string_length, native_sum_array,
};
pub use system_info::{native_free_system_info, native_get_system_info};
