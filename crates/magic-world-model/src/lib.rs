// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! MagicWorld Model - Provider traits and shared types for the native shim
//!
//! This crate holds the platform-agnostic half of the shim. It defines the
//! capability interface a host-specific device-info backend implements, the
//! snapshot type handed to the JSON accessor, and the format template used by
//! the formatting accessor. Nothing here touches raw pointers.
//!
//! # Architecture
//!
//! - [`DeviceInfoProvider`] - Capability interface supplying device strings
//! - [`DeviceInfo`] - Serializable snapshot of every provider field
//! - [`DeviceField`] - Names the individual provider fields
//! - [`render_template`] - Placeholder substitution for formatted output
//! - [`DeviceInfoError`] - Why a field could not be handed across the ABI
//!
//! # Example
//!
//! ```
//! use magic_world_model::{DeviceInfo, DeviceInfoProvider, StaticProvider};
//!
//! let provider = StaticProvider::new(DeviceInfo {
//!     name: Some("Test Device".to_string()),
//!     ..Default::default()
//! });
//! if let Some(name) = provider.name() {
//!     println!("Running on {}", name);
//! }
//! ```

pub mod error;
pub mod format;
pub mod traits;
pub mod types;

pub use error::*;
pub use format::*;
pub use traits::*;
pub use types::*;
