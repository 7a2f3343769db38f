// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shared types for device-info data

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies one value the device-info bridge can hand out
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum DeviceField {
    /// User-assigned device name
    Name,
    /// Hardware identifier (e.g. `iPhone15,2`)
    RealName,
    /// Marketing model family (e.g. `iPhone`)
    Model,
    /// Operating system version
    SystemVersion,
    /// JSON snapshot of all fields
    FullInfo,
    /// Output of the formatting accessor
    Formatted,
}

impl DeviceField {
    /// Fields that are read straight from the provider
    pub const SCALARS: [DeviceField; 4] = [
        DeviceField::Name,
        DeviceField::RealName,
        DeviceField::Model,
        DeviceField::SystemVersion,
    ];

    /// Key used in JSON output and format placeholders
    pub fn key(self) -> &'static str {
        match self {
            DeviceField::Name => "name",
            DeviceField::RealName => "realName",
            DeviceField::Model => "model",
            DeviceField::SystemVersion => "systemVersion",
            DeviceField::FullInfo => "fullInfo",
            DeviceField::Formatted => "formatted",
        }
    }
}

impl fmt::Display for DeviceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DeviceField::Name => "name",
            DeviceField::RealName => "real name",
            DeviceField::Model => "model",
            DeviceField::SystemVersion => "system version",
            DeviceField::FullInfo => "full info",
            DeviceField::Formatted => "formatted info",
        };
        f.write_str(label)
    }
}

impl FromStr for DeviceField {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "name" => Ok(DeviceField::Name),
            "realName" => Ok(DeviceField::RealName),
            "model" => Ok(DeviceField::Model),
            "systemVersion" => Ok(DeviceField::SystemVersion),
            "fullInfo" => Ok(DeviceField::FullInfo),
            "formatted" => Ok(DeviceField::Formatted),
            _ => Err(()),
        }
    }
}

/// Snapshot of everything a provider knows about the device
///
/// Missing values serialize as `null` so the JSON shape is stable across
/// hosts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    pub name: Option<String>,
    pub real_name: Option<String>,
    pub model: Option<String>,
    pub system_version: Option<String>,
}

impl DeviceInfo {
    /// Look up a scalar field by identifier
    pub fn get(&self, field: DeviceField) -> Option<&str> {
        match field {
            DeviceField::Name => self.name.as_deref(),
            DeviceField::RealName => self.real_name.as_deref(),
            DeviceField::Model => self.model.as_deref(),
            DeviceField::SystemVersion => self.system_version.as_deref(),
            DeviceField::FullInfo | DeviceField::Formatted => None,
        }
    }

    /// True if the provider returned nothing at all
    pub fn is_empty(&self) -> bool {
        DeviceField::SCALARS
            .iter()
            .all(|field| self.get(*field).map_or(true, str::is_empty))
    }
}
