// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Format templates for the formatting accessor
//!
//! A template is plain text with `{key}` placeholders, where `key` is one of
//! `name`, `realName`, `model` or `systemVersion`. Anything else in braces is
//! copied through unchanged, so templates never fail to render.

use crate::{DeviceField, DeviceInfo};

/// Template used when the caller passes no format
pub const DEFAULT_FORMAT: &str = "{name} ({model}) - {systemVersion}";

/// Text substituted for a placeholder whose value is missing
pub const UNKNOWN_VALUE: &str = "unknown";

/// Render `template` against a device snapshot
pub fn render_template(template: &str, info: &DeviceInfo) -> String {
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let Some(close) = after.find('}') else {
            // Unterminated brace, emit the tail as-is
            out.push_str(&rest[open..]);
            return out;
        };

        let key = &after[..close];
        match placeholder(key) {
            Some(field) => out.push_str(info.get(field).unwrap_or(UNKNOWN_VALUE)),
            None => {
                out.push('{');
                out.push_str(key);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

fn placeholder(key: &str) -> Option<DeviceField> {
    key.parse::<DeviceField>()
        .ok()
        .filter(|field| DeviceField::SCALARS.contains(field))
}
