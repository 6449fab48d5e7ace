// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Node hostname helpers
//!
//! Node hostnames have the form `<type>-<num>.<site>.<domain>`, e.g.
//! `m3-1.grenoble.iot-lab.info`. Selections only keep the short form.

/// Domain suffix of every testbed node hostname
pub const IOTLAB_DOMAIN: &str = "iot-lab.info";

/// Short form of a hostname: everything before the first `.`
pub fn short_hostname(hostname: &str) -> &str {
    hostname
        .split_once('.')
        .map_or(hostname, |(short, _)| short)
}

/// Site label of a hostname, if it has one
pub fn hostname_site(hostname: &str) -> Option<&str> {
    hostname
        .split('.')
        .nth(1)
        .filter(|site| !site.is_empty())
}

/// Whether `hostname` passes an optional site filter.
///
/// Hostnames without a site label cannot be checked and always pass.
pub fn matches_site(hostname: &str, site: Option<&str>) -> bool {
    match (site, hostname_site(hostname)) {
        (Some(wanted), Some(actual)) => wanted == actual,
        _ => true,
    }
}
