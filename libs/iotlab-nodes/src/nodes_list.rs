// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Node list parsing
//!
//! A node list names nodes of one architecture on one site:
//!
//! ```text
//! site,archi,ids
//! grenoble,m3,1-5+9+12-13
//! ```
//!
//! `ids` is a `+` separated list of single ids and inclusive `a-b` ranges.
//! The architecture may carry a radio suffix (`m3:at86rf231`) which is
//! ignored. Each list expands to full hostnames such as
//! `m3-1.grenoble.iot-lab.info`.

use crate::error::NodesError;
use crate::hostname::IOTLAB_DOMAIN;

/// Expand a `site,archi,ids` node list into full hostnames, in id order
/// as written.
pub fn parse_nodes_list(spec: &str) -> Result<Vec<String>, NodesError> {
    let invalid = |reason: &str| NodesError::InvalidNodesList {
        spec: spec.to_string(),
        reason: reason.to_string(),
    };

    let parts: Vec<&str> = spec.split(',').map(str::trim).collect();
    let [site, archi, ids] = parts.as_slice() else {
        return Err(invalid("expected 'site,archi,ids'"));
    };
    if site.is_empty() {
        return Err(invalid("empty site"));
    }
    let node_type = archi.split(':').next().unwrap_or("");
    if node_type.is_empty() {
        return Err(invalid("empty architecture"));
    }

    let ids = parse_ids(ids).map_err(|reason| invalid(&reason))?;
    Ok(ids
        .into_iter()
        .map(|id| format!("{}-{}.{}.{}", node_type, id, site, IOTLAB_DOMAIN))
        .collect())
}

/// Parse `1-5+9` into `[1, 2, 3, 4, 5, 9]`
fn parse_ids(ids: &str) -> Result<Vec<u32>, String> {
    if ids.is_empty() {
        return Err("empty node ids".to_string());
    }

    let mut result = Vec::new();
    for item in ids.split('+') {
        match item.split_once('-') {
            Some((first, last)) => {
                let first = parse_id(first)?;
                let last = parse_id(last)?;
                if first > last {
                    return Err(format!("range {} is decreasing", item));
                }
                result.extend(first..=last);
            }
            None => result.push(parse_id(item)?),
        }
    }
    Ok(result)
}

fn parse_id(id: &str) -> Result<u32, String> {
    id.trim()
        .parse()
        .map_err(|_| format!("'{}' is not a node id", id))
}
