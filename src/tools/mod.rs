//! Tool infrastructure and per-resource tool catalogs.
//!
//! `catalog`, `access`, `response` and `convert` are the dispatch core;
//! the remaining modules each contribute one resource family's tools by
//! the same pattern: argument struct, one API call, marshal the result.

pub mod access;
pub mod catalog;
pub mod convert;
pub mod response;

pub mod addresses;
pub mod certificates;
pub mod firewalls;
pub mod images;
pub mod load_balancers;
pub mod locations;
pub mod networks;
pub mod placement_groups;
pub mod servers;
pub mod ssh_keys;
pub mod volumes;

use crate::client::CloudClient;
use serde::Deserialize;
use std::sync::Arc;

pub use access::AccessMode;
pub use catalog::{
    filter_catalog, merge_catalogs, ParamDef, ParamType, ToolCatalog, ToolRegistry, ToolSpec,
};

/// Arguments for tools that take none.
#[derive(Debug, Default, Deserialize)]
pub struct NoArgs {}

/// Every tool this server knows, in a deterministic group order.
/// Capability filtering happens afterwards, duplicate detection at bind.
pub fn full_catalog(client: &Arc<CloudClient>) -> ToolCatalog {
    merge_catalogs(vec![
        ssh_keys::tools(client),
        servers::tools(client),
        firewalls::tools(client),
        networks::tools(client),
        addresses::tools(client),
        volumes::tools(client),
        images::tools(client),
        load_balancers::tools(client),
        placement_groups::tools(client),
        certificates::tools(client),
        locations::tools(client),
    ])
}
