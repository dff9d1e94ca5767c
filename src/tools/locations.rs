//! Location, datacenter and pricing tools (read-only).

use crate::client::CloudClient;
use crate::tools::access::AccessMode;
use crate::tools::catalog::{ParamDef, ParamType, ToolCatalog, ToolSpec};
use crate::tools::NoArgs;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct LocationReadArgs {
    location_id: i64,
}

#[derive(Debug, Deserialize)]
struct DatacenterReadArgs {
    datacenter_id: i64,
}

pub fn tools(client: &Arc<CloudClient>) -> ToolCatalog {
    vec![
        {
            let client = Arc::clone(client);
            ToolSpec::new(
                "get_location_list",
                "Returns all locations objects.",
                AccessMode::ReadOnly,
                vec![],
                move |_: NoArgs| {
                    let client = Arc::clone(&client);
                    async move { client.get_list::<Value>("locations", "locations").await }
                },
            )
        },
        {
            let client = Arc::clone(client);
            ToolSpec::new(
                "get_location_info_by_id",
                "Get a location by its ID, it returns the location object info.",
                AccessMode::ReadOnly,
                vec![ParamDef::required(
                    "location_id",
                    ParamType::Int,
                    "The location id to be searched",
                )],
                move |args: LocationReadArgs| {
                    let client = Arc::clone(&client);
                    async move {
                        client
                            .get_one::<Value>(&format!("locations/{}", args.location_id), "location")
                            .await
                    }
                },
            )
        },
        {
            let client = Arc::clone(client);
            ToolSpec::new(
                "get_datacenter_list",
                "Returns all datacenters objects.",
                AccessMode::ReadOnly,
                vec![],
                move |_: NoArgs| {
                    let client = Arc::clone(&client);
                    async move { client.get_list::<Value>("datacenters", "datacenters").await }
                },
            )
        },
        {
            let client = Arc::clone(client);
            ToolSpec::new(
                "get_datacenter_info_by_id",
                "Get a datacenter by its ID, it returns the datacenter object info.",
                AccessMode::ReadOnly,
                vec![ParamDef::required(
                    "datacenter_id",
                    ParamType::Int,
                    "The datacenter id to be searched",
                )],
                move |args: DatacenterReadArgs| {
                    let client = Arc::clone(&client);
                    async move {
                        client
                            .get_one::<Value>(
                                &format!("datacenters/{}", args.datacenter_id),
                                "datacenter",
                            )
                            .await
                    }
                },
            )
        },
        {
            let client = Arc::clone(client);
            ToolSpec::new(
                "get_pricing_information",
                "Get retrieves pricing information.",
                AccessMode::ReadOnly,
                vec![],
                move |_: NoArgs| {
                    let client = Arc::clone(&client);
                    async move {
                        client
                            .get_one::<Value>("pricing", "pricing")
                            .await?
                            .ok_or_else(|| crate::types::Error::not_found("pricing"))
                    }
                },
            )
        },
    ]
}
