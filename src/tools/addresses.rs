//! Floating IP and Primary IP tools (read-only).

use crate::client::CloudClient;
use crate::tools::access::AccessMode;
use crate::tools::catalog::{ParamDef, ParamType, ToolCatalog, ToolSpec};
use crate::tools::NoArgs;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct AddressReadArgs {
    id_or_name: String,
}

#[derive(Debug, Deserialize)]
struct PrimaryIpReadByIpArgs {
    ip: String,
}

pub fn tools(client: &Arc<CloudClient>) -> ToolCatalog {
    vec![
        {
            let client = Arc::clone(client);
            ToolSpec::new(
                "get_all_floating_ips",
                "Returns all FloatingIPs objects.",
                AccessMode::ReadOnly,
                vec![],
                move |_: NoArgs| {
                    let client = Arc::clone(&client);
                    async move {
                        client
                            .get_list::<Value>("floating_ips", "floating_ips")
                            .await
                    }
                },
            )
        },
        {
            let client = Arc::clone(client);
            ToolSpec::new(
                "get_a_floating_ip_by_id_or_name",
                "Retrieves a FloatingIP by its ID or Name. Get retrieves a FloatingIP by its ID if the input can be parsed as an integer, otherwise it retrieves a FloatingIP by its name. If the FloatingIP does not exist, null is returned.",
                AccessMode::ReadOnly,
                vec![ParamDef::required(
                    "id_or_name",
                    ParamType::String,
                    "The Floating IP id or name to be searched",
                )],
                move |args: AddressReadArgs| {
                    let client = Arc::clone(&client);
                    async move {
                        client
                            .get_by_id_or_name::<Value>(
                                "floating_ips",
                                "floating_ip",
                                &args.id_or_name,
                            )
                            .await
                    }
                },
            )
        },
        {
            let client = Arc::clone(client);
            ToolSpec::new(
                "get_all_primary_ips",
                "Returns all PrimaryIPs objects.",
                AccessMode::ReadOnly,
                vec![],
                move |_: NoArgs| {
                    let client = Arc::clone(&client);
                    async move {
                        client
                            .get_list::<Value>("primary_ips", "primary_ips")
                            .await
                    }
                },
            )
        },
        {
            let client = Arc::clone(client);
            ToolSpec::new(
                "get_a_primary_ip_by_id_or_name",
                "Retrieves a PrimaryIP by its ID or Name. Get retrieves a Primary IP by its ID if the input can be parsed as an integer, otherwise it retrieves a Primary IP by its name. If the Primary IP does not exist, null is returned.",
                AccessMode::ReadOnly,
                vec![ParamDef::required(
                    "id_or_name",
                    ParamType::String,
                    "The Primary IP id or name to be searched",
                )],
                move |args: AddressReadArgs| {
                    let client = Arc::clone(&client);
                    async move {
                        client
                            .get_by_id_or_name::<Value>(
                                "primary_ips",
                                "primary_ip",
                                &args.id_or_name,
                            )
                            .await
                    }
                },
            )
        },
        {
            let client = Arc::clone(client);
            ToolSpec::new(
                "get_a_primary_ip_by_ip",
                "Retrieves a PrimaryIP by its IP. If the PrimaryIP does not exist, null is returned.",
                AccessMode::ReadOnly,
                vec![ParamDef::required(
                    "ip",
                    ParamType::String,
                    "The Primary IP ip to be searched",
                )],
                move |args: PrimaryIpReadByIpArgs| {
                    let client = Arc::clone(&client);
                    async move {
                        let matches: Vec<Value> = client
                            .get_list(&format!("primary_ips?ip={}", args.ip), "primary_ips")
                            .await?;
                        Ok(matches.into_iter().next())
                    }
                },
            )
        },
    ]
}
