//! Firewall tools, including the one creation call with real conversion
//! logic: wire-format IP ranges and apply-targets are validated and
//! best-effort filtered before the request is assembled.

use crate::client::resources::FirewallCreateRequest;
use crate::client::CloudClient;
use crate::tools::access::AccessMode;
use crate::tools::catalog::{ParamDef, ParamType, ToolCatalog, ToolSpec};
use crate::tools::convert::{convert_apply_to, convert_rules, ApplyTargetArg, FirewallRuleArg};
use crate::tools::NoArgs;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct FirewallReadArgs {
    id_or_name: String,
}

#[derive(Debug, Deserialize)]
struct FirewallCreateArgs {
    name: String,
    #[serde(default)]
    labels: BTreeMap<String, String>,
    #[serde(default)]
    rules: Vec<FirewallRuleArg>,
    #[serde(default)]
    apply_to: Vec<ApplyTargetArg>,
}

fn ip_net_schema() -> ParamType {
    ParamType::Object(vec![
        ParamDef::required(
            "ip",
            ParamType::String,
            "Network number, example: 10.0.0.0",
        ),
        ParamDef::required(
            "mask",
            ParamType::String,
            "Network mask bytes in base64, example: ////AA==",
        ),
    ])
}

fn rule_schema() -> ParamType {
    ParamType::Object(vec![
        ParamDef::required("direction", ParamType::String, "Traffic direction: in or out"),
        ParamDef::optional(
            "source_ips",
            ParamType::Array(Box::new(ip_net_schema())),
            "Source network ranges",
        ),
        ParamDef::optional(
            "destination_ips",
            ParamType::Array(Box::new(ip_net_schema())),
            "Destination network ranges",
        ),
        ParamDef::required("protocol", ParamType::String, "Protocol: tcp, udp, icmp, esp or gre"),
        ParamDef::optional("port", ParamType::String, "Port or port range, e.g. 80 or 80-85"),
        ParamDef::optional("description", ParamType::String, "Rule description"),
    ])
}

fn apply_to_schema() -> ParamType {
    ParamType::Object(vec![
        ParamDef::required(
            "type",
            ParamType::String,
            "Target type: server or label_selector",
        ),
        ParamDef::optional(
            "server",
            ParamType::Object(vec![ParamDef::required("id", ParamType::Int, "Server ID")]),
            "Server target",
        ),
        ParamDef::optional(
            "label_selector",
            ParamType::Object(vec![ParamDef::required(
                "selector",
                ParamType::String,
                "Label selector",
            )]),
            "Label selector target",
        ),
    ])
}

pub fn tools(client: &Arc<CloudClient>) -> ToolCatalog {
    vec![
        {
            let client = Arc::clone(client);
            ToolSpec::new(
                "get_all_firewalls",
                "Returns all Firewalls objects.",
                AccessMode::ReadOnly,
                vec![],
                move |_: NoArgs| {
                    let client = Arc::clone(&client);
                    async move { client.get_list::<Value>("firewalls", "firewalls").await }
                },
            )
        },
        {
            let client = Arc::clone(client);
            ToolSpec::new(
                "get_a_firewall_by_id_or_name",
                "Retrieves a Firewall by its ID or Name. Get retrieves a Firewall by its ID if the input can be parsed as an integer, otherwise it retrieves a Firewall by its name. If the Firewall does not exist, null is returned.",
                AccessMode::ReadOnly,
                vec![ParamDef::required(
                    "id_or_name",
                    ParamType::String,
                    "The firewall id or name to be searched",
                )],
                move |args: FirewallReadArgs| {
                    let client = Arc::clone(&client);
                    async move {
                        client
                            .get_by_id_or_name::<Value>("firewalls", "firewall", &args.id_or_name)
                            .await
                    }
                },
            )
        },
        {
            let client = Arc::clone(client);
            ToolSpec::new(
                "create_a_firewall",
                "Create a new Firewall.",
                AccessMode::ReadWrite,
                vec![
                    ParamDef::required("name", ParamType::String, "The firewall name"),
                    ParamDef::optional(
                        "labels",
                        ParamType::StringMap,
                        "User-defined labels (key/value pairs) for the resource",
                    ),
                    ParamDef::optional(
                        "rules",
                        ParamType::Array(Box::new(rule_schema())),
                        "Firewall rules",
                    ),
                    ParamDef::optional(
                        "apply_to",
                        ParamType::Array(Box::new(apply_to_schema())),
                        "Resources to apply the firewall to",
                    ),
                ],
                move |args: FirewallCreateArgs| {
                    let client = Arc::clone(&client);
                    async move {
                        let request = FirewallCreateRequest {
                            name: args.name,
                            labels: args.labels,
                            rules: convert_rules(&args.rules),
                            apply_to: convert_apply_to(&args.apply_to),
                        };
                        // Response carries the firewall plus its apply actions.
                        client.post("firewalls", &request).await
                    }
                },
            )
        },
    ]
}
