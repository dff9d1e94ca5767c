//! Load balancer and load-balancer-type tools (read-only).

use crate::client::CloudClient;
use crate::tools::access::AccessMode;
use crate::tools::catalog::{ParamDef, ParamType, ToolCatalog, ToolSpec};
use crate::tools::NoArgs;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct LoadBalancerReadArgs {
    id_or_name: String,
}

pub fn tools(client: &Arc<CloudClient>) -> ToolCatalog {
    vec![
        {
            let client = Arc::clone(client);
            ToolSpec::new(
                "get_all_load_balancers",
                "Returns all LoadBalancers objects.",
                AccessMode::ReadOnly,
                vec![],
                move |_: NoArgs| {
                    let client = Arc::clone(&client);
                    async move {
                        client
                            .get_list::<Value>("load_balancers", "load_balancers")
                            .await
                    }
                },
            )
        },
        {
            let client = Arc::clone(client);
            ToolSpec::new(
                "get_a_load_balancer_by_id_or_name",
                "Retrieves a LoadBalancer by its ID or Name. Get retrieves a load balancer by its ID if the input can be parsed as an integer, otherwise it retrieves a load balancer by its name. If the load balancer does not exist, null is returned.",
                AccessMode::ReadOnly,
                vec![ParamDef::required(
                    "id_or_name",
                    ParamType::String,
                    "The Load Balancer id or name to be searched",
                )],
                move |args: LoadBalancerReadArgs| {
                    let client = Arc::clone(&client);
                    async move {
                        client
                            .get_by_id_or_name::<Value>(
                                "load_balancers",
                                "load_balancer",
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
                "get_all_load_balancer_types",
                "Returns all LoadBalancerTypes objects.",
                AccessMode::ReadOnly,
                vec![],
                move |_: NoArgs| {
                    let client = Arc::clone(&client);
                    async move {
                        client
                            .get_list::<Value>("load_balancer_types", "load_balancer_types")
                            .await
                    }
                },
            )
        },
        {
            let client = Arc::clone(client);
            ToolSpec::new(
                "get_a_load_balancer_type_by_id_or_name",
                "Retrieves a LoadBalancerType by its ID or Name. Get retrieves a load balancer type by its ID if the input can be parsed as an integer, otherwise it retrieves a load balancer type by its name. If the load balancer type does not exist, null is returned.",
                AccessMode::ReadOnly,
                vec![ParamDef::required(
                    "id_or_name",
                    ParamType::String,
                    "The Load Balancer Type id or name to be searched",
                )],
                move |args: LoadBalancerReadArgs| {
                    let client = Arc::clone(&client);
                    async move {
                        client
                            .get_by_id_or_name::<Value>(
                                "load_balancer_types",
                                "load_balancer_type",
                                &args.id_or_name,
                            )
                            .await
                    }
                },
            )
        },
    ]
}
