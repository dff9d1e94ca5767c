//! Placement group tools (read-only).

use crate::client::CloudClient;
use crate::tools::access::AccessMode;
use crate::tools::catalog::{ParamDef, ParamType, ToolCatalog, ToolSpec};
use crate::tools::NoArgs;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct PlacementGroupReadArgs {
    id_or_name: String,
}

pub fn tools(client: &Arc<CloudClient>) -> ToolCatalog {
    vec![
        {
            let client = Arc::clone(client);
            ToolSpec::new(
                "get_all_placement_groups",
                "Returns all PlacementGroups objects.",
                AccessMode::ReadOnly,
                vec![],
                move |_: NoArgs| {
                    let client = Arc::clone(&client);
                    async move {
                        client
                            .get_list::<Value>("placement_groups", "placement_groups")
                            .await
                    }
                },
            )
        },
        {
            let client = Arc::clone(client);
            ToolSpec::new(
                "get_a_placement_group_by_id_or_name",
                "Retrieves a PlacementGroup by its ID or Name. If the PlacementGroup does not exist, null is returned.",
                AccessMode::ReadOnly,
                vec![ParamDef::required(
                    "id_or_name",
                    ParamType::String,
                    "The Placement Group id or name to be searched",
                )],
                move |args: PlacementGroupReadArgs| {
                    let client = Arc::clone(&client);
                    async move {
                        client
                            .get_by_id_or_name::<Value>(
                                "placement_groups",
                                "placement_group",
                                &args.id_or_name,
                            )
                            .await
                    }
                },
            )
        },
    ]
}
