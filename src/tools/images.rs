//! Image and ISO tools (read-only).

use crate::client::CloudClient;
use crate::tools::access::AccessMode;
use crate::tools::catalog::{ParamDef, ParamType, ToolCatalog, ToolSpec};
use crate::tools::NoArgs;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct ImageReadByIdArgs {
    id: i64,
}

#[derive(Debug, Deserialize)]
struct IsoReadArgs {
    id_or_name: String,
}

pub fn tools(client: &Arc<CloudClient>) -> ToolCatalog {
    vec![
        {
            let client = Arc::clone(client);
            ToolSpec::new(
                "get_all_images",
                "Returns all Images objects.",
                AccessMode::ReadOnly,
                vec![],
                move |_: NoArgs| {
                    let client = Arc::clone(&client);
                    async move { client.get_list::<Value>("images", "images").await }
                },
            )
        },
        {
            let client = Arc::clone(client);
            ToolSpec::new(
                "get_a_image_by_id",
                "Retrieves a Image by its ID. If the Image does not exist, null is returned.",
                AccessMode::ReadOnly,
                vec![ParamDef::required(
                    "id",
                    ParamType::Int,
                    "The image id to be searched",
                )],
                move |args: ImageReadByIdArgs| {
                    let client = Arc::clone(&client);
                    async move {
                        client
                            .get_one::<Value>(&format!("images/{}", args.id), "image")
                            .await
                    }
                },
            )
        },
        {
            let client = Arc::clone(client);
            ToolSpec::new(
                "get_all_isos",
                "Returns all ISOs objects.",
                AccessMode::ReadOnly,
                vec![],
                move |_: NoArgs| {
                    let client = Arc::clone(&client);
                    async move { client.get_list::<Value>("isos", "isos").await }
                },
            )
        },
        {
            let client = Arc::clone(client);
            ToolSpec::new(
                "get_a_iso_by_id_or_name",
                "Retrieves a ISO by its ID or Name. If the ISO does not exist, null is returned.",
                AccessMode::ReadOnly,
                vec![ParamDef::required(
                    "id_or_name",
                    ParamType::String,
                    "The ISO id or name to be searched",
                )],
                move |args: IsoReadArgs| {
                    let client = Arc::clone(&client);
                    async move {
                        client
                            .get_by_id_or_name::<Value>("isos", "iso", &args.id_or_name)
                            .await
                    }
                },
            )
        },
    ]
}
