//! Server and server-type tools (read-only).

use crate::client::resources::Server;
use crate::client::CloudClient;
use crate::tools::access::AccessMode;
use crate::tools::catalog::{ParamDef, ParamType, ToolCatalog, ToolSpec};
use crate::tools::NoArgs;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct ServerReadByIdArgs {
    id: i64,
}

#[derive(Debug, Deserialize)]
struct ServerReadByNameArgs {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ServerTypeReadArgs {
    id_or_name: String,
}

pub fn tools(client: &Arc<CloudClient>) -> ToolCatalog {
    vec![
        {
            let client = Arc::clone(client);
            ToolSpec::new(
                "get_all_servers",
                "Returns all Servers objects.",
                AccessMode::ReadOnly,
                vec![],
                move |_: NoArgs| {
                    let client = Arc::clone(&client);
                    async move { client.get_list::<Server>("servers", "servers").await }
                },
            )
        },
        {
            let client = Arc::clone(client);
            ToolSpec::new(
                "get_a_server_by_id",
                "Retrieves a Server by its ID. If the Server does not exist, null is returned.",
                AccessMode::ReadOnly,
                vec![ParamDef::required(
                    "id",
                    ParamType::Int,
                    "The server id to be searched",
                )],
                move |args: ServerReadByIdArgs| {
                    let client = Arc::clone(&client);
                    async move {
                        client
                            .get_one::<Server>(&format!("servers/{}", args.id), "server")
                            .await
                    }
                },
            )
        },
        {
            let client = Arc::clone(client);
            ToolSpec::new(
                "get_a_server_by_name",
                "Retrieves a Server by its Name. If the Server does not exist, null is returned.",
                AccessMode::ReadOnly,
                vec![ParamDef::required(
                    "name",
                    ParamType::String,
                    "The server name to be searched",
                )],
                move |args: ServerReadByNameArgs| {
                    let client = Arc::clone(&client);
                    async move {
                        let matches: Vec<Server> = client
                            .get_list(&format!("servers?name={}", args.name), "servers")
                            .await?;
                        Ok(matches.into_iter().next())
                    }
                },
            )
        },
        {
            let client = Arc::clone(client);
            ToolSpec::new(
                "get_all_server_types",
                "Returns all ServerTypes objects.",
                AccessMode::ReadOnly,
                vec![],
                move |_: NoArgs| {
                    let client = Arc::clone(&client);
                    async move {
                        client
                            .get_list::<Value>("server_types", "server_types")
                            .await
                    }
                },
            )
        },
        {
            let client = Arc::clone(client);
            ToolSpec::new(
                "get_a_server_type_by_id_or_name",
                "Retrieves a ServerType by its ID or Name. Get retrieves a server type by its ID if the input can be parsed as an integer, otherwise it retrieves a server type by its name. If the server type does not exist, null is returned.",
                AccessMode::ReadOnly,
                vec![ParamDef::required(
                    "id_or_name",
                    ParamType::String,
                    "The server type id or name to be searched",
                )],
                move |args: ServerTypeReadArgs| {
                    let client = Arc::clone(&client);
                    async move {
                        client
                            .get_by_id_or_name::<Value>(
                                "server_types",
                                "server_type",
                                &args.id_or_name,
                            )
                            .await
                    }
                },
            )
        },
    ]
}
