//! SSH key tools — the one resource family with a full read/write surface.
//!
//! Mutations follow resolve-then-act: the key is looked up by ID first and
//! the mutation is only attempted after that lookup succeeds. A dangling
//! identifier therefore fails before any write request is issued.

use crate::client::resources::{SshKey, SshKeyCreateRequest, SshKeyUpdateRequest};
use crate::client::CloudClient;
use crate::tools::access::AccessMode;
use crate::tools::catalog::{ParamDef, ParamType, ToolCatalog, ToolSpec};
use crate::tools::NoArgs;
use crate::types::{Error, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct SshKeyReadArgs {
    id_or_name: String,
}

#[derive(Debug, Deserialize)]
struct SshKeyCreateArgs {
    name: String,
    public_key: String,
    #[serde(default)]
    labels: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct SshKeyUpdateArgs {
    ssh_key_id: i64,
    name: String,
    #[serde(default)]
    labels: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct SshKeyDeleteArgs {
    ssh_key_id: i64,
}

/// Resolve a key by ID, failing (rather than returning null) when it does
/// not exist — mutation paths must never act on an unresolved reference.
async fn resolve(client: &CloudClient, id: i64) -> Result<SshKey> {
    client
        .get_one::<SshKey>(&format!("ssh_keys/{id}"), "ssh_key")
        .await?
        .ok_or_else(|| Error::not_found(format!("ssh key {id}")))
}

pub fn tools(client: &Arc<CloudClient>) -> ToolCatalog {
    vec![
        {
            let client = Arc::clone(client);
            ToolSpec::new(
                "get_all_ssh_keys",
                "Returns all ssh-key objects. SSH keys are public keys you provide to the cloud system. They can be injected into Servers at creation time.",
                AccessMode::ReadOnly,
                vec![],
                move |_: NoArgs| {
                    let client = Arc::clone(&client);
                    async move { client.get_list::<SshKey>("ssh_keys", "ssh_keys").await }
                },
            )
        },
        {
            let client = Arc::clone(client);
            ToolSpec::new(
                "get_a_ssh_key_by_id_or_name",
                "Retrieves a SSH key by its ID or Name. Get retrieves a SSH key by its ID if the input can be parsed as an integer, otherwise it retrieves a SSH key by its name. If the SSH key does not exist, null is returned.",
                AccessMode::ReadOnly,
                vec![ParamDef::required(
                    "id_or_name",
                    ParamType::String,
                    "The ssh key id or name to be searched",
                )],
                move |args: SshKeyReadArgs| {
                    let client = Arc::clone(&client);
                    async move {
                        client
                            .get_by_id_or_name::<SshKey>("ssh_keys", "ssh_key", &args.id_or_name)
                            .await
                    }
                },
            )
        },
        {
            let client = Arc::clone(client);
            ToolSpec::new(
                "create_a_ssh_key",
                "Creates a new SSH key with the given name and public_key. Once an SSH key is created, it can be used in other calls such as creating Servers.",
                AccessMode::ReadWrite,
                vec![
                    ParamDef::required("name", ParamType::String, "Name of the SSH key"),
                    ParamDef::required("public_key", ParamType::String, "Public key"),
                    ParamDef::optional(
                        "labels",
                        ParamType::StringMap,
                        "User-defined labels (key/value pairs) for the resource",
                    ),
                ],
                move |args: SshKeyCreateArgs| {
                    let client = Arc::clone(&client);
                    async move {
                        let request = SshKeyCreateRequest {
                            name: args.name,
                            public_key: args.public_key,
                            labels: args.labels,
                        };
                        let body = client.post("ssh_keys", &request).await?;
                        Ok(body.get("ssh_key").cloned().unwrap_or(body))
                    }
                },
            )
        },
        {
            let client = Arc::clone(client);
            ToolSpec::new(
                "update_a_ssh_key",
                "Updates a SSH key by its ID. You can update an SSH key name and an SSH key labels.",
                AccessMode::ReadWrite,
                vec![
                    ParamDef::required("ssh_key_id", ParamType::Int, "The ssh key id to update"),
                    ParamDef::required("name", ParamType::String, "New name of the SSH key"),
                    ParamDef::optional(
                        "labels",
                        ParamType::StringMap,
                        "User-defined labels (key/value pairs) for the resource",
                    ),
                ],
                move |args: SshKeyUpdateArgs| {
                    let client = Arc::clone(&client);
                    async move {
                        let existing = resolve(&client, args.ssh_key_id).await?;
                        let request = SshKeyUpdateRequest {
                            name: args.name,
                            labels: args.labels,
                        };
                        client
                            .put::<SshKey>(
                                &format!("ssh_keys/{}", existing.id),
                                "ssh_key",
                                &request,
                            )
                            .await
                    }
                },
            )
        },
        {
            let client = Arc::clone(client);
            ToolSpec::new(
                "delete_ssh_key_by_id",
                "Deletes permanently a SSH key by its ID.",
                AccessMode::ReadWrite,
                vec![ParamDef::required(
                    "ssh_key_id",
                    ParamType::Int,
                    "The ssh key id to delete",
                )],
                move |args: SshKeyDeleteArgs| {
                    let client = Arc::clone(&client);
                    async move {
                        let existing = resolve(&client, args.ssh_key_id).await?;
                        client.delete(&format!("ssh_keys/{}", existing.id)).await?;
                        Ok(existing)
                    }
                },
            )
        },
    ]
}
