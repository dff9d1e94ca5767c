//! Certificate tools (read-only).

use crate::client::resources::Certificate;
use crate::client::CloudClient;
use crate::tools::access::AccessMode;
use crate::tools::catalog::{ParamDef, ParamType, ToolCatalog, ToolSpec};
use crate::tools::NoArgs;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct CertificateReadArgs {
    id_or_name: String,
}

pub fn tools(client: &Arc<CloudClient>) -> ToolCatalog {
    vec![
        {
            let client = Arc::clone(client);
            ToolSpec::new(
                "get_all_certificates",
                "Returns all Certificates objects.",
                AccessMode::ReadOnly,
                vec![],
                move |_: NoArgs| {
                    let client = Arc::clone(&client);
                    async move {
                        client
                            .get_list::<Certificate>("certificates", "certificates")
                            .await
                    }
                },
            )
        },
        {
            let client = Arc::clone(client);
            ToolSpec::new(
                "get_a_certificate_by_id_or_name",
                "Retrieves a Certificate by its ID or Name. Get retrieves a Certificate by its ID if the input can be parsed as an integer, otherwise it retrieves a Certificate by its name. If the Certificate does not exist, null is returned.",
                AccessMode::ReadOnly,
                vec![ParamDef::required(
                    "id_or_name",
                    ParamType::String,
                    "The certificate id or name to be searched",
                )],
                move |args: CertificateReadArgs| {
                    let client = Arc::clone(&client);
                    async move {
                        client
                            .get_by_id_or_name::<Certificate>(
                                "certificates",
                                "certificate",
                                &args.id_or_name,
                            )
                            .await
                    }
                },
            )
        },
    ]
}
