//! Stdio transport — read JSON-RPC lines from stdin, write responses to
//! stdout. One request per line, one response per line; stderr carries
//! logging only.

use crate::mcp::protocol::{
    CallToolParams, InitializeResult, JsonRpcError, JsonRpcRequest, JsonRpcResponse,
    ListToolsResult, ServerCapabilities, ServerInfo, ToolSchema, ToolsCapability,
    PROTOCOL_VERSION,
};
use crate::tools::ToolRegistry;
use crate::types::Result;
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

/// MCP server bound to a tool registry.
#[derive(Debug)]
pub struct McpServer {
    registry: ToolRegistry,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    /// Run the stdio loop until EOF on stdin.
    pub async fn serve(&self) -> Result<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let mut stdout = tokio::io::stdout();
        let mut lines = stdin.lines();

        tracing::info!(tools = self.registry.len(), "server ready");

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let request: JsonRpcRequest = match serde_json::from_str(line) {
                Ok(req) => req,
                Err(e) => {
                    tracing::debug!(error = %e, "unparseable request line");
                    let resp = JsonRpcResponse::error(
                        Value::Null,
                        JsonRpcError::parse_error(e.to_string()),
                    );
                    write_response(&mut stdout, &resp).await?;
                    continue;
                }
            };

            // Notifications get no response.
            let Some(id) = request.id.clone() else {
                tracing::debug!(method = %request.method, "notification");
                continue;
            };

            let response = self.handle(&request, id).await;
            write_response(&mut stdout, &response).await?;
        }

        tracing::info!("stdin closed, shutting down");
        Ok(())
    }

    async fn handle(&self, request: &JsonRpcRequest, id: Value) -> JsonRpcResponse {
        match request.method.as_str() {
            "initialize" => JsonRpcResponse::success(id, initialize_result()),
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => JsonRpcResponse::success(id, self.list_tools()),
            "tools/call" => self.call_tool(request.params.clone(), id).await,
            other => {
                tracing::debug!(method = %other, "unknown method");
                JsonRpcResponse::error(id, JsonRpcError::method_not_found(other))
            }
        }
    }

    fn list_tools(&self) -> Value {
        let tools = self
            .registry
            .iter()
            .map(|spec| ToolSchema {
                name: spec.name.clone(),
                description: spec.description.clone(),
                input_schema: spec.input_schema(),
            })
            .collect();
        match serde_json::to_value(ListToolsResult { tools }) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(error = %e, "tools/list serialization failed");
                json!({"tools": []})
            }
        }
    }

    async fn call_tool(&self, params: Option<Value>, id: Value) -> JsonRpcResponse {
        let params: CallToolParams =
            match serde_json::from_value(params.unwrap_or_else(|| json!({}))) {
                Ok(p) => p,
                Err(e) => {
                    return JsonRpcResponse::error(id, JsonRpcError::invalid_params(e.to_string()));
                }
            };

        let arguments = params.arguments.unwrap_or_else(|| json!({}));
        tracing::debug!(tool = %params.name, "tools/call");

        match self.registry.dispatch(&params.name, arguments).await {
            Some(result) => match serde_json::to_value(&result) {
                Ok(value) => JsonRpcResponse::success(id, value),
                Err(e) => {
                    tracing::error!(tool = %params.name, error = %e, "result serialization failed");
                    JsonRpcResponse::error(id, JsonRpcError::internal_error(e.to_string()))
                }
            },
            None => JsonRpcResponse::error(
                id,
                JsonRpcError::invalid_params(format!("Unknown tool: {}", params.name)),
            ),
        }
    }
}

fn initialize_result() -> Value {
    let result = InitializeResult {
        protocol_version: PROTOCOL_VERSION.to_string(),
        capabilities: ServerCapabilities {
            tools: ToolsCapability {
                list_changed: false,
            },
        },
        server_info: ServerInfo {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };
    serde_json::to_value(result).unwrap_or_else(|_| json!({}))
}

async fn write_response<W: AsyncWriteExt + Unpin>(
    writer: &mut W,
    response: &JsonRpcResponse,
) -> Result<()> {
    let mut wire = serde_json::to_vec(response)?;
    wire.push(b'\n');
    writer.write_all(&wire).await?;
    writer.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::protocol::JSONRPC_VERSION;
    use crate::tools::access::AccessMode;
    use crate::tools::catalog::{ParamDef, ParamType, ToolSpec};
    use pretty_assertions::assert_eq;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct GreetArgs {
        name: String,
    }

    fn test_server() -> McpServer {
        let registry = ToolRegistry::bind(vec![ToolSpec::new(
            "greet",
            "Greets by name",
            AccessMode::ReadOnly,
            vec![ParamDef::required("name", ParamType::String, "Who to greet")],
            |args: GreetArgs| async move { Ok(format!("hello {}", args.name)) },
        )])
        .unwrap();
        McpServer::new(registry)
    }

    fn request(method: &str, params: Value) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: Some(json!(1)),
            method: method.to_string(),
            params: Some(params),
        }
    }

    #[tokio::test]
    async fn initialize_reports_protocol_and_identity() {
        let server = test_server();
        let resp = server.handle(&request("initialize", json!({})), json!(1)).await;
        let result = resp.result.unwrap();
        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(result["serverInfo"]["name"], env!("CARGO_PKG_NAME"));
        assert_eq!(result["capabilities"]["tools"]["listChanged"], false);
    }

    #[tokio::test]
    async fn tools_list_carries_schemas() {
        let server = test_server();
        let resp = server.handle(&request("tools/list", json!({})), json!(1)).await;
        let tools = &resp.result.unwrap()["tools"];
        assert_eq!(tools[0]["name"], "greet");
        assert_eq!(tools[0]["inputSchema"]["required"], json!(["name"]));
    }

    #[tokio::test]
    async fn call_routes_to_handler() {
        let server = test_server();
        let resp = server
            .handle(
                &request("tools/call", json!({"name": "greet", "arguments": {"name": "ada"}})),
                json!(7),
            )
            .await;
        assert_eq!(resp.id, json!(7));
        let result = resp.result.unwrap();
        assert_eq!(result["content"][0]["text"], "\"hello ada\"");
        assert!(result.get("isError").is_none());
    }

    #[tokio::test]
    async fn unknown_tool_is_a_protocol_error() {
        let server = test_server();
        let resp = server
            .handle(&request("tools/call", json!({"name": "bogus"})), json!(1))
            .await;
        assert_eq!(resp.error.unwrap().code, -32602);
    }

    #[tokio::test]
    async fn unknown_method_is_method_not_found() {
        let server = test_server();
        let resp = server.handle(&request("resources/list", json!({})), json!(1)).await;
        assert_eq!(resp.error.unwrap().code, -32601);
    }

    #[tokio::test]
    async fn missing_arguments_default_to_empty_object() {
        let server = test_server();
        // greet requires "name", so empty arguments surface as a tool failure,
        // not a transport error.
        let resp = server
            .handle(&request("tools/call", json!({"name": "greet"})), json!(1))
            .await;
        let result = resp.result.unwrap();
        assert_eq!(result["isError"], true);
    }
}
