//! Tool catalog — typed metadata, input schemas, registration, dispatch.
//!
//! A [`ToolSpec`] owns everything the transport needs: name, description,
//! declared input shape, required access mode, and a type-erased handler.
//! The handler is a decode-then-call adapter built once at construction
//! time: raw JSON arguments are decoded into the tool's typed argument
//! struct, and only on success is the inner async function invoked.

use crate::mcp::protocol::CallToolResult;
use crate::tools::access::AccessMode;
use crate::tools::response;
use crate::types::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

// =============================================================================
// Parameter types
// =============================================================================

/// Declared parameter type, rendered to JSON Schema for `tools/list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamType {
    String,
    Int,
    Bool,
    /// Free-form string→string map (resource labels).
    StringMap,
    Array(Box<ParamType>),
    /// Nested object with an explicit property map.
    Object(Vec<ParamDef>),
    Optional(Box<ParamType>),
}

impl ParamType {
    /// Render this type as a JSON Schema fragment (without description).
    pub fn json_schema(&self) -> Value {
        match self {
            ParamType::String => json!({"type": "string"}),
            ParamType::Int => json!({"type": "integer"}),
            ParamType::Bool => json!({"type": "boolean"}),
            ParamType::StringMap => json!({
                "type": "object",
                "additionalProperties": {"type": "string"},
            }),
            ParamType::Array(inner) => json!({
                "type": "array",
                "items": inner.json_schema(),
            }),
            ParamType::Object(props) => object_schema(props),
            ParamType::Optional(inner) => inner.json_schema(),
        }
    }
}

/// A single parameter definition for a tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDef {
    pub name: String,
    pub param_type: ParamType,
    pub description: String,
}

impl ParamDef {
    pub fn required(name: &str, param_type: ParamType, description: &str) -> Self {
        Self {
            name: name.to_string(),
            param_type,
            description: description.to_string(),
        }
    }

    pub fn optional(name: &str, param_type: ParamType, description: &str) -> Self {
        Self {
            name: name.to_string(),
            param_type: ParamType::Optional(Box::new(param_type)),
            description: description.to_string(),
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self.param_type, ParamType::Optional(_))
    }
}

/// Build a JSON Schema object from a parameter list.
fn object_schema(params: &[ParamDef]) -> Value {
    let mut properties = serde_json::Map::new();
    let mut required = Vec::new();
    for param in params {
        let mut schema = param.param_type.json_schema();
        if let Some(obj) = schema.as_object_mut() {
            if !param.description.is_empty() {
                obj.insert("description".to_string(), json!(param.description));
            }
        }
        properties.insert(param.name.clone(), schema);
        if param.is_required() {
            required.push(param.name.clone());
        }
    }
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

// =============================================================================
// Tool spec
// =============================================================================

/// Boxed future returned by a tool handler.
pub type ToolFuture = Pin<Box<dyn Future<Output = Result<Value>> + Send>>;

/// Type-erased tool handler: raw arguments in, serialized result out.
pub type ToolHandler = Arc<dyn Fn(Value) -> ToolFuture + Send + Sync>;

/// A complete tool definition: metadata plus bound handler.
pub struct ToolSpec {
    pub name: String,
    pub description: String,
    pub params: Vec<ParamDef>,
    pub access: AccessMode,
    handler: ToolHandler,
}

impl fmt::Debug for ToolSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolSpec")
            .field("name", &self.name)
            .field("access", &self.access)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl ToolSpec {
    /// Build a tool from a typed async function. The adapter decodes the
    /// raw arguments into `A` first; a decode failure yields
    /// [`Error::BadArgument`] without invoking `run`. The result is
    /// serialized here so that a non-representable result surfaces as
    /// [`Error::Serialization`] rather than a panic.
    pub fn new<A, T, Fut, F>(
        name: &str,
        description: &str,
        access: AccessMode,
        params: Vec<ParamDef>,
        run: F,
    ) -> Self
    where
        A: DeserializeOwned + Send + 'static,
        T: Serialize,
        Fut: Future<Output = Result<T>> + Send + 'static,
        F: Fn(A) -> Fut + Send + Sync + 'static,
    {
        let handler: ToolHandler = Arc::new(move |raw: Value| {
            let args: A = match serde_json::from_value(raw) {
                Ok(args) => args,
                Err(e) => {
                    let err = Error::bad_argument(e.to_string());
                    return Box::pin(async move { Err(err) }) as ToolFuture;
                }
            };
            let fut = run(args);
            Box::pin(async move {
                let value = fut.await?;
                serde_json::to_value(&value).map_err(Error::from)
            })
        });

        Self {
            name: name.to_string(),
            description: description.to_string(),
            params,
            access,
            handler,
        }
    }

    /// JSON Schema for this tool's input, advertised via `tools/list`.
    pub fn input_schema(&self) -> Value {
        object_schema(&self.params)
    }

    /// Invoke the bound handler with raw arguments.
    pub fn invoke(&self, args: Value) -> ToolFuture {
        (self.handler)(args)
    }
}

// =============================================================================
// Catalog operations
// =============================================================================

/// Ordered sequence of tool definitions.
pub type ToolCatalog = Vec<ToolSpec>;

/// Concatenate catalogs, preserving relative order within and across
/// groups. Does not deduplicate — uniqueness is enforced at bind time.
pub fn merge_catalogs(groups: Vec<ToolCatalog>) -> ToolCatalog {
    let mut merged = Vec::with_capacity(groups.iter().map(Vec::len).sum());
    for group in groups {
        merged.extend(group);
    }
    merged
}

/// Apply the global access mode to a catalog, keeping only tools the mode
/// allows. Order-preserving strict subset.
pub fn filter_catalog(catalog: ToolCatalog, global: AccessMode) -> ToolCatalog {
    catalog
        .into_iter()
        .filter(|spec| global.allows(spec.access))
        .collect()
}

// =============================================================================
// Registry
// =============================================================================

/// Bound name → handler table, with deterministic listing order.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    order: Vec<String>,
    tools: HashMap<String, ToolSpec>,
}

impl ToolRegistry {
    /// Bind a catalog. Fails on the first duplicate name; the failure is
    /// atomic — no partially-usable registry escapes.
    pub fn bind(catalog: ToolCatalog) -> Result<Self> {
        let mut registry = Self {
            order: Vec::with_capacity(catalog.len()),
            tools: HashMap::with_capacity(catalog.len()),
        };
        for spec in catalog {
            if registry.tools.contains_key(&spec.name) {
                return Err(Error::duplicate_registration(spec.name));
            }
            registry.order.push(spec.name.clone());
            registry.tools.insert(spec.name.clone(), spec);
        }
        Ok(registry)
    }

    pub fn get(&self, name: &str) -> Option<&ToolSpec> {
        self.tools.get(name)
    }

    /// Tools in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ToolSpec> {
        self.order.iter().filter_map(|name| self.tools.get(name))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Dispatch one call: look up the tool, invoke its handler, encode the
    /// outcome. Returns `None` for an unknown tool name (the transport
    /// reports that as a protocol error, not a tool failure).
    pub async fn dispatch(&self, name: &str, args: Value) -> Option<CallToolResult> {
        let spec = self.tools.get(name)?;
        let result = spec.invoke(args).await;
        Some(response::encode(name, result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct EchoArgs {
        message: String,
    }

    fn echo_tool(name: &str, access: AccessMode) -> ToolSpec {
        ToolSpec::new(
            name,
            "Echoes the message back",
            access,
            vec![ParamDef::required(
                "message",
                ParamType::String,
                "Message to echo",
            )],
            |args: EchoArgs| async move { Ok(args.message) },
        )
    }

    #[test]
    fn merge_preserves_order_across_groups() {
        let merged = merge_catalogs(vec![
            vec![echo_tool("a", AccessMode::ReadOnly), echo_tool("b", AccessMode::ReadWrite)],
            vec![echo_tool("c", AccessMode::ReadOnly)],
        ]);
        let names: Vec<&str> = merged.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn filter_is_an_order_preserving_subset() {
        let catalog = vec![
            echo_tool("read1", AccessMode::ReadOnly),
            echo_tool("write1", AccessMode::ReadWrite),
            echo_tool("read2", AccessMode::ReadOnly),
        ];
        let filtered = filter_catalog(catalog, AccessMode::ReadOnly);
        let names: Vec<&str> = filtered.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["read1", "read2"]);

        let catalog = vec![
            echo_tool("read1", AccessMode::ReadOnly),
            echo_tool("write1", AccessMode::ReadWrite),
        ];
        let filtered = filter_catalog(catalog, AccessMode::ReadWrite);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn bind_rejects_duplicates_atomically() {
        let catalog = vec![
            echo_tool("dup", AccessMode::ReadOnly),
            echo_tool("other", AccessMode::ReadOnly),
            echo_tool("dup", AccessMode::ReadWrite),
        ];
        let err = ToolRegistry::bind(catalog).unwrap_err();
        assert!(matches!(err, Error::DuplicateRegistration(name) if name == "dup"));
    }

    #[test]
    fn bind_preserves_registration_order() {
        let registry = ToolRegistry::bind(vec![
            echo_tool("z", AccessMode::ReadOnly),
            echo_tool("a", AccessMode::ReadOnly),
            echo_tool("m", AccessMode::ReadOnly),
        ])
        .unwrap();
        let names: Vec<&str> = registry.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["z", "a", "m"]);
        assert_eq!(registry.len(), 3);
    }

    #[tokio::test]
    async fn dispatch_decodes_and_runs() {
        let registry = ToolRegistry::bind(vec![echo_tool("echo", AccessMode::ReadOnly)]).unwrap();
        let result = registry
            .dispatch("echo", json!({"message": "hello"}))
            .await
            .unwrap();
        assert_ne!(result.is_error, Some(true));
        assert_eq!(result.content[0].as_text(), Some("\"hello\""));
    }

    #[tokio::test]
    async fn dispatch_bad_arguments_never_runs_handler() {
        let registry = ToolRegistry::bind(vec![echo_tool("echo", AccessMode::ReadOnly)]).unwrap();
        let result = registry.dispatch("echo", json!({})).await.unwrap();
        assert_eq!(result.is_error, Some(true));
        let text = result.content[0].as_text().unwrap();
        assert!(text.contains("invalid arguments"), "got: {text}");
    }

    #[tokio::test]
    async fn dispatch_unknown_tool_is_none() {
        let registry = ToolRegistry::bind(vec![]).unwrap();
        assert!(registry.dispatch("nope", json!({})).await.is_none());
    }

    #[test]
    fn input_schema_marks_required_fields() {
        let spec = ToolSpec::new(
            "t",
            "d",
            AccessMode::ReadOnly,
            vec![
                ParamDef::required("name", ParamType::String, "Resource name"),
                ParamDef::optional("labels", ParamType::StringMap, "User-defined labels"),
            ],
            |_: EchoArgs| async move { Ok(()) },
        );
        let schema = spec.input_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["name"]));
        assert_eq!(schema["properties"]["name"]["type"], "string");
        assert_eq!(
            schema["properties"]["labels"]["additionalProperties"]["type"],
            "string"
        );
    }
}
