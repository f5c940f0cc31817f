use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC request envelope. The `jsonrpc` version tag is accepted but not
/// validated; `id` is an opaque correlation token echoed back verbatim.
#[derive(Debug, Deserialize)]
pub struct RpcRequest {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

/// `params` payload of a `tools/call` request. Both fields are tolerated
/// absent; a missing `name` is a protocol error at the dispatch layer.
#[derive(Debug, Default, Deserialize)]
pub struct CallParams {
    pub name: Option<String>,
    #[serde(default)]
    pub arguments: Value,
}

/// One catalog entry: a named operation and its declared input schema.
#[derive(Debug, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Outcome of invoking an operation. `success=false` carries no data and the
/// message explains the failure.
#[derive(Debug, Serialize, Deserialize)]
pub struct OperationResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    pub message: String,
}

impl OperationResult {
    pub fn ok(data: Value, message: impl Into<String>) -> Self {
        Self { success: true, data: Some(data), message: message.into() }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self { success: false, data: None, message: message.into() }
    }
}
