use thiserror::Error;

/// Protocol-level faults, surfaced as JSON-RPC `error` objects. Operation
/// failures (e.g. an unknown tool name) are not protocol faults; they ride
/// inside a successful reply as a `success=false` payload.
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("Method not found: {0}")]
    MethodNotFound(String),
    #[error("Tool name is required")]
    ToolNameRequired,
}

impl RpcError {
    pub fn code(&self) -> i64 {
        match self {
            RpcError::MethodNotFound(_) => -32601,
            RpcError::ToolNameRequired => -32602,
        }
    }
}
