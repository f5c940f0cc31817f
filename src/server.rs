use crate::{
    config::Config,
    errors::RpcError,
    mcp::{
        catalog::{self, ToolKind},
        types::{CallParams, OperationResult, RpcRequest},
    },
};
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::time::Instant;

/// Request bodies above this size are rejected before dispatch.
const MAX_REQUEST_BYTES: usize = 256 * 1024;

pub async fn serve(cfg: Config) -> anyhow::Result<()> {
    let addr: std::net::SocketAddr =
        format!("{}:{}", cfg.server.bind_addr, cfg.server.port).parse()?;
    let app = build_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router() -> Router {
    use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer};
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route(
            "/mcp",
            post(rpc).layer(RequestBodyLimitLayer::new(MAX_REQUEST_BYTES)),
        )
        .layer(CorsLayer::permissive())
}

async fn rpc(Json(req): Json<RpcRequest>) -> Json<Value> {
    let started = Instant::now();
    let request_id = uuid::Uuid::new_v4().to_string();
    let tool = req
        .params
        .get("name")
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string();

    let reply = dispatch(&req);

    let outcome = if reply.get("error").is_some() { "error" } else { "ok" };
    tracing::info!(
        request_id = %request_id,
        method = %req.method,
        tool = %tool,
        outcome = outcome,
        duration_ms = started.elapsed().as_millis() as u64,
        "rpc"
    );
    Json(reply)
}

fn dispatch(req: &RpcRequest) -> Value {
    match req.method.as_str() {
        "initialize" => ok_reply(&req.id, initialize_result()),
        "tools/list" => ok_reply(&req.id, json!({ "tools": catalog::list() })),
        "tools/call" => {
            let call: CallParams =
                serde_json::from_value(req.params.clone()).unwrap_or_default();
            let Some(name) = call.name else {
                return error_reply(&req.id, &RpcError::ToolNameRequired);
            };
            // Dispatch succeeded even if the named tool doesn't exist, so an
            // unknown name stays a success-envelope with a failure payload.
            let result = match ToolKind::from_name(&name) {
                Some(kind) => kind.run(call.arguments),
                None => OperationResult::failure(format!("Unknown tool: {name}")),
            };
            let text = serde_json::to_string(&result).unwrap_or_default();
            ok_reply(&req.id, json!({ "content": [{ "type": "text", "text": text }] }))
        }
        other => error_reply(&req.id, &RpcError::MethodNotFound(other.to_string())),
    }
}

fn initialize_result() -> Value {
    json!({
        "protocolVersion": "2024-11-05",
        "capabilities": { "tools": {} },
        "serverInfo": { "name": "huddle", "version": env!("CARGO_PKG_VERSION") }
    })
}

fn ok_reply(id: &Value, result: Value) -> Value {
    json!({ "jsonrpc": "2.0", "id": id, "result": result })
}

fn error_reply(id: &Value, err: &RpcError) -> Value {
    json!({ "jsonrpc": "2.0", "id": id, "error": { "code": err.code(), "message": err.to_string() } })
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "timestamp": chrono::Utc::now().to_rfc3339() }))
}

async fn index() -> Json<Value> {
    let tools: Vec<&str> = catalog::ALL.iter().map(|k| k.name()).collect();
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "description": env!("CARGO_PKG_DESCRIPTION"),
        "endpoints": { "mcp": "/mcp", "health": "/health" },
        "tools": tools
    }))
}
