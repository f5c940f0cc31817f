mod config;
mod errors;
mod logging;
mod mcp;
mod server;
mod tools;


use crate::config::Config;
use anyhow::Context;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let cfg = Config::from_env().context("loading config")?;
    cfg.validate().context("validating config")?;

    let addr = format!("{}:{}", cfg.server.bind_addr, cfg.server.port);
    let tools: Vec<&str> = mcp::catalog::ALL.iter().map(|k| k.name()).collect();

    info!(addr = %addr, tools = ?tools, "huddle ready");
    println!("huddle ready addr={} tools=[{}]", addr, tools.join(","));

    server::serve(cfg).await
}
