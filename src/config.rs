use anyhow::Context;
use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: Server,
}

#[derive(Debug, Clone)]
pub struct Server {
    pub bind_addr: String,
    pub port: u16,
}

impl Config {
    /// Environment-only configuration: `PORT` (default 3000) and `BIND_ADDR`
    /// (default `0.0.0.0`). There is no config file and no CLI surface.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("invalid PORT value: {raw}"))?,
            Err(_) => 3000,
        };
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string());
        Ok(Self {
            server: Server { bind_addr, port },
        })
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let addr = format!("{}:{}", self.server.bind_addr, self.server.port);
        addr.parse::<SocketAddr>()
            .with_context(|| format!("invalid listen address: {addr}"))?;
        Ok(())
    }
}
