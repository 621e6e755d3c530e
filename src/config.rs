// src/config.rs
use std::net::{Ipv4Addr, SocketAddr};

pub const LISTEN_PORT: u16 = 8088;
pub const UPSTREAM_URL: &str = "http://localhost:11434/api/generate";
pub const UPSTREAM_MODEL: &str = "gpt-oss";

/// Addresses the relay binds to and forwards to.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub listen_addr: SocketAddr,
    pub upstream_url: String,
    pub model: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, LISTEN_PORT)),
            upstream_url: UPSTREAM_URL.to_string(),
            model: UPSTREAM_MODEL.to_string(),
        }
    }
}

impl RelayConfig {
    // Same relay, different generator. Used to aim at a mock upstream.
    pub fn with_upstream(upstream_url: impl Into<String>) -> Self {
        Self {
            upstream_url: upstream_url.into(),
            ..Self::default()
        }
    }
}
