//! Registry Client
//!
//! Announces this node to the registry service on startup and withdraws it on
//! shutdown. Both calls are fire-and-forget: failures are logged and reported
//! as `false`, never as errors.

use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::{info, warn};

const REGISTER_PATH: &str = "/register";
const UNREGISTER_PATH: &str = "/unregister";

/// Body the registry expects on both endpoints.
#[derive(Debug, Serialize)]
struct NodeAddress<'a> {
    url: &'a str,
}

/// HTTP client for the registry service.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    client: Client,
    registry_url: String,
    node_url: String,
}

impl RegistryClient {
    /// Creates a client that registers `node_url` with the registry at `registry_url`.
    pub fn new(registry_url: impl Into<String>, node_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            registry_url: registry_url.into(),
            node_url: node_url.into(),
        }
    }

    /// Address this client registers.
    pub fn node_url(&self) -> &str {
        &self.node_url
    }

    /// Registers the node. Returns true if the registry answered 200.
    pub async fn register(&self) -> bool {
        let registered = self.post(REGISTER_PATH).await;
        if registered {
            info!("Registered {} with {}", self.node_url, self.registry_url);
        }
        registered
    }

    /// Unregisters the node. Returns true if the registry answered 200.
    pub async fn unregister(&self) -> bool {
        let unregistered = self.post(UNREGISTER_PATH).await;
        if unregistered {
            info!("Unregistered {} from {}", self.node_url, self.registry_url);
        }
        unregistered
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.registry_url, path)
    }

    async fn post(&self, path: &str) -> bool {
        let url = self.endpoint(path);
        let body = NodeAddress {
            url: &self.node_url,
        };

        match self.client.post(&url).json(&body).send().await {
            Ok(response) if response.status() == StatusCode::OK => true,
            Ok(response) => {
                warn!("Registry call {} returned {}", url, response.status());
                false
            }
            Err(e) => {
                warn!("Registry call {} failed: {}", url, e);
                false
            }
        }
    }
}
