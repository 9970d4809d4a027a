//! Configuration Module
//!
//! Handles loading and managing node configuration from environment variables.

use std::env;
use std::str::FromStr;

use crate::cache::{
    TableOptions, DEFAULT_CAPACITY, DEFAULT_RESIZE_COEFFICIENT, DEFAULT_RESIZE_THRESHOLD,
};
use crate::event_loop::DEFAULT_QUEUE_CAPACITY;

/// Node configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface the HTTP server binds to
    pub server_host: String,
    /// HTTP server port
    pub server_port: u16,
    /// Initial number of slots in the hash table
    pub initial_capacity: usize,
    /// Load factor at which the table grows
    pub resize_threshold: f64,
    /// Growth multiplier applied on resize
    pub resize_coefficient: usize,
    /// Number of pending events the loop queue holds before senders wait
    pub queue_capacity: usize,
    /// Base URL of the registry service, if registration is wanted
    pub registry_url: Option<String>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_HOST` - Bind address (default: 0.0.0.0)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `INITIAL_CAPACITY` - Initial table slots (default: 1024)
    /// - `RESIZE_THRESHOLD` - Load factor triggering growth (default: 0.75)
    /// - `RESIZE_COEFFICIENT` - Growth multiplier (default: 2)
    /// - `QUEUE_CAPACITY` - Pending event queue size (default: 50)
    /// - `REGISTRY_URL` - Registry base URL (default: unset, no registration)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_host: env::var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            initial_capacity: parse_var("INITIAL_CAPACITY").unwrap_or(defaults.initial_capacity),
            resize_threshold: parse_var("RESIZE_THRESHOLD").unwrap_or(defaults.resize_threshold),
            resize_coefficient: parse_var("RESIZE_COEFFICIENT")
                .unwrap_or(defaults.resize_coefficient),
            queue_capacity: parse_var("QUEUE_CAPACITY").unwrap_or(defaults.queue_capacity),
            registry_url: env::var("REGISTRY_URL").ok().filter(|url| !url.is_empty()),
        }
    }

    /// Table construction parameters derived from this config.
    pub fn table_options(&self) -> TableOptions {
        TableOptions {
            capacity: self.initial_capacity,
            resize_threshold: self.resize_threshold,
            resize_coefficient: self.resize_coefficient,
        }
    }

    /// Address this node advertises to the registry.
    pub fn advertised_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 8080,
            initial_capacity: DEFAULT_CAPACITY,
            resize_threshold: DEFAULT_RESIZE_THRESHOLD,
            resize_coefficient: DEFAULT_RESIZE_COEFFICIENT,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            registry_url: None,
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}
