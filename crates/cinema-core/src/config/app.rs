//! Server binding and CORS configuration.

use serde::{Deserialize, Serialize};

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Cross-origin policy for the browser frontend.
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            cors: CorsConfig::default(),
        }
    }
}

/// CORS policy applied to every route.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Origins allowed to call the API; `["*"]` opens it to any origin.
    pub allowed_origins: Vec<String>,
    /// Methods advertised in preflight responses.
    pub allowed_methods: Vec<String>,
    /// Headers advertised in preflight responses.
    pub allowed_headers: Vec<String>,
    /// Preflight cache lifetime in seconds.
    pub max_age_seconds: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".into()],
            allowed_methods: ["GET", "POST", "PUT", "DELETE", "OPTIONS"]
                .map(String::from)
                .to_vec(),
            allowed_headers: vec!["*".into()],
            max_age_seconds: 3600,
        }
    }
}
