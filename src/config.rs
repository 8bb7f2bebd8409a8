use std::path::PathBuf;

use anyhow::{bail, Context};
use axum::http::HeaderValue;

pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:8080",
    "http://localhost:8081",
    "https://ai-student-risk-prediction-hnu1oaox3.vercel.app",
    "https://ai-student-risk-prediction.vercel.app",
    "https://ai-student-risk-prediction-bqodygnye.vercel.app",
];

/// Body cap for `/csv-upload`, well above axum's 2 MiB default.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 64 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub model_path: PathBuf,
    pub allowed_origins: Vec<String>,
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parsed CORS allow-list; an empty list falls back to the defaults.
    pub fn origin_headers(&self) -> anyhow::Result<Vec<HeaderValue>> {
        let origins: Vec<&str> = if self.allowed_origins.is_empty() {
            DEFAULT_ALLOWED_ORIGINS.to_vec()
        } else {
            self.allowed_origins.iter().map(String::as_str).collect()
        };

        origins
            .into_iter()
            .map(|origin| {
                let origin = origin.trim();
                if origin == "*" {
                    bail!("wildcard origin cannot be combined with credentials");
                }
                HeaderValue::from_str(origin)
                    .with_context(|| format!("invalid allowed origin {origin:?}"))
            })
            .collect()
    }
}
