// src/upstream/client.rs

use std::time::Duration;

use axum::http::{header, StatusCode};
use chrono::FixedOffset;
use serde_json::Value;

use crate::common::{envelope::extract_records, error::AppError};

// Cliente HTTP compartilhado por todos os repositórios do upstream
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
    business_offset: FixedOffset,
}

impl UpstreamClient {
    pub fn new(
        base_url: &str,
        timeout: Duration,
        business_offset: FixedOffset,
    ) -> anyhow::Result<Self> {
        // Timeout fica a cargo do próprio cliente HTTP
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("vitrine/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            business_offset,
        })
    }

    pub fn business_offset(&self) -> FixedOffset {
        self.business_offset
    }

    /// GET numa rota de listagem. 404 vira lista vazia.
    pub async fn get_list(&self, path: &str, token: Option<&str>) -> Result<Vec<Value>, AppError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "GET upstream");

        let mut request = self
            .http
            .get(&url)
            .header(header::ACCEPT, "application/json");
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|source| AppError::UpstreamUnavailable {
                endpoint: path.to_string(),
                source,
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::warn!(endpoint = path, "Upstream respondeu 404, tratando como lista vazia");
            return Ok(Vec::new());
        }
        if !status.is_success() {
            return Err(AppError::UpstreamStatus {
                endpoint: path.to_string(),
                status,
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| AppError::UpstreamPayload {
                endpoint: path.to_string(),
                reason: e.to_string(),
            })?;

        extract_records(path, body)
    }
}
