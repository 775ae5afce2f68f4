// src/upstream/http.rs

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use super::{ReportSource, UpstreamError};
use crate::models::{
    question::Question, test_definition::TestDefinition, test_result::TestResult, user::UserProfile,
};

/// `ReportSource` backed by the upstream REST API.
#[derive(Debug, Clone)]
pub struct HttpReportSource {
    client: Client,
    base_url: Url,
}

impl HttpReportSource {
    /// `base_url` must end with `/` (see `config::parse_upstream_url`).
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, UpstreamError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(UpstreamError::NotFound(path.to_string())),
            status if !status.is_success() => Err(UpstreamError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            }),
            _ => response
                .json::<T>()
                .await
                .map_err(|e| UpstreamError::Decode(e.to_string())),
        }
    }
}

#[async_trait]
impl ReportSource for HttpReportSource {
    async fn test_definition(&self, test_id: i64) -> Result<TestDefinition, UpstreamError> {
        let mut test: TestDefinition = self.get_json(&format!("test/{}", test_id)).await?;
        if test.id == 0 {
            test.id = test_id;
        }
        Ok(test)
    }

    async fn question(&self, question_id: i64) -> Result<Question, UpstreamError> {
        self.get_json(&format!("question/{}", question_id)).await
    }

    async fn test_result(&self, result_id: i64) -> Result<TestResult, UpstreamError> {
        self.get_json(&format!("test-results/{}", result_id)).await
    }

    async fn test_results_for_user(
        &self,
        user_id: i64,
        test_id: i64,
    ) -> Result<Vec<TestResult>, UpstreamError> {
        self.get_json(&format!("test-results/user/{}/test/{}", user_id, test_id))
            .await
    }

    async fn user_profile(&self, user_id: i64) -> Result<UserProfile, UpstreamError> {
        self.get_json(&format!("Admin/user/{}", user_id)).await
    }
}
