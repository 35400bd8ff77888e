use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::Value;

use crate::config::HubConfig;
use crate::models::{Assignment, AssignmentDetails, Id};
use crate::routes::{assignment_details_path, calendar_path, ASSIGNMENTS_API};

/// JSON client for the hub backend. Uses `fetch` in the browser.
#[derive(Clone)]
pub struct HubClient {
    client: Client,
    config: HubConfig,
}

impl HubClient {
    pub fn new(config: HubConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &HubConfig {
        &self.config
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.config.url(path);
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", path))?
            .error_for_status()
            .with_context(|| format!("Backend rejected {}", path))?;

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse response from {}", path))
    }

    pub async fn assignments(&self) -> Result<Vec<Assignment>> {
        self.get_json(ASSIGNMENTS_API).await
    }

    pub async fn assignment_details(
        &self,
        course_id: &Id,
        assignment_id: &Id,
    ) -> Result<AssignmentDetails> {
        self.get_json(&assignment_details_path(course_id, assignment_id))
            .await
    }

    /// Calendar payload for one month. The page does not render it yet, so
    /// it stays untyped.
    pub async fn calendar(&self, year: i32, month: u32) -> Result<Value> {
        self.get_json(&calendar_path(year, month)).await
    }
}
