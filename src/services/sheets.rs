//! Outbound client for the Google Sheets API. Only two calls exist:
//! create a spreadsheet and delete one. Provider failures surface as
//! `AppError::Upstream`; they are never retried here.

use serde::Deserialize;

use crate::config::Config;
use crate::error::{AppError, AppResult};

#[derive(Clone)]
pub struct SheetsClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedSheet {
    pub spreadsheet_id: String,
    pub spreadsheet_url: String,
}

impl SheetsClient {
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");
        Self {
            http,
            api_base: config.sheets_api_base.trim_end_matches('/').to_string(),
            api_key: config.sheets_api_key.clone(),
        }
    }

    pub async fn create_spreadsheet(&self, title: &str) -> AppResult<CreatedSheet> {
        let url = format!("{}/v4/spreadsheets?key={}", self.api_base, self.api_key);
        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "properties": { "title": title } }))
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Spreadsheet API unreachable: {e}")))?;

        if !response.status().is_success() {
            let message = error_message(response).await;
            return Err(AppError::Upstream(format!(
                "Failed to create spreadsheet: {message}"
            )));
        }

        response
            .json::<CreatedSheet>()
            .await
            .map_err(|e| AppError::Upstream(format!("Malformed spreadsheet API response: {e}")))
    }

    /// Deleting a spreadsheet that is already gone counts as success.
    pub async fn delete_spreadsheet(&self, sheet_id: &str) -> AppResult<()> {
        let url = format!(
            "{}/v4/spreadsheets/{}?key={}",
            self.api_base, sheet_id, self.api_key
        );
        let response = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Spreadsheet API unreachable: {e}")))?;

        if response.status().as_u16() == 404 {
            tracing::warn!(sheet_id, "Spreadsheet already gone upstream, treating as deleted");
            return Ok(());
        }
        if !response.status().is_success() {
            let message = error_message(response).await;
            return Err(AppError::Upstream(format!(
                "Failed to delete spreadsheet: {message}"
            )));
        }

        Ok(())
    }
}

/// Pulls `{"error": {"message": ...}}` out of a provider error body, falling
/// back to the raw body or the status code.
async fn error_message(response: reqwest::Response) -> String {
    let status = response.status();
    match response.text().await {
        Ok(body) => serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                v.pointer("/error/message")
                    .and_then(|m| m.as_str())
                    .map(String::from)
            })
            .unwrap_or_else(|| {
                if body.is_empty() {
                    status.to_string()
                } else {
                    body
                }
            }),
        Err(_) => status.to_string(),
    }
}
