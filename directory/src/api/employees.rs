use async_trait::async_trait;
use reqwest::{Client, Response};

use super::EmployeeApi;
use crate::{
    config::Config,
    error::{AppError, Result},
    models::employee::{
        Employee, EmployeeListResponse, EmployeePayload, ErrorBody, MutationResponse,
    },
};

const EMPLOYEES_PATH: &str = "/api/employees";

/// reqwest-backed client. No timeout and no retry: a request either
/// resolves or fails once.
#[derive(Debug, Clone)]
pub struct HttpEmployeeApi {
    client: Client,
    base_url: String,
}

impl HttpEmployeeApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, EMPLOYEES_PATH)
    }

    fn record_url(&self, id: i64) -> String {
        format!("{}{}/{}", self.base_url, EMPLOYEES_PATH, id)
    }

    /// Reads a create/update response. Any non-2xx is an error carrying the
    /// body's `error` field, or `fallback` when there is none.
    async fn mutation_response(resp: Response, fallback: &str) -> Result<MutationResponse> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp.json::<MutationResponse>().await?);
        }

        let message = resp
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| fallback.to_string());

        tracing::warn!(%status, %message, "Employee request rejected");
        Err(AppError::Status { status, message })
    }
}

#[async_trait]
impl EmployeeApi for HttpEmployeeApi {
    async fn list_employees(&self) -> Result<Vec<Employee>> {
        let url = self.collection_url();
        tracing::debug!(%url, "GET employees");

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(%status, "Employee list request failed");
            return Err(AppError::Status {
                status,
                message: format!("HTTP error! status: {}", status.as_u16()),
            });
        }

        let body: EmployeeListResponse = resp.json().await?;
        tracing::info!(count = body.message.len(), "Loaded employees");
        Ok(body.message)
    }

    async fn create_employee(&self, payload: &EmployeePayload) -> Result<MutationResponse> {
        let url = self.collection_url();
        tracing::debug!(%url, "POST employee");

        let resp = self.client.post(&url).json(payload).send().await?;
        Self::mutation_response(resp, "Failed to add employee").await
    }

    async fn update_employee(
        &self,
        id: i64,
        payload: &EmployeePayload,
    ) -> Result<MutationResponse> {
        let url = self.record_url(id);
        tracing::debug!(%url, "PUT employee");

        let resp = self.client.put(&url).json(payload).send().await?;
        Self::mutation_response(resp, "Failed to update employee").await
    }
}
