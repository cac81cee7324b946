pub mod employees;

use async_trait::async_trait;

use crate::{
    error::Result,
    models::employee::{Employee, EmployeePayload, MutationResponse},
};

pub use employees::HttpEmployeeApi;

/// The three calls the directory makes against `/api/employees`.
///
/// Views take `&dyn EmployeeApi` so tests and alternative transports can
/// stand in for the HTTP client.
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    async fn list_employees(&self) -> Result<Vec<Employee>>;

    async fn create_employee(&self, payload: &EmployeePayload) -> Result<MutationResponse>;

    async fn update_employee(&self, id: i64, payload: &EmployeePayload)
        -> Result<MutationResponse>;
}
