#![allow(dead_code)]
use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{
    extract::{Path, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde_json::{json, Value};

use employee_directory::api::HttpEmployeeApi;

/// One request as the stub saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

/// Scripted behaviour for the stub `/api/employees` backend.
#[derive(Debug, Default)]
pub struct StubState {
    /// Successive GET bodies; the last one repeats once the queue runs dry.
    pub list_responses: Vec<Value>,
    pub list_status: Option<StatusCode>,
    /// When set, POST/PUT answer with this status and body.
    pub mutation_failure: Option<(StatusCode, Value)>,
    pub requests: Vec<Recorded>,
}

#[derive(Clone, Default)]
pub struct Stub {
    inner: Arc<Mutex<StubState>>,
}

impl Stub {
    pub fn with_lists(lists: Vec<Value>) -> Self {
        let stub = Stub::default();
        stub.inner.lock().unwrap().list_responses = lists;
        stub
    }

    pub fn fail_list(&self, status: StatusCode) {
        self.inner.lock().unwrap().list_status = Some(status);
    }

    pub fn fail_mutations(&self, status: StatusCode, body: Value) {
        self.inner.lock().unwrap().mutation_failure = Some((status, body));
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn count(&self, method: Method) -> usize {
        self.requests().iter().filter(|r| r.method == method).count()
    }

    fn record(&self, method: Method, path: String, body: Option<Value>) {
        self.inner
            .lock()
            .unwrap()
            .requests
            .push(Recorded { method, path, body });
    }
}

async fn list(State(stub): State<Stub>) -> Response {
    stub.record(Method::GET, "/api/employees".into(), None);

    let mut state = stub.inner.lock().unwrap();
    if let Some(status) = state.list_status {
        return (status, Json(json!({ "error": "list unavailable" }))).into_response();
    }
    let body = if state.list_responses.len() > 1 {
        state.list_responses.remove(0)
    } else {
        state
            .list_responses
            .first()
            .cloned()
            .unwrap_or_else(|| json!({ "message": [] }))
    };
    Json(body).into_response()
}

async fn create(State(stub): State<Stub>, Json(body): Json<Value>) -> Response {
    let number = body["employeeNumber"].clone();
    stub.record(Method::POST, "/api/employees".into(), Some(body));
    mutation_reply(&stub, "Employee added successfully", number)
}

async fn update(
    State(stub): State<Stub>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    let number = body["employeeNumber"].clone();
    stub.record(Method::PUT, format!("/api/employees/{}", id), Some(body));
    mutation_reply(&stub, "Employee updated successfully", number)
}

fn mutation_reply(stub: &Stub, message: &str, number: Value) -> Response {
    let state = stub.inner.lock().unwrap();
    match &state.mutation_failure {
        Some((status, body)) => (*status, Json(body.clone())).into_response(),
        None => Json(json!({ "message": message, "employeeNumber": number })).into_response(),
    }
}

/// Spin up the stub on a random port and return its address.
pub async fn setup_stub_api(stub: Stub) -> SocketAddr {
    let app = Router::new()
        .route("/api/employees", get(list).post(create))
        .route("/api/employees/{id}", put(update))
        .with_state(stub);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

pub fn api_client(addr: SocketAddr) -> HttpEmployeeApi {
    HttpEmployeeApi::new(format!("http://{}", addr))
}

/// Address nothing is listening on, for transport failures.
pub async fn dead_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

pub fn john() -> Value {
    json!({
        "id": 1,
        "employee_number": 1001,
        "first_name": "John",
        "last_name": "Doe",
        "salutation": "Mr",
        "gender": "male",
        "gross_salary": "65000",
        "profile_colour": "blue"
    })
}

pub fn jane() -> Value {
    json!({
        "id": 2,
        "employee_number": 1002,
        "first_name": "Jane",
        "last_name": "Smith",
        "salutation": "Ms",
        "profile_colour": "red"
    })
}
