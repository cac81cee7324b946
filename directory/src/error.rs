use reqwest::StatusCode;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response. `message` is the server's `error` field when it sent
    /// one, otherwise a fixed fallback for the request that failed.
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    #[error("Validation error: {}", summarize(.0))]
    Validation(#[from] validator::ValidationErrors),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Status { status, .. } => Some(*status),
            AppError::Http(e) => e.status(),
            _ => None,
        }
    }
}

/// Flattens field errors into `field: msg, msg; field: code` form.
fn summarize(errors: &validator::ValidationErrors) -> String {
    let mut fields: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let msgs: Vec<&str> = errors
                .iter()
                .filter_map(|err| err.message.as_ref().map(|m| m.as_ref()))
                .collect();
            if msgs.is_empty() {
                let codes: Vec<&str> = errors.iter().map(|err| err.code.as_ref()).collect();
                format!("{}: {}", field, codes.join(", "))
            } else {
                format!("{}: {}", field, msgs.join(", "))
            }
        })
        .collect();
    // field_errors() is a HashMap; keep output stable
    fields.sort();
    fields.join("; ")
}

pub type Result<T> = std::result::Result<T, AppError>;
