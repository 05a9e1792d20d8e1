use crate::domain::Domain;
use crate::Error;
use actix_web::{
    error::QueryPayloadError, http::StatusCode, web::Json, HttpRequest, HttpResponse,
    ResponseError,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::error;

pub type RestResult<T, E = RestApiError> = std::result::Result<Json<T>, E>;

#[derive(Debug)]
pub struct RestApiError {
    pub code: RestApiErrorCode,
    pub message: String,
    pub error: Option<String>,
}

/// What clients see in the response body.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RestApiError {
    pub fn new(code: RestApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            error: None,
        }
    }

    pub fn not_found() -> Self {
        Self::new(RestApiErrorCode::NotFound, "Data file not found")
    }

    pub fn unknown_domain(domain: &str) -> Self {
        Self::new(
            RestApiErrorCode::NotFound,
            format!("Unknown domain: {domain}"),
        )
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(RestApiErrorCode::InvalidInput, message)
    }

    pub fn fetch_failed(cause: impl Into<String>) -> Self {
        Self {
            error: Some(cause.into()),
            ..Self::new(RestApiErrorCode::FetchFailed, "Error fetching data")
        }
    }

    /// Logs anything that isn't the caller's fault.
    pub fn from_error(domain: Domain, err: Error) -> Self {
        match err {
            Error::NotFound(_) => Self::not_found(),
            Error::InvalidInput(message) => Self::invalid_input(message),
            err => {
                error!(%domain, error = %err, "Error fetching data");
                Self::fetch_failed(err.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestApiErrorCode {
    NotFound,
    InvalidInput,
    FetchFailed,
}

impl fmt::Display for RestApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::fmt::Display for RestApiErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RestApiErrorCode::NotFound => write!(f, "not_found"),
            RestApiErrorCode::InvalidInput => write!(f, "invalid_input"),
            RestApiErrorCode::FetchFailed => write!(f, "fetch_failed"),
        }
    }
}

impl RestApiErrorCode {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InvalidInput => StatusCode::BAD_REQUEST,
            Self::FetchFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ResponseError for RestApiError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            message: self.message.clone(),
            error: self.error.clone(),
        })
    }

    fn status_code(&self) -> StatusCode {
        self.code.status_code()
    }
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    RestApiError::invalid_input(format!("Invalid arguments: {err}")).into()
}
