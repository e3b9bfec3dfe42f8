use crate::models::response::ErrorResponse;
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use derive_more::Display;

#[derive(Debug, Display)]
pub enum SiteError {
    #[display("Content unavailable: {_0}")]
    ContentUnavailable(String),
    #[display("Content parse error: {_0}")]
    ContentParse(String),
    #[display("Template error: {_0}")]
    Template(String),
    #[display("Not found error: {_0}")]
    NotFound(String),
    #[display("Unauthorized error: {_0}")]
    Unauthorized(String),
}

impl std::error::Error for SiteError {}

impl SiteError {
    fn code(&self) -> &'static str {
        match self {
            SiteError::ContentUnavailable(_) => "CONTENT_UNAVAILABLE",
            SiteError::ContentParse(_) => "CONTENT_PARSE_ERROR",
            SiteError::Template(_) => "TEMPLATE_ERROR",
            SiteError::NotFound(_) => "NOT_FOUND_ERROR",
            SiteError::Unauthorized(_) => "UNAUTHORIZED_ERROR",
        }
    }

    fn message(&self) -> &str {
        match self {
            SiteError::ContentUnavailable(msg)
            | SiteError::ContentParse(msg)
            | SiteError::Template(msg)
            | SiteError::NotFound(msg)
            | SiteError::Unauthorized(msg) => msg,
        }
    }
}

impl From<askama::Error> for SiteError {
    fn from(err: askama::Error) -> Self {
        SiteError::Template(err.to_string())
    }
}

impl From<serde_json::Error> for SiteError {
    fn from(err: serde_json::Error) -> Self {
        SiteError::ContentParse(err.to_string())
    }
}

impl From<std::io::Error> for SiteError {
    fn from(err: std::io::Error) -> Self {
        SiteError::ContentUnavailable(err.to_string())
    }
}

impl ResponseError for SiteError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.code().to_string(),
            message: self.message().to_string(),
        })
    }

    fn status_code(&self) -> StatusCode {
        match self {
            SiteError::ContentUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            SiteError::ContentParse(_) | SiteError::Template(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            SiteError::NotFound(_) => StatusCode::NOT_FOUND,
            SiteError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        }
    }
}
