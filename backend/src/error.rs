use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use shared::CatalogError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Blocking task failed: {0}")]
    Blocking(#[from] actix_web::error::BlockingError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Catalog(_) => StatusCode::SERVICE_UNAVAILABLE,
            ServerError::Config(_) | ServerError::Blocking(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

impl From<ServerError> for std::io::Error {
    fn from(err: ServerError) -> Self {
        std::io::Error::other(err.to_string())
    }
}
