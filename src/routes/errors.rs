use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::core::SearchError;
use crate::models::{DecodeError, ErrorResponse};
use crate::services::{StoreError, TripCostError};

/// Error returned by every handler, rendered as a JSON `ErrorResponse`
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(#[from] DecodeError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    TripCost(#[from] TripCostError),
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_error",
            ApiError::Store(StoreError::NotFound(_)) => "not_found",
            ApiError::Store(StoreError::Persistence(_)) => "persistence_error",
            ApiError::Search(SearchError::StoreUnavailable(_)) => "store_unavailable",
            ApiError::TripCost(TripCostError::ProviderUnavailable(_)) => "provider_unavailable",
            ApiError::TripCost(TripCostError::ProviderResponseInvalid(_)) => "provider_response_invalid",
            ApiError::TripCost(TripCostError::NotConfigured(_)) => "provider_not_configured",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
        })
    }
}
