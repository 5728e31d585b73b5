// ServiceError -> HTTP mapping

use actix_web::http::StatusCode;
use actix_web::{error, HttpRequest, HttpResponse, ResponseError};

use crate::api::models::ApiResponse;
use crate::error::ServiceError;

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::FigurineNotFound(_)
            | ServiceError::DistributorNotFound(_)
            | ServiceError::DistributionChannelNotFound(_)
            | ServiceError::CatalogItemNotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Validation(_) | ServiceError::Mapping { .. } | ServiceError::Bulk(_) => {
                StatusCode::BAD_REQUEST
            }
            ServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = match self {
            ServiceError::Validation(details) => {
                ApiResponse::<()>::error("Validation failed").with_details(details.clone())
            }
            ServiceError::Store(err) => {
                // Store failures may carry connection details; log them, don't echo them.
                tracing::error!(error = ?err, "store failure");
                ApiResponse::<()>::error("Internal server error")
            }
            other => ApiResponse::<()>::error(other.to_string()),
        };
        HttpResponse::build(status).json(body)
    }
}

/// Malformed JSON bodies answer in the same envelope as every other error.
pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    let body = ApiResponse::<()>::error(err.to_string());
    error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

/// Same for unparseable query strings.
pub fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> error::Error {
    let body = ApiResponse::<()>::error(err.to_string());
    error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}
