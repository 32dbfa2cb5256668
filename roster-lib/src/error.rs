use actix_web::body::BoxBody;
use actix_web::error::{JsonPayloadError, PathError};
use actix_web::http::{header, StatusCode};
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use roster_repo::user_repo::UserRepoError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::user::ValidationErrors;

/// The single point where internal failures become the wire-visible contract. Every
/// error body is `{status, detail}`, except validation failures which carry
/// `{status, errors}` with a field-to-messages map.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Authentication Required")]
    AuthenticationRequired,
    #[error("Invalid credentials")]
    InvalidCredentials,
    /// Absent resource and denied access share this signal, so a caller cannot
    /// tell which user ids exist.
    #[error("Not found")]
    NotFound,
    #[error("Validation Failed")]
    Validation(ValidationErrors),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<UserRepoError> for ApiError {
    fn from(e: UserRepoError) -> Self {
        match e {
            UserRepoError::UserNotFound(_) => ApiError::NotFound,
            UserRepoError::Other(e) => ApiError::Internal(e),
        }
    }
}

impl From<argon2::Error> for ApiError {
    fn from(e: argon2::Error) -> Self {
        ApiError::Internal(anyhow::Error::new(e))
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::AuthenticationRequired | ApiError::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        let status = self.status_code();
        let body = match self {
            ApiError::Validation(errors) => {
                json!({ "status": status.as_u16(), "errors": errors })
            }
            ApiError::Internal(e) => {
                error!(%e, "unhandled error");
                json!({ "status": status.as_u16(), "detail": "An unexpected error occurred." })
            }
            _ => json!({ "status": status.as_u16(), "detail": self.to_string() }),
        };

        let mut response = HttpResponse::build(status);
        if status == StatusCode::UNAUTHORIZED {
            response.insert_header((header::WWW_AUTHENTICATE, "Bearer"));
        }
        response.json(body)
    }
}

pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    error!(req_path = req.path(), %err, "unable to parse JSON payload");
    let response = HttpResponse::BadRequest().json(json!({
        "status": 400,
        "detail": "Invalid JSON",
    }));
    actix_web::error::InternalError::from_response(err, response).into()
}

/// Ids that do not parse get the same response as ids that do not exist.
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    error!(req_path = req.path(), %err, "unable to parse path parameters");
    let response = HttpResponse::NotFound().json(json!({
        "status": 404,
        "detail": "Not found",
    }));
    actix_web::error::InternalError::from_response(err, response).into()
}
