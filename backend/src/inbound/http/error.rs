//! HTTP adapter mapping for domain errors.
//!
//! API clients expect every failure as HTTP 200 with `{"error": message}`;
//! the error code only decides the log level and whether the message is
//! redacted.

use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode, TraceId};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        Error::internal("Internal server error")
    } else {
        error.clone()
    }
}

fn log_error(error: &Error) {
    let trace_id = TraceId::current().map(|id| id.to_string());
    match error.code() {
        ErrorCode::InternalError | ErrorCode::ServiceUnavailable => error!(
            trace_id = trace_id.as_deref(),
            code = error.code().as_str(),
            detail = error.message(),
            "request failed"
        ),
        _ => warn!(
            trace_id = trace_id.as_deref(),
            code = error.code().as_str(),
            detail = error.message(),
            "request rejected"
        ),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        StatusCode::OK
    }

    fn error_response(&self) -> HttpResponse {
        log_error(self);
        HttpResponse::build(self.status_code()).json(redact_if_internal(self))
    }
}

/// Map body and query extraction failures into the error envelope.
///
/// Install through `web::FormConfig::error_handler` and
/// `web::QueryConfig::error_handler`.
pub fn extraction_error_handler<E>(err: E, _req: &HttpRequest) -> actix_web::Error
where
    E: std::fmt::Display,
{
    Error::invalid_request(format!("malformed request: {err}")).into()
}

#[cfg(test)]
mod tests;
