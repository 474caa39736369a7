use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use recipe_service::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

const ERROR_PAGE: &str = include_str!("../templates/error.html.tera");

#[derive(Debug, Error)]
pub enum AppError {
    /// A path or form value that could not be parsed.
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Template(#[from] tera::Error),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::Service(ServiceError::UnitOfMeasureNotFound(_)) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Service(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = ?self, "request failed");
            return (status, "Internal Server Error").into_response();
        }
        warn!(status = status.as_u16(), error = %self, "request rejected");

        let mut ctx = tera::Context::new();
        ctx.insert("status", &status.as_u16());
        ctx.insert(
            "title",
            if status == StatusCode::NOT_FOUND { "404 Not Found" } else { "400 Bad Request" },
        );
        ctx.insert("message", &self.to_string());

        match tera::Tera::one_off(ERROR_PAGE, &ctx, true) {
            Ok(body) => (status, Html(body)).into_response(),
            Err(err) => {
                error!(error = ?err, "could not render error page");
                (status, self.to_string()).into_response()
            }
        }
    }
}
