use axum::{http::StatusCode, response::{IntoResponse, Response}};

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("request failed: {:#}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // AppResult must stay unwrappable, so AppError has to be Debug
    #[test]
    fn error_formats_debug() {
        let result: AppResult<()> = Err(anyhow::anyhow!("boom").into());
        let err = result.unwrap_err();
        assert!(format!("{err:?}").contains("boom"));
    }
}
