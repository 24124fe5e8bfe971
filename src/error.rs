use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("wallet_address is required")]
    MissingWallet,

    #[error("Invalid Ethereum wallet address. Must be 0x-prefixed 42-character hex string.")]
    InvalidWallet(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    code: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::MissingWallet => {
                tracing::warn!(error_code = "MISSING_WALLET", "Wallet address missing");
                (StatusCode::BAD_REQUEST, "MISSING_WALLET")
            }
            AppError::InvalidWallet(wallet) => {
                tracing::warn!(wallet = %wallet, error_code = "INVALID_WALLET", "Invalid wallet address");
                (StatusCode::BAD_REQUEST, "INVALID_WALLET")
            }
            AppError::Config(msg) => {
                tracing::error!(message = %msg, error_code = "CONFIG_ERROR", "Configuration error");
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR")
            }
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        });

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_wallet_is_bad_request() {
        let response = AppError::MissingWallet.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_wallet_is_bad_request() {
        let response = AppError::InvalidWallet("0x123".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
