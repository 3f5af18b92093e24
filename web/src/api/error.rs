use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use balance_gate::errors::ChainError;
use serde::Serialize;
use thiserror::Error;

#[derive(Serialize)]
struct ErrorBody<'a> {
    detail: &'a str,
}

/// Error answered as `{"detail": "..."}` with the carried status code.
#[derive(Error, Debug)]
#[error("{detail}")]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: String) -> Self {
        log::warn!("{status} - {detail}");

        Self { status, detail }
    }

    pub fn block_number(e: ChainError) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Error fetching block number: {e}"),
        )
    }

    pub fn slot(e: ChainError) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Error fetching slot: {e}"),
        )
    }

    pub fn eth_balance(raw: &str, e: ChainError) -> Self {
        match e {
            ChainError::InvalidAddress(msg) => Self::new(
                StatusCode::BAD_REQUEST,
                format!("Invalid address: {raw} ({msg})"),
            ),
            ChainError::RpcFailure(msg) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error fetching balance: {msg}"),
            ),
        }
    }

    // Both kinds are answered with 400 here, clients may rely on it.
    pub fn sol_balance(e: ChainError) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            format!("Invalid or failed request: {e}"),
        )
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status).json(ErrorBody {
            detail: &self.detail,
        })
    }
}
