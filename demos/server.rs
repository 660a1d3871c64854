//! Simple REST API server example for the dispenser chain.
//!
//! Run with: `cargo run --example server`
//!
//! ## Endpoints
//!
//! - `POST /dispense` - Break an amount into bills
//! - `GET /denominations` - List the configured denominations
//!
//! ## Example Usage
//!
//! ```bash
//! # Dispense
//! curl -X POST http://localhost:3000/dispense \
//!   -H "Content-Type: application/json" \
//!   -d '{"amount": 2970}'
//!
//! # Rejected: not a multiple of the granularity step
//! curl -X POST http://localhost:3000/dispense \
//!   -H "Content-Type: application/json" \
//!   -d '{"amount": 2975}'
//!
//! # Denominations
//! curl http://localhost:3000/denominations
//! ```

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use dispenser_demo_rs::{Amount, DispenseError, DispenserChain, Receipt, check_granularity};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Amount step accepted by this deployment; off-step requests get a 400.
const GRANULARITY: u64 = 10;

// === Request/Response DTOs ===

/// Request body for dispensing.
///
/// ```json
/// {"amount": 2970}
/// ```
#[derive(Debug, Deserialize)]
pub struct DispenseRequest {
    pub amount: u64,
}

/// Response body for errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

// === Application State ===

/// Shared application state containing the dispenser chain.
#[derive(Clone)]
pub struct AppState {
    pub chain: Arc<DispenserChain>,
}

// === Error Handling ===

/// Wrapper for converting `DispenseError` into HTTP responses.
pub struct AppError(DispenseError);

impl From<DispenseError> for AppError {
    fn from(err: DispenseError) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self.0 {
            DispenseError::EmptyChain => (StatusCode::UNPROCESSABLE_ENTITY, "EMPTY_CHAIN"),
            DispenseError::ZeroDenomination => {
                (StatusCode::UNPROCESSABLE_ENTITY, "ZERO_DENOMINATION")
            }
            DispenseError::NotDescending => (StatusCode::UNPROCESSABLE_ENTITY, "NOT_DESCENDING"),
            DispenseError::ZeroGranularity => (StatusCode::BAD_REQUEST, "ZERO_GRANULARITY"),
            DispenseError::GranularityMismatch { .. } => {
                (StatusCode::BAD_REQUEST, "GRANULARITY_MISMATCH")
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: self.0.to_string(),
                code: code.to_string(),
            }),
        )
            .into_response()
    }
}

// === Handlers ===

/// POST /dispense - Break an amount into bills.
async fn dispense(
    State(state): State<AppState>,
    Json(request): Json<DispenseRequest>,
) -> Result<Json<Receipt>, AppError> {
    let amount = Amount(request.amount);
    check_granularity(amount, GRANULARITY)?;
    Ok(Json(state.chain.dispense(amount)))
}

/// GET /denominations - List the configured denominations.
async fn denominations(State(state): State<AppState>) -> Json<Vec<u64>> {
    Json(state.chain.denominations().map(|d| d.0).collect())
}

// === Router ===

fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/dispense", post(dispense))
        .route("/denominations", get(denominations))
        .with_state(state)
}

// === Main ===

#[tokio::main]
async fn main() {
    let state = AppState {
        chain: Arc::new(DispenserChain::standard()),
    };

    let app = create_router(state);

    let listener = TcpListener::bind("127.0.0.1:3000").await.unwrap();
    println!("Dispenser API server running on http://127.0.0.1:3000");
    println!();
    println!("Endpoints:");
    println!("  POST /dispense      - Break an amount into bills");
    println!("  GET  /denominations - List the configured denominations");

    axum::serve(listener, app).await.unwrap();
}
