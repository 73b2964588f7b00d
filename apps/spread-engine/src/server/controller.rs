//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API that delegates to the optimization engine. The
//! quote table is loaded once at startup and shared read-only across
//! handlers.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};

use crate::config::EngineDefaults;
use crate::domain::{QuoteTable, StrategyFilter};
use crate::engine::{
    EngineError, ManualSpreadInput, OptimizationRequest, OptimizationResult, bear_call_credit,
    optimize,
};
use crate::report;

use super::request::{ManualSpreadRequest, OptimizeSpreadRequest};
use super::response::{
    CandidateResponse, ErrorResponse, HealthResponse, ManualSpreadResponse, OptimizeOutcome,
    OptimizeSpreadResponse,
};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The quote table loaded at startup; read-only from here on.
    pub table: Arc<QuoteTable>,
    /// Request defaults for omitted cost-model fields.
    pub defaults: EngineDefaults,
    /// Application version.
    pub version: String,
}

/// Create the HTTP router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/spreads/optimize", post(optimize_spread))
        .route("/api/v1/spreads/manual", post(manual_spread))
        .with_state(state)
}

/// Engine error wrapped for HTTP transport.
struct ApiError(EngineError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            EngineError::InvalidRequest { .. } | EngineError::InvalidSpreadShape { .. } => {
                StatusCode::BAD_REQUEST
            }
            EngineError::NoQuotesForUnderlying { .. } => StatusCode::NOT_FOUND,
        };
        let body = ErrorResponse {
            code: self.0.code().to_string(),
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

/// Optimize the best vertical spread for an underlying.
async fn optimize_spread(
    State(state): State<AppState>,
    Json(request): Json<OptimizeSpreadRequest>,
) -> Result<Json<OptimizeSpreadResponse>, ApiError> {
    let engine_request = OptimizationRequest {
        underlying: request.underlying,
        spot_price: request.spot_price,
        quantity: request.quantity.unwrap_or(state.defaults.quantity),
        fees_total: request.fees_total.unwrap_or(state.defaults.fees_total),
        strategy_filter: request.strategy_filter.unwrap_or(StrategyFilter::All),
        min_risk_reward: request
            .min_risk_reward
            .unwrap_or(state.defaults.min_risk_reward),
    };

    let response = match optimize(&state.table, &engine_request).map_err(ApiError)? {
        OptimizationResult::Qualified(best) => OptimizeSpreadResponse {
            outcome: OptimizeOutcome::Qualified,
            best: Some(CandidateResponse::from_candidate(&best)),
            evaluated: None,
            report: Some(report::render_optimization(&best, &engine_request)),
        },
        OptimizationResult::BestUnqualified(best) => OptimizeSpreadResponse {
            outcome: OptimizeOutcome::BestUnqualified,
            best: Some(CandidateResponse::from_candidate(&best)),
            evaluated: None,
            report: Some(report::render_optimization(&best, &engine_request)),
        },
        OptimizationResult::NoneFound { evaluated } => OptimizeSpreadResponse {
            outcome: OptimizeOutcome::NoneFound,
            best: None,
            evaluated: Some(evaluated),
            report: None,
        },
    };

    Ok(Json(response))
}

/// Compute a manual bear call credit from caller-declared legs.
async fn manual_spread(
    State(state): State<AppState>,
    Json(request): Json<ManualSpreadRequest>,
) -> Result<Json<ManualSpreadResponse>, ApiError> {
    let input = ManualSpreadInput {
        underlying: request.underlying,
        spot_price: request.spot_price,
        sold_strike: request.sold_strike,
        sold_premium: request.sold_premium,
        bought_strike: request.bought_strike,
        bought_premium: request.bought_premium,
        quantity: request.quantity,
        fees_per_leg: request.fees_per_leg,
    };

    let result = bear_call_credit(&input, Some(&state.table)).map_err(ApiError)?;
    let report = report::render_manual(&result, &input);

    Ok(Json(ManualSpreadResponse {
        strategy: result.strategy,
        metrics: result.metrics,
        sold_implied_vol: result.sold_implied_vol,
        bought_implied_vol: result.bought_implied_vol,
        report,
    }))
}
