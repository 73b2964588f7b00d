//! End-to-end tests for the optimization engine and its HTTP surface.
//!
//! Covers the reference scenarios: the manual bear call credit numbers,
//! the boundary-ratio bull call debit, shape-check rejection, the
//! best-unqualified fallback, and ranking determinism — both through the
//! library API and through the axum router.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::io::Write as _;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use spread_engine::server::{
    ErrorResponse, ManualSpreadResponse, OptimizeOutcome, OptimizeSpreadResponse,
};
use spread_engine::{
    AppState, EngineDefaults, EngineError, ManualSpreadInput, OptimizationRequest,
    OptimizationResult, OptionQuote, OptionType, QuoteGreeks, QuoteTable, StrategyFilter,
    StrategyKind, bear_call_credit, create_router, load_quotes, optimize,
};
use tower::ServiceExt;

fn call_quote(strike: Decimal, premium: Decimal) -> OptionQuote {
    OptionQuote {
        underlying: "BOVA11".to_string(),
        ticker: format!("BOVAJ{strike}"),
        option_type: OptionType::Call,
        strike,
        premium,
        implied_vol: None,
        greeks: QuoteGreeks::default(),
        expiry: None,
        days_to_expiry: None,
    }
}

fn request_for(underlying: &str) -> OptimizationRequest {
    OptimizationRequest {
        underlying: underlying.to_string(),
        spot_price: dec!(120.50),
        quantity: 1000,
        fees_total: dec!(0.10),
        strategy_filter: StrategyFilter::All,
        min_risk_reward: dec!(1.0),
    }
}

fn test_state(table: QuoteTable) -> AppState {
    AppState {
        table: Arc::new(table),
        defaults: EngineDefaults::default(),
        version: "test".to_string(),
    }
}

async fn post_json(state: AppState, uri: &str, body: serde_json::Value) -> (StatusCode, Vec<u8>) {
    let router = create_router(state);
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

// ============================================
// Scenario A: manual bear call credit numbers
// ============================================

#[test]
fn scenario_a_manual_bear_call_credit() {
    let input = ManualSpreadInput {
        underlying: "BOVA11".to_string(),
        spot_price: dec!(120.50),
        sold_strike: dec!(118.00),
        sold_premium: dec!(3.50),
        bought_strike: dec!(123.00),
        bought_premium: dec!(1.00),
        quantity: 1000,
        fees_per_leg: dec!(0.05),
    };

    let result = bear_call_credit(&input, None).unwrap();
    assert_eq!(result.strategy, StrategyKind::BearCallCredit);
    assert_eq!(result.metrics.net_premium_per_unit, dec!(2.40));
    assert_eq!(result.metrics.max_profit_total, dec!(2400.00));
    assert_eq!(result.metrics.max_loss_total, dec!(2600.10));
    assert_eq!(result.metrics.breakeven, dec!(120.40));
}

#[tokio::test]
async fn scenario_a_over_http() {
    let (status, body) = post_json(
        test_state(QuoteTable::default()),
        "/api/v1/spreads/manual",
        serde_json::json!({
            "underlying": "BOVA11",
            "spot_price": "120.50",
            "sold_strike": "118.00",
            "sold_premium": "3.50",
            "bought_strike": "123.00",
            "bought_premium": "1.00",
            "quantity": 1000,
            "fees_per_leg": "0.05"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let response: ManualSpreadResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(response.metrics.net_premium_per_unit, dec!(2.40));
    assert_eq!(response.metrics.max_loss_total, dec!(2600.10));
    assert!(response.report.contains("BREAKEVEN: R$ 120,40"));
}

// ============================================
// Scenario B: boundary ratio qualifies
// ============================================

#[test]
fn scenario_b_bull_call_debit_at_the_gate_boundary() {
    let table = QuoteTable::new(vec![
        call_quote(dec!(100), dec!(8)),
        call_quote(dec!(110), dec!(3)),
    ]);
    let request = OptimizationRequest {
        underlying: "BOVA11".to_string(),
        spot_price: dec!(104),
        quantity: 1,
        fees_total: Decimal::ZERO,
        strategy_filter: StrategyFilter::Only(vec![StrategyKind::BullCallDebit]),
        min_risk_reward: dec!(1.0),
    };

    // Ratio exactly 1.0 meets a 1.0 gate: >= is inclusive.
    match optimize(&table, &request).unwrap() {
        OptimizationResult::Qualified(best) => {
            assert_eq!(best.metrics.net_premium_per_unit, dec!(-5));
            assert_eq!(best.metrics.max_profit_per_unit, dec!(5));
            assert_eq!(best.metrics.max_loss_per_unit, dec!(5));
            assert_eq!(best.metrics.breakeven, dec!(105));
            assert_eq!(best.metrics.risk_reward, Some(dec!(1)));
        }
        other => panic!("expected a qualified outcome, got {other:?}"),
    }
}

// ============================================
// Scenario C: shape check rejects inverted legs
// ============================================

#[test]
fn scenario_c_inverted_manual_legs_are_rejected() {
    let input = ManualSpreadInput {
        underlying: "BOVA11".to_string(),
        spot_price: dec!(120.50),
        sold_strike: dec!(123.00),
        sold_premium: dec!(1.00),
        bought_strike: dec!(118.00),
        bought_premium: dec!(3.50),
        quantity: 1000,
        fees_per_leg: dec!(0.05),
    };

    assert!(matches!(
        bear_call_credit(&input, None),
        Err(EngineError::InvalidSpreadShape { .. })
    ));
}

#[tokio::test]
async fn scenario_c_over_http_is_a_bad_request() {
    let (status, body) = post_json(
        test_state(QuoteTable::default()),
        "/api/v1/spreads/manual",
        serde_json::json!({
            "underlying": "BOVA11",
            "spot_price": "120.50",
            "sold_strike": "123.00",
            "sold_premium": "1.00",
            "bought_strike": "118.00",
            "bought_premium": "3.50",
            "quantity": 1000
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.code, "INVALID_SPREAD_SHAPE");
}

// ============================================
// Scenario D: best-unqualified fallback
// ============================================

#[test]
fn scenario_d_profitable_but_below_the_gate() {
    let table = QuoteTable::new(vec![
        call_quote(dec!(118.00), dec!(3.50)),
        call_quote(dec!(123.00), dec!(1.00)),
    ]);
    let mut request = request_for("BOVA11");
    request.min_risk_reward = dec!(5.0);

    // Everything here sits near ratio 1.0: profitable, nowhere near 5.0.
    match optimize(&table, &request).unwrap() {
        OptimizationResult::BestUnqualified(best) => {
            assert!(best.metrics.max_profit_total > Decimal::ZERO);
            let ratio = best.metrics.risk_reward.unwrap();
            assert!(ratio > Decimal::ZERO && ratio < dec!(5.0));
        }
        other => panic!("expected the unqualified fallback, got {other:?}"),
    }
}

// ============================================
// NoneFound and error states
// ============================================

#[test]
fn none_found_reports_the_evaluated_count() {
    // Premiums rise faster than the strikes: every credit pair collects a
    // negative premium and every debit pair costs more than its width, so
    // nothing is profitable across C(4,2) = 6 pairs x 2 call kinds.
    let table = QuoteTable::new(vec![
        call_quote(dec!(100), dec!(1)),
        call_quote(dec!(105), dec!(7)),
        call_quote(dec!(110), dec!(14)),
        call_quote(dec!(115), dec!(22)),
    ]);
    let request = request_for("BOVA11");

    match optimize(&table, &request).unwrap() {
        OptimizationResult::NoneFound { evaluated } => assert_eq!(evaluated, 12),
        other => panic!("expected NoneFound, got {other:?}"),
    }
}

#[tokio::test]
async fn unknown_underlying_maps_to_not_found() {
    let table = QuoteTable::new(vec![call_quote(dec!(118), dec!(3.50))]);

    let (status, body) = post_json(
        test_state(table),
        "/api/v1/spreads/optimize",
        serde_json::json!({
            "underlying": "PETR4",
            "spot_price": "38.00"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.code, "NO_QUOTES_FOR_UNDERLYING");
}

// ============================================
// Determinism
// ============================================

#[test]
fn ranking_is_independent_of_table_order() {
    let mut quotes = vec![
        call_quote(dec!(110), dec!(6.20)),
        call_quote(dec!(115), dec!(4.10)),
        call_quote(dec!(118), dec!(3.50)),
        call_quote(dec!(123), dec!(1.00)),
        call_quote(dec!(125), dec!(0.55)),
    ];
    let request = request_for("BOVA11");

    let forward = QuoteTable::new(quotes.clone());
    let OptimizationResult::Qualified(expected) = optimize(&forward, &request).unwrap() else {
        panic!("expected a qualified outcome");
    };

    quotes.reverse();
    let reversed = QuoteTable::new(quotes);
    for _ in 0..5 {
        match optimize(&reversed, &request).unwrap() {
            OptimizationResult::Qualified(best) => {
                assert_eq!(best.strategy, expected.strategy);
                assert_eq!(best.sold_strike(), expected.sold_strike());
                assert_eq!(best.metrics, expected.metrics);
            }
            other => panic!("expected a qualified outcome, got {other:?}"),
        }
    }
}

// ============================================
// CSV-to-result flow
// ============================================

#[tokio::test]
async fn csv_ingest_feeds_the_optimizer() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        b"idAcao,ticker,vencimento,tipo,strike,premio,delta,gamma,theta,vega\n\
          BOVA11,BOVAJ118,2026-01-16,CALL,\"118,00\",\"3,50\",0.55,0.04,-0.09,0.14\n\
          BOVA11,BOVAJ123,2026-01-16,CALL,\"123,00\",\"1,00\",0.30,0.02,-0.04,0.10\n",
    )
    .unwrap();

    let table = load_quotes(file.path()).unwrap();
    assert_eq!(table.len(), 2);

    let (status, body) = post_json(
        test_state(table),
        "/api/v1/spreads/optimize",
        serde_json::json!({
            "underlying": "BOVA11",
            "spot_price": "120.50",
            "quantity": 1000,
            "fees_total": "0.10",
            "min_risk_reward": "0.5",
            "strategy_filter": {"only": ["bear_call_credit"]}
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let response: OptimizeSpreadResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(response.outcome, OptimizeOutcome::Qualified);

    let best = response.best.unwrap();
    assert_eq!(best.strategy, StrategyKind::BearCallCredit);
    assert_eq!(best.sold.strike, dec!(118.00));
    assert_eq!(best.metrics.net_premium_per_unit, dec!(2.50));
    // 2.50 x 1000 - 0.10 against 2.50 x 1000 + 0.10.
    assert_eq!(best.metrics.max_profit_total, dec!(2499.90));
    assert_eq!(best.metrics.max_loss_total, dec!(2500.10));
    // Net delta 0.55 - 0.30 carried through from the CSV Greeks.
    assert_eq!(best.net_greeks.delta, Some(dec!(0.25)));
    assert!(response.report.unwrap().contains("BEAR CALL SPREAD"));
}
