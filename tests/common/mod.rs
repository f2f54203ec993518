#![allow(dead_code)]

use axum::Router;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::{get, post};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;

/// Tags the mock backend advertises, including one this crate does not support.
pub const ADVERTISED: [&str; 4] = ["CREDIT_CARD", "DEBIT_CARD", "PAYPAL", "BITCOIN"];

/// Router mimicking the pricing backend: quotes `amount * (1 + rate)` as plain text.
pub fn pricing_router(rate: Decimal) -> Router {
    Router::new()
        .route("/payment/types", get(|| async { axum::Json(ADVERTISED) }))
        .route(
            "/payment/pay",
            post(move |Query(params): Query<HashMap<String, String>>| async move {
                quote(&params, rate)
            }),
        )
}

fn quote(params: &HashMap<String, String>, rate: Decimal) -> (StatusCode, String) {
    let known = params
        .get("paymentType")
        .is_some_and(|tag| ADVERTISED[..3].contains(&tag.as_str()));
    let amount = params.get("amount").and_then(|a| Decimal::from_str(a).ok());

    match (known, amount) {
        (true, Some(amount)) => (StatusCode::OK, (amount * (Decimal::ONE + rate)).to_string()),
        _ => (StatusCode::BAD_REQUEST, "bad request".to_string()),
    }
}

/// Router whose endpoints always answer with the given status and body.
pub fn fixed_router(status: StatusCode, body: &'static str) -> Router {
    Router::new()
        .route("/payment/types", get(move || async move { (status, body) }))
        .route("/payment/pay", post(move || async move { (status, body) }))
}

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock backend");
    let addr = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Mock backend stopped");
    });

    format!("http://{addr}")
}
