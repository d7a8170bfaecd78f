//! Helpers for building Yahoo chart payloads and mounting them

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Daily chart payload in the Yahoo v8 shape for the given closes.
pub fn chart_body(closes: &[f64]) -> Value {
    let start_ts: i64 = 1_700_000_000;
    let timestamps: Vec<i64> = (0..closes.len())
        .map(|i| start_ts + i as i64 * 86_400)
        .collect();
    json!({
        "chart": {
            "result": [{
                "meta": { "symbol": "TEST" },
                "timestamp": timestamps,
                "indicators": { "quote": [{ "close": closes }] }
            }],
            "error": null
        }
    })
}

/// Payload Yahoo returns for an unknown symbol.
pub fn chart_error_body(description: &str) -> Value {
    json!({
        "chart": {
            "result": null,
            "error": { "code": "Not Found", "description": description }
        }
    })
}

pub async fn mount_chart(server: &MockServer, symbol: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/v8/finance/chart/{}", symbol)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Smooth geometric decline: calm tape sitting below every trend line.
pub fn downtrend_closes(count: usize) -> Vec<f64> {
    (0..count).map(|i| 300.0 * 0.998f64.powi(i as i32)).collect()
}

/// Smooth geometric rise: tape above every trend line.
pub fn uptrend_closes(count: usize) -> Vec<f64> {
    (0..count).map(|i| 100.0 * 1.002f64.powi(i as i32)).collect()
}
