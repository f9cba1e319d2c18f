//! E2E tests for the extraction-oracle tier and its failure modes.

mod helpers;

use axum::http::StatusCode;

use helpers::TestHarness;

/// Free text no deterministic tier understands reaches the oracle, and
/// the oracle's structured answer routes by kind (synchronous → Moscow).
#[tokio::test]
async fn e2e_oracle_answer_routed_structurally() {
    let h = TestHarness::with_static_oracle(
        r#"{"kind":"synchronous","length_mm":"800","profile":"8m","width_mm":30}"#,
    );

    let (status, json) = h.search("зубчатый ремень на восемьсот миллиметров").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "matched");
    assert_eq!(json["tier"], "oracle");
    assert_eq!(json["warehouse"], "Москва");
    assert!(json["items"]
        .as_array()
        .unwrap()
        .iter()
        .all(|i| i["width"] == 30.0));
}

/// Oracle answers in inches for a classic profile; conversion happens
/// once, downstream, and the search still finds 2159 mm stock.
#[tokio::test]
async fn e2e_oracle_inch_answer_converted_once() {
    let h = TestHarness::with_static_oracle(r#"{"kind":"vbelt","length_mm":85,"profile":"B"}"#);

    let (status, json) = h.search("клиновой ремень Б85").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "matched");
    assert_eq!(json["tier"], "oracle");
    assert_eq!(json["warehouse"], "Струнино");
    assert!(json["items"][0]["name"].as_str().unwrap().contains("FNR"));
}

/// Without an oracle, text no tier understands is unrecognized and the
/// response carries the grammar hint.
#[tokio::test]
async fn e2e_no_oracle_unrecognized_with_hint() {
    let h = TestHarness::with_sample_data();

    let (status, json) = h.search("привет! что посоветуете?").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["status"], "unrecognized");
    let hint = json["hint"].as_str().unwrap();
    assert!(hint.contains("8008M"));
    assert!(hint.contains("B85"));
}

/// An oracle answer with an unusable kind is rejected by validation and
/// the query stays unrecognized.
#[tokio::test]
async fn e2e_oracle_garbage_kind_rejected() {
    let h = TestHarness::with_static_oracle(r#"{"kind":"flat","length_mm":800}"#);

    let (status, json) = h.search("плоский ремень 800 мм").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["status"], "unrecognized");
}

/// A valid oracle answer that matches no stock is a no-match at the
/// oracle tier, kept distinct from unrecognized.
#[tokio::test]
async fn e2e_oracle_accepted_no_stock() {
    let h = TestHarness::with_static_oracle(r#"{"kind":"vbelt","length_mm":300,"profile":"D"}"#);

    let (status, json) = h.search("ремень профиль D длина триста").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "no_match");
    assert_eq!(json["tier"], "oracle");
}

/// A clean code never consults the oracle, even when one is configured
/// with a conflicting answer.
#[tokio::test]
async fn e2e_grammar_tier_wins_over_oracle() {
    let h = TestHarness::with_static_oracle(r#"{"kind":"vbelt","length_mm":85,"profile":"B"}"#);

    let (status, json) = h.search("8008M").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["tier"], "grammar");
    assert_eq!(json["kind"], "synchronous");
}
