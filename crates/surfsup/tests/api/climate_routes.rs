use crate::helpers::{measurement, Measurement, TestStore};
use axum::http::StatusCode;
use serde_json::{json, Value};

const WAIHEE: &str = "USC00519281";
const WAIKIKI: &str = "USC00519397";
const KANEOHE: &str = "USC00513117";

fn hawaii_measurements() -> Vec<Measurement> {
    vec![
        measurement(WAIKIKI, "2015-05-01", Some(0.2), Some(60.0)),
        measurement(WAIKIKI, "2016-08-22", Some(0.1), Some(74.0)),
        measurement(WAIKIKI, "2016-08-23", Some(0.08), Some(81.0)),
        measurement(WAIHEE, "2016-08-23", Some(1.79), Some(77.0)),
        measurement(KANEOHE, "2017-01-01", None, Some(70.0)),
        measurement(WAIHEE, "2017-01-01", Some(0.0), Some(75.0)),
        measurement(WAIHEE, "2017-01-02", Some(0.02), Some(80.0)),
        measurement(WAIHEE, "2017-01-03", Some(0.5), Some(90.0)),
        measurement(WAIHEE, "2017-08-18", Some(0.06), Some(79.0)),
        measurement(WAIKIKI, "2017-08-23", Some(0.0), Some(81.0)),
    ]
}

async fn hawaii_store() -> TestStore {
    TestStore::seed(
        &hawaii_measurements(),
        &[WAIKIKI, KANEOHE, WAIHEE, WAIHEE],
    )
    .await
}

#[tokio::test]
async fn precipitation_covers_last_365_days_per_row() {
    let store = hawaii_store().await;
    let test_app = store.spawn_app();

    let body = test_app.get_json("/api/v1.0/precipitation").await;

    // Window starts at 2017-08-23 - 365 days, inclusive; duplicate dates stay separate records
    assert_eq!(
        body,
        json!([
            {"date": "2016-08-23", "prep": 0.08},
            {"date": "2016-08-23", "prep": 1.79},
            {"date": "2017-01-01", "prep": null},
            {"date": "2017-01-01", "prep": 0.0},
            {"date": "2017-01-02", "prep": 0.02},
            {"date": "2017-01-03", "prep": 0.5},
            {"date": "2017-08-18", "prep": 0.06},
            {"date": "2017-08-23", "prep": 0.0},
        ])
    );
}

#[tokio::test]
async fn precipitation_window_ignores_leap_day() {
    let store = TestStore::seed(
        &[
            measurement(WAIHEE, "2015-03-01", Some(0.3), Some(70.0)),
            measurement(WAIHEE, "2015-03-02", Some(0.4), Some(71.0)),
            measurement(WAIHEE, "2016-02-29", Some(0.5), Some(72.0)),
            measurement(WAIHEE, "2016-03-01", Some(0.6), Some(73.0)),
        ],
        &[WAIHEE],
    )
    .await;
    let test_app = store.spawn_app();

    let body = test_app.get_json("/api/v1.0/precipitation").await;
    let dates: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|record| record["date"].as_str().unwrap())
        .collect();

    assert_eq!(dates, vec!["2015-03-02", "2016-02-29", "2016-03-01"]);
}

#[tokio::test]
async fn stations_keep_table_order_and_duplicates() {
    let store = hawaii_store().await;
    let test_app = store.spawn_app();

    let body = test_app.get_json("/api/v1.0/stations").await;

    assert_eq!(body, json!([WAIKIKI, KANEOHE, WAIHEE, WAIHEE]));
}

#[tokio::test]
async fn tobs_reports_most_active_station_only() {
    let store = hawaii_store().await;
    let test_app = store.spawn_app();

    let body = test_app.get_json("/api/v1.0/tobs").await;

    assert_eq!(
        body,
        json!([
            {"date": "2016-08-23", "tobs": 77.0},
            {"date": "2017-01-01", "tobs": 75.0},
            {"date": "2017-01-02", "tobs": 80.0},
            {"date": "2017-01-03", "tobs": 90.0},
            {"date": "2017-08-18", "tobs": 79.0},
        ])
    );
}

#[tokio::test]
async fn temperature_range_is_inclusive_with_float_average() {
    let store = hawaii_store().await;
    let test_app = store.spawn_app();

    let body = test_app.get_json("/api/v1.0/2017-01-01/2017-01-02").await;

    assert_eq!(body, json!([70.0, 75.0, 80.0]));
}

#[tokio::test]
async fn temperature_from_start_is_open_ended() {
    let store = hawaii_store().await;
    let test_app = store.spawn_app();

    let body = test_app.get_json("/api/v1.0/2017-01-03").await;
    let stats = body.as_array().unwrap();

    assert_eq!(stats.len(), 3);
    assert_eq!(stats[0], json!(79.0));
    assert!((stats[1].as_f64().unwrap() - 250.0 / 3.0).abs() < 1e-9);
    assert_eq!(stats[2], json!(90.0));
}

#[tokio::test]
async fn temperature_without_matches_is_three_nulls() {
    let store = hawaii_store().await;
    let test_app = store.spawn_app();

    for uri in [
        "/api/v1.0/2030-01-01",
        "/api/v1.0/2030-01-01/2030-12-31",
        "/api/v1.0/2017-01-02/2017-01-01",
        "/api/v1.0/not-a-date",
    ] {
        let body = test_app.get_json(uri).await;
        assert_eq!(body, json!([null, null, null]), "for {uri}");
    }
}

#[tokio::test]
async fn temperature_dates_are_compared_as_text() {
    let store = hawaii_store().await;
    let test_app = store.spawn_app();

    // "2017" sorts before every 2017 date string, so it behaves like 2017-01-01
    let body = test_app.get_json("/api/v1.0/2017").await;

    assert_eq!(body[0], json!(70.0));
    assert_eq!(body[2], json!(90.0));
}

#[tokio::test]
async fn repeated_requests_are_byte_identical() {
    let store = hawaii_store().await;
    let test_app = store.spawn_app();

    for uri in [
        "/api/v1.0/precipitation",
        "/api/v1.0/stations",
        "/api/v1.0/tobs",
        "/api/v1.0/2016-08-23/2017-08-23",
    ] {
        let (first_status, first) = test_app.get(uri).await;
        let (second_status, second) = test_app.get(uri).await;
        assert_eq!(first_status, StatusCode::OK);
        assert_eq!(second_status, StatusCode::OK);
        assert_eq!(first, second, "for {uri}");
    }
}

#[tokio::test]
async fn empty_store_fails_window_routes_only() {
    let store = TestStore::seed(&[], &[]).await;
    let test_app = store.spawn_app();

    for uri in ["/api/v1.0/precipitation", "/api/v1.0/tobs"] {
        let (status, body) = test_app.get(uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "for {uri}");
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("No observations recorded"));
    }

    assert_eq!(test_app.get_json("/api/v1.0/stations").await, json!([]));
    assert_eq!(
        test_app.get_json("/api/v1.0/2017-01-01").await,
        json!([null, null, null])
    );
}
