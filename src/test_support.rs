//! In-process fakes of the catalog store and routing provider for tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    routing::{get, post},
};
use serde_json::{Value as JsonValue, json};

use crate::config::Config;

pub const TEST_BIN_ID: &str = "test-bin";
pub const TEST_MASTER_KEY: &str = "test-master-key";
pub const TEST_ORS_KEY: &str = "test-ors-key";

/// Serve `router` on an ephemeral local port and return its base URL
pub async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{}", addr)
}

pub fn test_config(jsonbin_base_url: &str, ors_base_url: &str) -> Config {
    Config {
        ors_api_key: Some(TEST_ORS_KEY.to_string()),
        ors_base_url: ors_base_url.to_string(),
        ors_profile: "foot-walking".to_string(),
        jsonbin_api_key: Some(TEST_MASTER_KEY.to_string()),
        jsonbin_bin_id: Some(TEST_BIN_ID.to_string()),
        jsonbin_base_url: jsonbin_base_url.to_string(),
        upstream_timeout: Duration::from_secs(5),
        service_port: 3000,
        service_host: "127.0.0.1".to_string(),
    }
}

/// Fake document store serving `record` as the latest catalog version
pub fn catalog_upstream(record: JsonValue) -> Router {
    let path = format!("/b/{}/latest", TEST_BIN_ID);
    Router::new().route(
        &path,
        get(move |headers: HeaderMap| {
            let record = record.clone();
            async move {
                let key = headers.get("X-Master-Key").and_then(|v| v.to_str().ok());
                if key != Some(TEST_MASTER_KEY) {
                    return (
                        StatusCode::UNAUTHORIZED,
                        Json(json!({ "message": "You need to pass X-Master-Key in the header" })),
                    );
                }
                (
                    StatusCode::OK,
                    Json(json!({
                        "record": record,
                        "metadata": { "id": TEST_BIN_ID, "private": true }
                    })),
                )
            }
        }),
    )
}

/// Fake routing provider answering every authorized call with `response`
///
/// The last accepted request body is stored in `seen`.
pub fn provider_upstream(response: JsonValue, seen: Arc<Mutex<Option<JsonValue>>>) -> Router {
    Router::new().route(
        "/v2/directions/foot-walking/geojson",
        post(move |headers: HeaderMap, Json(body): Json<JsonValue>| {
            let response = response.clone();
            let seen = seen.clone();
            async move {
                let key = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());
                if key != Some(TEST_ORS_KEY) {
                    return (
                        StatusCode::FORBIDDEN,
                        Json(json!({ "error": "Access to this API has been disallowed" })),
                    );
                }
                *seen.lock().unwrap() = Some(body);
                (StatusCode::OK, Json(response))
            }
        }),
    )
}

/// Three walking routes through Kraków's old town
pub fn sample_catalog() -> JsonValue {
    json!([
        {
            "id": 1,
            "name": "Wawel Castle to Main Market Square",
            "start": { "latitude": 50.0545, "longitude": 19.9352 },
            "end": { "latitude": 50.0614, "longitude": 19.9372 },
            "waypoints": [
                {
                    "name": "Planty Park",
                    "description": "A green belt encircling the Old Town, with fountains, statues and gardens.",
                    "latitude": 50.0565,
                    "longitude": 19.9383
                },
                {
                    "name": "St. Mary's Basilica",
                    "description": "Gothic church on the Main Market Square; a bugle call sounds from the taller tower every hour.",
                    "latitude": 50.0616,
                    "longitude": 19.939
                }
            ]
        },
        {
            "id": 2,
            "name": "Kazimierz District to Schindler's Factory Museum",
            "start": { "latitude": 50.0519, "longitude": 19.944 },
            "end": { "latitude": 50.0462, "longitude": 19.9615 },
            "waypoints": [
                {
                    "name": "Plac Nowy",
                    "description": "Square known for its food stalls and zapiekanka.",
                    "latitude": 50.0493,
                    "longitude": 19.9447
                },
                {
                    "name": "Ghetto Heroes Square",
                    "description": "Memorial square with empty chairs for the residents of the wartime ghetto.",
                    "latitude": 50.0483,
                    "longitude": 19.9577
                }
            ]
        },
        {
            "id": 3,
            "name": "Barbican to Wawel Castle",
            "start": { "latitude": 50.0654, "longitude": 19.9428 },
            "end": { "latitude": 50.0545, "longitude": 19.9352 },
            "waypoints": [
                {
                    "name": "Floriańska Street",
                    "description": "Busy street of shops and cafes leading from the city walls to the Main Market Square.",
                    "latitude": 50.0637,
                    "longitude": 19.9396
                },
                {
                    "name": "Sukiennice (Cloth Hall)",
                    "description": "Renaissance trading hall where local artisans sell traditional crafts.",
                    "latitude": 50.0615,
                    "longitude": 19.9372
                }
            ]
        }
    ])
}
