#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use forecast_api_client::ForecastClient;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ACCOUNT_ID: &str = "987654";
pub const TOKEN: &str = "test-token";

pub fn read_fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("reading {}: {}", path.display(), e))
}

pub fn client_for(server: &MockServer) -> ForecastClient {
    ForecastClient::new(&server.uri(), ACCOUNT_ID, TOKEN)
}

/// Serves `fixture` for authenticated GETs of `route`.
pub async fn mount_fixture(server: &MockServer, route: &str, fixture: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(header("authorization", format!("Bearer {}", TOKEN).as_str()))
        .and(header("forecast-account-id", ACCOUNT_ID))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json; charset=utf-8")
                .set_body_string(read_fixture(fixture)),
        )
        .mount(server)
        .await;
}
