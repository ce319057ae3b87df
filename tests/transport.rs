mod common;

use std::sync::Arc;

use common::{client_for, mount_fixture};
use serde_json::Value;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn cookies_persist_across_calls() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/whoami"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "forecast_session=abc123; Path=/")
                .set_body_string(r#"{"current_user": {"id": 1, "account_ids": [987654]}}"#),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/people"))
        .and(header("cookie", "forecast_session=abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"people": []}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.whoami().await.expect("whoami");
    assert!(client.is_connected());

    let people = client.people().await.expect("people sent with the session cookie");
    assert!(people.is_empty());
}

#[tokio::test]
async fn headers_are_identical_between_calls() {
    let server = MockServer::start().await;
    mount_fixture(&server, "/people", "people.json").await;

    let client = client_for(&server);
    client.people().await.expect("first");
    client.people().await.expect("second");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    for request in &requests {
        assert_eq!(request.headers["authorization"], "Bearer test-token");
        assert_eq!(request.headers["forecast-account-id"], "987654");
    }
}

#[tokio::test]
async fn concurrent_first_calls_share_one_transport() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/anything"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(8)
        .mount(&server)
        .await;

    let client = Arc::new(client_for(&server));
    let mut handles = Vec::new();
    for _ in 0..8 {
        let client = Arc::clone(&client);
        handles.push(tokio::spawn(async move {
            client.get::<Value>("anything").await
        }));
    }
    for handle in handles {
        handle.await.expect("task").expect("request");
    }
    assert!(client.is_connected());
}
