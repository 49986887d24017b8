use linear_issue_client::{LinearClient, LinearError, Variables};
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "lin_api_test";

fn client_for(server: &MockServer) -> LinearClient {
    LinearClient::with_endpoint(API_KEY, format!("{}/graphql", server.uri()))
}

async fn sent_body(server: &MockServer) -> Value {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    serde_json::from_slice(&requests[0].body).unwrap()
}

fn team_variables() -> Variables {
    let mut variables = Variables::new();
    variables.insert("team".to_string(), json!("ENG"));
    variables
}

#[tokio::test]
async fn test_request_returns_data() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("Authorization", API_KEY))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "viewer": { "id": "U1", "name": "Jane" } },
            "extensions": { "complexity": 2 }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let data = client.request("query { viewer { id name } }", None).await.unwrap();

    assert_eq!(data, json!({ "viewer": { "id": "U1", "name": "Jane" } }));
}

#[tokio::test]
async fn test_request_without_variables_omits_key() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": {} })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.request("query { viewer { id } }", None).await.unwrap();

    let body = sent_body(&server).await;
    assert_eq!(body, json!({ "query": "query { viewer { id } }" }));
}

#[tokio::test]
async fn test_request_sends_variables() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "team": null } })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let data = client
        .request("query getTeam($team: String!) { team(id: $team) { id } }", Some(team_variables()))
        .await
        .unwrap();
    assert_eq!(data, json!({ "team": null }));

    let body = sent_body(&server).await;
    assert_eq!(body["variables"], json!({ "team": "ENG" }));
}

#[tokio::test]
async fn test_graphql_errors_become_client_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [{
                "message": "Entity not found",
                "locations": [{ "line": 2, "column": 9 }],
                "path": ["team"]
            }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let query = "query getTeam($team: String!) { team(id: $team) { id } }";
    let err = client.request(query, Some(team_variables())).await.unwrap_err();

    match err {
        LinearError::Client(ref e) => {
            assert_eq!(e.status(), 200);
            assert_eq!(e.message(), "Entity not found");
            assert_eq!(e.request.query, query);
            assert_eq!(e.request.variables, Some(team_variables()));
        }
        other => panic!("Expected LinearError::Client, got {:?}", other),
    }
    assert!(err.to_string().starts_with("Entity not found: "));
}

#[tokio::test]
async fn test_http_status_without_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "data": { "ok": true } })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.request("query { ok }", None).await.unwrap_err();

    match err {
        LinearError::Client(ref e) => {
            assert_eq!(e.status(), 404);
            assert_eq!(e.request.variables, None);
        }
        other => panic!("Expected LinearError::Client, got {:?}", other),
    }
    assert!(err.to_string().starts_with("GraphQL Error (Code: 404): "));
}

#[tokio::test]
async fn test_non_json_body_is_kept_as_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.request("query { ok }", None).await.unwrap_err();

    match err {
        LinearError::Client(e) => {
            assert_eq!(e.status(), 502);
            assert_eq!(e.response.extra.get("error"), Some(&json!("Bad Gateway")));
            assert_eq!(e.message(), "GraphQL Error (Code: 502)");
        }
        other => panic!("Expected LinearError::Client, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_data_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.request("query { ok }", None).await.unwrap_err();

    assert!(matches!(err, LinearError::Client(ref e) if e.status() == 200));
}

#[tokio::test]
async fn test_request_as_reports_shape_mismatch() {
    #[derive(Debug, serde::Deserialize)]
    struct Viewer {
        #[allow(dead_code)]
        viewer: String,
    }

    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "viewer": { "id": "U1" } } })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.request_as::<Viewer>("query { viewer { id } }", None).await.unwrap_err();

    assert!(matches!(err, LinearError::JsonError(_)));
}

#[tokio::test]
async fn test_network_failure_passes_through() {
    // Nothing listens on port 1.
    let client = LinearClient::with_endpoint(API_KEY, "http://127.0.0.1:1/graphql");
    let err = client.request("query { ok }", None).await.unwrap_err();

    assert!(matches!(err, LinearError::RequestError(_)));
}
