//! Check request building and response normalization against the JSON
//! vectors in `test-vectors/`.
//!
//! Payloads are compared as parsed JSON, never as raw strings, so field
//! ordering does not matter.

use rh_client::{normalize_response, ApiClient, ClientConfig, HttpMethod, HttpResponse, RequestOptions};
use serde_json::Value;

fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

#[test]
fn normalize_test_vectors() {
    let raw = include_str!("../../test-vectors/normalize.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let sim = &case["response"];
        let response = HttpResponse::new(
            sim["status"].as_u64().unwrap() as u16,
            sim["body"].as_str().unwrap().to_string(),
        );
        let expected = &case["expected"];

        let result = normalize_response::<Value>(response);
        assert_eq!(
            result.status() as u64,
            expected["status"].as_u64().unwrap(),
            "{name}: status"
        );
        assert_eq!(
            result.is_success(),
            expected["success"].as_bool().unwrap(),
            "{name}: outcome"
        );

        if result.is_success() {
            let payload = result.payload().cloned().unwrap_or(Value::Null);
            assert_eq!(payload, expected["payload"], "{name}: payload");
            continue;
        }

        let error = result.error().unwrap();
        assert_eq!(
            format!("{:?}", error.kind()),
            expected["kind"].as_str().unwrap(),
            "{name}: kind"
        );
        if let Some(message) = expected["message"].as_str() {
            assert_eq!(error.to_string(), message, "{name}: message");
        }
    }
}

// ---------------------------------------------------------------------------
// Request building
// ---------------------------------------------------------------------------

#[test]
fn request_test_vectors() {
    let raw = include_str!("../../test-vectors/requests.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let client = ApiClient::new(ClientConfig::default());
        if let Some(token) = case["token"].as_str() {
            client.session().set_token(token);
        }

        let method = parse_method(case["method"].as_str().unwrap());
        let options = match &case["body"] {
            Value::Null => RequestOptions::new(method),
            body => RequestOptions::json(method, body).unwrap(),
        };
        let req = client.build_request(case["endpoint"].as_str().unwrap(), options);
        let expected = &case["expected"];

        assert_eq!(req.method, method, "{name}: method");
        assert_eq!(req.url, expected["url"].as_str().unwrap(), "{name}: url");

        let expected_headers: Vec<(String, String)> = expected["headers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let arr = h.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");

        match &case["body"] {
            Value::Null => assert!(req.body.is_none(), "{name}: body"),
            body => {
                let sent: Value =
                    serde_json::from_str(req.body.as_ref().and_then(|b| b.as_json()).unwrap()).unwrap();
                assert_eq!(&sent, body, "{name}: body");
            }
        }
    }
}
