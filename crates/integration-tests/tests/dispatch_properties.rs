//! Dispatch pipeline properties, checked against the full Ratings & Reviews table
//!
//! Every registered endpoint goes through resolve -> prepare -> send with a
//! mocked transport.

use serde_json::{json, Value};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use wrservices_core::application::sign;
use wrservices_core::port::time_provider::{FixedTimeProvider, TimeProvider};
use wrservices_core::port::transport::mocks::MockTransport;
use wrservices_core::{
    CallArgs, ClientConfig, ClientError, Framing, ServiceClient, ServiceError,
};
use wrservices_sdk::endpoints::{self, ENDPOINTS, SERVICE, VERSION};

const NOW: i64 = 1_262_304_000;

fn client(transport: &MockTransport) -> ServiceClient {
    ServiceClient::new(
        ClientConfig::new(SERVICE, VERSION, "", "x"),
        Arc::new(transport.clone()),
    )
    .with_registry(endpoints::registry())
    .with_time_provider(Arc::new(FixedTimeProvider(NOW)))
}

fn positional(count: usize) -> CallArgs {
    CallArgs::positional((0..count).map(|i| json!(i)).collect())
}

fn envelope(input_check: &str, processing_status: &str, result: Value) -> MockTransport {
    MockTransport::new_json(json!({
        "response": {
            "input_check": input_check,
            "processing_status": processing_status,
            "result": result,
        }
    }))
}

/// Clock that advances one second per reading
struct SteppingClock(AtomicI64);

impl TimeProvider for SteppingClock {
    fn now_secs(&self) -> i64 {
        self.0.fetch_add(1, Ordering::SeqCst)
    }
}

#[test]
fn test_exact_arity_succeeds_for_every_endpoint() {
    let transport = MockTransport::new_success(json!(null));
    let client = client(&transport);

    for (method, params) in ENDPOINTS {
        let result = client.resolve(method).unwrap().invoke(positional(params.len()));
        assert!(result.is_ok(), "{method}: {result:?}");
    }

    assert_eq!(transport.call_count(), ENDPOINTS.len());
}

#[test]
fn test_off_by_one_arity_fails_for_every_endpoint() {
    let transport = MockTransport::new_success(json!(null));
    let client = client(&transport);

    for (method, params) in ENDPOINTS {
        let expected = params.len();
        let mut counts = vec![expected + 1];
        if expected > 0 {
            counts.push(expected - 1);
        }

        for actual in counts {
            match client.call(method, positional(actual)) {
                Err(ClientError::ArgumentCountMismatch {
                    method: m,
                    expected: e,
                    actual: a,
                }) => {
                    assert_eq!(m, method);
                    assert_eq!(e, expected);
                    assert_eq!(a, actual);
                }
                other => panic!("{method} with {actual} args: {other:?}"),
            }
        }
    }

    assert_eq!(transport.call_count(), 0, "shape errors must not hit the wire");
}

#[test]
fn test_unregistered_methods_are_unknown() {
    let client = client(&MockTransport::new_success(json!(null)));

    for method in ["getEverything", "setrating", "", "SetRating", "deleteAll"] {
        assert!(
            matches!(client.resolve(method), Err(ClientError::UnknownMethod(ref m)) if m == method),
            "{method}"
        );
    }
}

#[test]
fn test_undeclared_named_argument() {
    let client = client(&MockTransport::new_success(json!(null)));

    let args = CallArgs::new()
        .named("entities", json!(["book:1"]))
        .named("limit", 10);

    match client.call(endpoints::GET_REVIEW_COUNT, args) {
        Err(ClientError::UnexpectedArgument { method, argument }) => {
            assert_eq!(method, "getReviewCount");
            assert_eq!(argument, "limit");
        }
        other => panic!("expected UnexpectedArgument, got {other:?}"),
    }
}

#[test]
fn test_framing_follows_method_prefix() {
    let client = client(&MockTransport::new_success(json!(null)));

    for (method, params) in ENDPOINTS {
        let request = client
            .resolve(method)
            .unwrap()
            .prepare(positional(params.len()))
            .unwrap();
        let base = format!("http://apps.lulu.com/services/ratereview/v1/{method}");

        match Framing::classify(method) {
            Framing::Mutating => {
                assert_eq!(request.framing, Framing::Mutating);
                assert_eq!(request.url, base, "{method}: empty query string");
                assert!(request.body.as_deref().unwrap().contains("sig="));
            }
            Framing::Read => {
                assert_eq!(request.framing, Framing::Read);
                assert!(request.body.is_none(), "{method}");
                assert!(request.url.starts_with(&format!("{base}?")), "{method}");
            }
        }

        assert_eq!(request.param("sig"), Some(sign("", "x", NOW)));
    }
}

#[test]
fn test_result_is_unwrapped() {
    let transport = envelope("passed", "success", json!(42));
    let result = client(&transport)
        .call(endpoints::DELETE_REVIEW_BY_ID, positional(1))
        .unwrap();

    assert_eq!(result, json!(42));
}

#[test]
fn test_failed_input_check_is_invalid_input() {
    let transport = envelope("failed", "success", Value::Null);
    let err = client(&transport)
        .call(endpoints::DELETE_REVIEW_BY_ID, positional(1))
        .unwrap_err();

    assert!(matches!(err, ClientError::InvalidInput(ref check) if check == "failed"));
    assert_eq!(err.input_check(), Some("failed"));
}

#[test]
fn test_failed_processing_status_is_service_error() {
    let transport = envelope("passed", "error: bad entity", Value::Null);
    let err = client(&transport)
        .call(endpoints::DELETE_REVIEW_BY_ID, positional(1))
        .unwrap_err();

    match err {
        ClientError::Service(ServiceError::ProcessingFailed(status)) => {
            assert_eq!(status, "error: bad entity")
        }
        other => panic!("expected ServiceError, got {other:?}"),
    }
}

#[test]
fn test_non_json_bytes_are_service_error() {
    let transport = MockTransport::new_raw(&b"\x00\x01 definitely not json"[..]);
    let err = client(&transport)
        .call(endpoints::DELETE_REVIEW_BY_ID, positional(1))
        .unwrap_err();

    assert!(err.is_service_error());
}

#[test]
fn test_signature_tracks_timestamp() {
    let transport = MockTransport::new_success(json!(null));
    let client = ServiceClient::new(
        ClientConfig::new(SERVICE, VERSION, "", "x"),
        Arc::new(transport.clone()),
    )
    .with_time_provider(Arc::new(SteppingClock(AtomicI64::new(NOW))));

    client.call("getAnything", CallArgs::new()).unwrap();
    client.call("getAnything", CallArgs::new()).unwrap();

    let sigs: Vec<String> = transport
        .requests()
        .iter()
        .map(|r| {
            let query = r.url.split_once('?').unwrap().1;
            form_urlencoded::parse(query.as_bytes())
                .find(|(k, _)| k == "sig")
                .unwrap()
                .1
                .into_owned()
        })
        .collect();

    assert_eq!(sigs[0], sign("", "x", NOW));
    assert_eq!(sigs[1], sign("", "x", NOW + 1));
    assert_ne!(sigs[0], sigs[1]);
}

#[test]
fn test_set_rating_concrete_request() {
    let transport = MockTransport::new_success(json!(true));
    let client = client(&transport);

    client
        .call(
            "setRating",
            CallArgs::new()
                .named("entity", "book:1")
                .named("userid", "u1")
                .named("rating", 5),
        )
        .unwrap();

    let sent = transport.last_request().unwrap();
    assert_eq!(sent.url, "http://apps.lulu.com/services/ratereview/v1/setRating");

    let body = sent.body.unwrap();
    let params: Vec<(String, String)> = form_urlencoded::parse(body.as_bytes())
        .into_owned()
        .collect();
    let get = |key: &str| {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    };

    assert_eq!(get("entity"), Some("\"book:1\""));
    assert_eq!(get("userid"), Some("\"u1\""));
    assert_eq!(get("rating"), Some("5"));
    assert_eq!(get("sig"), Some(sign("", "x", NOW).as_str()));
    assert_eq!(params.len(), 4);
}
