use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use weaver_client::{ApiRequest, Backend, ClientSettings, FailureKind, ReqwestBackend};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn backend_for(server: &MockServer) -> ReqwestBackend {
    ReqwestBackend::new(ClientSettings {
        base_url: server.uri(),
        ..ClientSettings::default()
    })
}

#[tokio::test]
async fn convert_posts_code_and_language() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/convert"))
        .and(body_json(json!({
            "code": "print('hi')",
            "targetLanguage": "python",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "convertedCode": "System.out.println(\"hi\");",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let output = backend
        .submit(&ApiRequest::Convert {
            code: "print('hi')".to_string(),
            target_language: "python".to_string(),
        })
        .await
        .expect("convert ok");

    assert_eq!(output.text, "System.out.println(\"hi\");");
}

#[tokio::test]
async fn debug_and_quality_check_use_their_endpoints() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/debug"))
        .and(body_json(json!({"code": "let x = ;"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"debuggedCode": "let x = 0;"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/quality-check"))
        .and(body_json(json!({"code": "let x = 0;"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"checkedCode": "looks fine"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let backend = backend_for(&server);

    let debugged = backend
        .submit(&ApiRequest::Debug {
            code: "let x = ;".to_string(),
        })
        .await
        .expect("debug ok");
    assert_eq!(debugged.text, "let x = 0;");

    let checked = backend
        .submit(&ApiRequest::QualityCheck {
            code: "let x = 0;".to_string(),
        })
        .await
        .expect("quality check ok");
    assert_eq!(checked.text, "looks fine");
}

#[tokio::test]
async fn extra_reply_fields_are_tolerated() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/debug"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "debuggedCode": "ok",
            "elapsedMs": 12,
        })))
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let output = backend
        .submit(&ApiRequest::Debug {
            code: "x".to_string(),
        })
        .await
        .expect("debug ok");
    assert_eq!(output.text, "ok");
}

#[tokio::test]
async fn non_success_status_maps_to_http_status_kind() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/convert"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let err = backend
        .submit(&ApiRequest::Convert {
            code: "x".to_string(),
            target_language: "java".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}

#[tokio::test]
async fn missing_expected_field_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/quality-check"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"verdict": "fine"})))
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let err = backend
        .submit(&ApiRequest::QualityCheck {
            code: "x".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::MalformedBody);
}

#[tokio::test]
async fn non_json_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/debug"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let err = backend
        .submit(&ApiRequest::Debug {
            code: "x".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::MalformedBody);
}

#[tokio::test]
async fn times_out_when_a_request_timeout_is_configured() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/debug"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({"debuggedCode": "slow"})),
        )
        .mount(&server)
        .await;

    let backend = ReqwestBackend::new(ClientSettings {
        base_url: server.uri(),
        request_timeout: Some(Duration::from_millis(50)),
        ..ClientSettings::default()
    });
    let err = backend
        .submit(&ApiRequest::Debug {
            code: "x".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn unparseable_base_url_fails_before_any_network_io() {
    let backend = ReqwestBackend::new(ClientSettings {
        base_url: "not a url".to_string(),
        ..ClientSettings::default()
    });
    let err = backend
        .submit(&ApiRequest::Debug {
            code: "x".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::InvalidBaseUrl);
}

#[tokio::test]
async fn trailing_slash_on_base_url_is_normalized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/debug"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"debuggedCode": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let backend = ReqwestBackend::new(ClientSettings {
        base_url: format!("{}/", server.uri()),
        ..ClientSettings::default()
    });
    let output = backend
        .submit(&ApiRequest::Debug {
            code: "x".to_string(),
        })
        .await
        .expect("debug ok");
    assert_eq!(output.text, "ok");
}
