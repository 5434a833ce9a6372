use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};

use services::{ChatError, ChatMessage, ChatRelay};
use studyhub_core::model::ApiSettingsDraft;

/// Spawn a mock chat-completions endpoint on a random port and return its
/// base URL.
async fn spawn_mock(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind random port");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://127.0.0.1:{port}")
}

fn relay_for(base_url: String) -> ChatRelay {
    let settings = ApiSettingsDraft {
        api_key: Some("test-key".to_string()),
        base_url: Some(base_url),
        model: None,
    }
    .validate()
    .unwrap();
    ChatRelay::new(settings)
}

#[tokio::test]
async fn success_returns_the_first_choice_content() {
    let router = Router::new().route(
        "/chat/completions",
        post(|| async { Json(json!({"choices": [{"message": {"content": "hello"}}]})) }),
    );
    let relay = relay_for(spawn_mock(router).await);

    let answer = relay.ask(&[ChatMessage::user("hi")]).await.unwrap();
    assert_eq!(answer, "hello");
}

#[tokio::test]
async fn request_carries_bearer_auth_model_and_messages() {
    let router = Router::new().route(
        "/chat/completions",
        post(|headers: HeaderMap, Json(body): Json<Value>| async move {
            let auth = headers
                .get("authorization")
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default();
            if auth != "Bearer test-key" {
                return (StatusCode::UNAUTHORIZED, Json(json!({})));
            }
            let role = body["messages"][0]["role"].as_str().unwrap_or_default();
            let content = format!("{} via {role}", body["model"].as_str().unwrap_or_default());
            (
                StatusCode::OK,
                Json(json!({"choices": [{"message": {"content": content}}]})),
            )
        }),
    );
    let relay = relay_for(spawn_mock(router).await);

    let messages = [
        ChatMessage::system("be brief"),
        ChatMessage::user("what is ETL?"),
    ];
    let answer = relay.ask(&messages).await.unwrap();
    assert_eq!(answer, "deepseek-chat via system");
}

#[tokio::test]
async fn shape_mismatch_degrades_to_an_empty_answer() {
    let router = Router::new().route("/chat/completions", post(|| async { Json(json!({})) }));
    let relay = relay_for(spawn_mock(router).await);

    let answer = relay.ask(&[ChatMessage::user("hi")]).await.unwrap();
    assert_eq!(answer, "");
}

#[tokio::test]
async fn server_error_surfaces_status_and_body() {
    let router = Router::new().route(
        "/chat/completions",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "backend exploded") }),
    );
    let relay = relay_for(spawn_mock(router).await);

    let err = relay.ask(&[ChatMessage::user("hi")]).await.unwrap_err();
    match err {
        ChatError::Remote { status, body } => {
            assert_eq!(status.as_u16(), 500);
            assert!(body.contains("backend exploded"));
        }
        other => panic!("expected Remote, got {other:?}"),
    }
}

#[tokio::test]
async fn error_body_is_truncated_to_a_snippet() {
    let router = Router::new().route(
        "/chat/completions",
        post(|| async { (StatusCode::BAD_GATEWAY, "x".repeat(1000)) }),
    );
    let relay = relay_for(spawn_mock(router).await);

    let err = relay.ask(&[ChatMessage::user("hi")]).await.unwrap_err();
    match err {
        ChatError::Remote { status, body } => {
            assert_eq!(status.as_u16(), 502);
            assert_eq!(body.chars().count(), 300);
        }
        other => panic!("expected Remote, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_key_never_reaches_the_endpoint() {
    // The mock panics if it is ever hit.
    let router = Router::new().route(
        "/chat/completions",
        post(|| async {
            panic!("relay must not call out without a key");
            #[allow(unreachable_code)]
            ""
        }),
    );
    let base_url = spawn_mock(router).await;

    let settings = ApiSettingsDraft {
        base_url: Some(base_url),
        ..ApiSettingsDraft::new()
    }
    .validate()
    .unwrap();
    let relay = ChatRelay::new(settings);

    let err = relay.ask(&[ChatMessage::user("hi")]).await.unwrap_err();
    assert!(matches!(err, ChatError::MissingApiKey));
}

#[tokio::test]
async fn connection_refused_is_a_transport_error() {
    // Nothing listens on this port; binding then dropping guarantees that.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let relay = relay_for(format!("http://127.0.0.1:{port}"));
    let err = relay.ask(&[ChatMessage::user("hi")]).await.unwrap_err();
    assert!(matches!(err, ChatError::Transport(_)));
}
