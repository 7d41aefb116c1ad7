use reqwest::Method;
use tutor_llm::{ChatCompletionRequest, ChatMessage, ClientError, ProviderClient};

fn client_for(server: &mockito::ServerGuard) -> ProviderClient {
    ProviderClient::with_base_url("test-key", server.url()).unwrap()
}

#[tokio::test]
async fn unsupported_method_fails_before_any_network_call() {
    // Deliberately unroutable endpoint: if the client tried to connect,
    // the error would be Transport, not UnsupportedMethod.
    let client = ProviderClient::with_base_url("test-key", "http://127.0.0.1:9").unwrap();
    let err = client
        .request(Method::DELETE, "/assistants", &[], None)
        .await
        .unwrap_err();
    match err {
        ClientError::UnsupportedMethod(m) => assert_eq!(m, "DELETE"),
        other => panic!("expected UnsupportedMethod, got {other:?}"),
    }
}

#[tokio::test]
async fn transport_failure_is_not_a_provider_error() {
    let client = ProviderClient::with_base_url("test-key", "http://127.0.0.1:9").unwrap();
    let err = client.get_assistant("asst_1").await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn auth_and_version_headers_are_attached() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/threads")
        .match_header("authorization", "Bearer test-key")
        .match_header("openai-beta", "assistants=v2")
        .with_status(200)
        .with_body(r#"{"id": "thread_abc"}"#)
        .create_async()
        .await;

    let thread = client_for(&server).create_thread().await.unwrap();
    assert_eq!(thread.id, "thread_abc");
    mock.assert_async().await;
}

#[tokio::test]
async fn non_2xx_with_envelope_becomes_provider_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/assistants/asst_1")
        .with_status(401)
        .with_body(r#"{"error":{"message":"invalid api key"}}"#)
        .create_async()
        .await;

    let err = client_for(&server).get_assistant("asst_1").await.unwrap_err();
    match err {
        ClientError::Provider { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "invalid api key");
        }
        other => panic!("expected Provider error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_2xx_without_envelope_gets_generic_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/threads")
        .with_status(500)
        .with_body("internal server error")
        .create_async()
        .await;

    let err = client_for(&server).create_thread().await.unwrap_err();
    match err {
        ClientError::Provider { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "unknown provider error");
        }
        other => panic!("expected Provider error, got {other:?}"),
    }
}

#[tokio::test]
async fn success_with_invalid_json_is_a_decode_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/threads")
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let err = client_for(&server).create_thread().await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn list_assistants_passes_order_and_limit() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/assistants")
        .match_query(mockito::Matcher::AllOf(vec![
            mockito::Matcher::UrlEncoded("order".into(), "desc".into()),
            mockito::Matcher::UrlEncoded("limit".into(), "100".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"data":[{"id":"asst_1","name":"Math tutor","model":"gpt-4o"}]}"#)
        .create_async()
        .await;

    let list = client_for(&server).list_assistants("desc", 100).await.unwrap();
    assert_eq!(list.data.len(), 1);
    assert_eq!(list.data[0].id, "asst_1");
    assert_eq!(list.data[0].name.as_deref(), Some("Math tutor"));
    mock.assert_async().await;
}

#[tokio::test]
async fn chat_completion_round_trip() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({
            "model": "gpt-3.5-turbo",
            "messages": [
                {"role": "system", "content": "You are helpful."},
                {"role": "user", "content": "Hello"}
            ],
        })))
        .with_status(200)
        .with_body(
            r#"{"id":"chatcmpl-1","choices":[{"message":{"role":"assistant","content":"Hi there!"}}]}"#,
        )
        .create_async()
        .await;

    let request = ChatCompletionRequest {
        model: "gpt-3.5-turbo".into(),
        messages: vec![ChatMessage::system("You are helpful."), ChatMessage::user("Hello")],
        temperature: 0.7,
        max_tokens: 500,
        top_p: 1.0,
        frequency_penalty: 0.0,
        presence_penalty: 0.0,
    };
    let response = client_for(&server).chat_completion(&request).await.unwrap();
    assert_eq!(
        response.choices[0].message.content.as_deref(),
        Some("Hi there!")
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn latest_messages_queries_newest_first() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/threads/thread_abc/messages")
        .match_query(mockito::Matcher::AllOf(vec![
            mockito::Matcher::UrlEncoded("order".into(), "desc".into()),
            mockito::Matcher::UrlEncoded("limit".into(), "1".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{"data":[{"role":"assistant","content":[{"type":"text","text":{"value":"42"}}]}]}"#,
        )
        .create_async()
        .await;

    let messages = client_for(&server).latest_messages("thread_abc", 1).await.unwrap();
    assert_eq!(messages.data[0].first_text(), Some("42"));
    mock.assert_async().await;
}

#[tokio::test]
async fn run_lifecycle_decodes_statuses() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/threads/thread_abc/runs")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({
            "assistant_id": "asst_1",
        })))
        .with_status(200)
        .with_body(r#"{"id":"run_1","status":"queued"}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/threads/thread_abc/runs/run_1")
        .with_status(200)
        .with_body(r#"{"id":"run_1","status":"completed"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let run = client.create_run("thread_abc", "asst_1").await.unwrap();
    assert!(!run.status.is_terminal());

    let run = client.get_run("thread_abc", "run_1").await.unwrap();
    assert!(run.status.is_terminal());
}
