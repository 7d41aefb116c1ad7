use std::sync::Arc;

use async_trait::async_trait;
use tutor_completion::gateway::DEFAULT_UNAVAILABLE_MESSAGE;
use tutor_completion::{
    CompletionError, CompletionGateway, CompletionMode, CompletionRequest, CompletionStrategy,
    GatewayConfig, HistoryEntry, Reply,
};
use tutor_persist::InMemoryThreadRepo;

struct FixedStrategy(Result<String, &'static str>);

#[async_trait]
impl CompletionStrategy for FixedStrategy {
    async fn complete(
        &self,
        _user_id: i64,
        _message: &str,
        _history: &[HistoryEntry],
    ) -> Result<Reply, CompletionError> {
        match &self.0 {
            Ok(text) => Ok(Reply { text: text.clone() }),
            Err(_) => Err(CompletionError::Timeout { attempts: 30 }),
        }
    }
}

fn request(message: &str) -> CompletionRequest {
    CompletionRequest { message: message.into(), history: Vec::new(), user_id: 1 }
}

#[tokio::test]
async fn successful_reply_passes_through() {
    let gateway = CompletionGateway::new(Box::new(FixedStrategy(Ok("Hi there!".into()))));
    let result = gateway.complete(&request("Hello")).await;
    assert!(result.success);
    assert_eq!(result.message, "Hi there!");
    assert!(result.error.is_none());
}

#[tokio::test]
async fn errors_become_failure_results_with_a_generic_message() {
    let gateway = CompletionGateway::new(Box::new(FixedStrategy(Err("boom"))));
    let result = gateway.complete(&request("Hello")).await;
    assert!(!result.success);
    assert_eq!(result.message, DEFAULT_UNAVAILABLE_MESSAGE);
    assert_eq!(result.error, Some("timeout"));
}

#[tokio::test]
async fn configured_unavailable_message_is_used_on_failure() {
    let gateway = CompletionGateway::new(Box::new(FixedStrategy(Err("boom"))))
        .with_unavailable_message("Custom outage text.");
    let result = gateway.complete(&request("Hello")).await;
    assert_eq!(result.message, "Custom outage text.");
}

#[test]
fn failure_result_serializes_the_error_kind() {
    let result = tutor_completion::CompletionResult::failed("unavailable", "provider");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "provider");
}

#[test]
fn success_result_omits_the_error_field() {
    let result = tutor_completion::CompletionResult::ok("Hi");
    let json = serde_json::to_value(&result).unwrap();
    assert!(json.get("error").is_none());
}

#[tokio::test]
async fn missing_credential_is_a_config_error() {
    let config = GatewayConfig::default();
    let err =
        CompletionGateway::from_config(&config, Arc::new(InMemoryThreadRepo::new())).unwrap_err();
    assert_eq!(err.kind(), "config");
}

#[tokio::test]
async fn assistant_mode_requires_an_assistant_id() {
    let config = GatewayConfig {
        mode: CompletionMode::Assistant,
        api_key: Some("sk-test".into()),
        ..GatewayConfig::default()
    };
    let err =
        CompletionGateway::from_config(&config, Arc::new(InMemoryThreadRepo::new())).unwrap_err();
    assert_eq!(err.kind(), "config");
}

#[tokio::test]
async fn direct_mode_builds_with_only_a_credential() {
    let config = GatewayConfig { api_key: Some("sk-test".into()), ..GatewayConfig::default() };
    assert!(CompletionGateway::from_config(&config, Arc::new(InMemoryThreadRepo::new())).is_ok());
}

#[tokio::test]
async fn empty_api_key_counts_as_missing() {
    let config = GatewayConfig { api_key: Some(String::new()), ..GatewayConfig::default() };
    assert!(CompletionGateway::from_config(&config, Arc::new(InMemoryThreadRepo::new())).is_err());
}
