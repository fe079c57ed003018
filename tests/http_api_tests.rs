use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use agroterms::{build_router, ChatClient, Container, DomainError, ExtractTermsUseCase};

struct CannedChatClient {
    reply: &'static str,
}

#[async_trait]
impl ChatClient for CannedChatClient {
    async fn complete(&self, _system: &str, _user: &str) -> Result<String, DomainError> {
        Ok(self.reply.to_string())
    }
}

struct FailingChatClient;

#[async_trait]
impl ChatClient for FailingChatClient {
    async fn complete(&self, _system: &str, _user: &str) -> Result<String, DomainError> {
        Err(DomainError::completion("network unreachable"))
    }
}

fn router_with_reply(reply: &'static str) -> axum::Router {
    let use_case = ExtractTermsUseCase::new(Arc::new(CannedChatClient { reply }));
    build_router(Arc::new(Container::new(use_case)))
}

fn post_query(query: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/process-query")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "query": query }).to_string()))
        .expect("request")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("JSON body")
}

#[tokio::test]
async fn liveness_endpoint_returns_fixed_message() {
    let router = router_with_reply("{}");

    let response = router
        .oneshot(Request::builder().uri("/").body(Body::empty()).expect("request"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, json!({ "message": "NLP Microservice is running!" }));
}

#[tokio::test]
async fn process_query_returns_extracted_terms() {
    let router = router_with_reply(
        r#"{"english_product": "potato", "english_attributes": ["5kg", "organic"], "french_product": "pomme de terre", "french_attributes": ["5kg", "bio"]}"#,
    );

    let response = router
        .oneshot(post_query("pomee de terra 5kg bio"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({
            "original_query": "pomee de terra 5kg bio",
            "search_terms": {
                "english_product": "potato",
                "english_attributes": ["5kg", "organic"],
                "french_product": "pomme de terre",
                "french_attributes": ["5kg", "bio"]
            }
        })
    );
}

#[tokio::test]
async fn disabled_extraction_omits_search_terms() {
    let router = build_router(Arc::new(Container::new(ExtractTermsUseCase::disabled())));

    let response = router.oneshot(post_query("anything")).await.expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["original_query"], "anything");
    assert!(body.get("search_terms").is_none());
}

#[tokio::test]
async fn failing_completion_still_answers_200() {
    let use_case = ExtractTermsUseCase::new(Arc::new(FailingChatClient));
    let router = build_router(Arc::new(Container::new(use_case)));

    let response = router
        .oneshot(post_query("organic apples 1kg"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["original_query"], "organic apples 1kg");
    assert!(body.get("search_terms").is_none());
}

#[tokio::test]
async fn non_json_model_reply_omits_search_terms() {
    let router = router_with_reply("I'm sorry, I cannot help with that.");

    let response = router.oneshot(post_query("thé vert")).await.expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["original_query"], "thé vert");
    assert!(body.get("search_terms").is_none());
}

#[tokio::test]
async fn empty_query_is_echoed_verbatim() {
    let router = router_with_reply(
        r#"{"english_product": "N/A", "english_attributes": [], "french_product": "N/A", "french_attributes": []}"#,
    );

    let response = router.oneshot(post_query("")).await.expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["original_query"], "");
    // "N/A" is not the error marker, so the terms are still present.
    assert_eq!(body["search_terms"]["english_product"], "N/A");
}

#[tokio::test]
async fn body_without_query_field_is_rejected_by_the_contract() {
    let router = router_with_reply("{}");

    let request = Request::builder()
        .method("POST")
        .uri("/process-query")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"text": "missing the query field"}"#))
        .expect("request");

    let response = router.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
