//! HTTP surface tests.
//!
//! Exercises the full axum router with `oneshot`, checking status codes and
//! JSON bodies for each pipeline outcome.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tarot_shared::CardCatalog;
use tarotd::llm_client::{UpstreamError, UpstreamErrorKind};
use tarotd::{
    build_router, AppState, FakeTextGenerator, GenerationParams, InterpretationGenerator,
    MemoryReadingStore, ReadingPipeline,
};
use tower::ServiceExt;

const BODY_LIMIT: usize = 16 * 1024;

fn interpretation() -> String {
    "카드는 지금의 망설임이 새로운 출발을 준비하는 과정이라고 이야기하고 있어요. ".repeat(5)
}

fn router_with(fake: FakeTextGenerator, store: Arc<MemoryReadingStore>) -> Router {
    let generator = InterpretationGenerator::new(Arc::new(fake), GenerationParams::default());
    let pipeline = ReadingPipeline::new(CardCatalog::standard(), generator, store);
    build_router(AppState::new(pipeline), BODY_LIMIT)
}

fn ok_router() -> Router {
    router_with(
        FakeTextGenerator::always(interpretation()),
        Arc::new(MemoryReadingStore::new()),
    )
}

fn post_json(body: String) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/reading")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_post_creates_reading() {
    let (status, body) = send(
        ok_router(),
        post_json(
            json!({"category": "career", "concern": "이직을 해야 할지 고민이에요. 성장이 멈춘 느낌입니다."})
                .to_string(),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(body["card"]["id"].is_string());
    assert!(body["card"]["imageUrl"]
        .as_str()
        .is_some_and(|u| u.starts_with("/cards/")));
    assert!(body["card"]["meaningUpright"].is_string());
    assert!(["upright", "reversed"].contains(&body["orientation"].as_str().unwrap()));
    assert!(body["interpretation"].as_str().unwrap().chars().count() >= 100);
    // Creation response does not echo the request
    assert!(body.get("concern").is_none());
}

#[tokio::test]
async fn test_post_then_get_round_trip() {
    let store = Arc::new(MemoryReadingStore::new());
    let app = router_with(FakeTextGenerator::always(interpretation()), store);

    let (status, created) = send(
        app.clone(),
        post_json(json!({"category": "love", "concern": "그 사람의 마음이 궁금해요 알려주세요"}).to_string()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap();

    let (status, fetched) = send(app, get(&format!("/api/reading?id={}", id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["card"], created["card"]);
    assert_eq!(fetched["interpretation"], created["interpretation"]);
    assert_eq!(fetched["category"], "love");
    assert_eq!(fetched["concern"], "그 사람의 마음이 궁금해요 알려주세요");
    assert!(fetched["createdAt"].is_string());
}

#[tokio::test]
async fn test_validation_failures_are_400() {
    let cases = [
        json!({"concern": "카테고리 없이 보낸 고민입니다"}),
        json!({"category": "health", "concern": "지원하지 않는 카테고리의 고민"}),
        json!({"category": "love"}),
        json!({"category": "love", "concern": "짧아요"}),
        json!({"category": "love", "concern": "가".repeat(501)}),
    ];

    for case in cases {
        let (status, body) = send(ok_router(), post_json(case.to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", case);
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn test_malformed_json_is_400() {
    let (status, body) = send(ok_router(), post_json("{not json".to_string())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "잘못된 요청 형식입니다.");
}

#[tokio::test]
async fn test_post_without_content_type_is_accepted() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/reading")
        .body(Body::from(
            json!({"category": "love", "concern": "직장 동료와의 관계가 너무 힘들어요 어떻게 해야 할지 모르겠어요"})
                .to_string(),
        ))
        .unwrap();

    let (status, body) = send(ok_router(), request).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].is_string());
}

#[tokio::test]
async fn test_empty_body_is_400() {
    let (status, body) = send(ok_router(), post_json(String::new())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "잘못된 요청 형식입니다.");
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let concern = "가".repeat(BODY_LIMIT);
    let body = json!({"category": "love", "concern": concern}).to_string();
    let (status, _) = send(ok_router(), post_json(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_rate_limit_is_429() {
    let app = router_with(
        FakeTextGenerator::always_error(UpstreamError::new(
            UpstreamErrorKind::RateLimited,
            "HTTP 429 from Gemini",
        )),
        Arc::new(MemoryReadingStore::new()),
    );

    let (status, body) = send(
        app,
        post_json(json!({"category": "finance", "concern": "이번 달 지출이 너무 많아 걱정돼요"}).to_string()),
    )
    .await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_generation_and_storage_failures_are_500() {
    let timeout = router_with(
        FakeTextGenerator::always_error(UpstreamError::new(UpstreamErrorKind::Timeout, "slow")),
        Arc::new(MemoryReadingStore::new()),
    );
    let request = || {
        post_json(json!({"category": "etc", "concern": "요즘 모든 일이 귀찮고 의욕이 없어요"}).to_string())
    };
    let (status, _) = send(timeout, request()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let store = Arc::new(MemoryReadingStore::new());
    store.set_fail_writes(true);
    let failing = router_with(FakeTextGenerator::always(interpretation()), store);
    let (status, body) = send(failing, request()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body["error"].as_str().unwrap().contains("simulated"));
}

#[tokio::test]
async fn test_get_missing_or_unknown_id_is_404() {
    let (status, _) = send(ok_router(), get("/api/reading")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(ok_router(), get("/api/reading?id=does-not-exist")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "리딩을 찾을 수 없습니다.");
}

#[tokio::test]
async fn test_list_readings() {
    let app = ok_router();
    for category in ["love", "career"] {
        let (status, _) = send(
            app.clone(),
            post_json(json!({"category": category, "concern": "목록 조회용 고민 내용입니다"}).to_string()),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(app.clone(), get("/api/readings")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["readings"].as_array().unwrap().len(), 2);

    let (status, body) = send(app.clone(), get("/api/readings?category=love&limit=5")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["readings"].as_array().unwrap().len(), 1);
    assert_eq!(body["readings"][0]["category"], "love");

    let (status, _) = send(app, get("/api/readings?category=weather")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_cards_with_filters() {
    let (status, body) = send(ok_router(), get("/api/cards")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cards"].as_array().unwrap().len(), 78);

    let (_, body) = send(ok_router(), get("/api/cards?type=major")).await;
    assert_eq!(body["cards"].as_array().unwrap().len(), 22);

    let (_, body) = send(ok_router(), get("/api/cards?suit=cups")).await;
    let cups = body["cards"].as_array().unwrap();
    assert_eq!(cups.len(), 14);
    assert!(cups.iter().all(|c| c["suit"] == "cups"));

    let (status, _) = send(ok_router(), get("/api/cards?suit=coins")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(ok_router(), get("/api/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["cards"], 78);
    assert_eq!(body["store"], "memory");
    assert!(body["version"].is_string());
}
