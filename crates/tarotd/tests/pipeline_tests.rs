//! Reading pipeline tests.
//!
//! Drives create/get/list against the in-memory and SQLite stores and a scripted text
//! generator.

use std::sync::Arc;
use tarot_shared::{
    CardCatalog, Category, GenerationError, NewReading, Orientation, ReadingError,
    ValidationError,
};
use tarotd::llm_client::{UpstreamError, UpstreamErrorKind};
use tarotd::{
    FakeTextGenerator, GenerationParams, InterpretationGenerator, MemoryReadingStore,
    ReadingPipeline, ReadingStore, SqliteReadingStore,
};
use tempfile::TempDir;

const CONCERN: &str = "이직을 해야 할지 고민이에요. 현재 회사에 3년째 다니고 있는데 성장이 멈춘 느낌입니다.";

fn interpretation() -> String {
    "지금 느끼시는 정체감은 새로운 방향을 찾고 싶다는 마음의 신호일 수 있어요. ".repeat(6)
}

fn pipeline_with(
    fake: FakeTextGenerator,
) -> (ReadingPipeline, Arc<FakeTextGenerator>, Arc<MemoryReadingStore>) {
    let fake = Arc::new(fake);
    let store = Arc::new(MemoryReadingStore::new());
    let generator = InterpretationGenerator::new(fake.clone(), GenerationParams::default());
    let pipeline = ReadingPipeline::new(CardCatalog::standard(), generator, store.clone());
    (pipeline, fake, store)
}

#[tokio::test]
async fn test_create_then_fetch_career_reading() {
    let (pipeline, fake, store) = pipeline_with(FakeTextGenerator::always(interpretation()));

    let created = pipeline
        .create_reading(Some("career"), Some(CONCERN))
        .await
        .unwrap();

    assert!(!created.reading.id.is_empty());
    assert_eq!(created.reading.category, Category::Career);
    assert_eq!(created.reading.concern, CONCERN);
    assert_eq!(created.reading.card_id, created.card.id);
    assert!(created.reading.interpretation.chars().count() >= 100);
    assert_eq!(store.len(), 1);
    assert_eq!(fake.call_count(), 1);

    let prompt = fake.last_prompt().unwrap();
    assert!(prompt.contains("분야: 취업/이직"));
    assert!(prompt.contains(created.card.name));

    let fetched = pipeline.get_reading(&created.reading.id).await.unwrap();
    assert_eq!(fetched.reading, created.reading);
    assert_eq!(fetched.card.id, created.card.id);
}

#[tokio::test]
async fn test_love_reading_persists_through_sqlite() {
    let concern = "직장 동료와의 관계가 너무 힘들어요 어떻게 해야 할지 모르겠어요";
    let dir = TempDir::new().unwrap();
    let store = Arc::new(SqliteReadingStore::open(&dir.path().join("readings.db")).unwrap());
    let fake = Arc::new(FakeTextGenerator::always(interpretation()));
    let generator = InterpretationGenerator::new(fake.clone(), GenerationParams::default());
    let pipeline = ReadingPipeline::new(CardCatalog::standard(), generator, store);

    let created = pipeline
        .create_reading(Some("love"), Some(concern))
        .await
        .unwrap();
    assert_eq!(created.reading.category, Category::Love);
    assert_eq!(created.reading.concern, concern);
    assert!(fake.last_prompt().unwrap().contains("분야: 연애"));

    let fetched = pipeline.get_reading(&created.reading.id).await.unwrap();
    assert_eq!(fetched.reading, created.reading);
    assert_eq!(fetched.card.id, created.card.id);
    assert_eq!(fetched.reading.orientation, created.reading.orientation);
    assert_eq!(fetched.reading.interpretation, created.reading.interpretation);
    assert_eq!(fake.call_count(), 1);
}

#[tokio::test]
async fn test_fetch_is_idempotent_and_never_regenerates() {
    let (pipeline, fake, _store) = pipeline_with(FakeTextGenerator::always(interpretation()));
    let created = pipeline
        .create_reading(Some("love"), Some("그 사람이 저를 어떻게 생각하는지 궁금해요"))
        .await
        .unwrap();

    let first = pipeline.get_reading(&created.reading.id).await.unwrap();
    let second = pipeline.get_reading(&created.reading.id).await.unwrap();

    assert_eq!(first.reading, second.reading);
    assert_eq!(first.card.id, second.card.id);
    assert_eq!(fake.call_count(), 1);
}

#[tokio::test]
async fn test_concern_is_stored_sanitized() {
    let (pipeline, _fake, _store) = pipeline_with(FakeTextGenerator::always(interpretation()));
    let created = pipeline
        .create_reading(Some("etc"), Some("  <b>요즘 잠이 잘 안 와서</b> 걱정이에요  "))
        .await
        .unwrap();

    assert_eq!(created.reading.concern, "요즘 잠이 잘 안 와서 걱정이에요");
}

#[tokio::test]
async fn test_invalid_request_skips_generation() {
    let (pipeline, fake, store) = pipeline_with(FakeTextGenerator::always(interpretation()));

    let err = pipeline
        .create_reading(Some("health"), Some(CONCERN))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ReadingError::Validation(ValidationError::InvalidCategory { .. })
    ));
    assert_eq!(err.status_code(), 400);

    let err = pipeline
        .create_reading(Some("love"), Some("짧아요"))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ReadingError::Validation(ValidationError::ConcernTooShort { min: 10 })
    );

    assert_eq!(fake.call_count(), 0);
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_rate_limited_generation_persists_nothing() {
    let (pipeline, _fake, store) = pipeline_with(FakeTextGenerator::always_error(
        UpstreamError::new(UpstreamErrorKind::RateLimited, "HTTP 429 from Gemini"),
    ));

    let err = pipeline
        .create_reading(Some("finance"), Some("이번 달 지출이 너무 많아서 걱정됩니다"))
        .await
        .unwrap_err();

    assert_eq!(err, ReadingError::Generation(GenerationError::RateLimited));
    assert_eq!(err.status_code(), 429);
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_short_interpretation_persists_nothing() {
    let (pipeline, _fake, store) = pipeline_with(FakeTextGenerator::always("너무 짧은 해석"));

    let err = pipeline
        .create_reading(Some("relationship"), Some("친구와 다툰 뒤로 연락이 끊겼어요"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ReadingError::Generation(GenerationError::TooShort { .. })
    ));
    assert_eq!(err.status_code(), 500);
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_storage_failure_hides_detail() {
    let (pipeline, fake, store) = pipeline_with(FakeTextGenerator::always(interpretation()));
    store.set_fail_writes(true);

    let err = pipeline
        .create_reading(Some("career"), Some(CONCERN))
        .await
        .unwrap_err();

    assert!(matches!(err, ReadingError::Storage { operation: "insert", .. }));
    assert_eq!(err.status_code(), 500);
    assert!(!err.public_message().contains("simulated"));
    assert_eq!(fake.call_count(), 1);
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let (pipeline, _fake, _store) = pipeline_with(FakeTextGenerator::always(interpretation()));

    let err = pipeline
        .get_reading("00000000-0000-0000-0000-000000000000")
        .await
        .unwrap_err();
    assert!(matches!(err, ReadingError::NotFound { .. }));
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn test_reading_with_unknown_card_is_inconsistent() {
    let (pipeline, _fake, store) = pipeline_with(FakeTextGenerator::always(interpretation()));
    let stored = store
        .insert(NewReading {
            category: Category::Love,
            concern: "카드가 사라진 리딩입니다 확인해주세요".to_string(),
            card_id: "major-99".to_string(),
            orientation: Orientation::Upright,
            interpretation: interpretation(),
        })
        .await
        .unwrap();

    let err = pipeline.get_reading(&stored.id).await.unwrap_err();
    assert_eq!(
        err,
        ReadingError::CardDataInconsistent {
            card_id: "major-99".to_string()
        }
    );
    assert_eq!(err.status_code(), 500);
}

#[tokio::test]
async fn test_recent_readings_filter_and_limit() {
    let (pipeline, _fake, _store) = pipeline_with(FakeTextGenerator::always(interpretation()));
    for category in ["love", "career", "love", "finance", "love"] {
        pipeline
            .create_reading(Some(category), Some(CONCERN))
            .await
            .unwrap();
    }

    let all = pipeline.recent_readings(None, None).await.unwrap();
    assert_eq!(all.len(), 5);

    let love = pipeline.recent_readings(Some("love"), Some(2)).await.unwrap();
    assert_eq!(love.len(), 2);
    assert!(love.iter().all(|r| r.reading.category == Category::Love));

    let err = pipeline
        .recent_readings(Some("weather"), None)
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 400);
}
