//! Interpretation generator.
//!
//! Builds the reading prompt, calls the text-generation backend once, and
//! applies the response-quality gate. Upstream failures are folded into
//! `GenerationError`.

use std::sync::Arc;
use tarot_shared::{Card, Category, GenerationError, Orientation};
use tracing::{debug, warn};

use crate::llm_client::{GenerationParams, TextGenerator, UpstreamError, UpstreamErrorKind};

/// Floor on the trimmed interpretation length. Lower than the prompt's
/// 300-character target; catches truncated or degenerate output.
pub const MIN_INTERPRETATION_LENGTH: usize = 100;

/// Length the prompt asks the model for
pub const TARGET_LENGTH_MIN: usize = 300;
pub const TARGET_LENGTH_MAX: usize = 500;

const RATE_LIMIT_MARKERS: &[&str] = &[
    "quota",
    "rate limit",
    "rate-limit",
    "rate_limit",
    "ratelimit",
    "too many requests",
    "resource_exhausted",
];

const TIMEOUT_MARKERS: &[&str] = &["timeout", "timed out", "deadline"];

/// Build the interpretation prompt
pub fn build_prompt(
    card: &Card,
    orientation: Orientation,
    category: Category,
    concern: &str,
) -> String {
    let meaning = match orientation {
        Orientation::Upright => card.meaning_upright,
        Orientation::Reversed => card.meaning_reversed,
    };

    format!(
        "당신은 따뜻하고 공감 능력이 뛰어난 타로 상담사입니다.

[뽑힌 카드 정보]
- 카드: {name}
- 방향: {orientation}
- 기본 의미: {meaning}
- 키워드: {keywords}

[사용자 고민]
- 분야: {category}
- 내용: {concern}

[해석 지침]
1. 카드의 기본 의미를 바탕으로 사용자의 구체적인 고민에 맞춤형 해석을 제공하세요.
2. 단정적인 표현(\"~해야 합니다\", \"~입니다\")을 피하고 제안형 표현(\"~해보는 건 어떨까요?\", \"~일 수 있어요\")을 사용하세요.
3. 공감과 위로의 톤을 유지하면서도 실질적인 조언을 담아주세요.
4. 반드시 {min}자 이상 {max}자 이하로 작성하세요. 이것은 필수 조건입니다.
5. 불필요한 인사말이나 마무리 인사 없이 바로 해석 내용만 작성하세요.

해석:",
        name = card.name,
        orientation = orientation.label(),
        meaning = meaning,
        keywords = card.keywords.join(", "),
        category = category.prompt_label(),
        concern = concern,
        min = TARGET_LENGTH_MIN,
        max = TARGET_LENGTH_MAX,
    )
}

/// Apply the quality gate and return the trimmed text
pub fn check_response(raw: &str) -> Result<String, GenerationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(GenerationError::EmptyResponse);
    }

    let length = trimmed.chars().count();
    if length < MIN_INTERPRETATION_LENGTH {
        return Err(GenerationError::TooShort { length });
    }

    Ok(trimmed.to_string())
}

/// Fold an upstream failure into the generator taxonomy.
///
/// A structured kind from the client wins. Message matching is only the
/// fallback for clients that cannot classify their own errors.
pub fn classify_upstream(err: &UpstreamError) -> GenerationError {
    match err.kind {
        Some(UpstreamErrorKind::RateLimited) => return GenerationError::RateLimited,
        Some(UpstreamErrorKind::Timeout) => return GenerationError::Timeout,
        Some(UpstreamErrorKind::Api) => return GenerationError::UpstreamApi(err.message.clone()),
        None => {}
    }

    let message = err.message.to_lowercase();
    if message.trim().is_empty() {
        return GenerationError::Unknown;
    }
    if RATE_LIMIT_MARKERS.iter().any(|m| message.contains(m)) {
        return GenerationError::RateLimited;
    }
    if TIMEOUT_MARKERS.iter().any(|m| message.contains(m)) {
        return GenerationError::Timeout;
    }
    GenerationError::UpstreamApi(err.message.clone())
}

/// Prompt builder plus quality gate over a text-generation backend
#[derive(Clone)]
pub struct InterpretationGenerator {
    client: Arc<dyn TextGenerator>,
    params: GenerationParams,
}

impl InterpretationGenerator {
    pub fn new(client: Arc<dyn TextGenerator>, params: GenerationParams) -> Self {
        Self { client, params }
    }

    pub fn model(&self) -> &str {
        self.client.model()
    }

    /// Generate an interpretation. One outbound call, no retries.
    pub async fn generate(
        &self,
        card: &Card,
        orientation: Orientation,
        category: Category,
        concern: &str,
    ) -> Result<String, GenerationError> {
        let prompt = build_prompt(card, orientation, category, concern);
        debug!(
            "Requesting interpretation: model={} card={} prompt_chars={}",
            self.client.model(),
            card.id,
            prompt.chars().count()
        );

        let raw = match self.client.generate(&prompt, &self.params).await {
            Ok(raw) => raw,
            Err(e) => {
                let classified = classify_upstream(&e);
                warn!(
                    "Text generation failed: card={} code={} upstream={}",
                    card.id,
                    classified.code(),
                    e
                );
                return Err(classified);
            }
        };

        check_response(&raw).map_err(|e| {
            warn!(
                "Interpretation rejected: card={} chars={} reason={}",
                card.id,
                raw.trim().chars().count(),
                e
            );
            e
        })
    }
}
