//! Error taxonomy for the reading pipeline.
//!
//! Display strings are user-facing (Korean) except where noted; the HTTP
//! boundary surfaces them verbatim, so internal detail goes in
//! `ReadingError::Storage` and is hidden by `public_message`.

use thiserror::Error;

pub const GENERIC_SERVER_ERROR: &str = "서버 오류가 발생했습니다. 잠시 후 다시 시도해주세요.";

/// Request validation failures. Never retried, no side effects.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{}", category_message(.provided))]
    InvalidCategory { provided: Option<String> },

    #[error("고민 내용을 입력해주세요.")]
    MissingConcern,

    #[error("고민 내용을 {min}자 이상 입력해주세요.")]
    ConcernTooShort { min: usize },

    #[error("고민 내용은 {max}자 이하로 입력해주세요.")]
    ConcernTooLong { max: usize },
}

fn category_message(provided: &Option<String>) -> &'static str {
    match provided {
        None => "카테고리를 선택해주세요.",
        Some(_) => "유효하지 않은 카테고리입니다.",
    }
}

/// Interpretation generator failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("API 요청 한도를 초과했습니다. 잠시 후 다시 시도해주세요.")]
    RateLimited,

    #[error("AI 응답 시간이 초과되었습니다. 다시 시도해주세요.")]
    Timeout,

    #[error("AI 해석 생성 실패: {0}")]
    UpstreamApi(String),

    #[error("빈 응답이 반환되었습니다.")]
    EmptyResponse,

    #[error("AI 해석이 너무 짧습니다. 다시 시도해주세요.")]
    TooShort { length: usize },

    #[error("알 수 없는 오류가 발생했습니다.")]
    Unknown,
}

impl GenerationError {
    /// Stable code for logs
    pub fn code(&self) -> &'static str {
        match self {
            GenerationError::RateLimited => "RATE_LIMIT",
            GenerationError::Timeout => "TIMEOUT",
            GenerationError::UpstreamApi(_)
            | GenerationError::EmptyResponse
            | GenerationError::TooShort { .. } => "API_ERROR",
            GenerationError::Unknown => "UNKNOWN",
        }
    }

    /// Only rate limiting is worth a caller-side retry after backoff
    pub fn is_retryable(&self) -> bool {
        matches!(self, GenerationError::RateLimited)
    }
}

/// Any failure surfaced by the reading pipeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("잘못된 요청 형식입니다.")]
    MalformedRequest,

    /// Internal detail; not shown to callers
    #[error("storage error during {operation}: {message}")]
    Storage {
        operation: &'static str,
        message: String,
    },

    #[error("리딩을 찾을 수 없습니다.")]
    NotFound { id: String },

    #[error("카드 정보를 찾을 수 없습니다: {card_id}")]
    CardDataInconsistent { card_id: String },
}

impl ReadingError {
    pub fn storage(operation: &'static str, err: impl std::fmt::Display) -> Self {
        ReadingError::Storage {
            operation,
            message: err.to_string(),
        }
    }

    /// HTTP status for this failure
    pub fn status_code(&self) -> u16 {
        match self {
            ReadingError::Validation(_) | ReadingError::MalformedRequest => 400,
            ReadingError::Generation(GenerationError::RateLimited) => 429,
            ReadingError::NotFound { .. } => 404,
            ReadingError::Generation(_)
            | ReadingError::Storage { .. }
            | ReadingError::CardDataInconsistent { .. } => 500,
        }
    }

    /// Message safe to return to callers
    pub fn public_message(&self) -> String {
        match self {
            ReadingError::Storage { .. } | ReadingError::CardDataInconsistent { .. } => {
                GENERIC_SERVER_ERROR.to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}
