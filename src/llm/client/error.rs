use std::time::Duration;

/// LLM 调用错误
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// 服务端限流（HTTP 429），`retry_after` 为服务端建议的等待时间
    #[error("rate limited by provider (retry after {retry_after:?})")]
    RateLimited { retry_after: Option<Duration> },

    #[error("provider returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("completion returned no choices")]
    EmptyResponse,

    #[error("completion returned a choice without content")]
    EmptyContent,
}
