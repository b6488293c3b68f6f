//! LLM客户端 - 对 OpenAI 兼容 chat/completions 接口的最小封装

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use std::time::Duration;
use tracing::{debug, warn};

mod error;
pub mod types;

pub use error::LlmError;
pub use types::{ChatMessage, ChatRequest, ChatResponse, Role};

/// 默认 API 基地址
pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// LLM客户端
///
/// 持有鉴权信息与一个复用的 HTTP 客户端，构造后不可变。
#[derive(Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl ChatClient {
    /// 使用默认基地址创建客户端
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, OPENAI_API_BASE)
    }

    /// 使用自定义基地址创建客户端
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 发送一次对话请求，返回第一个候选回复的原始文本
    pub async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError> {
        debug!(
            "calling {}/chat/completions, model: {}",
            self.base_url, request.model
        );

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = parse_retry_after(response.headers());
            warn!("provider rate limited the request, retry after {:?}", retry_after);
            return Err(LlmError::RateLimited { retry_after });
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: ChatResponse = response.json().await?;
        let choice = body.choices.into_iter().next().ok_or(LlmError::EmptyResponse)?;
        let content = choice.message.content.ok_or(LlmError::EmptyContent)?;

        debug!("completion received, {} chars", content.chars().count());
        Ok(content)
    }
}

/// 解析 `Retry-After` 头（秒数，允许小数）
///
/// HTTP 日期格式与非法值一律视为未提供。
pub fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    let value = headers.get(RETRY_AFTER)?.to_str().ok()?;
    let seconds = value.trim().parse::<f64>().ok()?;
    // 负数、NaN 以及超出 Duration 范围的值均返回 None
    Duration::try_from_secs_f64(seconds).ok()
}
