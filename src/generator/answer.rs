//! 答案生成

use crate::generator::postprocess::remove_filler_intro;
use crate::i18n::Locale;
use crate::llm::client::{ChatClient, ChatMessage, ChatRequest, LlmError};
use tracing::debug;

/// 固定使用的模型
pub const MODEL_NAME: &str = "gpt-3.5-turbo";
/// 固定采样温度
pub const TEMPERATURE: f64 = 0.7;

/// 能为单个问题给出答案的来源
///
/// 编排层只依赖这个 trait，每次调用最多产生一次远程请求，重试由调用方负责。
pub trait AnswerSource {
    async fn answer(&self, question: &str) -> Result<String, LlmError>;
}

/// 基于 chat/completions 的答案生成器
pub struct AnswerGenerator {
    client: ChatClient,
    locale: Locale,
}

impl AnswerGenerator {
    pub fn new(client: ChatClient, locale: Locale) -> Self {
        Self { client, locale }
    }

    /// 构建两轮对话：固定的系统消息 + 原样的用户问题
    pub fn build_request(&self, question: &str) -> ChatRequest {
        ChatRequest {
            model: MODEL_NAME.to_string(),
            messages: vec![
                ChatMessage::system(self.locale.system_prompt()),
                ChatMessage::user(question),
            ],
            temperature: TEMPERATURE,
        }
    }
}

impl AnswerSource for AnswerGenerator {
    async fn answer(&self, question: &str) -> Result<String, LlmError> {
        let request = self.build_request(question);
        let raw = self.client.complete(&request).await?;
        let answer = remove_filler_intro(raw.trim(), &self.locale);
        debug!(
            "answer ready: {} chars (raw {})",
            answer.chars().count(),
            raw.chars().count()
        );
        Ok(answer)
    }
}
