use std::time::Duration;

use crate::config::ConfigError;
use crate::i18n::Locale;
use crate::input::InputError;
use crate::llm::client::LlmError;

/// 运行失败的种类，在 `main` 中统一匹配并输出对应提示
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),

    /// 重试后仍被限流
    #[error("still rate limited after retrying (retry after {retry_after:?})")]
    RateLimited { retry_after: Option<Duration> },

    #[error(transparent)]
    Provider(LlmError),

    #[error(transparent)]
    Document(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::RateLimited { retry_after } => AppError::RateLimited { retry_after },
            other => AppError::Provider(other),
        }
    }
}

impl AppError {
    /// 面向用户的本地化提示
    pub fn localized_message(&self, locale: &Locale) -> String {
        match self {
            AppError::Config(e) => locale.config_error(&e.to_string()),
            AppError::Input(InputError::InvalidFormat { .. }) => {
                locale.invalid_file_format().to_string()
            }
            AppError::Input(InputError::NotFound { path }) => locale.file_not_found(path),
            AppError::Input(e) => locale.unexpected_error(&e.to_string()),
            AppError::RateLimited { retry_after } => locale.still_rate_limited(*retry_after),
            AppError::Provider(e) => locale.unexpected_error(&e.to_string()),
            AppError::Document(e) => locale.unexpected_error(&format!("{:#}", e)),
        }
    }
}
