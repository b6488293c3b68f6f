use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::i18n::Locale;

/// 配置文件中保存 API KEY 的固定字段名
pub const API_KEY_FIELD: &str = "OPENAI_API_KEY_CREATE";

/// 配置加载错误
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to open config file {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 应用程序配置
///
/// 从 JSON 文件加载，运行期间只读。凭证在构造 LLM 客户端时被移入客户端，
/// 不写入任何全局状态。
#[derive(Deserialize, Clone)]
pub struct Config {
    /// LLM API KEY
    #[serde(rename = "OPENAI_API_KEY_CREATE")]
    pub api_key: String,

    /// 控制台提示与文档标签使用的语言
    #[serde(default)]
    pub language: Locale,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("language", &self.language)
            .finish()
    }
}

impl Config {
    /// 从文件加载配置
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let mut file = File::open(path).map_err(|source| ConfigError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        Self::from_json(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// 从 JSON 文本解析配置，未知字段会被忽略
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}

// Include tests
#[cfg(test)]
mod tests;
