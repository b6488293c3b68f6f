use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 界面与文档使用的语言
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub enum Locale {
    #[serde(rename = "vi")]
    #[default]
    Vietnamese,
    #[serde(rename = "en")]
    English,
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::Vietnamese => write!(f, "vi"),
            Locale::English => write!(f, "en"),
        }
    }
}

impl Locale {
    /// 发给模型的系统消息
    pub fn system_prompt(&self) -> &'static str {
        match self {
            Locale::Vietnamese => "Bạn là một trợ lý hữu ích.",
            Locale::English => "You are a helpful assistant.",
        }
    }

    /// 问题段落的加粗标签
    pub fn question_label(&self) -> &'static str {
        match self {
            Locale::Vietnamese => "Câu hỏi: ",
            Locale::English => "Question: ",
        }
    }

    /// 答案段落的加粗标签
    pub fn answer_label(&self) -> &'static str {
        match self {
            Locale::Vietnamese => "Câu trả lời: ",
            Locale::English => "Answer: ",
        }
    }

    /// 开场白标记：答案首行（小写后）包含其中任意一个即视为开场白
    ///
    /// 冒号在所有语言下都算标记，且出现在首行任意位置都会命中。
    pub fn filler_markers(&self) -> &'static [&'static str] {
        match self {
            Locale::Vietnamese => &["tóm tắt", "dưới đây", "sau đây", ":"],
            Locale::English => &["summary", "below", "as follows", ":"],
        }
    }

    pub fn fetching_answer(&self) -> &'static str {
        match self {
            Locale::Vietnamese => "+ Lấy thông tin câu trả lời...",
            Locale::English => "+ Fetching the answer...",
        }
    }

    pub fn rate_limit_notice(&self, delay: Duration) -> String {
        let seconds = delay.as_secs_f64();
        match self {
            Locale::Vietnamese => format!(
                "Rate limit quá giới hạn. thử lại sau {} giây...",
                seconds
            ),
            Locale::English => format!("Rate limit exceeded. Retrying in {} seconds...", seconds),
        }
    }

    pub fn success(&self) -> &'static str {
        match self {
            Locale::Vietnamese => "Success: Crawl thông tin thành công!",
            Locale::English => "Success: all answers were collected!",
        }
    }

    pub fn document_saved(&self, path: &std::path::Path) -> String {
        match self {
            Locale::Vietnamese => format!("💾 Đã lưu tài liệu: {}", path.display()),
            Locale::English => format!("💾 Document saved: {}", path.display()),
        }
    }

    pub fn invalid_file_format(&self) -> &'static str {
        match self {
            Locale::Vietnamese => "Error: Sai định dạng file input hoặc output",
            Locale::English => "Error: Wrong input or output file format",
        }
    }

    pub fn file_not_found(&self, path: &std::path::Path) -> String {
        match self {
            Locale::Vietnamese => {
                format!("Error: Không có file {} trong thư mục", path.display())
            }
            Locale::English => format!("Error: File {} does not exist", path.display()),
        }
    }

    pub fn config_error(&self, detail: &str) -> String {
        match self {
            Locale::Vietnamese => format!("Error: Không đọc được file cấu hình: {}", detail),
            Locale::English => format!("Error: Cannot load the config file: {}", detail),
        }
    }

    /// `retry_after` 为第二次限流时服务端建议的等待时间
    pub fn still_rate_limited(&self, retry_after: Option<Duration>) -> String {
        let message = match self {
            Locale::Vietnamese => "Error: Vẫn bị giới hạn rate limit sau khi thử lại",
            Locale::English => "Error: Still rate limited after retrying",
        };
        match (self, retry_after) {
            (_, None) => message.to_string(),
            (Locale::Vietnamese, Some(delay)) => format!(
                "{} (máy chủ đề nghị chờ {} giây)",
                message,
                delay.as_secs_f64()
            ),
            (Locale::English, Some(delay)) => format!(
                "{} (provider suggests waiting {} seconds)",
                message,
                delay.as_secs_f64()
            ),
        }
    }

    /// 兜底的错误提示
    pub fn unexpected_error(&self, detail: &str) -> String {
        match self {
            Locale::Vietnamese => format!("Có lỗi xảy ra: {}", detail),
            Locale::English => format!("An error occurred: {}", detail),
        }
    }

    pub fn interrupted(&self) -> &'static str {
        match self {
            Locale::Vietnamese => "Lỗi xảy ra khi cố thoát chương trình, vui lòng chạy lại",
            Locale::English => "The program was interrupted, please run it again",
        }
    }
}
