use crate::config::{Config, ConfigError};
use clap::Parser;
use std::path::PathBuf;

/// ChatGPT Crawler - 批量向大模型提问，并将问答整理成 Word 文档
#[derive(Parser, Debug)]
#[command(name = "qa-crawler")]
#[command(
    about = "Ask a chat-completion model every question in a .txt file and collect the answers into a .docx document."
)]
#[command(version)]
pub struct Args {
    /// 配置文件路径（JSON，包含 OPENAI_API_KEY_CREATE）
    #[arg(short, long)]
    pub config: PathBuf,

    /// 问题列表文件路径（.txt，每行一个问题）
    #[arg(short, long)]
    pub file: PathBuf,

    /// 输出文档路径（.docx）
    #[arg(short, long)]
    pub output: PathBuf,
}

impl Args {
    /// 加载 `--config` 指向的配置文件
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        Config::from_file(&self.config)
    }
}
