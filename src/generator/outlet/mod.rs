use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

pub mod document;
pub mod docx;

pub use document::{Paragraph, QaDocument, Run};

/// 文档输出
pub trait Outlet {
    async fn save(&self, document: &QaDocument) -> Result<()>;
}

/// 将文档一次性写为 .docx 文件
pub struct DocxOutlet {
    output_path: PathBuf,
}

impl DocxOutlet {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }
}

impl Outlet for DocxOutlet {
    async fn save(&self, document: &QaDocument) -> Result<()> {
        // 先在内存中完成打包，失败时不会留下半个文件
        let bytes = docx::package(document, chrono::Utc::now())?;

        if let Some(parent_dir) = self.output_path.parent()
            && !parent_dir.as_os_str().is_empty()
            && !parent_dir.exists()
        {
            fs::create_dir_all(parent_dir)
                .with_context(|| format!("Failed to create output directory {:?}", parent_dir))?;
        }

        fs::write(&self.output_path, &bytes)
            .with_context(|| format!("Failed to write document {:?}", self.output_path))?;

        debug!(
            "wrote {} paragraphs ({} bytes) to {}",
            document.paragraphs().len(),
            bytes.len(),
            self.output_path.display()
        );
        Ok(())
    }
}
