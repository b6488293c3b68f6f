//! 用 docx-rs 将问答文档打包为 .docx

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use docx_rs::{BreakType, Docx};
use std::io::Cursor;

use super::document::{Paragraph, QaDocument, Run};

/// 将文档打包为 .docx 字节流
pub fn package(document: &QaDocument, created: DateTime<Utc>) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    build(document, created)
        .build()
        .pack(&mut buffer)
        .context("Failed to pack docx document")?;
    Ok(buffer.into_inner())
}

/// 构建 docx-rs 文档树
pub fn build(document: &QaDocument, created: DateTime<Utc>) -> Docx {
    document
        .paragraphs()
        .iter()
        .fold(
            Docx::new().created_at(&created.format("%Y-%m-%dT%H:%M:%SZ").to_string()),
            |docx, paragraph| docx.add_paragraph(to_paragraph(paragraph)),
        )
}

fn to_paragraph(paragraph: &Paragraph) -> docx_rs::Paragraph {
    paragraph
        .runs
        .iter()
        .fold(docx_rs::Paragraph::new(), |p, run| p.add_run(to_run(run)))
}

/// 换行转为文本换行符，制表符转为 tab
fn to_run(run: &Run) -> docx_rs::Run {
    let mut out = docx_rs::Run::new();
    if run.bold {
        out = out.bold();
    }

    for (line_index, line) in run.text.split('\n').enumerate() {
        if line_index > 0 {
            out = out.add_break(BreakType::TextWrapping);
        }
        for (tab_index, segment) in line.split('\t').enumerate() {
            if tab_index > 0 {
                out = out.add_tab();
            }
            out = out.add_text(sanitize(segment));
        }
    }
    out
}

// XML 1.0 不允许控制字符（`\r` 也一并丢弃）
fn sanitize(text: &str) -> String {
    text.chars().filter(|c| !c.is_control()).collect()
}
