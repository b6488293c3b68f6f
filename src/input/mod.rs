//! 问题列表读取

use std::path::{Path, PathBuf};
use tracing::debug;

/// 问题列表文件必须使用的扩展名
pub const INPUT_EXTENSION: &str = "txt";
/// 输出文档必须使用的扩展名
pub const OUTPUT_EXTENSION: &str = "docx";

/// 输入校验与读取错误
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("input must be a .txt file and output a .docx file (got {input:?} and {output:?})")]
    InvalidFormat { input: PathBuf, output: PathBuf },

    #[error("input file {path:?} does not exist")]
    NotFound { path: PathBuf },

    #[error("failed to read input file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// 检查输入/输出路径的扩展名
///
/// 只比较最后一个扩展名，大小写敏感。
pub fn validate_paths(input: &Path, output: &Path) -> Result<(), InputError> {
    if has_extension(input, INPUT_EXTENSION) && has_extension(output, OUTPUT_EXTENSION) {
        Ok(())
    } else {
        Err(InputError::InvalidFormat {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
        })
    }
}

fn has_extension(path: &Path, expected: &str) -> bool {
    path.extension().is_some_and(|ext| ext == expected)
}

/// 校验路径后读取问题列表
///
/// 每行去掉首尾空白后即为一个问题；空行同样保留为空问题。
pub fn read_questions(input: &Path, output: &Path) -> Result<Vec<String>, InputError> {
    validate_paths(input, output)?;

    let content = std::fs::read_to_string(input).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            InputError::NotFound {
                path: input.to_path_buf(),
            }
        } else {
            InputError::Read {
                path: input.to_path_buf(),
                source,
            }
        }
    })?;

    let questions = parse_questions(&content);
    debug!("read {} questions from {}", questions.len(), input.display());
    Ok(questions)
}

/// 按行拆分并去除首尾空白
pub fn parse_questions(content: &str) -> Vec<String> {
    content.lines().map(|line| line.trim().to_string()).collect()
}
