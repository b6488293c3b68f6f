use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::AppError;
use crate::generator::answer::{AnswerGenerator, AnswerSource};
use crate::generator::outlet::{DocxOutlet, Outlet, QaDocument};
use crate::i18n::Locale;
use crate::input;
use crate::llm::client::{ChatClient, LlmError};

/// 服务端未给出建议等待时间时的默认值
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(30);

/// 启动问答抓取流程
///
/// 读取问题列表 → 逐个生成答案 → 一次性写出文档。
pub async fn launch(config: &Config, input_path: &Path, output_path: &Path) -> Result<(), AppError> {
    let client = ChatClient::new(config.api_key.clone());
    let generator = AnswerGenerator::new(client, config.language.clone());
    launch_with(&generator, &config.language, input_path, output_path).await
}

/// 使用给定答案来源执行完整流程
pub async fn launch_with<S: AnswerSource>(
    source: &S,
    locale: &Locale,
    input_path: &Path,
    output_path: &Path,
) -> Result<(), AppError> {
    let questions = input::read_questions(input_path, output_path)?;
    info!("loaded {} questions from {}", questions.len(), input_path.display());

    let document = collect_answers(source, locale, &questions).await?;

    DocxOutlet::new(output_path).save(&document).await?;
    println!("{}", locale.document_saved(output_path));

    Ok(())
}

/// 按顺序为每个问题生成答案并写入内存文档
///
/// 任何一个问题最终失败都会中止整个流程，已生成的内容随之丢弃。
pub async fn collect_answers<S: AnswerSource>(
    source: &S,
    locale: &Locale,
    questions: &[String],
) -> Result<QaDocument, AppError> {
    let mut document = QaDocument::new(locale.clone());

    for (index, question) in questions.iter().enumerate() {
        println!("{}{}", locale.question_label(), question);
        println!("{}", locale.fetching_answer());

        let answer = answer_with_retry(source, locale, question).await?;
        info!("question {}/{} answered", index + 1, questions.len());

        document.add_pair(question, &answer);
    }

    Ok(document)
}

/// 生成单个答案，限流时等待后重试一次
///
/// 等待时间取服务端建议值，否则为 [`DEFAULT_RETRY_DELAY`]；重试的结果原样返回。
pub async fn answer_with_retry<S: AnswerSource>(
    source: &S,
    locale: &Locale,
    question: &str,
) -> Result<String, AppError> {
    match source.answer(question).await {
        Ok(answer) => Ok(answer),
        Err(LlmError::RateLimited { retry_after }) => {
            let delay = retry_after.unwrap_or(DEFAULT_RETRY_DELAY);
            println!("{}", locale.rate_limit_notice(delay));
            warn!("rate limited, retrying once after {:?}", delay);

            tokio::time::sleep(delay).await;

            Ok(source.answer(question).await?)
        }
        Err(err) => Err(err.into()),
    }
}
