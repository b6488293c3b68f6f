use crate::i18n::Locale;

/// 去掉答案开头的开场白行
///
/// 只检查第一行：其小写形式包含任一开场白标记（含任意位置的冒号）时删除该行，
/// 其余行按 `\n` 重新拼接。单行答案被删除后得到空字符串。
pub fn remove_filler_intro(answer: &str, locale: &Locale) -> String {
    let mut lines = answer.split('\n');
    let first_line = lines.next().unwrap_or_default().to_lowercase();

    if locale
        .filler_markers()
        .iter()
        .any(|marker| first_line.contains(marker))
    {
        lines.collect::<Vec<_>>().join("\n")
    } else {
        answer.to_string()
    }
}
