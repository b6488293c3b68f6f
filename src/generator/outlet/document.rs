use crate::i18n::Locale;

/// 段落中的一段文本
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub bold: bool,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

/// 文档段落，空段落用作问答之间的分隔
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    pub runs: Vec<Run>,
}

impl Paragraph {
    pub fn empty() -> Self {
        Self::default()
    }

    fn labeled(label: &str, text: &str) -> Self {
        Self {
            runs: vec![Run::bold(label), Run::plain(text)],
        }
    }
}

/// 内存中的问答文档，只追加
#[derive(Debug, Clone, Default)]
pub struct QaDocument {
    locale: Locale,
    paragraphs: Vec<Paragraph>,
}

impl QaDocument {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            paragraphs: Vec::new(),
        }
    }

    /// 追加一组问答：问题段落、答案段落、空行
    pub fn add_pair(&mut self, question: &str, answer: &str) {
        self.paragraphs
            .push(Paragraph::labeled(self.locale.question_label(), question));
        self.paragraphs
            .push(Paragraph::labeled(self.locale.answer_label(), answer));
        self.paragraphs.push(Paragraph::empty());
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }
}
