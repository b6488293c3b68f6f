use qa_crawler::error::AppError;
use qa_crawler::generator::answer::AnswerGenerator;
use qa_crawler::generator::workflow::launch_with;
use qa_crawler::i18n::Locale;
use qa_crawler::llm::ChatClient;
use docx_rs::{DocumentChild, read_docx};
use serde_json::json;
use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn completion(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [
            {"index": 0, "message": {"role": "assistant", "content": content}, "finish_reason": "stop"}
        ]
    }))
}

fn document_xml(path: &Path) -> String {
    let bytes = fs::read(path).unwrap();
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut part = archive.by_name("word/document.xml").unwrap();
    let mut xml = String::new();
    part.read_to_string(&mut xml).unwrap();
    xml
}

fn empty_paragraph_count(path: &Path) -> usize {
    let docx = read_docx(&fs::read(path).unwrap()).unwrap();
    docx.document
        .children
        .iter()
        .filter(|child| matches!(child, DocumentChild::Paragraph(p) if p.children.is_empty()))
        .count()
}

#[tokio::test]
async fn test_end_to_end_document_generation() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("questions.txt");
    let output = temp_dir.path().join("answers.docx");
    fs::write(&input, "What is 2+2?\n  Name a color  \n").unwrap();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains("What is 2+2?"))
        .respond_with(completion("The answer is 4."))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains("Name a color"))
        .respond_with(completion("Here is one:\nBlue"))
        .expect(1)
        .mount(&server)
        .await;

    let generator = AnswerGenerator::new(
        ChatClient::with_base_url("sk-test", server.uri()),
        Locale::English,
    );
    launch_with(&generator, &Locale::English, &input, &output)
        .await
        .unwrap();

    let xml = document_xml(&output);
    let first = xml.find("What is 2+2?").unwrap();
    let second = xml.find("Name a color").unwrap();
    assert!(first < second);
    assert!(xml.contains(">The answer is 4.</w:t>"));
    assert!(xml.contains(">Blue</w:t>"));
    assert!(!xml.contains("Here is one"));
    assert_eq!(empty_paragraph_count(&output), 2);
}

#[tokio::test]
async fn test_end_to_end_retries_after_rate_limit() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("questions.txt");
    let output = temp_dir.path().join("answers.docx");
    fs::write(&input, "What is 2+2?\n").unwrap();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "0"))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(completion("4"))
        .mount(&server)
        .await;

    let generator = AnswerGenerator::new(
        ChatClient::with_base_url("sk-test", server.uri()),
        Locale::Vietnamese,
    );
    launch_with(&generator, &Locale::Vietnamese, &input, &output)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    let xml = document_xml(&output);
    assert!(xml.contains("Câu hỏi: "));
    assert!(xml.contains(">4</w:t>"));
}

#[tokio::test]
async fn test_end_to_end_provider_error_discards_document() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("questions.txt");
    let output = temp_dir.path().join("answers.docx");
    fs::write(&input, "first\nsecond\n").unwrap();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream failure"))
        .expect(1)
        .mount(&server)
        .await;

    let generator = AnswerGenerator::new(
        ChatClient::with_base_url("sk-test", server.uri()),
        Locale::English,
    );
    let err = launch_with(&generator, &Locale::English, &input, &output)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Provider(_)));
    assert!(err.localized_message(&Locale::English).contains("upstream failure"));
    assert!(!output.exists());
}
