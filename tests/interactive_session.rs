use insightflow::enums::ai_provider_error::AiProviderError;
use insightflow::enums::app_state::AppState;
use insightflow::enums::language::Language;
use insightflow::workers::interactive_session::InteractiveSession;
use crate::common::{analyzer, conforming_reply, FakeProvider};

#[tokio::test]
async fn typed_survey_is_analyzed_and_language_toggles_locally() {
    let provider = FakeProvider::new(vec![Ok(conforming_reply())]);
    let mut session = InteractiveSession::new(analyzer(&provider), Language::Korean, 60, Vec::new());

    let script = "배송이 너무 늦어요\ncheckout keeps failing\n:go\nl\nl\nq\n";
    session.run(script.as_bytes()).await.unwrap();

    assert_eq!(provider.calls(), 1);
    assert!(provider.prompts()[0].contains("배송이 너무 늦어요\ncheckout keeps failing"));
    assert!(matches!(session.state(), AppState::Success(_)));
    assert_eq!(session.language(), Language::Korean);

    let output = String::from_utf8(session.into_output()).unwrap();
    assert!(output.contains("1. 설문 요약 (Summary)"));
    assert!(output.contains("1. Survey Summary"));
    assert!(output.contains("en overview"));
    assert!(output.contains("ko overview"));
}

#[tokio::test]
async fn submit_without_text_stays_idle() {
    let provider = FakeProvider::new(vec![]);
    let mut session = InteractiveSession::new(analyzer(&provider), Language::English, 60, Vec::new());

    session.run("   \n:go\n:quit\n".as_bytes()).await.unwrap();

    assert_eq!(provider.calls(), 0);
    assert_eq!(session.state(), &AppState::Idle);
    let output = String::from_utf8(session.into_output()).unwrap();
    assert!(output.contains("Nothing to analyze yet"));
}

#[tokio::test]
async fn error_then_reset_starts_from_a_clean_slate() {
    let provider = FakeProvider::new(vec![Err(AiProviderError::NetworkError("offline".to_string()))]);
    let mut session = InteractiveSession::new(analyzer(&provider), Language::English, 60, Vec::new());

    session.run("slow app\n:go\nr\n".as_bytes()).await.unwrap();

    assert_eq!(session.state(), &AppState::Idle);
    assert_eq!(session.collector().text(), "");
    let output = String::from_utf8(session.into_output()).unwrap();
    assert!(output.contains("❌ Remote analysis failed: Network Error: offline"));
}

#[tokio::test]
async fn loaded_file_replaces_typed_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("survey.txt");
    std::fs::write(&path, "from the file").unwrap();

    let provider = FakeProvider::new(vec![]);
    let mut session = InteractiveSession::new(analyzer(&provider), Language::English, 60, Vec::new());

    let script = format!("typed first\n:file {}\n", path.display());
    session.run(script.as_bytes()).await.unwrap();

    assert_eq!(session.collector().text(), "from the file");
    assert_eq!(session.collector().file_name(), Some("survey.txt"));
}

#[tokio::test]
async fn single_letter_answers_are_survey_text_while_collecting() {
    let provider = FakeProvider::new(vec![Ok(conforming_reply())]);
    let mut session = InteractiveSession::new(analyzer(&provider), Language::English, 60, Vec::new());

    let script = "Q1 favourite size?\nl\nQ2 rating?\n?\nQ3 grade\nq\nr\nQ4 extra\n:go\n:quit\n";
    session.run(script.as_bytes()).await.unwrap();

    assert_eq!(provider.calls(), 1);
    assert!(provider.prompts()[0].contains("Q1 favourite size?\nl\nQ2 rating?\n?\nQ3 grade\nq\nr\nQ4 extra"));
    assert!(matches!(session.state(), AppState::Success(_)));
}
