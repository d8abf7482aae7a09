// Writer tests against a scripted backend.

mod test_utils;

use scenewright_core::{Brief, DraftSource, ProjectContext, ScenePlan};
use scenewright_pipeline::{Planner, Writer, analyze, compose_fallback};
use test_utils::{MockGenerator, test_settings};

const LONG_REPLY: &str = "Ivana atravessou o saguão vazio do museu enquanto a chuva escorria pelas janelas. Dr. Manoel esperava junto ao vão livre.";

fn plan_for(brief: &Brief) -> ScenePlan {
    Planner::new().plan(brief)
}

#[tokio::test]
async fn test_model_draft_is_trimmed() {
    let mock = MockGenerator::replying(format!("\n\n  {}  \n", LONG_REPLY));
    let writer = Writer::connect(mock.clone(), test_settings()).await;
    assert!(!writer.is_fallback());

    let brief = Brief::from("Encontro no MASP.");
    let draft = writer
        .write(&brief, &plan_for(&brief), &ProjectContext::default())
        .await;

    assert_eq!(*draft.source(), DraftSource::Model);
    assert_eq!(draft.text(), LONG_REPLY);
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn test_request_carries_configured_parameters() {
    let mock = MockGenerator::replying(LONG_REPLY);
    let writer = Writer::connect(mock.clone(), test_settings()).await;

    let brief = Brief::from("Encontro no MASP.");
    let plan = plan_for(&brief);
    writer.write(&brief, &plan, &ProjectContext::default()).await;

    let requests = mock.requests();
    let request = requests.first().expect("one request");
    assert_eq!(*request.max_output_tokens(), 800);
    assert_eq!(*request.temperature(), 0.8);
    assert_eq!(*request.top_p(), 0.9);
    assert_eq!(*request.top_k(), 40);
    assert!(request.prompt().contains("BRIEF DA CENA:\nEncontro no MASP."));
    assert!(request.prompt().contains(plan.as_str()));
}

#[tokio::test]
async fn test_short_reply_falls_back_without_retry() {
    let mock = MockGenerator::replying("   0123456789   ");
    let writer = Writer::connect(mock.clone(), test_settings()).await;

    let brief = Brief::from("Uma cena de suspense em uma biblioteca antiga.");
    let draft = writer
        .write(&brief, &plan_for(&brief), &ProjectContext::default())
        .await;

    assert!(draft.is_fallback());
    assert_eq!(draft.text(), compose_fallback(&analyze(&brief)));
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn test_generation_error_falls_back() {
    let mock = MockGenerator::failing();
    let writer = Writer::connect(mock.clone(), test_settings()).await;

    let brief = Brief::from("Noite chuvosa no MASP.");
    let draft = writer
        .write(&brief, &plan_for(&brief), &ProjectContext::default())
        .await;

    assert!(draft.is_fallback());
    assert!(draft.text().starts_with("A chuva tamborilava contra as grandes janelas do MASP"));
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn test_unavailable_backend_is_never_called() {
    let mock = MockGenerator::unavailable();
    let writer = Writer::connect(mock.clone(), test_settings()).await;
    assert!(writer.is_fallback());

    let brief = Brief::from("Pai e filha no café.");
    for _ in 0..3 {
        let draft = writer
            .write(&brief, &plan_for(&brief), &ProjectContext::default())
            .await;
        assert!(draft.is_fallback());
    }
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_min_length_counts_characters() {
    let mut settings = test_settings();
    settings.min_length = 5;
    let mock = MockGenerator::replying("ação!");
    let writer = Writer::connect(mock, settings).await;

    let brief = Brief::from("");
    let draft = writer
        .write(&brief, &plan_for(&brief), &ProjectContext::default())
        .await;

    assert_eq!(*draft.source(), DraftSource::Model);
    assert_eq!(draft.text(), "ação!");
}

#[tokio::test]
async fn test_blank_reply_falls_back_without_min_length() {
    let mut settings = test_settings();
    settings.min_length = 0;
    let mock = MockGenerator::replying("   \n  ");
    let writer = Writer::connect(mock.clone(), settings).await;

    let brief = Brief::from("Noite chuvosa no MASP.");
    let draft = writer
        .write(&brief, &plan_for(&brief), &ProjectContext::default())
        .await;

    assert_eq!(*draft.source(), DraftSource::Fallback);
    assert!(!draft.text().is_empty());
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn test_fallback_only_writer() {
    let writer: Writer<MockGenerator> = Writer::fallback_only(test_settings());
    let brief = Brief::from("");
    let draft = writer
        .write(&brief, &plan_for(&brief), &ProjectContext::default())
        .await;

    assert!(draft.is_fallback());
    assert!(!draft.text().is_empty());
}
