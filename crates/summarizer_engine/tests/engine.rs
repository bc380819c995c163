use std::sync::{Arc, Mutex};
use std::time::Duration;

use pretty_assertions::assert_eq;
use summarizer_core::{
    update, AppState, Document, Effect, Mode, Msg, Status, SummarizeRequest, SummaryResult,
    PDF_CONTENT_TYPE,
};
use summarizer_engine::{
    ClientSettings, EngineEvent, EngineHandle, FailureKind, SubmitError, Summarizer,
    SummaryResponse,
};
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const WAIT: Duration = Duration::from_secs(5);

/// Records every request and answers with a canned result.
struct RecordingSummarizer {
    seen: Mutex<Vec<SummarizeRequest>>,
    reply: Result<SummaryResponse, SubmitError>,
}

#[async_trait::async_trait]
impl Summarizer for RecordingSummarizer {
    async fn submit(&self, request: &SummarizeRequest) -> Result<SummaryResponse, SubmitError> {
        self.seen.lock().unwrap().push(request.clone());
        self.reply.clone()
    }
}

fn report() -> Document {
    Document::new("report.pdf", PDF_CONTENT_TYPE, b"%PDF-1.7 report".to_vec())
}

/// Feeds effects from `update` to the engine until the summary exchange completes.
fn drive(engine: &EngineHandle, state: AppState, msg: Msg) -> AppState {
    let (mut state, effects) = update(state, msg);
    let mut pending = 0;
    for effect in effects {
        match effect {
            Effect::Submit {
                request_id,
                request,
            } => {
                engine.submit(request_id, request);
                pending += 1;
            }
            Effect::CreatePreview { .. } | Effect::RevokePreview { .. } => {}
            other => panic!("unexpected effect {other:?}"),
        }
    }
    for _ in 0..pending {
        let event = engine.recv_timeout(WAIT).expect("engine completion");
        let EngineEvent::SubmitCompleted { request_id, result } = event;
        let result = result
            .map(SummaryResult::from)
            .map_err(|err| err.to_string());
        state = update(state, Msg::SummaryFinished { request_id, result }).0;
    }
    state
}

#[test]
fn engine_reports_completion_with_request_id() {
    let summarizer = Arc::new(RecordingSummarizer {
        seen: Mutex::new(Vec::new()),
        reply: Ok(SummaryResponse {
            mode: "eli5".to_string(),
            summary: "simple".to_string(),
        }),
    });
    let engine = EngineHandle::with_summarizer(summarizer.clone()).unwrap();

    engine.submit(42, SummarizeRequest::new(report(), Mode::Eli5, "Doc"));

    let event = engine.recv_timeout(WAIT).expect("completion");
    assert_eq!(
        event,
        EngineEvent::SubmitCompleted {
            request_id: 42,
            result: Ok(SummaryResponse {
                mode: "eli5".to_string(),
                summary: "simple".to_string(),
            }),
        }
    );
    let seen = summarizer.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].title.as_deref(), Some("Doc"));
}

#[test]
fn failure_message_reaches_the_session() {
    let summarizer = Arc::new(RecordingSummarizer {
        seen: Mutex::new(Vec::new()),
        reply: Err(SubmitError {
            kind: FailureKind::HttpStatus(400),
            message: "Could not extract text from PDF".to_string(),
        }),
    });
    let engine = EngineHandle::with_summarizer(summarizer).unwrap();

    let state = update(AppState::new(), Msg::DocumentLoaded(Ok(report()))).0;
    let state = drive(&engine, state, Msg::SummarizeClicked);

    let view = state.view();
    assert_eq!(view.status, Status::Failed);
    assert_eq!(
        view.error.as_deref(),
        Some("Could not extract text from PDF")
    );
    assert!(!view.loading);
}

#[test]
fn report_round_trip_over_http() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let server = runtime.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/summarize"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "mode": "keypoints",
                "summary": "- point one\n- point two",
            })))
            .expect(1)
            .mount(&server)
            .await;
        server
    });

    let settings = ClientSettings::with_base_url(Url::parse(&server.uri()).unwrap());
    let engine = EngineHandle::new(&settings).unwrap();

    let state = update(AppState::new(), Msg::DocumentLoaded(Ok(report()))).0;
    let state = update(state, Msg::ModeChanged(Mode::Keypoints)).0;
    let state = drive(&engine, state, Msg::SummarizeClicked);

    let view = state.view();
    assert_eq!(view.status, Status::Success);
    assert_eq!(view.summary.as_deref(), Some("- point one\n- point two"));

    let requests = runtime.block_on(server.received_requests()).unwrap();
    let body = String::from_utf8_lossy(&requests[0].body).into_owned();
    assert!(body.contains("name=\"mode\"\r\n\r\nkeypoints"));
    assert!(!body.contains("name=\"title\""));
}
