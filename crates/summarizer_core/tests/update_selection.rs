use std::path::PathBuf;

use pretty_assertions::assert_eq;
use summarizer_core::{
    update, AppState, Document, Effect, Msg, PreviewLocation, Status, PDF_CONTENT_TYPE,
};

fn doc(name: &str) -> Document {
    Document::new(name, PDF_CONTENT_TYPE, format!("%PDF-1.4 {name}").into_bytes())
}

fn select(state: AppState, path: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::PathInputChanged(path.to_string()));
    update(state, Msg::PathSubmitted)
}

#[test]
fn submitting_a_path_requests_a_load() {
    let (state, effects) = select(AppState::new(), "./docs/report.pdf\n");

    assert_eq!(
        effects,
        vec![Effect::LoadDocument {
            path: PathBuf::from("./docs/report.pdf"),
        }]
    );
    assert!(state.selection().is_none());
}

#[test]
fn surrounding_spaces_in_file_names_are_kept() {
    let (_, effects) = select(AppState::new(), " draft report .pdf\r\n");

    assert_eq!(
        effects,
        vec![Effect::LoadDocument {
            path: PathBuf::from(" draft report .pdf"),
        }]
    );
}

#[test]
fn chosen_file_is_loaded_and_shown_in_path_field() {
    let chosen = PathBuf::from("/home/ann/papers/ report.pdf");
    let (state, effects) = update(AppState::new(), Msg::FileChosen(chosen.clone()));

    assert_eq!(effects, vec![Effect::LoadDocument { path: chosen }]);
    assert_eq!(state.path_input(), "/home/ann/papers/ report.pdf");
}

#[test]
fn first_selection_opens_a_preview_without_revoking() {
    let (mut state, effects) = update(AppState::new(), Msg::DocumentLoaded(Ok(doc("a.pdf"))));

    assert_eq!(
        effects,
        vec![Effect::CreatePreview {
            preview: 1,
            document: doc("a.pdf"),
        }]
    );
    let view = state.view();
    assert_eq!(view.selection.as_ref().unwrap().file_name, "a.pdf");
    assert_eq!(view.preview.as_ref().unwrap().location, PreviewLocation::Pending);
    assert!(state.consume_dirty());
}

#[test]
fn changing_selection_revokes_previous_preview_first() {
    let (state, _) = update(AppState::new(), Msg::DocumentLoaded(Ok(doc("a.pdf"))));
    let (state, _) = update(
        state,
        Msg::PreviewReady {
            preview: 1,
            location: "file:///tmp/preview-a.pdf".to_string(),
        },
    );

    let (state, effects) = update(state, Msg::DocumentLoaded(Ok(doc("b.pdf"))));

    assert_eq!(
        effects,
        vec![
            Effect::RevokePreview { preview: 1 },
            Effect::CreatePreview {
                preview: 2,
                document: doc("b.pdf"),
            },
        ]
    );
    assert_eq!(state.live_preview(), Some(2));
    assert_eq!(
        state.view().preview.unwrap().location,
        PreviewLocation::Pending
    );
}

#[test]
fn clearing_selection_revokes_preview() {
    let (state, _) = update(AppState::new(), Msg::DocumentLoaded(Ok(doc("a.pdf"))));

    let (state, effects) = update(state, Msg::SelectionCleared);
    assert_eq!(effects, vec![Effect::RevokePreview { preview: 1 }]);
    assert!(state.selection().is_none());
    assert_eq!(state.live_preview(), None);

    // Nothing left to release.
    let (_state, effects) = update(state, Msg::SelectionCleared);
    assert!(effects.is_empty());
}

#[test]
fn empty_path_submission_clears_selection() {
    let (state, _) = update(AppState::new(), Msg::DocumentLoaded(Ok(doc("a.pdf"))));
    let (state, effects) = select(state, "\n");

    assert_eq!(effects, vec![Effect::RevokePreview { preview: 1 }]);
    assert!(state.view().selection.is_none());
    assert!(state.view().preview.is_none());
}

#[test]
fn stale_preview_ready_is_revoked_immediately() {
    let (state, _) = update(AppState::new(), Msg::DocumentLoaded(Ok(doc("a.pdf"))));
    let (state, _) = update(state, Msg::DocumentLoaded(Ok(doc("b.pdf"))));

    let (state, effects) = update(
        state,
        Msg::PreviewReady {
            preview: 1,
            location: "file:///tmp/preview-a.pdf".to_string(),
        },
    );

    assert_eq!(effects, vec![Effect::RevokePreview { preview: 1 }]);
    assert_eq!(state.live_preview(), Some(2));
    assert_eq!(
        state.view().preview.unwrap().location,
        PreviewLocation::Pending
    );
}

#[test]
fn unavailable_preview_is_recorded() {
    let (state, _) = update(AppState::new(), Msg::DocumentLoaded(Ok(doc("a.pdf"))));
    let (state, effects) = update(
        state,
        Msg::PreviewUnavailable {
            preview: 1,
            reason: "disk full".to_string(),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(
        state.view().preview.unwrap().location,
        PreviewLocation::Unavailable("disk full".to_string())
    );
}

#[test]
fn load_failure_keeps_current_selection() {
    let (state, _) = update(AppState::new(), Msg::DocumentLoaded(Ok(doc("a.pdf"))));
    let (state, effects) = update(
        state,
        Msg::DocumentLoaded(Err("notes.txt is not a PDF".to_string())),
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.status, Status::Failed);
    assert_eq!(view.error.as_deref(), Some("notes.txt is not a PDF"));
    assert_eq!(view.selection.unwrap().file_name, "a.pdf");
    assert_eq!(state.live_preview(), Some(1));
}

#[test]
fn shutdown_releases_live_preview() {
    let (state, _) = update(AppState::new(), Msg::DocumentLoaded(Ok(doc("a.pdf"))));
    let (state, effects) = update(state, Msg::Shutdown);

    assert_eq!(effects, vec![Effect::RevokePreview { preview: 1 }]);
    assert_eq!(state.live_preview(), None);
}

#[test]
fn mode_and_title_edits_have_no_effects() {
    let (state, effects) = update(AppState::new(), Msg::ModeCycled);
    assert!(effects.is_empty());
    assert_eq!(state.view().mode, summarizer_core::Mode::Keypoints);

    let (mut state, effects) = update(state, Msg::TitleChanged("Annual".to_string()));
    assert!(effects.is_empty());
    assert_eq!(state.view().title, "Annual");
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::TitleChanged("Annual".to_string()));
    assert!(!state.consume_dirty());
}
