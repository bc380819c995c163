use std::path::PathBuf;

use crate::{AppState, Effect, Msg, PreviewLocation, SummarizeRequest};

pub const NO_SELECTION_MESSAGE: &str = "Please choose a PDF first.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::PathInputChanged(text) => {
            state.set_path_input(text);
            Vec::new()
        }
        Msg::PathSubmitted => {
            // Only the line terminator is dropped; names may start or end with spaces.
            let raw = state
                .path_input()
                .trim_end_matches(|c: char| c == '\n' || c == '\r')
                .to_string();
            if raw.is_empty() {
                revoke_effects(state.replace_selection(None))
            } else {
                vec![Effect::LoadDocument {
                    path: PathBuf::from(raw),
                }]
            }
        }
        Msg::FileChosen(path) => {
            state.set_path_input(path.display().to_string());
            vec![Effect::LoadDocument { path }]
        }
        Msg::DocumentLoaded(Ok(document)) => {
            let mut effects = revoke_effects(state.replace_selection(Some(document.clone())));
            let preview = state.open_preview();
            effects.push(Effect::CreatePreview { preview, document });
            effects
        }
        Msg::DocumentLoaded(Err(message)) => {
            state.set_error(message);
            Vec::new()
        }
        Msg::SelectionCleared => revoke_effects(state.replace_selection(None)),
        Msg::PreviewReady { preview, location } => {
            if state.resolve_preview(preview, PreviewLocation::Ready(location)) {
                Vec::new()
            } else {
                // Superseded while it was being materialized.
                vec![Effect::RevokePreview { preview }]
            }
        }
        Msg::PreviewUnavailable { preview, reason } => {
            state.resolve_preview(preview, PreviewLocation::Unavailable(reason));
            Vec::new()
        }
        Msg::ModeChanged(mode) => {
            state.set_mode(mode);
            Vec::new()
        }
        Msg::ModeCycled => {
            let next = state.mode().next();
            state.set_mode(next);
            Vec::new()
        }
        Msg::TitleChanged(title) => {
            state.set_title(title);
            Vec::new()
        }
        Msg::SummarizeClicked => match state.selection().cloned() {
            None => {
                state.reject_submit(NO_SELECTION_MESSAGE);
                Vec::new()
            }
            Some(document) => {
                // Not rejected while loading; the newest request supersedes older ones.
                let request = SummarizeRequest::new(document, state.mode(), state.title());
                let request_id = state.begin_request();
                vec![Effect::Submit {
                    request_id,
                    request,
                }]
            }
        },
        Msg::SummaryFinished { request_id, result } => {
            if state.in_flight() == Some(request_id) {
                state.finish_request(result);
            }
            Vec::new()
        }
        Msg::Shutdown => revoke_effects(state.close_preview()),
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn revoke_effects(revoked: Option<crate::PreviewId>) -> Vec<Effect> {
    revoked
        .map(|preview| Effect::RevokePreview { preview })
        .into_iter()
        .collect()
}
