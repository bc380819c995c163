use std::sync::mpsc;

use client_logging::{client_info, client_warn};
use summarizer_core::{Effect, Msg, SummaryResult};
use summarizer_engine::{
    load_document, ClientSettings, EngineError, EngineEvent, EngineHandle, PreviewStore,
};

/// Executes effects emitted by `update` and turns their outcomes back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
    previews: PreviewStore,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(settings: &ClientSettings, msg_tx: mpsc::Sender<Msg>) -> Result<Self, EngineError> {
        let engine = EngineHandle::new(settings)?;
        Ok(Self::with_parts(engine, PreviewStore::new(), msg_tx))
    }

    pub fn with_parts(
        engine: EngineHandle,
        previews: PreviewStore,
        msg_tx: mpsc::Sender<Msg>,
    ) -> Self {
        Self {
            engine,
            previews,
            msg_tx,
        }
    }

    pub fn enqueue(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadDocument { path } => {
                    let msg = match load_document(&path) {
                        Ok(document) => {
                            client_info!(
                                "Selected {} ({} bytes)",
                                document.file_name(),
                                document.size()
                            );
                            Msg::DocumentLoaded(Ok(document))
                        }
                        Err(err) => {
                            client_warn!("Could not load {:?}: {}", path, err);
                            Msg::DocumentLoaded(Err(err.to_string()))
                        }
                    };
                    let _ = self.msg_tx.send(msg);
                }
                Effect::CreatePreview { preview, document } => {
                    let msg = match self.previews.create(preview, &document) {
                        Ok(location) => Msg::PreviewReady { preview, location },
                        Err(err) => {
                            client_warn!("Preview {} unavailable: {}", preview, err);
                            Msg::PreviewUnavailable {
                                preview,
                                reason: err.to_string(),
                            }
                        }
                    };
                    let _ = self.msg_tx.send(msg);
                }
                Effect::RevokePreview { preview } => {
                    self.previews.revoke(preview);
                }
                Effect::Submit {
                    request_id,
                    request,
                } => {
                    client_info!(
                        "Submit request_id={} file={} mode={}",
                        request_id,
                        request.document.file_name(),
                        request.mode
                    );
                    self.engine.submit(request_id, request);
                }
            }
        }
    }

    /// Forwards finished exchanges to the message queue.
    pub fn poll(&self) {
        while let Some(event) = self.engine.try_recv() {
            match event {
                EngineEvent::SubmitCompleted { request_id, result } => {
                    let result = match result {
                        Ok(response) => Ok(SummaryResult::from(response)),
                        Err(err) => {
                            client_warn!("Request {} failed ({}): {}", request_id, err.kind, err);
                            Err(err.to_string())
                        }
                    };
                    let _ = self
                        .msg_tx
                        .send(Msg::SummaryFinished { request_id, result });
                }
            }
        }
    }

    pub fn live_previews(&self) -> usize {
        self.previews.live_count()
    }

    /// Releases every preview still alive.
    pub fn shutdown(&mut self) {
        self.previews.revoke_all();
    }
}
