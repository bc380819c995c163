use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use client_logging::client_info;
use summarizer_core::{RequestId, SummarizeRequest};
use thiserror::Error;

use crate::client::{ReqwestSummarizer, Summarizer};
use crate::{ClientSettings, EngineEvent, SubmitError};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] SubmitError),
}

enum EngineCommand {
    Submit {
        request_id: RequestId,
        request: SummarizeRequest,
    },
}

/// Runs summarize exchanges off the UI thread and reports their completion.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: &ClientSettings) -> Result<Self, EngineError> {
        let summarizer = ReqwestSummarizer::new(settings)?;
        client_info!("Summarize endpoint {}", summarizer.endpoint());
        Self::with_summarizer(Arc::new(summarizer))
    }

    pub fn with_summarizer(summarizer: Arc<dyn Summarizer>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let summarizer = summarizer.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(summarizer.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn submit(&self, request_id: RequestId, request: SummarizeRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Submit {
            request_id,
            request,
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the next completion arrives or the engine thread is gone.
    pub fn recv_timeout(&self, timeout: std::time::Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    summarizer: &dyn Summarizer,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Submit {
            request_id,
            request,
        } => {
            let result = summarizer.submit(&request).await;
            let _ = event_tx.send(EngineEvent::SubmitCompleted { request_id, result });
        }
    }
}
