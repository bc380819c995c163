use std::path::PathBuf;

use crate::{Document, PreviewId, RequestId, SummarizeRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadDocument { path: PathBuf },
    CreatePreview { preview: PreviewId, document: Document },
    RevokePreview { preview: PreviewId },
    Submit {
        request_id: RequestId,
        request: SummarizeRequest,
    },
}
