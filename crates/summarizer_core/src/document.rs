use bytes::Bytes;

use crate::Mode;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// A file chosen by the user, held in memory until it is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    file_name: String,
    content_type: String,
    bytes: Bytes,
}

impl Document {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Cheap clone of the shared buffer.
    pub fn bytes(&self) -> Bytes {
        self.bytes.clone()
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Everything the transfer client needs for one summarize exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizeRequest {
    pub document: Document,
    pub mode: Mode,
    /// `None` when the user left the title empty; the field is then omitted.
    pub title: Option<String>,
}

impl SummarizeRequest {
    pub fn new(document: Document, mode: Mode, title: &str) -> Self {
        Self {
            document,
            mode,
            title: (!title.is_empty()).then(|| title.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryResult {
    pub mode: String,
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_title_is_omitted() {
        let doc = Document::new("a.pdf", PDF_CONTENT_TYPE, b"%PDF-1.4".to_vec());
        let request = SummarizeRequest::new(doc.clone(), Mode::Tldr, "");
        assert_eq!(request.title, None);

        let request = SummarizeRequest::new(doc, Mode::Tldr, "  Q3 report ");
        assert_eq!(request.title.as_deref(), Some("  Q3 report "));
    }
}
