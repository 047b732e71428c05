use super::*;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("{tool} is not available: {hint}")]
    ToolUnavailable { tool: &'static str, hint: String },

    #[error("failed to render page {page_number} at {dpi} dpi: {reason}")]
    PageRender {
        page_number: usize,
        dpi: u32,
        reason: String,
    },

    #[error("page index {page_index} is out of range (document has {page_count} pages)")]
    PageOutOfRange {
        page_index: usize,
        page_count: usize,
    },

    #[error("unreadable document {path}: {reason}")]
    UnreadableDocument { path: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Unavailable,
    Transient,
    Fatal,
}

impl FailureKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unavailable => "unavailable",
            Self::Transient => "transient",
            Self::Fatal => "fatal",
        }
    }
}

impl ExtractError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::ToolUnavailable { .. } => FailureKind::Unavailable,
            Self::Io(error)
                if matches!(
                    error.kind(),
                    ErrorKind::Interrupted | ErrorKind::TimedOut | ErrorKind::WouldBlock
                ) =>
            {
                FailureKind::Transient
            }
            Self::PageRender { .. }
            | Self::PageOutOfRange { .. }
            | Self::UnreadableDocument { .. }
            | Self::Io(_) => FailureKind::Fatal,
        }
    }
}
