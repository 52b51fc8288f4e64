#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to {action} {path}: {source}")]
    Io {
        action: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: invalid action: {source}")]
    InvalidAction {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Order(#[from] order::OrderError),
    #[error("failed to open {url}: {source}")]
    OpenLink {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    pub fn io(action: &'static str, path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { action, path: path.into(), source }
    }
}
