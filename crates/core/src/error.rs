use thiserror::Error;

/// Setup-time error type shared by every crate in the workspace.
///
/// Chart updates never return this; they degrade to an
/// [`UpdateStatus::Skipped`](crate::UpdateStatus) instead.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("config error: {0}")]
    Config(String),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
