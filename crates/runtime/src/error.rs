//! Unified error types surfaced by the runtime API.
//!
//! Wraps content loading, session start and input script failures so clients
//! can bubble them up with consistent context. Routine gameplay rejections
//! (blocked moves, refused transitions) are not errors here; they are logged
//! and reported as tick outcomes.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Loader failure, with the full context chain flattened into the message.
    #[error("failed to load content: {0}")]
    Content(String),

    #[error(transparent)]
    Navigation(#[from] game_core::NavigationError),

    #[error("invalid input script: {0}")]
    Script(#[from] ron::error::SpannedError),

    #[error("failed to read input script {}", path.display())]
    ScriptIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RuntimeError {
    pub(crate) fn content(error: anyhow::Error) -> Self {
        RuntimeError::Content(format!("{error:#}"))
    }
}
