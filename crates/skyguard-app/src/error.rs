//! Host-level errors.

use skyguard_core::SimError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Sim(#[from] SimError),

    #[error("failed to start {name} thread: {source}")]
    Spawn {
        name: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("game loop thread panicked")]
    LoopPanicked,
}
