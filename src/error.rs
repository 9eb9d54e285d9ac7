//! Crate-level error types.

use std::fmt;

use crate::gpu::context::RenderContextError;

/// Errors produced by the pluvia crate.
#[derive(Debug)]
pub enum PluviaError {
    /// GPU context initialization failure.
    Gpu(RenderContextError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Snapshot readback or encoding failure.
    Snapshot(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for PluviaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Snapshot(msg) => write!(f, "snapshot error: {msg}"),
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for PluviaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RenderContextError> for PluviaError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<std::io::Error> for PluviaError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
