//! Error types for element serialization.

use thiserror::Error;

/// Errors raised while turning an element into renderer commands.
#[derive(Debug, Error)]
pub enum PlotError {
    /// `x` and `y` must describe the same points.
    #[error("x has {x} points but y has {y}")]
    LengthMismatch { x: usize, y: usize },

    #[error("failed to format renderer commands")]
    Format(#[from] core::fmt::Error),

    #[cfg(feature = "std")]
    #[error("failed to write renderer commands")]
    Io(#[from] std::io::Error),
}

/// Result type alias for element operations.
pub type PlotResult<T> = Result<T, PlotError>;
