// One error type for the whole app.
// Every variant states *where* things went wrong.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A helper that works on a fixed number of points got some other count.
    #[error("expected exactly {expected} points, got {actual}")]
    InvalidArgumentCount { expected: usize, actual: usize },

    /// Canvas size must be finite and strictly positive on both axes.
    #[error("degenerate canvas size {width}x{height}")]
    DegenerateGeometry { width: f32, height: f32 },

    #[error("selector needs at least one fractal")]
    EmptySelection,

    #[error("window init error: {0}")]
    WindowInit(String),

    #[error("window update error: {0}")]
    WindowUpdate(String),

    #[error("image export error: {0}")]
    Image(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
