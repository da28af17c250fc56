use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("terminal too small ({width}x{height}); need at least 10x2")]
    GridTooSmall { width: i32, height: i32 },

    #[error("the {0} glyph palette is empty")]
    EmptyPalette(&'static str),

    #[error("projectile speed must be positive, got {0}")]
    InvalidSpeed(i32),

    #[error("frame rate must be positive")]
    InvalidFrameRate,

    #[error("interrupted")]
    Interrupted,
}
