//! Error taxonomy for configuration loading, theme resolution and output writing.

use std::path::PathBuf;

pub type MotionResult<T> = Result<T, MotionError>;

#[derive(thiserror::Error, Debug)]
pub enum MotionError {
    #[error("config error: {0}")]
    Config(String),

    #[error("theme error: neither '{requested}' nor the 'dark' fallback exists in the theme table")]
    ThemeResolution { requested: String },

    #[error("io error at '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MotionError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn theme_resolution(requested: impl Into<String>) -> Self {
        Self::ThemeResolution {
            requested: requested.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
