use std::path::PathBuf;

use mart_config::ConfigError;

/// Failures that abort a generation run. Nothing is retried or rolled back.
#[derive(Debug, thiserror::Error)]
pub enum DatagenError {
    #[error("invalid generation config: {0}")]
    Config(#[from] ConfigError),
    #[error("cannot draw events: the {0} pool is empty")]
    EmptyPool(&'static str),
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("json encode error: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("json decode error at {}:{line}: {source}", path.display())]
    Decode {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

pub type DatagenResult<T> = Result<T, DatagenError>;

/// Attach the offending path to an `io::Result`.
pub(crate) trait IoContext<T> {
    fn at_path(self, path: impl Into<PathBuf>) -> DatagenResult<T>;
}

impl<T> IoContext<T> for std::io::Result<T> {
    fn at_path(self, path: impl Into<PathBuf>) -> DatagenResult<T> {
        self.map_err(|source| DatagenError::Io {
            path: path.into(),
            source,
        })
    }
}
