use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("Failed to read layer '{}': {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid layer '{}': {}", path.display(), source)]
    Layer {
        path: PathBuf,
        #[source]
        source: databag::Error,
    },

    #[error("Bag error: {0}")]
    Bag(#[from] databag::Error),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    #[error("Nothing found at '{0}'")]
    NotFound(String),
}
