use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyntheticError {
    /// The host models the requested change as a write to an element that cannot be written.
    #[error("cannot perform operation: {0}")]
    IncorrectOperation(String),
    /// The name cell is borrowed elsewhere, so the privileged write cannot be taken.
    #[error("name of synthetic method `{name}` cannot be overwritten while it is borrowed")]
    RenameUnavailable { name: String },
    #[error("unknown modifier keyword `{0}`")]
    UnknownModifier(String),
    #[error("failed to parse synthetic declaration `{text}`: {message}")]
    Parse { text: String, message: String },
    #[error("failed to read render config from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid render config: {0}")]
    Config(String),
}

impl From<toml::de::Error> for SyntheticError {
    fn from(err: toml::de::Error) -> Self {
        // Keep just the message; the default `Display` embeds a source snippet.
        SyntheticError::Config(err.message().to_string())
    }
}
