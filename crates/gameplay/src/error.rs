use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("invalid section `{section}`: {source}")]
    InvalidSection {
        section: &'static str,
        #[source]
        source: ron::Error,
    },

    #[error("serialize error: {0}")]
    Serialize(#[from] ron::Error),
}
