use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Selector(#[from] sounder_selector::SelectorError),
}

pub type Result<T> = std::result::Result<T, CliError>;
