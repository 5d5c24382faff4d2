use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Markup rejected: {0}")]
    Markup(#[from] tagmark::MarkupError),

    #[error("No catalog case named {0:?}")]
    UnknownCase(String),

    #[error("Could not install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, CliError>;
