use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Css(#[from] dyncss::DynCssError),

    #[error(transparent)]
    Color(#[from] dyncss_color::ColorParseError),

    #[error("I/O error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Logger already initialized")]
    Logger(#[from] log::SetLoggerError),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;
