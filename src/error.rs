use std::io;

/// Errors produced while assembling or configuring the portfolio shell.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("duplicate command: {0}")]
    DuplicateCommand(String),

    #[error("invalid command name: {0:?}")]
    InvalidCommandName(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("profile error: {0}")]
    Profile(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
