use thiserror::Error;

/// A malformed command-line argument. None of these are fatal: the caller
/// reports them and keeps the previous value of the option.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ArgError {
    #[error("-{flag}: '{value}' is not an integer")]
    InvalidInteger { flag: char, value: String },

    #[error("-{flag}: '{value}' is out of range")]
    OutOfRange { flag: char, value: String },

    #[error("option requires an argument -- '{flag}'")]
    MissingValue { flag: char },
}

#[derive(Error, Debug)]
pub enum ProcessError {
    // Only constructed where the parent id needs a lookup.
    #[cfg_attr(unix, allow(dead_code))]
    #[error("unable to query process ids: {0}")]
    Unavailable(String),
}
