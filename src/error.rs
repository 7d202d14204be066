//! Error type shared by every stage of the mapping.

use thiserror::Error;

/// Errors raised while building ramps, reading tables or mapping values.
///
/// None of them is recoverable: a run either maps every position or
/// stops before touching the host.
#[derive(Error, Debug)]
pub enum Error {
    /// Unknown palette or mode, invalid bounds, bad parameter.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The table as a whole is unusable (missing column, no rows).
    #[error("input format error: {0}")]
    InputFormat(String),

    /// A single row of the table could not be read.
    #[error("input format error at line {line}: {message}")]
    MalformedRow {
        /// Line number in the input file (1-based).
        line: u64,
        /// What is wrong with the row.
        message: String,
    },

    /// A transform is undefined for some value (e.g. log of 0).
    #[error("domain error: {0}")]
    Domain(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Error::Configuration(msg.into())
    }

    /// Whether the error comes from the content of the input table.
    pub fn is_input_format(&self) -> bool {
        matches!(self, Error::InputFormat(_) | Error::MalformedRow { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_errors_name_the_line() {
        let e = Error::MalformedRow { line: 7, message: "bad value".into() };
        assert_eq!(e.to_string(), "input format error at line 7: bad value");
        assert!(e.is_input_format());
        assert!(!Error::config("x").is_input_format());
    }
}
