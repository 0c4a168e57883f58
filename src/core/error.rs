//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

use crate::core::data::ParseCsvError;

/// Precise configuration faults.
///
/// Every variant is a caller bug (bad accessor, bad palette) rather than a
/// transient condition, so nothing here is ever retried.
#[derive(Debug)]
pub enum ConfigError {
    EmptyPalette(&'static str),
    Unresolved {
        accessor: String,
        record: usize,
    },
    NotNumeric {
        accessor: String,
        record: usize,
        found: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyPalette(x) => write!(f, "palette `{x}` must contain >= 1 colour"),
            ConfigError::Unresolved { accessor, record } => {
                write!(f, "accessor `{accessor}` resolved nothing on record {record}")
            }
            ConfigError::NotNumeric {
                accessor,
                record,
                found,
            } => write!(
                f,
                "accessor `{accessor}` produced {found} instead of a number on record {record}"
            ),
        }
    }
}
impl Error for ConfigError {}

/// Top-level error type bubbled up by the CLI surface.
#[derive(Debug)]
pub enum ChartError {
    Io(io::Error),
    Csv(ParseCsvError),
    Json(serde_json::Error),
    JsonShape(&'static str),
    Config(ConfigError),
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::Io(e) => write!(f, "{e}"),
            ChartError::Csv(e) => write!(f, "{e}"),
            ChartError::Json(e) => write!(f, "{e}"),
            ChartError::JsonShape(want) => write!(f, "JSON input must be {want}"),
            ChartError::Config(e) => write!(f, "{e}"),
        }
    }
}
impl Error for ChartError {}

// automatic conversions
impl From<io::Error> for ChartError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ParseCsvError> for ChartError {
    fn from(e: ParseCsvError) -> Self {
        Self::Csv(e)
    }
}
impl From<serde_json::Error> for ChartError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
impl From<ConfigError> for ChartError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
