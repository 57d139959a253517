// src/error.rs
use std::io;

use thiserror::Error;

/// Every failure the crawler can surface to a caller.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("unknown department '{name}'; valid names: [{}]", .valid.join(" "))]
    UnknownDepartment { name: String, valid: Vec<String> },

    #[error("unknown course category '{label}'; valid labels: [{}]", .valid.join(" "))]
    UnknownCategory { label: String, valid: Vec<String> },

    #[error("timetable unavailable (network down, invalid department code, or site closed): {0}")]
    FetchUnavailable(String),

    #[error("malformed schedule text: '{raw}'")]
    ScheduleParse { raw: String },

    #[error("table row has {found} cells, expected {expected}")]
    MalformedRow { expected: usize, found: usize },

    #[error("department directory is inconsistent: {0}")]
    DirectoryIntegrity(String),

    #[error("output file needs an extension: '{0}'")]
    InvalidOutputPath(String),

    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type CrawlResult<T> = Result<T, CrawlError>;
