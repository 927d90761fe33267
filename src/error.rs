// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Network / HTTP failure while fetching a page.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// The fetched page doesn't look like what we expect (site layout changed).
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("no <table> found on {0}")]
    NoTable(String),

    #[error("league table is missing columns: {missing}. Available columns: {available:?}")]
    MissingColumns { missing: String, available: Vec<String> },

    #[error("could not parse any team statistics from {0}; page structure may have changed or the team page is empty")]
    NoStatistics(String),
}

/// Feature-engine input lacks required raw columns.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{operation} requires columns {missing:?}, but the table only has {available:?}")]
pub struct MissingColumnError {
    pub operation: &'static str,
    pub missing: Vec<String>,
    pub available: Vec<String>,
}

impl MissingColumnError {
    pub fn names(&self, column: &str) -> bool {
        self.missing.iter().any(|m| m == column)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum FeatureError {
    #[error(transparent)]
    MissingColumn(#[from] MissingColumnError),

    #[error("calculate_all_advanced_stats received an empty table")]
    EmptyTable,
}

/// Either half of an ingestion failure.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error on {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Feature(#[from] FeatureError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("config error: {0}")]
    Config(String),
}

impl From<FetchError> for Error {
    fn from(e: FetchError) -> Self {
        Error::Ingest(IngestError::Fetch(e))
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Ingest(IngestError::Parse(e))
    }
}

impl From<MissingColumnError> for Error {
    fn from(e: MissingColumnError) -> Self {
        Error::Feature(FeatureError::MissingColumn(e))
    }
}

impl Error {
    /// Ingestion failures are surfaced as a notice; everything else is a defect.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Ingest(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
