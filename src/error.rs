// src/error.rs
//! Error kinds, one enum per pipeline stage.
//!
//! Stage errors are per-item and recoverable: the crawl and process runs log
//! them, record them in their summaries and move on. Only [`Error`] aborts a run.

use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnumerateError {
    #[error("season code must be two digits (e.g. \"24\"), got {0:?}")]
    InvalidSeason(String),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no element with id {0:?} in the page")]
    MissingElement(&'static str),

    #[error("embedded payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("payload has no {0:?} key (no play-by-play yet?)")]
    MissingKey(&'static str),

    #[error("play-by-play actions are not an array")]
    NotAnArray,
}

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("could not write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not serialize payload: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum CleanError {
    #[error("no actions with location {0:?}; cannot resolve team")]
    MissingLocation(&'static str),

    #[error("location {location:?} has more than one team code: {first} and {other}")]
    InconsistentTeam {
        location: &'static str,
        first: String,
        other: String,
    },

    #[error("unparseable game clock {0:?}")]
    Clock(String),
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not an action array: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("game {game_id}: {source}")]
    Clean {
        game_id: String,
        #[source]
        source: CleanError,
    },
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not prepare {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("csv error on {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Everything that can go wrong while crawling one game.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Persist(#[from] PersistError),
}

impl CrawlError {
    pub fn kind(&self) -> &'static str {
        match self {
            CrawlError::Fetch(_) => "fetch",
            CrawlError::Extract(_) => "extract",
            CrawlError::Persist(_) => "persist",
        }
    }
}

/// Run-level failures. These abort the crawl or the processing run.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Enumerate(#[from] EnumerateError),

    #[error("game range {start}..={end} is outside 1..={total}")]
    InvalidRange { start: u32, end: u32, total: u32 },

    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("could not list {}: {source}", path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("combined table: {0}")]
    Combined(#[from] ExportError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
