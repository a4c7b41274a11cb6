use std::{io, path::PathBuf};

use thiserror::Error;

/// Startup failure. The service must not serve a partially built index.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to open dataset {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed dataset: {0}")]
    Malformed(#[from] csv::Error),

    #[error("Dataset has no '{0}' column")]
    MissingKeyColumn(String),
}

/// Per-request lookup outcome. Expected, never fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Dish not found")]
    NotFound { name: String },
}
