use std::fmt;
use std::io;

use thiserror::Error;

use crate::types::{CardName, SetCode};

/// Error type for dataset loading, entry rendering, and image fetch failures.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("set dataset could not be parsed: {0}")]
    DataLoad(#[from] serde_json::Error),
    #[error("card '{name}' resolved to {set_code} without a collector number")]
    MissingIdentifier { name: CardName, set_code: SetCode },
    #[error("image fetch for '{name}' failed: {reason}")]
    ImageFetch { name: CardName, reason: String },
    #[error("failed rendering card entry: {0}")]
    Render(#[from] fmt::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}
