//! Gatherer image fetching with local existence caching.

use std::fs::{self, File};
use std::io;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::constants::images::{GATHERER_ENDPOINT, IMAGE_EXTENSION};
use crate::errors::ExportError;
use crate::resolve::ResolvedCard;

/// Outcome of a single image fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The image was downloaded and stored.
    Downloaded,
    /// A file for this card already exists locally.
    AlreadyPresent,
}

/// Downloads card images from the Gatherer handler into one directory.
///
/// Fetches are synchronous and best-effort: a failure is reported for
/// the one card and the batch moves on.
pub struct ImageFetcher {
    dir: PathBuf,
    endpoint: String,
}

impl ImageFetcher {
    /// Create a fetcher storing images under `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            endpoint: GATHERER_ENDPOINT.to_string(),
        }
    }

    /// Override the image handler endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Local path the image for `resolved` is stored at.
    ///
    /// Keyed by card name, not set code: reprints share one image file
    /// and whichever printing is fetched first wins.
    pub fn image_path(&self, resolved: &ResolvedCard) -> PathBuf {
        self.dir
            .join(format!("{}.{IMAGE_EXTENSION}", resolved.card.name))
    }

    /// Download the card image unless a local copy already exists.
    ///
    /// Streams into a `.part` file that is renamed on success, so an
    /// interrupted download never leaves a plausible-looking image
    /// behind.
    pub fn fetch(&self, resolved: &ResolvedCard) -> Result<FetchOutcome, ExportError> {
        let name = &resolved.card.name;
        let target = self.image_path(resolved);
        if target.exists() {
            debug!("[cardex:images] keeping existing image for '{name}'");
            return Ok(FetchOutcome::AlreadyPresent);
        }

        let id = resolved
            .card
            .multiverseid
            .ok_or_else(|| ExportError::ImageFetch {
                name: name.clone(),
                reason: "card has no multiverse id".to_string(),
            })?;

        fs::create_dir_all(&self.dir)?;
        info!("[cardex:images] downloading image for '{name}'");
        let response = ureq::get(&self.endpoint)
            .query("multiverseid", &id.to_string())
            .query("type", "card")
            .call()
            .map_err(|err| ExportError::ImageFetch {
                name: name.clone(),
                reason: format!("request failed: {err}"),
            })?;

        let temp = target.with_extension("part");
        let mut reader = response.into_body().into_reader();
        let mut file = File::create(&temp)?;
        if let Err(err) = io::copy(&mut reader, &mut file) {
            let _ = fs::remove_file(&temp);
            return Err(ExportError::ImageFetch {
                name: name.clone(),
                reason: format!("stream failed: {err}"),
            });
        }
        fs::rename(&temp, &target)?;
        Ok(FetchOutcome::Downloaded)
    }
}
