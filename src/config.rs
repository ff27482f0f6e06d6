use std::path::PathBuf;

use crate::constants::images::DEFAULT_IMAGE_DIR;
use crate::constants::pipeline::DEFAULT_SKIP_SETS;
use crate::types::SetCode;

/// Top-level exporter configuration.
#[derive(Clone, Debug)]
pub struct ExportConfig {
    /// Whether card images are fetched for resolved cards.
    pub download_images: bool,
    /// Directory downloaded images are stored in.
    pub image_dir: PathBuf,
    /// Set codes removed from the catalog before resolution.
    pub skip_sets: Vec<SetCode>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            download_images: true,
            image_dir: PathBuf::from(DEFAULT_IMAGE_DIR),
            skip_sets: DEFAULT_SKIP_SETS
                .iter()
                .map(|code| code.to_string())
                .collect(),
        }
    }
}

impl ExportConfig {
    /// Enable or disable image downloads.
    pub fn with_download_images(mut self, download_images: bool) -> Self {
        self.download_images = download_images;
        self
    }

    /// Override the image directory.
    pub fn with_image_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.image_dir = dir.into();
        self
    }

    /// Replace the excluded set codes.
    pub fn with_skip_sets(mut self, codes: Vec<SetCode>) -> Self {
        self.skip_sets = codes;
        self
    }
}
