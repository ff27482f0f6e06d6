//! Batch driver: card lists in, Lua data modules out.
//!
//! Requests are processed strictly in input order, one at a time, and
//! the output order equals the input order. Per-request failures are
//! logged with the offending name and never abort the batch; only I/O
//! on the list or output stream does.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use tracing::{error, info, warn};

use crate::catalog::Catalog;
use crate::config::ExportConfig;
use crate::errors::ExportError;
use crate::images::{FetchOutcome, ImageFetcher};
use crate::lua::{render_card, write_footer, write_header};
use crate::resolve::{CardRequest, Resolver};

/// One input card list paired with its output module path.
#[derive(Clone, Debug)]
pub struct ExportJob {
    /// Card list file, one request per line.
    pub list: PathBuf,
    /// Lua module written for this list.
    pub output: PathBuf,
}

/// Counters accumulated over one export job.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Requests resolved and written.
    pub written: usize,
    /// Requests that matched no complete printing.
    pub missing: usize,
    /// Resolved cards that could not be rendered.
    pub failed: usize,
    /// Images downloaded during this job.
    pub images_downloaded: usize,
    /// Images skipped because a local copy already existed.
    pub images_present: usize,
    /// Image fetches that failed.
    pub images_failed: usize,
}

/// Drives resolution and serialization for whole card lists.
pub struct Exporter<'a> {
    catalog: &'a Catalog,
    fetcher: Option<ImageFetcher>,
}

impl<'a> Exporter<'a> {
    /// Create an exporter over a loaded catalog.
    pub fn new(catalog: &'a Catalog, config: &ExportConfig) -> Self {
        let fetcher = config
            .download_images
            .then(|| ImageFetcher::new(&config.image_dir));
        Self { catalog, fetcher }
    }

    /// Process one card list file into one Lua module file.
    pub fn run(&self, job: &ExportJob) -> Result<ExportSummary, ExportError> {
        let input = BufReader::new(File::open(&job.list)?);
        if let Some(parent) = job.output.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let mut out = BufWriter::new(File::create(&job.output)?);
        let summary = self.process(input, &mut out)?;
        out.flush()?;
        info!(
            "[cardex:pipeline] wrote {} ({} cards, {} missing)",
            job.output.display(),
            summary.written,
            summary.missing
        );
        Ok(summary)
    }

    /// Process requests from `input`, writing the Lua module to `out`.
    pub fn process(
        &self,
        input: impl BufRead,
        out: &mut impl Write,
    ) -> Result<ExportSummary, ExportError> {
        let resolver = Resolver::new(self.catalog);
        let mut summary = ExportSummary::default();
        write_header(out)?;
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let request = CardRequest::parse(&line);
            let Some(resolved) = resolver.resolve(&request) else {
                warn!(
                    "[cardex:pipeline] '{}' couldn't be found. Typo?",
                    request.name
                );
                summary.missing += 1;
                continue;
            };
            if let Some(fetcher) = &self.fetcher {
                match fetcher.fetch(&resolved) {
                    Ok(FetchOutcome::Downloaded) => summary.images_downloaded += 1,
                    Ok(FetchOutcome::AlreadyPresent) => summary.images_present += 1,
                    Err(err) => {
                        warn!("[cardex:pipeline] {err}");
                        summary.images_failed += 1;
                    }
                }
            }
            match render_card(&resolved) {
                Ok(entry) => {
                    out.write_all(entry.as_bytes())?;
                    summary.written += 1;
                }
                Err(err) => {
                    error!("[cardex:pipeline] {err}");
                    summary.failed += 1;
                }
            }
        }
        write_footer(out)?;
        Ok(summary)
    }
}
