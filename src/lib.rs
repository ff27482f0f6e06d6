#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Ordered set catalog loaded from the card dataset.
pub mod catalog;
/// Export run configuration.
pub mod config;
/// Centralized constants used across resolution, output, and fetching.
pub mod constants;
/// Card and set record types.
pub mod data;
/// Gatherer image fetching with local existence caching.
pub mod images;
/// Lua data module writer.
pub mod lua;
/// Batch pipeline driving resolution and serialization.
pub mod pipeline;
/// Card resolution against the set catalog.
pub mod resolve;
/// Name normalization and wikitext escaping helpers.
pub mod text;
/// Shared type aliases.
pub mod types;

mod errors;

pub use catalog::Catalog;
pub use config::ExportConfig;
pub use data::{Card, CardSet, Ruling};
pub use errors::ExportError;
pub use images::{FetchOutcome, ImageFetcher};
pub use pipeline::{ExportJob, ExportSummary, Exporter};
pub use resolve::{CardRequest, ResolvedCard, Resolver};
pub use types::{CardName, CollectorNumber, MultiverseId, SetCode};
