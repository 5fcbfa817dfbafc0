//! Schedule ingestion.
//!
//! This crate turns a published schedule CSV into the lookup index used by
//! `anesth-lookup`.
//!
//! # Features
//!
//! - **Tokenizing**: permissive CSV splitting with quoting and CRLF support
//! - **Building**: long or wide layout, chosen explicitly by the caller
//! - **Sources**: local files or published export URLs with cache busting
//! - **Store**: replace-on-success holder for the loaded schedule
//!
//! # Example
//!
//! ```ignore
//! use anesth_ingest::{FetchOptions, Layout, ScheduleFetcher, ScheduleSource, ScheduleStore};
//!
//! let fetcher = ScheduleFetcher::new(FetchOptions::default())?;
//! let mut store = ScheduleStore::new();
//! let schedule = store.reload(&fetcher, &ScheduleSource::parse("data.csv"), Layout::Long)?;
//! println!("{} surgeons", schedule.surgeons.len());
//! ```

mod builder;
mod csv;
mod error;
mod source;
mod store;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::tokenize;

// === Schedule Building ===
pub use builder::{BuildReport, Layout, build_schedule};

// === Sources ===
pub use source::{
    CLIENT_ID, FetchOptions, ScheduleFetcher, ScheduleReader, ScheduleSource, cache_busted_url,
    read_file,
};

// === Store ===
pub use store::{ScheduleStore, load_schedule};
