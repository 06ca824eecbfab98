//! # snomed-loader
//!
//! Locates the snapshot tables of an unpacked SNOMED CT RF2 release and reads
//! them into the row types of [`snomed_types`].
//!
//! ```no_run
//! use snomed_loader::{locate_release_files, read_release, Rf2Config};
//!
//! let files = locate_release_files(
//!     "SnomedCT_ManagedServiceFR_PRODUCTION_FR1000315_20240621T120000Z",
//!     "en",
//!     Some("fr"),
//! )?;
//! let tables = read_release(&files, &Rf2Config::default())?;
//! println!("{} concepts", tables.concepts.len());
//! # Ok::<(), snomed_loader::Rf2Error>(())
//! ```
//!
//! ## Features
//!
//! - `parallel` (default): read the release tables concurrently with rayon.

#![warn(missing_docs)]

mod concept;
mod description;
mod loader;
pub mod parser;
mod refset;
mod relationship;
mod types;

pub use loader::{
    locate_release_files, parse_release_name, read_release, read_table, ReleaseTables,
    INTERNATIONAL_NAMESPACE,
};
pub use parser::{ColumnMap, Rf2Parser, Rf2Record};
pub use types::{LanguageFiles, ReleaseFiles, ReleaseName, Rf2Config, Rf2Error, Rf2Result};

// Re-export snomed-types for convenience
pub use snomed_types;
