//! Core sync engine.
//!
//! ## Module Structure
//!
//! - `parsers`: TypeScript parsing (swc)
//! - `extract`: Registry marker extraction from one file
//! - `aggregate`: Import and declaration lines across all scanned files
//! - `writer`: Registry file probing, rendering and writing
//! - `files`: Path pattern expansion
//! - `project`: Package name lookup
//! - `sync`: The pipeline tying them together

pub mod aggregate;
pub mod extract;
pub mod files;
pub mod parsers;
pub mod project;
pub mod sync;
pub mod writer;

pub use aggregate::{GeneratedRegistryBody, ScanResult, build_registry_body};
pub use extract::{ExtractError, RegistryMember, extract_registry_members};
pub use sync::{SyncOutcome, sync_registry};
