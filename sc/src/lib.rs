//! SchemaCheck - validator for backend collection schema exports
//!
//! Checks a collection-definition document (a JSON array of collections, each with an
//! `id`, `name`, `type` and an ordered field `schema`) against a fixed rule set and
//! collects every error and warning in a single pass.
//!
//! A `schema` that is present but not a list is reported as an error
//! (`Schema must be a list of fields`) instead of being skipped, so such documents
//! count one more error than a plain required-field check would give.
//!
//! # Example
//!
//! ```ignore
//! use schemacheck::{load_collections, validate};
//!
//! let collections = load_collections("pocketbase_collections.json")?;
//! let report = validate(&collections);
//! if !report.is_success() {
//!     for error in report.errors() {
//!         eprintln!("{}", error);
//!     }
//! }
//! ```

pub mod cli;
pub mod config;
mod error;
mod loader;
mod model;
mod report;
mod validator;

pub use error::LoadError;
pub use loader::{load_collections, parse_collections};
pub use model::{CollectionDefinition, CollectionType, FieldDefinition, Schema};
pub use report::ValidationReport;
pub use validator::{CONVENTIONS, ConventionRule, validate};

/// Input document looked up when no path is configured
pub const DEFAULT_INPUT_FILE: &str = "pocketbase_collections.json";
