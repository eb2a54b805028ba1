//! libquay - Quay Tag API queries for automation callers
//!
//! libquay lists the tags of a Quay repository and shapes the answer into
//! the result object an automation module returns: a success payload with
//! the tags, or a failure carrying every error collected on the way.
//!
//! # Quick Start
//!
//! ```no_run
//! use libquay::client::Client;
//! use libquay::module::{TagInfo, invoke};
//! use libquay::query::TagQuery;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new()?;
//!     let query = TagQuery::new("opentelekomcloud/apimon").with_only_active_tags(true);
//!
//!     let outcome = invoke(&TagInfo::new(client, query)).await;
//!     println!("{}", serde_json::to_string_pretty(&outcome)?);
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`TagInfo`] (`tag_info`) - tags sorted newest first
//! - [`TagList`] (`tag_list`) - tags in registry order
//!
//! Both read only: every [`Outcome`] reports `changed: false`.

#![warn(clippy::all)]

/// Returns the libquay crate version.
///
/// # Examples
///
/// ```
/// let version = libquay::version();
/// assert!(!version.is_empty());
/// ```
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub use client::{Client, ClientConfig, Transport};
pub use config::Config;
pub use error::{QuayError, Result};
pub use module::{ModuleKind, ModuleParams, QuayModule, TagInfo, TagList, invoke, run_module};
pub use outcome::{ErrorLog, Outcome};
pub use query::{LimitMapping, TagQuery};
pub use tag::Tag;

pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod module;
pub mod outcome;
pub mod query;
pub mod tag;
