//! Multi-browser web extension packager library.
//!
//! This library provides the packaging pipeline behind the
//! `wext_bundler` binary:
//! - Per-browser output layout and archive formats (zip, xpi, crx)
//! - Vendor-prefixed manifest resolution
//! - Script bundling via an external bundler, page templating, asset
//!   copying, and development live-reload notification
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;
pub mod metadata;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
