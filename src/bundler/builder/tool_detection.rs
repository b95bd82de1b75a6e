//! External tool availability checking.
//!
//! Script bundling, transpilation, and minification are delegated to an
//! external bundler executable discovered on PATH.

use crate::bundler::error::{Error, Result};
use std::path::PathBuf;
use std::sync::LazyLock;

/// Whether the esbuild executable is available on PATH.
pub static HAS_ESBUILD: LazyLock<bool> = LazyLock::new(|| which::which("esbuild").is_ok());

/// Locates the esbuild executable.
///
/// # Errors
///
/// Returns [`Error::ToolNotFound`] with an installation hint when the
/// executable is not on PATH.
pub fn find_esbuild() -> Result<PathBuf> {
    which::which("esbuild").map_err(|_| Error::ToolNotFound {
        tool: "esbuild".to_string(),
        hint: "Install it with `npm install -g esbuild` or add node_modules/.bin to PATH"
            .to_string(),
    })
}
