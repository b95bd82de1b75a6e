//! wext_bundler - multi-browser web extension packager.
//!
//! This binary packages a web extension project for a target browser:
//! it bundles the script entries, resolves the vendor-prefixed manifest,
//! renders the HTML pages, copies static assets, and, in production,
//! minifies and archives the result.

mod bundler;
mod cli;
mod error;
mod metadata;

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
