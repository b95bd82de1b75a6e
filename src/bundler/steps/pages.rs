//! Pages step - renders HTML templates and injects bundle tags.
//!
//! Templates are rendered through Handlebars with the package metadata
//! as data, then a `<link>`/`<script>` tag pair per chunk is injected
//! before the closing body tag. When the referenced bundle exists its
//! content hash is appended as a cache-busting query.

use crate::bundler::error::ErrorExt;
use crate::bundler::{Result, Settings, builder::calculate_sha256, settings::PageSettings};
use handlebars::Handlebars;
use std::collections::BTreeMap;
use std::path::PathBuf;

pub async fn run(settings: &Settings) -> Result<Vec<PathBuf>> {
    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);

    let mut data = BTreeMap::new();
    data.insert("name", settings.product_name().to_string());
    data.insert("version", settings.version_string().to_string());
    data.insert("description", settings.package().description.clone());
    data.insert("browser", settings.browser().name().to_string());
    data.insert("mode", settings.mode().to_string());

    let mut emitted = Vec::with_capacity(settings.pages().len());

    for page in settings.pages() {
        let template = tokio::fs::read_to_string(&page.template)
            .await
            .fs_context("reading page template", &page.template)?;

        let rendered = handlebars.render_template(&template, &data)?;
        let html = inject_tags(rendered, page, settings).await?;

        let out_path = settings.out_dir().join(&page.filename);
        if let Some(parent) = out_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .fs_context("creating page directory", parent)?;
        }
        tokio::fs::write(&out_path, html)
            .await
            .fs_context("writing page", &out_path)?;

        log::debug!("Emitted page {}", out_path.display());
        emitted.push(out_path);
    }

    Ok(emitted)
}

/// Builds the tag block for the page's chunks and inserts it before the
/// closing body tag, or appends it when the template has none.
async fn inject_tags(html: String, page: &PageSettings, settings: &Settings) -> Result<String> {
    let mut tags = String::new();

    for chunk in &page.chunks {
        let bundle = settings.bundle_path(chunk);
        let suffix = if bundle.exists() {
            let hash = calculate_sha256(&bundle).await?;
            format!("?v={}", &hash[..8])
        } else {
            String::new()
        };

        let css = settings.css_path(chunk);
        if css.exists() {
            tags.push_str(&format!(
                "  <link rel=\"stylesheet\" href=\"css/{chunk}.css{suffix}\">\n"
            ));
        }

        tags.push_str(&format!(
            "  <script src=\"js/{chunk}.bundle.js{suffix}\"></script>\n"
        ));
    }

    match html.rfind("</body>") {
        Some(idx) => {
            let mut out = String::with_capacity(html.len() + tags.len());
            out.push_str(&html[..idx]);
            out.push_str(&tags);
            out.push_str(&html[idx..]);
            Ok(out)
        }
        None => Ok(html + &tags),
    }
}
