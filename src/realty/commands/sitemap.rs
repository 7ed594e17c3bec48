use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{RealtyError, Result};
use crate::seo::{render_sitemap_xml, sitemap};
use crate::store::StorageBackend;
use chrono::{DateTime, Utc};

pub fn run<B: StorageBackend>(
    catalog: &Catalog<B>,
    base_url: Option<&str>,
    now: DateTime<Utc>,
) -> Result<CmdResult> {
    let base_url = base_url.ok_or_else(|| {
        RealtyError::Config("base_url is not set (use --base-url or REALTY_BASE_URL)".to_string())
    })?;
    let entries = sitemap(base_url, catalog.products(), now)?;

    let mut result = CmdResult::default().with_document(render_sitemap_xml(&entries));
    result.add_message(CmdMessage::info(format!("{} urls", entries.len())));
    Ok(result)
}
