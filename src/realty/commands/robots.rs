use crate::commands::CmdResult;
use crate::error::{RealtyError, Result};
use crate::seo::robots;

pub fn run(base_url: Option<&str>) -> Result<CmdResult> {
    let base_url = base_url.ok_or_else(|| {
        RealtyError::Config("base_url is not set (use --base-url or REALTY_BASE_URL)".to_string())
    })?;
    Ok(CmdResult::default().with_document(robots(base_url)?))
}
