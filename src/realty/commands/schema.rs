use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::{RealtyError, Result};
use crate::seo::structured_data;
use crate::store::StorageBackend;

use super::helpers::find_product;

pub fn run<B: StorageBackend>(catalog: &Catalog<B>, id: &str, currency: &str) -> Result<CmdResult> {
    let product = find_product(catalog, id)?;
    let document = serde_json::to_string_pretty(&structured_data(&product, currency))
        .map_err(RealtyError::Serialization)?;
    Ok(CmdResult::default()
        .with_listed_products(vec![product])
        .with_document(document))
}
