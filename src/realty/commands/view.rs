use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::StorageBackend;

use super::helpers::find_product;

pub fn run<B: StorageBackend>(catalog: &Catalog<B>, id: &str) -> Result<CmdResult> {
    let product = find_product(catalog, id)?;
    Ok(CmdResult::default().with_listed_products(vec![product]))
}
