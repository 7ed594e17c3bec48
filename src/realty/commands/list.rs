use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::{filtered, ProductFilter};
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(catalog: &Catalog<B>, filter: &ProductFilter) -> Result<CmdResult> {
    let products = filtered(catalog.products(), filter);
    let mut result = CmdResult::default();

    if products.is_empty() {
        if catalog.products().is_empty() {
            result.add_message(CmdMessage::info(
                "No products available. Add one with `realty add`.",
            ));
        } else {
            result.add_message(CmdMessage::info(
                "No products found. Try adjusting your filter criteria.",
            ));
        }
    } else {
        let n = products.len();
        result.add_message(CmdMessage::info(format!(
            "Showing {} product{}",
            n,
            if n == 1 { "" } else { "s" }
        )));
    }

    Ok(result.with_listed_products(products))
}
