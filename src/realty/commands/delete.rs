use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::StorageBackend;

/// Removes each id. Ids that are not stored only produce a warning.
pub fn run<B: StorageBackend, I: AsRef<str>>(catalog: &mut Catalog<B>, ids: &[I]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for id in ids {
        let id = id.as_ref();
        let existing = catalog.products().iter().find(|p| p.id == id).cloned();
        let removed = catalog.remove(id)?;

        match (removed, existing) {
            (0, _) => result.add_message(CmdMessage::warning(format!(
                "Product not found: {}",
                id
            ))),
            (_, Some(product)) => {
                result.add_message(CmdMessage::success(format!(
                    "Product deleted ({}): {}",
                    product.id, product.name
                )));
                result.affected_products.push(product);
            }
            (_, None) => {
                result.add_message(CmdMessage::success(format!("Product deleted ({})", id)))
            }
        }
    }

    Ok(result)
}
