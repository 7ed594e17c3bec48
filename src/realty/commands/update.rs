use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ProductPatch;
use crate::store::StorageBackend;

use super::helpers::find_product;

pub fn run<B: StorageBackend>(
    catalog: &mut Catalog<B>,
    id: &str,
    patch: ProductPatch,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut product = find_product(catalog, id)?;

    if patch.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Nothing to change for product {}",
            id
        )));
        return Ok(result.with_affected_products(vec![product]));
    }

    product.apply(patch);
    product.validate()?;

    let replaced = catalog.update(product.clone())?;
    if replaced == 0 {
        // Removed from the slot since this catalog last read it.
        result.add_message(CmdMessage::warning(format!(
            "Product {} is no longer stored; nothing updated",
            id
        )));
        return Ok(result);
    }

    result.add_message(CmdMessage::success(format!(
        "Product updated ({}): {}",
        product.id, product.name
    )));
    Ok(result.with_affected_products(vec![product]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::fixtures::{catalog_with, product};
    use crate::error::RealtyError;
    use crate::model::Product;

    #[test]
    fn changes_price_only() {
        let original = Product::new("1", "X", "d", 500000.0, "Villa", "/i.jpg");
        let mut catalog = catalog_with(std::slice::from_ref(&original));

        run(
            &mut catalog,
            "1",
            ProductPatch {
                price: Some(600000.0),
                ..Default::default()
            },
        )
        .unwrap();

        let stored = catalog.store().find_by_id("1").unwrap().unwrap();
        assert_eq!(stored.price, 600000.0);
        assert_eq!(stored.name, original.name);
        assert_eq!(stored.description, original.description);
        assert_eq!(stored.category, original.category);
        assert_eq!(stored.image_url, original.image_url);
        assert_eq!(catalog.products()[0].price, 600000.0);
    }

    #[test]
    fn unknown_id_errors() {
        let mut catalog = catalog_with(&[]);
        let patch = ProductPatch {
            name: Some("Y".into()),
            ..Default::default()
        };
        assert!(matches!(
            run(&mut catalog, "1", patch),
            Err(RealtyError::ProductNotFound(_))
        ));
    }

    #[test]
    fn invalid_patch_is_not_written() {
        let mut catalog = catalog_with(&[product("1", "Villa", 1.0)]);
        let patch = ProductPatch {
            price: Some(-5.0),
            ..Default::default()
        };
        assert!(matches!(
            run(&mut catalog, "1", patch),
            Err(RealtyError::Validation(_))
        ));
        assert_eq!(catalog.store().find_by_id("1").unwrap().unwrap().price, 1.0);
    }

    #[test]
    fn empty_patch_reports_and_keeps_product() {
        let mut catalog = catalog_with(&[product("1", "Villa", 1.0)]);
        let writes = catalog.store().backend().write_count();
        let result = run(&mut catalog, "1", ProductPatch::default()).unwrap();
        assert!(result.messages[0].content.starts_with("Nothing to change"));
        assert_eq!(catalog.store().backend().write_count(), writes);
    }
}
