use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ProductDraft;
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(catalog: &mut Catalog<B>, draft: ProductDraft) -> Result<CmdResult> {
    let product = draft.into_product(catalog.products());
    product.validate()?;

    catalog.add(product.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product added ({}): {}",
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

    fn draft(id: &str) -> ProductDraft {
        ProductDraft {
            id: id.into(),
            name: "X".into(),
            description: "d".into(),
            price: 500000.0,
            category: "Villa".into(),
            image_url: "/i.jpg".into(),
        }
    }

    #[test]
    fn adds_to_empty_store() {
        let mut catalog = catalog_with(&[]);
        let result = run(&mut catalog, draft("1")).unwrap();

        let expected = Product::new("1", "X", "d", 500000.0, "Villa", "/i.jpg");
        assert_eq!(catalog.store().read_all().unwrap(), vec![expected.clone()]);
        assert_eq!(catalog.products(), vec![expected.clone()]);
        assert_eq!(result.affected_products, vec![expected]);
    }

    #[test]
    fn assigns_id_when_missing() {
        let mut catalog = catalog_with(&[]);
        let result = run(&mut catalog, draft("")).unwrap();
        let id = &result.affected_products[0].id;
        assert!(!id.is_empty());
        assert!(catalog.store().find_by_id(id).unwrap().is_some());
    }

    #[test]
    fn rejects_blank_name_without_writing() {
        let mut catalog = catalog_with(&[]);
        let mut bad = draft("1");
        bad.name = "".into();
        assert!(matches!(
            run(&mut catalog, bad),
            Err(RealtyError::Validation(_))
        ));
        assert!(catalog.store().read_all().unwrap().is_empty());
    }

    #[test]
    fn rejects_duplicate_id() {
        let mut catalog = catalog_with(&[product("1", "Villa", 1.0)]);
        assert!(matches!(
            run(&mut catalog, draft("1")),
            Err(RealtyError::DuplicateId(_))
        ));
        assert_eq!(catalog.products().len(), 1);
    }
}
