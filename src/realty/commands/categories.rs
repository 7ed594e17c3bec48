use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter::categories;
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(catalog: &Catalog<B>) -> Result<CmdResult> {
    Ok(CmdResult {
        categories: categories(catalog.products()),
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::fixtures::{catalog_with, product};

    #[test]
    fn lists_distinct_categories() {
        let catalog = catalog_with(&[
            product("1", "Villa", 1.0),
            product("2", "Apartment", 1.0),
            product("3", "Villa", 1.0),
        ]);
        let result = run(&catalog).unwrap();
        assert_eq!(result.categories, vec!["Villa", "Apartment"]);
    }
}
