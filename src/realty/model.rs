use crate::error::{RealtyError, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A single listing as it is persisted in the storage slot.
///
/// Field names on the wire are `id, name, description, price, category, imageUrl`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image_url: String,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        category: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price,
            category: category.into(),
            image_url: image_url.into(),
        }
    }

    /// Checks the constraints the store itself does not enforce.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(RealtyError::Validation("name cannot be empty".into()));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(RealtyError::Validation(format!(
                "price must be a non-negative number, got {}",
                self.price
            )));
        }
        Ok(())
    }

    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
    }
}

/// Input for a new listing. An empty `id` gets a time-based one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image_url: String,
}

impl ProductDraft {
    /// Turns the draft into a product, picking an id that no product in
    /// `taken` uses when the draft has none.
    pub fn into_product(self, taken: &[Product]) -> Product {
        let id = if self.id.trim().is_empty() {
            next_id(taken)
        } else {
            self.id
        };
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            image_url: self.image_url,
        }
    }
}

/// Partial edit of an existing listing. `None` leaves the field as is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub image_url: Option<String>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.image_url.is_none()
    }
}

/// Milliseconds since the epoch, bumped past any id already in use.
pub fn next_id(taken: &[Product]) -> String {
    let mut candidate = Utc::now().timestamp_millis();
    while taken.iter().any(|p| p.id == candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn villa() -> Product {
        Product::new("1", "X", "d", 500000.0, "Villa", "/i.jpg")
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let json = serde_json::to_value(villa()).unwrap();
        let obj = json.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(|k| k.as_str()).collect();
        keys.sort();
        assert_eq!(
            keys,
            vec!["category", "description", "id", "imageUrl", "name", "price"]
        );
        assert!(obj["price"].is_number());
    }

    #[test]
    fn deserializes_original_format() {
        let raw = r#"{"id":"7","name":"Loft","description":"","price":12.5,"category":"Apartment","imageUrl":"/a.png"}"#;
        let p: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(p.image_url, "/a.png");
        assert_eq!(p.price, 12.5);
    }

    #[test]
    fn validate_rejects_blank_name() {
        let mut p = villa();
        p.name = "   ".into();
        assert!(matches!(p.validate(), Err(RealtyError::Validation(_))));
    }

    #[test]
    fn validate_rejects_negative_and_nan_price() {
        let mut p = villa();
        p.price = -1.0;
        assert!(p.validate().is_err());
        p.price = f64::NAN;
        assert!(p.validate().is_err());
        p.price = 0.0;
        assert!(p.validate().is_ok());
    }

    #[test]
    fn draft_keeps_caller_id() {
        let draft = ProductDraft {
            id: "abc".into(),
            name: "X".into(),
            ..Default::default()
        };
        assert_eq!(draft.into_product(&[]).id, "abc");
    }

    #[test]
    fn draft_without_id_gets_unused_time_id() {
        let first = ProductDraft::default().into_product(&[]);
        assert!(first.id.parse::<i64>().is_ok());

        // Same millisecond or not, the second id must differ from the first.
        let second = ProductDraft::default().into_product(std::slice::from_ref(&first));
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn patch_only_touches_present_fields() {
        let mut p = villa();
        p.apply(ProductPatch {
            price: Some(600000.0),
            ..Default::default()
        });
        assert_eq!(p.price, 600000.0);
        assert_eq!(p.name, "X");
        assert_eq!(p.category, "Villa");
        assert!(ProductPatch::default().is_empty());
    }
}
