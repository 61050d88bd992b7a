//! Display items and the catalog that feeds the product grid.

use crate::{Error, Result};
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

pub const DEFAULT_PURCHASE_LABEL: &str = "Purchase Now";

fn default_purchase_label() -> String {
    DEFAULT_PURCHASE_LABEL.to_string()
}

/// Text content of one product card.
///
/// `price` is already formatted for display (e.g. `$29.99`) and is rendered
/// as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayItem {
    pub title: String,
    pub description: String,
    pub price: String,
    pub body: String,
    #[serde(default = "default_purchase_label")]
    pub purchase_label: String,
}

impl DisplayItem {
    /// Check that every field has visible text.
    pub fn validate(&self) -> std::result::Result<(), &'static str> {
        let fields = [
            ("title", &self.title),
            ("description", &self.description),
            ("price", &self.price),
            ("body", &self.body),
            ("purchase_label", &self.purchase_label),
        ];
        match fields.iter().find(|(_, v)| v.trim().is_empty()) {
            Some((name, _)) => Err(*name),
            None => Ok(()),
        }
    }
}

/// Ordered list of items shown on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    pub items: Vec<DisplayItem>,
}

impl Catalog {
    /// Catalog over the given items, in display order.
    pub fn new(items: Vec<DisplayItem>) -> Self {
        Self { items }
    }

    /// Catalog with no items; the page renders an empty grid.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The single product shipped with the app.
    pub fn builtin() -> Self {
        Self::new(vec![DisplayItem {
            title: "Digital Product".to_string(),
            description: "High-quality digital content".to_string(),
            price: "$29.99".to_string(),
            body: "Get access to premium digital content with lifetime updates.".to_string(),
            purchase_label: default_purchase_label(),
        }])
    }

    /// Parse a catalog from JSON. Accepts a bare array of items or an object
    /// with an `items` array. Every item is validated; failures carry the
    /// item's index.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw = match serde_json::from_str::<Value>(json)? {
            Value::Array(raw) => raw,
            Value::Object(mut obj) => match obj.remove("items") {
                Some(Value::Array(raw)) => raw,
                _ => {
                    return Err(Error::CatalogError(
                        "expected an `items` array in catalog object".into(),
                    ))
                }
            },
            _ => {
                return Err(Error::CatalogError(
                    "expected an array of items or an object with `items`".into(),
                ))
            }
        };

        let items = raw
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                serde_json::from_value::<DisplayItem>(value).map_err(|e| Error::MalformedItem {
                    index,
                    message: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let catalog = Self::new(items);
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read and parse a JSON catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&raw)?;
        info!("loaded {} item(s) from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Check every item, stopping at the first one with a blank field.
    pub fn validate(&self) -> Result<()> {
        for (index, item) in self.items.iter().enumerate() {
            item.validate()
                .map_err(|field| Error::InvalidItem { index, field })?;
        }
        Ok(())
    }

    /// Number of items (and rendered cards).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, DisplayItem> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_one_valid_item() {
        let c = Catalog::builtin();
        assert_eq!(c.len(), 1);
        assert!(c.validate().is_ok());
        assert_eq!(c.items[0].purchase_label, "Purchase Now");
    }

    #[test]
    fn parses_bare_array_and_defaults_label() {
        let json = r#"[{"title":"A","description":"B","price":"$1.00","body":"C"}]"#;
        let c = Catalog::from_json_str(json).unwrap();
        assert_eq!(c.items[0].purchase_label, DEFAULT_PURCHASE_LABEL);
    }

    #[test]
    fn parses_wrapped_items() {
        let json = r#"{"items":[]}"#;
        let c = Catalog::from_json_str(json).unwrap();
        assert!(c.is_empty());
    }

    #[test]
    fn rejects_blank_field_with_index() {
        let json = r#"[
            {"title":"A","description":"B","price":"$1.00","body":"C"},
            {"title":"A","description":"B","price":"  ","body":"C"}
        ]"#;
        match Catalog::from_json_str(json) {
            Err(Error::InvalidItem { index, field }) => {
                assert_eq!(index, 1);
                assert_eq!(field, "price");
            }
            other => panic!("expected InvalidItem, got {:?}", other),
        }
    }

    #[test]
    fn missing_field_reports_index() {
        let valid = r#"{"title":"A","description":"B","price":"$1.00","body":"C"}"#;
        let missing = r#"{"title":"A","description":"B","price":"$1"}"#;

        for json in [
            format!("[{},{}]", valid, missing),
            format!(r#"{{"items":[{},{}]}}"#, valid, missing),
        ] {
            match Catalog::from_json_str(&json) {
                Err(Error::MalformedItem { index, message }) => {
                    assert_eq!(index, 1);
                    assert!(message.contains("body"), "message: {}", message);
                }
                other => panic!("expected MalformedItem, got {:?}", other),
            }
        }
    }

    #[test]
    fn object_without_items_is_rejected() {
        let err = Catalog::from_json_str(r#"{"products":[]}"#).unwrap_err();
        assert!(matches!(err, Error::CatalogError(_)));
        let err = Catalog::from_json_str("42").unwrap_err();
        assert!(matches!(err, Error::CatalogError(_)));
    }

    #[test]
    fn builtin_round_trips_through_json() {
        let catalog = Catalog::builtin();
        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(Catalog::from_json_str(&json).unwrap(), catalog);

        let items_only = serde_json::to_string(&catalog.items).unwrap();
        assert_eq!(Catalog::from_json_str(&items_only).unwrap(), catalog);
    }

    #[test]
    fn malformed_json_is_catalog_error() {
        let err = Catalog::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, Error::CatalogError(_)));
    }
}
