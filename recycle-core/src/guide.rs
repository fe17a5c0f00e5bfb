//! Disposal guide records.
//!
//! The guide arrives as loosely typed JSON. It is decoded once into
//! [`GuideData`]; callers never re-check field presence afterwards.

use log::warn;
use serde::{Deserialize, Serialize};

/// One disposable item within a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
}

/// A top-level guide category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    /// Emoji shown on the category tile.
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Category {
    /// First item with exactly this name.
    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.name == name)
    }
}

/// The full categorized disposal guide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideData {
    pub categories: Vec<Category>,
}

impl GuideData {
    /// First category with exactly this name. Duplicates are kept as-is.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Decode a raw `guide_data` value.
    ///
    /// Returns `None` for `null`, a missing `categories` array, or any shape
    /// that does not match the guide schema.
    pub fn from_value(value: serde_json::Value) -> Option<Self> {
        if value.is_null() {
            return None;
        }
        match serde_json::from_value::<GuideData>(value) {
            Ok(guide) => Some(guide),
            Err(e) => {
                warn!("Discarding malformed guide data: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_guide_with_defaults() {
        let guide = GuideData::from_value(json!({
            "categories": [
                {"name": "플라스틱", "icon": "🧴", "items": [
                    {"name": "병", "description": "라벨을 제거하세요."},
                    {"name": "용기", "image_path": "/static/images/box.jpg"}
                ]},
                {"name": "기타"}
            ]
        }))
        .unwrap();

        assert_eq!(guide.categories.len(), 2);
        let plastic = guide.category("플라스틱").unwrap();
        assert_eq!(plastic.item("병").unwrap().description, "라벨을 제거하세요.");
        assert_eq!(plastic.item("용기").unwrap().description, "");
        assert_eq!(
            plastic.item("용기").unwrap().image_path.as_deref(),
            Some("/static/images/box.jpg")
        );
        let other = guide.category("기타").unwrap();
        assert!(other.icon.is_empty());
        assert!(other.items.is_empty());
    }

    #[test]
    fn test_missing_categories_is_none() {
        assert!(GuideData::from_value(json!({})).is_none());
        assert!(GuideData::from_value(json!({"categories": "nope"})).is_none());
        assert!(GuideData::from_value(serde_json::Value::Null).is_none());
    }

    #[test]
    fn test_duplicate_category_names_first_wins() {
        let guide = GuideData::from_value(json!({
            "categories": [
                {"name": "종이", "icon": "📦", "items": []},
                {"name": "종이", "icon": "📰", "items": []}
            ]
        }))
        .unwrap();
        assert_eq!(guide.categories.len(), 2);
        assert_eq!(guide.category("종이").unwrap().icon, "📦");
    }
}
