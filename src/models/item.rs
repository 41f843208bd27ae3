use garde::Validate;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::services::validation::http_url;

/// Slot a catalog item fills when composing a look.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Display, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Top,
    Bottom,
    Accessory,
    Shoes,
    Background,
}

/// Catalog item available for try-on. Stored in the `item` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Item {
    #[garde(skip)]
    pub name: String,

    #[garde(skip)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    #[garde(skip)]
    pub category: Category,

    /// Price in dollars.
    #[garde(range(min = 0.0))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Preview image shown in the catalog.
    #[garde(custom(http_url))]
    pub image_url: String,

    #[garde(skip)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Item {
    pub const COLLECTION: &'static str = "item";
}

/// Response after creating a catalog item.
#[derive(Debug, Serialize, Deserialize)]
pub struct ItemCreated {
    pub id: String,
}
