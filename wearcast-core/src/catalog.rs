//! The static clothing catalog.
//!
//! A hand-curated, compile-time table of items the engine draws from. It is
//! read-only reference data; every outfit holds copies of its entries.

use serde::{Deserialize, Serialize};

use crate::error::RecommendError;

/// Clothing category, used for rendering and for weather substitutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Top,
    Bottom,
    Outerwear,
    Footwear,
    Accessories,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Top => "top",
            Category::Bottom => "bottom",
            Category::Outerwear => "outerwear",
            Category::Footwear => "footwear",
            Category::Accessories => "accessories",
        }
    }
}

/// One catalog entry. Warmth is a 1 (lightest) to 5 (warmest) scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClothingItem {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub warmth_level: u8,
    pub description: &'static str,
}

const fn item(
    id: &'static str,
    name: &'static str,
    category: Category,
    warmth_level: u8,
    description: &'static str,
) -> ClothingItem {
    ClothingItem { id, name, category, warmth_level, description }
}

/// Waterproof stand-in for the light jacket on rainy days. Shares the light
/// jacket's id, category and warmth level so substitution is in place.
pub const RAIN_JACKET: ClothingItem = item(
    "light-jacket",
    "Rain Jacket",
    Category::Outerwear,
    3,
    "Waterproof jacket for rainy weather",
);

pub const CATALOG: [ClothingItem; 20] = [
    // Outerwear
    item("heavy-coat", "Heavy Winter Coat", Category::Outerwear, 5, "Insulated winter coat for freezing temperatures"),
    item("winter-jacket", "Winter Jacket", Category::Outerwear, 4, "Warm jacket for cold weather"),
    item("light-jacket", "Light Jacket", Category::Outerwear, 3, "Light jacket or windbreaker"),
    item("cardigan", "Cardigan/Sweater", Category::Outerwear, 2, "Light cardigan or pullover sweater"),
    item("hoodie", "Hoodie", Category::Outerwear, 2, "Casual hoodie or light sweater"),
    // Tops
    item("thermal-shirt", "Thermal Long Sleeve", Category::Top, 4, "Thermal or heavy long-sleeve shirt"),
    item("long-sleeve", "Long Sleeve Shirt", Category::Top, 3, "Regular long-sleeve shirt"),
    item("short-sleeve", "T-Shirt", Category::Top, 2, "Short-sleeve t-shirt"),
    item("tank-top", "Tank Top", Category::Top, 1, "Sleeveless top for hot weather"),
    // Bottoms
    item("thermal-pants", "Thermal Pants", Category::Bottom, 4, "Insulated pants for very cold weather"),
    item("jeans", "Jeans/Long Pants", Category::Bottom, 3, "Regular jeans or long pants"),
    item("light-pants", "Light Pants", Category::Bottom, 2, "Light pants or chinos"),
    item("shorts", "Shorts", Category::Bottom, 1, "Shorts for warm weather"),
    // Footwear
    item("winter-boots", "Winter Boots", Category::Footwear, 4, "Insulated boots for cold/snowy weather"),
    item("closed-shoes", "Closed Shoes", Category::Footwear, 3, "Regular shoes or sneakers"),
    item("light-shoes", "Light Shoes", Category::Footwear, 2, "Canvas shoes or light sneakers"),
    item("sandals", "Sandals", Category::Footwear, 1, "Open sandals for hot weather"),
    // Accessories
    item("winter-accessories", "Winter Accessories", Category::Accessories, 4, "Hat, gloves, scarf for cold weather"),
    item("light-accessories", "Light Accessories", Category::Accessories, 2, "Light scarf or hat"),
    item("sun-accessories", "Sun Protection", Category::Accessories, 1, "Sunglasses, hat for sun protection"),
];

/// Look up a catalog entry by id.
///
/// A miss means the catalog and the engine's item keys drifted apart; it is
/// surfaced as an explicit error rather than a silently missing item.
pub fn lookup(id: &str) -> Result<ClothingItem, RecommendError> {
    CATALOG
        .iter()
        .find(|entry| entry.id == id)
        .copied()
        .ok_or_else(|| RecommendError::UnknownCatalogItem(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate catalog id: {}", a.id);
            }
        }
    }

    #[test]
    fn warmth_levels_within_scale() {
        for entry in &CATALOG {
            assert!(
                (1..=5).contains(&entry.warmth_level),
                "{} has warmth {} outside 1..=5",
                entry.id,
                entry.warmth_level
            );
        }
    }

    #[test]
    fn lookup_known_item() {
        let jacket = lookup("light-jacket").expect("light-jacket must exist");
        assert_eq!(jacket.name, "Light Jacket");
        assert_eq!(jacket.category, Category::Outerwear);
        assert_eq!(jacket.warmth_level, 3);
    }

    #[test]
    fn lookup_unknown_item_errors() {
        let err = lookup("parka").unwrap_err();
        assert_eq!(err, RecommendError::UnknownCatalogItem("parka".to_string()));
    }

    #[test]
    fn rain_jacket_mirrors_light_jacket() {
        let jacket = lookup("light-jacket").expect("light-jacket must exist");
        assert_eq!(RAIN_JACKET.id, jacket.id);
        assert_eq!(RAIN_JACKET.category, jacket.category);
        assert_eq!(RAIN_JACKET.warmth_level, jacket.warmth_level);
        assert_ne!(RAIN_JACKET.name, jacket.name);
    }
}
