use std::collections::BTreeMap;

use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{common::entities::app_errors::CoreError, menu_item::entities::MenuItem};

/// Per-request dietary constraints. Only `allergies` and `preference` are
/// enforced locally; the rest is forwarded to the ranker as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConstraintSet {
    pub diet: Option<String>,
    pub allergies: Option<Vec<String>>,
    pub preference: Option<String>,
    pub mood: Option<String>,
    pub budget: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Pick {
    pub id: i64,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recommendation {
    pub picks: Vec<Pick>,
}

/// Compact projection of a candidate item sent to the ranker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateItem {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub currency: String,
    pub category: Option<String>,
    pub subcategory: Option<String>,
}

impl From<&MenuItem> for CandidateItem {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone().unwrap_or_default(),
            price: item.price.to_f64().unwrap_or_default(),
            currency: item.currency.clone(),
            category: item.category.clone(),
            subcategory: item.subcategory.clone(),
        }
    }
}

/// Keyword lists behind the hard filters, keyed by allergy tag and by
/// protein preference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordTable {
    pub allergens: BTreeMap<String, Vec<String>>,
    pub proteins: BTreeMap<String, Vec<String>>,
}

impl Default for KeywordTable {
    fn default() -> Self {
        let allergens = BTreeMap::from([
            (
                "lactose".to_string(),
                words(&[
                    "cheese",
                    "mozzarella",
                    "cheddar",
                    "parmesan",
                    "cream",
                    "milk",
                    "butter",
                    "yogurt",
                    "ice cream",
                    "dairy",
                    "alfredo",
                    "bechamel",
                    "lactose",
                ]),
            ),
            (
                "gluten".to_string(),
                words(&[
                    "bread",
                    "bun",
                    "pizza",
                    "pasta",
                    "noodles",
                    "flour",
                    "wheat",
                    "wrap",
                    "tortilla",
                    "breadcrumbs",
                    "cracker",
                    "burger bun",
                ]),
            ),
        ]);

        let proteins = BTreeMap::from([
            (
                "chicken".to_string(),
                words(&["chicken", "tender", "nugget", "wings"]),
            ),
            (
                "beef".to_string(),
                words(&["beef", "burger", "steak", "brisket", "veal"]),
            ),
            (
                "seafood".to_string(),
                words(&[
                    "fish", "salmon", "tuna", "shrimp", "prawn", "crab", "lobster", "seafood",
                ]),
            ),
        ]);

        Self {
            allergens,
            proteins,
        }
    }
}

impl KeywordTable {
    /// Parses a table from JSON. A section missing from the file keeps its
    /// built-in lists. Keys and keywords are lower-cased and trimmed; blank
    /// keywords are dropped.
    pub fn from_json(raw: &str) -> Result<Self, CoreError> {
        let table: KeywordTable = serde_json::from_str(raw)
            .map_err(|e| CoreError::ConfigurationError(format!("invalid keyword table: {}", e)))?;

        Ok(Self {
            allergens: normalize(table.allergens),
            proteins: normalize(table.proteins),
        })
    }

    pub fn allergen_keywords(&self, tag: &str) -> Option<&[String]> {
        self.allergens
            .get(&tag.trim().to_lowercase())
            .map(Vec::as_slice)
    }

    pub fn protein_keywords(&self, preference: &str) -> Option<&[String]> {
        self.proteins
            .get(&preference.trim().to_lowercase())
            .map(Vec::as_slice)
    }
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

fn normalize(map: BTreeMap<String, Vec<String>>) -> BTreeMap<String, Vec<String>> {
    map.into_iter()
        .map(|(key, keywords)| {
            let keywords = keywords
                .into_iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect();
            (key.trim().to_lowercase(), keywords)
        })
        .collect()
}
