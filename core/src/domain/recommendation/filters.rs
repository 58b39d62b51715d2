use crate::domain::{
    menu_item::entities::MenuItem,
    recommendation::entities::{ConstraintSet, KeywordTable},
};

/// Keeps the items that satisfy every hard constraint, preserving order.
///
/// An allergy tag excludes any item whose lower-cased name and description
/// contain one of the tag's keywords. A protein preference keeps only items
/// containing at least one of its keywords. Tags and preferences without a
/// table entry impose nothing.
pub fn filter_candidates(
    items: Vec<MenuItem>,
    constraints: &ConstraintSet,
    table: &KeywordTable,
) -> Vec<MenuItem> {
    let excluded: Vec<&[String]> = constraints
        .allergies
        .iter()
        .flatten()
        .filter_map(|tag| table.allergen_keywords(tag))
        .collect();

    let required = constraints
        .preference
        .as_deref()
        .and_then(|preference| table.protein_keywords(preference));

    items
        .into_iter()
        .filter(|item| {
            let text = item.searchable_text();

            let allergen_free = excluded
                .iter()
                .all(|keywords| !contains_any(&text, keywords));
            let protein_match = required.is_none_or(|keywords| contains_any(&text, keywords));

            allergen_free && protein_match
        })
        .collect()
}

fn contains_any(text: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|k| text.contains(k.as_str()))
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::Utc;
    use rust_decimal::Decimal;

    use super::*;

    fn item(id: i64, name: &str, description: Option<&str>) -> MenuItem {
        MenuItem {
            id,
            restaurant_id: 1,
            category_id: None,
            subcategory_id: None,
            category: None,
            subcategory: None,
            name: name.to_string(),
            description: description.map(str::to_string),
            price: Decimal::from_str("9.90").unwrap(),
            currency: "USD".to_string(),
            image_url: None,
            model_url: None,
            is_available: true,
            created_at: Utc::now(),
        }
    }

    fn ids(items: &[MenuItem]) -> Vec<i64> {
        items.iter().map(|i| i.id).collect()
    }

    fn sample_menu() -> Vec<MenuItem> {
        vec![
            item(1, "Cheese Pizza", None),
            item(2, "Grilled Chicken Salad", None),
            item(3, "Beef Burger", None),
        ]
    }

    #[test]
    fn test_gluten_allergy_with_chicken_preference() {
        let constraints = ConstraintSet {
            allergies: Some(vec!["gluten".to_string()]),
            preference: Some("chicken".to_string()),
            ..Default::default()
        };

        let kept = filter_candidates(sample_menu(), &constraints, &KeywordTable::default());
        assert_eq!(ids(&kept), vec![2]);
    }

    #[test]
    fn test_no_constraints_keeps_everything_in_order() {
        let menu = vec![
            item(5, "Tomato Soup", None),
            item(1, "Cheese Pizza", None),
            item(4, "Salmon", Some("with butter")),
            item(2, "Fries", None),
            item(3, "Beef Burger", None),
        ];

        let kept = filter_candidates(menu, &ConstraintSet::default(), &KeywordTable::default());
        assert_eq!(ids(&kept), vec![5, 1, 4, 2, 3]);
    }

    #[test]
    fn test_lactose_allergy_checks_description_too() {
        let menu = vec![
            item(1, "Salmon", Some("pan seared in BUTTER")),
            item(2, "Green Salad", Some("olive oil dressing")),
            item(3, "Vanilla Ice Cream", None),
        ];
        let constraints = ConstraintSet {
            allergies: Some(vec!["  LACTOSE ".to_string()]),
            ..Default::default()
        };

        let table = KeywordTable::default();
        let kept = filter_candidates(menu, &constraints, &table);
        assert_eq!(ids(&kept), vec![2]);

        let lactose = table.allergen_keywords("lactose").unwrap();
        assert!(
            kept.iter()
                .all(|i| !lactose.iter().any(|w| i.searchable_text().contains(w.as_str())))
        );
    }

    #[test]
    fn test_protein_preferences_require_a_keyword() {
        let menu = vec![
            item(1, "Chicken Wings", None),
            item(2, "Ribeye Steak", None),
            item(3, "Shrimp Tacos", None),
            item(4, "Garden Salad", None),
        ];
        let table = KeywordTable::default();

        for (preference, expected) in [("chicken", vec![1]), ("beef", vec![2]), ("Seafood ", vec![3])] {
            let constraints = ConstraintSet {
                preference: Some(preference.to_string()),
                ..Default::default()
            };
            let kept = filter_candidates(menu.clone(), &constraints, &table);
            assert_eq!(ids(&kept), expected, "preference {preference}");
        }
    }

    #[test]
    fn test_unknown_tags_impose_nothing() {
        let constraints = ConstraintSet {
            allergies: Some(vec!["peanuts".to_string()]),
            preference: Some("tofu".to_string()),
            diet: Some("vegan".to_string()),
            budget: Some(1.0),
            ..Default::default()
        };

        let kept = filter_candidates(sample_menu(), &constraints, &KeywordTable::default());
        assert_eq!(ids(&kept), vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_preference_is_a_no_op() {
        let constraints = ConstraintSet {
            preference: Some("   ".to_string()),
            ..Default::default()
        };

        let kept = filter_candidates(sample_menu(), &constraints, &KeywordTable::default());
        assert_eq!(kept.len(), 3);
    }
}
