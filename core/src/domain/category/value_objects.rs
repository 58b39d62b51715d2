pub const MAX_CATEGORY_NAME_LENGTH: usize = 80;

pub struct DeleteCategoryInput {
    pub restaurant_slug: String,
    pub category_id: i64,
}

/// Category labels as typed by an admin. Blank labels mean "none".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryLabels {
    pub category: Option<String>,
    pub subcategory: Option<String>,
}

impl CategoryLabels {
    pub fn new(category: Option<&str>, subcategory: Option<&str>) -> Self {
        Self {
            category: clean_label(category),
            subcategory: clean_label(subcategory),
        }
    }
}

fn clean_label(label: Option<&str>) -> Option<String> {
    label
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
}
