use crate::domain::category::entities::{Category, Subcategory};
use crate::entity::{categories::Model as CategoryModel, subcategories::Model as SubcategoryModel};

impl From<CategoryModel> for Category {
    fn from(model: CategoryModel) -> Self {
        Category {
            id: model.id,
            restaurant_id: model.restaurant_id,
            name: model.name,
            sort_order: model.sort_order,
            subcategories: Vec::new(),
        }
    }
}

impl From<SubcategoryModel> for Subcategory {
    fn from(model: SubcategoryModel) -> Self {
        Subcategory {
            id: model.id,
            category_id: model.category_id,
            name: model.name,
            sort_order: model.sort_order,
        }
    }
}

impl From<&SubcategoryModel> for Subcategory {
    fn from(model: &SubcategoryModel) -> Self {
        Subcategory::from(model.clone())
    }
}
