use tracing::info;

use crate::domain::{
    admin::{ports::AdminRepository, value_objects::Identity},
    category::{
        entities::{Category, Subcategory},
        ports::{CategoryRepository, CategoryService},
        value_objects::{CategoryLabels, DeleteCategoryInput, MAX_CATEGORY_NAME_LENGTH},
    },
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    jwt::ports::TokenRepository,
    media::ports::MediaStoragePort,
    menu_item::ports::MenuItemRepository,
    recommendation::ports::LLMClient,
    restaurant::ports::RestaurantRepository,
};

impl<R, CA, MI, A, H, T, MS, LLM, HC> CategoryService for Service<R, CA, MI, A, H, T, MS, LLM, HC>
where
    R: RestaurantRepository,
    CA: CategoryRepository,
    MI: MenuItemRepository,
    A: AdminRepository,
    H: HasherRepository,
    T: TokenRepository,
    MS: MediaStoragePort,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    async fn list_categories(&self, restaurant_slug: String) -> Result<Vec<Category>, CoreError> {
        let restaurant = self.restaurant_by_slug(&restaurant_slug).await?;

        self.category_repository
            .list_by_restaurant(restaurant.id)
            .await
    }

    async fn delete_category(
        &self,
        identity: Identity,
        input: DeleteCategoryInput,
    ) -> Result<(), CoreError> {
        let restaurant = self.restaurant_by_slug(&input.restaurant_slug).await?;

        let category = self
            .category_repository
            .get_by_id(restaurant.id, input.category_id)
            .await?
            .ok_or(CoreError::CategoryNotFound)?;

        self.category_repository
            .delete_category(category.id)
            .await?;

        info!(
            admin = %identity.email,
            slug = %restaurant.slug,
            category_id = category.id,
            "category deleted"
        );

        Ok(())
    }
}

impl<R, CA, MI, A, H, T, MS, LLM, HC> Service<R, CA, MI, A, H, T, MS, LLM, HC>
where
    CA: CategoryRepository,
{
    /// Resolves typed labels to stored rows, creating missing ones. A
    /// subcategory is only attached when a category is present.
    pub(crate) async fn resolve_category_labels(
        &self,
        restaurant_id: i64,
        labels: CategoryLabels,
    ) -> Result<(Option<Category>, Option<Subcategory>), CoreError> {
        let Some(category_name) = labels.category else {
            return Ok((None, None));
        };
        check_label_length(&category_name)?;

        let category = self
            .category_repository
            .get_or_create_category(restaurant_id, category_name)
            .await?;

        let subcategory = match labels.subcategory {
            Some(name) => {
                check_label_length(&name)?;
                Some(
                    self.category_repository
                        .get_or_create_subcategory(category.id, name)
                        .await?,
                )
            }
            None => None,
        };

        Ok((Some(category), subcategory))
    }
}

fn check_label_length(label: &str) -> Result<(), CoreError> {
    if label.chars().count() > MAX_CATEGORY_NAME_LENGTH {
        return Err(CoreError::Invalid(format!(
            "category names must be at most {} characters",
            MAX_CATEGORY_NAME_LENGTH
        )));
    }
    Ok(())
}
