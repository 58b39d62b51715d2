use rust_decimal::Decimal;
use tracing::info;

use crate::domain::{
    admin::{ports::AdminRepository, value_objects::Identity},
    category::ports::CategoryRepository,
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    jwt::ports::TokenRepository,
    media::ports::MediaStoragePort,
    menu_item::{
        entities::DEFAULT_CURRENCY, ports::MenuItemRepository, value_objects::NewMenuItem,
    },
    recommendation::ports::LLMClient,
    restaurant::{
        entities::{Menu, Restaurant, Theme},
        ports::{RestaurantRepository, RestaurantService},
        value_objects::{
            CreateRestaurantInput, CreateRestaurantRequest, DeleteRestaurantInput,
            MAX_RESTAURANT_NAME_LENGTH, MAX_THEME_COLOUR_LENGTH, MAX_THEME_NAME_LENGTH,
            UpdateThemeInput, normalize_slug,
        },
    },
};

const DEMO_SLUG: &str = "demo";
const DEMO_DISH: &str = "AR Pasta";

impl<R, CA, MI, A, H, T, MS, LLM, HC> RestaurantService
    for Service<R, CA, MI, A, H, T, MS, LLM, HC>
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
    async fn create_restaurant(
        &self,
        identity: Identity,
        input: CreateRestaurantInput,
    ) -> Result<Restaurant, CoreError> {
        let slug = normalize_slug(&input.slug)?;
        let name = input.name.trim().to_string();

        if name.is_empty() {
            return Err(CoreError::Invalid("name is required".to_string()));
        }
        if name.chars().count() > MAX_RESTAURANT_NAME_LENGTH {
            return Err(CoreError::Invalid(format!(
                "name must be at most {} characters",
                MAX_RESTAURANT_NAME_LENGTH
            )));
        }

        if self
            .restaurant_repository
            .get_by_slug(slug.clone())
            .await?
            .is_some()
        {
            return Err(CoreError::SlugAlreadyExists);
        }

        let restaurant = self
            .restaurant_repository
            .create_restaurant(CreateRestaurantRequest { name, slug })
            .await?;

        info!(
            admin = %identity.email,
            slug = %restaurant.slug,
            "restaurant created"
        );

        Ok(restaurant)
    }

    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, CoreError> {
        self.restaurant_repository.list_restaurants().await
    }

    async fn get_menu(&self, restaurant_slug: String) -> Result<Menu, CoreError> {
        let restaurant = self.restaurant_by_slug(&restaurant_slug).await?;

        let items = self
            .menu_item_repository
            .list_by_restaurant(restaurant.id, false)
            .await?;

        Ok(Menu { restaurant, items })
    }

    async fn update_theme(
        &self,
        identity: Identity,
        input: UpdateThemeInput,
    ) -> Result<Restaurant, CoreError> {
        let restaurant = self.restaurant_by_slug(&input.restaurant_slug).await?;
        let theme = Theme::from_parts(&input.name, &input.primary, &input.secondary);

        if theme.name.chars().count() > MAX_THEME_NAME_LENGTH
            || theme.primary.chars().count() > MAX_THEME_COLOUR_LENGTH
            || theme.secondary.chars().count() > MAX_THEME_COLOUR_LENGTH
        {
            return Err(CoreError::Invalid("theme values are too long".to_string()));
        }

        let restaurant = self
            .restaurant_repository
            .update_theme(restaurant.id, theme)
            .await?;

        info!(admin = %identity.email, slug = %restaurant.slug, "theme updated");

        Ok(restaurant)
    }

    async fn delete_restaurant(
        &self,
        identity: Identity,
        input: DeleteRestaurantInput,
    ) -> Result<(), CoreError> {
        let restaurant = self.restaurant_by_slug(&input.restaurant_slug).await?;

        self.restaurant_repository
            .delete_restaurant(restaurant.id)
            .await?;

        info!(admin = %identity.email, slug = %restaurant.slug, "restaurant deleted");

        Ok(())
    }

    async fn seed_demo(&self) -> Result<bool, CoreError> {
        let restaurant = match self
            .restaurant_repository
            .get_by_slug(DEMO_SLUG.to_string())
            .await?
        {
            Some(restaurant) => restaurant,
            None => {
                self.restaurant_repository
                    .create_restaurant(CreateRestaurantRequest {
                        name: "Demo Restaurant".to_string(),
                        slug: DEMO_SLUG.to_string(),
                    })
                    .await?
            }
        };

        let mains = self
            .category_repository
            .get_or_create_category(restaurant.id, "Mains".to_string())
            .await?;
        let pasta = self
            .category_repository
            .get_or_create_subcategory(mains.id, "Pasta".to_string())
            .await?;

        let items = self
            .menu_item_repository
            .list_by_restaurant(restaurant.id, false)
            .await?;
        if items.iter().any(|item| item.name == DEMO_DISH) {
            return Ok(false);
        }

        self.menu_item_repository
            .create_item(NewMenuItem {
                restaurant_id: restaurant.id,
                category_id: Some(mains.id),
                subcategory_id: Some(pasta.id),
                name: DEMO_DISH.to_string(),
                description: Some("Creamy pasta dish (3D model available).".to_string()),
                price: Decimal::new(1299, 2),
                currency: DEFAULT_CURRENCY.to_string(),
                image_url: Some("https://source.unsplash.com/800x600/?pasta".to_string()),
                model_url: None,
                is_available: true,
            })
            .await?;

        info!(slug = DEMO_SLUG, "seeded demo menu");

        Ok(true)
    }
}

impl<R, CA, MI, A, H, T, MS, LLM, HC> Service<R, CA, MI, A, H, T, MS, LLM, HC>
where
    R: RestaurantRepository,
{
    /// Slug lookups are case-insensitive on input; stored slugs are always
    /// lower-case.
    pub(crate) async fn restaurant_by_slug(&self, slug: &str) -> Result<Restaurant, CoreError> {
        self.restaurant_repository
            .get_by_slug(slug.trim().to_lowercase())
            .await?
            .ok_or(CoreError::RestaurantNotFound)
    }
}
