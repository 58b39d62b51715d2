use tracing::info;

use crate::domain::{
    admin::{ports::AdminRepository, value_objects::Identity},
    category::ports::CategoryRepository,
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    jwt::ports::TokenRepository,
    media::{
        entities::{MediaKind, MediaUpload},
        ports::MediaStoragePort,
        value_objects::ensure_media_size,
    },
    menu_item::{
        entities::{DEFAULT_CURRENCY, MenuItem},
        ports::{MenuItemRepository, MenuItemService},
        value_objects::{CreateMenuItemInput, ItemTarget, NewMenuItem, UpdateMenuItemInput},
    },
    recommendation::ports::LLMClient,
    restaurant::{entities::Restaurant, ports::RestaurantRepository},
};

impl<R, CA, MI, A, H, T, MS, LLM, HC> MenuItemService for Service<R, CA, MI, A, H, T, MS, LLM, HC>
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
    async fn create_item(
        &self,
        identity: Identity,
        input: CreateMenuItemInput,
    ) -> Result<MenuItem, CoreError> {
        let restaurant = self.restaurant_by_slug(&input.restaurant_slug).await?;
        let fields = input.fields.validated()?;
        check_uploads(&input.image, &input.model)?;

        let (category, subcategory) = self
            .resolve_category_labels(restaurant.id, fields.labels)
            .await?;

        let image_url = self
            .store_media(&restaurant, MediaKind::Image, input.image)
            .await?;
        let model_url = self
            .store_media(&restaurant, MediaKind::Model, input.model)
            .await?;

        let item = self
            .menu_item_repository
            .create_item(NewMenuItem {
                restaurant_id: restaurant.id,
                category_id: category.map(|c| c.id),
                subcategory_id: subcategory.map(|s| s.id),
                name: fields.name,
                description: fields.description,
                price: fields.price,
                currency: DEFAULT_CURRENCY.to_string(),
                image_url,
                model_url,
                is_available: true,
            })
            .await?;

        info!(
            admin = %identity.email,
            slug = %restaurant.slug,
            item_id = item.id,
            "menu item created"
        );

        Ok(item)
    }

    async fn update_item(
        &self,
        identity: Identity,
        input: UpdateMenuItemInput,
    ) -> Result<MenuItem, CoreError> {
        let (restaurant, mut item) = self.resolve_item_target(input.target).await?;
        let fields = input.fields.validated()?;
        check_uploads(&input.image, &input.model)?;

        let (category, subcategory) = self
            .resolve_category_labels(restaurant.id, fields.labels)
            .await?;

        if let Some(url) = self
            .store_media(&restaurant, MediaKind::Image, input.image)
            .await?
        {
            item.image_url = Some(url);
        }
        if let Some(url) = self
            .store_media(&restaurant, MediaKind::Model, input.model)
            .await?
        {
            item.model_url = Some(url);
        }

        item.name = fields.name;
        item.description = fields.description;
        item.price = fields.price;
        item.category_id = category.as_ref().map(|c| c.id);
        item.category = category.map(|c| c.name);
        item.subcategory_id = subcategory.as_ref().map(|s| s.id);
        item.subcategory = subcategory.map(|s| s.name);
        if let Some(is_available) = fields.is_available {
            item.is_available = is_available;
        }

        let item = self.menu_item_repository.update_item(item).await?;

        info!(
            admin = %identity.email,
            slug = %restaurant.slug,
            item_id = item.id,
            "menu item updated"
        );

        Ok(item)
    }

    async fn delete_item(&self, identity: Identity, target: ItemTarget) -> Result<(), CoreError> {
        let (restaurant, item) = self.resolve_item_target(target).await?;

        self.menu_item_repository.delete_item(item.id).await?;

        info!(
            admin = %identity.email,
            slug = %restaurant.slug,
            item_id = item.id,
            "menu item deleted"
        );

        Ok(())
    }
}

impl<R, CA, MI, A, H, T, MS, LLM, HC> Service<R, CA, MI, A, H, T, MS, LLM, HC>
where
    R: RestaurantRepository,
    MI: MenuItemRepository,
    MS: MediaStoragePort,
{
    async fn resolve_item_target(
        &self,
        target: ItemTarget,
    ) -> Result<(Restaurant, MenuItem), CoreError> {
        match target {
            ItemTarget::Scoped {
                restaurant_slug,
                item_id,
            } => {
                let restaurant = self.restaurant_by_slug(&restaurant_slug).await?;
                let item = self
                    .menu_item_repository
                    .get_by_id(item_id)
                    .await?
                    .filter(|item| item.restaurant_id == restaurant.id)
                    .ok_or(CoreError::ItemNotInRestaurant)?;
                Ok((restaurant, item))
            }
            ItemTarget::Global { item_id } => {
                let item = self
                    .menu_item_repository
                    .get_by_id(item_id)
                    .await?
                    .ok_or(CoreError::ItemNotFound)?;
                let restaurant = self
                    .restaurant_repository
                    .get_by_id(item.restaurant_id)
                    .await?
                    .ok_or(CoreError::RestaurantNotFound)?;
                Ok((restaurant, item))
            }
        }
    }

    async fn store_media(
        &self,
        restaurant: &Restaurant,
        kind: MediaKind,
        upload: Option<MediaUpload>,
    ) -> Result<Option<String>, CoreError> {
        let Some(upload) = upload.filter(|u| !u.data.is_empty()) else {
            return Ok(None);
        };

        let stored = self
            .media_storage
            .store(restaurant.slug.clone(), kind, upload)
            .await?;

        Ok(Some(stored.url))
    }
}

fn check_uploads(image: &Option<MediaUpload>, model: &Option<MediaUpload>) -> Result<(), CoreError> {
    for upload in [image, model].into_iter().flatten() {
        ensure_media_size(upload)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bytes::Bytes;
    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::{
        category::value_objects::CategoryLabels,
        common::test_support::{TestService, test_service},
        menu_item::value_objects::MenuItemFields,
        restaurant::value_objects::CreateRestaurantRequest,
    };

    fn identity() -> Identity {
        Identity {
            email: "admin@example.com".to_string(),
        }
    }

    fn fields(name: &str, category: Option<&str>, subcategory: Option<&str>) -> MenuItemFields {
        MenuItemFields {
            name: name.to_string(),
            description: Some("with basil".to_string()),
            price: Decimal::from_str("5.5").unwrap(),
            labels: CategoryLabels::new(category, subcategory),
            is_available: None,
        }
    }

    fn upload(name: &str, data: &'static [u8]) -> MediaUpload {
        MediaUpload {
            filename: Some(name.to_string()),
            content_type: None,
            data: Bytes::from_static(data),
        }
    }

    async fn seeded(slugs: &[&str]) -> TestService {
        let service = test_service();
        for slug in slugs {
            service
                .restaurant_repository
                .create_restaurant(CreateRestaurantRequest {
                    name: slug.to_string(),
                    slug: slug.to_string(),
                })
                .await
                .unwrap();
        }
        service
    }

    async fn create(service: &TestService, slug: &str, name: &str) -> MenuItem {
        service
            .create_item(
                identity(),
                CreateMenuItemInput {
                    restaurant_slug: slug.to_string(),
                    fields: fields(name, Some("Mains"), Some("Soups")),
                    image: Some(upload("soup.png", b"png")),
                    model: None,
                },
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_resolves_labels_and_stores_media() {
        let service = seeded(&["demo"]).await;

        let item = create(&service, "demo", "Tomato Soup").await;

        assert_eq!(item.currency, DEFAULT_CURRENCY);
        assert!(item.is_available);
        assert_eq!(item.price, Decimal::from_str("5.50").unwrap());
        assert!(item.image_url.unwrap().starts_with("http://media.test/demo/"));
        assert_eq!(item.model_url, None);

        let categories = service.category_repository.rows.lock().unwrap().clone();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Mains");
        assert_eq!(item.category_id, Some(categories[0].id));
        assert_eq!(item.subcategory_id, Some(categories[0].subcategories[0].id));
    }

    #[tokio::test]
    async fn test_subcategory_without_category_is_ignored() {
        let service = seeded(&["demo"]).await;

        let item = service
            .create_item(
                identity(),
                CreateMenuItemInput {
                    restaurant_slug: "demo".to_string(),
                    fields: fields("Bread", Some("  "), Some("Sides")),
                    image: None,
                    model: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(item.category_id, None);
        assert_eq!(item.subcategory_id, None);
        assert!(service.category_repository.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_for_unknown_restaurant_fails() {
        let service = seeded(&[]).await;

        let result = service
            .create_item(
                identity(),
                CreateMenuItemInput {
                    restaurant_slug: "nowhere".to_string(),
                    fields: fields("Soup", None, None),
                    image: None,
                    model: None,
                },
            )
            .await;

        assert_eq!(result, Err(CoreError::RestaurantNotFound));
    }

    #[tokio::test]
    async fn test_scoped_update_rejects_item_of_other_restaurant() {
        let service = seeded(&["demo", "other"]).await;
        let item = create(&service, "other", "Soup").await;

        let result = service
            .update_item(
                identity(),
                UpdateMenuItemInput {
                    target: ItemTarget::Scoped {
                        restaurant_slug: "demo".to_string(),
                        item_id: item.id,
                    },
                    fields: fields("Renamed", None, None),
                    image: None,
                    model: None,
                },
            )
            .await;

        assert_eq!(result, Err(CoreError::ItemNotInRestaurant));
    }

    #[tokio::test]
    async fn test_update_keeps_media_unless_replaced() {
        let service = seeded(&["demo"]).await;
        let item = create(&service, "demo", "Soup").await;
        let original_image = item.image_url.clone();

        let mut changes = fields("Tomato Soup", None, None);
        changes.is_available = Some(false);

        let updated = service
            .update_item(
                identity(),
                UpdateMenuItemInput {
                    target: ItemTarget::Global { item_id: item.id },
                    fields: changes,
                    image: Some(upload("empty.jpg", b"")),
                    model: Some(upload("dish.glb", b"glTF")),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.image_url, original_image);
        assert!(updated.model_url.unwrap().contains("/demo/model-"));
        assert!(!updated.is_available);
        assert_eq!(updated.name, "Tomato Soup");
        assert_eq!(updated.category_id, None);

        let stored = service.media_storage.stored.lock().unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[1].1, MediaKind::Model);
    }

    #[tokio::test]
    async fn test_update_without_availability_keeps_flag() {
        let service = seeded(&["demo"]).await;
        let item = create(&service, "demo", "Soup").await;

        let updated = service
            .update_item(
                identity(),
                UpdateMenuItemInput {
                    target: ItemTarget::Scoped {
                        restaurant_slug: "DEMO".to_string(),
                        item_id: item.id,
                    },
                    fields: fields("Soup", Some("Mains"), None),
                    image: None,
                    model: None,
                },
            )
            .await
            .unwrap();

        assert!(updated.is_available);
        assert_eq!(updated.category.as_deref(), Some("Mains"));
        assert_eq!(updated.subcategory, None);
    }

    #[tokio::test]
    async fn test_delete_item_by_either_route() {
        let service = seeded(&["demo"]).await;
        let first = create(&service, "demo", "Soup").await;
        let second = create(&service, "demo", "Salad").await;

        service
            .delete_item(
                identity(),
                ItemTarget::Scoped {
                    restaurant_slug: "demo".to_string(),
                    item_id: first.id,
                },
            )
            .await
            .unwrap();
        service
            .delete_item(identity(), ItemTarget::Global { item_id: second.id })
            .await
            .unwrap();

        assert!(service.menu_item_repository.rows.lock().unwrap().is_empty());
        assert_eq!(
            service
                .delete_item(identity(), ItemTarget::Global { item_id: second.id })
                .await,
            Err(CoreError::ItemNotFound)
        );
    }
}
