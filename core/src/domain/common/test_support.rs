use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use chrono::{Duration, Utc};

use crate::domain::{
    admin::{entities::Admin, ports::AdminRepository},
    category::{
        entities::{Category, Subcategory},
        ports::CategoryRepository,
    },
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
    jwt::{
        entities::{AccessToken, JwtClaim, TOKEN_TYPE_BEARER},
        ports::TokenRepository,
    },
    media::{
        entities::{MediaKind, MediaUpload, StoredMedia},
        ports::MediaStoragePort,
    },
    menu_item::{entities::MenuItem, ports::MenuItemRepository, value_objects::NewMenuItem},
    recommendation::{entities::KeywordTable, ports::LLMClient},
    restaurant::{
        entities::{Restaurant, Theme},
        ports::RestaurantRepository,
        value_objects::CreateRestaurantRequest,
    },
};

pub(crate) type TestService = Service<
    InMemoryRestaurants,
    InMemoryCategories,
    InMemoryMenuItems,
    InMemoryAdmins,
    PlainHasher,
    StaticTokens,
    RecordingMedia,
    CannedRanker,
    AlwaysHealthy,
>;

pub(crate) fn test_service() -> TestService {
    Service::new(
        InMemoryRestaurants::default(),
        InMemoryCategories::default(),
        InMemoryMenuItems::default(),
        InMemoryAdmins::default(),
        PlainHasher,
        StaticTokens,
        RecordingMedia::default(),
        CannedRanker::default(),
        AlwaysHealthy,
        KeywordTable::default(),
    )
}

fn next_id(counter: &AtomicUsize) -> i64 {
    counter.fetch_add(1, Ordering::SeqCst) as i64 + 1
}

#[derive(Default)]
pub(crate) struct InMemoryRestaurants {
    pub rows: Mutex<Vec<Restaurant>>,
    ids: AtomicUsize,
}

impl RestaurantRepository for InMemoryRestaurants {
    async fn create_restaurant(
        &self,
        request: CreateRestaurantRequest,
    ) -> Result<Restaurant, CoreError> {
        let restaurant = Restaurant {
            id: next_id(&self.ids),
            name: request.name,
            slug: request.slug,
            theme_name: None,
            theme_primary: None,
            theme_secondary: None,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(restaurant.clone());
        Ok(restaurant)
    }

    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, CoreError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn get_by_slug(&self, slug: String) -> Result<Option<Restaurant>, CoreError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.slug == slug)
            .cloned())
    }

    async fn get_by_id(&self, restaurant_id: i64) -> Result<Option<Restaurant>, CoreError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == restaurant_id)
            .cloned())
    }

    async fn update_theme(&self, restaurant_id: i64, theme: Theme) -> Result<Restaurant, CoreError> {
        let mut rows = self.rows.lock().unwrap();
        let restaurant = rows
            .iter_mut()
            .find(|r| r.id == restaurant_id)
            .ok_or(CoreError::RestaurantNotFound)?;
        restaurant.theme_name = Some(theme.name);
        restaurant.theme_primary = Some(theme.primary);
        restaurant.theme_secondary = Some(theme.secondary);
        Ok(restaurant.clone())
    }

    async fn delete_restaurant(&self, restaurant_id: i64) -> Result<(), CoreError> {
        self.rows.lock().unwrap().retain(|r| r.id != restaurant_id);
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct InMemoryCategories {
    pub rows: Mutex<Vec<Category>>,
    ids: AtomicUsize,
}

impl CategoryRepository for InMemoryCategories {
    async fn list_by_restaurant(&self, restaurant_id: i64) -> Result<Vec<Category>, CoreError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.restaurant_id == restaurant_id)
            .cloned()
            .collect())
    }

    async fn get_by_id(
        &self,
        restaurant_id: i64,
        category_id: i64,
    ) -> Result<Option<Category>, CoreError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == category_id && c.restaurant_id == restaurant_id)
            .cloned())
    }

    async fn get_or_create_category(
        &self,
        restaurant_id: i64,
        name: String,
    ) -> Result<Category, CoreError> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(existing) = rows
            .iter()
            .find(|c| c.restaurant_id == restaurant_id && c.name == name)
        {
            return Ok(existing.clone());
        }
        let category = Category {
            id: next_id(&self.ids),
            restaurant_id,
            name,
            sort_order: 0,
            subcategories: Vec::new(),
        };
        rows.push(category.clone());
        Ok(category)
    }

    async fn get_or_create_subcategory(
        &self,
        category_id: i64,
        name: String,
    ) -> Result<Subcategory, CoreError> {
        let mut rows = self.rows.lock().unwrap();
        let category = rows
            .iter_mut()
            .find(|c| c.id == category_id)
            .ok_or(CoreError::CategoryNotFound)?;
        if let Some(existing) = category.subcategories.iter().find(|s| s.name == name) {
            return Ok(existing.clone());
        }
        let subcategory = Subcategory {
            id: next_id(&self.ids),
            category_id,
            name,
            sort_order: 0,
        };
        category.subcategories.push(subcategory.clone());
        Ok(subcategory)
    }

    async fn delete_category(&self, category_id: i64) -> Result<(), CoreError> {
        self.rows.lock().unwrap().retain(|c| c.id != category_id);
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct InMemoryMenuItems {
    pub rows: Mutex<Vec<MenuItem>>,
    ids: AtomicUsize,
}

impl MenuItemRepository for InMemoryMenuItems {
    async fn list_by_restaurant(
        &self,
        restaurant_id: i64,
        available_only: bool,
    ) -> Result<Vec<MenuItem>, CoreError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.restaurant_id == restaurant_id && (!available_only || i.is_available))
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, item_id: i64) -> Result<Option<MenuItem>, CoreError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id == item_id)
            .cloned())
    }

    async fn create_item(&self, item: NewMenuItem) -> Result<MenuItem, CoreError> {
        let item = MenuItem {
            id: next_id(&self.ids),
            restaurant_id: item.restaurant_id,
            category_id: item.category_id,
            subcategory_id: item.subcategory_id,
            category: None,
            subcategory: None,
            name: item.name,
            description: item.description,
            price: item.price,
            currency: item.currency,
            image_url: item.image_url,
            model_url: item.model_url,
            is_available: item.is_available,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(item.clone());
        Ok(item)
    }

    async fn update_item(&self, item: MenuItem) -> Result<MenuItem, CoreError> {
        let mut rows = self.rows.lock().unwrap();
        let slot = rows
            .iter_mut()
            .find(|i| i.id == item.id)
            .ok_or(CoreError::ItemNotFound)?;
        *slot = item.clone();
        Ok(item)
    }

    async fn delete_item(&self, item_id: i64) -> Result<(), CoreError> {
        self.rows.lock().unwrap().retain(|i| i.id != item_id);
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct InMemoryAdmins {
    pub rows: Mutex<Vec<Admin>>,
    ids: AtomicUsize,
}

impl AdminRepository for InMemoryAdmins {
    async fn get_by_email(&self, email: String) -> Result<Option<Admin>, CoreError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.email == email)
            .cloned())
    }

    async fn create_admin(&self, email: String, hashed_password: String) -> Result<Admin, CoreError> {
        let admin = Admin {
            id: next_id(&self.ids),
            email,
            hashed_password,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(admin.clone());
        Ok(admin)
    }
}

pub(crate) struct PlainHasher;

impl HasherRepository for PlainHasher {
    async fn hash_password(&self, password: String) -> Result<String, CoreError> {
        Ok(format!("hashed:{}", password))
    }

    async fn verify_password(
        &self,
        password: String,
        hashed_password: String,
    ) -> Result<bool, CoreError> {
        Ok(hashed_password == format!("hashed:{}", password))
    }
}

/// Tokens are `token:<email>`.
pub(crate) struct StaticTokens;

impl TokenRepository for StaticTokens {
    fn issue_token(&self, subject: String) -> Result<AccessToken, CoreError> {
        Ok(AccessToken {
            access_token: format!("token:{}", subject),
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_at: Utc::now() + Duration::minutes(5),
        })
    }

    fn verify_token(&self, token: String) -> Result<JwtClaim, CoreError> {
        let sub = token
            .strip_prefix("token:")
            .ok_or(CoreError::InvalidToken)?
            .to_string();
        Ok(JwtClaim { sub, iat: 0, exp: 0 })
    }
}

#[derive(Default)]
pub(crate) struct RecordingMedia {
    pub stored: Mutex<Vec<(String, MediaKind, MediaUpload)>>,
}

impl MediaStoragePort for RecordingMedia {
    async fn store(
        &self,
        restaurant_slug: String,
        kind: MediaKind,
        upload: MediaUpload,
    ) -> Result<StoredMedia, CoreError> {
        let mut stored = self.stored.lock().unwrap();
        let key = format!("{}/{}-{}.bin", restaurant_slug, kind, stored.len());
        stored.push((restaurant_slug, kind, upload));
        Ok(StoredMedia {
            url: format!("http://media.test/{}", key),
            key,
        })
    }
}

#[derive(Default)]
pub(crate) struct CannedRanker {
    pub reply: Mutex<String>,
    pub calls: AtomicUsize,
}

impl LLMClient for CannedRanker {
    async fn generate_text(&self, _prompt: String) -> Result<String, CoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.reply.lock().unwrap().clone())
    }
}

pub(crate) struct AlwaysHealthy;

impl HealthCheckRepository for AlwaysHealthy {
    async fn health(&self) -> Result<u64, CoreError> {
        Ok(1)
    }

    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        Ok(DatabaseHealthStatus {
            status: "healthy".to_string(),
            response_time_ms: 1,
            checked_at: Utc::now(),
        })
    }
}
