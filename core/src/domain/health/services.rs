use crate::domain::{
    admin::ports::AdminRepository,
    category::ports::CategoryRepository,
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    jwt::ports::TokenRepository,
    media::ports::MediaStoragePort,
    menu_item::ports::MenuItemRepository,
    recommendation::ports::LLMClient,
    restaurant::ports::RestaurantRepository,
};

impl<R, CA, MI, A, H, T, MS, LLM, HC> HealthCheckService
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
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
