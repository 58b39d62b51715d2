use tracing::{info, warn};

use crate::domain::{
    admin::{
        entities::Admin,
        ports::{AdminRepository, AuthService},
        value_objects::{Identity, LoginInput, MIN_PASSWORD_LENGTH, RegisterAdminInput, normalize_email},
    },
    category::ports::CategoryRepository,
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    jwt::{entities::AccessToken, ports::TokenRepository},
    media::ports::MediaStoragePort,
    menu_item::ports::MenuItemRepository,
    recommendation::ports::LLMClient,
    restaurant::ports::RestaurantRepository,
};

impl<R, CA, MI, A, H, T, MS, LLM, HC> AuthService for Service<R, CA, MI, A, H, T, MS, LLM, HC>
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
    async fn login(&self, input: LoginInput) -> Result<AccessToken, CoreError> {
        let email = normalize_email(&input.email).map_err(|_| CoreError::InvalidCredentials)?;

        let admin = self
            .admin_repository
            .get_by_email(email.clone())
            .await?
            .ok_or(CoreError::InvalidCredentials)?;

        let valid = self
            .hasher_repository
            .verify_password(input.password, admin.hashed_password)
            .await?;

        if !valid {
            warn!(email = %email, "admin login rejected");
            return Err(CoreError::InvalidCredentials);
        }

        self.token_repository.issue_token(admin.email)
    }

    async fn register_admin(
        &self,
        identity: Identity,
        input: RegisterAdminInput,
    ) -> Result<Admin, CoreError> {
        if input.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(CoreError::Invalid(format!(
                "password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let admin = self.insert_admin(&input.email, input.password).await?;

        info!(admin = %identity.email, created = %admin.email, "admin registered");

        Ok(admin)
    }

    async fn seed_admin(&self, email: String, password: String) -> Result<bool, CoreError> {
        match self.insert_admin(&email, password).await {
            Ok(admin) => {
                info!(email = %admin.email, "seeded bootstrap admin");
                Ok(true)
            }
            Err(CoreError::AdminAlreadyExists) => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn authorize_request(&self, token: String) -> Result<Identity, CoreError> {
        let claim = self.token_repository.verify_token(token)?;

        Ok(Identity {
            email: claim.sub,
        })
    }
}

impl<R, CA, MI, A, H, T, MS, LLM, HC> Service<R, CA, MI, A, H, T, MS, LLM, HC>
where
    A: AdminRepository,
    H: HasherRepository,
{
    async fn insert_admin(&self, email: &str, password: String) -> Result<Admin, CoreError> {
        let email = normalize_email(email)?;
        if password.is_empty() {
            return Err(CoreError::Invalid("password is required".to_string()));
        }

        if self
            .admin_repository
            .get_by_email(email.clone())
            .await?
            .is_some()
        {
            return Err(CoreError::AdminAlreadyExists);
        }

        let hashed_password = self.hasher_repository.hash_password(password).await?;

        self.admin_repository
            .create_admin(email, hashed_password)
            .await
    }
}
