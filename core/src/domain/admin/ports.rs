use crate::domain::{
    admin::{
        entities::Admin,
        value_objects::{Identity, LoginInput, RegisterAdminInput},
    },
    common::entities::app_errors::CoreError,
    jwt::entities::AccessToken,
};

#[cfg_attr(test, mockall::automock)]
pub trait AuthService: Send + Sync {
    fn login(&self, input: LoginInput)
    -> impl Future<Output = Result<AccessToken, CoreError>> + Send;

    fn register_admin(
        &self,
        identity: Identity,
        input: RegisterAdminInput,
    ) -> impl Future<Output = Result<Admin, CoreError>> + Send;

    /// Creates the bootstrap admin when it does not exist yet. Returns
    /// whether a row was inserted.
    fn seed_admin(
        &self,
        email: String,
        password: String,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn authorize_request(&self, token: String) -> Result<Identity, CoreError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait AdminRepository: Send + Sync {
    fn get_by_email(
        &self,
        email: String,
    ) -> impl Future<Output = Result<Option<Admin>, CoreError>> + Send;

    fn create_admin(
        &self,
        email: String,
        hashed_password: String,
    ) -> impl Future<Output = Result<Admin, CoreError>> + Send;
}
