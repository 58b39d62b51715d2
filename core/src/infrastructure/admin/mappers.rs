use chrono::Utc;

use crate::domain::admin::entities::Admin;
use crate::entity::admins::Model as AdminModel;

impl From<AdminModel> for Admin {
    fn from(model: AdminModel) -> Self {
        Admin {
            id: model.id,
            email: model.email,
            hashed_password: model.hashed_password,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
