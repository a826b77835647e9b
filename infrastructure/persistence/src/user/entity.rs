use sqlx::FromRow;

use business::domain::shared::value_objects::UserId;
use business::domain::user::model::User;

#[derive(Debug, FromRow)]
pub struct UserEntity {
    pub id: String,
    pub email: String,
    pub name: String,
    pub photo_url: Option<String>,
}

impl UserEntity {
    pub fn into_domain(self) -> User {
        User::from_repository(UserId::new(self.id), self.email, self.name, self.photo_url)
    }
}
