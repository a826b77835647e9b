use poem_openapi::Object;

use business::domain::user::model::User;

#[derive(Debug, Clone, Object)]
pub struct UserResponse {
    /// Identity provider uid
    pub id: String,
    pub email: String,
    /// Display name
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub photo_url: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            email: user.email,
            name: user.name,
            photo_url: user.photo_url,
        }
    }
}
