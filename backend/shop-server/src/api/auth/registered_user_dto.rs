use shop_auth::RegisteredUser;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RegisteredUserDto {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl From<RegisteredUser> for RegisteredUserDto {
    fn from(user: RegisteredUser) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}
