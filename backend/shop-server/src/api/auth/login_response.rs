use crate::UserDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    /// Unix seconds after which the token is refused
    pub expires_at: i64,
    pub user: UserDto,
}
