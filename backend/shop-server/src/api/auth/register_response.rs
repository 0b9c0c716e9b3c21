use crate::RegisteredUserDto;

use serde::Serialize;

pub const REGISTRATION_SUCCESS_MESSAGE: &str = "Registration successful";

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: RegisteredUserDto,
}
