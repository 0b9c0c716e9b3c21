use shop_core::NewUser;

/// Creates a NewUser with a placeholder hash; the repository never inspects it
pub fn create_test_new_user(username: &str, email: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        email: email.to_string(),
        password_hash: "$2b$04$placeholderplaceholderplaceholderplaceholderplacehold".to_string(),
        phone: "555".to_string(),
    }
}
