//! Admin URL construction.
//!
//! The admin interface is always mounted at `/admin/`; the password page of a
//! user is built here and nowhere else.

/// Mount point of the admin route table.
pub const ADMIN_MOUNT: &str = "/admin/";

/// Path of the admin page where user `id` changes their password.
pub fn user_password_change_path(id: u64) -> String {
    format!("{}auth/user/{}/password/", ADMIN_MOUNT, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_password_change_path() {
        assert_eq!(user_password_change_path(42), "/admin/auth/user/42/password/");
    }
}
