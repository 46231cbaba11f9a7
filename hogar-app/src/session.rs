use hogar_api::restful::UserResponse;

/// Explicitly passed session, created by a successful login and dropped at
/// logout. Screens that need the account receive a reference to it.
#[derive(Debug, Clone)]
pub struct Session {
    user: UserResponse,
}

impl Session {
    pub fn new(user: UserResponse) -> Self {
        Self { user }
    }

    pub fn user(&self) -> &UserResponse {
        &self.user
    }

    /// Consume the session; screens lose access once the owner drops it.
    pub fn logout(self) {}
}
