use crate::models::user::User;

use serde::{Deserialize, Serialize};

/// Authenticated session returned by login/register. The token is opaque to
/// the client and sent back as a bearer credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}
