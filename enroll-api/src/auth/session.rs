use serde::{Serialize, Deserialize};

use crate::users::User;

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateSession {
    pub contact: String,
    pub password: String,
}

/// issued once a credential is set or a login succeeds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedSession {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
}
