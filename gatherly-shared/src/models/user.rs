use serde::{Deserialize, Serialize};

/// A user record mirrored from the identity provider. The id is issued by
/// the provider and trusted verbatim as organizer/buyer identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub photo: String,
}
