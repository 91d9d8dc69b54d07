use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An event category; the name is unique and never changes once events
/// reference it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
}
