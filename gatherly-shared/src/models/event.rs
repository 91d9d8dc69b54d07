use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A published event listing.
///
/// `organizer_id` is the identity-provider id of the user who created the
/// event; only that user may update it. `price` stays a decimal string so
/// the presentation layer controls formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub image_url: String,
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: DateTime<Utc>,
    pub category_id: Uuid,
    pub price: String,
    pub is_free: bool,
    pub url: String,
    pub organizer_id: String,
    pub created_at: DateTime<Utc>,
}
