use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A ticket purchase. Written by the payment processor's completion webhook;
/// this service only ever reads orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub event_id: Uuid,
    pub buyer_id: String,
    pub total_price: String,
    pub created_at: DateTime<Utc>,
}

/// Row shape for the tickets listing: an order joined to its event and the
/// event's organizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSummary {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub total_price: String,
    pub event_id: Uuid,
    pub event_title: String,
    pub organizer_id: String,
}
