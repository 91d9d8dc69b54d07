use async_trait::async_trait;
use gatherly_shared::models::{Category, Event, OrderSummary, User};
use uuid::Uuid;

/// Error seam for data access; actions normalize these at their boundary.
pub type RepoError = Box<dyn std::error::Error + Send + Sync>;

/// Repository trait for mirrored identity-provider users.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_user(&self, id: &str) -> Result<Option<User>, RepoError>;
}

/// Repository trait for event categories.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>, RepoError>;
}

/// Repository trait for event data access.
#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create_event(&self, event: &Event) -> Result<Event, RepoError>;

    async fn update_event(&self, event: &Event) -> Result<Event, RepoError>;

    async fn get_event(&self, id: Uuid) -> Result<Option<Event>, RepoError>;

    /// One page of the organizer's events, newest first, plus the total
    /// matching count.
    async fn list_events_by_organizer(
        &self,
        organizer_id: &str,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<Event>, u64), RepoError>;
}

/// Repository trait for ticket orders. Read-only: orders are written by the
/// payment processor's completion webhook, outside this service.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// One page of the buyer's orders joined to event and organizer data,
    /// newest first, plus the total matching count.
    async fn list_orders_by_buyer(
        &self,
        buyer_id: &str,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<OrderSummary>, u64), RepoError>;
}
