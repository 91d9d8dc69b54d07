use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use gatherly_core::repository::{OrderRepository, RepoError};
use gatherly_shared::models::OrderSummary;

pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct OrderSummaryRow {
    id: Uuid,
    created_at: chrono::DateTime<chrono::Utc>,
    total_price: String,
    event_id: Uuid,
    event_title: String,
    organizer_id: String,
}

impl From<OrderSummaryRow> for OrderSummary {
    fn from(row: OrderSummaryRow) -> Self {
        OrderSummary {
            id: row.id,
            created_at: row.created_at,
            total_price: row.total_price,
            event_id: row.event_id,
            event_title: row.event_title,
            organizer_id: row.organizer_id,
        }
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn list_orders_by_buyer(
        &self,
        buyer_id: &str,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<OrderSummary>, u64), RepoError> {
        let rows = sqlx::query_as::<_, OrderSummaryRow>(
            r#"
            SELECT o.id, o.created_at, o.total_price,
                   e.id AS event_id, e.title AS event_title, e.organizer_id
            FROM orders o
            JOIN events e ON e.id = o.event_id
            WHERE o.buyer_id = $1
            ORDER BY o.created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(buyer_id)
        .bind(limit as i64)
        .bind(offset as i64)
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders WHERE buyer_id = $1")
            .bind(buyer_id)
            .fetch_one(&self.pool)
            .await?;

        Ok((
            rows.into_iter().map(OrderSummary::from).collect(),
            total as u64,
        ))
    }
}
