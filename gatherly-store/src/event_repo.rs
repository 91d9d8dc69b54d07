use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use gatherly_core::repository::{EventRepository, RepoError};
use gatherly_shared::models::Event;

pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct EventRow {
    id: Uuid,
    title: String,
    description: String,
    location: String,
    image_url: String,
    start_date_time: chrono::DateTime<chrono::Utc>,
    end_date_time: chrono::DateTime<chrono::Utc>,
    category_id: Uuid,
    price: String,
    is_free: bool,
    url: String,
    organizer_id: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Event {
            id: row.id,
            title: row.title,
            description: row.description,
            location: row.location,
            image_url: row.image_url,
            start_date_time: row.start_date_time,
            end_date_time: row.end_date_time,
            category_id: row.category_id,
            price: row.price,
            is_free: row.is_free,
            url: row.url,
            organizer_id: row.organizer_id,
            created_at: row.created_at,
        }
    }
}

const EVENT_COLUMNS: &str = "id, title, description, location, image_url, start_date_time, \
     end_date_time, category_id, price, is_free, url, organizer_id, created_at";

#[async_trait]
impl EventRepository for PgEventRepository {
    async fn create_event(&self, event: &Event) -> Result<Event, RepoError> {
        sqlx::query(
            r#"
            INSERT INTO events (id, title, description, location, image_url, start_date_time,
                                end_date_time, category_id, price, is_free, url, organizer_id,
                                created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(event.id)
        .bind(&event.title)
        .bind(&event.description)
        .bind(&event.location)
        .bind(&event.image_url)
        .bind(event.start_date_time)
        .bind(event.end_date_time)
        .bind(event.category_id)
        .bind(&event.price)
        .bind(event.is_free)
        .bind(&event.url)
        .bind(&event.organizer_id)
        .bind(event.created_at)
        .execute(&self.pool)
        .await?;

        Ok(event.clone())
    }

    async fn update_event(&self, event: &Event) -> Result<Event, RepoError> {
        sqlx::query(
            r#"
            UPDATE events
            SET title = $1, description = $2, location = $3, image_url = $4,
                start_date_time = $5, end_date_time = $6, category_id = $7,
                price = $8, is_free = $9, url = $10
            WHERE id = $11
            "#,
        )
        .bind(&event.title)
        .bind(&event.description)
        .bind(&event.location)
        .bind(&event.image_url)
        .bind(event.start_date_time)
        .bind(event.end_date_time)
        .bind(event.category_id)
        .bind(&event.price)
        .bind(event.is_free)
        .bind(&event.url)
        .bind(event.id)
        .execute(&self.pool)
        .await?;

        Ok(event.clone())
    }

    async fn get_event(&self, id: Uuid) -> Result<Option<Event>, RepoError> {
        let row = sqlx::query_as::<_, EventRow>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Event::from))
    }

    async fn list_events_by_organizer(
        &self,
        organizer_id: &str,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<Event>, u64), RepoError> {
        let rows = sqlx::query_as::<_, EventRow>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE organizer_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3"
        ))
        .bind(organizer_id)
        .bind(limit as i64)
        .bind(offset as i64)
        .fetch_all(&self.pool)
        .await?;

        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM events WHERE organizer_id = $1")
                .bind(organizer_id)
                .fetch_one(&self.pool)
                .await?;

        Ok((rows.into_iter().map(Event::from).collect(), total as u64))
    }
}
