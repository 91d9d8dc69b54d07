pub mod app_config;
pub mod category_repo;
pub mod database;
pub mod event_repo;
pub mod order_repo;
pub mod user_repo;

pub use category_repo::PgCategoryRepository;
pub use database::{db_pool, DbClient};
pub use event_repo::PgEventRepository;
pub use order_repo::PgOrderRepository;
pub use user_repo::PgUserRepository;
