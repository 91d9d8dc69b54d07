use std::sync::Arc;

use gatherly_core::payment::CheckoutProvider;
use gatherly_core::repository::{
    CategoryRepository, EventRepository, OrderRepository, UserRepository,
};
use gatherly_core::revalidate::PathRevalidator;
use gatherly_core::upload::FileStore;

#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
}

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub events: Arc<dyn EventRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub checkout: Arc<dyn CheckoutProvider>,
    pub uploader: Arc<dyn FileStore>,
    pub revalidator: Arc<dyn PathRevalidator>,
    pub auth: AuthConfig,
    pub base_url: String,
}
