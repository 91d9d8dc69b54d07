//! In-memory collaborators for action, filter, and form tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use gatherly_shared::models::{Category, Event, OrderSummary, User};
use uuid::Uuid;

use crate::payment::{CheckoutProvider, CheckoutSession, CheckoutSessionRequest};
use crate::repository::{
    CategoryRepository, EventRepository, OrderRepository, RepoError, UserRepository,
};
use crate::revalidate::PathRevalidator;
use crate::upload::{FileStore, StagedFile, UploadedFile};
use crate::validation::EventInput;

pub fn sample_user(id: &str) -> User {
    User {
        id: id.to_string(),
        email: format!("{id}@example.test"),
        username: id.to_lowercase(),
        first_name: "Sam".to_string(),
        last_name: "Organizer".to_string(),
        photo: String::new(),
    }
}

pub fn sample_input(category_id: &str) -> EventInput {
    EventInput {
        title: "Gig night".to_string(),
        description: "live music".to_string(),
        location: "Hall A".to_string(),
        image_url: String::new(),
        start_date_time: Utc::now(),
        end_date_time: Utc::now(),
        category_id: category_id.to_string(),
        price: "0".to_string(),
        is_free: true,
        url: "https://x.test".to_string(),
    }
}

#[derive(Default)]
pub struct MemoryUsers {
    users: Mutex<Vec<User>>,
}

impl MemoryUsers {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }
}

#[async_trait]
impl UserRepository for MemoryUsers {
    async fn get_user(&self, id: &str) -> Result<Option<User>, RepoError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.id == id)
            .cloned())
    }
}

#[derive(Default)]
pub struct MemoryEvents {
    events: Mutex<Vec<Event>>,
}

impl MemoryEvents {
    pub fn all(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventRepository for MemoryEvents {
    async fn create_event(&self, event: &Event) -> Result<Event, RepoError> {
        self.events.lock().unwrap().push(event.clone());
        Ok(event.clone())
    }

    async fn update_event(&self, event: &Event) -> Result<Event, RepoError> {
        let mut events = self.events.lock().unwrap();
        let stored = events
            .iter_mut()
            .find(|stored| stored.id == event.id)
            .ok_or("event missing")?;
        *stored = event.clone();
        Ok(event.clone())
    }

    async fn get_event(&self, id: Uuid) -> Result<Option<Event>, RepoError> {
        Ok(self
            .events
            .lock()
            .unwrap()
            .iter()
            .find(|event| event.id == id)
            .cloned())
    }

    async fn list_events_by_organizer(
        &self,
        organizer_id: &str,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<Event>, u64), RepoError> {
        let events = self.events.lock().unwrap();
        let matching: Vec<Event> = events
            .iter()
            .filter(|event| event.organizer_id == organizer_id)
            .cloned()
            .collect();
        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((page, total))
    }
}

#[derive(Default)]
pub struct MemoryCategories {
    categories: Mutex<Vec<Category>>,
    calls: AtomicUsize,
    fail: bool,
}

impl MemoryCategories {
    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            categories: Mutex::new(categories),
            calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            categories: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CategoryRepository for MemoryCategories {
    async fn list_categories(&self) -> Result<Vec<Category>, RepoError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err("category fetch refused".into());
        }
        Ok(self.categories.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct MemoryOrders {
    rows: Mutex<Vec<(String, OrderSummary)>>,
}

impl MemoryOrders {
    pub fn push(&self, buyer_id: &str, summary: OrderSummary) {
        self.rows
            .lock()
            .unwrap()
            .push((buyer_id.to_string(), summary));
    }
}

#[async_trait]
impl OrderRepository for MemoryOrders {
    async fn list_orders_by_buyer(
        &self,
        buyer_id: &str,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<OrderSummary>, u64), RepoError> {
        let rows = self.rows.lock().unwrap();
        let matching: Vec<OrderSummary> = rows
            .iter()
            .filter(|(buyer, _)| buyer == buyer_id)
            .map(|(_, summary)| summary.clone())
            .collect();
        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((page, total))
    }
}

#[derive(Default)]
pub struct RecordingRevalidator {
    paths: Mutex<Vec<String>>,
}

impl RecordingRevalidator {
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

#[async_trait]
impl PathRevalidator for RecordingRevalidator {
    async fn revalidate(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_string());
    }
}

pub struct CapturingCheckout {
    last: Mutex<Option<CheckoutSessionRequest>>,
    outcome: Result<String, String>,
}

impl CapturingCheckout {
    pub fn succeeding(url: &str) -> Self {
        Self {
            last: Mutex::new(None),
            outcome: Ok(url.to_string()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            last: Mutex::new(None),
            outcome: Err(message.to_string()),
        }
    }

    pub fn last_request(&self) -> Option<CheckoutSessionRequest> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl CheckoutProvider for CapturingCheckout {
    async fn create_checkout_session(
        &self,
        request: &CheckoutSessionRequest,
    ) -> Result<CheckoutSession, Box<dyn std::error::Error + Send + Sync>> {
        *self.last.lock().unwrap() = Some(request.clone());
        match &self.outcome {
            Ok(url) => Ok(CheckoutSession {
                id: "cs_test".to_string(),
                url: url.clone(),
            }),
            Err(message) => Err(message.clone().into()),
        }
    }
}

/// Upload collaborator with a scripted outcome.
pub enum StubUploader {
    Succeeding(String),
    ReturningNothing,
    Failing,
}

#[async_trait]
impl FileStore for StubUploader {
    async fn upload(
        &self,
        _files: &[StagedFile],
    ) -> Result<Vec<UploadedFile>, Box<dyn std::error::Error + Send + Sync>> {
        match self {
            StubUploader::Succeeding(url) => Ok(vec![UploadedFile { url: url.clone() }]),
            StubUploader::ReturningNothing => Ok(Vec::new()),
            StubUploader::Failing => Err("upload service refused".into()),
        }
    }
}
