use chrono::Utc;
use gatherly_shared::models::Event;
use uuid::Uuid;

use crate::pagination::{self, Paginated, PAGE_SIZE};
use crate::repository::{EventRepository, UserRepository};
use crate::revalidate::PathRevalidator;
use crate::validation::EventInput;
use crate::{handle_error, ActionError, ActionResult};

/// Arguments for `create_event`, mirroring what the form submits.
#[derive(Debug, Clone)]
pub struct CreateEventParams {
    pub event: EventInput,
    pub user_id: String,
    pub path: String,
}

/// Arguments for `update_event`; the event id names the record to mutate.
#[derive(Debug, Clone)]
pub struct UpdateEventParams {
    pub event_id: Uuid,
    pub event: EventInput,
    pub user_id: String,
    pub path: String,
}

/// Insert a new event owned by `user_id`, then refresh the given path.
/// Fails NotFound when the organizer has no mirrored user record.
pub async fn create_event(
    users: &dyn UserRepository,
    events: &dyn EventRepository,
    revalidator: &dyn PathRevalidator,
    params: CreateEventParams,
) -> ActionResult<Event> {
    let organizer = users.get_user(&params.user_id).await.map_err(handle_error)?;
    if organizer.is_none() {
        return Err(ActionError::NotFound("Organizer not found".to_string()));
    }

    let event = event_from_input(
        Uuid::new_v4(),
        params.event,
        params.user_id,
        Utc::now(),
    )?;

    let created = events.create_event(&event).await.map_err(handle_error)?;
    revalidator.revalidate(&params.path).await;
    Ok(created)
}

/// Replace an event's fields. Only the recorded organizer may mutate it;
/// anyone else gets Forbidden and the record stays untouched.
pub async fn update_event(
    events: &dyn EventRepository,
    revalidator: &dyn PathRevalidator,
    params: UpdateEventParams,
) -> ActionResult<Event> {
    let existing = events
        .get_event(params.event_id)
        .await
        .map_err(handle_error)?
        .ok_or_else(|| ActionError::NotFound("Unauthorized or event not found".to_string()))?;

    if existing.organizer_id != params.user_id {
        return Err(ActionError::Forbidden(
            "Unauthorized or event not found".to_string(),
        ));
    }

    let event = event_from_input(
        existing.id,
        params.event,
        existing.organizer_id,
        existing.created_at,
    )?;

    let updated = events.update_event(&event).await.map_err(handle_error)?;
    revalidator.revalidate(&params.path).await;
    Ok(updated)
}

pub async fn get_event_by_id(events: &dyn EventRepository, id: Uuid) -> ActionResult<Event> {
    events
        .get_event(id)
        .await
        .map_err(handle_error)?
        .ok_or_else(|| ActionError::NotFound("Event not found".to_string()))
}

/// One page of the user's organized events plus the total page count.
pub async fn get_events_by_user(
    events: &dyn EventRepository,
    user_id: &str,
    page: u64,
) -> ActionResult<Paginated<Event>> {
    let (data, total) = events
        .list_events_by_organizer(user_id, PAGE_SIZE, pagination::offset(page, PAGE_SIZE))
        .await
        .map_err(handle_error)?;

    Ok(Paginated {
        data,
        total_pages: pagination::total_pages(total, PAGE_SIZE),
    })
}

fn event_from_input(
    id: Uuid,
    input: EventInput,
    organizer_id: String,
    created_at: chrono::DateTime<Utc>,
) -> ActionResult<Event> {
    let category_id = Uuid::parse_str(&input.category_id).map_err(handle_error)?;

    Ok(Event {
        id,
        title: input.title,
        description: input.description,
        location: input.location,
        image_url: input.image_url,
        start_date_time: input.start_date_time,
        end_date_time: input.end_date_time,
        category_id,
        price: input.price,
        is_free: input.is_free,
        url: input.url,
        organizer_id,
        created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::test_support::{
        sample_input, sample_user, MemoryEvents, MemoryUsers, RecordingRevalidator,
    };

    const CATEGORY: &str = "0a0f7c3e-7a93-4f5a-9d8e-2f4f4a9b1c11";

    #[tokio::test]
    async fn create_event_echoes_input_with_references_set() {
        let users = MemoryUsers::with_users(vec![sample_user("U1")]);
        let events = MemoryEvents::default();
        let revalidator = RecordingRevalidator::default();

        let created = create_event(
            &users,
            &events,
            &revalidator,
            CreateEventParams {
                event: sample_input(CATEGORY),
                user_id: "U1".to_string(),
                path: "/profile".to_string(),
            },
        )
        .await
        .unwrap();

        assert_eq!(created.organizer_id, "U1");
        assert_eq!(created.category_id.to_string(), CATEGORY);
        assert_eq!(created.title, "Gig night");
        assert_eq!(created.description, "live music");
        assert_eq!(created.location, "Hall A");
        assert_eq!(created.price, "0");
        assert!(created.is_free);
        assert_eq!(created.url, "https://x.test");
        assert_eq!(events.all().len(), 1);
        assert_eq!(revalidator.paths(), vec!["/profile".to_string()]);
    }

    #[tokio::test]
    async fn create_event_fails_not_found_for_unknown_organizer() {
        let users = MemoryUsers::default();
        let events = MemoryEvents::default();
        let revalidator = RecordingRevalidator::default();

        let err = create_event(
            &users,
            &events,
            &revalidator,
            CreateEventParams {
                event: sample_input(CATEGORY),
                user_id: "ghost".to_string(),
                path: "/profile".to_string(),
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ActionError::NotFound(_)));
        assert!(events.all().is_empty());
        assert!(revalidator.paths().is_empty());
    }

    #[tokio::test]
    async fn update_event_by_non_organizer_is_forbidden_and_changes_nothing() {
        let events = MemoryEvents::default();
        let revalidator = RecordingRevalidator::default();

        let users = MemoryUsers::with_users(vec![sample_user("U1")]);
        let created = create_event(
            &users,
            &events,
            &revalidator,
            CreateEventParams {
                event: sample_input(CATEGORY),
                user_id: "U1".to_string(),
                path: "/profile".to_string(),
            },
        )
        .await
        .unwrap();

        let mut changed = sample_input(CATEGORY);
        changed.title = "Hijacked".to_string();

        let err = update_event(
            &events,
            &revalidator,
            UpdateEventParams {
                event_id: created.id,
                event: changed,
                user_id: "U2".to_string(),
                path: format!("/events/{}", created.id),
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ActionError::Forbidden(_)));
        let stored = events.all();
        assert_eq!(stored[0].title, "Gig night");
    }

    #[tokio::test]
    async fn update_event_by_organizer_replaces_fields() {
        let users = MemoryUsers::with_users(vec![sample_user("U1")]);
        let events = MemoryEvents::default();
        let revalidator = RecordingRevalidator::default();

        let created = create_event(
            &users,
            &events,
            &revalidator,
            CreateEventParams {
                event: sample_input(CATEGORY),
                user_id: "U1".to_string(),
                path: "/profile".to_string(),
            },
        )
        .await
        .unwrap();

        let mut changed = sample_input(CATEGORY);
        changed.title = "Gig night, extended".to_string();

        let updated = update_event(
            &events,
            &revalidator,
            UpdateEventParams {
                event_id: created.id,
                event: changed,
                user_id: "U1".to_string(),
                path: format!("/events/{}", created.id),
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Gig night, extended");
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(events.all()[0].title, "Gig night, extended");
    }

    #[tokio::test]
    async fn missing_event_is_not_found() {
        let events = MemoryEvents::default();
        let err = get_event_by_id(&events, Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, ActionError::NotFound(_)));
    }

    #[tokio::test]
    async fn listing_paginates_seven_records_into_three_pages() {
        let users = MemoryUsers::with_users(vec![sample_user("U1")]);
        let events = MemoryEvents::default();
        let revalidator = RecordingRevalidator::default();

        for n in 1..=7 {
            let mut input = sample_input(CATEGORY);
            input.title = format!("Event {n}");
            create_event(
                &users,
                &events,
                &revalidator,
                CreateEventParams {
                    event: input,
                    user_id: "U1".to_string(),
                    path: "/profile".to_string(),
                },
            )
            .await
            .unwrap();
        }

        let page_one = get_events_by_user(&events, "U1", 1).await.unwrap();
        assert_eq!(page_one.total_pages, 3);
        let titles: Vec<&str> = page_one.data.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Event 1", "Event 2", "Event 3"]);

        let page_three = get_events_by_user(&events, "U1", 3).await.unwrap();
        let titles: Vec<&str> = page_three.data.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Event 7"]);

        let past_the_end = get_events_by_user(&events, "U1", 4).await.unwrap();
        assert!(past_the_end.data.is_empty());
        assert_eq!(past_the_end.total_pages, 3);
    }
}
