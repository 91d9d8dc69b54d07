use axum::{
    extract::{Path, Query, State},
    routing::get,
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gatherly_core::actions::event as event_actions;
use gatherly_core::actions::order as order_actions;
use gatherly_core::form::EventForm;
use gatherly_core::pagination::{parse_page, Paginated};
use gatherly_core::validation::EventInput;
use gatherly_shared::models::{Event, OrderSummary};

use crate::error::ApiError;
use crate::middleware::auth::SessionClaims;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProfileParams {
    #[serde(rename = "ordersPage")]
    pub orders_page: Option<String>,
    #[serde(rename = "eventsPage")]
    pub events_page: Option<String>,
}

/// The profile view: the user's organized events and purchased tickets,
/// each independently paginated.
#[derive(Debug, Serialize)]
pub struct ProfilePage {
    pub user_id: String,
    pub organized_events: Paginated<Event>,
    pub tickets: Paginated<OrderSummary>,
}

/// The update view: the form pre-populated from the stored event.
#[derive(Debug, Serialize)]
pub struct UpdateEventPage {
    pub event_id: Uuid,
    pub form: EventFormView,
}

#[derive(Debug, Serialize)]
pub struct EventFormView {
    pub mode: &'static str,
    pub values: EventInput,
    /// Drives the price input's disabled attribute.
    pub free_toggle: bool,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(profile))
        .route("/events/{id}/update", get(update_event_page))
}

/// GET /profile?ordersPage=&eventsPage= — both parameters default to 1.
pub async fn profile(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    Query(params): Query<ProfileParams>,
) -> Result<Json<ProfilePage>, ApiError> {
    let events_page = parse_page(params.events_page.as_deref());
    let orders_page = parse_page(params.orders_page.as_deref());

    let organized_events =
        event_actions::get_events_by_user(state.events.as_ref(), &claims.sub, events_page).await?;
    let tickets =
        order_actions::get_orders_by_user(state.orders.as_ref(), &claims.sub, orders_page).await?;

    Ok(Json(ProfilePage {
        user_id: claims.sub,
        organized_events,
        tickets,
    }))
}

/// GET /events/{id}/update — the populated update form.
pub async fn update_event_page(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    Path(id): Path<Uuid>,
) -> Result<Json<UpdateEventPage>, ApiError> {
    let event = event_actions::get_event_by_id(state.events.as_ref(), id).await?;

    let form = EventForm::update(claims.sub, Some(event.id), EventInput::from_event(&event));

    Ok(Json(UpdateEventPage {
        event_id: event.id,
        form: EventFormView {
            mode: "Update",
            values: form.values().clone(),
            free_toggle: form.free_toggle(),
        },
    }))
}
