use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    routing::post,
    Extension, Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use gatherly_core::actions::event as event_actions;
use gatherly_core::form::{EventForm, FormContext, SubmitOutcome};
use gatherly_core::pagination::{parse_page, Paginated};
use gatherly_core::upload::StagedFile;
use gatherly_core::validation::EventInput;
use gatherly_core::ActionError;
use gatherly_shared::models::Event;

use crate::error::ApiError;
use crate::middleware::auth::SessionClaims;
use crate::state::AppState;

/// A form submission: the schema-bound values plus an optionally staged
/// image file forwarded to the upload collaborator.
#[derive(Debug, Deserialize)]
pub struct EventFormRequest {
    pub event: EventInput,
    pub staged_image: Option<StagedImage>,
}

#[derive(Debug, Deserialize)]
pub struct StagedImage {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/events", post(create_event))
        .route("/events/{id}", get(get_event).put(update_event))
        .route("/users/me/events", get(list_my_events))
}

/// POST /events — the create-mode form submit.
pub async fn create_event(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    Json(req): Json<EventFormRequest>,
) -> Result<Response, ApiError> {
    let mut form = EventForm::create(claims.sub);
    Ok(drive_form(&state, &mut form, req).await)
}

/// PUT /events/{id} — the update-mode form submit.
pub async fn update_event(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    Path(event_id): Path<Uuid>,
    Json(req): Json<EventFormRequest>,
) -> Result<Response, ApiError> {
    let mut form = EventForm::update(claims.sub, Some(event_id), req.event.clone());
    Ok(drive_form(&state, &mut form, req).await)
}

/// GET /events/{id}
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Event>, ApiError> {
    let event = event_actions::get_event_by_id(state.events.as_ref(), id).await?;
    Ok(Json(event))
}

/// GET /users/me/events?page=N
pub async fn list_my_events(
    State(state): State<AppState>,
    Extension(claims): Extension<SessionClaims>,
    Query(params): Query<PageParams>,
) -> Result<Json<Paginated<Event>>, ApiError> {
    let page = parse_page(params.page.as_deref());
    let events =
        event_actions::get_events_by_user(state.events.as_ref(), &claims.sub, page).await?;
    Ok(Json(events))
}

async fn drive_form(state: &AppState, form: &mut EventForm, req: EventFormRequest) -> Response {
    form.set_values(req.event);
    if let Some(image) = req.staged_image {
        form.stage_file(StagedFile {
            file_name: image.file_name,
            content_type: image.content_type,
            bytes: image.bytes,
        });
    }

    let ctx = FormContext {
        users: state.users.clone(),
        events: state.events.clone(),
        uploader: state.uploader.clone(),
        revalidator: state.revalidator.clone(),
    };

    form_response(form.submit(&ctx).await)
}

/// Translate a submit outcome into the browser-facing response. Silent
/// failure paths answer 204: the page stays where it is, nothing is shown.
fn form_response(outcome: SubmitOutcome) -> Response {
    match outcome {
        SubmitOutcome::Redirect(path) => Redirect::to(&path).into_response(),
        SubmitOutcome::Back => StatusCode::NO_CONTENT.into_response(),
        SubmitOutcome::Stayed { violations } if !violations.is_empty() => {
            ApiError::from(ActionError::Validation(violations)).into_response()
        }
        SubmitOutcome::Stayed { .. } => StatusCode::NO_CONTENT.into_response(),
    }
}
