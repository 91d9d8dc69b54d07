use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::actions::event::{self as event_actions, CreateEventParams, UpdateEventParams};
use crate::repository::{EventRepository, UserRepository};
use crate::revalidate::PathRevalidator;
use crate::upload::{FileStore, StagedFile};
use crate::validation::{validate_event, EventInput, FieldViolation};
use crate::ActionError;

/// Whether the form creates a fresh event or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update { event_id: Option<Uuid> },
}

/// Where the caller should take the user after a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Success: state was reset, go to the event's detail path.
    Redirect(String),
    /// Update mode with no event id: leave without calling any action.
    Back,
    /// Nothing happened. `violations` is non-empty only for schema
    /// failures; upload and action errors land here with an empty list.
    Stayed { violations: Vec<FieldViolation> },
}

/// Collaborators the submit pipeline talks to.
pub struct FormContext {
    pub users: Arc<dyn UserRepository>,
    pub events: Arc<dyn EventRepository>,
    pub uploader: Arc<dyn FileStore>,
    pub revalidator: Arc<dyn PathRevalidator>,
}

/// The event form: schema-bound values plus the two pieces of local state
/// the widget keeps outside the schema — staged image files and the
/// free-ticket toggle.
pub struct EventForm {
    mode: FormMode,
    organizer_id: String,
    initial_values: EventInput,
    values: EventInput,
    staged_files: Vec<StagedFile>,
    is_free: bool,
    submitting: bool,
}

impl EventForm {
    /// Create-mode form with empty initial values.
    pub fn create(organizer_id: String) -> Self {
        let defaults = default_values();
        Self {
            mode: FormMode::Create,
            organizer_id,
            initial_values: defaults.clone(),
            values: defaults,
            staged_files: Vec::new(),
            is_free: false,
            submitting: false,
        }
    }

    /// Update-mode form pre-populated from the stored event's values.
    pub fn update(organizer_id: String, event_id: Option<Uuid>, initial: EventInput) -> Self {
        Self {
            mode: FormMode::Update { event_id },
            organizer_id,
            initial_values: initial.clone(),
            values: initial,
            staged_files: Vec::new(),
            // TODO: seed the toggle from the stored event's is_free when editing
            is_free: false,
            submitting: false,
        }
    }

    /// Replace the bound values, syncing the free-ticket toggle the way the
    /// checkbox handler does.
    pub fn set_values(&mut self, values: EventInput) {
        self.is_free = values.is_free;
        self.values = values;
    }

    /// Flip the free-ticket toggle; the bound value follows it.
    pub fn set_free(&mut self, is_free: bool) {
        self.is_free = is_free;
        self.values.is_free = is_free;
    }

    /// Stage a local file for upload on the next submit.
    pub fn stage_file(&mut self, file: StagedFile) {
        self.staged_files.push(file);
    }

    pub fn values(&self) -> &EventInput {
        &self.values
    }

    /// Toggle state driving the price input's disabled attribute.
    pub fn free_toggle(&self) -> bool {
        self.is_free
    }

    /// True while a submission is in flight; the submit control is
    /// disabled for the duration.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Run the submit protocol: validate, upload staged files, call the
    /// create or update action, then reset and redirect on success.
    ///
    /// Upload failures and action errors are logged and otherwise
    /// swallowed; the caller sees `Stayed` with no violations.
    pub async fn submit(&mut self, ctx: &FormContext) -> SubmitOutcome {
        if self.submitting {
            return SubmitOutcome::Stayed {
                violations: Vec::new(),
            };
        }
        self.submitting = true;
        let outcome = self.run_submit(ctx).await;
        self.submitting = false;
        outcome
    }

    async fn run_submit(&mut self, ctx: &FormContext) -> SubmitOutcome {
        if let Err(violations) = validate_event(&self.values) {
            return SubmitOutcome::Stayed { violations };
        }

        let mut image_url = self.values.image_url.clone();
        if !self.staged_files.is_empty() {
            match ctx.uploader.upload(&self.staged_files).await {
                Ok(uploaded) if !uploaded.is_empty() => {
                    image_url = uploaded[0].url.clone();
                }
                Ok(_) => {
                    return SubmitOutcome::Stayed {
                        violations: Vec::new(),
                    };
                }
                Err(err) => {
                    tracing::error!(error = %err, "image upload failed");
                    return SubmitOutcome::Stayed {
                        violations: Vec::new(),
                    };
                }
            }
        }

        let payload = EventInput {
            image_url,
            ..self.values.clone()
        };

        match self.mode.clone() {
            FormMode::Create => {
                let params = CreateEventParams {
                    event: payload,
                    user_id: self.organizer_id.clone(),
                    path: "/profile".to_string(),
                };
                match event_actions::create_event(
                    ctx.users.as_ref(),
                    ctx.events.as_ref(),
                    ctx.revalidator.as_ref(),
                    params,
                )
                .await
                {
                    Ok(created) => {
                        self.reset();
                        SubmitOutcome::Redirect(format!("/events/{}", created.id))
                    }
                    Err(err) => swallow(err),
                }
            }
            FormMode::Update { event_id } => {
                let Some(event_id) = event_id else {
                    return SubmitOutcome::Back;
                };
                let params = UpdateEventParams {
                    event_id,
                    event: payload,
                    user_id: self.organizer_id.clone(),
                    path: format!("/events/{event_id}"),
                };
                match event_actions::update_event(
                    ctx.events.as_ref(),
                    ctx.revalidator.as_ref(),
                    params,
                )
                .await
                {
                    Ok(updated) => {
                        self.reset();
                        SubmitOutcome::Redirect(format!("/events/{}", updated.id))
                    }
                    Err(err) => swallow(err),
                }
            }
        }
    }

    /// Back to the initial values; staged files are dropped, the toggle is
    /// left alone.
    fn reset(&mut self) {
        self.values = self.initial_values.clone();
        self.staged_files.clear();
    }
}

/// The widget shows nothing on this path; the log line is the only trace.
fn swallow(err: ActionError) -> SubmitOutcome {
    tracing::error!(error = %err, "event form submit failed");
    SubmitOutcome::Stayed {
        violations: Vec::new(),
    }
}

fn default_values() -> EventInput {
    EventInput {
        title: String::new(),
        description: String::new(),
        location: String::new(),
        image_url: String::new(),
        start_date_time: Utc::now(),
        end_date_time: Utc::now(),
        category_id: String::new(),
        price: String::new(),
        is_free: false,
        url: String::new(),
    }
}
