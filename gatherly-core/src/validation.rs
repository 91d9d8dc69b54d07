use chrono::{DateTime, Utc};
use gatherly_shared::models::Event;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Candidate payload for the event form.
///
/// `category_id` is carried as an opaque string and `price` as a decimal
/// string; both are interpreted downstream. Start/end carry no ordering
/// constraint, and a free event may still hold a price string.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EventInput {
    #[validate(length(min = 3, message = "Title must be at least 3 characters"))]
    pub title: String,
    #[validate(length(
        min = 3,
        max = 400,
        message = "Description must be between 3 and 400 characters"
    ))]
    pub description: String,
    #[validate(length(
        min = 3,
        max = 400,
        message = "Location must be between 3 and 400 characters"
    ))]
    pub location: String,
    pub image_url: String,
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: DateTime<Utc>,
    pub category_id: String,
    pub price: String,
    pub is_free: bool,
    #[validate(url(message = "Url must be a valid URL"))]
    pub url: String,
}

impl EventInput {
    /// Initial form values for editing a stored event; timestamps come back
    /// as date-time values, everything else verbatim.
    pub fn from_event(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            description: event.description.clone(),
            location: event.location.clone(),
            image_url: event.image_url.clone(),
            start_date_time: event.start_date_time,
            end_date_time: event.end_date_time,
            category_id: event.category_id.to_string(),
            price: event.price.clone(),
            is_free: event.is_free,
            url: event.url.clone(),
        }
    }
}

/// One field-scoped rule violation, ready to attach to a form input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// Check a candidate payload against the schema; failure yields the full
/// list of per-field messages, never a partial success.
pub fn validate_event(input: &EventInput) -> Result<(), Vec<FieldViolation>> {
    match input.validate() {
        Ok(()) => Ok(()),
        Err(errors) => Err(flatten(errors)),
    }
}

fn flatten(errors: validator::ValidationErrors) -> Vec<FieldViolation> {
    let mut violations = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors.iter() {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| error.code.to_string());
            violations.push(FieldViolation {
                field: field.to_string(),
                message,
            });
        }
    }
    violations.sort_by(|a, b| a.field.cmp(&b.field));
    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn valid_input() -> EventInput {
        EventInput {
            title: "Gig night".to_string(),
            description: "live music".to_string(),
            location: "Hall A".to_string(),
            image_url: String::new(),
            start_date_time: Utc::now(),
            end_date_time: Utc::now(),
            category_id: "C1".to_string(),
            price: "0".to_string(),
            is_free: true,
            url: "https://x.test".to_string(),
        }
    }

    #[test]
    fn accepts_a_valid_payload() {
        assert!(validate_event(&valid_input()).is_ok());
    }

    #[test]
    fn rejects_two_character_title_but_accepts_three() {
        let mut input = valid_input();
        input.title = "ab".to_string();
        let violations = validate_event(&input).unwrap_err();
        assert!(violations.iter().any(|v| v.field == "title"));

        input.title = "abc".to_string();
        assert!(validate_event(&input).is_ok());
    }

    #[test]
    fn rejects_description_over_400_characters() {
        let mut input = valid_input();
        input.description = "x".repeat(401);
        let violations = validate_event(&input).unwrap_err();
        assert!(violations.iter().any(|v| v.field == "description"));

        input.description = "x".repeat(400);
        assert!(validate_event(&input).is_ok());
    }

    #[test]
    fn rejects_url_without_a_scheme() {
        let mut input = valid_input();
        input.url = "x.test/tickets".to_string();
        let violations = validate_event(&input).unwrap_err();
        assert!(violations.iter().any(|v| v.field == "url"));
    }

    #[test]
    fn free_event_with_empty_price_is_not_a_violation() {
        let mut input = valid_input();
        input.is_free = true;
        input.price = String::new();
        assert!(validate_event(&input).is_ok());
    }

    #[test]
    fn end_before_start_is_accepted() {
        let mut input = valid_input();
        input.end_date_time = input.start_date_time - chrono::Duration::hours(2);
        assert!(validate_event(&input).is_ok());
    }

    #[test]
    fn reports_every_failing_field() {
        let mut input = valid_input();
        input.title = "a".to_string();
        input.location = "b".to_string();
        let violations = validate_event(&input).unwrap_err();
        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        assert!(fields.contains(&"title"));
        assert!(fields.contains(&"location"));
    }
}
