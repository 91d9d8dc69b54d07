pub mod actions;
pub mod filter;
pub mod form;
pub mod pagination;
pub mod payment;
pub mod query;
pub mod repository;
pub mod revalidate;
pub mod upload;
pub mod validation;

/// The closed error set every action resolves to.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("forbidden: {0}")]
    Forbidden(String),
    #[error("validation failed")]
    Validation(Vec<validation::FieldViolation>),
    #[error("internal error: {0}")]
    Unhandled(String),
}

pub type ActionResult<T> = Result<T, ActionError>;

/// Normalization boundary applied at every action exit: log whatever was
/// caught, hand back the opaque variant.
pub fn handle_error(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> ActionError {
    let err = err.into();
    tracing::error!(error = %err, "action failed");
    ActionError::Unhandled(err.to_string())
}
