use validator::{Validate, ValidationError};

use crate::models::entity::EntityId;

pub fn validate<T: Validate>(val: &T) -> Result<(), validator::ValidationErrors> {
    val.validate()
}

pub fn present_id(id: &EntityId) -> Result<(), ValidationError> {
    match id {
        EntityId::Text(s) if s.trim().is_empty() => {
            Err(ValidationError::new("required").with_message("Identifier is required".into()))
        }
        _ => Ok(()),
    }
}

pub fn interviewer_names(names: &[String]) -> Result<(), ValidationError> {
    if names.iter().any(|n| n.trim().is_empty()) {
        return Err(ValidationError::new("required")
            .with_message("Interviewer name is required".into()));
    }
    Ok(())
}
