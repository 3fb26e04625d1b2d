pub mod assessment_dto;
pub mod auth_dto;
pub mod candidate_dto;
pub mod dashboard_dto;
pub mod evaluation_dto;
pub mod interview_dto;
pub mod offer_dto;

use serde::{Deserialize, Deserializer};

/// Trims optional text and turns empty strings into `None`.
pub(crate) fn trim_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }))
}
