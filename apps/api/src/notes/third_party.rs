//! Third-party authorization note: records who else was present on the call.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Attendee {
    pub name: String,
    /// Relation to the client, e.g. "sister" or "fiance".
    pub relation: String,
}

const SINGLE_AUTHORIZATION: &str = "The client authorizes this person to be present during the call";
const GROUP_AUTHORIZATION: &str =
    "The client authorizes the presence of these individuals during the call";

/// Builds the authorization note. Attendees missing a name or relation are
/// skipped; at least one complete attendee is required.
pub fn compose_third_party(attendees: &[Attendee]) -> Result<String, AppError> {
    let mut parts: Vec<String> = attendees
        .iter()
        .filter(|a| !a.name.trim().is_empty() && !a.relation.trim().is_empty())
        .map(|a| format!("{}, the client's {}", a.name, a.relation))
        .collect();

    let (joined, phrase) = match parts.len() {
        0 => {
            return Err(AppError::Validation(
                "at least one attendee needs a name and a relation".to_string(),
            ))
        }
        1 => (parts.remove(0), SINGLE_AUTHORIZATION),
        2 => (format!("{} and {}", parts[0], parts[1]), GROUP_AUTHORIZATION),
        _ => {
            let last = parts.pop().unwrap_or_default();
            (format!("{} and {}", parts.join("; "), last), GROUP_AUTHORIZATION)
        }
    };

    Ok(format!(
        "✅ Third Party Authorization:\nThird party: {joined}.\n{phrase}"
    ))
}
