use indexmap::IndexMap;
use tracing::{debug, info};

use crate::database::ActivityRegistry;
use crate::models::Activity;

/// Coarse classification used by callers that only care whether the target
/// was missing or the request clashed with current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    NotFound,
    #[error("Student already signed up for this activity")]
    AlreadySignedUp,
    #[error("Student is not signed up for this activity")]
    NotSignedUp,
}

impl ActivityError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ActivityError::NotFound => ErrorKind::NotFound,
            ActivityError::AlreadySignedUp | ActivityError::NotSignedUp => ErrorKind::Conflict,
        }
    }
}

pub async fn list_activities(registry: &ActivityRegistry) -> IndexMap<String, Activity> {
    let activities = registry.snapshot().await;
    debug!(count = activities.len(), "listing activities");
    activities
}

/// Appends `email` to the activity's roster.
///
/// Fails with `NotFound` for an unknown activity, then `AlreadySignedUp` if the
/// email is already on the roster. Capacity is not checked.
pub async fn signup(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> Result<String, ActivityError> {
    let spots_left = registry
        .update(activity_name, |activity| {
            if activity.has_participant(email) {
                return Err(ActivityError::AlreadySignedUp);
            }
            activity.participants.push(email.to_string());
            Ok(activity.spots_left())
        })
        .await
        .ok_or(ActivityError::NotFound)??;

    info!(activity = %activity_name, email = %email, spots_left, "student signed up");
    Ok(format!("Signed up {} for {}", email, activity_name))
}

/// Removes `email` from the activity's roster.
pub async fn unregister(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> Result<String, ActivityError> {
    registry
        .update(activity_name, |activity| {
            let Some(pos) = activity.participants.iter().position(|p| p == email) else {
                return Err(ActivityError::NotSignedUp);
            };
            activity.participants.remove(pos);
            Ok(())
        })
        .await
        .ok_or(ActivityError::NotFound)??;

    info!(activity = %activity_name, email = %email, "student unregistered");
    Ok(format!("Unregistered {} from {}", email, activity_name))
}
