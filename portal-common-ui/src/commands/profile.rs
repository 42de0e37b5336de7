use crate::{ApiClient, CommandError, CommandResult, SessionStore};
use portal_common::models::StudentProfile;
use portal_common::Error;
use tracing::error;

pub struct ProfileCommands;

impl ProfileCommands {
    /// Fetches the editable profile. Callers treat a failure as a silent
    /// no-op (log only, fields stay blank), matching the background-load
    /// error policy.
    pub async fn load(
        client: &ApiClient,
        student_id: i64,
    ) -> Result<CommandResult<StudentProfile>, CommandError> {
        match client.get_student(student_id).await {
            Ok(profile) => Ok(CommandResult::new(profile)),
            Err(Error::Api { status, body }) => {
                error!("profile load failed: HTTP {status} => {body}");
                Err(CommandError::ApiError(format!("({status}): {body}")))
            }
            Err(e) => {
                error!("profile load failed: {e}");
                Err(CommandError::HttpError(e.to_string()))
            }
        }
    }

    /// Saves the three editable fields. Failure detail is surfaced to the
    /// user since this is an explicit action.
    pub async fn save(
        client: &ApiClient,
        student_id: i64,
        profile: &StudentProfile,
    ) -> Result<CommandResult<()>, CommandError> {
        match client.update_student(student_id, profile).await {
            Ok(()) => Ok(CommandResult::new(())),
            Err(Error::Api { status, body }) => {
                Err(CommandError::ApiError(format!("({status}): {body}")))
            }
            Err(e) => {
                error!("profile save failed: {e}");
                Err(CommandError::HttpError(e.to_string()))
            }
        }
    }

    /// Deletes the account and clears the stored session on success. The
    /// interactive confirmation happens in the frontend before this runs.
    pub async fn delete(
        client: &ApiClient,
        store: &SessionStore,
        student_id: i64,
    ) -> Result<CommandResult<()>, CommandError> {
        match client.delete_student(student_id).await {
            Ok(()) => {
                store
                    .clear()
                    .map_err(|e| CommandError::DataError(e.to_string()))?;
                Ok(CommandResult::new(()))
            }
            Err(Error::Api { status, body }) => {
                Err(CommandError::ApiError(format!("({status}): {body}")))
            }
            Err(e) => {
                error!("account deletion failed: {e}");
                Err(CommandError::HttpError(e.to_string()))
            }
        }
    }
}
