//! # Form Commands
//!
//! `email`, `age`, `code` and `submit`. Only valid on the registration
//! screen; the gate rejects them once a session is active.

use tracing::debug;

use registro_core::{FormField, SubmitOutcome};

use super::Reply;
use crate::error::AppResult;
use crate::state::AppState;

/// Replaces one field's value.
pub fn edit_field(state: &AppState, field: FormField, value: String) -> AppResult<Reply> {
    debug!(%field, len = value.chars().count(), "Editing field");
    state.edit(field, value)?;
    Ok(Reply::Continue(None))
}

/// Validates the form. Errors and the alert are part of the redrawn screen,
/// so only an accepted submit prints anything extra.
pub fn submit(state: &AppState) -> AppResult<Reply> {
    match state.submit()? {
        SubmitOutcome::Accepted(session) if session.is_employee_role => Ok(Reply::Continue(Some(
            "Bienvenido. Acceso de empleado habilitado.".to_string(),
        ))),
        SubmitOutcome::Accepted(_) => Ok(Reply::Continue(Some("Bienvenido.".to_string()))),
        SubmitOutcome::Rejected(_) => Ok(Reply::Continue(None)),
    }
}
