//! # Session Commands
//!
//! `logout` and `help`.

use tracing::debug;

use registro_core::CoreError;

use super::Reply;
use crate::error::AppResult;
use crate::render::help_text;
use crate::state::AppState;

/// Back to an empty registration form. No confirmation.
pub fn logout(state: &AppState) -> AppResult<Reply> {
    match state.logout() {
        Some(session) => {
            debug!(session_id = %session.id, "Logout command");
            Ok(Reply::Continue(None))
        }
        None => Err(CoreError::NotAuthenticated.into()),
    }
}

/// Commands available on the current screen.
pub fn help(state: &AppState) -> AppResult<Reply> {
    let authenticated = state.snapshot().is_authenticated();
    Ok(Reply::Continue(Some(help_text(authenticated))))
}
