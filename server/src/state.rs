//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the two outbound delivery paths behind trait objects so the
//! relay pipeline can run against mocks in tests. Either path may be
//! `None` when its configuration is absent.

use std::sync::Arc;

use crate::services::mailer::Mailer;
use crate::services::sheets::SheetWriter;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; both fields are Arc-wrapped handles.
#[derive(Clone)]
pub struct AppState {
    /// Optional email delivery path. `None` if mailer env vars are not set.
    pub mailer: Option<Arc<dyn Mailer>>,
    /// Optional spreadsheet delivery path. `None` if the endpoint URL is not set.
    pub sheets: Option<Arc<dyn SheetWriter>>,
}

impl AppState {
    #[must_use]
    pub fn new(mailer: Option<Arc<dyn Mailer>>, sheets: Option<Arc<dyn SheetWriter>>) -> Self {
        Self { mailer, sheets }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// Build an `AppState` with explicit delivery path handles.
    #[must_use]
    pub fn state_with(mailer: Option<Arc<dyn Mailer>>, sheets: Option<Arc<dyn SheetWriter>>) -> AppState {
        AppState::new(mailer, sheets)
    }

    /// An `AppState` with no delivery path configured.
    #[must_use]
    pub fn unconfigured_state() -> AppState {
        AppState::new(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_state_has_no_paths() {
        let state = test_helpers::unconfigured_state();
        assert!(state.mailer.is_none());
        assert!(state.sheets.is_none());
    }

    #[test]
    fn clone_shares_handles() {
        let state = test_helpers::unconfigured_state();
        let cloned = state.clone();
        assert!(cloned.mailer.is_none());
        assert!(cloned.sheets.is_none());
    }
}
