//! Application state.

use flywin_core::AuditService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub audit: AuditService,
}

impl AppState {
    pub fn new(audit: AuditService) -> Self {
        Self { audit }
    }
}
