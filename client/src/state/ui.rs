//! Local UI chrome state.
//!
//! Keeps transient presentation concerns (mobile navigation drawer, the
//! active booking modal) out of page components so chrome can evolve
//! independently of page content.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state provided as `RwSignal<UiState>` at the app root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Mobile navigation drawer visibility.
    pub nav_open: bool,
    /// Room type preselected in the booking modal, when it is open.
    pub booking_room: Option<String>,
}

impl UiState {
    pub fn toggle_nav(&mut self) {
        self.nav_open = !self.nav_open;
    }

    pub fn close_nav(&mut self) {
        self.nav_open = false;
    }

    /// Open the booking modal preselected to `room`.
    pub fn open_booking(&mut self, room: &str) {
        self.booking_room = Some(room.to_owned());
    }

    pub fn close_booking(&mut self) {
        self.booking_room = None;
    }

    #[must_use]
    pub fn booking_open(&self) -> bool {
        self.booking_room.is_some()
    }
}
