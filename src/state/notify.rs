//! Toast Notifications
//!
//! Success and error messages with auto-clear timeouts.

use leptos::*;

/// Reactive handle on the toast messages. Constructed once in the app root
/// and passed to views as a prop, like [`crate::state::Session`].
#[derive(Clone, Copy)]
pub struct Notifier {
    /// Success message, if one is showing.
    pub success: RwSignal<Option<String>>,
    /// Error message, if one is showing.
    pub error: RwSignal<Option<String>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            success: create_rw_signal(None),
            error: create_rw_signal(None),
        }
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
