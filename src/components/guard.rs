//! Route Guard
//!
//! Gates the signed-in part of the app behind the session store.

use leptos::*;
use leptos_router::{Outlet, Redirect};

use crate::state::Session;

/// Wraps the guarded routes: renders the matched child view when a user is
/// signed in, otherwise redirects to the sign-in page.
///
/// Purely a function of session state; no side effects and no loading state
/// of its own (session presence is synchronous once the store exists).
#[component]
pub fn RequireAuth(session: Session) -> impl IntoView {
    move || {
        if session.is_signed_in() {
            view! { <Outlet /> }.into_view()
        } else {
            view! { <Redirect path="/signin" /> }.into_view()
        }
    }
}
