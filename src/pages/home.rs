//! Home Page
//!
//! Public landing page.

use leptos::*;
use leptos_router::A;

use crate::state::Session;

/// Landing page component
#[component]
pub fn Home(session: Session) -> impl IntoView {
    view! {
        <div class="p-3 max-w-lg mx-auto text-center">
            <h1 class="text-4xl font-bold mt-16 mb-4">"Taskly"</h1>
            <p class="text-gray-600 mb-8">
                "A small personal task manager. Keep track of what's open, "
                "what's done and what's due."
            </p>

            {move || {
                if session.is_signed_in() {
                    view! {
                        <div class="flex justify-center space-x-3">
                            <A
                                href="/tasks"
                                class="px-6 py-3 bg-green-500 hover:bg-green-600 text-white rounded-lg font-semibold"
                            >
                                "Show tasks"
                            </A>
                            <A
                                href="/profile"
                                class="px-6 py-3 bg-gray-100 hover:bg-gray-200 rounded-lg font-semibold"
                            >
                                "Your profile"
                            </A>
                        </div>
                    }.into_view()
                } else {
                    view! {
                        <div class="flex justify-center space-x-3">
                            <A
                                href="/signin"
                                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-semibold"
                            >
                                "Sign in"
                            </A>
                            <A
                                href="/signup"
                                class="px-6 py-3 bg-gray-100 hover:bg-gray-200 rounded-lg font-semibold"
                            >
                                "Create an account"
                            </A>
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}
