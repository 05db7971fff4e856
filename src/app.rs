//! App Root Component
//!
//! Routing, the session store and toast notifications.
//!
//! The session and notifier handles are constructed once here and passed
//! to views as typed props, so every view's dependencies are explicit in
//! its signature.

use leptos::*;
use leptos_router::*;

use crate::components::{NavBar, RequireAuth, Toast};
use crate::pages::{
    CreateTask, Home, Profile, SignIn, SignUp, TaskDetail, Tasks, UpdateTask,
};
use crate::state::{Notifier, Session};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let session = Session::new();
    let notify = Notifier::new();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-50 text-gray-900 flex flex-col">
                // Navigation header
                <NavBar session=session notify=notify />

                // Main content area
                <main class="flex-1">
                    <Routes>
                        <Route path="/" view=move || view! { <Home session=session /> } />
                        <Route path="/signin" view=move || view! { <SignIn session=session notify=notify /> } />
                        <Route path="/signup" view=move || view! { <SignUp session=session notify=notify /> } />

                        // Signed-in area
                        <Route path="" view=move || view! { <RequireAuth session=session /> }>
                            <Route path="profile" view=move || view! { <Profile session=session notify=notify /> } />
                            <Route path="tasks" view=move || view! { <Tasks session=session notify=notify /> } />
                            <Route path="tasks/:id" view=move || view! { <TaskDetail notify=notify /> } />
                            <Route path="create-task" view=move || view! { <CreateTask notify=notify /> } />
                            <Route path="update-task/:id" view=move || view! { <UpdateTask notify=notify /> } />
                        </Route>

                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Toast notifications
                <Toast notify=notify />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors"
            >
                "Go home"
            </A>
        </div>
    }
}
