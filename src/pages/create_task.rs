//! Create-Task Page

use leptos::*;

use crate::components::TaskForm;
use crate::state::Notifier;

/// Task creation page component
#[component]
pub fn CreateTask(notify: Notifier) -> impl IntoView {
    view! {
        <div class="p-3 max-w-4xl mx-auto">
            <h1 class="text-3xl font-semibold text-center my-7">"Create a new task"</h1>
            <TaskForm notify=notify />
        </div>
    }
}
