//! Update-Task Page
//!
//! Fetches the task, then prefills the shared task form with it.

use leptos::*;
use leptos_router::use_params_map;

use crate::api;
use crate::api::Task;
use crate::components::{TaskForm, TaskSkeleton};
use crate::state::Notifier;

/// Task edit page component
#[component]
pub fn UpdateTask(notify: Notifier) -> impl IntoView {
    let params = use_params_map();

    let (task, set_task) = create_signal(None::<Task>);

    create_effect(move |_| {
        let id = params.with(|p| p.get("id").cloned().unwrap_or_default());
        spawn_local(async move {
            match api::fetch_task(&id).await {
                Ok(fetched) => {
                    set_task.set(Some(fetched));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch task: {}", e).into());
                    notify.show_error(&e);
                }
            }
        });
    });

    view! {
        <div class="p-3 max-w-4xl mx-auto">
            <h1 class="text-3xl font-semibold text-center my-7">"Edit task"</h1>

            {move || {
                match task.get() {
                    None => view! { <TaskSkeleton /> }.into_view(),
                    Some(task) => view! { <TaskForm notify=notify task=task /> }.into_view(),
                }
            }}
        </div>
    }
}
