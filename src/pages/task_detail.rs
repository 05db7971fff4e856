//! Single-Task Page
//!
//! Shows one task with its status, due date and description; tasks can be
//! deleted (after confirmation) or edited from here.

use leptos::*;
use leptos_router::{use_navigate, use_params_map, A};

use crate::api;
use crate::api::{Task, TaskStatus};
use crate::components::{DeleteConfirmation, TaskSkeleton};
use crate::state::Notifier;

/// Single-task page component
#[component]
pub fn TaskDetail(notify: Notifier) -> impl IntoView {
    let params = use_params_map();
    let task_id = create_memo(move |_| {
        params.with(|p| p.get("id").cloned().unwrap_or_default())
    });

    let (task, set_task) = create_signal(None::<Task>);

    create_effect(move |_| {
        let id = task_id.get();
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

    let (confirm_open, set_confirm_open) = create_signal(false);

    let navigate = use_navigate();
    let handle_delete = move || {
        set_confirm_open.set(false);
        let id = task_id.get_untracked();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::delete_task(&id).await {
                Ok(message) => {
                    notify.show_success(&message);
                    navigate("/tasks", Default::default());
                }
                Err(e) => {
                    notify.show_error(&e);
                }
            }
        });
    };

    view! {
        {move || {
            match task.get() {
                None => view! { <TaskSkeleton /> }.into_view(),
                Some(task) => {
                    let handle_delete = handle_delete.clone();
                    let status_class = match task.status {
                        TaskStatus::Open => "bg-orange-100 text-orange-800",
                        TaskStatus::Done => "bg-green-100 text-green-800",
                    };

                    view! {
                        <div class="p-3 max-w-lg mx-auto">
                            <A href="/tasks" class="flex items-center text-teal-600 hover:underline">
                                "‹ All Tasks"
                            </A>

                            <h1 class="text-3xl font-semibold text-center my-7">
                                {task.name.clone()}
                            </h1>

                            <div class="flex items-center space-x-2">
                                <span class=format!(
                                    "text-sm font-semibold px-2 py-0.5 rounded uppercase {}",
                                    status_class
                                )>
                                    {task.status.as_str()}
                                </span>
                                {task.due.as_deref().map(|due| view! {
                                    <span>{api::format_due(due)}</span>
                                })}
                            </div>

                            <div class="bg-white border border-gray-200 rounded-lg p-4 mt-4">
                                <p>{task.description.clone()}</p>
                            </div>

                            <div class="flex justify-between mt-5">
                                <span
                                    class="text-red-600 cursor-pointer"
                                    on:click=move |_| set_confirm_open.set(true)
                                >
                                    "Delete task"
                                </span>
                                <A
                                    href=format!("/update-task/{}", task.id)
                                    class="text-teal-600 hover:underline"
                                >
                                    "Edit task"
                                </A>
                            </div>

                            <DeleteConfirmation
                                title="Delete task"
                                open=confirm_open
                                on_close=move || set_confirm_open.set(false)
                                on_confirm=handle_delete
                            />
                        </div>
                    }.into_view()
                }
            }
        }}
    }
}
