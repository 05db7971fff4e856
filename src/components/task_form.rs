//! Task Form
//!
//! Shared form for creating and editing a task. Pass an existing task to
//! edit it; otherwise the form creates a new one. On success the browser
//! navigates to the task's detail view.

use leptos::*;
use leptos_router::use_navigate;

use crate::api;
use crate::api::{TaskPayload, TaskStatus};
use crate::state::Notifier;

/// Task create/edit form component
#[component]
pub fn TaskForm(notify: Notifier, #[prop(optional, into)] task: Option<api::Task>) -> impl IntoView {
    let editing = task.as_ref().map(|t| t.id.clone());
    let is_editing = editing.is_some();

    let (name, set_name) = create_signal(task.as_ref().map(|t| t.name.clone()).unwrap_or_default());
    let (description, set_description) =
        create_signal(task.as_ref().map(|t| t.description.clone()).unwrap_or_default());
    let (status, set_status) =
        create_signal(task.as_ref().map(|t| t.status).unwrap_or(TaskStatus::Open));
    let (priority, set_priority) = create_signal(
        task.as_ref()
            .map(|t| t.priority.clone())
            .unwrap_or_else(|| "normal".to_string()),
    );
    let (due, set_due) = create_signal(
        task.as_ref()
            .and_then(|t| t.due.as_deref())
            .map(date_input_value)
            .unwrap_or_default(),
    );

    let (name_error, set_name_error) = create_signal(None::<&'static str>);
    let (submitting, set_submitting) = create_signal(false);

    let navigate = use_navigate();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if name.get().trim().is_empty() {
            set_name_error.set(Some("Name is required"));
            return;
        }
        set_name_error.set(None);

        set_submitting.set(true);

        let payload = TaskPayload {
            name: name.get(),
            description: description.get(),
            status: status.get(),
            priority: priority.get(),
            due: {
                let d = due.get();
                (!d.is_empty()).then_some(d)
            },
        };

        let editing = editing.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = match &editing {
                Some(task_id) => api::update_task(task_id, &payload).await,
                None => api::create_task(&payload).await,
            };

            match result {
                Ok(task) => {
                    notify.show_success(if is_editing { "Task updated" } else { "Task created" });
                    navigate(&format!("/tasks/{}", task.id), Default::default());
                }
                Err(e) => {
                    notify.show_error(&e);
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            // Name
            <div>
                <input
                    type="text"
                    placeholder="Task name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                    class="w-full bg-white rounded-lg px-4 py-3
                           border border-gray-300 focus:border-blue-500 focus:outline-none"
                />
                {move || name_error.get().map(|msg| view! {
                    <p class="text-red-600 text-sm mt-1">{msg}</p>
                })}
            </div>

            // Description
            <div>
                <textarea
                    placeholder="Description"
                    rows="5"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                    class="w-full bg-white rounded-lg px-4 py-3
                           border border-gray-300 focus:border-blue-500 focus:outline-none"
                />
            </div>

            <div class="grid md:grid-cols-3 gap-4">
                // Status
                <div>
                    <label class="block text-sm text-gray-500 mb-2">"Status"</label>
                    <select
                        on:change=move |ev| {
                            if let Some(status) = TaskStatus::from_param(&event_target_value(&ev)) {
                                set_status.set(status);
                            }
                        }
                        prop:value=move || status.get().as_str().to_string()
                        class="w-full bg-white rounded-lg px-4 py-3
                               border border-gray-300 focus:border-blue-500 focus:outline-none"
                    >
                        <option value="open">"Open"</option>
                        <option value="done">"Done"</option>
                    </select>
                </div>

                // Priority
                <div>
                    <label class="block text-sm text-gray-500 mb-2">"Priority"</label>
                    <select
                        on:change=move |ev| set_priority.set(event_target_value(&ev))
                        prop:value=move || priority.get()
                        class="w-full bg-white rounded-lg px-4 py-3
                               border border-gray-300 focus:border-blue-500 focus:outline-none"
                    >
                        <option value="normal">"Normal"</option>
                        <option value="urgent">"Urgent"</option>
                    </select>
                </div>

                // Due date
                <div>
                    <label class="block text-sm text-gray-500 mb-2">"Due date"</label>
                    <input
                        type="date"
                        prop:value=move || due.get()
                        on:input=move |ev| set_due.set(event_target_value(&ev))
                        class="w-full bg-white rounded-lg px-4 py-3
                               border border-gray-300 focus:border-blue-500 focus:outline-none"
                    />
                </div>
            </div>

            <button
                type="submit"
                disabled=move || submitting.get()
                class="w-full px-4 py-3 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400
                       text-white rounded-lg font-semibold transition-colors"
            >
                {move || {
                    if submitting.get() {
                        "Saving..."
                    } else if is_editing {
                        "Update task"
                    } else {
                        "Create task"
                    }
                }}
            </button>
        </form>
    }
}

/// Reduce a service due date to the `YYYY-MM-DD` form a date input expects.
fn date_input_value(due: &str) -> String {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(due) {
        return dt.format("%Y-%m-%d").to_string();
    }
    if chrono::NaiveDate::parse_from_str(due, "%Y-%m-%d").is_ok() {
        return due.to_string();
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_input_value() {
        assert_eq!(date_input_value("2026-08-06T00:00:00.000Z"), "2026-08-06");
        assert_eq!(date_input_value("2026-08-06"), "2026-08-06");
        assert_eq!(date_input_value("soon"), "");
    }
}
