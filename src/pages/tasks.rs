//! Tasks Page
//!
//! The task list: status filter, sortable columns and pagination, all
//! driven by URL query parameters so the view is shareable and survives
//! reloads.

use std::cell::Cell;
use std::rc::Rc;

use leptos::*;
use leptos_router::{use_navigate, use_query_map, A};

use crate::api;
use crate::api::{Task, TaskPage, TaskStatus};
use crate::components::{Pagination, TasksSkeleton};
use crate::state::query::{SortField, TaskListQuery, PAGE_SIZE};
use crate::state::{Notifier, Session};

/// Task list page component
#[component]
pub fn Tasks(session: Session, notify: Notifier) -> impl IntoView {
    let query_map = use_query_map();
    let query = create_memo(move |_| TaskListQuery::from_params(&query_map.get()));

    let (page_data, set_page_data) = create_signal(None::<TaskPage>);

    // Re-fetch whenever the parsed query changes. Each fetch takes a
    // sequence number and only the latest one may apply its result, so a
    // slow stale response never overwrites a newer page.
    let fetch_seq = Rc::new(Cell::new(0u64));
    create_effect(move |_| {
        let query = query.get();
        let Some(user) = session.current_untracked() else {
            return;
        };

        fetch_seq.set(fetch_seq.get() + 1);
        let seq = fetch_seq.get();
        let fetch_seq = fetch_seq.clone();
        spawn_local(async move {
            match api::fetch_tasks(&user.id, &query).await {
                Ok(page) => {
                    if fetch_seq.get() == seq {
                        set_page_data.set(Some(page));
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch tasks: {}", e).into());
                    notify.show_error(&e);
                }
            }
        });
    });

    let navigate = use_navigate();
    let handle_status = move |ev: web_sys::Event| {
        let status = TaskStatus::from_param(&event_target_value(&ev));
        let query = query.get_untracked().with_status(status);
        navigate(
            &format!("/tasks{}", query.to_query_string()),
            Default::default(),
        );
    };

    view! {
        {move || {
            match page_data.get() {
                None => view! { <TasksSkeleton /> }.into_view(),
                Some(page) => {
                    let handle_status = handle_status.clone();
                    view! {
                        <div class="p-5 max-w-3xl mx-auto">
                            <h1 class="text-3xl font-semibold text-center my-7">"Tasks to do"</h1>

                            <div class="flex justify-between mb-3">
                                // Status filter writes the `status` parameter
                                <div class="w-28">
                                    <select
                                        on:change=handle_status
                                        prop:value=move || {
                                            query.get().status.map(|s| s.as_str().to_string()).unwrap_or_default()
                                        }
                                        class="w-full bg-white rounded-lg px-3 py-2
                                               border border-gray-300 focus:border-blue-500 focus:outline-none"
                                    >
                                        <option value="">"All"</option>
                                        <option value="open">"Open"</option>
                                        <option value="done">"Done"</option>
                                    </select>
                                </div>

                                <A
                                    href="/create-task"
                                    class="px-4 py-2 bg-green-500 hover:bg-green-600 text-white rounded-lg font-semibold"
                                >
                                    "Create a new task"
                                </A>
                            </div>

                            <table class="w-full border-2 border-gray-100">
                                <thead class="bg-gray-100">
                                    <tr>
                                        <SortHeader label="Task" field=SortField::Name query=query />
                                        <SortHeader label="Priority" field=SortField::Priority query=query />
                                        <SortHeader label="Status" field=SortField::Status query=query />
                                        <SortHeader label="Due date" field=SortField::Due query=query />
                                    </tr>
                                </thead>
                                <tbody>
                                    {if page.tasks.is_empty() {
                                        view! {
                                            <tr>
                                                <td colspan="4" class="text-center py-12 text-gray-400">
                                                    "No tasks yet. Create your first one!"
                                                </td>
                                            </tr>
                                        }.into_view()
                                    } else {
                                        page.tasks.iter().map(|task| view! {
                                            <TaskRow task=task.clone() />
                                        }).collect_view()
                                    }}
                                </tbody>
                            </table>

                            <Pagination
                                item_count=page.task_count
                                page_size=PAGE_SIZE
                                current_page=query.get().page
                            />
                        </div>
                    }.into_view()
                }
            }
        }}
    }
}

/// Sortable column header. Clicking writes `orderBy` to the URL; the
/// last-clicked column carries a static ascending marker.
#[component]
fn SortHeader(
    label: &'static str,
    field: SortField,
    query: Memo<TaskListQuery>,
) -> impl IntoView {
    let navigate = use_navigate();
    let sort_by = move |_| {
        let query = query.get_untracked().with_order_by(field);
        navigate(
            &format!("/tasks{}", query.to_query_string()),
            Default::default(),
        );
    };

    view! {
        <th class="px-4 py-3 text-left text-xs font-semibold uppercase text-gray-600">
            <div on:click=sort_by class="flex items-center cursor-pointer select-none">
                {label}
                {move || (query.get().order_by == Some(field)).then(|| view! {
                    <span class="ml-1">"↑"</span>
                })}
            </div>
        </th>
    }
}

/// Single task row
#[component]
fn TaskRow(task: Task) -> impl IntoView {
    let priority_class = if task.priority == "urgent" {
        "bg-red-100 text-red-800"
    } else {
        "bg-gray-100 text-gray-800"
    };
    let status_class = match task.status {
        TaskStatus::Open => "bg-orange-100 text-orange-800",
        TaskStatus::Done => "bg-green-100 text-green-800",
    };

    view! {
        <tr class="border-t border-gray-100">
            <td class="px-4 py-3">
                <A href=format!("/tasks/{}", task.id) class="text-blue-600 hover:underline">
                    {task.name.clone()}
                </A>
            </td>
            <td class="px-4 py-3">
                <span class=format!(
                    "text-xs font-semibold px-2 py-0.5 rounded uppercase {}",
                    priority_class
                )>
                    {task.priority.clone()}
                </span>
            </td>
            <td class="px-4 py-3">
                <span class=format!(
                    "text-xs font-semibold px-2 py-0.5 rounded uppercase {}",
                    status_class
                )>
                    {task.status.as_str()}
                </span>
            </td>
            <td class="px-4 py-3">
                {task.due.as_deref().map(api::format_due).unwrap_or_default()}
            </td>
        </tr>
    }
}
