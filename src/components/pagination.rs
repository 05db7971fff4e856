//! Pagination Component
//!
//! Page controls for the task list. Clicking a page writes the `page`
//! query parameter back to the URL; the list re-fetches from there.

use leptos::*;
use leptos_router::{use_navigate, use_query_map};

use crate::state::query::{page_count, TaskListQuery};

/// Pager for the task list. Hidden when everything fits on one page.
/// `item_count` is the service-reported total, not the page length.
#[component]
pub fn Pagination(item_count: u64, page_size: u64, current_page: u64) -> impl IntoView {
    let pages = page_count(item_count, page_size);
    let navigate = use_navigate();
    let query_map = use_query_map();

    let go_to = move |page: u64| {
        let query = TaskListQuery::from_params(&query_map.get_untracked()).with_page(page);
        navigate(
            &format!("/tasks{}", query.to_query_string()),
            Default::default(),
        );
    };

    let go_prev = {
        let go_to = go_to.clone();
        move |_| go_to(current_page.saturating_sub(1).max(1))
    };
    let go_next = {
        let go_to = go_to.clone();
        move |_| go_to((current_page + 1).min(pages))
    };

    view! {
        {(pages > 1).then(move || view! {
            <div class="flex items-center justify-center space-x-2 mt-5">
                <button
                    on:click=go_prev
                    disabled={current_page <= 1}
                    class="px-3 py-2 rounded-lg text-sm font-medium bg-gray-100
                           hover:bg-gray-200 disabled:opacity-50 disabled:hover:bg-gray-100"
                >
                    "Prev"
                </button>

                {(1..=pages).map(|page| {
                    let go_to = go_to.clone();
                    let class = if page == current_page {
                        "px-3 py-2 rounded-lg text-sm font-medium bg-blue-600 text-white"
                    } else {
                        "px-3 py-2 rounded-lg text-sm font-medium bg-gray-100 hover:bg-gray-200"
                    };
                    view! {
                        <button on:click=move |_| go_to(page) class=class>
                            {page}
                        </button>
                    }
                }).collect_view()}

                <button
                    on:click=go_next
                    disabled={current_page >= pages}
                    class="px-3 py-2 rounded-lg text-sm font-medium bg-gray-100
                           hover:bg-gray-200 disabled:opacity-50 disabled:hover:bg-gray-100"
                >
                    "Next"
                </button>
            </div>
        })}
    }
}
