//! Skeleton Loaders
//!
//! Placeholder states shown while a fetch is in flight. Rendering a
//! skeleton is how views keep "not yet loaded" visually distinct from
//! "loaded and empty".

use leptos::*;

/// Skeleton for the task list page: filter bar plus table rows.
#[component]
pub fn TasksSkeleton() -> impl IntoView {
    view! {
        <div class="p-5 max-w-3xl mx-auto animate-pulse">
            <div class="h-8 bg-gray-200 rounded w-1/3 mx-auto my-7" />
            <div class="flex justify-between mb-3">
                <div class="h-10 bg-gray-200 rounded w-24" />
                <div class="h-10 bg-gray-200 rounded w-40" />
            </div>
            <div class="space-y-3">
                {(0..4).map(|_| view! {
                    <div class="bg-gray-200 rounded h-12" />
                }).collect_view()}
            </div>
        </div>
    }
}

/// Skeleton for the single-task page.
#[component]
pub fn TaskSkeleton() -> impl IntoView {
    view! {
        <div class="p-3 max-w-lg mx-auto animate-pulse">
            <div class="h-4 bg-gray-200 rounded w-20" />
            <div class="h-8 bg-gray-200 rounded w-1/2 mx-auto my-7" />
            <div class="flex space-x-2">
                <div class="h-6 bg-gray-200 rounded w-16" />
                <div class="h-6 bg-gray-200 rounded w-24" />
            </div>
            <div class="h-32 bg-gray-200 rounded mt-4" />
        </div>
    }
}
