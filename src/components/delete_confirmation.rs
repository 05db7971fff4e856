//! Delete Confirmation Dialog
//!
//! Modal confirm step before destructive actions (account or task deletion).

use leptos::*;

/// Confirmation modal. Rendered (and dismissed) by the `open` signal.
#[component]
pub fn DeleteConfirmation(
    #[prop(into)]
    title: String,
    open: ReadSignal<bool>,
    on_close: impl Fn() + Clone + 'static,
    on_confirm: impl Fn() + Clone + 'static,
) -> impl IntoView {
    view! {
        {move || {
            let title = title.clone();
            let close = on_close.clone();
            let close_for_x = on_close.clone();
            let confirm = on_confirm.clone();

            open.get().then(move || view! {
                <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
                    <div class="bg-white rounded-xl p-6 w-full max-w-sm mx-4">
                        <div class="flex items-center justify-between mb-2">
                            <h2 class="text-xl font-semibold">{title}</h2>
                            <button
                                on:click=move |_| close_for_x()
                                class="text-gray-400 hover:text-gray-600"
                            >
                                "✕"
                            </button>
                        </div>

                        <p class="text-gray-600 mb-6">
                            "Are you sure? You can't undo this action afterwards."
                        </p>

                        <div class="flex space-x-3">
                            <button
                                on:click=move |_| close()
                                class="flex-1 px-4 py-3 bg-gray-100 hover:bg-gray-200 rounded-lg font-medium transition-colors"
                            >
                                "Cancel"
                            </button>
                            <button
                                on:click=move |_| confirm()
                                class="flex-1 px-4 py-3 bg-red-600 hover:bg-red-700 text-white rounded-lg font-medium transition-colors"
                            >
                                "Delete"
                            </button>
                        </div>
                    </div>
                </div>
            })
        }}
    }
}
