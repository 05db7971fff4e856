//! Avatar Uploader
//!
//! Clickable avatar preview over a hidden file input. Choosing a file only
//! swaps the preview to a local object URL and hands the `File` to the
//! parent; the actual upload happens when the profile form is submitted.

use leptos::*;
use wasm_bindgen::JsCast;

/// Avatar picker used by the profile form.
#[component]
pub fn AvatarUploader(
    preview_url: RwSignal<String>,
    file: WriteSignal<Option<web_sys::File>>,
) -> impl IntoView {
    let on_change = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = match ev.target().and_then(|t| t.dyn_into().ok()) {
            Some(input) => input,
            None => return,
        };

        if let Some(files) = input.files() {
            if let Some(picked) = files.get(0) {
                if let Ok(url) = web_sys::Url::create_object_url_with_blob(&picked) {
                    preview_url.set(url);
                }
                file.set(Some(picked));
            }
        }
    };

    view! {
        <div class="flex justify-center">
            <label class="cursor-pointer" title="Change avatar">
                <input
                    type="file"
                    accept="image/jpeg,image/png"
                    class="hidden"
                    on:change=on_change
                />
                <img
                    class="h-24 w-24 rounded-full object-cover mt-2"
                    alt="profile"
                    src=move || preview_url.get()
                />
            </label>
        </div>
    }
}
