//! Profile Page
//!
//! Edit the signed-in user's profile, change the avatar, delete the
//! account, or sign out.

use leptos::*;
use leptos_router::{use_navigate, A};

use crate::api;
use crate::api::UpdateProfileRequest;
use crate::components::{AvatarUploader, DeleteConfirmation};
use crate::state::{Notifier, Session};

/// Profile form page
#[component]
pub fn Profile(session: Session, notify: Notifier) -> impl IntoView {
    // Unreachable behind the route guard.
    let Some(user) = session.current_untracked() else {
        return ().into_view();
    };

    let user_id = user.id.clone();

    let (username, set_username) = create_signal(user.username.clone());
    let (email, set_email) = create_signal(user.email.clone());
    let (password, set_password) = create_signal(String::new());
    let avatar = create_rw_signal(user.avatar.clone());
    let (file, set_file) = create_signal(None::<web_sys::File>);

    let (username_error, set_username_error) = create_signal(None::<&'static str>);
    let (email_error, set_email_error) = create_signal(None::<&'static str>);
    let (password_error, set_password_error) = create_signal(None::<&'static str>);
    let (submitting, set_submitting) = create_signal(false);
    let (confirm_open, set_confirm_open) = create_signal(false);

    let navigate = use_navigate();

    let submit_id = user_id.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let mut valid = true;
        if username.get().trim().is_empty() {
            set_username_error.set(Some("Username is required"));
            valid = false;
        } else {
            set_username_error.set(None);
        }
        if email.get().trim().is_empty() {
            set_email_error.set(Some("Email is required"));
            valid = false;
        } else {
            set_email_error.set(None);
        }
        if password.get().is_empty() {
            set_password_error.set(Some("Password is required"));
            valid = false;
        } else {
            set_password_error.set(None);
        }
        if !valid {
            return;
        }

        set_submitting.set(true);

        let new_username = username.get();
        let new_email = email.get();
        let new_password = password.get();
        let mut avatar_url = avatar.get_untracked();
        let picked = file.get_untracked();

        let user_id = submit_id.clone();
        spawn_local(async move {
            // Upload the newly picked avatar first, if any; the profile
            // payload then carries the hosted URL, not the local preview.
            if let Some(picked) = picked {
                match api::upload_image(&picked).await {
                    Ok(url) => avatar_url = url,
                    Err(e) => {
                        notify.show_error(&e);
                        set_submitting.set(false);
                        return;
                    }
                }
            }

            let request = UpdateProfileRequest {
                username: new_username,
                email: new_email,
                password: new_password,
                avatar: avatar_url,
            };
            match api::update_profile(&user_id, &request).await {
                Ok(updated) => {
                    avatar.set(updated.avatar.clone());
                    session.set_user(Some(updated));
                    set_password.set(String::new());
                    set_file.set(None);
                    notify.show_success("Profile updated");
                }
                Err(e) => {
                    notify.show_error(&e);
                }
            }
            set_submitting.set(false);
        });
    };

    let delete_id = user_id;
    let navigate_for_delete = navigate.clone();
    let handle_delete = move || {
        set_confirm_open.set(false);
        let user_id = delete_id.clone();
        let navigate = navigate_for_delete.clone();
        spawn_local(async move {
            match api::delete_user(&user_id).await {
                Ok(message) => {
                    notify.show_success(&message);
                    session.set_user(None);
                    navigate("/", Default::default());
                }
                Err(e) => {
                    notify.show_error(&e);
                }
            }
        });
    };

    let handle_sign_out = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::sign_out().await {
                Ok(message) => {
                    notify.show_success(&message);
                    session.set_user(None);
                    navigate("/", Default::default());
                }
                Err(e) => {
                    notify.show_error(&e);
                }
            }
        });
    };

    view! {
        <div class="p-3 max-w-lg mx-auto">
            <DeleteConfirmation
                title="Delete profile"
                open=confirm_open
                on_close=move || set_confirm_open.set(false)
                on_confirm=handle_delete
            />

            <h1 class="text-3xl font-semibold text-center my-7">"Your profile"</h1>

            <form on:submit=on_submit class="space-y-4">
                <AvatarUploader preview_url=avatar file=set_file />

                <div>
                    <input
                        type="text"
                        placeholder="username"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                        class="w-full bg-white rounded-lg px-4 py-3
                               border border-gray-300 focus:border-blue-500 focus:outline-none"
                    />
                    {move || username_error.get().map(|msg| view! {
                        <p class="text-red-600 text-sm mt-1">{msg}</p>
                    })}
                </div>

                <div>
                    <input
                        type="email"
                        placeholder="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        class="w-full bg-white rounded-lg px-4 py-3
                               border border-gray-300 focus:border-blue-500 focus:outline-none"
                    />
                    {move || email_error.get().map(|msg| view! {
                        <p class="text-red-600 text-sm mt-1">{msg}</p>
                    })}
                </div>

                <div>
                    <input
                        type="password"
                        placeholder="New password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        class="w-full bg-white rounded-lg px-4 py-3
                               border border-gray-300 focus:border-blue-500 focus:outline-none"
                    />
                    {move || password_error.get().map(|msg| view! {
                        <p class="text-red-600 text-sm mt-1">{msg}</p>
                    })}
                </div>

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full px-4 py-3 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400
                           text-white rounded-lg font-semibold transition-colors"
                >
                    {move || if submitting.get() { "Updating..." } else { "Update profile" }}
                </button>
            </form>

            <div class="space-y-4 mt-5">
                <A
                    href="/create-task"
                    class="block p-2 bg-green-500 hover:bg-green-600 rounded-lg
                           text-center text-white font-semibold"
                >
                    "Create new task"
                </A>

                <div class="flex justify-between">
                    <span
                        class="text-red-600 cursor-pointer"
                        on:click=move |_| set_confirm_open.set(true)
                    >
                        "Delete profile"
                    </span>
                    <span class="text-red-600 cursor-pointer" on:click=handle_sign_out>
                        "Sign out"
                    </span>
                </div>

                <p class="text-center">
                    <A href="/tasks" class="text-blue-500 hover:underline">
                        "Show tasks"
                    </A>
                </p>
            </div>
        </div>
    }
    .into_view()
}
