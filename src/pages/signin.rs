//! Sign-In Page

use leptos::*;
use leptos_router::{use_navigate, A};

use crate::api;
use crate::api::SignInRequest;
use crate::state::{Notifier, Session};

/// Sign-in form page
#[component]
pub fn SignIn(session: Session, notify: Notifier) -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (email_error, set_email_error) = create_signal(None::<&'static str>);
    let (password_error, set_password_error) = create_signal(None::<&'static str>);
    let (submitting, set_submitting) = create_signal(false);

    let navigate = use_navigate();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let mut valid = true;
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

        let request = SignInRequest {
            email: email.get(),
            password: password.get(),
        };
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::sign_in(&request).await {
                Ok(user) => {
                    session.set_user(Some(user));
                    notify.show_success("Signed in successfully");
                    navigate("/profile", Default::default());
                }
                Err(e) => {
                    notify.show_error(&e);
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="p-3 max-w-lg mx-auto">
            <h1 class="text-3xl font-semibold text-center my-7">"Welcome back"</h1>

            <form on:submit=on_submit class="space-y-4">
                <div>
                    <input
                        type="email"
                        placeholder="Email"
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
                        placeholder="Password"
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
                    {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>

            <div class="flex gap-2 mt-4 ml-1">
                <span>"New to Taskly?"</span>
                <A href="/signup" class="text-blue-500 hover:underline">
                    "Create an account"
                </A>
            </div>
        </div>
    }
}
