//! Navigation Bar
//!
//! Brand link plus the account menu: avatar dropdown when signed in,
//! a sign-in link otherwise.

use leptos::*;
use leptos_router::{use_navigate, A};

use crate::api;
use crate::state::{Notifier, Session};

/// Header navigation component
#[component]
pub fn NavBar(session: Session, notify: Notifier) -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);
    let navigate = use_navigate();

    let handle_sign_out = move || {
        set_menu_open.set(false);
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
        <nav class="bg-red-50 border-b border-red-100">
            <div class="max-w-7xl mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Brand
                    <A href="/" class="text-lg font-bold text-gray-900">
                        "Taskly"
                    </A>

                    // Account area
                    <div class="relative">
                        {move || {
                            match session.current() {
                                Some(user) => {
                                    let sign_out = handle_sign_out.clone();
                                    view! {
                                        <div>
                                            <button on:click=move |_| set_menu_open.update(|open| *open = !*open)>
                                                <img
                                                    class="w-10 h-10 rounded-full object-cover"
                                                    src=user.avatar.clone()
                                                    alt=user.username.clone()
                                                />
                                            </button>

                                            {move || {
                                                let sign_out = sign_out.clone();
                                                menu_open.get().then(move || view! {
                                                    <AccountMenu
                                                        on_close=move || set_menu_open.set(false)
                                                        on_sign_out=sign_out
                                                    />
                                                })
                                            }}
                                        </div>
                                    }.into_view()
                                }
                                None => view! {
                                    <A href="/signin" class="text-gray-700 hover:text-gray-900">
                                        "Sign in"
                                    </A>
                                }.into_view(),
                            }
                        }}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Dropdown shown under the avatar.
#[component]
fn AccountMenu(
    on_close: impl Fn() + Clone + 'static,
    on_sign_out: impl Fn() + Clone + 'static,
) -> impl IntoView {
    let navigate = use_navigate();

    let go = {
        let on_close = on_close.clone();
        move |path: &str| {
            on_close();
            navigate(path, Default::default());
        }
    };
    let go_profile = {
        let go = go.clone();
        move |_| go("/profile")
    };
    let go_tasks = move |_| go("/tasks");

    view! {
        <div class="absolute right-0 mt-2 w-40 bg-white border border-gray-200 rounded-lg shadow-lg py-1 z-10">
            <button
                on:click=go_profile
                class="block w-full text-left px-4 py-2 text-sm hover:bg-gray-100"
            >
                "Profile"
            </button>
            <button
                on:click=go_tasks
                class="block w-full text-left px-4 py-2 text-sm hover:bg-gray-100"
            >
                "Tasks"
            </button>
            <button
                on:click=move |_| on_sign_out()
                class="block w-full text-left px-4 py-2 text-sm hover:bg-gray-100"
            >
                "Sign out"
            </button>
        </div>
    }
}
