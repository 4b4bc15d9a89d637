//! 顶部导航栏与页脚

use crate::components::icons;
use crate::components::location_selector::LocationSelector;
use crate::components::notification_indicator::NotificationIndicator;
use crate::components::search_bar::SearchBar;
use crate::store::{use_api, use_store};
use crate::web::router::{Link, use_navigate};
use charity_directory::AuthHook;
use charity_directory::guard::dashboard_for;
use charity_directory::store::{Action, Dispatch, ModalKey};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn Navbar() -> impl IntoView {
    let api = use_api();
    let store = use_store();
    let navigate = use_navigate();

    let signed_in = store.signed_in();
    let display_name = move || {
        store.select(|s| {
            s.user
                .as_ref()
                .map(|u| u.display_name().to_string())
                .unwrap_or_default()
        })
    };
    let role = store.role();
    let dashboard = move || dashboard_for(role.get());

    let on_logout = move |_| {
        let api = api.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            AuthHook::new(&api, &store).logout().await;
            navigate("/");
        });
    };

    view! {
        <nav class="navbar bg-base-100 shadow-sm px-4 gap-2 flex-wrap">
            <div class="flex-1 gap-4 flex-wrap">
                <Link to="/" class="btn btn-ghost text-xl gap-2">
                    <span class="text-error"><icons::Heart /></span>
                    "Unseen"
                </Link>
                <Link to="/categories" class="btn btn-ghost btn-sm">"Categories"</Link>
                <Link to="/about-us" class="btn btn-ghost btn-sm">"About Us"</Link>
                <SearchBar />
                <LocationSelector />
            </div>
            <div class="flex-none gap-2">
                <Show
                    when=move || signed_in.get()
                    fallback=move || view! {
                        <Link to="/login" class="btn btn-ghost btn-sm">"Login"</Link>
                        <Link to="/signup" class="btn btn-ghost btn-sm">"Sign Up"</Link>
                    }
                >
                    <NotificationIndicator />
                    <Link to="/bookmarks" class="btn btn-ghost btn-circle">
                        <icons::Bookmark />
                    </Link>
                    {move || view! {
                        <Link to=dashboard() class="btn btn-ghost btn-sm">{display_name()}</Link>
                    }}
                </Show>
                <Show when=move || signed_in.get()>
                    <button class="btn btn-outline btn-error btn-sm gap-1" on:click=on_logout.clone()>
                        <icons::LogOut /> "Logout"
                    </button>
                </Show>
                <button
                    class="btn btn-success btn-sm"
                    on:click=move |_| store.dispatch(Action::ToggleModal(ModalKey::ListCharity))
                >
                    "List Your Charity"
                </button>
            </div>
        </nav>
        <ListCharityModal />
    }
}

/// "List Your Charity" 引导弹窗
#[component]
fn ListCharityModal() -> impl IntoView {
    let store = use_store();
    let open = move || store.select(|s| s.modals.is_open(ModalKey::ListCharity));
    let close = move || store.dispatch(Action::ToggleModal(ModalKey::ListCharity));

    view! {
        <Show when=open>
            <div class="modal modal-open" role="dialog">
                <div class="modal-box">
                    <h3 class="font-bold text-lg">"List your charity"</h3>
                    <p class="py-4">
                        "Register your organization to reach donors and volunteers. "
                        "Applications are reviewed before they appear in the directory."
                    </p>
                    <div class="modal-action">
                        <span on:click=move |_| close()>
                            <Link to="/list-your-charity" class="btn btn-ghost">"Learn more"</Link>
                        </span>
                        <span on:click=move |_| close()>
                            <Link to="/organization-signup" class="btn btn-primary">"Register"</Link>
                        </span>
                        <button class="btn" on:click=move |_| close()>"Close"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer footer-center p-6 bg-base-300 text-base-content mt-12">
            <nav class="grid grid-flow-col gap-4">
                <Link to="/about-us" class="link link-hover">"About"</Link>
                <Link to="/contact" class="link link-hover">"Contact"</Link>
                <Link to="/advertise" class="link link-hover">"Advertise"</Link>
                <Link to="/help-center" class="link link-hover">"Help Center"</Link>
                <Link to="/privacy-policy" class="link link-hover">"Privacy"</Link>
                <Link to="/terms-of-service" class="link link-hover">"Terms"</Link>
                <Link to="/cookie-policy" class="link link-hover">"Cookies"</Link>
            </nav>
            <p>"Unseen: connecting people with the causes that need them."</p>
        </footer>
    }
}
