//! 账号相关页面：个人资料、搜索历史、收藏

use crate::components::form::{SubmitButton, TextField, field_error};
use crate::components::icons;
use crate::pages::dashboard::load_user_data;
use crate::store::{use_api, use_store};
use crate::web::router::{Link, assign_location};
use charity_directory::AuthHook;
use charity_directory::store::{Action, Dispatch};
use charity_directory::validation::{ChangePasswordForm, FieldErrors, ProfileForm};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let store = use_store();
    let current = store.select_untracked(|s| s.user.clone());

    let role = move || {
        store.select(|s| s.role().map(|r| r.as_str()).unwrap_or_default())
    };

    view! {
        <div class="max-w-3xl mx-auto p-4 md:p-8 flex flex-col gap-6">
            <div>
                <h1 class="text-3xl font-bold">"Profile"</h1>
                <p class="text-base-content/70">
                    "Account type: " <span class="badge badge-outline">{role}</span>
                </p>
            </div>
            <ProfileDetails
                name=current.as_ref().and_then(|u| u.name.clone()).unwrap_or_default()
                email=current.as_ref().map(|u| u.email.clone()).unwrap_or_default()
            />
            <ChangePassword />
            <GoogleAccount />
        </div>
    }
}

#[component]
fn ProfileDetails(name: String, email: String) -> impl IntoView {
    let api = use_api();
    let store = use_store();

    let name = RwSignal::new(name);
    let email = RwSignal::new(email);
    let errors = RwSignal::new(FieldErrors::default());
    let saving = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = ProfileForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
        };
        let update = match form.to_update() {
            Ok(update) => update,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::default());
        saving.set(true);

        let api = api.clone();
        spawn_local(async move {
            let _ = AuthHook::new(&api, &store).update_user_profile(&update).await;
            saving.set(false);
        });
    };

    view! {
        <form class="card bg-base-100 shadow" on:submit=on_submit>
            <div class="card-body">
                <h2 class="card-title">"Personal Information"</h2>
                <TextField label="Name" name="name" value=name error=field_error(errors, "name") />
                <TextField label="Email" name="email" input_type="email" value=email error=field_error(errors, "email") />
                <SubmitButton label="Save Changes" busy_label="Saving..." busy=saving.into() />
            </div>
        </form>
    }
}

#[component]
fn ChangePassword() -> impl IntoView {
    let api = use_api();
    let store = use_store();

    let current = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let saving = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = ChangePasswordForm {
            current_password: current.get_untracked(),
            new_password: new_password.get_untracked(),
            confirm_password: confirm.get_untracked(),
        };
        if let Err(e) = form.validate() {
            errors.set(e);
            return;
        }
        errors.set(FieldErrors::default());
        saving.set(true);

        let api = api.clone();
        spawn_local(async move {
            let result = AuthHook::new(&api, &store)
                .change_password(&form.current_password, &form.new_password)
                .await;
            saving.set(false);
            if result.is_ok() {
                current.set(String::new());
                new_password.set(String::new());
                confirm.set(String::new());
            }
        });
    };

    view! {
        <form class="card bg-base-100 shadow" on:submit=on_submit>
            <div class="card-body">
                <h2 class="card-title">"Change Password"</h2>
                <TextField label="Current Password" name="current_password" input_type="password" value=current error=field_error(errors, "current_password") />
                <TextField label="New Password" name="new_password" input_type="password" value=new_password error=field_error(errors, "new_password") />
                <TextField label="Confirm New Password" name="confirm_password" input_type="password" value=confirm error=field_error(errors, "confirm_password") />
                <SubmitButton label="Update Password" busy_label="Updating..." busy=saving.into() />
            </div>
        </form>
    }
}

/// Google 账号关联与解除
#[component]
fn GoogleAccount() -> impl IntoView {
    let api = use_api();
    let store = use_store();
    let linked = move || store.select(|s| s.user.as_ref().is_some_and(|u| u.google_linked));
    let busy = RwSignal::new(false);

    let on_link = {
        let api = api.clone();
        move |_| {
            let _ = AuthHook::new(&api, &store).link_google_account(assign_location);
        }
    };

    let on_unlink = move |_| {
        let api = api.clone();
        busy.set(true);
        spawn_local(async move {
            if AuthHook::new(&api, &store).unlink_google_account().await.is_ok() {
                match api.auth().current_user().await {
                    Ok(user) => store.dispatch(Action::UpdateUser(Some(user))),
                    Err(err) => tracing::warn!(error = %err, "failed to refresh user after unlink"),
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">"Connected Accounts"</h2>
                <div class="flex items-center justify-between">
                    <span>"Google"</span>
                    <Show
                        when=linked
                        fallback=move || view! {
                            <button class="btn btn-outline btn-sm" on:click=on_link.clone()>"Link Google Account"</button>
                        }
                    >
                        <button class="btn btn-outline btn-error btn-sm" disabled=move || busy.get() on:click=on_unlink.clone()>
                            "Unlink"
                        </button>
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SearchHistoryPage() -> impl IntoView {
    let api = use_api();
    let store = use_store();
    load_user_data(api.clone(), store);

    let history = move || store.select(|s| s.search_history.as_ref().clone());
    let clearing = RwSignal::new(false);

    let on_clear = move |_| {
        let api = api.clone();
        clearing.set(true);
        spawn_local(async move {
            let res = api.user_data().clear_search_history().await;
            if res.success {
                store.dispatch(Action::SetSearchHistory(Vec::new()));
                store.dispatch(Action::SetNotification(Some("Search history cleared".to_string())));
            } else if let Some(message) = res.message {
                store.dispatch(Action::SetError(message));
            }
            clearing.set(false);
        });
    };

    view! {
        <div class="max-w-4xl mx-auto p-4 md:p-8 flex flex-col gap-6">
            <div class="flex justify-between items-center">
                <h1 class="text-3xl font-bold">"Search History"</h1>
                <button
                    class="btn btn-outline btn-error btn-sm"
                    disabled=move || clearing.get() || history().is_empty()
                    on:click=on_clear
                >
                    "Clear History"
                </button>
            </div>
            {move || {
                let list = history();
                if list.is_empty() {
                    return view! { <p class="text-base-content/60">"Your search history is empty."</p> }.into_any();
                }
                view! {
                    <div class="overflow-x-auto">
                        <table class="table">
                            <thead>
                                <tr><th>"Query"</th><th>"Results"</th><th>"Date"</th></tr>
                            </thead>
                            <tbody>
                                {list.into_iter().map(|entry| {
                                    let href = format!(
                                        "/search?q={}",
                                        String::from(js_sys::encode_uri_component(&entry.search_query))
                                    );
                                    let date = entry
                                        .created_at
                                        .map(|d| d.format("%b %e, %Y").to_string())
                                        .unwrap_or_default();
                                    view! {
                                        <tr>
                                            <td><Link to=href class="link link-primary">{entry.search_query}</Link></td>
                                            <td>{entry.results_count}</td>
                                            <td>{date}</td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}

#[component]
pub fn BookmarksPage() -> impl IntoView {
    let api = use_api();
    let store = use_store();
    load_user_data(api.clone(), store);

    let bookmarks = move || store.select(|s| s.user_bookmarks.as_ref().clone());

    let remove = move |bookmark_id: i64| {
        let api = api.clone();
        spawn_local(async move {
            let res = api.user_data().remove_bookmark(bookmark_id).await;
            if res.success {
                let remaining: Vec<_> = store.select_untracked(|s| {
                    s.user_bookmarks
                        .iter()
                        .filter(|b| b.id != bookmark_id)
                        .cloned()
                        .collect()
                });
                store.dispatch(Action::SetBookmarks(remaining));
                store.dispatch(Action::SetNotification(Some("Bookmark removed".to_string())));
            } else if let Some(message) = res.message {
                store.dispatch(Action::SetError(message));
            }
        });
    };

    view! {
        <div class="max-w-4xl mx-auto p-4 md:p-8 flex flex-col gap-6">
            <h1 class="text-3xl font-bold">"Bookmarks"</h1>
            {move || {
                let list = bookmarks();
                if list.is_empty() {
                    return view! {
                        <div class="text-center py-12 flex flex-col items-center gap-4">
                            <icons::Bookmark />
                            <p class="text-base-content/60">"You haven't bookmarked any organizations yet."</p>
                            <Link to="/organizations" class="btn btn-primary">"Browse organizations"</Link>
                        </div>
                    }
                    .into_any();
                }
                let remove = remove.clone();
                view! {
                    <ul class="flex flex-col gap-3">
                        {list.into_iter().map(|bookmark| {
                            let remove = remove.clone();
                            let id = bookmark.id;
                            let (name, category) = bookmark
                                .organization
                                .map(|o| (o.name, o.category))
                                .unwrap_or_else(|| (format!("Organization #{}", bookmark.organization_id), None));
                            view! {
                                <li class="card bg-base-100 shadow">
                                    <div class="card-body flex-row items-center justify-between">
                                        <div>
                                            <Link to=format!("/organizations/{}", bookmark.organization_id) class="card-title link-hover">
                                                {name}
                                            </Link>
                                            {category.map(|c| view! { <span class="badge badge-outline">{c}</span> })}
                                        </div>
                                        <button class="btn btn-ghost btn-sm text-error" on:click=move |_| remove(id)>
                                            "Remove"
                                        </button>
                                    </div>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                }
                .into_any()
            }}
        </div>
    }
}
