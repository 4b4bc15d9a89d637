//! 通知列表与通知偏好设置

use crate::components::icons;
use crate::store::{Api, StoreContext, use_api, use_store};
use charity_directory::notifications::{PreferencesForm, refresh_unread_count};
use charity_directory::services::notification::DEFAULT_PER_PAGE;
use charity_directory::store::{Action, Dispatch};
use charity_shared::{Channel, DigestFrequency, Notification, NotificationFrequency, PreferenceKind};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn parse_frequency(value: &str) -> Option<NotificationFrequency> {
    match value {
        "immediate" => Some(NotificationFrequency::Immediate),
        "hourly" => Some(NotificationFrequency::Hourly),
        "daily" => Some(NotificationFrequency::Daily),
        "weekly" => Some(NotificationFrequency::Weekly),
        _ => None,
    }
}

fn parse_digest(value: &str) -> Option<DigestFrequency> {
    match value {
        "daily" => Some(DigestFrequency::Daily),
        "weekly" => Some(DigestFrequency::Weekly),
        "monthly" => Some(DigestFrequency::Monthly),
        _ => None,
    }
}

fn frequency_value(frequency: NotificationFrequency) -> &'static str {
    match frequency {
        NotificationFrequency::Immediate => "immediate",
        NotificationFrequency::Hourly => "hourly",
        NotificationFrequency::Daily => "daily",
        NotificationFrequency::Weekly => "weekly",
    }
}

fn digest_value(digest: DigestFrequency) -> &'static str {
    match digest {
        DigestFrequency::Daily => "daily",
        DigestFrequency::Weekly => "weekly",
        DigestFrequency::Monthly => "monthly",
    }
}

// =========================================================
// 偏好设置 (Preferences)
// =========================================================

#[component]
pub fn NotificationSettingsPage() -> impl IntoView {
    let api = use_api();
    let store = use_store();
    let form = RwSignal::new(PreferencesForm::default());
    let loading = RwSignal::new(true);

    {
        let api = api.clone();
        spawn_local(async move {
            form.set(PreferencesForm::load(&api).await);
            loading.set(false);
        });
    }

    let on_save = {
        let api = api.clone();
        move |_| {
            form.update(|f| f.saving = true);
            let mut draft = form.get_untracked();
            let api = api.clone();
            spawn_local(async move {
                draft.save(&api, &store).await;
                form.set(draft);
            });
        }
    };

    let on_reset = move |_| {
        let api = api.clone();
        spawn_local(async move {
            let res = api.notifications().reset_preferences().await;
            if res.success {
                let mut next = PreferencesForm::new(res.data);
                next.success = Some("Preferences reset to defaults".to_string());
                form.set(next);
            } else {
                form.update(|f| f.error = res.message);
            }
        });
    };

    view! {
        <div class="max-w-4xl mx-auto p-4 md:p-8 flex flex-col gap-6">
            <h1 class="text-3xl font-bold">"Notification Settings"</h1>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <span class="loading loading-spinner loading-lg text-primary"></span> }
            >
                {move || form.with(|f| f.error.clone()).map(|m| view! {
                    <div class="alert alert-error">{m}</div>
                })}
                {move || form.with(|f| f.success.clone()).map(|m| view! {
                    <div class="alert alert-success">{m}</div>
                })}

                <PreferenceGroup form=form channel=Channel::Email title="Email Notifications" />
                <PreferenceGroup form=form channel=Channel::InApp title="In-App Notifications" />

                <div class="card bg-base-100 shadow">
                    <div class="card-body grid md:grid-cols-2 gap-4">
                        <label class="form-control">
                            <div class="label"><span class="label-text">"Notification Frequency"</span></div>
                            <select
                                class="select select-bordered"
                                prop:value=move || form.with(|f| frequency_value(f.preferences.notification_frequency))
                                on:change=move |ev| {
                                    if let Some(freq) = parse_frequency(&event_target_value(&ev)) {
                                        form.update(|f| f.set_frequency(freq));
                                    }
                                }
                            >
                                <option value="immediate">"Immediate"</option>
                                <option value="hourly">"Hourly"</option>
                                <option value="daily">"Daily"</option>
                                <option value="weekly">"Weekly"</option>
                            </select>
                        </label>
                        <label class="form-control">
                            <div class="label"><span class="label-text">"Email Digest"</span></div>
                            <select
                                class="select select-bordered"
                                prop:value=move || form.with(|f| digest_value(f.preferences.email_digest_frequency))
                                on:change=move |ev| {
                                    if let Some(digest) = parse_digest(&event_target_value(&ev)) {
                                        form.update(|f| f.set_digest(digest));
                                    }
                                }
                            >
                                <option value="daily">"Daily"</option>
                                <option value="weekly">"Weekly"</option>
                                <option value="monthly">"Monthly"</option>
                            </select>
                        </label>
                    </div>
                </div>

                <div class="flex gap-2 justify-end">
                    <button class="btn btn-ghost" on:click=on_reset.clone()>"Reset to Defaults"</button>
                    <button
                        class="btn btn-primary"
                        disabled=move || form.with(|f| f.saving)
                        on:click=on_save.clone()
                    >
                        {move || if form.with(|f| f.saving) { "Saving..." } else { "Save Preferences" }}
                    </button>
                </div>
            </Show>
        </div>
    }
}

/// 一个渠道的全部开关，附 "Enable All" / "Disable All"
#[component]
fn PreferenceGroup(
    form: RwSignal<PreferencesForm>,
    channel: Channel,
    title: &'static str,
) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex justify-between items-center">
                    <h2 class="card-title">{title}</h2>
                    <div class="flex gap-2">
                        <button class="btn btn-xs btn-outline" on:click=move |_| form.update(|f| f.set_group(channel, true))>
                            "Enable All"
                        </button>
                        <button class="btn btn-xs btn-outline" on:click=move |_| form.update(|f| f.set_group(channel, false))>
                            "Disable All"
                        </button>
                    </div>
                </div>
                {PreferenceKind::ALL.into_iter().map(|kind| view! {
                    <label class="label cursor-pointer items-start gap-4">
                        <div class="flex flex-col">
                            <span class="label-text font-medium">{kind.label()}</span>
                            <span class="text-xs text-base-content/60">{kind.description(channel)}</span>
                        </div>
                        <input
                            type="checkbox"
                            class="toggle toggle-primary"
                            prop:checked=move || form.with(|f| f.preferences.get(channel, kind))
                            on:change=move |ev| {
                                let enabled = event_target_checked(&ev);
                                form.update(|f| f.toggle(channel, kind, enabled));
                            }
                        />
                    </label>
                }).collect_view()}
            </div>
        </div>
    }
}

// =========================================================
// 通知列表 (Notification list)
// =========================================================

fn load_notifications(api: Api, store: StoreContext, loading: RwSignal<bool>) {
    spawn_local(async move {
        let res = api.notifications().list(1, DEFAULT_PER_PAGE).await;
        store.dispatch(Action::SetNotifications(res.data.notifications));
        loading.set(false);
    });
}

fn update_list(store: &StoreContext, f: impl FnOnce(&mut Vec<Notification>)) {
    let mut list = store.select_untracked(|s| s.notifications.list.as_ref().clone());
    f(&mut list);
    store.dispatch(Action::SetNotifications(list));
}

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let api = use_api();
    let store = use_store();
    let loading = RwSignal::new(true);
    load_notifications(api.clone(), store, loading);

    let notifications = move || store.select(|s| s.notifications.list.as_ref().clone());
    let has_unread = move || store.select(|s| s.notifications.list.iter().any(|n| !n.is_read));

    let mark_read = {
        let api = api.clone();
        move |id: i64| {
            let api = api.clone();
            spawn_local(async move {
                if api.notifications().mark_read(id).await.success {
                    update_list(&store, |list| {
                        if let Some(n) = list.iter_mut().find(|n| n.id == id) {
                            n.is_read = true;
                        }
                    });
                    refresh_unread_count(&api, &store).await;
                }
            });
        }
    };

    let delete = {
        let api = api.clone();
        move |id: i64| {
            let api = api.clone();
            spawn_local(async move {
                let res = api.notifications().delete(id).await;
                if res.success {
                    update_list(&store, |list| list.retain(|n| n.id != id));
                    refresh_unread_count(&api, &store).await;
                } else if let Some(message) = res.message {
                    store.dispatch(Action::SetError(message));
                }
            });
        }
    };

    let mark_all = move |_| {
        let api = api.clone();
        spawn_local(async move {
            let res = api.notifications().mark_all_read().await;
            if res.success {
                update_list(&store, |list| list.iter_mut().for_each(|n| n.is_read = true));
                store.dispatch(Action::SetUnreadCount(0));
                if let Some(message) = res.data {
                    store.dispatch(Action::SetNotification(Some(message)));
                }
            }
        });
    };

    view! {
        <div class="max-w-4xl mx-auto p-4 md:p-8 flex flex-col gap-6">
            <div class="flex justify-between items-center">
                <h1 class="text-3xl font-bold">"Notifications"</h1>
                <button class="btn btn-outline btn-sm" disabled=move || !has_unread() on:click=mark_all>
                    "Mark all as read"
                </button>
            </div>
            {move || {
                if loading.get() {
                    return view! { <span class="loading loading-spinner loading-lg text-primary"></span> }.into_any();
                }
                let list = notifications();
                if list.is_empty() {
                    return view! {
                        <div class="text-center py-12 flex flex-col items-center gap-2 text-base-content/60">
                            <icons::Bell />
                            <p>"You're all caught up."</p>
                        </div>
                    }
                    .into_any();
                }
                let mark_read = mark_read.clone();
                let delete = delete.clone();
                view! {
                    <ul class="flex flex-col gap-3">
                        {list.into_iter().map(|n| {
                            let mark_read = mark_read.clone();
                            let delete = delete.clone();
                            let id = n.id;
                            let unread = !n.is_read;
                            let when = n
                                .created_at
                                .map(|d| d.format("%b %e, %Y %H:%M").to_string())
                                .unwrap_or_default();
                            view! {
                                <li class=if unread { "card bg-base-100 shadow border-l-4 border-primary" } else { "card bg-base-100 shadow" }>
                                    <div class="card-body py-4">
                                        <div class="flex justify-between gap-4">
                                            <div>
                                                <h3 class="font-semibold">{n.title}</h3>
                                                <p class="text-sm">{n.message}</p>
                                                <p class="text-xs text-base-content/50 mt-1">{when}</p>
                                            </div>
                                            <div class="flex gap-1 items-start">
                                                {unread.then(|| view! {
                                                    <button class="btn btn-ghost btn-xs" on:click=move |_| mark_read(id)>"Mark read"</button>
                                                })}
                                                <button class="btn btn-ghost btn-xs text-error" on:click=move |_| delete(id)>"Delete"</button>
                                            </div>
                                        </div>
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
