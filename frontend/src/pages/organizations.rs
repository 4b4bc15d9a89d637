//! 组织列表与详情页

use crate::components::form::{SubmitButton, TextArea, TextField, field_error};
use crate::components::icons;
use crate::components::organization_card::OrganizationCard;
use crate::store::{Api, StoreContext, use_api, use_store};
use crate::web::LocationListener;
use crate::web::router::Link;
use charity_directory::LatestOnly;
use charity_directory::services::OrganizationQuery;
use charity_directory::services::category::with_all_option;
use charity_directory::store::{Action, Dispatch};
use charity_directory::validation::{ContactForm, FieldErrors};
use charity_shared::{Category, LocationFilter, Organization, Photo};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

const ORGANIZATIONS_PER_PAGE: u32 = 24;

/// 按分类与位置筛选拉取组织列表，结果写入全局状态
async fn fetch_organizations(
    api: &Api,
    store: &StoreContext,
    latest: &LatestOnly,
    category_id: i64,
    location: Option<&LocationFilter>,
) {
    let query = OrganizationQuery {
        per_page: Some(ORGANIZATIONS_PER_PAGE),
        category_id: (category_id != Category::ALL_ID).then_some(category_id),
        ..Default::default()
    }
    .with_location(location);
    api.organizations().load_into(&query, latest, store).await;
}

/// 分类筛选按钮组（首位为 "All"）
#[component]
pub fn CategoryFilter(selected: RwSignal<i64>) -> impl IntoView {
    let store = use_store();
    let options = move || store.select(|s| with_all_option(&s.categories));

    view! {
        <div class="flex flex-wrap gap-2">
            {move || options().into_iter().map(|category| {
                let id = category.id;
                let class = move || if selected.get() == id {
                    "btn btn-sm btn-primary"
                } else {
                    "btn btn-sm btn-outline"
                };
                view! {
                    <button class=class on:click=move |_| selected.set(id)>
                        {category.name}
                        <span class="badge badge-ghost badge-sm">{category.organization_count}</span>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// 组织网格：分类变化或收到 `locationChanged` 时重新拉取
#[component]
pub fn OrganizationGrid(category: RwSignal<i64>) -> impl IntoView {
    let api = use_api();
    let store = use_store();
    let latest = StoredValue::new_local(LatestOnly::new());

    let reload = move |location: Option<LocationFilter>| {
        let api = api.clone();
        let category_id = category.get_untracked();
        let latest = latest.get_value();
        spawn_local(async move {
            fetch_organizations(&api, &store, &latest, category_id, location.as_ref()).await;
        });
    };

    let refetch = reload.clone();
    Effect::new(move |_| {
        category.track();
        refetch(store.select_untracked(|s| s.selected_location.as_deref().cloned()));
    });

    let listener = StoredValue::new_local(LocationListener::new(reload));
    on_cleanup(move || listener.set_value(None));

    let loading = move || store.select(|s| s.loading);
    let organizations = move || store.select(|s| s.organizations.as_ref().clone());

    view! {
        <Show
            when=move || !loading()
            fallback=|| view! {
                <div class="flex justify-center py-12">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            }
        >
            {move || {
                let list = organizations();
                if list.is_empty() {
                    view! {
                        <div class="text-center py-12 text-base-content/60">
                            "No organizations found. Try a different category or location."
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                            {list.into_iter().map(|organization| view! {
                                <OrganizationCard organization=organization />
                            }).collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </Show>
    }
}

#[component]
pub fn OrganizationsPage() -> impl IntoView {
    let category = RwSignal::new(Category::ALL_ID);

    view! {
        <div class="max-w-7xl mx-auto p-4 md:p-8 flex flex-col gap-6">
            <div>
                <h1 class="text-3xl font-bold">"Organizations"</h1>
                <p class="text-base-content/70">"Browse verified charities near you."</p>
            </div>
            <CategoryFilter selected=category />
            <OrganizationGrid category=category />
        </div>
    }
}

// =========================================================
// 详情页 (Organization detail)
// =========================================================

#[component]
pub fn OrganizationDetailPage(id: i64) -> impl IntoView {
    let api = use_api();

    let organization = RwSignal::new(None::<Organization>);
    let photos = RwSignal::new(Vec::<Photo>::new());
    let loading = RwSignal::new(true);
    let load_error = RwSignal::new(None::<String>);

    spawn_local(async move {
        let res = api.organizations().get(id).await;
        if !res.success {
            load_error.set(res.message);
        }
        organization.set(res.data);
        loading.set(false);

        let res = api.organizations().photos(id).await;
        photos.set(res.data);
    });

    view! {
        <div class="max-w-5xl mx-auto p-4 md:p-8">
            {move || {
                if loading.get() {
                    return view! {
                        <div class="flex justify-center py-12">
                            <span class="loading loading-spinner loading-lg text-primary"></span>
                        </div>
                    }
                    .into_any();
                }
                match organization.get() {
                    Some(org) => view! { <OrganizationProfile organization=org photos=photos /> }.into_any(),
                    None => view! {
                        <div class="text-center py-12 flex flex-col gap-4 items-center">
                            <h1 class="text-2xl font-bold">"Organization not found"</h1>
                            <p class="text-base-content/70">
                                {load_error.get().unwrap_or_else(|| "This organization may have been removed.".to_string())}
                            </p>
                            <Link to="/organizations" class="btn btn-primary">"Browse organizations"</Link>
                        </div>
                    }
                    .into_any(),
                }
            }}
        </div>
    }
}

#[component]
fn OrganizationProfile(organization: Organization, photos: RwSignal<Vec<Photo>>) -> impl IntoView {
    let location = organization
        .location
        .as_ref()
        .map(|l| l.short_label())
        .filter(|l| !l.is_empty());

    view! {
        <div class="flex flex-col gap-8">
            <div class="flex flex-col md:flex-row gap-6 items-start">
                {organization.logo_url.clone().map(|src| view! {
                    <img src=src alt="logo" class="w-24 h-24 rounded-xl object-cover" />
                })}
                <div class="flex-1 flex flex-col gap-2">
                    <h1 class="text-3xl font-bold flex items-center gap-2">
                        {organization.name.clone()}
                        {organization.is_verified.then(|| view! {
                            <span class="badge badge-success">"Verified"</span>
                        })}
                    </h1>
                    <div class="flex flex-wrap gap-2 text-sm text-base-content/70">
                        {organization.category.clone().map(|c| view! { <span class="badge badge-outline">{c}</span> })}
                        {location.map(|l| view! { <span class="flex items-center gap-1"><icons::MapPin />{l}</span> })}
                    </div>
                    {organization.website.clone().map(|href| {
                        let label = href.clone();
                        view! {
                            <a href=href target="_blank" rel="noopener" class="link link-primary">{label}</a>
                        }
                    })}
                </div>
                <BookmarkButton organization_id=organization.id />
            </div>

            {organization.mission.clone().map(|m| view! {
                <section>
                    <h2 class="text-xl font-semibold mb-2">"Mission"</h2>
                    <p>{m}</p>
                </section>
            })}
            {organization.description.clone().map(|d| view! {
                <section>
                    <h2 class="text-xl font-semibold mb-2">"About"</h2>
                    <p class="whitespace-pre-line">{d}</p>
                </section>
            })}

            <div class="stats shadow">
                <div class="stat">
                    <div class="stat-title">"Views"</div>
                    <div class="stat-value text-2xl">{organization.view_count}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Bookmarks"</div>
                    <div class="stat-value text-2xl">{organization.bookmark_count}</div>
                </div>
            </div>

            {move || {
                let list = photos.get();
                (!list.is_empty()).then(|| view! {
                    <section>
                        <h2 class="text-xl font-semibold mb-2">"Photos"</h2>
                        <div class="grid grid-cols-2 md:grid-cols-3 gap-4">
                            {list.into_iter().map(|p| {
                                let alt = p.caption.clone().unwrap_or_default();
                                let caption = p.caption.map(|c| view! { <figcaption class="text-xs mt-1">{c}</figcaption> });
                                view! {
                                    <figure>
                                        <img src=p.url alt=alt class="rounded-lg object-cover w-full h-40" />
                                        {caption}
                                    </figure>
                                }
                            }).collect_view()}
                        </div>
                    </section>
                })
            }}

            <ContactOrganization organization_id=organization.id />
        </div>
    }
}

/// 收藏按钮：未登录时引导登录
#[component]
fn BookmarkButton(organization_id: i64) -> impl IntoView {
    let api = use_api();
    let store = use_store();

    let signed_in = store.signed_in();
    let bookmark_id = move || {
        store.select(|s| {
            s.user_bookmarks
                .iter()
                .find(|b| b.organization_id == organization_id)
                .map(|b| b.id)
        })
    };

    // 已登录时加载一次收藏列表，用于判断当前状态
    {
        let api = api.clone();
        Effect::new(move |_| {
            if !signed_in.get() {
                return;
            }
            let api = api.clone();
            spawn_local(async move {
                let res = api.user_data().bookmarks().await;
                if res.success {
                    store.dispatch(Action::SetBookmarks(res.data));
                }
            });
        });
    }

    let busy = RwSignal::new(false);
    let on_click = move |_| {
        let api = api.clone();
        let existing = bookmark_id();
        busy.set(true);
        spawn_local(async move {
            let res = match existing {
                Some(id) => api.user_data().remove_bookmark(id).await.map(|_| ()),
                None => api.user_data().add_bookmark(organization_id).await.map(|_| ()),
            };
            if res.success {
                let list = api.user_data().bookmarks().await;
                store.dispatch(Action::SetBookmarks(list.data));
                let message = if existing.is_some() { "Bookmark removed" } else { "Organization bookmarked!" };
                store.dispatch(Action::SetNotification(Some(message.to_string())));
            } else if let Some(message) = res.message {
                store.dispatch(Action::SetError(message));
            }
            busy.set(false);
        });
    };

    view! {
        <Show
            when=move || signed_in.get()
            fallback=|| view! {
                <Link to="/login" class="btn btn-outline gap-2"><icons::Bookmark />"Sign in to bookmark"</Link>
            }
        >
            <button
                class=move || if bookmark_id().is_some() { "btn btn-primary gap-2" } else { "btn btn-outline gap-2" }
                disabled=move || busy.get()
                on:click=on_click.clone()
            >
                <icons::Bookmark />
                {move || if bookmark_id().is_some() { "Bookmarked" } else { "Bookmark" }}
            </button>
        </Show>
    }
}

#[component]
fn ContactOrganization(organization_id: i64) -> impl IntoView {
    let api = use_api();
    let store = use_store();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let sending = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = ContactForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            subject: subject.get_untracked(),
            message: message.get_untracked(),
        };
        let body = match form.to_message() {
            Ok(body) => body,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::default());
        sending.set(true);

        let api = api.clone();
        spawn_local(async move {
            let res = api.organizations().contact(organization_id, &body).await;
            sending.set(false);
            if res.success {
                let text = res
                    .data
                    .unwrap_or_else(|| "Your message has been sent!".to_string());
                store.dispatch(Action::SetNotification(Some(text)));
                subject.set(String::new());
                message.set(String::new());
            } else {
                store.dispatch(Action::SetError(
                    res.message.unwrap_or_else(|| "Failed to send message".to_string()),
                ));
            }
        });
    };

    view! {
        <section class="card bg-base-100 shadow-xl">
            <form class="card-body" on:submit=on_submit>
                <h2 class="card-title">"Contact this organization"</h2>
                <div class="grid md:grid-cols-2 gap-2">
                    <TextField label="Your Name" name="name" value=name error=field_error(errors, "name") />
                    <TextField label="Your Email" name="email" input_type="email" value=email error=field_error(errors, "email") />
                </div>
                <TextField label="Subject" name="subject" value=subject error=field_error(errors, "subject") />
                <TextArea label="Message" name="message" value=message error=field_error(errors, "message") />
                <SubmitButton label="Send Message" busy_label="Sending..." busy=sending.into() />
            </form>
        </section>
    }
}
