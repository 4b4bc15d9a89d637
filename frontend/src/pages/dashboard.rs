//! 用户与组织的仪表盘

use crate::components::icons;
use crate::store::{Api, StoreContext, use_api, use_store};
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;

const RECENT_ITEMS: usize = 5;

/// 拉取收藏与搜索历史并写入全局状态
pub(crate) fn load_user_data(api: Api, store: StoreContext) {
    spawn_local(async move {
        api.user_data().refresh_into(&store).await;
    });
}

#[component]
fn StatCard(#[prop(into)] title: String, value: Signal<usize>, children: Children) -> impl IntoView {
    view! {
        <div class="stat">
            <div class="stat-figure text-primary">{children()}</div>
            <div class="stat-title">{title}</div>
            <div class="stat-value">{move || value.get()}</div>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = use_store();
    load_user_data(use_api(), store);

    let name = move || {
        store.select(|s| {
            s.user
                .as_ref()
                .map(|u| u.display_name().to_string())
                .unwrap_or_default()
        })
    };
    let bookmark_count = Signal::derive(move || store.select(|s| s.user_bookmarks.len()));
    let search_count = Signal::derive(move || store.select(|s| s.search_history.len()));
    let unread = Signal::derive(move || store.select(|s| s.notifications.unread_count as usize));

    let recent_bookmarks = move || {
        store.select(|s| s.user_bookmarks.iter().take(RECENT_ITEMS).cloned().collect::<Vec<_>>())
    };
    let recent_searches = move || {
        store.select(|s| s.search_history.iter().take(RECENT_ITEMS).cloned().collect::<Vec<_>>())
    };

    view! {
        <div class="max-w-6xl mx-auto p-4 md:p-8 flex flex-col gap-8">
            <div>
                <h1 class="text-3xl font-bold">{move || format!("Welcome back, {}!", name())}</h1>
                <p class="text-base-content/70">"Here's what's happening with your saved charities."</p>
            </div>

            <div class="stats stats-vertical md:stats-horizontal shadow">
                <StatCard title="Bookmarks" value=bookmark_count><icons::Bookmark /></StatCard>
                <StatCard title="Searches" value=search_count><icons::Search /></StatCard>
                <StatCard title="Unread Notifications" value=unread><icons::Bell /></StatCard>
            </div>

            <div class="grid md:grid-cols-2 gap-6">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <div class="flex justify-between items-center">
                            <h2 class="card-title">"Recent Bookmarks"</h2>
                            <Link to="/bookmarks" class="link link-primary text-sm">"View all"</Link>
                        </div>
                        {move || {
                            let list = recent_bookmarks();
                            if list.is_empty() {
                                return view! { <p class="text-base-content/60">"You haven't bookmarked any organizations yet."</p> }.into_any();
                            }
                            view! {
                                <ul class="menu">
                                    {list.into_iter().map(|b| {
                                        let label = b.organization.as_ref().map(|o| o.name.clone())
                                            .unwrap_or_else(|| format!("Organization #{}", b.organization_id));
                                        view! {
                                            <li><Link to=format!("/organizations/{}", b.organization_id)>{label}</Link></li>
                                        }
                                    }).collect_view()}
                                </ul>
                            }
                            .into_any()
                        }}
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <div class="flex justify-between items-center">
                            <h2 class="card-title">"Recent Searches"</h2>
                            <Link to="/search-history" class="link link-primary text-sm">"View all"</Link>
                        </div>
                        {move || {
                            let list = recent_searches();
                            if list.is_empty() {
                                return view! { <p class="text-base-content/60">"No searches yet."</p> }.into_any();
                            }
                            view! {
                                <ul class="menu">
                                    {list.into_iter().map(|entry| {
                                        let href = format!("/search?q={}", String::from(js_sys::encode_uri_component(&entry.search_query)));
                                        view! {
                                            <li>
                                                <Link to=href>
                                                    {entry.search_query}
                                                    <span class="badge badge-ghost">{entry.results_count}</span>
                                                </Link>
                                            </li>
                                        }
                                    }).collect_view()}
                                </ul>
                            }
                            .into_any()
                        }}
                    </div>
                </div>
            </div>

            <div class="flex flex-wrap gap-2">
                <Link to="/profile" class="btn btn-outline">"Edit Profile"</Link>
                <Link to="/notification-settings" class="btn btn-outline">"Notification Settings"</Link>
            </div>
        </div>
    }
}

#[component]
pub fn OrganizationDashboardPage() -> impl IntoView {
    let store = use_store();
    let name = move || {
        store.select(|s| {
            s.user
                .as_ref()
                .map(|u| u.display_name().to_string())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="max-w-5xl mx-auto p-4 md:p-8 flex flex-col gap-6">
            <h1 class="text-3xl font-bold">"Organization Dashboard"</h1>
            <p class="text-base-content/70">{move || format!("Signed in as {}", name())}</p>
            <div class="alert alert-info">
                <icons::ShieldCheck />
                <span>
                    "Listing management tools are coming soon. Your application status and contact messages will appear here."
                </span>
            </div>
            <div class="flex flex-wrap gap-2">
                <Link to="/notifications" class="btn btn-outline">"Notifications"</Link>
                <Link to="/notification-settings" class="btn btn-outline">"Notification Settings"</Link>
                <Link to="/profile" class="btn btn-outline">"Profile"</Link>
            </div>
        </div>
    }
}
