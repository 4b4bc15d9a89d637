//! 导航栏搜索框：输入防抖后拉取建议，只展示最新一次请求的结果

use crate::components::icons;
use crate::store::use_api;
use crate::web::TimeoutSleeper;
use crate::web::router::use_navigate;
use charity_directory::{Debouncer, LatestOnly};
use charity_shared::Organization;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn SearchBar() -> impl IntoView {
    let api = use_api();
    let navigate = use_navigate();

    let query = RwSignal::new(String::new());
    let suggestions = RwSignal::new(Vec::<Organization>::new());
    let loading = RwSignal::new(false);

    let limit = api.config().suggestion_limit;
    let debouncer = StoredValue::new_local(Debouncer::new(TimeoutSleeper, api.config().search_debounce));
    let latest = StoredValue::new_local(LatestOnly::new());

    let on_input = move |ev| {
        let q = event_target_value(&ev);
        query.set(q.clone());

        let debouncer = debouncer.get_value();
        let latest = latest.get_value();
        let api = api.clone();
        spawn_local(async move {
            if !debouncer.settle().await {
                return;
            }
            if q.trim().is_empty() {
                latest.cancel();
                loading.set(false);
                suggestions.set(Vec::new());
                return;
            }
            loading.set(true);
            let organizations = api.organizations();
            if let Some(res) = latest.run(organizations.search(&q, limit)).await {
                suggestions.set(res.data);
                loading.set(false);
            }
        });
    };

    on_cleanup(move || debouncer.with_value(|d| d.cancel()));

    let select = {
        let navigate = navigate.clone();
        move |org: &Organization| {
            latest.with_value(|l| l.cancel());
            loading.set(false);
            query.set(String::new());
            suggestions.set(Vec::new());
            navigate(&format!("/organizations/{}", org.slug()));
        }
    };

    view! {
        <div class="relative">
            <div class="join">
                <input
                    type="text"
                    class="input input-bordered input-sm join-item w-48 md:w-64"
                    placeholder="Search Orgs..."
                    prop:value=query
                    on:input=on_input
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Escape" {
                            suggestions.set(Vec::new());
                        }
                    }
                />
                <button
                    class="btn btn-sm btn-primary join-item"
                    title="Advanced Filters"
                    on:click=move |_| navigate("/search")
                >
                    <icons::Search />
                </button>
            </div>
            <Show when=move || loading.get()>
                <span class="loading loading-spinner loading-xs absolute right-14 top-2"></span>
            </Show>
            <Show when=move || suggestions.with(|s| !s.is_empty())>
                <ul class="menu bg-base-100 rounded-box shadow-lg absolute w-full z-50 mt-1">
                    <For
                        each=move || suggestions.get()
                        key=|org| org.id
                        children={
                            let select = select.clone();
                            move |org| {
                                let select = select.clone();
                                let name = org.name.clone();
                                view! {
                                    <li>
                                        <a on:click=move |_| select(&org)>{name}</a>
                                    </li>
                                }
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
