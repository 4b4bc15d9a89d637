//! 高级搜索页：关键词来自 `?q=`，可按分类与地点细化

use crate::components::icons;
use crate::components::organization_card::OrganizationCard;
use crate::store::{use_api, use_store};
use crate::web::router::use_router;
use charity_directory::LatestOnly;
use charity_directory::services::category::with_all_option;
use charity_shared::Organization;
use charity_shared::protocol::AdvancedSearchFilters;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

const SEARCH_PAGE_SIZE: u32 = 20;

#[component]
pub fn SearchPage() -> impl IntoView {
    let api = use_api();
    let store = use_store();
    let router = use_router();

    let query = RwSignal::new(String::new());
    let category = RwSignal::new("All".to_string());
    let location = RwSignal::new(String::new());
    let results = RwSignal::new(Vec::<Organization>::new());
    let total = RwSignal::new(0u64);
    let searching = RwSignal::new(false);
    let latest = StoredValue::new_local(LatestOnly::new());

    let run_search = move || {
        let filters = AdvancedSearchFilters {
            query: Some(query.get_untracked()),
            category: Some(category.get_untracked()),
            location: Some(location.get_untracked()),
            page: Some(1),
            per_page: Some(SEARCH_PAGE_SIZE),
        };
        let api = api.clone();
        let guard = latest.get_value();
        searching.set(true);
        spawn_local(async move {
            let Some(res) = guard.run(api.organizations().advanced_search(&filters)).await else {
                return;
            };
            total.set(
                res.data
                    .pagination
                    .as_ref()
                    .map(|p| p.total)
                    .unwrap_or(res.data.results.len() as u64),
            );
            results.set(res.data.results);
            searching.set(false);
        });
    };

    // 地址栏的 `?q=` 变化（导航栏搜索）时同步关键词并重新搜索
    {
        let run_search = run_search.clone();
        Effect::new(move |_| {
            let q = router.location().with(|l| l.query("q")).unwrap_or_default();
            query.set(q);
            run_search();
        });
    }

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        run_search();
    };

    let categories = move || store.select(|s| with_all_option(&s.categories));

    view! {
        <div class="max-w-7xl mx-auto p-4 md:p-8 flex flex-col gap-6">
            <h1 class="text-3xl font-bold">"Search Organizations"</h1>
            <form on:submit=on_submit class="flex flex-col md:flex-row gap-2">
                <label class="input input-bordered flex items-center gap-2 flex-1">
                    <icons::Search />
                    <input
                        type="search"
                        class="grow"
                        placeholder="Keywords"
                        prop:value=query
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                </label>
                <select
                    class="select select-bordered"
                    prop:value=category
                    on:change=move |ev| category.set(event_target_value(&ev))
                >
                    {move || categories().into_iter().map(|c| {
                        let value = c.name.clone();
                        view! { <option value=value>{c.name}</option> }
                    }).collect_view()}
                </select>
                <input
                    type="text"
                    class="input input-bordered"
                    placeholder="City or state"
                    prop:value=location
                    on:input=move |ev| location.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-primary">"Search"</button>
            </form>

            {move || {
                if searching.get() {
                    return view! {
                        <div class="flex justify-center py-12">
                            <span class="loading loading-spinner loading-lg text-primary"></span>
                        </div>
                    }
                    .into_any();
                }
                let list = results.get();
                if list.is_empty() {
                    return view! {
                        <p class="text-center py-12 text-base-content/60">"No organizations match your search."</p>
                    }
                    .into_any();
                }
                view! {
                    <p class="text-sm text-base-content/60">{format!("{} results", total.get())}</p>
                    <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                        {list.into_iter().map(|organization| view! {
                            <OrganizationCard organization=organization />
                        }).collect_view()}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
