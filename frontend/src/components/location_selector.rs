//! 位置筛选下拉框

use crate::components::icons;
use crate::store::{use_api, use_store};
use crate::web::WindowEventBus;
use charity_directory::location_filter::{clear_location, load_available_states, select_state};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LocationSelector() -> impl IntoView {
    let api = use_api();
    let store = use_store();

    spawn_local(async move {
        load_available_states(&api, &store).await;
    });

    let selected = move || {
        store.select(|s| {
            s.selected_location
                .as_ref()
                .map(|f| f.state_province.clone())
        })
    };
    let states = move || store.select(|s| s.available_states.as_ref().clone());

    let on_change = move |ev| {
        let value = event_target_value(&ev);
        if value.is_empty() {
            clear_location(&store, &WindowEventBus);
            return;
        }
        let summary = store.select_untracked(|s| {
            s.available_states
                .iter()
                .find(|st| st.state_province == value)
                .cloned()
        });
        if let Some(summary) = summary {
            select_state(&store, &WindowEventBus, &summary);
        }
    };

    view! {
        <label class="flex items-center gap-1">
            <icons::MapPin />
            <select
                class="select select-bordered select-sm"
                aria-label="Filter by state"
                on:change=on_change
                prop:value=move || selected().unwrap_or_default()
            >
                <option value="">"All Locations"</option>
                {move || {
                    states()
                        .into_iter()
                        .map(|st| {
                            let label = format!("{} ({})", st.state_province, st.organization_count);
                            view! { <option value=st.state_province>{label}</option> }
                        })
                        .collect_view()
                }}
            </select>
        </label>
    }
}
