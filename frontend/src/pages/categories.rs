//! 分类列表与分类详情

use crate::components::organization_card::OrganizationCard;
use crate::store::{use_api, use_store};
use crate::web::router::Link;
use charity_shared::Category;
use charity_shared::protocol::CategoryDetailResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;

const CATEGORY_PAGE_SIZE: u32 = 24;

fn category_slug(category: &Category) -> String {
    category
        .slug
        .clone()
        .unwrap_or_else(|| category.name.to_lowercase().replace(' ', "-"))
}

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let store = use_store();
    let categories = move || store.select(|s| s.categories.as_ref().clone());

    view! {
        <div class="max-w-7xl mx-auto p-4 md:p-8">
            <h1 class="text-3xl font-bold mb-6">"Categories"</h1>
            <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-4">
                {move || categories().into_iter().map(|category| {
                    let href = format!("/categories/{}", category_slug(&category));
                    let accent = category
                        .color_code
                        .clone()
                        .map(|c| format!("border-left: 4px solid {}", c))
                        .unwrap_or_default();
                    view! {
                        <Link to=href class="card bg-base-100 shadow hover:shadow-lg transition-shadow">
                            <div class="card-body" style=accent>
                                <h2 class="card-title">{category.name}</h2>
                                <p class="text-sm text-base-content/60">
                                    {format!("{} organizations", category.organization_count)}
                                </p>
                            </div>
                        </Link>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn CategoryDetailPage(slug: String) -> impl IntoView {
    let api = use_api();
    let detail = RwSignal::new(CategoryDetailResponse::default());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    spawn_local(async move {
        let res = api.categories().by_slug(&slug, 1, CATEGORY_PAGE_SIZE).await;
        if !res.success {
            error.set(res.message);
        }
        detail.set(res.data);
        loading.set(false);
    });

    view! {
        <div class="max-w-7xl mx-auto p-4 md:p-8 flex flex-col gap-6">
            {move || {
                if loading.get() {
                    return view! {
                        <div class="flex justify-center py-12">
                            <span class="loading loading-spinner loading-lg text-primary"></span>
                        </div>
                    }
                    .into_any();
                }
                let CategoryDetailResponse { category, organizations, .. } = detail.get();
                let Some(category) = category else {
                    return view! {
                        <div class="text-center py-12 flex flex-col gap-4 items-center">
                            <h1 class="text-2xl font-bold">"Category not found"</h1>
                            {error.get().map(|m| view! { <p class="text-base-content/70">{m}</p> })}
                            <Link to="/categories" class="btn btn-primary">"All categories"</Link>
                        </div>
                    }
                    .into_any();
                };
                view! {
                    <div>
                        <Link to="/categories" class="link link-hover text-sm">"← All categories"</Link>
                        <h1 class="text-3xl font-bold mt-2">{category.name}</h1>
                    </div>
                    {if organizations.is_empty() {
                        view! { <p class="text-base-content/60">"No organizations in this category yet."</p> }.into_any()
                    } else {
                        view! {
                            <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                                {organizations.into_iter().map(|organization| view! {
                                    <OrganizationCard organization=organization />
                                }).collect_view()}
                            </div>
                        }
                        .into_any()
                    }}
                }
                .into_any()
            }}
        </div>
    }
}
