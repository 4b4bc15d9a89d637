use crate::pages::organizations::{CategoryFilter, OrganizationGrid};
use crate::store::use_api;
use crate::web::router::Link;
use charity_directory::services::advertisement::PLACEMENT_HOME;
use charity_shared::{Advertisement, Category};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn HomePage() -> impl IntoView {
    let api = use_api();
    let category = RwSignal::new(Category::ALL_ID);
    let ads = RwSignal::new(Vec::<Advertisement>::new());

    spawn_local(async move {
        ads.set(api.advertisements().for_placement(PLACEMENT_HOME).await.data);
    });

    view! {
        <div class="hero bg-base-200 py-16">
            <div class="hero-content text-center">
                <div class="max-w-2xl">
                    <h1 class="text-5xl font-bold">"See the Unseen"</h1>
                    <p class="py-6 text-lg">
                        "Discover verified charities working in your community and find the cause that moves you."
                    </p>
                    <div class="flex gap-2 justify-center">
                        <Link to="/organizations" class="btn btn-primary">"Browse Charities"</Link>
                        <Link to="/list-your-charity" class="btn btn-outline">"List Your Charity"</Link>
                    </div>
                </div>
            </div>
        </div>

        <div class="max-w-7xl mx-auto p-4 md:p-8 flex flex-col lg:flex-row gap-8">
            <div class="flex-1 flex flex-col gap-6">
                <h2 class="text-2xl font-bold">"Featured Organizations"</h2>
                <CategoryFilter selected=category />
                <OrganizationGrid category=category />
            </div>
            {move || {
                let list = ads.get();
                (!list.is_empty()).then(|| view! {
                    <aside class="lg:w-64 flex flex-col gap-4">
                        {list.into_iter().map(|ad| {
                            let href = ad.link_url.unwrap_or_else(|| "#".to_string());
                            let alt = ad.title.clone();
                            let image = ad.image_url.map(|src| view! { <figure><img src=src alt=alt /></figure> });
                            view! {
                                <a href=href target="_blank" rel="noopener" class="card bg-base-100 shadow">
                                    {image}
                                    <div class="card-body p-4 text-sm">{ad.title}</div>
                                </a>
                            }
                        }).collect_view()}
                    </aside>
                })
            }}
        </div>
    }
}
