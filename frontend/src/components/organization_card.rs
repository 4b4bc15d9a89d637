use crate::web::router::Link;
use charity_shared::Organization;
use leptos::prelude::*;

#[component]
pub fn OrganizationCard(organization: Organization) -> impl IntoView {
    let href = format!("/organizations/{}", organization.slug());
    let location = organization
        .location
        .as_ref()
        .map(|l| l.short_label())
        .filter(|l| !l.is_empty());
    let summary = organization
        .mission
        .clone()
        .or_else(|| organization.description.clone())
        .unwrap_or_default();

    view! {
        <div class="card bg-base-100 shadow-md hover:shadow-xl transition-shadow">
            <div class="card-body">
                <h3 class="card-title">
                    {organization.name.clone()}
                    {organization.is_verified.then(|| view! {
                        <span class="badge badge-success badge-sm">"Verified"</span>
                    })}
                </h3>
                {organization.category.clone().map(|c| view! {
                    <span class="badge badge-outline">{c}</span>
                })}
                <p class="text-sm text-base-content/70 line-clamp-3">{summary}</p>
                {location.map(|l| view! { <p class="text-xs text-base-content/50">{l}</p> })}
                <div class="card-actions justify-end">
                    <Link to=href class="btn btn-primary btn-sm">"View Details"</Link>
                </div>
            </div>
        </div>
    }
}
