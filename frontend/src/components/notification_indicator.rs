use crate::auth::use_unread_polling;
use crate::components::icons;
use crate::store::use_store;
use crate::web::router::Link;
use charity_directory::services::notification::badge_label;
use leptos::prelude::*;

/// 导航栏的未读通知角标（超过 99 显示 "99+"）
#[component]
pub fn NotificationIndicator() -> impl IntoView {
    let store = use_store();
    use_unread_polling();

    let label = move || badge_label(store.select(|s| s.notifications.unread_count));

    view! {
        <Link to="/notifications" class="btn btn-ghost btn-circle">
            <div class="indicator">
                <icons::Bell />
                {move || label().map(|text| view! {
                    <span class="badge badge-sm badge-error indicator-item">{text}</span>
                })}
            </div>
        </Link>
    }
}
